use regex::RegexBuilder;

/// Проверка вхождения строки в user agent без учета регистра
///
/// Для отсутствующего или пустого user agent - `false`
pub fn check_user_agent( needle: &str, user_agent: Option<&str> ) -> bool {
    let user_agent = match user_agent {
        Some(ua) if !ua.is_empty() => ua,
        _ => return false
    };

    match RegexBuilder::new(&regex::escape(needle)).case_insensitive(true).build() {
        Ok(re) => re.is_match(user_agent),
        Err(err) => {
            log::warn!("can't build user agent matcher for {needle:?}: {err}");
            false
        }
    }
}

#[test]
fn check_user_agent_test() {
    let ua = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko)";
    assert!( check_user_agent("windows", Some(ua)) );
    assert!( check_user_agent("(KHTML,", Some(ua)) );
    assert!( !check_user_agent("Android", Some(ua)) );
    assert!( !check_user_agent("x", None) );
    assert!( !check_user_agent("x", Some("")) );
}
