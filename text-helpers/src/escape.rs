use lazy_regex::{regex, Lazy};
use regex::Regex;

/// Уже закодированная html сущность: `&amp;` `&#039;` `&#x1F;`
static ENTITY: &Lazy<Regex> = regex!(r"^&(?:[A-Za-z][A-Za-z0-9]*|#[0-9]+|#[xX][0-9A-Fa-f]+);");

/// Вид экранирования см [escape]
#[derive(Debug,Clone,Copy,PartialEq,Eq,Default)]
pub enum EscapeKind {
    /// html спец символы
    #[default]
    Html,
    /// html спец символы + `\` для вставки в js строку
    Js,
    /// html спец символы + `<br />` перед переводами строк
    Text,
}

impl EscapeKind {
    /// Распознает вид по имени (`html`, `js`, `text`) без учета регистра
    pub fn parse( name: &str ) -> Option<EscapeKind> {
        match name.to_lowercase().as_str() {
            "html" => Some(EscapeKind::Html),
            "js" => Some(EscapeKind::Js),
            "text" => Some(EscapeKind::Text),
            _ => None
        }
    }
}

/// Экранирование строки для вывода
pub fn escape( text: &str, kind: EscapeKind ) -> String {
    let html = html_special_chars(text);
    match kind {
        EscapeKind::Html => html,
        EscapeKind::Js => add_slashes(&html),
        EscapeKind::Text => nl2br(&html),
    }
}

/// `& < > " '` в html сущности, существующие сущности не кодируются повторно
fn html_special_chars( text: &str ) -> String {
    let mut res = String::with_capacity(text.len());
    for (idx, chr) in text.char_indices() {
        match chr {
            '&' => {
                if ENTITY.is_match(&text[idx..]) {
                    res.push('&')
                } else {
                    res.push_str("&amp;")
                }
            }
            '<' => res.push_str("&lt;"),
            '>' => res.push_str("&gt;"),
            '"' => res.push_str("&quot;"),
            '\'' => res.push_str("&#039;"),
            _ => res.push(chr)
        }
    }
    res
}

fn add_slashes( text: &str ) -> String {
    let mut res = String::with_capacity(text.len());
    for chr in text.chars() {
        match chr {
            '\\' | '\'' | '"' => {
                res.push('\\');
                res.push(chr);
            }
            '\0' => res.push_str("\\0"),
            _ => res.push(chr)
        }
    }
    res
}

fn nl2br( text: &str ) -> String {
    let mut res = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(chr) = chars.next() {
        match chr {
            '\r' | '\n' => {
                res.push_str("<br />");
                res.push(chr);
                let pair = if chr == '\r' { '\n' } else { '\r' };
                if let Some(next) = chars.next_if_eq(&pair) {
                    res.push(next);
                }
            }
            _ => res.push(chr)
        }
    }
    res
}

#[test]
fn escape_html_test() {
    assert_eq!( escape("<a href='x'>\"T&C\"</a>", EscapeKind::Html),
        "&lt;a href=&#039;x&#039;&gt;&quot;T&amp;C&quot;&lt;/a&gt;" );
    assert_eq!( escape("a &amp; b &#039; &#x41; &", EscapeKind::Html), "a &amp; b &#039; &#x41; &amp;" );
}

#[test]
fn escape_js_test() {
    assert_eq!( escape("path\\to 'x'", EscapeKind::Js), "path\\\\to &#039;x&#039;" );
    assert_eq!( escape("a\0b", EscapeKind::Js), "a\\0b" );
}

#[test]
fn escape_text_test() {
    assert_eq!( escape("a\nb\r\nc", EscapeKind::Text), "a<br />\nb<br />\r\nc" );
    assert_eq!( escape("<b>\n", EscapeKind::Text), "&lt;b&gt;<br />\n" );
}

#[test]
fn escape_kind_parse_test() {
    assert_eq!( EscapeKind::parse("JS"), Some(EscapeKind::Js) );
    assert_eq!( EscapeKind::parse("xml"), None );
}
