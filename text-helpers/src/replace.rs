/// Замена подстрок за один проход
///
/// В каждой позиции строки пробуются ключи от самого длинного к самому короткому,
/// заменённый текст повторно не просматривается.
/// Пустые ключи игнорируются.
///
/// Пример
///
///     use text_helpers::strtr;
///     assert_eq!( strtr("Hi all", &[("Hi","Hello"),("Hello","Hi")]), "Hello all" );
pub fn strtr<K,V>( text: &str, pairs: &[(K,V)] ) -> String
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut keys: Vec<(&str,&str)> = pairs.iter()
        .map(|(k,v)| (k.as_ref(), v.as_ref()))
        .filter(|(k,_)| !k.is_empty())
        .collect();

    // стабильная сортировка: при равной длине последняя пара перекрывает предыдущие
    keys.reverse();
    keys.sort_by(|(a,_),(b,_)| b.len().cmp(&a.len()));

    let mut res = String::with_capacity(text.len());
    let mut rest = text;

    'scan: while let Some(chr) = rest.chars().next() {
        for (key, value) in &keys {
            if rest.starts_with(key) {
                res.push_str(value);
                rest = &rest[key.len()..];
                continue 'scan;
            }
        }
        res.push(chr);
        rest = &rest[chr.len_utf8()..];
    }

    res
}

#[test]
fn strtr_longest_first_test() {
    let pairs = [("Мес","Янв"), ("Месяца","Января"), ("Месяц","Январь")];
    assert_eq!( strtr("Месяца Месяц Мес", &pairs), "Января Январь Янв" );
}

#[test]
fn strtr_no_rescan_test() {
    assert_eq!( strtr("ab", &[("a","b"),("b","a")]), "ba" );
    assert_eq!( strtr("", &[("a","b")]), "" );
    assert_eq!( strtr("abc", &[("","x")]), "abc" );
}

#[test]
fn strtr_duplicate_key_test() {
    assert_eq!( strtr("a", &[("a","1"),("a","2")]), "2" );
}
