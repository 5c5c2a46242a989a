/// Форма слова согласованная с числом (русская грамматика)
///
/// # Аргументы
/// - n - число
/// - one - форма для 1, 21, 101 (_минуту_)
/// - few - форма для 2..4, 22..24 (_минуты_)
/// - many - форма для 0, 5..20, 11..19 (_минут_)
///
/// Числа 11..19 всегда получают форму `many`, независимо от последней цифры.
pub fn plural_form<'a>( n: i64, one: &'a str, few: &'a str, many: &'a str ) -> &'a str {
    let n = (n.unsigned_abs() % 100) as u8;
    let n1 = n % 10;

    if n > 10 && n < 20 {
        return many;
    }
    if n1 > 1 && n1 < 5 {
        return few;
    }
    if n1 == 1 {
        return one;
    }
    many
}

#[test]
fn plural_form_test() {
    assert_eq!( plural_form(1, "a", "b", "c"), "a" );
    assert_eq!( plural_form(2, "a", "b", "c"), "b" );
    assert_eq!( plural_form(5, "a", "b", "c"), "c" );
    assert_eq!( plural_form(11, "a", "b", "c"), "c" );
    assert_eq!( plural_form(21, "a", "b", "c"), "a" );
    assert_eq!( plural_form(25, "a", "b", "c"), "c" );
    assert_eq!( plural_form(24, "a", "b", "c"), "b" );
    assert_eq!( plural_form(0, "a", "b", "c"), "c" );
}

#[test]
fn plural_form_teen_test() {
    for n in 11..20 {
        assert_eq!( plural_form(n, "минуту", "минуты", "минут"), "минут" );
        assert_eq!( plural_form(n + 100, "минуту", "минуты", "минут"), "минут" );
    }
    assert_eq!( plural_form(101, "минуту", "минуты", "минут"), "минуту" );
    assert_eq!( plural_form(112, "минуту", "минуты", "минут"), "минут" );
    assert_eq!( plural_form(-3, "минуту", "минуты", "минут"), "минуты" );
    assert_eq!( plural_form(i64::MIN, "a", "b", "c"), "c" );
}
