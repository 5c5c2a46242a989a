use client_helpers::validate_ip;
use text_helpers::plural_form;

/// `22 рубля`
pub fn plural( n: i64, one: &str, few: &str, many: &str ) -> String {
    format!("{n} {}", plural_form(n, one, few, many))
}

pub fn translit( text: &str, extra: &[(&str,&str)] ) -> String {
    text_helpers::translit(text, extra)
}

/// `8.8.8.8 valid`, `10.0.0.1 invalid`
pub fn check_ip( address: &str ) -> String {
    let state = if validate_ip(address) { "valid" } else { "invalid" };
    format!("{address} {state}")
}

#[test]
fn plural_test() {
    assert_eq!( plural(1, "рубль", "рубля", "рублей"), "1 рубль" );
    assert_eq!( plural(12, "рубль", "рубля", "рублей"), "12 рублей" );
    assert_eq!( plural(-3, "рубль", "рубля", "рублей"), "-3 рубля" );
}

#[test]
fn check_ip_test() {
    assert_eq!( check_ip("8.8.8.8"), "8.8.8.8 valid" );
    assert_eq!( check_ip("192.168.1.1"), "192.168.1.1 invalid" );
    assert_eq!( check_ip("unknown"), "unknown invalid" );
}
