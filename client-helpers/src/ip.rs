use std::net::{IpAddr, Ipv4Addr};

/// Диапазоны IPv4 адресов, которые не могут быть адресом клиента
///
/// Границы включительно
const RESERVED_V4: [(u32,u32); 8] = [
    (0,          50331647),   // 0.0.0.0       2.255.255.255
    (167772160,  184549375),  // 10.0.0.0      10.255.255.255
    (2130706432, 2147483647), // 127.0.0.0     127.255.255.255
    (2851995648, 2852061183), // 169.254.0.0   169.254.255.255
    (2886729728, 2887778303), // 172.16.0.0    172.31.255.255
    (3221225984, 3221226239), // 192.0.2.0     192.0.2.255
    (3232235520, 3232301055), // 192.168.0.0   192.168.255.255
    (4294967040, u32::MAX),   // 255.255.255.0 255.255.255.255
];

/// Проверка IPv4 адреса на попадание в зарезервированные диапазоны
pub fn is_reserved_v4( ip: Ipv4Addr ) -> bool {
    let ip = u32::from(ip);
    RESERVED_V4.iter().any(|(from,to)| ip >= *from && ip <= *to)
}

/// Проверка адреса клиента
///
/// Не валидны:
/// - строка `unknown` (в любом регистре)
/// - строка не являющаяся ip адресом
/// - IPv4 из частных/служебных диапазонов см [is_reserved_v4]
///
/// IPv6 адреса считаются валидными
pub fn validate_ip( ip: &str ) -> bool {
    if ip.eq_ignore_ascii_case("unknown") {
        return false;
    }

    match ip.parse::<IpAddr>() {
        Ok(IpAddr::V4(ip4)) => !is_reserved_v4(ip4),
        Ok(IpAddr::V6(_)) => true,
        Err(_) => {
            log::trace!("not an ip address: {ip:?}");
            false
        }
    }
}

#[test]
fn validate_ip_test() {
    assert!( validate_ip("8.8.8.8") );
    assert!( validate_ip("93.184.216.34") );
    assert!( validate_ip("3.0.0.0") );
    assert!( validate_ip("224.0.0.1") );
    assert!( validate_ip("2001:db8::1") );

    assert!( !validate_ip("unknown") );
    assert!( !validate_ip("UnKnown") );
    assert!( !validate_ip("not an ip") );
    assert!( !validate_ip("") );
}

#[test]
fn reserved_ranges_test() {
    for ip in [
        "0.0.0.0", "2.255.255.255",
        "10.0.0.1", "10.255.255.255",
        "127.0.0.1",
        "169.254.1.1",
        "172.16.0.1", "172.31.255.255",
        "192.0.2.10",
        "192.168.1.1",
        "255.255.255.0", "255.255.255.255",
    ] {
        assert!( !validate_ip(ip), "{ip} must be rejected" );
    }

    for ip in ["172.15.255.255", "172.32.0.0", "192.0.3.1", "169.255.0.1", "11.0.0.0"] {
        assert!( validate_ip(ip), "{ip} must be accepted" );
    }
}
