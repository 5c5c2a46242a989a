use std::collections::HashMap;

use crate::validate_ip;

/// Источник заголовков запроса (в cgi именовании: `HTTP_X_FORWARDED_FOR`, `REMOTE_ADDR`)
pub trait HeaderSource {
    fn header( &self, name: &str ) -> Option<&str>;
}

impl HeaderSource for HashMap<String,String> {
    fn header( &self, name: &str ) -> Option<&str> {
        self.get(name).map(|s| s.as_str())
    }
}

impl HeaderSource for HashMap<&str,&str> {
    fn header( &self, name: &str ) -> Option<&str> {
        self.get(name).copied()
    }
}

/// Заголовки в порядке проверки; `HTTP_X_FORWARDED_FOR` содержит список через запятую
const IP_HEADERS: [&str; 7] = [
    "HTTP_CLIENT_IP",
    "HTTP_X_FORWARDED_FOR",
    "HTTP_X_FORWARDED",
    "HTTP_X_CLUSTER_CLIENT_IP",
    "HTTP_FORWARDED_FOR",
    "HTTP_FORWARDED",
    "REMOTE_ADDR",
];

/// Реальный ip адрес клиента
///
/// Возвращает первый валидный ([validate_ip]) адрес из заголовков прокси,
/// затем из `REMOTE_ADDR`; `None` если валидного адреса нет
pub fn real_ip<H: HeaderSource + ?Sized>( headers: &H ) -> Option<String> {
    for name in IP_HEADERS {
        let value = match headers.header(name) {
            Some(value) if !value.is_empty() => value,
            _ => continue
        };

        if name == "HTTP_X_FORWARDED_FOR" {
            if let Some(ip) = value.split(',').map(str::trim).find(|ip| validate_ip(ip)) {
                log::debug!("client ip {ip} from {name}");
                return Some(ip.to_string());
            }
        } else if validate_ip(value) {
            log::debug!("client ip {value} from {name}");
            return Some(value.to_string());
        }
    }
    None
}

#[test]
fn real_ip_forwarded_test() {
    let _ = env_logger::builder().filter_level(log::LevelFilter::max()).is_test(true).try_init();

    let headers: HashMap<&str,&str> = [
        ("HTTP_X_FORWARDED_FOR", "10.0.0.1, unknown, 93.184.216.34, 8.8.8.8"),
        ("REMOTE_ADDR", "8.8.4.4"),
    ].into_iter().collect();
    assert_eq!( real_ip(&headers), Some("93.184.216.34".to_string()) );
}

#[test]
fn real_ip_order_test() {
    let headers: HashMap<String,String> = [
        ("HTTP_CLIENT_IP".to_string(), "192.168.0.5".to_string()),
        ("HTTP_FORWARDED".to_string(), "5.6.7.8".to_string()),
        ("REMOTE_ADDR".to_string(), "8.8.4.4".to_string()),
    ].into_iter().collect();
    assert_eq!( real_ip(&headers), Some("5.6.7.8".to_string()) );
}

#[test]
fn real_ip_none_test() {
    let headers: HashMap<&str,&str> = [("REMOTE_ADDR", "127.0.0.1")].into_iter().collect();
    assert_eq!( real_ip(&headers), None );

    let headers: HashMap<&str,&str> = [("HTTP_CLIENT_IP", ""), ("REMOTE_ADDR", "8.8.8.8")].into_iter().collect();
    assert_eq!( real_ip(&headers), Some("8.8.8.8".to_string()) );
}
