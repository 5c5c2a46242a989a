//! Сведения о http клиенте
//!
//! - проверка ip адреса клиента ([validate_ip])
//! - определение реального ip за прокси ([real_ip])
//! - проверка user agent ([check_user_agent])

mod ip;
pub use ip::*;

mod headers;
pub use headers::*;

mod agent;
pub use agent::*;
