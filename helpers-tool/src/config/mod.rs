mod app;
pub use app::*;

mod date;
pub use date::*;

/// Обработка параметров коммандой строки
mod cmd_line;
pub use cmd_line::*;
