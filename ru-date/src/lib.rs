//! Преобразование дат между текстовыми форматами (в стиле php `date()`)
//! с поддержкой русских названий месяцев и дней недели
//!
//! Основные операции см [DateCodec]:
//! - [DateCodec::parse] - разбор текста по формату в [DateRecord]
//! - [DateCodec::format] - вывод [DateRecord] по формату
//! - [DateCodec::convert] - перевод из одного формата в другой
//! - [DateCodec::convert_to_text] - `Сегодня, 10:20` / `Вчера, ...` / `Завтра, ...`
//! - [DateCodec::date_diff] - разница дат словами: `1 час 1 минуту 40 секунд`

mod model;
pub use model::*;

mod token;
pub use token::*;

mod names;
pub use names::*;

mod err;
pub use err::*;

mod clock;
pub use clock::*;

mod codec;
pub use codec::*;

mod parse;

mod format;

mod diff;
pub use diff::*;

mod calendar;
pub use calendar::*;

pub use text_helpers::plural_form;
