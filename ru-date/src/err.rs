use std::fmt;

/// Ошибки преобразования дат
#[derive(Debug,Clone,PartialEq,Eq)]
pub enum DateErr {
    /// Текст не соответствует формату
    FormatMismatch {
        format: String,
        text: String,
    },

    /// Значение `U` не переводится в календарную дату
    EpochOutOfRange {
        value: String,
    },

    /// Не существующий месяц для календаря
    InvalidCalendarMonth {
        year: i32,
        month: u32,
    },

    /// Не удалось построить regex по формату
    Pattern {
        message: String,
    },
}

impl fmt::Display for DateErr {
    fn fmt( &self, f: &mut fmt::Formatter<'_> ) -> fmt::Result {
        match self {
            DateErr::FormatMismatch { format, text } =>
                write!(f, "date {text:?} doesn't match format {format:?}"),
            DateErr::EpochOutOfRange { value } =>
                write!(f, "epoch seconds {value} out of range"),
            DateErr::InvalidCalendarMonth { year, month } =>
                write!(f, "no such month {year}-{month}"),
            DateErr::Pattern { message } =>
                write!(f, "can't build date pattern: {message}"),
        }
    }
}

impl std::error::Error for DateErr {}

impl From<regex::Error> for DateErr {
    fn from(value: regex::Error) -> Self {
        Self::Pattern { message: value.to_string() }
    }
}
