use ru_date::{Clock, DateCodec};

use crate::config::AppConfig;
use crate::err::ToolErr;

mod date;
pub use date::*;

mod text;
pub use text::*;

/// Действие коммандной строки
#[derive(Debug,Clone,PartialEq,Eq)]
pub enum Action {
    /// Перевод даты из формата в формат
    Convert {
        from: String,
        to: String,
        text: String,
    },
    /// Дата относительно текущего дня: `Сегодня, 10:20`
    Text {
        from: String,
        to: String,
        text: String,
    },
    /// Разница дат словами
    Diff {
        date1: String,
        date2: String,
        format: Option<String>,
    },
    /// Разбор даты в json
    Parse {
        format: String,
        text: String,
    },
    Plural {
        n: i64,
        one: String,
        few: String,
        many: String,
    },
    Calendar {
        year: i32,
        month: u32,
    },
    Translit {
        text: String,
    },
    /// Проверка ip адреса
    Ip {
        address: String,
    },
}

impl Action {
    /// Выполнение действия, результат - текст для вывода
    pub fn execute<C: Clock>( &self, codec: &DateCodec<C>, conf: &AppConfig ) -> Result<String, ToolErr> {
        match self {
            Action::Convert { from, to, text } => Ok(codec.convert(from, to, text)?),
            Action::Text { from, to, text } => Ok(codec.convert_to_text(from, to, text)?),
            Action::Diff { date1, date2, format } => {
                let format = format.as_deref().unwrap_or(&conf.date.diff_format);
                date_diff(codec, date1, date2, format, &conf.date.excluded_units()?)
            }
            Action::Parse { format, text } => parse_to_json(codec, format, text),
            Action::Plural { n, one, few, many } => Ok(plural(*n, one, few, many)),
            Action::Calendar { year, month } => calendar_text(*year, *month),
            Action::Translit { text } => Ok(translit(text, &conf.translit_pairs())),
            Action::Ip { address } => Ok(check_ip(address)),
        }
    }
}

#[cfg(test)]
fn utc_codec() -> DateCodec<ru_date::FixedClock> {
    // 2024-06-15 10:00:00 UTC
    DateCodec::new(ru_date::DateTimeZone::Utc, ru_date::FixedClock(1718445600))
}

#[test]
fn execute_date_actions_test() {
    let _ = env_logger::builder().filter_level(log::LevelFilter::max()).is_test(true).try_init();

    let codec = utc_codec();
    let conf = AppConfig::default();

    let act = Action::Convert { from: "d.m.Y".into(), to: "d Месяца Y".into(), text: "08.03.2024".into() };
    assert_eq!( act.execute(&codec, &conf), Ok("08 Марта 2024".to_string()) );

    let act = Action::Text { from: "U".into(), to: "d.m.Y".into(), text: "1718359200".into() };
    assert_eq!( act.execute(&codec, &conf), Ok("Вчера, 10:00".to_string()) );

    let act = Action::Diff { date1: "0".into(), date2: "3700".into(), format: None };
    assert_eq!( act.execute(&codec, &conf), Ok("1 час 1 минуту 40 секунд".to_string()) );
}

#[test]
fn execute_diff_excluded_test() {
    let codec = utc_codec();
    let mut conf = AppConfig::default();
    conf.date.diff_excluded = "s".to_string();

    let act = Action::Diff { date1: "01.01.2020".into(), date2: "03.01.2020".into(), format: Some("d.m.Y".into()) };
    assert_eq!( act.execute(&codec, &conf), Ok("2 дня".to_string()) );

    let act = Action::Diff { date1: "0".into(), date2: "3700".into(), format: None };
    assert_eq!( act.execute(&codec, &conf), Ok("1 час 1 минуту".to_string()) );

    conf.date.diff_excluded = "q".to_string();
    assert!( matches!( act.execute(&codec, &conf), Err(ToolErr::Config { .. }) ) );
}

#[test]
fn execute_errors_test() {
    let codec = utc_codec();
    let conf = AppConfig::default();

    let act = Action::Convert { from: "d.m.Y".into(), to: "Y".into(), text: "вчера".into() };
    assert!( matches!( act.execute(&codec, &conf), Err(ToolErr::Date(ru_date::DateErr::FormatMismatch { .. })) ) );
}

#[test]
fn execute_text_actions_test() {
    let codec = utc_codec();
    let mut conf = AppConfig::default();
    conf.translit.insert("ё".to_string(), "yo".to_string());

    let act = Action::Translit { text: "ёж".into() };
    assert_eq!( act.execute(&codec, &conf), Ok("yozh".to_string()) );

    let act = Action::Plural { n: 22, one: "рубль".into(), few: "рубля".into(), many: "рублей".into() };
    assert_eq!( act.execute(&codec, &conf), Ok("22 рубля".to_string()) );
}
