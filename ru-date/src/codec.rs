use chrono::{Datelike, NaiveDateTime, Timelike};
use lazy_regex::{regex, Lazy};
use regex::Regex;

use crate::{Clock, CenturyRule, DateErr, DateRecord, DateTimeZone, SystemClock, Token};

static EPOCH_DIGITS: &Lazy<Regex> = regex!(r"^[0-9]+$");

/// Формат, состоящий только из секунд от начала эпохи
pub const EPOCH_FORMAT: &str = "U";

/// Разобранная строка формата
#[derive(Debug,Clone,PartialEq)]
pub(crate) struct DateFormat {
    pub(crate) format: Vec<DateFormatItem>
}

#[derive(Debug,Clone,PartialEq)]
pub(crate) enum DateFormatItem {
    Value(Token),
    PlainText(String)
}

impl DateFormat {
    fn scan( source: &str, recognize: fn(char) -> Option<Token> ) -> DateFormat {
        let mut format = Vec::<DateFormatItem>::new();
        let mut buff = String::new();

        for chr in source.chars() {
            match recognize(chr) {
                Some(token) => {
                    if !buff.is_empty() {
                        format.push(DateFormatItem::PlainText(buff.clone()));
                        buff.clear();
                    }
                    format.push(DateFormatItem::Value(token));
                }
                None => buff.push(chr)
            }
        }
        if !buff.is_empty() {
            format.push(DateFormatItem::PlainText(buff));
        }

        DateFormat { format }
    }

    /// Формат для разбора текста
    pub(crate) fn for_parse( source: &str ) -> DateFormat {
        Self::scan(source, Token::of_parse)
    }

    /// Формат для вывода
    pub(crate) fn for_render( source: &str ) -> DateFormat {
        Self::scan(source, Token::of_render)
    }

    pub(crate) fn tokens( &self ) -> impl Iterator<Item = Token> + '_ {
        self.format.iter().filter_map(|itm| match itm {
            DateFormatItem::Value(token) => Some(*token),
            DateFormatItem::PlainText(_) => None
        })
    }
}

/// Преобразователь дат
///
/// Поля [DateRecord] интерпретируются в часовом поясе `zone`,
/// текущее время (для [DateCodec::convert_to_text] и [DateCodec::calendar]) берется из `clock`.
///
/// Пример
///
///     use ru_date::*;
///
///     let codec = DateCodec::new(DateTimeZone::Utc, FixedClock(0));
///     let text = codec.convert("Y-m-d", "j Месяца Y, деньнедели", "2024-03-08").unwrap();
///     assert_eq!( text, "8 Марта 2024, пятница" );
#[derive(Debug,Clone)]
pub struct DateCodec<C: Clock = SystemClock> {
    pub(crate) zone: DateTimeZone,
    pub(crate) century: CenturyRule,
    pub(crate) clock: C,
}

impl Default for DateCodec<SystemClock> {
    fn default() -> Self {
        Self { zone: DateTimeZone::Local, century: CenturyRule::default(), clock: SystemClock }
    }
}

impl<C: Clock> DateCodec<C> {
    pub fn new( zone: DateTimeZone, clock: C ) -> Self {
        Self { zone, century: CenturyRule::default(), clock }
    }

    pub fn with_century( self, century: CenturyRule ) -> Self {
        Self { century, ..self }
    }

    pub fn zone( &self ) -> DateTimeZone {
        self.zone
    }

    pub fn century( &self ) -> CenturyRule {
        self.century
    }

    /// Текущее локальное время
    pub fn now( &self ) -> Option<NaiveDateTime> {
        self.zone.datetime_of(self.clock.now())
    }

    /// Перевод даты из формата `format_from` в формат `format_to`
    pub fn convert( &self, format_from: &str, format_to: &str, text: &str ) -> Result<String, DateErr> {
        let date = self.parse(format_from, text)?;
        Ok(self.format(format_to, &date))
    }

    /// Секунды от начала эпохи для текста в формате `format`
    ///
    /// Для формата `U` текст берется как есть, без ограничения диапазона лет
    pub(crate) fn epoch_from( &self, format: &str, text: &str ) -> Result<i64, DateErr> {
        if format != EPOCH_FORMAT {
            let date = self.parse(format, text)?;
            return Ok(self.epoch_of(&date));
        }

        if !EPOCH_DIGITS.is_match(text) {
            return Err(DateErr::FormatMismatch { format: format.to_string(), text: text.to_string() });
        }
        text.parse::<i64>().map_err(|_| DateErr::EpochOutOfRange { value: text.to_string() })
    }

    /// Дата относительно текущего дня: `Завтра, 10:20`, `Сегодня, 10:20`, `Вчера, 10:20`
    ///
    /// Для остальных дат (и для соседних дней другого года) - вывод в формате `format_to`
    pub fn convert_to_text( &self, format_from: &str, format_to: &str, text: &str ) -> Result<String, DateErr> {
        let epoch = self.epoch_from(format_from, text)?;
        let date = self.zone.datetime_of(epoch)
            .ok_or_else(|| DateErr::EpochOutOfRange { value: epoch.to_string() })?;

        if let Some(now) = self.now() {
            if date.year() == now.year() {
                let day = date.ordinal0() as i64;
                let today = now.ordinal0() as i64;

                let label = if day == today + 1 {
                    Some("Завтра")
                } else if day == today {
                    Some("Сегодня")
                } else if day == today - 1 {
                    Some("Вчера")
                } else {
                    None
                };

                if let Some(label) = label {
                    return Ok(format!("{label}, {:02}:{:02}", date.hour(), date.minute()));
                }
            }
        }

        Ok(self.format(format_to, &DateRecord::from_naive(&date)))
    }
}

#[cfg(test)]
pub(crate) fn utc_codec( now: i64 ) -> DateCodec<crate::FixedClock> {
    DateCodec::new(DateTimeZone::Utc, crate::FixedClock(now))
}

#[test]
fn date_format_scan_test() {
    let df = DateFormat::for_parse("d.m.Y H:i");
    assert_eq!( df, DateFormat { format: vec![
        DateFormatItem::Value(Token::Date),
        DateFormatItem::PlainText(".".to_string()),
        DateFormatItem::Value(Token::Month),
        DateFormatItem::PlainText(".".to_string()),
        DateFormatItem::Value(Token::Year),
        DateFormatItem::PlainText(" ".to_string()),
        DateFormatItem::Value(Token::Hour),
        DateFormatItem::PlainText(":".to_string()),
        DateFormatItem::Value(Token::Minute),
    ]});

    let df = DateFormat::for_parse("G, Мес");
    assert_eq!( df, DateFormat { format: vec![ DateFormatItem::PlainText("G, Мес".to_string()) ]});

    let df = DateFormat::for_render("G:i");
    assert_eq!( df.tokens().collect::<Vec<_>>(), vec![Token::Hour24, Token::Minute] );
}

#[test]
fn convert_test() {
    let codec = utc_codec(0);
    assert_eq!( codec.convert("d.m.Y", "Y-m-d", "08.03.2024").unwrap(), "2024-03-08" );
    assert_eq!( codec.convert("Y-m-d H:i:s", "U", "2024-06-15 12:00:00").unwrap(), "1718452800" );
    assert_eq!( codec.convert("U", "d Месяца Y, H:i", "1718452800").unwrap(), "15 Июня 2024, 12:00" );
    assert!( matches!( codec.convert("d.m.Y", "Y", "8 марта"), Err(DateErr::FormatMismatch { .. }) ) );
}

#[test]
fn convert_to_text_test() {
    // 2024-06-15 10:00:00 UTC
    let now = 1718445600;
    let codec = utc_codec(now);

    let tomorrow = (now + 86400 + 3600 * 5 + 60 * 7).to_string();
    assert_eq!( codec.convert_to_text("U", "d.m.Y", &tomorrow).unwrap(), "Завтра, 15:07" );

    assert_eq!( codec.convert_to_text("Y-m-d H:i", "d.m.Y", "2024-06-15 08:30").unwrap(), "Сегодня, 08:30" );
    assert_eq!( codec.convert_to_text("Y-m-d H:i", "d.m.Y", "2024-06-14 23:59").unwrap(), "Вчера, 23:59" );
    assert_eq!( codec.convert_to_text("Y-m-d H:i", "d.m.Y", "2024-06-17 10:00").unwrap(), "17.06.2024" );
    assert_eq!( codec.convert_to_text("Y-m-d H:i", "j Месяца", "2023-06-16 10:00").unwrap(), "16 Июня" );
}

#[test]
fn convert_to_text_year_boundary_test() {
    // 2024-12-31 12:00:00 UTC
    let codec = utc_codec(1735646400);
    assert_eq!( codec.convert_to_text("Y-m-d H:i", "d.m.Y", "2025-01-01 09:00").unwrap(), "01.01.2025" );
    assert_eq!( codec.convert_to_text("Y-m-d H:i", "d.m.Y", "2024-12-30 09:00").unwrap(), "Вчера, 09:00" );
}

#[test]
fn convert_to_text_mismatch_test() {
    let codec = utc_codec(0);
    assert!( matches!( codec.convert_to_text("U", "d.m.Y", "-5"), Err(DateErr::FormatMismatch { .. }) ) );
    assert!( matches!(
        codec.convert_to_text("U", "d.m.Y", "99999999999999999999999"),
        Err(DateErr::EpochOutOfRange { .. })
    ));
}
