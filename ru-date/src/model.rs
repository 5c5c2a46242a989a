use std::str::FromStr;

use chrono::{Datelike, Duration, FixedOffset, Months, NaiveDate, NaiveDateTime, TimeZone, Timelike};
use serde::{Deserialize, Serialize};

/// Дата-время разложенная на поля
///
/// Все поля всегда заполнены, значения по умолчанию: `1970-01-01 00:00:00`.
/// Поля могут выходить за календарные границы (`month = 13`), при пересчете в
/// секунды такие значения переносятся в следующие разряды
#[derive(Debug,Clone,Copy,PartialEq,Eq,Hash,Serialize,Deserialize)]
pub struct DateRecord {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
}

impl Default for DateRecord {
    fn default() -> Self {
        Self { year: 1970, month: 1, day: 1, hour: 0, minute: 0, second: 0 }
    }
}

impl DateRecord {
    pub fn new( year: i32, month: u32, day: u32, hour: u32, minute: u32, second: u32 ) -> Self {
        Self { year, month, day, hour, minute, second }
    }

    pub(crate) fn from_naive( dt: &NaiveDateTime ) -> Self {
        Self {
            year: dt.year(),
            month: dt.month(),
            day: dt.day(),
            hour: dt.hour(),
            minute: dt.minute(),
            second: dt.second(),
        }
    }

    pub(crate) fn set( &mut self, field: DateField, value: u32 ) {
        match field {
            DateField::Year   => self.year = value as i32,
            DateField::Month  => self.month = value,
            DateField::Day    => self.day = value,
            DateField::Hour   => self.hour = value,
            DateField::Minute => self.minute = value,
            DateField::Second => self.second = value,
        }
    }

    /// Календарная дата с переносом переполненных полей
    ///
    /// `month = 0` - декабрь предыдущего года, `day = 0` - последний день предыдущего месяца,
    /// `hour = 25` - 1 час следующего дня и т.д.
    pub fn to_naive( &self ) -> Option<NaiveDateTime> {
        let start = NaiveDate::from_ymd_opt(self.year, 1, 1)?.and_hms_opt(0, 0, 0)?;
        let start = if self.month >= 1 {
            start.checked_add_months(Months::new(self.month - 1))?
        } else {
            start.checked_sub_months(Months::new(1))?
        };

        let seconds = (self.hour as i64) * 3600 + (self.minute as i64) * 60 + (self.second as i64);
        start
            .checked_add_signed(Duration::days(self.day as i64 - 1))?
            .checked_add_signed(Duration::seconds(seconds))
    }
}

/// Поле [DateRecord]
#[derive(Debug,Clone,Copy,PartialEq,Eq)]
pub enum DateField {
    Year,
    Month,
    Day,
    Hour,
    Minute,
    Second,
}

/// Часовой пояс, в котором интерпретируются поля [DateRecord]
#[derive(Debug,Clone,Copy,PartialEq,Eq,Default)]
pub enum DateTimeZone {
    #[default]
    Local,
    Utc,
    Offset { sign:i8, hours: u8, minutes: u8 }
}

impl DateTimeZone {
    fn fixed_offset( &self ) -> Option<FixedOffset> {
        match self {
            DateTimeZone::Offset { sign, hours, minutes } => {
                let off_sec = (*sign as i32) * ( (*hours as i32)*3600 + (*minutes as i32)*60 );
                FixedOffset::east_opt(off_sec)
            }
            _ => None
        }
    }

    /// Кол-во секунд от начала эпохи для локального времени в этом поясе
    ///
    /// Для неоднозначного времени (перевод часов) берется более раннее
    pub fn epoch_of( &self, dt: &NaiveDateTime ) -> Option<i64> {
        match self {
            DateTimeZone::Local => chrono::Local.from_local_datetime(dt).earliest().map(|d| d.timestamp()),
            DateTimeZone::Utc => Some(chrono::Utc.from_utc_datetime(dt).timestamp()),
            DateTimeZone::Offset { .. } => {
                self.fixed_offset()?.from_local_datetime(dt).single().map(|d| d.timestamp())
            }
        }
    }

    /// Локальное время в этом поясе для секунд от начала эпохи
    pub fn datetime_of( &self, epoch: i64 ) -> Option<NaiveDateTime> {
        match self {
            DateTimeZone::Local => chrono::Local.timestamp_opt(epoch, 0).single().map(|d| d.naive_local()),
            DateTimeZone::Utc => chrono::Utc.timestamp_opt(epoch, 0).single().map(|d| d.naive_utc()),
            DateTimeZone::Offset { .. } => {
                self.fixed_offset()?.timestamp_opt(epoch, 0).single().map(|d| d.naive_local())
            }
        }
    }
}

/// Распознает `local`, `utc`, `+0300`, `-05:30`, `offset+0300`
impl FromStr for DateTimeZone {
    type Err = String;

    fn from_str( source: &str ) -> Result<Self, Self::Err> {
        let source = source.trim();
        match source.to_lowercase().as_str() {
            "local" => return Ok(DateTimeZone::Local),
            "utc" => return Ok(DateTimeZone::Utc),
            _ => {}
        }

        let offset = source.strip_prefix("offset").unwrap_or(source);
        let (sign, digits) = match offset.chars().next() {
            Some('+') => (1i8, &offset[1..]),
            Some('-') => (-1i8, &offset[1..]),
            _ => return Err(format!("can't parse time zone {source:?}"))
        };

        let digits: String = digits.chars().filter(|c| *c != ':').collect();
        if digits.is_empty() || digits.len() > 4 || !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(format!("can't parse time zone offset {source:?}"));
        }

        let (hours, minutes) = if digits.len() <= 2 {
            (digits.as_str(), "0")
        } else {
            digits.split_at(digits.len() - 2)
        };
        let hours: u8 = hours.parse().map_err(|_| format!("can't parse hours of {source:?}"))?;
        let minutes: u8 = minutes.parse().map_err(|_| format!("can't parse minutes of {source:?}"))?;
        if hours > 23 || minutes > 59 {
            return Err(format!("time zone offset out of range {source:?}"));
        }

        Ok(DateTimeZone::Offset { sign, hours, minutes })
    }
}

/// Правило восстановления века для двухзначного года (`y`)
#[derive(Debug,Clone,Copy,PartialEq,Eq,Default,Serialize,Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CenturyRule {
    /// `00..29` -> `2000..2029`, `30..99` -> `1930..1999`
    #[default]
    Pivot30,
    /// Всегда `2000`, независимо от цифр (совместимость со старыми данными)
    Legacy,
}

impl CenturyRule {
    pub fn year( self, two_digits: u32 ) -> i32 {
        match self {
            CenturyRule::Pivot30 => {
                if two_digits < 30 {
                    2000 + two_digits as i32
                } else {
                    1900 + two_digits as i32
                }
            }
            CenturyRule::Legacy => 2000
        }
    }
}

#[test]
fn to_naive_overflow_test() {
    let dt = DateRecord::new(2023, 13, 1, 0, 0, 0).to_naive().unwrap();
    assert_eq!( DateRecord::from_naive(&dt), DateRecord::new(2024, 1, 1, 0, 0, 0) );

    let dt = DateRecord::new(2024, 3, 0, 0, 0, 0).to_naive().unwrap();
    assert_eq!( DateRecord::from_naive(&dt), DateRecord::new(2024, 2, 29, 0, 0, 0) );

    let dt = DateRecord::new(2024, 0, 1, 25, 61, 0).to_naive().unwrap();
    assert_eq!( DateRecord::from_naive(&dt), DateRecord::new(2023, 12, 2, 2, 1, 0) );
}

#[test]
fn zone_parse_test() {
    assert_eq!( "local".parse::<DateTimeZone>(), Ok(DateTimeZone::Local) );
    assert_eq!( "UTC".parse::<DateTimeZone>(), Ok(DateTimeZone::Utc) );
    assert_eq!( "+0300".parse::<DateTimeZone>(), Ok(DateTimeZone::Offset { sign: 1, hours: 3, minutes: 0 }) );
    assert_eq!( "offset-05:30".parse::<DateTimeZone>(), Ok(DateTimeZone::Offset { sign: -1, hours: 5, minutes: 30 }) );
    assert_eq!( "+3".parse::<DateTimeZone>(), Ok(DateTimeZone::Offset { sign: 1, hours: 3, minutes: 0 }) );
    assert!( "msk".parse::<DateTimeZone>().is_err() );
    assert!( "+2500".parse::<DateTimeZone>().is_err() );
}

#[test]
fn zone_epoch_test() {
    let dt = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap().and_hms_opt(12, 0, 0).unwrap();
    let utc = DateTimeZone::Utc.epoch_of(&dt).unwrap();
    assert_eq!( utc, 1718452800 );

    let msk = DateTimeZone::Offset { sign: 1, hours: 3, minutes: 0 };
    assert_eq!( msk.epoch_of(&dt), Some(utc - 3 * 3600) );
    assert_eq!( msk.datetime_of(utc - 3 * 3600), Some(dt) );
}

#[test]
fn century_rule_test() {
    assert_eq!( CenturyRule::Pivot30.year(5), 2005 );
    assert_eq!( CenturyRule::Pivot30.year(29), 2029 );
    assert_eq!( CenturyRule::Pivot30.year(30), 1930 );
    assert_eq!( CenturyRule::Pivot30.year(99), 1999 );
    assert_eq!( CenturyRule::Legacy.year(5), 2000 );
    assert_eq!( CenturyRule::Legacy.year(99), 2000 );
}

#[test]
fn date_record_json_test() {
    let json = serde_json::to_value(DateRecord::new(2024, 3, 8, 9, 5, 7)).unwrap();
    assert_eq!( json, serde_json::json!({
        "year": 2024, "month": 3, "day": 8, "hour": 9, "minute": 5, "second": 7
    }));

    let rule: CenturyRule = serde_json::from_str("\"legacy\"").unwrap();
    assert_eq!( rule, CenturyRule::Legacy );
    assert_eq!( serde_json::to_string(&CenturyRule::Pivot30).unwrap(), "\"pivot30\"" );
}
