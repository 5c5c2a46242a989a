use std::fmt;

use chrono::{Datelike, Duration, NaiveDate, Timelike};
use text_helpers::plural_form;

use crate::{Clock, DateCodec, DateErr};

/// Единица разницы дат
#[derive(Debug,Clone,Copy,PartialEq,Eq,Hash)]
pub enum DiffUnit {
    Year,
    Month,
    Day,
    Hour,
    Minute,
    Second,
}

impl DiffUnit {
    /// Все единицы в порядке вывода
    pub const ALL: [DiffUnit; 6] = [
        DiffUnit::Year, DiffUnit::Month, DiffUnit::Day,
        DiffUnit::Hour, DiffUnit::Minute, DiffUnit::Second,
    ];

    /// Буква единицы: `y m d h i s`
    pub fn letter( self ) -> char {
        match self {
            DiffUnit::Year   => 'y',
            DiffUnit::Month  => 'm',
            DiffUnit::Day    => 'd',
            DiffUnit::Hour   => 'h',
            DiffUnit::Minute => 'i',
            DiffUnit::Second => 's',
        }
    }

    pub fn of_letter( chr: char ) -> Option<DiffUnit> {
        Self::ALL.into_iter().find(|u| u.letter() == chr)
    }

    /// Формы названия для 1, 2, 5
    pub fn forms( self ) -> (&'static str, &'static str, &'static str) {
        match self {
            DiffUnit::Year   => ("год", "года", "лет"),
            DiffUnit::Month  => ("месяц", "месяца", "месяцев"),
            DiffUnit::Day    => ("день", "дня", "дней"),
            DiffUnit::Hour   => ("час", "часа", "часов"),
            DiffUnit::Minute => ("минуту", "минуты", "минут"),
            DiffUnit::Second => ("секунду", "секунды", "секунд"),
        }
    }

    /// `3 часа`, `11 минут`
    pub fn describe( self, value: i64 ) -> String {
        let (one, few, many) = self.forms();
        format!("{value} {}", plural_form(value, one, few, many))
    }
}

/// Разница дат по единицам, в порядке `y m d h i s`
///
/// Содержит только положительные и не исключенные единицы.
/// [fmt::Display] выводит фрагменты через пробел
#[derive(Debug,Clone,PartialEq,Eq,Default)]
pub struct DateDiff {
    pub fragments: Vec<(DiffUnit, String)>
}

/// Вывод разницы дат см [DateDiff::output]
#[derive(Debug,Clone,PartialEq,Eq)]
pub enum DiffOutput {
    Text(String),
    Units(Vec<(DiffUnit, String)>),
}

impl DateDiff {
    pub fn get( &self, unit: DiffUnit ) -> Option<&str> {
        self.fragments.iter().find(|(u,_)| *u == unit).map(|(_,s)| s.as_str())
    }

    pub fn is_empty( &self ) -> bool {
        self.fragments.is_empty()
    }

    /// Строка либо список фрагментов по единицам
    pub fn output( self, structured: bool ) -> DiffOutput {
        if structured {
            DiffOutput::Units(self.fragments)
        } else {
            DiffOutput::Text(self.to_string())
        }
    }
}

impl fmt::Display for DateDiff {
    fn fmt( &self, f: &mut fmt::Formatter<'_> ) -> fmt::Result {
        let text: Vec<&str> = self.fragments.iter().map(|(_,s)| s.as_str()).collect();
        write!(f, "{}", text.join(" "))
    }
}

impl<C: Clock> DateCodec<C> {
    /// Разница между датами словами: `1 час 1 минуту 40 секунд`
    ///
    /// Обе даты в формате `format`. Разница в секундах откладывается от 1 января
    /// меньшего из годов дат и раскладывается на года, месяцы, дни, часы, минуты, секунды.
    /// Единицы из `excluded` не выводятся.
    ///
    /// Вид результата (строка или фрагменты по единицам) выбирается
    /// при выводе: [DateDiff::output], `structured = true` - [DiffOutput::Units].
    ///
    /// Дата вне диапазона годов [DateCodec::epoch_of] считается как `0` (1970-01-01).
    pub fn date_diff( &self, date1: &str, date2: &str, format: &str, excluded: &[DiffUnit] ) -> Result<DateDiff, DateErr> {
        let epoch1 = self.epoch_from(format, date1)?;
        let epoch2 = self.epoch_from(format, date2)?;

        let out_of_range = |epoch: i64| DateErr::EpochOutOfRange { value: epoch.to_string() };
        let year1 = self.zone.datetime_of(epoch1).ok_or_else(|| out_of_range(epoch1))?.year();
        let year2 = self.zone.datetime_of(epoch2).ok_or_else(|| out_of_range(epoch2))?.year();
        let base_year = year1.min(year2);

        let diff_secs = epoch1.abs_diff(epoch2);
        let overflow = || DateErr::EpochOutOfRange { value: diff_secs.to_string() };
        let diff_secs = i64::try_from(diff_secs).map_err(|_| overflow())?;

        let moment = NaiveDate::from_ymd_opt(base_year, 1, 1)
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .and_then(|d| Duration::try_seconds(diff_secs).and_then(|secs| d.checked_add_signed(secs)))
            .ok_or_else(overflow)?;
        log::debug!("diff {diff_secs}s from {base_year}-01-01 is {moment}");

        let values = [
            (DiffUnit::Year,   (moment.year() - base_year) as i64),
            (DiffUnit::Month,  moment.month() as i64 - 1),
            (DiffUnit::Day,    moment.day() as i64 - 1),
            (DiffUnit::Hour,   moment.hour() as i64),
            (DiffUnit::Minute, moment.minute() as i64),
            (DiffUnit::Second, moment.second() as i64),
        ];

        let fragments = values.into_iter()
            .filter(|(unit, value)| *value > 0 && !excluded.contains(unit))
            .map(|(unit, value)| (unit, unit.describe(value)))
            .collect();

        Ok(DateDiff { fragments })
    }
}

#[cfg(test)]
use crate::codec::utc_codec;

#[test]
fn date_diff_hour_test() {
    let codec = utc_codec(0);
    let epoch1 = 1718445600i64;
    let epoch2 = epoch1 + 3700;

    let diff = codec.date_diff(&epoch1.to_string(), &epoch2.to_string(), "U", &[]).unwrap();
    assert_eq!( diff.to_string(), "1 час 1 минуту 40 секунд" );
    assert_eq!( diff.get(DiffUnit::Hour), Some("1 час") );
    assert_eq!( diff.get(DiffUnit::Day), None );

    let diff = codec.date_diff(&epoch2.to_string(), &epoch1.to_string(), "U", &[DiffUnit::Second]).unwrap();
    assert_eq!( diff.output(true), DiffOutput::Units(vec![
        (DiffUnit::Hour, "1 час".to_string()),
        (DiffUnit::Minute, "1 минуту".to_string()),
    ]));
}

#[test]
fn date_diff_formatted_test() {
    let codec = utc_codec(0);
    let diff = codec.date_diff("01.01.2020 00:00", "03.03.2021 05:22", "d.m.Y H:i", &[]).unwrap();
    // 427 дней от 2020-01-01 (високосный) = 2021-03-03 05:22
    assert_eq!( diff.to_string(), "1 год 2 месяца 2 дня 5 часов 22 минуты" );

    let diff = codec.date_diff("01.01.2020 00:00", "03.03.2021 05:22", "d.m.Y H:i", &[DiffUnit::Year, DiffUnit::Hour]).unwrap();
    assert_eq!( diff.output(false), DiffOutput::Text("2 месяца 2 дня 22 минуты".to_string()) );
}

#[test]
fn date_diff_plural_test() {
    let codec = utc_codec(0);
    let diff = codec.date_diff("0", &(11 * 86400 + 21 * 60 + 3).to_string(), "U", &[]).unwrap();
    assert_eq!( diff.to_string(), "11 дней 21 минуту 3 секунды" );
}

#[test]
fn date_diff_equal_test() {
    let codec = utc_codec(0);
    let diff = codec.date_diff("1718445600", "1718445600", "U", &[]).unwrap();
    assert!( diff.is_empty() );
    assert_eq!( diff.to_string(), "" );
}

#[test]
fn date_diff_mismatch_test() {
    let codec = utc_codec(0);
    assert!( matches!( codec.date_diff("01.01.2020", "x", "d.m.Y", &[]), Err(DateErr::FormatMismatch { .. }) ) );
}

#[test]
fn diff_unit_letter_test() {
    for unit in DiffUnit::ALL {
        assert_eq!( DiffUnit::of_letter(unit.letter()), Some(unit) );
    }
    assert_eq!( DiffUnit::of_letter('x'), None );
    assert_eq!( DiffUnit::Year.describe(5), "5 лет" );
    assert_eq!( DiffUnit::Day.describe(22), "22 дня" );
}

#[test]
fn date_diff_out_of_range_year_test() {
    let codec = utc_codec(0);
    // 2100 год вне диапазона: обе даты дают 0 секунд
    let diff = codec.date_diff("01.01.2100", "01.01.1970", "d.m.Y", &[]).unwrap();
    assert!( diff.is_empty() );

    let diff = codec.date_diff("01.01.2100", "02.01.1970", "d.m.Y", &[]).unwrap();
    assert_eq!( diff.output(false), DiffOutput::Text("1 день".to_string()) );
}
