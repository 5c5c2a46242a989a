use chrono::{Datelike, Months, NaiveDate};

use crate::{Clock, DateCodec, DateErr};

/// Неделя календаря, с понедельника по воскресенье; `None` - день другого месяца
pub type Week = [Option<u32>; 7];

/// Календарь месяца по неделям
///
/// Первая неделя дополняется `None` до первого числа, последняя - после последнего
pub fn calendar( year: i32, month: u32 ) -> Result<Vec<Week>, DateErr> {
    let invalid = || DateErr::InvalidCalendarMonth { year, month };
    let first = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(invalid)?;
    let next = first.checked_add_months(Months::new(1)).ok_or_else(invalid)?;
    let days = next.signed_duration_since(first).num_days() as u32;

    let mut weeks = Vec::<Week>::new();
    let mut week: Week = [None; 7];
    let mut column = first.weekday().num_days_from_monday() as usize;

    for day in 1..=days {
        week[column] = Some(day);
        column += 1;
        if column > 6 {
            weeks.push(week);
            week = [None; 7];
            column = 0;
        }
    }
    if column != 0 {
        weeks.push(week);
    }

    Ok(weeks)
}

impl<C: Clock> DateCodec<C> {
    /// Календарь месяца, по умолчанию - текущего
    pub fn calendar( &self, year: Option<i32>, month: Option<u32> ) -> Result<Vec<Week>, DateErr> {
        let now = self.now();
        let year = year.or(now.map(|n| n.year())).unwrap_or(1970);
        let month = month.or(now.map(|n| n.month())).unwrap_or(1);
        calendar(year, month)
    }
}

#[test]
fn calendar_test() {
    // 2024-02-01 - четверг
    let weeks = calendar(2024, 2).unwrap();
    assert_eq!( weeks.len(), 5 );
    assert_eq!( weeks[0], [None, None, None, Some(1), Some(2), Some(3), Some(4)] );
    assert_eq!( weeks[4], [Some(26), Some(27), Some(28), Some(29), None, None, None] );
}

#[test]
fn calendar_monday_start_test() {
    // 2024-01-01 - понедельник, 2023-10-01 - воскресенье
    let weeks = calendar(2024, 1).unwrap();
    assert_eq!( weeks[0][0], Some(1) );
    assert_eq!( weeks.last().unwrap(), &[Some(29), Some(30), Some(31), None, None, None, None] );

    let weeks = calendar(2023, 10).unwrap();
    assert_eq!( weeks[0], [None, None, None, None, None, None, Some(1)] );
    assert_eq!( weeks.len(), 6 );
}

#[test]
fn calendar_full_last_week_test() {
    // 2021-02: с понедельника 1-го по воскресенье 28-го
    let weeks = calendar(2021, 2).unwrap();
    assert_eq!( weeks.len(), 4 );
    assert_eq!( weeks[3], [Some(22), Some(23), Some(24), Some(25), Some(26), Some(27), Some(28)] );
}

#[test]
fn calendar_invalid_test() {
    assert_eq!( calendar(2024, 13), Err(DateErr::InvalidCalendarMonth { year: 2024, month: 13 }) );
    assert!( calendar(2024, 0).is_err() );
}

#[test]
fn calendar_now_test() {
    use crate::codec::utc_codec;

    // 2024-06-15
    let codec = utc_codec(1718445600);
    assert_eq!( codec.calendar(None, None).unwrap(), calendar(2024, 6).unwrap() );
    assert_eq!( codec.calendar(Some(2023), None).unwrap(), calendar(2023, 6).unwrap() );
}
