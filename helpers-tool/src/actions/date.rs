use ru_date::{weekday_name, month_name, Clock, DateCodec, DiffUnit, MonthCase, WeekdayCase};

use crate::err::ToolErr;

/// Разница дат словами, пустая разница выводится как `0 секунд`
pub fn date_diff<C: Clock>( codec: &DateCodec<C>, date1: &str, date2: &str, format: &str, excluded: &[DiffUnit] ) -> Result<String, ToolErr> {
    let diff = codec.date_diff(date1, date2, format, excluded)?;
    if diff.is_empty() {
        log::debug!("dates {date1} and {date2} are equal");
        return Ok(DiffUnit::Second.describe(0));
    }
    Ok(diff.to_string())
}

/// Разбор даты, вывод записи в json
pub fn parse_to_json<C: Clock>( codec: &DateCodec<C>, format: &str, text: &str ) -> Result<String, ToolErr> {
    let date = codec.parse(format, text)?;
    Ok(serde_json::to_string(&date)?)
}

/// Календарь месяца текстом, неделя с понедельника
///
/// ```text
///      Февраль 2024
/// Пн Вт Ср Чт Пт Сб Вс
///           1  2  3  4
/// ```
pub fn calendar_text( year: i32, month: u32 ) -> Result<String, ToolErr> {
    let weeks = ru_date::calendar(year, month)?;

    let title = format!("{} {year}", month_name(month, MonthCase::Nominative).unwrap_or_default());
    let header: Vec<&str> = (1..=7).filter_map(|wd| weekday_name(wd, WeekdayCase::Short)).collect();
    let header = header.join(" ");
    let width = header.chars().count();

    let mut lines = vec![format!("{title:^width$}").trim_end().to_string(), header];
    for week in weeks {
        let days: Vec<String> = week.iter()
            .map(|day| day.map(|d| format!("{d:>2}")).unwrap_or_else(|| "  ".to_string()))
            .collect();
        lines.push(days.join(" ").trim_end().to_string());
    }

    Ok(lines.join("\n"))
}

#[test]
fn calendar_text_test() {
    let text = calendar_text(2024, 2).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!( lines[0].trim(), "Февраль 2024" );
    assert_eq!( lines[1], "Пн Вт Ср Чт Пт Сб Вс" );
    assert_eq!( lines[2], "          1  2  3  4" );
    assert_eq!( lines[6], "26 27 28 29" );
    assert_eq!( lines.len(), 7 );
}

#[test]
fn calendar_text_invalid_test() {
    assert!( matches!( calendar_text(2024, 13), Err(ToolErr::Date(_)) ) );
}

#[test]
fn parse_to_json_test() {
    let codec = DateCodec::new(ru_date::DateTimeZone::Utc, ru_date::FixedClock(0));
    let json = parse_to_json(&codec, "d.m.Y H:i", "08.03.2024 09:05").unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!( value["year"], 2024 );
    assert_eq!( value["month"], 3 );
    assert_eq!( value["minute"], 5 );
    assert_eq!( value["second"], 0 );
}

#[test]
fn date_diff_equal_test() {
    let codec = DateCodec::new(ru_date::DateTimeZone::Utc, ru_date::FixedClock(0));
    assert_eq!( date_diff(&codec, "100", "100", "U", &[]), Ok("0 секунд".to_string()) );
}
