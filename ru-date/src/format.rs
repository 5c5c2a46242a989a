use chrono::Datelike;
use text_helpers::strtr;

use crate::{Clock, DateCodec, DateRecord};
use crate::codec::{DateFormat, DateFormatItem};
use crate::names::lexical_pairs;

/// Годы, для которых считаются секунды от начала эпохи
const EPOCH_YEARS: std::ops::RangeInclusive<i32> = 1970..=2068;

/// Двухзначные годы (как в php `mktime`): `0..69` -> `2000..2069`, `70..99` -> `1970..1999`
const SHORT_YEARS: std::ops::Range<i32> = 0..100;

impl DateFormat {
    pub(crate) fn render( &self, date: &DateRecord, epoch: i64 ) -> String {
        let mut text = String::new();
        for itm in &self.format {
            match itm {
                DateFormatItem::PlainText(str) => text.push_str(str),
                DateFormatItem::Value(token) => text.push_str(&token.render(date, epoch))
            }
        }
        text
    }
}

impl<C: Clock> DateCodec<C> {
    /// Секунды от начала эпохи для записи
    ///
    /// Считаются только для годов `1970..=2068` и `0..100` (двухзначный год),
    /// для остальных - `0`
    pub fn epoch_of( &self, date: &DateRecord ) -> i64 {
        if !(EPOCH_YEARS.contains(&date.year) || SHORT_YEARS.contains(&date.year)) {
            return 0;
        }

        let year = match date.year {
            0..=69 => date.year + 2000,
            70..=99 => date.year + 1900,
            year => year
        };

        DateRecord { year, ..*date }
            .to_naive()
            .and_then(|dt| self.zone.epoch_of(&dt))
            .unwrap_or(0)
    }

    /// Вывод записи по формату `format`
    ///
    /// После подстановки значений символов формата подставляются слова-шаблоны
    /// (сначала более длинные):
    ///
    /// | Шаблон       | Значение                     | Пример      |
    /// |--------------|------------------------------|-------------|
    /// | `Месяца`     | месяц в родительном падеже   | Марта       |
    /// | `Месяц`      | месяц                        | Март        |
    /// | `Мес`        | месяц кратко                 | Мар         |
    /// | `Деньнедели` | день недели                  | Пятница     |
    /// | `Деньнед`    | день недели кратко           | Пт          |
    ///
    /// Варианты со строчной буквы (`месяца`, `деньнед` ...) дают название со строчной буквы.
    /// День недели вычисляется по [DateCodec::epoch_of]
    pub fn format( &self, format: &str, date: &DateRecord ) -> String {
        let epoch = self.epoch_of(date);
        let text = DateFormat::for_render(format).render(date, epoch);

        let weekday = self.zone.datetime_of(epoch).map(|dt| dt.weekday().num_days_from_sunday());
        strtr(&text, &lexical_pairs(date.month, weekday))
    }
}

#[cfg(test)]
use crate::codec::utc_codec;

#[test]
fn format_tokens_test() {
    let codec = utc_codec(0);
    let date = DateRecord::new(2024, 3, 8, 9, 5, 7);
    assert_eq!( codec.format("Y-m-d H:i:s", &date), "2024-03-08 09:05:07" );
    assert_eq!( codec.format("y n j h G g M", &date), "24 3 8 9 09 9 05" );
    assert_eq!( codec.format("U", &date), "1709888707" );
    assert_eq!( codec.format("[x] at", &date), "[x] at" );
}

#[test]
fn format_lexical_test() {
    let codec = utc_codec(0);
    let date = DateRecord::new(2024, 3, 8, 9, 5, 7);
    assert_eq!( codec.format("Деньнедели, j Месяца Y", &date), "Пятница, 8 Марта 2024" );
    assert_eq!( codec.format("деньнед, j месяца", &date), "пт, 8 марта" );
    assert_eq!( codec.format("Месяц Y / Мес / мес", &date), "Март 2024 / Мар / мар" );
    assert_eq!( codec.format("деньнедели", &DateRecord::new(2024, 3, 10, 0, 0, 0)), "воскресенье" );
}

#[test]
fn format_epoch_range_test() {
    let codec = utc_codec(0);
    assert_eq!( codec.epoch_of(&DateRecord::new(1969, 12, 31, 0, 0, 0)), 0 );
    assert_eq!( codec.epoch_of(&DateRecord::new(2069, 1, 1, 0, 0, 0)), 0 );
    assert_eq!( codec.epoch_of(&DateRecord::new(2068, 1, 1, 0, 0, 0)), 3092601600 );
    assert_eq!( codec.epoch_of(&DateRecord::new(24, 3, 8, 9, 5, 7)), 1709888707 );
    assert_eq!( codec.epoch_of(&DateRecord::new(70, 1, 2, 0, 0, 0)), 86400 );

    // вне диапазона день недели берется от 1970-01-01 (четверг)
    assert_eq!( codec.format("Y Деньнед", &DateRecord::new(2100, 3, 8, 0, 0, 0)), "2100 Чт" );
    assert_eq!( codec.format("U", &DateRecord::new(1900, 1, 1, 0, 0, 0)), "0" );
}

#[test]
fn format_out_of_table_month_test() {
    let codec = utc_codec(0);
    assert_eq!( codec.format("[Месяц]", &DateRecord::new(2024, 13, 1, 0, 0, 0)), "[]" );
}

#[test]
fn format_parse_round_trip_test() {
    let codec = utc_codec(0);
    for date in [
        DateRecord::new(1970, 1, 1, 0, 0, 0),
        DateRecord::new(2000, 2, 29, 23, 59, 59),
        DateRecord::new(2024, 12, 31, 12, 30, 1),
        DateRecord::new(2068, 7, 4, 5, 6, 7),
    ] {
        for fmt in ["Y-m-d H:i:s", "d.m.Y", "YmdHis", "s i H d m Y"] {
            let text = codec.format(fmt, &date);
            let parsed = codec.parse(fmt, &text).unwrap();
            let expected = codec.parse(fmt, &codec.format(fmt, &parsed)).unwrap();
            assert_eq!( parsed, expected );
        }
        assert_eq!( codec.parse("Y-m-d H:i:s", &codec.format("Y-m-d H:i:s", &date)).unwrap(), date );
        assert_eq!( codec.parse("YmdHis", &codec.format("YmdHis", &date)).unwrap(), date );
    }
}

#[test]
fn epoch_round_trip_test() {
    let codec = utc_codec(0);
    for text in ["0", "86399", "1718452800", "3124223999"] {
        assert_eq!( codec.format("U", &codec.parse("U", text).unwrap()), text );
    }
}
