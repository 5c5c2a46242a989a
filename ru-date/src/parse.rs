use regex::Regex;

use crate::{Clock, DateCodec, DateErr, DateRecord, Token};
use crate::codec::{DateFormat, DateFormatItem};

impl DateFormat {
    /// Regex для разбора текста: значения - группы захвата, остальной текст - как есть
    pub(crate) fn regex( &self ) -> Result<Regex, DateErr> {
        let mut pattern = String::from("^");
        for itm in &self.format {
            match itm {
                DateFormatItem::PlainText(text) => pattern.push_str(&regex::escape(text)),
                DateFormatItem::Value(token) => {
                    pattern.push('(');
                    pattern.push_str(token.capture());
                    pattern.push(')');
                }
            }
        }
        pattern.push('$');
        Ok(Regex::new(&pattern)?)
    }
}

impl<C: Clock> DateCodec<C> {
    /// Разбор текста `text` по формату `format`
    ///
    /// Поля, отсутствующие в формате, принимают значения по умолчанию см [DateRecord].
    /// `U` заполняет все поля записи, перекрывая остальные значения формата.
    /// `y` восстанавливает год по правилу [crate::CenturyRule].
    ///
    /// # Ошибки
    /// [DateErr::FormatMismatch] - текст не соответствует формату
    pub fn parse( &self, format: &str, text: &str ) -> Result<DateRecord, DateErr> {
        let df = DateFormat::for_parse(format);
        let re = df.regex()?;
        log::trace!("date pattern {re} for format {format:?}");

        let caps = match re.captures(text) {
            Some(caps) => caps,
            None => {
                log::debug!("date {text:?} doesn't match format {format:?}");
                return Err(DateErr::FormatMismatch { format: format.to_string(), text: text.to_string() });
            }
        };

        let mut date = DateRecord::default();
        let mut epoch: Option<i64> = None;

        for (idx, token) in df.tokens().enumerate() {
            let value = caps.get(idx + 1).map(|m| m.as_str()).unwrap_or_default();

            if token == Token::Epoch {
                let secs = value.parse::<i64>()
                    .map_err(|_| DateErr::EpochOutOfRange { value: value.to_string() })?;
                epoch = Some(secs);
                continue;
            }

            // остальные значения - не более 4 ascii цифр
            let number = value.bytes().fold(0u32, |acc, digit| acc * 10 + u32::from(digit - b'0'));

            match token.field() {
                Some(field) => date.set(field, number),
                None => date.year = self.century.year(number)
            }
        }

        if let Some(secs) = epoch {
            let dt = self.zone.datetime_of(secs)
                .ok_or_else(|| DateErr::EpochOutOfRange { value: secs.to_string() })?;
            date = DateRecord::from_naive(&dt);
        }

        Ok(date)
    }
}

#[cfg(test)]
use crate::codec::utc_codec;

#[test]
fn parse_test() {
    let _ = env_logger::builder().filter_level(log::LevelFilter::max()).is_test(true).try_init();

    let codec = utc_codec(0);
    assert_eq!( codec.parse("d.m.Y H:i:s", "08.03.2024 09:05:01").unwrap(), DateRecord::new(2024, 3, 8, 9, 5, 1) );
    assert_eq!( codec.parse("j/n/Y", "8/3/2024").unwrap(), DateRecord::new(2024, 3, 8, 0, 0, 0) );
    assert_eq!( codec.parse("H:M", "23:59").unwrap(), DateRecord::new(1970, 1, 1, 23, 59, 0) );
    assert_eq!( codec.parse("", "").unwrap(), DateRecord::default() );
}

#[test]
fn parse_literal_test() {
    let codec = utc_codec(0);
    // точка в формате - обычный символ, а не "любой символ"
    assert!( codec.parse("d.m.Y", "08x03x2024").is_err() );
    assert_eq!( codec.parse("Y (d) [m]", "2024 (08) [03]").unwrap(), DateRecord::new(2024, 3, 8, 0, 0, 0) );
    assert_eq!( codec.parse("Дата: d.m.Y", "Дата: 01.02.2003").unwrap(), DateRecord::new(2003, 2, 1, 0, 0, 0) );
}

#[test]
fn parse_mismatch_test() {
    let codec = utc_codec(0);
    for (format, text) in [
        ("d.m.Y", "8.3.2024"),
        ("Y-m-d", "2024-03-08 "),
        ("Y-m-d", " 2024-03-08"),
        ("Y", "24"),
        ("U", ""),
        ("j", "١٢"),
    ] {
        match codec.parse(format, text) {
            Err(DateErr::FormatMismatch { format: f, text: t }) => {
                assert_eq!( f, format );
                assert_eq!( t, text );
            }
            other => panic!("{format:?} / {text:?} gives {other:?}")
        }
    }
}

#[test]
fn parse_epoch_test() {
    let codec = utc_codec(0);
    assert_eq!( codec.parse("U", "1718452800").unwrap(), DateRecord::new(2024, 6, 15, 12, 0, 0) );
    // U перекрывает остальные поля
    assert_eq!( codec.parse("Y U", "1999 0").unwrap(), DateRecord::default() );
    assert_eq!( codec.parse("U Y", "0 1999").unwrap(), DateRecord::default() );
    assert!( matches!( codec.parse("U", "99999999999999999999"), Err(DateErr::EpochOutOfRange { .. }) ) );
}

#[test]
fn parse_epoch_offset_test() {
    use crate::{DateTimeZone, FixedClock};

    let msk = DateCodec::new(DateTimeZone::Offset { sign: 1, hours: 3, minutes: 0 }, FixedClock(0));
    assert_eq!( msk.parse("U", "0").unwrap(), DateRecord::new(1970, 1, 1, 3, 0, 0) );
}

#[test]
fn parse_century_pivot_test() {
    let codec = utc_codec(0);
    assert_eq!( codec.parse("d.m.y", "01.02.05").unwrap().year, 2005 );
    assert_eq!( codec.parse("d.m.y", "01.02.29").unwrap().year, 2029 );
    assert_eq!( codec.parse("d.m.y", "01.02.30").unwrap().year, 1930 );
    assert_eq!( codec.parse("d.m.y", "01.02.99").unwrap().year, 1999 );
}

#[test]
fn parse_century_legacy_test() {
    use crate::CenturyRule;

    let codec = utc_codec(0).with_century(CenturyRule::Legacy);
    assert_eq!( codec.parse("d.m.y", "01.02.05").unwrap().year, 2000 );
    assert_eq!( codec.parse("d.m.y", "01.02.99").unwrap().year, 2000 );
    assert_eq!( codec.parse("d.m.y", "01.02.00").unwrap().year, 2000 );
}

#[test]
fn parse_field_max_test() {
    let codec = utc_codec(0);
    assert_eq!(
        codec.parse("Y-m-d H:i:s", "9999-99-99 99:99:99").unwrap(),
        DateRecord::new(9999, 99, 99, 99, 99, 99)
    );
    assert_eq!( codec.parse("Y n j", "0000 0 0").unwrap(), DateRecord::new(0, 0, 0, 0, 0, 0) );
}
