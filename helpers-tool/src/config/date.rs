use ru_date::{CenturyRule, DateCodec, DateTimeZone, DiffUnit, SystemClock};
use serde::{Deserialize, Serialize};

/// Настройки преобразования дат
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DateConfig {
    /// Часовой пояс: `local`, `utc`, `+0300`
    pub zone: String,

    /// Правило века для двухзначного года: `pivot30` | `legacy`
    pub century: CenturyRule,

    /// Формат дат для `diff`, если не указан в команде
    pub diff_format: String,

    /// Исключаемые единицы разницы дат, буквы `y m d h i s`
    pub diff_excluded: String,
}

impl Default for DateConfig {
    fn default() -> Self {
        Self {
            zone: "local".to_string(),
            century: CenturyRule::default(),
            diff_format: "U".to_string(),
            diff_excluded: String::new(),
        }
    }
}

impl DateConfig {
    pub fn codec( &self ) -> Result<DateCodec<SystemClock>, String> {
        let zone: DateTimeZone = self.zone.parse()?;
        Ok(DateCodec::new(zone, SystemClock).with_century(self.century))
    }

    pub fn excluded_units( &self ) -> Result<Vec<DiffUnit>, String> {
        self.diff_excluded.chars()
            .filter(|c| !c.is_whitespace() && *c != ',')
            .map(|c| DiffUnit::of_letter(c).ok_or(format!("undefined diff unit '{c}'")))
            .collect()
    }
}

#[test]
fn excluded_units_test() {
    let conf = DateConfig { diff_excluded: "y, s".to_string(), ..DateConfig::default() };
    assert_eq!( conf.excluded_units(), Ok(vec![DiffUnit::Year, DiffUnit::Second]) );

    let conf = DateConfig { diff_excluded: "yq".to_string(), ..DateConfig::default() };
    assert!( conf.excluded_units().is_err() );
}

#[test]
fn codec_test() {
    let conf = DateConfig { zone: "+0300".to_string(), century: CenturyRule::Legacy, ..DateConfig::default() };
    let codec = conf.codec().unwrap();
    assert_eq!( codec.zone(), DateTimeZone::Offset { sign: 1, hours: 3, minutes: 0 } );
    assert_eq!( codec.century(), CenturyRule::Legacy );

    let conf = DateConfig { zone: "mars".to_string(), ..DateConfig::default() };
    assert!( conf.codec().is_err() );
}
