use serde::{Deserialize, Serialize};
use std::{collections::BTreeMap, env, fs, path::{Path, PathBuf}};

use super::DateConfig;

/// Имя файла настроек, ищется от текущего каталога вверх
pub const CONFIG_FILE: &str = "helpers.json";

/// Настройки приложения
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    /// Настройки дат
    #[serde(default)]
    pub date: DateConfig,

    /// Дополнительные замены для транслитерации
    #[serde(default)]
    pub translit: BTreeMap<String,String>,
}

impl AppConfig {
    fn find_file_up( from: PathBuf, name: &str ) -> Option<PathBuf> {
        let mut dir = from;
        loop {
            let file = dir.join(name);
            if file.exists() {
                return Some(file);
            }

            match dir.parent() {
                Some(parent) => { dir = parent.to_path_buf() },
                None => { break None; }
            }
        }
    }

    /// Чтение настроек из файла
    pub fn read<P: AsRef<Path>>( file: P ) -> Result<Self, String> {
        let file = file.as_ref();
        let text = fs::read_to_string(file)
            .map_err(|err| format!("can't read file {}: {err}", file.display()))?;
        serde_json::from_str(&text)
            .map_err(|err| format!("can't read json from config file {}: {err}", file.display()))
    }

    /// Поиск файла [CONFIG_FILE] от текущего каталога вверх, либо настройки по умолчанию
    pub fn find_or_default() -> Self {
        let found = env::current_dir().ok()
            .and_then(|dir| Self::find_file_up(dir, CONFIG_FILE));

        match found {
            Some(file) => {
                log::info!("found config file {}", file.display());
                match Self::read(&file) {
                    Ok(conf) => conf,
                    Err(err) => {
                        log::warn!("{err}, use default config");
                        Self::default()
                    }
                }
            }
            None => {
                log::info!("use default config");
                Self::default()
            }
        }
    }

    pub fn translit_pairs( &self ) -> Vec<(&str,&str)> {
        self.translit.iter().map(|(k,v)| (k.as_str(), v.as_str())).collect()
    }
}

#[test]
fn test_json() {
    let s = serde_json::to_string_pretty( &AppConfig::default() ).unwrap();
    println!("{}",s);

    let conf: AppConfig = serde_json::from_str(&s).unwrap();
    assert_eq!( conf.date.zone, "local" );
    assert_eq!( conf.date.diff_format, "U" );
}

#[test]
fn test_partial_json() {
    let conf: AppConfig = serde_json::from_str(r#"{
        "date": { "zone": "utc", "century": "legacy", "diff_format": "d.m.Y" },
        "translit": { "ё": "yo" }
    }"#).unwrap();
    assert_eq!( conf.date.century, ru_date::CenturyRule::Legacy );
    assert_eq!( conf.date.diff_excluded, "" );
    assert_eq!( conf.translit_pairs(), vec![("ё","yo")] );

    let conf: AppConfig = serde_json::from_str("{}").unwrap();
    assert_eq!( conf.date.zone, "local" );
}

#[test]
fn test_find_file_up() {
    let dir = env::temp_dir().join(format!("helpers-tool-conf-{}", std::process::id()));
    let nested = dir.join("a").join("b");
    fs::create_dir_all(&nested).unwrap();
    fs::write(dir.join(CONFIG_FILE), r#"{ "date": { "zone": "+0300", "diff_format": "U" } }"#).unwrap();

    let found = AppConfig::find_file_up(nested, CONFIG_FILE).unwrap();
    assert_eq!( found, dir.join(CONFIG_FILE) );
    assert_eq!( AppConfig::read(&found).unwrap().date.zone, "+0300" );

    fs::remove_dir_all(&dir).unwrap();
}
