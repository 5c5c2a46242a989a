use ru_date::CenturyRule;

use super::AppConfig;
use crate::actions::Action;
use crate::err::ToolErr;

/// Параметры коммандной строки
#[derive(Debug,Clone,Default)]
pub struct CmdLineParams {
    /// `-cfg` _file_ - Файл настроек вместо поиска `helpers.json`
    pub config_file: Option<String>,

    /// `-zone` _local/utc/+0300_ - Переопределить часовой пояс
    pub zone: Option<String>,

    /// `-century` _pivot30/legacy_ - Переопределить правило века
    pub century: Option<CenturyRule>,

    /// Действия по порядку
    pub actions: Vec<Action>,
}

fn take<'a, I: Iterator<Item = &'a String>>( args: &mut I, what: &str, count: usize ) -> Result<Vec<String>, ToolErr> {
    let values: Vec<String> = args.take(count).cloned().collect();
    if values.len() < count {
        return Err(ToolErr::Args { message: format!("{what} expects {count} argument(s)") });
    }
    Ok(values)
}

fn parse_number<T: std::str::FromStr>( value: &str ) -> Result<T, ToolErr> {
    value.parse::<T>().map_err(|_| ToolErr::Args { message: format!("{value:?} is not a number") })
}

impl CmdLineParams {
    /// Парсинг коммандной строки, первый элемент - имя программы
    pub fn parse( args: &[String] ) -> Result<Self, ToolErr> {
        let mut params = CmdLineParams::default();
        let mut itr = args.iter().skip(1).peekable();

        while let Some(arg) = itr.next() {
            match arg.as_str() {
                "-cfg" => params.config_file = take(&mut itr, arg, 1)?.pop(),
                "-zone" => params.zone = take(&mut itr, arg, 1)?.pop(),
                "-century" => {
                    let value = take(&mut itr, arg, 1)?.concat();
                    params.century = Some(match value.as_str() {
                        "pivot30" => CenturyRule::Pivot30,
                        "legacy" => CenturyRule::Legacy,
                        _ => return Err(ToolErr::Args { message: format!("undefined century rule {value:?}") })
                    });
                }
                "convert" | "text" => {
                    let mut v = take(&mut itr, arg, 3)?.into_iter();
                    let (from, to, text) = (v.next().unwrap_or_default(), v.next().unwrap_or_default(), v.next().unwrap_or_default());
                    params.actions.push(if arg == "convert" {
                        Action::Convert { from, to, text }
                    } else {
                        Action::Text { from, to, text }
                    });
                }
                "diff" => {
                    let mut v = take(&mut itr, arg, 2)?.into_iter();
                    let (date1, date2) = (v.next().unwrap_or_default(), v.next().unwrap_or_default());
                    let format = itr.next_if(|next| !is_keyword(next)).cloned();
                    params.actions.push(Action::Diff { date1, date2, format });
                }
                "parse" => {
                    let mut v = take(&mut itr, arg, 2)?.into_iter();
                    let (format, text) = (v.next().unwrap_or_default(), v.next().unwrap_or_default());
                    params.actions.push(Action::Parse { format, text });
                }
                "plural" => {
                    let mut v = take(&mut itr, arg, 4)?.into_iter();
                    let n = parse_number(&v.next().unwrap_or_default())?;
                    let (one, few, many) = (v.next().unwrap_or_default(), v.next().unwrap_or_default(), v.next().unwrap_or_default());
                    params.actions.push(Action::Plural { n, one, few, many });
                }
                "calendar" => {
                    let mut v = take(&mut itr, arg, 2)?.into_iter();
                    let year = parse_number(&v.next().unwrap_or_default())?;
                    let month = parse_number(&v.next().unwrap_or_default())?;
                    params.actions.push(Action::Calendar { year, month });
                }
                "translit" => {
                    let text = take(&mut itr, arg, 1)?.concat();
                    params.actions.push(Action::Translit { text });
                }
                "ip" => {
                    let address = take(&mut itr, arg, 1)?.concat();
                    params.actions.push(Action::Ip { address });
                }
                _ => {
                    return Err(ToolErr::Args { message: format!("undefined arg {arg}") });
                }
            }
        }

        Ok(params)
    }

    /// Переопределить параметры
    pub fn apply( &self, conf: AppConfig ) -> AppConfig {
        let mut conf = conf;
        if let Some(zone) = &self.zone {
            conf.date.zone = zone.clone();
        }
        if let Some(century) = self.century {
            conf.date.century = century;
        }
        conf
    }

    /// Настройки: из `-cfg`, иначе найденные от текущего каталога, с переопределениями
    pub fn config( &self ) -> Result<AppConfig, ToolErr> {
        let conf = match &self.config_file {
            Some(file) => AppConfig::read(file).map_err(|message| ToolErr::Config { message })?,
            None => AppConfig::find_or_default()
        };
        Ok(self.apply(conf))
    }
}

fn is_keyword( arg: &str ) -> bool {
    matches!(arg,
        "-cfg" | "-zone" | "-century" |
        "convert" | "text" | "diff" | "parse" | "plural" | "calendar" | "translit" | "ip"
    )
}

#[cfg(test)]
fn args( line: &[&str] ) -> Vec<String> {
    std::iter::once("helpers-tool").chain(line.iter().copied()).map(String::from).collect()
}

#[test]
fn parse_actions_test() {
    let params = CmdLineParams::parse(&args(&[
        "-zone", "utc",
        "convert", "d.m.Y", "Y-m-d", "08.03.2024",
        "diff", "0", "3700",
        "plural", "21", "минуту", "минуты", "минут",
        "diff", "01.01.2020", "02.01.2020", "d.m.Y",
    ])).unwrap();

    assert_eq!( params.zone, Some("utc".to_string()) );
    assert_eq!( params.actions, vec![
        Action::Convert { from: "d.m.Y".into(), to: "Y-m-d".into(), text: "08.03.2024".into() },
        Action::Diff { date1: "0".into(), date2: "3700".into(), format: None },
        Action::Plural { n: 21, one: "минуту".into(), few: "минуты".into(), many: "минут".into() },
        Action::Diff { date1: "01.01.2020".into(), date2: "02.01.2020".into(), format: Some("d.m.Y".into()) },
    ]);
}

#[test]
fn parse_errors_test() {
    assert!( matches!( CmdLineParams::parse(&args(&["convert", "Y"])), Err(ToolErr::Args { .. }) ) );
    assert!( matches!( CmdLineParams::parse(&args(&["plural", "x", "a", "b", "c"])), Err(ToolErr::Args { .. }) ) );
    assert!( matches!( CmdLineParams::parse(&args(&["-century", "1900"])), Err(ToolErr::Args { .. }) ) );
    assert!( matches!( CmdLineParams::parse(&args(&["bogus"])), Err(ToolErr::Args { .. }) ) );
}

#[test]
fn apply_test() {
    let params = CmdLineParams::parse(&args(&["-zone", "+0300", "-century", "legacy"])).unwrap();
    let conf = params.apply(AppConfig::default());
    assert_eq!( conf.date.zone, "+0300" );
    assert_eq!( conf.date.century, CenturyRule::Legacy );
    assert_eq!( conf.date.diff_format, "U" );
}
