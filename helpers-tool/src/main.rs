//! Утилита коммандной строки для преобразования дат и строк
//!
//! ```text
//! helpers-tool [-cfg file] [-zone local|utc|+HHMM] [-century pivot30|legacy] <action>...
//!   convert <from> <to> <text>      перевод даты из формата в формат
//!   text <from> <to> <text>         Сегодня, 10:20 / Вчера, ... / Завтра, ...
//!   diff <date1> <date2> [format]   разница дат словами
//!   parse <format> <text>           разбор даты в json
//!   plural <n> <one> <few> <many>   склонение по числу
//!   calendar <year> <month>         календарь месяца
//!   translit <text>                 транслитерация
//!   ip <address>                    проверка адреса клиента
//! ```
//!
//! Настройки читаются из `helpers.json`, который ищется от текущего каталога вверх

/// Конфигурация
mod config;

/// Действия
mod actions;

mod err;

use std::{env, process::ExitCode};

use config::CmdLineParams;
use err::ToolErr;

fn main() -> ExitCode {
    env_logger::init();

    match run() {
        Ok(failed) if failed == 0 => ExitCode::SUCCESS,
        Ok(failed) => {
            log::warn!("{failed} action(s) failed");
            ExitCode::FAILURE
        }
        Err(err) => {
            log::error!("{err}");
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

/// Выполнение действий по порядку, результат - кол-во неудачных
fn run() -> Result<usize, ToolErr> {
    let args: Vec<String> = env::args().collect();
    let params = CmdLineParams::parse(&args)?;
    let conf = params.config()?;
    let codec = conf.date.codec()?;
    log::debug!("zone {:?}, century {:?}", codec.zone(), codec.century());

    let mut failed = 0usize;
    for action in &params.actions {
        match action.execute(&codec, &conf) {
            Ok(out) => println!("{out}"),
            Err(err) => {
                failed += 1;
                log::error!("execute {action:?} failed with {err}");
                eprintln!("{err}");
            }
        }
    }

    Ok(failed)
}
