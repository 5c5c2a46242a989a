/// Падеж/форма названия месяца
#[derive(Debug,Clone,Copy,PartialEq,Eq)]
pub enum MonthCase {
    /// Январь
    Nominative,
    /// Января
    Genitive,
    /// Янв
    Short,
}

/// Падеж/форма названия дня недели
#[derive(Debug,Clone,Copy,PartialEq,Eq)]
pub enum WeekdayCase {
    /// Среда
    Nominative,
    /// (в) Среду
    Accusative,
    /// Ср
    Short,
}

const MONTHS_NOMINATIVE: [&str; 12] = [
    "Январь", "Февраль", "Март", "Апрель", "Май", "Июнь",
    "Июль", "Август", "Сентябрь", "Октябрь", "Ноябрь", "Декабрь",
];

const MONTHS_GENITIVE: [&str; 12] = [
    "Января", "Февраля", "Марта", "Апреля", "Мая", "Июня",
    "Июля", "Августа", "Сентября", "Октября", "Ноября", "Декабря",
];

const MONTHS_SHORT: [&str; 12] = [
    "Янв", "Фев", "Мар", "Апр", "Май", "Июн",
    "Июл", "Авг", "Сен", "Окт", "Ноя", "Дек",
];

const WEEKDAYS_NOMINATIVE: [&str; 7] = [
    "Воскресенье", "Понедельник", "Вторник", "Среда", "Четверг", "Пятница", "Суббота",
];

const WEEKDAYS_ACCUSATIVE: [&str; 7] = [
    "Воскресенье", "Понедельник", "Вторник", "Среду", "Четверг", "Пятницу", "Субботу",
];

const WEEKDAYS_SHORT: [&str; 7] = [
    "Вс", "Пн", "Вт", "Ср", "Чт", "Пт", "Сб",
];

/// Название месяца, `month` 1..12
pub fn month_name( month: u32, case: MonthCase ) -> Option<&'static str> {
    let table = match case {
        MonthCase::Nominative => &MONTHS_NOMINATIVE,
        MonthCase::Genitive => &MONTHS_GENITIVE,
        MonthCase::Short => &MONTHS_SHORT,
    };
    let idx = (month as usize).checked_sub(1)?;
    table.get(idx).copied()
}

/// Название дня недели, `weekday` 0..7: 0 и 7 - воскресенье, 1 - понедельник
pub fn weekday_name( weekday: u32, case: WeekdayCase ) -> Option<&'static str> {
    let table = match case {
        WeekdayCase::Nominative => &WEEKDAYS_NOMINATIVE,
        WeekdayCase::Accusative => &WEEKDAYS_ACCUSATIVE,
        WeekdayCase::Short => &WEEKDAYS_SHORT,
    };
    match weekday {
        7 => Some(table[0]),
        _ => table.get(weekday as usize).copied()
    }
}

/// Подстановки слов-шаблонов формата: `Месяца`, `Месяц`, `Мес`, `Деньнедели`, `Деньнед`
/// и их вариантов со строчной буквы
///
/// Для отсутствующего названия подставляется пустая строка
pub(crate) fn lexical_pairs( month: u32, weekday: Option<u32> ) -> Vec<(&'static str, String)> {
    let month_of = |case| month_name(month, case).unwrap_or_default();
    let weekday_of = |case| weekday.and_then(|wd| weekday_name(wd, case)).unwrap_or_default();

    let upper = [
        ("Месяца", "месяца", month_of(MonthCase::Genitive)),
        ("Месяц", "месяц", month_of(MonthCase::Nominative)),
        ("Мес", "мес", month_of(MonthCase::Short)),
        ("Деньнедели", "деньнедели", weekday_of(WeekdayCase::Nominative)),
        ("Деньнед", "деньнед", weekday_of(WeekdayCase::Short)),
    ];

    let mut pairs = Vec::with_capacity(upper.len() * 2);
    for (key, lower_key, value) in upper {
        pairs.push((key, value.to_string()));
        pairs.push((lower_key, value.to_lowercase()));
    }
    pairs
}

#[test]
fn month_name_test() {
    assert_eq!( month_name(1, MonthCase::Nominative), Some("Январь") );
    assert_eq!( month_name(5, MonthCase::Genitive), Some("Мая") );
    assert_eq!( month_name(12, MonthCase::Short), Some("Дек") );
    assert_eq!( month_name(0, MonthCase::Short), None );
    assert_eq!( month_name(13, MonthCase::Short), None );
}

#[test]
fn weekday_name_test() {
    assert_eq!( weekday_name(0, WeekdayCase::Nominative), Some("Воскресенье") );
    assert_eq!( weekday_name(7, WeekdayCase::Short), Some("Вс") );
    assert_eq!( weekday_name(3, WeekdayCase::Accusative), Some("Среду") );
    assert_eq!( weekday_name(1, WeekdayCase::Short), Some("Пн") );
    assert_eq!( weekday_name(8, WeekdayCase::Short), None );
}

#[test]
fn lexical_pairs_test() {
    let pairs = lexical_pairs(3, Some(5));
    let get = |key: &str| pairs.iter().find(|(k,_)| *k == key).map(|(_,v)| v.clone());
    assert_eq!( get("Месяца"), Some("Марта".to_string()) );
    assert_eq!( get("месяц"), Some("март".to_string()) );
    assert_eq!( get("Деньнедели"), Some("Пятница".to_string()) );
    assert_eq!( get("деньнед"), Some("пт".to_string()) );

    let pairs = lexical_pairs(0, None);
    assert!( pairs.iter().all(|(_,v)| v.is_empty()) );
}
