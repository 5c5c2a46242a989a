use crate::{DateField, DateRecord};

/// Элемент формата даты (символ в стиле php `date()`)
///
/// | Символ | Разбор      | Вывод                  | Token        |
/// |--------|-------------|------------------------|--------------|
/// | Y      | 4 цифры     | год, 4 цифры           | Year         |
/// | y      | 2 цифры     | год, 2 цифры           | Year2digit   |
/// | m      | 2 цифры     | месяц 01..12           | Month        |
/// | n      | 1-2 цифры   | месяц 1..12            | MonthNoPad   |
/// | d      | 2 цифры     | день 01..31            | Date         |
/// | j      | 1-2 цифры   | день 1..31             | DateNoPad    |
/// | H      | 2 цифры     | час 00..23             | Hour         |
/// | h      | 1-2 цифры   | час 0..23              | HourNoPad    |
/// | G      | -           | час 00..23             | Hour24       |
/// | g      | -           | час 0..23              | Hour24NoPad  |
/// | i      | 1-2 цифры   | минуты 00..59          | Minute       |
/// | M      | 2 цифры     | минуты 00..59          | Minute2digit |
/// | s      | 1-2 цифры   | секунды 00..59         | Second       |
/// | U      | цифры       | секунды от начала эпохи | Epoch       |
///
/// Остальные символы формата выводятся/сопоставляются как есть
#[derive(Debug,Clone,Copy,PartialEq,Eq)]
pub enum Token {
    Year,
    Year2digit,
    Month,
    MonthNoPad,
    Date,
    DateNoPad,
    Hour,
    HourNoPad,
    Hour24,
    Hour24NoPad,
    Minute,
    Minute2digit,
    Second,
    Epoch,
}

impl Token {
    /// Символ формата, распознаваемый при разборе текста
    pub fn of_parse( chr: char ) -> Option<Token> {
        match chr {
            'Y' => Some(Token::Year),
            'y' => Some(Token::Year2digit),
            'm' => Some(Token::Month),
            'n' => Some(Token::MonthNoPad),
            'd' => Some(Token::Date),
            'j' => Some(Token::DateNoPad),
            'H' => Some(Token::Hour),
            'h' => Some(Token::HourNoPad),
            'i' => Some(Token::Minute),
            'M' => Some(Token::Minute2digit),
            's' => Some(Token::Second),
            'U' => Some(Token::Epoch),
            _ => None
        }
    }

    /// Символ формата, распознаваемый при выводе
    pub fn of_render( chr: char ) -> Option<Token> {
        match chr {
            'G' => Some(Token::Hour24),
            'g' => Some(Token::Hour24NoPad),
            _ => Self::of_parse(chr)
        }
    }

    pub fn symbol( self ) -> char {
        match self {
            Token::Year         => 'Y',
            Token::Year2digit   => 'y',
            Token::Month        => 'm',
            Token::MonthNoPad   => 'n',
            Token::Date         => 'd',
            Token::DateNoPad    => 'j',
            Token::Hour         => 'H',
            Token::HourNoPad    => 'h',
            Token::Hour24       => 'G',
            Token::Hour24NoPad  => 'g',
            Token::Minute       => 'i',
            Token::Minute2digit => 'M',
            Token::Second       => 's',
            Token::Epoch        => 'U',
        }
    }

    /// Шаблон regex для захвата значения
    pub(crate) fn capture( self ) -> &'static str {
        match self {
            Token::Year         => "[0-9]{4}",
            Token::Year2digit   => "[0-9]{2}",
            Token::Month        => "[0-9]{2}",
            Token::MonthNoPad   => "[0-9]{1,2}",
            Token::Date         => "[0-9]{2}",
            Token::DateNoPad    => "[0-9]{1,2}",
            Token::Hour         => "[0-9]{2}",
            Token::HourNoPad    => "[0-9]{1,2}",
            Token::Hour24       => "[0-9]{2}",
            Token::Hour24NoPad  => "[0-9]{1,2}",
            Token::Minute       => "[0-9]{1,2}",
            Token::Minute2digit => "[0-9]{2}",
            Token::Second       => "[0-9]{1,2}",
            Token::Epoch        => "[0-9]+",
        }
    }

    /// Поле записи, в которое попадает значение.
    /// `y` и `U` заполняют запись по своим правилам
    pub fn field( self ) -> Option<DateField> {
        match self {
            Token::Year => Some(DateField::Year),
            Token::Month | Token::MonthNoPad => Some(DateField::Month),
            Token::Date | Token::DateNoPad => Some(DateField::Day),
            Token::Hour | Token::HourNoPad | Token::Hour24 | Token::Hour24NoPad => Some(DateField::Hour),
            Token::Minute | Token::Minute2digit => Some(DateField::Minute),
            Token::Second => Some(DateField::Second),
            Token::Year2digit | Token::Epoch => None,
        }
    }

    /// Ширина дополнения нулями при выводе, 0 - без дополнения
    pub fn pad( self ) -> usize {
        match self {
            Token::Year => 4,
            Token::Year2digit | Token::Month | Token::Date | Token::Hour | Token::Hour24
            | Token::Minute | Token::Minute2digit | Token::Second => 2,
            Token::MonthNoPad | Token::DateNoPad | Token::HourNoPad | Token::Hour24NoPad
            | Token::Epoch => 0,
        }
    }

    /// Вывод значения
    ///
    /// `epoch` - секунды от начала эпохи для записи (используется только `U`)
    pub(crate) fn render( self, date: &DateRecord, epoch: i64 ) -> String {
        let value: i64 = match self {
            Token::Epoch => return epoch.to_string(),
            Token::Year2digit => (date.year % 100) as i64,
            Token::Year => date.year as i64,
            _ => match self.field() {
                Some(DateField::Month) => date.month as i64,
                Some(DateField::Day) => date.day as i64,
                Some(DateField::Hour) => date.hour as i64,
                Some(DateField::Minute) => date.minute as i64,
                Some(DateField::Second) => date.second as i64,
                _ => 0
            }
        };
        format!("{value:0width$}", width = self.pad())
    }
}

#[test]
fn token_symbols_test() {
    for chr in "YymndjHhiMsU".chars() {
        let token = Token::of_parse(chr).unwrap();
        assert_eq!( token.symbol(), chr );
        assert_eq!( Token::of_render(chr), Some(token) );
    }
    assert_eq!( Token::of_parse('G'), None );
    assert_eq!( Token::of_render('G'), Some(Token::Hour24) );
    assert_eq!( Token::of_render('x'), None );
}

#[test]
fn token_render_test() {
    let date = DateRecord::new(2005, 3, 7, 9, 5, 2);
    assert_eq!( Token::Year.render(&date, 0), "2005" );
    assert_eq!( Token::Year2digit.render(&date, 0), "05" );
    assert_eq!( Token::Month.render(&date, 0), "03" );
    assert_eq!( Token::MonthNoPad.render(&date, 0), "3" );
    assert_eq!( Token::DateNoPad.render(&date, 0), "7" );
    assert_eq!( Token::Hour24.render(&date, 0), "09" );
    assert_eq!( Token::HourNoPad.render(&date, 0), "9" );
    assert_eq!( Token::Minute2digit.render(&date, 0), "05" );
    assert_eq!( Token::Second.render(&date, 0), "02" );
    assert_eq!( Token::Epoch.render(&date, 1110186302), "1110186302" );
    assert_eq!( Token::Year.render(&DateRecord::new(812, 1, 1, 0, 0, 0), 0), "0812" );
}
