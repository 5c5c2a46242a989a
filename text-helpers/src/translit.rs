use crate::strtr;

/// Таблица транслитерации русских букв латиницей
const TRANSLIT: [(&str,&str); 66] = [
    ("а","a"),  ("б","b"),  ("в","v"),
    ("г","g"),  ("д","d"),  ("е","e"),
    ("ё","e"),  ("ж","zh"), ("з","z"),
    ("и","i"),  ("й","i"),  ("к","k"),
    ("л","l"),  ("м","m"),  ("н","n"),
    ("о","o"),  ("п","p"),  ("р","r"),
    ("с","s"),  ("т","t"),  ("у","u"),
    ("ф","f"),  ("х","h"),  ("ц","c"),
    ("ч","ch"), ("ш","sh"), ("щ","sch"),
    ("ь","'"),  ("ы","y"),  ("ъ","'"),
    ("э","e"),  ("ю","yu"), ("я","ya"),

    ("А","A"),  ("Б","B"),  ("В","V"),
    ("Г","G"),  ("Д","D"),  ("Е","E"),
    ("Ё","E"),  ("Ж","Zh"), ("З","Z"),
    ("И","I"),  ("Й","I"),  ("К","K"),
    ("Л","L"),  ("М","M"),  ("Н","N"),
    ("О","O"),  ("П","P"),  ("Р","R"),
    ("С","S"),  ("Т","T"),  ("У","U"),
    ("Ф","F"),  ("Х","H"),  ("Ц","C"),
    ("Ч","Ch"), ("Ш","Sh"), ("Щ","Sch"),
    ("Ь","'"),  ("Ы","Y"),  ("Ъ","'"),
    ("Э","E"),  ("Ю","Yu"), ("Я","Ya"),
];

/// Соответствие клавиш латинской (QWERTY) и русской (ЙЦУКЕН) раскладки
const KEYBOARD: [(&str,&str); 32] = [
    ("q","й"), ("w","ц"), ("e","у"), ("r","к"), ("t","е"), ("y","н"),
    ("u","г"), ("i","ш"), ("o","щ"), ("p","з"), ("[","х"), ("]","ъ"),
    ("a","ф"), ("s","ы"), ("d","в"), ("f","а"), ("g","п"), ("h","р"),
    ("j","о"), ("k","л"), ("l","д"), (";","ж"), ("'","э"),
    ("z","я"), ("x","ч"), ("c","с"), ("v","м"), ("b","и"), ("n","т"),
    ("m","ь"), (",","б"), (".","ю"),
];

/// Направление перевода раскладки
#[derive(Debug,Clone,Copy,PartialEq,Eq)]
pub enum Layout {
    /// Латинские клавиши в русские буквы: `ghbdtn` -> `привет`
    Rus,
    /// Русские буквы в латинские клавиши: `привет` -> `ghbdtn`
    Eng,
}

/// Транслитерация с русского на латиницу
///
/// `extra` дополняет/переопределяет стандартную таблицу.
pub fn translit( text: &str, extra: &[(&str,&str)] ) -> String {
    let pairs: Vec<(&str,&str)> = TRANSLIT.iter().chain(extra.iter()).copied().collect();
    strtr(text, &pairs)
}

/// Перевод текста набранного в неверной раскладке
pub fn transletter( text: &str, to: Layout, extra: &[(&str,&str)] ) -> String {
    let table = KEYBOARD.iter().map(|(lat,rus)| match to {
        Layout::Rus => (*lat, *rus),
        Layout::Eng => (*rus, *lat),
    });
    let pairs: Vec<(&str,&str)> = table.chain(extra.iter().copied()).collect();
    strtr(text, &pairs)
}

#[test]
fn translit_test() {
    assert_eq!( translit("Щука и ёж", &[]), "Schuka i ezh" );
    assert_eq!( translit("Подъезд", &[]), "Pod'ezd" );
    assert_eq!( translit("Юля, hello", &[]), "Yulya, hello" );
}

#[test]
fn translit_extra_test() {
    assert_eq!( translit("ёж и ь", &[("ё","yo"), ("ь","")]), "yozh i " );
    assert_eq!( translit("a b", &[(" ","-")]), "a-b" );
}

#[test]
fn transletter_test() {
    assert_eq!( transletter("ghbdtn", Layout::Rus, &[]), "привет" );
    assert_eq!( transletter("привет", Layout::Eng, &[]), "ghbdtn" );
    assert_eq!( transletter("ntcn 1", Layout::Rus, &[]), "тест 1" );
}
