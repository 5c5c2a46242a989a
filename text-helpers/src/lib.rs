//! Вспомогательные функции для работы со строками
//!
//! - склонение по числу ([plural_form])
//! - замена подстрок ([strtr]), транслитерация ([translit], [transletter])
//! - обрезка строк ([crop], [shorten])
//! - экранирование ([escape])
//! - размер в байтах текстом ([bytes_to_text])
//! - разбор/слияние вложенных структур ([split_nested], [merge_replace], [create_by_key])

mod plural;
pub use plural::*;

mod replace;
pub use replace::*;

mod translit;
pub use translit::*;

mod crop;
pub use crop::*;

mod escape;
pub use escape::*;

mod bytesize;
pub use bytesize::*;

mod rank;
pub use rank::*;

mod nested;
pub use nested::*;

mod path;
pub use path::*;
