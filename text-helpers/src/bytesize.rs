/// Единицы по умолчанию для [bytes_to_text]
pub const BYTE_UNITS: [&str; 5] = ["b", "Kb", "Mb", "Gb", "Tb"];

/// Размер в байтах в наиболее короткой записи: `1536` -> `1.5 Kb`
///
/// # Аргументы
/// - bytes - размер
/// - precision - кол-во знаков после запятой
/// - units - названия единиц, начиная с байт; если единиц не хватает, используется последняя
pub fn bytes_to_text( bytes: u64, precision: u32, units: &[&str] ) -> String {
    let mut value = bytes as f64;
    let mut current = 0usize;
    while value > 1024.0 && current + 1 < units.len() {
        current += 1;
        value /= 1024.0;
    }

    let kof = 10f64.powi(precision as i32);
    let value = (value * kof).round() / kof;

    match units.get(current) {
        Some(unit) => format!("{value} {unit}"),
        None => format!("{value}")
    }
}

#[test]
fn bytes_to_text_test() {
    assert_eq!( bytes_to_text(512, 2, &BYTE_UNITS), "512 b" );
    assert_eq!( bytes_to_text(1024, 2, &BYTE_UNITS), "1024 b" );
    assert_eq!( bytes_to_text(1536, 2, &BYTE_UNITS), "1.5 Kb" );
    assert_eq!( bytes_to_text(1_200_000, 2, &BYTE_UNITS), "1.14 Mb" );
    assert_eq!( bytes_to_text(5 * 1024 * 1024 * 1024, 0, &BYTE_UNITS), "5 Gb" );
}

#[test]
fn bytes_to_text_units_test() {
    assert_eq!( bytes_to_text(3 * 1024 * 1024, 1, &["байт", "КБ"]), "3072 КБ" );
    assert_eq!( bytes_to_text(10, 1, &[]), "10" );
}
