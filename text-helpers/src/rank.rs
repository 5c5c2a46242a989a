/// Перевод значения с одной шкалы на другую
///
/// `floor( (n - min_val) / (max_val - min_val) * (max_base - min_base) )`,
/// для пустого диапазона `min_val..max_val` возвращает 0
pub fn ranking( n: f64, min_val: f64, max_val: f64, min_base: f64, max_base: f64 ) -> i64 {
    if max_val - min_val > 0.0 {
        ((n - min_val) / (max_val - min_val) * (max_base - min_base)).floor() as i64
    } else {
        0
    }
}

#[test]
fn ranking_test() {
    assert_eq!( ranking(50.0, 0.0, 100.0, 0.0, 10.0), 5 );
    assert_eq!( ranking(99.0, 0.0, 100.0, 0.0, 10.0), 9 );
    assert_eq!( ranking(3.0, 1.0, 5.0, 0.0, 100.0), 50 );
    assert_eq!( ranking(3.0, 5.0, 5.0, 0.0, 10.0), 0 );
}
