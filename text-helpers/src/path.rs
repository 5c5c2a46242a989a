use lazy_regex::{regex, Lazy};
use regex::Regex;

static SIZE_SUFFIX: &Lazy<Regex> = regex!(r"(?i)_[0-9]+x[0-9]+$");

/// Путь/url к превью изображения в другом формате
///
/// Работает с именами вида `name_WIDTHxHEIGHT.ext`:
/// `img/photo_100x100.jpg` + `640x480` -> `img/photo_640x480.jpg`
///
/// Для пустого пути возвращает `None`
pub fn image_preview( image: &str, format: &str ) -> Option<String> {
    if image.is_empty() {
        return None;
    }

    let (dir, file) = match image.rfind('/') {
        Some(idx) => (Some(&image[..idx]), &image[idx + 1..]),
        None => (None, image)
    };

    let (stem, ext) = match file.rfind('.') {
        Some(idx) => (&file[..idx], &file[idx + 1..]),
        None => (file, "")
    };
    let stem = SIZE_SUFFIX.replace(stem, "");

    let name = format!("{stem}_{format}.{ext}");
    match dir {
        Some(dir) => Some(format!("{dir}/{name}")),
        None => Some(name)
    }
}

#[test]
fn image_preview_test() {
    assert_eq!( image_preview("img/photo_100x100.jpg", "640x480"), Some("img/photo_640x480.jpg".to_string()) );
    assert_eq!( image_preview("photo.png", "small"), Some("photo_small.png".to_string()) );
    assert_eq!( image_preview("http://host/a/b_1X2.gif", "3x4"), Some("http://host/a/b_3x4.gif".to_string()) );
    assert_eq!( image_preview("", "3x4"), None );
}
