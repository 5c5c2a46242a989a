/// Способ обрезки строки см [crop]
#[derive(Debug,Clone,Copy,PartialEq,Eq,Default)]
pub enum CropMode {
    /// ровно `length` символов
    Length,
    /// `length` символов и до конца слова
    #[default]
    Word,
    /// `length` символов и до конца предложения (`.` `;` `!` `?`)
    Sentence,
}

fn is_sentence_end( chr: char ) -> bool {
    matches!(chr, '.' | ';' | '!' | '?')
}

/// Обрезка строки до указанной длины (в символах)
///
/// Если строка была обрезана, к ней добавляется `finalize`.
/// Если в режиме [CropMode::Sentence] после `length` символов нет конца предложения,
/// строка обрезается как в [CropMode::Length].
pub fn crop( text: &str, length: usize, finalize: &str, mode: CropMode ) -> String {
    if length == 0 {
        return String::new();
    }

    let chars_count = text.chars().count();
    if chars_count <= length {
        return text.to_string();
    }

    let head: String = text.chars().take(length).collect();
    let tail = text.chars().skip(length);

    let cropped = match mode {
        CropMode::Length => head,
        CropMode::Word => {
            let mut res = head;
            res.extend(tail.take_while(|c| *c != ' '));
            res
        }
        CropMode::Sentence => {
            let rest: Vec<char> = tail.collect();
            match rest.iter().position(|c| is_sentence_end(*c)) {
                Some(end) => {
                    let mut res = head;
                    res.extend(&rest[..=end]);
                    res
                }
                None => head
            }
        }
    };

    cropped + finalize
}

/// Сокращение строки с вставкой `middle` в середину
///
/// Сохраняются первые `ceil(length/2)` и последние `length - ceil(length/2)` символов.
pub fn shorten( text: &str, length: usize, middle: &str ) -> String {
    if length <= 1 {
        return String::new();
    }

    let strlen = text.chars().count();
    let midlen = middle.chars().count();
    if strlen <= length || strlen.saturating_sub(midlen) <= length {
        return text.to_string();
    }

    let start = length.div_ceil(2);
    let end = length - start;

    let mut res: String = text.chars().take(start).collect();
    res.push_str(middle);
    res.extend(text.chars().skip(strlen - end));
    res
}

#[test]
fn crop_length_test() {
    assert_eq!( crop("Привет, мир", 6, "...", CropMode::Length), "Привет..." );
    assert_eq!( crop("short", 10, "...", CropMode::Length), "short" );
    assert_eq!( crop("short", 0, "...", CropMode::Length), "" );
}

#[test]
fn crop_word_test() {
    assert_eq!( crop("Съешь ещё этих мягких булок", 8, "...", CropMode::Word), "Съешь ещё..." );
    assert_eq!( crop("abc def ghi", 4, "~", CropMode::Word), "abc def~" );
    assert_eq!( crop("abc def ghi", 3, "~", CropMode::Word), "abc~" );
    assert_eq!( crop("abcdef", 2, "", CropMode::default()), "abcdef" );
}

#[test]
fn crop_sentence_test() {
    let text = "Первое предложение. Второе! Третье";
    assert_eq!( crop(text, 3, "..", CropMode::Sentence), "Первое предложение..." );
    assert_eq!( crop(text, 21, "", CropMode::Sentence), "Первое предложение. Второе!" );
    assert_eq!( crop(text, 30, "..", CropMode::Sentence), "Первое предложение. Второе! Тр.." );
}

#[test]
fn shorten_test() {
    assert_eq!( shorten("abcdefghij", 4, "..."), "ab...ij" );
    assert_eq!( shorten("abcdefghij", 5, "-"), "abc-ij" );
    assert_eq!( shorten("abcdefgh", 6, "..."), "abcdefgh" );
    assert_eq!( shorten("abc", 1, "..."), "" );
    assert_eq!( shorten("Александр Сергеевич", 6, "…"), "Але…вич" );
}
