use std::collections::HashMap;

use serde_json::{Map, Value};

/// Результат многоуровневого разбиения строки см [split_nested]
#[derive(Debug,Clone,PartialEq,Eq)]
pub enum Nested {
    Item(String),
    List(Vec<Nested>),
}

/// Многоуровневое разбиение строки
///
/// Первый разделитель делит строку на элементы верхнего уровня,
/// второй - каждый элемент на подэлементы и т.д.
/// Элементы обрезаются по краям, пустые элементы отбрасываются.
///
/// `split_nested("1,2|3,,", &["|", ","])` -> `[[1,2],[3]]`
pub fn split_nested( text: &str, separators: &[&str] ) -> Vec<Nested> {
    let Some((separator, rest)) = separators.split_first() else {
        return Vec::new();
    };

    text.split(separator)
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(|item| {
            if rest.is_empty() {
                Nested::Item(item.to_string())
            } else {
                Nested::List(split_nested(item, rest))
            }
        })
        .collect()
}

/// Рекурсивное слияние
///
/// Объекты сливаются по ключам, массивы - по индексам (`[1,2]` + `[3]` = `[3,2]`),
/// остальные значения заменяются значением из `patch`
pub fn merge_replace( base: Value, patch: Value ) -> Value {
    match (base, patch) {
        (Value::Object(mut base), Value::Object(patch)) => {
            for (key, value) in patch {
                let merged = match base.remove(&key) {
                    Some(old) => merge_entry(old, value),
                    None => value
                };
                base.insert(key, merged);
            }
            Value::Object(base)
        }
        (Value::Array(mut base), Value::Array(patch)) => {
            for (idx, value) in patch.into_iter().enumerate() {
                if idx < base.len() {
                    let old = std::mem::take(&mut base[idx]);
                    base[idx] = merge_entry(old, value);
                } else {
                    base.push(value);
                }
            }
            Value::Array(base)
        }
        (_, patch) => patch
    }
}

fn merge_entry( old: Value, value: Value ) -> Value {
    if value.is_object() || value.is_array() {
        merge_replace(old, value)
    } else {
        value
    }
}

/// Значение поля строки как ключ: строки как есть, `true` - `1`, `null`/`false`/нет поля - пустая строка
fn key_text( row: &Value, key: &str ) -> String {
    match row.get(key) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Bool(true)) => "1".to_string(),
        Some(Value::Null) | Some(Value::Bool(false)) | None => String::new(),
        Some(other) => other.to_string(),
    }
}

/// Группировка строк по ключам
///
/// Каждый уровень результата соответствует элементу `keys`:
/// - `Some(field)` - объект по значениям поля `field`
/// - `None` - массив, строки нумеруются по порядку отдельно для каждого
///   набора значений ключевых полей
///
/// В листьях - строка целиком, либо значение поля `value`.
/// Строки с одинаковыми ключами сливаются через [merge_replace].
/// Пустой `keys` равносилен `[None]` - список строк.
///
/// ```
/// use serde_json::json;
/// use text_helpers::create_by_key;
///
/// let rows = [ json!({"g":"a","n":1}), json!({"g":"b","n":2}), json!({"g":"a","n":3}) ];
/// assert_eq!( create_by_key(&[Some("g"), None], &rows, Some("n")), json!({"a":[1,3],"b":[2]}) );
/// ```
pub fn create_by_key( keys: &[Option<&str>], rows: &[Value], value: Option<&str> ) -> Value {
    let keys: &[Option<&str>] = if keys.is_empty() { &[None] } else { keys };
    log::trace!("create_by_key {} row(s) by {keys:?}", rows.len());

    let mut counters = HashMap::<(usize, Vec<String>), usize>::new();
    let mut result = Value::Object(Map::new());

    for row in rows {
        let mut tmp = match value {
            Some(field) => row.get(field).cloned().unwrap_or(Value::Null),
            None => row.clone()
        };

        let path: Vec<String> = keys.iter()
            .map(|key| key.map(|k| key_text(row, k)).unwrap_or_default())
            .collect();

        for (level, key) in keys.iter().enumerate().rev() {
            let slot = match key {
                Some(_) => path[level].clone(),
                None => {
                    let counter = counters.entry((level, path.clone())).or_insert(0);
                    let slot = counter.to_string();
                    *counter += 1;
                    slot
                }
            };
            let mut map = Map::new();
            map.insert(slot, tmp);
            tmp = Value::Object(map);
        }

        result = merge_replace(result, tmp);
    }

    into_lists(result, keys)
}

/// Уровни с нумерацией (`None`) из объектов `{"0":..,"1":..}` в массивы
fn into_lists( value: Value, keys: &[Option<&str>] ) -> Value {
    let Some((key, rest)) = keys.split_first() else {
        return value;
    };
    let Value::Object(map) = value else {
        return value;
    };

    let entries = map.into_iter().map(|(k, v)| (k, into_lists(v, rest)));
    match key {
        Some(_) => Value::Object(entries.collect()),
        None => {
            let mut items: Vec<(usize, Value)> = entries
                .filter_map(|(k, v)| k.parse::<usize>().ok().map(|idx| (idx, v)))
                .collect();
            items.sort_by_key(|(idx, _)| *idx);
            Value::Array(items.into_iter().map(|(_, v)| v).collect())
        }
    }
}

#[test]
fn split_nested_test() {
    use Nested::*;

    let res = split_nested("1,2,3,4,5|6,7,8,9,0,,,", &["|", ","]);
    fn items( xs: &[&str] ) -> Nested {
        Nested::List( xs.iter().map(|s| Nested::Item(s.to_string())).collect() )
    }
    assert_eq!( res, vec![
        items(&["1","2","3","4","5"]),
        items(&["6","7","8","9","0"]),
    ]);

    assert_eq!( split_nested(" a , b ,, ", &[","]), vec![Item("a".into()), Item("b".into())] );
    assert_eq!( split_nested("a,b", &[]), Vec::<Nested>::new() );
}

#[test]
fn merge_replace_test() {
    use serde_json::json;

    let base = json!({ "a": { "x": 1, "y": 2 }, "b": [1,2], "c": "c" });
    let patch = json!({ "a": { "y": 3, "z": 4 }, "b": [3], "d": null });
    assert_eq!( merge_replace(base, patch), json!({
        "a": { "x": 1, "y": 3, "z": 4 },
        "b": [3, 2],
        "c": "c",
        "d": null
    }));

    assert_eq!( merge_replace(json!({"a":1}), json!({"a":{"b":2}})), json!({"a":{"b":2}}) );
    assert_eq!( merge_replace(json!(1), json!("x")), json!("x") );
}

#[test]
fn merge_replace_list_test() {
    use serde_json::json;

    assert_eq!( merge_replace(json!({"b":[1,2]}), json!({"b":[3]})), json!({"b":[3,2]}) );
    assert_eq!( merge_replace(json!([1]), json!([5,6,7])), json!([5,6,7]) );
    assert_eq!( merge_replace(json!([{"a":1},2]), json!([{"b":2}])), json!([{"a":1,"b":2},2]) );
    assert_eq!( merge_replace(json!({"b":[1,2]}), json!({"b":{"x":1}})), json!({"b":{"x":1}}) );
}

#[cfg(test)]
fn group_rows() -> Vec<Value> {
    use serde_json::json;
    vec![
        json!({ "id": 1, "group": "a", "name": "x" }),
        json!({ "id": 2, "group": "b", "name": "y" }),
        json!({ "id": 3, "group": "a", "name": "z" }),
    ]
}

#[test]
fn create_by_key_keyed_test() {
    use serde_json::json;
    let _ = env_logger::builder().filter_level(log::LevelFilter::max()).is_test(true).try_init();

    let rows = group_rows();
    assert_eq!( create_by_key(&[Some("group"), Some("id")], &rows, Some("name")), json!({
        "a": { "1": "x", "3": "z" },
        "b": { "2": "y" }
    }));
    assert_eq!( create_by_key(&[Some("id")], &rows, None), json!({
        "1": rows[0], "2": rows[1], "3": rows[2]
    }));
}

#[test]
fn create_by_key_counter_test() {
    use serde_json::json;

    let rows = group_rows();
    assert_eq!( create_by_key(&[Some("group"), None], &rows, Some("name")), json!({
        "a": ["x", "z"],
        "b": ["y"]
    }));
    assert_eq!( create_by_key(&[None, Some("group")], &rows, Some("name")), json!([
        { "a": "x", "b": "y" },
        { "a": "z" }
    ]));
    assert_eq!( create_by_key(&[], &rows, Some("id")), json!([1, 2, 3]) );
}

#[test]
fn create_by_key_edge_test() {
    use serde_json::json;

    assert_eq!( create_by_key(&[Some("group")], &[], None), json!({}) );
    assert_eq!( create_by_key(&[None], &[], None), json!([]) );

    // одинаковые ключи - строки сливаются, нет поля - пустой ключ
    let rows = [ json!({"k":"a","x":1}), json!({"k":"a","y":2}), json!({"x":3}) ];
    assert_eq!( create_by_key(&[Some("k")], &rows, None), json!({
        "a": { "k": "a", "x": 1, "y": 2 },
        "": { "x": 3 }
    }));
}
