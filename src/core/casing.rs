use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use serde_json::{Map, Value};

static SEPARATOR_LOWER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[-_]([a-z])").expect("separator pattern is valid"));

/// 把 `snake_case` 與 `kebab-case` 轉成 `camelCase`
///
/// 只有「分隔符號後面緊接小寫 ASCII 字母」會被轉換，其他字元保持原樣：
/// `"foo_bar-baz"` 變成 `"fooBarBaz"`，`"foo_Bar"` 不變。
pub fn to_camel_case(input: &str) -> String {
    SEPARATOR_LOWER
        .replace_all(input, |caps: &Captures| caps[1].to_ascii_uppercase())
        .into_owned()
}

/// 遞迴地把所有物件鍵轉成 camelCase，陣列內的物件也會處理
pub fn keys_to_camel_case(value: Value) -> Value {
    match value {
        Value::Array(items) => Value::Array(items.into_iter().map(keys_to_camel_case).collect()),
        Value::Object(obj) => {
            let mut converted = Map::with_capacity(obj.len());
            for (key, inner) in obj {
                converted.insert(to_camel_case(&key), keys_to_camel_case(inner));
            }
            Value::Object(converted)
        }
        scalar => scalar,
    }
}
