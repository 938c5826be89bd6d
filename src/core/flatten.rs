//! 巢狀物件與點號路徑 (`a.b.c`) 之間的互轉
//!
//! 只有 JSON 物件會被展開；陣列與 `null` 視為葉節點。空的巢狀物件展開後不會留下任何鍵。

use serde_json::{Map, Value};

/// 展開巢狀物件，`prefix` 為空字串時鍵名不帶前綴
pub fn flatten_object(obj: &Map<String, Value>, prefix: &str) -> Map<String, Value> {
    let mut flat = Map::new();
    flatten_into(obj, prefix, &mut flat);
    flat
}

fn flatten_into(obj: &Map<String, Value>, prefix: &str, flat: &mut Map<String, Value>) {
    for (key, value) in obj {
        let path = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{}.{}", prefix, key)
        };

        match value {
            Value::Object(nested) => flatten_into(nested, &path, flat),
            leaf => {
                flat.insert(path, leaf.clone());
            }
        }
    }
}

/// 把點號路徑還原成巢狀物件
///
/// 若中間路徑已經是非物件的值，會被換成物件（例如同時有 `a` 與 `a.b`，結果是 `{"a": {"b": ..}}`）。
pub fn unflatten_object(flat: &Map<String, Value>) -> Value {
    let mut result = Map::new();
    for (key, value) in flat {
        let segments: Vec<&str> = key.split('.').collect();
        insert_path(&mut result, &segments, value.clone());
    }
    Value::Object(result)
}

fn insert_path(target: &mut Map<String, Value>, segments: &[&str], value: Value) {
    match segments {
        [] => {}
        [last] => {
            target.insert((*last).to_string(), value);
        }
        [head, rest @ ..] => {
            let slot = target
                .entry((*head).to_string())
                .or_insert_with(|| Value::Object(Map::new()));
            if !slot.is_object() {
                *slot = Value::Object(Map::new());
            }
            if let Value::Object(child) = slot {
                insert_path(child, rest, value);
            }
        }
    }
}
