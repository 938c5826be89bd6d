use crate::domain::model::Platform;

/// 把 `"ctrl+shift+k"` 這類設定值轉成顯示用標籤
///
/// macOS 使用符號 (`⌃ + ⇧ + K`)，其他平台使用文字 (`Ctrl + Shift + K`)。
/// 重複或空白的鍵會被略過，保留第一次出現的順序。
pub fn parse_keyboard_shortcut(shortcut: &str, platform: &Platform) -> String {
    let mut labels: Vec<String> = Vec::new();

    for key in shortcut.to_lowercase().split('+').map(str::trim) {
        if key.is_empty() {
            continue;
        }
        // 以顯示結果去重，`ctrl` 與 `⌃` 在 macOS 上是同一個鍵
        let label = key_label(key, platform);
        if !labels.contains(&label) {
            labels.push(label);
        }
    }

    labels.join(" + ")
}

pub fn parse_keyboard_shortcut_for_current_platform(shortcut: &str) -> String {
    parse_keyboard_shortcut(shortcut, &Platform::current())
}

fn key_label(key: &str, platform: &Platform) -> String {
    let (mac_label, label) = match key {
        "super" => ("⌘", "⊞"),
        "ctrl" => ("⌃", "Ctrl"),
        "alt" => ("⌥", "Alt"),
        "shift" => ("⇧", "Shift"),
        other => return capitalize(other),
    };

    let chosen = if platform.is_macos() { mac_label } else { label };
    chosen.to_string()
}

fn capitalize(key: &str) -> String {
    let mut chars = key.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
