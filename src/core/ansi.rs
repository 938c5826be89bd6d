use once_cell::sync::Lazy;
use regex::Regex;

static ANSI_CSI: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\x1B\[[0-9;]*[JKmsu]").expect("ANSI pattern is valid"));

/// 移除終端機的 ANSI 控制序列（顏色、清除行、游標儲存/還原）
///
/// 移除後可能拼出新的序列（例如 `"\x1b[\x1b[31mm"`），所以重複處理到沒有匹配為止。
pub fn strip_ansi_codes(input: &str) -> String {
    let mut stripped = ANSI_CSI.replace_all(input, "").into_owned();
    while ANSI_CSI.is_match(&stripped) {
        stripped = ANSI_CSI.replace_all(&stripped, "").into_owned();
    }
    stripped
}
