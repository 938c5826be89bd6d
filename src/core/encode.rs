/// RFC 3986 百分比編碼，只保留 unreserved 字元 (`A-Z a-z 0-9 - _ . ~`)
///
/// 比瀏覽器的 `encodeURIComponent` 更嚴格：`! ' ( ) *` 也會被編碼。
pub fn encode_uri_component(input: &str) -> String {
    let mut encoded = String::with_capacity(input.len());
    for byte in input.bytes() {
        if byte.is_ascii_alphanumeric() || matches!(byte, b'-' | b'_' | b'.' | b'~') {
            encoded.push(char::from(byte));
        } else {
            encoded.push_str(&format!("%{:02X}", byte));
        }
    }
    encoded
}
