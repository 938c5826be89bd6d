/// 把字串雜湊成固定的 `#rrggbb` 顏色，同一字串永遠得到同一顏色
///
/// 雜湊以 UTF-16 code unit 逐一累加 (`hash * 31 + c`，32 位元溢位環繞)，
/// 取低三個位元組分別當作紅、綠、藍。
pub fn string_to_color(input: &str) -> String {
    let mut hash: i32 = 0;
    for unit in input.encode_utf16() {
        hash = i32::from(unit).wrapping_add((hash << 5).wrapping_sub(hash));
    }

    let mut color = String::with_capacity(7);
    color.push('#');
    for i in 0..3 {
        let value = (hash >> (i * 8)) & 0xff;
        color.push_str(&format!("{:02x}", value));
    }
    color
}
