//! HTML 轉純文字 / Markdown
//!
//! 不是完整的 HTML parser：圖片轉成 Markdown 語法，其餘標籤直接移除，文字與 entity 原樣保留。

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static IMG_TAG: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"<img\s+(?:[^>]*?\s+)?src="([^"]*)"(?:\s+(?:[^>]*?\s+)?alt="([^"]*)")?\s*/?>"#)
        .expect("img pattern is valid")
});

static ANY_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").expect("tag pattern is valid"));

pub fn html_to_markdown(html: &str) -> String {
    let with_images = IMG_TAG.replace_all(html, |caps: &Captures| {
        let src = &caps[1];
        let alt = caps.get(2).map(|m| m.as_str()).unwrap_or("");
        format!("![{}]({})", alt, src)
    });

    ANY_TAG.replace_all(&with_images, "").into_owned()
}

/// 與 [`html_to_markdown`] 相同，但圖片直接丟棄
pub fn html_to_text(html: &str) -> String {
    let without_images = IMG_TAG.replace_all(html, "");
    ANY_TAG.replace_all(&without_images, "").into_owned()
}
