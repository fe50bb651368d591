//! 文本归一化
//!
//! 全角转半角、繁体数字字形折叠为简体。纯字符替换，渲染与解析两侧
//! 都把它作为预处理步骤。

/// 繁体/异体字形折叠
fn fold_glyph(ch: char) -> char {
    match ch {
        '兩' => '两',
        '貳' => '贰',
        '參' => '叁',
        '陸' => '陆',
        '億' => '亿',
        '萬' => '万',
        '點' => '点',
        '圓' => '圆',
        '負' => '负',
        _ => ch,
    }
}

/// 归一化文本
///
/// 1. 全角 ASCII 转半角（含全角空格）
/// 2. 繁体数字字形转简体
pub fn normalize_text(s: &str) -> String {
    s.chars()
        .map(|ch| {
            let ch = match ch {
                '\u{FF01}'..='\u{FF5E}' => {
                    char::from_u32(ch as u32 - 0xFEE0).unwrap_or(ch)
                }
                '\u{3000}' => ' ',
                _ => ch,
            };
            fold_glyph(ch)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fullwidth_to_halfwidth() {
        assert_eq!(normalize_text("１２３"), "123");
        assert_eq!(normalize_text("－１．５"), "-1.5");
        assert_eq!(normalize_text("ａｂｃ"), "abc");
        assert_eq!(normalize_text("\u{3000}"), " ");
    }

    #[test]
    fn test_traditional_folding() {
        assert_eq!(normalize_text("兩萬"), "两万");
        assert_eq!(normalize_text("一億零一點五"), "一亿零一点五");
        assert_eq!(normalize_text("負貳圓"), "负贰圆");
    }

    #[test]
    fn test_passthrough() {
        assert_eq!(normalize_text("一百二十三"), "一百二十三");
        assert_eq!(normalize_text("hello 123"), "hello 123");
    }
}
