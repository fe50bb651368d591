//! 中文数字位值文法
//!
//! 把数字文本切分为记号序列，并用递归下降匹配位值单位文法：
//! 个位数字、十位（可省前导数字）、百/千位（零间隔需显式写出 零）、
//! 再到按 万、亿 组界递归的高位形式。
//!
//! 严格/普通两个变体结构相同，区别只在接受的数字字形集合
//! （普通集额外接受 〇幺两仨）与小数尾零规则。

use crate::tables::{NumeralTables, MAX_DECIMAL_DIGITS};

/// 数字文本的记号
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumToken {
    /// 零（占位）
    Zero,
    /// 数字 1-9
    Digit(u8),
    /// 单位，携带倍数（10、100、1000、10^4、10^8）
    Unit(i64),
}

/// 文法变体
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strictness {
    Strict,
    Normal,
}

/// 单位层级，从高到低；万、亿 是组界
const LEVELS: [i64; 5] = [100_000_000, 10_000, 1000, 100, 10];

/// 把字形分类为记号
fn classify(tables: &NumeralTables, ch: char, strictness: Strictness) -> Option<NumToken> {
    let digit = match strictness {
        Strictness::Strict => tables.strict_digit(ch),
        Strictness::Normal => tables.normal_digit(ch),
    };
    if let Some(d) = digit {
        return Some(if d == 0 { NumToken::Zero } else { NumToken::Digit(d) });
    }
    tables.unit_value(ch).map(NumToken::Unit)
}

/// 把整段文本切分为记号；任一字符无法分类则返回 None
pub fn tokenize(
    tables: &NumeralTables,
    text: &str,
    strictness: Strictness,
) -> Option<Vec<NumToken>> {
    text.chars()
        .map(|ch| classify(tables, ch, strictness))
        .collect()
}

/// 是否为数字记号（零或 1-9）
pub fn is_digit_token(tok: &NumToken) -> bool {
    matches!(tok, NumToken::Zero | NumToken::Digit(_))
}

/// 整数跨度是否符合位值文法
pub fn matches_integer(toks: &[NumToken]) -> bool {
    matches!(toks, [NumToken::Zero]) || section(toks, 0)
}

/// 小数跨度是否合法：严格要求末位非零，普通只限制长度
pub fn matches_decimal(toks: &[NumToken], strictness: Strictness) -> bool {
    if toks.is_empty() || toks.len() > MAX_DECIMAL_DIGITS {
        return false;
    }
    if !toks.iter().all(is_digit_token) {
        return false;
    }
    match strictness {
        Strictness::Strict => matches!(toks.last(), Some(NumToken::Digit(_))),
        Strictness::Normal => true,
    }
}

/// 查找本层单位的位置；出现多于一次则整段非法
fn unit_pos(toks: &[NumToken], unit: i64) -> Result<Option<usize>, ()> {
    let mut found = None;
    for (i, tok) in toks.iter().enumerate() {
        if *tok == NumToken::Unit(unit) {
            if found.is_some() {
                return Err(());
            }
            found = Some(i);
        }
    }
    Ok(found)
}

/// 匹配从第 li 层起的完整数值区段（1 .. 本层上限）
fn section(toks: &[NumToken], li: usize) -> bool {
    if toks.is_empty() {
        return false;
    }
    if li == LEVELS.len() {
        return matches!(toks, [NumToken::Digit(_)]);
    }
    let unit = LEVELS[li];
    match unit_pos(toks, unit) {
        Err(()) => false,
        Ok(None) => section(toks, li + 1),
        Ok(Some(p)) => {
            let (lead, tail) = (&toks[..p], &toks[p + 1..]);
            if unit == 10 {
                // 十位：前导数字可省（十一），尾随只允许单个数字
                let lead_ok = lead.is_empty() || matches!(lead, [NumToken::Digit(_)]);
                let tail_ok = tail.is_empty() || matches!(tail, [NumToken::Digit(_)]);
                return lead_ok && tail_ok;
            }
            // 万、亿 的前导本身是低一层完整区段；百、千 只带单个数字
            let lead_ok = if unit >= 10_000 {
                section(lead, li + 1)
            } else {
                matches!(lead, [NumToken::Digit(_)])
            };
            if !lead_ok {
                return false;
            }
            if tail.is_empty() {
                return true;
            }
            if tail[0] == NumToken::Zero {
                return zero_tail(&tail[1..], li);
            }
            full_tail(tail, li)
        }
    }
}

/// 零 间隔之后允许的低位形式（比满位形式低至少一档）
fn zero_tail(rest: &[NumToken], li: usize) -> bool {
    if rest.is_empty() {
        return false;
    }
    match LEVELS[li] {
        100 => matches!(rest, [NumToken::Digit(_)]),
        1000 => section(rest, 4),
        10_000 => section(rest, 3),
        _ => section(rest, 1),
    }
}

/// 不带 零 的满位尾随：必须以低一层单位开头成形
fn full_tail(tail: &[NumToken], li: usize) -> bool {
    let next = LEVELS[li + 1];
    matches!(unit_pos(tail, next), Ok(Some(_))) && section(tail, li + 1)
}

/// 口语简写形式：若干「数字{0,2} 单位」组后跟单个收尾数字（一万二）
pub fn is_spoken_shorthand(toks: &[NumToken]) -> bool {
    if toks.len() < 2 {
        return false;
    }
    let (last, body) = match toks.split_last() {
        Some(split) => split,
        None => return false,
    };
    if !is_digit_token(last) {
        return false;
    }
    let mut digits = 0;
    let mut saw_group = false;
    for tok in body {
        match tok {
            NumToken::Zero | NumToken::Digit(_) => {
                digits += 1;
                if digits > 2 {
                    return false;
                }
            }
            NumToken::Unit(_) => {
                digits = 0;
                saw_group = true;
            }
        }
    }
    digits == 0 && saw_group
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toks(text: &str, strictness: Strictness) -> Vec<NumToken> {
        let tables = NumeralTables::new();
        tokenize(&tables, text, strictness).expect("tokenize")
    }

    fn int_ok(text: &str) -> bool {
        matches_integer(&toks(text, Strictness::Strict))
    }

    #[test]
    fn test_tokenize_modes() {
        let tables = NumeralTables::new();
        assert!(tokenize(&tables, "两", Strictness::Strict).is_none());
        assert_eq!(
            tokenize(&tables, "两", Strictness::Normal),
            Some(vec![NumToken::Digit(2)])
        );
        assert!(tokenize(&tables, "点", Strictness::Normal).is_none());
    }

    #[test]
    fn test_basic_forms() {
        assert!(int_ok("零"));
        assert!(int_ok("五"));
        assert!(int_ok("十"));
        assert!(int_ok("十一"));
        assert!(int_ok("二十二"));
        assert!(int_ok("一百"));
        assert!(int_ok("一百零一"));
        assert!(int_ok("一百二十三"));
        assert!(int_ok("一千零一"));
        assert!(int_ok("一千零二十"));
        assert!(int_ok("一千二百三十四"));
    }

    #[test]
    fn test_myriad_forms() {
        assert!(int_ok("一万"));
        assert!(int_ok("十万"));
        assert!(int_ok("一万二千"));
        assert!(int_ok("一万零二十"));
        assert!(int_ok("一亿"));
        assert!(int_ok("十万亿"));
        assert!(int_ok("九千八百七十六万五千四百三十二亿九千八百七十六万五千四百三十二"));
    }

    #[test]
    fn test_financial_glyphs() {
        assert!(int_ok("壹佰贰拾叁"));
        assert!(int_ok("壹仟零壹"));
    }

    #[test]
    fn test_invalid_forms() {
        // 无单位的裸数字串不在文法内
        assert!(!int_ok("一一"));
        assert!(!int_ok("一二三"));
        // 缺少显式 零 的间隔
        assert!(!int_ok("一千二十"));
        assert!(!int_ok("一万二"));
        // 单位缺少前导数字
        assert!(!int_ok("百"));
        assert!(!int_ok("千五"));
        // 同层单位重复
        assert!(!int_ok("十二十"));
        assert!(matches_integer(&[]) == false);
    }

    #[test]
    fn test_decimal_rules() {
        let strict = Strictness::Strict;
        let normal = Strictness::Normal;
        assert!(matches_decimal(&toks("五", strict), strict));
        assert!(matches_decimal(&toks("一四", strict), strict));
        // 严格模式小数不允许零结尾
        assert!(!matches_decimal(&toks("一零", strict), strict));
        assert!(matches_decimal(&toks("一零", normal), normal));
        // 单位不允许出现在小数部分
        assert!(!matches_decimal(&toks("一十", normal), normal));
        // 长度上限 16 位
        let long = "一".repeat(17);
        assert!(!matches_decimal(&toks(&long, normal), normal));
    }

    #[test]
    fn test_spoken_shorthand() {
        assert!(is_spoken_shorthand(&toks("一万二", Strictness::Normal)));
        assert!(is_spoken_shorthand(&toks("一千五", Strictness::Normal)));
        assert!(is_spoken_shorthand(&toks("一万二千三", Strictness::Normal)));
        assert!(!is_spoken_shorthand(&toks("一万二千", Strictness::Normal)));
        assert!(!is_spoken_shorthand(&toks("一二三", Strictness::Normal)));
    }
}
