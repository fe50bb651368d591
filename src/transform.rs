//! 句子级数字转换
//!
//! 在整句文本里定位数字跨度并按方向改写：日期、分数、百分比、
//! 摄氏度优先于普通数字，跨度转换失败时保留原文。
//! 转阿拉伯方向还会把数学符号改写为中文读法。

use std::fmt;
use std::str::FromStr;

use regex::{Captures, Regex};

use crate::an2cn::{An2Cn, RenderMode};
use crate::cn2an::{Cn2An, ParseMode};
use crate::error::Cn2anError;

/// 转换方向
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// 中文数字改写为阿拉伯数字
    ToArabic,
    /// 阿拉伯数字改写为中文数字
    ToChinese,
}

impl Direction {
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::ToArabic => "cn2an",
            Direction::ToChinese => "an2cn",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = Cn2anError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cn2an" => Ok(Direction::ToArabic),
            "an2cn" => Ok(Direction::ToChinese),
            other => Err(Cn2anError::UnsupportedMode(other.to_string())),
        }
    }
}

/// 句中数字字形类；刻意不含大写字形，避免误伤「大陆」之类的普通词
const SENTENCE_NUM: &str = "零一二三四五六七八九";

/// 二元减号的占位符，避免被后续数字改写吃掉
const MINUS_PLACEHOLDER: &str = "@@__CNAN_MINUS__@@";

/// 数学符号到中文读法，长符号在前保证优先替换
const MATH_SYMBOL_WORDS: &[(&str, &str)] = &[
    ("<=", "小于等于"),
    (">=", "大于等于"),
    ("≤", "小于等于"),
    ("≦", "小于等于"),
    ("≥", "大于等于"),
    ("≧", "大于等于"),
    ("!=", "不等于"),
    ("≠", "不等于"),
    ("=", "等于"),
    ("＝", "等于"),
    ("<", "小于"),
    ("＜", "小于"),
    (">", "大于"),
    ("＞", "大于"),
    ("+", "加"),
    ("＋", "加"),
    ("×", "乘"),
    ("✕", "乘"),
    ("✖", "乘"),
    ("⋅", "乘"),
    ("·", "乘"),
    ("÷", "除以"),
    ("±", "正负"),
    ("∓", "负正"),
    ("∴", "所以"),
    ("∵", "因为"),
    ("∪", "并集"),
    ("∩", "交集"),
    ("∑", "求和"),
    ("Σ", "求和"),
    ("Sigma", "求和"),
    ("sigma", "求和"),
    ("∫", "积分"),
    ("∞", "无穷大"),
    ("π", "派"),
    ("√", "根号"),
    ("∂", "偏导"),
];

/// 句子转换器
pub struct Transform {
    cn2an: Cn2An,
    an2cn: An2Cn,
    cn_date: Regex,
    cn_fraction: Regex,
    cn_percent: Regex,
    cn_celsius: Regex,
    cn_number: Regex,
    cn_combined: Regex,
    an_date: Regex,
    an_fraction: Regex,
    an_percent: Regex,
    an_celsius: Regex,
    an_number: Regex,
    year_run: Regex,
    digit_run: Regex,
    exponent: Regex,
}

impl Transform {
    pub fn new() -> Self {
        let all_unit = "十拾百佰千仟万亿";
        let cn_pattern = format!(
            "负?([{0}{1}]+点)?[{0}{1}]+",
            SENTENCE_NUM, all_unit
        );
        let smart_pattern = format!(r"-?([0-9]+\.)?[0-9]+[{}]+", all_unit);

        let compile = |p: &str| Regex::new(p).expect("invalid built-in pattern");

        Self {
            cn2an: Cn2An::new(),
            an2cn: An2Cn::new(),
            cn_date: compile(&format!(
                "((({0})|({1}))年)?([{2}十]+月)?([{2}十]+日)?",
                smart_pattern, cn_pattern, SENTENCE_NUM
            )),
            cn_fraction: compile(&format!("{0}分之{0}", cn_pattern)),
            cn_percent: compile(&format!("百分之{}", cn_pattern)),
            cn_celsius: compile(&format!("{}摄氏度", cn_pattern)),
            cn_number: compile(&cn_pattern),
            cn_combined: compile(&format!("(({})|({}))", smart_pattern, cn_pattern)),
            an_date: compile(
                r"(?:\d{2,4}\s*年\s*(?:\d{1,2}\s*月\s*)?(?:\d{1,2}\s*日)?)|(?:\d{1,2}\s*月\s*(?:\d{1,2}\s*日)?)|(?:\d{1,2}\s*日)",
            ),
            an_fraction: compile(r"\d+/\d+"),
            an_percent: compile(r"-?(\d+\.)?\d+%"),
            an_celsius: compile(r"\d+℃"),
            an_number: compile(r"-?(\d+\.)?\d+"),
            year_run: compile(r"\d+年"),
            digit_run: compile(r"\d+"),
            exponent: compile(r"([^\s\^]+)\s*\^\s*([^\s\^]+)"),
        }
    }

    /// 转换句子中的数字跨度
    ///
    /// # 示例
    /// ```
    /// # use cn2an::{Transform, Direction};
    /// let t = Transform::new();
    /// assert_eq!(t.transform("小王捡了100块钱", Direction::ToChinese), "小王捡了一百块钱");
    /// assert_eq!(t.transform("小王捡了一百块钱", Direction::ToArabic), "小王捡了100块钱");
    /// ```
    pub fn transform(&self, inputs: &str, direction: Direction) -> String {
        match direction {
            Direction::ToArabic => self.transform_to_arabic(inputs),
            Direction::ToChinese => self.transform_to_chinese(inputs),
        }
    }

    fn transform_to_arabic(&self, inputs: &str) -> String {
        let inputs = inputs
            .replace('廿', "二十")
            .replace('半', "0.5")
            .replace('两', "2");

        let inputs = self
            .cn_date
            .replace_all(&inputs, |caps: &Captures<'_>| self.sub_cn_date(&caps[0]))
            .into_owned();
        let inputs = self
            .cn_fraction
            .replace_all(&inputs, |caps: &Captures<'_>| self.sub_cn_fraction(&caps[0]))
            .into_owned();
        let inputs = self
            .cn_percent
            .replace_all(&inputs, |caps: &Captures<'_>| self.sub_cn_percent(&caps[0]))
            .into_owned();
        let inputs = self
            .cn_celsius
            .replace_all(&inputs, |caps: &Captures<'_>| self.sub_cn_celsius(&caps[0]))
            .into_owned();
        self.cn_number
            .replace_all(&inputs, |caps: &Captures<'_>| self.sub_cn_number(&caps[0]))
            .into_owned()
    }

    fn transform_to_chinese(&self, inputs: &str) -> String {
        let inputs = self.preprocess_math_symbols(inputs);

        let inputs = self
            .an_date
            .replace_all(&inputs, |caps: &Captures<'_>| self.sub_an_date(&caps[0]))
            .into_owned();
        let inputs = self
            .an_fraction
            .replace_all(&inputs, |caps: &Captures<'_>| self.sub_an_fraction(&caps[0]))
            .into_owned();
        let inputs = self
            .an_percent
            .replace_all(&inputs, |caps: &Captures<'_>| self.sub_an_percent(&caps[0]))
            .into_owned();
        let inputs = self
            .an_celsius
            .replace_all(&inputs, |caps: &Captures<'_>| self.sub_an_celsius(&caps[0]))
            .into_owned();
        let output = self
            .an_number
            .replace_all(&inputs, |caps: &Captures<'_>| self.sub_an_number(&caps[0]))
            .into_owned();

        self.postprocess_math_symbols(output)
    }

    // ------ 中文 → 阿拉伯的跨度替换 ------

    fn sub_cn_date(&self, m: &str) -> String {
        if m.is_empty() {
            return String::new();
        }
        self.cn_combined
            .replace_all(m, |caps: &Captures<'_>| {
                let span = &caps[0];
                match self.cn2an.parse(span, ParseMode::Smart) {
                    Ok(v) => format!("{:.0}", v),
                    Err(_) => span.to_string(),
                }
            })
            .into_owned()
    }

    fn sub_cn_fraction(&self, m: &str) -> String {
        // 百分之X 由百分比分支处理
        if m.starts_with('百') {
            return m.to_string();
        }
        let replaced = self
            .cn_number
            .replace_all(m, |caps: &Captures<'_>| {
                let span = &caps[0];
                match self.cn2an.parse(span, ParseMode::Smart) {
                    Ok(v) => format!("{:.0}", v),
                    Err(_) => span.to_string(),
                }
            })
            .into_owned();
        let parts: Vec<&str> = replaced.split("分之").collect();
        match parts.as_slice() {
            [den, num] => format!("{}/{}", num, den),
            _ => m.to_string(),
        }
    }

    fn sub_cn_percent(&self, m: &str) -> String {
        let target = match m.strip_prefix("百分之") {
            Some(t) => t,
            None => return m.to_string(),
        };
        match self.cn2an.parse(target, ParseMode::Smart) {
            Ok(v) => format!("{}%", format_float(v)),
            Err(_) => m.to_string(),
        }
    }

    fn sub_cn_celsius(&self, m: &str) -> String {
        let target = match m.strip_suffix("摄氏度") {
            Some(t) => t,
            None => return m.to_string(),
        };
        match self.cn2an.parse(target, ParseMode::Smart) {
            Ok(v) => format!("{}℃", format_float(v)),
            Err(_) => m.to_string(),
        }
    }

    fn sub_cn_number(&self, m: &str) -> String {
        match self.cn2an.parse(m, ParseMode::Smart) {
            Ok(v) => format_float(v),
            Err(_) => m.to_string(),
        }
    }

    // ------ 阿拉伯 → 中文的跨度替换 ------

    fn sub_an_date(&self, m: &str) -> String {
        let normalized: String = m.split_whitespace().collect();
        if normalized.is_empty() {
            return m.to_string();
        }
        // 年份逐位直读，月日按位值读
        let replaced = self
            .year_run
            .replace_all(&normalized, |caps: &Captures<'_>| {
                let span = &caps[0];
                let digits = span.trim_end_matches('年');
                match self.an2cn.convert(digits, RenderMode::Direct) {
                    Ok(cn) => format!("{}年", cn),
                    Err(_) => span.to_string(),
                }
            })
            .into_owned();
        self.digit_run
            .replace_all(&replaced, |caps: &Captures<'_>| {
                let span = &caps[0];
                self.an2cn
                    .convert(span, RenderMode::Low)
                    .unwrap_or_else(|_| span.to_string())
            })
            .into_owned()
    }

    fn sub_an_fraction(&self, m: &str) -> String {
        let replaced = self
            .digit_run
            .replace_all(m, |caps: &Captures<'_>| {
                let span = &caps[0];
                self.an2cn
                    .convert(span, RenderMode::Low)
                    .unwrap_or_else(|_| span.to_string())
            })
            .into_owned();
        let parts: Vec<&str> = replaced.split('/').collect();
        match parts.as_slice() {
            [num, den] => format!("{}分之{}", den, num),
            _ => m.to_string(),
        }
    }

    fn sub_an_percent(&self, m: &str) -> String {
        let target = match m.strip_suffix('%') {
            Some(t) => t,
            None => return m.to_string(),
        };
        match self.an2cn.convert(target, RenderMode::Low) {
            Ok(cn) => format!("百分之{}", cn),
            Err(_) => m.to_string(),
        }
    }

    fn sub_an_celsius(&self, m: &str) -> String {
        let target = match m.strip_suffix('℃') {
            Some(t) => t,
            None => return m.to_string(),
        };
        match self.an2cn.convert(target, RenderMode::Low) {
            Ok(cn) => match cn.strip_prefix('负') {
                Some(rest) => format!("-{}摄氏度", rest),
                None => format!("{}摄氏度", cn),
            },
            Err(_) => m.to_string(),
        }
    }

    fn sub_an_number(&self, m: &str) -> String {
        self.an2cn
            .convert(m, RenderMode::Low)
            .unwrap_or_else(|_| m.to_string())
    }

    // ------ 数学符号处理（转中文方向） ------

    /// 减号变体归一，并在数字改写前用占位符锁定二元减号
    fn preprocess_math_symbols(&self, s: &str) -> String {
        if s.is_empty() {
            return String::new();
        }
        let normalized: String = s
            .chars()
            .map(|ch| match ch {
                '−' | '﹣' | '－' => '-',
                other => other,
            })
            .collect();
        self.mark_binary_minus(&normalized)
    }

    fn mark_binary_minus(&self, s: &str) -> String {
        let chars: Vec<char> = s.chars().collect();
        let mut out = String::with_capacity(s.len() * 2);
        for (i, &ch) in chars.iter().enumerate() {
            if ch == '-' && is_binary_minus(&chars, i) {
                out.push_str(MINUS_PLACEHOLDER);
            } else {
                out.push(ch);
            }
        }
        out
    }

    fn postprocess_math_symbols(&self, s: String) -> String {
        if s.is_empty() {
            return s;
        }
        let s = s.replace(MINUS_PLACEHOLDER, "减");
        let s = replace_embedded_negative(&s);
        let s = self.replace_exponent_notation(s);
        let s = replace_absolute_value(&s);
        let mut s = s;
        for (sym, word) in MATH_SYMBOL_WORDS {
            if s.contains(sym) {
                s = s.replace(sym, word);
            }
        }
        let s = replace_slash_symbols(&s);
        let s = replace_asterisk_symbols(&s);
        convert_remaining_minus(&s)
    }

    fn replace_exponent_notation(&self, mut s: String) -> String {
        while s.contains('^') {
            let replaced = self
                .exponent
                .replace_all(&s, |caps: &Captures<'_>| {
                    let base = caps[1].trim();
                    let exp = caps[2].trim();
                    if base.is_empty() || exp.is_empty() {
                        caps[0].to_string()
                    } else {
                        format!("{}的{}次方", base, exp)
                    }
                })
                .into_owned();
            if replaced == s {
                break;
            }
            s = replaced;
        }
        s
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::new()
    }
}

fn format_float(v: f64) -> String {
    format!("{}", v)
}

// ------ 符号上下文判定 ------

fn prev_non_space(chars: &[char], idx: usize) -> Option<(usize, char)> {
    chars[..idx]
        .iter()
        .enumerate()
        .rev()
        .find(|(_, ch)| !ch.is_whitespace())
        .map(|(i, ch)| (i, *ch))
}

fn next_non_space(chars: &[char], idx: usize) -> Option<(usize, char)> {
    chars
        .iter()
        .enumerate()
        .skip(idx + 1)
        .find(|(_, ch)| !ch.is_whitespace())
        .map(|(i, ch)| (i, *ch))
}

fn is_ascii_letter(ch: char) -> bool {
    ch.is_ascii_alphabetic()
}

fn is_chinese_numeral(ch: char) -> bool {
    "零〇一壹幺二贰两三叁仨四肆五伍六陆七柒八捌九玖点".contains(ch)
}

fn is_greek(ch: char) -> bool {
    matches!(ch, '\u{0370}'..='\u{03FF}' | '\u{1F00}'..='\u{1FFF}')
}

fn is_operand_core(ch: char) -> bool {
    ch.is_numeric() || is_ascii_letter(ch) || is_chinese_numeral(ch) || is_greek(ch)
}

fn is_binary_prev_operand(ch: char) -> bool {
    is_operand_core(ch)
        || matches!(
            ch,
            ')' | ']' | '}' | '℃' | '％' | '%' | '°' | '∞' | 'π' | '∑' | 'Σ' | '∫' | '∂'
        )
}

fn is_binary_next_operand(ch: char) -> bool {
    is_operand_core(ch) || matches!(ch, '(' | '[' | '{')
}

fn is_slash_operand(ch: char) -> bool {
    is_operand_core(ch) || matches!(ch, '(' | ')' | '[' | ']' | '{' | '}')
}

fn is_unary_minus_prefix(ch: char) -> bool {
    matches!(
        ch,
        '+' | '-'
            | '−'
            | '*'
            | '×'
            | '✕'
            | '✖'
            | '⋅'
            | '·'
            | '/'
            | '÷'
            | '='
            | '('
            | '['
            | '{'
            | ','
            | '，'
            | '。'
            | '、'
            | '；'
            | '：'
    )
}

/// ASCII 单词内部的连字符（check-in 里的短横）不是减号
fn is_hyphen_inside_word(chars: &[char], minus_idx: usize, prev_idx: usize, next_idx: usize) -> bool {
    if prev_idx + 1 != minus_idx || next_idx != minus_idx + 1 {
        return false;
    }
    let prev = chars[prev_idx];
    let next = chars[next_idx];
    if !is_ascii_letter(prev) || !is_ascii_letter(next) {
        return false;
    }
    if prev_idx > 0 && is_ascii_letter(chars[prev_idx - 1]) {
        return true;
    }
    if next_idx + 1 < chars.len() && is_ascii_letter(chars[next_idx + 1]) {
        return true;
    }
    false
}

fn is_binary_minus(chars: &[char], idx: usize) -> bool {
    let (prev_idx, prev) = match prev_non_space(chars, idx) {
        Some(p) => p,
        None => return false,
    };
    let (next_idx, next) = match next_non_space(chars, idx) {
        Some(n) => n,
        None => return false,
    };
    if !is_binary_prev_operand(prev) || !is_binary_next_operand(next) {
        return false;
    }
    !is_hyphen_inside_word(chars, idx, prev_idx, next_idx)
}

/// 夹在两个运算对象之间的 负（来自负数渲染）读作 减
fn replace_embedded_negative(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    let mut out = String::with_capacity(s.len() * 2);
    for (i, &ch) in chars.iter().enumerate() {
        if ch == '负' {
            let prev = prev_non_space(&chars, i);
            let next = next_non_space(&chars, i);
            if let (Some((_, p)), Some((_, n))) = (prev, next) {
                if is_operand_core(p) && is_operand_core(n) {
                    out.push('减');
                    continue;
                }
            }
        }
        out.push(ch);
    }
    out
}

/// |x| 读作 x的绝对值；连续的 || 原样保留
fn replace_absolute_value(s: &str) -> String {
    if !s.contains('|') {
        return s.to_string();
    }
    let chars: Vec<char> = s.chars().collect();
    let mut out = String::with_capacity(s.len() * 2);
    let mut i = 0;
    while i < chars.len() {
        let ch = chars[i];
        if ch != '|' {
            out.push(ch);
            i += 1;
            continue;
        }
        if (i + 1 < chars.len() && chars[i + 1] == '|') || (i > 0 && chars[i - 1] == '|') {
            out.push(ch);
            i += 1;
            continue;
        }
        let mut j = i + 1;
        while j < chars.len() && chars[j] != '|' {
            j += 1;
        }
        if j >= chars.len() {
            out.push(ch);
            i += 1;
            continue;
        }
        let inner: String = chars[i + 1..j].iter().collect();
        let inner = inner.trim();
        if inner.is_empty() {
            out.push(ch);
            i += 1;
            continue;
        }
        out.push_str(inner);
        out.push_str("的绝对值");
        i = j + 1;
    }
    out
}

fn replace_slash_symbols(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    let mut out = String::with_capacity(s.len() * 2);
    for (i, &ch) in chars.iter().enumerate() {
        if ch == '/' && is_division_slash(&chars, i) {
            out.push_str("除以");
        } else {
            out.push(ch);
        }
    }
    out
}

fn is_division_slash(chars: &[char], idx: usize) -> bool {
    let (prev_idx, prev) = match prev_non_space(chars, idx) {
        Some(p) => p,
        None => return false,
    };
    let (next_idx, next) = match next_non_space(chars, idx) {
        Some(n) => n,
        None => return false,
    };
    if chars[prev_idx] == '/' || chars[next_idx] == '/' {
        return false;
    }
    // 比例写法 1:2/3 与 URL 的斜杠不读
    if prev == ':' {
        return false;
    }
    if idx > 0 && chars[idx - 1] == '/' {
        return false;
    }
    if idx + 1 < chars.len() && chars[idx + 1] == '/' {
        return false;
    }
    is_slash_operand(prev) && is_slash_operand(next)
}

fn replace_asterisk_symbols(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    let mut out = String::with_capacity(s.len() * 2);
    for (i, &ch) in chars.iter().enumerate() {
        if ch == '*' && is_multiplication_asterisk(&chars, i) {
            out.push('乘');
        } else {
            out.push(ch);
        }
    }
    out
}

fn is_multiplication_asterisk(chars: &[char], idx: usize) -> bool {
    let (prev_idx, prev) = match prev_non_space(chars, idx) {
        Some(p) => p,
        None => return false,
    };
    let (next_idx, next) = match next_non_space(chars, idx) {
        Some(n) => n,
        None => return false,
    };
    if chars[prev_idx] == '*' || chars[next_idx] == '*' {
        return false;
    }
    is_slash_operand(prev) && is_slash_operand(next)
}

/// 剩余减号：两侧都是对象读 减，仅右侧是对象读 负，否则保留
fn convert_remaining_minus(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    let mut out = String::with_capacity(s.len() * 2);
    for (i, &ch) in chars.iter().enumerate() {
        if ch == '-' {
            let prev = prev_non_space(&chars, i);
            let next = next_non_space(&chars, i);
            if let (Some((pi, p)), Some((ni, n))) = (prev, next) {
                if is_hyphen_inside_word(&chars, i, pi, ni) {
                    out.push(ch);
                    continue;
                }
                if is_binary_prev_operand(p) && is_binary_next_operand(n) {
                    out.push('减');
                    continue;
                }
            }
            if let Some((_, n)) = next {
                if is_binary_next_operand(n)
                    && (prev.is_none() || is_unary_minus_prefix(prev.map(|(_, p)| p).unwrap_or(' ')))
                {
                    out.push('负');
                    continue;
                }
            }
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tr() -> Transform {
        Transform::new()
    }

    #[test]
    fn test_sentence_pairs_both_directions() {
        let t = tr();
        let pairs = [
            ("小王捡了100块钱", "小王捡了一百块钱"),
            ("用户增长最快的3个城市", "用户增长最快的三个城市"),
            ("小王的生日是2001年3月4日", "小王的生日是二零零一年三月四日"),
            ("小王的生日是2012年12月12日", "小王的生日是二零一二年十二月十二日"),
            ("今天股价上涨了8%", "今天股价上涨了百分之八"),
            ("第2天股价下降了-3.8%", "第二天股价下降了百分之负三点八"),
            ("抛出去的硬币为正面的概率是1/2", "抛出去的硬币为正面的概率是二分之一"),
            ("现在室内温度为39℃，很热啊！", "现在室内温度为三十九摄氏度，很热啊！"),
            ("创业板指9月9日早盘低开1.57%", "创业板指九月九日早盘低开百分之一点五七"),
            ("今年盈利增长率为12.34%", "今年盈利增长率为百分之十二点三四"),
            ("实验成功率是0.5%", "实验成功率是百分之零点五"),
            ("股票价格下跌了-7.25%", "股票价格下跌了百分之负七点二五"),
            ("预计需要3/8的时间完成", "预计需要八分之三的时间完成"),
            ("室外温度是-5℃", "室外温度是-五摄氏度"),
            ("我们有2500个用户", "我们有二千五百个用户"),
            ("连续发布3天", "连续发布三天"),
            ("第10期节目", "第十期节目"),
        ];
        for (arabic, chinese) in pairs {
            assert_eq!(
                t.transform(arabic, Direction::ToChinese),
                chinese,
                "an2cn: {}",
                arabic
            );
            assert_eq!(
                t.transform(chinese, Direction::ToArabic),
                arabic,
                "cn2an: {}",
                chinese
            );
        }
    }

    #[test]
    fn test_smart_spans_to_arabic() {
        let t = tr();
        let cases = [
            ("约2.5亿年~6500万年", "约250000000年~65000000年"),
            ("廿二日，日出东方", "22日，日出东方"),
            ("大陆", "大陆"),
            ("半斤", "0.5斤"),
            ("两个", "2个"),
        ];
        for (input, expected) in cases {
            assert_eq!(t.transform(input, Direction::ToArabic), expected, "{}", input);
        }
    }

    #[test]
    fn test_minus_disambiguation() {
        let t = tr();
        // 二元减号
        assert_eq!(t.transform("x-y", Direction::ToChinese), "x减y");
        assert_eq!(t.transform("5-3", Direction::ToChinese), "五减三");
        // 一元负号
        assert_eq!(t.transform("-y", Direction::ToChinese), "负y");
        assert_eq!(t.transform("-5", Direction::ToChinese), "负五");
        // 单词内连字符保持原样
        assert_eq!(t.transform("web-app2x", Direction::ToChinese), "web-app二x");
        assert_eq!(t.transform("check-in", Direction::ToChinese), "check-in");
    }

    #[test]
    fn test_math_symbols() {
        let t = tr();
        assert_eq!(t.transform("1+2=3", Direction::ToChinese), "一加二等于三");
        assert_eq!(t.transform("a<=b", Direction::ToChinese), "a小于等于b");
        assert_eq!(t.transform("a!=b", Direction::ToChinese), "a不等于b");
        assert_eq!(t.transform("2×3", Direction::ToChinese), "二乘三");
        assert_eq!(t.transform("6÷2", Direction::ToChinese), "六除以二");
        // 纯数字斜杠先被当作分数
        assert_eq!(t.transform("6/2", Direction::ToChinese), "二分之六");
        assert_eq!(t.transform("a/b", Direction::ToChinese), "a除以b");
        assert_eq!(t.transform("6*2", Direction::ToChinese), "六乘二");
        assert_eq!(t.transform("x^2", Direction::ToChinese), "x的二次方");
        assert_eq!(t.transform("|x|", Direction::ToChinese), "x的绝对值");
        assert_eq!(t.transform("π≈3.14", Direction::ToChinese), "派≈三点一四");
    }

    #[test]
    fn test_slash_not_division() {
        let t = tr();
        // URL 双斜杠不读
        let out = t.transform("http://a.com", Direction::ToChinese);
        assert!(out.contains("//"), "{}", out);
    }
}
