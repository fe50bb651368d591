//! 中文数字转阿拉伯数字
//!
//! 三种解析模式：strict 只接受规范书面形式，normal 额外接受口语
//! 字形与简写，smart 在 normal 之上接受中阿混写（10.1万、1百23）。
//!
//! 解析管线：归一化 → 金额后缀处理 → 字符集检查 → 符号提取 →
//! 整数/小数切分 → 位值文法校验 → 数值累加。

use std::fmt;
use std::str::FromStr;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::an2cn::{An2Cn, RenderMode};
use crate::error::{Cn2anError, Cn2anResult};
use crate::grammar::{
    self, is_digit_token, is_spoken_shorthand, matches_decimal, matches_integer, NumToken,
    Strictness,
};
use crate::normalize::normalize_text;
use crate::tables::NumeralTables;

/// 解析模式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParseMode {
    /// 仅规范书面形式
    Strict,
    /// 额外接受 〇幺两仨、纯数直读、口语简写
    Normal,
    /// 额外接受阿拉伯数字混写
    Smart,
}

impl ParseMode {
    pub fn as_str(self) -> &'static str {
        match self {
            ParseMode::Strict => "strict",
            ParseMode::Normal => "normal",
            ParseMode::Smart => "smart",
        }
    }

    fn strictness(self) -> Strictness {
        match self {
            ParseMode::Strict => Strictness::Strict,
            ParseMode::Normal | ParseMode::Smart => Strictness::Normal,
        }
    }
}

impl fmt::Display for ParseMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ParseMode {
    type Err = Cn2anError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "strict" => Ok(ParseMode::Strict),
            "normal" => Ok(ParseMode::Normal),
            "smart" => Ok(ParseMode::Smart),
            other => Err(Cn2anError::UnsupportedMode(other.to_string())),
        }
    }
}

/// 校验通过后的中间表示
enum Validated {
    /// smart 捷径：数值已经算好
    Direct(f64),
    /// 待累加的记号跨度
    Spans {
        sign: f64,
        integer: Vec<NumToken>,
        decimal: Option<Vec<NumToken>>,
        /// 无单位的纯数字串，按逐位直读取值
        headless: bool,
    },
}

/// 中文数字转阿拉伯数字的转换器
#[derive(Debug, Clone)]
pub struct Cn2An {
    tables: NumeralTables,
    an2cn: An2Cn,
    /// 元角分金额形式（在原始输入上匹配）
    yjf_pattern: Regex,
    /// smart 捷径：阿拉伯数字带可选中文单位后缀
    unit_suffix_pattern: Regex,
    /// smart 混写中的阿拉伯数字串
    digit_run: Regex,
}

impl Cn2An {
    pub fn new() -> Self {
        let tables = NumeralTables::new();
        let all_num = tables.all_digit_glyphs();
        let all_unit = tables.all_unit_glyphs();
        let yjf_pattern = Regex::new(&format!(
            "^.*?[元圆][{0}]角([{0}]分)?$",
            all_num
        ))
        .expect("invalid built-in pattern");
        let unit_suffix_pattern =
            Regex::new(&format!(r"^-?\d+(\.\d+)?[{}]?$", all_unit))
                .expect("invalid built-in pattern");
        let digit_run = Regex::new(r"\d+").expect("invalid built-in pattern");

        Self {
            tables,
            an2cn: An2Cn::new(),
            yjf_pattern,
            unit_suffix_pattern,
            digit_run,
        }
    }

    /// 解析主入口
    ///
    /// # 示例
    /// ```
    /// # use cn2an::{Cn2An, ParseMode};
    /// let c = Cn2An::new();
    /// assert_eq!(c.parse("一百二十三", ParseMode::Strict).unwrap(), 123.0);
    /// assert_eq!(c.parse("10.1万", ParseMode::Smart).unwrap(), 101000.0);
    /// ```
    pub fn parse(&self, inputs: &str, mode: ParseMode) -> Cn2anResult<f64> {
        if inputs.is_empty() {
            return Err(Cn2anError::EmptyInput);
        }

        let data = normalize_text(inputs);
        let data = data.replace('廿', "二十");

        match self.check_input(&data, mode)? {
            Validated::Direct(value) => Ok(value),
            Validated::Spans {
                sign,
                integer,
                decimal,
                headless,
            } => {
                let int_val = if headless {
                    self.direct_convert(&integer)
                } else {
                    self.integer_convert(&integer)
                };
                let output = match decimal {
                    None => int_val as f64,
                    Some(dec_toks) => {
                        let dec_val = self.decimal_convert(&dec_toks)?;
                        round_to_decimal(int_val as f64 + dec_val, dec_toks.len())
                    }
                };
                Ok(sign * output)
            }
        }
    }

    /// 校验输入并切分为记号跨度
    fn check_input(&self, data: &str, mode: ParseMode) -> Cn2anResult<Validated> {
        let original = data;
        let mut check_data = data.to_string();

        // 金额后缀
        for word in ["元整", "圆整", "元正", "圆正"] {
            if let Some(rest) = check_data.strip_suffix(word) {
                check_data = rest.to_string();
            }
        }
        if mode != ParseMode::Strict {
            for word in ['圆', '元'] {
                if let Some(rest) = check_data.strip_suffix(word) {
                    check_data = rest.to_string();
                }
            }
        }

        // 元角分形式改写为小数（三元五角二分 → 三点五二）
        if self.yjf_pattern.is_match(original) {
            check_data = check_data
                .replace('元', "点")
                .replace('圆', "点")
                .replace('角', "")
                .replace('分', "");
        }

        // 口语省略的前导一（零十 → 零一十）
        check_data = check_data
            .replace("零十", "零一十")
            .replace("零百", "零一百");

        self.check_charset(&check_data, mode)?;

        // 符号
        let mut sign = 1.0_f64;
        if let Some(rest) = check_data.strip_prefix('负') {
            sign = -1.0;
            check_data = rest.to_string();
        }

        let strictness = mode.strictness();

        if check_data.contains('点') {
            let parts: Vec<&str> = check_data.split('点').collect();
            let (int_part, dec_part) = match parts.as_slice() {
                [i, d] => (i.to_string(), d.to_string()),
                _ => return Err(Cn2anError::MalformedDecimal),
            };
            let (int_part, dec_part, strictness) = if mode == ParseMode::Smart {
                (
                    self.rewrite_digit_runs(&int_part),
                    self.rewrite_digit_runs_direct(&dec_part),
                    Strictness::Normal,
                )
            } else {
                (int_part, dec_part, strictness)
            };
            if dec_part.is_empty() {
                return Err(Cn2anError::FormatError(check_data));
            }
            self.validate_spans(sign, &int_part, Some(&dec_part), strictness)
        } else {
            let mut int_part = check_data.clone();
            let mut strictness = strictness;
            if mode == ParseMode::Smart {
                // 阿拉伯数字带可选单位的捷径：10.1万、-12
                if self.unit_suffix_pattern.is_match(&int_part) {
                    if let Some(value) = self.smart_shortcut(&int_part)? {
                        return Ok(Validated::Direct(sign * value));
                    }
                }
                int_part = self.rewrite_digit_runs(&int_part);
                strictness = Strictness::Normal;
            }
            self.validate_spans(sign, &int_part, None, strictness)
        }
    }

    /// smart 捷径的取值；数字部分无法解析时返回 None 走常规改写
    fn smart_shortcut(&self, data: &str) -> Cn2anResult<Option<f64>> {
        let mut chars: Vec<char> = data.chars().collect();
        let last = match chars.last() {
            Some(ch) => *ch,
            None => return Ok(None),
        };
        if let Some(unit_val) = self.tables.unit_value(last) {
            chars.pop();
            let num_part: String = chars.into_iter().collect();
            if num_part.is_empty() {
                return Err(Cn2anError::FormatError(data.to_string()));
            }
            match num_part.parse::<f64>() {
                Ok(v) => Ok(Some(v * unit_val as f64)),
                Err(_) => Ok(None),
            }
        } else {
            Ok(data.parse::<f64>().ok())
        }
    }

    /// 记号化并按位值文法校验整数与小数跨度
    fn validate_spans(
        &self,
        sign: f64,
        int_part: &str,
        dec_part: Option<&str>,
        strictness: Strictness,
    ) -> Cn2anResult<Validated> {
        let int_toks = grammar::tokenize(&self.tables, int_part, strictness)
            .ok_or_else(|| Cn2anError::FormatError(int_part.to_string()))?;
        let dec_toks = match dec_part {
            None => None,
            Some(d) => {
                let toks = grammar::tokenize(&self.tables, d, strictness)
                    .ok_or_else(|| Cn2anError::FormatError(d.to_string()))?;
                if !matches_decimal(&toks, strictness) {
                    return Err(Cn2anError::FormatError(d.to_string()));
                }
                Some(toks)
            }
        };

        if matches_integer(&int_toks) {
            return Ok(Validated::Spans {
                sign,
                integer: int_toks,
                decimal: dec_toks,
                headless: false,
            });
        }

        if strictness == Strictness::Normal {
            // 纯数直读：一二三 → 123
            if !int_toks.is_empty() && int_toks.iter().all(is_digit_token) {
                return Ok(Validated::Spans {
                    sign,
                    integer: int_toks,
                    decimal: dec_toks,
                    headless: true,
                });
            }

            // 口语简写：一万二 → 一万二千
            if is_spoken_shorthand(&int_toks) {
                let mut toks = int_toks;
                if let Some(&NumToken::Unit(v)) = toks.get(toks.len() - 2) {
                    if let Some(glyph) = self.tables.unit_glyph_for_value(v / 10) {
                        if let Some(val) = self.tables.unit_value(glyph) {
                            toks.push(NumToken::Unit(val));
                        }
                    }
                    return Ok(Validated::Spans {
                        sign,
                        integer: toks,
                        decimal: dec_toks,
                        headless: false,
                    });
                }
            }
        }

        Err(Cn2anError::FormatError(int_part.to_string()))
    }

    /// 按模式检查字符集
    fn check_charset(&self, data: &str, mode: ParseMode) -> Cn2anResult<()> {
        for ch in data.chars() {
            let digit_ok = match mode {
                ParseMode::Strict => self.tables.strict_digit(ch).is_some(),
                ParseMode::Normal | ParseMode::Smart => self.tables.normal_digit(ch).is_some(),
            };
            let common_ok = digit_ok || self.tables.is_unit_glyph(ch) || ch == '点' || ch == '负';
            let ok = if mode == ParseMode::Smart {
                common_ok || ch.is_ascii_digit() || ch == '.' || ch == '-'
            } else {
                common_ok
            };
            if !ok {
                return Err(Cn2anError::InvalidCharacter {
                    mode: mode.as_str(),
                    ch,
                });
            }
        }
        Ok(())
    }

    /// 把混写中的阿拉伯数字串改写为中文位值形式（23 → 二十三）
    fn rewrite_digit_runs(&self, data: &str) -> String {
        self.digit_run
            .replace_all(data, |caps: &regex::Captures<'_>| {
                let run = &caps[0];
                self.an2cn
                    .convert(run, RenderMode::Low)
                    .unwrap_or_else(|_| run.to_string())
            })
            .into_owned()
    }

    /// 小数部分的阿拉伯数字逐位改写（05 → 零五）
    fn rewrite_digit_runs_direct(&self, data: &str) -> String {
        self.digit_run
            .replace_all(data, |caps: &regex::Captures<'_>| {
                caps[0]
                    .bytes()
                    .map(|b| crate::tables::NUMBER_LOW[(b - b'0') as usize])
                    .collect::<String>()
            })
            .into_owned()
    }

    /// 位值累加，从低位向高位扫描；万、亿 作为组界单位相乘递进
    fn integer_convert(&self, toks: &[NumToken]) -> i64 {
        let mut output: i64 = 0;
        let mut unit: i64 = 1;
        let mut group: i64 = 1;

        for (i, tok) in toks.iter().enumerate().rev() {
            match *tok {
                NumToken::Zero => {}
                NumToken::Digit(d) => output += d as i64 * unit,
                NumToken::Unit(u) => {
                    unit = u;
                    if u % 10_000 == 0 {
                        if u > group {
                            group = u;
                        } else {
                            group *= u;
                            unit = group;
                        }
                    }
                    if unit < group {
                        unit *= group;
                    }
                    // 最高位是单位本身（十、十万）时补上隐含的一
                    if i == 0 {
                        output += unit;
                    }
                }
            }
        }

        output
    }

    /// 小数部分取值，按位数做一次十进制修约消除二进制误差
    fn decimal_convert(&self, toks: &[NumToken]) -> Cn2anResult<f64> {
        let mut text = String::from("0.");
        for tok in toks {
            match *tok {
                NumToken::Zero => text.push('0'),
                NumToken::Digit(d) => text.push((b'0' + d) as char),
                NumToken::Unit(_) => return Err(Cn2anError::MalformedDecimal),
            }
        }
        let val: f64 = text
            .parse()
            .map_err(|_| Cn2anError::FormatError(text.clone()))?;
        Ok(round_to_decimal(val, toks.len()))
    }

    /// 逐位直读取值：一二三 → 123
    fn direct_convert(&self, toks: &[NumToken]) -> i64 {
        toks.iter().fold(0_i64, |acc, tok| {
            let d = match *tok {
                NumToken::Zero => 0,
                NumToken::Digit(d) => d as i64,
                NumToken::Unit(_) => 0,
            };
            acc * 10 + d
        })
    }
}

impl Default for Cn2An {
    fn default() -> Self {
        Self::new()
    }
}

/// 按十进制位数修约
fn round_to_decimal(val: f64, precision: usize) -> f64 {
    format!("{:.*}", precision, val).parse().unwrap_or(val)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cn2an() -> Cn2An {
        Cn2An::new()
    }

    #[test]
    fn test_strict_integers() {
        let c = cn2an();
        assert_eq!(c.parse("零", ParseMode::Strict).unwrap(), 0.0);
        assert_eq!(c.parse("一", ParseMode::Strict).unwrap(), 1.0);
        assert_eq!(c.parse("十", ParseMode::Strict).unwrap(), 10.0);
        assert_eq!(c.parse("十一", ParseMode::Strict).unwrap(), 11.0);
        assert_eq!(c.parse("一百一十一", ParseMode::Strict).unwrap(), 111.0);
        assert_eq!(c.parse("一千零一", ParseMode::Strict).unwrap(), 1001.0);
        assert_eq!(c.parse("一万零五十四", ParseMode::Strict).unwrap(), 10054.0);
        assert_eq!(
            c.parse("一百万零五十四", ParseMode::Strict).unwrap(),
            1_000_054.0
        );
        assert_eq!(c.parse("十万亿", ParseMode::Strict).unwrap(), 1e13);
        assert_eq!(c.parse("负十一", ParseMode::Strict).unwrap(), -11.0);
        assert_eq!(c.parse("壹佰贰拾叁", ParseMode::Strict).unwrap(), 123.0);
    }

    #[test]
    fn test_strict_decimals() {
        let c = cn2an();
        assert_eq!(c.parse("一点二", ParseMode::Strict).unwrap(), 1.2);
        assert_eq!(c.parse("零点四三二一", ParseMode::Strict).unwrap(), 0.4321);
        assert_eq!(c.parse("负零点一", ParseMode::Strict).unwrap(), -0.1);
        assert_eq!(
            c.parse("一百万零五十四点四三二一", ParseMode::Strict).unwrap(),
            1_000_054.4321
        );
        // 严格模式不接受零结尾小数
        assert!(c.parse("一点二零", ParseMode::Strict).is_err());
        assert_eq!(c.parse("一点二零", ParseMode::Normal).unwrap(), 1.2);
    }

    #[test]
    fn test_strict_rejects_variants() {
        let c = cn2an();
        assert!(c.parse("两", ParseMode::Strict).is_err());
        assert!(c.parse("一二三", ParseMode::Strict).is_err());
        assert!(c.parse("一万二", ParseMode::Strict).is_err());
        assert!(c.parse("一千二十", ParseMode::Strict).is_err());
        assert!(c.parse("", ParseMode::Strict).is_err());
        assert!(c.parse("中文", ParseMode::Strict).is_err());
    }

    #[test]
    fn test_normal_mode() {
        let c = cn2an();
        assert_eq!(c.parse("两", ParseMode::Normal).unwrap(), 2.0);
        assert_eq!(c.parse("两万", ParseMode::Normal).unwrap(), 20000.0);
        assert_eq!(c.parse("仨", ParseMode::Normal).unwrap(), 3.0);
        assert_eq!(c.parse("幺幺零", ParseMode::Normal).unwrap(), 110.0);
        assert_eq!(c.parse("二〇二一", ParseMode::Normal).unwrap(), 2021.0);
        // 纯数直读
        assert_eq!(c.parse("一二三", ParseMode::Normal).unwrap(), 123.0);
        // 口语简写
        assert_eq!(c.parse("一万二", ParseMode::Normal).unwrap(), 12000.0);
        assert_eq!(c.parse("一千五", ParseMode::Normal).unwrap(), 1500.0);
        assert_eq!(c.parse("一万二千三", ParseMode::Normal).unwrap(), 12300.0);
        // 廿
        assert_eq!(c.parse("廿二", ParseMode::Normal).unwrap(), 22.0);
        // 零十 省略形式
        assert_eq!(c.parse("一千零十", ParseMode::Normal).unwrap(), 1010.0);
    }

    #[test]
    fn test_smart_mode() {
        let c = cn2an();
        assert_eq!(c.parse("10.1万", ParseMode::Smart).unwrap(), 101_000.0);
        assert_eq!(c.parse("10万", ParseMode::Smart).unwrap(), 100_000.0);
        assert_eq!(c.parse("2.5亿", ParseMode::Smart).unwrap(), 250_000_000.0);
        assert_eq!(c.parse("123", ParseMode::Smart).unwrap(), 123.0);
        assert_eq!(c.parse("-12", ParseMode::Smart).unwrap(), -12.0);
        assert_eq!(c.parse("1.5", ParseMode::Smart).unwrap(), 1.5);
        // 混写
        assert_eq!(c.parse("1百23", ParseMode::Smart).unwrap(), 123.0);
        assert_eq!(c.parse("一万二", ParseMode::Smart).unwrap(), 12000.0);
        assert_eq!(c.parse("负10.1万", ParseMode::Smart).unwrap(), -101_000.0);
        // smart 覆盖 normal 的能力
        assert_eq!(c.parse("一百二十三", ParseMode::Smart).unwrap(), 123.0);
    }

    #[test]
    fn test_rmb_suffixes() {
        let c = cn2an();
        assert_eq!(c.parse("壹元整", ParseMode::Strict).unwrap(), 1.0);
        assert_eq!(
            c.parse("壹佰万零伍拾肆元整", ParseMode::Strict).unwrap(),
            1_000_054.0
        );
        assert_eq!(c.parse("五元整", ParseMode::Strict).unwrap(), 5.0);
        assert_eq!(c.parse("五元", ParseMode::Normal).unwrap(), 5.0);
        // 元角分
        assert_eq!(c.parse("五元五角", ParseMode::Strict).unwrap(), 5.5);
        assert_eq!(
            c.parse("壹元贰角叁分", ParseMode::Strict).unwrap(),
            1.23
        );
        assert_eq!(c.parse("两元五角", ParseMode::Normal).unwrap(), 2.5);
    }

    #[test]
    fn test_errors() {
        let c = cn2an();
        assert!(matches!(
            c.parse("", ParseMode::Strict),
            Err(Cn2anError::EmptyInput)
        ));
        assert!(matches!(
            c.parse("一点二点三", ParseMode::Strict),
            Err(Cn2anError::MalformedDecimal)
        ));
        assert!(matches!(
            c.parse("一二三", ParseMode::Strict),
            Err(Cn2anError::FormatError(_))
        ));
        assert!(matches!(
            c.parse("hello", ParseMode::Smart),
            Err(Cn2anError::InvalidCharacter { .. })
        ));
        assert!(c.parse("一点", ParseMode::Normal).is_err());
    }

    #[test]
    fn test_traditional_and_fullwidth() {
        let c = cn2an();
        assert_eq!(c.parse("壹萬貳仟", ParseMode::Strict).unwrap(), 12000.0);
        assert_eq!(c.parse("兩萬", ParseMode::Normal).unwrap(), 20000.0);
        assert_eq!(c.parse("１０万", ParseMode::Smart).unwrap(), 100_000.0);
    }

    #[test]
    fn test_round_trip_against_renderer() {
        let c = cn2an();
        let a = An2Cn::new();
        for v in [0_i64, 1, 10, 11, 105, 1001, 10054, 1_000_054, 31_000_054] {
            let text = a.convert(v, RenderMode::Low).unwrap();
            assert_eq!(c.parse(&text, ParseMode::Strict).unwrap(), v as f64, "{}", text);
            let up = a.convert(v, RenderMode::Up).unwrap();
            assert_eq!(c.parse(&up, ParseMode::Strict).unwrap(), v as f64, "{}", up);
        }
    }
}
