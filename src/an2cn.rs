//! 阿拉伯数字转中文数字
//!
//! 支持四种渲染模式：low（小写）、up（大写）、rmb（人民币金额）、
//! direct（逐位直读）。

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Cn2anError, Cn2anResult};
use crate::normalize::normalize_text;
use crate::tables::{Vocabulary, MAX_DECIMAL_DIGITS, MAX_INTEGER_DIGITS};

/// 渲染模式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderMode {
    /// 小写：一百二十三
    Low,
    /// 大写：壹佰贰拾叁
    Up,
    /// 人民币金额：壹佰贰拾叁元整
    Rmb,
    /// 逐位直读：一二三
    Direct,
}

impl RenderMode {
    pub fn as_str(self) -> &'static str {
        match self {
            RenderMode::Low => "low",
            RenderMode::Up => "up",
            RenderMode::Rmb => "rmb",
            RenderMode::Direct => "direct",
        }
    }
}

impl fmt::Display for RenderMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RenderMode {
    type Err = Cn2anError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(RenderMode::Low),
            "up" => Ok(RenderMode::Up),
            "rmb" => Ok(RenderMode::Rmb),
            "direct" => Ok(RenderMode::Direct),
            other => Err(Cn2anError::UnsupportedMode(other.to_string())),
        }
    }
}

/// 渲染器输入
///
/// 浮点输入先转为十进制字符串并保留结尾的 `.0`，
/// 避免 12.0 丢失小数位信息（应渲染为「十二点零」）。
#[derive(Debug, Clone)]
pub enum NumberInput {
    Int(i64),
    Float(f64),
    Text(String),
}

impl From<i64> for NumberInput {
    fn from(v: i64) -> Self {
        NumberInput::Int(v)
    }
}

impl From<i32> for NumberInput {
    fn from(v: i32) -> Self {
        NumberInput::Int(v as i64)
    }
}

impl From<f64> for NumberInput {
    fn from(v: f64) -> Self {
        NumberInput::Float(v)
    }
}

impl From<&str> for NumberInput {
    fn from(v: &str) -> Self {
        NumberInput::Text(v.to_string())
    }
}

impl From<String> for NumberInput {
    fn from(v: String) -> Self {
        NumberInput::Text(v)
    }
}

fn float_to_string(v: f64) -> String {
    let s = format!("{}", v);
    if !s.contains('.') && v.is_finite() && v.trunc() == v {
        format!("{}.0", s)
    } else {
        s
    }
}

/// 阿拉伯数字转中文数字的转换器
#[derive(Debug, Clone, Default)]
pub struct An2Cn;

impl An2Cn {
    pub fn new() -> Self {
        Self
    }

    /// 渲染主入口
    ///
    /// # 示例
    /// ```
    /// # use cn2an::{An2Cn, RenderMode};
    /// let a = An2Cn::new();
    /// assert_eq!(a.convert(1234, RenderMode::Low).unwrap(), "一千二百三十四");
    /// ```
    pub fn convert(
        &self,
        input: impl Into<NumberInput>,
        mode: RenderMode,
    ) -> Cn2anResult<String> {
        let input_str = match input.into() {
            NumberInput::Int(v) => v.to_string(),
            NumberInput::Float(v) => float_to_string(v),
            NumberInput::Text(s) => s,
        };
        if input_str.is_empty() {
            return Err(Cn2anError::EmptyInput);
        }

        let data = normalize_text(&input_str);
        self.check_chars(&data)?;

        // 符号统一渲染为前缀 负
        let (sign, body) = match data.strip_prefix('-') {
            Some(rest) => ("负", rest),
            None => ("", data.as_str()),
        };

        let output = match mode {
            RenderMode::Direct => self.direct_convert(body)?,
            RenderMode::Rmb => self.rmb_convert(body)?,
            RenderMode::Low | RenderMode::Up => {
                let vocab = if mode == RenderMode::Low {
                    Vocabulary::Low
                } else {
                    Vocabulary::Up
                };
                let parts: Vec<&str> = body.split('.').collect();
                match parts.as_slice() {
                    [integer] => self.integer_convert(integer, vocab)?,
                    [integer, decimal] => {
                        let int_out = self.integer_convert(integer, vocab)?;
                        let dec_out = self.decimal_convert(decimal, vocab)?;
                        format!("{}{}", int_out, dec_out)
                    }
                    _ => return Err(Cn2anError::MalformedDecimal),
                }
            }
        };

        Ok(format!("{}{}", sign, output))
    }

    /// 输入只允许 ASCII 数字、小数点与负号
    fn check_chars(&self, data: &str) -> Cn2anResult<()> {
        for ch in data.chars() {
            if !ch.is_ascii_digit() && ch != '.' && ch != '-' {
                return Err(Cn2anError::InvalidCharacter { mode: "an2cn", ch });
            }
        }
        Ok(())
    }

    /// 整数部分的位值渲染
    fn integer_convert(&self, integer_data: &str, vocab: Vocabulary) -> Cn2anResult<String> {
        if integer_data.is_empty() || !integer_data.bytes().all(|b| b.is_ascii_digit()) {
            return Err(Cn2anError::FormatError(integer_data.to_string()));
        }

        // 去除前导零
        let trimmed = integer_data.trim_start_matches('0');
        let digits = if trimmed.is_empty() { "0" } else { trimmed };
        if digits.len() > MAX_INTEGER_DIGITS {
            return Err(Cn2anError::MagnitudeOverflow {
                max_len: MAX_INTEGER_DIGITS,
            });
        }

        let glyphs = vocab.digit_glyphs();
        let ladder = vocab.unit_ladder();
        let len = digits.len();

        let mut out = String::new();
        for (i, b) in digits.bytes().enumerate() {
            let d = (b - b'0') as usize;
            let pos = len - i - 1;
            if d != 0 {
                out.push(glyphs[d]);
                out.push_str(ladder[pos]);
            } else {
                // 万、亿组界上即使是零也要落单位，锚定后续组的量级
                if pos % 4 == 0 {
                    out.push(glyphs[0]);
                    out.push_str(ladder[pos]);
                }
                if i > 0 && !out.ends_with(glyphs[0]) {
                    out.push(glyphs[0]);
                }
            }
        }

        // 折叠零串与空组单位
        let mut out = out
            .replace("零零", "零")
            .replace("零万", "万")
            .replace("零亿", "亿")
            .replace("亿万", "亿");
        out = out.trim_matches('零').to_string();

        // 「一十几」省略前导一（仅小写字形）
        if out.starts_with("一十") {
            out = out.trim_start_matches('一').to_string();
        }

        if out.is_empty() {
            out.push(glyphs[0]);
        }

        Ok(out)
    }

    /// 小数部分逐位渲染，带 点 前缀；超过上限的位截断
    fn decimal_convert(&self, decimal_data: &str, vocab: Vocabulary) -> Cn2anResult<String> {
        let capped: String = decimal_data.chars().take(MAX_DECIMAL_DIGITS).collect();
        if capped.is_empty() {
            return Ok(String::new());
        }

        let glyphs = vocab.digit_glyphs();
        let mut out = String::from("点");
        for b in capped.bytes() {
            if !b.is_ascii_digit() {
                return Err(Cn2anError::FormatError(decimal_data.to_string()));
            }
            out.push(glyphs[(b - b'0') as usize]);
        }
        Ok(out)
    }

    /// 人民币金额：大写整数 + 元角分；角分只取前两位小数
    fn rmb_convert(&self, body: &str) -> Cn2anResult<String> {
        let parts: Vec<&str> = body.split('.').collect();
        let (integer_data, decimal_data) = match parts.as_slice() {
            [integer] => (*integer, ""),
            [integer, decimal] => (*integer, *decimal),
            _ => return Err(Cn2anError::MalformedDecimal),
        };

        let int_data = self.integer_convert(integer_data, Vocabulary::Up)?;
        let dec_data = self.decimal_convert(decimal_data, Vocabulary::Up)?;
        let dec: Vec<char> = dec_data.chars().collect();

        let output = match dec.len() {
            0 => format!("{}元整", int_data),
            1 => return Err(Cn2anError::FormatError(dec_data)),
            2 => {
                let jiao = dec[1];
                if jiao != '零' {
                    if int_data == "零" {
                        format!("{}角", jiao)
                    } else {
                        format!("{}元{}角", int_data, jiao)
                    }
                } else {
                    format!("{}元整", int_data)
                }
            }
            _ => {
                let jiao = dec[1];
                let fen = dec[2];
                if jiao != '零' {
                    if fen != '零' {
                        if int_data == "零" {
                            format!("{}角{}分", jiao, fen)
                        } else {
                            format!("{}元{}角{}分", int_data, jiao, fen)
                        }
                    } else if int_data == "零" {
                        format!("{}角", jiao)
                    } else {
                        format!("{}元{}角", int_data, jiao)
                    }
                } else if fen != '零' {
                    if int_data == "零" {
                        format!("{}分", fen)
                    } else {
                        format!("{}元零{}分", int_data, fen)
                    }
                } else {
                    format!("{}元整", int_data)
                }
            }
        };

        Ok(output)
    }

    /// 逐位直读：每位数字独立映射，小数点读作 点
    fn direct_convert(&self, body: &str) -> Cn2anResult<String> {
        let glyphs = Vocabulary::Low.digit_glyphs();
        let mut out = String::new();
        for ch in body.chars() {
            if ch == '.' {
                out.push('点');
            } else if let Some(d) = ch.to_digit(10) {
                out.push(glyphs[d as usize]);
            } else {
                return Err(Cn2anError::FormatError(body.to_string()));
            }
        }
        Ok(out)
    }
}
