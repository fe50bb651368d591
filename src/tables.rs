//! 数字词表
//!
//! 数字字形（小写/大写两套）、位值单位阶梯、字形到数值的映射。
//! 进程启动时构建一次，之后只读共享，渲染与解析两侧使用同一份词表。

use std::collections::HashMap;

/// 整数部分最长支持的位数（最高 10^16 量级）
pub const MAX_INTEGER_DIGITS: usize = 16;
/// 小数部分最长支持的位数
pub const MAX_DECIMAL_DIGITS: usize = 16;

/// 小写数字字形，下标即数值
pub const NUMBER_LOW: [char; 10] = [
    '零', '一', '二', '三', '四', '五', '六', '七', '八', '九',
];

/// 大写（防伪）数字字形
pub const NUMBER_UP: [char; 10] = [
    '零', '壹', '贰', '叁', '肆', '伍', '陆', '柒', '捌', '玖',
];

/// 小写单位阶梯，下标为十进制位序（万、亿之后按组重复）
pub const UNIT_LOW_ORDER: [&str; 16] = [
    "", "十", "百", "千", "万", "十", "百", "千", "亿", "十", "百", "千", "万", "十", "百", "千",
];

/// 大写单位阶梯
pub const UNIT_UP_ORDER: [&str; 16] = [
    "", "拾", "佰", "仟", "万", "拾", "佰", "仟", "亿", "拾", "佰", "仟", "万", "拾", "佰", "仟",
];

/// 渲染词汇表选择
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Vocabulary {
    /// 小写：一二三…
    Low,
    /// 大写：壹贰叁…
    Up,
}

impl Vocabulary {
    /// 该词汇表的数字字形
    pub fn digit_glyphs(self) -> &'static [char; 10] {
        match self {
            Vocabulary::Low => &NUMBER_LOW,
            Vocabulary::Up => &NUMBER_UP,
        }
    }

    /// 该词汇表的单位阶梯
    pub fn unit_ladder(self) -> &'static [&'static str; 16] {
        match self {
            Vocabulary::Low => &UNIT_LOW_ORDER,
            Vocabulary::Up => &UNIT_UP_ORDER,
        }
    }
}

/// 数字词表
///
/// 严格集只包含规范字形（小写 + 大写）；普通集额外接受
/// 口语/异体字形：〇、幺、两、仨。
#[derive(Debug, Clone)]
pub struct NumeralTables {
    digit_strict: HashMap<char, u8>,
    digit_normal: HashMap<char, u8>,
    unit_values: HashMap<char, i64>,
    unit_low_by_value: HashMap<i64, char>,
}

impl NumeralTables {
    pub fn new() -> Self {
        let strict_pairs: &[(char, u8)] = &[
            ('零', 0),
            ('一', 1),
            ('壹', 1),
            ('二', 2),
            ('贰', 2),
            ('三', 3),
            ('叁', 3),
            ('四', 4),
            ('肆', 4),
            ('五', 5),
            ('伍', 5),
            ('六', 6),
            ('陆', 6),
            ('七', 7),
            ('柒', 7),
            ('八', 8),
            ('捌', 8),
            ('九', 9),
            ('玖', 9),
        ];
        let normal_extra: &[(char, u8)] = &[('〇', 0), ('幺', 1), ('两', 2), ('仨', 3)];
        let unit_pairs: &[(char, i64)] = &[
            ('十', 10),
            ('拾', 10),
            ('百', 100),
            ('佰', 100),
            ('千', 1000),
            ('仟', 1000),
            ('万', 10_000),
            ('亿', 100_000_000),
        ];

        let digit_strict: HashMap<char, u8> = strict_pairs.iter().copied().collect();
        let mut digit_normal = digit_strict.clone();
        digit_normal.extend(normal_extra.iter().copied());

        let unit_values: HashMap<char, i64> = unit_pairs.iter().copied().collect();
        let unit_low_by_value: HashMap<i64, char> = [
            (10, '十'),
            (100, '百'),
            (1000, '千'),
            (10_000, '万'),
            (100_000_000, '亿'),
        ]
        .into_iter()
        .collect();

        Self {
            digit_strict,
            digit_normal,
            unit_values,
            unit_low_by_value,
        }
    }

    /// 严格集的数字字形数值
    pub fn strict_digit(&self, ch: char) -> Option<u8> {
        self.digit_strict.get(&ch).copied()
    }

    /// 普通集的数字字形数值（含 〇幺两仨）
    pub fn normal_digit(&self, ch: char) -> Option<u8> {
        self.digit_normal.get(&ch).copied()
    }

    /// 单位字形的倍数（十/拾=10 … 亿=10^8）
    pub fn unit_value(&self, ch: char) -> Option<i64> {
        self.unit_values.get(&ch).copied()
    }

    /// 倍数对应的小写单位字形
    pub fn unit_glyph_for_value(&self, value: i64) -> Option<char> {
        self.unit_low_by_value.get(&value).copied()
    }

    /// 是否为数字字形（普通集）
    pub fn is_digit_glyph(&self, ch: char) -> bool {
        self.digit_normal.contains_key(&ch)
    }

    /// 是否为单位字形
    pub fn is_unit_glyph(&self, ch: char) -> bool {
        self.unit_values.contains_key(&ch)
    }

    /// 普通集全部数字字形（用于构造字符类）
    pub fn all_digit_glyphs(&self) -> String {
        self.digit_normal.keys().collect()
    }

    /// 全部单位字形（顺序固定，用于构造字符类）
    pub fn all_unit_glyphs(&self) -> String {
        "十拾百佰千仟万亿".to_string()
    }
}

impl Default for NumeralTables {
    fn default() -> Self {
        Self::new()
    }
}
