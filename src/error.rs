use thiserror::Error;

#[derive(Error, Debug)]
pub enum Cn2anError {
    // 输入错误
    #[error("input is empty")]
    EmptyInput,

    #[error("unsupported mode: {0}")]
    UnsupportedMode(String),

    #[error("character not convertible in {mode} mode: {ch}")]
    InvalidCharacter { mode: &'static str, ch: char },

    // 格式错误
    #[error("more than one decimal separator in input")]
    MalformedDecimal,

    #[error("text does not match any numeral form: {0}")]
    FormatError(String),

    // 数值范围错误
    #[error("magnitude out of range, at most {max_len} integer digits supported")]
    MagnitudeOverflow { max_len: usize },
}

pub type Cn2anResult<T> = Result<T, Cn2anError>;
