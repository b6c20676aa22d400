use std::fmt;

/// What went wrong while reading a script.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum ErrorKind {
    /// First line is not the format magic.
    BadMagic,
    /// Input ended before a required line.
    UnexpectedEof,
    /// Line exceeds [`MAX_LINE_LEN`](crate::lexer::MAX_LINE_LEN).
    LineTooLong,
    /// Line ended before all parameters were read.
    TooFewParameters { expected: usize },
    /// Tokens remain after the last expected parameter.
    TooManyParameters { expected: usize },
    ExpectedInteger,
    ExpectedDecimal,
    /// Decimal parsed as `inf` or `nan`.
    NonFiniteDecimal,
    /// Canvas width or height outside `(0, MAX_DIMENSION]`.
    InvalidDimensions { width: i64, height: i64 },
    /// Color channel outside `0..=255`.
    ChannelOutOfRange(i64),
    /// Polyline vertex count below one.
    InvalidPointCount(i64),
    UnknownCommand(char),
}

/// A fatal error found while reading a drawing script.
#[derive(Debug, Clone, PartialEq)]
pub struct ScriptError {
    pub kind: ErrorKind,
    /// 1-based source line number where the error occurred.
    pub line: usize,
    /// 1-based index of the offending parameter, when one applies.
    pub param: Option<usize>,
}

impl ScriptError {
    pub(crate) fn new(kind: ErrorKind, line: usize) -> Self {
        Self { kind, line, param: None }
    }

    pub(crate) fn at_param(kind: ErrorKind, line: usize, param: usize) -> Self {
        Self { kind, line, param: Some(param) }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::BadMagic => write!(f, "input file format not recognized"),
            ErrorKind::UnexpectedEof => write!(f, "unexpected end of file"),
            ErrorKind::LineTooLong => write!(f, "line too long"),
            ErrorKind::TooFewParameters { expected } => {
                write!(f, "too few parameters / unexpected end of line (expected {expected})")
            }
            ErrorKind::TooManyParameters { expected } => {
                write!(f, "too many parameters (expected {expected})")
            }
            ErrorKind::ExpectedInteger => write!(f, "expected integer"),
            ErrorKind::ExpectedDecimal => write!(f, "expected decimal"),
            ErrorKind::NonFiniteDecimal => write!(f, "expected finite decimal"),
            ErrorKind::InvalidDimensions { width, height } => write!(
                f,
                "invalid image dimensions {width}x{height}: must be >0 and <={}",
                crate::parser::MAX_DIMENSION
            ),
            ErrorKind::ChannelOutOfRange(v) => {
                write!(f, "color channel {v} out of range 0..={}", crate::parser::MAX_CHANNEL)
            }
            ErrorKind::InvalidPointCount(n) => write!(f, "invalid point count {n}: must be >=1"),
            ErrorKind::UnknownCommand(c) => write!(f, "unrecognized command {c:?}"),
        }
    }
}

impl fmt::Display for ScriptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.param {
            Some(p) => write!(f, "line {}, parameter {}: {}", self.line, p, self.kind),
            None => write!(f, "line {}: {}", self.line, self.kind),
        }
    }
}

impl std::error::Error for ScriptError {}
