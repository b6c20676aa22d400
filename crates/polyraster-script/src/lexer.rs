use crate::error::{ErrorKind, ScriptError};

/// Longest accepted line in bytes, counting its `\n` terminator.
pub const MAX_LINE_LEN: usize = 10_239;

// ── SourceLine ────────────────────────────────────────────────────────────

/// One physical script line with its terminator stripped.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct SourceLine<'s> {
    /// 1-based line number.
    pub number: usize,
    /// Line content without the trailing `\n` / `\r\n`.
    pub text: &'s str,
}

// ── LineReader ────────────────────────────────────────────────────────────

/// Splits a script into lines, enforcing the maximum line length.
pub struct LineReader<'s> {
    src: &'s str,
    pos: usize,
    line: usize,
}

impl<'s> LineReader<'s> {
    pub fn new(src: &'s str) -> Self {
        Self { src, pos: 0, line: 0 }
    }

    /// Returns the next line, or `None` at end of input.
    pub fn next_line(&mut self) -> Result<Option<SourceLine<'s>>, ScriptError> {
        if self.pos >= self.src.len() {
            return Ok(None);
        }
        self.line += 1;

        let rest = &self.src[self.pos..];
        let raw = match rest.find('\n') {
            Some(i) => &rest[..=i],
            None => rest,
        };
        self.pos += raw.len();

        if raw.len() > MAX_LINE_LEN {
            return Err(ScriptError::new(ErrorKind::LineTooLong, self.line));
        }

        let text = raw.strip_suffix('\n').unwrap_or(raw);
        let text = text.strip_suffix('\r').unwrap_or(text);
        Ok(Some(SourceLine { number: self.line, text }))
    }

    /// Like [`next_line`](Self::next_line), but end of input is an error.
    pub fn require_line(&mut self) -> Result<SourceLine<'s>, ScriptError> {
        self.next_line()?
            .ok_or_else(|| ScriptError::new(ErrorKind::UnexpectedEof, self.line + 1))
    }
}

// ── Tokens ────────────────────────────────────────────────────────────────

/// Whitespace-delimited parameter reader over a single line.
///
/// Tracks how many parameters were consumed so errors can name the 1-based
/// parameter index, and how many the current command expects in total.
pub struct Tokens<'s> {
    src: &'s str,
    pos: usize,
    line: usize,
    read: usize,
    expected: usize,
}

impl<'s> Tokens<'s> {
    pub fn new(src: &'s str, line: usize, expected: usize) -> Self {
        Self { src, pos: 0, line, read: 0, expected }
    }

    /// Updates the total parameter count, for commands whose arity depends on
    /// an earlier parameter.
    pub fn expect(&mut self, expected: usize) {
        self.expected = expected;
    }

    fn peek(&self) -> Option<char> {
        self.src[self.pos..].chars().next()
    }

    fn advance(&mut self) -> Option<char> {
        let ch = self.src[self.pos..].chars().next()?;
        self.pos += ch.len_utf8();
        Some(ch)
    }

    fn next_token(&mut self) -> Option<&'s str> {
        while matches!(self.peek(), Some(c) if c.is_whitespace()) {
            self.advance();
        }
        let src = self.src;
        let start = self.pos;
        while matches!(self.peek(), Some(c) if !c.is_whitespace()) {
            self.advance();
        }
        if self.pos > start { Some(&src[start..self.pos]) } else { None }
    }

    /// Error located at the most recently consumed parameter.
    pub fn last_param_error(&self, kind: ErrorKind) -> ScriptError {
        ScriptError::at_param(kind, self.line, self.read)
    }

    /// Consumes the next parameter token.
    pub fn token(&mut self) -> Result<&'s str, ScriptError> {
        let tok = self.next_token().ok_or_else(|| {
            ScriptError::at_param(
                ErrorKind::TooFewParameters { expected: self.expected },
                self.line,
                self.read + 1,
            )
        })?;
        self.read += 1;
        Ok(tok)
    }

    /// Consumes the next parameter as a base-10 integer.
    pub fn integer(&mut self) -> Result<i64, ScriptError> {
        let tok = self.token()?;
        tok.parse::<i64>()
            .map_err(|_| self.last_param_error(ErrorKind::ExpectedInteger))
    }

    /// Consumes the next parameter as a finite decimal.
    pub fn decimal(&mut self) -> Result<f64, ScriptError> {
        let tok = self.token()?;
        let value = tok
            .parse::<f64>()
            .map_err(|_| self.last_param_error(ErrorKind::ExpectedDecimal))?;
        if !value.is_finite() {
            return Err(self.last_param_error(ErrorKind::NonFiniteDecimal));
        }
        Ok(value)
    }

    /// Fails if any token remains on the line.
    pub fn finish(mut self) -> Result<(), ScriptError> {
        match self.next_token() {
            None => Ok(()),
            Some(_) => Err(ScriptError::at_param(
                ErrorKind::TooManyParameters { expected: self.expected },
                self.line,
                self.read + 1,
            )),
        }
    }
}
