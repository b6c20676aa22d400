use crate::ast::{Command, Header, Script, Statement, Vertex};
use crate::error::{ErrorKind, ScriptError};
use crate::lexer::{LineReader, SourceLine, Tokens};

/// Literal first line of every script.
pub const MAGIC: &str = "EA979V3";
/// Largest accepted canvas width or height.
pub const MAX_DIMENSION: i64 = 1024;
/// Largest color channel value.
pub const MAX_CHANNEL: i64 = 255;
/// Entries in a row-major 3×3 matrix.
pub const MATRIX_LEN: usize = 9;

const CHANNELS: usize = 3;

// ── Parser ────────────────────────────────────────────────────────────────

/// Single-pass script reader.
///
/// Call [`parse_header`](Self::parse_header) once, then pull commands with
/// [`next_statement`](Self::next_statement) or by iterating. The iterator
/// stops after the first error.
pub struct Parser<'s> {
    lines: LineReader<'s>,
    header_read: bool,
    failed: bool,
}

impl<'s> Parser<'s> {
    pub fn new(src: &'s str) -> Self {
        Self { lines: LineReader::new(src), header_read: false, failed: false }
    }

    // ── Header ────────────────────────────────────────────────────────────

    /// Reads the magic line and the `width height` line.
    pub fn parse_header(&mut self) -> Result<Header, ScriptError> {
        debug_assert!(!self.header_read, "parse_header called twice");

        let magic = self.lines.require_line()?;
        if magic.text != MAGIC {
            return Err(ScriptError::new(ErrorKind::BadMagic, magic.number));
        }

        let dims = self.lines.require_line()?;
        let mut tokens = Tokens::new(dims.text, dims.number, 2);
        let width = tokens.integer()?;
        let height = tokens.integer()?;
        tokens.finish()?;

        let valid = |v: i64| v > 0 && v <= MAX_DIMENSION;
        if !valid(width) || !valid(height) {
            return Err(ScriptError::new(
                ErrorKind::InvalidDimensions { width, height },
                dims.number,
            ));
        }

        self.header_read = true;
        // Both values were range-checked against MAX_DIMENSION above.
        Ok(Header { width: width as u32, height: height as u32 })
    }

    // ── Statements ────────────────────────────────────────────────────────

    /// Reads the next command, skipping blank and `#` comment lines.
    ///
    /// Returns `Ok(None)` at end of input.
    pub fn next_statement(&mut self) -> Result<Option<Statement>, ScriptError> {
        debug_assert!(self.header_read, "next_statement called before parse_header");

        while let Some(line) = self.lines.next_line()? {
            if let Some(command) = parse_line(line)? {
                return Ok(Some(Statement { line: line.number, command }));
            }
        }
        Ok(None)
    }
}

impl Iterator for Parser<'_> {
    type Item = Result<Statement, ScriptError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        let item = self.next_statement().transpose();
        if matches!(item, Some(Err(_))) {
            self.failed = true;
        }
        item
    }
}

// ── Line ──────────────────────────────────────────────────────────────────

fn parse_line(line: SourceLine<'_>) -> Result<Option<Command>, ScriptError> {
    let text = line.text.trim_start();
    let letter = match text.chars().next() {
        None | Some('#') => return Ok(None),
        Some(c) => c,
    };
    let rest = &text[letter.len_utf8()..];
    let n = line.number;

    let command = match letter {
        'c' => Command::Clear(parse_rgb(Tokens::new(rest, n, CHANNELS))?),
        'C' => Command::SetColor(parse_rgb(Tokens::new(rest, n, CHANNELS))?),
        'M' => Command::SetTransform(parse_matrix(Tokens::new(rest, n, MATRIX_LEN))?),
        'm' => Command::Transform(parse_matrix(Tokens::new(rest, n, MATRIX_LEN))?),
        'L' => {
            let mut tokens = Tokens::new(rest, n, 4);
            let a = parse_vertex(&mut tokens)?;
            let b = parse_vertex(&mut tokens)?;
            tokens.finish()?;
            Command::Line(a, b)
        }
        'P' => Command::Polyline(parse_vertices(Tokens::new(rest, n, 1))?),
        'R' => Command::Polygon(parse_vertices(Tokens::new(rest, n, 1))?),
        other => {
            return Err(ScriptError::new(ErrorKind::UnknownCommand(other), n));
        }
    };
    Ok(Some(command))
}

fn parse_rgb(mut tokens: Tokens<'_>) -> Result<[u8; 3], ScriptError> {
    let mut rgb = [0u8; CHANNELS];
    for channel in &mut rgb {
        let v = tokens.integer()?;
        *channel = u8::try_from(v)
            .map_err(|_| tokens.last_param_error(ErrorKind::ChannelOutOfRange(v)))?;
    }
    tokens.finish()?;
    Ok(rgb)
}

fn parse_matrix(mut tokens: Tokens<'_>) -> Result<[f64; MATRIX_LEN], ScriptError> {
    let mut m = [0.0; MATRIX_LEN];
    for entry in &mut m {
        *entry = tokens.decimal()?;
    }
    tokens.finish()?;
    Ok(m)
}

fn parse_vertex(tokens: &mut Tokens<'_>) -> Result<Vertex, ScriptError> {
    let x = tokens.decimal()?;
    let y = tokens.decimal()?;
    Ok(Vertex::new(x, y))
}

/// `n x1 y1 .. xn yn`
fn parse_vertices(mut tokens: Tokens<'_>) -> Result<Vec<Vertex>, ScriptError> {
    let count = tokens.integer()?;
    if count < 1 {
        return Err(tokens.last_param_error(ErrorKind::InvalidPointCount(count)));
    }
    let count = usize::try_from(count).unwrap_or(usize::MAX);
    tokens.expect(count.saturating_mul(2).saturating_add(1));

    let mut vertices = Vec::new();
    for _ in 0..count {
        vertices.push(parse_vertex(&mut tokens)?);
    }
    tokens.finish()?;
    Ok(vertices)
}

// ── Public parse entry point ──────────────────────────────────────────────

/// Parse a whole script into memory.
pub fn parse_str(src: &str) -> Result<Script, ScriptError> {
    let mut parser = Parser::new(src);
    let header = parser.parse_header()?;
    let statements = parser.collect::<Result<Vec<_>, _>>()?;
    Ok(Script { header, statements })
}
