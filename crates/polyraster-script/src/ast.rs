// ── Header ────────────────────────────────────────────────────────────────

/// Canvas dimensions declared on the second script line.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Header {
    pub width: u32,
    pub height: u32,
}

// ── Vertex ────────────────────────────────────────────────────────────────

/// A model-space point as written in the script, before any transform.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Vertex {
    pub x: f64,
    pub y: f64,
}

impl Vertex {
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

// ── Command ───────────────────────────────────────────────────────────────

/// One drawing or state command.
///
/// ```text
/// c 255 255 255        clear to a new background
/// C 255 0 0            set the drawing color
/// M a b c d e f g h i  replace the transform
/// m a b c d e f g h i  compose into the transform
/// L x0 y0 x1 y1        line
/// P n x1 y1 .. xn yn   open polyline
/// R n x1 y1 .. xn yn   closed polyline
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// `c r g b`: set the background and clear the canvas with it.
    Clear([u8; 3]),
    /// `C r g b`: set the color used by subsequent drawing commands.
    SetColor([u8; 3]),
    /// `M`: nine row-major matrix entries replacing the current transform.
    SetTransform([f64; 9]),
    /// `m`: nine row-major matrix entries composed after the current transform.
    Transform([f64; 9]),
    /// `L`: a single segment.
    Line(Vertex, Vertex),
    /// `P`: consecutive vertices joined in order.
    Polyline(Vec<Vertex>),
    /// `R`: like `Polyline`, with the last vertex joined back to the first.
    Polygon(Vec<Vertex>),
}

impl Command {
    /// The script character that introduces this command.
    pub fn letter(&self) -> char {
        match self {
            Command::Clear(_) => 'c',
            Command::SetColor(_) => 'C',
            Command::SetTransform(_) => 'M',
            Command::Transform(_) => 'm',
            Command::Line(..) => 'L',
            Command::Polyline(_) => 'P',
            Command::Polygon(_) => 'R',
        }
    }
}

// ── Statement ─────────────────────────────────────────────────────────────

/// A command together with the 1-based line it was read from.
#[derive(Debug, Clone, PartialEq)]
pub struct Statement {
    pub line: usize,
    pub command: Command,
}

// ── Script ────────────────────────────────────────────────────────────────

/// A fully parsed script: header followed by every command in order.
#[derive(Debug, Clone, PartialEq)]
pub struct Script {
    pub header: Header,
    pub statements: Vec<Statement>,
}
