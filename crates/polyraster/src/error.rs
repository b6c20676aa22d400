use std::fmt;
use std::io;
use std::path::PathBuf;

use polyraster_engine::output::WriteError;
use polyraster_engine::raster::AllocError;
use polyraster_script::ScriptError;

/// Any fatal failure of a render run.
///
/// Off-canvas geometry is not represented here: it is clipped, not rejected.
#[derive(Debug)]
pub enum Error {
    /// Input or output file could not be opened or created.
    Open { path: PathBuf, source: io::Error },
    /// Input file could not be read, or is not valid UTF-8.
    Read { path: PathBuf, source: io::Error },
    /// Script is malformed.
    Format(ScriptError),
    /// Pixel buffer could not be allocated.
    Allocation(AllocError),
    /// Encoding or writing the output image failed.
    Write { path: PathBuf, source: WriteError },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Open { path, .. } => write!(f, "error opening '{}'", path.display()),
            Error::Read { path, .. } => write!(f, "error reading '{}'", path.display()),
            Error::Format(e) => fmt::Display::fmt(e, f),
            Error::Allocation(e) => fmt::Display::fmt(e, f),
            Error::Write { path, .. } => write!(f, "error writing '{}'", path.display()),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Open { source, .. } | Error::Read { source, .. } => Some(source),
            // Displayed inline above.
            Error::Format(_) | Error::Allocation(_) => None,
            Error::Write { source, .. } => Some(source),
        }
    }
}

impl From<ScriptError> for Error {
    fn from(e: ScriptError) -> Self {
        Error::Format(e)
    }
}

impl From<AllocError> for Error {
    fn from(e: AllocError) -> Self {
        Error::Allocation(e)
    }
}
