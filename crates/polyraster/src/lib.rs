//! polyraster: renders `EA979V3` drawing scripts into images.
//!
//! A script declares a canvas size and then issues line, polyline, and
//! polygon commands whose vertices pass through an accumulated 3×3 affine
//! transform before being rasterized.
//!
//! ```
//! use polyraster::{render_str, RenderConfig};
//!
//! let buf = render_str("EA979V3\n4 4\nL 0 0 3 3\n", &RenderConfig::default()).unwrap();
//! assert_eq!(buf.width(), 4);
//! ```

pub mod config;
pub mod context;
pub mod error;
pub mod interpreter;

use std::fs::{self, File};
use std::io::{BufWriter, Read};
use std::path::Path;

use polyraster_engine::output::{write_image, OutputFormat};

pub use config::RenderConfig;
pub use context::RenderContext;
pub use error::Error;
pub use interpreter::{execute, render_str};

/// Renders the script at `input` and writes the image to `output`.
///
/// The output file is only created once the whole script has rendered, so a
/// malformed script never leaves a file behind. If writing fails part-way,
/// the partial file is removed.
pub fn render_file(input: &Path, output: &Path, config: &RenderConfig) -> Result<(), Error> {
    let mut src = String::new();
    File::open(input)
        .map_err(|source| Error::Open { path: input.to_path_buf(), source })?
        .read_to_string(&mut src)
        .map_err(|source| Error::Read { path: input.to_path_buf(), source })?;

    let buffer = render_str(&src, config)?;

    let format = config.format.unwrap_or_else(|| OutputFormat::from_path(output));
    let file = File::create(output)
        .map_err(|source| Error::Open { path: output.to_path_buf(), source })?;

    if let Err(source) = write_image(&buffer, format, BufWriter::new(file)) {
        if let Err(e) = fs::remove_file(output) {
            log::warn!("could not remove partial output '{}': {e}", output.display());
        }
        return Err(Error::Write { path: output.to_path_buf(), source });
    }

    log::info!(
        "wrote {}x{} {format} image to '{}'",
        buffer.width(),
        buffer.height(),
        output.display()
    );
    Ok(())
}
