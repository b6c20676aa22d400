use polyraster_engine::output::OutputFormat;
use polyraster_engine::paint::Rgb;

/// Render settings that do not come from the script itself.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    /// Initial background; a script `c` command replaces it.
    pub background: Rgb,
    /// Initial drawing color; a script `C` command replaces it.
    pub color: Rgb,
    /// Forced output encoding. `None` picks it from the output extension.
    pub format: Option<OutputFormat>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            background: Rgb::WHITE,
            color: Rgb::BLACK,
            format: None,
        }
    }
}
