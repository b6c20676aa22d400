use polyraster_engine::paint::Rgb;
use polyraster_engine::raster::{draw_line, draw_polyline, PixelBuffer};
use polyraster_engine::transform::Affine;
use polyraster_script::{Command, Parser, Statement, Vertex};

use crate::config::RenderConfig;
use crate::context::RenderContext;
use crate::error::Error;

/// Runs one command against the context.
pub fn execute(ctx: &mut RenderContext, stmt: &Statement) {
    log::trace!("line {}: {}", stmt.line, stmt.command.letter());

    match &stmt.command {
        Command::Clear(rgb) => {
            ctx.background = Rgb::from_channels(*rgb);
            let bg = ctx.background;
            ctx.buffer_mut().clear(bg);
        }
        Command::SetColor(rgb) => {
            ctx.color = Rgb::from_channels(*rgb);
        }
        Command::SetTransform(m) => {
            set_transform(ctx, Affine::from_rows(*m), stmt.line);
        }
        Command::Transform(m) => {
            let next = ctx.transform.compose(Affine::from_rows(*m));
            set_transform(ctx, next, stmt.line);
        }
        Command::Line(a, b) => match (ctx.to_pixel(*a), ctx.to_pixel(*b)) {
            (Some(p0), Some(p1)) => {
                let color = ctx.color;
                draw_line(ctx.buffer_mut(), p0, p1, color);
            }
            _ => skip_undefined(stmt.line),
        },
        Command::Polyline(vertices) => stroke(ctx, vertices, false, stmt.line),
        Command::Polygon(vertices) => stroke(ctx, vertices, true, stmt.line),
    }
}

/// Installs `next` as the current transform. Returns true when this is the
/// command that made the transform non-finite, which is logged once.
fn set_transform(ctx: &mut RenderContext, next: Affine, line: usize) -> bool {
    let degenerated = ctx.transform.is_finite() && !next.is_finite();
    if degenerated {
        log::warn!("line {line}: transform has non-finite entries; geometry is dropped until it is replaced");
    }
    ctx.transform = next;
    degenerated
}

fn stroke(ctx: &mut RenderContext, vertices: &[Vertex], closed: bool, line: usize) {
    let points: Option<Vec<_>> = vertices.iter().map(|&v| ctx.to_pixel(v)).collect();
    match points {
        Some(points) => {
            let color = ctx.color;
            draw_polyline(ctx.buffer_mut(), &points, closed, color);
        }
        None => skip_undefined(line),
    }
}

fn skip_undefined(line: usize) {
    log::debug!("line {line}: vertex maps to a non-finite point, primitive dropped");
}

/// Parses and renders a whole script in one pass.
///
/// The header is validated before the canvas is allocated; the first
/// malformed line aborts the run.
pub fn render_str(src: &str, config: &RenderConfig) -> Result<PixelBuffer, Error> {
    let mut parser = Parser::new(src);
    let header = parser.parse_header()?;
    log::debug!("canvas {}x{}", header.width, header.height);

    let mut ctx = RenderContext::new(header, config)?;
    let mut commands = 0usize;
    for stmt in parser {
        execute(&mut ctx, &stmt?);
        commands += 1;
    }

    log::debug!("executed {commands} commands");
    Ok(ctx.into_buffer())
}
