use anyhow::Result;
use raqote::{DrawOptions, DrawTarget, PathBuilder, SolidSource, Source, StrokeStyle};
use x11rb::connection::Connection;
use x11rb::protocol::xproto::{ConnectionExt, CreateGCAux, Gcontext, ImageFormat, Window};

use crate::core::context::Context;
use crate::overlay::render::PaintOp;
use crate::overlay::settings::Settings;

/// Rasterizes frame plans into an ARGB buffer and pushes them to the
/// overlay window.
pub struct Canvas {
    window: Window,
    gc: Gcontext,
    width: u16,
    height: u16,
    target: DrawTarget,
}

impl Canvas {
    pub fn new(ctx: &Context, window: Window, width: u16, height: u16) -> Result<Self> {
        let gc = ctx.conn.generate_id()?;
        ctx.conn.create_gc(gc, window, &CreateGCAux::new())?;
        Ok(Self {
            window,
            gc,
            width,
            height,
            target: DrawTarget::new(i32::from(width), i32::from(height)),
        })
    }

    /// Execute a frame plan, then present it.
    pub fn render(&mut self, ctx: &Context, ops: &[PaintOp], settings: &Settings) -> Result<()> {
        self.rasterize(ops, settings);
        self.present(ctx)
    }

    fn rasterize(&mut self, ops: &[PaintOp], settings: &Settings) {
        let line = StrokeStyle {
            width: settings.line_width,
            ..StrokeStyle::default()
        };
        for op in ops {
            match *op {
                PaintOp::Clear => {
                    // source-replace with zero alpha, not a composite
                    self.target.clear(SolidSource { r: 0, g: 0, b: 0, a: 0 });
                }
                PaintOp::CursorIndicator { x, y } => {
                    let mut pb = PathBuilder::new();
                    pb.arc(
                        f32::from(x),
                        f32::from(y),
                        settings.cursor_radius,
                        0.0,
                        2.0 * std::f32::consts::PI,
                    );
                    let circle = pb.finish();
                    self.target.stroke(
                        &circle,
                        &solid_source(settings.cursor_ring_color),
                        &line,
                        &DrawOptions::new(),
                    );
                    self.target.fill(
                        &circle,
                        &solid_source(settings.cursor_fill_color),
                        &DrawOptions::new(),
                    );
                }
                PaintOp::Segment { from, to } => {
                    let mut pb = PathBuilder::new();
                    pb.move_to(f32::from(from.0), f32::from(from.1));
                    pb.line_to(f32::from(to.0), f32::from(to.1));
                    self.target.stroke(
                        &pb.finish(),
                        &solid_source(settings.segment_color),
                        &line,
                        &DrawOptions::new(),
                    );
                }
            }
        }
    }

    fn present(&self, ctx: &Context) -> Result<()> {
        // raqote holds premultiplied ARGB words; the wire wants them
        // LSB-first for a little-endian server
        let pixels = self.target.get_data();
        let mut data = Vec::with_capacity(pixels.len() * 4);
        for &px in pixels {
            data.extend_from_slice(&px.to_le_bytes());
        }

        ctx.conn.put_image(
            ImageFormat::Z_PIXMAP,
            self.window,
            self.gc,
            self.width,
            self.height,
            0,
            0,
            0,
            32,
            &data,
        )?;
        ctx.conn.flush()?;
        Ok(())
    }
}

fn solid_source(argb: u32) -> Source<'static> {
    Source::Solid(SolidSource::from_unpremultiplied_argb(
        (argb >> 24) as u8,
        (argb >> 16) as u8,
        (argb >> 8) as u8,
        argb as u8,
    ))
}
