use anyhow::Result;
use tracing::info;
use x11rb::connection::Connection;
use x11rb::protocol::xproto::{
    ColormapAlloc, ConfigureWindowAux, ConnectionExt, CreateWindowAux, EventMask, Window,
    WindowClass,
};

use crate::core::context::Context;
use crate::ewmh::hints::apply_overlay_hints;

pub struct OverlayWindow {
    pub window: Window,
    pub width: u16,
    pub height: u16,
}

impl OverlayWindow {
    /// Fullscreen, borderless, depth-32 override-redirect window on the
    /// alpha visual, selecting pointer and keyboard input.
    pub fn create(ctx: &Context, title: &str) -> Result<Self> {
        let width = ctx.screen_width;
        let height = ctx.screen_height;

        // a visual other than the root's needs its own colormap, and then
        // background/border pixels must be set explicitly
        let colormap = ctx.conn.generate_id()?;
        ctx.conn
            .create_colormap(ColormapAlloc::NONE, colormap, ctx.root_window, ctx.visual_id)?;

        let window = ctx.conn.generate_id()?;
        let values = CreateWindowAux::new()
            .background_pixel(0)
            .border_pixel(0)
            .override_redirect(1)
            .colormap(colormap)
            .event_mask(
                EventMask::EXPOSURE
                    | EventMask::KEY_PRESS
                    | EventMask::POINTER_MOTION
                    | EventMask::BUTTON_PRESS
                    | EventMask::BUTTON_RELEASE,
            );
        ctx.conn.create_window(
            32,
            window,
            ctx.root_window,
            0,
            0,
            width,
            height,
            0,
            WindowClass::INPUT_OUTPUT,
            ctx.visual_id,
            &values,
        )?;
        ctx.conn.free_colormap(colormap)?;

        apply_overlay_hints(ctx, window, title)?;

        ctx.conn.map_window(window)?;
        // some WMs reposition windows right after they are mapped
        ctx.conn
            .configure_window(window, &ConfigureWindowAux::new().x(0).y(0))?;
        ctx.conn.flush()?;

        info!("Overlay window {} mapped at {}x{}", window, width, height);

        Ok(Self { window, width, height })
    }
}
