use anyhow::Result;
use x11rb::protocol::xproto::{AtomEnum, PropMode, Window};
use x11rb::wrapper::ConnectionExt as _;

use crate::core::context::Context;

/// Mark the overlay always-on-top and name it. Override-redirect keeps the
/// WM from managing the window, but pagers and compositors still read
/// these properties.
pub fn apply_overlay_hints(ctx: &Context, window: Window, title: &str) -> Result<()> {
    ctx.conn.change_property32(
        PropMode::REPLACE,
        window,
        ctx.atoms._NET_WM_STATE,
        AtomEnum::ATOM,
        &[ctx.atoms._NET_WM_STATE_ABOVE],
    )?;

    // legacy WM_NAME plus the UTF-8 EWMH variant
    ctx.conn.change_property8(
        PropMode::REPLACE,
        window,
        AtomEnum::WM_NAME,
        AtomEnum::STRING,
        title.as_bytes(),
    )?;
    ctx.conn.change_property8(
        PropMode::REPLACE,
        window,
        ctx.atoms._NET_WM_NAME,
        ctx.atoms.UTF8_STRING,
        title.as_bytes(),
    )?;

    Ok(())
}
