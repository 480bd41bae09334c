pub mod canvas;
pub mod events;
pub mod render;
pub mod settings;
pub mod state;
pub mod stroke;
pub mod window;

use anyhow::Result;
use tracing::debug;
use x11rb::connection::Connection;

use crate::core::context::Context;
use crate::overlay::canvas::Canvas;
use crate::overlay::events::InputEvent;
use crate::overlay::settings::Settings;
use crate::overlay::state::{InputState, Phase, CLEAR_BUTTON};
use crate::overlay::window::OverlayWindow;

pub struct Overlay {
    ctx: Context,
    canvas: Canvas,
    settings: Settings,
    state: InputState,
}

impl Overlay {
    pub fn new(ctx: Context, settings: Settings, title: &str) -> Result<Self> {
        let window = OverlayWindow::create(&ctx, title)?;
        let canvas = Canvas::new(&ctx, window.window, window.width, window.height)?;
        Ok(Self {
            ctx,
            canvas,
            settings,
            state: InputState::new(),
        })
    }

    /// Blocking event loop: decode, apply, repaint, until terminated.
    /// Repaint is synchronous and always redraws the full frame.
    pub fn run(&mut self) -> Result<()> {
        loop {
            self.ctx.conn.flush()?;
            let event = self.ctx.conn.wait_for_event()?;
            let input = InputEvent::from(&event);
            match input {
                InputEvent::Unknown => debug!("Unhandled event: {:?}", event),
                _ => debug!("Event: {:?}", input),
            }

            // motion repaints with the cursor indicator; clearing and
            // expose redraw the trace alone
            let mut needs_paint = false;
            let mut show_cursor = false;
            match input {
                InputEvent::Motion { .. } => {
                    needs_paint = true;
                    show_cursor = true;
                }
                InputEvent::ButtonPress { button: CLEAR_BUTTON, .. } | InputEvent::Expose => {
                    needs_paint = true;
                }
                _ => {}
            }

            self.state = std::mem::take(&mut self.state).apply(&input);
            if self.state.phase == Phase::Terminated {
                break;
            }

            if needs_paint {
                let cursor = if show_cursor { self.state.cursor } else { None };
                let plan = render::plan(&self.state.trace, cursor);
                self.canvas.render(&self.ctx, &plan, &self.settings)?;
            }
        }
        Ok(())
    }
}
