use anyhow::{Context as _, Result};
use x11rb::connection::Connection;
use x11rb::protocol::xproto::{Screen, VisualClass, Visualid};
use x11rb::rust_connection::RustConnection;

use crate::ewmh::atoms::AtomCollection;

pub struct Context {
    pub conn: RustConnection,
    pub screen_num: usize,
    pub root_window: u32,
    pub screen_width: u16,
    pub screen_height: u16,
    pub visual_id: Visualid,
    pub atoms: AtomCollection,
}

impl Context {
    /// One-shot setup checks: display connection, screen, alpha visual,
    /// atom lookup. Any failure is fatal and never retried.
    pub fn new(display: Option<&str>) -> Result<Self> {
        let (conn, screen_num) = x11rb::connect(display).context("cannot open display")?;
        let screen = &conn.setup().roots[screen_num];
        let root_window = screen.root;
        let screen_width = screen.width_in_pixels;
        let screen_height = screen.height_in_pixels;

        let visual_id =
            find_alpha_visual(screen).context("transparency support not found on this screen")?;

        let atoms = AtomCollection::new(&conn)
            .context("failed to intern atoms")?
            .reply()
            .context("failed to resolve atoms")?;

        Ok(Self {
            conn,
            screen_num,
            root_window,
            screen_width,
            screen_height,
            visual_id,
            atoms,
        })
    }
}

// first visual with a 32-bit depth, i.e. one with a real alpha channel
fn find_alpha_visual(screen: &Screen) -> Option<Visualid> {
    screen
        .allowed_depths
        .iter()
        .filter(|depth| depth.depth == 32)
        .flat_map(|depth| depth.visuals.iter())
        .find(|visual| visual.class == VisualClass::TRUE_COLOR)
        .map(|visual| visual.visual_id)
}
