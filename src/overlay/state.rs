use crate::overlay::events::InputEvent;
use crate::overlay::stroke::StrokeTrace;

/// Button (mouse) index that clears the trace
pub const CLEAR_BUTTON: u8 = 2;
/// Button (mouse) index that exits the program
pub const QUIT_BUTTON: u8 = 3;
/// Keycode that exits the program
pub const QUIT_KEYCODE: u8 = 38;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Drawing,
    Terminated,
}

/// The whole loop state as one value: interaction phase, recorded trace,
/// last known pointer position. Advanced only through `apply`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputState {
    pub phase: Phase,
    pub trace: StrokeTrace,
    pub cursor: Option<(i16, i16)>,
}

impl Default for InputState {
    fn default() -> Self {
        Self {
            phase: Phase::Idle,
            trace: StrokeTrace::new(),
            cursor: None,
        }
    }
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pure transition: consumes the state, returns the next one. Painting
    /// is decided separately by the event loop.
    pub fn apply(mut self, event: &InputEvent) -> Self {
        if self.phase == Phase::Terminated {
            return self;
        }
        match *event {
            InputEvent::ButtonPress { button: QUIT_BUTTON, .. } => {
                self.phase = Phase::Terminated;
            }
            InputEvent::ButtonPress { button: CLEAR_BUTTON, .. } => {
                self.trace.clear();
                self.phase = Phase::Idle;
            }
            InputEvent::ButtonPress { .. } => {
                self.trace.start_stroke();
                self.phase = Phase::Drawing;
            }
            InputEvent::ButtonRelease { .. } => {
                self.phase = Phase::Idle;
            }
            InputEvent::Motion { x, y } => {
                self.cursor = Some((x, y));
                self.trace.append(x, y, self.phase == Phase::Drawing);
            }
            InputEvent::KeyPress { code: QUIT_KEYCODE } => {
                self.phase = Phase::Terminated;
            }
            InputEvent::KeyPress { .. } | InputEvent::Expose | InputEvent::Unknown => {}
        }
        self
    }
}
