/// A recorded pointer position. `connected_with_previous` marks whether a
/// line segment should be drawn from the point immediately before this one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrokePoint {
    pub x: i16,
    pub y: i16,
    pub connected_with_previous: bool,
}

/// Ordered, append-only sequence of recorded points. Points are only ever
/// added one at a time or removed all at once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StrokeTrace {
    points: Vec<StrokePoint>,
    // set once a point has been recorded since the last button press
    continuing: bool,
}

impl StrokeTrace {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a point. No-op while the button is up. The first point after
    /// a press is unconnected; every later one continues the stroke.
    pub fn append(&mut self, x: i16, y: i16, button_held: bool) {
        if !button_held {
            return;
        }
        self.points.push(StrokePoint {
            x,
            y,
            connected_with_previous: self.continuing,
        });
        self.continuing = true;
    }

    /// Called on button press so the next recorded point starts a new
    /// disconnected stroke.
    pub fn start_stroke(&mut self) {
        self.continuing = false;
    }

    /// Drop every recorded point, back to the program-start state.
    pub fn clear(&mut self) {
        self.points.clear();
        self.continuing = false;
    }

    pub fn points(&self) -> &[StrokePoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Adjacent pairs whose second point continues the first.
    pub fn segments(&self) -> impl Iterator<Item = (&StrokePoint, &StrokePoint)> {
        self.points
            .windows(2)
            .filter(|pair| pair[1].connected_with_previous)
            .map(|pair| (&pair[0], &pair[1]))
    }
}
