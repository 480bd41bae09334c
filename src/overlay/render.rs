use crate::overlay::stroke::StrokeTrace;

/// One paint primitive. A frame is a plan of these, executed in order by
/// the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaintOp {
    /// Replace the whole surface with fully transparent pixels.
    Clear,
    /// Live pointer indicator: fixed-radius circle, stroked ring over a
    /// translucent fill.
    CursorIndicator { x: i16, y: i16 },
    /// Straight line between two recorded points.
    Segment { from: (i16, i16), to: (i16, i16) },
}

/// Plan a full frame from the current trace and, for motion-triggered
/// repaints, the live cursor position. Always a complete redraw: clear
/// first, then the cursor indicator, then one segment per connected pair.
pub fn plan(trace: &StrokeTrace, cursor: Option<(i16, i16)>) -> Vec<PaintOp> {
    let mut ops = Vec::with_capacity(2 + trace.len());
    ops.push(PaintOp::Clear);
    if let Some((x, y)) = cursor {
        ops.push(PaintOp::CursorIndicator { x, y });
    }
    for (from, to) in trace.segments() {
        ops.push(PaintOp::Segment {
            from: (from.x, from.y),
            to: (to.x, to.y),
        });
    }
    ops
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trace_of(points: &[(i16, i16, bool)]) -> StrokeTrace {
        let mut trace = StrokeTrace::new();
        for &(x, y, connected) in points {
            if !connected {
                trace.start_stroke();
            }
            trace.append(x, y, true);
        }
        trace
    }

    #[test]
    fn test_empty_trace_without_cursor_is_transparent_frame() {
        let ops = plan(&StrokeTrace::new(), None);
        assert_eq!(ops, vec![PaintOp::Clear]);
    }

    #[test]
    fn test_empty_trace_with_cursor_paints_indicator_only() {
        let ops = plan(&StrokeTrace::new(), Some((40, 60)));
        assert_eq!(
            ops,
            vec![PaintOp::Clear, PaintOp::CursorIndicator { x: 40, y: 60 }]
        );
    }

    #[test]
    fn test_three_connected_points_draw_exactly_two_segments() {
        let trace = trace_of(&[(0, 0, false), (5, 5, true), (9, 2, true)]);
        let ops = plan(&trace, None);
        assert_eq!(
            ops,
            vec![
                PaintOp::Clear,
                PaintOp::Segment { from: (0, 0), to: (5, 5) },
                PaintOp::Segment { from: (5, 5), to: (9, 2) },
            ]
        );
    }

    #[test]
    fn test_stroke_break_produces_no_bridging_segment() {
        let trace = trace_of(&[(0, 0, false), (1, 1, true), (20, 20, false), (21, 21, true)]);
        let ops = plan(&trace, None);
        let segments: Vec<_> = ops
            .iter()
            .filter(|op| matches!(op, PaintOp::Segment { .. }))
            .collect();
        assert_eq!(segments.len(), 2);
    }

    #[test]
    fn test_plan_is_idempotent_on_identical_inputs() {
        let trace = trace_of(&[(0, 0, false), (5, 5, true), (9, 2, true)]);
        let first = plan(&trace, Some((100, 100)));
        let second = plan(&trace, Some((100, 100)));
        assert_eq!(first, second);
    }

    #[test]
    fn test_single_point_draws_nothing_but_clear_and_cursor() {
        let trace = trace_of(&[(7, 7, false)]);
        let ops = plan(&trace, Some((7, 7)));
        assert_eq!(
            ops,
            vec![PaintOp::Clear, PaintOp::CursorIndicator { x: 7, y: 7 }]
        );
    }
}
