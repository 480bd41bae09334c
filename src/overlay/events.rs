use x11rb::protocol::Event;

/// Input events decoded once at the windowing boundary. The stroke model
/// and render policy only ever see these, never x11rb record shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Expose,
    ButtonPress { button: u8, x: i16, y: i16 },
    ButtonRelease { button: u8, x: i16, y: i16 },
    Motion { x: i16, y: i16 },
    KeyPress { code: u8 },
    Unknown,
}

impl From<&Event> for InputEvent {
    fn from(event: &Event) -> Self {
        match event {
            Event::Expose(_) => Self::Expose,
            Event::ButtonPress(e) => Self::ButtonPress {
                button: e.detail,
                x: e.event_x,
                y: e.event_y,
            },
            Event::ButtonRelease(e) => Self::ButtonRelease {
                button: e.detail,
                x: e.event_x,
                y: e.event_y,
            },
            Event::MotionNotify(e) => Self::Motion {
                x: e.event_x,
                y: e.event_y,
            },
            Event::KeyPress(e) => Self::KeyPress { code: e.detail },
            _ => Self::Unknown,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use x11rb::protocol::xproto::{
        ButtonPressEvent, KeyButMask, KeyPressEvent, Mapping, MappingNotifyEvent, Motion,
        MotionNotifyEvent, BUTTON_PRESS_EVENT, KEY_PRESS_EVENT, MOTION_NOTIFY_EVENT,
    };

    fn button_press(detail: u8, event_x: i16, event_y: i16) -> ButtonPressEvent {
        ButtonPressEvent {
            response_type: BUTTON_PRESS_EVENT,
            detail,
            sequence: 0,
            time: 0,
            root: 0,
            event: 0,
            child: 0,
            root_x: event_x,
            root_y: event_y,
            event_x,
            event_y,
            state: KeyButMask::from(0u16),
            same_screen: true,
        }
    }

    #[test]
    fn test_decode_button_press_carries_button_and_position() {
        let event = Event::ButtonPress(button_press(2, 120, 340));
        assert_eq!(
            InputEvent::from(&event),
            InputEvent::ButtonPress { button: 2, x: 120, y: 340 }
        );
    }

    #[test]
    fn test_decode_button_release() {
        let event = Event::ButtonRelease(button_press(1, 5, 6));
        assert_eq!(
            InputEvent::from(&event),
            InputEvent::ButtonRelease { button: 1, x: 5, y: 6 }
        );
    }

    #[test]
    fn test_decode_motion_carries_position() {
        let event = Event::MotionNotify(MotionNotifyEvent {
            response_type: MOTION_NOTIFY_EVENT,
            detail: Motion::NORMAL,
            sequence: 0,
            time: 0,
            root: 0,
            event: 0,
            child: 0,
            root_x: 0,
            root_y: 0,
            event_x: 640,
            event_y: 7,
            state: KeyButMask::from(0u16),
            same_screen: true,
        });
        assert_eq!(InputEvent::from(&event), InputEvent::Motion { x: 640, y: 7 });
    }

    #[test]
    fn test_decode_key_press_carries_keycode() {
        let event = Event::KeyPress(KeyPressEvent {
            response_type: KEY_PRESS_EVENT,
            detail: 38,
            sequence: 0,
            time: 0,
            root: 0,
            event: 0,
            child: 0,
            root_x: 0,
            root_y: 0,
            event_x: 0,
            event_y: 0,
            state: KeyButMask::from(0u16),
            same_screen: true,
        });
        assert_eq!(InputEvent::from(&event), InputEvent::KeyPress { code: 38 });
    }

    #[test]
    fn test_unhandled_events_decode_to_unknown() {
        let event = Event::MappingNotify(MappingNotifyEvent {
            response_type: 34,
            sequence: 0,
            request: Mapping::POINTER,
            first_keycode: 0,
            count: 0,
        });
        assert_eq!(InputEvent::from(&event), InputEvent::Unknown);
    }
}
