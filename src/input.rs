use iced::{
    keyboard::{self, key},
    mouse, touch,
    widget::canvas,
    Point,
};
use log::trace;

use crate::helpers::sign;

/// Minimum displacement, in logical pixels, for a touch to count as a swipe.
pub const SWIPE_THRESHOLD: f32 = 32.0;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Action {
    AdvancePattern(i32),
    AdvanceColor(i32),
    ToggleFullscreen,
    Redraw,
    Noop,
}

/// An action plus whether the event should be kept from anything else that
/// would handle it.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Dispatch {
    pub action: Action,
    pub suppress_default: bool,
}

impl Dispatch {
    fn handled(action: Action) -> Self {
        Dispatch {
            action,
            suppress_default: true,
        }
    }

    fn passed(action: Action) -> Self {
        Dispatch {
            action,
            suppress_default: false,
        }
    }

    pub fn status(&self) -> canvas::event::Status {
        if self.suppress_default {
            canvas::event::Status::Captured
        } else {
            canvas::event::Status::Ignored
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum InputEvent {
    KeyDown(keyboard::Key),
    MouseDown(mouse::Button),
    /// `delta_y` is positive when scrolling down (towards the user).
    Wheel { delta_y: f32, shift: bool },
    TouchStart(touch::Finger, Point),
    TouchMove(touch::Finger, Point),
    TouchEnd(touch::Finger, Point),
    ContextMenu,
    Resize,
}

pub fn on_key_down(key: &keyboard::Key) -> Dispatch {
    let action = match key {
        keyboard::Key::Named(key::Named::ArrowLeft) => Action::AdvanceColor(-1),
        keyboard::Key::Named(key::Named::ArrowRight) => Action::AdvanceColor(1),
        keyboard::Key::Named(key::Named::ArrowUp) => Action::AdvancePattern(-1),
        keyboard::Key::Named(key::Named::ArrowDown) => Action::AdvancePattern(1),
        _ => return Dispatch::passed(Action::Noop),
    };
    Dispatch::handled(action)
}

pub fn on_mouse_down(button: mouse::Button) -> Dispatch {
    match button {
        mouse::Button::Left => Dispatch::passed(Action::ToggleFullscreen),
        _ => Dispatch::handled(Action::Noop),
    }
}

pub fn on_wheel(delta_y: f32, shift: bool) -> Dispatch {
    let step = sign(delta_y);
    if shift {
        Dispatch::handled(Action::AdvanceColor(step))
    } else {
        Dispatch::handled(Action::AdvancePattern(step))
    }
}

/// Classifies a touch that started at `start` and ended at `end`.
///
/// Horizontal swipes change the color (right = next), vertical swipes change
/// the pattern (up = next). Equal displacement on both axes counts as
/// horizontal.
pub fn on_swipe(start: Point, end: Point) -> Dispatch {
    let dx = end.x - start.x;
    let dy = end.y - start.y;
    if dx.abs() <= SWIPE_THRESHOLD && dy.abs() <= SWIPE_THRESHOLD {
        return Dispatch::passed(Action::Noop);
    }
    if dx.abs() >= dy.abs() {
        Dispatch::handled(Action::AdvanceColor(if dx > 0.0 { 1 } else { -1 }))
    } else {
        Dispatch::handled(Action::AdvancePattern(if dy < 0.0 { 1 } else { -1 }))
    }
}

pub fn on_context_menu() -> Dispatch {
    Dispatch::handled(Action::Noop)
}

pub fn on_resize() -> Dispatch {
    Dispatch::passed(Action::Redraw)
}

/// Transient per-canvas input state.
#[derive(Clone, Debug)]
pub struct InputState {
    pub touch_start: Point,
    pub modifiers: keyboard::Modifiers,

    // Fingers currently down, oldest first, with their latest positions.
    fingers: Vec<(touch::Finger, Point)>,
}

impl Default for InputState {
    fn default() -> Self {
        InputState {
            touch_start: Point::ORIGIN,
            modifiers: keyboard::Modifiers::default(),
            fingers: vec![],
        }
    }
}

impl InputState {
    /// Turns a canvas event into an [`InputEvent`], tracking modifier keys
    /// along the way. `over_surface` gates mouse buttons and the wheel.
    pub fn decode(&mut self, event: canvas::Event, over_surface: bool) -> Option<InputEvent> {
        match event {
            canvas::Event::Keyboard(keyboard::Event::ModifiersChanged(modifiers)) => {
                self.modifiers = modifiers;
                None
            }
            canvas::Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. }) => {
                self.modifiers = modifiers;
                Some(InputEvent::KeyDown(key))
            }
            canvas::Event::Mouse(mouse_event) if over_surface => match mouse_event {
                mouse::Event::ButtonPressed(button) => Some(InputEvent::MouseDown(button)),
                mouse::Event::ButtonReleased(mouse::Button::Right) => Some(InputEvent::ContextMenu),
                mouse::Event::WheelScrolled { delta } => {
                    let y = match delta {
                        mouse::ScrollDelta::Lines { y, .. } => y,
                        mouse::ScrollDelta::Pixels { y, .. } => y,
                    };
                    Some(InputEvent::Wheel {
                        delta_y: -y,
                        shift: self.modifiers.shift(),
                    })
                }
                _ => None,
            },
            canvas::Event::Touch(touch_event) => match touch_event {
                touch::Event::FingerPressed { id, position } => {
                    Some(InputEvent::TouchStart(id, position))
                }
                touch::Event::FingerMoved { id, position } => {
                    Some(InputEvent::TouchMove(id, position))
                }
                touch::Event::FingerLifted { id, position }
                | touch::Event::FingerLost { id, position } => {
                    Some(InputEvent::TouchEnd(id, position))
                }
            },
            _ => None,
        }
    }

    pub fn dispatch(&mut self, event: InputEvent) -> Dispatch {
        trace!("Input event: {:?}", event);
        match event {
            InputEvent::KeyDown(key) => on_key_down(&key),
            InputEvent::MouseDown(button) => on_mouse_down(button),
            InputEvent::Wheel { delta_y, shift } => on_wheel(delta_y, shift),
            InputEvent::TouchStart(finger, position) => {
                self.fingers.retain(|&(id, _)| id != finger);
                self.fingers.push((finger, position));
                // Swipes are measured from the oldest finger still down.
                self.touch_start = self.fingers[0].1;
                Dispatch::passed(Action::Noop)
            }
            InputEvent::TouchMove(finger, position) => {
                if let Some(entry) = self.fingers.iter_mut().find(|(id, _)| *id == finger) {
                    entry.1 = position;
                }
                Dispatch::passed(Action::Noop)
            }
            InputEvent::TouchEnd(finger, position) => {
                self.fingers.retain(|&(id, _)| id != finger);
                on_swipe(self.touch_start, position)
            }
            InputEvent::ContextMenu => on_context_menu(),
            InputEvent::Resize => on_resize(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::keyboard::{Key, Modifiers};

    fn named(key: key::Named) -> Key {
        Key::Named(key)
    }

    #[test]
    fn arrow_keys_move_cursors() {
        assert_eq!(
            on_key_down(&named(key::Named::ArrowLeft)),
            Dispatch::handled(Action::AdvanceColor(-1))
        );
        assert_eq!(
            on_key_down(&named(key::Named::ArrowRight)),
            Dispatch::handled(Action::AdvanceColor(1))
        );
        assert_eq!(
            on_key_down(&named(key::Named::ArrowUp)),
            Dispatch::handled(Action::AdvancePattern(-1))
        );
        assert_eq!(
            on_key_down(&named(key::Named::ArrowDown)),
            Dispatch::handled(Action::AdvancePattern(1))
        );
    }

    #[test]
    fn other_keys_pass_through() {
        for key in [
            named(key::Named::Enter),
            named(key::Named::Escape),
            named(key::Named::Space),
            Key::Character("a".into()),
            Key::Unidentified,
        ] {
            assert_eq!(on_key_down(&key), Dispatch::passed(Action::Noop), "{key:?}");
        }
    }

    #[test]
    fn primary_click_toggles_fullscreen() {
        assert_eq!(
            on_mouse_down(mouse::Button::Left),
            Dispatch::passed(Action::ToggleFullscreen)
        );
        for button in [
            mouse::Button::Right,
            mouse::Button::Middle,
            mouse::Button::Back,
            mouse::Button::Other(9),
        ] {
            assert_eq!(on_mouse_down(button), Dispatch::handled(Action::Noop));
        }
    }

    #[test]
    fn wheel_steps_by_sign_of_delta() {
        assert_eq!(
            on_wheel(120.0, false),
            Dispatch::handled(Action::AdvancePattern(1))
        );
        assert_eq!(
            on_wheel(-0.5, false),
            Dispatch::handled(Action::AdvancePattern(-1))
        );
        assert_eq!(
            on_wheel(3.0, true),
            Dispatch::handled(Action::AdvanceColor(1))
        );
        assert_eq!(
            on_wheel(0.0, true),
            Dispatch::handled(Action::AdvanceColor(0))
        );
    }

    #[test]
    fn swipe_threshold_is_strict() {
        let origin = Point::new(100.0, 100.0);
        assert_eq!(
            on_swipe(origin, Point::new(132.0, 100.0)),
            Dispatch::passed(Action::Noop)
        );
        assert_eq!(
            on_swipe(origin, Point::new(100.0, 68.0)),
            Dispatch::passed(Action::Noop)
        );
        assert_eq!(
            on_swipe(origin, Point::new(133.0, 100.0)),
            Dispatch::handled(Action::AdvanceColor(1))
        );
        assert_eq!(
            on_swipe(origin, Point::new(100.0, 67.0)),
            Dispatch::handled(Action::AdvancePattern(1))
        );
    }

    #[test]
    fn swipe_directions() {
        let origin = Point::ORIGIN;
        assert_eq!(
            on_swipe(origin, Point::new(-50.0, 10.0)).action,
            Action::AdvanceColor(-1)
        );
        assert_eq!(
            on_swipe(origin, Point::new(10.0, 50.0)).action,
            Action::AdvancePattern(-1)
        );
        assert_eq!(
            on_swipe(origin, Point::new(-10.0, -50.0)).action,
            Action::AdvancePattern(1)
        );
    }

    #[test]
    fn diagonal_swipe_counts_as_horizontal() {
        let origin = Point::ORIGIN;
        assert_eq!(
            on_swipe(origin, Point::new(40.0, 40.0)),
            Dispatch::handled(Action::AdvanceColor(1))
        );
        assert_eq!(
            on_swipe(origin, Point::new(-40.0, -40.0)),
            Dispatch::handled(Action::AdvanceColor(-1))
        );
    }

    #[test]
    fn touch_end_measures_from_touch_start() {
        let mut state = InputState::default();
        let finger = touch::Finger(0);
        assert_eq!(
            state.dispatch(InputEvent::TouchStart(finger, Point::new(10.0, 10.0))),
            Dispatch::passed(Action::Noop)
        );
        assert_eq!(state.touch_start, Point::new(10.0, 10.0));
        assert_eq!(
            state.dispatch(InputEvent::TouchEnd(finger, Point::new(60.0, 20.0))),
            Dispatch::handled(Action::AdvanceColor(1))
        );

        // A later gesture starts afresh once every finger is up.
        state.dispatch(InputEvent::TouchStart(finger, Point::new(500.0, 0.0)));
        assert_eq!(state.touch_start, Point::new(500.0, 0.0));
        assert_eq!(
            state.dispatch(InputEvent::TouchEnd(finger, Point::new(500.0, 100.0))).action,
            Action::AdvancePattern(-1)
        );
    }

    #[test]
    fn second_finger_keeps_first_touch_point() {
        let mut state = InputState::default();
        state.dispatch(InputEvent::TouchStart(touch::Finger(0), Point::ORIGIN));
        state.dispatch(InputEvent::TouchStart(touch::Finger(1), Point::new(100.0, 0.0)));
        assert_eq!(state.touch_start, Point::ORIGIN);
        assert_eq!(
            state.dispatch(InputEvent::TouchEnd(touch::Finger(0), Point::new(50.0, 0.0))),
            Dispatch::handled(Action::AdvanceColor(1))
        );
    }

    #[test]
    fn new_finger_measures_from_oldest_finger_position() {
        let mut state = InputState::default();
        state.dispatch(InputEvent::TouchStart(touch::Finger(3), Point::ORIGIN));
        state.dispatch(InputEvent::TouchMove(touch::Finger(3), Point::new(0.0, 200.0)));
        assert_eq!(state.touch_start, Point::ORIGIN);

        state.dispatch(InputEvent::TouchStart(touch::Finger(4), Point::new(300.0, 300.0)));
        assert_eq!(state.touch_start, Point::new(0.0, 200.0));
        assert_eq!(
            state.dispatch(InputEvent::TouchEnd(touch::Finger(4), Point::new(0.0, 100.0))),
            Dispatch::handled(Action::AdvancePattern(1))
        );
        assert_eq!(
            state.dispatch(InputEvent::TouchEnd(touch::Finger(3), Point::new(0.0, 220.0))),
            Dispatch::passed(Action::Noop)
        );
    }

    #[test]
    fn context_menu_is_always_suppressed() {
        let mut state = InputState::default();
        assert_eq!(
            state.dispatch(InputEvent::ContextMenu),
            Dispatch::handled(Action::Noop)
        );
        assert_eq!(state.dispatch(InputEvent::Resize), Dispatch::passed(Action::Redraw));
    }

    #[test]
    fn decode_tracks_shift_for_wheel() {
        let mut state = InputState::default();
        let wheel = || {
            canvas::Event::Mouse(mouse::Event::WheelScrolled {
                delta: mouse::ScrollDelta::Lines { x: 0.0, y: 1.0 },
            })
        };

        assert_eq!(
            state.decode(wheel(), true),
            Some(InputEvent::Wheel {
                delta_y: -1.0,
                shift: false
            })
        );
        assert_eq!(
            state.decode(
                canvas::Event::Keyboard(keyboard::Event::ModifiersChanged(Modifiers::SHIFT)),
                true
            ),
            None
        );
        assert_eq!(
            state.decode(wheel(), true),
            Some(InputEvent::Wheel {
                delta_y: -1.0,
                shift: true
            })
        );
        assert_eq!(state.decode(wheel(), false), None);
    }

    #[test]
    fn decode_mouse_and_touch() {
        let mut state = InputState::default();
        assert_eq!(
            state.decode(
                canvas::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)),
                true
            ),
            Some(InputEvent::MouseDown(mouse::Button::Left))
        );
        assert_eq!(
            state.decode(
                canvas::Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Right)),
                true
            ),
            Some(InputEvent::ContextMenu)
        );
        assert_eq!(
            state.decode(
                canvas::Event::Touch(touch::Event::FingerPressed {
                    id: touch::Finger(0),
                    position: Point::new(1.0, 2.0),
                }),
                false
            ),
            Some(InputEvent::TouchStart(touch::Finger(0), Point::new(1.0, 2.0)))
        );
        assert_eq!(
            state.decode(
                canvas::Event::Touch(touch::Event::FingerLost {
                    id: touch::Finger(0),
                    position: Point::new(3.0, 4.0),
                }),
                false
            ),
            Some(InputEvent::TouchEnd(touch::Finger(0), Point::new(3.0, 4.0)))
        );
    }
}
