use std::collections::HashSet;

use super::frame::InputFrame;
use super::types::{InputEvent, Key, KeyState, Modifiers};

/// Held keys, modifiers and focus for one window.
///
/// Transitions are written into an `InputFrame` as events are applied.
#[derive(Debug, Default)]
pub struct InputState {
    pub modifiers: Modifiers,

    pub focused: bool,

    pub keys_down: HashSet<Key>,
}

impl InputState {
    /// Applies `ev` and records any transition into `frame`.
    pub fn apply_event(&mut self, frame: &mut InputFrame, ev: InputEvent) {
        match &ev {
            InputEvent::ModifiersChanged(m) => self.modifiers = *m,

            InputEvent::Focused(f) => {
                self.focused = *f;
                if !*f {
                    // Release events are lost while unfocused.
                    self.keys_down.clear();
                }
            }

            InputEvent::Key {
                key,
                state,
                modifiers,
                repeat,
            } => {
                self.modifiers = *modifiers;
                match state {
                    KeyState::Pressed if *repeat => frame.key_repeats.push(*key),
                    KeyState::Pressed => {
                        if self.keys_down.insert(*key) {
                            frame.keys_pressed.insert(*key);
                        }
                    }
                    KeyState::Released => {
                        self.keys_down.remove(key);
                    }
                }
            }
        }
    }

    pub fn key_down(&self, key: Key) -> bool {
        self.keys_down.contains(&key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(key: Key, state: KeyState, repeat: bool) -> InputEvent {
        InputEvent::Key {
            key,
            state,
            modifiers: Modifiers::default(),
            repeat,
        }
    }

    #[test]
    fn press_and_release_are_recorded_once() {
        let mut st = InputState::default();
        let mut fr = InputFrame::default();

        st.apply_event(&mut fr, key(Key::Q, KeyState::Pressed, false));
        st.apply_event(&mut fr, key(Key::Q, KeyState::Pressed, false));
        assert!(st.key_down(Key::Q));
        assert!(fr.pressed(Key::Q));
        assert_eq!(fr.activations(Key::Q), 1);

        st.apply_event(&mut fr, key(Key::Q, KeyState::Released, false));
        assert!(!st.key_down(Key::Q));
    }

    #[test]
    fn repeats_count_as_activations() {
        let mut st = InputState::default();
        let mut fr = InputFrame::default();

        st.apply_event(&mut fr, key(Key::Equal, KeyState::Pressed, false));
        st.apply_event(&mut fr, key(Key::Equal, KeyState::Pressed, true));
        st.apply_event(&mut fr, key(Key::Equal, KeyState::Pressed, true));

        assert_eq!(fr.activations(Key::Equal), 3);
        fr.clear();
        assert_eq!(fr.activations(Key::Equal), 0);
        assert!(st.key_down(Key::Equal));
    }

    #[test]
    fn focus_loss_releases_everything() {
        let mut st = InputState::default();
        let mut fr = InputFrame::default();

        st.apply_event(&mut fr, key(Key::ArrowLeft, KeyState::Pressed, false));
        st.apply_event(&mut fr, InputEvent::Focused(false));

        assert!(st.keys_down.is_empty());
        assert!(!st.focused);
    }
}
