use std::collections::HashSet;

use super::types::Key;

/// Input transitions recorded since the previous frame.
///
/// `InputState` answers "is it held"; `InputFrame` answers "did it change".
#[derive(Debug, Default)]
pub struct InputFrame {
    pub keys_pressed: HashSet<Key>,

    /// Repeat events for held keys, in arrival order.
    pub key_repeats: Vec<Key>,
}

impl InputFrame {
    pub fn clear(&mut self) {
        self.keys_pressed.clear();
        self.key_repeats.clear();
    }

    #[inline]
    pub fn pressed(&self, key: Key) -> bool {
        self.keys_pressed.contains(&key)
    }

    /// Fresh presses plus OS repeats of `key` this frame.
    pub fn activations(&self, key: Key) -> usize {
        usize::from(self.pressed(key)) + self.key_repeats.iter().filter(|k| **k == key).count()
    }
}
