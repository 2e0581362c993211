//=========================================================================
// Input Buffer
//
// Per-frame store of key events between winit callbacks and the channel
// flush at the frame boundary.
//
// Notes:
// Consecutive identical events are collapsed, so a key held through OS
// auto-repeat contributes one press per frame.
//=========================================================================

use crate::core::input::InputEvent;

pub(crate) struct InputBuffer {
    events: Vec<InputEvent>,
}

impl InputBuffer {
    pub(crate) fn new() -> Self {
        const BASE_CAPACITY: usize = 32;

        Self {
            events: Vec::with_capacity(BASE_CAPACITY),
        }
    }

    pub(crate) fn push(&mut self, event: InputEvent) {
        if self.events.last() != Some(&event) {
            self.events.push(event);
        }
    }

    /// Buffered events in arrival order, or `None` when nothing arrived.
    pub(crate) fn drain(&mut self) -> Option<Vec<InputEvent>> {
        if self.events.is_empty() {
            return None;
        }
        Some(self.events.drain(..).collect())
    }

    pub(crate) fn len(&self) -> usize {
        self.events.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::input::KeyCode;

    fn key_down(key: KeyCode) -> InputEvent {
        InputEvent::KeyDown { key }
    }

    #[test]
    fn consecutive_duplicates_collapse() {
        let mut buffer = InputBuffer::new();
        buffer.push(key_down(KeyCode::KeyA));
        buffer.push(key_down(KeyCode::KeyA));
        buffer.push(key_down(KeyCode::KeyB));
        buffer.push(key_down(KeyCode::KeyA));

        assert_eq!(buffer.len(), 3);
    }

    #[test]
    fn drain_empties_and_keeps_capacity() {
        let mut buffer = InputBuffer::new();
        for _ in 0..64 {
            buffer.push(key_down(KeyCode::KeyA));
            buffer.push(InputEvent::KeyUp { key: KeyCode::KeyA });
        }
        let capacity = buffer.events.capacity();

        let drained = buffer.drain();

        assert_eq!(drained.map(|events| events.len()), Some(128));
        assert!(buffer.is_empty());
        assert_eq!(buffer.events.capacity(), capacity);
        assert_eq!(buffer.drain(), None);
    }
}
