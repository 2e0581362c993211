//=========================================================================
// Key Map
//=========================================================================
//
// Maps physical keys to semantic actions.
//
// Architecture:
//   KeyCode → HashMap → Action
//
// Unbound keys resolve to nothing; the router drops them silently.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashMap;

use log::debug;

//=== Internal Dependencies ===============================================

use super::{
    action::Action,
    event::{InputEvent, KeyCode},
};

//=== KeyMap ==============================================================

/// Key → action bindings.
///
/// `KeyMap::default()` carries the standard keyboard layout; `KeyMap::new()`
/// starts empty for hosts that bind everything themselves.
#[derive(Debug, Clone)]
pub struct KeyMap {
    bindings: HashMap<KeyCode, Action>,
}

impl KeyMap {
    /// Creates a map with no bindings.
    pub fn new() -> Self {
        Self {
            bindings: HashMap::new(),
        }
    }

    /// Standard keyboard layout.
    ///
    /// | Key    | Action   |
    /// |--------|----------|
    /// | Arrows | Up/Down/Left/Right |
    /// | X      | Circle   |
    /// | Z      | Cross    |
    /// | D      | Triangle |
    /// | S      | Square   |
    /// | W / E  | L1 / L2  |
    /// | R / T  | R1 / R2  |
    /// | V      | Start    |
    /// | C      | Select   |
    pub fn standard() -> Self {
        let mut map = Self::new();
        map.bind(KeyCode::ArrowUp, Action::Up);
        map.bind(KeyCode::ArrowDown, Action::Down);
        map.bind(KeyCode::ArrowLeft, Action::Left);
        map.bind(KeyCode::ArrowRight, Action::Right);
        map.bind(KeyCode::KeyX, Action::Circle);
        map.bind(KeyCode::KeyZ, Action::Cross);
        map.bind(KeyCode::KeyD, Action::Triangle);
        map.bind(KeyCode::KeyS, Action::Square);
        map.bind(KeyCode::KeyW, Action::L1);
        map.bind(KeyCode::KeyE, Action::L2);
        map.bind(KeyCode::KeyR, Action::R1);
        map.bind(KeyCode::KeyT, Action::R2);
        map.bind(KeyCode::KeyV, Action::Start);
        map.bind(KeyCode::KeyC, Action::Select);
        map
    }

    //--- Binding API ------------------------------------------------------

    /// Binds a key to an action, replacing any previous binding of that key.
    pub fn bind(&mut self, key: KeyCode, action: Action) {
        if let Some(previous) = self.bindings.insert(key, action) {
            if previous != action {
                debug!(target: "input", "Rebound {:?}: {:?} → {:?}", key, previous, action);
            }
        }
    }

    /// Removes a key's binding.
    pub fn unbind(&mut self, key: KeyCode) {
        self.bindings.remove(&key);
    }

    /// Removes every key bound to `action`.
    pub fn unbind_action(&mut self, action: Action) {
        self.bindings.retain(|_, bound| *bound != action);
    }

    /// Removes all bindings.
    pub fn clear(&mut self) {
        self.bindings.clear();
    }

    //--- Lookup -----------------------------------------------------------

    /// Action bound to a key.
    pub fn action_for(&self, key: KeyCode) -> Option<Action> {
        self.bindings.get(&key).copied()
    }

    /// Action for an input event. Only key presses resolve.
    pub fn map_event(&self, event: &InputEvent) -> Option<Action> {
        event.pressed_key().and_then(|key| self.action_for(key))
    }

    /// Keys bound to an action, in no particular order.
    pub fn keys_for(&self, action: Action) -> impl Iterator<Item = KeyCode> + '_ {
        self.bindings
            .iter()
            .filter(move |(_, bound)| **bound == action)
            .map(|(key, _)| *key)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

impl Default for KeyMap {
    fn default() -> Self {
        Self::standard()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn key_down(key: KeyCode) -> InputEvent {
        InputEvent::KeyDown { key }
    }

    //=====================================================================
    // Standard Layout
    //=====================================================================

    #[test]
    fn standard_layout_binds_every_action() {
        let map = KeyMap::standard();

        for action in Action::ALL {
            assert_eq!(map.keys_for(action).count(), 1, "{:?} should have one key", action);
        }
        assert_eq!(map.len(), Action::ALL.len());
    }

    #[test]
    fn standard_layout_face_buttons() {
        let map = KeyMap::default();

        assert_eq!(map.action_for(KeyCode::KeyX), Some(Action::Circle));
        assert_eq!(map.action_for(KeyCode::KeyZ), Some(Action::Cross));
        assert_eq!(map.action_for(KeyCode::KeyD), Some(Action::Triangle));
        assert_eq!(map.action_for(KeyCode::KeyS), Some(Action::Square));
        assert_eq!(map.action_for(KeyCode::KeyE), Some(Action::L2));
    }

    //=====================================================================
    // Event Mapping
    //=====================================================================

    #[test]
    fn map_event_resolves_key_down() {
        let map = KeyMap::standard();
        assert_eq!(map.map_event(&key_down(KeyCode::ArrowLeft)), Some(Action::Left));
    }

    #[test]
    fn map_event_ignores_releases_and_unknown() {
        let map = KeyMap::standard();

        assert_eq!(map.map_event(&InputEvent::KeyUp { key: KeyCode::ArrowLeft }), None);
        assert_eq!(map.map_event(&InputEvent::Unidentified), None);
        assert_eq!(map.map_event(&key_down(KeyCode::KeyQ)), None);
    }

    //=====================================================================
    // Rebinding
    //=====================================================================

    #[test]
    fn rebinding_replaces_previous_action() {
        let mut map = KeyMap::standard();
        map.bind(KeyCode::KeyX, Action::Cross);

        assert_eq!(map.action_for(KeyCode::KeyX), Some(Action::Cross));
        assert_eq!(map.keys_for(Action::Cross).count(), 2);
    }

    #[test]
    fn unbind_removes_single_key() {
        let mut map = KeyMap::standard();
        map.unbind(KeyCode::KeyX);

        assert_eq!(map.action_for(KeyCode::KeyX), None);
        assert_eq!(map.action_for(KeyCode::KeyZ), Some(Action::Cross));
    }

    #[test]
    fn unbind_action_removes_all_its_keys() {
        let mut map = KeyMap::standard();
        map.bind(KeyCode::Enter, Action::Circle);

        map.unbind_action(Action::Circle);

        assert_eq!(map.keys_for(Action::Circle).count(), 0);
        assert_eq!(map.action_for(KeyCode::Enter), None);
    }

    #[test]
    fn new_map_is_empty() {
        let mut map = KeyMap::new();
        assert!(map.is_empty());

        map.bind(KeyCode::Space, Action::Start);
        map.clear();
        assert!(map.is_empty());
    }
}
