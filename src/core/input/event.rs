//=========================================================================
// Input Event Types
//
// Internal representation of low-level keyboard input.
//
// The platform layer (winit) translates OS events into these types before
// anything else in the session sees them. Only physical key identity is
// kept; modifiers and character output play no part in the control scheme.
//
// Event Flow:
// ```text
// Platform Layer (winit)
//         ↓
//    InputEvent (this module)
//         ↓
//    KeyMap (key → Action)
//         ↓
//    InputRouter (Action → GameEvent)
// ```
//
//=========================================================================

//=== KeyCode =============================================================

/// A physical key, named after its US-layout position. `KeyZ` is the key
/// left of `KeyX` whatever the active layout prints on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    //--- Numeric Keys -----------------------------------------------------

    Digit0, Digit1, Digit2, Digit3, Digit4,
    Digit5, Digit6, Digit7, Digit8, Digit9,

    //--- Alphabetic Keys --------------------------------------------------

    KeyA, KeyB, KeyC, KeyD, KeyE, KeyF, KeyG, KeyH, KeyI,
    KeyJ, KeyK, KeyL, KeyM, KeyN, KeyO, KeyP, KeyQ, KeyR,
    KeyS, KeyT, KeyU, KeyV, KeyW, KeyX, KeyY, KeyZ,

    //--- Arrow Keys -------------------------------------------------------

    ArrowDown,
    ArrowLeft,
    ArrowRight,
    ArrowUp,

    //--- Special Keys -----------------------------------------------------

    Space,
    Enter,
    Escape,
    Tab,
    Backspace,

    /// Fallback for keys the input layer does not name.
    Unidentified
}

//=== InputEvent ==========================================================

/// One key transition as reported by the platform.
///
/// Only `KeyDown` ever resolves to an action; releases are carried so a
/// platform backend can forward its stream unfiltered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputEvent {
    /// Key pressed down (including OS auto-repeat).
    KeyDown { key: KeyCode },

    /// Key released.
    KeyUp { key: KeyCode },

    /// Unrecognized or unsupported event. Always ignored.
    Unidentified
}

impl InputEvent {
    /// Key of a press, if this is one.
    pub fn pressed_key(&self) -> Option<KeyCode> {
        match self {
            Self::KeyDown { key } => Some(*key),
            _ => None,
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
