//=========================================================================
// Input
//
// From physical key presses to game events.
//
// Responsibilities:
// - Describe key input independently of the windowing backend
// - Resolve keys to semantic actions through a rebindable key map
// - Route actions to the active scene's handler
//
// Notes:
// The router is pure. The session applies what it returns and stamps idle
// activity, so routing can be tested without clocks or storage.
//
//=========================================================================

//=== Submodules ==========================================================

pub mod action;
pub mod event;
pub mod key_map;
pub mod router;

//=== Public API ==========================================================

pub use action::Action;
pub use event::{InputEvent, KeyCode};
pub use key_map::KeyMap;
pub use router::{InputRouter, Routed};
