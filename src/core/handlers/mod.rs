//=========================================================================
// Scene Handlers
//=========================================================================
//
// Input policy of every scene that has one.
//
// Flow:
//   (<Scene>Context, Action) ─► handle_<scene>() ─► Option<GameEvent>
//
// Handlers are pure: at most one event per action, no state touched. A
// `None` means the action has no meaning in the current context.
//
//=========================================================================

//=== Module Declarations =================================================

mod boot;
mod end;
mod main;
mod media;
mod sskn;

//=== Public API ==========================================================

pub use boot::handle_boot;
pub use end::handle_end;
pub use main::handle_main;
pub use media::handle_media;
pub use sskn::handle_sskn;
