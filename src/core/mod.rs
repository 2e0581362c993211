//=========================================================================
// Core
//
// Session logic, independent of any windowing backend.
//
// Flow:
// ```text
//   InputEvent ─► input (KeyMap, InputRouter)
//                   │  scene::context providers
//                   ▼
//                 handlers ─► GameEvent ─► events::dispatch ─► managers
//                                ▲               │
//                 idle monitor ──┘               └─► TimerQueue (delayed)
// ```
//
// Notes:
// Everything here runs on one thread. The platform bridge is the only
// piece meant to cross threads, and only as a channel.
//
//=========================================================================

//=== Submodules ==========================================================

pub mod events;
pub mod handlers;
pub mod idle;
pub mod input;
pub mod managers;
pub mod platform_bridge;
pub mod scene;
pub mod site;
