//=========================================================================
// Lain Session Library Root
//
// Session control layer of a narrative exploration game: everything
// between a key press and the state the renderer draws.
//
// Responsibilities:
// - Route key input to per-scene policy (`core::input`, `core::handlers`)
// - Fan game events out to state managers, now or after a delay
//   (`core::events`, `core::managers`)
// - Inject idle behaviour after inactivity (`core::idle`)
// - Load, validate, save and migrate save data (`persistence`)
// - Forward winit keyboard input across threads (`platform`)
//
// Typical usage:
// ```no_run
// use lain_session::{FileStore, KeyCode, SessionBuilder};
//
// let mut session = SessionBuilder::new()
//     .with_store(FileStore::new("saves"))
//     .build();
//
// session.handle_key(KeyCode::KeyV);
// session.tick();
// ```
//
//=========================================================================

//--- Public Modules ------------------------------------------------------
//
// `core` holds the session logic. It is public so hosts can read manager
// state and plug in their own collaborators (node registry, clock, audio).
//
pub mod core;
pub mod persistence;
pub mod platform;
pub mod prelude;

//--- Internal Modules ----------------------------------------------------

mod session;

//--- Public Exports ------------------------------------------------------

pub use crate::core::input::KeyCode;
pub use crate::persistence::{FileStore, MemoryStore};
pub use crate::platform::KeyForwarder;
pub use session::{Session, SessionBuilder};
