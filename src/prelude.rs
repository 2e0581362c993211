//=========================================================================
// Prelude
//=========================================================================
//
// Convenience module that re-exports commonly used types and traits.
//
// Usage:
//   use lain_session::prelude::*;
//
//=========================================================================

//=== Public API ==========================================================

// Session facade
pub use crate::session::{Session, SessionBuilder};

// Input
pub use crate::core::input::{Action, InputEvent, KeyCode, KeyMap, Routed};

// Scenes and events
pub use crate::core::events::{EventKind, GameEvent};
pub use crate::core::scene::{Scene, Subscene};

// Collaborators
pub use crate::core::idle::{AudioSink, Clock, IdleAnimationSelector, IdleConfig, SoundCue};
pub use crate::core::site::{NodeData, NodeKind, NodeRegistry, SiteKind, StaticNodeRegistry};
pub use crate::persistence::{FileStore, GameState, KeyValueStore, MemoryStore};

// Platform bridge
pub use crate::core::platform_bridge::{EventCollector, PlatformEvent, TickControl};
pub use crate::platform::KeyForwarder;
