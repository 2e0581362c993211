//=========================================================================
// Platform Bridge
//=========================================================================
//
// Contract between a windowing thread and the session's control thread.
//
// Components:
// - `interface`: messages crossing the channel
// - `event_collector`: control-side draining, bounded per frame
//
// The session never blocks on the platform; a host pumps the collector
// through `Session::pump` once per frame.
//
//=========================================================================

//=== Module Declarations =================================================

pub mod event_collector;
pub mod interface;

//=== Public API ==========================================================

pub use event_collector::{EventCollector, TickControl, MAX_INPUTS_PER_FRAME};
pub use interface::PlatformEvent;
