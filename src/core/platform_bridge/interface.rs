//=========================================================================
// Platform Bridge Interface
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::input::InputEvent;

//=== PlatformEvent =======================================================

/// Messages sent from the platform thread to the control thread.
#[derive(Debug, Clone, PartialEq)]
pub enum PlatformEvent {
    /// Key input gathered during one frame, in arrival order.
    Inputs(Vec<InputEvent>),

    /// Window close requested.
    WindowClosed,
}
