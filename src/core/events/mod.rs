//=========================================================================
// Game Events
//=========================================================================
//
// Transient instructions describing a requested state change.
//
// Architecture:
//   handler / idle monitor ─► GameEvent ─► dispatch() ─► managers
//                                               │
//                                               └─► TimerQueue (delayed)
//
// Events carry every value their mutations need, captured when the event
// is built. Nothing is re-read when a delayed mutation finally applies.
//
//=========================================================================

//=== Module Declarations =================================================

mod dispatcher;
mod timers;

//=== Public API ==========================================================

pub use dispatcher::dispatch;
pub use timers::TimerQueue;

//=== Internal Dependencies ===============================================

use crate::core::managers::LainAnimation;
use crate::core::scene::{BootStage, EndOption, MediaSelection, PauseOption, SsknOption};
use crate::core::site::{CursorLocation, HudId, NodeData, PolytanPart, SiteKind};

//=== GameEvent ===========================================================

/// A requested state change with its payload.
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    //--- Main: Navigation -------------------------------------------------

    /// Cursor moved to another slot on the same level and segment.
    ChangeNode { location: CursorLocation, hud: HudId },
    /// Cursor climbed a level.
    SiteUp { location: CursorLocation, pos_y: f32, hud: HudId },
    /// Cursor descended a level.
    SiteDown { location: CursorLocation, pos_y: f32, hud: HudId },
    /// Site rotated one segment to the left.
    SiteLeft { location: CursorLocation, rot_y: f32, hud: HudId },
    /// Site rotated one segment to the right.
    SiteRight { location: CursorLocation, rot_y: f32, hud: HudId },

    //--- Main: Node Selection ---------------------------------------------

    ThrowNodeMedia { node: NodeData },
    ThrowNodeSskn { node: NodeData },
    ThrowNodeGate { node: NodeData },
    ThrowNodePolytan { node: NodeData, part: PolytanPart },

    //--- Main: Level Selection --------------------------------------------

    /// Level selector opened on the current level.
    ToggleLevelSelection { level: i32 },
    LevelSelectionUp { selected_level: i32 },
    LevelSelectionDown { selected_level: i32 },
    /// Jump to a higher level.
    SelectLevelUp { location: CursorLocation, pos_y: f32, hud: HudId },
    /// Jump to a lower level.
    SelectLevelDown { location: CursorLocation, pos_y: f32, hud: HudId },
    ExitLevelSelection,

    //--- Main: Pause ------------------------------------------------------

    PauseGame,
    PauseSelectionChange { selection: PauseOption },
    PauseExitSelect,
    /// Switch to the other site at its stored cursor.
    PauseChangeSelect { new_site: SiteKind, rot_y: f32, pos_y: f32, hud: HudId },
    PauseSaveSelect,
    PauseLoadSelect,
    PauseAboutSelect,
    ExitAbout,

    //--- Media ------------------------------------------------------------

    MediaSelectionChange { selection: MediaSelection },
    PlayMedia { node: NodeData },
    ExitMedia,

    //--- Sskn -------------------------------------------------------------

    SsknSelectionChange { selection: SsknOption },
    SsknOk,
    SsknCancel,

    //--- End --------------------------------------------------------------

    EndSelectionChange { selection: EndOption },
    EndContinue,
    EndExit,

    //--- Boot -------------------------------------------------------------

    BootStageChange { stage: BootStage },
    StartNewGame,
    LoadGame,

    //--- Idle -------------------------------------------------------------

    IdleAnimation { animation: LainAnimation },
    PlayIdleMedia,
}

//=== EventKind ===========================================================

/// Payload-free identifier of a `GameEvent` variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    ChangeNode,
    SiteUp,
    SiteDown,
    SiteLeft,
    SiteRight,
    ThrowNodeMedia,
    ThrowNodeSskn,
    ThrowNodeGate,
    ThrowNodePolytan,
    ToggleLevelSelection,
    LevelSelectionUp,
    LevelSelectionDown,
    SelectLevelUp,
    SelectLevelDown,
    ExitLevelSelection,
    PauseGame,
    PauseSelectionChange,
    PauseExitSelect,
    PauseChangeSelect,
    PauseSaveSelect,
    PauseLoadSelect,
    PauseAboutSelect,
    ExitAbout,
    MediaSelectionChange,
    PlayMedia,
    ExitMedia,
    SsknSelectionChange,
    SsknOk,
    SsknCancel,
    EndSelectionChange,
    EndContinue,
    EndExit,
    BootStageChange,
    StartNewGame,
    LoadGame,
    IdleAnimation,
    PlayIdleMedia,
}

impl GameEvent {
    pub fn kind(&self) -> EventKind {
        use GameEvent as E;
        match self {
            E::ChangeNode { .. } => EventKind::ChangeNode,
            E::SiteUp { .. } => EventKind::SiteUp,
            E::SiteDown { .. } => EventKind::SiteDown,
            E::SiteLeft { .. } => EventKind::SiteLeft,
            E::SiteRight { .. } => EventKind::SiteRight,
            E::ThrowNodeMedia { .. } => EventKind::ThrowNodeMedia,
            E::ThrowNodeSskn { .. } => EventKind::ThrowNodeSskn,
            E::ThrowNodeGate { .. } => EventKind::ThrowNodeGate,
            E::ThrowNodePolytan { .. } => EventKind::ThrowNodePolytan,
            E::ToggleLevelSelection { .. } => EventKind::ToggleLevelSelection,
            E::LevelSelectionUp { .. } => EventKind::LevelSelectionUp,
            E::LevelSelectionDown { .. } => EventKind::LevelSelectionDown,
            E::SelectLevelUp { .. } => EventKind::SelectLevelUp,
            E::SelectLevelDown { .. } => EventKind::SelectLevelDown,
            E::ExitLevelSelection => EventKind::ExitLevelSelection,
            E::PauseGame => EventKind::PauseGame,
            E::PauseSelectionChange { .. } => EventKind::PauseSelectionChange,
            E::PauseExitSelect => EventKind::PauseExitSelect,
            E::PauseChangeSelect { .. } => EventKind::PauseChangeSelect,
            E::PauseSaveSelect => EventKind::PauseSaveSelect,
            E::PauseLoadSelect => EventKind::PauseLoadSelect,
            E::PauseAboutSelect => EventKind::PauseAboutSelect,
            E::ExitAbout => EventKind::ExitAbout,
            E::MediaSelectionChange { .. } => EventKind::MediaSelectionChange,
            E::PlayMedia { .. } => EventKind::PlayMedia,
            E::ExitMedia => EventKind::ExitMedia,
            E::SsknSelectionChange { .. } => EventKind::SsknSelectionChange,
            E::SsknOk => EventKind::SsknOk,
            E::SsknCancel => EventKind::SsknCancel,
            E::EndSelectionChange { .. } => EventKind::EndSelectionChange,
            E::EndContinue => EventKind::EndContinue,
            E::EndExit => EventKind::EndExit,
            E::BootStageChange { .. } => EventKind::BootStageChange,
            E::StartNewGame => EventKind::StartNewGame,
            E::LoadGame => EventKind::LoadGame,
            E::IdleAnimation { .. } => EventKind::IdleAnimation,
            E::PlayIdleMedia => EventKind::PlayIdleMedia,
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
