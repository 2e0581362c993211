//=========================================================================
// Scenes
//=========================================================================
//
// Top-level modes of play and the menu selections that live inside them.
//
// Architecture:
//   Scene ─┬─ Main ─► Subscene { Normal | Pause | LevelSelection | About }
//          ├─ Boot ─► BootStage
//          ├─ Media / Sskn / End ─► two-way selections
//          └─ Gate / Polytan / IdleMedia (no input policy, any key returns)
//
// Only one scene is active. It decides which context provider and
// handler the router consults.
//
//=========================================================================

//=== Module Declarations =================================================

pub mod context;

//=== Public API ==========================================================

pub use context::{
    boot_context, end_context, main_context, media_context, sskn_context, BootContext,
    EndContext, MainContext, MediaContext, SessionView, SsknContext,
};

//=== Scene ===============================================================

/// Top-level mode of play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Scene {
    #[default]
    Boot,
    Main,
    Media,
    Sskn,
    End,
    Gate,
    Polytan,
    IdleMedia,
}

impl Scene {
    /// Whether input in this scene only returns to `Main`.
    pub fn is_passive(self) -> bool {
        matches!(self, Scene::Gate | Scene::Polytan | Scene::IdleMedia)
    }
}

//=== Subscene ============================================================

/// Secondary mode, meaningful only while the scene is `Main`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Subscene {
    #[default]
    Normal,
    Pause,
    LevelSelection,
    /// About screen opened from the pause menu.
    About,
}

//=== Pause Menu ==========================================================

/// Pause menu entries, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PauseOption {
    #[default]
    Load,
    About,
    Change,
    Save,
    Exit,
}

impl PauseOption {
    pub const ALL: [PauseOption; 5] = [
        PauseOption::Load,
        PauseOption::About,
        PauseOption::Change,
        PauseOption::Save,
        PauseOption::Exit,
    ];

    fn index(self) -> usize {
        self as usize
    }

    /// Entry above, or `None` at the top.
    pub fn up(self) -> Option<Self> {
        self.index().checked_sub(1).map(|i| Self::ALL[i])
    }

    /// Entry below, or `None` at the bottom.
    pub fn down(self) -> Option<Self> {
        Self::ALL.get(self.index() + 1).copied()
    }
}

//=== Two-Way Selections ==================================================

/// Media scene prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MediaSelection {
    #[default]
    Play,
    Exit,
}

impl MediaSelection {
    pub fn toggled(self) -> Self {
        match self {
            Self::Play => Self::Exit,
            Self::Exit => Self::Play,
        }
    }
}

/// Sskn scene prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SsknOption {
    #[default]
    Ok,
    Cancel,
}

impl SsknOption {
    pub fn toggled(self) -> Self {
        match self {
            Self::Ok => Self::Cancel,
            Self::Cancel => Self::Ok,
        }
    }
}

/// End scene prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EndOption {
    #[default]
    Continue,
    End,
}

impl EndOption {
    pub fn toggled(self) -> Self {
        match self {
            Self::Continue => Self::End,
            Self::End => Self::Continue,
        }
    }
}

//=== Boot Sequence =======================================================

/// Entry of the boot main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MainMenuOption {
    AuthorizeUser,
    LoadData,
}

/// Answer to the load-data prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Confirmation {
    Yes,
    No,
}

/// Position in the linear boot sequence.
///
/// ```text
/// Splash ─► MainMenu(AuthorizeUser | LoadData)
///                         │
///                         └─► LoadData(Yes | No)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BootStage {
    #[default]
    Splash,
    MainMenu(MainMenuOption),
    LoadData(Confirmation),
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pause_menu_moves_within_bounds() {
        assert_eq!(PauseOption::Load.up(), None);
        assert_eq!(PauseOption::Load.down(), Some(PauseOption::About));
        assert_eq!(PauseOption::Save.down(), Some(PauseOption::Exit));
        assert_eq!(PauseOption::Exit.down(), None);
        assert_eq!(PauseOption::Exit.up(), Some(PauseOption::Save));
    }

    #[test]
    fn two_way_selections_toggle() {
        assert_eq!(MediaSelection::Play.toggled(), MediaSelection::Exit);
        assert_eq!(SsknOption::Cancel.toggled(), SsknOption::Ok);
        assert_eq!(EndOption::Continue.toggled().toggled(), EndOption::Continue);
    }

    #[test]
    fn passive_scenes() {
        assert!(Scene::Gate.is_passive());
        assert!(Scene::IdleMedia.is_passive());
        assert!(!Scene::Main.is_passive());
        assert!(!Scene::Boot.is_passive());
    }

    #[test]
    fn defaults_start_at_the_beginning() {
        assert_eq!(Scene::default(), Scene::Boot);
        assert_eq!(Subscene::default(), Subscene::Normal);
        assert_eq!(BootStage::default(), BootStage::Splash);
    }
}
