//=========================================================================
// Menu Manager
//=========================================================================
//
// Owns the highlighted entry of every menu-like prompt: pause menu, sskn
// prompt, end prompt and the boot sequence.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use super::{Manager, Reaction};
use crate::core::events::GameEvent;
use crate::core::scene::{BootStage, EndOption, PauseOption, SsknOption};

//=== MenuMutation ========================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuMutation {
    Pause(PauseOption),
    Sskn(SsknOption),
    End(EndOption),
    Boot(BootStage),
}

//=== MenuManager =========================================================

/// Menu selection slice.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MenuManager {
    pause: PauseOption,
    sskn: SsknOption,
    end: EndOption,
    boot: BootStage,
}

impl MenuManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pause(&self) -> PauseOption {
        self.pause
    }

    pub fn sskn(&self) -> SsknOption {
        self.sskn
    }

    pub fn end(&self) -> EndOption {
        self.end
    }

    pub fn boot(&self) -> BootStage {
        self.boot
    }
}

impl Manager for MenuManager {
    type Mutation = MenuMutation;

    fn name(&self) -> &'static str {
        "menu"
    }

    fn react(&self, event: &GameEvent) -> Reaction<MenuMutation> {
        use MenuMutation::*;

        match event {
            GameEvent::PauseGame => Reaction::now(Pause(PauseOption::default())),
            GameEvent::PauseSelectionChange { selection } => Reaction::now(Pause(*selection)),

            GameEvent::ThrowNodeSskn { .. } => Reaction::now(Sskn(SsknOption::default())),
            GameEvent::SsknSelectionChange { selection } => Reaction::now(Sskn(*selection)),

            GameEvent::EndSelectionChange { selection } => Reaction::now(End(*selection)),
            // Leaving the ending restarts the boot sequence from the splash.
            GameEvent::EndExit => {
                Reaction::now(End(EndOption::default())).then(Boot(BootStage::default()))
            }

            GameEvent::BootStageChange { stage } => Reaction::now(Boot(*stage)),

            _ => Reaction::Ignored,
        }
    }

    fn apply(&mut self, mutation: MenuMutation) {
        match mutation {
            MenuMutation::Pause(option) => self.pause = option,
            MenuMutation::Sskn(option) => self.sskn = option,
            MenuMutation::End(option) => self.end = option,
            MenuMutation::Boot(stage) => self.boot = stage,
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
