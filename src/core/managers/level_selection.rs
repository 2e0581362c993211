//=========================================================================
// Level Selection Manager
//=========================================================================

use super::{Manager, Reaction};
use crate::core::events::GameEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelSelectionMutation {
    SetSelectedLevel(i32),
}

/// Level highlighted in the level selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelSelectionManager {
    selected_level: i32,
}

impl LevelSelectionManager {
    pub fn new(selected_level: i32) -> Self {
        Self { selected_level }
    }

    pub fn selected_level(&self) -> i32 {
        self.selected_level
    }
}

impl Manager for LevelSelectionManager {
    type Mutation = LevelSelectionMutation;

    fn name(&self) -> &'static str {
        "level_selection"
    }

    fn react(&self, event: &GameEvent) -> Reaction<LevelSelectionMutation> {
        match event {
            // Opening the selector starts on the level the cursor is on.
            GameEvent::ToggleLevelSelection { level } => {
                Reaction::now(LevelSelectionMutation::SetSelectedLevel(*level))
            }
            GameEvent::LevelSelectionUp { selected_level }
            | GameEvent::LevelSelectionDown { selected_level } => {
                Reaction::now(LevelSelectionMutation::SetSelectedLevel(*selected_level))
            }
            _ => Reaction::Ignored,
        }
    }

    fn apply(&mut self, mutation: LevelSelectionMutation) {
        match mutation {
            LevelSelectionMutation::SetSelectedLevel(level) => self.selected_level = level,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selection_follows_events() {
        let mut manager = LevelSelectionManager::new(4);

        for event in [
            GameEvent::ToggleLevelSelection { level: 7 },
            GameEvent::LevelSelectionUp { selected_level: 8 },
        ] {
            for step in manager.react(&event).into_steps() {
                assert_eq!(step.delay_ms, 0);
                manager.apply(step.mutation);
            }
        }

        assert_eq!(manager.selected_level(), 8);
    }

    #[test]
    fn exit_leaves_selection_untouched() {
        let manager = LevelSelectionManager::new(4);
        assert!(manager.react(&GameEvent::ExitLevelSelection).is_ignored());
    }
}
