//=========================================================================
// Boot Handler
//=========================================================================
//
// Linear boot sequence:
//
//   Splash ─► MainMenu(AuthorizeUser) ─────────────► StartNewGame
//                 │ up/down
//             MainMenu(LoadData) ─► LoadData(Yes|No) ─► LoadGame
//                     ▲                    │ No / Cross / no save
//                     └────────────────────┘
//
//=========================================================================

use crate::core::events::GameEvent;
use crate::core::input::Action;
use crate::core::scene::{BootContext, BootStage, Confirmation, MainMenuOption};

pub fn handle_boot(ctx: &BootContext, action: Action) -> Option<GameEvent> {
    let stage = match (ctx.stage, action) {
        (BootStage::Splash, Action::Start | Action::Circle) => {
            BootStage::MainMenu(MainMenuOption::AuthorizeUser)
        }

        (BootStage::MainMenu(option), Action::Up | Action::Down) => {
            BootStage::MainMenu(match option {
                MainMenuOption::AuthorizeUser => MainMenuOption::LoadData,
                MainMenuOption::LoadData => MainMenuOption::AuthorizeUser,
            })
        }
        (BootStage::MainMenu(MainMenuOption::AuthorizeUser), Action::Circle) => {
            return Some(GameEvent::StartNewGame)
        }
        (BootStage::MainMenu(MainMenuOption::LoadData), Action::Circle) => {
            BootStage::LoadData(Confirmation::Yes)
        }

        (BootStage::LoadData(answer), Action::Left | Action::Right) => {
            BootStage::LoadData(match answer {
                Confirmation::Yes => Confirmation::No,
                Confirmation::No => Confirmation::Yes,
            })
        }
        (BootStage::LoadData(Confirmation::Yes), Action::Circle) if ctx.found_valid_save => {
            return Some(GameEvent::LoadGame)
        }
        (BootStage::LoadData(_), Action::Circle | Action::Cross) => {
            BootStage::MainMenu(MainMenuOption::LoadData)
        }

        _ => return None,
    };

    Some(GameEvent::BootStageChange { stage })
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx(stage: BootStage, found_valid_save: bool) -> BootContext {
        BootContext {
            stage,
            found_valid_save,
        }
    }

    #[test]
    fn splash_advances_to_main_menu() {
        let event = handle_boot(&ctx(BootStage::Splash, false), Action::Start);
        assert_eq!(
            event,
            Some(GameEvent::BootStageChange {
                stage: BootStage::MainMenu(MainMenuOption::AuthorizeUser)
            })
        );
        assert_eq!(handle_boot(&ctx(BootStage::Splash, false), Action::Left), None);
    }

    #[test]
    fn authorize_user_starts_new_game() {
        let stage = BootStage::MainMenu(MainMenuOption::AuthorizeUser);
        assert_eq!(
            handle_boot(&ctx(stage, true), Action::Circle),
            Some(GameEvent::StartNewGame)
        );
    }

    #[test]
    fn load_requires_valid_save() {
        let stage = BootStage::LoadData(Confirmation::Yes);

        assert_eq!(
            handle_boot(&ctx(stage, true), Action::Circle),
            Some(GameEvent::LoadGame)
        );
        assert_eq!(
            handle_boot(&ctx(stage, false), Action::Circle),
            Some(GameEvent::BootStageChange {
                stage: BootStage::MainMenu(MainMenuOption::LoadData)
            })
        );
    }

    #[test]
    fn load_prompt_toggles_and_backs_out() {
        let stage = BootStage::LoadData(Confirmation::Yes);
        assert_eq!(
            handle_boot(&ctx(stage, true), Action::Right),
            Some(GameEvent::BootStageChange {
                stage: BootStage::LoadData(Confirmation::No)
            })
        );

        let declined = BootStage::LoadData(Confirmation::No);
        assert_eq!(
            handle_boot(&ctx(declined, true), Action::Circle),
            Some(GameEvent::BootStageChange {
                stage: BootStage::MainMenu(MainMenuOption::LoadData)
            })
        );
    }
}
