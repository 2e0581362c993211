use crate::core::events::GameEvent;
use crate::core::input::Action;
use crate::core::scene::{EndContext, EndOption};

/// Ending prompt: acknowledge to continue, or leave to the boot sequence.
pub fn handle_end(ctx: &EndContext, action: Action) -> Option<GameEvent> {
    match action {
        Action::Up | Action::Down => Some(GameEvent::EndSelectionChange {
            selection: ctx.selection.toggled(),
        }),
        Action::Circle => Some(match ctx.selection {
            EndOption::Continue => GameEvent::EndContinue,
            EndOption::End => GameEvent::EndExit,
        }),
        _ => None,
    }
}
