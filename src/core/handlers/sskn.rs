use crate::core::events::GameEvent;
use crate::core::input::Action;
use crate::core::scene::{SsknContext, SsknOption};

pub fn handle_sskn(ctx: &SsknContext, action: Action) -> Option<GameEvent> {
    match action {
        Action::Up | Action::Down => Some(GameEvent::SsknSelectionChange {
            selection: ctx.selection.toggled(),
        }),
        Action::Circle => Some(match ctx.selection {
            SsknOption::Ok => GameEvent::SsknOk,
            SsknOption::Cancel => GameEvent::SsknCancel,
        }),
        _ => None,
    }
}
