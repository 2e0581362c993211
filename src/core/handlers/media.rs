use crate::core::events::GameEvent;
use crate::core::input::Action;
use crate::core::scene::{MediaContext, MediaSelection};

/// Media prompt: Up/Down switch between play and exit, Circle confirms.
pub fn handle_media(ctx: &MediaContext, action: Action) -> Option<GameEvent> {
    match action {
        Action::Up | Action::Down => Some(GameEvent::MediaSelectionChange {
            selection: ctx.selection.toggled(),
        }),
        Action::Circle => match ctx.selection {
            MediaSelection::Play => ctx
                .node
                .clone()
                .map(|node| GameEvent::PlayMedia { node }),
            MediaSelection::Exit => Some(GameEvent::ExitMedia),
        },
        _ => None,
    }
}
