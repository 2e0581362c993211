//=========================================================================
// Main Handler
//=========================================================================
//
// Input policy of the main scene, split by subscene.
//
// Cursor movement:
//   Up/Down     row 0..=2, then level ±1 (edge-clamped to 1..=level_count)
//   Left/Right  col 0..=3, then segment ±1 (wraps around 0..=7)
//
// Row 0 is the top of the matrix. Climbing a level lands on the bottom
// row, descending lands on the top row.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::events::GameEvent;
use crate::core::input::Action;
use crate::core::scene::{MainContext, PauseOption, Subscene};
use crate::core::site::{CursorLocation, NodeKind, MAX_COL, MAX_ROW, MIN_NAVIGABLE_LEVEL, SEGMENT_COUNT};

//=== Entry Point =========================================================

pub fn handle_main(ctx: &MainContext, action: Action) -> Option<GameEvent> {
    match ctx.subscene {
        Subscene::Normal => handle_normal(ctx, action),
        Subscene::LevelSelection => handle_level_selection(ctx, action),
        Subscene::Pause => handle_pause(ctx, action),
        Subscene::About => Some(GameEvent::ExitAbout),
    }
}

//=== Normal ==============================================================

fn handle_normal(ctx: &MainContext, action: Action) -> Option<GameEvent> {
    match action {
        Action::Up | Action::Down | Action::Left | Action::Right => move_cursor(&ctx.location, action),
        Action::Circle => throw_focused(ctx),
        Action::Triangle => Some(GameEvent::PauseGame),
        Action::L2 => Some(GameEvent::ToggleLevelSelection {
            level: ctx.location.level,
        }),
        _ => None,
    }
}

fn move_cursor(from: &CursorLocation, action: Action) -> Option<GameEvent> {
    let mut to = *from;
    let pos = &mut to.node_matrix_position;

    match action {
        Action::Up if pos.row > 0 => {
            pos.row -= 1;
            Some(change_node(to))
        }
        Action::Up if to.level < to.site_kind.level_count() => {
            pos.row = MAX_ROW;
            to.level += 1;
            Some(GameEvent::SiteUp {
                location: to,
                pos_y: to.pos_y(),
                hud: to.hud_id(),
            })
        }
        Action::Down if pos.row < MAX_ROW => {
            pos.row += 1;
            Some(change_node(to))
        }
        Action::Down if to.level > MIN_NAVIGABLE_LEVEL => {
            pos.row = 0;
            to.level -= 1;
            Some(GameEvent::SiteDown {
                location: to,
                pos_y: to.pos_y(),
                hud: to.hud_id(),
            })
        }
        Action::Left if pos.col > 0 => {
            pos.col -= 1;
            Some(change_node(to))
        }
        Action::Left => {
            to.site_segment = (to.site_segment + 1).rem_euclid(SEGMENT_COUNT);
            Some(GameEvent::SiteLeft {
                location: to,
                rot_y: to.rot_y(),
                hud: to.hud_id(),
            })
        }
        Action::Right if pos.col < MAX_COL => {
            pos.col += 1;
            Some(change_node(to))
        }
        Action::Right => {
            to.site_segment = (to.site_segment - 1).rem_euclid(SEGMENT_COUNT);
            Some(GameEvent::SiteRight {
                location: to,
                rot_y: to.rot_y(),
                hud: to.hud_id(),
            })
        }
        _ => None,
    }
}

fn change_node(location: CursorLocation) -> GameEvent {
    GameEvent::ChangeNode {
        location,
        hud: location.hud_id(),
    }
}

fn throw_focused(ctx: &MainContext) -> Option<GameEvent> {
    let node = ctx.focused_node.clone()?;

    Some(match node.kind {
        NodeKind::Media => GameEvent::ThrowNodeMedia { node },
        NodeKind::Sskn => GameEvent::ThrowNodeSskn { node },
        NodeKind::Gate => GameEvent::ThrowNodeGate { node },
        NodeKind::Polytan(part) => GameEvent::ThrowNodePolytan { node, part },
    })
}

//=== Level Selection =====================================================

fn handle_level_selection(ctx: &MainContext, action: Action) -> Option<GameEvent> {
    let max_level = ctx.site.level_count();
    let selected = ctx.selected_level;

    match action {
        Action::Up if selected < max_level => Some(GameEvent::LevelSelectionUp {
            selected_level: selected + 1,
        }),
        Action::Down if selected > MIN_NAVIGABLE_LEVEL => Some(GameEvent::LevelSelectionDown {
            selected_level: selected - 1,
        }),
        Action::Circle => {
            let current = ctx.location.level;
            if selected == current {
                return Some(GameEvent::ExitLevelSelection);
            }

            let mut to = ctx.location;
            to.level = selected;
            let (location, pos_y, hud) = (to, to.pos_y(), to.hud_id());

            Some(if selected > current {
                GameEvent::SelectLevelUp { location, pos_y, hud }
            } else {
                GameEvent::SelectLevelDown { location, pos_y, hud }
            })
        }
        Action::Cross | Action::L2 => Some(GameEvent::ExitLevelSelection),
        _ => None,
    }
}

//=== Pause ===============================================================

fn handle_pause(ctx: &MainContext, action: Action) -> Option<GameEvent> {
    let current = ctx.pause_selection;

    match action {
        Action::Up => current
            .up()
            .map(|selection| GameEvent::PauseSelectionChange { selection }),
        Action::Down => current
            .down()
            .map(|selection| GameEvent::PauseSelectionChange { selection }),
        Action::Circle => Some(match current {
            PauseOption::Load => GameEvent::PauseLoadSelect,
            PauseOption::About => GameEvent::PauseAboutSelect,
            PauseOption::Change => {
                let target = ctx.other_location;
                GameEvent::PauseChangeSelect {
                    new_site: ctx.site.other(),
                    rot_y: target.rot_y(),
                    pos_y: target.pos_y(),
                    hud: target.hud_id(),
                }
            }
            PauseOption::Save => GameEvent::PauseSaveSelect,
            PauseOption::Exit => GameEvent::PauseExitSelect,
        }),
        Action::Cross | Action::Triangle => Some(GameEvent::PauseExitSelect),
        _ => None,
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
