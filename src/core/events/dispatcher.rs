//=========================================================================
// Event Dispatcher
//=========================================================================
//
// Fans one event out to every manager and sequences their mutations.
//
// Flow:
//   GameEvent ─► Manager::react() ─┬─ Ignored ─► next manager
//                                  └─ Steps  ─┬─ delay 0 ─► Manager::apply()
//                                             └─ delay n ─► TimerQueue
//
// Managers are visited in a fixed order. A manager that does not react to
// an event is expected; it only means the event belongs to someone else.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::debug;

//=== Internal Dependencies ===============================================

use super::{GameEvent, TimerQueue};
use crate::core::managers::{Manager, Managers, PendingMutation, Reaction, Step};

//=== Dispatch ============================================================

/// Routes an event to the managers and returns how many reacted.
///
/// Immediate mutations are applied before this returns; delayed ones are
/// queued relative to `now_ms` with the payload already captured.
pub fn dispatch(
    event: &GameEvent,
    managers: &mut Managers,
    timers: &mut TimerQueue,
    now_ms: u64,
) -> usize {
    let mut reached = 0;

    reached += deliver(&mut managers.scene, event, PendingMutation::Scene, timers, now_ms);
    reached += deliver(&mut managers.site, event, PendingMutation::Site, timers, now_ms);
    reached += deliver(
        &mut managers.level_selection,
        event,
        PendingMutation::LevelSelection,
        timers,
        now_ms,
    );
    reached += deliver(&mut managers.hud, event, PendingMutation::Hud, timers, now_ms);
    reached += deliver(&mut managers.progress, event, PendingMutation::Progress, timers, now_ms);
    reached += deliver(&mut managers.media, event, PendingMutation::Media, timers, now_ms);
    reached += deliver(&mut managers.menu, event, PendingMutation::Menu, timers, now_ms);
    reached += deliver(&mut managers.lain, event, PendingMutation::Lain, timers, now_ms);

    if reached == 0 {
        debug!(target: "events", "{:?} ignored by every manager", event.kind());
    }

    reached
}

//--- Delivery ------------------------------------------------------------

fn deliver<M: Manager>(
    manager: &mut M,
    event: &GameEvent,
    wrap: fn(M::Mutation) -> PendingMutation,
    timers: &mut TimerQueue,
    now_ms: u64,
) -> usize {
    let steps = match manager.react(event) {
        Reaction::Ignored => return 0,
        Reaction::Steps(steps) => steps,
    };

    debug!(
        target: "events",
        "{} reacting to {:?} ({} step(s))",
        manager.name(),
        event.kind(),
        steps.len()
    );

    for Step { mutation, delay_ms } in steps {
        if delay_ms == 0 {
            manager.apply(mutation);
        } else {
            timers.schedule(now_ms.saturating_add(delay_ms), wrap(mutation));
        }
    }

    1
}

//=========================================================================
// Unit Tests
//=========================================================================
