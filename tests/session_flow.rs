use lain_session::core::events::{dispatch, GameEvent, TimerQueue};
use lain_session::core::idle::ManualClock;
use lain_session::core::managers::{Managers, VERTICAL_MOVE_DELAY_MS};
use lain_session::core::scene::{PauseOption, Scene, Subscene};
use lain_session::core::site::{CursorLocation, SiteKind};
use lain_session::persistence::{GameState, SAVE_KEY};
use lain_session::{FileStore, KeyCode, SessionBuilder};

fn main_session(clock: &ManualClock) -> lain_session::Session {
    SessionBuilder::new()
        .with_clock(clock.clone())
        .with_seed(3)
        .with_initial_scene(Scene::Main)
        .build()
}

fn climbed(from: &CursorLocation) -> CursorLocation {
    let mut to = *from;
    to.level += 1;
    to
}

//--- Dispatcher ----------------------------------------------------------

#[test]
fn event_no_manager_handles_changes_nothing() {
    let mut managers = Managers::from_game_state(&GameState::default());
    let mut timers = TimerQueue::new();
    let before = format!("{managers:?}");

    let reached = dispatch(&GameEvent::PauseSaveSelect, &mut managers, &mut timers, 0);

    assert_eq!(reached, 0);
    assert_eq!(format!("{managers:?}"), before);
    assert!(timers.is_empty());
}

#[test]
fn queued_mutations_are_never_cancelled() {
    let mut managers = Managers::from_game_state(&GameState::default());
    let mut timers = TimerQueue::new();

    let first = climbed(managers.site().active_location());
    let second = climbed(&first);
    let up = |location: CursorLocation| GameEvent::SiteUp {
        location,
        pos_y: location.pos_y(),
        hud: location.hud_id(),
    };

    dispatch(&up(first), &mut managers, &mut timers, 0);
    dispatch(&up(second), &mut managers, &mut timers, 100);
    assert_eq!(managers.site().active_location().level, second.level);

    for mutation in timers.drain_due(VERTICAL_MOVE_DELAY_MS) {
        managers.apply(mutation);
    }
    assert_eq!(managers.site().transform().pos_y, first.pos_y());

    for mutation in timers.drain_due(VERTICAL_MOVE_DELAY_MS + 100) {
        managers.apply(mutation);
    }
    assert_eq!(managers.site().transform().pos_y, second.pos_y());
}

//--- Session -------------------------------------------------------------

#[test]
fn pause_menu_save_writes_current_state() {
    let clock = ManualClock::new(0);
    let mut session = main_session(&clock);
    assert!(session.store().get(SAVE_KEY).is_none());

    session.handle_key(KeyCode::KeyD);
    assert_eq!(session.subscene(), Subscene::Pause);

    for _ in 0..3 {
        session.handle_key(KeyCode::ArrowDown);
    }
    assert_eq!(session.menu().pause(), PauseOption::Save);

    session.handle_key(KeyCode::KeyX);

    let stored = session.store().get(SAVE_KEY).unwrap();
    let saved: GameState = serde_json::from_str(&stored).unwrap();
    assert_eq!(saved, session.snapshot());
    assert!(session.found_valid_save());
}

#[test]
fn saved_progress_survives_a_new_session() {
    let dir = tempfile::tempdir().unwrap();
    let clock = ManualClock::new(0);

    let mut first = SessionBuilder::new()
        .with_store(FileStore::new(dir.path()))
        .with_clock(clock.clone())
        .with_seed(1)
        .with_initial_scene(Scene::Main)
        .build();
    first.handle_key(KeyCode::ArrowUp);
    let moved = *first.site().active_location();
    first.save().unwrap();

    let second = SessionBuilder::new()
        .with_store(FileStore::new(dir.path()))
        .with_clock(clock)
        .with_seed(1)
        .build();

    assert!(second.found_valid_save());
    assert_eq!(second.scene(), Scene::Boot);
    assert_eq!(*second.site().active_location(), moved);
    assert_eq!(second.site().site(), SiteKind::A);
}

#[test]
fn reload_without_save_keeps_current_state() {
    let clock = ManualClock::new(0);
    let mut session = main_session(&clock);
    session.handle_key(KeyCode::ArrowUp);
    let moved = *session.site().active_location();

    assert!(!session.reload());
    assert_eq!(*session.site().active_location(), moved);
}

#[test]
fn delayed_mutations_land_on_tick() {
    let clock = ManualClock::new(0);
    let mut session = main_session(&clock);

    // Row 1 → row 0 → next level up.
    session.handle_key(KeyCode::ArrowUp);
    session.handle_key(KeyCode::ArrowUp);
    let target = *session.site().active_location();
    assert!(session.pending_timers() > 0);
    assert_ne!(session.site().transform().pos_y, target.pos_y());

    clock.advance(VERTICAL_MOVE_DELAY_MS);
    session.tick();

    assert_eq!(session.site().transform().pos_y, target.pos_y());
}

#[test]
fn gate_scene_returns_to_main_on_any_key() {
    let clock = ManualClock::new(0);
    let mut session = main_session(&clock);
    session.force_scene(Scene::Gate);
    assert_eq!(session.scene(), Scene::Gate);

    clock.advance(500);
    session.handle_key(KeyCode::KeyZ);

    assert_eq!(session.scene(), Scene::Main);
    assert_eq!(session.idle_monitor().last_key_press(), Some(500));
}

#[test]
fn pump_feeds_forwarded_keys_until_close() {
    use lain_session::core::input::InputEvent;
    use lain_session::core::platform_bridge::{EventCollector, PlatformEvent, TickControl};

    let clock = ManualClock::new(0);
    let mut session = main_session(&clock);
    let (tx, rx) = crossbeam_channel::unbounded();
    let mut collector = EventCollector::new(rx);

    tx.send(PlatformEvent::Inputs(vec![
        InputEvent::KeyDown { key: KeyCode::KeyD },
        InputEvent::KeyUp { key: KeyCode::KeyD },
    ]))
    .unwrap();
    assert_eq!(session.pump(&mut collector), TickControl::Continue);
    assert_eq!(session.subscene(), Subscene::Pause);

    tx.send(PlatformEvent::WindowClosed).unwrap();
    assert_eq!(session.pump(&mut collector), TickControl::Exit);
}
