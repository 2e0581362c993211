//=========================================================================
// Session
//
// Ownership root of one running game session.
//
// Architecture:
// ```text
//     SessionBuilder ──build()──> Session
//         │                         │
//         ├─ with_store()           ├─ handle_input() / handle_key()
//         ├─ with_registry()        │     KeyMap → InputRouter → dispatch()
//         ├─ with_key_map()         ├─ tick()
//         ├─ with_clock()           │     TimerQueue → Managers, IdleMonitor
//         ├─ with_audio()           ├─ pump(EventCollector)
//         ├─ with_seed()            └─ save() / reload() / snapshot()
//         └─ with_idle_config()
// ```
//
// Startup runs the legacy migration, then loads the current save and
// seeds every manager from it. Everything after that happens on the
// caller's thread, one input or tick at a time.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::{debug, error, info, warn};

//=== Internal Dependencies ===============================================

use crate::core::events::{dispatch, GameEvent, TimerQueue};
use crate::core::idle::{
    AudioSink, Clock, IdleAnimationSelector, IdleConfig, IdleMonitor, NullAudio,
    RandomIdleSelector, SystemClock,
};
use crate::core::input::{Action, InputEvent, InputRouter, KeyCode, KeyMap, Routed};
use crate::core::managers::{
    HudManager, LainManager, LevelSelectionManager, Managers, MediaManager, MenuManager,
    ProgressManager, SceneManager, SiteManager,
};
use crate::core::platform_bridge::{EventCollector, TickControl};
use crate::core::scene::{Scene, SessionView, Subscene};
use crate::core::site::{NodeRegistry, StaticNodeRegistry};
use crate::persistence::{
    GameState, KeyValueStore, LoadOutcome, MemoryStore, MigrationOutcome, Persistence,
    PersistenceError, LEGACY_SAVE_KEY, SAVE_KEY,
};

//=== SessionBuilder ======================================================

/// Builder for configuring and constructing a [`Session`].
///
/// # Default Values
///
/// - **Store**: in-memory, empty
/// - **Registry**: empty
/// - **Key map**: [`KeyMap::standard`]
/// - **Clock**: [`SystemClock`]
/// - **Audio**: [`NullAudio`]
/// - **Idle animations**: random, seeded from entropy
/// - **Keys**: `lainTSX-save-v3` / `lainSaveState`
/// - **Idle thresholds**: 10 000 / 2 500 / 30 000 ms
/// - **Initial scene**: `Boot`
///
/// # Examples
///
/// ```
/// use lain_session::core::idle::ManualClock;
/// use lain_session::persistence::MemoryStore;
/// use lain_session::SessionBuilder;
///
/// let clock = ManualClock::new(0);
/// let session = SessionBuilder::new()
///     .with_store(MemoryStore::new())
///     .with_clock(clock.clone())
///     .with_seed(7)
///     .build();
///
/// assert!(!session.found_valid_save());
/// ```
pub struct SessionBuilder {
    store: Box<dyn KeyValueStore>,
    registry: Box<dyn NodeRegistry>,
    key_map: KeyMap,
    clock: Box<dyn Clock>,
    audio: Box<dyn AudioSink>,
    selector: Option<Box<dyn IdleAnimationSelector>>,
    seed: Option<u64>,
    save_key: String,
    legacy_key: String,
    idle_config: IdleConfig,
    initial_scene: Scene,
}

impl SessionBuilder {
    pub fn new() -> Self {
        Self {
            store: Box::new(MemoryStore::new()),
            registry: Box::new(StaticNodeRegistry::new()),
            key_map: KeyMap::standard(),
            clock: Box::new(SystemClock::new()),
            audio: Box::new(NullAudio),
            selector: None,
            seed: None,
            save_key: SAVE_KEY.to_owned(),
            legacy_key: LEGACY_SAVE_KEY.to_owned(),
            idle_config: IdleConfig::default(),
            initial_scene: Scene::Boot,
        }
    }

    pub fn with_store(mut self, store: impl KeyValueStore + 'static) -> Self {
        self.store = Box::new(store);
        self
    }

    /// Node data used for focused-node lookups and legacy migration.
    pub fn with_registry(mut self, registry: impl NodeRegistry + 'static) -> Self {
        self.registry = Box::new(registry);
        self
    }

    pub fn with_key_map(mut self, key_map: KeyMap) -> Self {
        self.key_map = key_map;
        self
    }

    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    pub fn with_audio(mut self, audio: impl AudioSink + 'static) -> Self {
        self.audio = Box::new(audio);
        self
    }

    /// Seeds the random idle-animation selector for reproducible runs.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Replaces the random idle-animation selector altogether.
    pub fn with_idle_selector(mut self, selector: impl IdleAnimationSelector + 'static) -> Self {
        self.selector = Some(Box::new(selector));
        self
    }

    /// # Panics
    ///
    /// Panics if `key` is empty.
    pub fn with_save_key(mut self, key: impl Into<String>) -> Self {
        let key = key.into();
        assert!(!key.is_empty(), "Save key must not be empty");
        self.save_key = key;
        self
    }

    /// # Panics
    ///
    /// Panics if `key` is empty.
    pub fn with_legacy_key(mut self, key: impl Into<String>) -> Self {
        let key = key.into();
        assert!(!key.is_empty(), "Legacy key must not be empty");
        self.legacy_key = key;
        self
    }

    /// # Panics
    ///
    /// Panics if either inactivity threshold is zero, or if the rebase
    /// offset is not below the animation threshold.
    pub fn with_idle_config(mut self, config: IdleConfig) -> Self {
        assert!(
            config.animation_after_ms > 0,
            "Idle animation threshold must be positive"
        );
        assert!(
            config.idle_media_after_ms > 0,
            "Idle media threshold must be positive"
        );
        assert!(
            config.animation_rebase_ms < config.animation_after_ms,
            "Idle animation rebase ({}ms) must be below its threshold ({}ms)",
            config.animation_rebase_ms,
            config.animation_after_ms
        );
        self.idle_config = config;
        self
    }

    /// Starts somewhere other than the boot sequence. Starting in `Main`
    /// arms the idle monitor immediately.
    pub fn with_initial_scene(mut self, scene: Scene) -> Self {
        self.initial_scene = scene;
        self
    }

    /// Migrates, loads and seeds the managers.
    pub fn build(self) -> Session {
        let mut persistence = Persistence::with_keys(self.store, self.save_key, self.legacy_key);

        match persistence.migrate_legacy_if_present(self.registry.as_ref()) {
            MigrationOutcome::NotPresent => {}
            outcome => info!(target: "session", "Legacy save migration: {:?}", outcome),
        }

        let LoadOutcome {
            state,
            found_valid_save,
        } = persistence.load();

        let mut managers = Managers::from_game_state(&state);
        *managers.scene_mut() = SceneManager::with_scene(self.initial_scene);

        let mut idle = IdleMonitor::new(self.idle_config);
        if self.initial_scene == Scene::Main {
            idle.record_activity(self.clock.now_ms());
        }

        let selector = self.selector.unwrap_or_else(|| match self.seed {
            Some(seed) => Box::new(RandomIdleSelector::seeded(seed)),
            None => Box::new(RandomIdleSelector::from_entropy()),
        });

        info!(
            target: "session",
            "Session ready (scene: {:?}, valid save: {})",
            self.initial_scene,
            found_valid_save
        );

        Session {
            managers,
            timers: TimerQueue::new(),
            idle,
            router: InputRouter::new(self.key_map),
            persistence,
            registry: self.registry,
            clock: self.clock,
            audio: self.audio,
            selector,
            found_valid_save,
        }
    }
}

impl Default for SessionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

//=== Session =============================================================

/// A running session: state slices, pending timers and collaborators.
pub struct Session {
    managers: Managers,
    timers: TimerQueue,
    idle: IdleMonitor,
    router: InputRouter,
    persistence: Persistence<Box<dyn KeyValueStore>>,
    registry: Box<dyn NodeRegistry>,
    clock: Box<dyn Clock>,
    audio: Box<dyn AudioSink>,
    selector: Box<dyn IdleAnimationSelector>,
    found_valid_save: bool,
}

impl Session {
    pub fn builder() -> SessionBuilder {
        SessionBuilder::new()
    }

    //--- Input ------------------------------------------------------------

    /// Handles a key press.
    pub fn handle_key(&mut self, key: KeyCode) -> Routed {
        self.handle_input(&InputEvent::KeyDown { key })
    }

    /// Handles a raw input event. Releases and unbound keys are dropped.
    pub fn handle_input(&mut self, event: &InputEvent) -> Routed {
        match self.router.resolve(event) {
            Some(action) => self.handle_action(action),
            None => Routed::Ignored,
        }
    }

    /// Handles a semantic action as if its key had been pressed.
    ///
    /// Any mapped action taken in `Main` counts as activity for the idle
    /// monitor, whether or not the handler produces an event.
    pub fn handle_action(&mut self, action: Action) -> Routed {
        let now = self.clock.now_ms();
        let scene_before = self.managers.scene().scene();

        if scene_before == Scene::Main {
            self.idle.record_activity(now);
        }

        let routed = {
            let view = SessionView::new(&self.managers, self.registry.as_ref(), self.found_valid_save);
            self.router.route(action, &view)
        };

        match &routed {
            Routed::Event(event) => self.dispatch_event(event, now),
            Routed::ForceMain {
                clear_idle_starting,
            } => {
                self.managers.scene_mut().force_main(*clear_idle_starting);
                self.observe_scene_change(scene_before, now);
            }
            Routed::Ignored => {}
        }

        routed
    }

    /// Feeds every input collected this frame. Returns `Exit` once the
    /// platform side has closed.
    pub fn pump(&mut self, collector: &mut EventCollector) -> TickControl {
        let control = collector.collect_frame();

        for event in collector.take_inputs() {
            self.handle_input(&event);
        }

        control
    }

    //--- Frame Tick -------------------------------------------------------

    /// Applies due timers and runs the idle monitor. Returns how many
    /// delayed mutations were applied.
    pub fn tick(&mut self) -> usize {
        let now = self.clock.now_ms();
        let scene_before = self.managers.scene().scene();

        let due = self.timers.drain_due(now);
        let applied = due.len();
        for mutation in due {
            self.managers.apply(mutation);
        }
        self.observe_scene_change(scene_before, now);

        let output = self.idle.tick(
            now,
            self.managers.scene().scene(),
            self.managers.scene().subscene(),
            self.selector.as_mut(),
        );
        if let Some(cue) = output.cue {
            self.audio.play(cue);
        }
        for event in &output.events {
            self.dispatch_event(event, now);
        }

        applied
    }

    //--- Scene Control ----------------------------------------------------

    /// Enters a scene on behalf of the presentation layer, e.g. the ending
    /// once its trigger media has finished.
    pub fn force_scene(&mut self, scene: Scene) {
        let now = self.clock.now_ms();
        let scene_before = self.managers.scene().scene();

        self.managers.scene_mut().enter(scene);
        self.observe_scene_change(scene_before, now);
    }

    //--- Persistence ------------------------------------------------------

    /// Writes the current snapshot to storage.
    pub fn save(&mut self) -> Result<(), PersistenceError> {
        let state = self.managers.snapshot();
        self.persistence.save(&state)?;
        self.found_valid_save = true;
        info!(target: "session", "Game saved");
        Ok(())
    }

    /// Reloads the stored save into the persistent slices. Returns whether
    /// a valid save was found; without one nothing changes.
    pub fn reload(&mut self) -> bool {
        let LoadOutcome {
            state,
            found_valid_save,
        } = self.persistence.load();
        self.found_valid_save = found_valid_save;

        if !found_valid_save {
            warn!(target: "session", "No valid save to load, keeping current state");
            return false;
        }

        self.managers.restore(&state);
        info!(target: "session", "Save loaded");
        true
    }

    /// Current save unit assembled from the live slices.
    pub fn snapshot(&self) -> GameState {
        self.managers.snapshot()
    }

    pub fn found_valid_save(&self) -> bool {
        self.found_valid_save
    }

    //--- Accessors --------------------------------------------------------

    pub fn managers(&self) -> &Managers {
        &self.managers
    }

    pub fn scene(&self) -> Scene {
        self.managers.scene().scene()
    }

    pub fn subscene(&self) -> Subscene {
        self.managers.scene().subscene()
    }

    pub fn site(&self) -> &SiteManager {
        self.managers.site()
    }

    pub fn level_selection(&self) -> &LevelSelectionManager {
        self.managers.level_selection()
    }

    pub fn hud(&self) -> &HudManager {
        self.managers.hud()
    }

    pub fn progress(&self) -> &ProgressManager {
        self.managers.progress()
    }

    pub fn media(&self) -> &MediaManager {
        self.managers.media()
    }

    pub fn menu(&self) -> &MenuManager {
        self.managers.menu()
    }

    pub fn lain(&self) -> &LainManager {
        self.managers.lain()
    }

    pub fn idle_monitor(&self) -> &IdleMonitor {
        &self.idle
    }

    /// Delayed mutations still waiting to fire.
    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    pub fn key_map_mut(&mut self) -> &mut KeyMap {
        self.router.key_map_mut()
    }

    pub fn registry(&self) -> &dyn NodeRegistry {
        self.registry.as_ref()
    }

    pub fn store(&self) -> &dyn KeyValueStore {
        &**self.persistence.store()
    }

    //--- Internal Helpers -------------------------------------------------

    fn dispatch_event(&mut self, event: &GameEvent, now: u64) {
        let scene_before = self.managers.scene().scene();

        dispatch(event, &mut self.managers, &mut self.timers, now);

        // Storage work that no manager owns.
        match event {
            GameEvent::PauseSaveSelect => {
                if let Err(e) = self.save() {
                    error!(target: "session", "Save failed: {}", e);
                }
            }
            GameEvent::PauseLoadSelect | GameEvent::LoadGame => {
                self.reload();
            }
            _ => {}
        }

        self.observe_scene_change(scene_before, now);
    }

    /// Keeps the idle monitor in step with the active scene. Entering
    /// `Main` counts as fresh activity.
    fn observe_scene_change(&mut self, scene_before: Scene, now: u64) {
        let scene = self.managers.scene().scene();
        self.idle.observe_scene(scene);

        if scene != scene_before {
            debug!(target: "session", "Scene change {:?} → {:?}", scene_before, scene);
            if scene == Scene::Main {
                self.idle.record_activity(now);
            }
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::idle::ManualClock;
    use crate::core::scene::{BootStage, MainMenuOption};

    fn session_in(scene: Scene) -> (Session, ManualClock) {
        let clock = ManualClock::new(1_000);
        let session = SessionBuilder::new()
            .with_clock(clock.clone())
            .with_seed(1)
            .with_initial_scene(scene)
            .build();
        (session, clock)
    }

    //=====================================================================
    // SessionBuilder Tests
    //=====================================================================

    #[test]
    #[should_panic(expected = "Save key must not be empty")]
    fn builder_rejects_empty_save_key() {
        SessionBuilder::new().with_save_key("");
    }

    #[test]
    #[should_panic(expected = "Idle media threshold must be positive")]
    fn builder_rejects_zero_idle_media_threshold() {
        SessionBuilder::new().with_idle_config(IdleConfig {
            idle_media_after_ms: 0,
            ..IdleConfig::default()
        });
    }

    #[test]
    fn builder_defaults_to_boot_without_save() {
        let session = SessionBuilder::new().with_seed(3).build();

        assert_eq!(session.scene(), Scene::Boot);
        assert!(!session.found_valid_save());
        assert_eq!(session.snapshot(), GameState::default());
    }

    //=====================================================================
    // Session Tests
    //=====================================================================

    #[test]
    fn boot_sequence_reaches_main_and_arms_idle() {
        let (mut session, _clock) = session_in(Scene::Boot);

        session.handle_key(KeyCode::KeyV);
        assert_eq!(session.menu().boot(), BootStage::MainMenu(MainMenuOption::AuthorizeUser));
        assert_eq!(session.idle_monitor().scene_baseline(), None);

        session.handle_key(KeyCode::KeyX);

        assert_eq!(session.scene(), Scene::Main);
        assert_eq!(session.idle_monitor().scene_baseline(), Some(1_000));
    }

    #[test]
    fn input_in_main_stamps_activity() {
        let (mut session, clock) = session_in(Scene::Main);

        clock.advance(5_000);
        session.handle_key(KeyCode::ArrowDown);

        assert_eq!(session.idle_monitor().last_key_press(), Some(6_000));
    }

    #[test]
    fn unmapped_keys_do_nothing() {
        let (mut session, clock) = session_in(Scene::Main);
        clock.advance(100);

        assert_eq!(session.handle_key(KeyCode::KeyQ), Routed::Ignored);
        assert_eq!(session.idle_monitor().last_key_press(), Some(1_000));
    }

    #[test]
    fn delayed_mutations_wait_for_tick() {
        let (mut session, clock) = session_in(Scene::Main);
        let before = session.site().transform();

        session.handle_key(KeyCode::ArrowLeft);
        session.handle_key(KeyCode::ArrowLeft);
        assert!(session.pending_timers() > 0);
        assert_eq!(session.site().transform(), before);

        clock.advance(5_000);
        session.tick();

        assert_ne!(session.site().transform().rot_y, before.rot_y);
        assert_eq!(session.pending_timers(), 0);
    }

    #[test]
    fn pause_save_writes_snapshot() {
        let (mut session, _clock) = session_in(Scene::Main);

        session.handle_key(KeyCode::KeyD);
        assert_eq!(session.subscene(), Subscene::Pause);
        for _ in 0..3 {
            session.handle_key(KeyCode::ArrowDown);
        }
        session.handle_key(KeyCode::KeyX);

        assert!(session.found_valid_save());
        assert!(session.store().get(SAVE_KEY).is_some());
    }

    #[test]
    fn passive_scene_returns_to_main_on_any_key() {
        let (mut session, _clock) = session_in(Scene::Main);
        session.force_scene(Scene::Gate);
        assert_eq!(session.idle_monitor().scene_baseline(), None);

        let routed = session.handle_key(KeyCode::KeyZ);

        assert_eq!(
            routed,
            Routed::ForceMain {
                clear_idle_starting: false
            }
        );
        assert_eq!(session.scene(), Scene::Main);
        assert!(session.idle_monitor().scene_baseline().is_some());
    }
}
