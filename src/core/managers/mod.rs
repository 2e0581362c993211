//=========================================================================
// Managers
//=========================================================================
//
// Owners of the session's state slices.
//
// Architecture:
//   Managers
//     ├─ SceneManager           scene, subscene, idle flag
//     ├─ SiteManager            active site, cursors, transform
//     ├─ LevelSelectionManager  selected level
//     ├─ HudManager             focused HUD element
//     ├─ ProgressManager        progress, player name
//     ├─ MediaManager           media prompt and playback flag
//     ├─ MenuManager            pause / sskn / end / boot selections
//     └─ LainManager            character animation
//
// Each manager answers an event with a `Reaction`: either `Ignored`, or
// an ordered list of its own closed mutations, each with a delay. Only
// the manager itself applies its mutations.
//
//=========================================================================

//=== Module Declarations =================================================

mod hud;
mod lain;
mod level_selection;
mod media;
mod menu;
mod progress;
mod scene;
mod site;

//=== Public API ==========================================================

pub use hud::{HudManager, HudMutation, HUD_FOCUS_DELAY_MS, HUD_SITE_MOVE_DELAY_MS};
pub use lain::{LainAnimation, LainManager, LainMutation, ANIMATION_DURATION_MS, IDLE_ANIMATIONS};
pub use level_selection::{LevelSelectionManager, LevelSelectionMutation};
pub use media::{MediaManager, MediaMutation};
pub use menu::{MenuManager, MenuMutation};
pub use progress::{ProgressManager, ProgressMutation};
pub use scene::{SceneManager, SceneMutation, IDLE_MEDIA_DELAY_MS, NODE_THROW_DELAY_MS};
pub use site::{
    SiteManager, SiteMutation, SiteTransform, HORIZONTAL_MOVE_DELAY_MS, VERTICAL_MOVE_DELAY_MS,
};

//=== Internal Dependencies ===============================================

use crate::core::events::GameEvent;
use crate::core::site::SiteKind;
use crate::persistence::GameState;

//=== Manager Trait =======================================================

/// Owner of one state slice.
///
/// `react` is pure: it only decides. The dispatcher then applies the
/// immediate steps and queues the delayed ones.
pub trait Manager {
    /// Closed set of changes this manager can make to its slice.
    type Mutation;

    /// Name used in logs.
    fn name(&self) -> &'static str;

    /// Mutations requested by an event, or `Ignored` when the event
    /// belongs to other managers.
    fn react(&self, event: &GameEvent) -> Reaction<Self::Mutation>;

    /// Applies one mutation to the slice.
    fn apply(&mut self, mutation: Self::Mutation);
}

//=== Reaction ============================================================

/// One mutation and how long to wait before applying it.
#[derive(Debug, Clone, PartialEq)]
pub struct Step<M> {
    pub mutation: M,
    pub delay_ms: u64,
}

/// A manager's answer to an event.
#[derive(Debug, Clone, PartialEq)]
pub enum Reaction<M> {
    /// The event is meant for other managers.
    Ignored,
    /// Mutations to apply, in order.
    Steps(Vec<Step<M>>),
}

impl<M> Reaction<M> {
    /// A single mutation applied synchronously.
    pub fn now(mutation: M) -> Self {
        Self::after(0, mutation)
    }

    /// A single mutation applied after `delay_ms`.
    pub fn after(delay_ms: u64, mutation: M) -> Self {
        Self::Steps(vec![Step { mutation, delay_ms }])
    }

    /// Appends an immediate step.
    pub fn then(self, mutation: M) -> Self {
        self.then_after(0, mutation)
    }

    /// Appends a delayed step.
    pub fn then_after(self, delay_ms: u64, mutation: M) -> Self {
        let mut steps = match self {
            Self::Ignored => Vec::with_capacity(1),
            Self::Steps(steps) => steps,
        };
        steps.push(Step { mutation, delay_ms });
        Self::Steps(steps)
    }

    pub fn is_ignored(&self) -> bool {
        matches!(self, Self::Ignored)
    }

    /// Steps in order; empty when ignored.
    pub fn into_steps(self) -> Vec<Step<M>> {
        match self {
            Self::Ignored => Vec::new(),
            Self::Steps(steps) => steps,
        }
    }
}

//=== PendingMutation =====================================================

/// A mutation tagged with the manager that owns it, as stored in timers.
#[derive(Debug, Clone, PartialEq)]
pub enum PendingMutation {
    Scene(SceneMutation),
    Site(SiteMutation),
    LevelSelection(LevelSelectionMutation),
    Hud(HudMutation),
    Progress(ProgressMutation),
    Media(MediaMutation),
    Menu(MenuMutation),
    Lain(LainMutation),
}

//=== Managers ============================================================

/// All state slices of a running session.
#[derive(Debug, Clone)]
pub struct Managers {
    pub(crate) scene: SceneManager,
    pub(crate) site: SiteManager,
    pub(crate) level_selection: LevelSelectionManager,
    pub(crate) hud: HudManager,
    pub(crate) progress: ProgressManager,
    pub(crate) media: MediaManager,
    pub(crate) menu: MenuManager,
    pub(crate) lain: LainManager,
}

impl Managers {
    /// Seeds every slice from a loaded save. The scene starts at boot.
    pub fn from_game_state(state: &GameState) -> Self {
        let location = state.current_location();
        Self {
            scene: SceneManager::new(),
            site: SiteManager::from_game_state(state),
            level_selection: LevelSelectionManager::new(location.level),
            hud: HudManager::new(location.hud_id()),
            progress: ProgressManager::new(state.progress.clone(), state.name.clone()),
            media: MediaManager::new(),
            menu: MenuManager::new(),
            lain: LainManager::new(),
        }
    }

    /// Replaces the persistent slices with a loaded save, leaving scene
    /// and menu state alone.
    pub fn restore(&mut self, state: &GameState) {
        let location = state.current_location();
        self.site = SiteManager::from_game_state(state);
        self.level_selection = LevelSelectionManager::new(location.level);
        self.hud = HudManager::new(location.hud_id());
        self.progress = ProgressManager::new(state.progress.clone(), state.name.clone());
    }

    /// Current save unit assembled from the live slices.
    pub fn snapshot(&self) -> GameState {
        GameState {
            progress: self.progress.progress().clone(),
            site: self.site.site(),
            a_location: *self.site.location(SiteKind::A),
            b_location: *self.site.location(SiteKind::B),
            name: self.progress.player_name().to_owned(),
        }
    }

    /// Routes a timer-fired mutation to its owner.
    pub fn apply(&mut self, mutation: PendingMutation) {
        match mutation {
            PendingMutation::Scene(m) => self.scene.apply(m),
            PendingMutation::Site(m) => self.site.apply(m),
            PendingMutation::LevelSelection(m) => self.level_selection.apply(m),
            PendingMutation::Hud(m) => self.hud.apply(m),
            PendingMutation::Progress(m) => self.progress.apply(m),
            PendingMutation::Media(m) => self.media.apply(m),
            PendingMutation::Menu(m) => self.menu.apply(m),
            PendingMutation::Lain(m) => self.lain.apply(m),
        }
    }

    //--- Accessors --------------------------------------------------------

    pub fn scene(&self) -> &SceneManager {
        &self.scene
    }

    /// Scene slice, for operations that bypass events (forced returns).
    pub(crate) fn scene_mut(&mut self) -> &mut SceneManager {
        &mut self.scene
    }

    pub fn site(&self) -> &SiteManager {
        &self.site
    }

    pub fn level_selection(&self) -> &LevelSelectionManager {
        &self.level_selection
    }

    pub fn hud(&self) -> &HudManager {
        &self.hud
    }

    pub fn progress(&self) -> &ProgressManager {
        &self.progress
    }

    pub fn media(&self) -> &MediaManager {
        &self.media
    }

    pub fn menu(&self) -> &MenuManager {
        &self.menu
    }

    pub fn lain(&self) -> &LainManager {
        &self.lain
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::scene::Scene;
    use crate::core::site::NodeId;

    #[test]
    fn reaction_builders_keep_order() {
        let reaction = Reaction::now(1).then_after(500, 2).then(3);

        let steps = reaction.into_steps();
        assert_eq!(
            steps,
            vec![
                Step { mutation: 1, delay_ms: 0 },
                Step { mutation: 2, delay_ms: 500 },
                Step { mutation: 3, delay_ms: 0 },
            ]
        );
    }

    #[test]
    fn ignored_reaction_has_no_steps() {
        let reaction: Reaction<u8> = Reaction::Ignored;
        assert!(reaction.is_ignored());
        assert!(reaction.into_steps().is_empty());
    }

    #[test]
    fn snapshot_round_trips_seeded_state() {
        let mut state = GameState::default();
        state.site = SiteKind::B;
        state.name = "lain".into();
        state.progress.gate_level = 2;
        state.progress.viewed_nodes.insert(NodeId::new("0101"));

        let managers = Managers::from_game_state(&state);

        assert_eq!(managers.snapshot(), state);
        assert_eq!(managers.level_selection().selected_level(), state.b_location.level);
        assert_eq!(managers.hud().active(), state.b_location.hud_id());
    }

    #[test]
    fn restore_replaces_persistent_slices_only() {
        let mut managers = Managers::from_game_state(&GameState::default());
        managers.apply(PendingMutation::Scene(SceneMutation::SetScene(Scene::Main)));

        let mut loaded = GameState::default();
        loaded.name = "navi".into();
        managers.restore(&loaded);

        assert_eq!(managers.progress().player_name(), "navi");
        assert_eq!(managers.scene().scene(), Scene::Main);
    }
}
