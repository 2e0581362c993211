//=========================================================================
// Scene Manager
//=========================================================================
//
// Owns the active scene, the main-scene subscene and the idle-media flag.
//
// Node throws switch scene only after the throw animation has played;
// every other transition is immediate.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::debug;

//=== Internal Dependencies ===============================================

use super::{Manager, Reaction};
use crate::core::events::GameEvent;
use crate::core::scene::{Scene, Subscene};

//=== Delays ==============================================================

/// Time between throwing a node and entering its scene.
pub const NODE_THROW_DELAY_MS: u64 = 3450;

/// Time between the idle cue and entering the idle media scene.
pub const IDLE_MEDIA_DELAY_MS: u64 = 1200;

//=== SceneMutation =======================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneMutation {
    SetScene(Scene),
    SetSubscene(Subscene),
    SetIdleStarting(bool),
}

//=== SceneManager ========================================================

/// Scene state slice.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SceneManager {
    scene: Scene,
    subscene: Subscene,
    idle_starting: bool,
}

impl SceneManager {
    /// Starts in the boot scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts in the given scene.
    pub fn with_scene(scene: Scene) -> Self {
        Self {
            scene,
            ..Self::default()
        }
    }

    pub fn scene(&self) -> Scene {
        self.scene
    }

    pub fn subscene(&self) -> Subscene {
        self.subscene
    }

    /// Whether the idle media sequence has been triggered.
    pub fn is_idle_starting(&self) -> bool {
        self.idle_starting
    }

    //--- Direct Operations ------------------------------------------------

    /// Returns from a scene without an input policy.
    pub(crate) fn force_main(&mut self, clear_idle_starting: bool) {
        self.set_scene(Scene::Main);
        if clear_idle_starting {
            self.idle_starting = false;
        }
    }

    /// Enters a scene on behalf of the presentation layer.
    pub(crate) fn enter(&mut self, scene: Scene) {
        self.set_scene(scene);
    }

    fn set_scene(&mut self, scene: Scene) {
        if self.scene != scene {
            debug!(target: "scene", "Scene {:?} → {:?}", self.scene, scene);
        }
        self.scene = scene;
    }
}

impl Manager for SceneManager {
    type Mutation = SceneMutation;

    fn name(&self) -> &'static str {
        "scene"
    }

    fn react(&self, event: &GameEvent) -> Reaction<SceneMutation> {
        use SceneMutation::*;

        match event {
            GameEvent::ThrowNodeMedia { .. } => {
                Reaction::after(NODE_THROW_DELAY_MS, SetScene(Scene::Media))
            }
            GameEvent::ThrowNodeSskn { .. } => {
                Reaction::after(NODE_THROW_DELAY_MS, SetScene(Scene::Sskn))
            }
            GameEvent::ThrowNodeGate { .. } => {
                Reaction::after(NODE_THROW_DELAY_MS, SetScene(Scene::Gate))
            }
            GameEvent::ThrowNodePolytan { .. } => {
                Reaction::after(NODE_THROW_DELAY_MS, SetScene(Scene::Polytan))
            }

            GameEvent::ToggleLevelSelection { .. } => {
                Reaction::now(SetSubscene(Subscene::LevelSelection))
            }
            GameEvent::SelectLevelUp { .. }
            | GameEvent::SelectLevelDown { .. }
            | GameEvent::ExitLevelSelection => Reaction::now(SetSubscene(Subscene::Normal)),

            GameEvent::PauseGame => Reaction::now(SetSubscene(Subscene::Pause)),
            GameEvent::PauseExitSelect
            | GameEvent::PauseChangeSelect { .. }
            | GameEvent::PauseLoadSelect => Reaction::now(SetSubscene(Subscene::Normal)),
            GameEvent::PauseAboutSelect => Reaction::now(SetSubscene(Subscene::About)),
            GameEvent::ExitAbout => Reaction::now(SetSubscene(Subscene::Pause)),

            GameEvent::ExitMedia
            | GameEvent::SsknOk
            | GameEvent::SsknCancel
            | GameEvent::EndContinue => Reaction::now(SetScene(Scene::Main)),
            GameEvent::EndExit => Reaction::now(SetScene(Scene::Boot)),

            GameEvent::StartNewGame | GameEvent::LoadGame => {
                Reaction::now(SetScene(Scene::Main)).then(SetSubscene(Subscene::Normal))
            }

            GameEvent::PlayIdleMedia => Reaction::now(SetIdleStarting(true))
                .then_after(IDLE_MEDIA_DELAY_MS, SetScene(Scene::IdleMedia)),

            _ => Reaction::Ignored,
        }
    }

    fn apply(&mut self, mutation: SceneMutation) {
        match mutation {
            SceneMutation::SetScene(scene) => self.set_scene(scene),
            SceneMutation::SetSubscene(subscene) => self.subscene = subscene,
            SceneMutation::SetIdleStarting(flag) => self.idle_starting = flag,
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::managers::Step;
    use crate::core::site::{NodeData, NodeId, NodeKind, SiteKind};

    fn node() -> NodeData {
        NodeData {
            id: NodeId::new("0100"),
            name: "Dc1".into(),
            kind: NodeKind::Media,
            site: SiteKind::A,
            level: 1,
            segment: 0,
            row: 0,
            col: 0,
        }
    }

    #[test]
    fn throw_enters_target_scene_after_animation() {
        let manager = SceneManager::with_scene(Scene::Main);

        let reaction = manager.react(&GameEvent::ThrowNodeGate { node: node() });

        assert_eq!(
            reaction.into_steps(),
            vec![Step {
                mutation: SceneMutation::SetScene(Scene::Gate),
                delay_ms: NODE_THROW_DELAY_MS
            }]
        );
    }

    #[test]
    fn idle_media_flags_then_switches_scene() {
        let manager = SceneManager::with_scene(Scene::Main);

        let steps = manager.react(&GameEvent::PlayIdleMedia).into_steps();

        assert_eq!(steps.len(), 2);
        assert_eq!(steps[0].mutation, SceneMutation::SetIdleStarting(true));
        assert_eq!(steps[0].delay_ms, 0);
        assert_eq!(steps[1].mutation, SceneMutation::SetScene(Scene::IdleMedia));
        assert_eq!(steps[1].delay_ms, IDLE_MEDIA_DELAY_MS);
    }

    #[test]
    fn pause_about_round_trip() {
        let mut manager = SceneManager::with_scene(Scene::Main);

        for event in [GameEvent::PauseGame, GameEvent::PauseAboutSelect] {
            for step in manager.react(&event).into_steps() {
                manager.apply(step.mutation);
            }
        }
        assert_eq!(manager.subscene(), Subscene::About);

        for step in manager.react(&GameEvent::ExitAbout).into_steps() {
            manager.apply(step.mutation);
        }
        assert_eq!(manager.subscene(), Subscene::Pause);
    }

    #[test]
    fn force_main_optionally_clears_idle_flag() {
        let mut manager = SceneManager::with_scene(Scene::IdleMedia);
        manager.apply(SceneMutation::SetIdleStarting(true));

        manager.force_main(false);
        assert_eq!(manager.scene(), Scene::Main);
        assert!(manager.is_idle_starting());

        manager.force_main(true);
        assert!(!manager.is_idle_starting());
    }

    #[test]
    fn navigation_is_ignored() {
        let manager = SceneManager::new();
        assert!(manager
            .react(&GameEvent::LevelSelectionUp { selected_level: 2 })
            .is_ignored());
        assert!(manager.react(&GameEvent::PauseSaveSelect).is_ignored());
    }
}
