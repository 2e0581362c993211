//=========================================================================
// Input Router
//=========================================================================
//
// Picks the (context provider, handler) pair for the active scene.
//
// Flow:
//   InputEvent ─► KeyMap ─► Action ─┬─ Boot/Main/Media/Sskn/End
//                                   │     └─► context() ─► handle() ─► Routed::Event
//                                   ├─ Gate/Polytan ─► Routed::ForceMain
//                                   └─ IdleMedia    ─► Routed::ForceMain (clears idle flag)
//
// At most one event leaves the router per action.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::{debug, trace};

//=== Internal Dependencies ===============================================

use super::{Action, InputEvent, KeyMap};
use crate::core::events::GameEvent;
use crate::core::handlers::{handle_boot, handle_end, handle_main, handle_media, handle_sskn};
use crate::core::scene::{
    boot_context, end_context, main_context, media_context, sskn_context, Scene, SessionView,
};

//=== Routed ==============================================================

/// What the router decided for one action.
#[derive(Debug, Clone, PartialEq)]
pub enum Routed {
    /// The active handler produced an event for the dispatcher.
    Event(GameEvent),
    /// A scene without input policy returns to `Main`.
    ForceMain { clear_idle_starting: bool },
    /// The action means nothing here.
    Ignored,
}

//=== InputRouter =========================================================

#[derive(Debug, Clone, Default)]
pub struct InputRouter {
    key_map: KeyMap,
}

impl InputRouter {
    pub fn new(key_map: KeyMap) -> Self {
        Self { key_map }
    }

    pub fn key_map(&self) -> &KeyMap {
        &self.key_map
    }

    pub fn key_map_mut(&mut self) -> &mut KeyMap {
        &mut self.key_map
    }

    /// Action for an input event; `None` for releases and unbound keys.
    pub fn resolve(&self, event: &InputEvent) -> Option<Action> {
        let action = self.key_map.map_event(event);
        if action.is_none() {
            trace!(target: "input", "Unmapped input {:?}", event);
        }
        action
    }

    /// Decides what an action does in the current scene.
    pub fn route(&self, action: Action, view: &SessionView<'_>) -> Routed {
        let scene = view.scene();

        let event = match scene {
            Scene::Boot => handle_boot(&boot_context(view), action),
            Scene::Main => handle_main(&main_context(view), action),
            Scene::Media => handle_media(&media_context(view), action),
            Scene::Sskn => handle_sskn(&sskn_context(view), action),
            Scene::End => handle_end(&end_context(view), action),
            Scene::Gate | Scene::Polytan => {
                return Routed::ForceMain {
                    clear_idle_starting: false,
                }
            }
            Scene::IdleMedia => {
                return Routed::ForceMain {
                    clear_idle_starting: true,
                }
            }
        };

        match event {
            Some(event) => {
                debug!(target: "input", "{:?} in {:?} → {:?}", action, scene, event.kind());
                Routed::Event(event)
            }
            None => Routed::Ignored,
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::input::KeyCode;
    use crate::core::managers::{Managers, SceneManager};
    use crate::core::scene::BootStage;
    use crate::core::site::StaticNodeRegistry;
    use crate::persistence::GameState;

    fn managers_in(scene: Scene) -> Managers {
        let mut managers = Managers::from_game_state(&GameState::default());
        *managers.scene_mut() = SceneManager::with_scene(scene);
        managers
    }

    #[test]
    fn unbound_keys_and_releases_resolve_to_nothing() {
        let router = InputRouter::default();

        assert_eq!(
            router.resolve(&InputEvent::KeyDown { key: KeyCode::ArrowUp }),
            Some(Action::Up)
        );
        assert_eq!(router.resolve(&InputEvent::KeyUp { key: KeyCode::ArrowUp }), None);
        assert_eq!(router.resolve(&InputEvent::KeyDown { key: KeyCode::KeyQ }), None);
    }

    #[test]
    fn passive_scenes_force_main() {
        let router = InputRouter::default();
        let registry = StaticNodeRegistry::new();

        let gate = managers_in(Scene::Gate);
        assert_eq!(
            router.route(Action::Square, &SessionView::new(&gate, &registry, false)),
            Routed::ForceMain {
                clear_idle_starting: false
            }
        );

        let idle = managers_in(Scene::IdleMedia);
        assert_eq!(
            router.route(Action::Up, &SessionView::new(&idle, &registry, false)),
            Routed::ForceMain {
                clear_idle_starting: true
            }
        );
    }

    #[test]
    fn active_scene_selects_handler() {
        let router = InputRouter::default();
        let registry = StaticNodeRegistry::new();

        let boot = managers_in(Scene::Boot);
        assert!(matches!(
            router.route(Action::Start, &SessionView::new(&boot, &registry, false)),
            Routed::Event(GameEvent::BootStageChange {
                stage: BootStage::MainMenu(_)
            })
        ));

        let main = managers_in(Scene::Main);
        assert_eq!(
            router.route(Action::Triangle, &SessionView::new(&main, &registry, false)),
            Routed::Event(GameEvent::PauseGame)
        );
    }

    #[test]
    fn meaningless_action_is_ignored() {
        let router = InputRouter::default();
        let registry = StaticNodeRegistry::new();
        let end = managers_in(Scene::End);

        assert_eq!(
            router.route(Action::Left, &SessionView::new(&end, &registry, false)),
            Routed::Ignored
        );
    }
}
