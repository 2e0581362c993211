//=========================================================================
// Context Providers
//=========================================================================
//
// Read-only snapshots of session state, one shape per handled scene.
//
// Flow:
//   SessionView ─► <scene>_context() ─► <Scene>Context ─► handler
//
// Providers never mutate and never see the action being handled.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use super::{BootStage, EndOption, MediaSelection, PauseOption, Scene, SsknOption, Subscene};
use crate::core::managers::Managers;
use crate::core::site::{CursorLocation, NodeData, NodeRegistry, SiteKind};

//=== SessionView =========================================================

/// Borrowed view over everything a provider may read.
#[derive(Clone, Copy)]
pub struct SessionView<'a> {
    pub managers: &'a Managers,
    pub registry: &'a dyn NodeRegistry,
    pub found_valid_save: bool,
}

impl<'a> SessionView<'a> {
    pub fn new(managers: &'a Managers, registry: &'a dyn NodeRegistry, found_valid_save: bool) -> Self {
        Self {
            managers,
            registry,
            found_valid_save,
        }
    }

    /// Active scene.
    pub fn scene(&self) -> Scene {
        self.managers.scene().scene()
    }
}

//=== Contexts ============================================================

/// What the boot handler needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BootContext {
    pub stage: BootStage,
    pub found_valid_save: bool,
}

/// What the main-scene handler needs.
#[derive(Debug, Clone, PartialEq)]
pub struct MainContext {
    pub subscene: Subscene,
    pub site: SiteKind,
    /// Cursor in the active site.
    pub location: CursorLocation,
    /// Cursor stored for the inactive site.
    pub other_location: CursorLocation,
    /// Node under the cursor, if the slot is occupied.
    pub focused_node: Option<NodeData>,
    pub selected_level: i32,
    pub pause_selection: PauseOption,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MediaContext {
    pub selection: MediaSelection,
    pub node: Option<NodeData>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SsknContext {
    pub selection: SsknOption,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EndContext {
    pub selection: EndOption,
}

//=== Providers ===========================================================

pub fn boot_context(view: &SessionView<'_>) -> BootContext {
    BootContext {
        stage: view.managers.menu().boot(),
        found_valid_save: view.found_valid_save,
    }
}

pub fn main_context(view: &SessionView<'_>) -> MainContext {
    let site_manager = view.managers.site();
    let site = site_manager.site();
    let location = *site_manager.location(site);

    MainContext {
        subscene: view.managers.scene().subscene(),
        site,
        location,
        other_location: *site_manager.location(site.other()),
        focused_node: view.registry.node_at(&location).cloned(),
        selected_level: view.managers.level_selection().selected_level(),
        pause_selection: view.managers.menu().pause(),
    }
}

pub fn media_context(view: &SessionView<'_>) -> MediaContext {
    let media = view.managers.media();
    MediaContext {
        selection: media.selection(),
        node: media.node().cloned(),
    }
}

pub fn sskn_context(view: &SessionView<'_>) -> SsknContext {
    SsknContext {
        selection: view.managers.menu().sskn(),
    }
}

pub fn end_context(view: &SessionView<'_>) -> EndContext {
    EndContext {
        selection: view.managers.menu().end(),
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::site::{NodeId, NodeKind, StaticNodeRegistry};
    use crate::persistence::GameState;

    fn registry_with_node_at(location: &CursorLocation) -> StaticNodeRegistry {
        StaticNodeRegistry::from_nodes([NodeData {
            id: NodeId::new("0422"),
            name: "Tda028".into(),
            kind: NodeKind::Media,
            site: location.site_kind,
            level: location.level,
            segment: location.site_segment,
            row: location.node_matrix_position.row,
            col: location.node_matrix_position.col,
        }])
    }

    #[test]
    fn main_context_reads_both_site_locations() {
        let state = GameState::default();
        let managers = Managers::from_game_state(&state);
        let registry = StaticNodeRegistry::new();
        let view = SessionView::new(&managers, &registry, false);

        let ctx = main_context(&view);

        assert_eq!(ctx.site, SiteKind::A);
        assert_eq!(ctx.location, state.a_location);
        assert_eq!(ctx.other_location, state.b_location);
        assert_eq!(ctx.subscene, Subscene::Normal);
        assert!(ctx.focused_node.is_none());
    }

    #[test]
    fn main_context_resolves_focused_node() {
        let state = GameState::default();
        let managers = Managers::from_game_state(&state);
        let registry = registry_with_node_at(&state.a_location);
        let view = SessionView::new(&managers, &registry, false);

        let ctx = main_context(&view);

        assert_eq!(ctx.focused_node.map(|node| node.id), Some(NodeId::new("0422")));
    }

    #[test]
    fn boot_context_carries_save_flag() {
        let managers = Managers::from_game_state(&GameState::default());
        let registry = StaticNodeRegistry::new();
        let view = SessionView::new(&managers, &registry, true);

        let ctx = boot_context(&view);

        assert_eq!(ctx.stage, BootStage::Splash);
        assert!(ctx.found_valid_save);
    }

    #[test]
    fn scene_contexts_start_on_first_option() {
        let managers = Managers::from_game_state(&GameState::default());
        let registry = StaticNodeRegistry::new();
        let view = SessionView::new(&managers, &registry, false);

        assert_eq!(media_context(&view).selection, MediaSelection::Play);
        assert_eq!(sskn_context(&view).selection, SsknOption::Ok);
        assert_eq!(end_context(&view).selection, EndOption::Continue);
        assert_eq!(view.scene(), Scene::Boot);
    }
}
