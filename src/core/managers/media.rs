//=========================================================================
// Media Manager
//=========================================================================

use super::{Manager, Reaction};
use crate::core::events::GameEvent;
use crate::core::scene::MediaSelection;
use crate::core::site::NodeData;

#[derive(Debug, Clone, PartialEq)]
pub enum MediaMutation {
    /// Loads a node into the media scene with the prompt reset.
    Load(NodeData),
    Select(MediaSelection),
    SetPlaying(bool),
}

/// Media scene state: loaded node, prompt selection, playback flag.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MediaManager {
    node: Option<NodeData>,
    selection: MediaSelection,
    playing: bool,
}

impl MediaManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn node(&self) -> Option<&NodeData> {
        self.node.as_ref()
    }

    pub fn selection(&self) -> MediaSelection {
        self.selection
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }
}

impl Manager for MediaManager {
    type Mutation = MediaMutation;

    fn name(&self) -> &'static str {
        "media"
    }

    fn react(&self, event: &GameEvent) -> Reaction<MediaMutation> {
        match event {
            GameEvent::ThrowNodeMedia { node } => Reaction::now(MediaMutation::Load(node.clone())),
            GameEvent::MediaSelectionChange { selection } => {
                Reaction::now(MediaMutation::Select(*selection))
            }
            GameEvent::PlayMedia { .. } => Reaction::now(MediaMutation::SetPlaying(true)),
            GameEvent::ExitMedia => Reaction::now(MediaMutation::SetPlaying(false)),
            _ => Reaction::Ignored,
        }
    }

    fn apply(&mut self, mutation: MediaMutation) {
        match mutation {
            MediaMutation::Load(node) => {
                self.node = Some(node);
                self.selection = MediaSelection::Play;
                self.playing = false;
            }
            MediaMutation::Select(selection) => self.selection = selection,
            MediaMutation::SetPlaying(flag) => self.playing = flag,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::site::{NodeId, NodeKind, SiteKind};

    fn node() -> NodeData {
        NodeData {
            id: NodeId::new("0220"),
            name: "Lda001".into(),
            kind: NodeKind::Media,
            site: SiteKind::A,
            level: 2,
            segment: 2,
            row: 0,
            col: 0,
        }
    }

    fn run(manager: &mut MediaManager, event: GameEvent) {
        for step in manager.react(&event).into_steps() {
            manager.apply(step.mutation);
        }
    }

    #[test]
    fn throw_loads_node_with_fresh_prompt() {
        let mut manager = MediaManager::new();
        manager.apply(MediaMutation::Select(MediaSelection::Exit));

        run(&mut manager, GameEvent::ThrowNodeMedia { node: node() });

        assert_eq!(manager.node(), Some(&node()));
        assert_eq!(manager.selection(), MediaSelection::Play);
        assert!(!manager.is_playing());
    }

    #[test]
    fn play_and_exit_toggle_playback() {
        let mut manager = MediaManager::new();

        run(&mut manager, GameEvent::PlayMedia { node: node() });
        assert!(manager.is_playing());

        run(&mut manager, GameEvent::ExitMedia);
        assert!(!manager.is_playing());
    }
}
