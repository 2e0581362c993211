//=========================================================================
// Progress Manager
//=========================================================================
//
// Owns durable advancement (the `Progress` save block) and the player name.
//
// Counters only move forward during play; the gate level stops at its cap.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::info;

//=== Internal Dependencies ===============================================

use super::{Manager, Reaction};
use crate::core::events::GameEvent;
use crate::core::site::{NodeId, PolytanPart};
use crate::persistence::{Progress, MAX_GATE_LEVEL};

//=== ProgressMutation ====================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProgressMutation {
    MarkViewed(NodeId),
    IncrementSsknLevel,
    IncrementGateLevel,
    UnlockPolytanPart(PolytanPart),
    IncrementFinalVideoViewCount,
    /// Fresh progress and an empty name.
    Reset,
}

//=== ProgressManager =====================================================

/// Progress state slice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressManager {
    progress: Progress,
    name: String,
}

impl ProgressManager {
    pub fn new(progress: Progress, name: String) -> Self {
        Self { progress, name }
    }

    pub fn progress(&self) -> &Progress {
        &self.progress
    }

    pub fn player_name(&self) -> &str {
        &self.name
    }

    pub fn is_viewed(&self, id: &NodeId) -> bool {
        self.progress.viewed_nodes.contains(id)
    }
}

impl Manager for ProgressManager {
    type Mutation = ProgressMutation;

    fn name(&self) -> &'static str {
        "progress"
    }

    fn react(&self, event: &GameEvent) -> Reaction<ProgressMutation> {
        use ProgressMutation::*;

        match event {
            // Media nodes count as viewed once playback starts, not on throw.
            GameEvent::PlayMedia { node } => Reaction::now(MarkViewed(node.id.clone())),
            GameEvent::ThrowNodeSskn { node } => Reaction::now(MarkViewed(node.id.clone())),
            GameEvent::ThrowNodeGate { node } => {
                Reaction::now(MarkViewed(node.id.clone())).then(IncrementGateLevel)
            }
            GameEvent::ThrowNodePolytan { node, part } => {
                Reaction::now(MarkViewed(node.id.clone())).then(UnlockPolytanPart(*part))
            }
            GameEvent::SsknOk => Reaction::now(IncrementSsknLevel),
            GameEvent::EndContinue | GameEvent::EndExit => {
                Reaction::now(IncrementFinalVideoViewCount)
            }
            GameEvent::StartNewGame => Reaction::now(Reset),
            _ => Reaction::Ignored,
        }
    }

    fn apply(&mut self, mutation: ProgressMutation) {
        match mutation {
            ProgressMutation::MarkViewed(id) => {
                self.progress.viewed_nodes.insert(id);
            }
            ProgressMutation::IncrementSsknLevel => {
                self.progress.sskn_level = self.progress.sskn_level.saturating_add(1)
            }
            ProgressMutation::IncrementGateLevel => {
                self.progress.gate_level =
                    self.progress.gate_level.saturating_add(1).min(MAX_GATE_LEVEL);
            }
            ProgressMutation::UnlockPolytanPart(part) => self.progress.polytan_parts.unlock(part),
            ProgressMutation::IncrementFinalVideoViewCount => {
                self.progress.final_video_view_count =
                    self.progress.final_video_view_count.saturating_add(1)
            }
            ProgressMutation::Reset => {
                info!(target: "progress", "Progress reset for a new game");
                self.progress = Progress::default();
                self.name.clear();
            }
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
