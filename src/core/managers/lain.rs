//=========================================================================
// Lain Manager
//=========================================================================
//
// Owns the character animation shown in the main scene.
//
// Every animation is followed by a scheduled return to `Standing`. With no
// cancellation, a return queued by an earlier animation can cut a later
// one short; the presentation layer treats the state as a hint.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use super::{Manager, Reaction, NODE_THROW_DELAY_MS};
use crate::core::events::GameEvent;

//=== Timing ==============================================================

/// Length of a movement or idle animation.
pub const ANIMATION_DURATION_MS: u64 = 3904;

//=== LainAnimation =======================================================

/// Character animation state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LainAnimation {
    #[default]
    Standing,

    //--- Movement ---------------------------------------------------------

    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    ThrowNode,

    //--- Idle -------------------------------------------------------------

    Stretch,
    StretchAlt,
    Yawn,
    LookAround,
    ScratchHead,
    Thinking,
    HandsBehindHead,
    SpinAround,
}

/// Pool the idle monitor picks from.
pub const IDLE_ANIMATIONS: [LainAnimation; 8] = [
    LainAnimation::Stretch,
    LainAnimation::StretchAlt,
    LainAnimation::Yawn,
    LainAnimation::LookAround,
    LainAnimation::ScratchHead,
    LainAnimation::Thinking,
    LainAnimation::HandsBehindHead,
    LainAnimation::SpinAround,
];

//=== LainMutation ========================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LainMutation {
    Play(LainAnimation),
}

//=== LainManager =========================================================

/// Character animation slice.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LainManager {
    animation: LainAnimation,
}

impl LainManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn animation(&self) -> LainAnimation {
        self.animation
    }
}

fn play_then_stand(animation: LainAnimation, duration_ms: u64) -> Reaction<LainMutation> {
    Reaction::now(LainMutation::Play(animation))
        .then_after(duration_ms, LainMutation::Play(LainAnimation::Standing))
}

impl Manager for LainManager {
    type Mutation = LainMutation;

    fn name(&self) -> &'static str {
        "lain"
    }

    fn react(&self, event: &GameEvent) -> Reaction<LainMutation> {
        use LainAnimation::*;

        match event {
            GameEvent::SiteUp { .. } | GameEvent::SelectLevelUp { .. } => {
                play_then_stand(MoveUp, ANIMATION_DURATION_MS)
            }
            GameEvent::SiteDown { .. } | GameEvent::SelectLevelDown { .. } => {
                play_then_stand(MoveDown, ANIMATION_DURATION_MS)
            }
            GameEvent::SiteLeft { .. } => play_then_stand(MoveLeft, ANIMATION_DURATION_MS),
            GameEvent::SiteRight { .. } => play_then_stand(MoveRight, ANIMATION_DURATION_MS),

            GameEvent::ThrowNodeMedia { .. }
            | GameEvent::ThrowNodeSskn { .. }
            | GameEvent::ThrowNodeGate { .. }
            | GameEvent::ThrowNodePolytan { .. } => {
                play_then_stand(ThrowNode, NODE_THROW_DELAY_MS)
            }

            GameEvent::IdleAnimation { animation } => {
                play_then_stand(*animation, ANIMATION_DURATION_MS)
            }

            _ => Reaction::Ignored,
        }
    }

    fn apply(&mut self, mutation: LainMutation) {
        match mutation {
            LainMutation::Play(animation) => self.animation = animation,
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
