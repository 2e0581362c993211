//=========================================================================
// Save Data Model
//=========================================================================
//
// Current-schema save unit. Field names are the on-disk names.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

//=== Internal Dependencies ===============================================

use crate::core::site::{CursorLocation, NodeId, PolytanPart, SiteKind};

//=== Bounds ==============================================================

/// Highest reachable gate level.
pub const MAX_GATE_LEVEL: i32 = 4;

//=== PolytanParts ========================================================

/// Unlock flags for the six polytan body parts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PolytanParts {
    pub body: bool,
    pub head: bool,
    pub left_arm: bool,
    pub right_arm: bool,
    pub left_leg: bool,
    pub right_leg: bool,
}

impl PolytanParts {
    pub fn unlock(&mut self, part: PolytanPart) {
        *self.flag_mut(part) = true;
    }

    pub fn is_unlocked(&self, part: PolytanPart) -> bool {
        match part {
            PolytanPart::Body => self.body,
            PolytanPart::Head => self.head,
            PolytanPart::LeftArm => self.left_arm,
            PolytanPart::RightArm => self.right_arm,
            PolytanPart::LeftLeg => self.left_leg,
            PolytanPart::RightLeg => self.right_leg,
        }
    }

    fn flag_mut(&mut self, part: PolytanPart) -> &mut bool {
        match part {
            PolytanPart::Body => &mut self.body,
            PolytanPart::Head => &mut self.head,
            PolytanPart::LeftArm => &mut self.left_arm,
            PolytanPart::RightArm => &mut self.right_arm,
            PolytanPart::LeftLeg => &mut self.left_leg,
            PolytanPart::RightLeg => &mut self.right_leg,
        }
    }
}

//=== Progress ============================================================

/// Durable gameplay advancement.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Progress {
    #[serde(deserialize_with = "crate::persistence::saturating_i32")]
    pub sskn_level: i32,
    #[serde(deserialize_with = "crate::persistence::saturating_i32")]
    pub gate_level: i32,
    #[serde(deserialize_with = "crate::persistence::saturating_i32")]
    pub final_video_view_count: i32,
    pub polytan_parts: PolytanParts,
    pub viewed_nodes: BTreeSet<NodeId>,
}

impl Progress {
    /// Pulls counters back inside their bounds.
    pub fn clamp_in_place(&mut self) {
        self.gate_level = self.gate_level.clamp(0, MAX_GATE_LEVEL);
        self.final_video_view_count = self.final_video_view_count.max(0);
        self.sskn_level = self.sskn_level.max(0);
    }
}

//=== GameState ===========================================================

/// The full save unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub progress: Progress,
    pub site: SiteKind,
    pub a_location: CursorLocation,
    pub b_location: CursorLocation,
    pub name: String,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            progress: Progress::default(),
            site: SiteKind::A,
            a_location: CursorLocation::initial(SiteKind::A),
            b_location: CursorLocation::initial(SiteKind::B),
            name: String::new(),
        }
    }
}

impl GameState {
    /// Location of the active site.
    pub fn current_location(&self) -> &CursorLocation {
        match self.site {
            SiteKind::A => &self.a_location,
            SiteKind::B => &self.b_location,
        }
    }

    /// Applies every range correction in place.
    pub fn clamp_in_place(&mut self) {
        self.progress.clamp_in_place();
        self.a_location.clamp_in_place();
        self.b_location.clamp_in_place();
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
