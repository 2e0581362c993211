//=========================================================================
// Site Model
//=========================================================================
//
// Navigable structure of the two sites and the cursor that moves through
// them.
//
// Layout:
//   Site ─► levels (1..=level_count)
//            └─► segments (0..=7, wrap around the site axis)
//                 └─► node matrix (rows 0..=2 × cols 0..=3)
//
// The presentation layer turns a cursor into a transform: segment drives
// the Y rotation, level drives the vertical offset.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::f32::consts::FRAC_PI_4;

use serde::{Deserialize, Serialize};

//=== Module Declarations =================================================

mod registry;

//=== Public API ==========================================================

pub use registry::{NodeData, NodeId, NodeKind, NodeRegistry, PolytanPart, StaticNodeRegistry};

//=== Bounds ==============================================================

/// Highest matrix row index.
pub const MAX_ROW: i32 = 2;

/// Highest matrix column index.
pub const MAX_COL: i32 = 3;

/// Number of segments around a site; segment indices wrap modulo this.
pub const SEGMENT_COUNT: i32 = 8;

/// Lowest level the cursor can be moved to.
pub const MIN_NAVIGABLE_LEVEL: i32 = 1;

/// Vertical distance between two levels in scene units.
pub const LEVEL_HEIGHT: f32 = 1.5;

//=== SiteKind ============================================================

/// One of the two explorable sites.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SiteKind {
    #[default]
    A,
    B,
}

impl SiteKind {
    /// Number of levels stacked in this site.
    pub const fn level_count(self) -> i32 {
        match self {
            SiteKind::A => 22,
            SiteKind::B => 13,
        }
    }

    /// The other site.
    pub const fn other(self) -> Self {
        match self {
            SiteKind::A => SiteKind::B,
            SiteKind::B => SiteKind::A,
        }
    }
}

//=== MatrixPosition ======================================================

/// Row/column of the cursor inside the visible node matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MatrixPosition {
    #[serde(deserialize_with = "crate::persistence::saturating_i32")]
    pub row: i32,
    #[serde(deserialize_with = "crate::persistence::saturating_i32")]
    pub col: i32,
}

//=== CursorLocation ======================================================

/// Where the cursor sits within one site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CursorLocation {
    pub site_kind: SiteKind,
    #[serde(deserialize_with = "crate::persistence::saturating_i32")]
    pub level: i32,
    pub node_matrix_position: MatrixPosition,
    #[serde(deserialize_with = "crate::persistence::saturating_i32")]
    pub site_segment: i32,
}

impl CursorLocation {
    /// Starting location for a fresh game in the given site.
    pub const fn initial(site_kind: SiteKind) -> Self {
        match site_kind {
            SiteKind::A => Self {
                site_kind,
                level: 4,
                node_matrix_position: MatrixPosition { row: 1, col: 0 },
                site_segment: 6,
            },
            SiteKind::B => Self {
                site_kind,
                level: 1,
                node_matrix_position: MatrixPosition { row: 2, col: 0 },
                site_segment: 5,
            },
        }
    }

    /// Pulls every coordinate back inside the site's bounds.
    pub fn clamp_in_place(&mut self) {
        let pos = &mut self.node_matrix_position;
        pos.row = pos.row.clamp(0, MAX_ROW);
        pos.col = pos.col.clamp(0, MAX_COL);
        self.level = self.level.clamp(0, self.site_kind.level_count());
        self.site_segment = self.site_segment.clamp(0, SEGMENT_COUNT - 1);
    }

    /// Y rotation of the site when this location is focused.
    pub fn rot_y(&self) -> f32 {
        self.site_segment as f32 * FRAC_PI_4
    }

    /// Vertical offset of the site when this location's level is focused.
    pub fn pos_y(&self) -> f32 {
        -(self.level as f32) * LEVEL_HEIGHT
    }

    /// HUD element anchored to this location's matrix slot.
    pub fn hud_id(&self) -> HudId {
        HudId::for_position(self.node_matrix_position)
    }
}

//=== HudId ===============================================================

/// Identifier of the HUD element anchored to a matrix slot, `1..=12`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HudId(pub i32);

impl HudId {
    pub fn for_position(position: MatrixPosition) -> Self {
        Self(position.row * (MAX_COL + 1) + position.col + 1)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_counts_differ_per_site() {
        assert_eq!(SiteKind::A.level_count(), 22);
        assert_eq!(SiteKind::B.level_count(), 13);
    }

    #[test]
    fn other_site_flips() {
        assert_eq!(SiteKind::A.other(), SiteKind::B);
        assert_eq!(SiteKind::B.other(), SiteKind::A);
    }

    #[test]
    fn site_kind_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&SiteKind::B).unwrap(), "\"b\"");
        let parsed: SiteKind = serde_json::from_str("\"a\"").unwrap();
        assert_eq!(parsed, SiteKind::A);
    }

    #[test]
    fn clamp_pulls_all_fields_into_range() {
        let mut location = CursorLocation {
            site_kind: SiteKind::B,
            level: 999,
            node_matrix_position: MatrixPosition { row: -3, col: 9 },
            site_segment: 12,
        };

        location.clamp_in_place();

        assert_eq!(location.level, 13);
        assert_eq!(location.node_matrix_position, MatrixPosition { row: 0, col: 3 });
        assert_eq!(location.site_segment, 7);
    }

    #[test]
    fn clamp_keeps_in_range_values() {
        let mut location = CursorLocation::initial(SiteKind::A);
        location.clamp_in_place();
        assert_eq!(location, CursorLocation::initial(SiteKind::A));
    }

    #[test]
    fn transform_follows_segment_and_level() {
        let location = CursorLocation {
            site_kind: SiteKind::A,
            level: 2,
            node_matrix_position: MatrixPosition { row: 0, col: 0 },
            site_segment: 4,
        };

        assert!((location.rot_y() - std::f32::consts::PI).abs() < 1e-6);
        assert_eq!(location.pos_y(), -3.0);
    }

    #[test]
    fn hud_ids_number_slots_row_major() {
        assert_eq!(HudId::for_position(MatrixPosition { row: 0, col: 0 }), HudId(1));
        assert_eq!(HudId::for_position(MatrixPosition { row: 1, col: 2 }), HudId(7));
        assert_eq!(HudId::for_position(MatrixPosition { row: 2, col: 3 }), HudId(12));
    }
}
