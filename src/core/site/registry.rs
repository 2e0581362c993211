//=========================================================================
// Node Registry
//=========================================================================
//
// Read-only node catalogue for both sites.
//
// The registry is a collaborator: the session consults it to decide what
// a confirm press on the focused slot does, and legacy migration uses it
// to resolve old node names to stable identifiers.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashMap;
use std::fmt;

use log::warn;
use serde::{Deserialize, Serialize};

//=== Internal Dependencies ===============================================

use super::{CursorLocation, SiteKind};

//=== NodeId ==============================================================

/// Stable node identifier, persisted in `viewed_nodes`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(pub String);

impl NodeId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

//=== PolytanPart =========================================================

/// Body part unlocked by a polytan node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PolytanPart {
    Body,
    Head,
    LeftArm,
    RightArm,
    LeftLeg,
    RightLeg,
}

//=== NodeKind ============================================================

/// What confirming a node leads to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// Audio or video playback.
    Media,
    /// Sskn upgrade sequence.
    Sskn,
    /// Gate sequence, advances the gate level.
    Gate,
    /// Polytan assembly, unlocks one body part.
    Polytan(PolytanPart),
}

//=== NodeData ============================================================

/// One node placed in a site.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeData {
    pub id: NodeId,
    pub name: String,
    pub kind: NodeKind,
    pub site: SiteKind,
    pub level: i32,
    pub segment: i32,
    pub row: i32,
    pub col: i32,
}

//=== NodeRegistry ========================================================

/// Lookup contract for site node data.
pub trait NodeRegistry {
    /// Node under the given cursor, if the slot is occupied.
    fn node_at(&self, location: &CursorLocation) -> Option<&NodeData>;

    /// Every node in a site.
    fn nodes(&self, site: SiteKind) -> &[NodeData];
}

//=== StaticNodeRegistry ==================================================

type SlotKey = (SiteKind, i32, i32, i32, i32);

/// In-memory registry built from a node list.
#[derive(Debug, Default)]
pub struct StaticNodeRegistry {
    site_a: Vec<NodeData>,
    site_b: Vec<NodeData>,
    slots: HashMap<SlotKey, (SiteKind, usize)>,
}

impl StaticNodeRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a registry from nodes of either site.
    pub fn from_nodes(nodes: impl IntoIterator<Item = NodeData>) -> Self {
        let mut registry = Self::new();
        for node in nodes {
            registry.insert(node);
        }
        registry
    }

    /// Adds a node, replacing whatever occupied its slot.
    pub fn insert(&mut self, node: NodeData) {
        let key = (node.site, node.level, node.segment, node.row, node.col);
        let site = node.site;

        let list = self.site_mut(site);
        list.push(node);
        let index = list.len() - 1;

        if self.slots.insert(key, (site, index)).is_some() {
            warn!("Node slot {:?} was already occupied and has been replaced", key);
        }
    }

    fn site_mut(&mut self, site: SiteKind) -> &mut Vec<NodeData> {
        match site {
            SiteKind::A => &mut self.site_a,
            SiteKind::B => &mut self.site_b,
        }
    }
}

impl NodeRegistry for StaticNodeRegistry {
    fn node_at(&self, location: &CursorLocation) -> Option<&NodeData> {
        let key = (
            location.site_kind,
            location.level,
            location.site_segment,
            location.node_matrix_position.row,
            location.node_matrix_position.col,
        );
        let &(site, index) = self.slots.get(&key)?;
        self.nodes(site).get(index)
    }

    fn nodes(&self, site: SiteKind) -> &[NodeData] {
        match site {
            SiteKind::A => &self.site_a,
            SiteKind::B => &self.site_b,
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::site::MatrixPosition;

    fn node(id: &str, site: SiteKind, level: i32, segment: i32, row: i32, col: i32) -> NodeData {
        NodeData {
            id: NodeId::new(id),
            name: format!("name-{id}"),
            kind: NodeKind::Media,
            site,
            level,
            segment,
            row,
            col,
        }
    }

    fn cursor(site_kind: SiteKind, level: i32, segment: i32, row: i32, col: i32) -> CursorLocation {
        CursorLocation {
            site_kind,
            level,
            node_matrix_position: MatrixPosition { row, col },
            site_segment: segment,
        }
    }

    #[test]
    fn node_at_finds_occupied_slot() {
        let registry = StaticNodeRegistry::from_nodes([node("0422", SiteKind::A, 4, 6, 1, 0)]);

        let found = registry.node_at(&cursor(SiteKind::A, 4, 6, 1, 0));
        assert_eq!(found.map(|n| n.id.as_str()), Some("0422"));
    }

    #[test]
    fn node_at_is_site_specific() {
        let registry = StaticNodeRegistry::from_nodes([node("0422", SiteKind::A, 4, 6, 1, 0)]);
        assert!(registry.node_at(&cursor(SiteKind::B, 4, 6, 1, 0)).is_none());
    }

    #[test]
    fn nodes_are_partitioned_by_site() {
        let registry = StaticNodeRegistry::from_nodes([
            node("a1", SiteKind::A, 1, 0, 0, 0),
            node("b1", SiteKind::B, 1, 0, 0, 0),
            node("b2", SiteKind::B, 2, 0, 0, 0),
        ]);

        assert_eq!(registry.nodes(SiteKind::A).len(), 1);
        assert_eq!(registry.nodes(SiteKind::B).len(), 2);
    }

    #[test]
    fn node_id_serializes_as_plain_string() {
        let id = NodeId::new("0101");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"0101\"");
    }
}
