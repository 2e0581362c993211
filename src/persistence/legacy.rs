//=========================================================================
// Legacy Save Upgrade
//=========================================================================
//
// Converts the retired save schema into the current `GameState`.
//
// Differences handled:
// - per-site save slots store the focused node's matrix indices and a
//   level string instead of a cursor location
// - viewed state is a per-node-name boolean map instead of an id set
// - several progress fields carry older names
//
// Flow:
//   text → parse → is_valid_legacy_shape() → decode → upgrade → GameState
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::{BTreeMap, BTreeSet, HashMap};

use log::debug;
use serde::Deserialize;
use serde_json::Value;

//=== Internal Dependencies ===============================================

use super::error::MigrationError;
use super::lenient::{number_to_i32, saturate_i64};
use super::model::{GameState, PolytanParts, Progress};
use crate::core::site::{CursorLocation, MatrixPosition, NodeId, NodeRegistry, SiteKind};

//=== Legacy Schema =======================================================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LegacyGameState {
    site_save_state: LegacySiteSaves,
    active_site: SiteKind,
    game_progress: LegacyProgress,
    player_name: String,
}

#[derive(Debug, Deserialize)]
struct LegacySiteSaves {
    a: LegacySiteSave,
    b: LegacySiteSave,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LegacySiteSave {
    active_node: LegacyNode,
    #[serde(default)]
    active_level: Value,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LegacyNode {
    #[serde(default)]
    matrix_indices: Option<LegacyMatrixIndices>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LegacyMatrixIndices {
    #[serde(deserialize_with = "crate::persistence::saturating_i32")]
    matrix_idx: i32,
    #[serde(deserialize_with = "crate::persistence::saturating_i32")]
    row_idx: i32,
    #[serde(deserialize_with = "crate::persistence::saturating_i32")]
    col_idx: i32,
}

#[derive(Debug, Deserialize)]
struct LegacyProgress {
    #[serde(deserialize_with = "crate::persistence::saturating_i32")]
    sskn_level: i32,
    #[serde(deserialize_with = "crate::persistence::saturating_i32")]
    gate_level: i32,
    #[serde(deserialize_with = "crate::persistence::saturating_i32")]
    final_video_viewcount: i32,
    polytan_unlocked_parts: PolytanParts,
    nodes: BTreeMap<String, LegacyNodeProgress>,
}

#[derive(Debug, Deserialize)]
struct LegacyNodeProgress {
    #[serde(default)]
    is_viewed: Value,
}

//=== Shape Check =========================================================

const POLYTAN_FIELDS: [&str; 6] = ["body", "head", "left_arm", "right_arm", "left_leg", "right_leg"];

/// Cheap structural check run before any transformation.
pub fn is_valid_legacy_shape(value: &Value) -> bool {
    let Some(state) = value.as_object() else {
        return false;
    };

    if !state.get("activeLevel").is_some_and(Value::is_string) {
        return false;
    }
    if !state.get("playerName").is_some_and(Value::is_string) {
        return false;
    }
    if !matches!(state.get("activeSite").and_then(Value::as_str), Some("a" | "b")) {
        return false;
    }

    let Some(slots) = state.get("siteSaveState").and_then(Value::as_object) else {
        return false;
    };
    for site in ["a", "b"] {
        let active_node = slots
            .get(site)
            .and_then(|slot| slot.get("activeNode"))
            .and_then(Value::as_object);
        if active_node.is_none() {
            return false;
        }
    }

    let Some(progress) = state.get("gameProgress").and_then(Value::as_object) else {
        return false;
    };
    for field in ["sskn_level", "gate_level", "final_video_viewcount"] {
        if !progress.get(field).is_some_and(Value::is_number) {
            return false;
        }
    }

    let Some(parts) = progress.get("polytan_unlocked_parts").and_then(Value::as_object) else {
        return false;
    };
    if !POLYTAN_FIELDS
        .iter()
        .all(|field| parts.get(*field).is_some_and(Value::is_boolean))
    {
        return false;
    }

    progress.get("nodes").is_some_and(Value::is_object)
}

//=== Upgrade =============================================================

/// Parses, checks and converts legacy save text.
pub fn upgrade_legacy_text(
    text: &str,
    registry: &dyn NodeRegistry,
) -> Result<GameState, MigrationError> {
    let value: Value = serde_json::from_str(text).map_err(MigrationError::Parse)?;

    if !is_valid_legacy_shape(&value) {
        return Err(MigrationError::ShapeMismatch);
    }

    let legacy: LegacyGameState =
        serde_json::from_value(value).map_err(MigrationError::Transform)?;

    Ok(upgrade(legacy, registry))
}

fn upgrade(legacy: LegacyGameState, registry: &dyn NodeRegistry) -> GameState {
    let defaults = GameState::default();

    let a_location = upgrade_location(SiteKind::A, &legacy.site_save_state.a)
        .unwrap_or(defaults.a_location);
    let b_location = upgrade_location(SiteKind::B, &legacy.site_save_state.b)
        .unwrap_or(defaults.b_location);

    GameState {
        progress: upgrade_progress(legacy.game_progress, registry),
        site: legacy.active_site,
        a_location,
        b_location,
        name: legacy.player_name,
    }
}

fn upgrade_progress(legacy: LegacyProgress, registry: &dyn NodeRegistry) -> Progress {
    let index = name_index(registry);

    let viewed_nodes: BTreeSet<NodeId> = legacy
        .nodes
        .iter()
        .filter(|(_, node)| is_truthy(&node.is_viewed))
        .filter_map(|(name, _)| match index.get(name.as_str()) {
            Some(id) => Some((*id).clone()),
            None => {
                debug!(target: "persistence", "Dropping unknown legacy node {:?}", name);
                None
            }
        })
        .collect();

    Progress {
        sskn_level: legacy.sskn_level,
        gate_level: legacy.gate_level,
        final_video_view_count: legacy.final_video_viewcount,
        polytan_parts: legacy.polytan_unlocked_parts,
        viewed_nodes,
    }
}

fn upgrade_location(site_kind: SiteKind, slot: &LegacySiteSave) -> Option<CursorLocation> {
    let indices = slot.active_node.matrix_indices?;
    let level = numeric_level(&slot.active_level)?;

    Some(CursorLocation {
        site_kind,
        level,
        node_matrix_position: MatrixPosition {
            row: indices.row_idx,
            col: indices.col_idx,
        },
        site_segment: indices.matrix_idx,
    })
}

//--- Helpers -------------------------------------------------------------

/// Name → id lookup across both sites.
fn name_index(registry: &dyn NodeRegistry) -> HashMap<&str, &NodeId> {
    [SiteKind::A, SiteKind::B]
        .into_iter()
        .flat_map(move |site| registry.nodes(site))
        .map(|node| (node.name.as_str(), &node.id))
        .collect()
}

fn numeric_level(value: &Value) -> Option<i32> {
    match value {
        Value::String(text) => text.trim().parse::<i64>().ok().map(saturate_i64),
        Value::Number(number) => Some(number_to_i32(number)),
        _ => None,
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
        _ => false,
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
