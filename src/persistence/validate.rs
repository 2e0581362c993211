//=========================================================================
// Structural Validation
//=========================================================================
//
// Walks parsed save JSON and reports every missing or mistyped field.
//
// Only shape is checked here. Numeric ranges are corrected after decoding
// rather than rejected.
//
//=========================================================================

//=== External Dependencies ===============================================

use serde_json::{Map, Value};

//=== Internal Dependencies ===============================================

use super::error::FieldError;

//=== Public API ==========================================================

const POLYTAN_FIELDS: [&str; 6] = ["body", "head", "left_arm", "right_arm", "left_leg", "right_leg"];

/// Returns all structural problems of a current-schema save.
///
/// An empty list means the value can be decoded into `GameState`.
pub fn validate_game_state(value: &Value) -> Vec<FieldError> {
    let mut errors = Vec::new();

    let Some(root) = value.as_object() else {
        errors.push(wrong_type("$", "an object"));
        return errors;
    };

    let mut checker = Checker { errors: &mut errors };

    if let Some(progress) = checker.object(root, "progress", "progress") {
        checker.number(progress, "progress", "sskn_level");
        checker.number(progress, "progress", "gate_level");
        checker.number(progress, "progress", "final_video_view_count");

        if let Some(parts) = checker.object(progress, "progress", "polytan_parts") {
            for field in POLYTAN_FIELDS {
                checker.boolean(parts, "progress.polytan_parts", field);
            }
        }

        checker.string_array(progress, "progress", "viewed_nodes");
    }

    checker.site_kind(root, "", "site");
    checker.cursor_location(root, "a_location");
    checker.cursor_location(root, "b_location");
    checker.string(root, "", "name");

    errors
}

//=== Checker =============================================================

struct Checker<'e> {
    errors: &'e mut Vec<FieldError>,
}

impl Checker<'_> {
    fn cursor_location(&mut self, root: &Map<String, Value>, field: &str) {
        let Some(location) = self.object(root, "", field) else {
            return;
        };

        self.number(location, field, "level");
        self.number(location, field, "site_segment");
        self.site_kind(location, field, "site_kind");

        let nested = join(field, "node_matrix_position");
        if let Some(position) = self.object(location, field, "node_matrix_position") {
            self.number(position, &nested, "row");
            self.number(position, &nested, "col");
        }
    }

    fn object<'v>(
        &mut self,
        parent: &'v Map<String, Value>,
        prefix: &str,
        field: &str,
    ) -> Option<&'v Map<String, Value>> {
        let value = self.present(parent, prefix, field)?;
        let object = value.as_object();
        if object.is_none() {
            self.errors.push(wrong_type(&join(prefix, field), "an object"));
        }
        object
    }

    fn number(&mut self, parent: &Map<String, Value>, prefix: &str, field: &str) {
        self.require(parent, prefix, field, "a number", Value::is_number);
    }

    fn boolean(&mut self, parent: &Map<String, Value>, prefix: &str, field: &str) {
        self.require(parent, prefix, field, "a boolean", Value::is_boolean);
    }

    fn string(&mut self, parent: &Map<String, Value>, prefix: &str, field: &str) {
        self.require(parent, prefix, field, "a string", Value::is_string);
    }

    fn string_array(&mut self, parent: &Map<String, Value>, prefix: &str, field: &str) {
        self.require(parent, prefix, field, "an array of strings", |v| {
            v.as_array()
                .is_some_and(|items| items.iter().all(Value::is_string))
        });
    }

    fn site_kind(&mut self, parent: &Map<String, Value>, prefix: &str, field: &str) {
        self.require(parent, prefix, field, "\"a\" or \"b\"", |v| {
            matches!(v.as_str(), Some("a" | "b"))
        });
    }

    fn require(
        &mut self,
        parent: &Map<String, Value>,
        prefix: &str,
        field: &str,
        expected: &'static str,
        check: impl Fn(&Value) -> bool,
    ) {
        if let Some(value) = self.present(parent, prefix, field) {
            if !check(value) {
                self.errors.push(wrong_type(&join(prefix, field), expected));
            }
        }
    }

    fn present<'v>(
        &mut self,
        parent: &'v Map<String, Value>,
        prefix: &str,
        field: &str,
    ) -> Option<&'v Value> {
        match parent.get(field) {
            None | Some(Value::Null) => {
                self.errors.push(FieldError::Missing {
                    path: join(prefix, field),
                });
                None
            }
            Some(value) => Some(value),
        }
    }
}

//--- Helpers -------------------------------------------------------------

fn join(prefix: &str, field: &str) -> String {
    if prefix.is_empty() {
        field.to_owned()
    } else {
        format!("{prefix}.{field}")
    }
}

fn wrong_type(path: &str, expected: &'static str) -> FieldError {
    FieldError::WrongType {
        path: path.to_owned(),
        expected,
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::model::GameState;
    use serde_json::json;

    fn valid() -> Value {
        serde_json::to_value(GameState::default()).unwrap()
    }

    #[test]
    fn default_state_is_structurally_valid() {
        assert!(validate_game_state(&valid()).is_empty());
    }

    #[test]
    fn non_object_root_is_rejected() {
        let errors = validate_game_state(&json!([1, 2, 3]));
        assert_eq!(errors, vec![wrong_type("$", "an object")]);
    }

    #[test]
    fn every_problem_is_listed() {
        let mut value = valid();
        value["name"] = json!(7);
        value["site"] = json!("c");
        value["progress"]
            .as_object_mut()
            .unwrap()
            .remove("gate_level");

        let errors = validate_game_state(&value);

        assert_eq!(errors.len(), 3);
        assert!(errors.contains(&FieldError::Missing {
            path: "progress.gate_level".into()
        }));
        assert!(errors.contains(&wrong_type("site", "\"a\" or \"b\"")));
        assert!(errors.contains(&wrong_type("name", "a string")));
    }

    #[test]
    fn nested_paths_are_reported() {
        let mut value = valid();
        value["b_location"]["node_matrix_position"]["col"] = json!("3");
        value["progress"]["polytan_parts"]["head"] = json!(1);

        let errors = validate_game_state(&value);

        assert!(errors.contains(&wrong_type("b_location.node_matrix_position.col", "a number")));
        assert!(errors.contains(&wrong_type("progress.polytan_parts.head", "a boolean")));
    }

    #[test]
    fn floats_and_wide_integers_pass_structure() {
        let mut value = valid();
        value["a_location"]["level"] = json!(2.5);
        value["b_location"]["site_segment"] = json!(5_000_000_000i64);

        assert!(validate_game_state(&value).is_empty());
    }

    #[test]
    fn out_of_range_integers_pass_structure() {
        let mut value = valid();
        value["a_location"]["level"] = json!(-5);
        value["progress"]["gate_level"] = json!(999);

        assert!(validate_game_state(&value).is_empty());
    }

    #[test]
    fn viewed_nodes_must_hold_strings() {
        let mut value = valid();
        value["progress"]["viewed_nodes"] = json!(["0101", 2]);

        let errors = validate_game_state(&value);
        assert_eq!(
            errors,
            vec![wrong_type("progress.viewed_nodes", "an array of strings")]
        );
    }

    #[test]
    fn null_counts_as_missing() {
        let mut value = valid();
        value["a_location"] = Value::Null;

        let errors = validate_game_state(&value);
        assert_eq!(
            errors,
            vec![FieldError::Missing {
                path: "a_location".into()
            }]
        );
    }
}
