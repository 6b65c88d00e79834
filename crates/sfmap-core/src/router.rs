//! Tab selection: pick a top-level group out of a [`Document`].

use crate::document::{Document, Group};
use crate::extract::extract;
use crate::poi::PointOfInterest;

/// Extracts every record under the first group whose `tabId` equals `tab_id`.
///
/// Each top-level option of the group is walked independently. An option
/// without a name inherits the group's name. A missing tab, or a tab whose
/// `options` is absent or not an array, yields an empty list.
#[must_use]
pub fn extract_by_tab(tab_id: &str, doc: &Document) -> Vec<PointOfInterest> {
    let Some(group) = doc
        .groups
        .iter()
        .find(|g| g.tab_id.as_deref() == Some(tab_id))
    else {
        tracing::debug!(tab_id, "no group with this tab id");
        return Vec::new();
    };

    let Some(children) = &group.children else {
        return Vec::new();
    };

    children
        .iter()
        .flat_map(|child| {
            let inherited = child
                .display_name
                .as_deref()
                .or(group.display_name.as_deref());
            extract(Some(child), inherited)
        })
        .collect()
}

/// Returns the first group whose `type` equals `category_type`, untouched.
///
/// This selector is independent of [`extract_by_tab`]: a group is found here
/// by its `type` key only, never by its `tabId`.
#[must_use]
pub fn find_group_by_type<'a>(category_type: &str, doc: &'a Document) -> Option<&'a Group> {
    doc.groups
        .iter()
        .find(|g| g.category_type.as_deref() == Some(category_type))
}

#[cfg(test)]
mod tests {
    use serde_json::{json, Value};

    use super::*;

    fn doc(value: &Value) -> Document {
        Document::from_json(value).expect("non-null document")
    }

    #[test]
    fn iron_scenario_yields_two_records_in_order() {
        let doc = doc(&json!({
            "options": [{
                "tabId": "resource_nodes",
                "options": [{
                    "name": "Iron",
                    "purity": "pure",
                    "markers": [{"x": 1, "y": 2, "z": 3}],
                    "options": [{"markers": [{"x": 4, "y": 5, "z": 6}]}]
                }]
            }]
        }));

        let records = extract_by_tab("resource_nodes", &doc);
        assert_eq!(
            serde_json::to_value(&records).unwrap(),
            json!([
                {"name": "Iron", "purity": 3, "location": {"x": 1, "y": 2, "z": 3}},
                {"name": "Iron", "purity": 3, "location": {"x": 4, "y": 5, "z": 6}}
            ])
        );
    }

    #[test]
    fn missing_tab_yields_empty() {
        let doc = doc(&json!({"options": [{"tabId": "collectibles", "options": []}]}));
        assert!(extract_by_tab("resource_nodes", &doc).is_empty());
    }

    #[test]
    fn tab_with_unusable_options_yields_empty() {
        let doc = doc(&json!({"options": [{"tabId": "artifacts", "options": {"a": 1}}]}));
        assert!(extract_by_tab("artifacts", &doc).is_empty());
    }

    #[test]
    fn only_first_matching_tab_is_used() {
        let doc = doc(&json!({
            "options": [
                {"tabId": "collectibles", "options": [{"name": "First", "markers": [{"x": 1, "y": 1, "z": 1}]}]},
                {"tabId": "collectibles", "options": [{"name": "Second", "markers": [{"x": 2, "y": 2, "z": 2}]}]}
            ]
        }));

        let records = extract_by_tab("collectibles", &doc);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "First");
    }

    #[test]
    fn unnamed_options_inherit_group_name() {
        let doc = doc(&json!({
            "options": [{
                "tabId": "resource_wells",
                "name": "Resource Wells",
                "options": [
                    {"markers": [{"x": 1, "y": 1, "z": 1}]},
                    {"name": "Nitrogen Gas", "markers": [{"x": 2, "y": 2, "z": 2}]}
                ]
            }]
        }));

        let names: Vec<_> = extract_by_tab("resource_wells", &doc)
            .into_iter()
            .map(|r| r.name)
            .collect();
        assert_eq!(names, vec!["Resource Wells", "Nitrogen Gas"]);
    }

    #[test]
    fn unnamed_everything_falls_back_to_unknown() {
        let doc = doc(&json!({
            "options": [{"tabId": "artifacts", "options": [{"markers": [{"x": 1, "y": 1, "z": 1}]}]}]
        }));
        assert_eq!(extract_by_tab("artifacts", &doc)[0].name, "Unknown");
    }

    #[test]
    fn group_purity_is_not_inherited() {
        let doc = doc(&json!({
            "options": [{
                "tabId": "resource_nodes",
                "purity": "pure",
                "options": [{"name": "Coal", "markers": [{"x": 1, "y": 1, "z": 1}]}]
            }]
        }));
        assert_eq!(extract_by_tab("resource_nodes", &doc)[0].purity, None);
    }

    #[test]
    fn lookup_by_type_returns_raw_group() {
        let raw = json!({"type": "spawns", "tabId": "x", "options": [], "extra": [1, 2]});
        let doc = doc(&json!({"options": [{"type": "other"}, raw.clone()]}));

        let group = find_group_by_type("spawns", &doc).expect("group present");
        assert_eq!(group.raw(), &raw);
    }

    #[test]
    fn lookup_by_type_does_not_match_tab_id() {
        let doc = doc(&json!({"options": [{"tabId": "resource_nodes"}]}));
        assert!(find_group_by_type("resource_nodes", &doc).is_none());
    }
}
