//! Typed view over the upstream map-data document.
//!
//! The upstream JSON is loosely typed and changes shape between game builds,
//! so nothing here is derived with serde. Each field is read defensively from
//! a [`serde_json::Value`]: a field that is missing or has the wrong JSON type
//! becomes `None` instead of failing the whole document.
//!
//! Wire keys: the root carries `version`, `lastBuild` and `options` (the
//! tabs); every tab and option node uses `name` and `options` (children), and
//! option nodes add `purity` and `markers`.

use serde_json::{Map, Number, Value};

use crate::poi::Location;

/// Root of the upstream map-data document.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub schema_version: Option<i64>,
    pub build_identifier: Option<String>,
    pub groups: Vec<Group>,
}

/// A top-level tab of the map (resource nodes, collectibles, ...).
#[derive(Debug, Clone, PartialEq)]
pub struct Group {
    pub tab_id: Option<String>,
    pub category_type: Option<String>,
    pub display_name: Option<String>,
    /// `None` when the tab has no usable `options` array.
    pub children: Option<Vec<OptionNode>>,
    raw: Value,
}

/// One node of the nested option tree under a tab.
///
/// A node may carry markers and children at the same time.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OptionNode {
    pub display_name: Option<String>,
    pub purity: Option<String>,
    pub markers: Option<Vec<Marker>>,
    pub children: Option<Vec<OptionNode>>,
}

/// A marker candidate. Coordinates stay `None` unless the source value is a
/// JSON number.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Marker {
    pub x: Option<Number>,
    pub y: Option<Number>,
    pub z: Option<Number>,
    pub purity: Option<String>,
}

impl Document {
    /// Builds a document from parsed JSON.
    ///
    /// Returns `None` only for a JSON `null` root. Any other shape degrades:
    /// a non-object root yields a document with no metadata and no groups.
    #[must_use]
    pub fn from_json(value: &Value) -> Option<Self> {
        if value.is_null() {
            return None;
        }

        let empty = Map::new();
        let obj = value.as_object().unwrap_or(&empty);

        let groups = obj
            .get("options")
            .and_then(Value::as_array)
            .map(|items| items.iter().map(Group::from_json).collect())
            .unwrap_or_default();

        Some(Self {
            schema_version: obj.get("version").and_then(Value::as_i64),
            build_identifier: obj.get("lastBuild").and_then(build_identifier),
            groups,
        })
    }
}

impl Group {
    #[must_use]
    pub fn from_json(value: &Value) -> Self {
        Self {
            tab_id: str_field(value, "tabId"),
            category_type: str_field(value, "type"),
            display_name: name_field(value),
            children: children_field(value),
            raw: value.clone(),
        }
    }

    /// The tab exactly as it appeared upstream.
    #[must_use]
    pub fn raw(&self) -> &Value {
        &self.raw
    }
}

impl OptionNode {
    /// Reads one option node. Non-object values produce an empty node, which
    /// contributes no markers and no children.
    #[must_use]
    pub fn from_json(value: &Value) -> Self {
        if !value.is_object() {
            return Self::default();
        }

        Self {
            display_name: name_field(value),
            purity: str_field(value, "purity"),
            markers: value
                .get("markers")
                .and_then(Value::as_array)
                .map(|items| items.iter().map(Marker::from_json).collect()),
            children: children_field(value),
        }
    }
}

impl Marker {
    #[must_use]
    pub fn from_json(value: &Value) -> Self {
        let coord = |key: &str| match value.get(key) {
            Some(Value::Number(n)) => Some(n.clone()),
            _ => None,
        };

        Self {
            x: coord("x"),
            y: coord("y"),
            z: coord("z"),
            purity: str_field(value, "purity"),
        }
    }

    /// The marker's position, if all three coordinates are numeric.
    #[must_use]
    pub fn location(&self) -> Option<Location> {
        Some(Location {
            x: self.x.clone()?,
            y: self.y.clone()?,
            z: self.z.clone()?,
        })
    }
}

fn str_field(value: &Value, key: &str) -> Option<String> {
    value.get(key).and_then(Value::as_str).map(str::to_owned)
}

// An empty name is treated as missing so that output names are never empty.
fn name_field(value: &Value) -> Option<String> {
    str_field(value, "name").filter(|s| !s.is_empty())
}

fn children_field(value: &Value) -> Option<Vec<OptionNode>> {
    value
        .get("options")
        .and_then(Value::as_array)
        .map(|items| items.iter().map(OptionNode::from_json).collect())
}

fn build_identifier(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
