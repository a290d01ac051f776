//! Metadata tree node shapes

use serde::Deserialize;
use std::collections::BTreeMap;

/// A node in the hierarchical metadata document
///
/// The document nests objects and sequences freely, to arbitrary depth.
/// Rather than walking raw JSON values, the tree is deserialized into this
/// closed set of shapes; anything that is not an object or a sequence is a
/// scalar leaf and carries no mapping data.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum MetadataNode {
    /// An ordered sequence of child nodes
    Sequence(Vec<MetadataNode>),
    /// An object node, possibly carrying attribute fields and child subtrees
    Object(MetadataObject),
    /// A scalar leaf (string, number, bool, null)
    Scalar(serde_json::Value),
}

/// An object node in the metadata tree
///
/// All three attribute fields are optional; a node missing some or all of
/// them is still walked for children, it just contributes fewer (or no)
/// index entries. A non-string value under an attribute key is treated the
/// same as a missing one, so a malformed node never cuts its descendants
/// off from the walk. Children are keyed in sorted order so the walk is
/// deterministic for a fixed document.
#[derive(Debug, Deserialize)]
pub struct MetadataObject {
    /// Canonical attribute code - the dataset's Category value
    #[serde(rename = "Attribute_Name", default, deserialize_with = "string_or_none")]
    pub attribute_name: Option<String>,
    /// Human-readable display label
    #[serde(rename = "Display_Text", default, deserialize_with = "string_or_none")]
    pub display_text: Option<String>,
    /// Alternate source-system name
    #[serde(rename = "Data_Element", default, deserialize_with = "string_or_none")]
    pub data_element: Option<String>,
    /// Child subtrees under any other key
    #[serde(flatten)]
    pub children: BTreeMap<String, MetadataNode>,
}

/// Accept any value under an attribute key, keeping only strings
fn string_or_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::String(s) => Ok(Some(s)),
        _ => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_mixed_nesting() {
        let json = r#"{
            "Topics": [
                { "Attribute_Name": "A1", "Display_Text": "First" },
                { "Subgroup": { "Attribute_Name": "A2", "Display_Text": "Second" } }
            ],
            "Version": 3
        }"#;

        let node: MetadataNode = serde_json::from_str(json).unwrap();
        let MetadataNode::Object(root) = node else {
            panic!("Expected object root");
        };
        assert!(root.attribute_name.is_none());
        assert_eq!(root.children.len(), 2);
        assert!(matches!(root.children.get("Topics"), Some(MetadataNode::Sequence(items)) if items.len() == 2));
        assert!(matches!(root.children.get("Version"), Some(MetadataNode::Scalar(_))));
    }

    #[test]
    fn test_deserialize_scalar_root() {
        let node: MetadataNode = serde_json::from_str("\"just a string\"").unwrap();
        assert!(matches!(node, MetadataNode::Scalar(_)));
    }

    #[test]
    fn test_non_string_attribute_fields_become_none() {
        let json = r#"{
            "Attribute_Name": 42,
            "Display_Text": ["not", "a", "string"],
            "Child": { "Attribute_Name": "OK" }
        }"#;

        // The node still parses as an object so its children stay reachable
        let node: MetadataNode = serde_json::from_str(json).unwrap();
        let MetadataNode::Object(obj) = node else {
            panic!("Expected object node");
        };
        assert!(obj.attribute_name.is_none());
        assert!(obj.display_text.is_none());
        assert!(obj.children.contains_key("Child"));
    }
}
