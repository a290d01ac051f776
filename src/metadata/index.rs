//! Name index derived from the metadata tree

use std::collections::HashMap;

use super::node::{MetadataNode, MetadataObject};

/// Bidirectional name mappings extracted from the metadata tree
///
/// Built once at startup and read-only afterwards. Label uniqueness is not
/// enforced by the document, so key collisions are resolved last-write-wins
/// in walk order: sequences in element order, object children in sorted key
/// order. That makes collisions deterministic for a fixed document rather
/// than an accident of iteration.
#[derive(Debug, Default)]
pub struct MetadataIndex {
    /// Canonical code → display label
    pub code_to_label: HashMap<String, String>,
    /// Display label or alternate label (trimmed) → canonical code
    pub text_to_code: HashMap<String, String>,
}

impl MetadataIndex {
    /// Build the index by a depth-first walk over the tree
    ///
    /// Nodes missing a code contribute nothing; nodes with a code but no
    /// labels contribute nothing; partial nodes contribute what they have.
    /// Empty-after-trim labels are never entered into `text_to_code`.
    pub fn build(root: &MetadataNode) -> Self {
        let mut index = MetadataIndex::default();
        index.walk(root);
        index
    }

    fn walk(&mut self, node: &MetadataNode) {
        match node {
            MetadataNode::Sequence(items) => {
                for item in items {
                    self.walk(item);
                }
            }
            MetadataNode::Object(obj) => {
                self.record(obj);
                for child in obj.children.values() {
                    self.walk(child);
                }
            }
            MetadataNode::Scalar(_) => {}
        }
    }

    fn record(&mut self, obj: &MetadataObject) {
        let Some(code) = &obj.attribute_name else {
            return;
        };
        if let Some(label) = &obj.display_text {
            self.code_to_label.insert(code.clone(), label.clone());
            let trimmed = label.trim();
            if !trimmed.is_empty() {
                self.text_to_code.insert(trimmed.to_string(), code.clone());
            }
        }
        if let Some(element) = &obj.data_element {
            let trimmed = element.trim();
            if !trimmed.is_empty() {
                self.text_to_code.insert(trimmed.to_string(), code.clone());
            }
        }
    }

    /// Display label for a canonical code, if the tree defined one
    pub fn label_for(&self, code: &str) -> Option<&str> {
        self.code_to_label.get(code).map(String::as_str)
    }
}
