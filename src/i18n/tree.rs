// SPDX-License-Identifier: MPL-2.0
//! Nested message storage for a single locale.
//!
//! A locale file is a TOML table whose string values are messages and whose
//! sub-tables group related messages (e.g. `[countdown]`). Messages are
//! addressed by dotted key paths such as `countdown.nextButton`.

use serde::Deserialize;
use std::collections::BTreeMap;

/// Separator between key path segments.
pub const PATH_SEPARATOR: char = '.';

/// A node in a locale's message tree.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum MessageTree {
    /// A translatable string, possibly containing `{name}` placeholders.
    Leaf(String),
    /// A named group of messages.
    Branch(BTreeMap<String, MessageTree>),
}

impl Default for MessageTree {
    fn default() -> Self {
        MessageTree::Branch(BTreeMap::new())
    }
}

impl MessageTree {
    /// Parses a locale file.
    ///
    /// Fails if the document is not valid TOML or contains values other than
    /// strings and tables.
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Returns the string stored at `path`.
    ///
    /// Returns `None` when the path is empty, contains an empty segment, walks
    /// through a leaf, or ends on a group instead of a string.
    pub fn lookup(&self, path: &str) -> Option<&str> {
        if path.is_empty() {
            return None;
        }

        let mut node = self;
        for segment in path.split(PATH_SEPARATOR) {
            if segment.is_empty() {
                return None;
            }
            match node {
                MessageTree::Branch(children) => node = children.get(segment)?,
                MessageTree::Leaf(_) => return None,
            }
        }

        match node {
            MessageTree::Leaf(value) => Some(value.as_str()),
            MessageTree::Branch(_) => None,
        }
    }

    /// Whether `path` resolves to a string in this tree.
    pub fn contains(&self, path: &str) -> bool {
        self.lookup(path).is_some()
    }

    pub fn is_branch(&self) -> bool {
        matches!(self, MessageTree::Branch(_))
    }

    /// Dotted paths of every string in the tree, in sorted order.
    pub fn leaf_paths(&self) -> Vec<String> {
        let mut paths = Vec::new();
        collect_leaf_paths(self, &mut String::new(), &mut paths);
        paths
    }
}

fn collect_leaf_paths(node: &MessageTree, prefix: &mut String, out: &mut Vec<String>) {
    match node {
        MessageTree::Leaf(_) => out.push(prefix.clone()),
        MessageTree::Branch(children) => {
            for (key, child) in children {
                let restore = prefix.len();
                if !prefix.is_empty() {
                    prefix.push(PATH_SEPARATOR);
                }
                prefix.push_str(key);
                collect_leaf_paths(child, prefix, out);
                prefix.truncate(restore);
            }
        }
    }
}
