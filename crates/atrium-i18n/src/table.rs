//! Typed, immutable translation table

use crate::error::{I18nError, I18nResult};
use crate::Locale;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet, HashMap};

/// One node of a locale's translation tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TranslationNode {
    /// A template string, possibly holding `;`-delimited plural variants
    Text(String),
    /// Index-delimited plural variants
    Variants(Vec<String>),
    /// Nested keys
    Branch(BTreeMap<String, TranslationNode>),
}

impl TranslationNode {
    /// An empty branch
    pub const fn empty() -> Self {
        Self::Branch(BTreeMap::new())
    }

    /// Walk a dotted key from this node
    ///
    /// Returns `None` as soon as a segment is missing or a leaf is reached
    /// before the key is exhausted.
    pub fn lookup(&self, key: &str) -> Option<&Self> {
        key.split('.').try_fold(self, |node, segment| match node {
            Self::Branch(children) => children.get(segment),
            Self::Text(_) | Self::Variants(_) => None,
        })
    }

    /// Collect the dotted keys of every leaf below this node
    fn collect_leaf_keys(&self, prefix: &str, out: &mut BTreeSet<String>) {
        match self {
            Self::Branch(children) => {
                for (name, child) in children {
                    let key = if prefix.is_empty() {
                        name.clone()
                    } else {
                        format!("{prefix}.{name}")
                    };
                    child.collect_leaf_keys(&key, out);
                }
            }
            Self::Text(_) | Self::Variants(_) => {
                out.insert(prefix.to_string());
            }
        }
    }
}

/// Translation subtrees keyed by locale
///
/// Built once at startup and then only read; share it behind an `Arc`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranslationTable {
    locales: HashMap<Locale, TranslationNode>,
}

impl TranslationTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the subtree for a locale, replacing any previous one
    pub fn insert(&mut self, locale: Locale, root: TranslationNode) -> I18nResult<()> {
        if !matches!(root, TranslationNode::Branch(_)) {
            return Err(I18nError::NotABranch(locale.code().to_string()));
        }
        self.locales.insert(locale, root);
        Ok(())
    }

    /// Parse a JSON document and set it as the subtree for a locale
    pub fn insert_json(&mut self, locale: Locale, source: &str) -> I18nResult<()> {
        let root: TranslationNode =
            serde_json::from_str(source).map_err(|source| I18nError::ParseError {
                locale: locale.code().to_string(),
                source,
            })?;
        self.insert(locale, root)
    }

    /// The subtree for a locale, if loaded
    pub fn subtree(&self, locale: Locale) -> Option<&TranslationNode> {
        self.locales.get(&locale)
    }

    /// Look up the node addressed by a dotted key
    pub fn get(&self, locale: Locale, key: &str) -> Option<&TranslationNode> {
        self.subtree(locale)?.lookup(key)
    }

    /// Locales with a loaded subtree
    pub fn locales(&self) -> Vec<Locale> {
        let mut locales: Vec<Locale> = self.locales.keys().copied().collect();
        locales.sort();
        locales
    }

    /// Dotted keys of every leaf for a locale, sorted
    pub fn leaf_keys(&self, locale: Locale) -> BTreeSet<String> {
        let mut keys = BTreeSet::new();
        if let Some(root) = self.subtree(locale) {
            root.collect_leaf_keys("", &mut keys);
        }
        keys
    }

    /// Keys present for `reference` but absent for `other`
    pub fn missing_keys(&self, reference: Locale, other: Locale) -> Vec<String> {
        let present = self.leaf_keys(other);
        self.leaf_keys(reference)
            .into_iter()
            .filter(|key| !present.contains(key))
            .collect()
    }
}
