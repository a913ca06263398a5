//! Locale dictionaries as nested trees of translation strings.

use crate::assets::LocaleAssets;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::sync::{Arc, OnceLock};
use tracing::{debug, error};

/// Separator between segments of a translation key
pub const KEY_SEPARATOR: char = '.';

/// One node of a locale tree
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Node {
    /// Translated text
    Leaf(String),
    /// Nested section keyed by segment name
    Branch(BTreeMap<String, Node>),
}

impl Default for Node {
    fn default() -> Self {
        Node::Branch(BTreeMap::new())
    }
}

impl Node {
    /// Parse a TOML document into a tree.
    ///
    /// A malformed document is logged and yields an empty tree so lookups
    /// degrade to the raw key.
    pub fn parse(code: &str, source: &str) -> Self {
        match toml::from_str::<BTreeMap<String, Node>>(source) {
            Ok(root) => Node::Branch(root),
            Err(e) => {
                error!(error = %e, locale = code, "Failed to parse locale dictionary");
                Node::default()
            }
        }
    }

    /// Walk a dotted key path, returning the leaf text it names.
    ///
    /// Stops at the first missing segment or at a leaf with segments left.
    /// A path that ends on a branch resolves to nothing.
    pub fn lookup(&self, key: &str) -> Option<&str> {
        let mut node = self;
        for segment in key.split(KEY_SEPARATOR) {
            match node {
                Node::Branch(children) => node = children.get(segment)?,
                Node::Leaf(_) => return None,
            }
        }
        match node {
            Node::Leaf(text) => Some(text),
            Node::Branch(_) => None,
        }
    }
}

/// All locale trees known to the process, keyed by language code
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    locales: BTreeMap<String, Node>,
}

impl Catalog {
    /// Build a catalog from the dictionaries embedded in the binary
    pub fn embedded() -> Self {
        let mut catalog = Self::default();
        for (code, source) in LocaleAssets::sources() {
            catalog.insert_source(code, &source);
        }
        debug!(locales = ?catalog.codes().collect::<Vec<_>>(), "Loaded locale catalog");
        catalog
    }

    /// Add or replace a locale from TOML source
    pub fn insert_source(&mut self, code: impl Into<String>, source: &str) {
        let code = code.into();
        let tree = Node::parse(&code, source);
        self.locales.insert(code, tree);
    }

    /// Add or replace a locale tree
    pub fn insert(&mut self, code: impl Into<String>, tree: Node) {
        self.locales.insert(code.into(), tree);
    }

    /// Tree for a language code
    pub fn tree(&self, code: &str) -> Option<&Node> {
        self.locales.get(code)
    }

    /// Language codes in sorted order
    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.locales.keys().map(String::as_str)
    }

    pub fn has_locale(&self, code: &str) -> bool {
        self.locales.contains_key(code)
    }

    /// Resolve a key for a locale without fallback
    pub fn resolve(&self, code: &str, key: &str) -> Option<&str> {
        self.tree(code)?.lookup(key)
    }

    /// Resolve a key for a locale, falling back to the key itself
    pub fn translate(&self, code: &str, key: &str) -> String {
        match self.resolve(code, key) {
            Some(text) => text.to_string(),
            None => {
                debug!(locale = code, key, "Missing translation, using key");
                key.to_string()
            }
        }
    }

    /// Translate a key and substitute `{name}` placeholders
    pub fn format(&self, code: &str, key: &str, args: &[(&str, &str)]) -> String {
        let mut result = self.translate(code, key);
        for (name, value) in args {
            result = result.replace(&format!("{{{name}}}"), value);
        }
        result
    }
}

static CATALOG: OnceLock<Arc<Catalog>> = OnceLock::new();

/// Process-wide catalog of the embedded dictionaries
pub fn catalog() -> Arc<Catalog> {
    CATALOG
        .get_or_init(|| Arc::new(Catalog::embedded()))
        .clone()
}
