//! Alias resolution.
//!
//! Maps what a player types to a station id. Input is normalized (trimmed,
//! lowercased) and then looked up exactly; there is no partial or fuzzy
//! matching. Several aliases may name the same station.

use std::collections::HashMap;

use tracing::{trace, warn};

use crate::domain::{MIN_ALIAS_LEN, StationId, normalize};
use crate::network::MTR_ALIASES;

/// Immutable alias → station lookup.
#[derive(Debug, Clone)]
pub struct AliasResolver {
    /// Keys are stored normalized so they agree with lookups.
    aliases: HashMap<String, StationId>,

    /// Normalized inputs shorter than this (in chars) never resolve.
    min_len: usize,
}

impl AliasResolver {
    /// Start building a resolver.
    pub fn builder() -> AliasResolverBuilder {
        AliasResolverBuilder::new()
    }

    /// Resolver over the MTR alias table.
    pub fn mtr() -> Self {
        MTR_ALIASES
            .iter()
            .fold(Self::builder(), |b, (alias, id)| b.alias_raw(alias, *id))
            .build()
    }

    /// Resolve free text to a station.
    ///
    /// Returns `None` when the normalized text is too short or not a known
    /// alias.
    ///
    /// # Example
    ///
    /// ```
    /// use recall_server::resolver::AliasResolver;
    ///
    /// let resolver = AliasResolver::mtr();
    /// assert_eq!(resolver.resolve(" Central ").map(|id| id.index()), Some(4));
    /// assert!(resolver.resolve("c").is_none());
    /// ```
    pub fn resolve(&self, text: &str) -> Option<StationId> {
        let clean = normalize(text);
        if clean.chars().count() < self.min_len {
            return None;
        }
        let found = self.aliases.get(&clean).copied();
        trace!(input = %clean, ?found, "resolve");
        found
    }

    /// All aliases that resolve to `id`, sorted.
    pub fn aliases_for(&self, id: StationId) -> Vec<&str> {
        let mut out: Vec<&str> = self
            .aliases
            .iter()
            .filter(|(_, v)| **v == id)
            .map(|(k, _)| k.as_str())
            .collect();
        out.sort_unstable();
        out
    }

    /// Turn back into a builder holding the same aliases.
    pub fn into_builder(self) -> AliasResolverBuilder {
        AliasResolverBuilder {
            aliases: self.aliases,
            min_len: self.min_len,
        }
    }

    /// The minimum normalized length that can resolve.
    pub fn min_len(&self) -> usize {
        self.min_len
    }

    /// Number of aliases.
    pub fn len(&self) -> usize {
        self.aliases.len()
    }

    /// Returns true if there are no aliases.
    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty()
    }
}

impl Default for AliasResolver {
    fn default() -> Self {
        Self::mtr()
    }
}

/// Builder for [`AliasResolver`].
#[derive(Debug)]
pub struct AliasResolverBuilder {
    aliases: HashMap<String, StationId>,
    min_len: usize,
}

impl Default for AliasResolverBuilder {
    fn default() -> Self {
        Self {
            aliases: HashMap::new(),
            min_len: MIN_ALIAS_LEN,
        }
    }
}

impl AliasResolverBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an alias. A later alias with the same normalized text replaces
    /// an earlier one.
    pub fn alias(mut self, alias: &str, id: StationId) -> Self {
        self.aliases.insert(normalize(alias), id);
        self
    }

    /// Add an alias for a raw id, skipping ids that are out of range.
    pub fn alias_raw(self, alias: &str, id: usize) -> Self {
        match StationId::parse(id) {
            Ok(id) => self.alias(alias, id),
            Err(e) => {
                warn!(alias, "skipping alias: {e}");
                self
            }
        }
    }

    /// Set the minimum normalized input length.
    pub fn min_len(mut self, min_len: usize) -> Self {
        self.min_len = min_len;
        self
    }

    /// Build the resolver.
    pub fn build(self) -> AliasResolver {
        AliasResolver {
            aliases: self.aliases,
            min_len: self.min_len,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(v: usize) -> StationId {
        StationId::parse(v).unwrap()
    }

    fn small() -> AliasResolver {
        AliasResolver::builder()
            .alias("central", id(4))
            .alias("wan chai", id(6))
            .alias("wanchai", id(6))
            .build()
    }

    #[test]
    fn exact_match() {
        let r = small();
        assert_eq!(r.resolve("central"), Some(id(4)));
        assert_eq!(r.resolve("wan chai"), Some(id(6)));
        assert_eq!(r.resolve("wanchai"), Some(id(6)));
    }

    #[test]
    fn case_and_whitespace_insensitive() {
        let r = small();
        assert_eq!(r.resolve(" Central "), Some(id(4)));
        assert_eq!(r.resolve("CENTRAL"), r.resolve("central"));
        assert_eq!(r.resolve("\tWan Chai\n"), Some(id(6)));
    }

    #[test]
    fn no_partial_matching() {
        let r = small();
        assert!(r.resolve("cent").is_none());
        assert!(r.resolve("central station").is_none());
        assert!(r.resolve("wan  chai").is_none());
    }

    #[test]
    fn short_input_never_resolves() {
        let r = AliasResolver::builder().alias("x", id(1)).build();
        assert!(r.resolve("x").is_none());
        assert!(r.resolve(" x ").is_none());
        assert!(r.resolve("").is_none());
    }

    #[test]
    fn min_len_is_configurable() {
        let r = AliasResolver::builder()
            .alias("x", id(1))
            .min_len(1)
            .build();
        assert_eq!(r.resolve("X"), Some(id(1)));
    }

    #[test]
    fn builder_normalizes_keys() {
        let r = AliasResolver::builder()
            .alias("  Tai Koo ", id(12))
            .build();
        assert_eq!(r.resolve("tai koo"), Some(id(12)));
    }

    #[test]
    fn builder_skips_out_of_range() {
        let r = AliasResolver::builder()
            .alias_raw("nowhere", 500)
            .alias_raw("central", 4)
            .build();
        assert_eq!(r.len(), 1);
        assert!(r.resolve("nowhere").is_none());
    }

    #[test]
    fn aliases_for_lists_synonyms() {
        let r = small();
        assert_eq!(r.aliases_for(id(6)), vec!["wan chai", "wanchai"]);
        assert!(r.aliases_for(id(7)).is_empty());
    }

    #[test]
    fn mtr_table() {
        let r = AliasResolver::mtr();
        assert_eq!(r.len(), MTR_ALIASES.len());
        assert_eq!(r.resolve(" Central "), Some(id(4)));
        assert_eq!(r.resolve("tst"), Some(id(17)));
        assert_eq!(r.resolve("AsiaWorld-Expo"), Some(id(49)));
        assert_eq!(r.resolve("lohas park"), Some(id(57)));
        assert_eq!(r.resolve("south horizons"), Some(id(97)));
    }

    #[test]
    fn mtr_shared_ids_kept_as_given() {
        let r = AliasResolver::mtr();
        assert_eq!(r.resolve("heng on"), r.resolve("shek mun"));
        assert_eq!(r.resolve("ma on shan"), Some(id(96)));
        assert_eq!(r.resolve("wu kai sha"), Some(id(96)));
    }

    #[test]
    fn mtr_stations_without_alias() {
        let r = AliasResolver::mtr();
        for raw in [50, 51, 52, 53, 62, 63] {
            assert!(r.aliases_for(id(raw)).is_empty(), "station {raw}");
        }
    }
}
