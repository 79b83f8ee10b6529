use serde::Serialize;
use std::collections::btree_set;
use std::collections::BTreeSet;

/// Characters peeled off both ends of a skill fragment by default.
pub const DEFAULT_STRIP_CHARS: &[char] = &['[', ']', '(', ')', '"', '\''];

/// Characters that separate skills inside one free-text field by default.
pub const DEFAULT_DELIMITERS: &[char] = &[',', ';', '|'];

/// A normalized unit of skill text, e.g. `python`.
///
/// Lowercased, with any mix of whitespace and strip characters removed from both ends.
/// Never empty. Because normalization only happens here, two tokens compare equal
/// exactly when their normalized text does.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct SkillToken(String);

impl SkillToken {
    /// Normalizes `raw` using the default strip set.
    pub fn parse(raw: &str) -> Option<Self> {
        Self::normalize(raw, DEFAULT_STRIP_CHARS)
    }

    /// Normalizes `raw`, returning `None` when nothing is left.
    pub fn normalize(raw: &str, strip_chars: &[char]) -> Option<Self> {
        let lower = raw.to_lowercase();
        let trimmed = lower.trim_matches(|c: char| c.is_whitespace() || strip_chars.contains(&c));

        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SkillToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for SkillToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// The tokens extracted from one record's free-text skill field, in input order.
/// Duplicates are kept since counts matter downstream.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SkillBag(Vec<SkillToken>);

impl SkillBag {
    pub fn new(tokens: Vec<SkillToken>) -> Self {
        Self(tokens)
    }

    pub fn tokens(&self) -> &[SkillToken] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SkillToken> {
        self.0.iter()
    }

    pub fn to_set(&self) -> SkillSet {
        self.0.iter().cloned().collect()
    }
}

impl<'a> IntoIterator for &'a SkillBag {
    type Item = &'a SkillToken;
    type IntoIter = std::slice::Iter<'a, SkillToken>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// A deduplicated set of skills, iterated in lexicographic order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SkillSet(BTreeSet<SkillToken>);

impl SkillSet {
    pub fn new() -> Self {
        Self(BTreeSet::new())
    }

    /// Builds a set from raw strings, normalizing each one and dropping those that
    /// normalize to nothing.
    pub fn from_raw<I, S>(raw: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        raw.into_iter()
            .filter_map(|s| SkillToken::parse(s.as_ref()))
            .collect()
    }

    pub fn contains(&self, token: &SkillToken) -> bool {
        self.0.contains(token)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> btree_set::Iter<'_, SkillToken> {
        self.0.iter()
    }

    pub fn intersection(&self, other: &SkillSet) -> SkillSet {
        self.0.intersection(&other.0).cloned().collect()
    }

    pub fn difference(&self, other: &SkillSet) -> SkillSet {
        self.0.difference(&other.0).cloned().collect()
    }

    pub fn union(&self, other: &SkillSet) -> SkillSet {
        self.0.union(&other.0).cloned().collect()
    }

    /// Joins the tokens with `", "` for display.
    pub fn join(&self) -> String {
        self.0
            .iter()
            .map(SkillToken::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl FromIterator<SkillToken> for SkillSet {
    fn from_iter<T: IntoIterator<Item = SkillToken>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a SkillSet {
    type Item = &'a SkillToken;
    type IntoIter = btree_set::Iter<'a, SkillToken>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
