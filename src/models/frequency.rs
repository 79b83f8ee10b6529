use serde::Serialize;
use std::collections::HashMap;

use super::skill::{SkillBag, SkillSet, SkillToken};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedSkill {
    pub skill: SkillToken,
    pub count: u32,
}

/// Occurrence counts per skill across a dataset column.
///
/// Tokens remember the order in which the aggregation pass first met them; `top`
/// uses that order to break ties between equal counts.
#[derive(Debug, Clone, Default)]
pub struct SkillFrequencyTable {
    entries: Vec<(SkillToken, u32)>,
    index: HashMap<SkillToken, usize>,
    bags: usize,
}

impl SkillFrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flattens the bags and counts every token.
    pub fn aggregate<'a, I>(bags: I) -> Self
    where
        I: IntoIterator<Item = &'a SkillBag>,
    {
        let mut table = Self::new();
        for bag in bags {
            table.add_bag(bag);
        }
        table
    }

    pub fn add_bag(&mut self, bag: &SkillBag) {
        self.bags += 1;
        for token in bag {
            self.add(token);
        }
    }

    fn add(&mut self, token: &SkillToken) {
        match self.index.get(token) {
            Some(&pos) => self.entries[pos].1 += 1,
            None => {
                self.index.insert(token.clone(), self.entries.len());
                self.entries.push((token.clone(), 1));
            }
        }
    }

    pub fn count(&self, token: &SkillToken) -> u32 {
        self.index
            .get(token)
            .map(|&pos| self.entries[pos].1)
            .unwrap_or(0)
    }

    /// Occurrences per aggregated record. `0.0` for an empty table.
    pub fn frequency(&self, token: &SkillToken) -> f64 {
        if self.bags == 0 {
            return 0.0;
        }
        self.count(token) as f64 / self.bags as f64
    }

    /// Number of bags (records) aggregated, including empty ones.
    pub fn bag_count(&self) -> usize {
        self.bags
    }

    /// Number of distinct tokens.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&SkillToken, u32)> {
        self.entries.iter().map(|(token, count)| (token, *count))
    }

    /// The `n` most frequent skills, count descending, ties in first-seen order.
    pub fn top(&self, n: usize) -> Vec<RankedSkill> {
        let mut ranked: Vec<RankedSkill> = self
            .entries
            .iter()
            .map(|(skill, count)| RankedSkill {
                skill: skill.clone(),
                count: *count,
            })
            .collect();

        // sort_by is stable, so equal counts keep insertion order
        ranked.sort_by(|a, b| b.count.cmp(&a.count));
        ranked.truncate(n);
        ranked
    }

    pub fn top_set(&self, n: usize) -> SkillSet {
        self.top(n).into_iter().map(|r| r.skill).collect()
    }

    pub fn vocabulary(&self) -> SkillSet {
        self.entries.iter().map(|(token, _)| token.clone()).collect()
    }

    /// Adds all counts and bags of `other` into a new table. Tokens only in `other`
    /// are ordered after those of `self`.
    pub fn merged(&self, other: &SkillFrequencyTable) -> SkillFrequencyTable {
        let mut merged = self.clone();
        merged.bags += other.bags;
        for (token, count) in other.iter() {
            match merged.index.get(token) {
                Some(&pos) => merged.entries[pos].1 += count,
                None => {
                    merged.index.insert(token.clone(), merged.entries.len());
                    merged.entries.push((token.clone(), count));
                }
            }
        }
        merged
    }
}
