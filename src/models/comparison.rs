use serde::Serialize;

use super::skill::SkillSet;

/// A named set of skills to compare a candidate against, e.g. "job descriptions".
#[derive(Debug, Clone, Serialize)]
pub struct ReferenceSet {
    pub name: String,
    pub skills: SkillSet,
}

impl ReferenceSet {
    pub fn new(name: impl Into<String>, skills: SkillSet) -> Self {
        Self {
            name: name.into(),
            skills,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct MatchedSkills {
    pub reference: String,
    pub skills: SkillSet,
}

#[derive(Debug, Clone, Serialize)]
pub struct ComparisonResult {
    /// Candidate ∩ reference, one entry per reference in the order supplied.
    pub matched: Vec<MatchedSkills>,
    /// Union of references minus the candidate.
    pub missing: SkillSet,
    /// Candidate minus the union of references.
    pub extra: SkillSet,
    /// |candidate ∩ primary| / |primary|, or 0 when the primary reference is empty.
    pub relevance_score: f64,
}

impl ComparisonResult {
    pub fn matched_for(&self, reference: &str) -> Option<&SkillSet> {
        self.matched
            .iter()
            .find(|m| m.reference == reference)
            .map(|m| &m.skills)
    }
}
