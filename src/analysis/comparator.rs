use crate::models::comparison::{ComparisonResult, MatchedSkills, ReferenceSet};
use crate::models::skill::SkillSet;

/// Compares a candidate skill set against one or more named reference sets.
///
/// The first reference is the primary one used for `relevance_score`. An empty
/// primary (or no reference at all) scores `0.0` by policy rather than dividing by
/// zero.
pub fn compare(candidate: &SkillSet, references: &[ReferenceSet]) -> ComparisonResult {
    let matched = references
        .iter()
        .map(|reference| MatchedSkills {
            reference: reference.name.clone(),
            skills: candidate.intersection(&reference.skills),
        })
        .collect();

    let universe = references
        .iter()
        .fold(SkillSet::new(), |acc, reference| acc.union(&reference.skills));

    let relevance_score = references
        .first()
        .map(|primary| overlap_ratio(candidate, &primary.skills))
        .unwrap_or(0.0);

    ComparisonResult {
        matched,
        missing: universe.difference(candidate),
        extra: candidate.difference(&universe),
        relevance_score,
    }
}

/// Percentage of `target` covered by `candidate`, rounded to the nearest integer.
/// An empty target scores 0.
pub fn fit_score(candidate: &SkillSet, target: &SkillSet) -> u8 {
    (overlap_ratio(candidate, target) * 100.0).round() as u8
}

fn overlap_ratio(candidate: &SkillSet, reference: &SkillSet) -> f64 {
    if reference.is_empty() {
        return 0.0;
    }
    candidate.intersection(reference).len() as f64 / reference.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(raw: &[&str]) -> SkillSet {
        SkillSet::from_raw(raw)
    }

    #[test]
    fn test_compare_single_reference() {
        let candidate = set(&["python", "excel"]);
        let reference = ReferenceSet::new("jobs", set(&["python", "sql", "excel"]));

        let result = compare(&candidate, &[reference]);

        assert_eq!(result.matched_for("jobs"), Some(&set(&["python", "excel"])));
        assert_eq!(result.missing, set(&["sql"]));
        assert!(result.extra.is_empty());
        assert!((result.relevance_score - 2.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_compare_empty_candidate() {
        let result = compare(&set(&[]), &[ReferenceSet::new("jobs", set(&["python"]))]);
        assert_eq!(result.relevance_score, 0.0);
        assert_eq!(result.missing, set(&["python"]));
        assert!(result.extra.is_empty());
    }

    #[test]
    fn test_compare_empty_reference_scores_zero() {
        // Scoring an empty reference is defined as 0, not a division by zero.
        let result = compare(&set(&["python"]), &[ReferenceSet::new("jobs", set(&[]))]);
        assert_eq!(result.relevance_score, 0.0);
        assert_eq!(result.extra, set(&["python"]));

        let result = compare(&set(&["python"]), &[]);
        assert_eq!(result.relevance_score, 0.0);
        assert!(result.matched.is_empty());
    }

    #[test]
    fn test_compare_multiple_references() {
        let candidate = set(&["python", "canva", "teamwork"]);
        let references = [
            ReferenceSet::new("jobs", set(&["python", "sql"])),
            ReferenceSet::new("hired", set(&["canva", "excel", "sql"])),
        ];

        let result = compare(&candidate, &references);

        assert_eq!(result.matched.len(), 2);
        assert_eq!(result.matched[0].reference, "jobs");
        assert_eq!(result.matched_for("jobs"), Some(&set(&["python"])));
        assert_eq!(result.matched_for("hired"), Some(&set(&["canva"])));
        assert_eq!(result.missing, set(&["sql", "excel"]));
        assert_eq!(result.extra, set(&["teamwork"]));
        // primary is the first reference
        assert!((result.relevance_score - 0.5).abs() < 1e-9);
        assert!(result.matched_for("resumes").is_none());
    }

    #[test]
    fn test_compare_is_deterministic() {
        let candidate = set(&["sql", "python"]);
        let references = [ReferenceSet::new("jobs", set(&["python", "excel"]))];
        let first = compare(&candidate, &references);
        let second = compare(&candidate, &references);
        assert_eq!(first.missing, second.missing);
        assert_eq!(first.extra, second.extra);
        assert_eq!(first.relevance_score, second.relevance_score);
    }

    #[test]
    fn test_fit_score_empty_target() {
        assert_eq!(fit_score(&set(&["Excel", "Python"]), &set(&[])), 0);
    }

    #[test]
    fn test_fit_score_full_cover() {
        assert_eq!(fit_score(&set(&["Excel", "Python", "SQL"]), &set(&["Excel", "Python"])), 100);
    }

    #[test]
    fn test_fit_score_rounds() {
        let target = set(&["python", "sql", "excel"]);
        assert_eq!(fit_score(&set(&["python"]), &target), 33);
        assert_eq!(fit_score(&set(&["python", "sql"]), &target), 67);
        assert_eq!(fit_score(&set(&["canva"]), &target), 0);
    }
}
