use crate::models::analysis::SkillSkew;
use crate::models::frequency::SkillFrequencyTable;
use crate::models::skill::SkillToken;

/// Resume inflation index and hiring edge for the `n` skills with the highest
/// combined count across resumes, jobs and hired profiles.
///
/// Ratios are over per-record frequencies so datasets of different sizes compare. A
/// ratio is `None` when its denominator skill never appears in that dataset.
pub fn market_skew(
    resumes: &SkillFrequencyTable,
    jobs: &SkillFrequencyTable,
    hired: &SkillFrequencyTable,
    n: usize,
) -> Vec<SkillSkew> {
    let combined = resumes.merged(jobs).merged(hired);

    combined
        .top(n)
        .into_iter()
        .map(|ranked| skew_for(&ranked.skill, resumes, jobs, hired))
        .collect()
}

fn skew_for(
    skill: &SkillToken,
    resumes: &SkillFrequencyTable,
    jobs: &SkillFrequencyTable,
    hired: &SkillFrequencyTable,
) -> SkillSkew {
    let resume_freq = resumes.frequency(skill);
    let job_freq = jobs.frequency(skill);
    let hired_freq = hired.frequency(skill);

    SkillSkew {
        skill: skill.clone(),
        resume_count: resumes.count(skill),
        job_count: jobs.count(skill),
        hired_count: hired.count(skill),
        resume_inflation_index: ratio(resume_freq, job_freq),
        hiring_edge: ratio(hired_freq, resume_freq),
    }
}

fn ratio(numerator: f64, denominator: f64) -> Option<f64> {
    (denominator > 0.0).then(|| numerator / denominator)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::SkillExtractor;

    fn table(rows: &[&str]) -> SkillFrequencyTable {
        SkillExtractor::default().aggregate(rows.iter().map(|r| Some(*r)))
    }

    #[test]
    fn test_inflation_and_edge() {
        // 4 resumes, 2 jobs, 2 hired
        let resumes = table(&["python, canva", "canva", "canva, sql", "excel"]);
        let jobs = table(&["python, sql", "canva"]);
        let hired = table(&["sql, python", "sql"]);

        let skew = market_skew(&resumes, &jobs, &hired, 10);
        let canva = skew.iter().find(|s| s.skill.as_str() == "canva").unwrap();
        assert_eq!(canva.resume_count, 3);
        // 0.75 per resume vs 0.5 per job
        assert!((canva.resume_inflation_index.unwrap() - 1.5).abs() < 1e-9);
        assert_eq!(canva.hiring_edge, Some(0.0));

        let sql = skew.iter().find(|s| s.skill.as_str() == "sql").unwrap();
        // 1.0 per hired vs 0.25 per resume
        assert!((sql.hiring_edge.unwrap() - 4.0).abs() < 1e-9);
    }

    #[test]
    fn test_missing_denominator_is_none() {
        let resumes = table(&["excel"]);
        let jobs = table(&["python"]);
        let hired = table(&["rust"]);

        let skew = market_skew(&resumes, &jobs, &hired, 10);
        let excel = skew.iter().find(|s| s.skill.as_str() == "excel").unwrap();
        assert_eq!(excel.resume_inflation_index, None);

        let rust = skew.iter().find(|s| s.skill.as_str() == "rust").unwrap();
        assert_eq!(rust.hiring_edge, None);
    }

    #[test]
    fn test_ranked_by_combined_count() {
        let resumes = table(&["sql, excel", "excel"]);
        let jobs = table(&["sql"]);
        let hired = table(&["sql"]);

        let skew = market_skew(&resumes, &jobs, &hired, 1);
        assert_eq!(skew.len(), 1);
        assert_eq!(skew[0].skill.as_str(), "sql");
    }
}
