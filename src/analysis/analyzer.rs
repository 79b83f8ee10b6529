use crate::analysis::comparator::compare;
use crate::analysis::market::market_skew;
use crate::analysis::skill_extractor::SkillExtractor;
use crate::config::{AnalyzerConfig, ReferencePolicy, TruncationStage};
use crate::dataset::MarketData;
use crate::models::analysis::{RealityCheck, SkillSkew, Source, TopSkills};
use crate::models::comparison::ReferenceSet;
use crate::models::frequency::SkillFrequencyTable;
use crate::models::skill::SkillSet;

/// Answers the dashboard's questions against a loaded [`MarketData`].
///
/// Holds no derived state: every call re-extracts and re-aggregates from the datasets,
/// so results always reflect the snapshot it was built over.
pub struct SkillGapAnalyzer<'a> {
    data: &'a MarketData,
    extractor: SkillExtractor,
    config: AnalyzerConfig,
}

impl<'a> SkillGapAnalyzer<'a> {
    pub fn new(data: &'a MarketData, config: AnalyzerConfig) -> Self {
        Self {
            data,
            extractor: SkillExtractor::new(config.extractor.clone()),
            config,
        }
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    pub fn frequency_table(&self, source: Source) -> SkillFrequencyTable {
        self.data.dataset(source).frequency_table(&self.extractor)
    }

    pub fn top_skills(&self, source: Source) -> TopSkills {
        let table = self.frequency_table(source);
        TopSkills {
            source,
            records: table.bag_count(),
            skills: table.top(self.config.top_n),
        }
    }

    /// Parses free-text user input with the same rules as the datasets.
    pub fn user_skills(&self, input: &str) -> SkillSet {
        self.extractor.extract(Some(input)).to_set()
    }

    pub fn reality_check(&self, user_input: &str) -> RealityCheck {
        let user_skills = self.user_skills(user_input);
        let jobs = self.frequency_table(Source::Jobs);
        let hired = self.frequency_table(Source::Hired);
        let top_n = self.config.top_n;

        let (job_ref, hired_ref) = match self.config.truncation {
            TruncationStage::BeforeComparison => (jobs.top_set(top_n), hired.top_set(top_n)),
            TruncationStage::AfterComparison => (jobs.vocabulary(), hired.vocabulary()),
        };

        let matched_jobs = user_skills.intersection(&job_ref);
        let matched_hired = user_skills.intersection(&hired_ref);

        let job_ref = ReferenceSet::new(Source::Jobs.key(), job_ref);
        let hired_ref = ReferenceSet::new(Source::Hired.key(), hired_ref);
        let references = match self.config.reference_policy {
            ReferencePolicy::Union => vec![job_ref, hired_ref],
            ReferencePolicy::JobsOnly => vec![job_ref],
            ReferencePolicy::HiredOnly => vec![hired_ref],
        };

        let mut comparison = compare(&user_skills, &references);

        if self.config.truncation == TruncationStage::AfterComparison {
            let ranking = match self.config.reference_policy {
                ReferencePolicy::Union => jobs.merged(&hired),
                ReferencePolicy::JobsOnly => jobs,
                ReferencePolicy::HiredOnly => hired,
            };
            comparison.missing = ranking
                .top(ranking.len())
                .into_iter()
                .map(|ranked| ranked.skill)
                .filter(|skill| comparison.missing.contains(skill))
                .take(top_n)
                .collect();
        }

        tracing::debug!(
            "Reality check: {} user skills, {} missing, relevance {:.2}",
            user_skills.len(),
            comparison.missing.len(),
            comparison.relevance_score
        );

        RealityCheck {
            user_skills,
            matched_jobs,
            matched_hired,
            comparison,
        }
    }

    pub fn market_skew(&self, n: usize) -> Vec<SkillSkew> {
        market_skew(
            &self.frequency_table(Source::Resumes),
            &self.frequency_table(Source::Jobs),
            &self.frequency_table(Source::Hired),
            n,
        )
    }
}
