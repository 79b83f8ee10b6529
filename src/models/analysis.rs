use chrono::{DateTime, Utc};
use serde::Serialize;

use super::comparison::ComparisonResult;
use super::frequency::RankedSkill;
use super::skill::{SkillSet, SkillToken};
use crate::dataset::DatasetPreview;

/// Which dataset a skill table was built from.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Source {
    Resumes,
    Hired,
    Jobs,
}

impl Source {
    pub const ALL: [Source; 3] = [Source::Resumes, Source::Hired, Source::Jobs];

    pub fn key(&self) -> &'static str {
        match self {
            Source::Resumes => "resumes",
            Source::Hired => "hired",
            Source::Jobs => "jobs",
        }
    }
}

impl std::fmt::Display for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Source::Resumes => write!(f, "Resumes"),
            Source::Hired => write!(f, "Hired Profiles"),
            Source::Jobs => write!(f, "Job Descriptions"),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TopSkills {
    pub source: Source,
    pub records: usize,
    pub skills: Vec<RankedSkill>,
}

/// How one skill is claimed, requested and rewarded across the three datasets.
#[derive(Debug, Clone, Serialize)]
pub struct SkillSkew {
    pub skill: SkillToken,
    pub resume_count: u32,
    pub job_count: u32,
    pub hired_count: u32,
    /// Per-record resume frequency over per-record job frequency.
    pub resume_inflation_index: Option<f64>,
    /// Per-record hired frequency over per-record resume frequency.
    pub hiring_edge: Option<f64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RealityCheck {
    pub user_skills: SkillSet,
    pub matched_jobs: SkillSet,
    pub matched_hired: SkillSet,
    pub comparison: ComparisonResult,
}

/// Output of the hiring predictor for one candidate.
#[derive(Debug, Clone, Serialize)]
pub struct Prediction {
    pub hired: bool,
    pub probability: f32,
    pub recognized: usize,
    pub unrecognized: Vec<SkillToken>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "section", rename_all = "snake_case")]
pub enum ReportBody {
    TopSkills { tables: Vec<TopSkills> },
    RealityCheck(RealityCheck),
    MarketSkew { skills: Vec<SkillSkew> },
    RoleFit { user_skills: SkillSet, target: SkillSet, score: u8 },
    Prediction { user_skills: SkillSet, prediction: Prediction },
    Preview { datasets: Vec<DatasetPreview> },
}

#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub generated_at: DateTime<Utc>,
    #[serde(flatten)]
    pub body: ReportBody,
}

impl Report {
    pub fn new(body: ReportBody) -> Self {
        Self {
            generated_at: Utc::now(),
            body,
        }
    }
}
