use crate::dataset::DatasetSpec;
use crate::error::{Error, Result};
use crate::models::{DEFAULT_DELIMITERS, DEFAULT_STRIP_CHARS};
use std::env;
use std::path::PathBuf;
use std::str::FromStr;

/// Which reference skills a candidate is measured against in the gap analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferencePolicy {
    /// Job-ad skills and hired-profile skills together.
    Union,
    JobsOnly,
    HiredOnly,
}

impl FromStr for ReferencePolicy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "union" | "both" => Ok(ReferencePolicy::Union),
            "jobs" | "jobs_only" => Ok(ReferencePolicy::JobsOnly),
            "hired" | "hired_only" => Ok(ReferencePolicy::HiredOnly),
            other => Err(Error::Config(format!("unknown reference policy '{}'", other))),
        }
    }
}

/// Whether top-N truncation happens on the reference tables before the set
/// operations, or on the missing skills after them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TruncationStage {
    BeforeComparison,
    AfterComparison,
}

impl FromStr for TruncationStage {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "before" | "before_comparison" => Ok(TruncationStage::BeforeComparison),
            "after" | "after_comparison" => Ok(TruncationStage::AfterComparison),
            other => Err(Error::Config(format!("unknown truncation stage '{}'", other))),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub resumes: DatasetSpec,
    pub hired: DatasetSpec,
    pub jobs: DatasetSpec,
    pub top_n: usize,
    pub reference_policy: ReferencePolicy,
    pub truncation: TruncationStage,
    pub delimiters: Vec<char>,
    pub strip_chars: Vec<char>,
    pub model_path: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from any key lookup, falling back to defaults for
    /// unset keys.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let dataset = |name: &str, prefix: &str, path: &str, column: &str| DatasetSpec {
            name: name.to_string(),
            path: lookup(&format!("SKILLGAP_{}_PATH", prefix))
                .unwrap_or_else(|| path.to_string())
                .into(),
            skill_column: lookup(&format!("SKILLGAP_{}_COLUMN", prefix))
                .unwrap_or_else(|| column.to_string()),
        };

        let resumes = dataset("resumes", "RESUMES", "resumes.csv", "skills_listed");
        let hired = dataset("hired", "HIRED", "hired_profiles.csv", "skills_endorsed");
        let jobs = dataset("jobs", "JOBS", "job_enriched.csv", "skills");

        let top_n = match lookup("SKILLGAP_TOP_N") {
            Some(v) => v
                .trim()
                .parse::<usize>()
                .map_err(|_| Error::Config(format!("SKILLGAP_TOP_N must be a number, got '{}'", v)))?,
            None => 10,
        };

        let reference_policy = lookup("SKILLGAP_REFERENCE_POLICY")
            .map(|v| v.parse::<ReferencePolicy>())
            .transpose()?
            .unwrap_or(ReferencePolicy::Union);

        let truncation = lookup("SKILLGAP_TRUNCATION")
            .map(|v| v.parse::<TruncationStage>())
            .transpose()?
            .unwrap_or(TruncationStage::BeforeComparison);

        let delimiters = lookup("SKILLGAP_DELIMITERS")
            .map(|v| v.chars().collect::<Vec<_>>())
            .unwrap_or_else(|| DEFAULT_DELIMITERS.to_vec());

        if delimiters.is_empty() {
            return Err(Error::Config("SKILLGAP_DELIMITERS must not be empty".to_string()));
        }

        let strip_chars = lookup("SKILLGAP_STRIP_CHARS")
            .map(|v| v.chars().collect())
            .unwrap_or_else(|| DEFAULT_STRIP_CHARS.to_vec());

        let model_path = lookup("SKILLGAP_MODEL_PATH")
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from);

        Ok(Self {
            resumes,
            hired,
            jobs,
            top_n,
            reference_policy,
            truncation,
            delimiters,
            strip_chars,
            model_path,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractorConfig {
    pub delimiters: Vec<char>,
    pub strip_chars: Vec<char>,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            delimiters: DEFAULT_DELIMITERS.to_vec(),
            strip_chars: DEFAULT_STRIP_CHARS.to_vec(),
        }
    }
}

impl From<&Config> for ExtractorConfig {
    fn from(config: &Config) -> Self {
        Self {
            delimiters: config.delimiters.clone(),
            strip_chars: config.strip_chars.clone(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AnalyzerConfig {
    pub top_n: usize,
    pub reference_policy: ReferencePolicy,
    pub truncation: TruncationStage,
    pub extractor: ExtractorConfig,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            top_n: 10,
            reference_policy: ReferencePolicy::Union,
            truncation: TruncationStage::BeforeComparison,
            extractor: ExtractorConfig::default(),
        }
    }
}

impl From<&Config> for AnalyzerConfig {
    fn from(config: &Config) -> Self {
        Self {
            top_n: config.top_n,
            reference_policy: config.reference_policy,
            truncation: config.truncation,
            extractor: ExtractorConfig::from(config),
        }
    }
}
