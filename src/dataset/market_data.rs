use crate::config::Config;
use crate::dataset::table::{Dataset, DatasetSpec};
use crate::error::Result;
use crate::models::analysis::Source;

/// The three datasets the analyzer reads, loaded once at startup and shared read-only.
#[derive(Debug, Clone)]
pub struct MarketData {
    pub resumes: Dataset,
    pub hired: Dataset,
    pub jobs: Dataset,
}

impl MarketData {
    pub fn new(resumes: Dataset, hired: Dataset, jobs: Dataset) -> Self {
        Self {
            resumes,
            hired,
            jobs,
        }
    }

    /// Loads each configured dataset, calling `on_loaded` after every one.
    pub fn load_with<F>(config: &Config, mut on_loaded: F) -> Result<Self>
    where
        F: FnMut(&Dataset),
    {
        let mut load = |spec: &DatasetSpec| -> Result<Dataset> {
            let dataset = Dataset::load(spec)?;
            on_loaded(&dataset);
            Ok(dataset)
        };

        let resumes = load(&config.resumes)?;
        let hired = load(&config.hired)?;
        let jobs = load(&config.jobs)?;

        Ok(Self::new(resumes, hired, jobs))
    }

    pub fn load(config: &Config) -> Result<Self> {
        Self::load_with(config, |_| {})
    }

    pub fn dataset(&self, source: Source) -> &Dataset {
        match source {
            Source::Resumes => &self.resumes,
            Source::Hired => &self.hired,
            Source::Jobs => &self.jobs,
        }
    }
}
