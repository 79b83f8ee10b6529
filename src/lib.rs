pub mod config;
pub mod error;
pub mod models;
pub mod dataset;
pub mod classifier;
pub mod analysis;

pub use config::{AnalyzerConfig, Config, ExtractorConfig, ReferencePolicy, TruncationStage};
pub use error::{Error, Result};
pub use dataset::{Dataset, DatasetSpec, MarketData};
pub use classifier::{HiringClassifier, LinearModel};
pub use analysis::{SkillExtractor, SkillGapAnalyzer};
