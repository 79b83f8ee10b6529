pub mod analyzer;
pub mod comparator;
pub mod market;
pub mod predictor;
pub mod skill_extractor;

pub use analyzer::SkillGapAnalyzer;
pub use comparator::{compare, fit_score};
pub use market::market_skew;
pub use predictor::predict_hiring;
pub use skill_extractor::SkillExtractor;
