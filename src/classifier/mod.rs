pub mod provider;
pub mod linear;
pub mod vocabulary;

pub use provider::HiringClassifier;
pub use linear::{LinearModel, LinearModelArtifact};
pub use vocabulary::{FeatureVector, SkillVocabulary};
