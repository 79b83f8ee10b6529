use crate::classifier::vocabulary::{FeatureVector, SkillVocabulary};
use crate::error::{Error, Result};

/// A pre-trained binary "hired / not hired" classifier over one-hot skill features.
pub trait HiringClassifier: Send + Sync {
    fn vocabulary(&self) -> &SkillVocabulary;

    fn predict_proba(&self, features: &FeatureVector) -> Result<f32>;

    fn threshold(&self) -> f32 {
        0.5
    }

    fn predict(&self, features: &FeatureVector) -> Result<bool> {
        Ok(self.predict_proba(features)? >= self.threshold())
    }

    fn name(&self) -> &str;
}

pub(crate) fn check_width(features: &FeatureVector, expected: usize) -> Result<()> {
    if features.values.len() != expected {
        return Err(Error::Model(format!(
            "feature vector has {} values, model expects {}",
            features.values.len(),
            expected
        )));
    }
    Ok(())
}
