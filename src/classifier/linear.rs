use serde::Deserialize;
use std::path::Path;

use crate::classifier::provider::{check_width, HiringClassifier};
use crate::classifier::vocabulary::{FeatureVector, SkillVocabulary};
use crate::error::{Error, Result};

/// On-disk form of a trained logistic regression model.
#[derive(Debug, Clone, Deserialize)]
pub struct LinearModelArtifact {
    pub classes: Vec<String>,
    pub coefficients: Vec<f32>,
    pub intercept: f32,
    #[serde(default = "default_threshold")]
    pub threshold: f32,
}

fn default_threshold() -> f32 {
    0.5
}

/// Logistic regression over one-hot skill features.
#[derive(Debug, Clone)]
pub struct LinearModel {
    vocabulary: SkillVocabulary,
    coefficients: Vec<f32>,
    intercept: f32,
    threshold: f32,
}

impl LinearModel {
    pub fn from_artifact(artifact: LinearModelArtifact) -> Result<Self> {
        let vocabulary = SkillVocabulary::new(&artifact.classes)?;

        if artifact.coefficients.len() != vocabulary.len() {
            return Err(Error::Model(format!(
                "{} coefficients for {} classes",
                artifact.coefficients.len(),
                vocabulary.len()
            )));
        }
        if !(0.0..=1.0).contains(&artifact.threshold) {
            return Err(Error::Model(format!(
                "threshold {} is outside [0, 1]",
                artifact.threshold
            )));
        }

        Ok(Self {
            vocabulary,
            coefficients: artifact.coefficients,
            intercept: artifact.intercept,
            threshold: artifact.threshold,
        })
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let artifact: LinearModelArtifact = serde_json::from_str(json)?;
        Self::from_artifact(artifact)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let model = Self::from_json(&json)?;
        tracing::info!(
            "Loaded hiring model from {} ({} skill classes)",
            path.display(),
            model.vocabulary.len()
        );
        Ok(model)
    }
}

impl HiringClassifier for LinearModel {
    fn vocabulary(&self) -> &SkillVocabulary {
        &self.vocabulary
    }

    fn predict_proba(&self, features: &FeatureVector) -> Result<f32> {
        check_width(features, self.coefficients.len())?;

        let logit = self
            .coefficients
            .iter()
            .zip(&features.values)
            .map(|(w, x)| w * x)
            .sum::<f32>()
            + self.intercept;

        Ok(1.0 / (1.0 + (-logit).exp()))
    }

    fn threshold(&self) -> f32 {
        self.threshold
    }

    fn name(&self) -> &str {
        "logistic-regression"
    }
}
