use crate::classifier::HiringClassifier;
use crate::error::Result;
use crate::models::analysis::Prediction;
use crate::models::skill::SkillBag;

/// Runs the hiring classifier on a candidate's skills. Skills outside the model's
/// vocabulary are left out of the features and listed in `unrecognized`.
pub fn predict_hiring(classifier: &dyn HiringClassifier, bag: &SkillBag) -> Result<Prediction> {
    let features = classifier.vocabulary().encode(bag);

    if !features.unrecognized.is_empty() {
        tracing::warn!(
            "{} skill(s) unknown to {}: {}",
            features.unrecognized.len(),
            classifier.name(),
            features
                .unrecognized
                .iter()
                .map(|t| t.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        );
    }

    let probability = classifier.predict_proba(&features)?;
    let hired = classifier.predict(&features)?;

    Ok(Prediction {
        hired,
        probability,
        recognized: features.recognized(),
        unrecognized: features.unrecognized,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::SkillExtractor;
    use crate::classifier::{FeatureVector, SkillVocabulary};

    struct CountingClassifier {
        vocabulary: SkillVocabulary,
    }

    impl HiringClassifier for CountingClassifier {
        fn vocabulary(&self) -> &SkillVocabulary {
            &self.vocabulary
        }

        fn predict_proba(&self, features: &FeatureVector) -> Result<f32> {
            Ok(features.recognized() as f32 / self.vocabulary.len() as f32)
        }

        fn name(&self) -> &str {
            "counting"
        }
    }

    #[test]
    fn test_predict_hiring() {
        let classifier = CountingClassifier {
            vocabulary: SkillVocabulary::new(["python", "sql"]).unwrap(),
        };
        let bag = SkillExtractor::default().extract(Some("Python, SQL, Canva"));

        let prediction = predict_hiring(&classifier, &bag).unwrap();
        assert!(prediction.hired);
        assert_eq!(prediction.probability, 1.0);
        assert_eq!(prediction.recognized, 2);
        assert_eq!(prediction.unrecognized.len(), 1);
        assert_eq!(prediction.unrecognized[0].as_str(), "canva");
    }

    /// Labels from its own rule rather than from a probability threshold.
    struct RuleClassifier {
        vocabulary: SkillVocabulary,
    }

    impl HiringClassifier for RuleClassifier {
        fn vocabulary(&self) -> &SkillVocabulary {
            &self.vocabulary
        }

        fn predict_proba(&self, _features: &FeatureVector) -> Result<f32> {
            Ok(0.4)
        }

        fn predict(&self, features: &FeatureVector) -> Result<bool> {
            Ok(features.recognized() > 0)
        }

        fn name(&self) -> &str {
            "rule"
        }
    }

    #[test]
    fn test_predict_hiring_uses_classifier_label() {
        let classifier = RuleClassifier {
            vocabulary: SkillVocabulary::new(["sql"]).unwrap(),
        };
        let bag = SkillExtractor::default().extract(Some("SQL"));

        let prediction = predict_hiring(&classifier, &bag).unwrap();
        assert!(prediction.hired);
        assert_eq!(prediction.probability, 0.4);

        let prediction = predict_hiring(&classifier, &SkillBag::default()).unwrap();
        assert!(!prediction.hired);
    }

    #[test]
    fn test_predict_hiring_nothing_recognized() {
        let classifier = CountingClassifier {
            vocabulary: SkillVocabulary::new(["python", "sql"]).unwrap(),
        };
        let bag = SkillExtractor::default().extract(Some("Canva"));

        let prediction = predict_hiring(&classifier, &bag).unwrap();
        assert!(!prediction.hired);
        assert_eq!(prediction.recognized, 0);
    }
}
