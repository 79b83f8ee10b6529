use serde::Serialize;
use std::collections::{HashMap, HashSet};

use crate::error::{Error, Result};
use crate::models::skill::{SkillBag, SkillToken};

/// One-hot encoding of a skill bag against a fixed vocabulary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeatureVector {
    pub values: Vec<f32>,
    /// Tokens with no slot in the vocabulary, once each, in first-seen order.
    pub unrecognized: Vec<SkillToken>,
}

impl FeatureVector {
    pub fn recognized(&self) -> usize {
        self.values.iter().filter(|v| **v > 0.0).count()
    }
}

/// The ordered skill classes a model was trained on.
#[derive(Debug, Clone)]
pub struct SkillVocabulary {
    classes: Vec<SkillToken>,
    index: HashMap<SkillToken, usize>,
}

impl SkillVocabulary {
    /// Normalizes each class. Classes that normalize to nothing or collide with an
    /// earlier class are rejected, since the feature layout would be ambiguous.
    pub fn new<I, S>(classes: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut tokens = Vec::new();
        let mut index = HashMap::new();

        for (pos, raw) in classes.into_iter().enumerate() {
            let raw = raw.as_ref();
            let token = SkillToken::parse(raw).ok_or_else(|| {
                Error::Model(format!("vocabulary class {} ('{}') is empty", pos, raw))
            })?;
            if index.insert(token.clone(), tokens.len()).is_some() {
                return Err(Error::Model(format!(
                    "vocabulary class '{}' appears more than once",
                    token
                )));
            }
            tokens.push(token);
        }

        Ok(Self {
            classes: tokens,
            index,
        })
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    pub fn position(&self, token: &SkillToken) -> Option<usize> {
        self.index.get(token).copied()
    }

    pub fn encode(&self, bag: &SkillBag) -> FeatureVector {
        let mut values = vec![0.0; self.classes.len()];
        let mut unrecognized: Vec<SkillToken> = Vec::new();
        let mut seen: HashSet<&SkillToken> = HashSet::new();

        for token in bag {
            match self.position(token) {
                Some(pos) => values[pos] = 1.0,
                None => {
                    if seen.insert(token) {
                        unrecognized.push(token.clone());
                    }
                }
            }
        }

        FeatureVector {
            values,
            unrecognized,
        }
    }
}
