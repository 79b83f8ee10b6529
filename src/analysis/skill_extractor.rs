use crate::config::ExtractorConfig;
use crate::models::frequency::SkillFrequencyTable;
use crate::models::skill::{SkillBag, SkillToken};

/// Turns free-text skill fields into normalized skill bags.
pub struct SkillExtractor {
    config: ExtractorConfig,
}

impl SkillExtractor {
    pub fn new(config: ExtractorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Splits `raw_text` on the configured delimiters and normalizes each fragment.
    ///
    /// Absent or empty input yields an empty bag. Fragments that normalize to nothing
    /// are dropped; order and duplicates are kept. Never fails.
    pub fn extract(&self, raw_text: Option<&str>) -> SkillBag {
        let Some(text) = raw_text else {
            return SkillBag::default();
        };

        let tokens = text
            .split(|c: char| self.config.delimiters.contains(&c))
            .filter_map(|fragment| self.normalize(fragment))
            .collect();

        SkillBag::new(tokens)
    }

    pub fn normalize(&self, fragment: &str) -> Option<SkillToken> {
        SkillToken::normalize(fragment, &self.config.strip_chars)
    }

    pub fn aggregate<'a, I>(&self, rows: I) -> SkillFrequencyTable
    where
        I: IntoIterator<Item = Option<&'a str>>,
    {
        let mut table = SkillFrequencyTable::new();
        for row in rows {
            table.add_bag(&self.extract(row));
        }
        tracing::debug!(
            "Aggregated {} distinct skills from {} records",
            table.len(),
            table.bag_count()
        );
        table
    }
}

impl Default for SkillExtractor {
    fn default() -> Self {
        Self::new(ExtractorConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(bag: &SkillBag) -> Vec<&str> {
        bag.iter().map(SkillToken::as_str).collect()
    }

    #[test]
    fn test_extract_missing_or_empty() {
        let extractor = SkillExtractor::default();
        assert!(extractor.extract(None).is_empty());
        assert!(extractor.extract(Some("")).is_empty());
        assert_eq!(extractor.extract(None), extractor.extract(Some("")));
        assert!(extractor.extract(Some(" ,;| ,, ")).is_empty());
    }

    #[test]
    fn test_extract_splits_on_all_delimiters() {
        let extractor = SkillExtractor::default();
        let bag = extractor.extract(Some("Python, SQL; Excel|Canva"));
        assert_eq!(names(&bag), vec!["python", "sql", "excel", "canva"]);
    }

    #[test]
    fn test_extract_strips_enclosing_punctuation() {
        let extractor = SkillExtractor::default();
        let bag = extractor.extract(Some("[Python]() , 'SQL' "));
        assert_eq!(names(&bag), vec!["python", "sql"]);
    }

    #[test]
    fn test_extract_keeps_duplicates_in_order() {
        let extractor = SkillExtractor::default();
        let bag = extractor.extract(Some("SQL, python, sql , Python"));
        assert_eq!(names(&bag), vec!["sql", "python", "sql", "python"]);
    }

    #[test]
    fn test_extract_tokens_are_clean() {
        let extractor = SkillExtractor::default();
        let inputs = [
            "['Python', 'Machine Learning', \"Deep Learning\"]",
            "  ;;(Excel);  [ Tableau ] |'' ",
            "JAVA|Spring Boot|  |Docker  ",
            "()[]\"'",
        ];
        let strip = &extractor.config().strip_chars;

        for input in inputs {
            for token in extractor.extract(Some(input)).iter() {
                let s = token.as_str();
                assert!(!s.is_empty());
                assert_eq!(s, s.to_lowercase());
                let first = s.chars().next().unwrap();
                let last = s.chars().last().unwrap();
                assert!(!first.is_whitespace() && !strip.contains(&first), "{:?}", s);
                assert!(!last.is_whitespace() && !strip.contains(&last), "{:?}", s);
            }
        }
    }

    #[test]
    fn test_extract_python_list_literal() {
        let extractor = SkillExtractor::default();
        let bag = extractor.extract(Some("['Python', 'Machine Learning', \"Deep Learning\"]"));
        assert_eq!(names(&bag), vec!["python", "machine learning", "deep learning"]);
    }

    #[test]
    fn test_custom_delimiters() {
        let extractor = SkillExtractor::new(ExtractorConfig {
            delimiters: vec!['/'],
            strip_chars: vec![],
        });
        let bag = extractor.extract(Some("Rust/Go, C/(SQL)"));
        assert_eq!(names(&bag), vec!["rust", "go, c", "(sql)"]);
    }

    #[test]
    fn test_aggregate_rows() {
        let extractor = SkillExtractor::default();
        let rows = vec![Some("Python, SQL"), None, Some("python; Excel")];
        let table = extractor.aggregate(rows);
        assert_eq!(table.bag_count(), 3);
        assert_eq!(table.count(&SkillToken::parse("python").unwrap()), 2);
        assert_eq!(table.top(1)[0].skill.as_str(), "python");
    }
}
