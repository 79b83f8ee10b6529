use csv::ReaderBuilder;
use serde::Serialize;
use std::io::Read;
use std::path::{Path, PathBuf};

use crate::analysis::SkillExtractor;
use crate::error::{Error, Result};
use crate::models::frequency::SkillFrequencyTable;

/// Where a dataset lives and which column holds its free-text skills.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetSpec {
    pub name: String,
    pub path: PathBuf,
    pub skill_column: String,
}

/// The first rows of a dataset, for eyeballing the raw data.
#[derive(Debug, Clone, Serialize)]
pub struct DatasetPreview {
    pub name: String,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
    pub total_rows: usize,
}

/// A loaded CSV table with a resolved skill column.
#[derive(Debug, Clone)]
pub struct Dataset {
    name: String,
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
    skill_column: usize,
}

impl Dataset {
    pub fn load(spec: &DatasetSpec) -> Result<Self> {
        let file = std::fs::File::open(&spec.path).map_err(|e| {
            tracing::error!("Cannot open dataset '{}' at {}", spec.name, spec.path.display());
            e
        })?;
        let dataset = Self::from_reader(&spec.name, &spec.skill_column, file)?;
        tracing::info!(
            "Loaded {} rows from {} ({})",
            dataset.len(),
            spec.path.display(),
            spec.name
        );
        Ok(dataset)
    }

    pub fn from_path<P: AsRef<Path>>(name: &str, skill_column: &str, path: P) -> Result<Self> {
        Self::load(&DatasetSpec {
            name: name.to_string(),
            path: path.as_ref().to_path_buf(),
            skill_column: skill_column.to_string(),
        })
    }

    /// Reads a headed CSV. The skill column is matched by exact header name.
    pub fn from_reader<R: Read>(name: &str, skill_column: &str, reader: R) -> Result<Self> {
        let mut csv_reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(csv::Trim::Headers)
            .from_reader(reader);

        let headers: Vec<String> = csv_reader.headers()?.iter().map(String::from).collect();

        let skill_column = headers
            .iter()
            .position(|h| h == skill_column)
            .ok_or_else(|| Error::MissingColumn {
                dataset: name.to_string(),
                column: skill_column.to_string(),
            })?;

        let mut rows = Vec::new();
        for record in csv_reader.records() {
            let record = record?;
            rows.push(record.iter().map(String::from).collect());
        }

        Ok(Self {
            name: name.to_string(),
            headers,
            rows,
            skill_column,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The skill cell of every row. Blank or short rows give `None`.
    pub fn skill_texts(&self) -> impl Iterator<Item = Option<&str>> {
        let column = self.skill_column;
        self.rows.iter().map(move |row| {
            row.get(column)
                .map(String::as_str)
                .filter(|cell| !cell.trim().is_empty())
        })
    }

    pub fn frequency_table(&self, extractor: &SkillExtractor) -> SkillFrequencyTable {
        extractor.aggregate(self.skill_texts())
    }

    pub fn preview(&self, n: usize) -> DatasetPreview {
        DatasetPreview {
            name: self.name.clone(),
            headers: self.headers.clone(),
            rows: self.rows.iter().take(n).cloned().collect(),
            total_rows: self.rows.len(),
        }
    }
}
