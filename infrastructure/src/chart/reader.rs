//! YAML chart document reader.
//!
//! Searches the resolved chart directory recursively (deterministic,
//! lexicographic traversal, first match wins) for the values and
//! questions documents and parses them with serde_yaml.

use async_trait::async_trait;
use chartq_application::ports::chart_reader::{ChartReaderPort, ReadError};
use chartq_domain::{ConfigTree, QuestionSet};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

const VALUES_FILES: &[&str] = &["values.yaml", "values.yml"];
const QUESTIONS_FILES: &[&str] = &["questions.yaml", "questions.yml"];

#[derive(Debug, Default)]
pub struct YamlChartReader;

impl YamlChartReader {
    pub fn new() -> Self {
        Self
    }

    fn find_first(dir: &Path, names: &[&str]) -> Option<PathBuf> {
        WalkDir::new(dir)
            .sort_by_file_name()
            .into_iter()
            .filter_map(Result::ok)
            .find(|entry| {
                entry.file_type().is_file()
                    && entry
                        .file_name()
                        .to_str()
                        .is_some_and(|name| names.contains(&name))
            })
            .map(|entry| entry.into_path())
    }

    fn read(path: &Path) -> Result<String, ReadError> {
        fs::read_to_string(path).map_err(|e| ReadError::Io(e.kind().to_string()))
    }
}

#[async_trait]
impl ChartReaderPort for YamlChartReader {
    async fn load_values(&self, dir: &Path) -> Result<ConfigTree, ReadError> {
        let Some(path) = Self::find_first(dir, VALUES_FILES) else {
            debug!("No values document found, using empty tree");
            return Ok(ConfigTree::new());
        };

        let contents = Self::read(&path)?;
        serde_yaml::from_str(&contents).map_err(|e| ReadError::Parse(e.to_string()))
    }

    async fn load_questions(&self, dir: &Path) -> Result<Option<QuestionSet>, ReadError> {
        let Some(path) = Self::find_first(dir, QUESTIONS_FILES) else {
            return Ok(None);
        };

        let contents = Self::read(&path)?;
        let questions =
            serde_yaml::from_str(&contents).map_err(|e| ReadError::Parse(e.to_string()))?;
        Ok(Some(questions))
    }
}
