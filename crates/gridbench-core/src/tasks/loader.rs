//! Task loading from JSON files
//!
//! Each task lives in `<data_dir>/taskNNN.json`.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use super::task::{RawTask, Task, TaskId};
use crate::error::{BenchError, BenchResult};

/// Loader for task files in a data directory
pub struct TaskLoader {
    /// Directory holding `taskNNN.json` files
    data_dir: PathBuf,
}

impl TaskLoader {
    /// Create a new task loader for the given data directory
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        Self {
            data_dir: data_dir.as_ref().to_path_buf(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Path of the JSON file for a task
    pub fn task_path(&self, id: TaskId) -> PathBuf {
        self.data_dir.join(format!("{}.json", id.name()))
    }

    /// Load and parse one task
    pub fn load(&self, id: TaskId) -> BenchResult<Task> {
        let path = self.task_path(id);
        if !path.is_file() {
            return Err(BenchError::TaskNotFound { path });
        }

        let content = std::fs::read_to_string(&path)
            .map_err(|e| BenchError::io(format!("Failed to read task file {:?}", path), e))?;

        let task = load_task_from_json(id, &content)?;
        tracing::debug!("Loaded {} with {} examples", id, task.len());
        Ok(task)
    }

    /// Ids of every task file present in the data directory, sorted
    pub fn available_ids(&self, max: u16) -> Vec<TaskId> {
        if !self.data_dir.exists() {
            return Vec::new();
        }

        let mut ids: Vec<TaskId> = WalkDir::new(&self.data_dir)
            .max_depth(1)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .filter_map(|e| Self::task_id_from_path(e.path(), max))
            .collect();

        ids.sort();
        ids
    }

    /// Recognise `taskNNN.json` file names
    fn task_id_from_path(path: &Path, max: u16) -> Option<TaskId> {
        if path.extension().and_then(|e| e.to_str()) != Some("json") {
            return None;
        }
        let stem = path.file_stem()?.to_str()?;
        if !stem.starts_with("task") {
            return None;
        }
        TaskId::parse(stem, max).ok()
    }
}

/// Parse a task from a JSON string (useful for testing)
pub fn load_task_from_json(id: TaskId, json: &str) -> BenchResult<Task> {
    let raw: RawTask = serde_json::from_str(json).map_err(|e| BenchError::TaskParse {
        task: id.name(),
        message: e.to_string(),
    })?;
    Ok(Task::from_raw(id, raw))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const SIMPLE_TASK: &str = r#"{
        "train": [{"input": [[0, 1]], "output": [[1, 0]]}],
        "test": [{"input": [[1, 1]], "output": [[1, 1]]}]
    }"#;

    fn id(n: u16) -> TaskId {
        TaskId::new(n, 400).unwrap()
    }

    #[test]
    fn test_load_task() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("task005.json"), SIMPLE_TASK).unwrap();

        let loader = TaskLoader::new(dir.path());
        let task = loader.load(id(5)).unwrap();
        assert_eq!(task.id, id(5));
        assert_eq!(task.len(), 2);
        assert_eq!(task.examples[0].output.to_rows(), vec![vec![1, 0]]);
    }

    #[test]
    fn test_missing_task_file() {
        let dir = TempDir::new().unwrap();
        let loader = TaskLoader::new(dir.path());
        let err = loader.load(id(9)).unwrap_err();
        assert!(matches!(err, BenchError::TaskNotFound { .. }));
        assert!(err.to_string().contains("task009.json"));
    }

    #[test]
    fn test_malformed_task_file() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("task001.json"), r#"{"train": [}"#).unwrap();
        fs::write(
            dir.path().join("task002.json"),
            r#"{"train": [{"input": [[1], [1, 2]], "output": [[1]]}], "test": []}"#,
        )
        .unwrap();

        let loader = TaskLoader::new(dir.path());
        assert!(matches!(
            loader.load(id(1)).unwrap_err(),
            BenchError::TaskParse { .. }
        ));
        let err = loader.load(id(2)).unwrap_err();
        assert!(err.to_string().contains("task002"));
    }

    #[test]
    fn test_missing_test_key_is_parse_error() {
        let err = load_task_from_json(id(1), r#"{"train": []}"#).unwrap_err();
        assert!(err.to_string().contains("test"));
    }

    #[test]
    fn test_available_ids() {
        let dir = TempDir::new().unwrap();
        for name in ["task003.json", "task001.json", "task401.json", "notes.json", "task002.txt"] {
            fs::write(dir.path().join(name), SIMPLE_TASK).unwrap();
        }

        let loader = TaskLoader::new(dir.path());
        assert_eq!(loader.available_ids(400), vec![id(1), id(3)]);
        assert!(TaskLoader::new(dir.path().join("missing")).available_ids(400).is_empty());
    }
}
