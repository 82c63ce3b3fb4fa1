use crate::models::{AnswerView, ModelError, QueryResponse};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid answers directory: {0}")]
    InvalidAnswersDir(String),
    #[error("Unsupported answer file: {0}")]
    UnsupportedExtension(PathBuf),
    #[error(transparent)]
    Model(#[from] ModelError),
}

/// How an answer file's content is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerFormat {
    /// A saved `/query` JSON response.
    Response,
    /// Bare answer text.
    Raw,
}

impl AnswerFormat {
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()? {
            "json" => Some(Self::Response),
            "txt" | "md" => Some(Self::Raw),
            _ => None,
        }
    }
}

/// Read an answer file and turn it into a view
pub fn read_answer(path: &Path) -> Result<AnswerView, IoError> {
    let format = AnswerFormat::from_path(path)
        .ok_or_else(|| IoError::UnsupportedExtension(path.to_path_buf()))?;
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    let content = fs::read_to_string(path)?;

    let view = match format {
        AnswerFormat::Response => AnswerView::from_response(&QueryResponse::from_json(&content)?),
        AnswerFormat::Raw => AnswerView::from_raw(&content),
    };
    log::debug!("read answer {} as {format:?}", path.display());
    Ok(view)
}

/// Scan for answer files in the answers directory
pub fn scan_answer_files(answers_root: &Path) -> Result<Vec<PathBuf>, IoError> {
    if !answers_root.exists() {
        return Err(IoError::InvalidAnswersDir(
            "answers directory not found".to_string(),
        ));
    }

    let mut files = Vec::new();
    scan_directory_recursive(answers_root, &mut files)?;
    files.sort();
    Ok(files)
}

fn scan_directory_recursive(dir: &Path, files: &mut Vec<PathBuf>) -> Result<(), IoError> {
    let entries = fs::read_dir(dir)?;

    for entry in entries {
        let entry = entry?;
        let path = entry.path();

        if path.is_dir() {
            scan_directory_recursive(&path, files)?;
        } else if AnswerFormat::from_path(&path).is_some() {
            files.push(path);
        } else {
            log::trace!("skipping {}", path.display());
        }
    }

    Ok(())
}

pub fn validate_answers_dir(path: &Path) -> Result<(), IoError> {
    if !path.exists() || !path.is_dir() {
        return Err(IoError::InvalidAnswersDir(
            "Directory does not exist".to_string(),
        ));
    }

    Ok(())
}
