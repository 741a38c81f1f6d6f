//! Ошибки загрузки датасетов

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Ошибка разбора текстовой таблицы
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("line {line}, column {column}: could not parse `{token}` as a number")]
    InvalidNumber {
        line: usize,
        column: usize,
        token: String,
    },

    #[error("line {line}: expected {expected} columns, found {found}")]
    RaggedRow {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("line {line}: not valid UTF-8")]
    InvalidUtf8 { line: usize },

    #[error("no data rows")]
    Empty,

    #[error("table shape")]
    Shape(#[from] ndarray::ShapeError),

    #[error("read failed")]
    Io(#[from] io::Error),
}

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("file not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed numeric text in {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: ParseError,
    },

    #[error("train split has {train} feature columns but test split has {test}")]
    ShapeMismatch { train: usize, test: usize },
}

impl DatasetError {
    pub(crate) fn from_io(path: PathBuf, source: io::Error) -> Self {
        if source.kind() == io::ErrorKind::NotFound {
            DatasetError::NotFound { path }
        } else {
            DatasetError::Io { path, source }
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, DatasetError::NotFound { .. })
    }

    pub fn is_parse(&self) -> bool {
        matches!(self, DatasetError::Parse { .. })
    }
}
