//! Загрузка пары TRAIN/TEST в формате архива UCR

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use crate::error::{DatasetError, ParseError};
use crate::preprocessing::{split_labels, RawTable};
use crate::types::{LabeledSplit, SplitArrays, SplitKind, TrainTestSplit};

pub const DATASETS_DIR: &str = "datasets";
pub const ARROWHEAD: &str = "ArrowHead";

/// Расположение файлов датасета: `<root>/<name>_TRAIN.txt` и `<root>/<name>_TEST.txt`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetPaths {
    root: PathBuf,
    name: String,
}

impl DatasetPaths {
    pub fn new(root: impl Into<PathBuf>, name: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            name: name.into(),
        }
    }

    pub fn arrowhead() -> Self {
        Self::new(DATASETS_DIR, ARROWHEAD)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn path_for(&self, kind: SplitKind) -> PathBuf {
        self.root
            .join(format!("{}{}", self.name, kind.file_suffix()))
    }

    pub fn train_path(&self) -> PathBuf {
        self.path_for(SplitKind::Train)
    }

    pub fn test_path(&self) -> PathBuf {
        self.path_for(SplitKind::Test)
    }
}

pub fn load_table(path: impl AsRef<Path>) -> Result<RawTable, DatasetError> {
    let path = path.as_ref();
    tracing::debug!("Reading {}", path.display());

    let file = File::open(path).map_err(|e| DatasetError::from_io(path.to_path_buf(), e))?;

    RawTable::from_reader(BufReader::new(file)).map_err(|source| match source {
        // Сбой чтения остаётся ошибкой ввода-вывода
        ParseError::Io(e) => DatasetError::from_io(path.to_path_buf(), e),
        source => DatasetError::Parse {
            path: path.to_path_buf(),
            source,
        },
    })
}

pub fn load_split(path: impl AsRef<Path>) -> Result<LabeledSplit, DatasetError> {
    let table = load_table(path)?;
    Ok(split_labels(&table))
}

pub fn load_dataset(paths: &DatasetPaths) -> Result<TrainTestSplit, DatasetError> {
    let train = load_split(paths.train_path())?;
    let test = load_split(paths.test_path())?;

    if train.n_features() != test.n_features() {
        return Err(DatasetError::ShapeMismatch {
            train: train.n_features(),
            test: test.n_features(),
        });
    }

    tracing::info!(
        "Loaded {}: train {:?}, test {:?}",
        paths.name(),
        train.features.dim(),
        test.features.dim()
    );

    Ok(TrainTestSplit { train, test })
}

/// `datasets/ArrowHead_TRAIN.txt` и `datasets/ArrowHead_TEST.txt` относительно рабочей директории.
/// Возвращает (train features, train labels, test features, test labels).
pub fn load_arrowhead_data() -> Result<SplitArrays, DatasetError> {
    load_dataset(&DatasetPaths::arrowhead()).map(TrainTestSplit::into_arrays)
}
