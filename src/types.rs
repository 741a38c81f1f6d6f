/// Типы данных для загрузчика

use ndarray::{Array1, Array2};
use serde::Serialize;

/// Четвёрка (train features, train labels, test features, test labels)
pub type SplitArrays = (Array2<f64>, Array1<f64>, Array2<f64>, Array1<f64>);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SplitKind {
    Train,
    Test,
}

impl SplitKind {
    pub fn file_suffix(self) -> &'static str {
        match self {
            SplitKind::Train => "_TRAIN.txt",
            SplitKind::Test => "_TEST.txt",
        }
    }
}

/// Одна часть датасета: признаки по строкам и метки
#[derive(Debug, Clone, PartialEq)]
pub struct LabeledSplit {
    pub features: Array2<f64>,
    pub labels: Array1<f64>,
}

impl LabeledSplit {
    pub fn n_samples(&self) -> usize {
        self.labels.len()
    }

    pub fn n_features(&self) -> usize {
        self.features.ncols()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TrainTestSplit {
    pub train: LabeledSplit,
    pub test: LabeledSplit,
}

impl TrainTestSplit {
    pub fn into_arrays(self) -> SplitArrays {
        (
            self.train.features,
            self.train.labels,
            self.test.features,
            self.test.labels,
        )
    }

    pub fn summary(&self, name: &str) -> DatasetSummary {
        let mut classes: Vec<f64> = self
            .train
            .labels
            .iter()
            .chain(self.test.labels.iter())
            .copied()
            .collect();
        classes.sort_by(|a, b| a.total_cmp(b));
        classes.dedup_by(|a, b| a.total_cmp(b).is_eq());

        DatasetSummary {
            name: name.to_string(),
            train_samples: self.train.n_samples(),
            test_samples: self.test.n_samples(),
            n_features: self.train.n_features(),
            classes,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DatasetSummary {
    pub name: String,
    pub train_samples: usize,
    pub test_samples: usize,
    pub n_features: usize,
    pub classes: Vec<f64>,
}
