/// Загрузчики датасетов

pub mod ucr;

pub use ucr::{
    load_arrowhead_data, load_dataset, load_split, load_table, DatasetPaths, ARROWHEAD,
    DATASETS_DIR,
};
