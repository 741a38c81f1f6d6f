//! ts-splits - загрузка размеченных временных рядов (TRAIN/TEST)

pub mod error;
pub mod types;
pub mod preprocessing;
pub mod loaders;

pub use error::{DatasetError, ParseError};
pub use types::*;
pub use preprocessing::{split_labels, RawTable};
pub use loaders::*;
