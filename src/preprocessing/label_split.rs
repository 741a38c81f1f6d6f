//! Отделение меток (столбец 0) от признаков

use ndarray::s;

use crate::preprocessing::RawTable;
use crate::types::LabeledSplit;

/// Столбец 0 -> метки, столбцы 1.. -> признаки в исходном порядке.
/// Таблица всегда содержит хотя бы один столбец, так что разбиение тотально.
pub fn split_labels(table: &RawTable) -> LabeledSplit {
    let view = table.view();
    LabeledSplit {
        labels: view.column(0).to_owned(),
        features: view.slice(s![.., 1..]).to_owned(),
    }
}
