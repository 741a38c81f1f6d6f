/// Модуль предобработки: разбор текста и отделение меток

pub mod text_table;
pub mod label_split;

pub use text_table::RawTable;
pub use label_split::split_labels;
