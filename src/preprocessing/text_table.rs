//! Разбор числовой таблицы из текста, разделённого пробелами

use std::io::BufRead;

use ndarray::{Array2, ArrayView2};

use crate::error::ParseError;

const COMMENT: char = '#';

/// Таблица как она есть в файле, до отделения меток
#[derive(Debug, Clone, PartialEq)]
pub struct RawTable {
    data: Array2<f64>,
}

impl RawTable {
    pub fn parse_str(text: &str) -> Result<Self, ParseError> {
        let mut builder = TableBuilder::default();
        for (i, line) in text.lines().enumerate() {
            builder.push_line(i + 1, line)?;
        }
        builder.finish()
    }

    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, ParseError> {
        let mut builder = TableBuilder::default();
        for (i, bytes) in reader.split(b'\n').enumerate() {
            let bytes = bytes?;
            let line = std::str::from_utf8(&bytes)
                .map_err(|_| ParseError::InvalidUtf8 { line: i + 1 })?;
            builder.push_line(i + 1, line)?;
        }
        builder.finish()
    }

    pub fn nrows(&self) -> usize {
        self.data.nrows()
    }

    pub fn ncols(&self) -> usize {
        self.data.ncols()
    }

    pub fn view(&self) -> ArrayView2<'_, f64> {
        self.data.view()
    }

    pub fn into_inner(self) -> Array2<f64> {
        self.data
    }
}

#[derive(Default)]
struct TableBuilder {
    values: Vec<f64>,
    ncols: Option<usize>,
    nrows: usize,
}

impl TableBuilder {
    fn push_line(&mut self, line_no: usize, line: &str) -> Result<(), ParseError> {
        let content = match line.find(COMMENT) {
            Some(pos) => &line[..pos],
            None => line,
        };

        let start = self.values.len();
        for (column, token) in content.split_whitespace().enumerate() {
            let value = token.parse::<f64>().map_err(|_| ParseError::InvalidNumber {
                line: line_no,
                column: column + 1,
                token: token.to_string(),
            })?;
            self.values.push(value);
        }

        let found = self.values.len() - start;
        if found == 0 {
            // Пустая строка или только комментарий
            return Ok(());
        }

        match self.ncols {
            None => self.ncols = Some(found),
            Some(expected) if expected != found => {
                return Err(ParseError::RaggedRow {
                    line: line_no,
                    expected,
                    found,
                });
            }
            Some(_) => {}
        }

        self.nrows += 1;
        Ok(())
    }

    fn finish(self) -> Result<RawTable, ParseError> {
        let ncols = self.ncols.ok_or(ParseError::Empty)?;
        let data = Array2::from_shape_vec((self.nrows, ncols), self.values)?;
        Ok(RawTable { data })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_parse_minimal_table() {
        let table = RawTable::parse_str("1 0.5 0.2\n2 0.1 0.9\n").unwrap();
        assert_eq!(table.nrows(), 2);
        assert_eq!(table.ncols(), 3);
        assert_eq!(table.into_inner(), array![[1.0, 0.5, 0.2], [2.0, 0.1, 0.9]]);
    }

    #[test]
    fn test_mixed_whitespace_and_exponents() {
        let table = RawTable::parse_str("  1\t-1.5e-1   2E2\r\n0 +3 .25").unwrap();
        assert_eq!(table.into_inner(), array![[1.0, -0.15, 200.0], [0.0, 3.0, 0.25]]);
    }

    #[test]
    fn test_skips_blank_lines_and_comments() {
        let text = "# header\n\n1 2 3 # trailing\n   \n4 5 6\n";
        let table = RawTable::parse_str(text).unwrap();
        assert_eq!(table.into_inner(), array![[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]);
    }

    #[test]
    fn test_non_numeric_token() {
        let err = RawTable::parse_str("1 abc 0.2\n").unwrap_err();
        match err {
            ParseError::InvalidNumber { line, column, token } => {
                assert_eq!(line, 1);
                assert_eq!(column, 2);
                assert_eq!(token, "abc");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_ragged_rows() {
        let err = RawTable::parse_str("1 2 3\n\n4 5\n").unwrap_err();
        match err {
            ParseError::RaggedRow { line, expected, found } => {
                assert_eq!(line, 3);
                assert_eq!(expected, 3);
                assert_eq!(found, 2);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_empty_input() {
        assert!(matches!(RawTable::parse_str(""), Err(ParseError::Empty)));
        assert!(matches!(RawTable::parse_str("# only\n\n"), Err(ParseError::Empty)));
    }

    #[test]
    fn test_from_reader_rejects_invalid_utf8() {
        let bytes: &[u8] = b"1 0.5 0.2\n2 0.5 \xff\n";
        let err = RawTable::from_reader(bytes).unwrap_err();
        assert!(matches!(err, ParseError::InvalidUtf8 { line: 2 }));
    }

    #[test]
    fn test_from_reader_handles_crlf_and_missing_final_newline() {
        let table = RawTable::from_reader("1 2\r\n3 4".as_bytes()).unwrap();
        assert_eq!(table.into_inner(), array![[1.0, 2.0], [3.0, 4.0]]);
    }

    #[test]
    fn test_from_reader_matches_parse_str() {
        let text = "3 0.1 0.2 0.3\n1 0.4 0.5 0.6\n";
        let from_reader = RawTable::from_reader(text.as_bytes()).unwrap();
        assert_eq!(from_reader, RawTable::parse_str(text).unwrap());
    }
}
