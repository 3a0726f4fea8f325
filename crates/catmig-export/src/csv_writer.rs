//! RFC 4180 serialization of the row set.

use csv::{QuoteStyle, Terminator, WriterBuilder};

use crate::columns::ExportRow;
use crate::error::ExportError;

/// Serializes the header row followed by `rows` as UTF-8 CSV.
///
/// A cell is quoted only when it contains a comma, a double quote, `\r` or
/// `\n`; embedded quotes are doubled. Rows are separated by CRLF with no
/// terminator after the last row.
///
/// # Errors
///
/// Returns [`ExportError::Csv`] if a row does not match the header width.
pub fn write_csv(rows: &[ExportRow]) -> Result<Vec<u8>, ExportError> {
    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Necessary)
        .terminator(Terminator::CRLF)
        .from_writer(Vec::new());

    writer.write_record(ExportRow::header().cells())?;
    for row in rows {
        writer.write_record(row.cells())?;
    }

    let mut bytes = writer
        .into_inner()
        .map_err(|e| csv::Error::from(e.into_error()))?;
    if bytes.ends_with(b"\r\n") {
        bytes.truncate(bytes.len() - 2);
    }
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::columns::Column;

    fn text(bytes: Vec<u8>) -> String {
        String::from_utf8(bytes).expect("utf-8 output")
    }

    #[test]
    fn header_only_when_no_rows() {
        let out = text(write_csv(&[]).unwrap());
        assert!(out.starts_with("Title,URL handle,Description,"));
        assert!(!out.contains("\r\n"));
        assert!(!out.ends_with('\n'));
    }

    #[test]
    fn rows_are_crlf_separated_without_trailing_terminator() {
        let mut row = ExportRow::new();
        row.set(Column::Title, "Tea");
        let out = text(write_csv(&[row.clone(), row]).unwrap());
        assert_eq!(out.matches("\r\n").count(), 2);
        assert!(out.ends_with(",,,"));
    }

    #[test]
    fn plain_cells_are_not_quoted() {
        let mut row = ExportRow::new();
        row.set(Column::Title, "Green Tea");
        let out = text(write_csv(&[row]).unwrap());
        let line = out.split("\r\n").nth(1).unwrap();
        assert!(line.starts_with("Green Tea,,"));
    }

    #[test]
    fn special_cells_are_quoted_and_escaped() {
        let mut row = ExportRow::new();
        row.set(Column::Title, "He said \"hi\", ok");
        row.set(Column::Description, "line one\nline two");
        let out = text(write_csv(&[row]).unwrap());
        assert!(out.contains("\"He said \"\"hi\"\", ok\""));
        assert!(out.contains("\"line one\nline two\""));
    }
}
