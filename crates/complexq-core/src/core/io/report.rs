use serde::Serialize;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("CSV serialization error: {0}")]
    Csv(#[from] csv::Error),
}

/// Writes records as a CSV table with a header row.
///
/// Missing optional values serialize as empty cells, never as a numeric stand-in.
pub fn write_records<T: Serialize, W: Write>(writer: W, records: &[T]) -> Result<(), ReportError> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for record in records {
        csv_writer.serialize(record)?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Writes records as a CSV table to a file path.
pub fn write_records_to_path<T: Serialize, P: AsRef<Path>>(
    path: P,
    records: &[T],
) -> Result<(), ReportError> {
    let file = File::create(path)?;
    write_records(BufWriter::new(file), records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;

    #[derive(Serialize)]
    struct Row {
        id: String,
        score: f64,
        iptm: Option<f64>,
    }

    fn render(records: &[Row]) -> String {
        let mut buffer = Vec::new();
        write_records(&mut buffer, records).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn header_and_rows_are_emitted_in_order() {
        let rows = vec![
            Row {
                id: "a".into(),
                score: 0.9,
                iptm: Some(0.5),
            },
            Row {
                id: "b".into(),
                score: 0.2,
                iptm: Some(0.99),
            },
        ];
        let text = render(&rows);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "id,score,iptm");
        assert_eq!(lines[1], "a,0.9,0.5");
        assert_eq!(lines[2], "b,0.2,0.99");
    }

    #[test]
    fn missing_values_are_empty_cells() {
        let rows = vec![Row {
            id: "a".into(),
            score: 0.0,
            iptm: None,
        }];
        let text = render(&rows);
        assert_eq!(text.lines().nth(1), Some("a,0.0,"));
    }
}
