use crate::core::models::atom::AtomRecord;
use crate::core::models::chain::{Structure, StructureBuilder};
use nalgebra::Point3;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PdbError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Parse error on line {line}: {kind}")]
    Parse {
        line: usize,
        kind: PdbParseErrorKind,
    },
}

#[derive(Debug, Error)]
pub enum PdbParseErrorKind {
    #[error("Invalid integer format in columns {columns} (value: '{value}')")]
    InvalidInt { columns: String, value: String },
    #[error("Invalid float format in columns {columns} (value: '{value}')")]
    InvalidFloat { columns: String, value: String },
    #[error("Missing chain identifier in column 22")]
    MissingChainId,
}

fn slice_and_trim(line: &str, start: usize, end: usize) -> &str {
    line.get(start..end).unwrap_or("").trim()
}

/// Parses one fixed-column atom record.
///
/// `line_num` is used for error reporting only. A line whose numeric fields do not
/// parse fails as a whole; there is no partial recovery of a malformed record.
pub fn parse_atom_record(line: &str, line_num: usize) -> Result<AtomRecord, PdbError> {
    let serial_str = slice_and_trim(line, 6, 11);
    let name_str = slice_and_trim(line, 12, 16);
    let res_name_str = slice_and_trim(line, 17, 20);
    let chain_id_str = slice_and_trim(line, 21, 22);
    let res_seq_str = slice_and_trim(line, 22, 26);
    let insertion_str = slice_and_trim(line, 26, 27);
    let x_str = slice_and_trim(line, 30, 38);
    let y_str = slice_and_trim(line, 38, 46);
    let z_str = slice_and_trim(line, 46, 54);
    let occupancy_str = slice_and_trim(line, 54, 60);
    let confidence_str = slice_and_trim(line, 60, 66);

    let serial: usize = serial_str.parse().map_err(|_| PdbError::Parse {
        line: line_num,
        kind: PdbParseErrorKind::InvalidInt {
            columns: "7-11".into(),
            value: serial_str.into(),
        },
    })?;
    let chain_id: char = chain_id_str
        .chars()
        .next()
        .ok_or(PdbError::Parse {
            line: line_num,
            kind: PdbParseErrorKind::MissingChainId,
        })?;
    let res_seq: isize = res_seq_str.parse().map_err(|_| PdbError::Parse {
        line: line_num,
        kind: PdbParseErrorKind::InvalidInt {
            columns: "23-26".into(),
            value: res_seq_str.into(),
        },
    })?;

    let parse_float = |value: &str, columns: &str| -> Result<f64, PdbError> {
        value.parse().map_err(|_| PdbError::Parse {
            line: line_num,
            kind: PdbParseErrorKind::InvalidFloat {
                columns: columns.into(),
                value: value.into(),
            },
        })
    };
    let x = parse_float(x_str, "31-38")?;
    let y = parse_float(y_str, "39-46")?;
    let z = parse_float(z_str, "47-54")?;
    let occupancy = parse_float(occupancy_str, "55-60")?;
    let confidence = parse_float(confidence_str, "61-66")?;

    Ok(AtomRecord {
        serial,
        name: name_str.to_string(),
        res_name: res_name_str.to_string(),
        chain_id,
        res_seq,
        insertion_code: insertion_str.chars().next(),
        position: Point3::new(x, y, z),
        occupancy,
        confidence,
    })
}

/// Reads a predicted structure from a fixed-column record stream.
///
/// Only lines whose record kind (columns 1-6) contains `ATOM` are considered;
/// every other line, including `HETATM` records, is ignored. Chains are grouped
/// in first-seen order with chain-local residue indexing.
///
/// # Errors
///
/// Returns a [`PdbError`] on I/O failure or on the first malformed atom record.
pub fn read_structure(reader: &mut impl BufRead) -> Result<Structure, PdbError> {
    let mut builder = StructureBuilder::new();

    for (line_num, line_res) in reader.lines().enumerate() {
        let line = line_res?;
        let line_num = line_num + 1;

        let record_kind = slice_and_trim(&line, 0, 6);
        if !record_kind.contains("ATOM") {
            continue;
        }

        let record = parse_atom_record(&line, line_num)?;
        builder.add_record(&record);
    }

    Ok(builder.build())
}

/// Reads a predicted structure from a file path.
pub fn read_structure_from_path<P: AsRef<Path>>(path: P) -> Result<Structure, PdbError> {
    let file = File::open(path)?;
    let mut reader = BufReader::new(file);
    read_structure(&mut reader)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn atom_line(
        serial: usize,
        name: &str,
        res_name: &str,
        chain: char,
        res_seq: isize,
        pos: (f64, f64, f64),
        confidence: f64,
    ) -> String {
        format!(
            "ATOM  {:>5} {:<4} {:<3} {}{:>4}    {:>8.3}{:>8.3}{:>8.3}{:>6.2}{:>6.2}",
            serial, name, res_name, chain, res_seq, pos.0, pos.1, pos.2, 1.00, confidence
        )
    }

    #[test]
    fn atom_record_fields_come_from_their_columns() {
        let line = atom_line(7, "CB", "LEU", 'B', 42, (1.5, -2.25, 300.125), 87.5);
        let record = parse_atom_record(&line, 1).unwrap();

        assert_eq!(record.serial, 7);
        assert_eq!(record.name, "CB");
        assert_eq!(record.res_name, "LEU");
        assert_eq!(record.chain_id, 'B');
        assert_eq!(record.res_seq, 42);
        assert_eq!(record.insertion_code, None);
        assert_eq!(record.position, Point3::new(1.5, -2.25, 300.125));
        assert_eq!(record.occupancy, 1.0);
        assert_eq!(record.confidence, 87.5);
    }

    #[test]
    fn structure_groups_chains_and_indexes_representatives() {
        let text = [
            atom_line(1, "N", "ALA", 'A', 1, (0.0, 0.0, 0.0), 91.0),
            atom_line(2, "CA", "ALA", 'A', 1, (1.0, 0.0, 0.0), 92.0),
            atom_line(3, "CB", "ALA", 'A', 1, (2.0, 0.0, 0.0), 93.0),
            atom_line(4, "CA", "GLY", 'B', 1, (3.0, 0.0, 0.0), 94.0),
        ]
        .join("\n");

        let structure = read_structure(&mut Cursor::new(text)).unwrap();
        assert_eq!(structure.chain_count(), 2);

        let a = structure.find_chain_by_id('A').unwrap();
        assert_eq!(a.coords().len(), 3);
        assert_eq!(a.ca_indices(), &[1]);
        assert_eq!(a.cb_indices(), &[2]);
        assert_eq!(a.cb_confidences(), vec![93.0]);

        let b = structure.find_chain_by_id('B').unwrap();
        assert_eq!(b.ca_indices(), &[0]);
        assert_eq!(b.cb_indices(), &[0]);
    }

    #[test]
    fn non_atom_lines_are_ignored() {
        let text = [
            "REMARK generated by a structure predictor".to_string(),
            atom_line(1, "CA", "ALA", 'A', 1, (0.0, 0.0, 0.0), 90.0),
            "TER".to_string(),
            format!(
                "HETATM{:>5} {:<4} {:<3} {}{:>4}    {:>8.3}{:>8.3}{:>8.3}{:>6.2}{:>6.2}",
                2, "O", "HOH", 'A', 2, 5.0, 5.0, 5.0, 1.00, 0.0
            ),
            "END".to_string(),
        ]
        .join("\n");

        let structure = read_structure(&mut Cursor::new(text)).unwrap();
        assert_eq!(structure.chain_count(), 1);
        assert_eq!(structure.chains()[0].coords().len(), 1);
    }

    #[test]
    fn malformed_coordinate_reports_its_line() {
        let good = atom_line(1, "CA", "ALA", 'A', 1, (0.0, 0.0, 0.0), 90.0);
        let mut bad = atom_line(2, "CA", "ALA", 'A', 2, (0.0, 0.0, 0.0), 90.0);
        bad.replace_range(30..38, "  oops  ");
        let text = format!("{}\n{}", good, bad);

        let err = read_structure(&mut Cursor::new(text)).unwrap_err();
        match err {
            PdbError::Parse { line, kind } => {
                assert_eq!(line, 2);
                assert!(matches!(kind, PdbParseErrorKind::InvalidFloat { .. }));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn missing_chain_identifier_is_rejected() {
        let mut line = atom_line(1, "CA", "ALA", 'A', 1, (0.0, 0.0, 0.0), 90.0);
        line.replace_range(21..22, " ");

        let err = parse_atom_record(&line, 3).unwrap_err();
        match err {
            PdbError::Parse { line, kind } => {
                assert_eq!(line, 3);
                assert!(matches!(kind, PdbParseErrorKind::MissingChainId));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn insertion_code_is_captured_when_present() {
        let mut line = atom_line(1, "CA", "ALA", 'A', 1, (0.0, 0.0, 0.0), 90.0);
        line.replace_range(26..27, "B");
        let record = parse_atom_record(&line, 1).unwrap();
        assert_eq!(record.insertion_code, Some('B'));
    }
}
