//! Minimal FASTA input for the command-line tools.
//!
//! Reads multi-record FASTA: a `>` header line followed by any number of
//! sequence lines. Sequence bytes are uppercased; blank lines are skipped.
//! This covers what the scaffolding pipeline needs and nothing more — no
//! wrapping metadata, no quality lines, no indexing.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use thiserror::Error;

/// One FASTA record: identifier plus raw sequence bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// First whitespace-delimited token of the header line, without `>`.
    pub id: String,
    /// Uppercased sequence bytes, newlines stripped.
    pub seq: Vec<u8>,
}

/// Errors produced while reading FASTA input.
#[derive(Debug, Error)]
pub enum FastaError {
    /// Underlying I/O failure.
    #[error("I/O error reading FASTA: {0}")]
    Io(#[from] std::io::Error),
    /// A header with no sequence lines before the next header or EOF.
    #[error("record '{0}' has no sequence data")]
    EmptyRecord(String),
    /// Sequence data appeared before any `>` header.
    #[error("sequence data before the first '>' header")]
    MissingHeader,
}

/// Reads every record from a FASTA file at `path`.
pub fn read_fasta<P: AsRef<Path>>(path: P) -> Result<Vec<Record>, FastaError> {
    let reader = BufReader::new(File::open(path)?);
    parse_fasta(reader)
}

/// Parses FASTA records from any buffered reader.
pub fn parse_fasta<R: BufRead>(reader: R) -> Result<Vec<Record>, FastaError> {
    let mut records = Vec::new();
    let mut current: Option<Record> = None;

    for line in reader.lines() {
        let line = line?;
        let line = line.trim_end();
        if line.is_empty() {
            continue;
        }
        if let Some(header) = line.strip_prefix('>') {
            if let Some(record) = current.take() {
                if record.seq.is_empty() {
                    return Err(FastaError::EmptyRecord(record.id));
                }
                records.push(record);
            }
            let id = header.split_whitespace().next().unwrap_or("").to_string();
            current = Some(Record {
                id,
                seq: Vec::new(),
            });
        } else {
            match current.as_mut() {
                Some(record) => record
                    .seq
                    .extend(line.bytes().map(|b| b.to_ascii_uppercase())),
                None => return Err(FastaError::MissingHeader),
            }
        }
    }

    if let Some(record) = current.take() {
        if record.seq.is_empty() {
            return Err(FastaError::EmptyRecord(record.id));
        }
        records.push(record);
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn parses_multiple_records() {
        let input = ">contig_1 assembled\nacgt\nACGT\n\n>contig_2\ngg\n";
        let records = parse_fasta(Cursor::new(input)).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id, "contig_1");
        assert_eq!(records[0].seq, b"ACGTACGT");
        assert_eq!(records[1].id, "contig_2");
        assert_eq!(records[1].seq, b"GG");
    }

    #[test]
    fn rejects_sequence_before_header() {
        let err = parse_fasta(Cursor::new("ACGT\n")).unwrap_err();
        assert!(matches!(err, FastaError::MissingHeader));
    }

    #[test]
    fn rejects_header_without_sequence() {
        let err = parse_fasta(Cursor::new(">empty\n>next\nACGT\n")).unwrap_err();
        assert!(matches!(err, FastaError::EmptyRecord(ref id) if id == "empty"));
    }

    #[test]
    fn empty_input_yields_no_records() {
        let records = parse_fasta(Cursor::new("")).unwrap();
        assert!(records.is_empty());
    }
}
