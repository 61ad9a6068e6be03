//! Reading and writing tab-delimited record files.

use std::io::Write;
use std::path::Path;

use crate::error::{RecordError, Result};
use crate::record::Record;

/// Default prefix marking metadata lines.
pub const DEFAULT_COMMENT_PREFIX: &str = "#";

/// Options controlling how an input file is read.
#[derive(Debug, Clone)]
pub struct ReadOptions {
    /// Lines starting with this prefix are metadata and skipped.
    pub comment_prefix: String,
    /// Column that must be present in the header, if any.
    pub required_column: Option<String>,
}

impl Default for ReadOptions {
    fn default() -> Self {
        Self {
            comment_prefix: DEFAULT_COMMENT_PREFIX.to_string(),
            required_column: None,
        }
    }
}

impl ReadOptions {
    /// Builder: require `column` in the header.
    pub fn require_column(mut self, column: impl Into<String>) -> Self {
        self.required_column = Some(column.into());
        self
    }

    /// Builder: set the metadata prefix.
    pub fn with_comment_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.comment_prefix = prefix.into();
        self
    }
}

/// A parsed input file: its header and rows.
#[derive(Debug, Clone, Default)]
pub struct RecordFile {
    /// Column names in file order.
    pub header: Vec<String>,
    /// Data rows.
    pub records: Vec<Record>,
}

/// Read a record file from disk.
pub fn read_records(path: &Path, options: &ReadOptions) -> Result<RecordFile> {
    let content = std::fs::read_to_string(path).map_err(|source| RecordError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let body: String = content
        .lines()
        .filter(|line| !line.starts_with(options.comment_prefix.as_str()))
        .filter(|line| !line.trim().is_empty())
        .map(|line| format!("{line}\n"))
        .collect();

    if body.is_empty() {
        return Err(RecordError::MissingHeader {
            path: path.to_path_buf(),
        });
    }

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(true)
        .flexible(true)
        .quoting(false)
        .trim(csv::Trim::Fields)
        .from_reader(body.as_bytes());

    let header: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();

    if let Some(column) = &options.required_column {
        if !header.iter().any(|h| h == column) {
            return Err(RecordError::MissingCodeColumn {
                path: path.to_path_buf(),
                column: column.clone(),
            });
        }
    }

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row?;
        // Short rows leave trailing columns absent; extra fields are dropped.
        records.push(Record::from_pairs(
            header.iter().cloned().zip(row.iter().map(str::to_string)),
        ));
    }

    tracing::info!(
        path = %path.display(),
        columns = header.len(),
        records = records.len(),
        "loaded input records"
    );
    Ok(RecordFile { header, records })
}

/// Write records to `path` with the given header.
pub fn write_records(path: &Path, header: &[String], records: &[Record]) -> Result<()> {
    let file = std::fs::File::create(path).map_err(|source| RecordError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    write_to(file, header, records).map_err(|e| match e {
        RecordError::Csv(source) => RecordError::Write {
            path: path.to_path_buf(),
            source,
        },
        other => other,
    })?;
    tracing::info!(path = %path.display(), records = records.len(), "wrote output records");
    Ok(())
}

/// Write records to any writer: the header line, then one line per record.
pub fn write_to<W: Write>(out: W, header: &[String], records: &[Record]) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(b'\t')
        .quote_style(csv::QuoteStyle::Never)
        .terminator(csv::Terminator::Any(b'\n'))
        .flexible(true)
        .from_writer(out);

    writer.write_record(header)?;
    for record in records {
        writer.write_record(header.iter().map(|column| record.get(column).unwrap_or("")))?;
    }
    writer.flush().map_err(csv::Error::from)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "#Sample Identifier\tCancer Type\tOncotree Code\n\
#STRING\tSTRING\tSTRING\n\
SAMPLE_ID\tCANCER_TYPE\tONCOTREE_CODE\n\
S-1\tLeukemia\tALL\n\
S-2\tBreast Cancer\tBRCA \n\
\n\
S-3\tUnknown\n";

    fn write_sample(dir: &Path) -> std::path::PathBuf {
        let path = dir.join("data_clinical_sample.txt");
        std::fs::write(&path, SAMPLE).unwrap();
        path
    }

    #[test]
    fn read_skips_metadata_and_blank_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_sample(dir.path());

        let file = read_records(&path, &ReadOptions::default()).unwrap();
        assert_eq!(file.header, ["SAMPLE_ID", "CANCER_TYPE", "ONCOTREE_CODE"]);
        assert_eq!(file.records.len(), 3);
        assert_eq!(file.records[0].get("ONCOTREE_CODE"), Some("ALL"));
        // Trailing whitespace is trimmed.
        assert_eq!(file.records[1].get("ONCOTREE_CODE"), Some("BRCA"));
        // Short row leaves the column absent.
        assert_eq!(file.records[2].get("ONCOTREE_CODE"), None);
    }

    #[test]
    fn header_names_are_kept_verbatim() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("in.txt");
        std::fs::write(&path, "SAMPLE_ID\tONCOTREE_CODE \nS-1\t BLL \n").unwrap();
        let file = read_records(&path, &ReadOptions::default()).unwrap();
        assert_eq!(file.header, ["SAMPLE_ID", "ONCOTREE_CODE "]);
        assert_eq!(file.records[0].get("ONCOTREE_CODE "), Some("BLL"));

        let options = ReadOptions::default().require_column("ONCOTREE_CODE");
        let err = read_records(&path, &options).unwrap_err();
        assert!(matches!(err, RecordError::MissingCodeColumn { .. }));
    }

    #[test]
    fn required_column_missing() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_sample(dir.path());

        let options = ReadOptions::default().require_column("CODE");
        let err = read_records(&path, &options).unwrap_err();
        assert!(matches!(err, RecordError::MissingCodeColumn { column, .. } if column == "CODE"));

        let options = ReadOptions::default().require_column("ONCOTREE_CODE");
        assert!(read_records(&path, &options).is_ok());
    }

    #[test]
    fn metadata_only_file_has_no_header() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.txt");
        std::fs::write(&path, "#only metadata\n\n").unwrap();
        let err = read_records(&path, &ReadOptions::default()).unwrap_err();
        assert!(matches!(err, RecordError::MissingHeader { .. }));
    }

    #[test]
    fn custom_comment_prefix() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("in.txt");
        std::fs::write(&path, "//meta\nA\tB\n1\t2\n").unwrap();
        let file = read_records(&path, &ReadOptions::default().with_comment_prefix("//")).unwrap();
        assert_eq!(file.header, ["A", "B"]);
        assert_eq!(file.records[0].get("B"), Some("2"));
    }

    #[test]
    fn missing_input_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_records(&dir.path().join("nope.txt"), &ReadOptions::default()).unwrap_err();
        assert!(matches!(err, RecordError::Io { .. }));
    }

    #[test]
    fn write_fills_missing_columns() {
        let header = vec![
            "SAMPLE_ID".to_string(),
            "ONCOTREE_CODE".to_string(),
            "NOTES".to_string(),
        ];
        let records = vec![
            Record::from_pairs([("SAMPLE_ID", "S-1"), ("ONCOTREE_CODE", "BLL")]),
            Record::from_pairs([("SAMPLE_ID", "S-2"), ("ONCOTREE_CODE", ""), ("NOTES", "x")]),
        ];
        let mut out = Vec::new();
        write_to(&mut out, &header, &records).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "SAMPLE_ID\tONCOTREE_CODE\tNOTES\nS-1\tBLL\t\nS-2\t\tx\n"
        );
    }

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
        }
    }

    #[test]
    fn writer_failure_is_csv_error() {
        let header = vec!["ONCOTREE_CODE".to_string()];
        let records = vec![Record::from_pairs([("ONCOTREE_CODE", "BLL")])];
        let err = write_to(BrokenPipe, &header, &records).unwrap_err();
        assert!(matches!(err, RecordError::Csv(_)));
    }

    #[test]
    fn unwritable_output_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("missing").join("out.txt");
        let err = write_records(&output, &["A".to_string()], &[]).unwrap_err();
        assert!(matches!(&err, RecordError::Io { path, .. } if path == &output));
        assert!(err.to_string().contains("out.txt"));
    }

    #[test]
    fn read_then_write_preserves_layout() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_sample(dir.path());
        let output = dir.path().join("out.txt");

        let file = read_records(&input, &ReadOptions::default()).unwrap();
        write_records(&output, &file.header, &file.records).unwrap();

        let text = std::fs::read_to_string(&output).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "SAMPLE_ID\tCANCER_TYPE\tONCOTREE_CODE");
        assert_eq!(lines[1], "S-1\tLeukemia\tALL");
        assert_eq!(lines[3], "S-3\tUnknown\t");
        assert_eq!(lines.len(), 4);
    }
}
