//! Registrar roster import: a CSV export of per-student counters becomes
//! a batch of readiness snapshots for bulk journey evaluation.

use crate::journeys::readiness::domain::{ReadinessSnapshot, StudentId};
use serde::{Deserialize, Deserializer};
use std::collections::HashSet;
use std::io::Read;
use std::path::Path;

/// One roster row: a student paired with the snapshot assembled from the
/// export's counters.
#[derive(Debug, Clone, PartialEq)]
pub struct RosterEntry {
    pub student_id: StudentId,
    pub snapshot: ReadinessSnapshot,
}

#[derive(Debug)]
pub enum RosterImportError {
    Io(std::io::Error),
    Csv(csv::Error),
    MissingStudentId { line: u64 },
}

impl std::fmt::Display for RosterImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RosterImportError::Io(err) => write!(f, "failed to read roster export: {}", err),
            RosterImportError::Csv(err) => write!(f, "invalid roster CSV data: {}", err),
            RosterImportError::MissingStudentId { line } => {
                write!(f, "roster row at line {} has no student_id", line)
            }
        }
    }
}

impl std::error::Error for RosterImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RosterImportError::Io(err) => Some(err),
            RosterImportError::Csv(err) => Some(err),
            RosterImportError::MissingStudentId { .. } => None,
        }
    }
}

impl From<std::io::Error> for RosterImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for RosterImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

pub struct RosterImporter;

impl RosterImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<RosterEntry>, RosterImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    /// Parse roster rows, clamping malformed counters at the boundary.
    /// Duplicate student ids keep the first row; later ones are skipped.
    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<RosterEntry>, RosterImportError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut seen: HashSet<String> = HashSet::new();
        let mut entries = Vec::new();

        for (index, record) in csv_reader.deserialize::<RosterRow>().enumerate() {
            let row = record?;
            // header occupies line 1
            let line = index as u64 + 2;

            if row.student_id.is_empty() {
                return Err(RosterImportError::MissingStudentId { line });
            }

            if !seen.insert(row.student_id.clone()) {
                tracing::warn!(student = %row.student_id, line, "duplicate roster row skipped");
                continue;
            }

            entries.push(RosterEntry {
                student_id: StudentId(row.student_id.clone()),
                snapshot: row.snapshot(),
            });
        }

        Ok(entries)
    }
}

#[derive(Debug, Deserialize)]
struct RosterRow {
    student_id: String,
    #[serde(default, deserialize_with = "flag")]
    has_profile: bool,
    #[serde(default)]
    documents: i64,
    #[serde(default)]
    verified_documents: i64,
    #[serde(default, deserialize_with = "empty_as_none")]
    score: Option<i64>,
    #[serde(default)]
    reports: i64,
}

impl RosterRow {
    fn snapshot(&self) -> ReadinessSnapshot {
        ReadinessSnapshot::from_wire(
            self.has_profile,
            self.documents,
            self.verified_documents,
            self.score,
            self.reports,
        )
    }
}

fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "y" | "1" => Ok(true),
        "false" | "no" | "n" | "0" | "" => Ok(false),
        other => Err(serde::de::Error::custom(format!(
            "unrecognized boolean '{other}'"
        ))),
    }
}

fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value
            .parse::<i64>()
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn parses_rows_and_clamps_counters() {
        let csv = "\
student_id,has_profile,documents,verified_documents,score,reports
s-100,true,3,2,82,1
s-101,false,0,0,,0
s-102,yes,-2,0,140,0
";
        let entries =
            RosterImporter::from_reader(Cursor::new(csv.as_bytes())).expect("roster parses");

        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].student_id, StudentId("s-100".to_string()));
        assert_eq!(entries[0].snapshot.composite_score, Some(82));
        assert_eq!(entries[1].snapshot.composite_score, None);
        assert!(!entries[1].snapshot.has_profile);
        assert_eq!(entries[2].snapshot.document_count, 0, "negative clamped");
        assert_eq!(entries[2].snapshot.composite_score, Some(100), "overflow clamped");
    }

    #[test]
    fn duplicate_rows_keep_first() {
        let csv = "\
student_id,has_profile,documents,verified_documents,score,reports
s-100,true,3,2,82,1
s-100,false,0,0,,0
";
        let entries =
            RosterImporter::from_reader(Cursor::new(csv.as_bytes())).expect("roster parses");

        assert_eq!(entries.len(), 1);
        assert!(entries[0].snapshot.has_profile);
    }

    #[test]
    fn missing_student_id_is_an_error() {
        let csv = "\
student_id,has_profile,documents,verified_documents,score,reports
,true,3,2,82,1
";
        let error = RosterImporter::from_reader(Cursor::new(csv.as_bytes()))
            .expect_err("blank id rejected");

        match error {
            RosterImportError::MissingStudentId { line } => assert_eq!(line, 2),
            other => panic!("expected missing student id error, got {other:?}"),
        }
    }

    #[test]
    fn unreadable_boolean_is_a_csv_error() {
        let csv = "\
student_id,has_profile,documents,verified_documents,score,reports
s-100,maybe,3,2,82,1
";
        let error = RosterImporter::from_reader(Cursor::new(csv.as_bytes()))
            .expect_err("bad flag rejected");
        assert!(matches!(error, RosterImportError::Csv(_)));
    }
}
