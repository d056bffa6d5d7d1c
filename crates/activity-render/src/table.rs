//! Summary-table CSV output.

use std::path::Path;

use activity_core::error::Result;
use activity_core::models::PersonSummary;
use tracing::info;

/// Write `summaries` to `path` as `person,sent,received` rows.
///
/// Rows keep their ranked order; no index column is written. The header
/// comes from the struct's field names.
pub fn write_summary(path: &Path, summaries: &[PersonSummary]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    for summary in summaries {
        writer.serialize(summary)?;
    }
    writer.flush()?;

    info!(
        "Wrote {} summary rows to {}",
        summaries.len(),
        path.display()
    );
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn summary(person: &str, sent: u64, received: u64) -> PersonSummary {
        PersonSummary {
            person: person.to_string(),
            sent,
            received,
        }
    }

    #[test]
    fn test_write_summary_rows_and_header() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("result.csv");

        write_summary(
            &path,
            &[summary("alice", 3, 1), summary("bob", 1, 2), summary("carol", 0, 1)],
        )
        .unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(
            lines,
            vec![
                "person,sent,received",
                "alice,3,1",
                "bob,1,2",
                "carol,0,1",
            ]
        );
    }

    #[test]
    fn test_write_summary_empty_table_writes_empty_file() {
        // The header is derived from the first serialized row, so an empty
        // table produces an empty file.
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("result.csv");

        write_summary(&path, &[]).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.is_empty());
    }

    #[test]
    fn test_write_summary_unwritable_path_errors() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing-subdir").join("result.csv");
        assert!(write_summary(&path, &[summary("a", 1, 0)]).is_err());
    }
}
