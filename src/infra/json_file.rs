use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::domain::ticket::Ticket;

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("tickets document not found at {}", .path.display())]
    Missing { path: PathBuf },
    #[error("failed to read tickets document {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("malformed tickets document {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Reads a JSON array of tickets. A document holding `null` yields `Ok(None)`.
pub fn read_document(path: &Path) -> Result<Option<Vec<Ticket>>, DocumentError> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            return Err(DocumentError::Missing {
                path: path.to_path_buf(),
            });
        }
        Err(source) => {
            return Err(DocumentError::Read {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    serde_json::from_str::<Option<Vec<Ticket>>>(&contents).map_err(|source| DocumentError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ticket::TicketStatus;

    fn write_document(contents: &str) -> (tempfile::TempDir, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tickets.json");
        fs::write(&path, contents).unwrap();
        (dir, path)
    }

    #[test]
    fn reads_ticket_array_in_order() {
        let (_dir, path) = write_document(
            r#"[
                {"id": 20, "title": "B", "description": "", "status": "Cerrado", "createdAt": "2024-05-01T10:00:00"},
                {"id": 11, "title": "A", "description": "", "status": "Abierto", "createdAt": "2024-05-02T10:00:00"}
            ]"#,
        );
        let tickets = read_document(&path).unwrap().unwrap();
        assert_eq!(tickets.len(), 2);
        assert_eq!(tickets[0].id, 20);
        assert_eq!(tickets[0].status, TicketStatus::Closed);
        assert_eq!(tickets[1].id, 11);
    }

    #[test]
    fn null_document_yields_none() {
        let (_dir, path) = write_document("null");
        assert!(read_document(&path).unwrap().is_none());
    }

    #[test]
    fn missing_document_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.json");
        assert!(matches!(
            read_document(&path),
            Err(DocumentError::Missing { .. })
        ));
    }

    #[test]
    fn malformed_document_is_reported() {
        let (_dir, path) = write_document("[{\"id\": 1,");
        assert!(matches!(
            read_document(&path),
            Err(DocumentError::Parse { .. })
        ));

        let (_dir, path) = write_document(r#"{"id": 1}"#);
        assert!(matches!(
            read_document(&path),
            Err(DocumentError::Parse { .. })
        ));
    }

    #[test]
    fn bundled_document_matches_sample_tickets() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("Data/tickets.json");
        let tickets = read_document(&path).unwrap().unwrap();
        assert_eq!(tickets, crate::domain::sample::sample_tickets());
    }

    #[test]
    fn directory_path_is_a_read_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            read_document(dir.path()),
            Err(DocumentError::Read { .. })
        ));
    }
}
