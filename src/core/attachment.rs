use std::path::PathBuf;
use std::sync::Arc;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AttachmentError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{path} is empty")]
    Empty { path: PathBuf },
}

/// An instruction-manual file loaded into memory for the session. The bytes
/// are shared on clone and released when the last owner is dropped.
#[derive(Debug, Clone)]
pub struct Attachment {
    pub file_name: String,
    pub data: Arc<[u8]>,
}

impl Attachment {
    pub fn from_bytes(file_name: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            data: data.into(),
        }
    }

    pub fn size(&self) -> usize {
        self.data.len()
    }
}

/// Read a manual from disk. Runs on the async executor so a slow disk never
/// stalls the event loop; callers log failures and keep prior state.
pub async fn load(path: PathBuf) -> Result<Attachment, AttachmentError> {
    let data = tokio::fs::read(&path).await.map_err(|source| AttachmentError::Read {
        path: path.clone(),
        source,
    })?;
    if data.is_empty() {
        return Err(AttachmentError::Empty { path });
    }

    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    Ok(Attachment::from_bytes(file_name, data))
}

/// Compact byte-count label for manual chips, e.g. "1.2 MiB".
pub fn human_size(bytes: usize) -> String {
    const UNITS: &[&str] = &["B", "KiB", "MiB", "GiB"];
    let mut size = bytes as f64;
    let mut unit = 0;
    while size >= 1024.0 && unit < UNITS.len() - 1 {
        size /= 1024.0;
        unit += 1;
    }
    if unit == 0 {
        format!("{} {}", bytes, UNITS[0])
    } else {
        format!("{:.1} {}", size, UNITS[unit])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_the_same_bytes() {
        let a = Attachment::from_bytes("manual.pdf", vec![0u8; 64]);
        let b = a.clone();
        assert!(Arc::ptr_eq(&a.data, &b.data));
        assert_eq!(b.size(), 64);
    }

    #[test]
    fn human_size_picks_sensible_units() {
        assert_eq!(human_size(512), "512 B");
        assert_eq!(human_size(2048), "2.0 KiB");
        assert_eq!(human_size(5 * 1024 * 1024), "5.0 MiB");
    }

    #[test]
    fn load_reports_missing_files() {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        let err = rt
            .block_on(load(PathBuf::from("/nonexistent/manual.pdf")))
            .unwrap_err();
        assert!(matches!(err, AttachmentError::Read { .. }));
    }
}
