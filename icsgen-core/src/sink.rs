//! Delivery of finished documents.
//!
//! The core never decides where a calendar ends up; it hands the text and a
//! suggested name to a `DocumentSink`.

use std::io::Write;
use std::path::PathBuf;

use crate::error::IcsResult;

pub trait DocumentSink {
    fn deliver(&mut self, document: &str, filename: &str, extension: &str) -> IcsResult<()>;
}

/// Writes `<dir>/<filename><extension>`, creating `dir` if needed.
#[derive(Debug, Clone)]
pub struct FileSink {
    dir: PathBuf,
    written: Option<PathBuf>,
}

impl FileSink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        FileSink {
            dir: dir.into(),
            written: None,
        }
    }

    /// Path of the last file written.
    pub fn written(&self) -> Option<&PathBuf> {
        self.written.as_ref()
    }
}

impl DocumentSink for FileSink {
    fn deliver(&mut self, document: &str, filename: &str, extension: &str) -> IcsResult<()> {
        std::fs::create_dir_all(&self.dir)?;

        let path = self.dir.join(format!("{filename}{extension}"));
        std::fs::write(&path, document)?;

        tracing::info!(path = %path.display(), bytes = document.len(), "calendar written");
        self.written = Some(path);
        Ok(())
    }
}

/// Writes the document to any writer, ignoring the suggested name.
pub struct WriterSink<W: Write>(pub W);

impl<W: Write> DocumentSink for WriterSink<W> {
    fn deliver(&mut self, document: &str, _filename: &str, _extension: &str) -> IcsResult<()> {
        self.0.write_all(document.as_bytes())?;
        self.0.flush()?;
        Ok(())
    }
}
