//! Drag-and-drop validation and file ingestion.
//!
//! Reads run on a worker thread and report back through a [`ReadSink`];
//! the event loop hands the result to [`DragDropIngester::complete`], which
//! commits it to the [`DocumentStore`]. At most one read is in flight.
//! Files dropped meanwhile are queued and read in drop order, so the store
//! always ends up holding the most recently dropped file.

use std::collections::VecDeque;
use std::fs;
use std::path::{Path, PathBuf};

use crate::app::domain::document::DocumentStore;
use crate::app::infrastructure::error::IngestError;
use crate::app::services::text_ops::extract_filename;

/// Extensions accepted by the drop surface. Matched case-sensitively.
pub const MARKDOWN_EXTENSIONS: [&str; 2] = [".md", ".markdown"];

const UTF8_BOM: &str = "\u{feff}";

/// One entry of a drop payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DroppedFile {
    pub name: String,
    pub path: PathBuf,
}

impl DroppedFile {
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = extract_filename(&path.to_string_lossy());
        Self { name, path }
    }

    pub fn is_markdown(&self) -> bool {
        is_markdown_name(&self.name)
    }
}

pub fn is_markdown_name(name: &str) -> bool {
    MARKDOWN_EXTENSIONS.iter().any(|ext| name.ends_with(ext))
}

/// A finished read, delivered back to the event loop.
#[derive(Debug)]
pub struct FileRead {
    pub ticket: u64,
    pub file_name: String,
    pub result: Result<String, IngestError>,
}

/// Where worker threads deliver finished reads.
pub trait ReadSink: Clone + Send + 'static {
    fn deliver(&self, read: FileRead);
}

impl ReadSink for std::sync::mpsc::Sender<FileRead> {
    fn deliver(&self, read: FileRead) {
        if self.send(read).is_err() {
            tracing::warn!("File read finished after its receiver closed");
        }
    }
}

/// What happened to an accepted drop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropAccepted {
    /// A read was started for this file.
    Reading { ticket: u64, file_name: String },
    /// Another read is in flight; this one starts after it.
    Queued { ticket: u64, file_name: String },
}

struct PendingRead {
    ticket: u64,
    file: DroppedFile,
}

pub struct DragDropIngester<S: ReadSink> {
    is_dragging: bool,
    sink: S,
    next_ticket: u64,
    in_flight: Option<u64>,
    queue: VecDeque<PendingRead>,
}

impl<S: ReadSink> DragDropIngester<S> {
    pub fn new(sink: S) -> Self {
        Self {
            is_dragging: false,
            sink,
            next_ticket: 1,
            in_flight: None,
            queue: VecDeque::new(),
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.is_dragging
    }

    /// True while a read is running or waiting.
    pub fn is_busy(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn queued(&self) -> usize {
        self.queue.len()
    }

    /// Returns true: the event is consumed so the platform does not try
    /// to open the payload itself.
    pub fn on_drag_enter(&mut self) -> bool {
        self.is_dragging = true;
        true
    }

    pub fn on_drag_over(&mut self) -> bool {
        self.is_dragging = true;
        true
    }

    pub fn on_drag_leave(&mut self) -> bool {
        self.is_dragging = false;
        true
    }

    /// Validate a drop and start (or queue) reading the first markdown
    /// file in it. Non-markdown entries are ignored.
    pub fn on_drop(&mut self, files: &[DroppedFile]) -> Result<DropAccepted, IngestError> {
        self.is_dragging = false;

        let Some(file) = files.iter().find(|f| f.is_markdown()) else {
            tracing::info!(count = files.len(), "Drop rejected: no markdown file");
            return Err(IngestError::NotMarkdown);
        };

        let ticket = self.next_ticket;
        self.next_ticket += 1;
        let file_name = file.name.clone();

        if self.in_flight.is_some() {
            tracing::debug!(ticket, file = %file_name, "Read queued behind in-flight read");
            self.queue.push_back(PendingRead { ticket, file: file.clone() });
            return Ok(DropAccepted::Queued { ticket, file_name });
        }

        self.start_read(PendingRead { ticket, file: file.clone() });
        Ok(DropAccepted::Reading { ticket, file_name })
    }

    /// Commit a finished read to `store` and start the next queued one.
    ///
    /// On failure the store is left untouched and the error is returned
    /// for the caller to surface.
    pub fn complete(
        &mut self,
        read: FileRead,
        store: &mut DocumentStore,
    ) -> Result<(), IngestError> {
        if self.in_flight != Some(read.ticket) {
            tracing::warn!(ticket = read.ticket, "Ignoring read that was not in flight");
            return Ok(());
        }
        self.in_flight = None;

        let outcome = match read.result {
            Ok(content) => {
                tracing::info!(
                    file = %read.file_name,
                    bytes = content.len(),
                    "Loaded dropped file"
                );
                store.load(content, read.file_name);
                Ok(())
            }
            Err(e) => {
                tracing::warn!("Dropped file not loaded: {}", e);
                Err(e)
            }
        };

        if let Some(next) = self.queue.pop_front() {
            self.start_read(next);
        }
        outcome
    }

    fn start_read(&mut self, pending: PendingRead) {
        let PendingRead { ticket, file } = pending;
        self.in_flight = Some(ticket);

        let sink = self.sink.clone();
        std::thread::spawn(move || {
            let result = read_markdown(&file.path, &file.name);
            sink.deliver(FileRead {
                ticket,
                file_name: file.name,
                result,
            });
        });
    }
}

/// Read a file as UTF-8 text, dropping a leading byte-order mark.
pub fn read_markdown(path: &Path, file_name: &str) -> Result<String, IngestError> {
    let bytes = fs::read(path).map_err(|source| IngestError::Read {
        file_name: file_name.to_string(),
        source,
    })?;
    let text = String::from_utf8(bytes).map_err(|_| IngestError::Decode {
        file_name: file_name.to_string(),
    })?;
    match text.strip_prefix(UTF8_BOM) {
        Some(stripped) => Ok(stripped.to_string()),
        None => Ok(text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc::{self, Receiver, Sender};
    use std::time::Duration;
    use tempfile::TempDir;

    fn ingester() -> (DragDropIngester<Sender<FileRead>>, Receiver<FileRead>) {
        let (tx, rx) = mpsc::channel();
        (DragDropIngester::new(tx), rx)
    }

    fn write_file(dir: &TempDir, name: &str, contents: &[u8]) -> DroppedFile {
        let path = dir.path().join(name);
        fs::write(&path, contents).unwrap();
        DroppedFile::from_path(path)
    }

    fn next_read(rx: &Receiver<FileRead>) -> FileRead {
        rx.recv_timeout(Duration::from_secs(5)).expect("read never delivered")
    }

    #[test]
    fn test_drag_flag_follows_gesture() {
        let (mut ingester, _rx) = ingester();
        assert!(ingester.on_drag_enter());
        assert!(ingester.is_dragging());
        assert!(ingester.on_drag_over());
        assert!(ingester.is_dragging());
        assert!(ingester.on_drag_leave());
        assert!(!ingester.is_dragging());
    }

    #[test]
    fn test_markdown_name_matching() {
        assert!(is_markdown_name("notes.md"));
        assert!(is_markdown_name("README.markdown"));
        assert!(!is_markdown_name("NOTES.MD"));
        assert!(!is_markdown_name("notes.mdx"));
        assert!(!is_markdown_name("image.png"));
        assert!(!is_markdown_name("md"));
    }

    #[test]
    fn test_dropped_file_name_from_path() {
        let file = DroppedFile::from_path("/home/user/docs/notes.md");
        assert_eq!(file.name, "notes.md");
        assert!(file.is_markdown());
    }

    #[test]
    fn test_valid_drop_commits() {
        let dir = tempfile::tempdir().unwrap();
        let file = write_file(&dir, "notes.md", b"Hello");
        let (mut ingester, rx) = ingester();
        let mut store = DocumentStore::new("sample");

        ingester.on_drag_enter();
        let accepted = ingester.on_drop(&[file]).unwrap();
        assert!(matches!(
            accepted,
            DropAccepted::Reading { ref file_name, .. } if file_name == "notes.md"
        ));
        assert!(!ingester.is_dragging());
        assert!(ingester.is_busy());

        ingester.complete(next_read(&rx), &mut store).unwrap();
        assert_eq!(store.content(), "Hello");
        assert_eq!(store.file_name(), "notes.md");
        assert!(!ingester.is_dragging());
        assert!(!ingester.is_busy());
    }

    #[test]
    fn test_invalid_drop_leaves_document() {
        let dir = tempfile::tempdir().unwrap();
        let png = write_file(&dir, "image.png", b"\x89PNG");
        let (mut ingester, rx) = ingester();
        let store = DocumentStore::new("sample");

        ingester.on_drag_enter();
        let err = ingester.on_drop(&[png]).unwrap_err();
        assert!(matches!(err, IngestError::NotMarkdown));
        assert!(!ingester.is_dragging());
        assert!(!ingester.is_busy());
        assert!(rx.recv_timeout(Duration::from_millis(50)).is_err());
        assert_eq!(store.content(), "sample");
        assert_eq!(store.file_name(), "untitled.md");
    }

    #[test]
    fn test_empty_drop_is_rejected() {
        let (mut ingester, _rx) = ingester();
        ingester.on_drag_over();
        assert!(matches!(ingester.on_drop(&[]), Err(IngestError::NotMarkdown)));
        assert!(!ingester.is_dragging());
    }

    #[test]
    fn test_first_markdown_entry_wins() {
        let dir = tempfile::tempdir().unwrap();
        let files = [
            write_file(&dir, "cover.png", b"png"),
            write_file(&dir, "first.markdown", b"one"),
            write_file(&dir, "second.md", b"two"),
        ];
        let (mut ingester, rx) = ingester();
        let mut store = DocumentStore::new("");

        ingester.on_drop(&files).unwrap();
        ingester.complete(next_read(&rx), &mut store).unwrap();
        assert_eq!(store.content(), "one");
        assert_eq!(store.file_name(), "first.markdown");
        assert_eq!(ingester.queued(), 0);
    }

    #[test]
    fn test_missing_file_reports_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let ghost = DroppedFile::from_path(dir.path().join("ghost.md"));
        let (mut ingester, rx) = ingester();
        let mut store = DocumentStore::new("keep");

        ingester.on_drop(&[ghost]).unwrap();
        let err = ingester.complete(next_read(&rx), &mut store).unwrap_err();
        assert!(matches!(err, IngestError::Read { ref file_name, .. } if file_name == "ghost.md"));
        assert_eq!(store.content(), "keep");
        assert_eq!(store.revision(), 0);
    }

    #[test]
    fn test_invalid_utf8_reports_decode_error() {
        let dir = tempfile::tempdir().unwrap();
        let file = write_file(&dir, "bad.md", &[0x66, 0xff, 0xfe, 0x6f]);
        let (mut ingester, rx) = ingester();
        let mut store = DocumentStore::new("keep");

        ingester.on_drop(&[file]).unwrap();
        let err = ingester.complete(next_read(&rx), &mut store).unwrap_err();
        assert!(matches!(err, IngestError::Decode { .. }));
        assert_eq!(store.content(), "keep");
    }

    #[test]
    fn test_bom_is_stripped() {
        let dir = tempfile::tempdir().unwrap();
        let file = write_file(&dir, "bom.md", "\u{feff}# Title".as_bytes());
        assert_eq!(read_markdown(&file.path, &file.name).unwrap(), "# Title");
    }

    #[test]
    fn test_drops_are_read_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let first = write_file(&dir, "first.md", b"first");
        let second = write_file(&dir, "second.md", b"second");
        let (mut ingester, rx) = ingester();
        let mut store = DocumentStore::new("");

        assert!(matches!(ingester.on_drop(&[first]), Ok(DropAccepted::Reading { .. })));
        assert!(matches!(ingester.on_drop(&[second]), Ok(DropAccepted::Queued { .. })));
        assert_eq!(ingester.queued(), 1);

        let read = next_read(&rx);
        assert_eq!(read.file_name, "first.md");
        ingester.complete(read, &mut store).unwrap();
        assert_eq!(store.content(), "first");
        assert!(ingester.is_busy());

        let read = next_read(&rx);
        assert_eq!(read.file_name, "second.md");
        ingester.complete(read, &mut store).unwrap();
        assert_eq!(store.content(), "second");
        assert_eq!(store.file_name(), "second.md");
        assert!(!ingester.is_busy());
    }

    #[test]
    fn test_queue_continues_after_failure() {
        let dir = tempfile::tempdir().unwrap();
        let ghost = DroppedFile::from_path(dir.path().join("ghost.md"));
        let real = write_file(&dir, "real.md", b"real");
        let (mut ingester, rx) = ingester();
        let mut store = DocumentStore::new("");

        ingester.on_drop(&[ghost]).unwrap();
        ingester.on_drop(&[real]).unwrap();

        assert!(ingester.complete(next_read(&rx), &mut store).is_err());
        ingester.complete(next_read(&rx), &mut store).unwrap();
        assert_eq!(store.content(), "real");
    }

    #[test]
    fn test_stale_ticket_is_ignored() {
        let (mut ingester, _rx) = ingester();
        let mut store = DocumentStore::new("keep");
        let stray = FileRead {
            ticket: 42,
            file_name: "stray.md".to_string(),
            result: Ok("stray".to_string()),
        };
        assert!(ingester.complete(stray, &mut store).is_ok());
        assert_eq!(store.content(), "keep");
    }
}
