/// Display name used when no file has been loaded.
pub const DEFAULT_FILE_NAME: &str = "untitled.md";

/// The single source of truth for the document being edited.
///
/// The editor widget and the preview both read from here. Every mutation
/// bumps `revision`, so readers can tell whether anything changed since
/// they last looked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentStore {
    content: String,
    file_name: String,
    revision: u64,
}

impl DocumentStore {
    /// Create a store holding `initial` under the default file name.
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            content: initial.into(),
            file_name: DEFAULT_FILE_NAME.to_string(),
            revision: 0,
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn set_content(&mut self, text: impl Into<String>) {
        self.content = text.into();
        self.revision += 1;
    }

    pub fn set_file_name(&mut self, name: impl Into<String>) {
        self.file_name = name.into();
        self.revision += 1;
    }

    /// Replace content and file name together as one revision.
    pub fn load(&mut self, content: String, file_name: String) {
        self.content = content;
        self.file_name = file_name;
        self.revision += 1;
    }

    /// Reset to an empty, untitled document.
    pub fn clear(&mut self) {
        self.load(String::new(), DEFAULT_FILE_NAME.to_string());
    }
}
