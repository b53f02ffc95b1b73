//! Ordered mapping of file name to file content.

/// Per-sample bookkeeping file that never takes part in a migration.
pub const RECORD_FILE_NAME: &str = "TestRecord.md";

/// A single file of a sample.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    pub name: String,
    pub content: String,
}

/// Files of one sample, kept in encounter order with unique names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileSet {
    entries: Vec<FileEntry>,
}

impl FileSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a file. An existing name keeps its position but takes the new content.
    ///
    /// Returns the previous content when the name was already present.
    pub fn insert(&mut self, name: impl Into<String>, content: impl Into<String>) -> Option<String> {
        let name = name.into();
        let content = content.into();

        match self.entries.iter_mut().find(|entry| entry.name == name) {
            Some(entry) => Some(std::mem::replace(&mut entry.content, content)),
            None => {
                self.entries.push(FileEntry { name, content });
                None
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|entry| entry.name == name)
            .map(|entry| entry.content.as_str())
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &FileEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<N: Into<String>, C: Into<String>> FromIterator<(N, C)> for FileSet {
    fn from_iter<I: IntoIterator<Item = (N, C)>>(iter: I) -> Self {
        let mut set = FileSet::new();
        for (name, content) in iter {
            set.insert(name, content);
        }
        set
    }
}

/// Whether a file name may take part in serialization.
pub fn is_eligible_name(name: &str) -> bool {
    !name.is_empty() && name != RECORD_FILE_NAME
}

/// Whether a file name is safe to join onto a target directory.
pub fn is_safe_name(name: &str) -> bool {
    !name.is_empty()
        && name != "."
        && name != ".."
        && !name.contains('/')
        && !name.contains('\\')
        && !name.contains('\0')
}
