//! The [`FileSystem`] capability.
use std::{collections::HashMap, io, path::Path};

/// Existence probe and reader for view files.
pub trait FileSystem {
    /// Returns `true` if a file exists at `path`.
    fn exists(&self, path: &str) -> bool;

    /// Read the whole file at `path`.
    fn read(&self, path: &str) -> io::Result<String>;
}

impl<F> FileSystem for Box<F> where F: FileSystem + ?Sized {
    fn exists(&self, path: &str) -> bool {
        F::exists(self, path)
    }

    fn read(&self, path: &str) -> io::Result<String> {
        F::read(self, path)
    }
}

/// [`FileSystem`] backed by [`std::fs`].
#[derive(Debug, Clone, Default)]
pub struct StdFileSystem;

impl FileSystem for StdFileSystem {
    fn exists(&self, path: &str) -> bool {
        let exists = Path::new(path).is_file();
        tracing::trace!(path, exists, "probe view file");
        exists
    }

    fn read(&self, path: &str) -> io::Result<String> {
        std::fs::read_to_string(path)
    }
}

/// [`FileSystem`] backed by an in-memory map from path to content.
#[derive(Debug, Clone, Default)]
pub struct MemoryFileSystem {
    files: HashMap<String, String>,
}

impl MemoryFileSystem {
    /// Create an empty file system.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file.
    pub fn add(&mut self, path: impl Into<String>, content: impl Into<String>) -> &mut Self {
        self.files.insert(path.into(), content.into());
        self
    }

    /// Create a file system with the given files.
    pub fn with_files(
        files: impl IntoIterator<Item = (impl Into<String>, impl Into<String>)>,
    ) -> Self {
        let mut fs = Self::new();
        for (path, content) in files {
            fs.add(path, content);
        }
        fs
    }
}

impl FileSystem for MemoryFileSystem {
    fn exists(&self, path: &str) -> bool {
        self.files.contains_key(path)
    }

    fn read(&self, path: &str) -> io::Result<String> {
        match self.files.get(path) {
            Some(content) => Ok(content.clone()),
            None => Err(io::Error::new(io::ErrorKind::NotFound, format!("`{path}` not found"))),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn memory_file_system() {
        let fs = MemoryFileSystem::with_files([("/v/a.php", "A"), ("/v/b.php", "B")]);

        assert!(fs.exists("/v/a.php"));
        assert!(!fs.exists("/v/c.php"));
        assert_eq!(fs.read("/v/b.php").unwrap(), "B");
        assert_eq!(fs.read("/v/c.php").unwrap_err().kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn std_file_system() {
        let manifest = concat!(env!("CARGO_MANIFEST_DIR"), "/Cargo.toml");

        assert!(StdFileSystem.exists(manifest));
        assert!(!StdFileSystem.exists(concat!(env!("CARGO_MANIFEST_DIR"), "/missing.php")));
        assert!(StdFileSystem.read(manifest).unwrap().contains("vista-core"));
    }
}
