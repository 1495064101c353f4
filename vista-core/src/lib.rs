//! Support crate for [`vista`][1] views.
//!
//! Views are addressed by name, like `pages.home` or `pages/home`. This crate turns names into
//! file paths and provides the [`FileSystem`] capability used to probe and read them.
//!
//! ```
//! use vista_core::file_path;
//!
//! assert_eq!(file_path("/views", "pages.home", "php"), "/views/pages/home.php");
//! ```
//!
//! Name transforms are pure. Everything that touches the disk goes through [`FileSystem`], so the
//! renderer can run against [`MemoryFileSystem`] in tests.
//!
//! [1]: <https://docs.rs/vista>
mod name;
mod fs;

pub use name::{normalize_name, denormalize_name, file_path, camel};
pub use fs::{FileSystem, StdFileSystem, MemoryFileSystem};
