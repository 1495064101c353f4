//! vista views
//!
//! A view is a named template rendered with a data context. Template bodies are Rust closures
//! bound to a resolved file path, plain files without a bound body are written as is.
//!
//! ```
//! # fn main() -> vista::Result<()> {
//! vista::set_directory("/views");
//!
//! vista::bind("layouts.main", |s| {
//!     s.echo("<main>")?;
//!     s.yield_section("content", "nothing here")?;
//!     s.echo("</main>")
//! });
//!
//! vista::bind("pages.home", |s| {
//!     s.extends("layouts.main", ());
//!     s.section("content")?;
//!     s.echo("Welcome ")?;
//!     let user = s.get("user")?.clone();
//!     s.escaped(user)?;
//!     s.end_section()
//! });
//!
//! let mut home = vista::view(Some("pages.home"), [("user", "Jane")])?;
//! assert_eq!(home.render()?, "<main>Welcome Jane</main>");
//! # Ok(())
//! # }
//! ```
//!
//! Data [`share`]d with all views is merged under each view's own data. Directory, extension,
//! shared data, macros and bound bodies are thread local, see [`reset`].
mod error;
mod value;
mod write;
mod display;
mod escape;
mod capture;
mod section;
mod template;
mod runtime;
mod scope;
mod view;
#[cfg(feature = "time")]
mod time;

pub use error::{Error, Result};
pub use value::{Value, Data, Shared, IntoData};
pub use write::{Writer, Escape, IoWriter};
pub use display::Display;
pub use escape::{Flags, escape, e};
pub use capture::Capture;
pub use section::{SectionMode, Sections};
pub use template::{Body, Template};
pub use runtime::{
    Config, Macro, MAX_DEPTH, set_directory, set_extension, config, set_file_system, reset,
    share, share_data, get_shared, register_macro, has_macro, bind, bind_path,
};
pub use scope::Scope;
pub use view::View;
#[cfg(feature = "time")]
pub use self::time::*;

pub use vista_core::{FileSystem, StdFileSystem, MemoryFileSystem, normalize_name, denormalize_name};
pub use vista_macros::Data;

/// Create a new view.
///
/// `None` creates an unbound view, see [`View::set_name`].
pub fn view(name: Option<&str>, data: impl IntoData) -> Result<View> {
    View::new(name, data)
}
