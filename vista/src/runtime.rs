//! Process wide view state.
//!
//! Directory and extension config, shared data, the macro table and bound template bodies live in
//! a thread local [`Runtime`]. Rendering is single threaded, a thread that renders views owns its
//! own copy. [`reset`] restores everything to defaults.
use std::{cell::RefCell, collections::HashMap, rc::Rc};

use vista_core::{FileSystem, StdFileSystem};

use crate::{
    Data, Error, IntoData, Result, Value, View,
    template::{Body, Template},
};

/// Maximum nesting of renders before a view is considered to be extending itself.
pub const MAX_DEPTH: usize = 64;

/// A callable registered under a method name, see [`View::call`].
pub type Macro = Rc<dyn Fn(&mut View, Vec<Value>) -> Result<Value>>;

/// Name resolution settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    directory: String,
    extension: String,
}

impl Config {
    /// Root directory of view files.
    pub fn directory(&self) -> &str {
        &self.directory
    }

    /// File extension of view files, without the dot.
    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// Resolve a view name to its file path.
    pub fn file_path(&self, name: &str) -> String {
        vista_core::file_path(&self.directory, name, &self.extension)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            directory: String::new(),
            extension: String::from("php"),
        }
    }
}

struct Runtime {
    config: Config,
    shared: Data,
    macros: HashMap<String, Macro>,
    bodies: HashMap<String, Body>,
    fs: Rc<dyn FileSystem>,
    depth: usize,
}

impl Default for Runtime {
    fn default() -> Self {
        Self {
            config: Config::default(),
            shared: Data::new(),
            macros: HashMap::new(),
            bodies: HashMap::new(),
            fs: Rc::new(StdFileSystem),
            depth: 0,
        }
    }
}

thread_local! {
    static RUNTIME: RefCell<Runtime> = RefCell::new(Runtime::default());
}

// the borrow must never be held while running user code, bodies and macros reenter the runtime
fn with<R>(f: impl FnOnce(&mut Runtime) -> R) -> R {
    RUNTIME.with_borrow_mut(f)
}

// ===== Config =====

/// Set the views directory.
pub fn set_directory(directory: impl Into<String>) {
    with(|rt| rt.config.directory = directory.into());
}

/// Set the views file extension.
pub fn set_extension(extension: impl Into<String>) {
    with(|rt| rt.config.extension = extension.into());
}

/// Current name resolution settings.
pub fn config() -> Config {
    with(|rt| rt.config.clone())
}

/// Replace the [`FileSystem`] used to probe and read view files.
pub fn set_file_system(fs: impl FileSystem + 'static) {
    with(|rt| rt.fs = Rc::new(fs));
}

/// Restore every setting, shared data, macros and bound bodies to their defaults.
pub fn reset() {
    with(|rt| *rt = Runtime::default());
}

// ===== Shared data =====

/// Share a value with all views, returning the value.
pub fn share(key: impl Into<String>, value: impl Into<Value>) -> Value {
    let value = value.into();
    with(|rt| rt.shared.set(key, value.clone()));
    value
}

/// Share multiple values with all views.
pub fn share_data(data: impl IntoData) {
    let data = data.into_data();
    with(|rt| rt.shared.merge(data));
}

/// Data shared with all views.
pub fn get_shared() -> Data {
    with(|rt| rt.shared.clone())
}

// ===== Macros =====

/// Register a callable reachable through [`View::call`].
pub fn register_macro(
    name: impl Into<String>,
    f: impl Fn(&mut View, Vec<Value>) -> Result<Value> + 'static,
) {
    let name = name.into();
    tracing::debug!(%name, "register view macro");
    with(|rt| rt.macros.insert(name, Rc::new(f)));
}

/// Returns `true` if a macro is registered under `name`.
pub fn has_macro(name: &str) -> bool {
    with(|rt| rt.macros.contains_key(name))
}

pub(crate) fn macro_fn(name: &str) -> Option<Macro> {
    with(|rt| rt.macros.get(name).cloned())
}

// ===== Templates =====

/// Bind a template body to a view name, returning the resolved path.
///
/// The name is resolved with the current [`Config`], so set the directory and extension first.
pub fn bind(
    name: &str,
    body: impl Fn(&mut crate::Scope<'_>) -> Result<()> + 'static,
) -> String {
    let path = config().file_path(name);
    bind_path(path.clone(), body);
    path
}

/// Bind a template body to an already resolved file path.
pub fn bind_path(
    path: impl Into<String>,
    body: impl Fn(&mut crate::Scope<'_>) -> Result<()> + 'static,
) {
    let path = path.into();
    tracing::debug!(%path, "bind view body");
    with(|rt| rt.bodies.insert(path, Rc::new(body)));
}

/// Returns `true` if a body is bound to `path` or a file exists there.
pub(crate) fn exists(path: &str) -> bool {
    let (bound, fs) = with(|rt| (rt.bodies.contains_key(path), rt.fs.clone()));
    bound || fs.exists(path)
}

/// Load the template at `path`, bound bodies take precedence over file content.
pub(crate) fn load(path: &str) -> Result<Template> {
    let (body, fs) = with(|rt| (rt.bodies.get(path).cloned(), rt.fs.clone()));
    match body {
        Some(body) => Ok(Template::Body(body)),
        None => Ok(Template::Static(fs.read(path)?)),
    }
}

// ===== Depth =====

/// Decrements the render depth when dropped.
pub(crate) struct DepthGuard(());

pub(crate) fn enter(name: &str) -> Result<DepthGuard> {
    with(|rt| {
        if rt.depth >= MAX_DEPTH {
            return Err(Error::Recursion { name: name.to_owned(), depth: MAX_DEPTH });
        }
        rt.depth += 1;
        Ok(DepthGuard(()))
    })
}

impl Drop for DepthGuard {
    fn drop(&mut self) {
        with(|rt| rt.depth = rt.depth.saturating_sub(1));
    }
}
