//! The [`View`] type.
use std::collections::HashMap;

use vista_core::camel;

use crate::{
    Data, Error, IntoData, IoWriter, Result, Scope, Sections, Value, Writer,
    runtime::{self, config},
    template::Template,
};

/// One template render: identity, data, rendered content and section state.
///
/// A view renders its body at most once. The first non empty result is kept and returned by
/// every later [`render`][View::render], build a new view for a fresh pass.
#[derive(Debug, Default)]
pub struct View {
    name: Option<String>,
    template: Option<String>,
    data: Data,
    content: String,
    pub(crate) sections: Sections,
    parent: Option<(String, Data)>,
}

impl View {
    /// Create a view for `name`.
    ///
    /// Fails with [`Error::NotFound`] when the resolved path does not exist. `None` defers binding
    /// to [`View::set_name`].
    pub fn new(name: Option<&str>, data: impl IntoData) -> Result<View> {
        let mut view = View { data: data.into_data(), ..Default::default() };
        if let Some(name) = name {
            view.set_name(name)?;
        }
        Ok(view)
    }

    /// Create a view for the first name in `names` that exists.
    pub fn first(names: &[&str], data: impl IntoData) -> Result<View> {
        match names.iter().find(|name| View::exists(name)) {
            Some(name) => View::new(Some(name), data),
            None => Err(Error::InvalidArgument(format!(
                "none of the views [{}] exist",
                names.join(", ")
            ))),
        }
    }

    /// Returns `true` if the view `name` resolves to an existing template.
    pub fn exists(name: &str) -> bool {
        runtime::exists(&config().file_path(name))
    }

    /// Resolve `name` with the current [`Config`][crate::Config].
    pub fn file_path(name: &str) -> String {
        config().file_path(name)
    }

    /// Bind this view to the template `name`.
    ///
    /// A view that already rendered content cannot be rebound.
    pub fn set_name(&mut self, name: &str) -> Result<&mut Self> {
        if !self.content.is_empty() {
            return Err(Error::Logic(format!("cannot bind `{name}`, view is already rendered")));
        }

        let path = config().file_path(name);
        if !runtime::exists(&path) {
            return Err(Error::NotFound { name: name.to_owned(), path });
        }

        tracing::debug!(name, %path, "bind view");
        self.name = Some(name.to_owned());
        self.template = Some(path);
        Ok(self)
    }

    /// Name given at construction or [`View::set_name`].
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Resolved template path.
    pub fn path(&self) -> Option<&str> {
        self.template.as_deref()
    }

    // ===== Data =====

    /// Add a piece of data to the view.
    pub fn with(&mut self, key: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.data.set(key, value);
        self
    }

    /// Merge data into the view, keys in `data` win.
    pub fn with_data(&mut self, data: impl IntoData) -> &mut Self {
        self.data.merge(data.into_data());
        self
    }

    /// Same as [`View::with`].
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.with(key, value);
    }

    /// Get a piece of view data, an unset key is [`Error::Undefined`].
    pub fn get(&self, key: &str) -> Result<&Value> {
        self.data.value(key)
    }

    pub fn has(&self, key: &str) -> bool {
        self.data.has(key)
    }

    /// Remove a piece of view data, does nothing if absent.
    pub fn remove(&mut self, key: &str) {
        self.data.remove(key);
    }

    /// View data, without shared data.
    pub fn data(&self) -> &Data {
        &self.data
    }

    /// Dispatch a method by name.
    ///
    /// Registered macros win. Otherwise `withFooBar` style names set `fooBar` to the first
    /// argument. Anything else is [`Error::UnknownMethod`].
    pub fn call(&mut self, method: &str, args: Vec<Value>) -> Result<Value> {
        if let Some(f) = runtime::macro_fn(method) {
            return f(self, args);
        }

        let key = match method.strip_prefix("with").map(camel) {
            Some(key) if !key.is_empty() => key,
            _ => return Err(Error::UnknownMethod { method: method.to_owned(), ty: "View" }),
        };

        self.with(key, args.into_iter().next().unwrap_or_default());
        Ok(Value::Null)
    }

    // ===== Sections =====

    /// Record a parent view to render this view's sections into.
    pub fn extends(&mut self, name: &str, data: impl IntoData) {
        self.parent = Some((name.to_owned(), data.into_data()));
    }

    /// Name of the view this view extends.
    pub fn parent(&self) -> Option<&str> {
        self.parent.as_ref().map(|(name, _)| name.as_str())
    }

    /// Section content, or `default` when the section was never set.
    pub fn get_section<'a>(&'a self, name: &str, default: &'a str) -> &'a str {
        self.sections.get(name).unwrap_or(default)
    }

    pub fn has_section(&self, name: &str) -> bool {
        self.sections.has(name)
    }

    /// All collected sections.
    pub fn sections(&self) -> &HashMap<String, String> {
        self.sections.content()
    }

    // ===== Render =====

    /// Rendered content, empty before the first render.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Render the view.
    pub fn render(&mut self) -> Result<String> {
        if self.content.is_empty() {
            self.content = self.render_template()?;
        } else {
            tracing::trace!(view = self.name.as_deref(), "reuse rendered content");
        }
        Ok(self.content.clone())
    }

    /// Render the view and filter the output.
    ///
    /// The filtered output replaces the stored content.
    pub fn render_with(&mut self, callback: impl FnOnce(String) -> String) -> Result<String> {
        let content = self.render()?;
        self.content = callback(content);
        Ok(self.content.clone())
    }

    /// Render the view into a writer.
    pub fn display(&mut self, writer: &mut impl Writer) -> Result<()> {
        let content = self.render()?;
        writer.write_str(&content)
    }

    /// Render the view into standard output.
    pub fn display_stdout(&mut self) -> Result<()> {
        self.display(&mut IoWriter(std::io::stdout().lock()))
    }

    fn render_template(&mut self) -> Result<String> {
        let Some(path) = self.template.clone() else {
            return Err(Error::Unbound);
        };
        let name = self.name.clone().unwrap_or_else(|| path.clone());

        let _depth = runtime::enter(&name)?;
        let _span = tracing::debug_span!("render", view = %name, %path).entered();

        let mut data = runtime::get_shared();
        data.merge(self.data.clone());

        let output = match runtime::load(&path)? {
            Template::Static(source) => source,
            Template::Body(body) => {
                let mut scope = Scope::new(self, data);
                match body(&mut scope) {
                    Ok(()) => scope.finish()?,
                    Err(err) => {
                        scope.abort();
                        return Err(err);
                    }
                }
            }
        };

        let Some((parent, parent_data)) = self.parent.clone() else {
            return Ok(output);
        };

        tracing::debug!(view = %name, %parent, "extends");
        let mut parent = View::new(Some(&parent), parent_data)?;
        parent.sections.inherit(self.sections.content().clone());
        parent.render()
    }
}
