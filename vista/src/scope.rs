//! The [`Scope`] a template body renders in.
use crate::{
    Capture, Data, Display, Error, Escape, IntoData, Result, SectionMode, Value, View, Writer,
};

/// Render context handed to a template body.
///
/// Holds the view data merged over shared data, the output capture, and the view being rendered.
/// Containers in the data are shared with the caller, writes into them are visible outside the
/// render.
///
/// ```
/// # fn main() -> vista::Result<()> {
/// vista::bind("hello", |s| {
///     let name = s.get("name")?.clone();
///     s.echo("Hello ")?;
///     s.escaped(name)
/// });
///
/// let out = vista::view(Some("hello"), [("name", "<World>")])?.render()?;
/// assert_eq!(out, "Hello &lt;World&gt;");
/// # Ok(())
/// # }
/// ```
pub struct Scope<'v> {
    view: &'v mut View,
    data: Data,
    output: Capture,
}

impl<'v> Scope<'v> {
    pub(crate) fn new(view: &'v mut View, data: Data) -> Self {
        Self { view, data, output: Capture::new() }
    }

    /// The view being rendered.
    pub fn view(&self) -> &View {
        &*self.view
    }

    // ===== Data =====

    /// Data visible to the body.
    pub fn data(&self) -> &Data {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut Data {
        &mut self.data
    }

    /// Get a value, an unset key is [`Error::Undefined`].
    pub fn get(&self, key: &str) -> Result<&Value> {
        self.data.value(key)
    }

    pub fn has(&self, key: &str) -> bool {
        self.data.has(key)
    }

    // ===== Output =====

    /// Write a value as is.
    pub fn echo(&mut self, value: impl Display) -> Result<()> {
        value.display(&mut self.output)
    }

    /// Write a value with HTML special characters escaped.
    pub fn escaped(&mut self, value: impl Display) -> Result<()> {
        value.display(&mut Escape(&mut self.output))
    }

    // ===== Sections =====

    /// Start capturing output into section `name`, replacing its content.
    pub fn section(&mut self, name: &str) -> Result<()> {
        self.section_mode(name, SectionMode::Rewrite)
    }

    /// Start capturing output into section `name`.
    ///
    /// Fails if another section is open.
    pub fn section_mode(&mut self, name: &str, mode: SectionMode) -> Result<()> {
        self.view.sections.open(name, mode)?;
        self.output.push();
        Ok(())
    }

    pub fn append_section(&mut self, name: &str) -> Result<()> {
        self.section_mode(name, SectionMode::Append)
    }

    pub fn prepend_section(&mut self, name: &str) -> Result<()> {
        self.section_mode(name, SectionMode::Prepend)
    }

    /// Stop capturing and store the output into the open section.
    ///
    /// Fails if no section is open.
    pub fn end_section(&mut self) -> Result<()> {
        self.view.sections.ensure_open()?;
        let captured = self.output.pop()?;
        self.view.sections.close(captured)?;
        Ok(())
    }

    /// Section content, or `default` when the section was never set.
    pub fn get_section(&self, name: &str, default: &str) -> String {
        self.view.get_section(name, default).to_owned()
    }

    /// Write section content, or `default` when the section was never set.
    pub fn yield_section(&mut self, name: &str, default: &str) -> Result<()> {
        let content = self.get_section(name, default);
        self.output.write_str(&content)
    }

    pub fn has_section(&self, name: &str) -> bool {
        self.view.has_section(name)
    }

    /// Render view `name` with this view's sections once this body finishes.
    pub fn extends(&mut self, name: &str, data: impl IntoData) {
        self.view.extends(name, data);
    }

    // ===== Nested views =====

    /// Render another view.
    pub fn fetch(&mut self, name: &str, data: impl IntoData) -> Result<String> {
        View::new(Some(name), data)?.render()
    }

    /// Render another view if `cond` holds, otherwise an empty string.
    pub fn fetch_when(&mut self, cond: bool, name: &str, data: impl IntoData) -> Result<String> {
        match cond {
            true => self.fetch(name, data),
            false => Ok(String::new()),
        }
    }

    /// Render another view unless `cond` holds.
    pub fn fetch_unless(&mut self, cond: bool, name: &str, data: impl IntoData) -> Result<String> {
        self.fetch_when(!cond, name, data)
    }

    /// Render the first view in `names` that exists.
    pub fn fetch_first(&mut self, names: &[&str], data: impl IntoData) -> Result<String> {
        View::first(names, data)?.render()
    }

    /// Render another view into this output.
    pub fn include(&mut self, name: &str, data: impl IntoData) -> Result<()> {
        let content = self.fetch(name, data)?;
        self.output.write_str(&content)
    }

    pub fn include_when(&mut self, cond: bool, name: &str, data: impl IntoData) -> Result<()> {
        let content = self.fetch_when(cond, name, data)?;
        self.output.write_str(&content)
    }

    pub fn include_unless(&mut self, cond: bool, name: &str, data: impl IntoData) -> Result<()> {
        let content = self.fetch_unless(cond, name, data)?;
        self.output.write_str(&content)
    }

    pub fn include_first(&mut self, names: &[&str], data: impl IntoData) -> Result<()> {
        let content = self.fetch_first(names, data)?;
        self.output.write_str(&content)
    }

    pub(crate) fn finish(self) -> Result<String> {
        if let Some(name) = self.view.sections.abort() {
            return Err(Error::Logic(format!("section `{name}` was never closed")));
        }
        Ok(self.output.finish())
    }

    /// Clear an open section left behind by a failed body.
    pub(crate) fn abort(self) {
        self.view.sections.abort();
    }
}

impl Writer for Scope<'_> {
    fn write_str(&mut self, value: &str) -> Result<()> {
        self.output.write_str(value)
    }
}
