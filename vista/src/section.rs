//! Named sections.
use std::collections::HashMap;

use crate::{Error, Result};

/// How captured output combines with a section's existing content.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SectionMode {
    /// Replace the existing content.
    #[default]
    Rewrite,
    /// Existing content, then the new one.
    Append,
    /// New content, then the existing one.
    Prepend,
}

/// Collected sections of a view and the single section currently open.
///
/// Sections do not nest, at most one is open at a time.
#[derive(Debug, Clone, Default)]
pub struct Sections {
    content: HashMap<String, String>,
    open: Option<(String, SectionMode)>,
}

impl Sections {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark `name` as open.
    pub fn open(&mut self, name: &str, mode: SectionMode) -> Result<()> {
        if let Some((open, _)) = &self.open {
            return Err(Error::Logic(format!(
                "cannot open section `{name}`, section `{open}` is still open, sections do not nest"
            )));
        }
        self.open = Some((name.to_owned(), mode));
        Ok(())
    }

    /// Fails if no section is open.
    pub fn ensure_open(&self) -> Result<()> {
        match self.open {
            Some(_) => Ok(()),
            None => Err(Error::Logic("cannot end a section without first starting one".into())),
        }
    }

    /// Close the open section, merging `captured` into it. Returns the section name.
    pub fn close(&mut self, captured: String) -> Result<String> {
        self.ensure_open()?;
        let (name, mode) = self.open.take().unwrap_or_default();

        let merged = match (mode, self.content.remove(&name)) {
            (SectionMode::Rewrite, _) | (_, None) => captured,
            (SectionMode::Append, Some(mut old)) => {
                old.push_str(&captured);
                old
            }
            (SectionMode::Prepend, Some(old)) => {
                let mut new = captured;
                new.push_str(&old);
                new
            }
        };

        self.content.insert(name.clone(), merged);
        Ok(name)
    }

    /// Drop the open section without storing anything, returning its name.
    pub(crate) fn abort(&mut self) -> Option<String> {
        self.open.take().map(|(name, _)| name)
    }

    /// Name of the open section.
    pub fn current(&self) -> Option<&str> {
        self.open.as_ref().map(|(name, _)| name.as_str())
    }

    /// Mode of the open section, [`SectionMode::Rewrite`] when none is open.
    pub fn mode(&self) -> SectionMode {
        self.open.as_ref().map(|(_, mode)| *mode).unwrap_or_default()
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.content.get(name).map(String::as_str)
    }

    pub fn has(&self, name: &str) -> bool {
        self.content.contains_key(name)
    }

    /// All collected sections.
    pub fn content(&self) -> &HashMap<String, String> {
        &self.content
    }

    /// Replace collected sections wholesale, used when a child hands its sections to its parent.
    pub(crate) fn inherit(&mut self, content: HashMap<String, String>) {
        self.content = content;
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn twice(mode: SectionMode) -> String {
        let mut sections = Sections::new();
        sections.open("s", mode).unwrap();
        sections.close("X".into()).unwrap();
        sections.open("s", mode).unwrap();
        sections.close("Y".into()).unwrap();
        sections.get("s").unwrap().to_owned()
    }

    #[test]
    fn merge_modes() {
        assert_eq!(twice(SectionMode::Rewrite), "Y");
        assert_eq!(twice(SectionMode::Append), "XY");
        assert_eq!(twice(SectionMode::Prepend), "YX");
    }

    #[test]
    fn misuse() {
        let mut sections = Sections::new();
        assert!(matches!(sections.close(String::new()), Err(Error::Logic(_))));

        sections.open("a", SectionMode::Append).unwrap();
        assert_eq!(sections.current(), Some("a"));
        assert_eq!(sections.mode(), SectionMode::Append);
        assert!(matches!(sections.open("b", SectionMode::Rewrite), Err(Error::Logic(_))));

        sections.close("x".into()).unwrap();
        assert_eq!(sections.current(), None);
        assert_eq!(sections.mode(), SectionMode::Rewrite);
    }
}
