use std::rc::Rc;

use crate::{Result, Scope};

/// Code executed to render a view.
///
/// A body receives the render [`Scope`], reads view data from it and writes output into it.
pub type Body = Rc<dyn Fn(&mut Scope<'_>) -> Result<()>>;

/// A loaded view template.
pub enum Template {
    /// Bound code.
    Body(Body),
    /// Plain file content, written as is.
    Static(String),
}

impl std::fmt::Debug for Template {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Body(_) => write!(f, "Template::<Body>"),
            Self::Static(source) => f.debug_tuple("Template::Static").field(source).finish(),
        }
    }
}
