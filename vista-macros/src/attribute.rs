use syn::{punctuated::Punctuated, *};

use crate::shared::error;

/// Field level attribute
///
/// Accept input:
///
/// - rename: `#[data(rename = "..")]`
/// - skip: `#[data(skip)]`
#[derive(Default)]
pub struct AttrField {
    pub rename: Option<String>,
    pub skip: bool,
}

impl AttrField {
    pub fn from_attrs(attrs: &[Attribute]) -> Result<AttrField> {
        let mut visitor = AttrField::default();

        for attr in attrs.iter().filter(|e| e.meta.path().is_ident("data")) {
            let metas = attr.parse_args_with(Punctuated::<Meta, Token![,]>::parse_terminated)?;

            for meta in metas {
                visitor.visit_meta(meta)?;
            }
        }

        Ok(visitor)
    }

    fn visit_meta(&mut self, meta: Meta) -> Result<()> {
        match meta {
            Meta::Path(path) if path.is_ident("skip") => self.visit_skip(path),
            Meta::NameValue(MetaNameValue { path, value, .. }) if path.is_ident("rename") => {
                self.visit_rename(path, value)
            }
            meta => error!(meta, "expected `skip` or `rename = \"..\"`"),
        }
    }

    fn visit_skip(&mut self, path: Path) -> Result<()> {
        if self.skip {
            error!(path, "duplicate `skip` key")
        }
        self.skip = true;
        Ok(())
    }

    fn visit_rename(&mut self, path: Path, value: Expr) -> Result<()> {
        match self.rename.replace(str_value(&value)?) {
            Some(_) => error!(path, "duplicate `rename` key"),
            None => Ok(()),
        }
    }
}

// ===== Util =====

fn str_value(value: &Expr) -> Result<String> {
    match value {
        Expr::Lit(ExprLit { lit: Lit::Str(lit), .. }) => Ok(lit.value()),
        _ => error!(value, "expected string")
    }
}
