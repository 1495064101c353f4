// ===== Namespace =====

/// `ToTokens` for public name
pub struct IntoData;

impl quote::ToTokens for IntoData {
    fn to_tokens(&self, tokens: &mut proc_macro2::TokenStream) {
        quote::quote! {::vista::IntoData}.to_tokens(tokens);
    }
}

/// `ToTokens` for public name
pub struct Data;

impl quote::ToTokens for Data {
    fn to_tokens(&self, tokens: &mut proc_macro2::TokenStream) {
        quote::quote! {::vista::Data}.to_tokens(tokens);
    }
}

// ===== macros =====

/// Everything will return `Result<T, syn::Error>`
///
/// `error!(attr, "`{path}`: {}")`, standard `format!` with `attr`s span.
///
/// `error!("{}",error)`, standard `format!`
macro_rules! error {
    (@ $s:expr, $($tt:tt)*) => {
        return Err(syn::Error::new($s, format!($($tt)*)))
    };
    ($s:expr, $($tt:tt)*) => {
        crate::shared::error!(@ syn::spanned::Spanned::span(&$s), $($tt)*)
    };
    ($($tt:tt)*) => {
        crate::shared::error!(@ proc_macro2::Span::call_site(), $($tt)*)
    };
}

pub(crate) use error;
