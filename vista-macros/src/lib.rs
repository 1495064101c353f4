//! macros for `vista` views
mod shared;
mod attribute;
mod data;

/// derive macro for `IntoData` trait
///
/// ```ignore
/// #[derive(vista::Data)]
/// struct Page {
///     title: String,
///     #[data(rename = "userName")]
///     user_name: String,
///     #[data(skip)]
///     cache: Vec<u8>,
/// }
///
/// view.with_data(page);
/// ```
#[proc_macro_derive(Data, attributes(data))]
pub fn data(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    match data::data(syn::parse_macro_input!(input as syn::DeriveInput)) {
        Ok(ok) => ok.into(),
        Err(err) => err.into_compile_error().into(),
    }
}
