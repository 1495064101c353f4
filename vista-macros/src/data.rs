//! `Data` derive macro
use proc_macro2::TokenStream;
use quote::quote;
use syn::{Data as Body, ext::IdentExt, *};

use crate::{
    attribute::AttrField,
    shared::{Data, IntoData, error},
};

/// generate `IntoData` implementation, each field becomes one key
///
/// field must implement `Into<vista::Value>`
pub fn data(input: DeriveInput) -> Result<TokenStream> {
    let DeriveInput { attrs: _, vis: _, ident, generics, data } = input;

    let (g1,g2,g3) = generics.split_for_impl();

    let fields = match data {
        Body::Struct(DataStruct { fields: Fields::Named(fields), .. }) => fields.named,
        Body::Struct(DataStruct { fields: Fields::Unit, .. }) => Default::default(),
        _ => error!(ident, "`Data` can only be derived for struct with named fields"),
    };

    let mut sets = quote! {};

    for field in &fields {
        let attr = AttrField::from_attrs(&field.attrs)?;
        if attr.skip {
            continue;
        }

        let Some(id) = field.ident.as_ref() else {
            error!(field, "expected named field")
        };
        let key = attr.rename.unwrap_or_else(|| id.unraw().to_string());

        sets.extend(quote! {
            data.set(#key, self.#id);
        });
    }

    Ok(quote! {
        #[automatically_derived]
        impl #g1 #IntoData for #ident #g2 #g3 {
            fn into_data(self) -> #Data {
                #[allow(unused_mut)]
                let mut data = #Data::new();
                #sets
                data
            }
        }
    })
}
