use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, Data, DeriveInput, Error};

/// Convenience attribute macro that adds all necessary derives for a record model
///
/// Usage:
/// ```rust,ignore
/// use table_derive::model;
///
/// #[model]
/// #[table(name = "motor")]
/// pub struct Motor {
///     #[primary_key]
///     pub id: i32,
///     pub category: String,
/// }
/// ```
pub fn model_attribute(_attr: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);

    if !matches!(input.data, Data::Struct(_)) {
        return Error::new_spanned(&input.ident, "model can only be used on structs")
            .to_compile_error()
            .into();
    }

    let expanded = quote! {
        #[derive(
            Debug,
            Clone,
            PartialEq,
            ::serde::Serialize,
            ::serde::Deserialize,
            ::table_derive::RecordTable
        )]
        #input
    };

    TokenStream::from(expanded)
}
