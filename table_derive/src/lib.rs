//! Procedural macros for generating record table metadata
//!
//! This crate provides the `#[model]` macro and `RecordTable` derive, which
//! describe a struct's backing table to the store-object read layer.

use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

mod metadata;
mod model_macro;
mod parsing;

use metadata::generate_record_table_impl;
use model_macro::model_attribute;
use parsing::{parse_columns, parse_table_attributes};

/// Derive macro for the `RecordTable` trait
///
/// Every named field becomes a column. `Option<T>` fields are nullable, and
/// the optional `timestamp` key names the column reads order by when they ask
/// for no explicit ordering.
///
/// ```rust,ignore
/// #[derive(serde::Serialize, RecordTable)]
/// #[table(name = "trigger", timestamp = "acq_time")]
/// pub struct Trigger {
///     pub equipment_id: String,
///     pub acq_time: DateTime<Utc>,
///     pub status: Option<String>,
/// }
/// ```
#[proc_macro_derive(RecordTable, attributes(table, primary_key))]
pub fn derive_record_table(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let name = &input.ident;

    let table = match parse_table_attributes(&input.attrs) {
        Ok(attrs) => attrs,
        Err(e) => return e.to_compile_error().into(),
    };

    let columns = match parse_columns(&input.data, &table) {
        Ok(columns) => columns,
        Err(e) => return e.to_compile_error().into(),
    };

    TokenStream::from(generate_record_table_impl(name, &table, &columns))
}

/// Convenience attribute macro that adds the derives a record model needs
///
/// Expands to `Debug`, `Clone`, `PartialEq`, serde's `Serialize` and
/// `Deserialize`, plus `RecordTable`.
#[proc_macro_attribute]
pub fn model(attr: TokenStream, item: TokenStream) -> TokenStream {
    model_attribute(attr, item)
}
