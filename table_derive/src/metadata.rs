//! Code generation for `RecordTable` implementations

use crate::parsing::{ColumnDef, TableAttributes};
use proc_macro2::TokenStream;
use quote::quote;
use syn::Ident;

pub fn generate_record_table_impl(
    name: &Ident,
    table: &TableAttributes,
    columns: &[ColumnDef],
) -> TokenStream {
    let table_name = &table.name;
    let column_count = columns.len();
    let timestamp = match &table.timestamp_column {
        Some(column) => quote! { ::core::option::Option::Some(#column) },
        None => quote! { ::core::option::Option::None },
    };

    let column_infos = columns.iter().map(|column| {
        let column_name = &column.name;
        let pg_type = column.pg_type;
        let nullable = column.nullable;
        let primary_key = column.primary_key;
        quote! {
            ::store_object::ColumnInfo {
                name: #column_name,
                pg_type: #pg_type,
                nullable: #nullable,
                primary_key: #primary_key,
            }
        }
    });

    quote! {
        impl ::store_object::RecordTable for #name {
            fn table() -> &'static ::store_object::TableInfo {
                static COLUMNS: [::store_object::ColumnInfo; #column_count] = [
                    #(#column_infos),*
                ];
                static TABLE: ::store_object::TableInfo = ::store_object::TableInfo {
                    name: #table_name,
                    columns: &COLUMNS,
                    timestamp_column: #timestamp,
                };
                &TABLE
            }
        }
    }
}
