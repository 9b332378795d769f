//! Parsing utilities for table and field attributes
//!
//! This module handles the parsing of `#[table]` and `#[primary_key]`
//! attributes and compile-time validation of table and column names.

use quote::quote;
use syn::{Attribute, Data, Error, Fields, Meta, Result};
use type_mapping::{is_optional_type, rust_type_to_pg_type};

/// Validate table name and return syn::Error for better proc macro error handling
pub fn validate_table_name_syn(name: &str, span: proc_macro2::Span) -> Result<()> {
    validate_identifier(name)
        .map_err(|e| Error::new(span, format!("Invalid table name '{}': {}", name, e)))
}

/// Validate field name and return syn::Error for better proc macro error handling
pub fn validate_field_name_syn(name: &str, span: proc_macro2::Span) -> Result<()> {
    validate_identifier(name)
        .map_err(|e| Error::new(span, format!("Invalid field name '{}': {}", name, e)))
}

/// Same shape rules as store_object::validation, applied at compile time
fn validate_identifier(name: &str) -> std::result::Result<(), String> {
    let first_char = name
        .chars()
        .next()
        .ok_or_else(|| "Name cannot be empty".to_string())?;

    // PostgreSQL limit
    if name.len() > 63 {
        return Err(format!(
            "Name '{}' is too long: {} characters (max 63)",
            name,
            name.len()
        ));
    }

    if !first_char.is_ascii_alphabetic() && first_char != '_' {
        return Err(format!(
            "Name '{}' must start with a letter or underscore",
            name
        ));
    }

    if !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Err(format!("Name '{}' contains invalid characters: only alphanumeric characters and underscores are allowed", name));
    }

    Ok(())
}

#[derive(Debug)]
pub struct TableAttributes {
    pub name: String,
    pub timestamp_column: Option<String>,
}

#[derive(Debug)]
pub struct ColumnDef {
    pub name: String,
    pub pg_type: &'static str,
    pub nullable: bool,
    pub primary_key: bool,
}

pub fn parse_table_attributes(attrs: &[Attribute]) -> Result<TableAttributes> {
    let mut table_name = None;
    let mut timestamp_column = None;

    for attr in attrs {
        if attr.path().is_ident("table") {
            if let Meta::List(meta_list) = &attr.meta {
                // Parse nested tokens manually: key = "value" pairs separated by commas
                let mut tokens = meta_list.tokens.clone().into_iter().peekable();

                while let Some(token) = tokens.next() {
                    if let proc_macro2::TokenTree::Ident(key) = token {
                        let key_str = key.to_string();

                        // Expect '=' after key
                        if let Some(proc_macro2::TokenTree::Punct(punct)) = tokens.peek() {
                            if punct.as_char() == '=' {
                                tokens.next(); // consume '='

                                if let Some(proc_macro2::TokenTree::Literal(lit)) = tokens.next() {
                                    let value = lit.to_string().trim_matches('"').to_string();

                                    match key_str.as_str() {
                                        "name" => table_name = Some(value),
                                        "timestamp" => timestamp_column = Some(value),
                                        other => {
                                            return Err(Error::new(
                                                key.span(),
                                                format!("unknown table attribute '{}'", other),
                                            ))
                                        }
                                    }
                                }
                            }
                        }

                        // Skip comma if present
                        if let Some(proc_macro2::TokenTree::Punct(punct)) = tokens.peek() {
                            if punct.as_char() == ',' {
                                tokens.next();
                            }
                        }
                    }
                }
            }
        }
    }

    let table_name = table_name.ok_or_else(|| {
        Error::new(
            proc_macro2::Span::call_site(),
            "table attribute is required: add #[table(name = \"table_name\")] to your struct",
        )
    })?;

    validate_table_name_syn(&table_name, proc_macro2::Span::call_site())?;

    Ok(TableAttributes {
        name: table_name,
        timestamp_column,
    })
}

pub fn parse_columns(data: &Data, table: &TableAttributes) -> Result<Vec<ColumnDef>> {
    let Data::Struct(data_struct) = data else {
        return Err(Error::new(
            proc_macro2::Span::call_site(),
            "RecordTable can only be derived for structs",
        ));
    };
    let Fields::Named(fields_named) = &data_struct.fields else {
        return Err(Error::new(
            proc_macro2::Span::call_site(),
            "RecordTable requires named fields",
        ));
    };

    let mut columns = Vec::new();
    for field in &fields_named.named {
        let field_name = field
            .ident
            .as_ref()
            .ok_or_else(|| Error::new_spanned(field, "Field must have a name"))?;
        let name = field_name.to_string();
        validate_field_name_syn(&name, field_name.span())?;

        let ty = &field.ty;
        // Normalize type string by removing all whitespace for consistent matching
        let type_string = quote!(#ty).to_string().replace(' ', "");
        let pg_type = rust_type_to_pg_type(&type_string).ok_or_else(|| {
            Error::new_spanned(ty, format!("unsupported column type '{}'", type_string))
        })?;

        columns.push(ColumnDef {
            name,
            pg_type,
            nullable: is_optional_type(&type_string),
            primary_key: has_attribute(&field.attrs, "primary_key"),
        });
    }

    if let Some(timestamp) = &table.timestamp_column {
        let column = columns
            .iter()
            .find(|column| &column.name == timestamp)
            .ok_or_else(|| {
                Error::new(
                    proc_macro2::Span::call_site(),
                    format!("timestamp column '{}' is not a field of this struct", timestamp),
                )
            })?;
        if !column.pg_type.starts_with("TIMESTAMP") {
            return Err(Error::new(
                proc_macro2::Span::call_site(),
                format!("timestamp column '{}' must be a date-time field", timestamp),
            ));
        }
    }

    Ok(columns)
}

fn has_attribute(attrs: &[Attribute], name: &str) -> bool {
    attrs.iter().any(|attr| attr.path().is_ident(name))
}
