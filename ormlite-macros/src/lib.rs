mod decode_column;
mod decode_table;
mod field_value_enum;

use decode_table::decode_table;
use field_value_enum::field_value_enum;
use proc_macro::TokenStream;
use quote::quote;
use syn::{ItemEnum, ItemStruct, LitStr, parse_macro_input};

/// Implements `Entity` and `FromCells` and adds a typed `Column` constant per field.
#[proc_macro_derive(Entity, attributes(ormlite))]
pub fn derive_entity(input: TokenStream) -> TokenStream {
    let item: ItemStruct = parse_macro_input!(input as ItemStruct);
    let name = &item.ident;
    let table = decode_table(&item);
    let table_name = LitStr::new(&table.name, name.span());
    let columns = table.columns.iter().map(|c| {
        let ident = &c.ident;
        let ty = &c.ty;
        let column_name = &c.name;
        quote! {
            pub const #ident: ::ormlite::Column<#ty> = ::ormlite::Column::new(#table_name, #column_name);
        }
    });
    let field_defs = table.columns.iter().enumerate().map(|(i, c)| {
        let ty = &c.ty;
        let column_name = &c.name;
        quote!(::ormlite::FieldDef::new(#column_name, #i, <#ty as ::ormlite::FieldType>::KIND))
    });
    let visit = table.columns.iter().enumerate().map(|(i, c)| {
        let ident = &c.ident;
        quote!(visitor.visit(&self.#ident, &fields[#i], #i);)
    });
    let visit_mut = table.columns.iter().enumerate().map(|(i, c)| {
        let ident = &c.ident;
        quote!(visitor.visit(&mut self.#ident, &fields[#i], #i);)
    });
    quote! {
        #[allow(non_upper_case_globals)]
        impl #name {
            #(#columns)*
        }

        impl ::ormlite::Entity for #name {
            fn table_def() -> &'static ::ormlite::TableDef {
                static TABLE_DEF: ::std::sync::LazyLock<::ormlite::TableDef> =
                    ::std::sync::LazyLock::new(|| {
                        ::ormlite::TableDef::new(#table_name, vec![#(#field_defs),*])
                    });
                &TABLE_DEF
            }

            fn visit_fields(&self, visitor: &mut dyn ::ormlite::FieldVisitor) {
                let fields = &<Self as ::ormlite::Entity>::table_def().fields;
                #(#visit)*
            }

            fn visit_fields_mut(&mut self, visitor: &mut dyn ::ormlite::FieldVisitorMut) {
                let fields = &<Self as ::ormlite::Entity>::table_def().fields;
                #(#visit_mut)*
            }
        }

        impl ::ormlite::FromCells for #name {
            fn from_cells(row: ::ormlite::Row<'_>, column: &mut usize) -> Self {
                <Self as ::ormlite::Entity>::from_row(row, column)
            }
        }
    }
    .into()
}

/// Implements `FieldValue` and `FieldType` for a unit enum stored as its `#[repr]` integer.
///
/// Unknown discriminants decode to `Default::default()`.
#[proc_macro_derive(FieldValue)]
pub fn derive_field_value(input: TokenStream) -> TokenStream {
    let item: ItemEnum = parse_macro_input!(input as ItemEnum);
    field_value_enum(&item).into()
}
