use proc_macro2::TokenStream;
use quote::quote;
use syn::{Fields, Ident, ItemEnum};

fn repr_kind(item: &ItemEnum) -> (Ident, TokenStream) {
    let mut repr = Ident::new("i32", item.ident.span());
    for attr in &item.attrs {
        if attr.path().is_ident("repr") {
            let _ = attr.parse_nested_meta(|arg| {
                if let Some(ident) = arg.path.get_ident() {
                    repr = ident.clone();
                }
                Ok(())
            });
        }
    }
    let kind = match repr.to_string().as_str() {
        "i8" => quote!(::ormlite::ValueKind::Int8),
        "i16" => quote!(::ormlite::ValueKind::Int16),
        "i32" => quote!(::ormlite::ValueKind::Int32),
        "i64" => quote!(::ormlite::ValueKind::Int64),
        "u8" => quote!(::ormlite::ValueKind::UInt8),
        "u16" => quote!(::ormlite::ValueKind::UInt16),
        "u32" => quote!(::ormlite::ValueKind::UInt32),
        "u64" => quote!(::ormlite::ValueKind::UInt64),
        other => panic!(
            "FieldValue cannot be derived on `{}` with `#[repr({})]`, use an integer up to 64 bits",
            item.ident, other
        ),
    };
    (repr, kind)
}

pub fn field_value_enum(item: &ItemEnum) -> TokenStream {
    let name = &item.ident;
    if !item.generics.params.is_empty() {
        panic!(
            "FieldValue cannot be derived on `{}` because it has generic parameters",
            name
        );
    }
    if let Some(variant) = item.variants.iter().find(|v| !matches!(v.fields, Fields::Unit)) {
        panic!(
            "FieldValue can only be derived on enums of unit variants, `{}::{}` carries data",
            name, variant.ident
        );
    }
    let (repr, kind) = repr_kind(item);
    let variants: Vec<_> = item.variants.iter().map(|v| &v.ident).collect();
    quote! {
        impl ::ormlite::FieldValue for #name {
            fn kind(&self) -> ::ormlite::ValueKind {
                <Self as ::ormlite::FieldType>::KIND
            }
            fn encode(&self) -> ::std::option::Option<::ormlite::Param> {
                let value: #repr = match self {
                    #(Self::#variants => Self::#variants as #repr,)*
                };
                ::ormlite::FieldValue::encode(&value)
            }
            fn decode(&mut self, cell: &str) {
                let value = ::ormlite::decode::<#repr>(cell);
                *self = match value {
                    #(v if v == Self::#variants as #repr => Self::#variants,)*
                    _ => ::std::default::Default::default(),
                };
            }
        }

        impl ::ormlite::FieldType for #name {
            const KIND: ::ormlite::ValueKind = ::ormlite::ValueKind::Enum(&#kind);
        }
    }
}
