use crate::decode_column::{ColumnMetadata, decode_column};
use convert_case::{Case, Casing};
use syn::{Fields, ItemStruct, LitStr, parse::ParseBuffer};

pub(crate) struct TableMetadata {
    pub(crate) name: String,
    pub(crate) columns: Vec<ColumnMetadata>,
}

pub fn decode_table(item: &ItemStruct) -> TableMetadata {
    if !item.generics.params.is_empty() {
        panic!(
            "Entity cannot be derived on `{}` because it has generic parameters",
            item.ident
        );
    }
    if !matches!(item.fields, Fields::Named(..)) {
        panic!(
            "Entity can only be derived on structs with named fields, `{}` is not one",
            item.ident
        );
    }
    let mut name = item.ident.to_string().to_case(Case::Snake);
    if name.starts_with('_') {
        name.remove(0);
    }
    for attr in &item.attrs {
        let meta = &attr.meta;
        if meta.path().is_ident("ormlite") {
            let Ok(list) = meta.require_list() else {
                panic!(
                    "Error while parsing `ormlite`, use it like: `#[ormlite(name = \"my_table\")]`"
                );
            };
            let _ = list.parse_nested_meta(|arg| {
                if arg.path.is_ident("name") {
                    let Ok(value) = arg.value().and_then(ParseBuffer::parse::<LitStr>) else {
                        panic!(
                            "Error while parsing `name`, use it like: `#[ormlite(name = \"my_table\")]`"
                        );
                    };
                    name = value.value();
                } else {
                    panic!(
                        "Unknown attribute `{}` on `{}`, the only accepted one is `name`",
                        arg.path
                            .get_ident()
                            .map(ToString::to_string)
                            .unwrap_or_default(),
                        item.ident
                    );
                }
                Ok(())
            });
        }
    }
    let columns: Vec<_> = item.fields.iter().map(decode_column).collect();
    if columns.is_empty() {
        panic!("Entity `{}` must declare at least one field", item.ident);
    }
    TableMetadata { name, columns }
}
