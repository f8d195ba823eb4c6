use syn::{Field, Ident, LitStr, Type, parse::ParseBuffer};

pub(crate) struct ColumnMetadata {
    pub(crate) ident: Ident,
    pub(crate) ty: Type,
    pub(crate) name: String,
}

pub fn decode_column(field: &Field) -> ColumnMetadata {
    let Some(ident) = field.ident.clone() else {
        panic!("Entity can only be derived on structs with named fields");
    };
    let mut name = ident.to_string();
    if let Some(stripped) = name.strip_prefix("r#") {
        name = stripped.to_string();
    }
    for attr in &field.attrs {
        let meta = &attr.meta;
        if meta.path().is_ident("ormlite") {
            let Ok(list) = meta.require_list() else {
                panic!(
                    "Error while parsing `ormlite` on field `{}`, use it like: `#[ormlite(name = \"column\")]`",
                    ident
                );
            };
            let _ = list.parse_nested_meta(|arg| {
                if arg.path.is_ident("name") {
                    let Ok(value) = arg.value().and_then(ParseBuffer::parse::<LitStr>) else {
                        panic!(
                            "Error while parsing `name`, use it like: `#[ormlite(name = \"column\")]`"
                        );
                    };
                    name = value.value();
                } else {
                    panic!(
                        "Unknown attribute `{}` on field `{}`, the only accepted one is `name`",
                        arg.path
                            .get_ident()
                            .map(ToString::to_string)
                            .unwrap_or_default(),
                        ident
                    );
                }
                Ok(())
            });
        }
    }
    ColumnMetadata {
        ident,
        ty: field.ty.clone(),
        name,
    }
}
