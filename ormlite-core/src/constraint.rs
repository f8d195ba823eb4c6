use std::collections::BTreeSet;

/// Column constraint markers accepted by `create_table`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Constraint {
    /// The named field is the primary key.
    PrimaryKey(&'static str),
    /// The named field is a database generated (`serial`) primary key.
    AutoPrimaryKey(&'static str),
    /// The named fields reject `NULL`.
    NotNull(BTreeSet<&'static str>),
}

impl Constraint {
    pub fn not_null(fields: impl IntoIterator<Item = &'static str>) -> Self {
        Constraint::NotNull(fields.into_iter().collect())
    }
}

/// Column modifiers resolved from a list of constraints.
#[derive(Debug, Default)]
pub(crate) struct ResolvedConstraints<'a> {
    pub(crate) primary_key: Option<&'static str>,
    pub(crate) auto_primary_key: Option<&'static str>,
    pub(crate) not_null: Vec<&'a BTreeSet<&'static str>>,
}

impl<'a> ResolvedConstraints<'a> {
    /// Panics when both a primary key and an auto primary key are given.
    pub(crate) fn new(constraints: &'a [Constraint]) -> Self {
        let mut result = Self::default();
        for constraint in constraints {
            match constraint {
                Constraint::PrimaryKey(field) => result.primary_key = Some(*field),
                Constraint::AutoPrimaryKey(field) => result.auto_primary_key = Some(*field),
                Constraint::NotNull(fields) => result.not_null.push(fields),
            }
        }
        assert!(
            result.primary_key.is_none() || result.auto_primary_key.is_none(),
            "A table cannot declare both a primary key and an auto primary key"
        );
        result
    }

    /// Modifier written after the column type, the key markers win over `not null`.
    pub(crate) fn modifier(&self, field: &str) -> &'static str {
        if self.primary_key == Some(field) {
            " primary key"
        } else if self.auto_primary_key == Some(field) {
            " serial primary key"
        } else if self.not_null.iter().any(|v| v.contains(field)) {
            " not null"
        } else {
            ""
        }
    }
}
