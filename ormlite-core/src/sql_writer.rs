use crate::{Constraint, Entity, ValueKind, constraint::ResolvedConstraints, separated_by};
use std::fmt::Write;

/// Renders the statements that depend only on the record metadata.
///
/// Every method has a default implementation producing Postgres flavored SQL, drivers override
/// the pieces their dialect spells differently.
pub trait SqlWriter {
    fn write_identifier(&self, out: &mut String, value: &str) {
        out.push_str(value);
    }

    fn write_column_type(&self, out: &mut String, kind: &ValueKind) {
        match kind {
            ValueKind::Boolean
            | ValueKind::Int32
            | ValueKind::UInt32
            | ValueKind::Enum(..) => out.push_str("integer"),
            ValueKind::Int8 | ValueKind::Int16 | ValueKind::UInt8 | ValueKind::UInt16 => {
                out.push_str("smallint")
            }
            ValueKind::Int64 | ValueKind::UInt64 => out.push_str("bigint"),
            ValueKind::Float32 => out.push_str("real"),
            ValueKind::Float64 => out.push_str("double precision"),
            ValueKind::Text => out.push_str("text"),
            ValueKind::FixedBuffer(len) => {
                let _ = write!(out, "varchar({})", len);
            }
        }
    }

    fn write_placeholder(&self, out: &mut String, index: usize) {
        let mut buffer = itoa::Buffer::new();
        out.push('$');
        out.push_str(buffer.format(index));
    }

    /// `create table if not exists <table>(<field> <type>[ <modifier>], ...);`
    ///
    /// Panics when `constraints` holds both a primary key and an auto primary key.
    fn write_create_table<E: Entity>(&self, out: &mut String, constraints: &[Constraint])
    where
        Self: Sized,
    {
        let constraints = ResolvedConstraints::new(constraints);
        let table = E::table_def();
        out.push_str("create table if not exists ");
        self.write_identifier(out, table.name);
        out.push('(');
        separated_by(
            out,
            table.fields.iter(),
            |out, field| {
                self.write_identifier(out, field.name);
                out.push(' ');
                self.write_column_type(out, &field.kind);
                out.push_str(constraints.modifier(field.name));
            },
            ", ",
        );
        out.push_str(");");
    }

    fn write_drop_table<E: Entity>(&self, out: &mut String, if_exists: bool)
    where
        Self: Sized,
    {
        out.push_str("drop table ");
        if if_exists {
            out.push_str("if exists ");
        }
        self.write_identifier(out, E::table_name());
        out.push(';');
    }

    /// `insert into <table>(<fields>) values($1, ..., $N);`
    fn write_insert<E: Entity>(&self, out: &mut String)
    where
        Self: Sized,
    {
        let table = E::table_def();
        out.push_str("insert into ");
        self.write_identifier(out, table.name);
        out.push('(');
        separated_by(
            out,
            table.field_names(),
            |out, name| self.write_identifier(out, name),
            ", ",
        );
        out.push_str(") values(");
        separated_by(
            out,
            1..=table.field_count(),
            |out, index| self.write_placeholder(out, index),
            ", ",
        );
        out.push_str(");");
    }
}
