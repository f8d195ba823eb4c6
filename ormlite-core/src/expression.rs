use crate::{FieldValue, field_value::write_quoted};
use std::{
    fmt::{self, Display, Formatter},
    ops::{BitAnd, BitOr, BitXor, Rem},
};

/// Rendered SQL fragment bound to the table it references.
///
/// Expressions are immutable, every combinator returns a new one. Combinators do not add
/// parentheses: `a.or(b).and(c)` renders as `a or b and c` and grouping is up to the caller.
#[derive(Debug, Clone)]
pub struct Expr {
    text: String,
    table: &'static str,
}

impl Expr {
    /// Reference to the column `name` of `table`.
    pub fn field_ref(table: &'static str, name: &str) -> Self {
        Self {
            text: name.to_string(),
            table,
        }
    }
    pub fn text(&self) -> &str {
        &self.text
    }
    pub fn table(&self) -> &'static str {
        self.table
    }
    pub fn into_text(self) -> String {
        self.text
    }

    pub fn eq(&self, rhs: impl Operand) -> Expr {
        self.binary("=", &rhs)
    }
    pub fn ne(&self, rhs: impl Operand) -> Expr {
        self.binary("!=", &rhs)
    }
    pub fn lt(&self, rhs: impl Operand) -> Expr {
        self.binary("<", &rhs)
    }
    pub fn gt(&self, rhs: impl Operand) -> Expr {
        self.binary(">", &rhs)
    }
    pub fn le(&self, rhs: impl Operand) -> Expr {
        self.binary("<=", &rhs)
    }
    pub fn ge(&self, rhs: impl Operand) -> Expr {
        self.binary(">=", &rhs)
    }
    /// `<lhs> like '<pattern>'`, the pattern is not escaped.
    pub fn like(&self, pattern: &str) -> Expr {
        self.pattern("like", pattern)
    }
    /// `<lhs> not like '<pattern>'`, the pattern is not escaped.
    pub fn not_like(&self, pattern: &str) -> Expr {
        self.pattern("not like", pattern)
    }
    pub fn and(&self, rhs: impl Operand) -> Expr {
        self.binary("and", &rhs)
    }
    pub fn or(&self, rhs: impl Operand) -> Expr {
        self.binary("or", &rhs)
    }
    /// Assignment for `update ... set`.
    pub fn set(&self, rhs: impl Operand) -> Expr {
        self.binary("=", &rhs)
    }
    /// Comma separated list, used to chain assignments or sort keys.
    pub fn chain(&self, rhs: impl Operand) -> Expr {
        let mut text = String::with_capacity(self.text.len() + 16);
        text.push_str(&self.text);
        text.push_str(", ");
        self.check_table(&rhs);
        rhs.write_operand(&mut text);
        Expr {
            text,
            table: self.table,
        }
    }

    fn binary(&self, op: &str, rhs: &dyn Operand) -> Expr {
        self.check_table(rhs);
        let mut text = String::with_capacity(self.text.len() + op.len() + 16);
        text.push_str(&self.text);
        text.push(' ');
        text.push_str(op);
        text.push(' ');
        rhs.write_operand(&mut text);
        Expr {
            text,
            table: self.table,
        }
    }

    fn pattern(&self, op: &str, pattern: &str) -> Expr {
        let mut text = String::with_capacity(self.text.len() + op.len() + pattern.len() + 4);
        text.push_str(&self.text);
        text.push(' ');
        text.push_str(op);
        text.push_str(" '");
        text.push_str(pattern);
        text.push('\'');
        Expr {
            text,
            table: self.table,
        }
    }

    fn check_table(&self, rhs: &dyn Operand) {
        if let Some(table) = rhs.table() {
            assert!(
                table == self.table,
                "Cannot combine an expression on table `{}` with one on table `{}`",
                self.table,
                table
            );
        }
    }
}

impl Display for Expr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Right hand side of a combinator: another expression or a literal value.
pub trait Operand {
    /// Append the SQL text of this operand.
    fn write_operand(&self, out: &mut String);
    /// Table referenced by the operand, `None` for literals.
    fn table(&self) -> Option<&'static str> {
        None
    }
}

impl Operand for Expr {
    fn write_operand(&self, out: &mut String) {
        out.push_str(&self.text);
    }
    fn table(&self) -> Option<&'static str> {
        Some(self.table)
    }
}

impl Operand for &Expr {
    fn write_operand(&self, out: &mut String) {
        out.push_str(&self.text);
    }
    fn table(&self) -> Option<&'static str> {
        Some(self.table)
    }
}

impl<T: FieldValue> Operand for T {
    fn write_operand(&self, out: &mut String) {
        self.write_literal(out);
    }
}

impl Operand for &str {
    fn write_operand(&self, out: &mut String) {
        assert!(
            !self.contains('\0'),
            "Text containing a NUL byte cannot be rendered as a SQL literal"
        );
        write_quoted(out, self);
    }
}

impl<R: Operand> BitAnd<R> for Expr {
    type Output = Expr;
    fn bitand(self, rhs: R) -> Expr {
        self.and(rhs)
    }
}

impl<R: Operand> BitOr<R> for Expr {
    type Output = Expr;
    fn bitor(self, rhs: R) -> Expr {
        self.or(rhs)
    }
}

impl Rem<&str> for Expr {
    type Output = Expr;
    fn rem(self, pattern: &str) -> Expr {
        self.like(pattern)
    }
}

impl BitXor<&str> for Expr {
    type Output = Expr;
    fn bitxor(self, pattern: &str) -> Expr {
        self.not_like(pattern)
    }
}
