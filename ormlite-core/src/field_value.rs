use crate::{Entity, FieldDef, FieldVisitor, FixedBuf, Param, ValueKind, copy_fixed, trim_nul};
use atoi::{FromRadix10Checked, FromRadix10SignedChecked};
use std::str;

/// Native value of one record field, convertible to and from its wire text.
///
/// This is the object safe half of the codec: the field walker hands out `&dyn FieldValue` and
/// `&mut dyn FieldValue` projections so a visitor can encode or fill a field without knowing its
/// concrete type.
///
/// # Decoding contract
/// Decoding never fails. Malformed input, out of range numbers and SQL `NULL` (an empty cell) decode
/// best-effort to zero or to the empty value. Callers needing strict validation must check the cell
/// text themselves.
pub trait FieldValue {
    /// Storage kind of this value.
    fn kind(&self) -> ValueKind;
    /// Text representation used as statement parameter, `None` if the value cannot be expressed
    /// over the text protocol.
    fn encode(&self) -> Option<Param>;
    /// Overwrite this value with the content of a result cell.
    fn decode(&mut self, cell: &str);
    /// Render this value as a SQL literal.
    ///
    /// Panics when the value cannot be encoded.
    fn write_literal(&self, out: &mut String) {
        let Some(param) = self.encode() else {
            panic!(
                "Value of kind {} cannot be rendered as a SQL literal",
                self.kind()
            );
        };
        if self.kind().is_quoted() {
            write_quoted(out, param.as_str());
        } else {
            out.push_str(param.as_str());
        }
    }
}

pub(crate) fn write_quoted(out: &mut String, text: &str) {
    out.push('\'');
    out.push_str(text);
    out.push('\'');
}

fn non_finite_text(nan: bool, negative: bool) -> &'static str {
    if nan {
        "NaN"
    } else if negative {
        "-Infinity"
    } else {
        "Infinity"
    }
}

/// Field types usable in a record: a statically known kind and a zero value to decode into.
pub trait FieldType: FieldValue + Default + Sized {
    const KIND: ValueKind;
}

/// Decode a cell into a fresh `T`.
pub fn decode<T: FieldType>(cell: &str) -> T {
    let mut result = T::default();
    result.decode(cell);
    result
}

/// Encode every field of `entity` in declaration order.
///
/// Returns `None` when a field cannot be encoded or when there is nothing to bind.
pub fn encode_row<E: Entity>(entity: &E) -> Option<Vec<Param>> {
    struct Encoder {
        params: Vec<Param>,
        failed: bool,
    }
    impl FieldVisitor for Encoder {
        fn visit(&mut self, value: &dyn FieldValue, def: &FieldDef, _position: usize) {
            match value.encode() {
                Some(param) => self.params.push(param),
                None => {
                    log::warn!(
                        "Field `{}` of kind {} cannot be encoded as a text parameter",
                        def.name,
                        def.kind
                    );
                    self.failed = true;
                }
            }
        }
    }
    let mut encoder = Encoder {
        params: Vec::with_capacity(E::table_def().field_count()),
        failed: false,
    };
    entity.visit_fields(&mut encoder);
    if encoder.failed || encoder.params.is_empty() {
        return None;
    }
    Some(encoder.params)
}

pub(crate) fn parse_signed<T: FromRadix10SignedChecked + Default>(cell: &str) -> T {
    T::from_radix_10_signed_checked(cell.trim_start().as_bytes())
        .0
        .unwrap_or_default()
}

pub(crate) fn parse_unsigned<T: FromRadix10Checked + Default>(cell: &str) -> T {
    T::from_radix_10_checked(cell.trim_start().as_bytes())
        .0
        .unwrap_or_default()
}

macro_rules! impl_field_integer {
    ($source:ty, $kind:path, $parse:ident) => {
        impl FieldValue for $source {
            fn kind(&self) -> ValueKind {
                $kind
            }
            fn encode(&self) -> Option<Param> {
                let mut buffer = itoa::Buffer::new();
                Param::new(buffer.format(*self))
            }
            fn decode(&mut self, cell: &str) {
                *self = $parse(cell);
            }
        }
        impl FieldType for $source {
            const KIND: ValueKind = $kind;
        }
    };
}
impl_field_integer!(i8, ValueKind::Int8, parse_signed);
impl_field_integer!(i16, ValueKind::Int16, parse_signed);
impl_field_integer!(i32, ValueKind::Int32, parse_signed);
impl_field_integer!(i64, ValueKind::Int64, parse_signed);
impl_field_integer!(u8, ValueKind::UInt8, parse_unsigned);
impl_field_integer!(u16, ValueKind::UInt16, parse_unsigned);
impl_field_integer!(u32, ValueKind::UInt32, parse_unsigned);
impl_field_integer!(u64, ValueKind::UInt64, parse_unsigned);

macro_rules! impl_field_float {
    ($source:ty, $kind:path) => {
        impl FieldValue for $source {
            fn kind(&self) -> ValueKind {
                $kind
            }
            fn encode(&self) -> Option<Param> {
                if self.is_finite() {
                    let mut buffer = ryu::Buffer::new();
                    Param::new(buffer.format_finite(*self))
                } else {
                    Param::new(non_finite_text(self.is_nan(), self.is_sign_negative()))
                }
            }
            fn decode(&mut self, cell: &str) {
                *self = fast_float::parse_partial::<$source, _>(cell.trim())
                    .map(|(v, _)| v)
                    .unwrap_or_default();
            }
            /// Non finite values are quoted, Postgres casts `'NaN'` and `'Infinity'` to floats.
            fn write_literal(&self, out: &mut String) {
                if self.is_finite() {
                    let mut buffer = ryu::Buffer::new();
                    out.push_str(buffer.format_finite(*self));
                } else {
                    write_quoted(out, non_finite_text(self.is_nan(), self.is_sign_negative()));
                }
            }
        }
        impl FieldType for $source {
            const KIND: ValueKind = $kind;
        }
    };
}
impl_field_float!(f32, ValueKind::Float32);
impl_field_float!(f64, ValueKind::Float64);

impl FieldValue for bool {
    fn kind(&self) -> ValueKind {
        ValueKind::Boolean
    }
    fn encode(&self) -> Option<Param> {
        Param::new(if *self { "1" } else { "0" })
    }
    fn decode(&mut self, cell: &str) {
        let cell = cell.trim();
        *self = if cell.starts_with(['t', 'T']) {
            true
        } else {
            parse_signed::<i64>(cell) != 0
        };
    }
}
impl FieldType for bool {
    const KIND: ValueKind = ValueKind::Boolean;
}

impl FieldValue for String {
    fn kind(&self) -> ValueKind {
        ValueKind::Text
    }
    fn encode(&self) -> Option<Param> {
        Param::new(self.as_str())
    }
    fn decode(&mut self, cell: &str) {
        self.clear();
        self.push_str(cell);
    }
}
impl FieldType for String {
    const KIND: ValueKind = ValueKind::Text;
}

impl<const N: usize> FieldValue for FixedBuf<N> {
    fn kind(&self) -> ValueKind {
        ValueKind::FixedBuffer(N)
    }
    fn encode(&self) -> Option<Param> {
        Param::new(self.as_str()?)
    }
    fn decode(&mut self, cell: &str) {
        copy_fixed(&mut self.0, cell.as_bytes());
    }
}
impl<const N: usize> FieldType for FixedBuf<N> {
    const KIND: ValueKind = ValueKind::FixedBuffer(N);
}

impl<const N: usize> FieldValue for [u8; N] {
    fn kind(&self) -> ValueKind {
        ValueKind::FixedBuffer(N)
    }
    fn encode(&self) -> Option<Param> {
        Param::new(str::from_utf8(trim_nul(self)).ok()?)
    }
    fn decode(&mut self, cell: &str) {
        copy_fixed(self, cell.as_bytes());
    }
}
impl<const N: usize> FieldType for [u8; N]
where
    [u8; N]: Default,
{
    const KIND: ValueKind = ValueKind::FixedBuffer(N);
}
