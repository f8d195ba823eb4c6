use std::fmt::{self, Display, Formatter};

/// Text of one outbound statement parameter.
///
/// Parameters travel over the text protocol, the content never contains a NUL byte so it can be
/// handed to drivers expecting null terminated strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Param(Box<str>);

impl Param {
    /// Returns `None` when `text` contains a NUL byte.
    pub fn new(text: impl Into<String>) -> Option<Self> {
        let text = text.into();
        if text.contains('\0') {
            return None;
        }
        Some(Self(text.into_boxed_str()))
    }
    pub fn as_str(&self) -> &str {
        &self.0
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    /// Bytes followed by the terminating NUL.
    pub fn to_bytes_with_nul(&self) -> Vec<u8> {
        let mut result = Vec::with_capacity(self.0.len() + 1);
        result.extend_from_slice(self.0.as_bytes());
        result.push(0);
        result
    }
}

impl AsRef<str> for Param {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl Display for Param {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
