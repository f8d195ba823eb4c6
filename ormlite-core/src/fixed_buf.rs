use crate::truncated;
use std::{
    fmt::{self, Debug, Display, Formatter},
    str,
};

/// Fixed size byte buffer, stored in a `varchar(N)` column.
///
/// The logical content ends at the first NUL byte (or at `N`), the remaining bytes are zero.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct FixedBuf<const N: usize>(pub [u8; N]);

impl<const N: usize> FixedBuf<N> {
    pub const LEN: usize = N;

    /// Copies `min(N, bytes.len())` bytes, zero padding the rest.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let mut result = Self::default();
        copy_fixed(&mut result.0, bytes);
        result
    }
    /// Content up to the first NUL byte.
    pub fn as_bytes(&self) -> &[u8] {
        trim_nul(&self.0)
    }
    /// Content as text, `None` when it is not valid UTF-8.
    pub fn as_str(&self) -> Option<&str> {
        str::from_utf8(self.as_bytes()).ok()
    }
}

impl<const N: usize> Default for FixedBuf<N> {
    fn default() -> Self {
        Self([0; N])
    }
}

impl<const N: usize> From<&str> for FixedBuf<N> {
    /// Copies the longest prefix of `value` fitting in `N` bytes without splitting a character.
    fn from(value: &str) -> Self {
        Self::from_bytes(truncated(value, N).as_bytes())
    }
}

impl<const N: usize> From<[u8; N]> for FixedBuf<N> {
    fn from(value: [u8; N]) -> Self {
        Self(value)
    }
}

impl<const N: usize> Display for FixedBuf<N> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&String::from_utf8_lossy(self.as_bytes()))
    }
}

impl<const N: usize> Debug for FixedBuf<N> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "FixedBuf<{}>({:?})", N, String::from_utf8_lossy(self.as_bytes()))
    }
}

impl<const N: usize> PartialEq<&str> for FixedBuf<N> {
    fn eq(&self, other: &&str) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

pub(crate) fn trim_nul(bytes: &[u8]) -> &[u8] {
    let end = bytes.iter().position(|b| *b == 0).unwrap_or(bytes.len());
    &bytes[..end]
}

pub(crate) fn copy_fixed(destination: &mut [u8], source: &[u8]) {
    let len = source.len().min(destination.len());
    destination[..len].copy_from_slice(&source[..len]);
    destination[len..].fill(0);
}
