//! Compile-time name carrier for generated declarations.
//!
//! Generated bindings attach member names as constants so they can be handed
//! to the runtime's C API without allocation or conversion at the access
//! site. The backing store is an inline array sized exactly to the literal
//! plus its NUL terminator.

use std::{
    ffi::{c_char, CStr},
    fmt::{self, Debug, Display, Formatter},
    ops::Deref,
    str,
};

#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct NameLiteral<const N: usize> {
    data: [u8; N],
}

impl<const N: usize> NameLiteral<N> {
    /// Captures `name` with a trailing NUL. `N` must be `name.len() + 1` and
    /// the literal must not contain interior NUL bytes; both are enforced at
    /// compile time.
    pub const fn new(name: &str) -> Self {
        assert!(name.len() + 1 == N, "carrier size must be literal length plus terminator");
        let bytes = name.as_bytes();
        let mut data = [0u8; N];
        let mut i = 0;
        while i < bytes.len() {
            assert!(bytes[i] != 0, "member names cannot contain NUL bytes");
            data[i] = bytes[i];
            i += 1;
        }
        Self { data }
    }

    pub const fn len(&self) -> usize {
        N - 1
    }

    pub const fn is_empty(&self) -> bool {
        N == 1
    }

    pub fn as_str(&self) -> &str {
        str::from_utf8(&self.data[..N - 1]).unwrap()
    }

    pub fn as_c_str(&self) -> &CStr {
        CStr::from_bytes_with_nul(&self.data).unwrap()
    }

    /// NUL-terminated pointer for the runtime's C API.
    pub fn as_ptr(&self) -> *const c_char {
        self.data.as_ptr().cast()
    }
}

impl<const N: usize> Deref for NameLiteral<N> {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        self.as_str()
    }
}

impl<const N: usize> Debug for NameLiteral<N> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.as_str())
    }
}

impl<const N: usize> Display for NameLiteral<N> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Builds a [`NameLiteral`] from a string literal, inferring the carrier
/// size.
#[macro_export]
macro_rules! name_literal {
    ($name:literal) => {
        $crate::name::NameLiteral::<{ $name.len() + 1 }>::new($name)
    };
}
