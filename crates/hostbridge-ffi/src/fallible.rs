//! Fallible values handed back by the host API.
//!
//! The host represents "might not materialize" and "might be absent" as
//! distinct container shapes. Both collapse into [`Fallible`], and plain
//! values pass through untouched, so call sites that know a value is present
//! can use [`unwrap`] regardless of which shape they were given.

use std::cell::OnceCell;
use std::sync::OnceLock;

/// Panic message used by [`unwrap`].
pub const ABSENT_VALUE: &str = "required value was absent";

/// A value that is either present or absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Fallible<T> {
    Present(T),
    Absent,
}

impl<T> Fallible<T> {
    /// Extract the value, panicking with `message` if it is absent.
    ///
    /// Absence here is a broken invariant at the call site, not a condition
    /// to recover from.
    #[track_caller]
    pub fn expect(self, message: &str) -> T {
        match self {
            Self::Present(value) => value,
            Self::Absent => panic!("{message}"),
        }
    }

    pub fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Fallible<U> {
        match self {
            Self::Present(value) => Fallible::Present(f(value)),
            Self::Absent => Fallible::Absent,
        }
    }

    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Present(value) => Some(value),
            Self::Absent => None,
        }
    }
}

impl<T> From<Option<T>> for Fallible<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => Self::Present(v),
            None => Self::Absent,
        }
    }
}

/// Container shapes that can be unwrapped into a required value.
pub trait Required {
    type Value;

    fn into_fallible(self) -> Fallible<Self::Value>;
}

impl<T> Required for Fallible<T> {
    type Value = T;

    fn into_fallible(self) -> Fallible<T> {
        self
    }
}

impl<T> Required for Option<T> {
    type Value = T;

    fn into_fallible(self) -> Fallible<T> {
        self.into()
    }
}

// Deferred cells: empty until something materializes the value.
impl<T> Required for OnceCell<T> {
    type Value = T;

    fn into_fallible(self) -> Fallible<T> {
        self.into_inner().into()
    }
}

impl<T> Required for OnceLock<T> {
    type Value = T;

    fn into_fallible(self) -> Fallible<T> {
        self.into_inner().into()
    }
}

macro_rules! plain_required {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Required for $ty {
                type Value = $ty;

                fn into_fallible(self) -> Fallible<$ty> {
                    Fallible::Present(self)
                }
            }
        )*
    };
}

plain_required!(
    bool, char, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64, String,
    &'static str,
);

/// Extract the value from any [`Required`] container.
///
/// Plain values are returned unchanged. Panics if the container is empty.
#[track_caller]
pub fn unwrap<C: Required>(container: C) -> C::Value {
    container.into_fallible().expect(ABSENT_VALUE)
}
