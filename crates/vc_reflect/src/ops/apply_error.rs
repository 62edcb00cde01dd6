use alloc::borrow::Cow;
use core::{error, fmt};

use crate::info::{ReflectKind, ReflectKindError};

/// A enumeration of all error outcomes that might happen when running [`try_apply`].
///
/// [`try_apply`]: crate::Reflect::try_apply
#[derive(Debug)]
pub enum ApplyError {
    /// The type does not support `apply`, or a non-nullable pointer was asked to become absent.
    NotSupport { type_path: Cow<'static, str> },
    /// Tried to apply incompatible types.
    MismatchedTypes {
        from_type: Cow<'static, str>,
        to_type: Cow<'static, str>,
    },
    /// Tried to apply a different kind to a value, e.g. a list to a struct.
    MismatchedKinds {
        from_kind: ReflectKind,
        to_kind: ReflectKind,
    },
    /// A list element could not be inserted.
    RejectedItem { list_type: Cow<'static, str> },
}

impl fmt::Display for ApplyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotSupport { type_path } => {
                write!(f, "type `{type_path}` does not support `apply`")
            }
            Self::MismatchedTypes { from_type, to_type } => {
                write!(f, "attempted to apply `{from_type}` to `{to_type}`")
            }
            Self::MismatchedKinds { from_kind, to_kind } => {
                write!(f, "attempted to apply `{from_kind}` to `{to_kind}`")
            }
            Self::RejectedItem { list_type } => {
                write!(f, "list `{list_type}` rejected an item during `apply`")
            }
        }
    }
}

impl error::Error for ApplyError {}

impl From<ReflectKindError> for ApplyError {
    #[inline]
    fn from(value: ReflectKindError) -> Self {
        Self::MismatchedKinds {
            from_kind: value.received,
            to_kind: value.expected,
        }
    }
}
