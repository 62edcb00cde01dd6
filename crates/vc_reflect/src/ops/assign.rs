use alloc::borrow::Cow;
use core::{error, fmt};

use crate::Reflect;
use crate::info::TypePath;

// -----------------------------------------------------------------------------
// ReflectAssign

/// A custom conversion hook: assign a value of any type into `self`.
///
/// Register it with `#[reflect(assign)]` (or
/// [`StructInfo::with_assign_hook`]) so that consumers can find it through
/// [`TypeInfo::assign_hook`].
///
/// An `Err` tells the caller that the value was not accepted; the caller may
/// then fall back to structural assignment. Implementations should leave
/// `self` unchanged when returning `Err`.
///
/// [`StructInfo::with_assign_hook`]: crate::info::StructInfo::with_assign_hook
/// [`TypeInfo::assign_hook`]: crate::info::TypeInfo::assign_hook
pub trait ReflectAssign: Reflect + TypePath {
    fn assign_from(&mut self, value: &dyn Reflect) -> Result<(), AssignError>;
}

// -----------------------------------------------------------------------------
// AssignError

/// An error returned by a [`ReflectAssign`] hook.
#[derive(Debug)]
pub enum AssignError {
    /// The hook does not accept values of this type.
    Unsupported {
        target: &'static str,
        value: &'static str,
    },
    /// The value has an accepted type but was rejected.
    Rejected { reason: Cow<'static, str> },
    /// The hook was run on a target of another type.
    MismatchedTarget {
        expected: &'static str,
        received: &'static str,
    },
}

impl AssignError {
    /// Shorthand for [`AssignError::Unsupported`].
    #[inline]
    pub fn unsupported<T: TypePath>(value: &dyn Reflect) -> Self {
        Self::Unsupported {
            target: T::type_path(),
            value: value.reflect_type_path(),
        }
    }

    /// Shorthand for [`AssignError::Rejected`].
    #[inline]
    pub fn rejected(reason: impl Into<Cow<'static, str>>) -> Self {
        Self::Rejected {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for AssignError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unsupported { target, value } => {
                write!(f, "`{target}` cannot be assigned from `{value}`")
            }
            Self::Rejected { reason } => write!(f, "assignment rejected: {reason}"),
            Self::MismatchedTarget { expected, received } => {
                write!(f, "assign hook of `{expected}` ran on `{received}`")
            }
        }
    }
}

impl error::Error for AssignError {}
