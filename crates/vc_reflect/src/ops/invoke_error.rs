use core::{error, fmt};

/// An error returned when invoking a [`MethodInfo`].
///
/// [`MethodInfo`]: crate::info::MethodInfo
#[derive(Debug)]
pub enum InvokeError {
    NotAGetter { name: &'static str },
    NotASetter { name: &'static str },
    MismatchedReceiver {
        expected: &'static str,
        received: &'static str,
    },
    MismatchedArgument {
        expected: &'static str,
        received: &'static str,
    },
}

impl fmt::Display for InvokeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotAGetter { name } => write!(f, "method `{name}` is not a getter"),
            Self::NotASetter { name } => write!(f, "method `{name}` is not a setter"),
            Self::MismatchedReceiver { expected, received } => {
                write!(f, "method expects receiver `{expected}`, got `{received}`")
            }
            Self::MismatchedArgument { expected, received } => {
                write!(f, "method expects argument `{expected}`, got `{received}`")
            }
        }
    }
}

impl error::Error for InvokeError {}
