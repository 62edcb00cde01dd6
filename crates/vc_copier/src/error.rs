use thiserror::Error;

// -----------------------------------------------------------------------------
// Error

/// The error of a whole copy.
///
/// Members that cannot be copied are skipped, never reported here.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CopyError {
    #[error("destination `{type_path}` is not addressable, pass it by mutable reference")]
    NotAddressable { type_path: &'static str },
}
