/// Configuration of a [`Copier`](crate::Copier).
///
/// ```
/// use vc_copier::CopyOptions;
///
/// let options = CopyOptions::new().with_ignore_empty(true);
/// assert!(options.ignore_empty);
/// assert!(!CopyOptions::default().ignore_empty);
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub struct CopyOptions {
    /// Source values that are empty do not overwrite the destination.
    ///
    /// Empty means zero numbers, `false`, `'\0'`, empty strings, zero
    /// durations and empty lists. Setters are not invoked with empty values
    /// either.
    pub ignore_empty: bool,
}

impl CopyOptions {
    #[inline]
    pub const fn new() -> Self {
        Self {
            ignore_empty: false,
        }
    }

    #[inline]
    pub const fn with_ignore_empty(mut self, ignore_empty: bool) -> Self {
        self.ignore_empty = ignore_empty;
        self
    }
}
