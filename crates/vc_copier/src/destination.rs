use vc_reflect::Reflect;

/// The value a copy writes into.
///
/// Only a mutable borrow is addressable. A shared borrow is accepted so that
/// the mistake is reported as [`CopyError::NotAddressable`] instead of
/// failing to compile in generic code.
///
/// ```
/// use vc_copier::Destination;
///
/// let mut value = 5_u8;
/// assert!(Destination::from(&mut value).is_writable());
/// assert!(!Destination::from(&value).is_writable());
/// ```
///
/// [`CopyError::NotAddressable`]: crate::CopyError::NotAddressable
pub enum Destination<'a> {
    Writable(&'a mut dyn Reflect),
    ReadOnly(&'a dyn Reflect),
}

impl Destination<'_> {
    #[inline]
    pub const fn is_writable(&self) -> bool {
        matches!(self, Self::Writable(_))
    }

    /// The type path of the referenced value.
    pub fn type_path(&self) -> &'static str {
        match self {
            Self::Writable(value) => value.reflect_type_path(),
            Self::ReadOnly(value) => value.reflect_type_path(),
        }
    }
}

impl<'a, T: Reflect> From<&'a mut T> for Destination<'a> {
    #[inline]
    fn from(value: &'a mut T) -> Self {
        Self::Writable(value)
    }
}

impl<'a> From<&'a mut dyn Reflect> for Destination<'a> {
    #[inline]
    fn from(value: &'a mut dyn Reflect) -> Self {
        Self::Writable(value)
    }
}

impl<'a, T: Reflect> From<&'a T> for Destination<'a> {
    #[inline]
    fn from(value: &'a T) -> Self {
        Self::ReadOnly(value)
    }
}

impl<'a> From<&'a dyn Reflect> for Destination<'a> {
    #[inline]
    fn from(value: &'a dyn Reflect) -> Self {
        Self::ReadOnly(value)
    }
}

impl core::fmt::Debug for Destination<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let kind = if self.is_writable() { "Writable" } else { "ReadOnly" };
        f.debug_tuple(kind).field(&self.type_path()).finish()
    }
}
