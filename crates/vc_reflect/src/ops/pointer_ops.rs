use alloc::boxed::Box;

use crate::Reflect;

/// A trait for optional or owning references, such as `Option<T>` and `Box<T>`.
///
/// A nullable pointer (`Option<T>`) may be absent; a non-nullable pointer
/// (`Box<T>`) always has a pointee.
///
/// # Examples
///
/// ```
/// use vc_reflect::{Reflect, ops::Pointer};
///
/// let mut value: Option<String> = None;
/// assert!(value.is_null());
///
/// let fresh = value.new_pointee();
/// Pointer::replace(&mut value, fresh).unwrap();
/// assert_eq!(value.as_deref(), Some(""));
/// ```
pub trait Pointer: Reflect {
    /// Returns the pointee, or `None` if absent.
    fn pointee(&self) -> Option<&dyn Reflect>;

    /// Returns the pointee mutably, or `None` if absent.
    fn pointee_mut(&mut self) -> Option<&mut dyn Reflect>;

    /// Returns the pointee, allocating a default-initialized one if absent.
    fn pointee_or_alloc(&mut self) -> &mut dyn Reflect;

    /// Allocates a default-initialized value of the pointee type.
    ///
    /// The pointer itself is not modified.
    fn new_pointee(&self) -> Box<dyn Reflect>;

    /// Installs `value` as the new pointee.
    ///
    /// Returns `value` back if its type is not the pointee type.
    fn replace(&mut self, value: Box<dyn Reflect>) -> Result<(), Box<dyn Reflect>>;

    /// Removes and returns the pointee.
    ///
    /// Always `None` for non-nullable pointers, which stay populated.
    fn take_pointee(&mut self) -> Option<Box<dyn Reflect>>;

    /// Returns `true` if the pointer may be absent.
    fn is_nullable(&self) -> bool;

    #[inline]
    fn is_null(&self) -> bool {
        self.pointee().is_none()
    }
}
