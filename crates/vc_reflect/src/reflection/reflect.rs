use alloc::boxed::Box;
use core::any::{Any, TypeId};
use core::fmt;

use crate::info::{DynamicTypePath, DynamicTyped, ReflectKind};
use crate::ops::{ApplyError, ReflectCloneError, ReflectMut, ReflectRef};

// -----------------------------------------------------------------------------
// Reflect

/// The foundational trait for runtime reflection in [`vc_reflect`].
///
/// This trait enables dynamic access and modification of data without
/// compile-time type information.
///
/// It's strongly recommended to use [the derive macro for `Reflect`] rather than
/// implementing this trait by hand.
///
/// # Type Identification
///
/// While `Reflect` supports [`Any`], note that [`Any::type_id`] on `Box<dyn Reflect>`
/// returns the container's type ID, not the inner value's. Use [`Reflect::ty_id`] instead:
///
/// ```rust
/// # use vc_reflect::Reflect;
/// # use core::any::{Any, TypeId};
/// let x: Box<dyn Reflect> = Box::new(32_i32).into_reflect();
///
/// assert!(x.type_id() != TypeId::of::<i32>());    // Container type ID
/// assert!(x.ty_id() == TypeId::of::<i32>());      // Preferred method
/// ```
///
/// # Type Casting
///
/// Use [`reflect_ref`] and [`reflect_mut`] to cast to a reflection subtype
/// ([`Struct`], [`List`], [`Pointer`]); opaque values stay `dyn Reflect`.
///
/// ```rust
/// # use vc_reflect::{Reflect, ops::List};
/// let vec = vec![1, 2, 3].into_boxed_reflect();
/// let list: &dyn List = vec.reflect_ref().as_list().unwrap();
/// assert_eq!(list.len(), 3);
/// ```
///
/// [`reflect_ref`]: Reflect::reflect_ref
/// [`reflect_mut`]: Reflect::reflect_mut
/// [`vc_reflect`]: crate
/// [the derive macro for `Reflect`]: crate::derive::Reflect
/// [`Struct`]: crate::ops::Struct
/// [`List`]: crate::ops::List
/// [`Pointer`]: crate::ops::Pointer
pub trait Reflect: DynamicTypePath + DynamicTyped + Send + Sync + Any {
    /// Casts this type to a fully-reflected value.
    #[inline(always)]
    fn as_reflect(&self) -> &dyn Reflect
    where
        Self: Sized,
    {
        self
    }

    /// Casts this type to a mutable, fully-reflected value.
    #[inline(always)]
    fn as_reflect_mut(&mut self) -> &mut dyn Reflect
    where
        Self: Sized,
    {
        self
    }

    /// Casts this type to a boxed, fully-reflected value.
    #[inline(always)]
    fn into_reflect(self: Box<Self>) -> Box<dyn Reflect>
    where
        Self: Sized,
    {
        self
    }

    /// Casts this type to a boxed, fully-reflected value.
    ///
    /// ```
    /// use vc_reflect::Reflect;
    ///
    /// let r = 32.into_boxed_reflect();
    /// assert!(r.is::<i32>());
    /// ```
    #[inline(always)]
    fn into_boxed_reflect(self) -> Box<dyn Reflect>
    where
        Self: Sized,
    {
        Box::new(self)
    }

    /// Return the [`TypeId`] of underlying type.
    #[inline]
    fn ty_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    /// Performs a type-checked assignment of a reflected value to this value.
    ///
    /// This is type strict; to allow compatible-but-not-identical inputs,
    /// use [`Reflect::try_apply`].
    ///
    /// ```
    /// # use vc_reflect::Reflect;
    /// let data = vec![1_i32, 2_i32, 3_i32].into_boxed_reflect();
    /// let mut vec = Vec::<i32>::new();
    ///
    /// vec.set(data).unwrap();
    /// assert_eq!(vec, [1, 2, 3]);
    /// ```
    fn set(&mut self, value: Box<dyn Reflect>) -> Result<(), Box<dyn Reflect>>;

    /// Returns a pure enumeration of ["kinds"](ReflectKind) of type.
    fn reflect_kind(&self) -> ReflectKind;

    /// Returns an immutable enumeration of ["kinds"](ReflectRef) of type.
    fn reflect_ref(&self) -> ReflectRef<'_>;

    /// Returns a mutable enumeration of ["kinds"](ReflectMut) of type.
    fn reflect_mut(&mut self) -> ReflectMut<'_>;

    /// Try applies a reflected value to this value.
    ///
    /// # Apply Rules
    ///
    /// If `self.ty_id` == `value.ty_id` and the type supports `Clone`, the value
    /// is cloned and assigned. Otherwise the kind specific helper runs:
    ///
    /// - [`crate::impls::struct_try_apply`]
    /// - [`crate::impls::list_try_apply`]
    /// - [`crate::impls::pointer_try_apply`]
    ///
    /// # Handling Errors
    ///
    /// This function may leave `self` in a partially mutated state if an error
    /// was encountered on the way.
    fn try_apply(&mut self, value: &dyn Reflect) -> Result<(), ApplyError>;

    /// Attempts to clone `Self` using reflection.
    ///
    /// The returned value always has the same type as `self`.
    ///
    /// ```
    /// # use vc_reflect::Reflect;
    /// let value = String::from("copier");
    /// let cloned = value.reflect_clone().unwrap();
    /// assert!(cloned.is::<String>())
    /// ```
    fn reflect_clone(&self) -> Result<Box<dyn Reflect>, ReflectCloneError>;

    /// Debug formatter for the value.
    ///
    /// For opaque type, this function will write `"Opaque(type_path)"` by default.
    fn reflect_debug(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use crate::impls;
        match self.reflect_ref() {
            ReflectRef::Struct(data) => impls::struct_debug(data, f),
            ReflectRef::List(data) => impls::list_debug(data, f),
            ReflectRef::Pointer(data) => impls::pointer_debug(data, f),
            ReflectRef::Opaque(_) => write!(f, "Opaque({})", self.reflect_type_path()),
        }
    }
}

impl dyn Reflect {
    /// Returns `true` if the underlying value is of type `T`.
    ///
    /// ```
    /// # use vc_reflect::Reflect;
    /// let x: Box<dyn Reflect> = 10.into_boxed_reflect();
    ///
    /// assert!(x.is::<i32>());
    /// ```
    #[inline(always)]
    pub fn is<T: Any>(&self) -> bool {
        self.ty_id() == TypeId::of::<T>()
    }

    /// Downcasts the value to type `T` by reference.
    #[inline]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        <dyn Any>::downcast_ref(self)
    }

    /// Downcasts the value to type `T` by mutable reference.
    #[inline]
    pub fn downcast_mut<T: Any>(&mut self) -> Option<&mut T> {
        <dyn Any>::downcast_mut(self)
    }

    /// Downcasts the value to type `T`, consuming the trait object.
    ///
    /// If the underlying value is not of type `T`, returns `Err(self)`.
    #[inline]
    pub fn downcast<T: Any>(self: Box<dyn Reflect>) -> Result<Box<T>, Box<dyn Reflect>> {
        if self.is::<T>() {
            let any: Box<dyn Any> = self;
            // `is` just checked the concrete type.
            Ok(any.downcast::<T>().unwrap_or_else(|_| unreachable!()))
        } else {
            Err(self)
        }
    }

    /// Downcasts the value to type `T`, unboxing and consuming the trait object.
    ///
    /// ```
    /// # use vc_reflect::Reflect;
    /// let x: Box<dyn Reflect> = 10.into_boxed_reflect();
    /// assert_eq!(x.take::<i32>().unwrap(), 10);
    /// ```
    #[inline]
    pub fn take<T: Any>(self: Box<dyn Reflect>) -> Result<T, Box<dyn Reflect>> {
        self.downcast::<T>().map(|value| *value)
    }
}

impl fmt::Debug for dyn Reflect {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.reflect_debug(f)
    }
}
