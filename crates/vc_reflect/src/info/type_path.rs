use core::any::{Any, TypeId};
use core::fmt;

// -----------------------------------------------------------------------------
// TypePath

/// A static accessor to type paths and names.
///
/// Unlike [`core::any::type_name`], the strings returned here are stable
/// across compiler versions and are what the copying engine prints in its
/// diagnostics.
///
/// - `type_path`: full path, e.g. `alloc::vec::Vec<i32>`.
/// - `type_name`: the path without the module, e.g. `Vec<i32>`.
/// - `type_ident`: the bare identifier, e.g. `Vec`.
/// - `module_path`: the module, e.g. `alloc::vec`.
///
/// ```
/// use vc_reflect::info::TypePath;
///
/// assert_eq!(<Vec<u8> as TypePath>::type_path(), "alloc::vec::Vec<u8>");
/// assert_eq!(<Vec<u8> as TypePath>::type_name(), "Vec<u8>");
/// assert_eq!(<Vec<u8> as TypePath>::type_ident(), "Vec");
/// ```
pub trait TypePath: 'static {
    /// Returns the fully qualified path of the underlying type.
    fn type_path() -> &'static str;

    /// Returns a short, pretty-print enabled path to the type.
    fn type_name() -> &'static str;

    /// Returns the name of the type, without generics.
    fn type_ident() -> &'static str;

    /// Returns the path to the module the type is in, or [`None`] if it is primitive.
    #[inline]
    fn module_path() -> Option<&'static str> {
        None
    }
}

// -----------------------------------------------------------------------------
// DynamicTypePath

/// Dynamic dispatch for [`TypePath`].
///
/// Automatically implemented for every `T: TypePath`.
pub trait DynamicTypePath {
    /// See [`TypePath::type_path`].
    fn reflect_type_path(&self) -> &'static str;

    /// See [`TypePath::type_name`].
    fn reflect_type_name(&self) -> &'static str;

    /// See [`TypePath::type_ident`].
    fn reflect_type_ident(&self) -> &'static str;

    /// See [`TypePath::module_path`].
    fn reflect_module_path(&self) -> Option<&'static str>;
}

impl<T: TypePath> DynamicTypePath for T {
    #[inline]
    fn reflect_type_path(&self) -> &'static str {
        Self::type_path()
    }

    #[inline]
    fn reflect_type_name(&self) -> &'static str {
        Self::type_name()
    }

    #[inline]
    fn reflect_type_ident(&self) -> &'static str {
        Self::type_ident()
    }

    #[inline]
    fn reflect_module_path(&self) -> Option<&'static str> {
        Self::module_path()
    }
}

// -----------------------------------------------------------------------------
// Type

/// The [`TypeId`] of a type together with its [`TypePath`] accessors.
///
/// Equality and hashing only look at the [`TypeId`].
#[derive(Copy, Clone)]
pub struct Type {
    type_id: TypeId,
    type_path: fn() -> &'static str,
    type_name: fn() -> &'static str,
    type_ident: fn() -> &'static str,
    module_path: fn() -> Option<&'static str>,
}

impl Type {
    /// Creates a new [`Type`] from a type that implements [`TypePath`].
    #[inline]
    pub fn of<T: TypePath + ?Sized>() -> Self {
        Self {
            type_id: TypeId::of::<T>(),
            type_path: T::type_path,
            type_name: T::type_name,
            type_ident: T::type_ident,
            module_path: T::module_path,
        }
    }

    #[inline(always)]
    pub const fn id(&self) -> TypeId {
        self.type_id
    }

    /// Check if the given type matches this one.
    #[inline(always)]
    pub fn is<T: Any>(&self) -> bool {
        TypeId::of::<T>() == self.type_id
    }

    #[inline]
    pub fn path(&self) -> &'static str {
        (self.type_path)()
    }

    #[inline]
    pub fn name(&self) -> &'static str {
        (self.type_name)()
    }

    #[inline]
    pub fn ident(&self) -> &'static str {
        (self.type_ident)()
    }

    #[inline]
    pub fn module_path(&self) -> Option<&'static str> {
        (self.module_path)()
    }
}

impl PartialEq for Type {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.type_id == other.type_id
    }
}

impl Eq for Type {}

impl core::hash::Hash for Type {
    #[inline]
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        self.type_id.hash(state);
    }
}

impl fmt::Debug for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

// -----------------------------------------------------------------------------
// impl_type_fn

/// Generates the [`Type`] accessors shared by every info struct.
///
/// - `impl_type_fn!(field)`: the info stores its [`Type`] in `self.field`.
/// - `impl_type_fn!()`: the container already provides `fn ty(&self) -> &Type`.
macro_rules! impl_type_fn {
    ($field:ident) => {
        /// Returns the underlying [`Type`](crate::info::Type).
        #[inline]
        pub const fn ty(&self) -> &$crate::info::Type {
            &self.$field
        }

        $crate::info::impl_type_fn!();
    };
    () => {
        /// Returns the [`TypeId`](core::any::TypeId) of the underlying type.
        #[inline]
        pub fn ty_id(&self) -> ::core::any::TypeId {
            self.ty().id()
        }

        /// See [`TypePath::type_path`](crate::info::TypePath::type_path).
        #[inline]
        pub fn type_path(&self) -> &'static str {
            self.ty().path()
        }

        /// See [`TypePath::type_name`](crate::info::TypePath::type_name).
        #[inline]
        pub fn type_name(&self) -> &'static str {
            self.ty().name()
        }

        /// Check if the given type matches this one.
        #[inline]
        pub fn type_is<T: ::core::any::Any>(&self) -> bool {
            self.ty().is::<T>()
        }
    };
}

pub(crate) use impl_type_fn;
