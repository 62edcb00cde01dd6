use crate::Reflect;
use crate::info::{AssignHook, Type, TypePath, impl_type_fn};

/// A container for compile-time info of opaque types, such as scalars and strings.
#[derive(Debug, Clone)]
pub struct OpaqueInfo {
    ty: Type,
    assign_hook: Option<AssignHook>,
}

impl OpaqueInfo {
    impl_type_fn!(ty);

    #[inline]
    pub fn new<T: Reflect + TypePath + ?Sized>() -> Self {
        Self {
            ty: Type::of::<T>(),
            assign_hook: None,
        }
    }

    /// Registers a custom assignment hook, see [`AssignHook`].
    #[inline]
    pub fn with_assign_hook(mut self, hook: AssignHook) -> Self {
        self.assign_hook = Some(hook);
        self
    }

    #[inline]
    pub const fn assign_hook(&self) -> Option<&AssignHook> {
        self.assign_hook.as_ref()
    }
}
