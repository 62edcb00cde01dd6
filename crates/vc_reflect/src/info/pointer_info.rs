use core::any::{Any, TypeId};

use crate::Reflect;
use crate::info::{Type, TypeInfo, TypePath, Typed, impl_type_fn};
use crate::ops::Pointer;

/// A container for compile-time pointer-like info, e.g. `Option<T>` or `Box<T>`.
///
/// A *nullable* pointer may be absent (`Option<T>`); a non-nullable one is
/// always populated (`Box<T>`).
#[derive(Clone, Debug)]
pub struct PointerInfo {
    ty: Type,
    pointee_id: TypeId,
    pointee_info: fn() -> &'static TypeInfo,
    nullable: bool,
}

impl PointerInfo {
    impl_type_fn!(ty);

    #[inline]
    pub fn new<TPtr: Pointer + TypePath, TPointee: Reflect + Typed>(nullable: bool) -> Self {
        Self {
            ty: Type::of::<TPtr>(),
            pointee_id: TypeId::of::<TPointee>(),
            pointee_info: TPointee::type_info,
            nullable,
        }
    }

    #[inline]
    pub const fn pointee_id(&self) -> TypeId {
        self.pointee_id
    }

    #[inline]
    pub fn pointee_is<T: Any>(&self) -> bool {
        self.pointee_id == TypeId::of::<T>()
    }

    #[inline]
    pub fn pointee_info(&self) -> &'static TypeInfo {
        (self.pointee_info)()
    }

    #[inline]
    pub const fn is_nullable(&self) -> bool {
        self.nullable
    }
}
