use alloc::boxed::Box;
use alloc::sync::Arc;
use core::fmt;

use crate::Reflect;
use crate::info::{Type, TypeInfo, TypePath, Typed};
use crate::ops::InvokeError;

type GetterFn = dyn Fn(&dyn Reflect) -> Result<Box<dyn Reflect>, InvokeError> + Send + Sync;
type SetterFn = dyn Fn(&mut dyn Reflect, Box<dyn Reflect>) -> Result<(), InvokeError> + Send + Sync;

// -----------------------------------------------------------------------------
// MethodKind

/// The shape of a reflected method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MethodKind {
    /// `fn(&self) -> R`, zero arguments besides the receiver.
    Getter,
    /// `fn(&mut self, A) -> R`, one argument, the result is discarded.
    Setter,
}

#[derive(Clone)]
enum MethodImpl {
    Getter(Arc<GetterFn>),
    Setter {
        new_arg: fn() -> Box<dyn Reflect>,
        call: Arc<SetterFn>,
    },
}

// -----------------------------------------------------------------------------
// MethodInfo

/// A method registered on a struct's [`StructInfo`], callable by name.
///
/// For a getter, [`value_type`] is the return type; for a setter, it is the
/// type of the single argument.
///
/// # Examples
///
/// ```
/// use vc_reflect::{Reflect, info::MethodInfo};
/// # use vc_reflect::derive::Reflect;
///
/// #[derive(Reflect, Default)]
/// struct User { age: i32 }
///
/// impl User {
///     fn double_age(&self) -> i32 { 2 * self.age }
/// }
///
/// let getter = MethodInfo::getter::<User, _>("double_age", User::double_age);
/// let user = User { age: 21 };
///
/// let value = getter.invoke_getter(&user).unwrap();
/// assert_eq!(value.take::<i32>().unwrap(), 42);
/// ```
///
/// [`StructInfo`]: crate::info::StructInfo
/// [`value_type`]: MethodInfo::value_type
#[derive(Clone)]
pub struct MethodInfo {
    name: &'static str,
    value_ty: Type,
    value_info: fn() -> &'static TypeInfo,
    imp: MethodImpl,
}

impl MethodInfo {
    /// Creates an accessor from a `fn(&S) -> R`.
    pub fn getter<S, R>(name: &'static str, func: fn(&S) -> R) -> Self
    where
        S: Reflect + TypePath,
        R: Reflect + Typed,
    {
        let call = move |receiver: &dyn Reflect| match receiver.downcast_ref::<S>() {
            Some(this) => Ok(Box::new(func(this)) as Box<dyn Reflect>),
            None => Err(InvokeError::MismatchedReceiver {
                expected: S::type_path(),
                received: receiver.reflect_type_path(),
            }),
        };

        Self {
            name,
            value_ty: Type::of::<R>(),
            value_info: R::type_info,
            imp: MethodImpl::Getter(Arc::new(call)),
        }
    }

    /// Creates a mutator from a `fn(&mut S, A) -> R`; the result `R` is discarded.
    ///
    /// `A: Default` lets a caller build an argument in place before invoking.
    pub fn setter<S, A, R>(name: &'static str, func: fn(&mut S, A) -> R) -> Self
    where
        S: Reflect + TypePath,
        A: Reflect + Typed + Default,
        R: 'static,
    {
        let call = move |receiver: &mut dyn Reflect, arg: Box<dyn Reflect>| {
            let received = receiver.reflect_type_path();
            let Some(this) = receiver.downcast_mut::<S>() else {
                return Err(InvokeError::MismatchedReceiver {
                    expected: S::type_path(),
                    received,
                });
            };
            match arg.take::<A>() {
                Ok(arg) => {
                    func(this, arg);
                    Ok(())
                }
                Err(arg) => Err(InvokeError::MismatchedArgument {
                    expected: A::type_path(),
                    received: arg.reflect_type_path(),
                }),
            }
        };

        fn new_arg<A: Reflect + Default>() -> Box<dyn Reflect> {
            Box::new(A::default())
        }

        Self {
            name,
            value_ty: Type::of::<A>(),
            value_info: A::type_info,
            imp: MethodImpl::Setter {
                new_arg: new_arg::<A>,
                call: Arc::new(call),
            },
        }
    }

    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    #[inline]
    pub const fn kind(&self) -> MethodKind {
        match self.imp {
            MethodImpl::Getter(_) => MethodKind::Getter,
            MethodImpl::Setter { .. } => MethodKind::Setter,
        }
    }

    /// Number of arguments besides the receiver.
    #[inline]
    pub const fn arity(&self) -> usize {
        match self.kind() {
            MethodKind::Getter => 0,
            MethodKind::Setter => 1,
        }
    }

    /// The getter's return type or the setter's argument type.
    #[inline]
    pub const fn value_type(&self) -> &Type {
        &self.value_ty
    }

    #[inline]
    pub fn value_info(&self) -> &'static TypeInfo {
        (self.value_info)()
    }

    /// Calls a getter on `receiver`.
    pub fn invoke_getter(&self, receiver: &dyn Reflect) -> Result<Box<dyn Reflect>, InvokeError> {
        match &self.imp {
            MethodImpl::Getter(call) => call(receiver),
            MethodImpl::Setter { .. } => Err(InvokeError::NotAGetter { name: self.name }),
        }
    }

    /// Builds a default-initialized argument for a setter.
    ///
    /// Returns `None` for getters.
    pub fn new_argument(&self) -> Option<Box<dyn Reflect>> {
        match &self.imp {
            MethodImpl::Setter { new_arg, .. } => Some(new_arg()),
            MethodImpl::Getter(_) => None,
        }
    }

    /// Calls a setter on `receiver` with `arg`.
    ///
    /// `arg` must have exactly the setter's argument type.
    pub fn invoke_setter(
        &self,
        receiver: &mut dyn Reflect,
        arg: Box<dyn Reflect>,
    ) -> Result<(), InvokeError> {
        match &self.imp {
            MethodImpl::Setter { call, .. } => call(receiver, arg),
            MethodImpl::Getter(_) => Err(InvokeError::NotASetter { name: self.name }),
        }
    }
}

impl fmt::Debug for MethodInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MethodInfo")
            .field("name", &self.name)
            .field("kind", &self.kind())
            .field("value_type", &self.value_ty)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::{MethodInfo, MethodKind};
    use crate::ops::InvokeError;

    #[derive(Clone, Debug, Default)]
    struct Counter {
        total: i64,
    }

    crate::impls::impl_reflect_opaque!(Counter in "vc_reflect::tests");

    impl Counter {
        fn total(&self) -> i64 {
            self.total
        }

        fn add(&mut self, value: i64) -> i64 {
            self.total += value;
            self.total
        }
    }

    #[test]
    fn getter_and_setter() {
        let getter = MethodInfo::getter::<Counter, _>("total", Counter::total);
        let setter = MethodInfo::setter::<Counter, _, _>("add", Counter::add);

        assert_eq!(getter.kind(), MethodKind::Getter);
        assert_eq!(setter.kind(), MethodKind::Setter);
        assert_eq!(setter.arity(), 1);
        assert!(setter.value_type().is::<i64>());

        let mut counter = Counter { total: 5 };
        setter
            .invoke_setter(&mut counter, Box::new(7_i64))
            .unwrap();
        assert_eq!(counter.total, 12);

        let value = getter.invoke_getter(&counter).unwrap();
        assert_eq!(value.take::<i64>().unwrap(), 12);
    }

    #[test]
    fn setter_rejects_wrong_argument() {
        let setter = MethodInfo::setter::<Counter, _, _>("add", Counter::add);
        let mut counter = Counter::default();

        let err = setter
            .invoke_setter(&mut counter, Box::new(7_i32))
            .unwrap_err();
        assert!(matches!(err, InvokeError::MismatchedArgument { .. }));
        assert_eq!(counter.total, 0);

        let arg = setter.new_argument().unwrap();
        assert!(arg.is::<i64>());
    }

    #[test]
    fn getter_rejects_wrong_receiver() {
        let getter = MethodInfo::getter::<Counter, _>("total", Counter::total);
        let err = getter.invoke_getter(&1_u8).unwrap_err();
        assert!(matches!(err, InvokeError::MismatchedReceiver { .. }));
        assert!(getter.new_argument().is_none());
    }
}
