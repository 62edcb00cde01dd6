use core::fmt;

use crate::Reflect;
use crate::ops::{AssignError, ReflectAssign};

/// A type-erased [`ReflectAssign`] implementation, stored on a type's info.
///
/// A hook lets a type accept values of arbitrary other types, the same way a
/// database scanner accepts raw column values. Consumers such as a copier
/// prefer a hook over structural assignment, and treat a failing hook as
/// recoverable.
///
/// ```
/// use vc_reflect::{Reflect, info::AssignHook, ops::{AssignError, ReflectAssign}};
/// # use vc_reflect::derive::Reflect;
///
/// #[derive(Reflect, Default)]
/// #[reflect(assign)]
/// struct Celsius { value: f64 }
///
/// impl ReflectAssign for Celsius {
///     fn assign_from(&mut self, value: &dyn Reflect) -> Result<(), AssignError> {
///         let Some(f) = value.downcast_ref::<f64>() else {
///             return Err(AssignError::unsupported::<Self>(value));
///         };
///         self.value = (f - 32.0) / 1.8;
///         Ok(())
///     }
/// }
///
/// let hook = AssignHook::of::<Celsius>();
/// let mut c = Celsius::default();
/// hook.call(&mut c, &212.0_f64).unwrap();
/// assert_eq!(c.value, 100.0);
/// ```
#[derive(Clone, Copy)]
pub struct AssignHook {
    func: fn(&mut dyn Reflect, &dyn Reflect) -> Result<(), AssignError>,
}

impl AssignHook {
    /// Creates the hook for `T`.
    pub fn of<T: ReflectAssign>() -> Self {
        fn erased<T: ReflectAssign>(
            target: &mut dyn Reflect,
            value: &dyn Reflect,
        ) -> Result<(), AssignError> {
            let received = target.reflect_type_path();
            match target.downcast_mut::<T>() {
                Some(target) => target.assign_from(value),
                None => Err(AssignError::MismatchedTarget {
                    expected: T::type_path(),
                    received,
                }),
            }
        }

        Self { func: erased::<T> }
    }

    /// Runs the hook, assigning `value` into `target`.
    #[inline]
    pub fn call(&self, target: &mut dyn Reflect, value: &dyn Reflect) -> Result<(), AssignError> {
        (self.func)(target, value)
    }
}

impl fmt::Debug for AssignHook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AssignHook")
    }
}
