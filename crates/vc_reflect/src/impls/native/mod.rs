mod native_str;

use crate::impls::impl_reflect_opaque;

impl_reflect_opaque!(bool);
impl_reflect_opaque!(char);
impl_reflect_opaque!(f32);
impl_reflect_opaque!(f64);
impl_reflect_opaque!(i8);
impl_reflect_opaque!(i16);
impl_reflect_opaque!(i32);
impl_reflect_opaque!(i64);
impl_reflect_opaque!(i128);
impl_reflect_opaque!(isize);
impl_reflect_opaque!(u8);
impl_reflect_opaque!(u16);
impl_reflect_opaque!(u32);
impl_reflect_opaque!(u64);
impl_reflect_opaque!(u128);
impl_reflect_opaque!(usize);

#[cfg(test)]
mod tests {
    use crate::Reflect;
    use crate::info::{ReflectKind, TypePath, Typed};
    use crate::ops::ApplyError;

    #[test]
    fn primitive_paths() {
        assert_eq!(<u8 as TypePath>::type_path(), "u8");
        assert_eq!(<f64 as TypePath>::type_name(), "f64");
        assert_eq!(<bool as TypePath>::type_ident(), "bool");
        assert!(<i32 as Typed>::type_info().as_opaque().is_ok());
    }

    #[test]
    fn primitive_apply() {
        let mut x = 1_i32;
        x.try_apply(&5_i32).unwrap();
        assert_eq!(x, 5);

        let err = x.try_apply(&5_i64).unwrap_err();
        assert!(matches!(err, ApplyError::MismatchedTypes { .. }));
        assert_eq!(x, 5);

        assert_eq!(x.reflect_kind(), ReflectKind::Opaque);
    }

    #[test]
    fn primitive_clone() {
        let cloned = 'x'.reflect_clone().unwrap();
        assert_eq!(cloned.take::<char>().unwrap(), 'x');
    }
}
