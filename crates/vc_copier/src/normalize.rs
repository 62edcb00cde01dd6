//! Reduces both sides of a copy to the values that are matched.

use core::iter;

use vc_reflect::Reflect;
use vc_reflect::ops::{ReflectMut, ReflectRef};

use crate::copier::Run;
use crate::trace_member;

/// Follows source pointers down to the pointed value.
///
/// Returns `None` when a pointer on the way is empty.
pub(crate) fn resolve_source(mut src: &dyn Reflect) -> Option<&dyn Reflect> {
    while let ReflectRef::Pointer(ptr) = src.reflect_ref() {
        src = ptr.pointee()?;
    }
    Some(src)
}

impl Run<'_> {
    /// Entry point of a copy, `dst` is already known to be writable.
    pub(crate) fn copy_root(&mut self, dst: &mut dyn Reflect, src: &dyn Reflect) {
        match resolve_source(src) {
            Some(src) => self.place(dst, src),
            None => trace_member!(
                "source `{}` is empty, nothing to copy",
                src.reflect_type_path()
            ),
        }
    }

    /// Copies a resolved source into `dst`, allocating destination pointers.
    ///
    /// A struct copied into a list makes the list a single element. Every
    /// other pair follows the member rules of [`Run::coerce`].
    fn place(&mut self, dst: &mut dyn Reflect, src: &dyn Reflect) {
        match (dst.reflect_mut(), src.reflect_ref()) {
            (ReflectMut::Pointer(ptr), _) => self.place(ptr.pointee_or_alloc(), src),
            (ReflectMut::List(list), ReflectRef::Struct(_)) => {
                let outcome = self.rebuild_list(list, iter::once(src));
                trace_member!(
                    "`{}` from a single struct: {outcome}",
                    list.reflect_type_path()
                );
            }
            _ => {
                let outcome = self.coerce(dst, src);
                trace_member!(
                    "`{}` from `{}`: {outcome}",
                    dst.reflect_type_path(),
                    src.reflect_type_path()
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::resolve_source;

    #[test]
    fn source_pointers_are_followed() {
        let value = Some(Box::new(Some(7_u16)));
        let resolved = resolve_source(&value).unwrap();
        assert_eq!(resolved.downcast_ref::<u16>(), Some(&7));

        let empty: Option<Box<u16>> = None;
        assert!(resolve_source(&empty).is_none());

        let plain = 3_i8;
        assert!(resolve_source(&plain).unwrap().is::<i8>());
    }
}
