use alloc::vec::Vec;

use vc_reflect::Reflect;
use vc_reflect::ops::{List, ReflectMut, ReflectRef};

use crate::convert::{Scalar, is_empty};
use crate::copier::Run;
use crate::normalize::resolve_source;
use crate::stats::{Outcome, Skip, Unchanged};

impl Run<'_> {
    /// Copies one value into a destination slot.
    ///
    /// Tried in order:
    /// 1. An empty source pointer, or an empty source under `ignore_empty`,
    ///    leaves the slot as it is.
    /// 2. The assign hook of the slot's type. A failure is counted and the
    ///    structural rules below still run.
    /// 3. A slot pointer is followed, or allocated when it is empty. The new
    ///    pointee is only installed when something was copied into it.
    /// 4. Structs are copied member by member, lists element by element.
    /// 5. Opaque values of the same type are assigned, scalars are converted.
    pub(crate) fn coerce(&mut self, dst: &mut dyn Reflect, src: &dyn Reflect) -> Outcome {
        let Some(src) = resolve_source(src) else {
            return Outcome::Unchanged(Unchanged::AbsentSource);
        };

        if self.options.ignore_empty && is_empty(src) {
            return Outcome::Unchanged(Unchanged::EmptySource);
        }

        if let Some(hook) = dst.reflect_type_info().assign_hook() {
            match hook.call(dst, src) {
                Ok(()) => return Outcome::Copied,
                Err(err) => {
                    self.stats.hook_failures += 1;
                    log::debug!(
                        "assign hook of `{}` failed on `{}`: {err}",
                        dst.reflect_type_path(),
                        src.reflect_type_path(),
                    );
                }
            }
        }

        if let ReflectMut::Pointer(ptr) = dst.reflect_mut() {
            if let Some(pointee) = ptr.pointee_mut() {
                return self.coerce(pointee, src);
            }

            let mut pointee = ptr.new_pointee();
            let outcome = self.coerce(&mut *pointee, src);
            if outcome.is_copied() && ptr.replace(pointee).is_err() {
                return Outcome::Skipped(Skip::Rejected);
            }
            return outcome;
        }

        match (dst.reflect_mut(), src.reflect_ref()) {
            (ReflectMut::Struct(dst), ReflectRef::Struct(src)) => {
                self.copy_struct(dst, src);
                Outcome::Copied
            }
            (ReflectMut::List(dst), ReflectRef::List(src)) => self.rebuild_list(dst, src.iter()),
            (ReflectMut::Opaque(dst), ReflectRef::Opaque(src)) => assign_opaque(dst, src),
            _ => Outcome::Skipped(Skip::Incompatible),
        }
    }

    /// Replaces the content of `list` with one element per item.
    ///
    /// Every element is built completely before the list is touched, so a
    /// skipped element leaves the list as it was.
    pub(crate) fn rebuild_list<'s>(
        &mut self,
        list: &mut dyn List,
        items: impl Iterator<Item = &'s dyn Reflect>,
    ) -> Outcome {
        let mut built = Vec::with_capacity(items.size_hint().0);

        for item in items {
            let mut element = list.new_item();
            if let Outcome::Skipped(skip) = self.coerce(&mut *element, item) {
                return Outcome::Skipped(skip);
            }
            built.push(element);
        }

        list.clear();
        for element in built {
            if list.try_push(element).is_err() {
                return Outcome::Skipped(Skip::Rejected);
            }
        }
        Outcome::Copied
    }
}

fn assign_opaque(dst: &mut dyn Reflect, src: &dyn Reflect) -> Outcome {
    if dst.ty_id() == src.ty_id() {
        return match dst.try_apply(src) {
            Ok(()) => Outcome::Copied,
            Err(_) => Outcome::Skipped(Skip::Rejected),
        };
    }

    match Scalar::read(src) {
        Some(scalar) => scalar.write(dst),
        None => Outcome::Skipped(Skip::Incompatible),
    }
}
