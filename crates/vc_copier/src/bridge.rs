use vc_reflect::Reflect;
use vc_reflect::ops::Struct;

use crate::copier::Run;
use crate::matcher::{Member, Method, member_mut, struct_at, struct_at_mut};
use crate::stats::{Outcome, Skip};
use crate::trace_member;

impl Run<'_> {
    /// Fills `field` of `dst` with the result of a source getter.
    pub(crate) fn call_getter(
        &mut self,
        dst: &mut dyn Struct,
        field: &Member,
        src: &dyn Struct,
        getter: &Method,
    ) {
        let Some(owner) = struct_at(src, &getter.owner) else {
            return;
        };
        let owner: &dyn Reflect = owner;

        let outcome = match getter.info.invoke_getter(owner) {
            Ok(value) => match member_mut(dst, &field.path) {
                Some(slot) => self.coerce(slot, &*value),
                None => return,
            },
            Err(err) => {
                log::debug!("getter `{}` failed: {err}", getter.info.name());
                Outcome::Skipped(Skip::Rejected)
            }
        };

        self.stats.record(outcome);
        trace_member!("field `{}` from getter: {outcome}", field.name);
    }

    /// Passes `value` to a destination setter.
    ///
    /// The value is first copied into a fresh argument; the setter only
    /// runs when that copy succeeded.
    pub(crate) fn call_setter(&mut self, dst: &mut dyn Struct, setter: &Method, value: &dyn Reflect) {
        let Some(mut arg) = setter.info.new_argument() else {
            return;
        };

        let mut outcome = self.coerce(&mut *arg, value);
        if outcome.is_copied() {
            let Some(owner) = struct_at_mut(dst, &setter.owner) else {
                return;
            };
            let owner: &mut dyn Reflect = owner;

            if let Err(err) = setter.info.invoke_setter(owner, arg) {
                log::debug!("setter `{}` failed: {err}", setter.info.name());
                outcome = Outcome::Skipped(Skip::Rejected);
            }
        }

        self.stats.record(outcome);
        trace_member!("setter `{}`: {outcome}", setter.info.name());
    }
}
