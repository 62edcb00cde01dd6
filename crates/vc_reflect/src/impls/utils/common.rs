use alloc::borrow::Cow;
use alloc::vec::Vec;
use core::fmt;

use crate::Reflect;
use crate::ops::{ApplyError, List, Pointer, Struct};

// Helpers below are `inline(never)` so that they are only compiled once,
// no matter how many types call them.

/// Applies `y` to `x` field by field, matching fields by name.
///
/// Fields present on only one side are ignored.
#[inline(never)]
pub fn struct_try_apply(x: &mut dyn Struct, y: &dyn Reflect) -> Result<(), ApplyError> {
    let y = y.reflect_ref().as_struct()?;

    for (idx, y_field) in y.iter_fields().enumerate() {
        let Some(name) = y.name_at(idx) else { continue };
        if let Some(field) = x.field_mut(name) {
            field.try_apply(y_field)?;
        }
    }
    Ok(())
}

#[inline(never)]
pub fn struct_debug(dyn_struct: &dyn Struct, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let mut debug = f.debug_struct(dyn_struct.reflect_type_path());

    for (index, field) in dyn_struct.iter_fields().enumerate() {
        let name = dyn_struct.name_at(index).unwrap_or("?");
        debug.field(name, &field as &dyn fmt::Debug);
    }
    debug.finish()
}

/// Rebuilds `x` so that it holds one applied element per element of `y`.
///
/// Every new element is fully applied before it is pushed. On error, `x`
/// is left untouched.
#[inline(never)]
pub fn list_try_apply(x: &mut dyn List, y: &dyn Reflect) -> Result<(), ApplyError> {
    let y = y.reflect_ref().as_list()?;

    let mut items = Vec::with_capacity(y.len());
    for y_item in y.iter() {
        let mut item = x.new_item();
        item.try_apply(y_item)?;
        items.push(item);
    }

    x.clear();
    for item in items {
        if x.try_push(item).is_err() {
            return Err(ApplyError::RejectedItem {
                list_type: Cow::Borrowed(x.reflect_type_path()),
            });
        }
    }
    Ok(())
}

#[inline(never)]
pub fn list_debug(dyn_list: &dyn List, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let mut debug = f.debug_list();
    for item in dyn_list.iter() {
        debug.entry(&item as &dyn fmt::Debug);
    }
    debug.finish()
}

/// Makes `x` point at a value equal to `y`'s pointee.
///
/// An absent `y` clears a nullable `x`, and fails for a non-nullable one.
#[inline(never)]
pub fn pointer_try_apply(x: &mut dyn Pointer, y: &dyn Reflect) -> Result<(), ApplyError> {
    let y = y.reflect_ref().as_pointer()?;

    match y.pointee() {
        Some(y_pointee) => x.pointee_or_alloc().try_apply(y_pointee),
        None if x.is_nullable() => {
            x.take_pointee();
            Ok(())
        }
        None => Err(ApplyError::NotSupport {
            type_path: Cow::Borrowed(x.reflect_type_path()),
        }),
    }
}

#[inline(never)]
pub fn pointer_debug(dyn_pointer: &dyn Pointer, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match dyn_pointer.pointee() {
        Some(pointee) => f.debug_tuple("Some").field(&pointee).finish(),
        None => f.write_str("None"),
    }
}
