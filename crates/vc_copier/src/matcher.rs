//! Name based matching of struct members.
//!
//! A [`MemberIndex`] flattens a struct type: fields of `#[reflect(embed)]`
//! struct fields are promoted, recursively. A name resolves to the
//! shallowest member carrying it; two members with the same name at the
//! same depth hide each other and everything deeper. Fields, getters and
//! setters are resolved independently.

use alloc::boxed::Box;
use alloc::vec::Vec;

use foldhash::fast::FixedState;
use hashbrown::{HashMap, HashSet};
use vc_reflect::Reflect;
use vc_reflect::info::{MethodInfo, MethodKind, StructInfo};
use vc_reflect::ops::Struct;

use crate::copier::Run;
use crate::trace_member;

// -----------------------------------------------------------------------------
// MemberIndex

/// A field reachable by name, through a path of field indices.
#[derive(Debug)]
pub(crate) struct Member {
    pub name: &'static str,
    pub path: Box<[usize]>,
}

/// A getter or setter, with the path of the struct that declares it.
#[derive(Debug)]
pub(crate) struct Method {
    pub owner: Box<[usize]>,
    pub info: &'static MethodInfo,
}

/// The flattened members of one struct type.
#[derive(Debug)]
pub(crate) struct MemberIndex {
    fields: Vec<Member>,
    by_name: HashMap<&'static str, usize, FixedState>,
    getters: HashMap<&'static str, Method, FixedState>,
    setters: HashMap<&'static str, Method, FixedState>,
}

/// Members of one depth, in declaration order.
#[derive(Default)]
struct Level {
    fields: Vec<(&'static str, Vec<usize>)>,
    getters: Vec<(&'static str, Method)>,
    setters: Vec<(&'static str, Method)>,
}

impl MemberIndex {
    pub fn new(root: &'static StructInfo) -> Self {
        let mut index = Self {
            fields: Vec::new(),
            by_name: HashMap::default(),
            getters: HashMap::default(),
            setters: HashMap::default(),
        };
        let mut claimed_fields = HashSet::<&'static str, FixedState>::default();
        let mut claimed_getters = HashSet::<&'static str, FixedState>::default();
        let mut claimed_setters = HashSet::<&'static str, FixedState>::default();

        let mut structs: Vec<(Vec<usize>, &'static StructInfo)> = alloc::vec![(Vec::new(), root)];

        while !structs.is_empty() {
            let mut level = Level::default();
            let mut embedded = Vec::new();

            for (path, info) in &structs {
                let info: &'static StructInfo = *info;
                for (idx, field) in info.iter().enumerate() {
                    let mut field_path = path.clone();
                    field_path.push(idx);

                    match field.type_info().as_struct() {
                        Ok(inner) if field.is_embedded() => embedded.push((field_path, inner)),
                        _ => level.fields.push((field.name(), field_path)),
                    }
                }

                for info in info.methods() {
                    let method = Method {
                        owner: path.as_slice().into(),
                        info,
                    };
                    match info.kind() {
                        MethodKind::Getter => level.getters.push((info.name(), method)),
                        MethodKind::Setter => level.setters.push((info.name(), method)),
                    }
                }
            }

            commit(level.fields, &mut claimed_fields, |name, path| {
                index.by_name.insert(name, index.fields.len());
                index.fields.push(Member {
                    name,
                    path: path.into_boxed_slice(),
                });
            });
            commit(level.getters, &mut claimed_getters, |name, method| {
                index.getters.insert(name, method);
            });
            commit(level.setters, &mut claimed_setters, |name, method| {
                index.setters.insert(name, method);
            });

            structs = embedded;
        }

        index
    }

    #[inline]
    pub fn fields(&self) -> &[Member] {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&Member> {
        self.by_name.get(name).map(|&idx| &self.fields[idx])
    }

    #[inline]
    pub fn getter(&self, name: &str) -> Option<&Method> {
        self.getters.get(name)
    }

    #[inline]
    pub fn setter(&self, name: &str) -> Option<&Method> {
        self.setters.get(name)
    }
}

/// Accepts the members of one level whose name is unique in that level and
/// unclaimed by a shallower one, then claims every name of the level.
fn commit<T>(
    members: Vec<(&'static str, T)>,
    claimed: &mut HashSet<&'static str, FixedState>,
    mut accept: impl FnMut(&'static str, T),
) {
    let mut counts = HashMap::<&'static str, usize, FixedState>::default();
    for (name, _) in &members {
        *counts.entry(*name).or_default() += 1;
    }

    for (name, member) in members {
        if !claimed.contains(name) && counts[name] == 1 {
            accept(name, member);
        }
    }
    claimed.extend(counts.into_keys());
}

// -----------------------------------------------------------------------------
// Access

/// The struct at `path`, `root` itself for an empty path.
pub(crate) fn struct_at<'a>(root: &'a dyn Struct, path: &[usize]) -> Option<&'a dyn Struct> {
    let mut owner = root;
    for &idx in path {
        owner = owner.field_at(idx)?.reflect_ref().as_struct().ok()?;
    }
    Some(owner)
}

pub(crate) fn struct_at_mut<'a>(
    root: &'a mut dyn Struct,
    path: &[usize],
) -> Option<&'a mut dyn Struct> {
    let mut owner = root;
    for &idx in path {
        owner = owner.field_at_mut(idx)?.reflect_mut().as_struct().ok()?;
    }
    Some(owner)
}

pub(crate) fn member<'a>(root: &'a dyn Struct, path: &[usize]) -> Option<&'a dyn Reflect> {
    let (&last, parents) = path.split_last()?;
    struct_at(root, parents)?.field_at(last)
}

pub(crate) fn member_mut<'a>(
    root: &'a mut dyn Struct,
    path: &[usize],
) -> Option<&'a mut dyn Reflect> {
    let (&last, parents) = path.split_last()?;
    struct_at_mut(root, parents)?.field_at_mut(last)
}

// -----------------------------------------------------------------------------
// Struct copy

impl Run<'_> {
    /// Copies `src` into `dst` member by member.
    ///
    /// Every source field is copied into the destination field of the same
    /// name, and passed to the destination setter of the same name. Then
    /// destination fields without a source field of their name are filled
    /// from source getters.
    pub(crate) fn copy_struct(&mut self, dst: &mut dyn Struct, src: &dyn Struct) {
        let (Some(dst_index), Some(src_index)) = (self.member_index(dst), self.member_index(src))
        else {
            return;
        };

        for src_field in src_index.fields() {
            let Some(value) = member(src, &src_field.path) else {
                continue;
            };

            if let Some(dst_field) = dst_index.field(src_field.name)
                && let Some(slot) = member_mut(dst, &dst_field.path)
            {
                let outcome = self.coerce(slot, value);
                self.stats.record(outcome);
                trace_member!(
                    "field `{}` of `{}`: {outcome}",
                    src_field.name,
                    dst.reflect_type_path()
                );
            }

            if let Some(setter) = dst_index.setter(src_field.name) {
                self.call_setter(dst, setter, value);
            }
        }

        for dst_field in dst_index.fields() {
            if src_index.field(dst_field.name).is_some() {
                continue;
            }
            if let Some(getter) = src_index.getter(dst_field.name) {
                self.call_getter(dst, dst_field, src, getter);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{MemberIndex, member};
    use vc_reflect::derive::Reflect;
    use vc_reflect::info::Typed;

    #[derive(Reflect, Default)]
    struct Inner {
        id: u32,
        shared: u8,
    }

    #[derive(Reflect, Default)]
    struct Left {
        left: u8,
        twice: u8,
    }

    #[derive(Reflect, Default)]
    struct Right {
        right: u8,
        twice: u8,
    }

    #[derive(Reflect, Default)]
    #[reflect(getter(shared))]
    struct Outer {
        shared: String,
        #[reflect(embed)]
        inner: Inner,
        #[reflect(embed)]
        left: Left,
        #[reflect(embed)]
        right: Right,
    }

    impl Outer {
        fn shared(&self) -> String {
            self.shared.clone()
        }
    }

    fn index_of<T: Typed>() -> MemberIndex {
        MemberIndex::new(T::type_info().as_struct().unwrap())
    }

    #[test]
    fn promotion_and_shadowing() {
        let index = index_of::<Outer>();
        let names: Vec<_> = index.fields().iter().map(|m| m.name).collect();
        assert_eq!(names, ["shared", "id", "left", "right"]);

        assert_eq!(&*index.field("id").unwrap().path, &[1, 0]);
        assert_eq!(&*index.field("shared").unwrap().path, &[0]);
        assert!(index.field("inner").is_none());
        assert!(index.field("twice").is_none());
    }

    #[test]
    fn methods_are_a_separate_namespace() {
        let index = index_of::<Outer>();
        assert!(index.getter("shared").is_some());
        assert!(index.setter("shared").is_none());
        assert!(index.field("shared").is_some());
    }

    #[test]
    fn member_paths() {
        let outer = Outer {
            inner: Inner { id: 9, shared: 1 },
            ..Default::default()
        };
        let index = index_of::<Outer>();
        let id = member(&outer, &index.field("id").unwrap().path).unwrap();
        assert_eq!(id.downcast_ref::<u32>(), Some(&9));
    }
}
