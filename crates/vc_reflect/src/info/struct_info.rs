use alloc::boxed::Box;
use alloc::vec::Vec;

use crate::hash::HashMap;
use crate::info::{AssignHook, MethodInfo, MethodKind, NamedField, Type, TypePath, impl_type_fn};
use crate::ops::Struct;

/// A container for compile-time named struct info.
///
/// Besides its fields, a struct may register accessor and mutator methods
/// ([`MethodInfo`]) and a custom assignment hook ([`AssignHook`]).
///
/// # Examples
///
/// ```
/// use vc_reflect::{derive::Reflect, info::Typed};
///
/// #[derive(Reflect, Default)]
/// struct Foo {
///     a: i32,
///     b: bool,
/// }
///
/// let info = Foo::type_info().as_struct().unwrap();
///
/// assert_eq!(info.field_len(), 2);
/// assert_eq!(info.field_at(1).unwrap().name(), "b");
/// assert!(info.field("a").unwrap().type_is::<i32>());
/// ```
#[derive(Clone, Debug)]
pub struct StructInfo {
    ty: Type,
    fields: Box<[NamedField]>,
    field_indices: HashMap<&'static str, usize>,
    methods: Box<[MethodInfo]>,
    assign_hook: Option<AssignHook>,
}

impl StructInfo {
    impl_type_fn!(ty);

    /// Creates a new [`StructInfo`].
    ///
    /// The order of `fields` is the declaration order of the struct.
    pub fn new<T: Struct + TypePath>(fields: &[NamedField]) -> Self {
        let field_indices = fields
            .iter()
            .enumerate()
            .map(|(index, field)| (field.name(), index))
            .collect();

        Self {
            ty: Type::of::<T>(),
            fields: fields.into(),
            field_indices,
            methods: Box::new([]),
            assign_hook: None,
        }
    }

    /// Registers accessor and mutator methods.
    pub fn with_methods(mut self, methods: impl IntoIterator<Item = MethodInfo>) -> Self {
        let mut list: Vec<MethodInfo> = core::mem::take(&mut self.methods).into_vec();
        list.extend(methods);
        self.methods = list.into_boxed_slice();
        self
    }

    /// Registers a custom assignment hook, see [`AssignHook`].
    #[inline]
    pub fn with_assign_hook(mut self, hook: AssignHook) -> Self {
        self.assign_hook = Some(hook);
        self
    }

    /// Returns the [`NamedField`] with the given name, if present.
    pub fn field(&self, name: &str) -> Option<&NamedField> {
        self.fields.get(*self.field_indices.get(name)?)
    }

    /// Returns the [`NamedField`] at the given index, if present.
    #[inline]
    pub fn field_at(&self, index: usize) -> Option<&NamedField> {
        self.fields.get(index)
    }

    /// Returns the index for the given field name, if present.
    #[inline]
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.field_indices.get(name).copied()
    }

    /// Iterates over the fields in declaration order.
    #[inline]
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &NamedField> {
        self.fields.iter()
    }

    #[inline]
    pub fn field_len(&self) -> usize {
        self.fields.len()
    }

    /// Returns every registered method in registration order.
    #[inline]
    pub fn methods(&self) -> &[MethodInfo] {
        &self.methods
    }

    /// Returns the zero-argument accessor with the given name.
    pub fn getter(&self, name: &str) -> Option<&MethodInfo> {
        self.find_method(name, MethodKind::Getter)
    }

    /// Returns the single-argument mutator with the given name.
    pub fn setter(&self, name: &str) -> Option<&MethodInfo> {
        self.find_method(name, MethodKind::Setter)
    }

    fn find_method(&self, name: &str, kind: MethodKind) -> Option<&MethodInfo> {
        self.methods
            .iter()
            .find(|method| method.kind() == kind && method.name() == name)
    }

    #[inline]
    pub const fn assign_hook(&self) -> Option<&AssignHook> {
        self.assign_hook.as_ref()
    }
}
