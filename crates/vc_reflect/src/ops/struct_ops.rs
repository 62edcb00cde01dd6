use crate::Reflect;

// -----------------------------------------------------------------------------
// Struct

/// A trait for structs with named fields.
///
/// Fields are addressed either by name or by declaration index. Usually
/// implemented by [`#[derive(Reflect)]`](crate::derive::Reflect).
///
/// # Examples
///
/// ```
/// use vc_reflect::{derive::Reflect, ops::Struct};
///
/// #[derive(Reflect, Default)]
/// struct Foo {
///     bar: u32,
/// }
///
/// let foo = Foo { bar: 123 };
///
/// assert_eq!(foo.field_len(), 1);
/// assert_eq!(foo.name_at(0), Some("bar"));
///
/// let field = foo.field("bar").unwrap();
/// assert_eq!(field.downcast_ref::<u32>(), Some(&123));
/// ```
pub trait Struct: Reflect {
    /// Returns a reference to the value of the field named `name`.
    fn field(&self, name: &str) -> Option<&dyn Reflect>;

    /// Returns a mutable reference to the value of the field named `name`.
    fn field_mut(&mut self, name: &str) -> Option<&mut dyn Reflect>;

    /// Returns a reference to the value of the field with index `index`.
    fn field_at(&self, index: usize) -> Option<&dyn Reflect>;

    /// Returns a mutable reference to the value of the field with index `index`.
    fn field_at_mut(&mut self, index: usize) -> Option<&mut dyn Reflect>;

    /// Returns the name of the field with index `index`.
    fn name_at(&self, index: usize) -> Option<&str>;

    /// Returns the number of fields in the struct.
    fn field_len(&self) -> usize;

    /// Returns an iterator over the values of the reflectable fields for this struct.
    fn iter_fields(&self) -> StructFieldIter<'_>;
}

impl dyn Struct {
    #[inline]
    pub fn field_as<T: Reflect>(&self, name: &str) -> Option<&T> {
        self.field(name).and_then(<dyn Reflect>::downcast_ref)
    }

    #[inline]
    pub fn field_mut_as<T: Reflect>(&mut self, name: &str) -> Option<&mut T> {
        self.field_mut(name).and_then(<dyn Reflect>::downcast_mut)
    }
}

// -----------------------------------------------------------------------------
// Struct Field Iterator

/// An iterator over the field values of a struct.
pub struct StructFieldIter<'a> {
    struct_val: &'a dyn Struct,
    index: usize,
}

impl<'a> StructFieldIter<'a> {
    #[inline(always)]
    pub const fn new(value: &'a dyn Struct) -> Self {
        StructFieldIter {
            struct_val: value,
            index: 0,
        }
    }
}

impl<'a> Iterator for StructFieldIter<'a> {
    type Item = &'a dyn Reflect;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let value = self.struct_val.field_at(self.index);
        self.index += value.is_some() as usize;
        value
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let size = self.struct_val.field_len() - self.index;
        (size, Some(size))
    }
}

impl ExactSizeIterator for StructFieldIter<'_> {}

#[cfg(test)]
mod tests {
    use alloc::format;
    use alloc::string::String;
    use alloc::vec::Vec;

    use crate::Reflect;
    use crate::derive::Reflect;
    use crate::info::{MethodKind, TypePath, Typed};
    use crate::ops::Struct;

    #[derive(Reflect, Default, Debug, PartialEq)]
    struct Base {
        id: u64,
    }

    #[derive(Reflect, Default, Debug, PartialEq)]
    #[reflect(type_path = "app::Account", getter(label), setter(name = rename))]
    struct Account {
        #[reflect(embed)]
        base: Base,
        name: String,
        #[reflect(ignore)]
        cache: Vec<u8>,
    }

    impl Account {
        fn label(&self) -> String {
            format!("#{} {}", self.base.id, self.name)
        }

        fn rename(&mut self, name: String) {
            self.name = name;
        }
    }

    #[derive(Reflect, Default)]
    struct Wrapper<T> {
        inner: Option<T>,
    }

    #[test]
    fn derived_fields() {
        let mut account = Account {
            base: Base { id: 3 },
            name: String::from("ann"),
            cache: Vec::from([1, 2]),
        };

        assert_eq!(account.field_len(), 2);
        assert_eq!(account.name_at(0), Some("base"));
        assert_eq!(account.name_at(1), Some("name"));
        assert!(account.field("cache").is_none());

        let dyn_struct: &mut dyn Struct = &mut account;
        *dyn_struct.field_mut_as::<String>("name").unwrap() = String::from("bob");
        assert_eq!(account.name, "bob");
    }

    #[test]
    fn derived_info() {
        assert_eq!(Account::type_path(), "app::Account");
        assert_eq!(Account::type_ident(), "Account");
        assert_eq!(Account::module_path(), Some("app"));

        let info = Account::type_info().as_struct().unwrap();
        assert!(info.field("base").unwrap().is_embedded());
        assert!(!info.field("name").unwrap().is_embedded());
        assert_eq!(info.getter("label").unwrap().kind(), MethodKind::Getter);
        assert_eq!(info.setter("name").unwrap().kind(), MethodKind::Setter);
        assert!(info.setter("label").is_none());
    }

    #[test]
    fn derived_methods() {
        let info = Account::type_info().as_struct().unwrap();
        let mut account = Account::default();

        let setter = info.setter("name").unwrap();
        setter
            .invoke_setter(&mut account, alloc::boxed::Box::new(String::from("cid")))
            .unwrap();

        let label = info.getter("label").unwrap().invoke_getter(&account).unwrap();
        assert_eq!(label.take::<String>().unwrap(), "#0 cid");
    }

    #[test]
    fn derived_clone_and_apply() {
        let account = Account {
            base: Base { id: 9 },
            name: String::from("dan"),
            cache: Vec::from([7]),
        };

        let cloned = account.reflect_clone().unwrap().take::<Account>().unwrap();
        assert_eq!(cloned.base, account.base);
        assert_eq!(cloned.name, account.name);
        assert!(cloned.cache.is_empty());

        let mut target = Account::default();
        target.try_apply(&account).unwrap();
        assert_eq!(target.base.id, 9);
        assert_eq!(target.name, "dan");
    }

    #[test]
    fn derived_generic() {
        let path = <Wrapper<u8> as TypePath>::type_path();
        assert!(path.ends_with("::Wrapper<u8>"));
        assert_eq!(<Wrapper<u8> as TypePath>::type_name(), "Wrapper<u8>");

        let info = <Wrapper<i16> as Typed>::type_info().as_struct().unwrap();
        assert!(info.field("inner").unwrap().type_is::<Option<i16>>());

        let value = Wrapper { inner: Some(5_u8) };
        assert!(format!("{:?}", value.as_reflect()).contains("Some(5)"));
    }
}
