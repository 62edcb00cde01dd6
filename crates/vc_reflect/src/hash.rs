//! Hash containers with a fixed, platform independent hasher.

use core::any::TypeId;

pub(crate) use foldhash::fast::FixedState;

/// A [`hashbrown::HashMap`] using [`FixedState`].
pub type HashMap<K, V> = hashbrown::HashMap<K, V, FixedState>;

/// A map keyed by [`TypeId`].
pub type TypeIdMap<V> = HashMap<TypeId, V>;

/// Creates an empty [`TypeIdMap`] in a `const` context.
#[inline]
pub const fn new_type_id_map<V>() -> TypeIdMap<V> {
    hashbrown::HashMap::with_hasher(FixedState::with_seed(0))
}
