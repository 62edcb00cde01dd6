use alloc::rc::Rc;
use core::any::TypeId;

use foldhash::fast::FixedState;
use vc_reflect::Reflect;
use vc_reflect::ops::Struct;

use crate::matcher::MemberIndex;
use crate::{CopyError, CopyOptions, CopyStats, Destination};

// -----------------------------------------------------------------------------
// Copier

/// A configured copy engine.
///
/// [`copy`] is a shortcut for `Copier::default().copy(..)` that drops the
/// statistics.
///
/// ```
/// use vc_copier::{Copier, CopyOptions};
/// use vc_reflect::derive::Reflect;
///
/// #[derive(Reflect, Default)]
/// struct Settings {
///     volume: u8,
///     title: String,
/// }
///
/// let source = Settings { volume: 0, title: "main".into() };
/// let mut target = Settings { volume: 7, title: String::new() };
///
/// let copier = Copier::new(CopyOptions::new().with_ignore_empty(true));
/// let stats = copier.copy(&mut target, &source).unwrap();
///
/// assert_eq!(target.volume, 7);
/// assert_eq!(target.title, "main");
/// assert_eq!((stats.copied, stats.unchanged), (1, 1));
/// ```
#[derive(Debug, Default, Clone)]
pub struct Copier {
    options: CopyOptions,
}

impl Copier {
    #[inline]
    pub const fn new(options: CopyOptions) -> Self {
        Self { options }
    }

    #[inline]
    pub const fn options(&self) -> &CopyOptions {
        &self.options
    }

    /// Copies `src` into `dst`, see the [crate documentation](crate).
    ///
    /// # Errors
    ///
    /// Returns [`CopyError::NotAddressable`] when `dst` is a shared borrow,
    /// before anything is read.
    pub fn copy<'a>(
        &self,
        dst: impl Into<Destination<'a>>,
        src: &dyn Reflect,
    ) -> Result<CopyStats, CopyError> {
        let dst = match dst.into() {
            Destination::Writable(dst) => dst,
            Destination::ReadOnly(dst) => {
                return Err(CopyError::NotAddressable {
                    type_path: dst.reflect_type_path(),
                });
            }
        };

        let mut run = Run::new(&self.options);
        run.copy_root(dst, src);

        log::debug!(
            "copied `{}` into `{}`: {}",
            src.reflect_type_path(),
            dst.reflect_type_path(),
            run.stats,
        );
        Ok(run.stats)
    }
}

/// Copies `src` into `dst` with the default [`CopyOptions`].
///
/// # Errors
///
/// Returns [`CopyError::NotAddressable`] when `dst` is a shared borrow.
#[inline]
pub fn copy<'a>(dst: impl Into<Destination<'a>>, src: &dyn Reflect) -> Result<(), CopyError> {
    Copier::default().copy(dst, src).map(drop)
}

// -----------------------------------------------------------------------------
// Run

/// The state of one [`Copier::copy`] call.
///
/// The steps of a copy are implemented on this type in their own modules.
pub(crate) struct Run<'c> {
    pub options: &'c CopyOptions,
    pub stats: CopyStats,
    indices: hashbrown::HashMap<TypeId, Rc<MemberIndex>, FixedState>,
}

impl<'c> Run<'c> {
    fn new(options: &'c CopyOptions) -> Self {
        Self {
            options,
            stats: CopyStats::default(),
            indices: hashbrown::HashMap::with_hasher(FixedState::default()),
        }
    }

    /// The member index of a struct type, built once per run.
    pub fn member_index(&mut self, value: &dyn Struct) -> Option<Rc<MemberIndex>> {
        let info = value.reflect_type_info().as_struct().ok()?;
        let index = self
            .indices
            .entry(info.ty_id())
            .or_insert_with(|| Rc::new(MemberIndex::new(info)));
        Some(Rc::clone(index))
    }
}
