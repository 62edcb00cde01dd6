use std::collections::BTreeMap;
use std::env;
use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock};
use std::time::SystemTime;

use toml_edit::{Document, Item, Table};

/// Locate an accessible [`syn::Path`] for a workspace crate as seen from the
/// caller's Cargo.toml.
///
/// Derive macros emit absolute paths, and those paths must resolve from the
/// crate that invokes the macro, not from the macro crate itself.
///
/// # Example
///
/// ```rust
/// # use vc_macro_utils::Manifest;
/// let p: syn::Path = Manifest::shared(|m| m.get_crate_path("vc_reflect"));
/// ```
///
/// # Resolution rules
///
/// 1. If the requested crate is listed in `dependencies`, return `::crate_name`.
/// 2. If the requested crate name begins with `vc_` and the caller depends on
///    the umbrella crate `vc_copy`, return `::vc_copy::short_name`
///    (e.g. `vc_reflect` -> `::vc_copy::reflect`).
/// 3. Repeat step 1-2 in `dev-dependencies`.
/// 4. Otherwise, fall back to the absolute path `::crate_name`.
///
/// ## Note
/// A crate that derives on its own types should add
/// `extern crate self as vc_reflect;` to its root so that the fallback path
/// resolves in library code, doctests and integration tests alike.
#[derive(Debug)]
pub struct Manifest {
    pub manifest: Document<Box<str>>,
    pub modified_time: SystemTime,
}

const UMBRELLA_CRATES: &[&str] = &["vc_copy"];
const CRATE_PREFIX: &str = "vc_";

impl Manifest {
    #[inline(never)]
    fn get_manifest_path() -> PathBuf {
        let Some(dir) = env::var_os("CARGO_MANIFEST_DIR") else {
            panic!("CARGO_MANIFEST_DIR should be auto-defined by cargo.");
        };
        let path = PathBuf::from(dir).join("Cargo.toml");
        assert!(
            path.exists(),
            "Cargo manifest does not exist at path {}",
            path.display(),
        );
        path
    }

    #[inline(never)]
    fn read_manifest(path: &Path) -> Document<Box<str>> {
        let text = std::fs::read_to_string(path)
            .unwrap_or_else(|_| panic!("Unable to read cargo manifest: {}", path.display()));
        Document::parse(text.into_boxed_str())
            .unwrap_or_else(|_| panic!("Failed to parse cargo manifest: {}", path.display()))
    }

    fn absolute(segments: &[&str]) -> syn::Path {
        let text = segments
            .iter()
            .fold(String::new(), |acc, seg| acc + "::" + seg);
        syn::parse_str(&text)
            .unwrap_or_else(|_| panic!("`{text}` is not a valid crate path"))
    }

    fn find_in_deps(deps: &Table, name: &str) -> Option<syn::Path> {
        if deps.contains_key(name) {
            return Some(Self::absolute(&[name]));
        }

        let module = name.strip_prefix(CRATE_PREFIX)?;
        UMBRELLA_CRATES
            .iter()
            .find(|umbrella| deps.contains_key(umbrella))
            .map(|umbrella| Self::absolute(&[umbrella, module]))
    }

    /// Return a [`syn::Path`] for the package named `name` as resolved from this
    /// crate's Cargo.toml. See the type level documentation for the rules.
    #[inline(never)]
    pub fn get_crate_path(&self, name: &str) -> syn::Path {
        ["dependencies", "dev-dependencies"]
            .into_iter()
            .filter_map(|section| match self.manifest.get(section) {
                Some(Item::Table(deps)) => Self::find_in_deps(deps, name),
                _ => None,
            })
            .next()
            .unwrap_or_else(|| Self::absolute(&[name]))
    }

    /// Obtain the [`Manifest`] of the caller's Cargo.toml.
    ///
    /// The parsed manifest is cached per path and refreshed when the file's
    /// modified time changes.
    pub fn shared<R>(func: impl FnOnce(&Self) -> R) -> R {
        static MANIFESTS: RwLock<BTreeMap<PathBuf, Manifest>> = RwLock::new(BTreeMap::new());

        let manifest_path = Self::get_manifest_path();
        let modified_time = std::fs::metadata(&manifest_path)
            .and_then(|metadata| metadata.modified())
            .unwrap_or(SystemTime::UNIX_EPOCH);

        let manifests = MANIFESTS.read().unwrap_or_else(PoisonError::into_inner);

        if let Some(manifest) = manifests.get(&manifest_path)
            && manifest.modified_time == modified_time
        {
            return func(manifest);
        }

        drop(manifests);

        let manifest = Manifest {
            manifest: Self::read_manifest(&manifest_path),
            modified_time,
        };

        let result = func(&manifest);

        MANIFESTS
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(manifest_path, manifest);

        result
    }
}

#[cfg(test)]
mod tests {
    use super::Manifest;
    use quote::ToTokens;
    use toml_edit::{Document, Item};

    fn lookup(toml: &str, name: &str) -> String {
        let doc = Document::parse(Box::<str>::from(toml)).unwrap();
        let found = match doc.get("dependencies") {
            Some(Item::Table(deps)) => Manifest::find_in_deps(deps, name),
            _ => None,
        };
        found
            .unwrap_or_else(|| Manifest::absolute(&[name]))
            .to_token_stream()
            .to_string()
            .replace(' ', "")
    }

    #[test]
    fn direct_dependency_wins() {
        let toml = "[dependencies]\nvc_reflect = \"0.1\"\nvc_copy = \"0.1\"\n";
        assert_eq!(lookup(toml, "vc_reflect"), "::vc_reflect");
    }

    #[test]
    fn umbrella_dependency() {
        let toml = "[dependencies]\nvc_copy = \"0.1\"\n";
        assert_eq!(lookup(toml, "vc_reflect"), "::vc_copy::reflect");
    }

    #[test]
    fn unknown_crate_falls_back() {
        let toml = "[dependencies]\nserde = \"1\"\n";
        assert_eq!(lookup(toml, "vc_reflect"), "::vc_reflect");
    }
}
