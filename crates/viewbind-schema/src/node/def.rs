///
/// Def
///
/// Where a node was declared: the module path captured by `module_path!()`
/// at the declaration site, plus the type identifier.
///

#[derive(Clone, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Def {
    pub module_path: &'static str,
    pub ident: &'static str,
}

impl Def {
    #[must_use]
    pub const fn new(module_path: &'static str, ident: &'static str) -> Self {
        Self { module_path, ident }
    }

    /// Fully-qualified path, `module_path::ident`.
    #[must_use]
    pub fn path(&self) -> String {
        if self.module_path.is_empty() {
            self.ident.to_string()
        } else {
            format!("{}::{}", self.module_path, self.ident)
        }
    }
}
