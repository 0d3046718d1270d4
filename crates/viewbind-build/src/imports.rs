use crate::discover::AnnotatedDeclaration;
use std::collections::{BTreeMap, BTreeSet};

///
/// ImportEntry
///
/// One distinct component path, the first declaration that referenced it
/// and the name emitted code uses for it.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ImportEntry {
    pub path: String,
    pub local: String,
    pub declaration: AnnotatedDeclaration,
}

impl ImportEntry {
    #[must_use]
    pub fn is_aliased(&self) -> bool {
        self.path.rsplit("::").next() != Some(self.local.as_str())
    }
}

///
/// ImportSet
///
/// At most one entry per fully-qualified path. Entries iterate in path
/// order and local names are handed out in that order, so the set does not
/// depend on the order declarations arrive in.
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ImportSet {
    entries: Vec<ImportEntry>,
}

impl ImportSet {
    #[must_use]
    pub fn collect<'a>(declarations: impl IntoIterator<Item = &'a AnnotatedDeclaration>) -> Self {
        Self::with_reserved(&[], declarations)
    }

    /// Like `collect`, but never hands out a name in `reserved`.
    #[must_use]
    pub fn with_reserved<'a>(
        reserved: &[&str],
        declarations: impl IntoIterator<Item = &'a AnnotatedDeclaration>,
    ) -> Self {
        let mut by_path: BTreeMap<&str, &AnnotatedDeclaration> = BTreeMap::new();
        for decl in declarations {
            by_path.entry(decl.ty.as_str()).or_insert(decl);
        }

        let mut taken: BTreeSet<String> = reserved.iter().map(ToString::to_string).collect();
        let entries = by_path
            .into_iter()
            .map(|(path, decl)| ImportEntry {
                path: path.to_string(),
                local: local_name(decl.type_name(), &mut taken),
                declaration: decl.clone(),
            })
            .collect();

        Self { entries }
    }

    /// Local name for a component path, if it was imported.
    #[must_use]
    pub fn local(&self, path: &str) -> Option<&str> {
        self.get(path).map(|entry| entry.local.as_str())
    }

    #[must_use]
    pub fn get(&self, path: &str) -> Option<&ImportEntry> {
        self.entries.iter().find(|entry| entry.path == path)
    }

    #[must_use]
    pub fn contains(&self, path: &str) -> bool {
        self.get(path).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ImportEntry> {
        self.entries.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a ImportSet {
    type Item = &'a ImportEntry;
    type IntoIter = std::slice::Iter<'a, ImportEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

// `Label`, then `Label2`, `Label3`, ...
fn local_name(simple: &str, taken: &mut BTreeSet<String>) -> String {
    let mut candidate = simple.to_string();
    let mut n = 2;
    while taken.contains(&candidate) {
        candidate = format!("{simple}{n}");
        n += 1;
    }
    taken.insert(candidate.clone());

    candidate
}

///
/// TESTS
///
