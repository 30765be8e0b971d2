use std::collections::HashSet;

/// Names of the methods a class declared when generation started.
///
/// The set is a snapshot: accessors produced during a run are never added to it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DuplicateGuard {
    existing: HashSet<String>,
}

impl DuplicateGuard {
    pub fn new(existing: HashSet<String>) -> Self {
        Self { existing }
    }

    pub fn contains(&self, method_name: &str) -> bool {
        self.existing.contains(method_name)
    }
}

impl<S: Into<String>> FromIterator<S> for DuplicateGuard {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(Into::into).collect())
    }
}
