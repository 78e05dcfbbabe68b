//! Orphan resolution against the set of project-referenced paths.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use super::paths::comparison_key;

/// Case-insensitive set of absolute paths referenced by project descriptors.
///
/// Keys are normalized lowercased path strings, giving set membership instead
/// of a nested linear scan over the reference list.
#[derive(Debug, Default)]
pub struct ReferenceSet {
    keys: HashSet<String>,
}

impl ReferenceSet {
    /// Build the set from the union of all descriptors' reference lists.
    pub fn from_paths<I, P>(paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let keys = paths
            .into_iter()
            .map(|p| comparison_key(p.as_ref()))
            .collect();
        Self { keys }
    }

    /// Case-insensitive membership test.
    pub fn contains(&self, path: &Path) -> bool {
        self.keys.contains(&comparison_key(path))
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

/// Return every candidate not present in the reference set, preserving
/// candidate order.
pub fn resolve_orphans(candidates: &[PathBuf], references: &ReferenceSet) -> Vec<PathBuf> {
    candidates
        .iter()
        .filter(|c| !references.contains(c))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn membership_is_case_insensitive() {
        let refs = ReferenceSet::from_paths([Path::new("/work/Src/File.cpp")]);

        assert!(refs.contains(Path::new("/work/src/file.cpp")));
        assert!(refs.contains(Path::new("/WORK/SRC/FILE.CPP")));
        assert!(!refs.contains(Path::new("/work/src/other.cpp")));
    }

    #[test]
    fn duplicate_references_collapse() {
        let refs = ReferenceSet::from_paths([
            Path::new("/work/a.cpp"),
            Path::new("/work/A.CPP"),
            Path::new("/work/a.cpp"),
        ]);

        assert_eq!(refs.len(), 1);
    }

    #[test]
    fn orphans_are_candidates_absent_from_references() {
        let refs = ReferenceSet::from_paths([Path::new("/work/b.tmp")]);
        let candidates = vec![
            PathBuf::from("/work/a.tmp"),
            PathBuf::from("/work/b.tmp"),
            PathBuf::from("/work/c.tmp"),
        ];

        let orphans = resolve_orphans(&candidates, &refs);

        assert_eq!(
            orphans,
            vec![PathBuf::from("/work/a.tmp"), PathBuf::from("/work/c.tmp")]
        );
    }

    #[test]
    fn reference_from_any_descriptor_protects() {
        // Union semantics: one descriptor referencing a file is enough,
        // no matter how many others do not.
        let from_first = vec![PathBuf::from("/work/shared.tmp")];
        let from_second: Vec<PathBuf> = vec![];
        let refs = ReferenceSet::from_paths(from_first.iter().chain(from_second.iter()));

        let candidates = vec![PathBuf::from("/work/shared.tmp")];
        assert!(resolve_orphans(&candidates, &refs).is_empty());
    }

    #[test]
    fn empty_reference_set_makes_everything_orphan() {
        let refs = ReferenceSet::default();
        let candidates = vec![PathBuf::from("/work/a.tmp")];

        assert!(refs.is_empty());
        assert_eq!(resolve_orphans(&candidates, &refs), candidates);
    }

    #[test]
    fn no_candidates_yields_no_orphans() {
        let refs = ReferenceSet::from_paths([Path::new("/work/a.tmp")]);
        assert!(resolve_orphans(&[], &refs).is_empty());
    }
}
