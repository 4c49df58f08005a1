use crate::model::DeclaredDependencies;
use reqcat_types::FileId;
use std::collections::HashMap;

pub fn declared(entries: &[(&str, &[&str])]) -> DeclaredDependencies {
    entries
        .iter()
        .map(|(file, deps)| (FileId::new(file), ids(deps)))
        .collect()
}

pub fn ids(names: &[&str]) -> Vec<FileId> {
    names.iter().map(FileId::new).collect()
}

/// Assert `order` places every declared dependency before the file declaring it.
pub fn assert_dependency_first(deps: &DeclaredDependencies, order: &[FileId]) {
    let position: HashMap<&FileId, usize> =
        order.iter().enumerate().map(|(ix, id)| (id, ix)).collect();

    for (file, declared) in deps {
        let f = position[file];
        for dep in declared {
            let d = position[dep];
            assert!(
                d < f,
                "{} (at {}) must precede {} (at {})",
                dep,
                d,
                file,
                f
            );
        }
    }
}
