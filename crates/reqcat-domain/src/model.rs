use reqcat_types::FileId;
use std::collections::BTreeMap;

/// Every scanned file mapped to the identifiers it declares, in declaration order.
///
/// Values may name identifiers that are not keys; the resolver admits them as
/// nodes of their own. Iteration order of the map is the deterministic input
/// order for node discovery.
pub type DeclaredDependencies = BTreeMap<FileId, Vec<FileId>>;

/// Total number of declarations, counting duplicates.
pub fn declaration_count(deps: &DeclaredDependencies) -> usize {
    deps.values().map(Vec::len).sum()
}
