//! Property-based tests for the resolver.
//!
//! These tests use proptest to verify invariants around:
//! - dependency-first ordering on acyclic input
//! - cycle detection never leaking a partial order
//! - determinism and coverage of nodes that only appear as dependencies

use crate::extract::{DependencyExtractor, RequireExtractor};
use crate::model::DeclaredDependencies;
use crate::resolve::resolve;
use crate::test_support::assert_dependency_first;
use proptest::prelude::*;
use reqcat_types::FileId;
use std::collections::BTreeSet;

// ============================================================================
// Strategies
// ============================================================================

fn node_name(ix: usize) -> FileId {
    FileId::new(format!("dir{}/file{}.txt", ix % 3, ix))
}

fn external_name(ix: usize) -> FileId {
    FileId::new(format!("external/{}.txt", ix))
}

/// Acyclic declarations: node `i` may only declare nodes `j < i`, plus external
/// identifiers that are never keys. Duplicates are allowed.
fn arb_acyclic() -> impl Strategy<Value = DeclaredDependencies> {
    (1usize..24).prop_flat_map(|n| {
        prop::collection::vec(
            (
                prop::collection::vec(any::<prop::sample::Index>(), 0..5),
                prop::collection::vec(0usize..4, 0..2),
            ),
            n,
        )
        .prop_map(move |per_node| {
            let mut deps = DeclaredDependencies::new();
            for (i, (picks, externals)) in per_node.into_iter().enumerate() {
                let mut declared: Vec<FileId> = Vec::new();
                if i > 0 {
                    declared.extend(picks.iter().map(|p| node_name(p.index(i))));
                }
                declared.extend(externals.into_iter().map(external_name));
                deps.insert(node_name(i), declared);
            }
            deps
        })
    })
}

/// Acyclic declarations with one two-node cycle spliced in.
fn arb_cyclic() -> impl Strategy<Value = DeclaredDependencies> {
    arb_acyclic()
        .prop_filter("need two keys", |deps| deps.len() >= 2)
        .prop_flat_map(|deps| {
            let n = deps.len();
            (Just(deps), 0..n, 0..n).prop_filter("distinct", |(_, a, b)| a != b)
        })
        .prop_map(|(mut deps, a, b)| {
            let keys: Vec<FileId> = deps.keys().cloned().collect();
            let (ka, kb) = (keys[a].clone(), keys[b].clone());
            deps.entry(ka.clone()).or_default().push(kb.clone());
            deps.entry(kb).or_default().push(ka);
            deps
        })
}

fn all_nodes(deps: &DeclaredDependencies) -> BTreeSet<FileId> {
    deps.iter()
        .flat_map(|(k, v)| std::iter::once(k).chain(v.iter()))
        .cloned()
        .collect()
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn acyclic_input_orders_every_node_once_dependency_first(deps in arb_acyclic()) {
        let order = resolve(&deps).expect("acyclic input must resolve");

        let expected = all_nodes(&deps);
        let actual: BTreeSet<FileId> = order.iter().cloned().collect();
        prop_assert_eq!(order.len(), expected.len(), "no node may repeat");
        prop_assert_eq!(actual, expected);

        assert_dependency_first(&deps, &order);
    }

    #[test]
    fn cyclic_input_never_yields_an_order(deps in arb_cyclic()) {
        let err = resolve(&deps).expect_err("cycle must be detected");

        prop_assert!(!err.cycle.is_empty());
        let unresolved: BTreeSet<&FileId> = err.unresolved.iter().collect();
        for member in &err.cycle {
            prop_assert!(unresolved.contains(member));
        }

        // Each cycle member declares the next one.
        for (ix, member) in err.cycle.iter().enumerate() {
            let next = &err.cycle[(ix + 1) % err.cycle.len()];
            prop_assert!(deps[member].contains(next), "{} should declare {}", member, next);
        }
    }

    #[test]
    fn resolution_is_deterministic(deps in arb_acyclic()) {
        prop_assert_eq!(resolve(&deps), resolve(&deps));
    }

    #[test]
    fn external_only_nodes_appear_exactly_once(deps in arb_acyclic()) {
        let order = resolve(&deps).expect("acyclic input must resolve");
        for id in all_nodes(&deps).iter().filter(|id| !deps.contains_key(*id)) {
            prop_assert_eq!(order.iter().filter(|o| *o == id).count(), 1);
        }
    }

    #[test]
    fn extractor_never_panics(input in ".*") {
        let extractor = RequireExtractor::default();
        let _ = extractor.extract(&input);
    }

    #[test]
    fn extractor_finds_every_written_declaration(
        names in prop::collection::vec("[a-z][a-z0-9_/]{0,12}", 0..6),
    ) {
        let content: String = names
            .iter()
            .map(|n| format!("require '{}'\nbody line\n", n))
            .collect();
        let found = RequireExtractor::default().extract(&content);
        let expected: Vec<FileId> = names.iter().map(FileId::new).collect();
        prop_assert_eq!(found, expected);
    }
}
