use std::collections::HashMap;
use std::convert::Infallible;

use pkgorder_core::graph::GraphSorter;

fn lookup_from(
    edges: &[(&str, &[&str])],
) -> impl FnMut(&str) -> Result<Vec<String>, Infallible> {
    let map: HashMap<String, Vec<String>> = edges
        .iter()
        .map(|(from, deps)| {
            (
                from.to_string(),
                deps.iter().map(|d| d.to_string()).collect(),
            )
        })
        .collect();
    move |id: &str| Ok(map.get(id).cloned().unwrap_or_default())
}

fn ids(names: &[&str]) -> Vec<String> {
    names.iter().map(|n| n.to_string()).collect()
}

#[test]
fn test_chain_orders_dependencies_first() {
    let lookup = lookup_from(&[("pkg-b", &["pkg-a"]), ("pkg-c", &["pkg-b"])]);
    let order = GraphSorter::sort(&ids(&["pkg-a", "pkg-b", "pkg-c"]), lookup).unwrap();

    assert_eq!(order, ids(&["pkg-a", "pkg-b", "pkg-c"]));
}

#[test]
fn test_singleton_skips_lookup() {
    let order = GraphSorter::sort(&ids(&["only"]), |_| -> Result<Vec<String>, Infallible> {
        panic!("lookup must not be called for a single package")
    })
    .unwrap();

    assert_eq!(order, ids(&["only"]));
}

#[test]
fn test_empty_input_returns_empty_order() {
    let empty: Vec<String> = Vec::new();
    let order = GraphSorter::sort(&empty, |_| -> Result<Vec<String>, Infallible> {
        panic!("lookup must not be called for empty input")
    })
    .unwrap();

    assert!(order.is_empty());
}

#[test]
fn test_two_cycle_goes_to_circular_block() {
    let lookup = lookup_from(&[("a", &["b"]), ("b", &["a"])]);
    let report = GraphSorter::sort_report(&ids(&["a", "b"]), lookup).unwrap();

    assert!(report.sorted.is_empty());
    assert!(report.has_cycles());
    let circular: Vec<&str> = report.circular.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(circular, vec!["a", "b"]);
    assert_eq!(report.order(), ids(&["a", "b"]));
}

#[test]
fn test_standalone_packages_come_last() {
    let lookup = lookup_from(&[("A", &["B"])]);
    let order = GraphSorter::sort(&ids(&["A", "B", "C"]), lookup).unwrap();

    assert_eq!(order, ids(&["B", "A", "C"]));
}

#[test]
fn test_standalone_keeps_input_order() {
    let lookup = lookup_from(&[("d", &["c"])]);
    let report = GraphSorter::sort_report(&ids(&["z", "d", "a", "c", "m"]), lookup).unwrap();

    assert_eq!(report.sorted, ids(&["c", "d"]));
    assert_eq!(report.standalone, ids(&["z", "a", "m"]));
}

#[test]
fn test_mixed_cycle_and_standalone() {
    let lookup = lookup_from(&[("p1", &["p2"]), ("p2", &["p3"]), ("p3", &["p2"])]);
    let report = GraphSorter::sort_report(&ids(&["p1", "p2", "p3", "p4"]), lookup).unwrap();

    assert_eq!(report.sorted, ids(&["p1"]));
    let circular: Vec<&str> = report.circular.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(circular, vec!["p2", "p3"]);
    assert_eq!(report.standalone, ids(&["p4"]));
    assert_eq!(report.order(), ids(&["p1", "p2", "p3", "p4"]));
}

#[test]
fn test_circular_ordered_by_out_degree() {
    let lookup = lookup_from(&[("a", &["b", "c"]), ("b", &["a"]), ("c", &["a"])]);
    let report = GraphSorter::sort_report(&ids(&["a", "b", "c"]), lookup).unwrap();

    let circular: Vec<(&str, usize)> = report
        .circular
        .iter()
        .map(|c| (c.id.as_str(), c.out_degree))
        .collect();
    assert_eq!(circular, vec![("b", 1), ("c", 1), ("a", 2)]);
}

#[test]
fn test_acyclic_dependents_of_cycle_stay_in_prefix() {
    let lookup = lookup_from(&[
        ("app", &["ui", "utils"]),
        ("ui", &["theme"]),
        ("theme", &["ui"]),
        ("utils", &[]),
    ]);
    let report =
        GraphSorter::sort_report(&ids(&["app", "theme", "ui", "utils"]), lookup).unwrap();

    assert_eq!(report.sorted, ids(&["utils", "app"]));
    let circular: Vec<&str> = report.circular.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(circular, vec!["ui", "theme"]);
    assert!(report.standalone.is_empty());
}

#[test]
fn test_shared_dependency_is_not_circular() {
    let lookup = lookup_from(&[
        ("app", &["left", "right"]),
        ("left", &["core"]),
        ("right", &["core"]),
    ]);
    let report =
        GraphSorter::sort_report(&ids(&["app", "core", "left", "right"]), lookup).unwrap();

    assert!(!report.has_cycles());
    assert_eq!(report.order(), ids(&["core", "left", "right", "app"]));
}

#[test]
fn test_self_and_external_dependencies_ignored() {
    let lookup = lookup_from(&[("a", &["a", "react", "b"])]);
    let report = GraphSorter::sort_report(&ids(&["a", "b"]), lookup).unwrap();

    assert!(!report.has_cycles());
    assert_eq!(report.edges.len(), 1);
    assert_eq!(report.order(), ids(&["b", "a"]));
}

#[test]
fn test_self_dependency_only_is_standalone() {
    let lookup = lookup_from(&[("a", &["a"])]);
    let report = GraphSorter::sort_report(&ids(&["a", "b"]), lookup).unwrap();

    assert!(report.sorted.is_empty());
    assert_eq!(report.standalone, ids(&["a", "b"]));
}

#[test]
fn test_duplicate_dependencies_collapse() {
    let lookup = lookup_from(&[("a", &["b", "b"])]);
    let report = GraphSorter::sort_report(&ids(&["a", "b"]), lookup).unwrap();

    assert_eq!(report.edges.len(), 1);
    assert_eq!(report.edges[0].from, "a");
    assert_eq!(report.edges[0].to, "b");
}

#[test]
fn test_duplicate_ids_collapse() {
    let lookup = lookup_from(&[("a", &["b"])]);
    let order = GraphSorter::sort(&ids(&["a", "b", "a"]), lookup).unwrap();

    assert_eq!(order, ids(&["b", "a"]));
}

#[test]
fn test_lookup_error_propagates() {
    let result = GraphSorter::sort(&ids(&["a", "b"]), |id| {
        if id == "b" {
            Err(format!("manifest missing for {}", id))
        } else {
            Ok(vec!["b".to_string()])
        }
    });

    assert_eq!(result.unwrap_err(), "manifest missing for b");
}

#[test]
fn test_sort_is_idempotent() {
    let edges: &[(&str, &[&str])] = &[
        ("a", &["b", "c"]),
        ("b", &["c"]),
        ("c", &["b"]),
        ("d", &["a"]),
    ];
    let input = ids(&["d", "c", "b", "a", "e"]);

    let first = GraphSorter::sort(&input, lookup_from(edges)).unwrap();
    let second = GraphSorter::sort(&input, lookup_from(edges)).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_deep_chain_does_not_overflow() {
    let count = 50_000;
    let input: Vec<String> = (0..count).map(|i| format!("pkg-{}", i)).collect();
    let order = GraphSorter::sort(&input, |id| -> Result<Vec<String>, Infallible> {
        let n: usize = id.trim_start_matches("pkg-").parse().unwrap_or(0);
        Ok(if n + 1 < count {
            vec![format!("pkg-{}", n + 1)]
        } else {
            Vec::new()
        })
    })
    .unwrap();

    assert_eq!(order.len(), count);
    assert_eq!(order[0], format!("pkg-{}", count - 1));
    assert_eq!(order[count - 1], "pkg-0");
}

#[test]
fn test_report_order_matches_segments() {
    let lookup = lookup_from(&[("p1", &["p2"]), ("p2", &["p3"]), ("p3", &["p2"])]);
    let report = GraphSorter::sort_report(&ids(&["p1", "p2", "p3", "p4"]), lookup).unwrap();

    let order = report.order();
    assert_eq!(order, report.clone().into_order());
    assert_eq!(order.len(), report.len());
    assert!(order.iter().all(|id| !id.is_empty()));
    assert_eq!(report.edges.len(), 3);
}
