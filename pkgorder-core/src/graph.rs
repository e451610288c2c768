//! Build ordering for workspace packages.
//!
//! The sorter walks the dependency graph depth-first and appends each package
//! after its dependencies (post-order). Packages caught in a dependency cycle
//! are held back and appended after the acyclic ones, fewest dependencies
//! first. Packages with no internal edges at all come last, in input order.

use indexmap::{IndexMap, IndexSet};
use rustc_hash::FxBuildHasher;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::{debug, info};

/// Opaque package identifier, usually the package's directory name.
pub type PackageId = String;

/// `from` depends on `to`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DependencyEdge {
    pub from: PackageId,
    pub to: PackageId,
}

/// A package that takes part in at least one dependency cycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CircularPackage {
    pub id: PackageId,
    pub out_degree: usize,
}

/// The build order split into the segments it was assembled from.
///
/// `order()` is `sorted ++ circular ++ standalone`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortReport {
    /// Non-circular packages, each after its non-circular dependencies.
    pub sorted: Vec<PackageId>,
    /// Cycle members by ascending out-degree.
    pub circular: Vec<CircularPackage>,
    /// Packages with no internal dependency edges, in input order.
    pub standalone: Vec<PackageId>,
    /// Edges in the order they were derived from the manifests.
    pub edges: Vec<DependencyEdge>,
}

impl SortReport {
    /// Returns the full build order.
    pub fn order(&self) -> Vec<PackageId> {
        self.sorted
            .iter()
            .chain(self.circular.iter().map(|c| &c.id))
            .chain(self.standalone.iter())
            .cloned()
            .collect()
    }

    pub fn into_order(self) -> Vec<PackageId> {
        let mut order = self.sorted;
        order.extend(self.circular.into_iter().map(|c| c.id));
        order.extend(self.standalone);
        order
    }

    #[inline]
    pub fn has_cycles(&self) -> bool {
        !self.circular.is_empty()
    }

    pub fn is_circular(&self, id: &str) -> bool {
        self.circular.iter().any(|c| c.id == id)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.sorted.len() + self.circular.len() + self.standalone.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Default)]
struct GraphNode {
    /// Indices into the node table, in declaration order.
    dependencies: SmallVec<[usize; 4]>,
}

type NodeTable = IndexMap<PackageId, GraphNode, FxBuildHasher>;

struct Frame {
    node: usize,
    next_child: usize,
}

struct Traversal {
    sorted: Vec<usize>,
    circular: Vec<bool>,
}

/// Orders packages so that dependencies come before their dependents.
pub struct GraphSorter;

impl GraphSorter {
    /// Returns `ids` in build order.
    ///
    /// `lookup` is called once per id and yields the ids that package
    /// depends on. Self references and ids not present in `ids` are ignored.
    /// A single id is returned as-is without calling `lookup`.
    ///
    /// # Errors
    ///
    /// Returns the first error produced by `lookup`, unchanged.
    pub fn sort<S, F, D, E>(ids: &[S], lookup: F) -> std::result::Result<Vec<PackageId>, E>
    where
        S: AsRef<str>,
        F: FnMut(&str) -> std::result::Result<D, E>,
        D: IntoIterator<Item = PackageId>,
    {
        Self::sort_report(ids, lookup).map(SortReport::into_order)
    }

    /// Like [`GraphSorter::sort`], but keeps the acyclic, circular and
    /// standalone segments apart and records the derived edges.
    ///
    /// # Errors
    ///
    /// Returns the first error produced by `lookup`, unchanged.
    pub fn sort_report<S, F, D, E>(ids: &[S], mut lookup: F) -> std::result::Result<SortReport, E>
    where
        S: AsRef<str>,
        F: FnMut(&str) -> std::result::Result<D, E>,
        D: IntoIterator<Item = PackageId>,
    {
        let inputs: IndexSet<&str, FxBuildHasher> = ids.iter().map(AsRef::<str>::as_ref).collect();

        if inputs.len() <= 1 {
            return Ok(SortReport {
                standalone: inputs.into_iter().map(str::to_string).collect(),
                ..SortReport::default()
            });
        }

        let mut nodes = NodeTable::default();
        let mut edges = Vec::new();

        for &id in &inputs {
            for dep in lookup(id)? {
                if dep == id {
                    debug!(package = id, "ignoring self dependency");
                    continue;
                }
                if !inputs.contains(dep.as_str()) {
                    debug!(package = id, dependency = %dep, "ignoring dependency outside the input set");
                    continue;
                }

                let from = node_index(&mut nodes, id);
                let to = node_index(&mut nodes, &dep);
                let dependencies = &mut nodes[from].dependencies;
                if dependencies.contains(&to) {
                    continue;
                }
                dependencies.push(to);
                edges.push(DependencyEdge {
                    from: id.to_string(),
                    to: dep,
                });
            }
        }

        let traversal = traverse(&nodes);
        let node_ids: Vec<&PackageId> = nodes.keys().collect();

        let sorted = traversal
            .sorted
            .iter()
            .map(|&idx| node_ids[idx].clone())
            .collect();

        let mut circular: Vec<usize> = (0..nodes.len())
            .filter(|&idx| traversal.circular[idx])
            .collect();
        circular.sort_by_key(|&idx| nodes[idx].dependencies.len());
        let circular: Vec<CircularPackage> = circular
            .into_iter()
            .map(|idx| CircularPackage {
                id: node_ids[idx].clone(),
                out_degree: nodes[idx].dependencies.len(),
            })
            .collect();

        if !circular.is_empty() {
            let names: Vec<&str> = circular.iter().map(|c| c.id.as_str()).collect();
            info!(
                count = circular.len(),
                packages = %names.join(", "),
                "circular dependencies detected, ordering them after acyclic packages"
            );
        }

        let standalone = inputs
            .iter()
            .filter(|id| !nodes.contains_key(**id))
            .map(|id| id.to_string())
            .collect();

        Ok(SortReport {
            sorted,
            circular,
            standalone,
            edges,
        })
    }
}

fn node_index(nodes: &mut NodeTable, id: &str) -> usize {
    match nodes.get_index_of(id) {
        Some(idx) => idx,
        None => nodes.insert_full(id.to_string(), GraphNode::default()).0,
    }
}

/// Depth-first post-order walk over every node, roots taken in table order.
///
/// The explicit stack doubles as the ancestor path: a child that is still on
/// the stack closes a cycle, and both it and the current node are marked
/// circular. The walk continues past cycles so a node can be found in several.
fn traverse(nodes: &NodeTable) -> Traversal {
    let count = nodes.len();
    let mut visited = vec![false; count];
    let mut on_path = vec![false; count];
    let mut circular = vec![false; count];
    let mut sorted = Vec::with_capacity(count);
    let mut stack: Vec<Frame> = Vec::new();

    for root in 0..count {
        if visited[root] {
            continue;
        }
        visited[root] = true;
        on_path[root] = true;
        stack.push(Frame {
            node: root,
            next_child: 0,
        });

        while let Some(frame) = stack.last_mut() {
            let node = frame.node;
            let child = nodes[node].dependencies.get(frame.next_child).copied();
            frame.next_child += 1;

            match child {
                Some(child) => {
                    if on_path[child] {
                        circular[node] = true;
                        circular[child] = true;
                    }
                    if !visited[child] {
                        visited[child] = true;
                        on_path[child] = true;
                        stack.push(Frame {
                            node: child,
                            next_child: 0,
                        });
                    }
                }
                None => {
                    stack.pop();
                    on_path[node] = false;
                    if !circular[node] {
                        sorted.push(node);
                    }
                }
            }
        }
    }

    Traversal { sorted, circular }
}
