//! # Test Utilities for the B+ Tree Map
//!
//! This module provides a loader that builds maps with an exact node
//! shape from JSON fixtures. It's only compiled in test builds
//! (`#[cfg(test)]`).
//!
//! Building a specific tree shape through `insert` is awkward because the
//! structure depends on insertion order and split points. The fixture
//! format mirrors the node model instead, so split, rotate and merge
//! paths can be tested deterministically.
//!
//! ## JSON Format
//!
//! A node is either an internal node or a leaf:
//!
//! ```json
//! {
//!   "keys": ["separator", ...],
//!   "children": [<node>, ...]
//! }
//! ```
//!
//! ```json
//! { "entries": [["key", 1], ["key2", 2]] }
//! ```
//!
//! The loader wires the leaf chain in tree order and derives `head`,
//! `tail`, `len` and `height` from the shape. The fixture author is
//! responsible for handing in a shape that satisfies the occupancy and
//! ordering invariants; `assert_invariants` in the consuming test will
//! catch mistakes.
//!
//! ## Limitations
//!
//! - Keys are always `String`
//! - Values are always `u64`
//! - Node capacities are fixed at 4 so small fixtures exercise
//!   structural paths

use crate::store::{LeafId, NodeId, NodeStore};
use crate::{GenericMap, InnerNode, LeafNode};
use serde::Deserialize;
use smallvec::SmallVec;

/// The map type used in fixtures: String keys, u64 values, capacity 4.
pub type FixtureMap = GenericMap<String, u64, 4, 4>;

/// A node in the JSON tree structure.
///
/// Uses `#[serde(untagged)]` to distinguish internal nodes from leaves
/// by their fields (internal has `keys`/`children`, leaf has `entries`).
#[derive(Deserialize, Debug)]
#[serde(untagged)]
enum TreeNode {
	/// An internal node: separator keys plus one more child than keys.
	Internal {
		keys: Vec<String>,
		children: Vec<TreeNode>,
	},
	/// A leaf node: the key-value entries, sorted by key.
	Leaf {
		entries: Vec<(String, u64)>,
	},
}

/// Builds a map with the exact node shape described by `json`.
///
/// # Panics
///
/// Panics if the JSON does not parse as a fixture node.
pub fn sample_map(json: &str) -> FixtureMap {
	let root: TreeNode = serde_json::from_str(json).expect("fixture must parse");

	let mut store = NodeStore::new();
	let mut leaves = Vec::new();
	let (root_id, height) = translate_node(&mut store, root, &mut leaves);

	// wire the leaf chain in tree order
	for pair in leaves.windows(2) {
		store.leaf_mut(pair[0]).next = Some(pair[1]);
		store.leaf_mut(pair[1]).prev = Some(pair[0]);
	}

	let len: usize = leaves.iter().map(|id| store.leaf(*id).len() as usize).sum();
	let head = *leaves.first().expect("fixture has at least one leaf");
	let tail = *leaves.last().expect("fixture has at least one leaf");

	GenericMap { store, root: root_id, head, tail, len, height }
}

/// Recursively translates a JSON node into arena nodes, collecting leaf
/// ids in tree order. Returns the node id and the subtree depth.
fn translate_node(
	store: &mut NodeStore<String, u64, 4, 4>,
	node: TreeNode,
	leaves: &mut Vec<LeafId>,
) -> (NodeId, usize) {
	match node {
		TreeNode::Internal { keys, children } => {
			let out_keys: SmallVec<[String; 4]> = keys.into_iter().collect();
			let mut out_children: SmallVec<[NodeId; 4]> = SmallVec::new();
			let mut depth = 0;
			for child in children {
				let (id, child_depth) = translate_node(store, child, leaves);
				out_children.push(id);
				depth = child_depth;
			}
			let id = store.alloc_inner(InnerNode { keys: out_keys, children: out_children });
			(NodeId::Inner(id), depth + 1)
		}
		TreeNode::Leaf { entries } => {
			let mut keys: SmallVec<[String; 4]> = SmallVec::new();
			let mut values: SmallVec<[u64; 4]> = SmallVec::new();
			for (key, value) in entries {
				keys.push(key);
				values.push(value);
			}
			let id = store.alloc_leaf(LeafNode { keys, values, prev: None, next: None });
			leaves.push(id);
			(NodeId::Leaf(id), 1)
		}
	}
}
