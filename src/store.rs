//! Slab arena for tree nodes.
//!
//! Nodes live in growable slot vectors and reference each other through
//! small integer ids instead of pointers. This keeps the tree a purely
//! downward-owning structure: the leaf chain and every cursor address a
//! node as an id, so no node ever needs a back-reference. Freed slots are
//! recycled through per-kind free lists.

use crate::{InnerNode, LeafNode};

/// Identifies a leaf slot in the arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct LeafId(pub(crate) u32);

/// Identifies an internal-node slot in the arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct InnerId(pub(crate) u32);

/// A child edge: either an internal node or a leaf.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum NodeId {
	Inner(InnerId),
	Leaf(LeafId),
}

impl NodeId {
	#[inline]
	pub(crate) fn expect_leaf(self) -> LeafId {
		match self {
			NodeId::Leaf(id) => id,
			NodeId::Inner(_) => panic!("expected leaf node"),
		}
	}

	#[inline]
	pub(crate) fn expect_inner(self) -> InnerId {
		match self {
			NodeId::Inner(id) => id,
			NodeId::Leaf(_) => panic!("expected internal node"),
		}
	}
}

pub(crate) struct NodeStore<K, V, const IC: usize, const LC: usize> {
	leaves: Vec<Option<LeafNode<K, V, LC>>>,
	inners: Vec<Option<InnerNode<K, IC>>>,
	free_leaves: Vec<LeafId>,
	free_inners: Vec<InnerId>,
}

impl<K, V, const IC: usize, const LC: usize> NodeStore<K, V, IC, LC> {
	pub(crate) fn new() -> Self {
		NodeStore {
			leaves: Vec::new(),
			inners: Vec::new(),
			free_leaves: Vec::new(),
			free_inners: Vec::new(),
		}
	}

	pub(crate) fn alloc_leaf(&mut self, node: LeafNode<K, V, LC>) -> LeafId {
		match self.free_leaves.pop() {
			Some(id) => {
				self.leaves[id.0 as usize] = Some(node);
				id
			}
			None => {
				let id = LeafId(self.leaves.len() as u32);
				self.leaves.push(Some(node));
				id
			}
		}
	}

	pub(crate) fn alloc_inner(&mut self, node: InnerNode<K, IC>) -> InnerId {
		match self.free_inners.pop() {
			Some(id) => {
				self.inners[id.0 as usize] = Some(node);
				id
			}
			None => {
				let id = InnerId(self.inners.len() as u32);
				self.inners.push(Some(node));
				id
			}
		}
	}

	#[inline]
	pub(crate) fn leaf(&self, id: LeafId) -> &LeafNode<K, V, LC> {
		self.leaves[id.0 as usize].as_ref().expect("leaf slot is live")
	}

	#[inline]
	pub(crate) fn leaf_mut(&mut self, id: LeafId) -> &mut LeafNode<K, V, LC> {
		self.leaves[id.0 as usize].as_mut().expect("leaf slot is live")
	}

	#[inline]
	pub(crate) fn inner(&self, id: InnerId) -> &InnerNode<K, IC> {
		self.inners[id.0 as usize].as_ref().expect("inner slot is live")
	}

	#[inline]
	pub(crate) fn inner_mut(&mut self, id: InnerId) -> &mut InnerNode<K, IC> {
		self.inners[id.0 as usize].as_mut().expect("inner slot is live")
	}

	/// Removes a leaf from the arena, recycling its slot.
	pub(crate) fn free_leaf(&mut self, id: LeafId) -> LeafNode<K, V, LC> {
		let node = self.leaves[id.0 as usize].take().expect("leaf slot is live");
		self.free_leaves.push(id);
		node
	}

	/// Removes an internal node from the arena, recycling its slot.
	pub(crate) fn free_inner(&mut self, id: InnerId) -> InnerNode<K, IC> {
		let node = self.inners[id.0 as usize].take().expect("inner slot is live");
		self.free_inners.push(id);
		node
	}

	/// Takes a leaf out without recycling; used when the whole store is
	/// being consumed.
	pub(crate) fn take_leaf(&mut self, id: LeafId) -> LeafNode<K, V, LC> {
		self.leaves[id.0 as usize].take().expect("leaf slot is live")
	}

	pub(crate) fn live_leaves(&self) -> usize {
		self.leaves.iter().filter(|slot| slot.is_some()).count()
	}

	pub(crate) fn live_inners(&self) -> usize {
		self.inners.iter().filter(|slot| slot.is_some()).count()
	}
}
