//! Undirected connections between cards.
//!
//! An [`Edge`] always stores its endpoints as `(min, max)`, so `{a, b}` and
//! `{b, a}` are the same value and set membership is symmetric for free.

#[cfg(test)]
#[path = "edges_test.rs"]
mod edges_test;

use std::collections::BTreeSet;

use super::types::CardId;

/// A committed, undirected connection between two distinct cards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Edge {
	low: CardId,
	high: CardId,
}

impl Edge {
	/// Returns `None` for a self-loop.
	pub fn new(a: CardId, b: CardId) -> Option<Self> {
		match a.cmp(&b) {
			std::cmp::Ordering::Less => Some(Self { low: a, high: b }),
			std::cmp::Ordering::Greater => Some(Self { low: b, high: a }),
			std::cmp::Ordering::Equal => None,
		}
	}

	/// Both ends, lowest id first.
	pub fn endpoints(self) -> (CardId, CardId) {
		(self.low, self.high)
	}

	/// Whether `id` is one of the ends.
	pub fn touches(self, id: CardId) -> bool {
		self.low == id || self.high == id
	}
}

/// What a toggle did to the edge set.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Toggle {
	/// The edge was absent and has been added.
	Connected(Edge),
	/// The edge was present and has been removed.
	Disconnected(Edge),
}

/// Set of edges with no duplicate unordered pairs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EdgeSet {
	edges: BTreeSet<Edge>,
}

impl EdgeSet {
	/// An empty set.
	pub fn new() -> Self {
		Self::default()
	}

	/// Adds the edge if absent, removes it if present.
	pub fn toggle(&mut self, edge: Edge) -> Toggle {
		if self.edges.remove(&edge) {
			Toggle::Disconnected(edge)
		} else {
			self.edges.insert(edge);
			Toggle::Connected(edge)
		}
	}

	/// Drops every edge incident to `id`, returning how many were removed.
	pub fn prune(&mut self, id: CardId) -> usize {
		let before = self.edges.len();
		self.edges.retain(|edge| !edge.touches(id));
		before - self.edges.len()
	}

	/// Edges in id order.
	pub fn iter(&self) -> impl Iterator<Item = Edge> + '_ {
		self.edges.iter().copied()
	}
}

#[cfg(test)]
impl EdgeSet {
	/// Symmetric membership test: `{a, b}` and `{b, a}` are the same edge.
	pub fn contains(&self, a: CardId, b: CardId) -> bool {
		Edge::new(a, b).is_some_and(|edge| self.edges.contains(&edge))
	}

	pub fn len(&self) -> usize {
		self.edges.len()
	}

	pub fn is_empty(&self) -> bool {
		self.edges.is_empty()
	}
}
