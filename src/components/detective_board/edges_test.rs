use super::*;

fn edge(a: u32, b: u32) -> Edge {
	Edge::new(CardId(a), CardId(b)).expect("distinct endpoints")
}

// =============================================================
// Edge
// =============================================================

#[test]
fn edge_is_unordered() {
	assert_eq!(Edge::new(CardId(1), CardId(2)), Edge::new(CardId(2), CardId(1)));
}

#[test]
fn edge_endpoints_are_canonical() {
	assert_eq!(edge(9, 4).endpoints(), (CardId(4), CardId(9)));
}

#[test]
fn self_loop_is_rejected() {
	assert_eq!(Edge::new(CardId(3), CardId(3)), None);
}

#[test]
fn edge_touches_both_ends_only() {
	let e = edge(1, 2);
	assert!(e.touches(CardId(1)));
	assert!(e.touches(CardId(2)));
	assert!(!e.touches(CardId(3)));
}

// =============================================================
// EdgeSet
// =============================================================

#[test]
fn toggle_adds_then_removes() {
	let mut set = EdgeSet::new();
	assert_eq!(set.toggle(edge(1, 2)), Toggle::Connected(edge(1, 2)));
	assert!(set.contains(CardId(1), CardId(2)));
	assert_eq!(set.toggle(edge(2, 1)), Toggle::Disconnected(edge(1, 2)));
	assert!(set.is_empty());
}

#[test]
fn membership_is_symmetric() {
	let mut set = EdgeSet::new();
	set.toggle(edge(5, 3));
	assert!(set.contains(CardId(3), CardId(5)));
	assert!(set.contains(CardId(5), CardId(3)));
	assert!(!set.contains(CardId(3), CardId(3)));
}

#[test]
fn no_duplicate_pairs() {
	let mut set = EdgeSet::new();
	set.toggle(edge(1, 2));
	set.toggle(edge(1, 3));
	assert_eq!(set.len(), 2);
	assert_eq!(set.iter().collect::<Vec<_>>(), vec![edge(1, 2), edge(1, 3)]);
}

#[test]
fn prune_removes_incident_edges() {
	let mut set = EdgeSet::new();
	set.toggle(edge(1, 2));
	set.toggle(edge(2, 3));
	set.toggle(edge(3, 4));
	assert_eq!(set.prune(CardId(2)), 2);
	assert_eq!(set.iter().collect::<Vec<_>>(), vec![edge(3, 4)]);
	assert_eq!(set.prune(CardId(2)), 0);
}
