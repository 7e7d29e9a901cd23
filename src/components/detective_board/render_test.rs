use super::*;
use crate::components::detective_board::types::{CardId, CardSeed};

fn board() -> BoardState {
	let mut board = BoardState::new(vec![
		CardSeed::new(1, "a", 0.0, 0.0),
		CardSeed::new(2, "b", 0.0, 200.0),
		CardSeed::new(3, "c", 300.0, 0.0),
	]);
	for id in board.z_order() {
		let anchor = board.card(id).map(|card| card.position + Point::new(200.0, 40.0)).unwrap_or_default();
		board.recompute_pin_offset(id, anchor);
	}
	board
}

#[test]
fn board_without_edges_or_threads_draws_nothing() {
	assert!(segments(&board()).is_empty());
}

#[test]
fn edge_segment_joins_both_pins() {
	let mut board = board();
	board.try_connect(CardId(1), Point::new(200.0, 240.0));
	assert_eq!(
		segments(&board),
		vec![Segment {
			kind: SegmentKind::Edge,
			from: Point::new(200.0, 40.0),
			to: Point::new(200.0, 240.0),
		}]
	);
}

#[test]
fn thread_segment_runs_from_pin_to_tip() {
	let mut board = board();
	board.move_thread_tip(CardId(3), Point::new(-30.0, 60.0));
	assert_eq!(
		segments(&board),
		vec![Segment {
			kind: SegmentKind::Thread,
			from: Point::new(500.0, 40.0),
			to: Point::new(470.0, 100.0),
		}]
	);
}

#[test]
fn edges_come_before_threads() {
	let mut board = board();
	board.move_thread_tip(CardId(1), Point::new(1.0, 1.0));
	board.try_connect(CardId(2), Point::new(500.0, 40.0));
	board.try_connect(CardId(1), Point::new(500.0, 40.0));
	let kinds: Vec<SegmentKind> = segments(&board).iter().map(|s| s.kind).collect();
	assert_eq!(kinds, vec![SegmentKind::Edge, SegmentKind::Edge, SegmentKind::Thread]);
}

#[test]
fn segments_track_moved_cards_after_relayout() {
	let mut board = board();
	board.try_connect(CardId(1), Point::new(200.0, 240.0));
	board.move_position(CardId(2), Point::new(100.0, 0.0));
	board.recompute_pin_offset(CardId(2), Point::new(300.0, 240.0));
	let frame = segments(&board);
	assert_eq!(frame.len(), 1);
	assert_eq!(frame[0].to, Point::new(300.0, 240.0));
}
