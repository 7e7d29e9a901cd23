use super::*;

fn seeds() -> Vec<CardSeed> {
	vec![
		CardSeed::new(1, "Is this the real life?", 0.0, 0.0),
		CardSeed::new(2, "Is this just fantasy?", 0.0, 200.0),
	]
}

// =============================================================
// Dispatch
// =============================================================

#[test]
fn dispatch_forwards_transitions() {
	let owner = Owner::new();
	owner.with(|| {
		let board = BoardContext::new(seeds());
		let secondary = board.dispatch(|ctl, model| {
			ctl.press(DragHandle::Move, CardId(1), PointerButton::Secondary, model)
		});
		assert_eq!(secondary, DragTransition::Ignored);
		let primary = board.dispatch(|ctl, model| {
			ctl.press(DragHandle::Move, CardId(1), PointerButton::Primary, model)
		});
		assert_eq!(primary, DragTransition::Started);
		let released = board.dispatch(|ctl, model| ctl.release(PointerButton::Primary, model));
		assert_eq!(released, DragTransition::Ended);
	});
}

// =============================================================
// Frames after unmount
// =============================================================

#[test]
fn frame_on_unmounted_board_is_skipped() {
	let owner = Owner::new();
	let board = owner.with(|| BoardContext::new(seeds()));
	board.run_frame();
	board.frame_fired();
	assert_eq!(board.frame_request.try_get_value(), Some(None));
}

#[test]
fn frame_after_dispose_returns_quietly() {
	let owner = Owner::new();
	let board = owner.with(|| BoardContext::new(seeds()));
	owner.cleanup();
	board.frame_fired();
	board.run_frame();
	assert_eq!(board.frame_request.try_get_value(), None);
}

#[test]
fn dispatch_after_dispose_is_ignored() {
	let owner = Owner::new();
	let board = owner.with(|| BoardContext::new(seeds()));
	owner.cleanup();
	let transition = board.dispatch(|ctl, model| {
		ctl.press(DragHandle::Thread, CardId(2), PointerButton::Primary, model)
	});
	assert_eq!(transition, DragTransition::Ignored);
}
