//! Pointer-drag state machine for card handles.
//!
//! Each card has two handles: the move handle drags the card, the pin handle
//! drags a thread. A single [`DragController`] owns the board's active gesture
//! so the whole machine is one enumerable [`DragState`].

#[cfg(test)]
#[path = "drag_test.rs"]
mod drag_test;

use log::debug;

use super::state::BoardState;
use super::types::{CardId, Point};

/// Which handle on a card was pressed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragHandle {
	/// Drags the whole card.
	Move,
	/// Drags a thread out of the card's pin.
	Thread,
}

/// Mouse button as reported by `MouseEvent.button`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerButton {
	/// Usually the left button. The only one that drags.
	Primary,
	/// Wheel click.
	Middle,
	/// Usually the right button.
	Secondary,
	/// Back, forward, and anything more exotic.
	Other,
}

impl PointerButton {
	/// Maps the DOM `button` code.
	pub fn from_dom(button: i16) -> Self {
		match button {
			0 => Self::Primary,
			1 => Self::Middle,
			2 => Self::Secondary,
			_ => Self::Other,
		}
	}
}

/// The gesture in progress, if any.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DragState {
	/// Waiting for a press.
	#[default]
	Idle,
	/// The card's move handle is held.
	MovingCard(CardId),
	/// A thread is being pulled from the card's pin.
	DraggingThread(CardId),
}

/// Outcome of a press or release, telling the host whether to attach or
/// detach its global pointer listeners.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragTransition {
	/// Nothing changed.
	Ignored,
	/// A drag began; attach the global listeners.
	Started,
	/// The drag finished; detach them.
	Ended,
}

impl DragTransition {
	/// Whether the board may have been mutated. Ignored presses and releases
	/// never touch it.
	pub fn changes_board(self) -> bool {
		self != Self::Ignored
	}
}

/// Owns the board's single active gesture.
#[derive(Clone, Debug, Default)]
pub struct DragController {
	state: DragState,
}

impl DragController {
	/// An idle controller.
	pub fn new() -> Self {
		Self::default()
	}

	/// Whether any gesture is active.
	pub fn is_dragging(&self) -> bool {
		self.state != DragState::Idle
	}

	/// Starts a drag on a primary press while idle.
	pub fn press(
		&mut self,
		handle: DragHandle,
		id: CardId,
		button: PointerButton,
		board: &mut BoardState,
	) -> DragTransition {
		if button != PointerButton::Primary || self.is_dragging() || !board.contains(id) {
			return DragTransition::Ignored;
		}
		self.state = match handle {
			DragHandle::Move => DragState::MovingCard(id),
			DragHandle::Thread => {
				board.begin_or_end_thread_drag(id, true);
				DragState::DraggingThread(id)
			}
		};
		debug!("Drag started: {:?}", self.state);
		DragTransition::Started
	}

	/// Applies a relative pointer movement to the active gesture.
	pub fn pointer_moved(&mut self, delta: Point, board: &mut BoardState) -> bool {
		match self.state {
			DragState::Idle => false,
			DragState::MovingCard(id) => board.move_position(id, delta),
			DragState::DraggingThread(id) => board.move_thread_tip(id, delta),
		}
	}

	/// Ends the drag on a primary release anywhere. Thread drags try to
	/// connect where the tip was dropped.
	pub fn release(&mut self, button: PointerButton, board: &mut BoardState) -> DragTransition {
		if button != PointerButton::Primary || !self.is_dragging() {
			return DragTransition::Ignored;
		}
		if let DragState::DraggingThread(id) = self.state {
			board.begin_or_end_thread_drag(id, false);
		}
		debug!("Drag ended: {:?}", self.state);
		self.state = DragState::Idle;
		DragTransition::Ended
	}
}
