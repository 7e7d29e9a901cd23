#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;

use log::{info, warn};

use super::edges::{Edge, EdgeSet, Toggle};
use super::types::{CardId, CardSeed, Point};

/// Half-width of the square drop target centred on every pin (a 32x32 box).
pub const PIN_HIT_HALF_EXTENT: f64 = 16.0;

/// An index card on the board.
#[derive(Clone, Debug, PartialEq)]
pub struct Card {
	/// Stable identity.
	pub id: CardId,
	/// Text shown on the card.
	pub content: String,
	/// Top-left of the card's bounding box. Only drags move it.
	pub position: Point,
	/// Pin anchor relative to `position`, as measured by the last layout pass.
	pub pin_offset: Point,
	/// Free end of an in-progress thread drag from this card's pin.
	pub thread_tip: Option<Point>,
}

impl Card {
	fn from_seed(seed: CardSeed) -> Self {
		Self {
			id: seed.id,
			content: seed.content,
			position: seed.position,
			pin_offset: Point::ZERO,
			thread_tip: None,
		}
	}

	/// Absolute position of the pin anchor.
	pub fn pin(&self) -> Point {
		self.position + self.pin_offset
	}

	fn pin_hit(&self, point: Point) -> bool {
		let pin = self.pin();
		pin.x - PIN_HIT_HALF_EXTENT <= point.x
			&& point.x < pin.x + PIN_HIT_HALF_EXTENT
			&& pin.y - PIN_HIT_HALF_EXTENT <= point.y
			&& point.y < pin.y + PIN_HIT_HALF_EXTENT
	}
}

/// Cards in z-order (last is topmost) plus the edges between their pins.
///
/// Mutators never read pixel geometry. `pin_offset` only changes through
/// [`BoardState::recompute_pin_offset`], which the layout pass calls after the
/// DOM reflects the new positions.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BoardState {
	cards: Vec<Card>,
	edges: EdgeSet,
}

impl BoardState {
	/// Builds the board from seeds, bottom to top. Duplicate ids are skipped.
	pub fn new(seeds: impl IntoIterator<Item = CardSeed>) -> Self {
		let mut cards: Vec<Card> = Vec::new();
		for seed in seeds {
			if cards.iter().any(|card| card.id == seed.id) {
				warn!("Skipping duplicate card seed {}", seed.id);
				continue;
			}
			cards.push(Card::from_seed(seed));
		}
		Self {
			cards,
			edges: EdgeSet::new(),
		}
	}

	/// Cards in z-order, topmost last.
	pub fn cards(&self) -> &[Card] {
		&self.cards
	}

	/// Looks up a card by id.
	pub fn card(&self, id: CardId) -> Option<&Card> {
		self.cards.iter().find(|card| card.id == id)
	}

	/// Whether a card with this id is on the board.
	pub fn contains(&self, id: CardId) -> bool {
		self.card(id).is_some()
	}

	/// Card ids from bottom to top.
	pub fn z_order(&self) -> Vec<CardId> {
		self.cards.iter().map(|card| card.id).collect()
	}

	/// Committed connections.
	pub fn edges(&self) -> &EdgeSet {
		&self.edges
	}

	/// Absolute pin position of a card.
	pub fn pin_position(&self, id: CardId) -> Option<Point> {
		self.card(id).map(Card::pin)
	}

	fn card_mut(&mut self, id: CardId) -> Option<&mut Card> {
		self.cards.iter_mut().find(|card| card.id == id)
	}

	/// Shifts a card by `delta`. No clamping; the pin offset is left for the
	/// next layout pass.
	pub fn move_position(&mut self, id: CardId, delta: Point) -> bool {
		let Some(card) = self.card_mut(id) else {
			return false;
		};
		card.position += delta;
		true
	}

	/// Moves the thread tip, seeding it at the pin on the first move of a drag.
	pub fn move_thread_tip(&mut self, id: CardId, delta: Point) -> bool {
		let Some(card) = self.card_mut(id) else {
			return false;
		};
		let pin = card.pin();
		*card.thread_tip.get_or_insert(pin) += delta;
		true
	}

	/// Drag start is a no-op; drag end drops the thread and clears the tip.
	pub fn begin_or_end_thread_drag(&mut self, id: CardId, dragging: bool) -> Option<Toggle> {
		if dragging {
			return None;
		}
		let tip = self.card_mut(id)?.thread_tip.take()?;
		self.try_connect(id, tip)
	}

	/// Moves the card to the top of the z-order.
	pub fn raise_to_front(&mut self, id: CardId) -> bool {
		let Some(index) = self.cards.iter().position(|card| card.id == id) else {
			return false;
		};
		if index + 1 == self.cards.len() {
			return false;
		}
		let card = self.cards.remove(index);
		self.cards.push(card);
		true
	}

	/// Topmost card other than `from` whose pin target contains `point`.
	pub fn pin_at(&self, point: Point, from: CardId) -> Option<CardId> {
		self.cards
			.iter()
			.rev()
			.filter(|card| card.id != from)
			.find(|card| card.pin_hit(point))
			.map(|card| card.id)
	}

	/// Toggles the edge between `id` and whichever pin lies under `point`.
	pub fn try_connect(&mut self, id: CardId, point: Point) -> Option<Toggle> {
		if !self.contains(id) {
			return None;
		}
		let target = self.pin_at(point, id)?;
		let edge = Edge::new(id, target)?;
		let outcome = self.edges.toggle(edge);
		match outcome {
			Toggle::Connected(edge) => info!("Connected {:?}", edge.endpoints()),
			Toggle::Disconnected(edge) => info!("Disconnected {:?}", edge.endpoints()),
		}
		Some(outcome)
	}

	/// Stores `anchor - position` as the pin offset. Returns whether it changed.
	pub fn recompute_pin_offset(&mut self, id: CardId, anchor: Point) -> bool {
		let Some(card) = self.card_mut(id) else {
			return false;
		};
		let offset = anchor - card.position;
		if card.pin_offset == offset {
			return false;
		}
		card.pin_offset = offset;
		true
	}

	/// Removes the card together with every edge that touches it.
	pub fn remove_card(&mut self, id: CardId) -> Option<Card> {
		let index = self.cards.iter().position(|card| card.id == id)?;
		let card = self.cards.remove(index);
		let pruned = self.edges.prune(id);
		info!("Removed card {} and {} edge(s)", id, pruned);
		Some(card)
	}
}
