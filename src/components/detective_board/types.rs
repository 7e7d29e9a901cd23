use std::fmt;
use std::ops::{Add, AddAssign, Sub};

/// Stable identity of an index card. Never reused while the card exists.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CardId(pub u32);

impl fmt::Display for CardId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "#{}", self.0)
	}
}

/// A point or offset in board-local pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
	/// Horizontal coordinate, growing rightwards.
	pub x: f64,
	/// Vertical coordinate, growing downwards.
	pub y: f64,
}

impl Point {
	/// The origin.
	pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

	/// Builds a point from its coordinates.
	pub fn new(x: f64, y: f64) -> Self {
		Self { x, y }
	}
}

impl Add for Point {
	type Output = Point;

	fn add(self, rhs: Point) -> Point {
		Point::new(self.x + rhs.x, self.y + rhs.y)
	}
}

impl AddAssign for Point {
	fn add_assign(&mut self, rhs: Point) {
		self.x += rhs.x;
		self.y += rhs.y;
	}
}

impl Sub for Point {
	type Output = Point;

	fn sub(self, rhs: Point) -> Point {
		Point::new(self.x - rhs.x, self.y - rhs.y)
	}
}

/// Initial description of a card handed to the board by its caller.
#[derive(Clone, Debug)]
pub struct CardSeed {
	/// Identity the card keeps for its whole life.
	pub id: CardId,
	/// Text shown on the card.
	pub content: String,
	/// Initial top-left corner.
	pub position: Point,
}

impl CardSeed {
	/// Shorthand for a seed at `(x, y)`.
	pub fn new(id: u32, content: impl Into<String>, x: f64, y: f64) -> Self {
		Self {
			id: CardId(id),
			content: content.into(),
			position: Point::new(x, y),
		}
	}
}
