#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use super::state::BoardState;
use super::types::Point;

/// Stroke colour of committed edges.
pub const EDGE_COLOR: &str = "rgb(191, 31, 31)";
/// Stroke colour of threads still being dragged.
pub const THREAD_COLOR: &str = "rgb(31, 31, 191)";
/// Stroke width shared by edges and threads.
pub const LINE_WIDTH: f64 = 5.0;
const THREAD_DASH: f64 = 12.0;
const THREAD_GAP: f64 = 6.0;

/// Which style a segment is drawn in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SegmentKind {
	/// A committed edge between two pins.
	Edge,
	/// A thread from a pin to the dragged tip.
	Thread,
}

/// One stroked line on the overlay, in board-local pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
	/// Drawing style.
	pub kind: SegmentKind,
	/// Start point.
	pub from: Point,
	/// End point.
	pub to: Point,
}

/// Everything the overlay draws for `board`: committed edges first, then
/// in-flight threads.
pub fn segments(board: &BoardState) -> Vec<Segment> {
	let edges = board.edges().iter().filter_map(|edge| {
		let (a, b) = edge.endpoints();
		Some(Segment {
			kind: SegmentKind::Edge,
			from: board.pin_position(a)?,
			to: board.pin_position(b)?,
		})
	});
	let threads = board.cards().iter().filter_map(|card| {
		card.thread_tip.map(|tip| Segment {
			kind: SegmentKind::Thread,
			from: card.pin(),
			to: tip,
		})
	});
	edges.chain(threads).collect()
}

/// Clears the overlay and strokes the current frame onto it.
pub fn render(board: &BoardState, ctx: &CanvasRenderingContext2d, width: f64, height: f64) {
	ctx.clear_rect(0.0, 0.0, width, height);
	let frame = segments(board);
	stroke_kind(ctx, &frame, SegmentKind::Edge, EDGE_COLOR, &js_sys::Array::new());
	let dash = js_sys::Array::of2(&JsValue::from_f64(THREAD_DASH), &JsValue::from_f64(THREAD_GAP));
	stroke_kind(ctx, &frame, SegmentKind::Thread, THREAD_COLOR, &dash);
	if ctx.set_line_dash(&js_sys::Array::new()).is_err() {
		log::warn!("Failed to reset overlay line dash");
	}
}

fn stroke_kind(
	ctx: &CanvasRenderingContext2d,
	frame: &[Segment],
	kind: SegmentKind,
	color: &str,
	dash: &js_sys::Array,
) {
	if ctx.set_line_dash(dash).is_err() {
		log::warn!("Failed to set overlay line dash");
	}
	ctx.set_line_width(LINE_WIDTH);
	ctx.set_stroke_style_str(color);
	ctx.begin_path();
	for segment in frame.iter().filter(|segment| segment.kind == kind) {
		ctx.move_to(segment.from.x, segment.from.y);
		ctx.line_to(segment.to.x, segment.to.y);
	}
	ctx.stroke();
}
