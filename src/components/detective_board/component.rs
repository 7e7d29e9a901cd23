#[cfg(test)]
#[path = "component_test.rs"]
mod component_test;

use std::collections::HashMap;

use leptos::ev;
use leptos::html;
use leptos::prelude::*;
use log::warn;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, MouseEvent};

use super::drag::{DragController, DragHandle, DragTransition, PointerButton};
use super::render;
use super::state::BoardState;
use super::types::{CardId, CardSeed, Point};

/// Window-level listeners that live exactly as long as one drag.
struct DragListeners {
	on_move: WindowListenerHandle,
	on_up: WindowListenerHandle,
}

impl DragListeners {
	fn remove(self) {
		self.on_move.remove();
		self.on_up.remove();
	}
}

/// Reactive handles shared by the board and its cards.
#[derive(Clone, Copy)]
struct BoardContext {
	model: RwSignal<BoardState>,
	drag: StoredValue<DragController>,
	listeners: StoredValue<Option<DragListeners>, LocalStorage>,
	pins: StoredValue<HashMap<CardId, NodeRef<html::Button>>, LocalStorage>,
	board_ref: NodeRef<html::Div>,
	canvas_ref: NodeRef<html::Canvas>,
	/// Handle of the pending animation frame, if one is requested.
	frame_request: StoredValue<Option<i32>>,
}

impl BoardContext {
	fn new(seed: Vec<CardSeed>) -> Self {
		Self {
			model: RwSignal::new(BoardState::new(seed)),
			drag: StoredValue::new(DragController::new()),
			listeners: StoredValue::new_local(None),
			pins: StoredValue::new_local(HashMap::new()),
			board_ref: NodeRef::new(),
			canvas_ref: NodeRef::new(),
			frame_request: StoredValue::new(None),
		}
	}

	/// Runs a press or release. Subscribers only hear about transitions that
	/// touched the board.
	fn dispatch(
		self,
		f: impl FnOnce(&mut DragController, &mut BoardState) -> DragTransition,
	) -> DragTransition {
		self.drag
			.try_update_value(|ctl| {
				self.model.try_maybe_update(|board| {
					let transition = f(ctl, board);
					(transition.changes_board(), transition)
				})
			})
			.flatten()
			.unwrap_or(DragTransition::Ignored)
	}

	fn start_drag(self, handle: DragHandle, id: CardId, event: MouseEvent) {
		let button = PointerButton::from_dom(event.button());
		if self.dispatch(|ctl, board| ctl.press(handle, id, button, board)) != DragTransition::Started {
			return;
		}
		event.prevent_default();
		self.detach_listeners();

		let on_move = window_event_listener(ev::mousemove, move |event: MouseEvent| {
			let delta = Point::new(
				f64::from(event.movement_x()),
				f64::from(event.movement_y()),
			);
			self.drag.update_value(|ctl| {
				self.model
					.maybe_update(|board| ctl.pointer_moved(delta, board));
			});
		});
		let on_up = window_event_listener(ev::mouseup, move |event: MouseEvent| {
			let button = PointerButton::from_dom(event.button());
			if self.dispatch(|ctl, board| ctl.release(button, board)) == DragTransition::Ended {
				self.detach_listeners();
			}
		});
		self.listeners
			.set_value(Some(DragListeners { on_move, on_up }));
	}

	fn detach_listeners(self) {
		if let Some(Some(listeners)) = self.listeners.try_update_value(Option::take) {
			listeners.remove();
		}
	}

	fn raise(self, id: CardId) {
		self.model.maybe_update(|board| board.raise_to_front(id));
	}

	fn remove_card(self, id: CardId) {
		self.model
			.maybe_update(|board| board.remove_card(id).is_some());
	}

	/// Coalesces redraw requests into one pending animation frame.
	fn schedule_frame(self) {
		if self
			.frame_request
			.try_with_value(Option::is_some)
			.unwrap_or(true)
		{
			return;
		}
		let Some(window) = web_sys::window() else {
			return;
		};
		let callback = Closure::once_into_js(move || self.frame_fired());
		match window.request_animation_frame(callback.unchecked_ref()) {
			Ok(handle) => {
				self.frame_request
					.try_update_value(|request| *request = Some(handle));
			}
			Err(_) => {
				warn!("requestAnimationFrame rejected, drawing synchronously");
				self.run_frame();
			}
		}
	}

	/// Animation frame callback. The board may have been unmounted since the
	/// frame was requested, in which case every handle is already disposed.
	fn frame_fired(self) {
		if self
			.frame_request
			.try_update_value(|request| *request = None)
			.is_none()
		{
			return;
		}
		self.run_frame();
	}

	fn cancel_frame(self) {
		let Some(Some(handle)) = self.frame_request.try_update_value(Option::take) else {
			return;
		};
		let Some(window) = web_sys::window() else {
			return;
		};
		if window.cancel_animation_frame(handle).is_err() {
			warn!("cancelAnimationFrame rejected handle {handle}");
		}
	}

	/// Measure pins, store their offsets, fit the overlay, then draw.
	fn run_frame(self) {
		let Some(Some(board_el)) = self.board_ref.try_get_untracked() else {
			return;
		};
		let rect = board_el.get_bounding_client_rect();
		let origin = Point::new(
			rect.left() + f64::from(board_el.client_left()),
			rect.top() + f64::from(board_el.client_top()),
		);

		let Some(anchors) = self.pins.try_with_value(|pins| {
			pins.iter()
				.filter_map(|(id, pin)| {
					let rect = pin.try_get_untracked().flatten()?.get_bounding_client_rect();
					let center = Point::new(
						rect.left() + rect.width() / 2.0,
						rect.top() + rect.height() / 2.0,
					);
					Some((*id, center - origin))
				})
				.collect::<Vec<_>>()
		}) else {
			return;
		};
		self.model.try_maybe_update(|board| {
			let changed = anchors.iter().fold(false, |changed, &(id, anchor)| {
				board.recompute_pin_offset(id, anchor) | changed
			});
			(changed, ())
		});

		let Some(Some(canvas)) = self.canvas_ref.try_get_untracked() else {
			return;
		};
		let (width, height) = (board_el.client_width(), board_el.client_height());
		canvas.set_width(u32::try_from(width).unwrap_or_default());
		canvas.set_height(u32::try_from(height).unwrap_or_default());

		let Ok(Some(ctx)) = canvas.get_context("2d") else {
			warn!("Overlay canvas has no 2d context");
			return;
		};
		let Ok(ctx) = ctx.dyn_into::<CanvasRenderingContext2d>() else {
			warn!("Overlay context is not a CanvasRenderingContext2d");
			return;
		};
		self.model.try_with_untracked(|board| {
			render::render(board, &ctx, f64::from(width), f64::from(height));
		});
	}
}

/// Free-form board of index cards whose pins can be joined by threads.
#[component]
pub fn DetectiveBoard(
	#[prop(into)] seed: Vec<CardSeed>,
	#[prop(default = 1200.0)] width: f64,
	#[prop(default = 600.0)] height: f64,
) -> impl IntoView {
	let board = BoardContext::new(seed);

	// Any model change invalidates the layout, so re-measure and redraw.
	Effect::new(move |_| {
		board.model.track();
		board.schedule_frame();
	});

	let resize = StoredValue::new_local(Some(window_event_listener(
		ev::resize,
		move |_| board.schedule_frame(),
	)));
	on_cleanup(move || {
		board.detach_listeners();
		board.cancel_frame();
		if let Some(Some(handle)) = resize.try_update_value(Option::take) {
			handle.remove();
		}
	});

	view! {
		<div
			node_ref=board.board_ref
			class="item"
			style:position="relative"
			style:width=format!("{width}px")
			style:height=format!("{height}px")
		>
			<h1>"Detective Board"</h1>
			<For
				each=move || board.model.with(BoardState::z_order)
				key=|id| *id
				children=move |id| view! { <IndexCard id=id board=board /> }
			/>
			<canvas node_ref=board.canvas_ref class="board-overlay" />
		</div>
	}
}

#[component]
fn IndexCard(id: CardId, board: BoardContext) -> impl IntoView {
	let pin_ref = NodeRef::<html::Button>::new();
	board.pins.update_value(|pins| {
		pins.insert(id, pin_ref);
	});
	on_cleanup(move || {
		board.pins.try_update_value(|pins| pins.remove(&id));
	});

	let content = board
		.model
		.with_untracked(|model| model.card(id).map(|card| card.content.clone()))
		.unwrap_or_default();
	let position = move || {
		board
			.model
			.with(|model| model.card(id).map(|card| card.position))
			.unwrap_or_default()
	};

	view! {
		<div
			class="item"
			style:position="absolute"
			style:margin="0"
			style:left=move || format!("{}px", position().x)
			style:top=move || format!("{}px", position().y)
			on:mouseenter=move |_| board.raise(id)
		>
			<div style="display: flex; flex-direction: row;">
				<div style="flex: 1; display: flex; flex-direction: column;">
					<div class="subitem">{content}</div>
				</div>
				<div style="display: flex; flex-direction: column;">
					<button
						class="icon-button"
						title="Move card"
						on:mousedown=move |event| board.start_drag(DragHandle::Move, id, event)
					>
						"🖐️"
					</button>
					<button
						node_ref=pin_ref
						class="icon-button"
						title="Drag a thread"
						on:mousedown=move |event| board.start_drag(DragHandle::Thread, id, event)
					>
						"🟢"
					</button>
					<button
						class="icon-button"
						title="Remove card"
						on:click=move |_| board.remove_card(id)
					>
						"✖"
					</button>
				</div>
			</div>
		</div>
	}
}
