use leptos::prelude::*;

use crate::components::detective_board::{CardSeed, DetectiveBoard};

/// The fixed set of cards the board opens with.
fn seed_cards() -> Vec<CardSeed> {
	vec![
		CardSeed::new(1, "Is this the real life?", 0.0, 0.0),
		CardSeed::new(2, "Is this just fantasy?", 0.0, 200.0),
		CardSeed::new(3, "Caught in a landslide, no escape from reality", 300.0, 0.0),
	]
}

/// Board page
#[component]
pub fn Board() -> impl IntoView {
	view! {
		<ErrorBoundary fallback=|errors| {
			view! {
				<h1>"Uh oh! Something went wrong!"</h1>

				<p>"Errors: "</p>
				<ul>
					{move || {
						errors
							.get()
							.into_iter()
							.map(|(_, e)| view! { <li>{e.to_string()}</li> })
							.collect_view()
					}}
				</ul>
			}
		}>
			<DetectiveBoard seed=seed_cards() />
		</ErrorBoundary>
	}
}
