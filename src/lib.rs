//! Leptos client-side detective board: index cards joined by threads.

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::*;
use leptos_router::path;
use log::{Level, info};

// Modules
mod components;
mod pages;

// Top-Level pages
use crate::pages::board::Board;
use crate::pages::home::Home;

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	if console_log::init_with_level(Level::Debug).is_ok() {
		info!("Logging initialized");
	}
	console_error_panic_hook::set_once();
}

/// An app router which renders the homepage and the board, sending
/// anything else back home.
#[component]
pub fn App() -> impl IntoView {
	// Provides context that manages stylesheets, titles, meta tags, etc.
	provide_meta_context();

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="light" />

		// sets the document title
		<Title text="Detective Board" />

		// injects metadata in the <head> of the page
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<Router>
			<Routes fallback=|| view! { <Redirect path="/" /> }>
				<Route path=path!("/") view=Home />
				<Route path=path!("/board") view=Board />
			</Routes>
		</Router>
	}
}
