//! Trunk entry point: installs logging and mounts the app on `<body>`.

use detective_board::{App, init_logging};
use leptos::prelude::*;

// Linked through the library crate.
use console_error_panic_hook as _;
use console_log as _;
use js_sys as _;
use leptos_meta as _;
use leptos_router as _;
use log as _;
use wasm_bindgen as _;
use web_sys as _;

fn main() {
	init_logging();
	mount_to_body(App);
}
