use leptos::prelude::*;
use leptos_router::components::A;

/// Default Home Page
#[component]
pub fn Home() -> impl IntoView {
	view! {
		<p>"According to all known laws of aviation..."</p>
		<A href="/board">"Open the detective board"</A>
	}
}
