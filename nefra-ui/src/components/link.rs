//! Client-side Link
//!
//! An anchor that routes through the shared router instead of reloading.

use leptos::*;
use nefra_connect::routing::Route;

use crate::state::global::GlobalState;

#[component]
pub fn Link(
    route: Route,
    #[prop(optional, into)]
    class: MaybeSignal<String>,
    children: Children,
) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let on_click = move |ev: ev::MouseEvent| {
        ev.prevent_default();
        state.navigate(route.path());
    };

    view! {
        <a href=route.path() class=move || class.get() on:click=on_click>
            {children()}
        </a>
    }
}
