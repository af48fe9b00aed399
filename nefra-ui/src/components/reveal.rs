//! Reveal Wrapper
//!
//! Registers its element with the [`RevealController`] on mount and
//! unregisters on cleanup. Styling for `.reveal` / `.reveal.active` lives in
//! the stylesheet.
//!
//! [`RevealController`]: crate::state::RevealController

use leptos::html::Div;
use leptos::*;
use nefra_connect::reveal::RevealId;
use std::time::Duration;

use crate::state::global::GlobalState;

#[component]
pub fn Reveal(
    /// Stable identity of the slot, used in logs
    #[prop(into)]
    key: String,
    /// Fixed transition delay instead of the stagger slot
    #[prop(optional)]
    delay: Option<Duration>,
    #[prop(optional, into)]
    class: String,
    children: Children,
) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let node_ref = create_node_ref::<Div>();
    let id = store_value(None::<RevealId>);

    let reveal = state.reveal.clone();
    node_ref.on_load(move |el| {
        let element: web_sys::Element = (*el).clone().into();
        id.set_value(Some(reveal.register(element, &key, delay)));
    });

    let reveal = state.reveal.clone();
    on_cleanup(move || {
        if let Some(id) = id.get_value() {
            reveal.unregister(id);
        }
    });

    view! {
        <div node_ref=node_ref class=format!("reveal {}", class)>
            {children()}
        </div>
    }
}
