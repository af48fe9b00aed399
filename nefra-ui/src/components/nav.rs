//! Navigation Component
//!
//! Header bar with brand, route links, and the pitch call to action.

use leptos::*;
use nefra_connect::pages::{nav_items, BRAND, PITCH_CTA};
use nefra_connect::routing::Route;

use crate::state::global::GlobalState;

/// Site header
#[component]
pub fn Header() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let (menu_open, set_menu_open) = create_signal(false);

    let path = state.path;
    let items = create_memo(move |_| nav_items(&path.get()));

    let go = {
        let state = state.clone();
        move |route: Route| {
            state.navigate(route.path());
            set_menu_open.set(false);
        }
    };

    let go_brand = go.clone();
    let go_cta = go.clone();
    let go_link = go.clone();
    let go_mobile = go;

    view! {
        <header class="site-nav sticky top-0 z-40 bg-white/90 backdrop-blur border-b border-gray-200">
            <div class="nav-inner container mx-auto px-4 flex items-center justify-between h-16">
                <button class="nav-brand flex items-center space-x-2" on:click=move |_| go_brand(Route::Home)>
                    <div class="logo w-8 h-8 rounded-lg bg-gray-900 text-white flex items-center justify-center font-bold">"N"</div>
                    <div class="brand text-lg font-semibold">{BRAND}</div>
                </button>

                <nav class="nav-links hidden md:flex items-center space-x-6">
                    {move || {
                        let go = go_link.clone();
                        items.get().into_iter().map(|item| {
                            let go = go.clone();
                            let href = item.route.path();
                            view! {
                                <a
                                    href=href
                                    class=if item.active { "active-link font-semibold" } else { "text-gray-600 hover:text-gray-900" }
                                    on:click=move |ev: ev::MouseEvent| {
                                        ev.prevent_default();
                                        go(item.route);
                                    }
                                >
                                    {item.label}
                                </a>
                            }
                        }).collect_view()
                    }}
                </nav>

                <div class="nav-cta flex items-center space-x-2">
                    <button
                        class="btn btn-dark px-4 py-2 rounded-lg bg-gray-900 text-white text-sm font-medium"
                        on:click=move |_| go_cta(PITCH_CTA.1)
                    >
                        {PITCH_CTA.0}
                    </button>
                    <button
                        class="mobile-menu-btn md:hidden p-2"
                        aria-label="Toggle menu"
                        on:click=move |_| set_menu_open.update(|open| *open = !*open)
                    >
                        "☰"
                    </button>
                </div>
            </div>

            {move || {
                if menu_open.get() {
                    let go = go_mobile.clone();
                    view! {
                        <div class="mobile-menu md:hidden border-t border-gray-200 px-4 py-2 flex flex-col">
                            {items.get().into_iter().map(|item| {
                                let go = go.clone();
                                view! {
                                    <button
                                        class=if item.active { "mobile-nav-link active py-2 text-left font-semibold" } else { "mobile-nav-link py-2 text-left" }
                                        on:click=move |_| go(item.route)
                                    >
                                        {item.label}
                                    </button>
                                }
                            }).collect_view()}
                        </div>
                    }.into_view()
                } else {
                    view! {}.into_view()
                }
            }}
        </header>
    }
}
