//! App Root Component
//!
//! Global providers, the header, and the page for the current path.

use leptos::*;
use nefra_connect::pages::Page;
use nefra_connect::routing::Route;

use crate::api::BrowserFeedSource;
use crate::components::{Header, Toast};
use crate::pages::{Company, Home, Profile, Search, Settings, SignIn, SignUp};
use crate::state::global::{provide_global_state, GlobalState};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    provide_global_state();

    let state = use_context::<GlobalState>().expect("GlobalState not found");
    load_featured_content(&state);

    // Re-run reveal collection whenever the page or featured data changes
    let reveal = state.reveal.clone();
    let path = state.path;
    let content = state.content;
    create_effect(move |_| {
        path.with(|_| ());
        content.with(|_| ());
        reveal.schedule();
    });

    let reveal = state.reveal.clone();
    on_cleanup(move || reveal.teardown());

    let page = create_memo(move |_| Page::from(Route::from_path(&path.get())));

    // Keep the document title in step with the page
    create_effect(move |_| {
        let title = page.get().title();
        if let Some(document) = web_sys::window().and_then(|w| w.document()) {
            document.set_title(&format!("{} | {}", title, nefra_connect::pages::BRAND));
        }
    });

    view! {
        <div class="min-h-screen bg-gray-50 text-gray-900 flex flex-col">
            <Header />

            <main class="flex-1">
                {move || match page.get() {
                    Page::Home => view! { <Home /> }.into_view(),
                    Page::Search => view! { <Search /> }.into_view(),
                    Page::Company => view! { <Company /> }.into_view(),
                    Page::Profile => view! { <Profile /> }.into_view(),
                    Page::SignIn => view! { <SignIn /> }.into_view(),
                    Page::SignUp => view! { <SignUp /> }.into_view(),
                    Page::Settings => view! { <Settings /> }.into_view(),
                }}
            </main>

            <Footer />

            <Toast />
        </div>
    }
}

/// Fetch both featured lists once per page load. Failures leave the
/// affected list empty.
fn load_featured_content(state: &GlobalState) {
    let content = state.content;
    let loading = state.loading;

    loading.set(true);
    spawn_local(async move {
        let source = BrowserFeedSource::from_storage();
        let featured = nefra_connect::feed::load_featured(&source).await;
        if featured.is_empty() {
            web_sys::console::warn_1(&"Featured feeds unavailable; sections hidden".into());
        }
        content.set(featured);
        loading.set(false);
    });
}

#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="border-t border-gray-200 bg-white py-6">
            <div class="container mx-auto px-4 text-center text-sm text-gray-500">
                {format!("© {} {}", chrono::Utc::now().format("%Y"), nefra_connect::pages::BRAND)}
            </div>
        </footer>
    }
}
