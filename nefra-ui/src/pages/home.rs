//! Home Page
//!
//! Hero, "Recent Matches" and success stories. Sections backed by the
//! featured lists are omitted while those lists are empty.

use leptos::*;
use nefra_connect::pages::{HomeView, SIDEBAR_DELAY};
use nefra_connect::routing::Route;

use crate::components::{CardSize, ConnectionCard, Link, Loading, Reveal, Side, SuccessStoryCard};
use crate::state::global::GlobalState;

#[component]
pub fn Home() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let content = state.content;
    let view_model = create_memo(move |_| content.with(HomeView::build));
    let loading = state.loading;

    let go_search = {
        let state = state.clone();
        move |_: ev::MouseEvent| state.navigate(Route::Search.path())
    };
    let go_search_cta = go_search.clone();
    let go_explore = go_search.clone();

    view! {
        <div class="app-root">
            <section class="hero relative overflow-hidden py-24">
                <div class="hero-watermark">"NEFRA"</div>

                {move || view_model.get().hero.map(|hero| view! {
                    <Reveal key="hero-left" class="hidden lg:block absolute left-8 top-24 w-64">
                        <ConnectionCard data=hero.left side=Side::Left />
                    </Reveal>
                    <Reveal key="hero-right" class="hidden lg:block absolute right-8 top-24 w-64">
                        <ConnectionCard data=hero.right side=Side::Right />
                    </Reveal>
                })}

                <div class="hero-inner container mx-auto px-4 text-center max-w-2xl">
                    <span class="hero-tag uppercase text-xs tracking-widest text-gray-500">"Est. 2026"</span>
                    <h1 class="hero-title text-5xl font-bold mt-4">"Bridging Campus & Capital,"</h1>
                    <h2 class="hero-subtitle text-3xl text-gray-600 mt-2">"Fueling Innovation"</h2>
                    <p class="hero-lead text-gray-600 mt-6">
                        "The official ecosystem for PSG iTech entrepreneurs. Connect with alumni investors, \
                         find mentors, and turn your final year project into a funded startup."
                    </p>
                    <div class="hero-actions mt-8 flex justify-center space-x-3">
                        <button class="btn btn-primary" on:click=go_search>"+ Start Connecting"</button>
                        <button class="btn btn-outline" on:click=go_explore>"Explore Registry"</button>
                    </div>
                </div>
            </section>

            {move || loading.get().then(|| view! { <Loading /> })}

            {move || {
                let home = view_model.get();
                home.has_matches().then(move || view! {
                    <section class="recent-activity container mx-auto px-4 py-16">
                        <Reveal key="matches-head" class="section-head flex items-end justify-between mb-8">
                            <div>
                                <span class="eyebrow text-xs uppercase tracking-widest text-gray-500">"Campus Activity"</span>
                                <h2 class="section-title text-3xl font-bold">"Recent " <em>"Matches"</em></h2>
                            </div>
                            <Link route=Route::Search class="view-all text-sm font-medium">"View Registry →"</Link>
                        </Reveal>
                        <div class="grid md:grid-cols-3 gap-6">
                            {home.feature.map(|feature| view! {
                                <Reveal key="matches-feature" class="feature md:col-span-2">
                                    <ConnectionCard data=feature size=CardSize::Large />
                                </Reveal>
                            })}
                            <Reveal key="matches-sidebar" delay=SIDEBAR_DELAY class="sidebar space-y-6">
                                {home.sidebar.into_iter().map(|c| view! { <ConnectionCard data=c /> }).collect_view()}
                            </Reveal>
                        </div>
                    </section>
                })
            }}

            {move || {
                let home = view_model.get();
                home.has_stories().then(move || view! {
                    <section class="success-stories bg-white py-16">
                        <div class="container mx-auto px-4">
                            <Reveal key="stories-head" class="section-head center text-center mb-10">
                                <span class="eyebrow text-xs uppercase tracking-widest text-gray-500">"From Campus to Corporate"</span>
                                <h2 class="section-title text-3xl font-bold">"Real Ideas, " <em>"Real Funding"</em></h2>
                            </Reveal>
                            <div class="stories-grid grid md:grid-cols-3 gap-6">
                                {home.stories.into_iter().map(|tile| {
                                    let key = format!("story-{}", tile.story.id);
                                    view! {
                                        <Reveal key=key delay=tile.delay>
                                            <SuccessStoryCard data=tile.story />
                                        </Reveal>
                                    }
                                }).collect_view()}
                            </div>
                        </div>
                    </section>
                })
            }}

            <section class="global-cta bg-gray-900 text-white py-20">
                <div class="cta-watermark">"INVEST"</div>
                <Reveal key="cta" class="cta-inner container mx-auto px-4 text-center">
                    <h2 class="cta-title text-4xl font-bold">"Your Next Co-Founder" <br /> <span>"Awaits"</span></h2>
                    <button class="btn btn-primary btn-cta mt-8" on:click=go_search_cta>"Join NEFRA Network"</button>
                </Reveal>
            </section>
        </div>
    }
}
