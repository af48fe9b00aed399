//! Search Page
//!
//! Mock directory with a submitted text query and toggleable chips.

use leptos::*;
use nefra_connect::pages::search::directory;
use nefra_connect::pages::{DirectoryEntry, IndustryChip, RoleChip, SearchFilter};

#[component]
pub fn Search() -> impl IntoView {
    // Typed text only applies on submit; chips apply immediately
    let (draft, set_draft) = create_signal(String::new());
    let filter = create_rw_signal(SearchFilter::new());

    let results = create_memo(move |_| {
        filter.with(|f| f.apply(directory()).into_iter().copied().collect::<Vec<DirectoryEntry>>())
    });

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        filter.update(|f| f.query = draft.get_untracked());
    };

    let toggle_role = move |chip: RoleChip| {
        filter.update(|f| {
            f.query = draft.get_untracked();
            f.toggle_role(chip);
        });
    };

    let toggle_industry = move |chip: IndustryChip| {
        filter.update(|f| {
            f.query = draft.get_untracked();
            f.toggle_industry(chip);
        });
    };

    view! {
        <div class="search-container-modern container mx-auto px-4 py-12">
            <div class="search-hero-section text-center mb-8">
                <h1 class="search-hero-title text-4xl font-bold">"Find Your Next Connection"</h1>
                <p class="search-hero-subtitle text-gray-500 mt-2">"Search 10,000+ entrepreneurs and investors."</p>
            </div>

            <form on:submit=on_submit class="search-form max-w-2xl mx-auto flex space-x-2">
                <input
                    type="text"
                    class="search-input flex-1 rounded-lg border border-gray-300 px-4 py-3"
                    placeholder="Search by name, company, or industry..."
                    prop:value=move || draft.get()
                    on:input=move |ev| set_draft.set(event_target_value(&ev))
                />
                <button type="submit" class="search-button btn btn-dark px-6">"SEARCH"</button>
            </form>

            <div class="filters-row flex flex-wrap justify-between gap-2 max-w-2xl mx-auto mt-4">
                <div class="filter-group flex gap-2">
                    {RoleChip::ALL.into_iter().map(|chip| view! {
                        <button
                            class=move || chip_class(filter.with(|f| f.role == Some(chip)))
                            on:click=move |_| toggle_role(chip)
                        >
                            {chip.label()}
                        </button>
                    }).collect_view()}
                </div>
                <div class="filter-group flex gap-2">
                    {IndustryChip::ALL.into_iter().map(|chip| view! {
                        <button
                            class=move || chip_class(filter.with(|f| f.industry == Some(chip)))
                            on:click=move |_| toggle_industry(chip)
                        >
                            {chip.label()}
                        </button>
                    }).collect_view()}
                </div>
            </div>

            <div class="search-results-section mt-10">
                {move || {
                    let found = results.get();
                    if found.is_empty() {
                        view! {
                            <div class="no-results-section text-center text-gray-500 py-12">
                                <p>"No results found."</p>
                            </div>
                        }.into_view()
                    } else {
                        view! {
                            <p class="results-count text-sm text-gray-500 mb-4">
                                "Showing " <span class="count-number font-semibold">{found.len()}</span> " results"
                            </p>
                            <div class="results-grid grid sm:grid-cols-2 lg:grid-cols-3 gap-6">
                                {found.into_iter().map(|entry| view! { <ResultCard entry=entry /> }).collect_view()}
                            </div>
                        }.into_view()
                    }
                }}
            </div>
        </div>
    }
}

fn chip_class(active: bool) -> &'static str {
    if active {
        "filter-btn active px-3 py-1 rounded-full text-xs font-semibold bg-gray-900 text-white"
    } else {
        "filter-btn px-3 py-1 rounded-full text-xs font-semibold bg-gray-100 text-gray-600"
    }
}

#[component]
fn ResultCard(entry: DirectoryEntry) -> impl IntoView {
    view! {
        <div class="result-card bg-white rounded-xl shadow overflow-hidden">
            <img src=entry.image_url alt=entry.name class="result-image w-full h-56 object-cover" />
            <div class="result-info p-4">
                <div class="name-row flex items-center space-x-2">
                    <h3 class="result-name font-semibold">{entry.name}</h3>
                    {entry.verified.then(|| view! {
                        <span class="verified-badge-inline text-xs text-emerald-600">"✓ Verified"</span>
                    })}
                </div>
                <p class="result-role text-sm text-gray-600">{entry.role}</p>
                <p class="result-meta text-xs text-gray-500 mt-1">{format!("{} • {}", entry.company, entry.industry)}</p>
            </div>
        </div>
    }
}
