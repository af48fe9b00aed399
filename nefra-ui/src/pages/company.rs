//! Company Page
//!
//! Startup showcase with About / Team / Metrics tabs.

use leptos::*;
use nefra_connect::pages::company::{showcase, CompanyProfile, CompanyTab};

use crate::components::Reveal;

#[component]
pub fn Company() -> impl IntoView {
    let company = store_value(showcase());
    let tab = create_rw_signal(CompanyTab::default());
    let (following, set_following) = create_signal(false);

    let header = company.with_value(|c| {
        let website_url = c.website_url();
        view! {
            <div class="company-cover h-56 bg-cover bg-center" style=format!("background-image: url('{}')", c.cover_url) />
            <div class="container mx-auto px-4 -mt-12 flex items-end justify-between">
                <div class="flex items-end space-x-4">
                    <img src=c.logo_url alt=c.name class="w-24 h-24 rounded-xl border-4 border-white shadow" />
                    <div>
                        <h1 class="text-3xl font-bold flex items-center space-x-2">
                            <span>{c.name}</span>
                            {c.verified.then(|| view! { <span class="text-emerald-600 text-base">"✓"</span> })}
                        </h1>
                        <p class="text-gray-600">{c.tagline}</p>
                        <div class="text-sm text-gray-500 space-x-3 mt-1">
                            <span>{format!("Founded {}", c.founded)}</span>
                            <span>{c.location}</span>
                            <a href=website_url target="_blank" rel="noopener">{c.website}</a>
                            <span>{c.industry}</span>
                        </div>
                    </div>
                </div>
                <button
                    class="btn btn-dark"
                    on:click=move |_| set_following.update(|f| *f = !*f)
                >
                    {move || if following.get() { "Following" } else { "+ Follow" }}
                </button>
            </div>
        }
    });

    view! {
        <div class="company-page pb-16">
            {header}

            <div class="container mx-auto px-4 mt-8 flex space-x-6 border-b border-gray-200">
                {CompanyTab::ALL.into_iter().map(|t| view! {
                    <button
                        class=move || if tab.get() == t { "tab active pb-3 border-b-2 border-gray-900 font-semibold" } else { "tab pb-3 text-gray-500" }
                        on:click=move |_| tab.set(t)
                    >
                        {t.label()}
                    </button>
                }).collect_view()}
            </div>

            <div class="container mx-auto px-4 mt-8">
                {move || {
                    let c = company.get_value();
                    match tab.get() {
                        CompanyTab::About => view! { <AboutTab company=c /> }.into_view(),
                        CompanyTab::Team => view! { <TeamTab company=c /> }.into_view(),
                        CompanyTab::Metrics => view! { <MetricsTab company=c /> }.into_view(),
                    }
                }}
            </div>
        </div>
    }
}

#[component]
fn AboutTab(company: CompanyProfile) -> impl IntoView {
    view! {
        <div class="grid md:grid-cols-3 gap-8">
            <div class="md:col-span-2 space-y-6">
                <Reveal key="company-summary">
                    <p class="text-gray-700">{company.summary}</p>
                </Reveal>
                <Reveal key="company-mission" class="grid sm:grid-cols-2 gap-4">
                    <div class="bg-white rounded-xl p-6 shadow">
                        <h3 class="font-semibold mb-2">"Mission"</h3>
                        <p class="text-sm text-gray-600">{company.mission}</p>
                    </div>
                    <div class="bg-white rounded-xl p-6 shadow">
                        <h3 class="font-semibold mb-2">"Vision"</h3>
                        <p class="text-sm text-gray-600">{company.vision}</p>
                    </div>
                </Reveal>
                <Reveal key="company-values" class="grid sm:grid-cols-3 gap-4">
                    {company.values.into_iter().map(|v| view! {
                        <div class="bg-white rounded-xl p-4 shadow">
                            <div class="text-2xl">{v.icon}</div>
                            <h4 class="font-semibold mt-2">{v.title}</h4>
                            <p class="text-xs text-gray-600 mt-1">{v.description}</p>
                        </div>
                    }).collect_view()}
                </Reveal>
            </div>
            <Reveal key="company-stats" class="space-y-3">
                {company.stats.into_iter().map(|s| view! {
                    <div class="bg-white rounded-xl p-4 shadow flex justify-between">
                        <span class="text-sm text-gray-500">{s.label}</span>
                        <span class="font-semibold">{s.value}</span>
                    </div>
                }).collect_view()}
            </Reveal>
        </div>
    }
}

#[component]
fn TeamTab(company: CompanyProfile) -> impl IntoView {
    view! {
        <div class="grid sm:grid-cols-2 lg:grid-cols-4 gap-6">
            {company.team.into_iter().map(|member| view! {
                <Reveal key=format!("team-{}", member.name)>
                    <div class="bg-white rounded-xl shadow overflow-hidden">
                        <img src=member.image_url alt=member.name class="w-full h-48 object-cover" />
                        <div class="p-4">
                            <h4 class="font-semibold">{member.name}</h4>
                            <p class="text-sm text-gray-500">{member.title}</p>
                            <p class="text-xs text-gray-600 mt-2">{member.bio}</p>
                        </div>
                    </div>
                </Reveal>
            }).collect_view()}
        </div>
    }
}

#[component]
fn MetricsTab(company: CompanyProfile) -> impl IntoView {
    view! {
        <div class="grid sm:grid-cols-2 lg:grid-cols-4 gap-6">
            {company.metrics.into_iter().map(|m| view! {
                <Reveal key=format!("metric-{}", m.label)>
                    <div class="bg-white rounded-xl p-6 shadow">
                        <div class="text-3xl font-bold">{m.value}</div>
                        <div class="font-semibold mt-1">{m.label}</div>
                        <p class="text-xs text-gray-500 mt-2">{m.description}</p>
                    </div>
                </Reveal>
            }).collect_view()}
        </div>
    }
}
