//! Profile Page
//!
//! Current user's profile with tabs and a cosmetic "request intro" dialog.

use gloo_timers::callback::Timeout;
use leptos::*;
use nefra_connect::pages::profile::{current_user, IntroRequest, ProfileTab, UserProfile};

use crate::components::Reveal;

/// How long the "sent" confirmation stays before the dialog closes
const INTRO_CONFIRM_MS: u32 = 1500;

#[component]
pub fn Profile() -> impl IntoView {
    let user = store_value(current_user());
    let tab = create_rw_signal(ProfileTab::default());
    let (following, set_following) = create_signal(false);
    let (intro_open, set_intro_open) = create_signal(false);

    let header = user.with_value(|u| view! {
        <div class="profile-cover h-56 bg-cover bg-center" style=format!("background-image: url('{}')", u.cover_url) />
        <div class="container mx-auto px-4 -mt-16 flex flex-wrap items-end justify-between gap-4">
            <div class="flex items-end space-x-4">
                <img src=u.avatar_url alt=u.name class="w-32 h-32 rounded-full border-4 border-white shadow" />
                <div>
                    <h1 class="text-3xl font-bold flex items-center space-x-2">
                        <span>{u.name}</span>
                        {u.verified.then(|| view! { <span class="text-emerald-600 text-base">"✓"</span> })}
                    </h1>
                    <p class="text-gray-600">{format!("{} at {}", u.title, u.company)}</p>
                    <div class="text-sm text-gray-500 space-x-4 mt-1">
                        <span>{format!("{} followers", u.followers)}</span>
                        <span>{format!("{} following", u.following)}</span>
                        <span>{format!("{} connections", u.connections)}</span>
                    </div>
                </div>
            </div>
            <div class="flex space-x-2">
                <button class="btn btn-outline" on:click=move |_| set_intro_open.set(true)>"Request Intro"</button>
                <button class="btn btn-dark" on:click=move |_| set_following.update(|f| *f = !*f)>
                    {move || if following.get() { "Following" } else { "+ Follow" }}
                </button>
            </div>
        </div>
    });

    view! {
        <div class="profile-page pb-16">
            {header}

            <div class="container mx-auto px-4 mt-8 flex space-x-6 border-b border-gray-200">
                {ProfileTab::ALL.into_iter().map(|t| view! {
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
                    let u = user.get_value();
                    match tab.get() {
                        ProfileTab::About => view! { <AboutTab user=u /> }.into_view(),
                        ProfileTab::Portfolio => view! { <PortfolioTab user=u /> }.into_view(),
                        ProfileTab::Activity => view! { <ActivityTab user=u /> }.into_view(),
                    }
                }}
            </div>

            {move || intro_open.get().then(|| view! {
                <IntroDialog
                    target=user.with_value(|u| u.name.to_string())
                    on_close=move || set_intro_open.set(false)
                />
            })}
        </div>
    }
}

#[component]
fn AboutTab(user: UserProfile) -> impl IntoView {
    view! {
        <div class="grid md:grid-cols-3 gap-8">
            <Reveal key="profile-bio" class="md:col-span-2 space-y-6">
                <p class="text-gray-700">{user.bio}</p>
                <div class="flex flex-wrap gap-2">
                    {user.expertise.into_iter().map(|e| view! {
                        <span class="px-3 py-1 rounded-full bg-gray-100 text-xs font-medium">{e}</span>
                    }).collect_view()}
                </div>
            </Reveal>
            <Reveal key="profile-facts" class="bg-white rounded-xl p-6 shadow space-y-2 text-sm">
                <div>{format!("📍 {}", user.location)}</div>
                <div>{format!("🔗 {}", user.website)}</div>
                <div>{format!("📅 Joined {}", user.joined)}</div>
                <div>{format!("💼 {}", user.experience)}</div>
                <h4 class="font-semibold pt-4">"Mutual connections"</h4>
                <div class="flex -space-x-2">
                    {user.mutuals.into_iter().map(|m| view! {
                        <img src=m.avatar_url alt=m.name title=m.name class="w-8 h-8 rounded-full border-2 border-white" />
                    }).collect_view()}
                </div>
            </Reveal>
        </div>
    }
}

#[component]
fn PortfolioTab(user: UserProfile) -> impl IntoView {
    view! {
        <div class="grid sm:grid-cols-2 gap-6">
            {user.portfolio.into_iter().map(|item| view! {
                <Reveal key=format!("portfolio-{}", item.title)>
                    <div class="bg-white rounded-xl p-6 shadow">
                        <div class="flex items-center justify-between">
                            <h4 class="font-semibold">{item.title}</h4>
                            <span class="text-xs px-2 py-1 rounded-full bg-gray-100">{item.status}</span>
                        </div>
                        <p class="text-xs text-gray-500 mt-1">{item.years}</p>
                        <p class="text-sm text-gray-600 mt-3">{item.description}</p>
                    </div>
                </Reveal>
            }).collect_view()}
        </div>
    }
}

#[component]
fn ActivityTab(user: UserProfile) -> impl IntoView {
    view! {
        <ul class="space-y-3">
            {user.activity.into_iter().map(|a| view! {
                <li class="bg-white rounded-xl p-4 shadow flex justify-between text-sm">
                    <span>{a.text}</span>
                    <span class="text-gray-400">{a.time}</span>
                </li>
            }).collect_view()}
        </ul>
    }
}

/// Modal collecting an intro note. Nothing is sent anywhere.
#[component]
fn IntroDialog<F>(target: String, on_close: F) -> impl IntoView
where
    F: Fn() + Clone + 'static,
{
    let request = create_rw_signal(IntroRequest {
        target,
        ..IntroRequest::default()
    });
    let error = create_rw_signal(None::<String>);

    let close = on_close.clone();
    let send = move |_| {
        let mut result = Ok(());
        request.update(|r| result = r.send());
        match result {
            Ok(()) => {
                error.set(None);
                let close = close.clone();
                Timeout::new(INTRO_CONFIRM_MS, move || {
                    request.update(IntroRequest::clear);
                    close();
                })
                .forget();
            }
            Err(e) => error.set(Some(e.to_string())),
        }
    };

    view! {
        <div class="fixed inset-0 z-50 bg-black/40 flex items-center justify-center">
            <div class="bg-white rounded-xl p-6 w-full max-w-md shadow-xl">
                {move || {
                    if request.with(IntroRequest::is_sent) {
                        view! { <p class="text-center text-emerald-600 font-medium py-8">"Intro request sent ✓"</p> }.into_view()
                    } else {
                        view! {
                            <h3 class="text-lg font-semibold mb-4">"Request an introduction"</h3>
                            <input
                                type="text"
                                class="w-full rounded-lg border border-gray-300 px-3 py-2 mb-3"
                                placeholder="Name"
                                prop:value=move || request.with(|r| r.target.clone())
                                on:input=move |ev| request.update(|r| r.target = event_target_value(&ev))
                            />
                            <textarea
                                class="w-full rounded-lg border border-gray-300 px-3 py-2 h-28"
                                placeholder="Add a short note"
                                prop:value=move || request.with(|r| r.message.clone())
                                on:input=move |ev| request.update(|r| r.message = event_target_value(&ev))
                            />
                            {move || error.get().map(|e| view! { <p class="text-sm text-red-600 mt-2">{e}</p> })}
                        }.into_view()
                    }
                }}
                <div class="flex justify-end space-x-2 mt-4">
                    <button class="btn btn-outline" on:click={
                        let on_close = on_close.clone();
                        move |_| on_close()
                    }>"Cancel"</button>
                    <button class="btn btn-primary" on:click=send>"Send"</button>
                </div>
            </div>
        </div>
    }
}
