//! Settings Page
//!
//! Account preferences persisted to `localStorage`.

use chrono::{DateTime, Utc};
use gloo_timers::callback::Timeout;
use leptos::*;
use nefra_connect::settings::{
    Integration, NotificationKind, SettingsPatch, SettingsRepository, Theme, UserSettings,
};

use crate::api;
use crate::state::global::GlobalState;
use crate::state::LocalStore;

/// Visible "Saving…" window before the write lands
const SAVE_DELAY_MS: u32 = 500;

const LANGUAGES: [&str; 2] = ["English", "Spanish"];
const TIMEZONES: [&str; 2] = ["UTC+05:30", "UTC+00:00"];

/// Settings page component
#[component]
pub fn Settings() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let repo = store_value(SettingsRepository::new(LocalStore));

    // Loaded once on mount; bad or missing data yields defaults
    let values = create_rw_signal(repo.with_value(|r| r.load()));
    let (saving, set_saving) = create_signal(false);
    let (saved_at, set_saved_at) = create_signal(None::<DateTime<Utc>>);

    // Dropping a gloo Timeout clears it, so leaving the page cancels the write
    let pending = store_value(None::<Timeout>);
    on_cleanup(move || {
        pending.try_update_value(|t| {
            t.take();
        });
    });

    let state_for_save = state.clone();
    let save = move |_| {
        set_saving.set(true);
        let state = state_for_save.clone();
        let timeout = Timeout::new(SAVE_DELAY_MS, move || {
            let result = repo
                .try_with_value(|r| values.try_with_untracked(|v| r.save(v)))
                .flatten();
            let Some(result) = result else {
                return;
            };
            match result {
                Ok(at) => {
                    set_saved_at.set(Some(at));
                    state.show_success("Settings saved");
                }
                Err(e) => state.show_error(&format!("Could not save settings: {}", e)),
            }
            set_saving.set(false);
        });
        // A second click restarts the delay
        pending.set_value(Some(timeout));
    };

    let state_for_reset = state.clone();
    let reset = move |_| match repo.with_value(|r| r.reset()) {
        Ok(defaults) => {
            values.set(defaults);
            set_saved_at.set(None);
        }
        Err(e) => state_for_reset.show_error(&format!("Could not reset settings: {}", e)),
    };

    let patch = move |p: SettingsPatch| values.update(|v| v.apply(p));

    view! {
        <div class="settings-page container mx-auto px-4 py-12 max-w-3xl space-y-8">
            <div class="flex flex-wrap items-start justify-between gap-4">
                <div>
                    <h1 class="text-3xl font-bold">"Settings"</h1>
                    <p class="text-gray-500 mt-1">"Everything you need to manage your account in one place."</p>
                </div>
                <div class="flex flex-col items-end space-y-2">
                    <div class="quick-badges flex space-x-2 text-xs">
                        {[Integration::Google, Integration::LinkedIn].into_iter().map(|i| view! {
                            <span class="badge px-2 py-1 rounded-full bg-gray-100">
                                {move || values.with(|v| v.integration_badge(i))}
                            </span>
                        }).collect_view()}
                    </div>
                    <div class="flex space-x-2">
                        <button class="btn btn-outline" on:click=reset>"Reset"</button>
                        <button class="btn btn-primary" disabled=move || saving.get() on:click=save>
                            {move || if saving.get() { "Saving…" } else { "Save changes" }}
                        </button>
                    </div>
                    <span class="text-xs text-gray-400">
                        {move || saved_at.get()
                            .map(|at| format!("Saved at {}", at.format("%H:%M:%S UTC")))
                            .unwrap_or_default()}
                    </span>
                </div>
            </div>

            <ProfileSection values=values patch=patch />
            <AccountSection values=values patch=patch />
            <SecuritySection values=values patch=patch />
            <NotificationSection values=values />
            <FeedSection />
        </div>
    }
}

#[component]
fn Section(title: &'static str, children: Children) -> impl IntoView {
    view! {
        <section class="section-panel bg-white rounded-xl shadow p-6">
            <h3 class="text-xl font-semibold mb-4">{title}</h3>
            <div class="space-y-4">{children()}</div>
        </section>
    }
}

/// Clickable on/off switch
#[component]
fn Switch<G, F>(label: &'static str, on: G, toggle: F) -> impl IntoView
where
    G: Fn() -> bool + Copy + 'static,
    F: Fn() + 'static,
{
    view! {
        <div class="flex items-center justify-between">
            <span class="text-sm">{label}</span>
            <button
                role="switch"
                aria-checked=move || on().to_string()
                class=move || if on() { "switch on w-10 h-6 rounded-full bg-gray-900" } else { "switch w-10 h-6 rounded-full bg-gray-300" }
                on:click=move |_| toggle()
            >
                <div class=move || if on() { "knob on" } else { "knob" } />
            </button>
        </div>
    }
}

#[component]
fn ProfileSection<P>(values: RwSignal<UserSettings>, patch: P) -> impl IntoView
where
    P: Fn(SettingsPatch) + Copy + 'static,
{
    view! {
        <Section title="Profile">
            <div>
                <label class="block text-sm text-gray-500 mb-1">"Full name"</label>
                <input
                    type="text"
                    class="w-full rounded-lg border border-gray-300 px-4 py-2"
                    prop:value=move || values.with(|v| v.full_name.clone())
                    on:input=move |ev| patch(SettingsPatch {
                        full_name: Some(event_target_value(&ev)),
                        ..SettingsPatch::default()
                    })
                />
            </div>
            <div>
                <label class="block text-sm text-gray-500 mb-1">"Email"</label>
                <input
                    type="email"
                    class="w-full rounded-lg border border-gray-300 px-4 py-2"
                    prop:value=move || values.with(|v| v.email.clone())
                    on:input=move |ev| patch(SettingsPatch {
                        email: Some(event_target_value(&ev)),
                        ..SettingsPatch::default()
                    })
                />
            </div>
            <Switch
                label="Public profile"
                on=move || values.with(|v| v.profile_public)
                toggle=move || {
                    let current = values.with_untracked(|v| v.profile_public);
                    patch(SettingsPatch {
                        profile_public: Some(!current),
                        ..SettingsPatch::default()
                    });
                }
            />
        </Section>
    }
}

#[component]
fn AccountSection<P>(values: RwSignal<UserSettings>, patch: P) -> impl IntoView
where
    P: Fn(SettingsPatch) + Copy + 'static,
{
    view! {
        <Section title="Account">
            <div>
                <label class="block text-sm text-gray-500 mb-1">"Language"</label>
                <select
                    class="w-full rounded-lg border border-gray-300 px-4 py-2"
                    prop:value=move || values.with(|v| v.language.clone())
                    on:change=move |ev| patch(SettingsPatch {
                        language: Some(event_target_value(&ev)),
                        ..SettingsPatch::default()
                    })
                >
                    {LANGUAGES.into_iter().map(|l| view! { <option value=l>{l}</option> }).collect_view()}
                </select>
            </div>
            <div>
                <label class="block text-sm text-gray-500 mb-1">"Timezone"</label>
                <select
                    class="w-full rounded-lg border border-gray-300 px-4 py-2"
                    prop:value=move || values.with(|v| v.timezone.clone())
                    on:change=move |ev| patch(SettingsPatch {
                        timezone: Some(event_target_value(&ev)),
                        ..SettingsPatch::default()
                    })
                >
                    {TIMEZONES.into_iter().map(|t| view! { <option value=t>{t}</option> }).collect_view()}
                </select>
            </div>
            <div>
                <label class="block text-sm text-gray-500 mb-1">"Theme"</label>
                <div class="flex space-x-2">
                    {[Theme::Light, Theme::Dark].into_iter().map(|theme| view! {
                        <button
                            class=move || if values.with(|v| v.theme == theme) { "btn btn-dark capitalize" } else { "btn btn-outline capitalize" }
                            on:click=move |_| patch(SettingsPatch { theme: Some(theme), ..SettingsPatch::default() })
                        >
                            {theme.to_string()}
                        </button>
                    }).collect_view()}
                </div>
            </div>
            <div>
                <h4 class="text-sm font-semibold mb-2">"Connected services"</h4>
                <div class="flex flex-wrap gap-2">
                    {[Integration::Google, Integration::LinkedIn].into_iter().map(|i| view! {
                        {move || if values.with(|v| v.is_connected(i)) {
                            view! {
                                <div class="connected-pill flex items-center space-x-2 px-3 py-1 rounded-full bg-gray-100 text-sm">
                                    <span>{i.label()}</span>
                                    <button class="btn-icon text-xs text-red-600" on:click=move |_| values.update(|v| v.disconnect(i))>
                                        "Disconnect"
                                    </button>
                                </div>
                            }.into_view()
                        } else {
                            view! {
                                <button class="btn btn-outline" on:click=move |_| values.update(|v| v.connect(i))>
                                    {format!("Connect {}", i.label())}
                                </button>
                            }.into_view()
                        }}
                    }).collect_view()}
                </div>
            </div>
        </Section>
    }
}

#[component]
fn SecuritySection<P>(values: RwSignal<UserSettings>, patch: P) -> impl IntoView
where
    P: Fn(SettingsPatch) + Copy + 'static,
{
    view! {
        <Section title="Security">
            <Switch
                label="Two-factor authentication"
                on=move || values.with(|v| v.two_factor)
                toggle=move || {
                    let current = values.with_untracked(|v| v.two_factor);
                    patch(SettingsPatch {
                        two_factor: Some(!current),
                        ..SettingsPatch::default()
                    });
                }
            />
        </Section>
    }
}

#[component]
fn NotificationSection(values: RwSignal<UserSettings>) -> impl IntoView {
    let toggle = move |kind: NotificationKind| {
        move || {
            values.update(|v| {
                v.toggle_notification(kind);
            })
        }
    };

    view! {
        <Section title="Notifications">
            <Switch
                label="Product updates"
                on=move || values.with(|v| v.notifications.product)
                toggle=toggle(NotificationKind::Product)
            />
            <Switch
                label="Security alerts"
                on=move || values.with(|v| v.notifications.security)
                toggle=toggle(NotificationKind::Security)
            />
            <Switch
                label="Marketing"
                on=move || values.with(|v| v.notifications.marketing)
                toggle=toggle(NotificationKind::Marketing)
            />
        </Section>
    }
}

/// Origin the featured lists are read from
#[component]
fn FeedSection() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let (origin, set_origin) = create_signal(api::get_feed_origin());

    let save_origin = move |_| {
        api::set_feed_origin(&origin.get());
        state.show_success("Feed origin saved; reload to refetch");
    };

    view! {
        <Section title="Featured Feeds">
            <label class="block text-sm text-gray-500 mb-1">"Feed origin"</label>
            <div class="flex space-x-2">
                <input
                    type="text"
                    class="flex-1 rounded-lg border border-gray-300 px-4 py-2"
                    prop:value=move || origin.get()
                    on:input=move |ev| set_origin.set(event_target_value(&ev))
                />
                <button class="btn btn-primary" on:click=save_origin>"Save"</button>
            </div>
        </Section>
    }
}
