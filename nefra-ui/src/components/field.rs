//! Form Fields
//!
//! Labelled inputs used by the auth forms.

use leptos::*;

/// Labelled text input bound to a getter/setter pair
#[component]
pub fn Field<G, S>(
    label: &'static str,
    #[prop(default = "text")]
    input_type: &'static str,
    placeholder: &'static str,
    value: G,
    on_input: S,
) -> impl IntoView
where
    G: Fn() -> String + 'static,
    S: Fn(String) + 'static,
{
    view! {
        <div class="form-group mb-4">
            <label class="block text-sm font-medium text-gray-700 mb-1">{label}</label>
            <input
                type=input_type
                placeholder=placeholder
                class="w-full rounded-lg border border-gray-300 px-4 py-3 focus:border-gray-900 focus:outline-none"
                prop:value=value
                on:input=move |ev| on_input(event_target_value(&ev))
            />
        </div>
    }
}

/// Password input with a Show/Hide toggle
#[component]
pub fn PasswordField<G, S>(
    label: &'static str,
    placeholder: &'static str,
    value: G,
    on_input: S,
) -> impl IntoView
where
    G: Fn() -> String + 'static,
    S: Fn(String) + 'static,
{
    let (visible, set_visible) = create_signal(false);

    view! {
        <div class="form-group mb-4">
            <label class="block text-sm font-medium text-gray-700 mb-1">{label}</label>
            <div class="relative">
                <input
                    type=move || if visible.get() { "text" } else { "password" }
                    placeholder=placeholder
                    class="w-full rounded-lg border border-gray-300 px-4 py-3 pr-16 focus:border-gray-900 focus:outline-none"
                    prop:value=value
                    on:input=move |ev| on_input(event_target_value(&ev))
                />
                <button
                    type="button"
                    class="toggle-password absolute right-3 top-3 text-sm text-gray-500"
                    aria-pressed=move || visible.get().to_string()
                    aria-label=move || if visible.get() { "Hide password" } else { "Show password" }
                    on:click=move |_| set_visible.update(|v| *v = !*v)
                >
                    {move || if visible.get() { "Hide" } else { "Show" }}
                </button>
            </div>
        </div>
    }
}

/// Social sign-in buttons. Not wired to any provider.
#[component]
pub fn SocialButtons() -> impl IntoView {
    view! {
        <div class="social-login grid grid-cols-2 gap-3 mt-6">
            <button type="button" class="social-btn border border-gray-300 rounded-lg py-2 text-sm">"Continue with Google"</button>
            <button type="button" class="social-btn border border-gray-300 rounded-lg py-2 text-sm">"Sign in with LinkedIn"</button>
        </div>
    }
}
