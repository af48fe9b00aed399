//! Sign In Page

use leptos::*;
use nefra_connect::forms::{SignInField, SignInForm};
use nefra_connect::routing::Route;

use crate::components::{Field, Link, PasswordField, SocialButtons};
use crate::state::global::GlobalState;

#[component]
pub fn SignIn() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let form = create_rw_signal(SignInForm::new());
    let (remember, set_remember) = create_signal(false);

    let set = move |field: SignInField| move |value: String| form.update(|f| f.set(field, value));

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        if form.try_update(|f| f.submit()).is_some_and(|r| r.is_ok()) {
            state.show_success("Signed in");
        }
    };

    view! {
        <div class="auth-page min-h-[80vh] flex items-center justify-center px-4 py-12">
            <div class="auth-card bg-white rounded-2xl shadow-lg p-8 w-full max-w-md">
                <h1 class="text-3xl font-bold">"Welcome Back"</h1>
                <p class="text-gray-500 mt-1 mb-6">"Sign in to continue building your network"</p>

                <form on:submit=on_submit>
                    <Field
                        label="Email Address"
                        input_type="email"
                        placeholder="your.email@example.com"
                        value=move || form.with(|f| f.email.clone())
                        on_input=set(SignInField::Email)
                    />
                    <PasswordField
                        label="Password"
                        placeholder="Enter your password"
                        value=move || form.with(|f| f.password.clone())
                        on_input=set(SignInField::Password)
                    />

                    <div class="flex items-center justify-between text-sm mb-4">
                        <label class="remember-me flex items-center space-x-2">
                            <input
                                type="checkbox"
                                prop:checked=move || remember.get()
                                on:change=move |ev| set_remember.set(event_target_checked(&ev))
                            />
                            <span>"Remember me"</span>
                        </label>
                        <a href="#" class="text-gray-500" on:click=|ev: ev::MouseEvent| ev.prevent_default()>
                            "Forgot password?"
                        </a>
                    </div>

                    {move || form.with(|f| f.error().map(|e| e.to_string())).map(|msg| view! {
                        <div class="form-error text-red-700 font-bold mb-3">{msg}</div>
                    })}

                    <button type="submit" class="btn-auth-submit w-full bg-gray-900 text-white rounded-lg py-3 font-medium">
                        "Sign In"
                    </button>
                </form>

                <SocialButtons />

                <p class="auth-footer text-sm text-center text-gray-500 mt-6">
                    "Don't have an account? "
                    <Link route=Route::SignUp class="font-medium text-gray-900">"Sign up for free"</Link>
                </p>
            </div>
        </div>
    }
}
