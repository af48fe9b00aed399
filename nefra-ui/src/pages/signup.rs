//! Sign Up Page

use leptos::*;
use nefra_connect::forms::{SignUpField, SignUpForm};
use nefra_connect::routing::Route;

use crate::components::{Field, Link, PasswordField, SocialButtons};
use crate::state::global::GlobalState;

#[component]
pub fn SignUp() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let form = create_rw_signal(SignUpForm::new());

    let set = move |field: SignUpField| move |value: String| form.update(|f| f.set(field, value));

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let mut router = state.router.borrow_mut();
        form.update(|f| {
            // Failure is kept on the form and rendered inline
            let _ = f.submit(&mut *router);
        });
    };

    view! {
        <div class="auth-page min-h-[80vh] flex items-center justify-center px-4 py-12">
            <div class="auth-card bg-white rounded-2xl shadow-lg p-8 w-full max-w-md">
                <h1 class="text-3xl font-bold">"Create " <span class="text-gray-500">"Account"</span></h1>
                <p class="text-gray-500 mt-1 mb-6">"Join NEFRA and connect with investors, mentors and collaborators"</p>

                <form on:submit=on_submit>
                    <Field
                        label="Full name"
                        placeholder="Your full name"
                        value=move || form.with(|f| f.name.clone())
                        on_input=set(SignUpField::Name)
                    />
                    <Field
                        label="Email Address"
                        input_type="email"
                        placeholder="your.email@example.com"
                        value=move || form.with(|f| f.email.clone())
                        on_input=set(SignUpField::Email)
                    />
                    <PasswordField
                        label="Password"
                        placeholder="Create a password"
                        value=move || form.with(|f| f.password.clone())
                        on_input=set(SignUpField::Password)
                    />
                    <PasswordField
                        label="Confirm Password"
                        placeholder="Confirm your password"
                        value=move || form.with(|f| f.confirm.clone())
                        on_input=set(SignUpField::Confirm)
                    />

                    {move || form.with(|f| f.error().map(|e| e.to_string())).map(|msg| view! {
                        <div class="form-error text-red-700 font-bold mb-3">{msg}</div>
                    })}

                    <button type="submit" class="btn-auth-submit w-full bg-gray-900 text-white rounded-lg py-3 font-medium">
                        "Create account"
                    </button>
                </form>

                <SocialButtons />

                <p class="auth-footer text-sm text-center text-gray-500 mt-6">
                    "Already have an account? "
                    <Link route=Route::SignIn class="font-medium text-gray-900">"Sign in"</Link>
                </p>
            </div>
        </div>
    }
}
