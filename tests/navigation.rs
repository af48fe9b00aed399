//! Router, pages and forms together.

use nefra_connect::forms::{FormError, SignInField, SignInForm, SignUpField, SignUpForm};
use nefra_connect::pages::{nav_items, page_for, Page};
use nefra_connect::routing::{History, Route, Router};

#[test]
fn test_sign_up_journey() {
    let mut router = Router::in_memory("/");
    let mut changes = router.subscribe();

    assert!(router.navigate("/signup"));
    assert!(changes.has_changed().unwrap());
    changes.borrow_and_update();

    // Same path again: no push, no notification
    assert!(!router.navigate("/signup"));
    assert!(!changes.has_changed().unwrap());
    assert_eq!(router.history().len(), 2);

    let mut form = SignUpForm::new();
    form.set(SignUpField::Name, "Karthik S.");
    form.set(SignUpField::Email, "karthik@robodynamics.in");
    form.set(SignUpField::Password, "abc123");
    form.set(SignUpField::Confirm, "abc999");
    assert_eq!(form.submit(&mut router), Err(FormError::PasswordMismatch));
    assert_eq!(page_for(&router.current_path()), Page::SignUp);

    form.set(SignUpField::Confirm, "abc123");
    form.submit(&mut router).unwrap();
    assert_eq!(router.current_route(), Route::SignIn);

    assert!(router.back());
    assert_eq!(router.current_path(), "/signup");
    assert!(router.forward());
    assert_eq!(router.current_path(), "/signin");

    // Sign-in is a placeholder: it accepts and leaves the location alone
    let mut sign_in = SignInForm::new();
    sign_in.set(SignInField::Email, "karthik@robodynamics.in");
    sign_in.set(SignInField::Password, "abc123");
    sign_in.submit().unwrap();
    assert_eq!(router.current_route(), Route::SignIn);
    assert_eq!(router.history().len(), 3);
}

#[test]
fn test_unknown_location_renders_home_without_active_link() {
    let mut router = Router::in_memory("/");
    router.navigate("/investors/42");

    assert_eq!(router.current_path(), "/investors/42");
    assert_eq!(page_for(&router.current_path()), Page::Home);
    assert!(nav_items(&router.current_path()).iter().all(|i| !i.active));
}
