//! Login and sign-up entry routes.
//!
//! Both forms are hosted by the auth backend; these pages only link out to
//! them and bounce already signed-in users back to the catalog.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::user_provider::use_user;
use crate::consts::{AUTH_SIGN_IN_URL, AUTH_SIGN_UP_URL, HOME_PATH, JOIN_PATH, LOGIN_PATH};
use crate::util::auth::install_signed_in_redirect;

/// Login page: links to the hosted sign-in form.
#[component]
pub fn LoginPage() -> impl IntoView {
    install_signed_in_redirect(use_user(), use_navigate());

    view! {
        <div class="auth-page">
            <h1>"Log in"</h1>
            <p>"Sign in to build your watch list."</p>
            <a href=AUTH_SIGN_IN_URL class="btn btn--primary auth-page__action" rel="external">
                "Continue to sign in"
            </a>
            <p class="auth-page__switch">
                "No account yet? "
                <a href=JOIN_PATH>"Sign up"</a>
            </p>
            <a href=HOME_PATH class="auth-page__back">"Back to catalog"</a>
        </div>
    }
}

/// Sign-up page: links to the hosted registration form.
#[component]
pub fn JoinPage() -> impl IntoView {
    install_signed_in_redirect(use_user(), use_navigate());

    view! {
        <div class="auth-page">
            <h1>"Sign up"</h1>
            <p>"Create an account to keep track of the anime you watch."</p>
            <a href=AUTH_SIGN_UP_URL class="btn btn--primary auth-page__action" rel="external">
                "Continue to sign up"
            </a>
            <p class="auth-page__switch">
                "Already have an account? "
                <a href=LOGIN_PATH>"Log in"</a>
            </p>
            <a href=HOME_PATH class="auth-page__back">"Back to catalog"</a>
        </div>
    }
}
