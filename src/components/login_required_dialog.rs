//! Modal shown when a signed-out user tries a protected action.

use leptos::prelude::*;

use crate::consts::LOGIN_PATH;
use crate::state::gate::PromptAction;

/// Login-required dialog. Every way out reports a [`PromptAction`]; the
/// "Login" link also navigates to the login route.
/// Sign-up is reached from the login page; "Close" never navigates.
#[component]
pub fn LoginRequiredDialog(on_resolve: Callback<PromptAction>) -> impl IntoView {
    let dismiss = move || on_resolve.run(PromptAction::Dismiss);
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            dismiss();
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| dismiss()>
            <div
                class="dialog dialog--login-required"
                role="dialog"
                aria-modal="true"
                on:click=move |ev| ev.stop_propagation()
                on:keydown=on_keydown
                tabindex="0"
            >
                <h2>"Login Required"</h2>
                <p class="dialog__description">
                    "You need to be logged in to add anime to your watch list. Please log in or sign up."
                </p>
                <div class="dialog__actions">
                    <button class="btn btn--ghost" on:click=move |_| dismiss()>
                        "Close"
                    </button>
                    <a
                        class="btn btn--primary"
                        href=LOGIN_PATH
                        on:click=move |_| on_resolve.run(PromptAction::ProceedToLogin)
                    >
                        "Login"
                    </a>
                </div>
            </div>
        </div>
    }
}
