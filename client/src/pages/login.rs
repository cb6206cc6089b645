//! Email + password sign-in page.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;

use crate::net::types::LoginRequest;
use crate::state::auth::AuthState;
use crate::util::form::is_plausible_email;

/// Check the form and build the request payload.
///
/// # Errors
///
/// Returns the message to show under the form.
pub fn validate_login_input(email: &str, password: &str) -> Result<LoginRequest, String> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Enter your email and password.".to_owned());
    }
    if !is_plausible_email(email) {
        return Err("That email address doesn't look right.".to_owned());
    }
    Ok(LoginRequest { email: email.to_owned(), password: password.to_owned() })
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let request = match validate_login_input(&email.get(), &password.get()) {
            Ok(request) => request,
            Err(e) => {
                info.set(e);
                return;
            }
        };
        busy.set(true);
        info.set("Signing in...".to_owned());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::login(&request).await {
                Ok(user) => {
                    auth.update(|a| a.resolve(Some(user)));
                    crate::util::nav::hard_redirect("/");
                }
                Err(e) => {
                    info.set(e);
                    password.set(String::new());
                    busy.set(false);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (request, auth);
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Sitewatch"</h1>
                <p class="login-card__subtitle">"Sign in to your account"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="email"
                        autocomplete="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        autocomplete="current-password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Sign in"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
                <div class="login-divider"></div>
                <p class="login-card__footer">
                    "No account yet? "
                    <a href="/register">"Create one"</a>
                    " or "
                    <a href="/waitlist">"join the waitlist"</a>
                    "."
                </p>
            </div>
        </div>
    }
}
