//! Public waitlist signup page.

#[cfg(test)]
#[path = "waitlist_test.rs"]
mod waitlist_test;

use leptos::prelude::*;

use crate::net::types::WaitlistRequest;
use crate::util::form::{is_plausible_email, non_blank};

/// Check the signup form; a blank company is sent as absent.
///
/// # Errors
///
/// Returns the message to show under the form.
pub fn validate_waitlist(email: &str, company: &str) -> Result<WaitlistRequest, String> {
    let email = email.trim();
    if email.is_empty() {
        return Err("Enter your email to join the waitlist.".to_owned());
    }
    if !is_plausible_email(email) {
        return Err("That email address doesn't look right.".to_owned());
    }
    Ok(WaitlistRequest { email: email.to_owned(), company: non_blank(company) })
}

#[component]
pub fn WaitlistPage() -> impl IntoView {
    let email = RwSignal::new(String::new());
    let company = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let joined = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let request = match validate_waitlist(&email.get(), &company.get()) {
            Ok(request) => request,
            Err(e) => {
                info.set(e);
                return;
            }
        };
        busy.set(true);
        info.set(String::new());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::join_waitlist(&request).await {
                Ok(()) => joined.set(true),
                Err(e) => info.set(e),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = request;
    };

    view! {
        <div class="login-page waitlist-page">
            <div class="login-card">
                <h1>"Get early access"</h1>
                <p class="login-card__subtitle">
                    "Sitewatch checks the pages you care about and tells you when something actually changes."
                </p>
                <Show
                    when=move || !joined.get()
                    fallback=move || {
                        view! {
                            <p class="waitlist-page__success">
                                "You're on the list. We'll email "
                                <strong>{move || email.get().trim().to_owned()}</strong>
                                " when a spot opens."
                            </p>
                        }
                    }
                >
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
                            type="text"
                            autocomplete="organization"
                            placeholder="Company (optional)"
                            prop:value=move || company.get()
                            on:input=move |ev| company.set(event_target_value(&ev))
                        />
                        <button class="login-button" type="submit" disabled=move || busy.get()>
                            "Join waitlist"
                        </button>
                    </form>
                </Show>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
            </div>
        </div>
    }
}
