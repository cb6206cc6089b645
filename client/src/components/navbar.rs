//! Top navigation bar with identity and logout.
//!
//! DESIGN
//! ======
//! Link sets depend only on whether a user is signed in, so they are computed
//! by a plain function and tested without a reactive runtime.

#[cfg(test)]
#[path = "navbar_test.rs"]
mod navbar_test;

use leptos::prelude::*;

use crate::state::auth::AuthState;

/// One navigation link.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub href: &'static str,
    pub label: &'static str,
}

const SIGNED_IN_LINKS: &[NavLink] = &[
    NavLink { href: "/", label: "Tasks" },
    NavLink { href: "/changelog", label: "Changelog" },
];

const SIGNED_OUT_LINKS: &[NavLink] = &[
    NavLink { href: "/changelog", label: "Changelog" },
    NavLink { href: "/waitlist", label: "Join waitlist" },
    NavLink { href: "/login", label: "Sign in" },
];

/// Links shown for the current auth state.
#[must_use]
pub fn nav_links(signed_in: bool) -> &'static [NavLink] {
    if signed_in { SIGNED_IN_LINKS } else { SIGNED_OUT_LINKS }
}

/// Up to two uppercase initials for the avatar bubble.
#[must_use]
pub fn user_initials(name: &str) -> String {
    let initials: String = name
        .split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(2)
        .flat_map(char::to_uppercase)
        .collect();
    if initials.is_empty() { "?".to_owned() } else { initials }
}

#[component]
pub fn Navbar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let menu_open = RwSignal::new(false);

    let on_logout = move |_| {
        menu_open.set(false);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            crate::net::api::logout().await;
            auth.update(|a| a.resolve(None));
            crate::util::nav::hard_redirect("/login");
        });
    };

    view! {
        <nav class="navbar">
            <a class="navbar__brand" href="/">"Sitewatch"</a>
            <button
                class="navbar__toggle"
                aria-label="Toggle navigation"
                on:click=move |_| menu_open.update(|open| *open = !*open)
            >
                "☰"
            </button>
            <div class="navbar__links" class:navbar__links--open=move || menu_open.get()>
                {move || {
                    nav_links(auth.with(AuthState::is_signed_in))
                        .iter()
                        .map(|link| {
                            view! {
                                <a class="navbar__link" href=link.href on:click=move |_| menu_open.set(false)>
                                    {link.label}
                                </a>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </div>
            <Show when=move || auth.with(AuthState::is_signed_in)>
                <div class="navbar__user">
                    <span class="navbar__avatar" title=move || auth.get().user.map(|u| u.email).unwrap_or_default()>
                        {move || auth.get().user.map(|u| user_initials(&u.name)).unwrap_or_default()}
                    </span>
                    <button class="btn navbar__logout" on:click=on_logout>
                        "Log out"
                    </button>
                </div>
            </Show>
        </nav>
    }
}
