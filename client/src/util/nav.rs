//! Full-page navigation helpers.
//!
//! Sign-in and sign-out reload the document so server-rendered chrome picks
//! up the new session cookie.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

/// Navigate the window to `href`, logging when the browser refuses.
#[cfg(feature = "hydrate")]
pub fn hard_redirect(href: &str) {
    let Some(window) = web_sys::window() else {
        log::warn!("{}", redirect_warning(href, "no window"));
        return;
    };
    if let Err(e) = window.location().set_href(href) {
        log::warn!("{}", redirect_warning(href, &format!("{e:?}")));
    }
}

#[must_use]
pub fn redirect_warning(href: &str, detail: &str) -> String {
    format!("redirect to {href} failed: {detail}")
}
