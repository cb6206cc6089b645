//! Public changelog feed.
//!
//! DESIGN
//! ======
//! Entry bodies are markdown authored by the team. Raw HTML is dropped before
//! rendering so a bad entry cannot inject markup into the page.

#[cfg(test)]
#[path = "changelog_test.rs"]
mod changelog_test;

use executions::parse_timestamp;
use leptos::prelude::*;
use pulldown_cmark::{Event, Options, Parser, html};
use time::OffsetDateTime;

use crate::net::types::ChangelogEntry;

/// Render an entry body to HTML with raw HTML events removed.
#[must_use]
pub fn render_markdown(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);

    let parser = Parser::new_ext(markdown, options).filter_map(|event| match event {
        Event::Html(_) | Event::InlineHtml(_) => None,
        other => Some(other),
    });

    let mut out = String::new();
    html::push_html(&mut out, parser);
    out
}

/// Publication time; date-only values are read as midnight UTC.
fn published_at(raw: &str) -> Option<OffsetDateTime> {
    parse_timestamp(raw)
        .or_else(|_| parse_timestamp(&format!("{}T00:00:00Z", raw.trim())))
        .ok()
}

/// Long-form date label such as "March 5, 2024". Unparseable input is shown
/// as-is.
#[must_use]
pub fn published_label(raw: &str) -> String {
    match published_at(raw) {
        Some(at) => format!("{} {}, {}", at.month(), at.day(), at.year()),
        None => raw.to_owned(),
    }
}

/// Newest entries first; entries with unparseable dates sink to the end.
pub fn sort_newest_first(entries: &mut [ChangelogEntry]) {
    entries.sort_by_cached_key(|entry| std::cmp::Reverse(published_at(&entry.published_at)));
}

#[component]
pub fn ChangelogPage() -> impl IntoView {
    let entries = RwSignal::new(None::<Result<Vec<ChangelogEntry>, String>>);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let result = crate::net::api::fetch_changelog().await.map(|mut items| {
            sort_newest_first(&mut items);
            items
        });
        if let Err(e) = &result {
            log::warn!("changelog fetch failed: {e}");
        }
        entries.set(Some(result));
    });

    view! {
        <div class="changelog-page">
            <h1>"Changelog"</h1>
            {move || match entries.get() {
                None => view! { <p>"Loading changelog..."</p> }.into_any(),
                Some(Err(e)) => {
                    view! { <p class="changelog-page__error">{e}</p> }
                        .into_any()
                }
                Some(Ok(items)) if items.is_empty() => view! { <p>"Nothing published yet."</p> }.into_any(),
                Some(Ok(items)) => {
                    view! {
                        <ol class="changelog-page__list">
                            {items
                                .into_iter()
                                .map(|entry| {
                                    let rendered = render_markdown(&entry.body);
                                    view! {
                                        <li class="changelog-entry">
                                            <header class="changelog-entry__header">
                                                <span class="changelog-entry__version">{entry.version}</span>
                                                <time class="changelog-entry__date">
                                                    {published_label(&entry.published_at)}
                                                </time>
                                            </header>
                                            <h2 class="changelog-entry__title">{entry.title}</h2>
                                            <div class="changelog-entry__body" inner_html=rendered></div>
                                        </li>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </ol>
                    }
                        .into_any()
                }
            }}
        </div>
    }
}
