//! Cover-art grid for catalog items, with its loading placeholder.
//!
//! DESIGN
//! ======
//! The "+" button on each card is a protected action: it is routed through
//! the auth gate, which either runs the caller's `on_add` or opens the
//! login-required dialog. The item list itself is never modified.

#[cfg(test)]
#[path = "anime_list_test.rs"]
mod anime_list_test;

use std::ops::Range;

use leptos::prelude::*;

use super::login_required_dialog::LoginRequiredDialog;
use super::user_provider::use_user;
use crate::consts::{COVER_HEIGHT_PX, COVER_WIDTH_PX, SKELETON_CARD_COUNT};
use crate::net::types::CatalogItem;
use crate::state::gate::{LoginPrompt, PromptAction, guard_protected_action};
use crate::util::display::cards;

/// Grid of catalog cards. Absent entries in `list` are skipped.
///
/// `on_add` runs only for signed-in users; without it the gated action is a
/// no-op for them.
#[component]
pub fn AnimeList(
    #[prop(into)] list: Signal<Vec<Option<CatalogItem>>>,
    #[prop(optional)] on_add: Option<Callback<CatalogItem>>,
) -> impl IntoView {
    let session = use_user();
    let prompt = RwSignal::new(LoginPrompt::default());

    let on_protected = Callback::new(move |item: CatalogItem| {
        let snapshot = session.current_snapshot();
        let mut next = prompt.get_untracked();
        guard_protected_action(&snapshot, &mut next, item, |item| {
            if let Some(on_add) = on_add {
                on_add.run(item);
            }
        });
        prompt.set(next);
    });

    let on_resolve = Callback::new(move |action: PromptAction| {
        prompt.update(|p| {
            p.resolve(action);
        });
    });

    view! {
        <div class="anime-list">
            {move || {
                list.with(|items| {
                    cards(items)
                        .map(|card| {
                            view! {
                                <AnimeCard
                                    item=card.item.clone()
                                    href=card.href
                                    title=card.title
                                    alt=card.alt.to_owned()
                                    cover=card.cover.to_owned()
                                    subtitle=card.subtitle
                                    on_add=on_protected
                                />
                            }
                        })
                        .collect_view()
                })
            }}
            <Show when=move || prompt.get().is_open()>
                <LoginRequiredDialog on_resolve=on_resolve/>
            </Show>
        </div>
    }
}

/// One cover card: detail link, caption, gradient, and hover "+" button.
#[component]
fn AnimeCard(
    item: CatalogItem,
    href: String,
    title: String,
    alt: String,
    cover: String,
    subtitle: String,
    on_add: Callback<CatalogItem>,
) -> impl IntoView {
    let on_add_click = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        on_add.run(item.clone());
    };

    view! {
        <div class="anime-card">
            <a class="anime-card__link" href=href>
                <img
                    class="anime-card__cover"
                    loading="lazy"
                    src=cover
                    alt=alt
                    width=COVER_WIDTH_PX.to_string()
                    height=COVER_HEIGHT_PX.to_string()
                />
            </a>
            <div class="anime-card__caption">
                <h2 class="anime-card__title">{title}</h2>
                <p class="anime-card__meta">{subtitle}</p>
            </div>
            <div class="anime-card__overlay" aria-hidden="true"></div>
            <button
                class="anime-card__add"
                title="Add to collection"
                aria-label="Add to collection"
                on:click=on_add_click
            >
                "+"
            </button>
        </div>
    }
}

/// Placeholder slots rendered while the catalog loads.
pub fn skeleton_slots() -> Range<usize> {
    0..SKELETON_CARD_COUNT
}

/// Fixed set of non-interactive placeholder cards.
#[component]
pub fn AnimeListSkeleton() -> impl IntoView {
    view! {
        <div class="anime-list anime-list--skeleton" aria-busy="true">
            {skeleton_slots()
                .map(|_| {
                    view! {
                        <div class="anime-card anime-card--skeleton">
                            <div class="skeleton anime-card__cover-skeleton"></div>
                            <div class="anime-card__caption">
                                <div class="skeleton skeleton--title"></div>
                                <div class="skeleton skeleton--meta"></div>
                            </div>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
