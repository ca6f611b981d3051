//! Catalog landing page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Public route: signed-out visitors can browse, and only the gated "add to
//! collection" action asks them to log in. The catalog is requested once on
//! mount; the skeleton grid stands in until it arrives.

use leptos::prelude::*;

use crate::components::anime_list::{AnimeList, AnimeListSkeleton};
use crate::components::user_provider::use_user;
use crate::state::catalog::CatalogState;
use crate::state::session::SessionPhase;

#[component]
pub fn HomePage() -> impl IntoView {
    let session = use_user();
    let catalog = RwSignal::new(CatalogState::default());
    catalog.update(CatalogState::begin_load);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let result = crate::net::api::fetch_catalog().await;
        if let Err(e) = &result {
            leptos::logging::warn!("catalog fetch failed: {e}");
        }
        if catalog.try_update(|c| c.finish_load(result)).is_none() {
            leptos::logging::log!("catalog page unmounted before load finished");
        }
    });

    let greeting = move || {
        if session.phase() == SessionPhase::Bootstrapping {
            return Some("Checking your session...".to_owned());
        }
        session
            .snapshot()
            .user()
            .and_then(|u| u.display_name().map(str::to_owned))
            .map(|name| format!("Welcome back, {name}"))
    };

    view! {
        <div class="home-page">
            <header class="home-page__header">
                <h1>"Trending Anime"</h1>
                <span class="home-page__greeting">{greeting}</span>
            </header>
            <Show when=move || catalog.get().error.is_some()>
                <p class="home-page__error">{move || catalog.get().error.unwrap_or_default()}</p>
            </Show>
            <Show when=move || !catalog.get().loading fallback=|| view! { <AnimeListSkeleton/> }>
                <AnimeList list=Signal::derive(move || catalog.get().items)/>
            </Show>
        </div>
    }
}
