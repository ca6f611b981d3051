use super::*;

fn item(id: i64) -> CatalogItem {
    CatalogItem { id, title: None, cover_image: None, season_year: None, genres: None }
}

#[test]
fn catalog_state_default_is_idle_and_empty() {
    let state = CatalogState::default();
    assert!(state.items.is_empty());
    assert!(!state.loading);
    assert!(state.error.is_none());
}

#[test]
fn begin_load_sets_loading_and_clears_error() {
    let mut state = CatalogState { error: Some("old".to_owned()), ..CatalogState::default() };
    state.begin_load();
    assert!(state.loading);
    assert!(state.error.is_none());
}

#[test]
fn finish_load_success_stores_items_verbatim() {
    let mut state = CatalogState::default();
    state.begin_load();
    state.finish_load(Ok(vec![Some(item(1)), None, Some(item(2))]));
    assert!(!state.loading);
    assert_eq!(state.items, vec![Some(item(1)), None, Some(item(2))]);
}

#[test]
fn finish_load_failure_keeps_items_and_records_error() {
    let mut state = CatalogState::default();
    state.finish_load(Ok(vec![Some(item(1))]));
    state.begin_load();
    state.finish_load(Err(ApiError::Status(502)));
    assert!(!state.loading);
    assert_eq!(state.items, vec![Some(item(1))]);
    assert_eq!(state.error.as_deref(), Some("request failed: 502"));
}
