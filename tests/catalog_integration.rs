//! Integration tests for loading catalogs and filtering them through the public API.

use listing_scout::sources::{BuiltinSource, CatalogSource, JsonFileSource};
use listing_scout::{evaluate, Catalog, FilterController, FilterState};
use std::sync::Arc;

fn write_catalog(dir: &tempfile::TempDir, json: &str) -> std::path::PathBuf {
    let path = dir.path().join("catalog.json");
    std::fs::write(&path, json).expect("failed to write catalog");
    path
}

#[tokio::test]
async fn test_builtin_source_loads_six_listings() {
    let source = BuiltinSource::new();
    assert_eq!(source.source_name(), "builtin");

    let catalog = Catalog::load(&source).await.unwrap();
    assert_eq!(catalog.len(), 6);
    assert_eq!(catalog.listings()[0].title, "Modern Oceanfront Villa");
}

#[tokio::test]
async fn test_json_file_round_trips_builtin_catalog() {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let json = serde_json::to_string_pretty(&BuiltinSource::listings()).unwrap();
    let path = write_catalog(&dir, &json);

    let source = JsonFileSource::new(&path);
    assert_eq!(source.source_name(), "json-file");
    assert_eq!(source.path(), path.as_path());

    let from_file = Catalog::load(&source).await.unwrap();
    let builtin = Catalog::load(&BuiltinSource::new()).await.unwrap();
    assert_eq!(from_file, builtin);
}

#[tokio::test]
async fn test_json_file_uses_camel_case_fields() {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let path = write_catalog(
        &dir,
        r#"[
            {
                "id": "a",
                "title": "Lake House",
                "description": "Quiet retreat on the lake.",
                "location": "Lake Tahoe, CA",
                "price": 2100000,
                "beds": 4,
                "baths": 2.5,
                "sqft": 2900,
                "tags": ["Waterfront", "Dock"],
                "isFeatured": true,
                "isNewListing": false
            },
            {
                "id": "b",
                "title": "Studio",
                "description": "Compact studio.",
                "location": "Oakland, CA",
                "price": 450000,
                "beds": 0,
                "baths": 1,
                "sqft": 480,
                "tags": ["dock"]
            }
        ]"#,
    );

    let catalog = Catalog::load(&JsonFileSource::new(&path)).await.unwrap();
    assert_eq!(catalog.featured(3).len(), 1);
    assert_eq!(catalog.tags(), vec!["Waterfront", "Dock", "dock"]);

    let state = FilterState::from_query("?type=DOCK");
    let ids: Vec<&str> = evaluate(catalog.listings(), &state)
        .iter()
        .map(|l| l.id.as_str())
        .collect();
    assert_eq!(ids, vec!["a", "b"]);
}

#[tokio::test]
async fn test_json_file_fractional_rooms_match_equal_bounds() {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let path = write_catalog(
        &dir,
        r#"[
            {
                "id": "c",
                "title": "Garden Flat",
                "description": "Ground floor flat with a garden.",
                "location": "Berkeley, CA",
                "price": 980000,
                "beds": 2.5,
                "baths": 2.1,
                "sqft": 1300
            }
        ]"#,
    );

    let catalog = Catalog::load(&JsonFileSource::new(&path)).await.unwrap();
    assert_eq!(catalog.listings()[0].beds, 2.5);
    assert_eq!(catalog.listings()[0].baths, 2.1);

    let mut state = FilterState::new();
    state.set_min_baths("2.1");
    assert_eq!(evaluate(catalog.listings(), &state).len(), 1);

    state.set_min_beds("2.5");
    assert_eq!(evaluate(catalog.listings(), &state).len(), 1);

    state.set_min_baths("2.2");
    assert!(evaluate(catalog.listings(), &state).is_empty());
}

#[tokio::test]
async fn test_missing_file_is_an_error() {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let source = JsonFileSource::new(dir.path().join("missing.json"));

    let err = Catalog::load(&source).await.unwrap_err();
    assert!(format!("{:#}", err).contains("Failed to read catalog file"));
}

#[tokio::test]
async fn test_malformed_json_is_an_error() {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let path = write_catalog(&dir, "{ not json");

    let err = Catalog::load(&JsonFileSource::new(&path)).await.unwrap_err();
    assert!(format!("{:#}", err).contains("Failed to parse catalog file"));
}

#[tokio::test]
async fn test_duplicate_ids_in_file_are_rejected() {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let mut listings = BuiltinSource::listings();
    listings[1].id = listings[0].id.clone();
    let path = write_catalog(&dir, &serde_json::to_string(&listings).unwrap());

    assert!(Catalog::load(&JsonFileSource::new(&path)).await.is_err());
}

#[tokio::test]
async fn test_controller_over_loaded_catalog() {
    let catalog = Arc::new(Catalog::load(&BuiltinSource::new()).await.unwrap());
    let mut controller = FilterController::with_query(catalog, "type=Estate");
    assert_eq!(controller.result_count(), 2);
    assert!(controller.has_active_filters());

    controller.set_search_term("napa");
    let titles: Vec<&str> = controller
        .results()
        .iter()
        .map(|l| l.title.as_str())
        .collect();
    assert_eq!(titles, vec!["Country Estate with Vineyard"]);

    controller.toggle_tag("NonexistentTag");
    assert_eq!(controller.result_count(), 1);

    controller.toggle_tag("Estate");
    controller.set_search_term("");
    assert!(controller.is_empty());

    controller.clear_filters();
    assert_eq!(controller.result_count(), 6);
}
