use super::*;
use rand::{rngs::StdRng, SeedableRng};

#[test]
fn default_selection_resolves_to_catalog_entries() {
    let style = style_by_folder(DEFAULT_STYLE).expect("default style");
    assert_eq!(style.name, "Boho French Curl");
    assert_eq!(color_display_name(DEFAULT_COLOR), "Natural Black");
}

#[test]
fn swap_request_carries_labels_and_asset_path() {
    let request = swap_request("Boho_french_curl", "Blonde").expect("request");
    assert_eq!(request.style_name, "Boho French Curl");
    assert_eq!(request.color_label, "Golden Blonde");
    assert_eq!(request.asset_path(), "assets/Boho_french_curl/Blonde.png");
}

#[test]
fn swap_request_rejects_unknown_identifiers() {
    assert_eq!(
        swap_request("Cornrow_Mohawk", "Black"),
        Err(CatalogError::UnknownStyle("Cornrow_Mohawk".into()))
    );
    assert_eq!(
        swap_request("Boho_french_curl", "Green"),
        Err(CatalogError::UnknownColor("Green".into()))
    );
}

#[test]
fn colors_outside_a_styles_palette_are_rejected() {
    let black_only = StyleEntry {
        colors: &["Black"],
        ..STYLE_CATALOG[0]
    };
    let red = color_by_key("Red").expect("red");
    let black = color_by_key("Black").expect("black");

    assert_eq!(
        request_for(&black_only, red),
        Err(CatalogError::ColorNotOffered {
            style: "Boho_french_curl".into(),
            color: "Red".into(),
        })
    );
    assert_eq!(
        request_for(&black_only, black).map(|request| request.asset_path()),
        Ok("assets/Boho_french_curl/Black.png".to_string())
    );
}

#[test]
fn style_info_matches_folder_or_display_name() {
    let by_folder = style_info("Jumbo_Black_Knotless_Braids").expect("folder");
    let by_name = style_info("Jumbo Knotless Braids").expect("name");
    assert_eq!(by_folder.id, by_name.id);
    assert_eq!(by_name.price, "$180-250");
    assert!(style_info("jumbo knotless braids").is_none());
}

#[test]
fn available_colors_is_empty_for_unknown_style() {
    assert_eq!(
        available_colors("Boho French Curl"),
        &["Black", "Blonde", "Red", "Blue"]
    );
    assert!(available_colors("Fulani").is_empty());
}

#[test]
fn descriptions_and_names_fall_back_for_unknown_colors() {
    assert_eq!(color_display_name("Green"), "Green");
    assert_eq!(color_description("Green"), FALLBACK_COLOR_DESCRIPTION);
    assert_eq!(
        color_description("Red"),
        "Rich and vibrant, makes a stunning statement"
    );
}

#[test]
fn totals_match_tables() {
    assert_eq!(total_colors(), 4);
    assert_eq!(total_styles(), 2);
}

#[test]
fn color_navigation_wraps_both_ways() {
    assert_eq!(next_color("Black").key, "Blonde");
    assert_eq!(next_color("Blue").key, "Black");
    assert_eq!(previous_color("Blonde").key, "Black");
    assert_eq!(previous_color("Black").key, "Blue");
}

#[test]
fn color_navigation_from_unknown_color() {
    assert_eq!(next_color("Green").key, "Black");
    assert_eq!(previous_color("Green").key, "Blue");
}

#[test]
fn random_suggestion_is_a_catalog_color() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..16 {
        let suggestion = random_color_suggestion(&mut rng);
        let entry = color_by_key(suggestion.color).expect("catalog color");
        assert_eq!(entry.display_name, suggestion.display_name);
        assert_eq!(entry.description, suggestion.description);
    }
}
