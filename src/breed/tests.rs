//! Tests for breed records and country normalization

use super::*;
use pretty_assertions::assert_eq;
use test_case::test_case;

// ============================================================================
// Normalization Tests
// ============================================================================

#[test_case("Thailand", "Thailand", "Thailand" ; "single word")]
#[test_case("United States", "United States", "United States" ; "two words")]
#[test_case("United Kingdom (England)", "United Kingdom", "England" ; "parenthetical founded")]
#[test_case("developed in the United States (founding stock from Asia)", "United States", "Asia" ; "lowercase words dropped")]
#[test_case("Isle of Man", "Isle Man", "Isle Man" ; "lowercase connector dropped")]
#[test_case("  Burma   (Myanmar) ", "Burma", "Myanmar" ; "extra whitespace")]
#[test_case("", "", "" ; "empty")]
#[test_case("Alpha (Beta) (Gamma)", "Alpha", "Beta" ; "first parenthetical wins")]
#[test_case("Alpha (Beta", "Alpha", "Beta" ; "unclosed parenthetical")]
fn test_normalize_country(raw: &str, developed: &str, founded: &str) {
    let name = normalize_country(raw);
    assert_eq!(name.developed, developed);
    assert_eq!(name.founded, founded);
}

#[test]
fn test_normalize_unclosed_parenthesis() {
    let name = normalize_country("France (Paris Region");
    assert_eq!(name.developed, "France");
    assert_eq!(name.founded, "Paris Region");
}

#[test]
fn test_normalize_parenthesis_without_capitals() {
    // A parenthetical that keeps no words yields an empty founded country
    let name = normalize_country("Canada (unknown)");
    assert_eq!(name.developed, "Canada");
    assert_eq!(name.founded, "");
}

#[test]
fn test_normalize_only_parenthesis() {
    let name = normalize_country("(England)");
    assert_eq!(name.developed, "");
    assert_eq!(name.founded, "England");
}

#[test]
fn test_normalize_non_ascii_uppercase() {
    let name = normalize_country("Österreich (Ägypten)");
    assert_eq!(name.developed, "Österreich");
    assert_eq!(name.founded, "Ägypten");
}

// ============================================================================
// Record Conversion Tests
// ============================================================================

#[test]
fn test_record_from_raw_without_parenthesis() {
    let raw = RawBreed {
        breed: "Siamese".to_string(),
        country: "Thailand".to_string(),
        origin: "Natural".to_string(),
        coat: "Short".to_string(),
        pattern: "Colorpoint".to_string(),
    };

    let record = BreedRecord::from(raw);
    assert_eq!(record.breed, "Siamese");
    assert_eq!(record.country, "Thailand");
    assert_eq!(record.founded_country, "Thailand");
    assert_eq!(record.origin, "Natural");
    assert_eq!(record.coat, "Short");
    assert_eq!(record.pattern, "Colorpoint");
}

#[test]
fn test_record_from_raw_with_founded_country() {
    let raw = RawBreed {
        breed: "British Longhair".to_string(),
        country: "United Kingdom (England)".to_string(),
        ..RawBreed::default()
    };

    let record = BreedRecord::from(raw);
    assert_eq!(record.country, "United Kingdom");
    assert_eq!(record.founded_country, "England");
}

// ============================================================================
// Serde Tests
// ============================================================================

#[test]
fn test_breeds_page_deserialize() {
    let body = serde_json::json!({
        "current_page": 1,
        "data": [
            {
                "breed": "Abyssinian",
                "country": "Ethiopia",
                "origin": "Natural/Standard",
                "coat": "Short",
                "pattern": "Ticked"
            },
            {
                "breed": "Aegean",
                "country": "Greece",
                "origin": "Natural/Standard",
                "coat": "Semi-long",
                "pattern": "Bi- or tri-colored"
            }
        ],
        "per_page": 2,
        "total": 98
    });

    let page: BreedsPage = serde_json::from_value(body).unwrap();
    assert_eq!(page.data.len(), 2);
    assert_eq!(page.data[1].breed, "Aegean");
    assert_eq!(page.data[1].pattern, "Bi- or tri-colored");
}

#[test]
fn test_raw_breed_missing_fields_default_to_empty() {
    let raw: RawBreed = serde_json::from_str(r#"{"breed": "Mystery"}"#).unwrap();
    assert_eq!(raw.breed, "Mystery");
    assert_eq!(raw.country, "");
    assert_eq!(raw.coat, "");
}

#[test]
fn test_breeds_page_requires_data() {
    let result = serde_json::from_str::<BreedsPage>(r#"{"items": []}"#);
    assert!(result.is_err());
}

#[test]
fn test_breed_row_serializes_flat() {
    let row = BreedRow {
        id: 7,
        record: BreedRecord {
            breed: "Siamese".to_string(),
            country: "Thailand".to_string(),
            founded_country: "Thailand".to_string(),
            origin: "Natural".to_string(),
            coat: "Short".to_string(),
            pattern: "Colorpoint".to_string(),
        },
    };

    let value = serde_json::to_value(&row).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "id": 7,
            "breed": "Siamese",
            "country": "Thailand",
            "founded_country": "Thailand",
            "origin": "Natural",
            "coat": "Short",
            "pattern": "Colorpoint"
        })
    );
}
