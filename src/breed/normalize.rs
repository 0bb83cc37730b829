//! Country text normalization
//!
//! The breeds API reports countries as free text such as
//! `"United Kingdom (England)"` or `"developed in the United States"`.
//! Only capitalized words are kept, and a parenthetical suffix names the
//! country where the breed was founded.

/// Developed and founded country forms parsed from raw country text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountryName {
    /// Country where the breed is currently developed/recognized
    pub developed: String,
    /// Country where the breed was founded
    pub founded: String,
}

/// Normalize a raw country string.
///
/// The text before the first `(` gives the developed country; the text
/// between that `(` and the next `)` gives the founded country, so with
/// several parentheticals only the first one counts. Each part keeps only
/// the whitespace-separated words that start with an uppercase character.
/// Without a parenthetical, the founded country equals the developed one.
///
/// ```
/// use breed_loader::breed::normalize_country;
///
/// let name = normalize_country("United Kingdom (England)");
/// assert_eq!(name.developed, "United Kingdom");
/// assert_eq!(name.founded, "England");
/// ```
pub fn normalize_country(raw: &str) -> CountryName {
    match raw.split_once('(') {
        Some((developed, rest)) => {
            let founded = rest.split(')').next().unwrap_or_default();
            CountryName {
                developed: capitalized_words(developed),
                founded: capitalized_words(founded),
            }
        }
        None => {
            let developed = capitalized_words(raw);
            CountryName {
                founded: developed.clone(),
                developed,
            }
        }
    }
}

fn capitalized_words(segment: &str) -> String {
    segment
        .split_whitespace()
        .filter(|word| word.chars().next().is_some_and(char::is_uppercase))
        .collect::<Vec<_>>()
        .join(" ")
}
