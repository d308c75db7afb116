//! Derived names value object
//!
//! Maps a raw asset file name to the class identifier and the custom element
//! tag name used by the generated module and its declaration.
//!
//! Word splitting follows the usual change-case rules:
//!
//! - any character that is not a letter or an ASCII digit separates words
//! - `aB` and `1B` split before the uppercase letter
//! - `ABc` splits before the last uppercase of a run (`XMLHttp` → `XML`, `Http`)
//! - with `separate_numbers`, `a1` and `1a` split as well
//!
//! Both functions are pure. Two file names can still derive the same names
//! (`Home.svg` and `home.svg`); detecting that is the job of
//! [`crate::domain::services::collisions`].

use serde::{Deserialize, Serialize};

use crate::error::{IconError, IconResult};

/// Naming rules applied to every asset
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamingRules {
    /// Namespace prefix of every tag name
    #[serde(default = "default_tag_prefix")]
    pub tag_prefix: String,

    /// Prepended to every class identifier
    #[serde(default = "default_class_prefix")]
    pub class_prefix: String,

    /// Appended to every class identifier
    #[serde(default = "default_class_suffix")]
    pub class_suffix: String,

    /// Asset file extension, without the dot
    #[serde(default = "default_extension")]
    pub extension: String,
}

impl Default for NamingRules {
    fn default() -> Self {
        Self {
            tag_prefix: default_tag_prefix(),
            class_prefix: default_class_prefix(),
            class_suffix: default_class_suffix(),
            extension: default_extension(),
        }
    }
}

fn default_tag_prefix() -> String {
    "hi".to_string()
}

fn default_class_prefix() -> String {
    "Heroicon".to_string()
}

fn default_class_suffix() -> String {
    "Element".to_string()
}

fn default_extension() -> String {
    "svg".to_string()
}

impl NamingRules {
    /// Whether `file_name` carries the asset extension
    pub fn matches_extension(&self, file_name: &str) -> bool {
        file_name
            .strip_suffix(self.extension.as_str())
            .and_then(|rest| rest.strip_suffix('.'))
            .is_some_and(|stem| !stem.is_empty())
    }

    /// File name without the asset extension
    pub fn stem<'a>(&self, file_name: &'a str) -> &'a str {
        file_name
            .strip_suffix(self.extension.as_str())
            .and_then(|rest| rest.strip_suffix('.'))
            .filter(|stem| !stem.is_empty())
            .unwrap_or(file_name)
    }
}

/// Names shared by an asset's module and declaration
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DerivedNames {
    /// Class identifier, e.g. `HeroiconHomeSolidElement`
    pub identifier: String,
    /// Custom element tag name, e.g. `hi-solid-home`
    pub tag_name: String,
}

/// Derive the class identifier and tag name for one asset
pub fn derive_names(
    file_name: &str,
    group_token: &str,
    rules: &NamingRules,
) -> IconResult<DerivedNames> {
    let stem = rules.stem(file_name);

    let stem_pascal = pascal_case(stem);
    if stem_pascal.is_empty() {
        return Err(IconError::InvalidAssetName {
            file_name: file_name.to_string(),
        });
    }

    let mut identifier = format!(
        "{}{}{}{}",
        rules.class_prefix,
        stem_pascal,
        pascal_case(group_token),
        rules.class_suffix
    );
    if identifier.starts_with(|c: char| c.is_ascii_digit()) {
        identifier.insert(0, '_');
    }

    let tag_name = [
        rules.tag_prefix.to_lowercase(),
        kebab_case(group_token),
        kebab_case(stem),
    ]
    .into_iter()
    .filter(|part| !part.is_empty())
    .collect::<Vec<_>>()
    .join("-");

    Ok(DerivedNames {
        identifier,
        tag_name,
    })
}

/// `arrow-up-circle` → `ArrowUpCircle`
pub fn pascal_case(input: &str) -> String {
    split_words(input, true)
        .iter()
        .map(|word| capitalize(word))
        .collect()
}

/// `ArrowUpCircle` → `arrow-up-circle`
pub fn kebab_case(input: &str) -> String {
    split_words(input, false)
        .iter()
        .map(|word| word.to_lowercase())
        .collect::<Vec<_>>()
        .join("-")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphabetic() || c.is_ascii_digit()
}

/// Split `input` into words along separators, case boundaries and
/// (optionally) letter/digit boundaries.
pub fn split_words(input: &str, separate_numbers: bool) -> Vec<String> {
    let chars: Vec<char> = input.chars().collect();
    let mut words = Vec::new();
    let mut current = String::new();
    let mut prev: Option<char> = None;

    for (i, &c) in chars.iter().enumerate() {
        if !is_word_char(c) {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            prev = None;
            continue;
        }

        if let Some(p) = prev {
            let next = chars.get(i + 1).copied();
            let lower_upper = (p.is_lowercase() || p.is_ascii_digit()) && c.is_uppercase();
            let upper_upper_lower =
                p.is_uppercase() && c.is_uppercase() && next.is_some_and(char::is_lowercase);
            let number_boundary = separate_numbers
                && ((p.is_alphabetic() && c.is_ascii_digit())
                    || (p.is_ascii_digit() && c.is_alphabetic()));

            if lower_upper || upper_upper_lower || number_boundary {
                words.push(std::mem::take(&mut current));
            }
        }

        current.push(c);
        prev = Some(c);
    }

    if !current.is_empty() {
        words.push(current);
    }

    words
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(file_name: &str, token: &str) -> DerivedNames {
        derive_names(file_name, token, &NamingRules::default()).unwrap()
    }

    #[test]
    fn split_words_on_separators() {
        assert_eq!(split_words("arrow-up_circle.x", false), vec!["arrow", "up", "circle", "x"]);
    }

    #[test]
    fn split_words_on_case_boundaries() {
        assert_eq!(split_words("arrowUpCircle", false), vec!["arrow", "Up", "Circle"]);
        assert_eq!(split_words("XMLHttpRequest", false), vec!["XML", "Http", "Request"]);
        assert_eq!(split_words("ABC", false), vec!["ABC"]);
    }

    #[test]
    fn split_words_numbers() {
        assert_eq!(split_words("bars3-bottom", false), vec!["bars3", "bottom"]);
        assert_eq!(split_words("bars3-bottom", true), vec!["bars", "3", "bottom"]);
        assert_eq!(split_words("h1", true), vec!["h", "1"]);
        assert_eq!(split_words("version2Beta", false), vec!["version2", "Beta"]);
    }

    #[test]
    fn split_words_empty_and_separator_only() {
        assert!(split_words("", true).is_empty());
        assert!(split_words("--_.", true).is_empty());
    }

    #[test]
    fn pascal_case_basic() {
        assert_eq!(pascal_case("arrow-up-circle"), "ArrowUpCircle");
        assert_eq!(pascal_case("XMLHttpRequest"), "XmlHttpRequest");
        assert_eq!(pascal_case("24/solid"), "24Solid");
        assert_eq!(pascal_case("h1"), "H1");
    }

    #[test]
    fn kebab_case_basic() {
        assert_eq!(kebab_case("ArrowUpCircle"), "arrow-up-circle");
        assert_eq!(kebab_case("24/solid"), "24-solid");
        assert_eq!(kebab_case("h1"), "h1");
        assert_eq!(kebab_case("Arrow  Up__Circle"), "arrow-up-circle");
    }

    #[test]
    fn derive_names_for_grouped_asset() {
        let derived = names("arrow-up-circle.svg", "24/solid");
        assert_eq!(derived.identifier, "HeroiconArrowUpCircle24SolidElement");
        assert_eq!(derived.tag_name, "hi-24-solid-arrow-up-circle");
    }

    #[test]
    fn derive_names_with_group_token() {
        let derived = names("home.svg", "micro");
        assert_eq!(derived.identifier, "HeroiconHomeMicroElement");
        assert_eq!(derived.tag_name, "hi-micro-home");
    }

    #[test]
    fn same_stem_in_two_groups_yields_distinct_names() {
        let solid = names("home.svg", "solid");
        let outline = names("home.svg", "outline");
        assert_ne!(solid.tag_name, outline.tag_name);
        assert_ne!(solid.identifier, outline.identifier);
    }

    #[test]
    fn derive_names_keeps_digits_in_tag() {
        let derived = names("h1.svg", "solid");
        assert_eq!(derived.tag_name, "hi-solid-h1");
        assert_eq!(derived.identifier, "HeroiconH1SolidElement");
    }

    #[test]
    fn derive_names_is_deterministic() {
        assert_eq!(names("chat-bubble-left.svg", "mini"), names("chat-bubble-left.svg", "mini"));
    }

    #[test]
    fn derive_names_rejects_stem_without_words() {
        let err = derive_names("---.svg", "solid", &NamingRules::default()).unwrap_err();
        assert!(matches!(err, IconError::InvalidAssetName { .. }));
    }

    #[test]
    fn derive_names_prefixes_leading_digit() {
        let rules = NamingRules {
            class_prefix: String::new(),
            ..NamingRules::default()
        };
        let derived = derive_names("1-circle.svg", "solid", &rules).unwrap();
        assert_eq!(derived.identifier, "_1CircleSolidElement");
    }

    #[test]
    fn derive_names_lowercases_tag_prefix() {
        let rules = NamingRules {
            tag_prefix: "Ui".to_string(),
            ..NamingRules::default()
        };
        assert_eq!(derive_names("home.svg", "solid", &rules).unwrap().tag_name, "ui-solid-home");
    }

    #[test]
    fn case_variants_collide() {
        // the deriver folds case; collisions module has to catch this
        assert_eq!(names("Home.svg", "solid"), names("home.svg", "solid"));
    }

    #[test]
    fn matches_extension() {
        let rules = NamingRules::default();
        assert!(rules.matches_extension("home.svg"));
        assert!(!rules.matches_extension("home.svgz"));
        assert!(!rules.matches_extension("home.SVG"));
        assert!(!rules.matches_extension(".svg"));
        assert!(!rules.matches_extension("svg"));
        assert!(!rules.matches_extension("README.md"));
    }

    #[test]
    fn stem_strips_only_the_asset_extension() {
        let rules = NamingRules::default();
        assert_eq!(rules.stem("home.svg"), "home");
        assert_eq!(rules.stem("home.png"), "home.png");
        assert_eq!(rules.stem("a.b.svg"), "a.b");
    }
}
