//! Fuzzy resolution of a kind from loosely formatted text.
//!
//! Command arguments and config values spell kind names inconsistently
//! ("cave spider", "CaveSpider", "CAVE_SPIDER"); resolution tries a fixed
//! sequence of normalizations and stops at the first exact hit. The ordering
//! matters: underscore structure is preserved for as long as possible before
//! the final underscore-stripped scan, so "cave spider" hits the space
//! substitution step while "cavespider" only matches in the fallback.

use crate::catalog::index::KindRegistry;
use crate::catalog::model::KindVariant;

impl KindRegistry {
    /// Resolve user-supplied text to a variant, or `None` for no match.
    ///
    /// Strategies, in order, first success wins:
    /// 1. empty input resolves to nothing;
    /// 2. uppercased input, exact name match;
    /// 3. uppercased input with spaces replaced by underscores;
    /// 4. uppercased input with all whitespace removed;
    /// 5. scan in declaration order, comparing the uppercased input against
    ///    each name with its underscores stripped.
    ///
    /// If several names strip to the same form, the first in declaration
    /// order wins; later entries are unreachable through step 5.
    ///
    /// Pure and deterministic: the same input always resolves to the same
    /// variant for the life of the registry.
    pub fn from_text(&self, text: &str) -> Option<&KindVariant> {
        if text.is_empty() {
            return None;
        }
        let upper = text.to_uppercase();
        if let Some(variant) = self.get_by_str(&upper) {
            return Some(variant);
        }
        let underscored = upper.replace(' ', "_");
        if let Some(variant) = self.get_by_str(&underscored) {
            return Some(variant);
        }
        let compact: String = upper.chars().filter(|c| !c.is_whitespace()).collect();
        if let Some(variant) = self.get_by_str(&compact) {
            return Some(variant);
        }
        self.variants().find(|variant| {
            let stripped: String = variant
                .name
                .as_str()
                .chars()
                .filter(|&c| c != '_')
                .collect();
            stripped == upper
        })
    }
}
