//! Plural rules for the supported locales
//!
//! Each locale maps a count to a plural category, and each category to the
//! index of the variant stored at a pluralized key:
//!
//! | locale | `one` (index 0) | `other` (index 1) |
//! |--------|-----------------|-------------------|
//! | en     | `n == 1`        | everything else   |
//! | fr     | `n == 0 \|\| n == 1` | everything else |
//!
//! Negative counts are classified by their absolute value.

use crate::Locale;

/// Plural category of a count
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PluralCategory {
    /// Singular form
    One,
    /// Plural form
    Other,
}

impl PluralCategory {
    /// Position of this category's variant at a pluralized key
    pub const fn variant_index(self) -> usize {
        match self {
            Self::One => 0,
            Self::Other => 1,
        }
    }
}

/// Helper for handling pluralization rules across locales
#[derive(Debug)]
pub struct PluralizationHelper;

impl PluralizationHelper {
    /// Get the plural category for a count in the given locale
    pub fn category(locale: Locale, count: i64) -> PluralCategory {
        let n = count.unsigned_abs();
        match locale {
            Locale::English => Self::english_category(n),
            Locale::French => Self::french_category(n),
        }
    }

    /// English: 1 = singular, everything else = plural
    const fn english_category(n: u64) -> PluralCategory {
        if n == 1 {
            PluralCategory::One
        } else {
            PluralCategory::Other
        }
    }

    /// French: 0 and 1 = singular, everything else = plural
    const fn french_category(n: u64) -> PluralCategory {
        if n <= 1 {
            PluralCategory::One
        } else {
            PluralCategory::Other
        }
    }

    /// Pick the variant for `count`, clamping to the last available one
    pub fn select<'a, S: AsRef<str>>(variants: &'a [S], locale: Locale, count: i64) -> Option<&'a str> {
        let last = variants.len().checked_sub(1)?;
        let index = Self::category(locale, count).variant_index().min(last);
        variants.get(index).map(AsRef::as_ref)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_rule() {
        assert_eq!(PluralizationHelper::category(Locale::English, 1), PluralCategory::One);
        assert_eq!(PluralizationHelper::category(Locale::English, 0), PluralCategory::Other);
        assert_eq!(PluralizationHelper::category(Locale::English, 5), PluralCategory::Other);
        assert_eq!(PluralizationHelper::category(Locale::English, -1), PluralCategory::One);
    }

    #[test]
    fn test_french_rule() {
        assert_eq!(PluralizationHelper::category(Locale::French, 0), PluralCategory::One);
        assert_eq!(PluralizationHelper::category(Locale::French, 1), PluralCategory::One);
        assert_eq!(PluralizationHelper::category(Locale::French, 2), PluralCategory::Other);
    }

    #[test]
    fn test_select_clamps() {
        let single = ["always"];
        assert_eq!(PluralizationHelper::select(&single, Locale::English, 7), Some("always"));

        let empty: [&str; 0] = [];
        assert_eq!(PluralizationHelper::select(&empty, Locale::English, 7), None);

        let pair = ["one", "many"];
        assert_eq!(PluralizationHelper::select(&pair, Locale::French, 0), Some("one"));
        assert_eq!(PluralizationHelper::select(&pair, Locale::English, 0), Some("many"));
    }
}
