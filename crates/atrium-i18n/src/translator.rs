//! Translation key resolution

use crate::pluralization::PluralizationHelper;
use crate::replacements::Replacements;
use crate::table::{TranslationNode, TranslationTable};
use crate::Locale;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::borrow::Cow;
use std::sync::Arc;

/// `:` followed by one or more ASCII word characters.
static PLACEHOLDER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r":([A-Za-z0-9_]+)").unwrap_or_else(|e| unreachable!("placeholder pattern: {e}"))
});

/// Delimiter between plural variants stored in a single template.
const VARIANT_DELIMITER: char = ';';

/// Resolves dotted keys against a shared translation table
///
/// Resolution never fails. A key that cannot be resolved comes back verbatim
/// so missing translations stay visible instead of breaking rendering.
#[derive(Debug, Clone, Default)]
pub struct Translator {
    table: Arc<TranslationTable>,
}

impl Translator {
    /// Create a translator owning `table`
    pub fn new(table: TranslationTable) -> Self {
        Self::shared(Arc::new(table))
    }

    /// Create a translator over an already shared table
    pub const fn shared(table: Arc<TranslationTable>) -> Self {
        Self { table }
    }

    /// The underlying table
    pub fn table(&self) -> &TranslationTable {
        &self.table
    }

    /// Resolve `key` for `locale` and substitute placeholders
    pub fn resolve(&self, locale: Locale, key: &str, replacements: Option<&Replacements>) -> String {
        match self.table.get(locale, key) {
            Some(TranslationNode::Text(template)) => substitute(template, replacements).into_owned(),
            _ => key.to_string(),
        }
    }

    /// Resolve a pluralized `key`, choosing the variant for `count`
    ///
    /// Variants are either an array or a `;`-delimited template. `:count`
    /// is replaced by `count` unless the caller supplies its own value.
    pub fn resolve_choice(
        &self,
        locale: Locale,
        key: &str,
        count: i64,
        replacements: Option<&Replacements>,
    ) -> String {
        let selected = match self.table.get(locale, key) {
            Some(TranslationNode::Text(template)) => {
                let variants: Vec<&str> = template.split(VARIANT_DELIMITER).map(str::trim).collect();
                PluralizationHelper::select(&variants, locale, count).map(str::to_string)
            }
            Some(TranslationNode::Variants(variants)) => {
                PluralizationHelper::select(variants, locale, count).map(str::to_string)
            }
            Some(TranslationNode::Branch(_)) | None => None,
        };

        let Some(template) = selected else {
            return key.to_string();
        };

        let mut values = replacements.cloned().unwrap_or_default();
        if !values.contains("count") {
            values.insert("count", count);
        }
        substitute(&template, Some(&values)).into_owned()
    }

    /// Whether `key` addresses a template or a variant list for `locale`
    pub fn has(&self, locale: Locale, key: &str) -> bool {
        matches!(
            self.table.get(locale, key),
            Some(TranslationNode::Text(_) | TranslationNode::Variants(_))
        )
    }
}

/// Replace every `:name` with its value in a single left-to-right pass
///
/// Placeholders without a value are kept verbatim, and substituted values are
/// never scanned again.
pub fn substitute<'t>(template: &'t str, replacements: Option<&Replacements>) -> Cow<'t, str> {
    let Some(replacements) = replacements.filter(|r| !r.is_empty()) else {
        return Cow::Borrowed(template);
    };

    PLACEHOLDER.replace_all(template, |caps: &Captures<'_>| {
        replacements
            .get(&caps[1])
            .map_or_else(|| caps[0].to_string(), str::to_string)
    })
}
