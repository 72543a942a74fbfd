//! Internationalization support for Atrium
//!
//! This crate resolves dotted translation keys against an immutable,
//! per-locale translation table. It includes:
//!
//! - The fixed locale set and its configured subset
//! - A typed recursive translation table and its JSON loader
//! - `:name` placeholder substitution
//! - Count-based plural variant selection with per-locale rules
//!
//! Resolution never fails: a missing key resolves to the key itself.
//!
//! # Example
//!
//! ```rust
//! use atrium_i18n::{replacements, Locale, TranslationTable, Translator};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut table = TranslationTable::new();
//! table.insert_json(Locale::English, r#"{"hero": {"greeting": "Hi :name"}}"#)?;
//!
//! let translator = Translator::new(table);
//! let greeting = translator.resolve(Locale::English, "hero.greeting", Some(&replacements!["name" => "Ada"]));
//! assert_eq!(greeting, "Hi Ada");
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod loader;
pub mod locale;
pub mod pluralization;
pub mod replacements;
pub mod table;
pub mod translator;

pub use error::{I18nError, I18nResult};
pub use loader::TableLoader;
pub use locale::{Locale, LocaleSet};
pub use pluralization::{PluralCategory, PluralizationHelper};
pub use replacements::Replacements;
pub use table::{TranslationNode, TranslationTable};
pub use translator::Translator;
