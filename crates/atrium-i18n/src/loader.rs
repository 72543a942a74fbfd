//! Loading of per-locale translation files

use crate::error::{I18nError, I18nResult};
use crate::table::{TranslationNode, TranslationTable};
use crate::{Locale, LocaleSet};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Builds a [`TranslationTable`] from `<dir>/<code>.json` files
#[derive(Debug, Clone)]
pub struct TableLoader {
    /// Directory holding one JSON file per locale
    base_dir: PathBuf,
}

impl TableLoader {
    /// Create a loader reading from `base_dir`
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Self {
        Self {
            base_dir: base_dir.as_ref().to_path_buf(),
        }
    }

    /// Base directory for translation files
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Load every supported locale into a new table
    ///
    /// A missing file yields an empty subtree, so every key of that locale
    /// resolves to itself. Unreadable or malformed files are errors.
    pub fn load(&self, locales: &LocaleSet) -> I18nResult<TranslationTable> {
        let mut table = TranslationTable::new();
        for &locale in locales.supported() {
            let root = self.load_locale(locale)?;
            table.insert(locale, root)?;
        }

        info!(
            "Loaded translations for {} locale(s) from {:?}",
            locales.supported().len(),
            self.base_dir
        );
        Ok(table)
    }

    /// Load the subtree for a single locale
    pub fn load_locale(&self, locale: Locale) -> I18nResult<TranslationNode> {
        let path = self.base_dir.join(locale.resource_file());
        debug!("Loading translation file: {:?}", path);

        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                warn!("Translation file does not exist: {:?}", path);
                return Ok(TranslationNode::empty());
            }
            Err(source) => {
                return Err(I18nError::ResourceLoadError {
                    path: path.to_string_lossy().to_string(),
                    source,
                });
            }
        };

        Self::parse(locale, &content)
    }

    /// Build a table from in-memory JSON sources
    pub fn from_sources<'a, I>(sources: I) -> I18nResult<TranslationTable>
    where
        I: IntoIterator<Item = (Locale, &'a str)>,
    {
        let mut table = TranslationTable::new();
        for (locale, source) in sources {
            table.insert(locale, Self::parse(locale, source)?)?;
        }
        Ok(table)
    }

    fn parse(locale: Locale, content: &str) -> I18nResult<TranslationNode> {
        let root: TranslationNode =
            serde_json::from_str(content).map_err(|source| I18nError::ParseError {
                locale: locale.code().to_string(),
                source,
            })?;
        if !matches!(root, TranslationNode::Branch(_)) {
            return Err(I18nError::NotABranch(locale.code().to_string()));
        }
        Ok(root)
    }
}

impl Default for TableLoader {
    fn default() -> Self {
        Self::new("locales")
    }
}
