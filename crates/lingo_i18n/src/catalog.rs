//! In-memory text catalog with default-language fallback.
//!
//! # Lookup order
//!
//! 1. The requested language's entry for the id.
//! 2. The default language's entry for the id.
//! 3. The catalog's error text.
//!
//! A missing language and a missing id in a present language take the same
//! path; lookups never report which one happened.
//!
//! The catalog is not synchronized. Populate it up front, then share it
//! read-only (`&TextCatalog` is `Sync` when the key and text types are).

use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::Hash;

use tracing::trace;

/// Text returned when no language provides an id.
pub const DEFAULT_ERROR_TEXT: &str = "TEXT_NOT_FOUND";

/// Texts for a single language, keyed by id.
pub type TextMap<I, T> = HashMap<I, T>;

/// Texts for every language.
pub type LangTextMap<L, I, T> = HashMap<L, TextMap<I, T>>;

/// Localized texts keyed by language and text id.
///
/// ```
/// use lingo_i18n::TextCatalog;
///
/// let mut catalog: TextCatalog = TextCatalog::new("en-US");
/// catalog
///     .set_text("en-US", 1, "Hello")
///     .set_text("fr-FR", 1, "Bonjour");
///
/// assert_eq!(catalog.get_text("fr-FR", &1), "Bonjour");
/// assert_eq!(catalog.get_text("de-DE", &1), "Hello");
/// assert_eq!(catalog.get_text("de-DE", &2), "TEXT_NOT_FOUND");
/// ```
#[derive(Clone, Debug)]
pub struct TextCatalog<L = String, T = String, I = u64> {
    default_lang: L,
    texts: LangTextMap<L, I, T>,
    error_text: T,
}

impl<L, T, I> TextCatalog<L, T, I>
where
    L: Eq + Hash,
    I: Eq + Hash,
    T: From<&'static str>,
{
    /// Create an empty catalog that falls back to `default_lang`.
    pub fn new(default_lang: impl Into<L>) -> Self {
        Self::with_error_text(default_lang, DEFAULT_ERROR_TEXT)
    }

    /// Create a catalog from existing texts.
    pub fn with_texts(default_lang: impl Into<L>, texts: LangTextMap<L, I, T>) -> Self {
        Self::from_parts(default_lang, texts, DEFAULT_ERROR_TEXT)
    }
}

impl<L, T, I> TextCatalog<L, T, I>
where
    L: Eq + Hash,
    I: Eq + Hash,
{
    /// Create an empty catalog with a custom error text.
    pub fn with_error_text(default_lang: impl Into<L>, error_text: impl Into<T>) -> Self {
        Self::from_parts(default_lang, HashMap::new(), error_text)
    }

    /// Create a catalog from existing texts with a custom error text.
    pub fn from_parts(
        default_lang: impl Into<L>,
        texts: LangTextMap<L, I, T>,
        error_text: impl Into<T>,
    ) -> Self {
        Self {
            default_lang: default_lang.into(),
            texts,
            error_text: error_text.into(),
        }
    }

    /// Insert or overwrite the text for (`lang`, `id`).
    pub fn set_text(&mut self, lang: impl Into<L>, id: I, text: impl Into<T>) -> &mut Self {
        self.texts
            .entry(lang.into())
            .or_default()
            .insert(id, text.into());
        self
    }

    /// Merge texts into `lang`, overwriting ids that already exist.
    ///
    /// Same result as calling [`set_text`](Self::set_text) once per pair.
    pub fn set_texts<V>(
        &mut self,
        lang: impl Into<L>,
        texts: impl IntoIterator<Item = (I, V)>,
    ) -> &mut Self
    where
        V: Into<T>,
    {
        self.texts
            .entry(lang.into())
            .or_default()
            .extend(texts.into_iter().map(|(id, text)| (id, text.into())));
        self
    }

    /// Look up a text, falling back to the default language and then to
    /// the error text.
    pub fn get_text<Q, R>(&self, lang: &Q, id: &R) -> &T
    where
        L: Borrow<Q>,
        I: Borrow<R>,
        Q: Hash + Eq + ?Sized,
        R: Hash + Eq + ?Sized,
    {
        if let Some(text) = self.try_get_text(lang, id) {
            return text;
        }
        trace!(
            tier = "requested",
            next = "default_lang",
            "Text missing, falling back"
        );

        let default_lang: &Q = self.default_lang.borrow();
        if let Some(text) = self.try_get_text(default_lang, id) {
            return text;
        }
        trace!(
            tier = "default_lang",
            next = "error_text",
            "Text missing, falling back"
        );

        &self.error_text
    }

    /// Look up a text in `lang` only.
    pub fn try_get_text<Q, R>(&self, lang: &Q, id: &R) -> Option<&T>
    where
        L: Borrow<Q>,
        I: Borrow<R>,
        Q: Hash + Eq + ?Sized,
        R: Hash + Eq + ?Sized,
    {
        self.texts.get(lang)?.get(id)
    }

    /// Text returned when neither `lang` nor the default language has an id.
    pub fn default_error_text(&self) -> &T {
        &self.error_text
    }

    /// Language consulted when the requested one lacks an id.
    pub fn default_lang(&self) -> &L {
        &self.default_lang
    }

    /// Languages that have been written to.
    pub fn languages(&self) -> impl Iterator<Item = &L> {
        self.texts.keys()
    }

    /// All stored texts, per language.
    pub fn texts(&self) -> &LangTextMap<L, I, T> {
        &self.texts
    }

    /// Total number of (language, id) entries.
    pub fn len(&self) -> usize {
        self.texts.values().map(HashMap::len).sum()
    }

    /// Whether no texts are stored.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn falls_back_to_default_then_error_text() {
        let mut cat: TextCatalog = TextCatalog::new("en-US");
        cat.set_text("fr-FR", 1, "Bonjour");

        assert_eq!(cat.get_text("fr-FR", &1), "Bonjour");
        assert_eq!(cat.get_text("de-DE", &1), "TEXT_NOT_FOUND");

        cat.set_text("en-US", 1, "Hello");
        assert_eq!(cat.get_text("de-DE", &1), "Hello");
        // Known language, unknown id takes the same path.
        cat.set_text("de-DE", 2, "Tschüss");
        assert_eq!(cat.get_text("de-DE", &1), "Hello");
    }

    #[test]
    fn error_text_is_static_default() {
        let cat: TextCatalog = TextCatalog::new("en-US");
        assert_eq!(cat.default_error_text(), DEFAULT_ERROR_TEXT);
        assert!(cat.is_empty());
    }

    #[test]
    fn custom_error_text_and_types() {
        let mut cat: TextCatalog<&str, &str, &str> =
            TextCatalog::with_error_text("en", "???");
        cat.set_text("en", "title", "Title");

        assert_eq!(*cat.get_text("ko", "title"), "Title");
        assert_eq!(*cat.get_text("ko", "missing"), "???");
        assert_eq!(*cat.default_lang(), "en");
    }

    #[test]
    fn with_texts_prepopulates() {
        let mut en = TextMap::new();
        en.insert(7u64, "Seven".to_string());
        let mut texts = LangTextMap::new();
        texts.insert("en-US".to_string(), en);

        let cat: TextCatalog = TextCatalog::with_texts("en-US", texts);
        assert_eq!(cat.get_text("it-IT", &7), "Seven");
        assert_eq!(cat.len(), 1);
    }

    #[test]
    fn set_texts_merges() {
        let mut cat: TextCatalog = TextCatalog::new("en-US");
        cat.set_text("en-US", 1, "One").set_text("en-US", 2, "Two");
        cat.set_texts("en-US", [(2, "Zwei"), (3, "Drei")]);

        assert_eq!(cat.get_text("en-US", &1), "One");
        assert_eq!(cat.get_text("en-US", &2), "Zwei");
        assert_eq!(cat.get_text("en-US", &3), "Drei");
        assert_eq!(cat.len(), 3);
    }

    #[test]
    fn try_get_text_has_no_fallback() {
        let mut cat: TextCatalog = TextCatalog::new("en-US");
        cat.set_text("en-US", 1, "Hello");
        assert_eq!(cat.try_get_text("fr-FR", &1), None);
        assert_eq!(
            cat.try_get_text("en-US", &1).map(String::as_str),
            Some("Hello")
        );
    }
}
