// SPDX-License-Identifier: MPL-2.0
//! Localization support for notification content.
//!
//! Every piece of user-visible text travels as a [`LocalizedText`] pair and
//! is resolved against the host's active language only at render time. The
//! scheduler never reads ambient global settings; the active language comes
//! in through the [`LocalizationProvider`] collaborator passed to `render`.

use serde::{Deserialize, Serialize};

/// The two languages the game ships content for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Language {
    #[default]
    English,
    Chinese,
}

impl Language {
    /// Index into a [`LocalizedText`] pair.
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Language::English => 0,
            Language::Chinese => 1,
        }
    }
}

/// A pair of translations for one piece of text, indexed by [`Language`].
///
/// Both entries are always present, so a missing translation for the active
/// language is unrepresentable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalizedText {
    texts: [String; 2],
}

impl LocalizedText {
    pub fn new(english: impl Into<String>, chinese: impl Into<String>) -> Self {
        Self {
            texts: [english.into(), chinese.into()],
        }
    }

    /// Returns the translation for the given language.
    #[must_use]
    pub fn get(&self, language: Language) -> &str {
        &self.texts[language.index()]
    }

    /// Applies `f` to each translation, producing a new pair.
    ///
    /// Used for kind-specific templating (e.g. wrapping an item name into
    /// the pickup announcement).
    #[must_use]
    pub fn map(&self, mut f: impl FnMut(Language, &str) -> String) -> Self {
        Self {
            texts: [
                f(Language::English, self.get(Language::English)),
                f(Language::Chinese, self.get(Language::Chinese)),
            ],
        }
    }
}

/// Supplies the active language for rendering.
///
/// Implemented by the host; typically backed by the player's settings screen.
pub trait LocalizationProvider {
    fn active_language(&self) -> Language;
}

/// A fixed language, handy for tests and single-language hosts.
impl LocalizationProvider for Language {
    fn active_language(&self) -> Language {
        *self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_resolves_by_language() {
        let text = LocalizedText::new("Hello", "你好");
        assert_eq!(text.get(Language::English), "Hello");
        assert_eq!(text.get(Language::Chinese), "你好");
    }

    #[test]
    fn map_transforms_both_translations() {
        let text = LocalizedText::new("gem", "宝石");
        let wrapped = text.map(|language, s| match language {
            Language::English => format!("[{}]", s),
            Language::Chinese => format!("【{}】", s),
        });
        assert_eq!(wrapped.get(Language::English), "[gem]");
        assert_eq!(wrapped.get(Language::Chinese), "【宝石】");
    }

    #[test]
    fn language_implements_provider() {
        let provider: &dyn LocalizationProvider = &Language::Chinese;
        assert_eq!(provider.active_language(), Language::Chinese);
    }
}
