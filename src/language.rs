use std::fmt;

/// One of the fixed filters offered by the language navigation. Doubles as
/// the key of the per-language result cache.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Language {
    #[default]
    All,
    JavaScript,
    Ruby,
    Java,
    Css,
    Python,
}

impl Language {
    /// Display order of the navigation.
    pub const FILTERS: [Self; 6] = [
        Self::All,
        Self::JavaScript,
        Self::Ruby,
        Self::Java,
        Self::Css,
        Self::Python,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::JavaScript => "JavaScript",
            Self::Ruby => "Ruby",
            Self::Java => "Java",
            Self::Css => "CSS",
            Self::Python => "Python",
        }
    }

    /// The `language:` search qualifier, or `None` for the unscoped filter.
    pub fn search_qualifier(self) -> Option<String> {
        match self {
            Self::All => None,
            other => Some(format!("language:{}", other.as_str())),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub language: Language,
    pub active: bool,
}

/// Navigation entries in display order; only the one equal to `selected` is active.
pub fn nav_items(selected: Language) -> [NavItem; 6] {
    Language::FILTERS.map(|language| NavItem {
        language,
        active: language == selected,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filters_keep_display_order() {
        let labels: Vec<&str> = Language::FILTERS.iter().map(|l| l.as_str()).collect();
        assert_eq!(
            labels,
            vec!["All", "JavaScript", "Ruby", "Java", "CSS", "Python"]
        );
    }

    #[test]
    fn default_is_all() {
        assert_eq!(Language::default(), Language::All);
    }

    #[test]
    fn all_has_no_qualifier() {
        assert_eq!(Language::All.search_qualifier(), None);
        assert_eq!(
            Language::Ruby.search_qualifier().as_deref(),
            Some("language:Ruby")
        );
    }

    #[test]
    fn only_selected_item_is_active() {
        let items = nav_items(Language::Css);
        let active: Vec<Language> = items
            .iter()
            .filter(|item| item.active)
            .map(|item| item.language)
            .collect();
        assert_eq!(active, vec![Language::Css]);
    }
}
