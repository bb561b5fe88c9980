/// Fixed set of strings the widget can display.
///
/// One field per message keeps the tables in lockstep: adding a message
/// without translating it in every locale does not compile.
#[derive(Debug, Clone, Copy)]
pub struct Strings {
    pub toggle: &'static str,
    pub title: &'static str,
    pub placeholder: &'static str,
    pub sending: &'static str,
    pub offline: &'static str,
    pub hello: &'static str,
    pub error: &'static str,
}

static EN: Strings = Strings {
    toggle: "💬 Ask",
    title: "Site guide",
    placeholder: "Type a question...",
    sending: "Sending...",
    offline: "Chat is offline",
    hello: "Hi! Ask me anything about this site.",
    error: "Server error, please try again.",
};

static RU: Strings = Strings {
    toggle: "💬 Спросить",
    title: "Гид по сайту",
    placeholder: "Введите вопрос...",
    sending: "Отправка...",
    offline: "Чат недоступен",
    hello: "Привет! Спрашивайте что угодно об этом сайте.",
    error: "Ошибка сервера, попробуйте ещё раз.",
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Locale {
    En,
    Ru,
}

impl Default for Locale {
    fn default() -> Self {
        Locale::En
    }
}

impl Locale {
    /// Maps a locale tag to a supported locale. Anything but the exact
    /// tags "en" and "ru" resolves to English.
    pub fn resolve(tag: &str) -> Self {
        match tag {
            "en" => Locale::En,
            "ru" => Locale::Ru,
            _ => Locale::En,
        }
    }

    /// Picks a locale from the process environment. Meant for hosts that
    /// have no better signal; the widget itself never reads the
    /// environment.
    pub fn detect() -> Self {
        for key in ["LC_ALL", "LC_MESSAGES", "LANG"] {
            if let Ok(raw) = std::env::var(key) {
                if !raw.is_empty() {
                    return Self::resolve(&primary_subtag(&raw));
                }
            }
        }
        Locale::En
    }

    pub fn strings(self) -> &'static Strings {
        match self {
            Locale::En => &EN,
            Locale::Ru => &RU,
        }
    }
}

/// Cuts an environment tag like "ru_RU.UTF-8" down to its primary subtag.
fn primary_subtag(raw: &str) -> String {
    raw.split(['_', '.', '-', '@'])
        .next()
        .unwrap_or("")
        .to_ascii_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_supported_tags() {
        assert_eq!(Locale::resolve("en"), Locale::En);
        assert_eq!(Locale::resolve("ru"), Locale::Ru);
    }

    #[test]
    fn test_resolve_falls_back_to_english() {
        assert_eq!(Locale::resolve(""), Locale::En);
        assert_eq!(Locale::resolve("de"), Locale::En);
        assert_eq!(Locale::resolve("RU"), Locale::En);
        assert_eq!(Locale::resolve("ru_RU"), Locale::En);
        assert_eq!(Locale::resolve("english"), Locale::En);
    }

    #[test]
    fn test_fallback_table_is_english() {
        let fallback = Locale::resolve("fr").strings();
        let english = Locale::En.strings();
        assert_eq!(fallback.hello, english.hello);
        assert_eq!(fallback.error, english.error);
    }

    #[test]
    fn test_primary_subtag_extraction() {
        assert_eq!(primary_subtag("ru_RU.UTF-8"), "ru");
        assert_eq!(primary_subtag("en-GB"), "en");
        assert_eq!(primary_subtag("RU"), "ru");
        assert_eq!(primary_subtag("C.UTF-8"), "c");
        assert_eq!(primary_subtag(""), "");
    }

    #[test]
    fn test_tables_are_complete_and_translated() {
        let en = Locale::En.strings();
        let ru = Locale::Ru.strings();
        let pairs = [
            (en.toggle, ru.toggle),
            (en.title, ru.title),
            (en.placeholder, ru.placeholder),
            (en.sending, ru.sending),
            (en.offline, ru.offline),
            (en.hello, ru.hello),
            (en.error, ru.error),
        ];
        for (en_text, ru_text) in pairs {
            assert!(!en_text.is_empty());
            assert!(!ru_text.is_empty());
            assert_ne!(en_text, ru_text);
        }
    }

    #[test]
    fn test_default_locale() {
        assert_eq!(Locale::default(), Locale::En);
    }
}
