/// Two-valued visual mode of the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    /// Value used for the `data-theme` attribute and local storage.
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ThemeMode::Light => "Light",
            ThemeMode::Dark => "Dark",
        }
    }

    /// Unknown values fall back to light.
    pub fn parse(s: &str) -> Self {
        match s.trim() {
            "dark" => ThemeMode::Dark,
            _ => ThemeMode::Light,
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, ThemeMode::Dark)
    }

    /// Picks the class set for this mode.
    pub fn pick<'a>(&self, light: &'a str, dark: &'a str) -> &'a str {
        match self {
            ThemeMode::Light => light,
            ThemeMode::Dark => dark,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_round_trip() {
        assert_eq!(ThemeMode::Light.toggled(), ThemeMode::Dark);
        assert_eq!(ThemeMode::Dark.toggled().toggled(), ThemeMode::Dark);
    }

    #[test]
    fn test_parse_falls_back_to_light() {
        assert_eq!(ThemeMode::parse("dark"), ThemeMode::Dark);
        assert_eq!(ThemeMode::parse(ThemeMode::Light.as_str()), ThemeMode::Light);
        assert_eq!(ThemeMode::parse("forest"), ThemeMode::Light);
        assert_eq!(ThemeMode::parse(""), ThemeMode::default());
    }

    #[test]
    fn test_pick() {
        assert_eq!(ThemeMode::Dark.pick("card", "card card--dark"), "card card--dark");
        assert_eq!(ThemeMode::Light.pick("card", "card card--dark"), "card");
    }
}
