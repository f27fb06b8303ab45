// File: src/theme.rs
// Purpose: Named style variants and custom theme mappings

use std::collections::BTreeMap;

/// A named style variant, or a custom map of CSS custom-property overrides
/// rendered inline on the form element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
    Custom(BTreeMap<String, String>),
}

impl Theme {
    /// Marker value emitted as the `data-theme` attribute.
    pub fn name(&self) -> &str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
            Theme::Custom(_) => "custom",
        }
    }

    /// Class token for the form element.
    pub fn form_class(&self) -> String {
        format!("form-validator-theme-{}", self.name())
    }

    /// Inline style text for custom themes, `None` for the named variants.
    pub fn inline_style(&self) -> Option<String> {
        match self {
            Theme::Custom(properties) if !properties.is_empty() => Some(
                properties
                    .iter()
                    .map(|(key, value)| format!("{}: {};", key, value))
                    .collect::<Vec<_>>()
                    .join(" "),
            ),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_variants() {
        assert_eq!(Theme::Light.form_class(), "form-validator-theme-light");
        assert_eq!(Theme::Dark.name(), "dark");
        assert_eq!(Theme::Light.inline_style(), None);
    }

    #[test]
    fn test_custom_theme_renders_inline() {
        let mut properties = BTreeMap::new();
        properties.insert("--form-accent".to_string(), "#336699".to_string());
        properties.insert("--form-bg".to_string(), "#fff".to_string());

        let theme = Theme::Custom(properties);
        assert_eq!(theme.name(), "custom");
        assert_eq!(
            theme.inline_style().as_deref(),
            Some("--form-accent: #336699; --form-bg: #fff;")
        );
    }
}
