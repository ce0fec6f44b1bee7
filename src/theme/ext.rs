use std::{path::Path, sync::Arc};

use indexmap::IndexMap;

use crate::theme::{RegistryError, Theme, ThemeError};

/// Extension trait for accessing and replacing the active theme.
pub trait ThemeExt {
    /// Changes the theme.
    fn set_theme<T: AsRef<Theme>>(&mut self, theme: T);

    /// Gets an immutable reference to the theme.
    fn get_theme(&self) -> &Theme;
}

/// Named themes with one of them active.
///
/// Starts out holding the built-in dark theme, active, under
/// [`ThemeRegistry::BUILTIN_DARK`]. Themes are never mutated once
/// registered; replacing one swaps the shared pointer.
#[derive(Debug, Clone)]
pub struct ThemeRegistry {
    themes: IndexMap<String, Arc<Theme>>,
    /// Always a key of `themes`: set only by `new` and by `activate` after a
    /// lookup, and nothing removes themes.
    active: String,
}

impl Default for ThemeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ThemeRegistry {
    pub const BUILTIN_DARK: &'static str = "dark";

    pub fn new() -> Self {
        Self {
            themes: IndexMap::from([(
                Self::BUILTIN_DARK.to_owned(),
                Arc::new(Theme::dark().clone()),
            )]),
            active: Self::BUILTIN_DARK.to_owned(),
        }
    }

    /// Adds or replaces the theme called `name`, returning the old one.
    pub fn register(&mut self, name: impl Into<String>, theme: Theme) -> Option<Arc<Theme>> {
        let name = name.into();
        tracing::debug!(%name, "registering theme");
        self.themes.insert(name, Arc::new(theme))
    }

    /// Loads a theme file and registers it as `name`.
    pub fn register_path(
        &mut self,
        name: impl Into<String>,
        path: impl AsRef<Path>,
    ) -> Result<(), ThemeError> {
        let theme = Theme::from_path(path)?;
        self.register(name, theme);
        Ok(())
    }

    pub fn activate(&mut self, name: &str) -> Result<(), RegistryError> {
        if !self.themes.contains_key(name) {
            tracing::warn!(%name, "tried to activate an unregistered theme");
            return Err(RegistryError::UnknownTheme(name.to_owned()));
        }

        tracing::debug!(%name, "activating theme");
        self.active = name.to_owned();
        Ok(())
    }

    pub fn active_name(&self) -> &str {
        &self.active
    }

    /// A shared handle to the active theme, for handing to other threads.
    pub fn active(&self) -> Arc<Theme> {
        Arc::clone(&self.themes[self.active.as_str()])
    }

    pub fn get(&self, name: &str) -> Option<&Arc<Theme>> {
        self.themes.get(name)
    }

    /// Registered names, in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.themes.keys().map(String::as_str)
    }
}

impl ThemeExt for ThemeRegistry {
    /// Replaces the theme registered under the active name.
    fn set_theme<T: AsRef<Theme>>(&mut self, theme: T) {
        tracing::debug!(name = %self.active, "replacing active theme");
        self.themes
            .insert(self.active.clone(), Arc::new(theme.as_ref().clone()));
    }

    fn get_theme(&self) -> &Theme {
        &self.themes[self.active.as_str()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::{Algorithm, DARK_THEME, px};

    fn compact_theme() -> Theme {
        let mut theme = Theme::dark().clone();
        theme.algorithm = Algorithm::Compact;
        theme.token.padding_lg = px(40.);
        theme
    }

    #[test]
    fn test_starts_with_builtin_dark() {
        let registry = ThemeRegistry::new();

        assert_eq!(registry.active_name(), ThemeRegistry::BUILTIN_DARK);
        assert_eq!(registry.get_theme(), Theme::dark());
        assert_eq!(registry.names().collect::<Vec<_>>(), ["dark"]);
    }

    #[test]
    fn test_register_and_activate() {
        let mut registry = ThemeRegistry::new();
        assert!(registry.register("compact", compact_theme()).is_none());

        registry.activate("compact").unwrap();

        assert_eq!(registry.get_theme().algorithm, Algorithm::Compact);
        assert_eq!(registry.active().token.padding_lg, px(40.));
        assert_eq!(registry.names().collect::<Vec<_>>(), ["dark", "compact"]);
    }

    #[test]
    fn test_activate_unknown_theme() {
        let mut registry = ThemeRegistry::new();

        assert_eq!(
            registry.activate("solarized"),
            Err(RegistryError::UnknownTheme("solarized".into()))
        );
        assert_eq!(registry.active_name(), "dark");
    }

    #[test]
    fn test_set_theme_leaves_builtin_untouched() {
        let mut registry = ThemeRegistry::new();
        let before = registry.active();

        registry.set_theme(compact_theme());

        assert_eq!(registry.get_theme().algorithm, Algorithm::Compact);
        assert_eq!(before.algorithm, Algorithm::Dark);
        assert_eq!(Theme::dark().algorithm, Algorithm::Dark);

        registry.set_theme(&DARK_THEME);
        assert_eq!(registry.get_theme(), Theme::dark());
    }

    #[test]
    fn test_active_theme_follows_replacements() {
        let mut registry = ThemeRegistry::new();
        registry.register("compact", compact_theme());
        registry.activate("compact").unwrap();

        let old = registry.register("compact", Theme::dark().clone()).unwrap();

        assert_eq!(old.algorithm, Algorithm::Compact);
        assert_eq!(registry.active_name(), "compact");
        assert_eq!(registry.get_theme(), Theme::dark());
        assert!(Arc::ptr_eq(&registry.active(), registry.get("compact").unwrap()));
    }

    #[test]
    fn test_register_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("compact.json");
        std::fs::write(&path, compact_theme().to_json_string_pretty().unwrap()).unwrap();

        let mut registry = ThemeRegistry::new();
        registry.register_path("compact", &path).unwrap();

        assert_eq!(**registry.get("compact").unwrap(), compact_theme());
    }

    #[test]
    fn test_register_path_rejects_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{ \"token\": {} }").unwrap();

        let mut registry = ThemeRegistry::new();
        let err = registry.register_path("broken", &path).unwrap_err();

        assert!(matches!(err, ThemeError::Parse(_)));
        assert!(registry.get("broken").is_none());
    }
}
