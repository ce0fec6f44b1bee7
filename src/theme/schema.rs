use std::{
    fmt,
    fs::File,
    io::{BufReader, Read},
    ops::Deref,
    path::Path,
    sync::LazyLock,
};

use enum_assoc::Assoc;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::theme::{ComponentKind, ComponentOverrides, GlobalToken, ThemeError, TokenValue};

/// A complete theme: global tokens, per-widget overrides and the color
/// algorithm the rendering layer runs before applying them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Theme {
    pub token: GlobalToken,
    #[serde(default)]
    pub components: ComponentOverrides,
    pub algorithm: Algorithm,
}

macro_rules! generate_builtin_themes {
    ( $( [$path:literal, $name:ident] ),+ ) => {
        $(
            pub static $name: LazyLockTheme = LazyLockTheme::new(|| {
                tracing::debug!(source = $path, "parsing built-in theme");
                Theme::from_string(include_str!($path))
                    .expect(concat!("built-in theme ", $path, " is valid"))
            });
        )+
    };
}

generate_builtin_themes!(["../../themes/dark.json", DARK_THEME]);

/// A theme parsed on first access and shared for the rest of the process.
pub struct LazyLockTheme(LazyLock<Theme>);

impl LazyLockTheme {
    #[inline(always)]
    const fn new(f: fn() -> Theme) -> Self {
        Self(LazyLock::new(f))
    }
}

impl Deref for LazyLockTheme {
    type Target = Theme;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<Theme> for LazyLockTheme {
    fn as_ref(&self) -> &Theme {
        &self.0
    }
}

impl AsRef<Theme> for Theme {
    fn as_ref(&self) -> &Theme {
        self
    }
}

impl Theme {
    /// The built-in dark theme. Every call returns the same instance.
    pub fn dark() -> &'static Theme {
        &DARK_THEME
    }

    /// Parses and validates a theme from JSON.
    pub fn from_string<S: AsRef<str>>(str: S) -> Result<Theme, ThemeError> {
        let theme: Theme = serde_json::from_str(str.as_ref())?;
        theme.validated()
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Theme, ThemeError> {
        let theme: Theme = serde_json::from_reader(reader)?;
        theme.validated()
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Theme, ThemeError> {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), "loading theme file");

        let file = File::open(path).map_err(|source| ThemeError::Io {
            path: path.to_owned(),
            source,
        })?;

        Self::from_reader(BufReader::new(file))
            .inspect_err(|err| tracing::warn!(path = %path.display(), %err, "rejected theme file"))
    }

    fn validated(self) -> Result<Theme, ThemeError> {
        if let Err(errors) = self.validate() {
            tracing::warn!(count = errors.len(), "theme failed validation");
            return Err(errors.into());
        }

        Ok(self)
    }

    /// The theme in the rendering layer's wire form.
    pub fn to_json_value(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(self)
    }

    pub fn to_json_string_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Every token `kind` sees: the global set with the widget's overrides
    /// laid over it. Overridden keys keep their global position.
    pub fn effective_tokens(&self, kind: ComponentKind) -> IndexMap<&'static str, TokenValue> {
        let mut tokens = self.token.entries();
        tokens.extend(kind.overrides(self));
        tokens
    }

    /// The value `kind` renders with for `key`: its override if it sets
    /// one, otherwise the global token.
    pub fn resolve_token(&self, kind: ComponentKind, key: &str) -> Option<TokenValue> {
        self.components
            .get(kind, key)
            .or_else(|| self.token.get(key))
    }
}

/// The base palette derivation the rendering layer applies before the
/// explicit tokens.
#[derive(Assoc, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[func(pub fn as_str(&self) -> &'static str)]
#[func(pub fn is_dark(&self) -> bool)]
pub enum Algorithm {
    #[assoc(as_str = "dark")]
    #[assoc(is_dark = true)]
    Dark,
    #[assoc(as_str = "light")]
    #[assoc(is_dark = false)]
    Light,
    #[assoc(as_str = "compact")]
    #[assoc(is_dark = false)]
    Compact,
}

impl Algorithm {
    pub const ALL: [Algorithm; 3] = [Self::Dark, Self::Light, Self::Compact];
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
