use std::fmt::{self, Write as _};

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

use crate::deserializers::{FamilyList, de_font_weight, de_string_or_non_empty_list};

/// A numeric CSS font weight in `1..=1000`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FontWeight(u16);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("font weight {0} is outside 1..=1000")]
pub struct FontWeightError(pub u16);

impl FontWeight {
    pub const NORMAL: FontWeight = FontWeight(400);
    pub const SEMIBOLD: FontWeight = FontWeight(600);
    pub const BOLD: FontWeight = FontWeight(700);

    pub fn get(self) -> u16 {
        self.0
    }
}

impl TryFrom<u16> for FontWeight {
    type Error = FontWeightError;

    fn try_from(weight: u16) -> Result<Self, Self::Error> {
        match weight {
            1..=1000 => Ok(FontWeight(weight)),
            _ => Err(FontWeightError(weight)),
        }
    }
}

impl fmt::Display for FontWeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for FontWeight {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u16(self.0)
    }
}

impl<'de> Deserialize<'de> for FontWeight {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        de_font_weight(deserializer)
    }
}

/// An ordered, non-empty `font-family` fallback stack.
#[derive(Debug, Clone, PartialEq)]
pub struct FontFamily {
    names: FamilyList,
}

impl FontFamily {
    /// Returns `None` if `names` is empty or contains an empty name.
    pub fn new<I, S>(names: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: FamilyList = names.into_iter().map(Into::into).collect();

        if names.is_empty() || names.iter().any(|name| name.trim().is_empty()) {
            return None;
        }

        Some(Self { names })
    }

    pub fn primary(&self) -> &str {
        &self.names[0]
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }
}

impl fmt::Display for FontFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (ix, name) in self.names.iter().enumerate() {
            if ix > 0 {
                f.write_str(", ")?;
            }

            if !needs_quotes(name) {
                f.write_str(name)?;
                continue;
            }

            f.write_char('\'')?;
            for c in name.chars() {
                if c == '\'' || c == '\\' {
                    f.write_char('\\')?;
                }
                f.write_char(c)?;
            }
            f.write_char('\'')?;
        }

        Ok(())
    }
}

fn needs_quotes(name: &str) -> bool {
    name.contains(|c: char| c.is_whitespace() || matches!(c, ',' | '\'' | '"' | '\\'))
}

impl Serialize for FontFamily {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for FontFamily {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        de_string_or_non_empty_list(deserializer).map(|names| Self { names })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_font_weight_bounds() {
        assert_eq!(FontWeight::try_from(700), Ok(FontWeight::BOLD));
        assert_eq!(FontWeight::try_from(1001), Err(FontWeightError(1001)));
        assert!(FontWeight::try_from(0).is_err());
    }

    #[test]
    fn test_family_from_css_string() {
        let family: FontFamily =
            serde_json::from_str("\"Inter, 'Segoe UI', sans-serif\"").unwrap();
        assert_eq!(family.primary(), "Inter");
        assert_eq!(family.names().len(), 3);
        assert_eq!(family.to_string(), "Inter, 'Segoe UI', sans-serif");
    }

    #[test]
    fn test_family_from_list() {
        let family: FontFamily = serde_json::from_str(r#"["Segoe UI", "Roboto"]"#).unwrap();
        assert_eq!(
            serde_json::to_string(&family).unwrap(),
            "\"'Segoe UI', Roboto\""
        );
    }

    #[test]
    fn test_family_names_with_commas_survive_export() {
        let family: FontFamily = serde_json::from_str(r#""'Foo, Bar', serif""#).unwrap();
        assert_eq!(family.names(), ["Foo, Bar", "serif"]);

        let family = FontFamily::new(["Foo, Bar"]).unwrap();
        let json = serde_json::to_string(&family).unwrap();
        assert_eq!(json, r#""'Foo, Bar'""#);
        assert_eq!(serde_json::from_str::<FontFamily>(&json).unwrap(), family);
    }

    #[test]
    fn test_family_names_with_quotes_are_escaped() {
        let family = FontFamily::new(["O'Neil Sans", r#"Say "Hi""#, r"Back\Slash"]).unwrap();
        assert_eq!(
            family.to_string(),
            r#"'O\'Neil Sans', 'Say "Hi"', 'Back\\Slash'"#
        );

        let json = serde_json::to_string(&family).unwrap();
        assert_eq!(serde_json::from_str::<FontFamily>(&json).unwrap(), family);
    }

    #[test]
    fn test_family_rejects_unterminated_quote() {
        let err = serde_json::from_str::<FontFamily>(r#""'Foo, serif""#).unwrap_err();
        assert!(err.to_string().contains("unterminated"));
    }

    #[test]
    fn test_family_rejects_empty() {
        assert!(serde_json::from_str::<FontFamily>("[]").is_err());
        assert!(serde_json::from_str::<FontFamily>("\"\"").is_err());
        assert!(serde_json::from_str::<FontFamily>("\"Inter,,Roboto\"").is_err());
        assert!(FontFamily::new(Vec::<String>::new()).is_none());
    }
}
