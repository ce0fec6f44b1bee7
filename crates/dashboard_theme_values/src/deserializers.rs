use serde::{Deserialize, Deserializer, de::Error};
use smallvec::SmallVec;

use crate::{FontWeight, Px, px};

pub type FamilyList = SmallVec<[String; 4]>;

/// Accepts either a CSS `font-family` string or a JSON list of names.
pub fn de_string_or_non_empty_list<'de, D>(deserializer: D) -> Result<FamilyList, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StringOrVec {
        One(String),
        Many(FamilyList),
    }

    let names: FamilyList = match StringOrVec::deserialize(deserializer)? {
        StringOrVec::One(string) => split_family_list(&string).map_err(D::Error::custom)?,
        StringOrVec::Many(vec) => vec.iter().map(|name| name.trim().to_owned()).collect(),
    };

    if names.is_empty() {
        return Err(D::Error::custom("list can't be empty."));
    }

    if names.iter().any(|name| name.is_empty()) {
        return Err(D::Error::custom("font family names can't be empty."));
    }

    Ok(names)
}

/// Splits a CSS `font-family` value into names.
///
/// Names may be bare or wrapped in single or double quotes. Commas inside
/// quotes belong to the name, and `\` escapes the next character.
pub(crate) fn split_family_list(css: &str) -> Result<FamilyList, &'static str> {
    let mut names = FamilyList::new();
    if css.trim().is_empty() {
        return Ok(names);
    }

    let mut chars = css.chars().peekable();
    loop {
        while chars.next_if(|c| c.is_whitespace()).is_some() {}

        let name = match chars.peek() {
            Some(&quote) if quote == '\'' || quote == '"' => {
                chars.next();

                let mut name = String::new();
                loop {
                    match chars.next() {
                        Some('\\') => {
                            let escaped = chars.next().ok_or("dangling escape in font family")?;
                            name.push(escaped);
                        }
                        Some(c) if c == quote => break,
                        Some(c) => name.push(c),
                        None => return Err("unterminated quote in font family"),
                    }
                }

                while chars.next_if(|c| c.is_whitespace()).is_some() {}
                if !matches!(chars.peek(), None | Some(&',')) {
                    return Err("unexpected text after quoted font family");
                }

                name
            }

            _ => {
                let mut name = String::new();
                while let Some(c) = chars.next_if(|&c| c != ',') {
                    if c == '\'' || c == '"' {
                        return Err("quote inside an unquoted font family");
                    }
                    name.push(c);
                }

                name.trim_end().to_owned()
            }
        };

        names.push(name);

        // The name ends at a comma or at the end of the input.
        if chars.next().is_none() {
            return Ok(names);
        }
    }
}

pub fn de_pixels<'de, D>(deserializer: D) -> Result<Px, D::Error>
where
    D: Deserializer<'de>,
{
    match StringOrFloat::deserialize(deserializer)? {
        StringOrFloat::String(string) => {
            let string = match string.trim().strip_suffix("px") {
                Some(string) => string,
                None => return Err(D::Error::custom("expected string to end with 'px'")),
            };

            match string.trim().parse::<f32>() {
                Ok(pixels) if pixels.is_finite() => Ok(px(pixels)),
                _ => Err(D::Error::custom("could not convert string into pixels")),
            }
        }

        StringOrFloat::Float(pixels) if pixels.is_finite() => Ok(px(pixels)),

        StringOrFloat::Float(_) => Err(D::Error::custom("pixels must be finite")),
    }
}

pub fn de_font_weight<'de, D>(deserializer: D) -> Result<FontWeight, D::Error>
where
    D: Deserializer<'de>,
{
    let weight = u16::deserialize(deserializer)?;
    FontWeight::try_from(weight).map_err(D::Error::custom)
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrFloat {
    String(String),
    Float(f32),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_family_list() {
        let names =
            split_family_list("'Inter', -apple-system, \"Segoe UI\", sans-serif").unwrap();
        assert_eq!(
            names.as_slice(),
            ["Inter", "-apple-system", "Segoe UI", "sans-serif"]
        );
    }

    #[test]
    fn test_split_keeps_commas_inside_quotes() {
        let names = split_family_list("'Foo, Bar', serif").unwrap();
        assert_eq!(names.as_slice(), ["Foo, Bar", "serif"]);

        let names = split_family_list(r#""A, B" , 'O\'Neil Sans'"#).unwrap();
        assert_eq!(names.as_slice(), ["A, B", "O'Neil Sans"]);
    }

    #[test]
    fn test_split_rejects_malformed_quotes() {
        assert!(split_family_list("'Foo, Bar").is_err());
        assert!(split_family_list("'Foo' Bar, serif").is_err());
        assert!(split_family_list("Foo'Bar").is_err());
        assert!(split_family_list("'Foo\\").is_err());
    }

    #[test]
    fn test_split_empty_family_list() {
        assert!(split_family_list("  ").unwrap().is_empty());
        assert_eq!(
            split_family_list("Inter,,Roboto").unwrap().as_slice(),
            ["Inter", "", "Roboto"]
        );
    }

    #[test]
    fn test_de_pixels_number_and_string() {
        let mut de = serde_json::Deserializer::from_str("40");
        assert_eq!(de_pixels(&mut de).unwrap(), px(40.));

        let mut de = serde_json::Deserializer::from_str("\"12.5px\"");
        assert_eq!(de_pixels(&mut de).unwrap(), px(12.5));
    }

    #[test]
    fn test_de_pixels_rejects_unitless_string() {
        let mut de = serde_json::Deserializer::from_str("\"12\"");
        assert!(de_pixels(&mut de).is_err());

        let mut de = serde_json::Deserializer::from_str("\"1rem\"");
        assert!(de_pixels(&mut de).is_err());
    }

    #[test]
    fn test_de_font_weight_range() {
        let mut de = serde_json::Deserializer::from_str("700");
        assert_eq!(de_font_weight(&mut de).unwrap(), FontWeight::BOLD);

        let mut de = serde_json::Deserializer::from_str("0");
        assert!(de_font_weight(&mut de).is_err());
    }
}
