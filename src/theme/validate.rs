use std::fmt;

use indexmap::IndexMap;
use thiserror::Error;

use crate::theme::{ComponentKind, MarginKind, PaddingKind, Px, Theme, TokenValue};

/// A single property a theme violates.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("{scope}.{key} is not a finite number")]
    NotFinite {
        scope: &'static str,
        key: &'static str,
    },
    #[error("{scope}.{key} is negative ({value})")]
    Negative {
        scope: &'static str,
        key: &'static str,
        value: f32,
    },
    #[error("{smaller} ({smaller_value}) is larger than {larger} ({larger_value})")]
    NotMonotonic {
        smaller: &'static str,
        smaller_value: f32,
        larger: &'static str,
        larger_value: f32,
    },
}

/// Every violation found in one pass, in the order they were found.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationErrors(Vec<ValidationError>);

impl ValidationErrors {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ValidationError> {
        self.0.iter()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (ix, error) in self.0.iter().enumerate() {
            if ix > 0 {
                f.write_str("\n")?;
            }
            write!(f, "  - {error}")?;
        }

        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

impl Theme {
    /// Checks that every scalar token and override is finite and
    /// non-negative, and that the margin and padding scales never shrink
    /// from one step to the next.
    ///
    /// Colors, font weights and key names are checked when parsing, so they
    /// can't be wrong here.
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = Vec::new();

        check_scalars("token", self.token.entries(), &mut errors);

        for kind in ComponentKind::ALL {
            check_scalars(kind.name(), kind.overrides(self), &mut errors);
        }

        check_scale(
            MarginKind::SCALE.map(|kind| (kind.key(), *kind.resolve(self))),
            &mut errors,
        );
        check_scale(
            PaddingKind::SCALE.map(|kind| (kind.key(), *kind.resolve(self))),
            &mut errors,
        );

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationErrors(errors))
        }
    }
}

fn check_scalars(
    scope: &'static str,
    entries: IndexMap<&'static str, TokenValue>,
    errors: &mut Vec<ValidationError>,
) {
    for (key, value) in entries {
        let Some(number) = value.as_f32() else {
            continue;
        };

        if !number.is_finite() {
            errors.push(ValidationError::NotFinite { scope, key });
        } else if number < 0. {
            errors.push(ValidationError::Negative {
                scope,
                key,
                value: number,
            });
        }
    }
}

fn check_scale<const N: usize>(steps: [(&'static str, Px); N], errors: &mut Vec<ValidationError>) {
    for pair in steps.windows(2) {
        let [(smaller, smaller_value), (larger, larger_value)] = pair else {
            continue;
        };

        if smaller_value > larger_value {
            errors.push(ValidationError::NotMonotonic {
                smaller: *smaller,
                smaller_value: smaller_value.get(),
                larger: *larger,
                larger_value: larger_value.get(),
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::{ButtonToken, px};

    #[test]
    fn test_dark_theme_is_valid() {
        assert_eq!(Theme::dark().validate(), Ok(()));
    }

    #[test]
    fn test_all_colors_use_hex_or_rgba() {
        let theme = Theme::dark();

        let mut values: Vec<TokenValue> = theme.token.entries().into_values().collect();
        for kind in ComponentKind::ALL {
            values.extend(kind.overrides(theme).into_values());
        }

        for color in values.iter().filter_map(TokenValue::as_color) {
            let text = color.to_string();
            assert!(
                (text.starts_with('#') && text.len() == 7) || text.starts_with("rgba("),
                "unexpected color syntax {text}"
            );
            assert!((0.0..=1.0).contains(&color.a));
        }
    }

    #[test]
    fn test_reports_negative_tokens() {
        let mut theme = Theme::dark().clone();
        theme.token.border_radius_sm = px(-2.);
        theme.components.badge.dot_size = Some(px(-1.));

        let errors = theme.validate().unwrap_err();
        assert_eq!(
            errors.iter().cloned().collect::<Vec<_>>(),
            [
                ValidationError::Negative {
                    scope: "token",
                    key: "borderRadiusSM",
                    value: -2.,
                },
                ValidationError::Negative {
                    scope: "Badge",
                    key: "dotSize",
                    value: -1.,
                },
            ]
        );
    }

    #[test]
    fn test_reports_negative_ratio() {
        let mut theme = Theme::dark().clone();
        theme.token.line_height = -1.5;

        let errors = theme.validate().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors.to_string(),
            "  - token.lineHeight is negative (-1.5)"
        );
    }

    #[test]
    fn test_reports_non_finite_values() {
        let mut theme = Theme::dark().clone();
        theme.components.button = ButtonToken::default().control_height(px(f32::NAN));

        let errors = theme.validate().unwrap_err();
        assert_eq!(
            errors.iter().cloned().collect::<Vec<_>>(),
            [ValidationError::NotFinite {
                scope: "Button",
                key: "controlHeight",
            }]
        );
    }

    #[test]
    fn test_reports_shrinking_padding_scale() {
        let mut theme = Theme::dark().clone();
        theme.token.padding_sm = px(2.);

        let errors = theme.validate().unwrap_err();
        assert_eq!(
            errors.iter().cloned().collect::<Vec<_>>(),
            [ValidationError::NotMonotonic {
                smaller: "paddingXS",
                smaller_value: 4.,
                larger: "paddingSM",
                larger_value: 2.,
            }]
        );
    }

    #[test]
    fn test_equal_steps_are_allowed() {
        let mut theme = Theme::dark().clone();
        theme.token.margin_md = theme.token.margin;

        assert!(theme.validate().is_ok());
    }

    #[test]
    fn test_display_lists_every_error() {
        let mut theme = Theme::dark().clone();
        theme.token.margin_xs = px(-8.);
        theme.token.margin_xl = px(0.);

        let errors = theme.validate().unwrap_err();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors.to_string().lines().count(), 2);
    }
}
