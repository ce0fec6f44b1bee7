use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer, ser::Error as _};

use crate::deserializers::de_pixels;

/// A length in CSS pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd)]
pub struct Px(pub f32);

pub const fn px(value: f32) -> Px {
    Px(value)
}

impl Px {
    pub const ZERO: Px = Px(0.);

    pub fn get(self) -> f32 {
        self.0
    }

    pub fn is_non_negative(self) -> bool {
        self.0 >= 0.
    }
}

impl From<f32> for Px {
    fn from(value: f32) -> Self {
        Px(value)
    }
}

impl fmt::Display for Px {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}px", self.0)
    }
}

impl Serialize for Px {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if !self.0.is_finite() {
            return Err(S::Error::custom(format!(
                "pixel values must be finite, got {}",
                self.0
            )));
        }

        // Whole pixel values go out as integers so consumers see `40`, not `40.0`.
        if self.0.fract() == 0. && self.0.abs() < i32::MAX as f32 {
            serializer.serialize_i32(self.0 as i32)
        } else {
            serializer.serialize_f32(self.0)
        }
    }
}

impl<'de> Deserialize<'de> for Px {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        de_pixels(deserializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whole_pixels_serialize_as_integers() {
        assert_eq!(serde_json::to_string(&px(40.)).unwrap(), "40");
        assert_eq!(serde_json::to_string(&px(0.)).unwrap(), "0");
        assert_eq!(serde_json::to_string(&px(-4.)).unwrap(), "-4");
    }

    #[test]
    fn test_fractional_pixels_serialize_as_floats() {
        assert_eq!(serde_json::to_string(&px(12.5)).unwrap(), "12.5");
    }

    #[test]
    fn test_non_finite_pixels_fail_to_serialize() {
        for value in [f32::NAN, f32::INFINITY, f32::NEG_INFINITY] {
            let err = serde_json::to_string(&px(value)).unwrap_err();
            assert!(err.to_string().contains("finite"), "{value} was accepted");
        }
    }

    #[test]
    fn test_ordering() {
        assert!(px(8.) < px(12.));
        assert!(px(0.).is_non_negative());
        assert!(!px(-1.).is_non_negative());
    }

    #[test]
    fn test_display() {
        assert_eq!(px(16.).to_string(), "16px");
    }
}
