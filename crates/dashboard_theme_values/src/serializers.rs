use serde::{Serializer, ser::Error as _};

/// Serializes a unitless ratio, rejecting NaN and infinities, which JSON
/// can't represent and `serde_json` would otherwise write as `null`.
pub fn ser_ratio<S: Serializer>(value: &f32, serializer: S) -> Result<S::Ok, S::Error> {
    if !value.is_finite() {
        return Err(S::Error::custom(format!("ratio must be finite, got {value}")));
    }
    serializer.serialize_f32(*value)
}
