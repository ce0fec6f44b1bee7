/// Declares a token set where every key is required.
///
/// Generates the struct (with the wire name of each field), a `KEYS` table
/// in declaration order, `entries()` and `get()`.
macro_rules! token_set {
    (
        $(#[$meta:meta])*
        pub struct $name:ident {
            $( $(#[$field_meta:meta])* $field:ident : $ty:ty = $key:literal ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
        #[serde(deny_unknown_fields)]
        pub struct $name {
            $(
                $(#[$field_meta])*
                #[serde(rename = $key)]
                pub $field: $ty,
            )*
        }

        impl $name {
            pub const KEYS: &'static [&'static str] = &[$($key),*];

            pub fn entries(&self) -> IndexMap<&'static str, TokenValue> {
                IndexMap::from([
                    $( ($key, TokenValue::from(self.$field.clone())), )*
                ])
            }

            pub fn get(&self, key: &str) -> Option<TokenValue> {
                match key {
                    $( $key => Some(TokenValue::from(self.$field.clone())), )*
                    _ => None,
                }
            }
        }
    };
}

/// Declares a per-widget override set where every key is optional.
///
/// Unset keys are left out of the serialized form, and each field gets a
/// chainable setter of the same name for authoring overrides in code.
macro_rules! component_overrides {
    (
        $(#[$meta:meta])*
        pub struct $name:ident {
            $( $field:ident : $ty:ty = $key:literal ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
        #[serde(deny_unknown_fields)]
        pub struct $name {
            $(
                #[serde(rename = $key, default, skip_serializing_if = "Option::is_none")]
                pub $field: Option<$ty>,
            )*
        }

        impl $name {
            pub const KEYS: &'static [&'static str] = &[$($key),*];

            $(
                pub fn $field(mut self, value: impl Into<$ty>) -> Self {
                    self.$field = Some(value.into());
                    self
                }
            )*

            /// The keys this override sets, in declaration order.
            pub fn entries(&self) -> IndexMap<&'static str, TokenValue> {
                let mut entries = IndexMap::new();
                $(
                    if let Some(value) = &self.$field {
                        entries.insert($key, TokenValue::from(value.clone()));
                    }
                )*
                entries
            }

            pub fn get(&self, key: &str) -> Option<TokenValue> {
                match key {
                    $( $key => self.$field.clone().map(TokenValue::from), )*
                    _ => None,
                }
            }

            pub fn is_empty(&self) -> bool {
                true $( && self.$field.is_none() )*
            }
        }
    };
}

pub(crate) use {component_overrides, token_set};
