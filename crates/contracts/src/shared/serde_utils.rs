use serde::{Deserialize, Deserializer};

/// Decodes `null` as the type's default value.
///
/// The backend serializes empty collections as `null`, which `#[serde(default)]`
/// alone does not cover.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
