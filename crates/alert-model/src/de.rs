//! Deserialization Helpers

use serde::{Deserialize, Deserializer};

/// Read an explicit `null` as the field's default value.
///
/// API snapshots write empty lists and unset fields as `null`.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
