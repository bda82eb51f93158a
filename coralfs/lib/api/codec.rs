use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

//--------------------------------------------------------------------------------------------------
// Traits
//--------------------------------------------------------------------------------------------------

/// Semantic emptiness of a decoded wire value.
///
/// The appliance signals "no value" for object-typed fields with an empty
/// placeholder object instead of omitting the key, and sometimes answers with
/// objects whose every field is absent. Types implementing this trait define
/// what "carries no information" means for themselves so the decoder can map
/// such values back to field absence.
pub trait WireEmpty {
    /// Returns true when the value carries no information.
    fn is_wire_empty(&self) -> bool;
}

//--------------------------------------------------------------------------------------------------
// Functions
//--------------------------------------------------------------------------------------------------

/// Decodes an optional object-typed field, normalizing the appliance's
/// absence conventions to `None`.
///
/// The raw wire value is staged first: the empty-object literal short-circuits
/// to absence without any structural decode. A value that decodes to a
/// semantically empty result is also absent, as is a value that fails
/// structural decode entirely; a malformed sub-object must not fail the
/// enclosing entity.
pub(crate) fn absent_if_empty<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + WireEmpty,
{
    let staged = Value::deserialize(deserializer)?;

    if staged.as_object().map_or(false, |fields| fields.is_empty()) {
        return Ok(None);
    }

    match serde_json::from_value::<T>(staged) {
        Ok(value) if value.is_wire_empty() => Ok(None),
        Ok(value) => Ok(Some(value)),
        Err(err) => {
            tracing::debug!("discarding undecodable sub-object: {err}");
            Ok(None)
        }
    }
}

/// Decodes an optional list-typed field, treating an empty or undecodable
/// list as absent.
pub(crate) fn absent_if_no_entries<'de, D, T>(deserializer: D) -> Result<Option<Vec<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let staged = Value::deserialize(deserializer)?;

    match serde_json::from_value::<Vec<T>>(staged) {
        Ok(entries) if entries.is_empty() => Ok(None),
        Ok(entries) => Ok(Some(entries)),
        Err(err) => {
            tracing::debug!("discarding undecodable list: {err}");
            Ok(None)
        }
    }
}

//--------------------------------------------------------------------------------------------------
// Tests
//--------------------------------------------------------------------------------------------------
