//! A JSON field that can be missing, explicitly `null`, or set.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Three-state optional field.
///
/// Use with `#[serde(default, skip_serializing_if = "Field::is_absent")]`
/// so a missing key deserializes to `Absent` and is skipped again on output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Field<T> {
    Absent,
    Null,
    Present(T),
}

impl<T> Field<T> {
    pub fn is_absent(&self) -> bool {
        matches!(self, Field::Absent)
    }

    pub fn is_present(&self) -> bool {
        matches!(self, Field::Present(_))
    }

    pub fn as_ref(&self) -> Field<&T> {
        match self {
            Field::Absent => Field::Absent,
            Field::Null => Field::Null,
            Field::Present(value) => Field::Present(value),
        }
    }

    /// Collapse to an `Option`, losing the absent/null distinction.
    pub fn into_option(self) -> Option<T> {
        match self {
            Field::Present(value) => Some(value),
            Field::Absent | Field::Null => None,
        }
    }
}

impl<T> Default for Field<T> {
    fn default() -> Self {
        Field::Absent
    }
}

impl<T> From<Option<T>> for Field<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Field::Present(value),
            None => Field::Null,
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Field<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // Only called when the key exists; a missing key goes through Default.
        Option::<T>::deserialize(deserializer).map(Field::from)
    }
}

impl<T: Serialize> Serialize for Field<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Field::Present(value) => value.serialize(serializer),
            Field::Absent | Field::Null => serializer.serialize_none(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Holder {
        #[serde(default)]
        value: Field<u32>,
    }

    #[test]
    fn test_three_states() {
        let absent: Holder = serde_json::from_str("{}").unwrap();
        let null: Holder = serde_json::from_str(r#"{"value":null}"#).unwrap();
        let set: Holder = serde_json::from_str(r#"{"value":3}"#).unwrap();

        assert_eq!(absent.value, Field::Absent);
        assert_eq!(null.value, Field::Null);
        assert_eq!(set.value, Field::Present(3));
    }

    #[test]
    fn test_into_option() {
        assert_eq!(Field::<u32>::Absent.into_option(), None);
        assert_eq!(Field::<u32>::Null.into_option(), None);
        assert_eq!(Field::Present(1).into_option(), Some(1));
        assert_eq!(Field::Present(1).as_ref(), Field::Present(&1));
    }
}
