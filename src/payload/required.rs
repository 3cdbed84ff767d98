use serde::{Deserialize, Deserializer, Serialize, Serializer, ser::Error as _};

/// A payload field that must hold a value whenever the payload crosses the
/// wire boundary.
///
/// A `Required<T>` may be left unset while a payload is being assembled, and a
/// peer may leave it unset by omitting the key or sending `null`. Either way
/// the owning payload fails validation and names the field by its wire name.
///
/// The owning struct should mark the field `#[serde(default)]` so that an
/// omitted key deserializes as unset rather than as a serde error.
///
/// Serializing an unset field is an error, so `null` is never written in its
/// place even when validation is bypassed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Required<T>(Option<T>);

impl<T> Required<T> {
    /// Creates a field holding `value`.
    pub const fn new(value: T) -> Self {
        Self(Some(value))
    }

    /// Creates a field with no value.
    pub const fn unset() -> Self {
        Self(None)
    }

    pub const fn is_present(&self) -> bool {
        self.0.is_some()
    }

    pub fn get(&self) -> Option<&T> {
        self.0.as_ref()
    }

    pub fn get_mut(&mut self) -> Option<&mut T> {
        self.0.as_mut()
    }

    pub fn set(&mut self, value: T) {
        self.0 = Some(value);
    }

    /// Removes the value, leaving the field unset.
    pub fn take(&mut self) -> Option<T> {
        self.0.take()
    }

    pub fn into_option(self) -> Option<T> {
        self.0
    }
}

impl<T> Default for Required<T> {
    fn default() -> Self {
        Self::unset()
    }
}

impl<T> From<T> for Required<T> {
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

impl<T> From<Option<T>> for Required<T> {
    fn from(value: Option<T>) -> Self {
        Self(value)
    }
}

impl<T: Serialize> Serialize for Required<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match &self.0 {
            Some(value) => value.serialize(serializer),
            None => Err(S::Error::custom("required field holds no value")),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Required<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<T>::deserialize(deserializer).map(Self)
    }
}
