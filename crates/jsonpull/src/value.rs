//! The value tree and its object type.

use std::collections::{BTreeMap, btree_map};

use bstr::{BStr, BString};
use thiserror::Error;

/// An ordered sequence of values.
pub type Array = Vec<Value>;

/// A parsed value, one variant per grammar alternative.
///
/// `Number` keeps the raw digit run rather than a machine numeric type, so
/// arbitrarily long numbers survive a parse unchanged. `String` is a byte
/// string: input is not required to be UTF-8.
///
/// Values are immutable once constructed and ownership is tree-shaped: a
/// parent [`Object`] or [`Array`] exclusively owns its children.
///
/// # Examples
///
/// ```
/// use jsonpull::{Value, parse_bytes};
///
/// let value = parse_bytes(b"[null, 7]").unwrap();
/// assert_eq!(
///     value,
///     Value::Array(vec![Value::Null, Value::Number("7".into())])
/// );
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Value {
    /// The `null` literal.
    Null,
    /// `true` or `false`.
    Boolean(bool),
    /// A run of decimal digits, kept as text.
    Number(String),
    /// A quoted string, as raw bytes.
    String(BString),
    /// An ordered sequence of values.
    Array(Array),
    /// String keys mapping to values.
    Object(Object),
}

impl Default for Value {
    fn default() -> Self {
        Self::Null
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Boolean(v)
    }
}

impl From<BString> for Value {
    fn from(v: BString) -> Self {
        Self::String(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(v.into())
    }
}

impl From<Array> for Value {
    fn from(v: Array) -> Self {
        Self::Array(v)
    }
}

impl From<Object> for Value {
    fn from(v: Object) -> Self {
        Self::Object(v)
    }
}

impl Value {
    /// Returns `true` if the value is [`Null`].
    ///
    /// [`Null`]: Value::Null
    ///
    /// # Examples
    ///
    /// ```
    /// use jsonpull::Value;
    ///
    /// assert!(Value::Null.is_null());
    /// assert!(!Value::Boolean(false).is_null());
    /// ```
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns `true` if the value is [`Boolean`](Value::Boolean).
    #[must_use]
    pub fn is_bool(&self) -> bool {
        matches!(self, Self::Boolean(..))
    }

    /// Returns `true` if the value is [`Number`](Value::Number).
    #[must_use]
    pub fn is_number(&self) -> bool {
        matches!(self, Self::Number(..))
    }

    /// Returns `true` if the value is [`String`](Value::String).
    #[must_use]
    pub fn is_string(&self) -> bool {
        matches!(self, Self::String(..))
    }

    /// Returns `true` if the value is [`Array`](Value::Array).
    #[must_use]
    pub fn is_array(&self) -> bool {
        matches!(self, Self::Array(..))
    }

    /// Returns `true` if the value is [`Object`](Value::Object).
    #[must_use]
    pub fn is_object(&self) -> bool {
        matches!(self, Self::Object(..))
    }
}

/// Rejected insert: the key is already present in the object.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("duplicate object key {0:?}")]
pub struct DuplicateKeyError(
    /// The rejected key.
    pub BString,
);

/// A mapping from string keys to values.
///
/// Keys are unique: [`insert`](Object::insert) rejects a duplicate key
/// outright rather than overwriting the existing pair or silently dropping
/// the new one.
///
/// # Examples
///
/// ```
/// use jsonpull::{Object, Value};
///
/// let mut object = Object::new();
/// object.insert("a", Value::Null).unwrap();
/// assert!(object.insert("a", Value::Boolean(true)).is_err());
/// assert_eq!(object.get("a"), Some(&Value::Null));
/// ```
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Object {
    entries: BTreeMap<BString, Value>,
}

impl Object {
    /// Creates an empty object.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `key` mapping to `value`.
    ///
    /// # Errors
    ///
    /// Fails if `key` is already present; the object is unchanged.
    pub fn insert(
        &mut self,
        key: impl Into<BString>,
        value: Value,
    ) -> Result<(), DuplicateKeyError> {
        match self.entries.entry(key.into()) {
            btree_map::Entry::Occupied(slot) => Err(DuplicateKeyError(slot.key().clone())),
            btree_map::Entry::Vacant(slot) => {
                slot.insert(value);
                Ok(())
            }
        }
    }

    /// Looks up the value under `key`.
    #[must_use]
    pub fn get(&self, key: impl AsRef<[u8]>) -> Option<&Value> {
        self.entries.get(BStr::new(key.as_ref()))
    }

    /// Returns `true` if `key` is present.
    #[must_use]
    pub fn contains_key(&self, key: impl AsRef<[u8]>) -> bool {
        self.entries.contains_key(BStr::new(key.as_ref()))
    }

    /// Number of key/value pairs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the object holds no pairs.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates pairs in key order.
    pub fn iter(&self) -> btree_map::Iter<'_, BString, Value> {
        self.entries.iter()
    }

    /// Iterates keys in order.
    pub fn keys(&self) -> btree_map::Keys<'_, BString, Value> {
        self.entries.keys()
    }
}

impl<'a> IntoIterator for &'a Object {
    type Item = (&'a BString, &'a Value);
    type IntoIter = btree_map::Iter<'a, BString, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl IntoIterator for Object {
    type Item = (BString, Value);
    type IntoIter = btree_map::IntoIter<BString, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_rejects_duplicates_and_keeps_the_first_pair() {
        let mut object = Object::new();
        object.insert("k", Value::Number("1".into())).unwrap();
        let err = object.insert("k", Value::Number("2".into())).unwrap_err();
        assert_eq!(err, DuplicateKeyError("k".into()));
        assert_eq!(object.get("k"), Some(&Value::Number("1".into())));
        assert_eq!(object.len(), 1);
    }

    #[test]
    fn empty_key_is_a_key_like_any_other() {
        let mut object = Object::new();
        object.insert("", Value::Null).unwrap();
        assert!(object.contains_key(""));
        assert!(object.insert("", Value::Null).is_err());
    }

    #[test]
    fn iteration_is_key_ordered() {
        let mut object = Object::new();
        object.insert("b", Value::Null).unwrap();
        object.insert("a", Value::Null).unwrap();
        let keys: Vec<_> = object.keys().collect();
        assert_eq!(keys, [&BString::from("a"), &BString::from("b")]);
    }
}
