//! View data: [`Value`] and the [`Data`] mapping.
use std::{cell::RefCell, collections::HashMap, rc::Rc};

use crate::{Error, Result};

/// Shared, mutable container.
///
/// Cloning a [`Value`] that holds a container clones the handle, not the content. A template body
/// that pushes into a list it was given is seen by everyone holding the same list.
pub type Shared<T> = Rc<RefCell<T>>;

/// A value bound to a view.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    List(Shared<Vec<Value>>),
    Map(Shared<Data>),
}

impl Value {
    /// Create a shared list.
    pub fn list(items: impl IntoIterator<Item = impl Into<Value>>) -> Value {
        Value::List(Rc::new(RefCell::new(items.into_iter().map(Into::into).collect())))
    }

    /// Create a shared map.
    pub fn map(data: impl Into<Data>) -> Value {
        Value::Map(Rc::new(RefCell::new(data.into())))
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Truthiness used by `*_when` and `*_unless` helpers.
    ///
    /// `Null`, `false`, zero, empty strings and empty containers are falsy.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Null => false,
            Value::Bool(b) => *b,
            Value::Int(i) => *i != 0,
            Value::Float(f) => *f != 0.0,
            Value::String(s) => !s.is_empty(),
            Value::List(l) => !l.borrow().is_empty(),
            Value::Map(m) => !m.borrow().is_empty(),
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&Shared<Vec<Value>>> {
        match self {
            Value::List(l) => Some(l),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&Shared<Data>> {
        match self {
            Value::Map(m) => Some(m),
            _ => None,
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::Float(value.into())
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_owned())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<Data> for Value {
    fn from(value: Data) -> Self {
        Value::map(value)
    }
}

impl<T> From<Vec<T>> for Value where T: Into<Value> {
    fn from(value: Vec<T>) -> Self {
        Value::list(value)
    }
}

impl<T> From<Option<T>> for Value where T: Into<Value> {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or_default()
    }
}

macro_rules! from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Value {
                fn from(value: $t) -> Self {
                    Value::Int(value.into())
                }
            }
        )*
    };
}

from_int!(u8, u16, u32, i8, i16, i32, i64);

// ===== Data =====

/// String keyed view data.
///
/// Every write funnels into [`Data::set`] or [`Data::merge`], later writes win.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Data(HashMap<String, Value>);

impl Data {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a single key.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(key.into(), value.into());
    }

    /// Right biased union, keys in `other` overwrite keys in `self`.
    pub fn merge(&mut self, other: Data) {
        self.0.extend(other.0);
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        self.0.get_mut(key)
    }

    /// Get a value, reading an unset key is an error.
    pub fn value(&self, key: &str) -> Result<&Value> {
        self.0.get(key).ok_or_else(|| Error::Undefined(key.to_owned()))
    }

    pub fn has(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Remove a key, does nothing if absent.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.0.remove(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<K, V> FromIterator<(K, V)> for Data where K: Into<String>, V: Into<Value> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for Data where K: Into<String>, V: Into<Value> {
    fn from(value: [(K, V); N]) -> Self {
        value.into_iter().collect()
    }
}

impl IntoIterator for Data {
    type Item = (String, Value);
    type IntoIter = std::collections::hash_map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// Types that convert into [`Data`] for bulk merging.
///
/// Implemented by `#[derive(Data)]`.
pub trait IntoData {
    fn into_data(self) -> Data;
}

impl IntoData for Data {
    fn into_data(self) -> Data {
        self
    }
}

impl IntoData for () {
    fn into_data(self) -> Data {
        Data::new()
    }
}

impl<K, V, const N: usize> IntoData for [(K, V); N] where K: Into<String>, V: Into<Value> {
    fn into_data(self) -> Data {
        self.into()
    }
}

impl<K, V> IntoData for Vec<(K, V)> where K: Into<String>, V: Into<Value> {
    fn into_data(self) -> Data {
        self.into_iter().collect()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn right_biased_merge() {
        let mut data = Data::new();
        data.merge(Data::from([("a", 1)]));
        data.merge(Data::from([("b", 2)]));
        data.merge(Data::from([("a", 3)]));

        assert_eq!(data, Data::from([("a", 3), ("b", 2)]));
    }

    #[test]
    fn undefined_key() {
        let data = Data::from([("a", "x")]);
        assert_eq!(data.value("a").unwrap().as_str(), Some("x"));
        assert!(matches!(data.value("b"), Err(Error::Undefined(key)) if key == "b"));
    }

    #[test]
    fn containers_are_shared() {
        let list = Value::list([1, 2]);
        let copy = list.clone();
        copy.as_list().unwrap().borrow_mut().push(3.into());

        assert_eq!(list, Value::list([1, 2, 3]));
    }

    #[test]
    fn truthiness() {
        assert!(!Value::Null.is_truthy());
        assert!(!Value::from("").is_truthy());
        assert!(!Value::list(Vec::<i32>::new()).is_truthy());
        assert!(Value::from("0").is_truthy());
        assert!(Value::from(1).is_truthy());
    }
}
