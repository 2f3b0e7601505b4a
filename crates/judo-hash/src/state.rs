//! Composite state: named tensors and scalar attributes.

use indexmap::IndexMap;
use ndarray::ArrayD;

/// One named entry of a [`State`].
#[derive(Clone, Debug, PartialEq)]
pub enum StateValue {
    /// Array data, hashed by content.
    Tensor(ArrayD<f64>),
    /// A float attribute.
    Float(f64),
    /// An integer attribute.
    Int(i64),
    /// A boolean attribute.
    Bool(bool),
    /// A text attribute.
    Text(String),
}

impl StateValue {
    /// `true` for [`StateValue::Tensor`].
    pub fn is_tensor(&self) -> bool {
        matches!(self, Self::Tensor(_))
    }
}

impl From<ArrayD<f64>> for StateValue {
    fn from(v: ArrayD<f64>) -> Self {
        Self::Tensor(v)
    }
}

impl From<f64> for StateValue {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<i64> for StateValue {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<bool> for StateValue {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<&str> for StateValue {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl From<String> for StateValue {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

/// Named values in insertion order.
///
/// Order is significant: two states with the same entries inserted in a
/// different order hash differently.
///
/// ```
/// use judo_hash::State;
/// use ndarray::array;
///
/// let mut state = State::new();
/// state.insert("observs", array![[0.0, 1.0]].into_dyn());
/// state.insert("epoch", 3i64);
/// assert_eq!(state.len(), 2);
/// assert_eq!(state.tensor_names().collect::<Vec<_>>(), vec!["observs"]);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct State {
    entries: IndexMap<String, StateValue>,
}

impl State {
    /// An empty state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace an entry. Replacing keeps the original position.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<StateValue>) {
        self.entries.insert(name.into(), value.into());
    }

    /// Look up an entry by name.
    pub fn get(&self, name: &str) -> Option<&StateValue> {
        self.entries.get(name)
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &StateValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Names of entries holding tensors, in insertion order.
    pub fn tensor_names(&self) -> impl Iterator<Item = &str> {
        self.entries
            .iter()
            .filter(|(_, v)| v.is_tensor())
            .map(|(k, _)| k.as_str())
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// `true` if there are no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
