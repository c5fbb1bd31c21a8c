//! Tagged objects: a nominal type name plus named fields.

use rustc_hash::FxHashMap;
use std::fmt;
use std::sync::Arc;

use crate::heap::Heap;
use crate::Value;

/// Field order and O(1) name-to-index lookup for an object.
#[derive(Clone, Debug, Default)]
pub struct ObjectLayout {
    names: Vec<String>,
    field_indices: FxHashMap<String, usize>,
}

impl ObjectLayout {
    /// Build a layout from field names in declaration order.
    ///
    /// A repeated name keeps its first position.
    pub fn new<S: AsRef<str>>(field_names: &[S]) -> Self {
        let mut layout = ObjectLayout::default();
        for name in field_names {
            layout.push(name.as_ref());
        }
        layout
    }

    fn push(&mut self, name: &str) -> usize {
        if let Some(&index) = self.field_indices.get(name) {
            return index;
        }
        let index = self.names.len();
        self.names.push(name.to_string());
        self.field_indices.insert(name.to_string(), index);
        index
    }

    /// Index of a field by name.
    pub fn get_index(&self, field: &str) -> Option<usize> {
        self.field_indices.get(field).copied()
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Field names in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.names.iter().map(String::as_str)
    }
}

/// An instance of a named runtime type.
///
/// Matching treats `type_name` nominally: two objects are the same type
/// exactly when their type names are equal.
#[derive(Clone)]
pub struct ObjectValue {
    type_name: Heap<String>,
    fields: Arc<Vec<Value>>,
    layout: Arc<ObjectLayout>,
}

impl ObjectValue {
    /// Create an object from `(field, value)` pairs in declaration order.
    ///
    /// When a field name repeats, the last value wins.
    pub fn new<K, I>(type_name: impl Into<String>, fields: I) -> Self
    where
        K: AsRef<str>,
        I: IntoIterator<Item = (K, Value)>,
    {
        let mut layout = ObjectLayout::default();
        let mut values: Vec<Value> = Vec::new();
        for (name, value) in fields {
            let index = layout.push(name.as_ref());
            if index == values.len() {
                values.push(value);
            } else {
                values[index] = value;
            }
        }
        ObjectValue {
            type_name: Heap::new(type_name.into()),
            fields: Arc::new(values),
            layout: Arc::new(layout),
        }
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    pub fn layout(&self) -> &ObjectLayout {
        &self.layout
    }

    /// Read a field by name.
    pub fn get_field(&self, field: &str) -> Option<&Value> {
        let index = self.layout.get_index(field)?;
        self.fields.get(index)
    }

    /// `(name, value)` pairs in declaration order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &Value)> + '_ {
        self.layout.names().zip(self.fields.iter())
    }

    pub fn field_count(&self) -> usize {
        self.fields.len()
    }
}

impl PartialEq for ObjectValue {
    fn eq(&self, other: &Self) -> bool {
        self.type_name == other.type_name
            && self.field_count() == other.field_count()
            && self
                .fields()
                .all(|(name, value)| other.get_field(name) == Some(value))
    }
}

impl Eq for ObjectValue {}

impl fmt::Debug for ObjectValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct(&self.type_name);
        for (name, value) in self.fields() {
            s.field(name, value);
        }
        s.finish()
    }
}

impl fmt::Display for ObjectValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", &*self.type_name)?;
        for (i, (name, value)) in self.fields().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{name}={value}")?;
        }
        write!(f, ")")
    }
}

#[cfg(test)]
mod tests;
