use super::storage::ElementStore;
use super::{JsArray, Slot};
use crate::errors::ArrayError;
use crate::key::PropertyKey;
use crate::value::Value;

const LENGTH: &str = "length";

impl JsArray {
    /// Read any key. Holes, out-of-range indices and unknown names all read
    /// as `Slot::Absent`.
    pub fn get(&self, key: impl Into<PropertyKey>) -> Slot {
        match key.into() {
            PropertyKey::Index(index) => self.get_index(index),
            PropertyKey::Name(name) if name == LENGTH => {
                Slot::Present(Value::from(self.length))
            }
            PropertyKey::Name(name) => self.properties.get(&name).cloned().into(),
        }
    }

    /// Write any key. Writing `"length"` resizes the array and is the only
    /// way this can fail.
    pub fn set(&mut self, key: impl Into<PropertyKey>, value: Value) -> Result<(), ArrayError> {
        match key.into() {
            PropertyKey::Index(index) => self.set_index(index, value),
            PropertyKey::Name(name) if name == LENGTH => {
                self.set_length_from(value.to_number())?;
            }
            PropertyKey::Name(name) => {
                self.properties.insert(name, value);
            }
        }
        Ok(())
    }

    /// Remove a key. Index keys leave a hole. Returns `false` only for
    /// `"length"`, which cannot be removed.
    pub fn delete(&mut self, key: impl Into<PropertyKey>) -> bool {
        match key.into() {
            PropertyKey::Index(index) => {
                self.delete_index(index);
                true
            }
            PropertyKey::Name(name) if name == LENGTH => false,
            PropertyKey::Name(name) => {
                self.properties.shift_remove(&name);
                true
            }
        }
    }

    /// Presence test: a hole is not present, a stored `undefined` is.
    pub fn has(&self, key: impl Into<PropertyKey>) -> bool {
        match key.into() {
            PropertyKey::Index(index) => self.has_index(index),
            PropertyKey::Name(name) => name == LENGTH || self.properties.contains_key(&name),
        }
    }

    pub fn get_index(&self, index: u32) -> Slot {
        if index >= self.length {
            return Slot::Absent;
        }
        self.elements.get(index).cloned().into()
    }

    /// `u32::MAX` is not an index; writing it lands in the named properties.
    pub fn set_index(&mut self, index: u32, value: Value) {
        if index > super::MAX_INDEX {
            self.properties.insert(index.to_string(), value);
            return;
        }
        self.elements.set(index, value);
        self.on_set(index);
    }

    pub fn delete_index(&mut self, index: u32) -> Slot {
        if index > super::MAX_INDEX {
            return self.properties.shift_remove(&index.to_string()).into();
        }
        let removed = self.elements.delete(index);
        self.on_delete(index);
        removed.into()
    }

    pub fn has_index(&self, index: u32) -> bool {
        index < self.length && self.elements.get(index).is_some()
    }

    pub fn property(&self, name: &str) -> Option<&Value> {
        self.properties.get(name)
    }

    /// Present indices ascending, then `length`, then named properties in
    /// insertion order.
    pub fn own_keys(&self) -> Vec<PropertyKey> {
        let mut keys: Vec<PropertyKey> = self
            .value_scan()
            .map(|(index, _)| PropertyKey::Index(index))
            .collect();
        keys.push(PropertyKey::Name(LENGTH.to_string()));
        keys.extend(self.properties.keys().cloned().map(PropertyKey::Name));
        keys
    }
}
