use crate::array::length::grown_length;
use crate::array::storage::ElementStore;
use crate::array::JsArray;
use crate::errors::ArrayError;
use crate::value::Value;

impl JsArray {
    /// A new array: this array's slots followed by each argument. Array
    /// arguments are spread slot by slot (holes kept, named properties
    /// dropped); any other value is appended as one element.
    pub fn concat(&self, others: &[Value]) -> Result<JsArray, ArrayError> {
        let mut out = self.sibling();
        out.append_slots(self)?;
        for other in others {
            match other {
                Value::Array(arr) => out.append_slots(&arr.borrow())?,
                value => {
                    out.push_one(value.clone())?;
                }
            }
        }
        Ok(out)
    }

    fn append_slots(&mut self, source: &JsArray) -> Result<(), ArrayError> {
        let base = self.length;
        let new_len = grown_length(base, source.length as usize)?;
        for (index, value) in source.value_scan() {
            self.elements.set(base + index, value.clone());
        }
        self.length = new_len;
        Ok(())
    }

    /// Join the string forms of every index with `separator`. Holes,
    /// `undefined` and `null` contribute empty strings.
    pub fn join(&self, separator: &str) -> String {
        self.join_guarded(separator, &mut Vec::new())
    }

    pub(crate) fn join_guarded(&self, separator: &str, seen: &mut Vec<usize>) -> String {
        let addr = self as *const JsArray as usize;
        if seen.contains(&addr) {
            return String::new();
        }
        seen.push(addr);
        let parts: Vec<String> = self
            .index_scan()
            .map(|slot| match slot {
                None | Some(Value::Undefined) | Some(Value::Null) => String::new(),
                Some(value) => value.to_js_string_guarded(seen),
            })
            .collect();
        seen.pop();
        parts.join(separator)
    }
}
