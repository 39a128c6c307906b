//! String interning for `zlsSubtagData`.

use std::collections::HashMap;

use crate::model::InternedValue;

/// Hands out dense ids, starting at 1, in first-seen order.
#[derive(Debug, Default)]
pub struct Interner {
    ids: HashMap<String, u32>,
    values: Vec<InternedValue>,
}

impl Interner {
    pub fn intern(&mut self, text: &str) -> u32 {
        if let Some(id) = self.ids.get(text) {
            return *id;
        }
        let id = self.values.len() as u32 + 1;
        self.ids.insert(text.to_string(), id);
        self.values.push(InternedValue {
            id,
            value: text.to_string(),
        });
        id
    }

    pub fn get(&self, text: &str) -> Option<u32> {
        self.ids.get(text).copied()
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.values.len()
    }

    pub fn into_values(self) -> Vec<InternedValue> {
        self.values
    }
}
