//! Schema definitions
//!
//! A [`Schema`] maps field names to [`FieldDef`]s. Schemas are plain caller-owned
//! values: the engines borrow them for the duration of one call and keep
//! nothing afterwards.
//!
//! Copyright (c) 2025 Fieldspec Team
//! Licensed under the Apache-2.0 license

mod field;

pub use field::FieldDef;

use std::collections::btree_map::{self, BTreeMap};

/// Expected structure of a record
#[derive(Debug, Clone, Default)]
pub struct Schema {
    fields: BTreeMap<String, FieldDef>,
}

impl Schema {
    /// Create an empty schema
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a field, builder style
    pub fn field<N: Into<String>, D: Into<FieldDef>>(mut self, name: N, def: D) -> Self {
        self.insert(name, def);
        self
    }

    /// Add or replace a field, returning the previous definition
    pub fn insert<N: Into<String>, D: Into<FieldDef>>(
        &mut self,
        name: N,
        def: D,
    ) -> Option<FieldDef> {
        self.fields.insert(name.into(), def.into())
    }

    pub fn remove(&mut self, name: &str) -> Option<FieldDef> {
        self.fields.remove(name)
    }

    pub fn get(&self, name: &str) -> Option<&FieldDef> {
        self.fields.get(name)
    }

    /// Mutable access, used to attach hooks to loaded schemas
    pub fn field_mut(&mut self, name: &str) -> Option<&mut FieldDef> {
        self.fields.get_mut(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, FieldDef> {
        self.fields.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<N: Into<String>> FromIterator<(N, FieldDef)> for Schema {
    fn from_iter<I: IntoIterator<Item = (N, FieldDef)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().map(|(name, def)| (name.into(), def)).collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Schema {
    type Item = (&'a String, &'a FieldDef);
    type IntoIter = btree_map::Iter<'a, String, FieldDef>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fieldspec_core::TypeTag;

    #[test]
    fn test_builder() {
        let schema = Schema::new()
            .field("name", FieldDef::new(TypeTag::Str).required())
            .field("age", TypeTag::Int);

        assert_eq!(schema.len(), 2);
        assert!(schema.contains("name"));
        assert!(schema.get("name").map(|d| d.required).unwrap_or(false));
        assert_eq!(schema.get("age").and_then(|d| d.kind.clone()), Some(TypeTag::Int));
        assert_eq!(schema.names().collect::<Vec<_>>(), vec!["age", "name"]);
    }

    #[test]
    fn test_field_mut_attaches_hooks() {
        let mut schema = Schema::new().field("name", TypeTag::Str);
        if let Some(def) = schema.field_mut("name") {
            *def = def.clone().validator_fn(|_, _, _, _, _| Ok(()));
        }
        assert!(schema.get("name").and_then(|d| d.validator.as_ref()).is_some());
        assert!(schema.field_mut("missing").is_none());
    }

    #[test]
    fn test_from_iterator_and_remove() {
        let mut schema: Schema = vec![("a", FieldDef::new(TypeTag::Int))].into_iter().collect();
        assert!(!schema.is_empty());
        assert!(schema.remove("a").is_some());
        assert!(schema.is_empty());
    }
}
