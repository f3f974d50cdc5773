// Copyright (C) 2025 LiveMux Contributors
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Resource tag maps.
//!
//! Tags are key-unique string pairs attached to channels, inputs, and
//! multiplexes. A `BTreeMap` keeps equality order-insensitive and lets
//! records that carry tags still derive `Hash`.

use std::collections::BTreeMap;

use crate::error::{ModelError, Result};

/// Key-unique tag map carried by taggable resources.
pub type Tags = BTreeMap<String, String>;

/// Add a single entry to an optional map field, creating the map on first
/// use. Re-adding an existing key fails with [`ModelError::DuplicateKey`];
/// callers that want replacement semantics clear the field first.
pub(crate) fn insert_unique(
    map: &mut Option<Tags>,
    field: &'static str,
    key: impl Into<String>,
    value: impl Into<String>,
) -> Result<()> {
    let key = key.into();
    let entries = map.get_or_insert_with(Tags::new);
    if entries.contains_key(&key) {
        return Err(ModelError::DuplicateKey { field, key });
    }
    entries.insert(key, value.into());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_creates_map_on_first_use() {
        let mut map = None;
        insert_unique(&mut map, "Tags", "env", "prod").unwrap();
        assert_eq!(map.as_ref().unwrap().get("env"), Some(&"prod".to_string()));
    }

    #[test]
    fn duplicate_key_fails() {
        let mut map = None;
        insert_unique(&mut map, "Tags", "env", "prod").unwrap();
        let err = insert_unique(&mut map, "Tags", "env", "staging").unwrap_err();
        assert_eq!(
            err,
            ModelError::DuplicateKey {
                field: "Tags",
                key: "env".to_string(),
            }
        );
        // First value is untouched.
        assert_eq!(map.as_ref().unwrap().get("env"), Some(&"prod".to_string()));
    }

    #[test]
    fn clearing_allows_previously_duplicate_key() {
        let mut map = None;
        insert_unique(&mut map, "Tags", "env", "prod").unwrap();
        map = None;
        insert_unique(&mut map, "Tags", "env", "staging").unwrap();
        assert_eq!(
            map.as_ref().unwrap().get("env"),
            Some(&"staging".to_string())
        );
    }
}
