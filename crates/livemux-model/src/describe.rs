// Copyright (C) 2025 LiveMux Contributors
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Diagnostic rendering of model records.
//!
//! Every record's `Display` impl goes through [`Describer`], which prints a
//! braces-delimited listing of only the populated fields, as
//! `{FieldName: value, OtherField: value}`, using the wire field names in
//! declaration order. Absent fields are omitted entirely, so the output is
//! compact and deterministic for any given record value.

use std::collections::BTreeMap;
use std::fmt;

/// Builder-style helper for `Display` impls, modeled on
/// `std::fmt::DebugStruct` but skipping absent fields.
pub(crate) struct Describer<'a, 'b> {
    f: &'a mut fmt::Formatter<'b>,
    result: fmt::Result,
    has_fields: bool,
}

impl<'a, 'b> Describer<'a, 'b> {
    pub fn new(f: &'a mut fmt::Formatter<'b>) -> Self {
        let result = f.write_str("{");
        Self {
            f,
            result,
            has_fields: false,
        }
    }

    fn separator(&mut self) -> fmt::Result {
        if self.has_fields {
            self.f.write_str(", ")?;
        }
        self.has_fields = true;
        Ok(())
    }

    /// Render a scalar, enum, or nested-record field if present.
    pub fn field<T: fmt::Display>(&mut self, name: &str, value: &Option<T>) -> &mut Self {
        if let Some(v) = value {
            self.result = self.result.and_then(|()| {
                self.separator()?;
                write!(self.f, "{name}: {v}")
            });
        }
        self
    }

    /// Render a sequence field if present, as `Name: [a, b, c]`.
    pub fn field_list<T: fmt::Display>(&mut self, name: &str, value: &Option<Vec<T>>) -> &mut Self {
        if let Some(items) = value {
            self.result = self.result.and_then(|()| {
                self.separator()?;
                write!(self.f, "{name}: [")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        self.f.write_str(", ")?;
                    }
                    write!(self.f, "{item}")?;
                }
                self.f.write_str("]")
            });
        }
        self
    }

    /// Render a mapping field if present, as `Name: {k: v, k2: v2}` in key
    /// order.
    pub fn field_map(
        &mut self,
        name: &str,
        value: &Option<BTreeMap<String, String>>,
    ) -> &mut Self {
        if let Some(entries) = value {
            self.result = self.result.and_then(|()| {
                self.separator()?;
                write!(self.f, "{name}: {{")?;
                for (i, (k, v)) in entries.iter().enumerate() {
                    if i > 0 {
                        self.f.write_str(", ")?;
                    }
                    write!(self.f, "{k}: {v}")?;
                }
                self.f.write_str("}")
            });
        }
        self
    }

    pub fn finish(&mut self) -> fmt::Result {
        self.result.and_then(|()| self.f.write_str("}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Sample {
        name: Option<String>,
        count: Option<i64>,
        items: Option<Vec<String>>,
        tags: Option<BTreeMap<String, String>>,
    }

    impl fmt::Display for Sample {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            Describer::new(f)
                .field("Name", &self.name)
                .field("Count", &self.count)
                .field_list("Items", &self.items)
                .field_map("Tags", &self.tags)
                .finish()
        }
    }

    #[test]
    fn empty_record_renders_bare_braces() {
        let s = Sample {
            name: None,
            count: None,
            items: None,
            tags: None,
        };
        assert_eq!(s.to_string(), "{}");
    }

    #[test]
    fn absent_fields_are_omitted() {
        let s = Sample {
            name: None,
            count: Some(5),
            items: None,
            tags: None,
        };
        assert_eq!(s.to_string(), "{Count: 5}");
    }

    #[test]
    fn fields_render_in_declaration_order() {
        let mut tags = BTreeMap::new();
        tags.insert("env".to_string(), "prod".to_string());
        let s = Sample {
            name: Some("main".to_string()),
            count: Some(2),
            items: Some(vec!["a".to_string(), "b".to_string()]),
            tags: Some(tags),
        };
        assert_eq!(
            s.to_string(),
            "{Name: main, Count: 2, Items: [a, b], Tags: {env: prod}}"
        );
    }
}
