//! Query-string filter for the product collection read.

use std::collections::BTreeMap;

use serde::Deserialize;

use super::query;

/// Recognized query parameters for `GET /products`.
///
/// Every field is optional; empty strings are treated as absent. Filter
/// values are opaque dimension codes matched exactly, never interpreted as
/// SQL. `sort_by` must resolve through the whitelist in [`query`] or falls
/// back to the default sort field.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ProductFilter {
    #[serde(rename = "sortBy")]
    pub sort_by: Option<String>,
    #[serde(rename = "sortDir")]
    pub sort_dir: Option<String>,
    pub search: Option<String>,
    pub divisi: Option<String>,
    pub merk: Option<String>,
    pub seri: Option<String>,
    pub warna: Option<String>,
}

impl ProductFilter {
    /// Logical sort field after whitelist resolution. Unrecognized input
    /// resolves to the default, never to the raw value.
    pub fn sort_field(&self) -> &'static str {
        query::resolve_sort_field(self.sort_by.as_deref().unwrap_or(""))
    }

    /// Sort direction normalized to exactly `ASC` or `DESC`.
    /// Anything other than a case-insensitive "desc" sorts ascending.
    pub fn sort_direction(&self) -> &'static str {
        match &self.sort_dir {
            Some(dir) if dir.eq_ignore_ascii_case("desc") => "DESC",
            _ => "ASC",
        }
    }

    pub fn search(&self) -> Option<&str> {
        non_empty(&self.search)
    }

    /// Active categorical filters as (field name, dimension column, value).
    /// Absent and empty values are omitted entirely.
    pub fn active_categories(&self) -> Vec<(&'static str, &'static str, &str)> {
        let mut active = Vec::new();
        for (field, column, value) in [
            ("divisi", "d.kode", &self.divisi),
            ("merk", "k.kode", &self.merk),
            ("seri", "kt.kode", &self.seri),
            ("warna", "c.kode", &self.warna),
        ] {
            if let Some(value) = non_empty(value) {
                active.push((field, column, value));
            }
        }
        active
    }

    /// Effective parameter set for cache key canonicalization: the resolved
    /// sort field and normalized direction always, plus whichever filters are
    /// present. Unrecognized query parameters never reach the key.
    pub fn cache_params(&self) -> BTreeMap<String, String> {
        let mut params = BTreeMap::new();
        params.insert("sortBy".to_string(), self.sort_field().to_string());
        params.insert(
            "sortDir".to_string(),
            self.sort_direction().to_ascii_lowercase(),
        );
        if let Some(search) = self.search() {
            params.insert("search".to_string(), search.to_string());
        }
        for (field, _, value) in self.active_categories() {
            params.insert(field.to_string(), value.to_string());
        }
        params
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sort_direction_normalizes_case_insensitively() {
        for dir in ["DESC", "desc", "Desc", "dEsC"] {
            let filter = ProductFilter {
                sort_dir: Some(dir.to_string()),
                ..Default::default()
            };
            assert_eq!(filter.sort_direction(), "DESC", "input: {}", dir);
        }
    }

    #[test]
    fn unknown_sort_direction_defaults_to_ascending() {
        for dir in ["ascending", "down", "", "DROP TABLE brg"] {
            let filter = ProductFilter {
                sort_dir: Some(dir.to_string()),
                ..Default::default()
            };
            assert_eq!(filter.sort_direction(), "ASC", "input: {}", dir);
        }
        assert_eq!(ProductFilter::default().sort_direction(), "ASC");
    }

    #[test]
    fn unrecognized_sort_field_falls_back_to_default() {
        let filter = ProductFilter {
            sort_by: Some("hrg_konsumen; DROP TABLE brg".to_string()),
            ..Default::default()
        };
        assert_eq!(filter.sort_field(), "kode_brg");
    }

    #[test]
    fn empty_filter_values_are_treated_as_absent() {
        let filter = ProductFilter {
            search: Some(String::new()),
            divisi: Some(String::new()),
            merk: Some("AC".to_string()),
            ..Default::default()
        };
        assert_eq!(filter.search(), None);
        let active = filter.active_categories();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0], ("merk", "k.kode", "AC"));
    }

    #[test]
    fn cache_params_carry_normalized_sort_and_present_filters_only() {
        let filter = ProductFilter {
            sort_by: Some("bogus".to_string()),
            sort_dir: Some("DeSc".to_string()),
            divisi: Some("01".to_string()),
            warna: Some(String::new()),
            ..Default::default()
        };
        let params = filter.cache_params();
        assert_eq!(params.get("sortBy").map(String::as_str), Some("kode_brg"));
        assert_eq!(params.get("sortDir").map(String::as_str), Some("desc"));
        assert_eq!(params.get("divisi").map(String::as_str), Some("01"));
        assert!(!params.contains_key("warna"));
        assert!(!params.contains_key("search"));
    }
}
