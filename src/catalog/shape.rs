//! Public response shapes and the pure row-to-response mapping.

use serde::{Deserialize, Serialize};

/// Flat product projection with the fixed public field names. Dimension
/// columns come from LEFT JOINs and may be NULL when a code has no match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRecord {
    pub kode_brg: String,
    pub nama_brg: Option<String>,
    pub hrg_sup_sbl_ppn: Option<f64>,
    pub hrg2: Option<f64>,
    pub harga_brg: Option<f64>,
    pub kode_div: Option<String>,
    pub klp: Option<String>,
    pub kode_merk: Option<String>,
    pub merk_brg: Option<String>,
    pub kode_seri: Option<String>,
    pub seri_brg: Option<String>,
    pub kode_warna: Option<String>,
    pub warna_brg: Option<String>,
    pub jml_brg: Option<i32>,
    pub link_gbr: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PagedMetadata {
    pub total: i64,
    /// Always true: no offset/limit is applied, the full matching set is
    /// returned in one response.
    #[serde(rename = "allRecords")]
    pub all_records: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PagedResult {
    pub data: Vec<ProductRecord>,
    pub metadata: PagedMetadata,
}

/// One row of the category facet union: `kind` is the fixed discriminator
/// (`divisi`/`merk`/`seri`/`warna`) emitted by the SQL.
#[derive(Debug, Clone)]
pub struct CategoryRow {
    pub kind: String,
    pub id: String,
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryEntry {
    pub id: String,
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryFacets {
    pub divisi: Vec<CategoryEntry>,
    pub merk: Vec<CategoryEntry>,
    pub seri: Vec<CategoryEntry>,
    pub warna: Vec<CategoryEntry>,
}

/// Wrap the matching rows with count metadata. `total` is the filter match
/// count independent of how many rows are returned.
pub fn paged(data: Vec<ProductRecord>, total: i64) -> PagedResult {
    PagedResult {
        data,
        metadata: PagedMetadata {
            total,
            all_records: true,
        },
    }
}

/// Regroup the unioned dimension rows by their `type` discriminator into the
/// four named facet sequences. Rows with an unknown discriminator are
/// ignored.
pub fn categories(rows: Vec<CategoryRow>) -> CategoryFacets {
    let mut facets = CategoryFacets::default();
    for row in rows {
        let entry = CategoryEntry {
            id: row.id,
            name: row.name,
        };
        match row.kind.as_str() {
            "divisi" => facets.divisi.push(entry),
            "merk" => facets.merk.push(entry),
            "seri" => facets.seri.push(entry),
            "warna" => facets.warna.push(entry),
            _ => {}
        }
    }
    facets
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn sample_record(kode: &str) -> ProductRecord {
        ProductRecord {
            kode_brg: kode.to_string(),
            nama_brg: Some("Kabel NYM 3x2.5".to_string()),
            hrg_sup_sbl_ppn: Some(10500.0),
            hrg2: Some(11000.0),
            harga_brg: Some(12500.0),
            kode_div: Some("01".to_string()),
            klp: Some("Elektrikal".to_string()),
            kode_merk: Some("SP".to_string()),
            merk_brg: Some("Supreme".to_string()),
            kode_seri: Some("S1".to_string()),
            seri_brg: Some("Kabel".to_string()),
            kode_warna: None,
            warna_brg: None,
            jml_brg: Some(40),
            link_gbr: None,
        }
    }

    #[test]
    fn paged_keeps_row_order_and_reports_total() {
        let rows = vec![sample_record("B"), sample_record("A")];
        let result = paged(rows.clone(), 17);
        assert_eq!(result.data, rows);
        assert_eq!(result.metadata.total, 17);
        assert!(result.metadata.all_records);
    }

    #[test]
    fn metadata_total_is_independent_of_returned_rows() {
        let result = paged(Vec::new(), 250);
        assert!(result.data.is_empty());
        assert_eq!(result.metadata.total, 250);
    }

    #[test]
    fn metadata_serializes_with_public_field_names() {
        let json = serde_json::to_value(paged(Vec::new(), 3)).unwrap();
        assert_eq!(json["metadata"]["total"], 3);
        assert_eq!(json["metadata"]["allRecords"], true);
    }

    #[test]
    fn categories_regroup_by_discriminator() {
        let rows = vec![
            CategoryRow {
                kind: "merk".to_string(),
                id: "SP".to_string(),
                name: Some("Supreme".to_string()),
            },
            CategoryRow {
                kind: "divisi".to_string(),
                id: "01".to_string(),
                name: Some("Elektrikal".to_string()),
            },
            CategoryRow {
                kind: "merk".to_string(),
                id: "PN".to_string(),
                name: Some("Panasonic".to_string()),
            },
            CategoryRow {
                kind: "unknown".to_string(),
                id: "??".to_string(),
                name: None,
            },
        ];
        let facets = categories(rows);
        assert_eq!(facets.divisi.len(), 1);
        assert_eq!(facets.merk.len(), 2);
        assert!(facets.seri.is_empty());
        assert!(facets.warna.is_empty());
        assert_eq!(facets.merk[0].id, "SP");
        assert_eq!(facets.merk[1].id, "PN");
    }
}
