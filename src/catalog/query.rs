//! Column whitelist and parameterized SQL builder for the product catalog.
//!
//! User input only ever reaches the SQL text through two controlled paths:
//! the sort whitelist below (fixed logical name to physical column mapping)
//! and positional bind placeholders. Filter values are returned as a parallel
//! bind list and are never interpolated into the template.

use crate::error::ApiError;

use super::filter::ProductFilter;

/// Whitelist of sortable fields: logical name exposed to clients mapped to
/// the physical column expression. Anything not in this table sorts by the
/// default `kode_brg`.
const SORT_COLUMNS: [(&str, &str); 4] = [
    ("kode_brg", "b.kode_brg"),
    ("nama_brg", "b.nama_brg"),
    ("harga_brg", "b.hrg_konsumen"),
    ("merk_brg", "k.kelompok"),
];

pub const DEFAULT_SORT_FIELD: &str = "kode_brg";

/// The four dimension joins are always present so that unmatched codes
/// degrade to NULL name columns instead of dropping the row.
const BASE_FROM: &str = "\
FROM brg b
LEFT JOIN divisi d ON d.kode = b.div
LEFT JOIN kelompok k ON k.kode = b.dept
LEFT JOIN kategori kt ON kt.kode = b.kategori
LEFT JOIN clas c ON c.kode = b.clas";

const SELECT_COLUMNS: &str = "\
SELECT
  b.kode_brg,
  b.nama_brg,
  b.hrg_sup_sbl_ppn,
  b.hrg2,
  b.hrg_konsumen AS harga_brg,
  d.kode AS kode_div,
  d.nm_div AS klp,
  k.kode AS kode_merk,
  k.kelompok AS merk_brg,
  kt.kode AS kode_seri,
  kt.nama_kat AS seri_brg,
  c.kode AS kode_warna,
  c.nm_class AS warna_brg,
  b.jml_barang AS jml_brg,
  b.link_gbr";

/// Lists every dimension table under a fixed `type` discriminator; the
/// service regroups the rows into the four facet sequences.
pub const CATEGORIES_QUERY: &str = "\
SELECT 'divisi' AS type, kode AS id, nm_div AS name FROM divisi
UNION ALL
SELECT 'merk' AS type, kode AS id, kelompok AS name FROM kelompok
UNION ALL
SELECT 'seri' AS type, kode AS id, nama_kat AS name FROM kategori
UNION ALL
SELECT 'warna' AS type, kode AS id, nm_class AS name FROM clas";

/// A SQL template plus its ordered bind values ($1..$n).
#[derive(Debug, Clone, PartialEq)]
pub struct ProductQuery {
    pub sql: String,
    pub binds: Vec<String>,
}

/// Resolve a logical sort name through the whitelist, falling back to the
/// default. The raw input is never passed through.
pub fn resolve_sort_field(sort_by: &str) -> &'static str {
    SORT_COLUMNS
        .iter()
        .find(|(logical, _)| *logical == sort_by)
        .map(|(logical, _)| *logical)
        .unwrap_or(DEFAULT_SORT_FIELD)
}

fn sort_column(sort_by: &str) -> &'static str {
    let resolved = resolve_sort_field(sort_by);
    SORT_COLUMNS
        .iter()
        .find(|(logical, _)| *logical == resolved)
        .map(|(_, column)| *column)
        .unwrap_or("b.kode_brg")
}

/// Count of rows matching the filter, before any limiting.
pub fn count_query(filter: &ProductFilter) -> Result<ProductQuery, ApiError> {
    let (where_clause, binds) = build_where(filter)?;
    Ok(ProductQuery {
        sql: format!("SELECT COUNT(*) AS total\n{}{}", BASE_FROM, where_clause),
        binds,
    })
}

/// Full matching row set in whitelist-validated order. No offset/limit is
/// applied; the response metadata flags the full scan with `allRecords`.
pub fn data_query(filter: &ProductFilter) -> Result<ProductQuery, ApiError> {
    let (where_clause, binds) = build_where(filter)?;
    let order_by = format!(
        "\nORDER BY {} {}",
        sort_column(filter.sort_by.as_deref().unwrap_or("")),
        filter.sort_direction()
    );
    Ok(ProductQuery {
        sql: format!("{}\n{}{}{}", SELECT_COLUMNS, BASE_FROM, where_clause, order_by),
        binds,
    })
}

/// Single product lookup by exact id match ($1).
pub fn detail_query() -> String {
    format!("{}\n{}\nWHERE b.kode_brg = $1", SELECT_COLUMNS, BASE_FROM)
}

/// Build the WHERE clause and its bind list. Absent and empty filter values
/// emit nothing; predicates combine with AND. The search term matches code
/// and name case-insensitively as a substring.
fn build_where(filter: &ProductFilter) -> Result<(String, Vec<String>), ApiError> {
    let mut conditions: Vec<String> = Vec::new();
    let mut binds: Vec<String> = Vec::new();

    if let Some(search) = filter.search() {
        check_bindable("search", search)?;
        binds.push(format!("%{}%", search));
        conditions.push(format!(
            "(b.kode_brg ILIKE ${n} OR b.nama_brg ILIKE ${n})",
            n = binds.len()
        ));
    }

    for (field, column, value) in filter.active_categories() {
        check_bindable(field, value)?;
        binds.push(value.to_string());
        conditions.push(format!("{} = ${}", column, binds.len()));
    }

    let where_clause = if conditions.is_empty() {
        String::new()
    } else {
        format!("\nWHERE {}", conditions.join(" AND "))
    };

    Ok((where_clause, binds))
}

/// Postgres text parameters cannot carry NUL bytes; reject them here instead
/// of letting the driver fail mid-query. There is no string-concatenation
/// fallback.
fn check_bindable(field: &'static str, value: &str) -> Result<(), ApiError> {
    if value.contains('\0') {
        return Err(ApiError::InvalidFilterValue { field });
    }
    Ok(())
}
