//! Store seam and its Postgres implementation.
//!
//! The trait keeps the coordinator testable against stub stores; the
//! production implementation runs the builder's templates through sqlx with
//! positional binds only.

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

use crate::error::ApiError;

use super::filter::ProductFilter;
use super::query::{self, ProductQuery};
use super::shape::{CategoryRow, ProductRecord};

#[async_trait]
pub trait ProductStore: Send + Sync {
    /// Count of rows matching the filter, before any limiting.
    async fn count_products(&self, filter: &ProductFilter) -> Result<i64, ApiError>;

    /// Full ordered row set matching the filter.
    async fn fetch_products(&self, filter: &ProductFilter) -> Result<Vec<ProductRecord>, ApiError>;

    /// Single product by exact id; `None` when absent.
    async fn fetch_product(&self, id: &str) -> Result<Option<ProductRecord>, ApiError>;

    /// Unioned dimension rows for the category facets.
    async fn fetch_categories(&self) -> Result<Vec<CategoryRow>, ApiError>;
}

pub struct PgProductStore {
    pool: PgPool,
}

impl PgProductStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn bind_all<'q>(
        query: &'q ProductQuery,
    ) -> sqlx::query::Query<'q, sqlx::Postgres, sqlx::postgres::PgArguments> {
        let mut q = sqlx::query(&query.sql);
        for value in &query.binds {
            q = q.bind(value.as_str());
        }
        q
    }
}

#[async_trait]
impl ProductStore for PgProductStore {
    async fn count_products(&self, filter: &ProductFilter) -> Result<i64, ApiError> {
        let query = query::count_query(filter)?;
        let row = Self::bind_all(&query)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| ApiError::store("Error retrieving products", e))?;
        Ok(row.get("total"))
    }

    async fn fetch_products(&self, filter: &ProductFilter) -> Result<Vec<ProductRecord>, ApiError> {
        let query = query::data_query(filter)?;
        let rows = Self::bind_all(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| ApiError::store("Error retrieving products", e))?;
        Ok(rows.iter().map(product_from_row).collect())
    }

    async fn fetch_product(&self, id: &str) -> Result<Option<ProductRecord>, ApiError> {
        let sql = query::detail_query();
        let row = sqlx::query(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| ApiError::store("Error retrieving product details", e))?;
        Ok(row.as_ref().map(product_from_row))
    }

    async fn fetch_categories(&self) -> Result<Vec<CategoryRow>, ApiError> {
        let rows = sqlx::query(query::CATEGORIES_QUERY)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| ApiError::store("Error retrieving categories", e))?;
        Ok(rows
            .into_iter()
            .map(|row| CategoryRow {
                kind: row.get("type"),
                id: row.get("id"),
                name: row.get("name"),
            })
            .collect())
    }
}

fn product_from_row(row: &PgRow) -> ProductRecord {
    ProductRecord {
        kode_brg: row.get("kode_brg"),
        nama_brg: row.get("nama_brg"),
        hrg_sup_sbl_ppn: row.get("hrg_sup_sbl_ppn"),
        hrg2: row.get("hrg2"),
        harga_brg: row.get("harga_brg"),
        kode_div: row.get("kode_div"),
        klp: row.get("klp"),
        kode_merk: row.get("kode_merk"),
        merk_brg: row.get("merk_brg"),
        kode_seri: row.get("kode_seri"),
        seri_brg: row.get("seri_brg"),
        kode_warna: row.get("kode_warna"),
        warna_brg: row.get("warna_brg"),
        jml_brg: row.get("jml_brg"),
        link_gbr: row.get("link_gbr"),
    }
}
