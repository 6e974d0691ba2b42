//! Centralized TTL values for the response cache
//!
//! This module provides consistent cache time-to-live values
//! across the application with environment variable overrides.

use std::env;

// Default TTL constants (in seconds)
pub const TTL_PRODUCTS: u64 = 300; // 5 minutes
pub const TTL_PRODUCT_DETAIL: u64 = 600; // 10 minutes

/// Get TTL with environment variable override
pub fn ttl_with_env(env_key: &str, default_ttl: u64) -> u64 {
    env::var(env_key)
        .map(|val| val.parse::<u64>().unwrap_or(default_ttl))
        .unwrap_or(default_ttl)
}

/// TTLs applied when populating the response cache
#[derive(Debug, Clone, Copy)]
pub struct CacheTtls {
    pub products: u64,
    pub product_detail: u64,
}

impl CacheTtls {
    pub fn from_env() -> Self {
        Self {
            products: ttl_with_env("TTL_PRODUCTS_SECONDS", TTL_PRODUCTS),
            product_detail: ttl_with_env("TTL_PRODUCT_DETAIL_SECONDS", TTL_PRODUCT_DETAIL),
        }
    }
}

impl Default for CacheTtls {
    fn default() -> Self {
        Self {
            products: TTL_PRODUCTS,
            product_detail: TTL_PRODUCT_DETAIL,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_env_falls_back_to_default() {
        assert_eq!(ttl_with_env("TTL_KEY_THAT_DOES_NOT_EXIST", 42), 42);
    }

    #[test]
    fn unparsable_override_falls_back_to_default() {
        std::env::set_var("TTL_TEST_UNPARSABLE", "not-a-number");
        assert_eq!(ttl_with_env("TTL_TEST_UNPARSABLE", 300), 300);
        std::env::remove_var("TTL_TEST_UNPARSABLE");
    }
}
