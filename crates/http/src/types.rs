//! Wire types of the dashboard REST API

use dashboard_core::Role;
use serde::{Deserialize, Serialize};

/// Username and password exchanged for a token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthRequest {
    pub username: String,
    pub password: String,
}

/// New account registration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
}

impl RegisterRequest {
    pub const USERNAME_LEN: std::ops::RangeInclusive<usize> = 3..=20;
    pub const PASSWORD_LEN: std::ops::RangeInclusive<usize> = 8..=20;

    /// Apply the backend's field constraints before sending
    pub fn validate(&self) -> Result<(), String> {
        if self.username.trim().is_empty() {
            return Err("username must not be blank".to_string());
        }
        if !Self::USERNAME_LEN.contains(&self.username.chars().count()) {
            return Err("username must be between 3 and 20 characters".to_string());
        }
        if !Self::PASSWORD_LEN.contains(&self.password.chars().count()) {
            return Err("password must be between 8 and 20 characters".to_string());
        }
        Ok(())
    }
}

/// Token issued on login or registration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthResponse {
    pub token: String,
}

/// Product as listed by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: f64,
    pub stock: i32,
    #[serde(default)]
    pub category_name: Option<String>,
    #[serde(default)]
    pub owner_name: Option<String>,
}

/// Product creation or update
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRequest {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub price: f64,
    pub stock: i32,
    pub category_id: i64,
}

impl ProductRequest {
    pub const MAX_NAME_LEN: usize = 30;
    pub const MAX_DESCRIPTION_LEN: usize = 100;
    pub const MAX_PRICE: f64 = 10_000_000.0;
    pub const MAX_STOCK: i32 = 10_000;

    /// Apply the backend's field constraints before sending
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("product name must not be blank".to_string());
        }
        if self.name.chars().count() > Self::MAX_NAME_LEN {
            return Err(format!(
                "product name must be at most {} characters",
                Self::MAX_NAME_LEN
            ));
        }
        if self
            .description
            .as_ref()
            .is_some_and(|d| d.chars().count() > Self::MAX_DESCRIPTION_LEN)
        {
            return Err(format!(
                "description must be at most {} characters",
                Self::MAX_DESCRIPTION_LEN
            ));
        }
        if self.price.is_nan() || self.price <= 0.0 {
            return Err("price must be greater than 0".to_string());
        }
        if self.price > Self::MAX_PRICE {
            return Err("price must not exceed 10,000,000".to_string());
        }
        if !(0..=Self::MAX_STOCK).contains(&self.stock) {
            return Err(format!("stock must be between 0 and {}", Self::MAX_STOCK));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

/// Paging, search and sort parameters of the product listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductQuery {
    pub page: u32,
    pub size: u32,
    pub keyword: String,
    pub sort_by: String,
    pub sort_dir: SortDirection,
}

impl Default for ProductQuery {
    fn default() -> Self {
        Self {
            page: 0,
            size: 10,
            keyword: String::new(),
            sort_by: "id".to_string(),
            sort_dir: SortDirection::Desc,
        }
    }
}

/// One page of a paged listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub content: Vec<T>,
    #[serde(default)]
    pub total_elements: u64,
    #[serde(default)]
    pub total_pages: u32,
    /// Zero-based page index
    #[serde(default)]
    pub number: u32,
    #[serde(default)]
    pub size: u32,
    #[serde(default)]
    pub first: bool,
    #[serde(default)]
    pub last: bool,
}

/// Account as listed by the backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSummary {
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub role: Option<Role>,
}

/// Account creation or update; the password is optional on update
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRequest {
    pub username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
}

/// Category creation or rename
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRequest {
    pub name: String,
}
