//! Product management endpoints

use crate::client::{ApiClient, ClientError};
use crate::types::{Page, Product, ProductQuery, ProductRequest};
use reqwest::Method;

impl ApiClient {
    /// List products visible to the current user
    pub async fn list_products(&self, query: &ProductQuery) -> Result<Page<Product>, ClientError> {
        let request = self.request(Method::GET, "/product").query(query);
        self.execute(request).await
    }

    pub async fn create_product(&self, product: &ProductRequest) -> Result<Product, ClientError> {
        product.validate().map_err(ClientError::Validation)?;
        let request = self.request(Method::POST, "/product").json(product);
        self.execute(request).await
    }

    pub async fn update_product(
        &self,
        id: i64,
        product: &ProductRequest,
    ) -> Result<Product, ClientError> {
        product.validate().map_err(ClientError::Validation)?;
        let request = self
            .request(Method::PUT, &format!("/product/{id}"))
            .json(product);
        self.execute(request).await
    }

    pub async fn delete_product(&self, id: i64) -> Result<(), ClientError> {
        let request = self.request(Method::DELETE, &format!("/product/{id}"));
        self.execute_empty(request).await
    }

    /// Delete several products in one call
    pub async fn delete_products(&self, ids: &[i64]) -> Result<(), ClientError> {
        if ids.is_empty() {
            return Ok(());
        }
        let request = self.request(Method::DELETE, "/product/batch").json(ids);
        self.execute_empty(request).await
    }
}
