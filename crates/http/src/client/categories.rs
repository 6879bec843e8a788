//! Category endpoints

use crate::client::{ApiClient, ClientError};
use crate::types::{Category, CategoryRequest};
use reqwest::Method;

impl ApiClient {
    pub async fn list_categories(&self) -> Result<Vec<Category>, ClientError> {
        let request = self.request(Method::GET, "/category");
        self.execute(request).await
    }

    pub async fn create_category(&self, name: &str) -> Result<Category, ClientError> {
        let request = self
            .request(Method::POST, "/category")
            .json(&category_request(name)?);
        self.execute(request).await
    }

    pub async fn rename_category(&self, id: i64, name: &str) -> Result<Category, ClientError> {
        let request = self
            .request(Method::PUT, &format!("/category/{id}"))
            .json(&category_request(name)?);
        self.execute(request).await
    }

    pub async fn delete_category(&self, id: i64) -> Result<(), ClientError> {
        let request = self.request(Method::DELETE, &format!("/category/{id}"));
        self.execute_empty(request).await
    }
}

fn category_request(name: &str) -> Result<CategoryRequest, ClientError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(ClientError::Validation(
            "category name must not be blank".to_string(),
        ));
    }
    Ok(CategoryRequest {
        name: name.to_string(),
    })
}
