//! User management endpoints (admin only on the backend)

use crate::client::{ApiClient, ClientError};
use crate::types::{UserRequest, UserSummary};
use reqwest::Method;

impl ApiClient {
    pub async fn list_users(&self) -> Result<Vec<UserSummary>, ClientError> {
        let request = self.request(Method::GET, "/user");
        self.execute(request).await
    }

    pub async fn create_user(&self, user: &UserRequest) -> Result<UserSummary, ClientError> {
        if user.password.as_deref().is_none_or(str::is_empty) {
            return Err(ClientError::Validation(
                "password is required for new users".to_string(),
            ));
        }
        let request = self.request(Method::POST, "/user").json(user);
        self.execute(request).await
    }

    pub async fn update_user(&self, id: i64, user: &UserRequest) -> Result<UserSummary, ClientError> {
        let request = self
            .request(Method::PUT, &format!("/user/{id}"))
            .json(user);
        self.execute(request).await
    }

    pub async fn delete_user(&self, id: i64) -> Result<(), ClientError> {
        let request = self.request(Method::DELETE, &format!("/user/{id}"));
        self.execute_empty(request).await
    }
}
