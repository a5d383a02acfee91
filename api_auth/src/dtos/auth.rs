use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub name: Option<String>,
    pub phone_number: Option<String>,
    /// Subject id assigned by the external identity provider, when the
    /// account was created through it.
    pub google_id: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CreateUserResponse {
    pub user_id: String,
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct ResetPasswordRequest {
    pub email: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateProfileRequest {
    pub name: Option<String>,
    #[serde(rename = "phoneNumber")]
    pub phone_number: Option<String>,
}

/// Profile shape the client dashboard expects.
#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub id: String,
    pub email: String,
    #[serde(rename = "phoneNumber")]
    pub phone_number: String,
    #[serde(rename = "joinDate")]
    pub join_date: String,
    pub name: String,
    pub credits: i32,
    pub number_verified: bool,
    pub usage: i32,
    pub role: String,
    pub plan: String,
}
