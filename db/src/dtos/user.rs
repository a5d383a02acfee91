/// Data for inserting a freshly registered user.
pub struct NewUser {
    pub email: String,
    pub name: Option<String>,
    pub password_hash: String,
    pub phone_number: Option<String>,
    pub google_id: Option<String>,
}

/// Partial profile update; `None` fields are left untouched.
pub struct ProfileUpdate {
    pub name: Option<String>,
    pub phone_number: Option<String>,
}
