use serde::Deserialize;

#[derive(Deserialize)]
pub struct Login {
    pub access_token: String,
    pub refresh_token: String,
    pub user_id: String,
}
