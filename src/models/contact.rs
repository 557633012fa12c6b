use rocket::serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Serialize, Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct Email {
    pub id: Uuid,
    pub user_id: Uuid,
    pub address: String,
    pub verified: bool,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct PhoneNumber {
    pub id: Uuid,
    pub user_id: Uuid,
    pub number: String,
    pub verified: bool,
}

#[derive(Deserialize, Debug, Clone, Validate)]
pub struct EmailRequest {
    #[validate(email, length(max = 50))]
    pub address: String,
}

#[derive(Deserialize, Debug, Clone, Default, Validate)]
pub struct UpdateEmailRequest {
    #[validate(email, length(max = 50))]
    pub address: Option<String>,
    /// Only the developer override may mark an address verified.
    pub verified: Option<bool>,
}

#[derive(Deserialize, Debug, Clone, Validate)]
pub struct PhoneNumberRequest {
    #[validate(length(min = 3, max = 20))]
    pub number: String,
}

#[derive(Deserialize, Debug, Clone, Default, Validate)]
pub struct UpdatePhoneNumberRequest {
    #[validate(length(min = 3, max = 20))]
    pub number: Option<String>,
    /// Only the developer override may mark a number verified.
    pub verified: Option<bool>,
}

impl UpdateEmailRequest {
    pub fn touches_verification(&self) -> bool {
        self.verified.is_some()
    }
}

impl UpdatePhoneNumberRequest {
    pub fn touches_verification(&self) -> bool {
        self.verified.is_some()
    }
}
