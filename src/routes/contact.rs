use crate::auth::Authorized;
use crate::config::Config;
use crate::database::postgres_repository::PostgresRepository;
use crate::error::app_error::AppError;
use crate::error::json::JsonBody;
use crate::models::contact::{Email, EmailRequest, PhoneNumber, PhoneNumberRequest, UpdateEmailRequest, UpdatePhoneNumberRequest};
use crate::routes::location;
use crate::service::contact::ContactService;
use rocket::http::Status;
use rocket::response::status::Created;
use rocket::serde::json::Json;
use rocket::{State, delete, get, post, put, routes};
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

fn owned_user(caller: &Authorized, user_id: &str) -> Result<Uuid, AppError> {
    let user_id = Uuid::parse_str(user_id)?;
    caller.0.ensure_owner(&user_id)?;
    Ok(user_id)
}

/// Every email on record. Administrators only.
#[get("/")]
pub async fn list_all_emails(pool: &State<PgPool>, caller: Authorized) -> Result<Json<Vec<Email>>, AppError> {
    let repo = PostgresRepository { pool: pool.inner().clone() };
    caller.0.ensure_admin(&repo).await?;
    Ok(Json(ContactService::new(&repo).list_all_emails().await?))
}

#[get("/<user_id>/emails")]
pub async fn list_emails(pool: &State<PgPool>, caller: Authorized, user_id: &str) -> Result<Json<Vec<Email>>, AppError> {
    let user_id = owned_user(&caller, user_id)?;
    let repo = PostgresRepository { pool: pool.inner().clone() };
    Ok(Json(ContactService::new(&repo).list_emails(&user_id).await?))
}

#[post("/<user_id>/emails", data = "<payload>")]
pub async fn create_email(
    pool: &State<PgPool>,
    config: &State<Config>,
    caller: Authorized,
    user_id: &str,
    payload: JsonBody<EmailRequest>,
) -> Result<Created<Json<Email>>, AppError> {
    let user_id = owned_user(&caller, user_id)?;
    payload.validate()?;

    let repo = PostgresRepository { pool: pool.inner().clone() };
    let email = ContactService::new(&repo).add_email(&user_id, &payload.address).await?;
    Ok(Created::new(location(config, format_args!("/users/{}/emails/{}", user_id, email.id))).body(Json(email)))
}

#[put("/<user_id>/emails/<email_id>", data = "<payload>")]
pub async fn update_email(
    pool: &State<PgPool>,
    caller: Authorized,
    user_id: &str,
    email_id: &str,
    payload: JsonBody<UpdateEmailRequest>,
) -> Result<Json<Email>, AppError> {
    let user_id = owned_user(&caller, user_id)?;
    let email_id = Uuid::parse_str(email_id)?;
    payload.validate()?;

    let repo = PostgresRepository { pool: pool.inner().clone() };
    let email = ContactService::new(&repo)
        .update_email(&user_id, &email_id, &payload, caller.0.is_developer())
        .await?;
    Ok(Json(email))
}

#[delete("/<user_id>/emails/<email_id>")]
pub async fn delete_email(pool: &State<PgPool>, caller: Authorized, user_id: &str, email_id: &str) -> Result<Status, AppError> {
    let user_id = owned_user(&caller, user_id)?;
    let email_id = Uuid::parse_str(email_id)?;

    let repo = PostgresRepository { pool: pool.inner().clone() };
    ContactService::new(&repo).delete_email(&user_id, &email_id).await?;
    Ok(Status::NoContent)
}

#[get("/<user_id>/phone-numbers")]
pub async fn list_phone_numbers(pool: &State<PgPool>, caller: Authorized, user_id: &str) -> Result<Json<Vec<PhoneNumber>>, AppError> {
    let user_id = owned_user(&caller, user_id)?;
    let repo = PostgresRepository { pool: pool.inner().clone() };
    Ok(Json(ContactService::new(&repo).list_phone_numbers(&user_id).await?))
}

#[post("/<user_id>/phone-numbers", data = "<payload>")]
pub async fn create_phone_number(
    pool: &State<PgPool>,
    config: &State<Config>,
    caller: Authorized,
    user_id: &str,
    payload: JsonBody<PhoneNumberRequest>,
) -> Result<Created<Json<PhoneNumber>>, AppError> {
    let user_id = owned_user(&caller, user_id)?;
    payload.validate()?;

    let repo = PostgresRepository { pool: pool.inner().clone() };
    let phone = ContactService::new(&repo).add_phone_number(&user_id, &payload.number).await?;
    Ok(Created::new(location(config, format_args!("/users/{}/phone-numbers/{}", user_id, phone.id))).body(Json(phone)))
}

#[put("/<user_id>/phone-numbers/<phone_id>", data = "<payload>")]
pub async fn update_phone_number(
    pool: &State<PgPool>,
    caller: Authorized,
    user_id: &str,
    phone_id: &str,
    payload: JsonBody<UpdatePhoneNumberRequest>,
) -> Result<Json<PhoneNumber>, AppError> {
    let user_id = owned_user(&caller, user_id)?;
    let phone_id = Uuid::parse_str(phone_id)?;
    payload.validate()?;

    let repo = PostgresRepository { pool: pool.inner().clone() };
    let phone = ContactService::new(&repo)
        .update_phone_number(&user_id, &phone_id, &payload, caller.0.is_developer())
        .await?;
    Ok(Json(phone))
}

#[delete("/<user_id>/phone-numbers/<phone_id>")]
pub async fn delete_phone_number(pool: &State<PgPool>, caller: Authorized, user_id: &str, phone_id: &str) -> Result<Status, AppError> {
    let user_id = owned_user(&caller, user_id)?;
    let phone_id = Uuid::parse_str(phone_id)?;

    let repo = PostgresRepository { pool: pool.inner().clone() };
    ContactService::new(&repo).delete_phone_number(&user_id, &phone_id).await?;
    Ok(Status::NoContent)
}

/// Mounted under `/users`, next to the profile routes.
pub fn routes() -> Vec<rocket::Route> {
    routes![
        list_emails,
        create_email,
        update_email,
        delete_email,
        list_phone_numbers,
        create_phone_number,
        update_phone_number,
        delete_phone_number
    ]
}

pub fn email_routes() -> Vec<rocket::Route> {
    routes![list_all_emails]
}
