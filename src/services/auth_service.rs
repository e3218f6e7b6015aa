use axum::{Extension, Json};
use bcrypt::{DEFAULT_COST, hash, verify};
use chrono::{Duration, Utc};
use jsonwebtoken::{EncodingKey, Header, encode};
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};

use crate::db::entities::user;
use crate::db::services::user_service;
use crate::web::error::AppError;
use crate::web::models::{
    AuthenticatedUser, Claims, LoginRequest, LoginResponse, RegisterRequest, UserResponse,
};

pub async fn register_user(
    pool: &DatabaseConnection,
    req: RegisterRequest,
) -> Result<UserResponse, AppError> {
    if req.username.is_empty() || req.password.len() < 8 {
        return Err(AppError::InvalidInput(
            "Username must not be empty and the password needs at least 8 characters.".to_string(),
        ));
    }

    if user_service::find_by_username(pool, &req.username)
        .await?
        .is_some()
    {
        return Err(AppError::UserAlreadyExists(
            "Username is already taken.".to_string(),
        ));
    }

    let password_hash = hash(&req.password, DEFAULT_COST)
        .map_err(|e| AppError::PasswordHashingError(format!("Password hashing failed: {e}")))?;

    let now = Utc::now();
    let new_user = user::ActiveModel {
        username: Set(req.username.clone()),
        password_hash: Set(Some(password_hash)),
        is_admin: Set(false),
        created_at: Set(now.into()),
        updated_at: Set(now.into()),
        ..Default::default()
    };

    let user_model = new_user.insert(pool).await?;
    Ok(UserResponse {
        id: user_model.id,
        username: user_model.username,
        is_admin: user_model.is_admin,
    })
}

pub async fn login_user(
    pool: &DatabaseConnection,
    req: LoginRequest,
    jwt_secret: &str,
) -> Result<LoginResponse, AppError> {
    if req.username.is_empty() || req.password.is_empty() {
        return Err(AppError::InvalidInput(
            "Username and password must not be empty.".to_string(),
        ));
    }

    let user = user_service::find_by_username(pool, &req.username)
        .await?
        .ok_or(AppError::InvalidCredentials)?;

    let password_hash = match user.password_hash.as_ref() {
        Some(hash) => hash,
        None => return Err(AppError::InvalidCredentials), // No password set for this user
    };

    let valid_password = verify(&req.password, password_hash).map_err(|e| {
        AppError::InternalServerError(format!("Error during password verification: {e}"))
    })?;

    if !valid_password {
        return Err(AppError::InvalidCredentials);
    }

    create_jwt_for_user(&user, jwt_secret)
}

pub fn create_jwt_for_user(user: &user::Model, jwt_secret: &str) -> Result<LoginResponse, AppError> {
    let now = Utc::now();
    // Token valid for 24 hours
    let expiration = (now + Duration::hours(24)).timestamp() as usize;

    let claims = Claims {
        sub: user.username.clone(),
        user_id: user.id,
        exp: expiration,
    };

    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(jwt_secret.as_ref()),
    )
    .map_err(|e| AppError::TokenCreationError(format!("Token generation failed: {e}")))?;

    Ok(LoginResponse {
        token,
        user_id: user.id,
        username: user.username.clone(),
    })
}

pub async fn me(
    Extension(user): Extension<AuthenticatedUser>,
) -> Result<Json<UserResponse>, AppError> {
    Ok(Json(UserResponse {
        id: user.id,
        username: user.username,
        is_admin: user.is_admin,
    }))
}
