use axum::{
    Json, Router,
    extract::{Extension, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use axum_extra::extract::cookie::CookieJar;
use sea_orm::DbConn;
use std::sync::Arc;

use crate::db::entities::survey;
use crate::db::services::{SurveyService, template_service, user_service};
use crate::web::guard::{self, SurveyAccess};
use crate::web::models::AuthenticatedUser;
use crate::web::models::survey_models::{
    SurveyFormResponse, SurveyListResponse, SurveyListRow, SurveyPayload, SurveyShowResponse,
};
use crate::web::schema::survey_schema::{self, SurveyFormContext};
use crate::web::schema::{SelectOption, sanitize_show_columns};
use crate::web::{AppState, error::AppError, flash};

// --- Route Handlers ---

async fn list_surveys_handler(
    Extension(user): Extension<AuthenticatedUser>,
    State(app_state): State<Arc<AppState>>,
) -> Result<Json<SurveyListResponse>, AppError> {
    let db = &app_state.db_pool;
    let rows: Vec<SurveyListRow> = if user.is_admin {
        SurveyService::list_all(db)
            .await?
            .into_iter()
            .map(|(survey, owner)| SurveyListRow {
                survey,
                user: owner.map(|u| u.username),
            })
            .collect()
    } else {
        SurveyService::list_owned_by(db, user.id)
            .await?
            .into_iter()
            .map(|survey| SurveyListRow { survey, user: None })
            .collect()
    };

    Ok(Json(SurveyListResponse {
        columns: survey_schema::list_columns(user.is_admin),
        rows,
    }))
}

async fn create_form_handler(
    Extension(user): Extension<AuthenticatedUser>,
    State(app_state): State<Arc<AppState>>,
) -> Result<Json<SurveyFormResponse>, AppError> {
    let ctx = form_context(&app_state.db_pool, &user).await?;
    Ok(Json(SurveyFormResponse {
        tabs: survey_schema::form_tabs(),
        fields: survey_schema::form_fields(&ctx),
        entry: None,
    }))
}

async fn create_survey_handler(
    Extension(user): Extension<AuthenticatedUser>,
    State(app_state): State<Arc<AppState>>,
    Json(payload): Json<SurveyPayload>,
) -> Result<(StatusCode, Json<survey::Model>), AppError> {
    payload.validate()?;
    let db = &app_state.db_pool;
    let owner_id = guard::resolve_owner(&user, payload.user_id);
    ensure_owner_exists(db, owner_id).await?;

    let survey = SurveyService::create(db, owner_id, payload).await?;
    Ok((StatusCode::CREATED, Json(survey)))
}

async fn show_survey_handler(
    Extension(user): Extension<AuthenticatedUser>,
    State(app_state): State<Arc<AppState>>,
    jar: CookieJar,
    Path(survey_id): Path<i32>,
) -> Result<Response, AppError> {
    match guard::check_survey_access(&app_state.db_pool, &user, survey_id).await? {
        SurveyAccess::Granted(survey) => {
            let columns = sanitize_show_columns(survey_schema::show_columns());
            Ok(Json(SurveyShowResponse {
                columns,
                entry: survey,
            })
            .into_response())
        }
        SurveyAccess::NotFound => Err(AppError::NotFound(format!(
            "Survey {survey_id} not found"
        ))),
        SurveyAccess::Denied => Ok(flash::unauthorized_redirect(jar)),
    }
}

async fn edit_form_handler(
    Extension(user): Extension<AuthenticatedUser>,
    State(app_state): State<Arc<AppState>>,
    jar: CookieJar,
    Path(survey_id): Path<i32>,
) -> Result<Response, AppError> {
    let db = &app_state.db_pool;
    match guard::check_survey_access(db, &user, survey_id).await? {
        SurveyAccess::Granted(survey) => {
            let ctx = form_context(db, &user).await?;
            Ok(Json(SurveyFormResponse {
                tabs: survey_schema::form_tabs(),
                fields: survey_schema::form_fields(&ctx),
                entry: Some(survey),
            })
            .into_response())
        }
        SurveyAccess::NotFound => Err(AppError::NotFound(format!(
            "Survey {survey_id} not found"
        ))),
        SurveyAccess::Denied => Ok(flash::unauthorized_redirect(jar)),
    }
}

async fn update_survey_handler(
    Extension(user): Extension<AuthenticatedUser>,
    State(app_state): State<Arc<AppState>>,
    jar: CookieJar,
    Path(survey_id): Path<i32>,
    Json(payload): Json<SurveyPayload>,
) -> Result<Response, AppError> {
    let db = &app_state.db_pool;
    match guard::check_survey_access(db, &user, survey_id).await? {
        SurveyAccess::Granted(existing) => {
            payload.validate()?;
            let owner_id = guard::resolve_owner_for_update(&user, existing.user_id, payload.user_id);
            if owner_id != existing.user_id {
                ensure_owner_exists(db, owner_id).await?;
            }
            let updated = SurveyService::update(db, existing, owner_id, payload).await?;
            Ok(Json(updated).into_response())
        }
        SurveyAccess::NotFound => Err(AppError::NotFound(format!(
            "Survey {survey_id} not found"
        ))),
        SurveyAccess::Denied => Ok(flash::unauthorized_redirect(jar)),
    }
}

async fn destroy_survey_handler(
    Extension(user): Extension<AuthenticatedUser>,
    State(app_state): State<Arc<AppState>>,
    jar: CookieJar,
    Path(survey_id): Path<i32>,
) -> Result<Response, AppError> {
    match guard::check_survey_access(&app_state.db_pool, &user, survey_id).await? {
        SurveyAccess::Granted(survey) => {
            SurveyService::delete(&app_state.db_pool, survey).await?;
            Ok(StatusCode::NO_CONTENT.into_response())
        }
        SurveyAccess::NotFound => Err(AppError::NotFound(format!(
            "Survey {survey_id} not found"
        ))),
        SurveyAccess::Denied => Ok(flash::unauthorized_redirect(jar)),
    }
}

// --- Helpers ---

async fn form_context(db: &DbConn, user: &AuthenticatedUser) -> Result<SurveyFormContext, AppError> {
    let template_options = template_service::options(db)
        .await?
        .into_iter()
        .map(|t| SelectOption::new(t.id.to_string(), t.name))
        .collect();
    // Only the admin form shows the owner select, so skip the user query
    // for everyone else.
    let user_options = if user.is_admin {
        user_service::options(db)
            .await?
            .into_iter()
            .map(|u| SelectOption::new(u.id.to_string(), u.username))
            .collect()
    } else {
        Vec::new()
    };
    Ok(SurveyFormContext {
        caller_id: user.id,
        caller_is_admin: user.is_admin,
        template_options,
        user_options,
    })
}

async fn ensure_owner_exists(db: &DbConn, owner_id: i32) -> Result<(), AppError> {
    if user_service::find_by_id(db, owner_id).await?.is_none() {
        return Err(AppError::InvalidInput(format!(
            "User {owner_id} does not exist."
        )));
    }
    Ok(())
}

// --- Router ---

pub fn survey_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(list_surveys_handler).post(create_survey_handler))
        .route("/form", get(create_form_handler))
        .route(
            "/{survey_id}",
            get(show_survey_handler)
                .put(update_survey_handler)
                .delete(destroy_survey_handler),
        )
        .route("/{survey_id}/form", get(edit_form_handler))
}
