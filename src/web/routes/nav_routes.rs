use axum::{Json, Router, extract::Extension, routing::get};
use serde::Serialize;
use std::sync::Arc;

use crate::web::AppState;
use crate::web::models::AuthenticatedUser;

#[derive(Debug, Serialize)]
pub struct NavLink {
    pub label: &'static str,
    pub path: &'static str,
}

/// Sidebar entries for the caller. The Users section is admin-only; Custom
/// Form Data is served by a separate application and only linked here.
async fn navigation_handler(Extension(user): Extension<AuthenticatedUser>) -> Json<Vec<NavLink>> {
    let mut links = vec![
        NavLink {
            label: "Dashboard",
            path: "/admin/dashboard",
        },
        NavLink {
            label: "Surveys",
            path: "/admin/surveys",
        },
        NavLink {
            label: "Templates",
            path: "/admin/templates",
        },
        NavLink {
            label: "Custom Form Data",
            path: "/admin/custom-form-data",
        },
    ];
    if user.is_admin {
        links.push(NavLink {
            label: "Users",
            path: "/admin/users",
        });
    }
    Json(links)
}

pub fn nav_router() -> Router<Arc<AppState>> {
    Router::new().route("/", get(navigation_handler))
}
