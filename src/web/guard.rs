//! Row-level authorization for single-survey actions.
//!
//! The show, edit-form, update, and destroy handlers all call the same
//! predicate through [`check_survey_access`], so the ownership rule cannot
//! drift between entry points.

use sea_orm::{DbConn, DbErr};
use tracing::warn;

use crate::db::entities::survey;
use crate::db::services::SurveyService;
use crate::web::models::AuthenticatedUser;

/// The one ownership rule: admins act on anything, everyone else only on
/// their own surveys.
pub fn can_access(caller: &AuthenticatedUser, survey: &survey::Model) -> bool {
    caller.is_admin || survey.user_id == caller.id
}

/// Owner stored on create. Admins may assign any user (falling back to
/// themselves); non-admin submissions are ignored and pinned to the caller.
pub fn resolve_owner(caller: &AuthenticatedUser, requested: Option<i32>) -> i32 {
    if caller.is_admin {
        requested.unwrap_or(caller.id)
    } else {
        caller.id
    }
}

/// Owner stored on update. Only admins can reassign, and only explicitly;
/// an absent field keeps the current owner.
pub fn resolve_owner_for_update(
    caller: &AuthenticatedUser,
    current_owner: i32,
    requested: Option<i32>,
) -> i32 {
    if caller.is_admin {
        requested.unwrap_or(current_owner)
    } else {
        current_owner
    }
}

pub enum SurveyAccess {
    Granted(survey::Model),
    /// The id did not resolve. Reported before any ownership comparison.
    NotFound,
    Denied,
}

/// Load the target survey and decide whether `caller` may act on it.
pub async fn check_survey_access(
    db: &DbConn,
    caller: &AuthenticatedUser,
    survey_id: i32,
) -> Result<SurveyAccess, DbErr> {
    let Some(survey) = SurveyService::find_by_id(db, survey_id).await? else {
        return Ok(SurveyAccess::NotFound);
    };
    if can_access(caller, &survey) {
        Ok(SurveyAccess::Granted(survey))
    } else {
        warn!(
            user_id = caller.id,
            survey_id, "Denied survey action for non-owner."
        );
        Ok(SurveyAccess::Denied)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::entities::survey::{
        ButtonPosition, PopupType, SurveyKind, SurveyVariables,
    };

    fn caller(id: i32, is_admin: bool) -> AuthenticatedUser {
        AuthenticatedUser {
            id,
            username: format!("user{id}"),
            is_admin,
        }
    }

    fn survey_owned_by(user_id: i32) -> survey::Model {
        let now = chrono::Utc::now();
        survey::Model {
            id: 42,
            user_id,
            name: "Feedback".to_string(),
            url: "https://example.com".to_string(),
            survey_url: None,
            kind: SurveyKind::Iframe,
            template_id: None,
            is_enable: true,
            variables: SurveyVariables::default(),
            button_text: None,
            button_color: None,
            button_bg_color: None,
            button_position: ButtonPosition::BottomRight,
            show_when_hover_id: None,
            max_show_on_hover_times: None,
            popup_timeout: None,
            close_after_submit: None,
            header_img_url: None,
            close_btn_title: "Close".to_string(),
            popup_type: PopupType::Modal,
            backdrop_opacity: "1".to_string(),
            created_at: now.into(),
            updated_at: now.into(),
        }
    }

    #[test]
    fn owner_can_access_their_survey() {
        assert!(can_access(&caller(9, false), &survey_owned_by(9)));
    }

    #[test]
    fn non_owner_is_denied() {
        assert!(!can_access(&caller(7, false), &survey_owned_by(9)));
    }

    #[test]
    fn admin_can_access_any_survey() {
        assert!(can_access(&caller(1, true), &survey_owned_by(9)));
    }

    #[test]
    fn create_owner_is_pinned_to_non_admin_caller() {
        // A forged user_id in the payload must not take effect.
        assert_eq!(resolve_owner(&caller(7, false), Some(9)), 7);
        assert_eq!(resolve_owner(&caller(7, false), None), 7);
    }

    #[test]
    fn create_owner_honors_admin_override() {
        assert_eq!(resolve_owner(&caller(1, true), Some(9)), 9);
        assert_eq!(resolve_owner(&caller(1, true), None), 1);
    }

    #[test]
    fn update_keeps_current_owner_unless_admin_reassigns() {
        assert_eq!(resolve_owner_for_update(&caller(7, false), 7, Some(9)), 7);
        assert_eq!(resolve_owner_for_update(&caller(1, true), 7, None), 7);
        assert_eq!(resolve_owner_for_update(&caller(1, true), 7, Some(9)), 9);
    }
}
