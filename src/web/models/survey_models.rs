use serde::{Deserialize, Serialize};

use crate::db::entities::survey::{self, ButtonPosition, PopupType, SurveyKind, SurveyVariables};
use crate::web::error::AppError;
use crate::web::schema::{ColumnSpec, FieldSpec, Tab};

/// Create/update form submission. The update operation reuses the create
/// field set, so one payload covers both.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SurveyPayload {
    pub name: String,
    pub url: String,
    pub survey_url: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<SurveyKind>,
    pub template_id: Option<i32>,
    pub is_enable: Option<bool>,
    pub variables: Option<SurveyVariables>,
    /// Honored for admin callers only; non-admins always own what they create.
    pub user_id: Option<i32>,
    pub button_text: Option<String>,
    pub button_color: Option<String>,
    pub button_bg_color: Option<String>,
    pub button_position: Option<ButtonPosition>,
    pub show_when_hover_id: Option<String>,
    pub max_show_on_hover_times: Option<i32>,
    pub popup_timeout: Option<i32>,
    pub close_after_submit: Option<i32>,
    pub header_img_url: Option<String>,
    pub close_btn_title: Option<String>,
    pub popup_type: Option<PopupType>,
    pub backdrop_opacity: Option<String>,
}

impl SurveyPayload {
    /// Server-side checks for the constraints the form declares. The widget
    /// layer enforces the full rule set; these stop a malformed submission
    /// that bypassed it.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.name.trim().is_empty() {
            return Err(AppError::InvalidInput("Name is required.".to_string()));
        }
        if self.url.trim().is_empty() {
            return Err(AppError::InvalidInput("Url is required.".to_string()));
        }
        if let Some(times) = self.max_show_on_hover_times {
            if times < 1 {
                return Err(AppError::InvalidInput(
                    "Max show on hover times must be at least 1.".to_string(),
                ));
            }
        }
        if let Some(delay) = self.close_after_submit {
            if delay < 1 {
                return Err(AppError::InvalidInput(
                    "Close after submit must be at least 1.".to_string(),
                ));
            }
        }
        Ok(())
    }
}

/// One list row. `user` carries the resolved owner username and is only
/// present for admin callers.
#[derive(Debug, Serialize)]
pub struct SurveyListRow {
    #[serde(flatten)]
    pub survey: survey::Model,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SurveyListResponse {
    pub columns: Vec<ColumnSpec>,
    pub rows: Vec<SurveyListRow>,
}

#[derive(Debug, Serialize)]
pub struct SurveyFormResponse {
    pub tabs: Vec<Tab>,
    pub fields: Vec<FieldSpec>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entry: Option<survey::Model>,
}

#[derive(Debug, Serialize)]
pub struct SurveyShowResponse {
    pub columns: Vec<ColumnSpec>,
    pub entry: survey::Model,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_accepts_the_form_field_names() {
        let payload: SurveyPayload = serde_json::from_str(
            r#"{
                "name": "Feedback",
                "url": "https://example.com",
                "type": "iframe",
                "survey_url": "https://x",
                "is_enable": true,
                "variables": [{"name": "color", "value": "brand color"}],
                "max_show_on_hover_times": 3
            }"#,
        )
        .unwrap();

        assert_eq!(payload.kind, Some(SurveyKind::Iframe));
        assert_eq!(payload.variables.as_ref().unwrap().0.len(), 1);
        assert!(payload.validate().is_ok());
    }

    #[test]
    fn payload_rejects_blank_name_and_url() {
        let blank_name = SurveyPayload {
            name: "  ".to_string(),
            url: "https://example.com".to_string(),
            ..Default::default()
        };
        assert!(blank_name.validate().is_err());

        let blank_url = SurveyPayload {
            name: "Feedback".to_string(),
            url: String::new(),
            ..Default::default()
        };
        assert!(blank_url.validate().is_err());
    }

    #[test]
    fn payload_enforces_the_declared_minimums() {
        let base = SurveyPayload {
            name: "Feedback".to_string(),
            url: "https://example.com".to_string(),
            ..Default::default()
        };

        let bad_hover = SurveyPayload {
            max_show_on_hover_times: Some(0),
            ..base.clone()
        };
        assert!(bad_hover.validate().is_err());

        let bad_close = SurveyPayload {
            close_after_submit: Some(0),
            ..base.clone()
        };
        assert!(bad_close.validate().is_err());

        let ok = SurveyPayload {
            max_show_on_hover_times: Some(1),
            close_after_submit: Some(250),
            ..base
        };
        assert!(ok.validate().is_ok());
    }

    #[test]
    fn list_row_omits_the_owner_unless_resolved() {
        let now = chrono::Utc::now();
        let survey = survey::Model {
            id: 1,
            user_id: 7,
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
        };

        let hidden = serde_json::to_value(SurveyListRow {
            survey: survey.clone(),
            user: None,
        })
        .unwrap();
        assert!(hidden.get("user").is_none());
        assert_eq!(hidden["type"], "iframe");

        let resolved = serde_json::to_value(SurveyListRow {
            survey,
            user: Some("alice".to_string()),
        })
        .unwrap();
        assert_eq!(resolved["user"], "alice");
    }
}
