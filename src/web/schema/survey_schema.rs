//! Field and column declarations for the survey panel's operations.
//!
//! These are static tables, varied only by the caller's admin flag and the
//! option lists loaded for the select widgets. The update form reuses the
//! create declaration.

use serde_json::json;

use super::{ColumnKind, ColumnSpec, FieldSpec, FieldWidget, SelectOption, Tab};

/// Everything the form declaration needs from the request context: who is
/// asking, and the option lists for the select widgets.
#[derive(Debug, Clone)]
pub struct SurveyFormContext {
    pub caller_id: i32,
    pub caller_is_admin: bool,
    pub template_options: Vec<SelectOption>,
    pub user_options: Vec<SelectOption>,
}

pub fn form_tabs() -> Vec<Tab> {
    vec![Tab::General, Tab::Button, Tab::Trigger, Tab::Styling]
}

fn kind_options() -> Vec<SelectOption> {
    vec![
        SelectOption::new("iframe", "Iframe"),
        SelectOption::new("template", "Template"),
    ]
}

fn button_position_options() -> Vec<SelectOption> {
    vec![
        SelectOption::new("top_left", "Top Left"),
        SelectOption::new("top_right", "Top Right"),
        SelectOption::new("bottom_left", "Bottom Left"),
        SelectOption::new("bottom_right", "Bottom Right"),
    ]
}

fn popup_type_options() -> Vec<SelectOption> {
    vec![
        SelectOption::new("modal", "Modal"),
        SelectOption::new("slide_in", "Slide In"),
    ]
}

/// List view columns. Admin callers get the owner column resolved by
/// username; for everyone else the row query is filtered instead, so no
/// owner column is declared. The bulk chrome belongs to the list view and is
/// stripped again for show.
pub fn list_columns(include_owner: bool) -> Vec<ColumnSpec> {
    let mut columns = vec![
        ColumnSpec::new("blank_first_column", "", ColumnKind::BulkActions),
        ColumnSpec::new("name", "Name", ColumnKind::String),
        ColumnSpec::new("url", "Url", ColumnKind::String),
        ColumnSpec::new("is_enable", "Enable", ColumnKind::Boolean),
    ];
    if include_owner {
        columns.push(ColumnSpec::relation("user_id", "User", "username"));
    }
    columns.push(ColumnSpec::new("bulk_actions", "Actions", ColumnKind::BulkActions));
    columns
}

/// Create/update form fields, grouped into tabs.
pub fn form_fields(ctx: &SurveyFormContext) -> Vec<FieldSpec> {
    vec![
        FieldSpec {
            required: true,
            ..FieldSpec::new("name", "Name", Tab::General, FieldWidget::Text)
        },
        FieldSpec {
            required: true,
            ..FieldSpec::new("url", "Url", Tab::General, FieldWidget::Url)
        },
        FieldSpec::new("is_enable", "Enable", Tab::General, FieldWidget::Checkbox),
        FieldSpec {
            default: Some(json!("iframe")),
            required: true,
            ..FieldSpec::new(
                "type",
                "Type",
                Tab::General,
                FieldWidget::Select {
                    options: kind_options(),
                },
            )
        },
        FieldSpec {
            hint: Some("Insert this if type is \"iframe\""),
            ..FieldSpec::new("survey_url", "Survey URL", Tab::General, FieldWidget::Url)
        },
        FieldSpec::new(
            "template_id",
            "Template",
            Tab::General,
            FieldWidget::SearchableSelect {
                options: ctx.template_options.clone(),
            },
        ),
        FieldSpec::new(
            "variables",
            "Variables",
            Tab::General,
            FieldWidget::KeyValueTable {
                entry_label: "option",
                key_label: "Name",
                value_label: "Description",
            },
        ),
        owner_field(ctx),
        // Button settings
        FieldSpec {
            hint: Some("Set empty string to hide the button"),
            ..FieldSpec::new("button_text", "Button Text", Tab::Button, FieldWidget::Text)
        },
        FieldSpec::new(
            "button_color",
            "Button Color",
            Tab::Button,
            FieldWidget::Color,
        ),
        FieldSpec::new(
            "button_bg_color",
            "Button Background Color",
            Tab::Button,
            FieldWidget::Color,
        ),
        FieldSpec::new(
            "button_position",
            "Button Position",
            Tab::Button,
            FieldWidget::Select {
                options: button_position_options(),
            },
        ),
        // Trigger settings
        FieldSpec {
            hint: Some("ID of the element that will show the popup when hover over"),
            ..FieldSpec::new(
                "show_when_hover_id",
                "Hover ID",
                Tab::Trigger,
                FieldWidget::Text,
            )
        },
        FieldSpec {
            hint: Some("Maximum number of times the popup shows when hover over Hover ID element"),
            ..FieldSpec::new(
                "max_show_on_hover_times",
                "Max show on hover times",
                Tab::Trigger,
                FieldWidget::Number { min: Some(1) },
            )
        },
        FieldSpec {
            hint: Some("Show popup after (s) seconds"),
            ..FieldSpec::new(
                "popup_timeout",
                "Popup timeout (in seconds)",
                Tab::Trigger,
                FieldWidget::Number { min: None },
            )
        },
        FieldSpec {
            hint: Some("Close after user submitted (milliseconds)"),
            ..FieldSpec::new(
                "close_after_submit",
                "Close after submit",
                Tab::Trigger,
                FieldWidget::Number { min: Some(1) },
            )
        },
        // Styling settings
        FieldSpec {
            hint: Some("Image show on top of the survey"),
            ..FieldSpec::new(
                "header_img_url",
                "Header Image",
                Tab::Styling,
                FieldWidget::Upload,
            )
        },
        FieldSpec {
            default: Some(json!("Close")),
            ..FieldSpec::new(
                "close_btn_title",
                "Close Button Text",
                Tab::Styling,
                FieldWidget::Text,
            )
        },
        FieldSpec::new(
            "popup_type",
            "Popup Type",
            Tab::Styling,
            FieldWidget::Select {
                options: popup_type_options(),
            },
        ),
        FieldSpec {
            default: Some(json!("1")),
            hint: Some("0.01 to 0.99"),
            ..FieldSpec::new(
                "backdrop_opacity",
                "Backdrop Opacity",
                Tab::Styling,
                FieldWidget::Text,
            )
        },
    ]
}

/// Admins pick any owner; everyone else gets a hidden field pinned to
/// themselves. The stored owner is resolved server-side either way.
fn owner_field(ctx: &SurveyFormContext) -> FieldSpec {
    if ctx.caller_is_admin {
        FieldSpec {
            required: true,
            ..FieldSpec::new(
                "user_id",
                "User",
                Tab::General,
                FieldWidget::SearchableSelect {
                    options: ctx.user_options.clone(),
                },
            )
        }
    } else {
        FieldSpec {
            default: Some(json!(ctx.caller_id)),
            required: true,
            ..FieldSpec::new("user_id", "User", Tab::General, FieldWidget::Hidden)
        }
    }
}

/// Declared show view columns, before the uniform sanitization pass.
pub fn show_columns() -> Vec<ColumnSpec> {
    vec![
        ColumnSpec::new("url", "Url", ColumnKind::String),
        ColumnSpec::new("name", "Name", ColumnKind::String),
        ColumnSpec::new("is_enable", "Enable", ColumnKind::Boolean),
        ColumnSpec::relation("user_id", "User", "username"),
        ColumnSpec {
            limit: Some(50),
            ..ColumnSpec::new("button_text", "Button Text", ColumnKind::Text)
        },
        ColumnSpec::new("button_color", "Button Color", ColumnKind::Color),
        ColumnSpec::new("button_position", "Button Position", ColumnKind::Enum),
        ColumnSpec::new(
            "popup_timeout",
            "Popup timeout (in seconds)",
            ColumnKind::Number,
        ),
        ColumnSpec::new("show_when_hover_id", "Hover ID", ColumnKind::Text),
        ColumnSpec::new(
            "max_show_on_hover_times",
            "Max show on hover times",
            ColumnKind::Number,
        ),
        ColumnSpec::new("popup_type", "Popup Type", ColumnKind::Text),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::web::schema::sanitize_show_columns;

    fn ctx(is_admin: bool) -> SurveyFormContext {
        SurveyFormContext {
            caller_id: 7,
            caller_is_admin: is_admin,
            template_options: vec![SelectOption::new("1", "Welcome")],
            user_options: vec![
                SelectOption::new("1", "alice"),
                SelectOption::new("7", "bob"),
            ],
        }
    }

    #[test]
    fn admin_list_declares_owner_column() {
        let columns = list_columns(true);
        let owner = columns.iter().find(|c| c.name == "user_id").unwrap();
        assert_eq!(owner.kind, ColumnKind::Relation);
        assert_eq!(owner.attribute, Some("username"));
    }

    #[test]
    fn non_admin_list_has_no_owner_column() {
        let columns = list_columns(false);
        assert!(columns.iter().all(|c| c.name != "user_id"));
    }

    #[test]
    fn list_keeps_declared_column_order() {
        let names: Vec<&str> = list_columns(false).iter().map(|c| c.name).collect();
        assert_eq!(
            names,
            vec![
                "blank_first_column",
                "name",
                "url",
                "is_enable",
                "bulk_actions"
            ]
        );
    }

    #[test]
    fn admin_form_offers_owner_select() {
        let fields = form_fields(&ctx(true));
        let owner = fields.iter().find(|f| f.name == "user_id").unwrap();
        assert!(matches!(
            owner.widget,
            FieldWidget::SearchableSelect { ref options } if options.len() == 2
        ));
    }

    #[test]
    fn non_admin_form_hides_owner_and_pins_it_to_caller() {
        let fields = form_fields(&ctx(false));
        let owner = fields.iter().find(|f| f.name == "user_id").unwrap();
        assert_eq!(owner.widget, FieldWidget::Hidden);
        assert_eq!(owner.default, Some(serde_json::json!(7)));
    }

    #[test]
    fn form_groups_fields_into_the_four_tabs() {
        let fields = form_fields(&ctx(true));
        for tab in [Tab::General, Tab::Button, Tab::Trigger, Tab::Styling] {
            assert!(fields.iter().any(|f| f.tab == tab), "empty tab {tab:?}");
        }
        let kind = fields.iter().find(|f| f.name == "type").unwrap();
        assert_eq!(kind.default, Some(serde_json::json!("iframe")));
    }

    #[test]
    fn sanitized_show_columns_render_full_text_values() {
        let columns = sanitize_show_columns(show_columns());
        assert!(columns.iter().all(|c| !c.kind.is_textual() || c.limit.is_none()));
        assert!(columns.iter().any(|c| c.name == "user_id"));
        assert!(
            columns
                .iter()
                .all(|c| !matches!(c.kind, ColumnKind::Table | ColumnKind::RowNumber))
        );
    }
}
