//! Declarative view descriptors consumed by the external admin UI.
//!
//! The backend never renders HTML. Each operation (list, create/update form,
//! show) is described as an ordered list of plain descriptor records; the UI
//! turns them into tables and forms and enforces the declared widget rules.

use serde::Serialize;

pub mod survey_schema;

/// Form layout grouping. Purely presentational.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Tab {
    General,
    Button,
    Trigger,
    Styling,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "widget", rename_all = "snake_case")]
pub enum FieldWidget {
    Text,
    Url,
    Checkbox,
    Color,
    Hidden,
    Number {
        #[serde(skip_serializing_if = "Option::is_none")]
        min: Option<i64>,
    },
    Select {
        options: Vec<SelectOption>,
    },
    SearchableSelect {
        options: Vec<SelectOption>,
    },
    /// Editable rows of key/value pairs.
    KeyValueTable {
        entry_label: &'static str,
        key_label: &'static str,
        value_label: &'static str,
    },
    Upload,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub tab: Tab,
    #[serde(flatten)]
    pub widget: FieldWidget,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<&'static str>,
    pub required: bool,
}

impl FieldSpec {
    pub fn new(name: &'static str, label: &'static str, tab: Tab, widget: FieldWidget) -> Self {
        Self {
            name,
            label,
            tab,
            widget,
            default: None,
            hint: None,
            required: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnKind {
    String,
    Text,
    Boolean,
    Number,
    Color,
    Enum,
    /// Resolved through a related entity's display attribute.
    Relation,
    /// Repeated key/value rows.
    Table,
    RowNumber,
    /// List chrome for bulk selection/actions.
    BulkActions,
}

impl ColumnKind {
    /// Kinds whose rendered value is text and may be truncated by the UI.
    pub fn is_textual(self) -> bool {
        matches!(
            self,
            ColumnKind::String | ColumnKind::Text | ColumnKind::Enum | ColumnKind::Relation
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: ColumnKind,
    /// Display attribute on the related entity, for `Relation` columns.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attribute: Option<&'static str>,
    /// Character truncation applied by the UI. `None` renders the full value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    /// Derived automatically from the entity's relations rather than
    /// declared by hand.
    pub auto_derived: bool,
    pub visible_in_show: bool,
}

impl ColumnSpec {
    pub fn new(name: &'static str, label: &'static str, kind: ColumnKind) -> Self {
        Self {
            name,
            label,
            kind,
            attribute: None,
            limit: None,
            auto_derived: false,
            visible_in_show: true,
        }
    }

    pub fn relation(name: &'static str, label: &'static str, attribute: &'static str) -> Self {
        Self {
            attribute: Some(attribute),
            ..Self::new(name, label, ColumnKind::Relation)
        }
    }
}

/// Reduce an active column set to what the single-entity detail view keeps:
/// no auto-derived relation columns, no table or row-number columns, no bulk
/// chrome, no columns opted out of show, and no truncation on textual kinds.
pub fn sanitize_show_columns(columns: Vec<ColumnSpec>) -> Vec<ColumnSpec> {
    columns
        .into_iter()
        .filter(|column| {
            !matches!(
                column.kind,
                ColumnKind::Table | ColumnKind::RowNumber | ColumnKind::BulkActions
            )
        })
        .filter(|column| !(column.auto_derived && column.kind == ColumnKind::Relation))
        .filter(|column| column.visible_in_show)
        .map(|mut column| {
            if column.kind.is_textual() {
                column.limit = None;
            }
            column
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_strips_table_row_number_and_bulk_columns() {
        let columns = vec![
            ColumnSpec::new("blank_first_column", "", ColumnKind::BulkActions),
            ColumnSpec::new("row_number", "#", ColumnKind::RowNumber),
            ColumnSpec::new("name", "Name", ColumnKind::String),
            ColumnSpec::new("variables", "Variables", ColumnKind::Table),
            ColumnSpec::new("bulk_actions", "Actions", ColumnKind::BulkActions),
        ];

        let kept = sanitize_show_columns(columns);
        let names: Vec<&str> = kept.iter().map(|c| c.name).collect();
        assert_eq!(names, vec!["name"]);
    }

    #[test]
    fn sanitize_strips_auto_derived_relations_but_keeps_declared_ones() {
        let mut derived = ColumnSpec::relation("template_id", "Template", "name");
        derived.auto_derived = true;
        let declared = ColumnSpec::relation("user_id", "User", "username");

        let kept = sanitize_show_columns(vec![derived, declared]);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].name, "user_id");
    }

    #[test]
    fn sanitize_drops_columns_hidden_from_show() {
        let mut hidden = ColumnSpec::new("url", "Url", ColumnKind::String);
        hidden.visible_in_show = false;
        let kept = sanitize_show_columns(vec![hidden]);
        assert!(kept.is_empty());
    }

    #[test]
    fn sanitize_removes_truncation_from_textual_columns_only() {
        let mut text = ColumnSpec::new("button_text", "Button Text", ColumnKind::Text);
        text.limit = Some(50);
        let mut number = ColumnSpec::new("popup_timeout", "Timeout", ColumnKind::Number);
        number.limit = Some(10);

        let kept = sanitize_show_columns(vec![text, number]);
        assert_eq!(kept[0].limit, None);
        assert_eq!(kept[1].limit, Some(10));
    }

    #[test]
    fn sanitize_is_idempotent() {
        let columns = vec![
            ColumnSpec::new("row_number", "#", ColumnKind::RowNumber),
            ColumnSpec::new("name", "Name", ColumnKind::String),
            ColumnSpec::relation("user_id", "User", "username"),
        ];
        let once = sanitize_show_columns(columns);
        let twice = sanitize_show_columns(once.clone());
        assert_eq!(once, twice);
    }
}
