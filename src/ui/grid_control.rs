//! Product grid control
//!
//! Selection checkbox, archived badge and visibility toggle shown on each
//! product tile. The fragment is a plain value; hosts either serialize it or
//! call [`GridControlFragment::to_html`].

use serde::Serialize;
use std::fmt::Write;

use crate::domain::aggregates::ProductSummary;
use crate::domain::value_objects::ProductId;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Badge {
    pub i18n_key_label: &'static str,
    pub label: &'static str,
    /// Bootstrap contextual class suffix.
    pub status: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionCheckbox {
    pub product_id: ProductId,
    pub checked: bool,
    pub read_only: bool,
    /// The wrapping label is visually hidden until the grid enters selection mode.
    pub label_hidden: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VisibilityToggle {
    pub icon: &'static str,
    pub i18n_key_tooltip: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GridControlFragment {
    pub selection: SelectionCheckbox,
    pub archived_badge: Option<Badge>,
    pub visibility_toggle: Option<VisibilityToggle>,
}

const ARCHIVED_BADGE: Badge = Badge { i18n_key_label: "app.archived", label: "Archived", status: "danger" };
const VISIBILITY_TOGGLE: VisibilityToggle = VisibilityToggle { icon: "fa fa-pencil", i18n_key_tooltip: "app.unpublishedChanges" };

/// Renders the control, or nothing when the viewer cannot create products.
///
/// The permission predicate is evaluated first; the others are only consulted
/// once it passes.
pub fn render<C, H, P>(product: &ProductSummary, checked: C, has_changes: H, has_create_product_permission: P) -> Option<GridControlFragment>
where
    C: Fn() -> bool,
    H: Fn() -> bool,
    P: Fn() -> bool,
{
    if !has_create_product_permission() {
        return None;
    }
    Some(GridControlFragment {
        selection: SelectionCheckbox { product_id: product.id.clone(), checked: checked(), read_only: true, label_hidden: true },
        archived_badge: product.is_archived().then_some(ARCHIVED_BADGE),
        visibility_toggle: has_changes().then_some(VISIBILITY_TOGGLE),
    })
}

impl GridControlFragment {
    pub fn to_html(&self) -> String {
        let id = escape(self.selection.product_id.as_str());
        let mut html = String::from(r#"<div class="rui grid-control">"#);
        let _ = write!(
            html,
            r#"<label class="{}" for="select-product-{id}"><input type="checkbox" name="selectProduct" id="select-product-{id}" value="{id}"{} readonly /></label>"#,
            if self.selection.label_hidden { "hidden" } else { "" },
            if self.selection.checked { " checked" } else { "" },
        );
        if let Some(badge) = &self.archived_badge {
            let _ = write!(
                html,
                r#"<span class="badge badge-{}" data-i18n="{}">{}</span>"#,
                badge.status,
                badge.i18n_key_label,
                badge.label
            );
        }
        if let Some(toggle) = &self.visibility_toggle {
            let _ = write!(
                html,
                r#"<div class="visibility-toggle"><button class="rui button icon" data-i18n-tooltip="{}"><i class="{}"></i></button></div>"#,
                toggle.i18n_key_tooltip, toggle.icon
            );
        }
        html.push_str("</div>");
        html
    }
}

fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
