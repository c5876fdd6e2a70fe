use crate::theme::AppColors;
use crate::widgets::GradientCard;
use dioxus::prelude::*;

/// Label-over-value card for the dashboard and analytics summary rows.
#[component]
pub fn StatCard(is_dark: bool, label: String, value: String) -> Element {
    let on_surface = AppColors::on_surface(is_dark);
    rsx! {
        GradientCard { is_dark,
            p { style: "color: {on_surface}; opacity: 0.6; font-size: 0.875rem; margin: 0 0 8px;", "{label}" }
            p { style: "color: {on_surface}; font-size: 1.5rem; font-weight: bold; margin: 0;", "{value}" }
        }
    }
}
