use crate::theme::AppColors;
use dioxus::prelude::*;

#[component]
pub fn GradientBackground(is_dark: bool, children: Element) -> Element {
    let (bg_start, bg_end) = if is_dark {
        (AppColors::DARK_SURFACE, "#26221B")
    } else {
        (AppColors::LIGHT_SURFACE, "#FDF1DC")
    };
    rsx! {
        div {
            style: "min-height: 100vh; background: linear-gradient(to bottom, {bg_start}, {bg_end});",
            {children}
        }
    }
}
