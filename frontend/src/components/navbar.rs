//! Top bar around every page.

use dioxus::prelude::*;

use crate::api::observations_api::get_frontend_config;
use crate::components::error_boundary::GlobalErrorBoundary;
use crate::data_definitions::translations::translate;
use crate::routes::Route;

#[component]
pub fn Navbar() -> Element {
    let config = use_resource(move || get_frontend_config());
    // english until the configured language is known
    let language_code = match &*config.read() {
        Some(Ok(config)) => config.current_language_code.clone(),
        _ => "en".to_string(),
    };
    let subtitle = translate(&language_code, "dashboardSubtitle");

    rsx! {
        div {
            id: "x-nav-container",
            style: "
                display: flex;
                flex-direction: column;
                width: 100vw;
                height: 100vh;
                font-family: Roboto, sans-serif;
                background-color: #F4F6F8;
            ",
            div {
                id: "x-nav-topbar",
                style: "
                    display: flex;
                    flex-direction: row;
                    align-items: center;
                    gap: 24px;
                    height: 52px;
                    flex-shrink: 0;
                    padding: 0 16px;
                    background-color: #1C212D;
                    color: white;
                ",
                Link {
                    to: Route::IndexPage { filters: Default::default() },
                    style: "color: white; text-decoration: none; font-size: 20px; font-weight: 500;",
                    "GBIF Alert"
                }
                span { style: "color: #9CA3AF; font-size: 14px;", "{subtitle}" }
            }
            div {
                id: "x-page-container",
                style: "flex-grow: 1; min-height: 100px; overflow: hidden;",
                GlobalErrorBoundary {
                    boundary_name: "Navbar".to_string(),
                    Outlet::<Route> {}
                }
            }
        }
    }
}
