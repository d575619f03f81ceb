//! Server-rendered page handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{Router, extract::State, response::IntoResponse, routing::get};
use cmt_core::{AppSettings, InventoryItem, Order, Sample};
use tracing::instrument;

use crate::filters;
use crate::state::AppState;

/// Site title shown in the header and on the home page.
pub const SITE_TITLE: &str = "Centralized Management Tools";

/// One entry of the home page navigation list.
#[derive(Debug, Clone, Copy)]
pub struct NavLink {
    pub href: &'static str,
    pub label: &'static str,
}

/// Home page navigation, in display order.
pub const NAV: [NavLink; 4] = [
    NavLink {
        href: "/inventory",
        label: "Inventory",
    },
    NavLink {
        href: "/orders",
        label: "Orders",
    },
    NavLink {
        href: "/samples",
        label: "Samples",
    },
    NavLink {
        href: "/settings",
        label: "Settings",
    },
];

#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub title: &'static str,
    pub nav: &'static [NavLink],
}

#[derive(Template, WebTemplate)]
#[template(path = "inventory.html")]
pub struct InventoryTemplate {
    pub title: &'static str,
    pub items: Vec<InventoryItem>,
}

#[derive(Template, WebTemplate)]
#[template(path = "orders.html")]
pub struct OrdersTemplate {
    pub title: &'static str,
    pub orders: Vec<Order>,
}

#[derive(Template, WebTemplate)]
#[template(path = "samples.html")]
pub struct SamplesTemplate {
    pub title: &'static str,
    pub samples: Vec<Sample>,
}

#[derive(Template, WebTemplate)]
#[template(path = "settings.html")]
pub struct SettingsTemplate {
    pub title: &'static str,
    pub settings: AppSettings,
}

/// Display the home page with the section navigation list.
#[instrument]
pub async fn home() -> impl IntoResponse {
    HomeTemplate {
        title: SITE_TITLE,
        nav: &NAV,
    }
}

/// Display the inventory page.
#[instrument(skip(state))]
pub async fn inventory(State(state): State<AppState>) -> impl IntoResponse {
    InventoryTemplate {
        title: "Inventory",
        items: state.catalog().inventory.items.clone(),
    }
}

/// Display the orders page.
#[instrument(skip(state))]
pub async fn orders(State(state): State<AppState>) -> impl IntoResponse {
    OrdersTemplate {
        title: "Orders",
        orders: state.catalog().orders.orders.clone(),
    }
}

/// Display the samples page.
#[instrument(skip(state))]
pub async fn samples(State(state): State<AppState>) -> impl IntoResponse {
    SamplesTemplate {
        title: "Samples",
        samples: state.catalog().samples.samples.clone(),
    }
}

/// Display the settings page.
#[instrument(skip(state))]
pub async fn settings(State(state): State<AppState>) -> impl IntoResponse {
    SettingsTemplate {
        title: "Settings",
        settings: state.catalog().settings.clone(),
    }
}

/// Create the page routes router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(home))
        .route("/inventory", get(inventory))
        .route("/orders", get(orders))
        .route("/samples", get(samples))
        .route("/settings", get(settings))
}
