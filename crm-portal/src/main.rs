use dioxus::prelude::*;
use tracing::Level;

use crm_portal::config::PortalConfig;

// Module Declarations
mod components;
mod hooks;
mod pages;

use components::layout::AuthenticatedShell;
use hooks::SessionStores;
use pages::{CorporateDashboard, FieldDashboard, LeadDetails, Leads, NotFound, PurchaseOrders, Roles, SignedOut};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[redirect("/", || Route::FieldDashboard {})]
    #[route("/login")]
    SignedOut {},

    #[layout(AuthenticatedShell)]
        #[route("/super-admin/dashboard/field")]
        FieldDashboard {},
        #[route("/super-admin/dashboard/corporate")]
        CorporateDashboard {},
        #[route("/super-admin/leads")]
        Leads {},
        #[route("/super-admin/leads/:id")]
        LeadDetails { id: u32 },
        #[route("/super-admin/purchase-orders")]
        PurchaseOrders {},
        #[route("/super-admin/roles")]
        Roles {},
        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

static PORTAL_CONFIG: &str = include_str!("../assets/portal.json");

fn main() {
    if let Err(err) = dioxus::logger::init(Level::INFO) {
        eprintln!("logger already initialized: {err}");
    }
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    use_context_provider(|| PortalConfig::load_or_default(PORTAL_CONFIG));
    use_context_provider(SessionStores::browser);

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        Router::<Route> {}
    }
}
