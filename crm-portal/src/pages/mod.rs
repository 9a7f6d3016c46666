pub mod corporate_dashboard;
pub mod field_dashboard;
pub mod lead_details;
pub mod leads;
pub mod not_found;
pub mod purchase_orders;
pub mod roles;
pub mod signed_out;

pub use corporate_dashboard::CorporateDashboard;
pub use field_dashboard::FieldDashboard;
pub use lead_details::LeadDetails;
pub use leads::Leads;
pub use not_found::NotFound;
pub use purchase_orders::PurchaseOrders;
pub use roles::Roles;
pub use signed_out::SignedOut;
