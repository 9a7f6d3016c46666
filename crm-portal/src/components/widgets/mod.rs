pub mod area_chart;
pub mod logo;
pub mod not_found_view;
pub mod status_badge;

pub use area_chart::AreaChart;
pub use logo::Logo;
pub use not_found_view::NotFoundView;
pub use status_badge::Badge;
