pub mod dto;
pub mod service;

pub use dto::DashboardStats;
pub use service::AdminService;
