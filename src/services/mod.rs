//! Services module
//!
//! Este módulo contiene la lógica de negocio de la aplicación: la cascada de
//! estados de los viajes, los disparadores de mantenimiento, la agregación
//! financiera y el tratamiento de importes en texto libre.

pub mod analytics_service;
pub mod currency;
pub mod maintenance_service;
pub mod status_sync;

pub use analytics_service::AnalyticsService;
pub use maintenance_service::MaintenanceService;
pub use status_sync::StatusSynchronizer;
