//! Controladores
//!
//! Validan la petición y coordinan repositorios y servicios para cada recurso.

pub mod analytics_controller;
pub mod auth_controller;
pub mod driver_controller;
pub mod expense_controller;
pub mod maintenance_controller;
pub mod trip_controller;
pub mod vehicle_controller;
