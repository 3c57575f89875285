//! Repositorios
//!
//! Acceso a PostgreSQL por tabla. Las operaciones que forman parte de una
//! cascada aceptan cualquier `Executor` para poder ejecutarse en una transacción.

pub mod driver_repository;
pub mod expense_repository;
pub mod maintenance_repository;
pub mod trip_repository;
pub mod user_repository;
pub mod vehicle_repository;
