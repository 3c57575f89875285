//! Modelos del sistema
//!
//! Este módulo contiene todos los modelos de datos que mapean exactamente
//! al schema PostgreSQL de la flota.

pub mod analytics;
pub mod driver;
pub mod expense;
pub mod maintenance;
pub mod trip;
pub mod user;
pub mod vehicle;
