//! Car Rental API
//!
//! Backend de alquiler de coches: catálogo de flota, reservas y
//! gestión de inventario por parte de administradores.

pub mod config;
pub mod controllers;
pub mod database;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod state;
pub mod utils;
