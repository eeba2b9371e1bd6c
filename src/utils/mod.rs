//! Utilidades del sistema
//!
//! Este módulo contiene el manejo de errores común a toda la aplicación.

pub mod errors;
