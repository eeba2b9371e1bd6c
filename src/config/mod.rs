//! Configuración del proyecto
//!
//! Este módulo contiene la configuración del entorno y la selección del
//! backend de extracción.

pub mod environment;

pub use environment::*;
