// Componentes compartidos entre vistas

pub mod form;

pub use form::*;
