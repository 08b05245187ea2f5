//! Calculatrice simple : pavé numérique, quatre opérations, enchaînement de gauche à droite.
//!
//! - `noyau`    : moteur pur (événements -> état -> écran), testable sans fenêtre
//! - `app`      : coquille egui (natif + web)
//! - `reglages` : préférences utilisateur (TOML)

pub mod app;
pub mod noyau;
pub mod reglages;

/// Titre unique (natif + web).
pub const TITRE_APP: &str = "Calculatrice";
