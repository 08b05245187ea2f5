//! Noyau de la calculatrice (sans UI)
//!
//! Organisation interne :
//! - evenement.rs   : entrées typées (chiffre, virgule, opérateur, effacer)
//! - operateur.rs   : table des opérations (+ - * / =)
//! - arrondi.rs     : arrondi à 12 chiffres significatifs
//! - format.rs      : nombre <-> texte de l’écran
//! - etat.rs        : état + réducteur pur
//! - calculatrice.rs: session (état + réglages)

pub mod arrondi;
pub mod calculatrice;
pub mod erreur;
pub mod etat;
pub mod evenement;
pub mod format;
pub mod operateur;


#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use calculatrice::Calculatrice;
pub use erreur::ErreurSaisie;
pub use etat::{reduire, Etat};
pub use evenement::{Chiffre, Evenement};
pub use operateur::Operateur;
