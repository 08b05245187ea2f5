//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : posséder la session de calcul + les réglages en cours d’édition,
//! et offrir les actions des boutons sans logique d’affichage.
//!
//! Contrats :
//! - Aucune arithmétique ici : tout passe par le noyau.
//! - Une touche = un événement appliqué jusqu’au bout.

use std::path::PathBuf;

use crate::noyau::Calculatrice;
use crate::reglages::{self, Reglages};

#[derive(Clone, Debug)]
pub struct AppCalc {
    // --- moteur ---
    pub calc: Calculatrice,

    // --- réglages ---
    pub brouillon: Reglages, // copie éditée dans le panneau, appliquée à la demande
    pub chemin_reglages: Option<PathBuf>,
    pub message_reglages: String,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self::new(Reglages::default(), None)
    }
}

impl AppCalc {
    pub fn new(reglages: Reglages, chemin_reglages: Option<PathBuf>) -> Self {
        Self {
            calc: Calculatrice::new(reglages.clone()),
            brouillon: reglages,
            chemin_reglages,
            message_reglages: String::new(),
        }
    }

    /// Bouton du pavé : la charge utile est celle du bouton ("7", "×", "C"...).
    pub fn touche(&mut self, charge: &str) {
        if let Err(e) = self.calc.touche(charge) {
            // pavé construit à partir du noyau : ne devrait pas arriver
            tracing::error!("{e}");
        }
    }

    pub fn affichage(&self) -> &str {
        self.calc.affichage()
    }

    /// Applique le brouillon à la session (sans toucher au fichier).
    pub fn appliquer_reglages(&mut self) {
        self.calc.set_reglages(self.brouillon.clone());
        self.message_reglages = "Réglages appliqués".to_string();
    }

    /// Applique puis enregistre le brouillon.
    pub fn enregistrer_reglages(&mut self) {
        self.calc.set_reglages(self.brouillon.clone());
        self.message_reglages =
            match reglages::sauvegarder(&self.brouillon, self.chemin_reglages.as_deref()) {
                Ok(()) => "Réglages enregistrés".to_string(),
                Err(e) => {
                    tracing::warn!("{e}");
                    format!("Échec : {e}")
                }
            };
    }

    /// Oublie les modifications non appliquées.
    pub fn annuler_reglages(&mut self) {
        self.brouillon = self.calc.reglages().clone();
        self.message_reglages.clear();
    }
}
