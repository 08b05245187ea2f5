//! src/reglages.rs
//!
//! Réglages utilisateur (TOML).
//!
//! Emplacement (natif seulement) :
//! - Linux   : ~/.config/calculatrice-simple/reglages.toml
//! - macOS   : ~/Library/Application Support/calculatrice-simple/reglages.toml
//! - Windows : %APPDATA%\calculatrice-simple\config\reglages.toml
//!
//! Un fichier absent ou illisible ne bloque jamais l’application : on journalise
//! et on repart des valeurs par défaut.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::noyau::arrondi::{CHIFFRES_DEFAUT, CHIFFRES_MAX};

/// Garde-fou : quand une limite d’écran est demandée, on la borne.
const LONGUEUR_MAX: usize = 64;

/// Que faire d’un résultat non fini (division par zéro, dépassement).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PolitiqueNonFini {
    /// Affiche `texte_erreur` et repart à zéro au prochain chiffre.
    #[default]
    Erreur,
    /// Affiche la valeur brute ("Infinity", "NaN") et continue le calcul.
    Brut,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Reglages {
    pub chiffres_significatifs: usize,
    pub non_fini: PolitiqueNonFini,
    pub texte_erreur: String,
    /// Limite de saisie à l’écran ; absente = saisie illimitée.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longueur_max: Option<usize>,
}

impl Default for Reglages {
    fn default() -> Self {
        Self {
            chiffres_significatifs: CHIFFRES_DEFAUT,
            non_fini: PolitiqueNonFini::default(),
            texte_erreur: "Erreur".to_string(),
            longueur_max: None,
        }
    }
}

#[derive(Debug, Error)]
pub enum ErreurReglages {
    #[error("dossier de configuration introuvable")]
    DossierIntrouvable,

    #[error("E/S réglages: {0}")]
    Io(#[from] std::io::Error),

    #[error("réglages illisibles: {0}")]
    Lecture(#[from] toml::de::Error),

    #[error("réglages non sérialisables: {0}")]
    Ecriture(#[from] toml::ser::Error),
}

impl Reglages {
    /// Précision effective (bornée à 1..=17).
    pub fn chiffres(&self) -> usize {
        self.chiffres_significatifs.clamp(1, CHIFFRES_MAX)
    }

    /// Limite de saisie effective (bornée à 1..=64), `None` si illimitée.
    pub fn longueur(&self) -> Option<usize> {
        self.longueur_max.map(|n| n.clamp(1, LONGUEUR_MAX))
    }

    /// La saisie peut-elle encore allonger un écran de `longueur` caractères ?
    pub fn peut_allonger(&self, longueur: usize) -> bool {
        self.longueur().is_none_or(|max| longueur < max)
    }

    pub fn depuis_toml(texte: &str) -> Result<Self, ErreurReglages> {
        Ok(toml::from_str(texte)?)
    }

    pub fn vers_toml(&self) -> Result<String, ErreurReglages> {
        Ok(toml::to_string_pretty(self)?)
    }
}

/// Chemin par défaut du fichier de réglages (`None` si la plateforme ne le fournit pas).
#[cfg(not(target_arch = "wasm32"))]
pub fn chemin_reglages() -> Option<std::path::PathBuf> {
    const NOM_FICHIER: &str = "reglages.toml";

    directories::ProjectDirs::from("", "", "calculatrice-simple")
        .map(|dirs| dirs.config_dir().join(NOM_FICHIER))
}

/// Pas de système de fichiers côté web.
#[cfg(target_arch = "wasm32")]
pub fn chemin_reglages() -> Option<std::path::PathBuf> {
    None
}

/// Charge les réglages ; retombe sur les valeurs par défaut en cas de souci.
pub fn charger(chemin: Option<&Path>) -> Reglages {
    let Some(chemin) = chemin else {
        tracing::warn!("Aucun chemin de réglages, valeurs par défaut");
        return Reglages::default();
    };

    match fs::read_to_string(chemin) {
        Ok(texte) => match Reglages::depuis_toml(&texte) {
            Ok(r) => {
                tracing::info!("Réglages chargés depuis {}", chemin.display());
                r
            }
            Err(e) => {
                tracing::warn!("{e}, valeurs par défaut");
                Reglages::default()
            }
        },
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::info!("Pas de réglages dans {}, valeurs par défaut", chemin.display());
            Reglages::default()
        }
        Err(e) => {
            tracing::warn!("Lecture de {} impossible: {e}, valeurs par défaut", chemin.display());
            Reglages::default()
        }
    }
}

/// Enregistre les réglages (crée le dossier parent au besoin).
pub fn sauvegarder(reglages: &Reglages, chemin: Option<&Path>) -> Result<(), ErreurReglages> {
    let chemin = chemin.ok_or(ErreurReglages::DossierIntrouvable)?;

    if let Some(parent) = chemin.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(chemin, reglages.vers_toml()?)?;

    tracing::info!("Réglages enregistrés dans {}", chemin.display());
    Ok(())
}
