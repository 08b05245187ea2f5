// src/noyau/erreur.rs

use thiserror::Error;

/// Charge utile de bouton impossible à convertir en événement.
///
/// Le moteur lui-même ne peut pas échouer : seules les conversions
/// « texte brut du bouton -> événement typé » passent par ici.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErreurSaisie {
    #[error("chiffre invalide: '{0}'")]
    ChiffreInvalide(char),

    #[error("opérateur inconnu: {0:?}")]
    OperateurInconnu(String),

    #[error("touche inconnue: {0:?}")]
    ToucheInconnue(String),
}
