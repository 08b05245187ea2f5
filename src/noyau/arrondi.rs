// src/noyau/arrondi.rs
//
// Arrondi à N chiffres significatifs.
// Masque le bruit binaire des flottants : 0.1 + 0.2 -> 0.3 (et pas 0.30000000000000004).
//
// Seul point d’arrondi du moteur : toute sortie d’opérateur (y compris "=") passe ici.

/// Précision par défaut (chiffres significatifs).
pub const CHIFFRES_DEFAUT: usize = 12;

/// Borne haute : au-delà de 17 chiffres, un f64 n’a plus rien à dire.
pub const CHIFFRES_MAX: usize = 17;

/// Arrondit `x` à `chiffres` chiffres significatifs (borné à 1..=17).
///
/// On passe par l’écriture scientifique décimale puis on relit :
/// c’est exactement "toPrecision(n) puis parse", sans cumul d’erreur.
/// Les valeurs non finies et zéro traversent inchangées.
pub fn arrondir(x: f64, chiffres: usize) -> f64 {
    if !x.is_finite() || x == 0.0 {
        return x;
    }

    let chiffres = chiffres.clamp(1, CHIFFRES_MAX);
    let texte = format!("{:.*e}", chiffres - 1, x);

    texte.parse::<f64>().unwrap_or(x)
}
