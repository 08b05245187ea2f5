// src/noyau/format.rs
//
// Nombre <-> texte de l’écran.
//
// Sortie : écriture décimale la plus courte qui se relit à l’identique,
// notation exponentielle hors de [1e-6, 1e21) ("1e+21", "1.5e-7"),
// comme l’écran d’une calculatrice web classique.

/// Formate un résultat pour l’écran.
pub fn formater_nombre(x: f64) -> String {
    if x.is_nan() {
        return "NaN".to_string();
    }
    if x.is_infinite() {
        return if x > 0.0 {
            "Infinity".to_string()
        } else {
            "-Infinity".to_string()
        };
    }
    // couvre aussi -0
    if x == 0.0 {
        return "0".to_string();
    }

    let abs = x.abs();
    if !(1e-6..1e21).contains(&abs) {
        let s = format!("{x:e}");
        return match s.split_once('e') {
            Some((mantisse, exp)) if !exp.starts_with('-') => format!("{mantisse}e+{exp}"),
            _ => s,
        };
    }

    format!("{x}")
}

/// Relit le texte de l’écran. `None` si ce n’est pas un nombre (ex: texte d’erreur).
///
/// Accepte "5." (point final en cours de saisie), "1e+21", "Infinity", "NaN".
pub fn lire_nombre(s: &str) -> Option<f64> {
    s.trim().parse::<f64>().ok()
}
