//! src/noyau/etat.rs
//!
//! État du moteur + réducteur pur : (état, événement) -> (nouvel état, écran).
//!
//! Contrats :
//! - Aucune dépendance UI : on teste sans fenêtre.
//! - Enchaînement strict de gauche à droite (pas de priorité d’opérateurs).
//! - Un seul arrondi, appliqué à chaque sortie d’opérateur (y compris "=").
//! - `accumulateur == None` signifie « pas encore de premier opérande » ;
//!   un premier opérande égal à 0 est une valeur comme une autre.

use tracing::{debug, warn};

use super::arrondi::arrondir;
use super::evenement::{Chiffre, Evenement};
use super::format::{formater_nombre, lire_nombre};
use super::operateur::Operateur;
use crate::reglages::{PolitiqueNonFini, Reglages};

#[derive(Clone, Debug, PartialEq)]
pub struct Etat {
    /// Texte de l’écran (toujours un nombre lisible, sauf en erreur).
    pub affichage: String,
    /// Opérande courant de la chaîne d’opérations.
    pub accumulateur: Option<f64>,
    /// Opérateur choisi, pas encore appliqué.
    pub operateur: Option<Operateur>,
    /// Le prochain chiffre remplace l’écran au lieu de s’y ajouter.
    pub attente_nouveau: bool,
    /// L’écran affiche le texte d’erreur (résultat non fini).
    pub en_erreur: bool,
}

impl Default for Etat {
    fn default() -> Self {
        Self {
            affichage: "0".to_string(),
            accumulateur: None,
            operateur: None,
            attente_nouveau: false,
            en_erreur: false,
        }
    }
}

impl Etat {
    fn erreur(texte: &str) -> Self {
        Self {
            affichage: texte.to_string(),
            accumulateur: None,
            operateur: None,
            attente_nouveau: true,
            en_erreur: true,
        }
    }
}

/// Réducteur : applique un événement, renvoie le nouvel état et le texte à afficher.
pub fn reduire(etat: &Etat, evenement: Evenement, reglages: &Reglages) -> (Etat, String) {
    let mut suivant = etat.clone();

    match evenement {
        Evenement::Chiffre(c) => saisir_chiffre(&mut suivant, c, reglages),
        Evenement::Virgule => saisir_virgule(&mut suivant, reglages),
        Evenement::Operateur(op) => appliquer_operateur(&mut suivant, op, reglages),
        Evenement::Effacer => suivant = Etat::default(),
    }

    debug!(
        %evenement,
        affichage = %suivant.affichage,
        accumulateur = ?suivant.accumulateur,
        "événement réduit"
    );

    let affichage = suivant.affichage.clone();
    (suivant, affichage)
}

fn saisir_chiffre(etat: &mut Etat, c: Chiffre, reglages: &Reglages) {
    if etat.attente_nouveau || etat.en_erreur {
        etat.affichage = c.to_string();
        etat.attente_nouveau = false;
        etat.en_erreur = false;
        return;
    }

    // le zéro initial est remplacé, pas complété
    if etat.affichage == "0" {
        etat.affichage = c.to_string();
        return;
    }

    if !reglages.peut_allonger(etat.affichage.len()) {
        return;
    }
    etat.affichage.push(c.caractere());
}

fn saisir_virgule(etat: &mut Etat, reglages: &Reglages) {
    // pas de "." en tête d’un nouveau nombre
    if etat.attente_nouveau || etat.en_erreur {
        return;
    }
    if etat.affichage.contains('.') || !reglages.peut_allonger(etat.affichage.len()) {
        return;
    }
    etat.affichage.push('.');
}

fn appliquer_operateur(etat: &mut Etat, op: Operateur, reglages: &Reglages) {
    if etat.en_erreur {
        return;
    }

    // Deux opérateurs de suite : on corrige le choix, sans calcul.
    if etat.operateur.is_some() && etat.attente_nouveau {
        etat.operateur = Some(op);
        return;
    }

    let Some(courant) = lire_nombre(&etat.affichage) else {
        warn!(affichage = %etat.affichage, "écran illisible, opérateur ignoré");
        return;
    };

    match (etat.accumulateur, etat.operateur) {
        (Some(premier), Some(en_attente)) => {
            let resultat = arrondir(en_attente.appliquer(premier, courant), reglages.chiffres());

            if !resultat.is_finite() {
                warn!(%premier, %courant, operateur = %en_attente, "résultat non fini");
                if reglages.non_fini == PolitiqueNonFini::Erreur {
                    *etat = Etat::erreur(&reglages.texte_erreur);
                    return;
                }
            }

            etat.affichage = formater_nombre(resultat);
            etat.accumulateur = Some(resultat);
        }
        // premier opérande : capture seulement, l’écran ne bouge pas
        _ => etat.accumulateur = Some(courant),
    }

    etat.attente_nouveau = true;
    etat.operateur = Some(op);
}
