// src/noyau/calculatrice.rs

use super::erreur::ErreurSaisie;
use super::etat::{reduire, Etat};
use super::evenement::{Chiffre, Evenement};
use super::operateur::Operateur;
use crate::reglages::Reglages;

/// Une session de calculatrice : l’état courant + les réglages qui le gouvernent.
///
/// Chaque méthode applique un seul événement jusqu’au bout et renvoie l’écran.
#[derive(Clone, Debug, Default)]
pub struct Calculatrice {
    etat: Etat,
    reglages: Reglages,
}

impl Calculatrice {
    pub fn new(reglages: Reglages) -> Self {
        Self {
            etat: Etat::default(),
            reglages,
        }
    }

    pub fn affichage(&self) -> &str {
        &self.etat.affichage
    }

    pub fn etat(&self) -> &Etat {
        &self.etat
    }

    pub fn reglages(&self) -> &Reglages {
        &self.reglages
    }

    /// Remplace les réglages ; l’état en cours est conservé.
    pub fn set_reglages(&mut self, reglages: Reglages) {
        self.reglages = reglages;
    }

    pub fn appliquer(&mut self, evenement: Evenement) -> &str {
        let (etat, _) = reduire(&self.etat, evenement, &self.reglages);
        self.etat = etat;
        self.affichage()
    }

    pub fn chiffre(&mut self, c: Chiffre) -> &str {
        self.appliquer(Evenement::Chiffre(c))
    }

    pub fn virgule(&mut self) -> &str {
        self.appliquer(Evenement::Virgule)
    }

    pub fn operateur(&mut self, op: Operateur) -> &str {
        self.appliquer(Evenement::Operateur(op))
    }

    pub fn reset(&mut self) -> &str {
        self.appliquer(Evenement::Effacer)
    }

    /// Charge utile brute d’un bouton ("7", ".", "×", "C"...).
    pub fn touche(&mut self, charge: &str) -> Result<&str, ErreurSaisie> {
        let evenement: Evenement = charge.parse()?;
        Ok(self.appliquer(evenement))
    }

    /// Rejoue une suite de touches d’un caractère chacune ("12+3=").
    pub fn saisir(&mut self, touches: &str) -> Result<&str, ErreurSaisie> {
        for c in touches.chars().filter(|c| !c.is_whitespace()) {
            let mut tampon = [0u8; 4];
            self.touche(c.encode_utf8(&mut tampon))?;
        }
        Ok(self.affichage())
    }
}
