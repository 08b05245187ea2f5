// src/noyau/evenement.rs
//
// Entrées du moteur : valeurs typées, indépendantes de toute forme d’événement UI.
// La vue ne fournit que des charges utiles brutes ("7", "×", "C"...) ; la conversion
// échoue proprement au lieu de laisser passer une touche inconnue.

use std::fmt;
use std::str::FromStr;

use super::erreur::ErreurSaisie;
use super::operateur::Operateur;

/// Un chiffre décimal 0..=9 (invariant garanti à la construction).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Chiffre(u8);

impl Chiffre {
    pub const TOUS: [Chiffre; 10] = [
        Chiffre(0),
        Chiffre(1),
        Chiffre(2),
        Chiffre(3),
        Chiffre(4),
        Chiffre(5),
        Chiffre(6),
        Chiffre(7),
        Chiffre(8),
        Chiffre(9),
    ];

    pub fn valeur(self) -> u8 {
        self.0
    }

    pub fn caractere(self) -> char {
        char::from(b'0' + self.0)
    }
}

impl TryFrom<char> for Chiffre {
    type Error = ErreurSaisie;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        c.to_digit(10)
            .and_then(|d| u8::try_from(d).ok())
            .map(Chiffre)
            .ok_or(ErreurSaisie::ChiffreInvalide(c))
    }
}

impl fmt::Display for Chiffre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Une action utilisateur sur le pavé.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Evenement {
    Chiffre(Chiffre),
    Virgule,
    Operateur(Operateur),
    Effacer,
}

impl Evenement {
    /// Texte du bouton correspondant.
    pub fn etiquette(self) -> String {
        match self {
            Evenement::Chiffre(c) => c.to_string(),
            Evenement::Virgule => ".".to_string(),
            Evenement::Operateur(op) => op.glyphe().to_string(),
            Evenement::Effacer => "C".to_string(),
        }
    }
}

impl fmt::Display for Evenement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Evenement::Chiffre(c) => write!(f, "chiffre({c})"),
            Evenement::Virgule => write!(f, "virgule"),
            Evenement::Operateur(op) => write!(f, "opérateur({op})"),
            Evenement::Effacer => write!(f, "effacer"),
        }
    }
}

/// Charge utile brute d’un bouton -> événement.
///
/// Accepte : "0".."9", ".", "+", "-", "*", "/", "=", "×", "÷", "C".
impl FromStr for Evenement {
    type Err = ErreurSaisie;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        let mut it = t.chars();
        let (Some(c), None) = (it.next(), it.next()) else {
            return Err(ErreurSaisie::ToucheInconnue(s.to_string()));
        };

        match c {
            '0'..='9' => Chiffre::try_from(c).map(Evenement::Chiffre),
            '.' => Ok(Evenement::Virgule),
            'C' | 'c' => Ok(Evenement::Effacer),
            _ => Operateur::try_from(c)
                .map(Evenement::Operateur)
                .map_err(|_| ErreurSaisie::ToucheInconnue(s.to_string())),
        }
    }
}
