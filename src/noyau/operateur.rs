// src/noyau/operateur.rs

use std::fmt;
use std::str::FromStr;

use super::erreur::ErreurSaisie;

/// Les cinq touches d’opération du pavé.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operateur {
    Plus,
    Moins,
    Fois,
    Divise,
    Egal,
}

impl Operateur {
    /// Ordre d’affichage sur la rangée du haut (sans "=").
    pub const RANGEE: [Operateur; 4] = [
        Operateur::Plus,
        Operateur::Moins,
        Operateur::Fois,
        Operateur::Divise,
    ];

    /// Symbole ASCII (charge utile des boutons).
    pub fn symbole(self) -> char {
        match self {
            Operateur::Plus => '+',
            Operateur::Moins => '-',
            Operateur::Fois => '*',
            Operateur::Divise => '/',
            Operateur::Egal => '=',
        }
    }

    /// Glyphe affiché sur le bouton.
    pub fn glyphe(self) -> &'static str {
        match self {
            Operateur::Plus => "+",
            Operateur::Moins => "-",
            Operateur::Fois => "×",
            Operateur::Divise => "÷",
            Operateur::Egal => "=",
        }
    }

    /// Applique l’opérateur, strictement de gauche à droite, SANS arrondi
    /// (l’arrondi est fait une seule fois par l’appelant).
    ///
    /// "=" renvoie le second opérande : un "=" répété ne fait que réafficher.
    /// Division par zéro : résultat IEEE (±inf / NaN), laissé à la politique de l’état.
    pub fn appliquer(self, premier: f64, second: f64) -> f64 {
        match self {
            Operateur::Plus => premier + second,
            Operateur::Moins => premier - second,
            Operateur::Fois => premier * second,
            Operateur::Divise => premier / second,
            Operateur::Egal => second,
        }
    }
}

impl fmt::Display for Operateur {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbole())
    }
}

impl TryFrom<char> for Operateur {
    type Error = ErreurSaisie;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            '+' => Ok(Operateur::Plus),
            '-' | '−' => Ok(Operateur::Moins),
            '*' | '×' => Ok(Operateur::Fois),
            '/' | '÷' => Ok(Operateur::Divise),
            '=' => Ok(Operateur::Egal),
            _ => Err(ErreurSaisie::OperateurInconnu(c.to_string())),
        }
    }
}

impl FromStr for Operateur {
    type Err = ErreurSaisie;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut it = s.trim().chars();
        match (it.next(), it.next()) {
            (Some(c), None) => Operateur::try_from(c),
            _ => Err(ErreurSaisie::OperateurInconnu(s.to_string())),
        }
    }
}
