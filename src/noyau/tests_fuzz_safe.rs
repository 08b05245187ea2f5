//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler le réducteur avec des suites de touches aléatoires.
//! - RNG déterministe (seed fixe)
//! - longueur de suite bornée
//! - budget temps global
//! - invariants clés, après CHAQUE touche :
//!   - au plus un "." à l’écran
//!   - hors erreur, l’écran se relit comme un nombre
//!   - en erreur, l’écran est exactement le texte d’erreur
//!   - "C" ramène toujours à l’état initial

use std::time::{Duration, Instant};

use super::etat::{reduire, Etat};
use super::evenement::{Chiffre, Evenement};
use super::format::lire_nombre;
use super::operateur::Operateur;
use crate::reglages::{PolitiqueNonFini, Reglages};

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Génération de touches ------------------------ */

const OPERATEURS: [Operateur; 5] = [
    Operateur::Plus,
    Operateur::Moins,
    Operateur::Fois,
    Operateur::Divise,
    Operateur::Egal,
];

fn gen_evenement(rng: &mut Rng) -> Evenement {
    // pondération : surtout des chiffres, un peu de tout le reste
    match rng.pick(20) {
        0..=10 => Evenement::Chiffre(Chiffre::TOUS[rng.pick(10) as usize]),
        11..=12 => Evenement::Virgule,
        13..=18 => Evenement::Operateur(OPERATEURS[rng.pick(5) as usize]),
        _ => Evenement::Effacer,
    }
}

fn check_invariants(etat: &Etat, reglages: &Reglages, trace: &[Evenement]) {
    let aff = &etat.affichage;

    assert!(
        aff.matches('.').count() <= 1,
        "deux virgules: {aff:?} après {trace:?}"
    );

    if etat.en_erreur {
        assert_eq!(aff, &reglages.texte_erreur, "après {trace:?}");
        assert!(etat.accumulateur.is_none());
        assert!(etat.operateur.is_none());
    } else {
        assert!(
            lire_nombre(aff).is_some(),
            "écran illisible: {aff:?} après {trace:?}"
        );
    }

    if reglages.non_fini == PolitiqueNonFini::Erreur {
        if let Some(acc) = etat.accumulateur {
            assert!(acc.is_finite(), "accumulateur non fini après {trace:?}");
        }
    }
}

fn campagne(seed: u64, reglages: &Reglages, suites: usize, longueur: u32) {
    let start = Instant::now();
    let max = Duration::from_secs(5);

    let mut rng = Rng::new(seed);
    for _ in 0..suites {
        budget(start, max);

        let n = 1 + rng.pick(longueur);
        let mut etat = Etat::default();
        let mut trace = Vec::with_capacity(n as usize);

        for _ in 0..n {
            let ev = gen_evenement(&mut rng);
            trace.push(ev);

            let (suivant, ecran) = reduire(&etat, ev, reglages);
            assert_eq!(ecran, suivant.affichage);
            check_invariants(&suivant, reglages, &trace);

            if ev == Evenement::Effacer {
                assert_eq!(suivant, Etat::default());
            }
            etat = suivant;
        }
    }
}

/* ------------------------ Campagnes ------------------------ */

#[test]
fn fuzz_politique_erreur() {
    campagne(0xC0FFEE, &Reglages::default(), 2_000, 40);
}

#[test]
fn fuzz_politique_brut() {
    let r = Reglages {
        non_fini: PolitiqueNonFini::Brut,
        ..Reglages::default()
    };
    campagne(0xBADC0DE, &r, 2_000, 40);
}

#[test]
fn fuzz_ecran_court_precision_basse() {
    let r = Reglages {
        chiffres_significatifs: 3,
        longueur_max: Some(4),
        ..Reglages::default()
    };
    campagne(7, &r, 1_000, 30);
}

#[test]
fn fuzz_deterministe() {
    // même seed => même suite d’écrans
    let r = Reglages::default();
    let rejouer = |seed: u64| {
        let mut rng = Rng::new(seed);
        let mut etat = Etat::default();
        let mut ecrans = Vec::new();
        for _ in 0..500 {
            let (suivant, ecran) = reduire(&etat, gen_evenement(&mut rng), &r);
            ecrans.push(ecran);
            etat = suivant;
        }
        ecrans
    };
    assert_eq!(rejouer(42), rejouer(42));
}
