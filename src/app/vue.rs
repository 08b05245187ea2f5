// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// - Écran : une ligne, alignée à droite, grande police monospace
// - Pavé  : rangée d'opérateurs, puis 7 8 9 / 4 5 6 / 1 2 3 / . 0 C =
// - Réglages : panneau repliable (précision, non-fini, texte d'erreur)
//
// Pas de raccourcis clavier : tout passe par les boutons.

use eframe::egui;

use super::etat::AppCalc;
use crate::noyau::{Chiffre, Evenement, Operateur};
use crate::noyau::arrondi::CHIFFRES_MAX;
use crate::reglages::{PolitiqueNonFini, Reglages};

const TAILLE_TOUCHE: [f32; 2] = [64.0, 48.0];

const CHIFFRES_MAX_U32: u32 = CHIFFRES_MAX as u32;

/// Précision montrée dans le panneau : bornée avant conversion (TOML arbitraire).
fn precision_affichee(reglages: &Reglages) -> u32 {
    u32::try_from(reglages.chiffres()).unwrap_or(CHIFFRES_MAX_U32)
}

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        ui.vertical_centered(|ui| {
            ui.heading(crate::TITRE_APP);
        });
        ui.add_space(8.0);

        self.ui_ecran(ui);

        ui.add_space(8.0);

        self.ui_pave(ui);

        ui.add_space(8.0);
        ui.separator();

        self.ui_reglages(ui);
    }

    fn ui_ecran(&self, ui: &mut egui::Ui) {
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        egui::RichText::new(self.affichage())
                            .monospace()
                            .size(32.0),
                    );
                });
            });
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_calculatrice")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                for rangee in pave() {
                    for touche in rangee.into_iter().flatten() {
                        self.bouton(ui, touche);
                    }
                    ui.end_row();
                }
            });
    }

    fn bouton(&mut self, ui: &mut egui::Ui, evenement: Evenement) {
        let etiquette = evenement.etiquette();
        let texte = egui::RichText::new(&etiquette).size(20.0);
        let resp = ui.add_sized(TAILLE_TOUCHE, egui::Button::new(texte));
        if resp.clicked() {
            self.touche(&etiquette);
        }
    }

    fn ui_reglages(&mut self, ui: &mut egui::Ui) {
        egui::CollapsingHeader::new("Réglages")
            .default_open(false)
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.label("Précision :");
                    let mut d = precision_affichee(&self.brouillon);
                    let resp = ui.add(
                        egui::DragValue::new(&mut d)
                            .speed(1)
                            .range(1..=CHIFFRES_MAX_U32)
                            .suffix(" chiffres"),
                    );
                    if resp.changed() {
                        self.brouillon.chiffres_significatifs =
                            usize::try_from(d).unwrap_or(CHIFFRES_MAX);
                    }
                });

                ui.horizontal(|ui| {
                    ui.label("Résultat non fini :");
                    ui.radio_value(
                        &mut self.brouillon.non_fini,
                        PolitiqueNonFini::Erreur,
                        "message",
                    );
                    ui.radio_value(
                        &mut self.brouillon.non_fini,
                        PolitiqueNonFini::Brut,
                        "valeur brute",
                    );
                });

                ui.horizontal(|ui| {
                    ui.label("Message d'erreur :");
                    ui.add(
                        egui::TextEdit::singleline(&mut self.brouillon.texte_erreur)
                            .desired_width(120.0),
                    );
                });

                ui.add_space(4.0);

                ui.horizontal(|ui| {
                    if ui.button("Appliquer").clicked() {
                        self.appliquer_reglages();
                    }
                    let peut_enregistrer = self.chemin_reglages.is_some();
                    if ui
                        .add_enabled(peut_enregistrer, egui::Button::new("Enregistrer"))
                        .clicked()
                    {
                        self.enregistrer_reglages();
                    }
                    if ui.button("Annuler").clicked() {
                        self.annuler_reglages();
                    }
                });

                if !self.message_reglages.is_empty() {
                    ui.label(&self.message_reglages);
                }
            });
    }
}

/// Disposition du pavé (4 colonnes ; `None` = case vide).
fn pave() -> [[Option<Evenement>; 4]; 5] {
    let c = |n: usize| Some(Evenement::Chiffre(Chiffre::TOUS[n]));
    let op = |o: Operateur| Some(Evenement::Operateur(o));

    [
        Operateur::RANGEE.map(op),
        [c(7), c(8), c(9), None],
        [c(4), c(5), c(6), None],
        [c(1), c(2), c(3), None],
        [
            Some(Evenement::Virgule),
            c(0),
            Some(Evenement::Effacer),
            op(Operateur::Egal),
        ],
    ]
}
