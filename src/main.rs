// src/main.rs
//
// Calculatrice — point d’entrée NATIF + WEB (WASM)
// ------------------------------------------------
// - NATIF (Linux/Windows/macOS) : journalisation + réglages + eframe::run_native
// - WEB  (wasm32)              : eframe::WebRunner sur <canvas id="the_canvas_id">,
//                                réglages par défaut (pas de fichier)

#![cfg_attr(target_arch = "wasm32", allow(unused_imports))]

use calculatrice_simple::app::AppCalc;
use calculatrice_simple::TITRE_APP;

/* ------------------------ Entrée NATIF (PC) ------------------------ */

#[cfg(not(target_arch = "wasm32"))]
mod natif {
    use std::path::PathBuf;

    use clap::Parser;
    use tracing_subscriber::EnvFilter;

    use calculatrice_simple::reglages::{self, PolitiqueNonFini};

    use super::AppCalc;

    #[derive(Parser, Debug)]
    #[command(name = "calculatrice", version, about = "Calculatrice simple (pavé + 4 opérations)")]
    pub struct Args {
        /// Fichier de réglages (TOML) à utiliser à la place de l’emplacement par défaut
        #[arg(long, value_name = "PATH")]
        pub reglages: Option<PathBuf>,

        /// Affiche les résultats non finis tels quels (Infinity, NaN) pour cette session
        #[arg(long)]
        pub brut: bool,
    }

    pub fn init_journal() {
        let filtre = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        tracing_subscriber::fmt().with_env_filter(filtre).init();
    }

    pub fn preparer_app(args: Args) -> AppCalc {
        let chemin = args.reglages.or_else(reglages::chemin_reglages);
        let mut r = reglages::charger(chemin.as_deref());
        if args.brut {
            r.non_fini = PolitiqueNonFini::Brut;
        }
        AppCalc::new(r, chemin)
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    use clap::Parser;
    use eframe::egui;

    natif::init_journal();
    let app = natif::preparer_app(natif::Args::parse());
    tracing::info!("Démarrage de {TITRE_APP}");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(TITRE_APP)
            .with_inner_size([320.0, 520.0])
            .with_min_inner_size([300.0, 460.0]),
        ..Default::default()
    };

    eframe::run_native(TITRE_APP, options, Box::new(|_cc| Ok(Box::new(app))))
}

/* ------------------------ Entrée WEB (WASM) ------------------------ */

#[cfg(target_arch = "wasm32")]
fn main() {
    // En wasm32, le démarrage réel passe par `start()` (wasm_bindgen).
}

#[cfg(target_arch = "wasm32")]
mod web {
    use super::{AppCalc, TITRE_APP};

    use wasm_bindgen::JsCast;
    use web_sys::{window, HtmlCanvasElement};

    /// ID du canvas attendu dans index.html.
    const CANVAS_ID: &str = "the_canvas_id";

    /// Point d’entrée automatique au chargement de la page.
    #[wasm_bindgen::prelude::wasm_bindgen(start)]
    pub async fn start() -> Result<(), wasm_bindgen::JsValue> {
        let w = window().ok_or_else(|| js_err("window() indisponible"))?;
        let d = w
            .document()
            .ok_or_else(|| js_err("document() indisponible"))?;

        d.set_title(TITRE_APP);

        let el = d
            .get_element_by_id(CANVAS_ID)
            .ok_or_else(|| js_err("canvas introuvable (id incorrect dans index.html)"))?;

        let canvas: HtmlCanvasElement = el
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| js_err("l’élément trouvé n’est pas un <canvas>"))?;

        let web_options = eframe::WebOptions::default();

        eframe::WebRunner::new()
            .start(
                canvas,
                web_options,
                Box::new(|_cc| Ok(Box::<AppCalc>::default())),
            )
            .await
    }

    fn js_err(msg: &str) -> wasm_bindgen::JsValue {
        wasm_bindgen::JsValue::from_str(msg)
    }
}
