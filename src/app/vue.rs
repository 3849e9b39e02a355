// src/app/vue.rs
//
// Vue (UI egui) : natif + web
// ---------------------------
// - Afficheur en haut (lecture seule, gros caractères)
// - Pavé 4 colonnes : chiffres, opérateurs, Del, C, =
// - Chaque bouton porte sa Commande (table statique) : aucun test de libellé
//
// Le clavier est géré dans app.rs (global, pas de champ texte à focaliser).

use eframe::egui;
use egui::{Color32, RichText};

use super::etat::{AppCalc, Commande, Operateur};

/// Taille de police de l’afficheur.
const TAILLE_AFFICHEUR: f32 = 40.0;
/// Taille de police des boutons.
const TAILLE_BOUTON: f32 = 30.0;
/// Taille d’un bouton du pavé.
const BOUTON: [f32; 2] = [76.0, 48.0];

const GRIS_CLAIR: Color32 = Color32::from_rgb(200, 200, 200);
const GRIS_FONCE: Color32 = Color32::from_rgb(150, 150, 150);

/// Pavé, ligne par ligne (4 colonnes ; la dernière ligne est incomplète).
const PAVE: [(&str, Commande); 18] = [
    ("7", Commande::Chiffre('7')),
    ("8", Commande::Chiffre('8')),
    ("9", Commande::Chiffre('9')),
    ("/", Commande::Operateur(Operateur::Divise)),
    ("4", Commande::Chiffre('4')),
    ("5", Commande::Chiffre('5')),
    ("6", Commande::Chiffre('6')),
    ("*", Commande::Operateur(Operateur::Fois)),
    ("1", Commande::Chiffre('1')),
    ("2", Commande::Chiffre('2')),
    ("3", Commande::Chiffre('3')),
    ("-", Commande::Operateur(Operateur::Moins)),
    ("Del", Commande::Supprimer),
    ("0", Commande::Chiffre('0')),
    (".", Commande::Chiffre('.')),
    ("+", Commande::Operateur(Operateur::Plus)),
    ("C", Commande::Effacer),
    ("=", Commande::Egal),
];

const COLONNES: usize = 4;

/// (fond, texte) selon le type de touche.
fn couleurs(commande: Commande) -> (Color32, Color32) {
    match commande {
        Commande::Chiffre(_) | Commande::Supprimer => (GRIS_CLAIR, Color32::BLACK),
        Commande::Operateur(_) => (GRIS_FONCE, Color32::BLACK),
        Commande::Effacer => (Color32::BLUE, Color32::BLACK),
        Commande::Egal => (Color32::BLUE, Color32::WHITE),
    }
}

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        self.ui_afficheur(ui);

        ui.add_space(8.0);

        // La commande est appliquée après le dessin du pavé (une par frame).
        if let Some(commande) = Self::ui_pave(ui) {
            self.appliquer(commande);
        }
    }

    fn ui_afficheur(&self, ui: &mut egui::Ui) {
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.label(RichText::new(&self.affichage).size(TAILLE_AFFICHEUR).monospace());
            });
    }

    fn ui_pave(ui: &mut egui::Ui) -> Option<Commande> {
        let mut cliquee = None;

        egui::Grid::new("pave_calculatrice")
            .num_columns(COLONNES)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                for (i, (libelle, commande)) in PAVE.iter().enumerate() {
                    let (fond, texte) = couleurs(*commande);
                    let bouton = egui::Button::new(
                        RichText::new(*libelle).size(TAILLE_BOUTON).color(texte),
                    )
                    .fill(fond);

                    if ui.add_sized(BOUTON, bouton).clicked() {
                        cliquee = Some(*commande);
                    }

                    if (i + 1) % COLONNES == 0 {
                        ui.end_row();
                    }
                }
            });

        cliquee
    }
}
