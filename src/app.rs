// src/app.rs
//
// Calculatrice : module App (racine)
// ----------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + vue.rs)
// - Ré-exporter AppCalc (pour main.rs: use crate::app::AppCalc;)
// - Fournir l’impl eframe::App (compatible NATIF + WEB)
// - Traduire le clavier en Commande (même chemin que les boutons)

pub mod etat;
pub mod vue;

// Ré-export pratique : `use crate::app::AppCalc;`
pub use etat::AppCalc;

use eframe::egui;

use etat::Commande;

/// Commandes clavier de la frame, dans l’ordre de frappe.
///
/// - texte tapé : chiffres, `.`, `+ - * /`
/// - Enter = "=", Backspace = Del, Escape = C
fn commandes_clavier(input: &egui::InputState) -> Vec<Commande> {
    let mut out = Vec::new();

    for ev in &input.events {
        match ev {
            egui::Event::Text(texte) => {
                out.extend(texte.chars().filter_map(Commande::depuis_touche));
            }
            egui::Event::Key {
                key, pressed: true, ..
            } => match key {
                egui::Key::Enter => out.push(Commande::Egal),
                egui::Key::Backspace => out.push(Commande::Supprimer),
                egui::Key::Escape => out.push(Commande::Effacer),
                _ => {}
            },
            _ => {}
        }
    }

    out
}

impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        for commande in ctx.input(commandes_clavier) {
            self.appliquer(commande);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui); // méthode publique (dans vue.rs)
        });
    }
}
