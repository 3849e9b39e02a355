//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : posséder l’accumulateur + le texte affiché, et traduire les
//! commandes de la coque (boutons, clavier) en appels au noyau.
//!
//! Contrats :
//! - Aucune logique de calcul ici (tout passe par crate::noyau).
//! - Une seule conversion d’erreur : ErreurEvaluation -> "Error".
//! - Après un échec, l’expression est conservée (on peut la corriger).

use tracing::debug;

use crate::noyau::{calculer, Accumulateur};

/// Texte affiché quand l’évaluation échoue (aucun détail pour l’utilisateur).
pub const MESSAGE_ERREUR: &str = "Error";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operateur {
    Plus,
    Moins,
    Fois,
    Divise,
}

impl Operateur {
    pub fn symbole(self) -> &'static str {
        match self {
            Operateur::Plus => "+",
            Operateur::Moins => "-",
            Operateur::Fois => "*",
            Operateur::Divise => "/",
        }
    }
}

/// Commande unique venant de la coque (bouton ou touche).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Commande {
    /// Chiffre 0-9 ou point décimal.
    Chiffre(char),
    Operateur(Operateur),
    Egal,
    Effacer,
    Supprimer,
}

impl Commande {
    /// Caractère tapé au clavier -> commande (None si la touche est ignorée).
    pub fn depuis_touche(c: char) -> Option<Self> {
        match c {
            '0'..='9' | '.' => Some(Commande::Chiffre(c)),
            '+' => Some(Commande::Operateur(Operateur::Plus)),
            '-' => Some(Commande::Operateur(Operateur::Moins)),
            '*' => Some(Commande::Operateur(Operateur::Fois)),
            '/' => Some(Commande::Operateur(Operateur::Divise)),
            '=' => Some(Commande::Egal),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppCalc {
    // --- entrée utilisateur ---
    pub acc: Accumulateur,

    // --- sortie ---
    pub affichage: String,
}

impl AppCalc {
    /// Point d’entrée unique de la coque.
    pub fn appliquer(&mut self, commande: Commande) {
        match commande {
            Commande::Chiffre(c) => {
                let mut tampon = [0u8; 4];
                self.sur_saisie(c.encode_utf8(&mut tampon));
            }
            Commande::Operateur(op) => self.sur_saisie(op.symbole()),
            Commande::Egal => self.sur_egal(),
            Commande::Effacer => self.sur_effacer(),
            Commande::Supprimer => self.sur_supprimer(),
        }
    }

    /* ------------------------ Opérations (une par événement) ------------------------ */

    pub fn sur_saisie(&mut self, jeton: &str) {
        self.acc.ajouter(jeton);
        self.rafraichir();
    }

    /// "=" : le résultat remplace l’expression ; sinon "Error" et expression conservée.
    pub fn sur_egal(&mut self) {
        match calculer(&mut self.acc) {
            Ok(texte) => self.affichage = texte,
            Err(e) => {
                debug!(expression = self.acc.texte_courant(), erreur = %e, "évaluation refusée");
                self.affichage = MESSAGE_ERREUR.to_string();
            }
        }
    }

    /// C : tout effacer.
    pub fn sur_effacer(&mut self) {
        self.acc.effacer();
        self.rafraichir();
    }

    /// Del : dernier caractère.
    pub fn sur_supprimer(&mut self) {
        self.acc.supprimer_dernier();
        self.rafraichir();
    }

    fn rafraichir(&mut self) {
        self.affichage.clear();
        self.affichage.push_str(self.acc.texte_courant());
    }
}
