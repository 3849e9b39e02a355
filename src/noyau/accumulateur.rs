//! Accumulateur d’entrée : l’expression en cours de saisie.
//!
//! Contrats :
//! - Aucune validation (la coque UI ne propose que chiffres, `.` et opérateurs).
//! - Mutations : ajout en fin, suppression du dernier caractère, remise à zéro,
//!   remplacement complet (résultat ré-injecté après "=").

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Accumulateur {
    expression: String,
}

impl Accumulateur {
    /// Concatène `jeton` (un caractère ou un résultat formaté).
    pub fn ajouter(&mut self, jeton: &str) {
        self.expression.push_str(jeton);
    }

    /// Retire le dernier caractère ; sans effet si l’expression est vide.
    pub fn supprimer_dernier(&mut self) {
        self.expression.pop();
    }

    pub fn effacer(&mut self) {
        self.expression.clear();
    }

    /// L’expression telle quelle, pour l’affichage et l’évaluation.
    pub fn texte_courant(&self) -> &str {
        &self.expression
    }

    /// Remplace tout le contenu (résultat d’un calcul réussi).
    pub fn remplacer(&mut self, texte: impl Into<String>) {
        self.expression = texte.into();
    }
}
