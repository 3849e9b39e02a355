// src/noyau/calcul.rs
//
// Orchestration "=" : évaluer l’accumulateur, formater, ré-injecter.
// En cas d’échec, l’accumulateur n’est PAS modifié (l’utilisateur peut corriger).

use tracing::debug;

use super::accumulateur::Accumulateur;
use super::erreur::ErreurEvaluation;
use super::eval::evaluer_expression;
use super::format::formater_resultat;

/// Évalue l’expression courante.
///
/// Succès : le texte formaté devient le seul contenu de `acc` (calcul en chaîne)
/// et est renvoyé pour l’affichage.
pub fn calculer(acc: &mut Accumulateur) -> Result<String, ErreurEvaluation> {
    let valeur = evaluer_expression(acc.texte_courant())?;
    let texte = formater_resultat(valeur);

    debug!(expression = acc.texte_courant(), valeur, affichage = %texte, "calcul");

    acc.remplacer(texte.clone());
    Ok(texte)
}
