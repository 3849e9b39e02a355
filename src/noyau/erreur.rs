// src/noyau/erreur.rs

use thiserror::Error;

/// Unique type d’erreur du noyau.
///
/// L’UI ne montre jamais le détail : tout échec devient "Error" à l’écran.
/// Les variantes servent aux logs et aux tests.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ErreurEvaluation {
    #[error("Entrée vide")]
    Vide,

    #[error("caractère inattendu: '{caractere}' (position {position})")]
    CaractereInvalide { caractere: char, position: usize },

    /// Opérateur sans opérande à sa droite (ou à sa gauche pour * et /).
    #[error("opérande manquant autour de '{operateur}'")]
    OperandeManquant { operateur: char },

    #[error("nombre invalide: {0:?}")]
    NombreInvalide(String),

    #[error("division par zéro")]
    DivisionParZero,

    #[error("dépassement de capacité (résultat non fini)")]
    Depassement,
}
