//! Noyau de la calculatrice (f64, sans UI)
//!
//! Organisation interne :
//! - jetons.rs       : découpe additive (+ -) puis multiplicative (* /)
//! - eval.rs         : réduction en deux passes -> f64
//! - format.rs       : affichage 5 décimales, zéros finaux retirés
//! - accumulateur.rs : expression en cours de saisie
//! - calcul.rs       : orchestration "=" (évaluer, formater, ré-injecter)
//! - erreur.rs       : ErreurEvaluation

pub mod accumulateur;
pub mod calcul;
pub mod erreur;
pub mod eval;
pub mod format;
pub mod jetons;

#[cfg(test)]
mod tests_proprietes;

#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use accumulateur::Accumulateur;
pub use calcul::calculer;
