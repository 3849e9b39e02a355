//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler l’évaluateur avec des saisies "au hasard" du pavé.
//! - RNG déterministe (seed fixe)
//! - longueur bornée
//! - budget temps global
//! - aucune panique ; seules des erreurs du noyau sont acceptées
//! - invariant clé : un résultat accepté est fini et son affichage se relit

use std::time::{Duration, Instant};

use super::erreur::ErreurEvaluation;
use super::eval::evaluer_expression;
use super::format::formater_resultat;
use super::{calculer, Accumulateur};

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

/* ------------------------ Génération ------------------------ */

/// Touches du pavé (hors "=", "C", "Del").
const TOUCHES: [char; 15] = [
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', '.', '+', '-', '*', '/',
];

/// Saisie brute : n’importe quelle suite de touches (souvent mal formée).
fn gen_saisie(rng: &mut Rng, longueur_max: u32) -> String {
    let n = 1 + rng.pick(longueur_max);
    (0..n)
        .map(|_| TOUCHES[rng.pick(TOUCHES.len() as u32) as usize])
        .collect()
}

/// Saisie bien formée : facteurs entiers non nuls séparés par des opérateurs.
fn gen_bien_formee(rng: &mut Rng, nb_facteurs: u32) -> String {
    let mut s = String::new();
    for i in 0..(1 + rng.pick(nb_facteurs)) {
        if i > 0 {
            s.push(['+', '-', '*', '/'][rng.pick(4) as usize]);
        }
        s.push_str(&(1 + rng.pick(999)).to_string());
    }
    s
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_saisies_brutes_sans_panique() {
    let t0 = Instant::now();
    let max = Duration::from_secs(5);

    let mut rng = Rng::new(0xC0FFEE_u64);

    let mut seen_ok = 0usize;
    let mut seen_err = 0usize;

    for _ in 0..2000 {
        budget(t0, max);

        let expr = gen_saisie(&mut rng, 12);

        match evaluer_expression(&expr) {
            Ok(v) => {
                assert!(v.is_finite(), "résultat non fini: expr={expr:?} v={v}");
                seen_ok += 1;
            }
            Err(e) => {
                // alphabet du pavé : jamais de caractère invalide
                assert!(
                    !matches!(e, ErreurEvaluation::CaractereInvalide { .. }),
                    "erreur non attendue: expr={expr:?} err={e}"
                );
                seen_err += 1;
            }
        }
    }

    // On veut voir un mix des deux, sinon le fuzz ne “balaye” rien.
    assert!(seen_ok > 50, "trop peu de succès: {seen_ok}");
    assert!(seen_err > 50, "trop peu d’erreurs: {seen_err}");
}

#[test]
fn fuzz_safe_bien_formees_toujours_ok() {
    let t0 = Instant::now();
    let max = Duration::from_secs(3);

    let mut rng = Rng::new(0xBADC0DE_u64);

    for _ in 0..1000 {
        budget(t0, max);

        let expr = gen_bien_formee(&mut rng, 8);
        if let Err(e) = evaluer_expression(&expr) {
            panic!("expr bien formée refusée: {expr:?} err={e}");
        }
    }
}

#[test]
fn fuzz_safe_enchainement_reinjecte() {
    // Le texte affiché après "=" doit toujours être une entrée valide.
    let t0 = Instant::now();
    let max = Duration::from_secs(3);

    let mut rng = Rng::new(0x5EED_u64);
    let mut acc = Accumulateur::default();

    for _ in 0..300 {
        budget(t0, max);

        let suite = gen_bien_formee(&mut rng, 3);
        if !acc.texte_courant().is_empty() {
            acc.ajouter(["+", "-", "*", "/"][rng.pick(4) as usize]);
        }
        acc.ajouter(&suite);

        match calculer(&mut acc) {
            Ok(texte) => {
                let relu = evaluer_expression(&texte)
                    .unwrap_or_else(|e| panic!("affichage non relisible: {texte:?} err={e}"));
                assert_eq!(formater_resultat(relu), texte);
            }
            // débordement possible sur longue chaîne de produits : on repart de zéro
            Err(_) => acc.effacer(),
        }
    }
}
