//! Noyau : évaluation (deux passes, gauche à droite)
//!
//! expression -> jetons additifs -> (chaque terme) jetons multiplicatifs -> f64
//!
//! Pas de parser ni de parenthèses : la priorité de * et / vient uniquement
//! du fait qu’un terme est réduit entièrement avant d’être additionné.

use tracing::trace;

use super::erreur::ErreurEvaluation;
use super::jetons::{
    decouper_additif, decouper_multiplicatif, format_jetons, JetonAdditif, JetonMultiplicatif,
    OpMul, Signe,
};

/// Alphabet accepté : chiffres, point décimal, + - * /
fn est_caractere_valide(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '.' | '+' | '-' | '*' | '/')
}

/// API publique : évalue une expression plate ("2+3*4", "-5*2", "1/3").
///
/// Règles aux bords :
/// - un signe en tête porte sur le premier terme ("-5+3" = -2)
/// - plusieurs signes de suite : le dernier gagne ("5+-3" = 2)
/// - un signe final après au moins un terme est ignoré ("5+" = 5)
/// - une expression sans aucun terme ("+", "--") : erreur
pub fn evaluer_expression(expression: &str) -> Result<f64, ErreurEvaluation> {
    if expression.is_empty() {
        return Err(ErreurEvaluation::Vide);
    }

    if let Some((position, caractere)) = expression
        .char_indices()
        .find(|&(_, c)| !est_caractere_valide(c))
    {
        return Err(ErreurEvaluation::CaractereInvalide {
            caractere,
            position,
        });
    }

    let jetons = decouper_additif(expression);
    trace!(jetons = %format_jetons(&jetons), "découpe additive");

    let mut resultat = 0.0_f64;
    let mut signe = Signe::Plus;
    // Signe lu mais pas encore consommé par un terme.
    let mut signe_en_attente: Option<Signe> = None;
    let mut nb_termes = 0usize;

    for jeton in jetons {
        match jeton {
            JetonAdditif::Signe(s) => {
                signe = s;
                signe_en_attente = Some(s);
            }
            JetonAdditif::Terme(terme) => {
                let valeur = reduire_terme(terme)?;
                match signe {
                    Signe::Plus => resultat += valeur,
                    Signe::Moins => resultat -= valeur,
                }
                signe_en_attente = None;
                nb_termes += 1;
            }
        }
    }

    if nb_termes == 0 {
        // "+", "--" ...
        return Err(match signe_en_attente {
            Some(s) => ErreurEvaluation::OperandeManquant {
                operateur: s.symbole(),
            },
            None => ErreurEvaluation::Vide,
        });
    }
    if !resultat.is_finite() {
        return Err(ErreurEvaluation::Depassement);
    }

    Ok(resultat)
}

/// Sous-passe multiplicative : réduit un terme "a*b/c" de gauche à droite.
fn reduire_terme(terme: &str) -> Result<f64, ErreurEvaluation> {
    let jetons = decouper_multiplicatif(terme);
    trace!(terme, jetons = %format_jetons(&jetons), "découpe multiplicative");

    let mut it = jetons.into_iter();

    let mut sous_resultat = match it.next() {
        Some(JetonMultiplicatif::Facteur(f)) => lire_facteur(f)?,
        Some(JetonMultiplicatif::Op(op)) => {
            return Err(ErreurEvaluation::OperandeManquant {
                operateur: op.symbole(),
            })
        }
        // un terme n’est jamais vide (voir jetons.rs)
        None => return Err(ErreurEvaluation::Vide),
    };

    while let Some(jeton) = it.next() {
        let op = match jeton {
            JetonMultiplicatif::Op(op) => op,
            // deux facteurs ne peuvent pas se suivre sans opérateur
            JetonMultiplicatif::Facteur(f) => {
                return Err(ErreurEvaluation::NombreInvalide(f.to_string()))
            }
        };

        let operande = match it.next() {
            Some(JetonMultiplicatif::Facteur(f)) => lire_facteur(f)?,
            _ => {
                return Err(ErreurEvaluation::OperandeManquant {
                    operateur: op.symbole(),
                })
            }
        };

        match op {
            OpMul::Fois => sous_resultat *= operande,
            OpMul::Divise => {
                if operande == 0.0 {
                    return Err(ErreurEvaluation::DivisionParZero);
                }
                sous_resultat /= operande;
            }
        }
    }

    Ok(sous_resultat)
}

/// Littéral décimal : "12", "12.", ".5", "12.5". Un seul point, au moins un chiffre.
fn lire_facteur(facteur: &str) -> Result<f64, ErreurEvaluation> {
    let nb_points = facteur.chars().filter(|&c| c == '.').count();
    let a_un_chiffre = facteur.chars().any(|c| c.is_ascii_digit());

    if nb_points > 1 || !a_un_chiffre {
        return Err(ErreurEvaluation::NombreInvalide(facteur.to_string()));
    }

    facteur
        .parse::<f64>()
        .map_err(|_| ErreurEvaluation::NombreInvalide(facteur.to_string()))
}
