// src/noyau/jetons.rs
//
// Découpage en deux niveaux, sans parser :
// - niveau additif       : "2+3*4-1" -> [2] [+] [3*4] [-] [1]
// - niveau multiplicatif : "3*4/2"   -> [3] [*] [4] [/] [2]
//
// Chaque caractère opérateur est un séparateur. Les morceaux vides
// (début d’expression, opérateurs consécutifs) ne produisent pas de jeton :
// c’est le réducteur (eval.rs) qui décide si la suite est bien formée.

use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Signe {
    Plus,
    Moins,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OpMul {
    Fois,
    Divise,
}

impl Signe {
    pub fn depuis(c: char) -> Option<Self> {
        match c {
            '+' => Some(Signe::Plus),
            '-' => Some(Signe::Moins),
            _ => None,
        }
    }

    pub fn symbole(self) -> char {
        match self {
            Signe::Plus => '+',
            Signe::Moins => '-',
        }
    }
}

impl OpMul {
    pub fn depuis(c: char) -> Option<Self> {
        match c {
            '*' => Some(OpMul::Fois),
            '/' => Some(OpMul::Divise),
            _ => None,
        }
    }

    pub fn symbole(self) -> char {
        match self {
            OpMul::Fois => '*',
            OpMul::Divise => '/',
        }
    }
}

/// Jeton du niveau additif. `Terme` emprunte l’expression (pas de copie).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum JetonAdditif<'a> {
    Signe(Signe),
    Terme(&'a str),
}

/// Jeton du niveau multiplicatif, à l’intérieur d’un terme.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum JetonMultiplicatif<'a> {
    Op(OpMul),
    Facteur(&'a str),
}

/// Découpe générique : coupe `s` à chaque caractère reconnu par `sep`.
fn decouper<'a, O, J>(
    s: &'a str,
    sep: impl Fn(char) -> Option<O>,
    morceau: impl Fn(&'a str) -> J,
    operateur: impl Fn(O) -> J,
) -> Vec<J> {
    let mut out = Vec::new();
    let mut debut = 0;

    for (i, c) in s.char_indices() {
        if let Some(op) = sep(c) {
            if i > debut {
                out.push(morceau(&s[debut..i]));
            }
            out.push(operateur(op));
            debut = i + c.len_utf8();
        }
    }

    if debut < s.len() {
        out.push(morceau(&s[debut..]));
    }

    out
}

/// Niveau additif : coupe à chaque '+' ou '-'.
pub fn decouper_additif(expression: &str) -> Vec<JetonAdditif<'_>> {
    decouper(
        expression,
        Signe::depuis,
        JetonAdditif::Terme,
        JetonAdditif::Signe,
    )
}

/// Niveau multiplicatif : coupe un terme à chaque '*' ou '/'.
pub fn decouper_multiplicatif(terme: &str) -> Vec<JetonMultiplicatif<'_>> {
    decouper(
        terme,
        OpMul::depuis,
        JetonMultiplicatif::Facteur,
        JetonMultiplicatif::Op,
    )
}

impl fmt::Display for JetonAdditif<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JetonAdditif::Signe(s) => write!(f, "{}", s.symbole()),
            JetonAdditif::Terme(t) => write!(f, "[{t}]"),
        }
    }
}

impl fmt::Display for JetonMultiplicatif<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JetonMultiplicatif::Op(op) => write!(f, "{}", op.symbole()),
            JetonMultiplicatif::Facteur(x) => write!(f, "[{x}]"),
        }
    }
}

/// Format utilitaire (logs) : liste de jetons en texte.
pub fn format_jetons<J: fmt::Display>(jetons: &[J]) -> String {
    jetons
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
