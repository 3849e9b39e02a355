// src/noyau/format.rs
//
// Affichage du résultat : 5 décimales, arrondi au plus proche (demi vers
// l’extérieur), puis on retire les zéros finaux et le point orphelin.
//
// L’arrondi porte sur la plus courte écriture décimale qui relit le même f64
// (celle que l’utilisateur a tapée), pas sur la valeur binaire exacte :
// 0.123455 vaut 0.12345499999… en binaire mais s’affiche "0.12346".

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{Signed, Zero};

/// Nombre de décimales affichées.
pub const DECIMALES: usize = 5;

fn pow10(n: usize) -> BigInt {
    BigInt::from(10).pow(n as u32)
}

/// Convertit un entier “scalé” (×10^digits) en texte décimal.
fn scaled_to_decimal(scaled: &BigInt, digits: usize) -> String {
    let neg = scaled.is_negative();
    let abs = scaled.abs();

    let scale = pow10(digits);
    let int_part = &abs / &scale;
    let frac_part = &abs % &scale;

    let mut frac = frac_part.to_str_radix(10);
    while frac.len() < digits {
        frac.insert(0, '0');
    }

    let signe = if neg { "-" } else { "" };
    if digits == 0 {
        format!("{signe}{int_part}")
    } else {
        format!("{signe}{int_part}.{frac}")
    }
}

/// "2.50000" -> "2.5" ; "4.00000" -> "4" ; "12" -> "12"
fn retirer_zeros_finaux(texte: &str) -> &str {
    if !texte.contains('.') {
        return texte;
    }
    texte.trim_end_matches('0').trim_end_matches('.')
}

/// Plus courte écriture décimale qui relit `valeur`, en rationnel exact.
///
/// `{:e}` donne les chiffres minimaux ("1.23455e-1") ; None si non fini.
fn decimal_le_plus_court(valeur: f64) -> Option<BigRational> {
    if !valeur.is_finite() {
        return None;
    }

    let texte = format!("{:e}", valeur.abs());
    let (mantisse, exposant) = texte.split_once('e')?;
    let exposant: i64 = exposant.parse().ok()?;
    let (entier, fraction) = mantisse.split_once('.').unwrap_or((mantisse, ""));

    let chiffres = BigInt::parse_bytes(format!("{entier}{fraction}").as_bytes(), 10)?;
    // valeur = chiffres × 10^puissance
    let puissance = exposant - fraction.len() as i64;

    let abs = if puissance >= 0 {
        BigRational::from_integer(chiffres * pow10(puissance as usize))
    } else {
        BigRational::new(chiffres, pow10(puissance.unsigned_abs() as usize))
    };

    Some(if valeur.is_sign_negative() { -abs } else { abs })
}

/// API publique : f64 -> texte affichable (et ré-injectable dans l’entrée).
pub fn formater_resultat(valeur: f64) -> String {
    let Some(decimal) = decimal_le_plus_court(valeur) else {
        // NaN / infini : jamais produit par evaluer_expression
        return if valeur.is_nan() {
            "NaN".to_string()
        } else if valeur.is_sign_positive() {
            "Infinity".to_string()
        } else {
            "-Infinity".to_string()
        };
    };

    let scale = BigRational::from_integer(pow10(DECIMALES));
    // round() : demi-cas arrondis en s’éloignant de zéro
    let scaled = (decimal * scale).round().to_integer();

    // -0.000001 arrondi -> 0 (pas de "-0")
    if scaled.is_zero() {
        return "0".to_string();
    }

    retirer_zeros_finaux(&scaled_to_decimal(&scaled, DECIMALES)).to_string()
}
