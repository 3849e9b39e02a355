//! Propriétés (proptest) : priorité des opérateurs + affichage stable.

use proptest::prelude::*;

use super::eval::evaluer_expression;
use super::format::formater_resultat;

/// Un facteur : entier ou décimal court, jamais nul.
fn facteur() -> impl Strategy<Value = (String, f64)> {
    prop_oneof![
        (1u32..10_000).prop_map(|n| (n.to_string(), n as f64)),
        (1u32..10_000, 1u32..100).prop_map(|(e, d)| {
            let s = format!("{e}.{d:02}");
            let v: f64 = s.parse().unwrap();
            (s, v)
        }),
    ]
}

/// Un terme : facteur (op facteur)*, avec sa valeur de référence.
fn terme() -> impl Strategy<Value = (String, f64)> {
    (
        facteur(),
        prop::collection::vec((any::<bool>(), facteur()), 0..4),
    )
        .prop_map(|((s0, v0), suite)| {
            let mut s = s0;
            let mut v = v0;
            for (fois, (sf, vf)) in suite {
                if fois {
                    s.push('*');
                    v *= vf;
                } else {
                    s.push('/');
                    v /= vf;
                }
                s.push_str(&sf);
            }
            (s, v)
        })
}

/// Une expression : terme (signe terme)*, avec sa valeur de référence.
fn expression() -> impl Strategy<Value = (String, f64)> {
    (terme(), prop::collection::vec((any::<bool>(), terme()), 0..5)).prop_map(
        |((s0, v0), suite)| {
            let mut s = s0;
            let mut v = 0.0 + v0;
            for (plus, (st, vt)) in suite {
                if plus {
                    s.push('+');
                    v += vt;
                } else {
                    s.push('-');
                    v -= vt;
                }
                s.push_str(&st);
            }
            (s, v)
        },
    )
}

proptest! {
    #[test]
    fn priorite_standard((expr, attendu) in expression()) {
        let obtenu = evaluer_expression(&expr).unwrap();
        prop_assert_eq!(obtenu, attendu, "expr={}", expr);
    }

    #[test]
    fn affichage_idempotent(x in -1.0e12f64..1.0e12) {
        let une_fois = formater_resultat(x);
        let relu: f64 = une_fois.parse().unwrap();
        prop_assert_eq!(formater_resultat(relu), une_fois);
    }

    #[test]
    fn affichage_relu_par_evaluateur(x in 0.0f64..1.0e9) {
        // Un résultat positif ré-injecté dans l’entrée se relit à l’identique.
        let texte = formater_resultat(x);
        let relu = evaluer_expression(&texte).unwrap();
        prop_assert_eq!(formater_resultat(relu), texte);
    }

    #[test]
    fn affichage_sans_zero_final(x in -1.0e6f64..1.0e6) {
        let texte = formater_resultat(x);
        if texte.contains('.') {
            prop_assert!(!texte.ends_with('0'), "texte={}", texte);
            let decimales = texte.split('.').nth(1).map_or(0, str::len);
            prop_assert!(decimales <= 5, "texte={}", texte);
        }
        prop_assert!(!texte.ends_with('.'));
    }
}
