//! Property-based tests for arithmetic in Z_q[X]/(X^256 + 1)

use edukyber_algorithms::poly::prelude::*;
use proptest::prelude::*;

type Poly = Polynomial<KyberRing>;

const Q: u32 = 3329;
const N: usize = 256;

/// Arbitrary canonical polynomial
fn poly() -> impl Strategy<Value = Poly> {
    prop::collection::vec(0..Q, N).prop_map(|c| Poly::from_coeffs(&c))
}

/// Polynomial with coefficients in [-2, 2], like CBD(2) noise
fn small_poly() -> impl Strategy<Value = Poly> {
    prop::collection::vec(-2i64..=2, N).prop_map(|c| Poly::from_signed(&c))
}

fn canonical(p: &Poly) -> bool {
    p.as_coeffs_slice().len() == N && p.as_coeffs_slice().iter().all(|&c| c < Q)
}

/// X^k as a polynomial
fn monomial(k: usize) -> Poly {
    let mut c = vec![0u32; N];
    c[k] = 1;
    Poly::from_coeffs(&c)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn add_is_commutative(a in poly(), b in poly()) {
        prop_assert_eq!(a.add(&b), b.add(&a));
    }

    #[test]
    fn sub_undoes_add(a in poly(), b in poly()) {
        prop_assert_eq!(a.add(&b).sub(&b), a.clone());
        prop_assert!(a.sub(&a).is_zero());
    }

    #[test]
    fn neg_is_additive_inverse(a in poly()) {
        prop_assert!(a.add(&a.neg()).is_zero());
    }

    #[test]
    fn mul_is_commutative(a in poly(), b in poly()) {
        prop_assert_eq!(a.mul(&b), b.mul(&a));
    }

    #[test]
    fn mul_is_associative(a in poly(), b in poly(), c in small_poly()) {
        prop_assert_eq!(a.mul(&b).mul(&c), a.mul(&b.mul(&c)));
    }

    #[test]
    fn mul_distributes_over_add(a in poly(), b in poly(), c in poly()) {
        prop_assert_eq!(a.mul(&b.add(&c)), a.mul(&b).add(&a.mul(&c)));
    }

    #[test]
    fn results_stay_canonical(a in poly(), b in poly(), s in 0..Q) {
        prop_assert!(canonical(&a.add(&b)));
        prop_assert!(canonical(&a.sub(&b)));
        prop_assert!(canonical(&a.mul(&b)));
        prop_assert!(canonical(&a.scalar_mul(s)));
    }

    #[test]
    fn multiplying_by_x_rotates_negacyclically(a in poly(), k in 0..N) {
        let shifted = a.mul(&monomial(k));
        for i in 0..N {
            let expected = if i >= k {
                a.coeff(i - k)
            } else {
                (Q - a.coeff(N + i - k)) % Q
            };
            prop_assert_eq!(shifted.coeff(i), expected);
        }
    }

    #[test]
    fn constant_mul_matches_scalar_mul(a in poly(), s in 0..Q) {
        prop_assert_eq!(a.mul(&Poly::constant(s)), a.scalar_mul(s));
    }

    #[test]
    fn one_is_identity(a in poly()) {
        prop_assert_eq!(a.mul(&Poly::constant(1)), a.clone());
        prop_assert!(a.mul(&Poly::zero()).is_zero());
    }

    #[test]
    fn centered_round_trips(a in poly()) {
        let centered: Vec<i64> = a.centered().into_iter().map(i64::from).collect();
        prop_assert!(centered.iter().all(|&c| c > -(Q as i64) / 2 - 1 && c <= Q as i64 / 2));
        prop_assert_eq!(Poly::from_signed(&centered), a);
    }
}

#[test]
fn x_to_the_n_is_minus_one() {
    let x = monomial(1);
    let x_255 = monomial(N - 1);
    let product = x.mul(&x_255);
    assert_eq!(product, Poly::constant(Q - 1));
}
