//! Tangent-vector primitives for the exponent engine.
//!
//! `norm` is the *squared* Euclidean length. Everything downstream
//! (projection, normalisation, the log accumulation) is written against
//! that convention, so it must not be replaced by the true length.
use nalgebra::DVector;

pub type Vector = DVector<f64>;
pub type Basis = Vec<Vector>;

/// Sum of squared components.
pub fn norm(v: &Vector) -> f64 {
    v.iter().map(|c| c * c).sum()
}

/// Elementwise product sum. Panics on mismatched lengths.
pub fn inner(v1: &Vector, v2: &Vector) -> f64 {
    assert_eq!(v1.len(), v2.len(), "inner product of vectors with different dimensions");
    v1.iter().zip(v2.iter()).map(|(a, b)| a * b).sum()
}

/// Projection of `v` onto `u`: `(<u, v> / norm(u)) * u`.
///
/// `u` must be nonzero; the engine keeps that invariant by normalising
/// after every step and rejecting collapsed vectors before projecting.
pub fn project(u: &Vector, v: &Vector) -> Vector {
    let nu = norm(u);
    assert!(nu != 0.0, "projection onto the zero vector");
    u * (inner(u, v) / nu)
}

/// Unit vectors e_1..e_dim.
pub fn standard_basis(dim: usize) -> Basis {
    (0..dim).map(|i| Vector::from_fn(dim, |r, _| if r == i { 1.0 } else { 0.0 })).collect()
}

/// One-term Gram-Schmidt: every vector after the first loses only its
/// projection onto the input vector immediately before it. No normalisation.
///
/// In two dimensions this is exactly classical Gram-Schmidt. For `dim > 2`
/// the output is not guaranteed to be mutually orthogonal.
pub fn gram_schmidt(vectors: &[Vector]) -> Basis {
    let mut out = Vec::with_capacity(vectors.len());
    for (k, v) in vectors.iter().enumerate() {
        if k == 0 {
            out.push(v.clone());
        } else {
            out.push(v - project(&vectors[k - 1], v));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vec2(x: f64, y: f64) -> Vector {
        Vector::from_vec(vec![x, y])
    }

    #[test]
    fn norm_is_squared_length() {
        assert_eq!(norm(&vec2(3.0, 4.0)), 25.0);
    }

    #[test]
    fn inner_product_sums_products() {
        assert_eq!(inner(&vec2(1.0, 2.0), &vec2(3.0, -4.0)), -5.0);
    }

    #[test]
    #[should_panic(expected = "different dimensions")]
    fn inner_rejects_dimension_mismatch() {
        let _ = inner(&vec2(1.0, 2.0), &Vector::from_vec(vec![1.0, 2.0, 3.0]));
    }

    #[test]
    #[should_panic(expected = "zero vector")]
    fn project_onto_zero_fails_fast() {
        let _ = project(&vec2(0.0, 0.0), &vec2(1.0, 1.0));
    }

    #[test]
    fn self_projection_is_identity() {
        for v in [vec2(1.0, 0.0), vec2(2.0, -3.0), vec2(0.5, 0.25)] {
            assert_eq!(project(&v, &v), v);
        }
    }

    #[test]
    fn standard_basis_2d() {
        let b = standard_basis(2);
        assert_eq!(b, vec![vec2(1.0, 0.0), vec2(0.0, 1.0)]);
        assert_eq!(standard_basis(3)[2], Vector::from_vec(vec![0.0, 0.0, 1.0]));
    }

    #[test]
    fn gram_schmidt_single_vector_unchanged() {
        let v = vec2(3.0, -1.5);
        assert_eq!(gram_schmidt(&[v.clone()]), vec![v]);
    }

    #[test]
    fn gram_schmidt_keeps_orthogonal_basis() {
        let b = standard_basis(2);
        assert_eq!(gram_schmidt(&b), b);
    }

    #[test]
    fn gram_schmidt_orthogonalises_pair() {
        let out = gram_schmidt(&[vec2(2.0, 1.0), vec2(1.0, 3.0)]);
        assert_eq!(out[0], vec2(2.0, 1.0));
        assert!(inner(&out[0], &out[1]).abs() < 1e-12);
        // v2 - (5/5) * v1
        assert!((&out[1] - vec2(-1.0, 2.0)).norm() < 1e-12);
    }

    #[test]
    fn gram_schmidt_matches_classical_in_two_dimensions() {
        let input = [vec2(0.3, -1.7), vec2(2.2, 0.4)];
        let simplified = gram_schmidt(&input);
        // classical: subtract projections onto every processed output
        let mut classical: Basis = Vec::new();
        for v in &input {
            let mut w = v.clone();
            for q in &classical {
                w -= project(q, v);
            }
            classical.push(w);
        }
        for (a, b) in simplified.iter().zip(&classical) {
            assert!((a - b).norm() < 1e-12);
        }
    }
}
