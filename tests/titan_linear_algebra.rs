use henon_lyapunov::core::titan::linear_algebra::{gram_schmidt, inner, norm, project, standard_basis, Vector};

fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
    (a - b).abs() <= eps
}

#[test]
fn self_projection_identity() {
    let v = Vector::from_vec(vec![-0.7, 2.5]);
    assert_eq!(project(&v, &v), v);
}

#[test]
fn gram_schmidt_single_element_identity() {
    let v = Vector::from_vec(vec![4.0, -2.0]);
    assert_eq!(gram_schmidt(std::slice::from_ref(&v)), vec![v]);
}

#[test]
fn gram_schmidt_standard_basis_unchanged() {
    let basis = standard_basis(2);
    let out = gram_schmidt(&basis);
    assert_eq!(out, basis);
    assert_eq!(inner(&out[0], &out[1]), 0.0);
    assert!(out.iter().all(|e| norm(e) == 1.0));
}

#[test]
fn gram_schmidt_output_is_orthogonal_but_unnormalised() {
    let out = gram_schmidt(&[Vector::from_vec(vec![3.0, 4.0]), Vector::from_vec(vec![1.0, 0.0])]);
    assert!(approx_eq(inner(&out[0], &out[1]), 0.0, 1e-12));
    assert_eq!(norm(&out[0]), 25.0);
}
