//! Algebraic property validation for `Vector3`
//!
//! # Test Categories
//! 1. Dot product commutativity
//! 2. Cross product anti-commutativity and orthogonality
//! 3. Normalization (unit magnitude, zero-vector policy)
//! 4. Translation compositionality
//! 5. Concrete reference scenarios
//!
//! Run tests with: `cargo test --test vector_properties`

use aero_sim_core::Vector3;
use approx::{assert_abs_diff_eq, assert_relative_eq};

/// Install an env-filtered subscriber once per test binary so `tracing`
/// output from the crate is visible under `RUST_LOG`.
#[ctor::ctor]
fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// A spread of vectors covering axes, diagonals, negatives, and scale
fn sample_vectors() -> Vec<Vector3> {
    vec![
        Vector3::new(1.0, 0.0, 0.0),
        Vector3::new(0.0, 1.0, 0.0),
        Vector3::new(0.0, 0.0, 1.0),
        Vector3::new(1.0, 2.0, 3.0),
        Vector3::new(-4.5, 0.25, 7.0),
        Vector3::new(1e-3, -1e3, 0.5),
        Vector3::new(-1.0, -1.0, -1.0),
    ]
}

// ═══════════════════════════════════════════════════════════════════════════
// SECTION 1: DOT PRODUCT
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_dot_product_commutative() {
    for a in sample_vectors() {
        for b in sample_vectors() {
            assert_eq!(a.dot_product(b), b.dot_product(a));
        }
    }
}

#[test]
fn test_dot_product_with_self_is_magnitude_squared() {
    for v in sample_vectors() {
        assert_relative_eq!(v.dot_product(v), v.magnitude_squared(), max_relative = 1e-12);
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// SECTION 2: CROSS PRODUCT
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_cross_product_anti_commutative() {
    for a in sample_vectors() {
        for b in sample_vectors() {
            assert_eq!(a.cross_product(b), -b.cross_product(a));
        }
    }
}

#[test]
fn test_cross_product_orthogonal_to_operands() {
    for a in sample_vectors() {
        for b in sample_vectors() {
            let c = a.cross_product(b);
            // Tolerance scales with the operand magnitudes
            let scale = (a.magnitude() * b.magnitude()).max(1.0);
            assert_abs_diff_eq!(a.dot_product(c) / scale, 0.0, epsilon = 1e-9);
            assert_abs_diff_eq!(b.dot_product(c) / scale, 0.0, epsilon = 1e-9);
        }
    }
}

#[test]
fn test_cross_product_of_parallel_vectors_is_zero() {
    let v = Vector3::new(2.0, -3.0, 0.5);
    assert_eq!(v.cross_product(v * 4.0), Vector3::ZERO);
}

#[test]
fn test_cross_product_right_handed_basis() {
    let x = Vector3::new(1.0, 0.0, 0.0);
    let y = Vector3::new(0.0, 1.0, 0.0);
    let z = Vector3::new(0.0, 0.0, 1.0);
    assert_eq!(x.cross_product(y), z);
    assert_eq!(y.cross_product(z), x);
    assert_eq!(z.cross_product(x), y);
}

// ═══════════════════════════════════════════════════════════════════════════
// SECTION 3: NORMALIZATION
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_normalize_yields_unit_magnitude() {
    for v in sample_vectors() {
        assert_relative_eq!(v.normalize().magnitude(), 1.0, max_relative = 1e-12);
    }
}

#[test]
fn test_normalize_preserves_direction() {
    for v in sample_vectors() {
        let n = v.normalize();
        // n scaled back up by |v| reproduces v
        let back = n * v.magnitude();
        assert_relative_eq!(back.x, v.x, max_relative = 1e-12);
        assert_relative_eq!(back.y, v.y, max_relative = 1e-12);
        assert_relative_eq!(back.z, v.z, max_relative = 1e-12);
    }
}

#[test]
fn test_normalize_zero_vector_returns_zero() {
    let n = Vector3::new(0.0, 0.0, 0.0).normalize();
    assert_eq!(n, Vector3::ZERO);
    assert_eq!(n.magnitude(), 0.0);
}

#[test]
fn test_normalize_does_not_mutate_receiver() {
    let v = Vector3::new(3.0, 4.0, 5.0);
    let _ = v.normalize();
    assert_eq!(v, Vector3::new(3.0, 4.0, 5.0));
}

// ═══════════════════════════════════════════════════════════════════════════
// SECTION 4: TRANSLATION
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_translate_composes_additively() {
    let mut stepwise = Vector3::new(1.0, -2.0, 0.5);
    let mut direct = stepwise;

    stepwise.translate(1.0, 2.0, 3.0);
    stepwise.translate(-0.5, 4.0, -3.0);
    direct.translate(0.5, 6.0, 0.0);

    assert_eq!(stepwise, direct);
}

#[test]
fn test_translate_by_zero_is_identity() {
    let mut v = Vector3::new(7.0, -8.0, 9.0);
    v.translate(0.0, 0.0, 0.0);
    assert_eq!(v, Vector3::new(7.0, -8.0, 9.0));
}

// ═══════════════════════════════════════════════════════════════════════════
// SECTION 5: CONCRETE REFERENCE SCENARIOS
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_reference_cross_product() {
    let c = Vector3::new(1.0, 2.0, 3.0).cross_product(Vector3::new(4.0, 5.0, 6.0));
    assert_eq!(c, Vector3::new(-3.0, 6.0, -3.0));
}

#[test]
fn test_reference_dot_product() {
    let d = Vector3::new(1.0, 2.0, 3.0).dot_product(Vector3::new(4.0, 5.0, 6.0));
    assert_eq!(d, 32.0);
}

#[test]
fn test_reference_magnitude() {
    assert_relative_eq!(
        Vector3::new(3.0, 4.0, 5.0).magnitude(),
        7.0710678,
        max_relative = 1e-7
    );
}

#[test]
fn test_reference_normalize() {
    let n = Vector3::new(3.0, 4.0, 5.0).normalize();
    assert_abs_diff_eq!(n.x, 0.42426, epsilon = 1e-5);
    assert_abs_diff_eq!(n.y, 0.56569, epsilon = 1e-5);
    assert_abs_diff_eq!(n.z, 0.70711, epsilon = 1e-5);
}

#[test]
fn test_reference_translate() {
    let mut v = Vector3::new(1.0, 2.0, 3.0);
    v.translate(4.0, 5.0, 6.0);
    assert_eq!(v, Vector3::new(5.0, 7.0, 9.0));
}
