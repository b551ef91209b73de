// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]
use core::f32::consts::{FRAC_PI_2, PI};

use proptest::prelude::*;
use srt_math::{Mat4, Quat, Vec3};

const TOL: f32 = 1e-5;

fn assert_vec_close(a: Vec3, b: Vec3) {
    assert!(a.approx_eq(&b, TOL), "{a:?} vs {b:?}");
}

#[test]
fn quat_rotate_matches_axis_matrices() {
    let q = Quat::from_axis_angle(Vec3::UNIT_Y, FRAC_PI_2);
    assert_vec_close(q.rotate(&Vec3::UNIT_Z), Vec3::UNIT_X);
    assert_vec_close(
        q.rotate(&Vec3::UNIT_Z),
        Mat4::rotation_y(FRAC_PI_2).transform_direction(&Vec3::UNIT_Z),
    );

    let q = Quat::from_axis_angle(Vec3::UNIT_Z, FRAC_PI_2);
    assert_vec_close(q.rotate(&Vec3::UNIT_X), Vec3::UNIT_Y);
    let q = Quat::from_axis_angle(Vec3::UNIT_X, FRAC_PI_2);
    assert_vec_close(
        q.rotate(&Vec3::UNIT_Y),
        Mat4::rotation_x(FRAC_PI_2).transform_direction(&Vec3::UNIT_Y),
    );
}

#[test]
fn quat_product_applies_right_operand_first() {
    let yaw = Quat::from_axis_angle(Vec3::UNIT_Y, FRAC_PI_2);
    let roll = Quat::from_axis_angle(Vec3::UNIT_Z, FRAC_PI_2);
    let v = Vec3::UNIT_X;
    let composed = (yaw * roll).rotate(&v);
    assert_vec_close(composed, yaw.rotate(&roll.rotate(&v)));
    assert_vec_close(
        composed,
        Mat4::rotation_y(FRAC_PI_2)
            .multiply(&Mat4::rotation_z(FRAC_PI_2))
            .transform_direction(&v),
    );
}

#[test]
fn slerp_endpoints_and_midpoint() {
    let a = Quat::identity();
    let b = Quat::from_axis_angle(Vec3::UNIT_Z, FRAC_PI_2);
    assert!(a.slerp(&b, 0.0).approx_eq(&a, TOL));
    assert!(a.slerp(&b, 1.0).approx_eq(&b, TOL));
    let mid = a.slerp(&b, 0.5);
    assert!(mid.approx_eq(&Quat::from_axis_angle(Vec3::UNIT_Z, PI / 4.0), TOL));
}

#[test]
fn slerp_takes_shortest_arc() {
    let a = Quat::identity();
    let b = Quat::from_axis_angle(Vec3::UNIT_Z, FRAC_PI_2);
    let neg_b = Quat::from(b.to_array().map(|c| -c));
    let mid = a.slerp(&neg_b, 0.5);
    let v = mid.rotate(&Vec3::UNIT_X);
    let expected = Quat::from_axis_angle(Vec3::UNIT_Z, PI / 4.0).rotate(&Vec3::UNIT_X);
    assert_vec_close(v, expected);
    assert!((mid.dot(&mid) - 1.0).abs() < TOL);
}

#[test]
fn rotation_equality_ignores_quaternion_sign() {
    let q = Quat::from_axis_angle(Vec3::UNIT_Z, 3.0 * FRAC_PI_2);
    let neg_q = Quat::from(q.to_array().map(|c| -c));
    assert!(!q.approx_eq(&neg_q, TOL));
    assert!(q.approx_eq_rotation(&neg_q, TOL));
    assert!(neg_q.approx_eq_rotation(&q, TOL));
    assert!(!q.approx_eq_rotation(&Quat::identity(), TOL));

    // Slerp past a half turn lands on -end at t = 1.
    let landed = Quat::identity().slerp(&q, 1.0);
    assert!(landed.approx_eq(&neg_q, TOL));
    assert!(landed.approx_eq_rotation(&q, TOL));
}

#[test]
fn decompose_recovers_components() {
    let rotation = Quat::from_axis_angle(Vec3::new(1.0, 2.0, 3.0), 0.7);
    let m = Mat4::translation(4.0, -2.0, 9.0)
        .multiply(&rotation.to_mat4())
        .multiply(&Mat4::scale(2.0, 3.0, 0.5));
    let (scale, rot, translation) = m.decompose();
    assert_vec_close(scale, Vec3::new(2.0, 3.0, 0.5));
    assert_vec_close(translation, Vec3::new(4.0, -2.0, 9.0));
    let probe = Vec3::new(0.3, -1.2, 0.8);
    assert_vec_close(rot.rotate(&probe), rotation.rotate(&probe));
}

#[test]
fn decompose_zero_scale_yields_identity_rotation() {
    let (scale, rot, _) = Mat4::scale(0.0, 1.0, 1.0).decompose();
    assert_eq!(rot, Quat::identity());
    assert_eq!(scale.x(), 0.0);
}

#[test]
fn transform_normal_is_inverse_transpose() {
    let m = Mat4::rotation_z(0.4).multiply(&Mat4::scale(3.0, 1.0, 1.0));
    // A tangent/normal pair on the plane x + y = 0.
    let tangent = Vec3::new(1.0, -1.0, 0.0);
    let normal = Vec3::new(1.0, 1.0, 0.0);
    let t = m.transform_direction(&tangent);
    let n = m.transform_normal(&normal);
    assert!(t.dot(&n).abs() < TOL);

    let rot = Mat4::rotation_x(1.1);
    assert_vec_close(rot.transform_normal(&normal), rot.transform_direction(&normal));
}

#[test]
fn complement_basis_of_axes_is_right_handed() {
    for axis in [Vec3::UNIT_X, Vec3::UNIT_Y, Vec3::UNIT_Z, -Vec3::UNIT_Y] {
        let (u, w) = axis.complement_basis();
        assert_vec_close(u.cross(&w), axis);
    }
    let (u, w) = Vec3::ZERO.complement_basis();
    assert!(u.is_zero() && w.is_zero());
}

fn unit_vec3() -> impl Strategy<Value = Vec3> {
    let c = -1.0f32..1.0;
    (c.clone(), c.clone(), c)
        .prop_filter("non-degenerate", |(x, y, z)| x * x + y * y + z * z > 1e-2)
        .prop_map(|(x, y, z)| Vec3::new(x, y, z).normalize())
}

proptest! {
    #[test]
    fn complement_basis_is_orthonormal(v in unit_vec3()) {
        let (u, w) = v.complement_basis();
        prop_assert!(u.dot(&v).abs() < 1e-4);
        prop_assert!(w.dot(&v).abs() < 1e-4);
        prop_assert!(u.dot(&w).abs() < 1e-4);
        prop_assert!((u.length() - 1.0).abs() < 1e-4);
        prop_assert!((w.length() - 1.0).abs() < 1e-4);
        prop_assert!(u.cross(&w).approx_eq(&v, 1e-4));
    }

    #[test]
    fn rotation_preserves_length(v in unit_vec3(), axis in unit_vec3(), angle in -PI..PI) {
        let q = Quat::from_axis_angle(axis, angle);
        prop_assert!((q.rotate(&v).length() - 1.0).abs() < 1e-4);
        prop_assert!(q.rotate(&v).approx_eq(&q.to_mat4().transform_direction(&v), 1e-4));
    }
}
