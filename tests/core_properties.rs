//! 계산 핵심부의 성질 테스트: 미지수 풀이, 정의역 검사, 결정성.

use approx::{assert_abs_diff_eq, assert_relative_eq};
use chemphys_toolbox::chemistry::{
    self, DilutionInput, GasLawVariable, IdealGasInput,
};
use chemphys_toolbox::physics::{self, LensInput, LensVariable, OhmVariable, OhmsLawInput};
use chemphys_toolbox::{CalcError, Constants, Constraint, FormulaError};
use proptest::prelude::*;

fn c() -> Constants {
    Constants::default()
}

#[test]
fn ideal_gas_moles_at_stp() {
    let r = chemistry::ideal_gas_law(
        &c(),
        IdealGasInput {
            pressure_atm: Some(1.0),
            volume_l: Some(22.4),
            moles: None,
            temperature_k: Some(273.0),
        },
    )
    .expect("ideal gas");
    assert_eq!(r.solved_for, GasLawVariable::Moles);
    assert_abs_diff_eq!(r.moles, 0.999, epsilon = 1e-3);
}

#[test]
fn ohms_law_inverse_consistency() {
    let i = physics::ohms_law(OhmsLawInput {
        voltage: Some(12.0),
        current: None,
        resistance: Some(3.0),
    })
    .expect("current");
    assert_eq!(i.solved_for, OhmVariable::Current);
    assert_eq!(i.current, 4.0);

    let r = physics::ohms_law(OhmsLawInput {
        voltage: Some(12.0),
        current: Some(i.current),
        resistance: None,
    })
    .expect("resistance");
    assert_eq!(r.solved_for, OhmVariable::Resistance);
    assert_eq!(r.resistance, 3.0);
}

#[test]
fn ohms_law_rejects_wrong_number_of_knowns() {
    let all = OhmsLawInput {
        voltage: Some(12.0),
        current: Some(4.0),
        resistance: Some(3.0),
    };
    assert!(matches!(
        physics::ohms_law(all),
        Err(CalcError::Determinacy { expected: 2, actual: 3, .. })
    ));
    let one = OhmsLawInput {
        voltage: Some(12.0),
        ..Default::default()
    };
    assert!(matches!(
        physics::ohms_law(one),
        Err(CalcError::Determinacy { expected: 2, actual: 1, .. })
    ));
}

#[test]
fn known_zero_differs_from_unset() {
    // 0 V 는 알려진 값이므로 전류를 구할 수 있다
    let r = physics::ohms_law(OhmsLawInput {
        voltage: Some(0.0),
        current: None,
        resistance: Some(5.0),
    })
    .expect("zero voltage");
    assert_eq!(r.current, 0.0);

    // 0 Ω 은 미지수가 아니라 나눗셈 정의역 위반
    let err = physics::ohms_law(OhmsLawInput {
        voltage: Some(12.0),
        current: None,
        resistance: Some(0.0),
    })
    .unwrap_err();
    assert_eq!(
        err,
        CalcError::Domain {
            parameter: "resistance",
            constraint: Constraint::NonZero
        }
    );

    // 같은 입력에서 저항을 비우면 결정성 오류가 아니라 정상 풀이
    let r = physics::ohms_law(OhmsLawInput {
        voltage: Some(12.0),
        current: Some(2.0),
        resistance: None,
    })
    .expect("unset resistance");
    assert_eq!(r.resistance, 6.0);
}

#[test]
fn dilution_known_zero_volume_is_rejected() {
    let err = chemistry::dilution(DilutionInput {
        initial_concentration: 1.0,
        initial_volume: 0.5,
        final_concentration: None,
        final_volume: Some(0.0),
    })
    .unwrap_err();
    assert_eq!(err.parameter(), Some("final_volume"));
}

#[test]
fn molecular_weights() {
    assert_abs_diff_eq!(chemistry::molecular_weight("H2O").unwrap(), 18.015, epsilon = 1e-3);
    assert_abs_diff_eq!(chemistry::molecular_weight("C6H12O6").unwrap(), 180.156, epsilon = 1e-2);
    assert_eq!(
        chemistry::molecular_weight("Xx2"),
        Err(CalcError::Parse(FormulaError::UnknownElement("Xx".into())))
    );
    assert_eq!(
        chemistry::molecular_weight(""),
        Err(CalcError::Parse(FormulaError::EmptyFormula))
    );
}

#[test]
fn domain_rejections() {
    assert!(matches!(chemistry::calculate_ph(0.0), Err(CalcError::Domain { .. })));
    assert!(matches!(chemistry::calculate_ph(-1.0), Err(CalcError::Domain { .. })));
    assert!(matches!(chemistry::calculate_ph(f64::NAN), Err(CalcError::Domain { .. })));
    let err = physics::relativistic_energy(&c(), 1.0, 3e8).unwrap_err();
    assert_eq!(err.parameter(), Some("velocity"));
}

#[test]
fn van_der_waals_volume_too_small() {
    let err = chemistry::van_der_waals_pressure(&c(), 1.0, 0.001, 300.0, 0.0, 0.01).unwrap_err();
    assert_eq!(err.parameter(), Some("volume"));
}

#[test]
fn doppler_sign_convention() {
    // 양수 = 서로 가까워지는 방향
    let f = 440.0;
    let v = 343.0;
    let approaching_source = physics::doppler_effect(f, 20.0, 0.0, v).unwrap();
    let receding_source = physics::doppler_effect(f, -20.0, 0.0, v).unwrap();
    let approaching_observer = physics::doppler_effect(f, 0.0, 20.0, v).unwrap();
    assert!(approaching_source > f);
    assert!(receding_source < f);
    assert!(approaching_observer > f);
    assert_relative_eq!(approaching_source, f * v / (v - 20.0), max_relative = 1e-12);
    assert!(physics::doppler_effect(f, v, 0.0, v).is_err());
}

#[test]
fn thin_lens_solves_each_variable() {
    let di = physics::lens_equation(LensInput {
        focal_length: Some(0.1),
        object_distance: Some(0.3),
        image_distance: None,
    })
    .unwrap();
    assert_eq!(di.solved_for, LensVariable::ImageDistance);
    assert_relative_eq!(di.image_distance, 0.15, max_relative = 1e-12);
    assert_relative_eq!(di.magnification(), -0.5, max_relative = 1e-12);

    let f = physics::lens_equation(LensInput {
        focal_length: None,
        object_distance: Some(0.3),
        image_distance: Some(di.image_distance),
    })
    .unwrap();
    assert_relative_eq!(f.focal_length, 0.1, max_relative = 1e-12);

    // 물체가 초점에 있으면 상이 생기지 않는다
    assert!(physics::lens_equation(LensInput {
        focal_length: Some(0.1),
        object_distance: Some(0.1),
        image_distance: None,
    })
    .is_err());
}

#[test]
fn overridden_constants_flow_into_formulas() {
    let moon = Constants {
        standard_gravity: 1.62,
        ..Constants::default()
    };
    let pe = physics::potential_energy(&moon, 10.0, 2.0).unwrap();
    assert_abs_diff_eq!(pe, 32.4, epsilon = 1e-12);
}

fn is_overflow(result: Result<f64, CalcError>, name: &str) -> bool {
    matches!(
        result,
        Err(CalcError::Domain { parameter, constraint: Constraint::Finite }) if parameter == name
    )
}

#[test]
fn overflowing_solver_results_are_domain_errors() {
    let current = physics::ohms_law(OhmsLawInput {
        voltage: Some(1e308),
        current: None,
        resistance: Some(1e-10),
    })
    .map(|r| r.current);
    assert!(is_overflow(current, "current"));

    let moles = chemistry::ideal_gas_law(
        &c(),
        IdealGasInput {
            pressure_atm: Some(1e300),
            volume_l: Some(1e300),
            moles: None,
            temperature_k: Some(1.0),
        },
    )
    .map(|r| r.moles);
    assert!(is_overflow(moles, "moles"));

    let final_volume = chemistry::dilution(DilutionInput {
        initial_concentration: 1e200,
        initial_volume: 1e200,
        final_concentration: Some(1.0),
        final_volume: None,
    })
    .map(|r| r.final_volume);
    assert!(is_overflow(final_volume, "final_volume"));

    assert!(is_overflow(
        physics::electrical_power(Some(1e200), Some(1e200), None),
        "power"
    ));
}

#[test]
fn overflowing_direct_formulas_are_domain_errors() {
    assert!(is_overflow(physics::kinetic_energy(1e300, 1e300), "kinetic_energy"));
    assert!(is_overflow(physics::coulomb_force(&c(), 1e200, 1e200, 1.0), "force"));
    assert!(is_overflow(physics::heat_transfer(1e200, 1e200, 10.0), "heat"));
    // 큰 값이라도 넘치지 않으면 그대로 돌려준다
    assert_eq!(chemistry::arrhenius(&c(), 1e308, 0.0, 300.0), Ok(1e308));
}

proptest! {
    #[test]
    fn ph_round_trip(conc in 1e-14f64..=1.0) {
        let ph = chemistry::calculate_ph(conc).unwrap();
        let back = chemistry::ph_to_concentration(ph).unwrap();
        prop_assert!(((back - conc) / conc).abs() < 1e-6);
    }

    #[test]
    fn ideal_gas_is_deterministic(p in 0.1f64..10.0, v in 0.1f64..100.0, t in 100.0f64..1000.0) {
        let input = IdealGasInput {
            pressure_atm: Some(p),
            volume_l: Some(v),
            moles: None,
            temperature_k: Some(t),
        };
        let a = chemistry::ideal_gas_law(&c(), input).unwrap();
        let b = chemistry::ideal_gas_law(&c(), input).unwrap();
        prop_assert_eq!(a.moles.to_bits(), b.moles.to_bits());
    }

    #[test]
    fn arrhenius_is_deterministic(a in 1e-3f64..1e13, ea in 0.0f64..3e5, t in 50.0f64..3000.0) {
        let first = chemistry::arrhenius(&c(), a, ea, t).unwrap();
        let second = chemistry::arrhenius(&c(), a, ea, t).unwrap();
        prop_assert_eq!(first.to_bits(), second.to_bits());
    }

    #[test]
    fn lens_is_deterministic(f in 0.01f64..2.0, extra in 0.01f64..10.0) {
        let input = LensInput {
            focal_length: Some(f),
            object_distance: Some(f + extra),
            image_distance: None,
        };
        let first = physics::lens_equation(input).unwrap();
        let second = physics::lens_equation(input).unwrap();
        prop_assert_eq!(first.solved_for, LensVariable::ImageDistance);
        prop_assert_eq!(first.image_distance.to_bits(), second.image_distance.to_bits());
    }

    #[test]
    fn ideal_gas_solutions_are_consistent(p in 0.1f64..10.0, v in 0.1f64..100.0, n in 0.01f64..10.0) {
        let t = chemistry::ideal_gas_law(&c(), IdealGasInput {
            pressure_atm: Some(p),
            volume_l: Some(v),
            moles: Some(n),
            temperature_k: None,
        }).unwrap().temperature_k;
        let back = chemistry::ideal_gas_law(&c(), IdealGasInput {
            pressure_atm: None,
            volume_l: Some(v),
            moles: Some(n),
            temperature_k: Some(t),
        }).unwrap().pressure_atm;
        prop_assert!(((back - p) / p).abs() < 1e-9);
    }

    #[test]
    fn kinetic_energy_never_negative(m in 1e-9f64..1e3, v in -1e3f64..1e3) {
        prop_assert!(physics::kinetic_energy(m, v).unwrap() >= 0.0);
    }
}
