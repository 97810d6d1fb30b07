use approx::assert_relative_eq;
use chemphys_toolbox::conversion::{convert, ConversionError};
use chemphys_toolbox::quantity::QuantityKind;
use chemphys_toolbox::Constants;

#[test]
fn every_listed_unit_is_accepted_and_round_trips() {
    let c = Constants::default();
    for kind in QuantityKind::ALL {
        let symbols = kind.unit_symbols();
        let base = symbols[0];
        for unit in symbols {
            let there = convert(&c, kind, 12.5, base, unit).expect(unit);
            let back = convert(&c, kind, there, unit, base).expect(unit);
            assert_relative_eq!(back, 12.5, max_relative = 1e-9);
        }
    }
}

#[test]
fn reference_values() {
    let c = Constants::default();
    assert_relative_eq!(
        convert(&c, QuantityKind::Temperature, 100.0, "C", "F").unwrap(),
        212.0,
        max_relative = 1e-12
    );
    assert_relative_eq!(
        convert(&c, QuantityKind::Temperature, 0.0, "C", "K").unwrap(),
        273.15,
        max_relative = 1e-12
    );
    assert_relative_eq!(
        convert(&c, QuantityKind::Length, 1.0, "ft", "in").unwrap(),
        12.0,
        max_relative = 1e-9
    );
    assert_relative_eq!(
        convert(&c, QuantityKind::Pressure, 1.0, "atm", "kPa").unwrap(),
        101.325,
        max_relative = 1e-9
    );
    assert_relative_eq!(
        convert(&c, QuantityKind::Energy, 1.0, "kcal", "cal").unwrap(),
        1000.0,
        max_relative = 1e-9
    );
}

#[test]
fn unknown_units_name_the_offender() {
    let c = Constants::default();
    assert_eq!(
        convert(&c, QuantityKind::Mass, 1.0, "stone", "kg"),
        Err(ConversionError::UnknownUnit("stone".into()))
    );
}
