//! Integration tests for the conversion engine.

use mu_core::{NumericError, Real, Tolerances, nearly_equal};
use mu_measure::{
    ConversionJob, MeasureError, Measurement, RawMeasurement, Units, ZERO_CELSIUS_IN_KELVIN,
    must,
};
use proptest::prelude::*;

fn units() -> Units {
    Units::standard().unwrap()
}

/// A caller-side measurement type the engine has never seen.
struct Reading {
    value: Real,
    unit: &'static str,
}

impl Measurement for Reading {
    fn quantity(&self) -> Real {
        self.value
    }

    fn measurement_unit(&self) -> &str {
        self.unit
    }
}

#[test]
fn empty_unit_is_dimensionless() {
    let m = units().parse(4.0, "").unwrap();
    assert_eq!(m.unit(), "");
    assert_eq!(m.value(), 4.0);
    assert!(m.parsed().product().is_dimensionless());
    assert_eq!(m.parsed().scale, 0);
}

#[test]
fn unit_text_is_kept_verbatim() {
    let u = units();
    for text in ["kg·m/s^2", "  m  ", "mg/(cm)^3", "μg/μL", "k℃"] {
        assert_eq!(u.parse(1.0, text).unwrap().measurement_unit(), text);
    }
}

#[test]
fn double_reciprocal_returns_the_value() {
    let u = units();
    let speed = must(u.parse(2.0, "m/s"));
    let twice = must(u.reciprocal(&must(u.reciprocal(&speed))));
    assert_eq!(twice.unit(), "((m/s)^-1)^-1");
    assert_eq!(twice.value(), 2.0);
    assert_eq!(twice.parsed().product(), speed.parsed().product());

    let back = u.new_measurement("m/s", &twice, &[]).unwrap();
    assert_eq!(back.value(), 2.0);
}

#[test]
fn scale_overflow_boundary() {
    // Yg -> yg is 10^48 per factor; f64::MAX is about 1.8e308.
    let u = units();
    let big = must(u.parse(1.0, "Yg"));

    let seven: Vec<&dyn Measurement> = (0..6).map(|_| &big as &dyn Measurement).collect();
    let err = u.new_measurement("yg^7", &big, &seven).unwrap_err();
    assert!(err.is_overflow(), "{err}");

    let six = u.new_measurement("yg^6", &big, &seven[..5]).unwrap();
    assert!(nearly_equal(six.value(), 1e288, Tolerances::default()));
}

#[test]
fn value_overflow() {
    let u = units();
    let err = u
        .new_measurement(
            "g^2",
            &must(u.parse(Real::MAX, "g")),
            &[&must(u.parse(2.0, "g"))],
        )
        .unwrap_err();
    assert!(err.is_overflow(), "{err}");

    let halved = u
        .new_measurement(
            "g",
            &must(u.parse(Real::MAX, "g^2")),
            &[&must(u.reciprocal(&must(u.parse(2.0, "g"))))],
        )
        .unwrap();
    assert_eq!(halved.value(), Real::MAX / 2.0);
}

#[test]
fn value_underflow() {
    let u = units();
    let tiny = Real::from_bits(1);

    let err = u
        .new_measurement(
            "g",
            &must(u.parse(tiny, "g^2")),
            &[&must(u.reciprocal(&must(u.parse(2.0, "g"))))],
        )
        .unwrap_err();
    assert!(err.is_underflow(), "{err}");

    // da is 10^1, so the value shrinks by ten.
    let err = u
        .new_measurement("dag", &must(u.parse(tiny, "g")), &[])
        .unwrap_err();
    assert!(matches!(
        err,
        MeasureError::Numeric(NumericError::Underflow { exponent: -1, .. })
    ));

    // d is 10^-1, so it grows.
    let dg = u.new_measurement("dg", &must(u.parse(tiny, "g")), &[]).unwrap();
    assert!(dg.value() > tiny);
}

#[test]
fn zero_converts_to_zero() {
    let u = units();
    let m = u.new_measurement("Yg", &must(u.parse(0.0, "yg")), &[]).unwrap();
    assert_eq!(m.value(), 0.0);
}

#[test]
fn right_associative_division_through_new() {
    let u = units();
    let m = must(u.parse(2.0, "m/s/s"));
    assert_eq!(u.new_measurement("m", &m, &[]).unwrap().value(), 2.0);
    assert!(matches!(
        u.new_measurement("m/s^2", &m, &[]),
        Err(MeasureError::WrongDimension { .. })
    ));
}

#[test]
fn foreign_measurements_are_parsed() {
    let u = units();
    let distance = Reading {
        value: 1.5,
        unit: "km",
    };
    let per_time = u.reciprocal(&Reading {
        value: 0.5,
        unit: "h",
    });
    // "h" alone is a prefix with no symbol.
    assert!(matches!(per_time, Err(MeasureError::Parse(_))));

    let per_time = must(u.reciprocal(&Reading {
        value: 0.5,
        unit: "ks",
    }));
    let speed = u.convert("m/s", &[&distance, &per_time]).unwrap();
    assert_eq!(speed.value(), 3.0);

    let raw = RawMeasurement::new(250.0, "mL");
    let litres = u.new_measurement("L", &raw, &[]).unwrap();
    assert!(nearly_equal(litres.value(), 0.25, Tolerances::default()));
}

#[test]
fn batch_results_follow_job_order() {
    let u = units();
    let jobs = vec![
        ConversionJob {
            target: "mm".into(),
            inputs: vec![RawMeasurement::new(3.0, "m")],
        },
        ConversionJob {
            target: "g".into(),
            inputs: vec![RawMeasurement::new(1.0, "m")],
        },
        ConversionJob {
            target: "kPa".into(),
            inputs: vec![RawMeasurement::new(101_325.0, "Pa")],
        },
        ConversionJob {
            target: "s".into(),
            inputs: vec![],
        },
    ];

    let results = u.convert_batch(&jobs);
    assert_eq!(results.len(), 4);
    assert_eq!(results[0].as_ref().unwrap().value(), 3000.0);
    assert!(matches!(results[1], Err(MeasureError::WrongDimension { .. })));
    assert!(nearly_equal(
        results[2].as_ref().unwrap().value(),
        101.325,
        Tolerances::default()
    ));
    assert_eq!(results[3], Err(MeasureError::NothingToConvert));
}

#[test]
fn batch_jobs_deserialize_from_json() {
    let jobs: Vec<ConversionJob> = serde_json::from_str(
        r#"[{"target": "mg/L", "inputs": [{"value": 3, "unit": "g"}, {"value": 2, "unit": "L^-1"}]}]"#,
    )
    .unwrap();
    let results = units().convert_batch(&jobs);
    assert_eq!(results[0].as_ref().unwrap().value(), 6000.0);
}

#[test]
fn celsius_offset_is_exported() {
    assert_eq!(ZERO_CELSIUS_IN_KELVIN, 273.15);
}

mod uom_cross_check {
    use super::*;
    use uom::si::f64::{Energy, Length, Mass, Pressure, Volume};
    use uom::si::{energy, length, mass, pressure, volume};

    fn convert(value: Real, from: &str, to: &str) -> Real {
        let u = units();
        u.new_measurement(to, &must(u.parse(value, from)), &[])
            .unwrap()
            .value()
    }

    fn assert_close(ours: Real, theirs: Real) {
        assert!(
            nearly_equal(ours, theirs, Tolerances::default()),
            "{ours} != {theirs}"
        );
    }

    #[test]
    fn kilometres() {
        let d = Length::new::<length::kilometer>(1.25);
        assert_close(convert(1.25, "km", "m"), d.get::<length::meter>());
        assert_close(convert(1.25, "km", "mm"), d.get::<length::millimeter>());
    }

    #[test]
    fn kilograms() {
        let m = Mass::new::<mass::kilogram>(1.5);
        assert_close(convert(1.5, "kg", "mg"), m.get::<mass::milligram>());
        assert_close(convert(1.5, "kg", "g"), m.get::<mass::gram>());
    }

    #[test]
    fn kilopascals() {
        let p = Pressure::new::<pressure::kilopascal>(2.5);
        assert_close(convert(2.5, "kPa", "Pa"), p.get::<pressure::pascal>());
        assert_close(convert(2.5, "kPa", "N/m^2"), p.get::<pressure::pascal>());
    }

    #[test]
    fn litres() {
        let v = Volume::new::<volume::liter>(2.0);
        assert_close(convert(2.0, "L", "m^3"), v.get::<volume::cubic_meter>());
        assert_close(convert(2.0, "L", "ml"), v.get::<volume::milliliter>());
    }

    #[test]
    fn kilojoules() {
        let e = Energy::new::<energy::kilojoule>(4.2);
        assert_close(convert(4.2, "kJ", "J"), e.get::<energy::joule>());
        assert_close(convert(4.2, "kJ", "kg m^2 s^-2"), e.get::<energy::joule>());
    }
}

proptest! {
    #[test]
    fn prefix_round_trip(
        value in 1e-6_f64..1e6,
        from in prop::sample::select(vec!["km", "m", "cm", "mm", "μm", "nm"]),
        to in prop::sample::select(vec!["Mm", "km", "dam", "m", "dm", "pm"]),
    ) {
        let u = units();
        let there = u.new_measurement(to, &must(u.parse(value, from)), &[]).unwrap();
        let back = u.new_measurement(from, &there, &[]).unwrap();
        prop_assert!(nearly_equal(back.value(), value, Tolerances::default()));
    }

    #[test]
    fn reciprocal_is_an_inverse(value in 1e-100_f64..1e100) {
        let u = units();
        let m = must(u.parse(value, "s"));
        let r = u.reciprocal(&m).unwrap();
        let one = u.new_measurement("", &m, &[&r]).unwrap();
        prop_assert!(nearly_equal(one.value(), 1.0, Tolerances::default()));
    }
}
