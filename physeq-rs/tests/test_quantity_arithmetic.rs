use physeq_rs::{BaseDimension, DisplayTables, EquationError, Quantity, UnitVector};

fn parse(serialized: &str) -> Quantity {
    serialized.parse().unwrap()
}

fn verbose(quantity: Quantity) -> String {
    quantity.to_verbose_string(&DisplayTables::default(), false)
}

#[test]
fn test_add_joules() {
    let lhs = parse("1,0,-2,2,1,0,0,0,0");
    let rhs = parse("1,0,-2,2,1,0,0,0,0");
    assert_eq!(verbose(lhs.try_add(&rhs).unwrap()), "2J");
}

#[test]
fn test_add_keeps_left_scale() {
    let kilojoule = parse("1,3,-2,2,1,0,0,0,0");
    let joule = parse("1,0,-2,2,1,0,0,0,0");
    assert_eq!(verbose(kilojoule.try_add(&joule).unwrap()), "1.001kJ");
    assert_eq!(verbose(joule.try_add(&kilojoule).unwrap()), "1001J");
}

#[test]
fn test_subtract_keeps_left_scale() {
    let kilojoule = parse("1,3,-2,2,1,0,0,0,0");
    let joule = parse("1,0,-2,2,1,0,0,0,0");
    assert_eq!(verbose(joule.try_subtract(&joule).unwrap()), "0J");
    assert_eq!(verbose(kilojoule.try_subtract(&joule).unwrap()), "0.999kJ");
    assert_eq!(verbose(joule.try_subtract(&kilojoule).unwrap()), "-999J");
}

#[test]
fn test_add_requires_equal_units() {
    for dimension in BaseDimension::ALL {
        let mut exponents = [0; 7];
        exponents[dimension.index()] = 1;
        let unit = UnitVector::new(exponents);
        let lhs = Quantity::new(1.0, 0, unit);
        let rhs = Quantity::new(2.0, -3, unit);
        assert!(lhs.try_add(&rhs).is_ok());
        assert!(lhs.try_subtract(&rhs).is_ok());

        let dimensionless = Quantity::constant(1.0);
        assert_eq!(
            lhs.try_add(&dimensionless),
            Err(EquationError::DimensionMismatch {
                expected: unit,
                found: UnitVector::DIMENSIONLESS
            })
        );
        assert!(dimensionless.try_subtract(&lhs).is_err());
    }
}

#[test]
fn test_multiply_ampere_by_second() {
    let second = parse("1,0,1,0,0,0,0,0,0");
    let ampere = parse("1,0,0,0,0,1,0,0,0");
    assert_eq!(verbose(second.multiply(&ampere)), "1C");
}

#[test]
fn test_multiply_acceleration_by_kilogram() {
    let acceleration = parse("1,0,-2,1,0,0,0,0,0");
    let kilogram = parse("1,3,0,0,1,0,0,0,0");
    let force = acceleration.multiply(&kilogram);
    assert_eq!(force.unit().to_string(), "-2,1,1,0,0,0,0");
    assert_eq!(verbose(force), "1N");
}

#[test]
fn test_multiply_kilogram_by_kilogram() {
    let kilogram = parse("1,3,0,0,1,0,0,0,0");
    let squared = kilogram.multiply(&kilogram);
    assert_eq!(squared.to_string(), "1,0,0,0,2,0,0,0,0");
    assert_eq!(verbose(squared), "1kg^(2)");
    assert_eq!(verbose(kilogram), "1kg");
}

#[test]
fn test_scaling_a_kilogram_keeps_the_kilo_offset() {
    let half = Quantity::constant(0.5);
    let kilogram = parse("1,3,0,0,1,0,0,0,0");
    assert_eq!(
        half.multiply(&kilogram),
        Quantity::new(0.5, 3, UnitVector::KILOGRAM)
    );
    let doubled = kilogram.multiply(&Quantity::constant(2.0));
    assert!(doubled.approx_eq(&Quantity::new(2.0, 3, UnitVector::KILOGRAM), 1e-12));
}

#[test]
fn test_multiply_and_divide_by_pure_number() {
    let second = parse("1,0,1,0,0,0,0,0,0");
    let hundred = parse("100,0,0,0,0,0,0,0,0");
    assert_eq!(verbose(second.multiply(&hundred)), "100s");
    assert_eq!(verbose(second.divide(&hundred)), "0.01s");
}

#[test]
fn test_divide_cancels_units() {
    let milliseconds = parse("1000,-3,1,0,0,0,0,0,0");
    let second = parse("1,0,1,0,0,0,0,0,0");
    let ratio = milliseconds.divide(&second);
    assert!(ratio.is_dimensionless());
    assert_eq!(ratio.convert_to_scale(0), 1.0);
}

#[test]
fn test_prefixed_products_and_quotients_keep_their_value() {
    let kilometre = parse("1,3,0,1,0,0,0,0,0");
    let second = parse("1,0,1,0,0,0,0,0,0");
    let millisecond = parse("1,-3,1,0,0,0,0,0,0");

    let speed = kilometre.divide(&second).normalize_to_base_scale();
    assert_eq!(speed.unit(), UnitVector::METRE - UnitVector::SECOND);
    assert_eq!(speed.magnitude(), 1000.0);

    let area = kilometre.multiply(&kilometre).normalize_to_base_scale();
    assert_eq!(area.unit(), UnitVector::METRE * 2);
    assert_eq!(area.magnitude(), 1e6);

    let fast = kilometre.divide(&millisecond).normalize_to_base_scale();
    assert_eq!(fast.magnitude(), 1e6);

    let duration = millisecond.multiply(&parse("250,0,0,0,0,0,0,0,0"));
    assert!(duration.approx_eq(&parse("0.25,0,1,0,0,0,0,0,0"), 1e-12));
}

#[test]
fn test_density_of_a_kilogram_per_cubic_metre() {
    let kilogram = parse("1,3,0,0,1,0,0,0,0");
    let cubic_metre = parse("1,0,0,3,0,0,0,0,0");
    let density = kilogram.divide(&cubic_metre).normalize_to_base_scale();
    assert_eq!(density.unit(), UnitVector::from_exponents(0, -3, 1, 0, 0, 0, 0));
    assert_eq!(density.magnitude(), 1.0);
}

#[test]
fn test_divide_kilogram_and_pure_number() {
    let kilogram = parse("1,3,0,0,1,0,0,0,0");
    let two = Quantity::constant(2.0);

    let half = kilogram.divide(&two).normalize_to_base_scale();
    assert_eq!(half, Quantity::new(0.5, 0, UnitVector::KILOGRAM));
    assert_eq!(verbose(kilogram.divide(&two)), "0.5kg");

    let per_kilogram = two.divide(&kilogram).normalize_to_base_scale();
    assert_eq!(per_kilogram, Quantity::new(2.0, 0, UnitVector::KILOGRAM * -1));
}

#[test]
fn test_divide_energy_by_time() {
    let energy = parse("10,0,-2,2,1,0,0,0,0");
    let second = parse("1,0,1,0,0,0,0,0,0");
    assert_eq!(verbose(energy.divide(&second)), "10W");
}

#[test]
fn test_divide_pure_numbers() {
    let five = parse("5,0,0,0,0,0,0,0,0");
    let two = parse("2,0,0,0,0,0,0,0,0");
    assert_eq!(verbose(five.divide(&two)), "2.5");
    assert_eq!(verbose(five / two), "2.5");
}

#[test]
fn test_divide_kilogram_by_kilogram() {
    let kilogram = parse("1,3,0,0,1,0,0,0,0");
    let ratio = kilogram.divide(&kilogram);
    assert!(ratio.is_dimensionless());
    assert_eq!(ratio.convert_to_scale(0), 1.0);
}

#[test]
fn test_power_multiplies_dimensions() {
    let velocity = Quantity::new(3.0, 0, UnitVector::METRE - UnitVector::SECOND);
    let squared = velocity.power(&Quantity::constant(2.0)).unwrap();
    assert_eq!(
        squared,
        Quantity::new(9.0, 0, UnitVector::from_exponents(-2, 2, 0, 0, 0, 0, 0))
    );
    let cubed = velocity.power(&Quantity::constant(3.0)).unwrap();
    assert_eq!(cubed.unit(), UnitVector::from_exponents(-3, 3, 0, 0, 0, 0, 0));
}

#[test]
fn test_power_works_at_base_scale() {
    let two_thousand = Quantity::new(2.0, 3, UnitVector::DIMENSIONLESS);
    let squared = two_thousand.power(&Quantity::constant(2.0)).unwrap();
    assert_eq!(squared, Quantity::new(4000.0, 3, UnitVector::DIMENSIONLESS));
}

#[test]
fn test_power_of_kilogram_matches_product() {
    let kilogram = parse("1,3,0,0,1,0,0,0,0");
    let squared = kilogram.power(&Quantity::constant(2.0)).unwrap();
    assert!(squared.approx_eq(&kilogram.multiply(&kilogram), 1e-12));
    let identity = kilogram.power(&Quantity::constant(1.0)).unwrap();
    assert_eq!(identity, kilogram);
}

#[test]
fn test_power_rejects_dimensioned_exponent() {
    let base = Quantity::constant(2.0);
    let exponent = Quantity::new(2.0, 0, UnitVector::SECOND);
    assert_eq!(
        base.power(&exponent),
        Err(EquationError::ExponentHasUnits(UnitVector::SECOND))
    );
}

#[test]
fn test_power_rejects_fractional_exponent_on_dimensioned_base() {
    let area = Quantity::new(4.0, 0, UnitVector::METRE * 2);
    assert!(matches!(
        area.power(&Quantity::constant(0.5)),
        Err(EquationError::FractionalExponent { .. })
    ));
    let root = Quantity::constant(4.0).power(&Quantity::constant(0.5)).unwrap();
    assert_eq!(root, Quantity::constant(2.0));
}

#[test]
fn test_transcendental_functions_need_dimensionless_input() {
    let angle = Quantity::new(1.0, 0, UnitVector::METRE);
    assert_eq!(
        angle.map_dimensionless(f64::sin),
        Err(EquationError::DimensionMismatch {
            expected: UnitVector::DIMENSIONLESS,
            found: UnitVector::METRE
        })
    );
    assert!(angle.map_dimensionless(f64::cos).is_err());
    assert!(angle.log(&Quantity::constant(10.0)).is_err());
    assert!(Quantity::constant(10.0).log(&angle).is_err());
}

#[test]
fn test_transcendental_results_are_sanitized() {
    let right_angle = Quantity::constant(std::f64::consts::FRAC_PI_2);
    assert_eq!(right_angle.map_dimensionless(f64::cos).unwrap(), Quantity::constant(0.0));
    assert_eq!(
        right_angle.map_dimensionless(f64::tan).unwrap().magnitude(),
        f64::INFINITY
    );
    let big = Quantity::constant(100.0);
    assert_eq!(big.map_dimensionless(f64::sinh).unwrap().magnitude(), f64::INFINITY);
    assert_eq!(
        big.map_dimensionless(|x| -x.sinh()).unwrap().magnitude(),
        f64::NEG_INFINITY
    );
}

#[test]
fn test_transcendental_functions_read_the_scaled_value() {
    let kilo = Quantity::new(1.0, 3, UnitVector::DIMENSIONLESS);
    let exponent = kilo.map_dimensionless(f64::log10).unwrap();
    assert!(exponent.is_dimensionless());
    assert!((exponent.magnitude() - 3.0).abs() < 1e-12);
}

#[test]
fn test_sign_predicates() {
    assert!(Quantity::constant(-1.0).is_negative());
    assert!(Quantity::constant(1.0).is_positive());
    assert!(Quantity::constant(0.0).is_zero());
    assert!(parse("1,0,1,0,0,0,0,0,0").is_equal_unit(&parse("7,3,1,0,0,0,0,0,0")));
    assert!(!parse("1,0,1,0,0,0,0,0,0").is_equal_unit(&parse("1,0,0,1,0,0,0,0,0")));
}
