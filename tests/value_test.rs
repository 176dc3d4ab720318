use proptest::prelude::*;

use grin::value::{
    error::RuntimeErrorKind,
    formatter::{format_float, format_verbose},
    operator::{ArithmeticOperator, ComparisonOperator},
    GrinValue,
};

fn string(text: &str) -> GrinValue {
    GrinValue::from(text)
}

#[test]
fn test_addition() {
    assert_eq!(
        GrinValue::Integer(2).add(&GrinValue::Integer(3)),
        Ok(GrinValue::Integer(5))
    );
    assert_eq!(
        GrinValue::Integer(2).add(&GrinValue::Float(0.5)),
        Ok(GrinValue::Float(2.5))
    );
    assert_eq!(string("ab").add(&string("cd")), Ok(string("abcd")));
    assert_eq!(
        string("ab").add(&GrinValue::Integer(1)),
        Err(RuntimeErrorKind::InvalidOperands {
            operator: ArithmeticOperator::Add,
            lhs: "string",
            rhs: "integer"
        })
    );
}

#[test]
fn test_subtraction() {
    assert_eq!(
        GrinValue::Integer(2).subtract(&GrinValue::Integer(5)),
        Ok(GrinValue::Integer(-3))
    );
    assert_eq!(
        GrinValue::Float(1.5).subtract(&GrinValue::Integer(1)),
        Ok(GrinValue::Float(0.5))
    );
    assert!(string("a").subtract(&string("a")).is_err());
}

#[test]
fn test_multiplication() {
    assert_eq!(
        GrinValue::Integer(4).multiply(&GrinValue::Integer(3)),
        Ok(GrinValue::Integer(12))
    );
    assert_eq!(
        GrinValue::Float(0.5).multiply(&GrinValue::Integer(3)),
        Ok(GrinValue::Float(1.5))
    );
    assert_eq!(
        string("ab").multiply(&GrinValue::Integer(3)),
        Ok(string("ababab"))
    );
    assert_eq!(
        GrinValue::Integer(2).multiply(&string("xy")),
        Ok(string("xyxy"))
    );
    assert_eq!(string("ab").multiply(&GrinValue::Integer(0)), Ok(string("")));
    assert_eq!(
        string("ab").multiply(&GrinValue::Integer(-2)),
        Err(RuntimeErrorKind::NegativeRepetition(-2))
    );
    assert_eq!(
        string("").multiply(&GrinValue::Integer(i64::MAX)),
        Ok(string(""))
    );
    assert!(string("ab").multiply(&GrinValue::Float(2.0)).is_err());
    assert!(string("ab").multiply(&string("cd")).is_err());
}

#[test]
fn test_huge_repetition() {
    assert_eq!(
        string("ab").multiply(&GrinValue::Integer(i64::MAX)),
        Err(RuntimeErrorKind::RepetitionTooLarge(i64::MAX))
    );
    assert_eq!(
        GrinValue::Integer(i64::MAX).multiply(&string("x")),
        Err(RuntimeErrorKind::RepetitionTooLarge(i64::MAX))
    );
}

#[test]
fn test_division() {
    assert_eq!(
        GrinValue::Integer(7).divide(&GrinValue::Integer(2)),
        Ok(GrinValue::Integer(3))
    );
    assert_eq!(
        GrinValue::Integer(-7).divide(&GrinValue::Integer(2)),
        Ok(GrinValue::Integer(-3))
    );
    assert_eq!(
        GrinValue::Integer(7).divide(&GrinValue::Integer(-2)),
        Ok(GrinValue::Integer(-3))
    );
    assert_eq!(
        GrinValue::Integer(7).divide(&GrinValue::Float(2.0)),
        Ok(GrinValue::Float(3.5))
    );
    assert_eq!(
        GrinValue::Integer(1).divide(&GrinValue::Integer(0)),
        Err(RuntimeErrorKind::DivisionByZero)
    );
    assert_eq!(
        GrinValue::Float(1.0).divide(&GrinValue::Float(-0.0)),
        Err(RuntimeErrorKind::DivisionByZero)
    );
    assert!(string("a").divide(&GrinValue::Integer(1)).is_err());
}

#[test]
fn test_overflow() {
    assert_eq!(
        GrinValue::Integer(i64::MAX).add(&GrinValue::Integer(1)),
        Err(RuntimeErrorKind::IntegerOverflow(ArithmeticOperator::Add))
    );
    assert_eq!(
        GrinValue::Integer(i64::MIN).divide(&GrinValue::Integer(-1)),
        Err(RuntimeErrorKind::IntegerOverflow(ArithmeticOperator::Divide))
    );
}

#[test]
fn test_comparisons() {
    use ComparisonOperator::*;

    let cases = [
        (GrinValue::Integer(1), Equal, GrinValue::Float(1.0), true),
        (GrinValue::Integer(1), NotEqual, GrinValue::Integer(2), true),
        (GrinValue::Float(1.5), LessThan, GrinValue::Integer(2), true),
        (GrinValue::Integer(2), LessThanEqual, GrinValue::Integer(2), true),
        (GrinValue::Integer(3), GreaterThan, GrinValue::Float(3.5), false),
        (GrinValue::Integer(3), GreaterThanEqual, GrinValue::Integer(4), false),
        (string("Boo"), LessThan, string("boo"), true),
        (string("abc"), GreaterThan, string("ab"), true),
        (string("same"), Equal, string("same"), true),
    ];
    for (lhs, operator, rhs, expected) in cases {
        assert_eq!(
            lhs.compare(operator, &rhs),
            Ok(expected),
            "{lhs} {operator} {rhs}"
        );
    }

    assert_eq!(
        string("1").compare(Equal, &GrinValue::Integer(1)),
        Err(RuntimeErrorKind::InvalidComparison {
            lhs: "string",
            rhs: "integer"
        })
    );
}

#[test]
fn test_float_format() {
    assert_eq!(format_float(3.0), "3.0");
    assert_eq!(format_float(-0.0), "-0.0");
    assert_eq!(format_float(13.015625), "13.015625");
    assert_eq!(format_float(0.1 + 0.2), "0.30000000000000004");
    assert_eq!(format_float(0.0001), "0.0001");
    assert_eq!(format_float(1e16), "1e+16");
    assert_eq!(format_float(1.5e-7), "1.5e-07");
    assert_eq!(format_float(2.5e100), "2.5e+100");
    assert_eq!(format_float(f64::INFINITY), "inf");
    assert_eq!(format_float(f64::NEG_INFINITY), "-inf");
    assert_eq!(format_float(f64::NAN), "nan");
}

#[test]
fn test_display() {
    assert_eq!(GrinValue::Integer(-4).to_string(), "-4");
    assert_eq!(GrinValue::Float(2.0).to_string(), "2.0");
    assert_eq!(string("text").to_string(), "text");
    assert_eq!(GrinValue::default(), GrinValue::Integer(0));
}

#[test]
fn test_verbose_format() {
    assert_eq!(format_verbose(&GrinValue::Integer(5)), "Integer(5)");
    assert_eq!(format_verbose(&GrinValue::Float(0.5)), "Float(0.5)");
    assert_eq!(format_verbose(&string("hi")), "String(\"hi\")");
}

proptest! {
    #[test]
    fn test_division_truncates(
        lhs in -1_000_000_000i64..1_000_000_000,
        rhs in -1_000i64..1_000,
    ) {
        prop_assume!(rhs != 0);
        let quotient = GrinValue::Integer(lhs).divide(&GrinValue::Integer(rhs));
        let Ok(GrinValue::Integer(quotient)) = quotient else {
            panic!("Integer division should give an integer");
        };
        let remainder = lhs - quotient * rhs;
        prop_assert!(remainder.abs() < rhs.abs());
        prop_assert!(remainder == 0 || remainder.signum() == lhs.signum());
    }

    #[test]
    fn test_repetition_is_symmetric(text in "[a-z]{0,8}", count in 0i64..16) {
        let left = string(&text).multiply(&GrinValue::Integer(count));
        let right = GrinValue::Integer(count).multiply(&string(&text));
        prop_assert_eq!(&left, &right);
        let Ok(GrinValue::String(repeated)) = left else {
            panic!("Repetition should give a string");
        };
        prop_assert_eq!(repeated.len(), text.len() * count as usize);
    }

    #[test]
    fn test_numbers_compare_across_types(value in -1_000_000i64..1_000_000) {
        let integer = GrinValue::Integer(value);
        let float = GrinValue::Float(value as f64);
        prop_assert_eq!(
            integer.compare(ComparisonOperator::Equal, &float),
            Ok(true)
        );
        prop_assert_eq!(
            float.compare(ComparisonOperator::GreaterThanEqual, &integer),
            Ok(true)
        );
    }
}
