use std::fs::{self};

use radica::{
    Error,
    error::{ParseError, RuntimeError},
    evaluate,
    interpreter::evaluator::core::Context,
};
use walkdir::WalkDir;

const EPS: f64 = 5e-5;

fn assert_eval(src: &str, expected: f64) {
    match evaluate(src) {
        Ok(value) => assert!((value - expected).abs() < EPS,
                             "'{src}' evaluated to {value}, expected {expected}"),
        Err(e) => panic!("'{src}' failed: {e}"),
    }
}

fn eval_err(src: &str) -> Error {
    match evaluate(src) {
        Ok(value) => panic!("'{src}' evaluated to {value} but was expected to fail"),
        Err(e) => e,
    }
}

#[test]
fn case_files_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/cases").into_iter()
                                   .filter_map(Result::ok)
                                   .filter(|e| e.path().extension().is_some_and(|ext| ext == "calc"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (i, line) in content.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            count += 1;

            if let Some((src, kind)) = line.split_once(" ! ") {
                let err = eval_err(src);
                assert_eq!(error_kind(&err),
                           kind.trim(),
                           "{path:?}:{}: '{src}' failed with {err:?}",
                           i + 1);
            } else if let Some((src, expected)) = line.split_once(" => ") {
                let expected = expected.trim();
                let value = evaluate(src).unwrap_or_else(|e| {
                                              panic!("{path:?}:{}: '{src}' failed: {e}", i + 1)
                                          });
                match expected {
                    "NaN" => assert!(value.is_nan(), "{path:?}:{}: '{src}' gave {value}", i + 1),
                    "inf" | "-inf" => {
                        assert_eq!(value.to_string(), expected, "{path:?}:{}: '{src}'", i + 1);
                    },
                    _ => {
                        let expected: f64 = expected.parse()
                                                    .unwrap_or_else(|e| panic!("{path:?}:{}: {e}", i + 1));
                        assert!((value - expected).abs() < EPS,
                                "{path:?}:{}: '{src}' evaluated to {value}, expected {expected}",
                                i + 1);
                    },
                }
            } else {
                panic!("{path:?}:{}: cannot read case '{line}'", i + 1);
            }
        }
    }

    assert!(count > 0, "No cases found in tests/cases");
}

fn error_kind(err: &Error) -> &'static str {
    match err {
        Error::Parse(ParseError::UnmatchedParenthesis { .. }) => "UnmatchedParenthesis",
        Error::Parse(ParseError::EmptyGroup { .. }) => "EmptyGroup",
        Error::Parse(ParseError::MalformedNumber { .. }) => "MalformedNumber",
        Error::Parse(ParseError::MissingExponent { .. }) => "MissingExponent",
        Error::Parse(ParseError::NestingTooDeep { .. }) => "NestingTooDeep",
        Error::Parse(ParseError::TooManyOperators { .. }) => "TooManyOperators",
        Error::Runtime(RuntimeError::NonIntegerExponent { .. }) => "NonIntegerExponent",
        Error::Runtime(RuntimeError::InvalidFractionalExponent { .. }) => {
            "InvalidFractionalExponent"
        },
        Error::Runtime(RuntimeError::DivisionByZero { .. }) => "DivisionByZero",
    }
}

#[test]
fn basic_arithmetic() {
    assert_eval("10-3+2", 9.0);
    assert_eval("20*5/2", 50.0);
    assert_eval("100/5/2+1", 11.0);
    assert_eval("1+2*3-4/2+5*2", 15.0);
    assert_eval("5-3-1", 1.0);
    assert_eval("7", 7.0);
    assert_eval("-2.5", -2.5);
}

#[test]
fn precedence_and_associativity() {
    assert_eval("2+3*4", 14.0);
    assert_eval("2+3^2", 11.0);
    assert_eval("20/5*2", 8.0);
    assert_eval("2^3^2", 512.0);
}

#[test]
fn sign_runs_collapse() {
    assert_eval("4*-5", -20.0);
    assert_eval("1--2", 3.0);
    assert_eval("2++4", 6.0);
    assert_eval("-5", -5.0);
    assert_eval("+-5", -5.0);
    assert_eval("1- -2", 3.0);
    assert_eval("2+-4", -2.0);
    assert_eval("2-+4", -2.0);
    assert_eval("+5", 5.0);
    assert_eval("-+5", -5.0);
    assert_eval("--5", 5.0);
    assert_eval("5--3", 8.0);
    assert_eval("3*+2", 6.0);
    assert_eval("3*-2", -6.0);
    assert_eval("1 - - - 1", 0.0);
}

#[test]
fn parentheses() {
    assert_eval("(2+3)*4", 20.0);
    assert_eval("2*(3+4)", 14.0);
    assert_eval("10-(2+3)", 5.0);
    assert_eval("((2+3)*(4+5))", 45.0);
    assert_eval("-(3+4)", -7.0);
    assert_eval("(2+3*4)-(6/2)", 11.0);
    assert_eval("((1+2)+((3+4)*2))", 17.0);
    assert_eval("-(1+(-2+3))*2", -4.0);
}

#[test]
fn integer_powers() {
    assert_eval("2^3", 8.0);
    assert_eval("2^-3", 0.125);
    assert_eval("7^0", 1.0);
    assert_eval("(-2)^4", 16.0);
    assert_eval("(-2)^3", -8.0);
    assert_eval("2*3^2", 18.0);
    assert_eval("(2+3)^2", 25.0);
    assert_eval("(2+1)^-2", 1.0 / 9.0);
    assert_eval("7^1", 7.0);
    assert_eval("9^2/3", 27.0);
    assert_eval("((1+1)*(2+1))^2", 36.0);
    assert_eval("-(2^3)", -8.0);
    assert_eval("(-3)^2+1", 10.0);
    assert_eval("2^0", 1.0);
    assert_eval("0^0", 1.0);
    assert_eval("2^3^2", 512.0);
    assert_eval("2^-3^2", 1.0 / 512.0);
}

#[test]
fn leading_sign_binds_to_the_base() {
    assert_eval("-2^2", 4.0);
    assert_eval("(-2^2)", 4.0);
    assert_eval("3*-2^2", -12.0);
    assert_eval("-(2)^2", -4.0);
    assert_eval("1-2^2", -3.0);
}

#[test]
fn fractional_powers() {
    assert_eval("9^(1/2)", 3.0);
    assert_eval("8^(1/3)", 2.0);
    assert_eval("3^(2/3)", 2.0801);
    assert_eval("2^(6/3)", 4.0);
    assert_eval("16^(1/4)", 2.0);
    assert_eval("(27)^(2/3)", 9.0);
    assert_eval("  9  ^ (  1 / 2 ) ", 3.0);
    assert_eval("4^(-1/2)", 0.5);
    assert_eval("4^-(1/2)", 0.5);
    assert_eval("(-8)^(1/3)", -2.0);
    assert_eval("2^(1/2)", 1.4142);
}

#[test]
fn fractional_powers_are_rounded() {
    assert_eq!(evaluate("2^(1/2)").unwrap(), 1.4142);
    assert_eq!(evaluate("3^(2/3)").unwrap(), 2.0801);
}

#[test]
fn integer_powers_are_not_rounded() {
    assert_eq!(evaluate("2^-10").unwrap(), 1.0 / 1024.0);
    assert_eq!(evaluate("3^-1").unwrap(), 1.0 / 3.0);
}

#[test]
fn even_root_of_negative_is_nan() {
    assert!(evaluate("(-4)^(1/2)").unwrap().is_nan());
}

#[test]
fn division_by_zero_follows_ieee() {
    assert_eq!(evaluate("1/0").unwrap(), f64::INFINITY);
    assert_eq!(evaluate("-1/0").unwrap(), f64::NEG_INFINITY);
    assert!(evaluate("0/0").unwrap().is_nan());
}

#[test]
fn unmatched_parenthesis_is_error() {
    for src in ["(2+3", "2+3)", "((1)", ")(", "(()"] {
        assert!(matches!(eval_err(src), Error::Parse(ParseError::UnmatchedParenthesis { .. })),
                "'{src}'");
    }
}

#[test]
fn empty_group_is_error() {
    for src in ["()", "2*()", "(1+())"] {
        assert!(matches!(eval_err(src), Error::Parse(ParseError::EmptyGroup { .. })),
                "'{src}'");
    }
}

#[test]
fn malformed_number_is_error() {
    for src in ["", "   ", "abc", "1.2.3", "2+", "-", "2*", "1,5", "(0.5)(0.5)"] {
        assert!(matches!(eval_err(src), Error::Parse(ParseError::MalformedNumber { .. })),
                "'{src}'");
    }
}

#[test]
fn missing_exponent_is_error() {
    for src in ["2^", "(2^)", "2^*3", "2^^3"] {
        assert!(matches!(eval_err(src), Error::Parse(ParseError::MissingExponent { .. })),
                "'{src}'");
    }
}

#[test]
fn non_integer_exponent_is_error() {
    match eval_err("2^0.5") {
        Error::Runtime(RuntimeError::NonIntegerExponent { exponent, expr }) => {
            assert_eq!(exponent, 0.5);
            assert_eq!(expr, "0.5");
        },
        other => panic!("unexpected error {other:?}"),
    }
    assert!(matches!(eval_err("2^1.5"),
                     Error::Runtime(RuntimeError::NonIntegerExponent { .. })));
    assert!(matches!(eval_err("2^((1/2))"),
                     Error::Runtime(RuntimeError::NonIntegerExponent { .. })));
    assert!(matches!(eval_err("2^(1/2)^2"),
                     Error::Runtime(RuntimeError::NonIntegerExponent { .. })));
}

#[test]
fn fractional_exponent_splits_at_first_slash() {
    assert_eval("2^(1+1/2)", 2.0);
    assert_eval("2^(2*3/4)", 2.8284);
    assert_eval("2^(3-1/2)", 2.0);
    assert_eval("4^(1/2*4)", 1.1892);
    assert_eval("2^(1/2/2)", 2.0);
    assert_eval("16^(2^2/2^4)", 2.0);
    assert_eval("4^(1/-2)", 0.5);
    assert_eval("9^-(4-3/2)", 1.0 / 3.0);
}

#[test]
fn whole_exponents_beyond_exact_range() {
    assert_eq!(evaluate("1^10000000000000000").unwrap(), 1.0);
    assert_eq!(evaluate("(-1)^10000000000000000").unwrap(), 1.0);
    assert_eq!(evaluate("0.5^100000000000000000").unwrap(), 0.0);
    assert_eq!(evaluate("2^10000000000000000").unwrap(), f64::INFINITY);
}

#[test]
fn adjacent_operands_join_as_text() {
    assert_eval("2(3)", 23.0);
    assert_eval("(2)(3)", 23.0);
    assert_eval("(2)3", 23.0);
    assert_eval("(1+1)(3)", 23.0);
    assert_eval("(1)(2)(3)", 123.0);
    assert_eval("-2(3)", -23.0);
    assert_eval("2(-3)", -1.0);
    assert_eval("(1/2)(3)", 0.53);
    assert_eval("1+2(3)*2", 47.0);
    assert_eval("2^3(4)", 17_179_869_184.0);
}

#[test]
fn invalid_fractional_exponent_is_error() {
    for src in ["2^(1.5/2)", "2^(1/2.5)", "4^(1/(1/2))"] {
        assert!(matches!(eval_err(src),
                         Error::Runtime(RuntimeError::InvalidFractionalExponent { .. })),
                "'{src}'");
    }
}

#[test]
fn zero_denominator_in_exponent_is_error() {
    for src in ["2^(1/0)", "2^(1/(1-1))", "2^-(3/0)"] {
        assert!(matches!(eval_err(src), Error::Runtime(RuntimeError::DivisionByZero { .. })),
                "'{src}'");
    }
}

#[test]
fn errors_quote_the_offending_text() {
    assert_eq!(eval_err("(2+3").to_string(), "Error at '(2+3': Unmatched parenthesis.");
    assert_eq!(eval_err("1+()").to_string(),
               "Error at '()': Parentheses enclose no expression.");
    assert_eq!(eval_err("2^(1/0)").to_string(),
               "Error at '(1/0)': Division by zero in exponent.");
}

#[test]
fn whitespace_is_ignored() {
    assert_eq!(evaluate("  9  ^ (  1 / 2 ) ").unwrap(), evaluate("9^(1/2)").unwrap());
    assert_eq!(evaluate("1\t+\n2").unwrap(), 3.0);
    assert_eq!(evaluate("1 2 + 3").unwrap(), 15.0);
}

#[test]
fn results_evaluate_to_themselves() {
    for src in ["1/3", "-7/8", "2^(1/2)", "(2+1)^-2", "10^-7"] {
        let value = evaluate(src).unwrap();
        assert_eq!(evaluate(&value.to_string()).unwrap(), value, "'{src}' -> {value}");
    }
}

#[test]
fn nesting_limit() {
    let shallow = format!("{}1{}", "(".repeat(100), ")".repeat(100));
    assert_eval(&shallow, 1.0);

    let deep = format!("{}1{}", "(".repeat(300), ")".repeat(300));
    assert!(matches!(eval_err(&deep),
                     Error::Parse(ParseError::NestingTooDeep { limit: 256 })));

    let mut context = Context::new();
    context.max_nesting = 4;
    assert!(context.evaluate("(((((1)))))").is_err());
    assert_eq!(context.evaluate("((((1))))").unwrap(), 1.0);
}

#[test]
fn operator_limit() {
    let mut context = Context::new();
    context.max_operators = 3;

    assert_eq!(context.evaluate("1+1+1+1").unwrap(), 4.0);
    assert_eq!(context.evaluate("1+1+1+1+1"),
               Err(Error::Parse(ParseError::TooManyOperators { count: 4, limit: 3 })));
}

#[test]
fn fraction_digits_setting() {
    let mut context = Context::new();
    context.fraction_digits = 2;
    assert_eq!(context.evaluate("2^(1/2)").unwrap(), 1.41);

    context.fraction_digits = 0;
    assert_eq!(context.evaluate("2^(1/2)").unwrap(), 1.0);
}
