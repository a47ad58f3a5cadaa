use std::{
    f64::consts::{FRAC_PI_2, PI},
    fs::{self},
};

use exprwalk::{
    RunOptions,
    ast::{BinaryOperator, Expr},
    error::{ParseError, SampleError},
    get_result,
    interpreter::{
        evaluator::sample::{MAX_SAMPLE_POINTS, SampleRange, sample},
        lexer::{Token, tokenize},
        parser::cursor::MAX_NESTING_DEPTH,
    },
    parse,
};
use walkdir::WalkDir;

#[test]
fn book_examples_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("book/src").into_iter()
                                .filter_map(Result::ok)
                                .filter(|e| e.path().extension().is_some_and(|ext| ext == "md"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (i, code) in extract_expr_blocks(&content).into_iter().enumerate() {
            for line in code.lines().filter(|l| !l.trim().is_empty()) {
                count += 1;
                if let Err(e) = parse(line) {
                    panic!("Example {} in {:?} failed:\n{}\nError: {:?}", i + 1, path, line, e);
                }
            }
        }
    }

    assert!(count > 0, "No expression examples found in book/src");
}

fn extract_expr_blocks(content: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut inside = false;
    let mut buf = String::new();

    for line in content.lines() {
        let trimmed = line.trim_start();
        if trimmed.starts_with("```exprwalk") {
            inside = true;
            buf.clear();
            continue;
        }
        if inside && trimmed.starts_with("```") {
            inside = false;
            blocks.push(buf.clone());
            continue;
        }
        if inside {
            buf.push_str(line);
            buf.push('\n');
        }
    }

    blocks
}

fn assert_renders(src: &str, expected: &str) {
    match parse(src) {
        Ok(expr) => assert_eq!(expr.render(), expected, "rendering of {src:?}"),
        Err(e) => panic!("Expression {src:?} failed: {e}"),
    }
}

fn assert_evaluates(src: &str, x: f64, expected: f64) {
    let expr = parse(src).unwrap_or_else(|e| panic!("Expression {src:?} failed: {e}"));
    let value = expr.evaluate(x);
    assert!((value - expected).abs() < 1e-12,
            "{src:?} at x = {x} evaluated to {value}, expected {expected}");
}

fn assert_failure(src: &str) -> ParseError {
    match parse(src) {
        Ok(expr) => panic!("Expression {src:?} parsed as {expr} but was expected to fail"),
        Err(e) => e,
    }
}

#[test]
fn lexer_splits_on_delimiters_and_drops_whitespace() {
    assert_eq!(tokenize("5 + 2 - 2"),
               vec![Token::Number("5".into()),
                    Token::Operator('+'),
                    Token::Number("2".into()),
                    Token::Operator('-'),
                    Token::Number("2".into())]);
    assert_eq!(tokenize(" s i n ( x ) "),
               vec![Token::Identifier("sin".into()),
                    Token::LeftParen,
                    Token::Identifier("x".into()),
                    Token::RightParen]);
    assert_eq!(tokenize("3.25^x"),
               vec![Token::Number("3.25".into()),
                    Token::Operator('^'),
                    Token::Identifier("x".into())]);
}

#[test]
fn lexer_is_total() {
    assert!(tokenize("").is_empty());
    assert!(tokenize(" \t\n").is_empty());
    assert_eq!(tokenize("2x"), vec![Token::Number("2x".into())]);
    assert_eq!(tokenize("$%"), vec![Token::Identifier("$%".into())]);
    assert_eq!(tokenize("1+"), vec![Token::Number("1".into()), Token::Operator('+')]);
}

#[test]
fn additive_chain_is_left_associative() {
    assert_renders("5 + 2 - 2", "(-,(+,5,2),2)");
    assert_renders("5+2-2", "(-,(+,5,2),2)");
    assert_evaluates("5+2-2", 0.0, 5.0);
    assert_evaluates("5+2-2", 42.0, 5.0);
    assert_evaluates("10-4-3", 0.0, 3.0);
}

#[test]
fn multiplication_binds_tighter_than_addition() {
    assert_renders("1+2*3", "(+,1,(*,2,3))");
    assert_renders("8/4/2", "(/,(/,8,4),2)");
    assert_evaluates("1+2*3", 0.0, 7.0);
    assert_evaluates("8/4/2", 0.0, 1.0);
}

#[test]
fn parentheses_override_precedence() {
    assert_renders("(1+2)*3", "(*,(+,1,2),3)");
    assert_evaluates("(1+2)*3", 0.0, 9.0);
    assert_evaluates("(1+2)*3", -3.5, 9.0);
    assert_renders("((x))", "x");
}

#[test]
fn exponentiation_chains_left_to_right() {
    assert_renders("2^3^2", "(^,(^,2,3),2)");
    assert_evaluates("2^3^2", 0.0, 64.0);
    assert_renders("2*x^2", "(*,2,(^,x,2))");
    assert_evaluates("2*x^2", 3.0, 18.0);
    assert_evaluates("2^(3^2)", 0.0, 512.0);
}

#[test]
fn sine_and_unknown_functions() {
    assert_renders("sin(x)", "sin(x)");
    assert_evaluates("sin(x)", 0.0, 0.0);
    assert_evaluates("sin(x)", FRAC_PI_2, 1.0);
    assert_evaluates("sin(x*2)", PI / 4.0, 1.0);
    assert_renders("cos(x+1)", "cos((+,x,1))");
    assert_evaluates("cos(x)", 0.0, 0.0);
    assert_evaluates("1+foo(x)", 5.0, 1.0);
    assert_eq!(parse("sin(x)").unwrap().function(), Some(exprwalk::ast::Function::Sin));
    assert_eq!(parse("cos(x)").unwrap().function(), None);
}

#[test]
fn decimal_literals() {
    assert_renders("0.5*x", "(*,0.5,x)");
    assert_evaluates("0.5*x", 3.0, 1.5);
    assert_evaluates("1.+x", 1.0, 2.0);
}

#[test]
fn numeric_trees_ignore_x() {
    for src in ["5+2-2", "(1+2)*3", "2^10/4", "sin(1)"] {
        let expr = parse(src).unwrap();
        assert!(!expr.depends_on_variable());
        assert_eq!(expr.evaluate(0.0).to_bits(), expr.evaluate(7.0).to_bits());
    }
    assert!(parse("sin(x)").unwrap().depends_on_variable());
}

#[test]
fn numeric_edge_cases_propagate() {
    assert_eq!(parse("1/0").unwrap().evaluate(0.0), f64::INFINITY);
    assert_eq!(parse("0-1/0").unwrap().evaluate(0.0), f64::NEG_INFINITY);
    assert!(parse("0/0").unwrap().evaluate(0.0).is_nan());
    assert!(parse("1/x").unwrap().evaluate(0.0).is_infinite());
    assert!(parse("(0-8)^0.5").unwrap().evaluate(0.0).is_nan());
}

#[test]
fn builds_expected_tree() {
    let expected = Expr::binary(Expr::call("sin", Expr::Variable),
                                BinaryOperator::Add,
                                Expr::binary(Expr::number(2.0), BinaryOperator::Mul, Expr::Variable));
    assert_eq!(parse("sin(x) + 2*x").unwrap(), expected);
}

#[test]
fn lone_operator_is_unrecognized_atom() {
    assert_eq!(assert_failure("+"),
               ParseError::UnrecognizedAtom { token:    "+".into(),
                                              position: 0, });
    assert_eq!(assert_failure("2*)"),
               ParseError::UnrecognizedAtom { token:    ")".into(),
                                              position: 2, });
    assert!(matches!(assert_failure("-1"), ParseError::UnrecognizedAtom { position: 0, .. }));
}

#[test]
fn running_out_of_tokens() {
    assert_eq!(assert_failure(""), ParseError::UnexpectedEndOfInput { position: 0 });
    assert_eq!(assert_failure("   "), ParseError::UnexpectedEndOfInput { position: 0 });
    assert_eq!(assert_failure("(1+2"), ParseError::UnexpectedEndOfInput { position: 4 });
    assert_eq!(assert_failure("1+"), ParseError::UnexpectedEndOfInput { position: 2 });
    assert_eq!(assert_failure("sin"), ParseError::UnexpectedEndOfInput { position: 1 });
    // Whitespace is not a separator: this is a call to `sinx` missing its `(`.
    assert_eq!(assert_failure("sin x"), ParseError::UnexpectedEndOfInput { position: 1 });
}

#[test]
fn mismatched_tokens_abort() {
    assert_eq!(assert_failure("sin*x"),
               ParseError::UnexpectedToken { expected: "(".into(),
                                             found:    "*".into(),
                                             position: 1, });
    assert_eq!(assert_failure("(1+2(3"),
               ParseError::UnexpectedToken { expected: ")".into(),
                                             found:    "(".into(),
                                             position: 4, });
}

#[test]
fn invalid_numbers_fail_at_parse_time() {
    assert_eq!(assert_failure("2x"),
               ParseError::InvalidNumber { literal:  "2x".into(),
                                           position: 0, });
    assert_eq!(assert_failure("x+1.2.3"),
               ParseError::InvalidNumber { literal:  "1.2.3".into(),
                                           position: 2, });
}

#[test]
fn trailing_tokens_are_rejected() {
    assert_eq!(assert_failure("1+2)"),
               ParseError::UnexpectedTrailingTokens { token:    ")".into(),
                                                      position: 3, });
    assert_eq!(assert_failure("x(2)"),
               ParseError::UnexpectedTrailingTokens { token:    "(".into(),
                                                      position: 1, });
}

#[test]
fn errors_report_their_position() {
    let err = assert_failure("1+(2*");
    assert_eq!(err.position(), 5);
    assert_eq!(err.to_string(), "Error at token 5: Unexpected end of input.");
}

#[test]
fn deep_groups_are_rejected() {
    assert!(matches!(assert_failure(&"(".repeat(10_000)), ParseError::NestingTooDeep { .. }));

    let balanced = "(".repeat(10_000) + "1" + &")".repeat(10_000);
    assert!(matches!(assert_failure(&balanced),
                     ParseError::NestingTooDeep { limit: MAX_NESTING_DEPTH,
                                                  .. }));

    let calls = "sin(".repeat(1_000) + "x" + &")".repeat(1_000);
    assert!(matches!(assert_failure(&calls), ParseError::NestingTooDeep { .. }));
}

#[test]
fn long_chains_are_rejected() {
    let sum = vec!["1"; 100_000].join("+");
    assert!(matches!(assert_failure(&sum), ParseError::NestingTooDeep { .. }));

    let power = vec!["x"; 100_000].join("^");
    assert!(matches!(assert_failure(&power), ParseError::NestingTooDeep { .. }));
}

#[test]
fn chains_inside_groups_count_toward_depth() {
    let mut src = "1".to_string();
    for _ in 0..200 {
        src = format!("({src}{})", "+1".repeat(200));
    }
    assert!(matches!(assert_failure(&src), ParseError::NestingTooDeep { .. }));
}

#[test]
fn nesting_up_to_the_limit_is_accepted() {
    let grouped = "(".repeat(MAX_NESTING_DEPTH) + "x" + &")".repeat(MAX_NESTING_DEPTH);
    assert_evaluates(&grouped, 3.0, 3.0);

    let sum = vec!["1"; MAX_NESTING_DEPTH].join("+");
    let expr = parse(&sum).unwrap();
    assert_eq!(expr.depth(), MAX_NESTING_DEPTH);
    assert_eq!(expr.evaluate(0.0), 256.0);
    assert!(expr.render().starts_with("(+,(+,"));

    let too_long = vec!["1"; MAX_NESTING_DEPTH + 1].join("+");
    assert_eq!(assert_failure(&too_long).to_string(),
               format!("Error at token {}: Expression nesting is too deep (maximum {MAX_NESTING_DEPTH} levels).",
                       2 * MAX_NESTING_DEPTH + 1));
}

#[test]
fn sampling_default_range() {
    let expr = parse("x").unwrap();
    let samples = sample(&expr, SampleRange::default()).unwrap();
    assert_eq!(samples.len(), 201);
    assert_eq!(samples[0].x, 0.0);
    assert!((samples[100].x - 1.0).abs() < 1e-12);
    assert!((samples[200].x - 2.0).abs() < 1e-12);
    assert!(samples.iter().all(|s| s.x.to_bits() == s.y.to_bits()));
}

#[test]
fn sampling_rejects_bad_ranges() {
    let expr = parse("x").unwrap();
    let zero_step = SampleRange { step: 0.0,
                                  ..SampleRange::default() };
    assert_eq!(sample(&expr, zero_step), Err(SampleError::InvalidStep { step: 0.0 }));

    let open_end = SampleRange { end: f64::INFINITY,
                                 ..SampleRange::default() };
    assert!(matches!(sample(&expr, open_end), Err(SampleError::NonFiniteBound { .. })));

    let reversed = SampleRange { start: 2.0,
                                 end:   0.0,
                                 step:  0.5, };
    assert!(sample(&expr, reversed).unwrap().is_empty());
    assert_eq!(zero_step.points().count(), 0);

    let huge = SampleRange { start: 0.0,
                             end:   1e12,
                             step:  1e-6, };
    assert!(matches!(sample(&expr, huge),
                     Err(SampleError::TooManyPoints { limit: MAX_SAMPLE_POINTS,
                                                      .. })));
    assert_eq!(huge.points().count(), 0);
}

#[test]
fn sampling_constant_expressions() {
    let expr = parse("2^3+sin(0)").unwrap();
    let samples = sample(&expr, SampleRange::default()).unwrap();
    assert_eq!(samples.len(), 201);
    assert!(samples.iter().all(|s| s.y == 8.0));
}

#[test]
fn get_result_reports_everything() {
    let options = RunOptions { at:    2.0,
                               range: SampleRange { start: 0.0,
                                                    end:   1.0,
                                                    step:  0.25, }, };
    let report = get_result("x*x", options).unwrap();
    assert_eq!(report.rendered, "(*,x,x)");
    assert_eq!(report.value, 4.0);
    let ys: Vec<f64> = report.samples.iter().map(|s| s.y).collect();
    assert_eq!(ys, vec![0.0, 0.0625, 0.25, 0.5625, 1.0]);

    assert!(get_result("(1+2", RunOptions::default()).is_err());
}

#[test]
fn trees_are_shareable_across_threads() {
    let expr = parse("sin(x)*x").unwrap();
    std::thread::scope(|scope| {
        let handles: Vec<_> =
            (0..4).map(|i| {
                      let expr = &expr;
                      scope.spawn(move || expr.evaluate(f64::from(i)))
                  })
                  .collect();
        for (i, handle) in handles.into_iter().enumerate() {
            let x = f64::from(u8::try_from(i).unwrap());
            assert_eq!(handle.join().unwrap(), x.sin() * x);
        }
    });
}
