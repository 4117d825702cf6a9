use std::fs::{self};

use setlang::{
    error::{Error, ParseError, RuntimeError},
    get_result,
    session::Session,
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

        for (i, code) in extract_dsl_blocks(&content).into_iter().enumerate() {
            count += 1;
            if let Err(e) = get_result(&code) {
                panic!("Example {} in {:?} failed:\n{}\nError: {}", i + 1, path, code, e);
            }
        }
    }

    assert!(count > 0, "No examples found in book/src");
}

fn extract_dsl_blocks(content: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut inside = false;
    let mut buf = String::new();

    for line in content.lines() {
        let trimmed = line.trim_start();
        if trimmed.starts_with("```setlang") {
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

fn assert_output(src: &str, expected: &str) {
    match get_result(src) {
        Ok(Some(value)) => assert_eq!(value, expected, "Script: {src}"),
        Ok(None) => panic!("Script produced no value: {src}"),
        Err(e) => panic!("Script failed: {e}"),
    }
}

fn assert_failure(src: &str) -> Error {
    match get_result(src) {
        Ok(value) => panic!("Script succeeded with {value:?} but was expected to fail"),
        Err(e) => e.error,
    }
}

#[test]
fn arithmetic_and_precedence() {
    assert_output("3 * (3 + 2)", "15");
    assert_output("1 + 2 * 3", "7");
    assert_output("(1 + 2) * 3", "9");
    assert_output("10 - 4 - 3", "3");
    assert_output("100 / 10 / 5", "2");
    assert_output("10 / 4", "2.5");
    assert_output("1 / 3", "0.3333333333333333");
    assert_output("2 * -3", "-6");
    assert_output("--5", "5");
    assert_output("-+-5 + 1", "6");
}

#[test]
fn boolean_arithmetic() {
    assert_output("true + 10", "11");
    assert_output("false / 1", "0");
    assert_output("true + true", "2");
    assert_output("true * false", "0");
}

#[test]
fn arithmetic_with_null_or_strings_is_null() {
    assert_output("null + 1", "null");
    assert_output("\"a\" + 1", "null");
    assert_output("2 * \"b\"", "null");
}

#[test]
fn division_by_zero_is_not_an_error() {
    assert_output("1 / 0", "inf");
    assert_output("-1 / 0", "-inf");
    assert_output("0 / 0", "NaN");
}

#[test]
fn equality() {
    assert_output("1234 == 1234", "true");
    assert_output("10 != 11", "true");
    assert_output("10 == 11", "false");
    assert_output("-10 == false", "true");
    assert_output("5 == true", "true");
    assert_output("0 == true", "false");
    assert_output("\"1\" == 1", "false");
    assert_output("\"1\" != 1", "false");
    assert_output("\"abc\" == \"abc\"", "true");
    assert_output("null == null", "true");
    assert_output("true == true", "true");
    assert_output("1 + 1 == 2", "true");
}

#[test]
fn declarations_and_assignment() {
    assert_output("set hello = 1\nhello = 321\nhello", "321");
    assert_output("set x\nx", "null");
    assert_output("set x = 2\nset y = x * 3\ny + x", "8");
    assert_output("set a = 1\nset b = 2\na = b = 7\na + b", "14");
    assert_output("set s = \"text\"\ns", "text");
}

#[test]
fn declaration_yields_its_value() {
    assert_output("set x = 4 * 4", "16");
}

#[test]
fn duplicate_declaration_fails() {
    let error = assert_failure("set x = 1\nset x = 2");
    assert_eq!(error,
               Error::Runtime(RuntimeError::VariableAlreadyDeclared { name: "x".to_string() }));
}

#[test]
fn undeclared_assignment_fails() {
    let error = assert_failure("y = 5");
    assert_eq!(error, Error::Runtime(RuntimeError::VariableDoesNotExist { name: "y".to_string() }));
}

#[test]
fn undeclared_read_fails() {
    let error = assert_failure("z + 1");
    assert_eq!(error, Error::Runtime(RuntimeError::UnknownVariable { name: "z".to_string() }));
}

#[test]
fn parse_errors_are_reported() {
    assert!(matches!(assert_failure("set 5"), Error::Parse(ParseError::UnexpectedToken { .. })));
    assert!(matches!(assert_failure("(1 + 2"), Error::Parse(ParseError::UnexpectedToken { .. })));
    assert!(matches!(assert_failure("1 = 2"),
                     Error::Parse(ParseError::InvalidAssignmentTarget { .. })));
    assert!(matches!(assert_failure("* 2"), Error::Parse(ParseError::UnexpectedToken { .. })));
}

#[test]
fn lex_errors_are_reported() {
    assert!(matches!(assert_failure("1 @ 2"), Error::Lex(_)));
    assert!(matches!(assert_failure("\"Hello"), Error::Lex(_)));
}

#[test]
fn failing_line_is_numbered() {
    let error = get_result("set x = 1\n\nx = 2\nset x = 3\nx").unwrap_err();
    assert_eq!(error.line, 4);
    assert_eq!(error.to_string(), "Error on line 4: Variable 'x' is already declared.");
}

#[test]
fn blank_script_has_no_value() {
    assert_eq!(get_result("").unwrap(), None);
    assert_eq!(get_result("\n   \n\t\n").unwrap(), None);
}

#[test]
fn integers_render_without_fraction() {
    let mut session = Session::new();
    for n in [1_u64, 7, 42, 1234, 65_536, 1_000_000_007, 9_007_199_254_740_992] {
        assert_eq!(session.eval_line(&n.to_string()).unwrap(), n.to_string());
        assert_eq!(session.eval_line(&format!("-{n}")).unwrap(), format!("-{n}"));
    }
    assert_eq!(session.eval_line("0").unwrap(), "0");
    assert_eq!(session.eval_line("-0").unwrap(), "0");
}

#[test]
fn session_keeps_variables_between_lines() {
    let mut session = Session::new();
    assert_eq!(session.eval_line("set counter = 0").unwrap(), "0");
    assert_eq!(session.eval_line("counter = counter + 1").unwrap(), "1");
    assert_eq!(session.eval_line("counter = counter + 1").unwrap(), "2");
    assert!(session.eval_line("set counter").is_err());
    assert_eq!(session.eval_line("counter").unwrap(), "2");
    assert_eq!(session.evaluator().environment().len(), 1);
}

#[test]
fn failed_line_leaves_session_usable() {
    let mut session = Session::new();
    session.eval_line("set x = 1").unwrap();
    assert!(session.eval_line("x = (").is_err());
    assert!(session.eval_line("x = missing").is_err());
    assert_eq!(session.eval_line("x").unwrap(), "1");
}

#[test]
fn example_script_runs() {
    let source = fs::read_to_string("tests/example.set").expect("example script is readable");
    assert_output(&source, "true");
}
