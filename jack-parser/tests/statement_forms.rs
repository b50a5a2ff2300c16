//! Parameterized coverage of statement-kind dispatch and term shapes

use rstest::rstest;

use jack_parser::jack::processor::{process_source, OutputFormat};
use jack_parser::jack::testing::check_tag_balance;

fn analyze_body(body: &str) -> String {
    let source = format!(
        "class Fixture {{ function void run() {{ {} }} }}",
        body
    );
    let output =
        process_source(&source, OutputFormat::AstTag).expect("fixture source should analyze");
    check_tag_balance(&output).expect("balanced output");
    output
}

#[rstest]
#[case::let_plain("let x = 1; return;", "<letStatement>")]
#[case::let_indexed("let a[i] = 0; return;", "<letStatement>")]
#[case::if_only("if (x) { return; } return;", "<ifStatement>")]
#[case::if_else("if (x) { return; } else { return; } return;", "<ifStatement>")]
#[case::while_loop("while (x) { let x = 0; } return;", "<whileStatement>")]
#[case::do_call("do run(); return;", "<doStatement>")]
#[case::do_method_call("do Sys.halt(); return;", "<doStatement>")]
#[case::return_bare("return;", "<returnStatement>")]
#[case::return_value("return 1;", "<returnStatement>")]
fn statement_kind_dispatch(#[case] body: &str, #[case] tag: &str) {
    let output = analyze_body(body);
    assert!(output.contains(tag), "missing {} in:\n{}", tag, output);
}

#[rstest]
#[case::integer("let x = 5; return;", "<integerConstant> 5 </integerConstant>")]
#[case::string("let x = \"hey\"; return;", "<stringConstant> hey </stringConstant>")]
#[case::keyword_constant("let x = true; return;", "<keyword> true </keyword>")]
#[case::variable("let x = y; return;", "<identifier> y </identifier>")]
#[case::array_access("let x = a[3]; return;", "<symbol> [ </symbol>")]
#[case::local_call("let x = f(); return;", "<expressionList>")]
#[case::qualified_call("let x = Math.abs(n); return;", "<symbol> . </symbol>")]
#[case::parenthesized("let x = (y); return;", "<symbol> ( </symbol>")]
#[case::unary_negate("let x = -y; return;", "<symbol> - </symbol>")]
#[case::unary_not("let x = ~y; return;", "<symbol> ~ </symbol>")]
fn term_shapes(#[case] body: &str, #[case] marker: &str) {
    let output = analyze_body(body);
    assert!(output.contains(marker), "missing {} in:\n{}", marker, output);
}

#[rstest]
#[case::empty_params("class T { function void f() { return; } }", "<parameterList>\n    </parameterList>")]
#[case::empty_args("class T { function void f() { do g(); return; } }", "<expressionList>")]
fn empty_lists_still_emit_nodes(#[case] source: &str, #[case] marker: &str) {
    let output =
        process_source(source, OutputFormat::AstTag).expect("fixture source should analyze");
    assert!(output.contains(marker), "missing {} in:\n{}", marker, output);
}

#[test]
fn bare_return_has_no_expression_node() {
    let output = analyze_body("return;");
    let returns = output
        .lines()
        .skip_while(|line| !line.contains("<returnStatement>"))
        .take_while(|line| !line.contains("</returnStatement>"))
        .collect::<Vec<_>>()
        .join("\n");
    assert!(!returns.contains("<expression>"), "unexpected expression in:\n{}", returns);
}

#[test]
fn return_with_value_has_expression_node() {
    let output = analyze_body("return x + 1;");
    assert!(output.contains("<expression>"));
}
