use minifront::lexer::{Lexer, Position, TokenKind};
use minifront::parser::{
    parse_source, AstNode, Checkpoint, DeclarationNode, IdentifierNode, NumberNode, Parser,
    ParserError, ValueNode,
};

fn failing_checkpoint(source: &str) -> Checkpoint {
    match parse_source(source) {
        Err(ParserError::GrammarViolation { checkpoint, .. }) => checkpoint,
        other => panic!("expected a grammar violation for {source:?}, got {other:?}"),
    }
}

#[test]
fn test_parse_and_render_declaration() {
    let decl = parse_source("int x = 42;").expect("Failed to parse declaration");
    assert_eq!(decl, DeclarationNode::new("int", "x", NumberNode::new(42)));

    let ast = AstNode::from(decl);
    assert_eq!(ast.render(0), "Declaration: int x\n  Number: 42\n");
    assert_eq!(ast.to_string(), ast.render(0));
}

#[test]
fn test_render_is_repeatable() {
    let ast = AstNode::from(parse_source("int count = 7;").expect("Failed to parse declaration"));
    assert_eq!(ast.render(3), ast.render(3));
    assert_eq!(ast.render(3), "   Declaration: int count\n     Number: 7\n");
}

#[test]
fn test_render_leaf_nodes() {
    assert_eq!(AstNode::from(NumberNode::new(5)).render(0), "Number: 5\n");
    assert_eq!(AstNode::from(IdentifierNode::new("y")).render(4), "    Identifier: y\n");

    let decl = DeclarationNode::new("int", "z", IdentifierNode::new("y"));
    assert_eq!(decl.render(0), "Declaration: int z\n  Identifier: y\n");
}

#[test]
fn test_whitespace_and_newlines_are_ignored() {
    let decl = parse_source("\n  int\tvalue\n=\n  0001 ;  ").expect("Failed to parse declaration");
    assert_eq!(decl.name, "value");
    assert_eq!(decl.var_type, "int");
    assert_eq!(AstNode::from(decl).render(0), "Declaration: int value\n  Number: 1\n");
}

#[test]
fn test_empty_input_fails_at_start() {
    assert_eq!(failing_checkpoint(""), Checkpoint::Start);
}

#[test]
fn test_each_checkpoint_failure() {
    assert_eq!(failing_checkpoint("return x = 1;"), Checkpoint::Start);
    assert_eq!(failing_checkpoint("integer x = 1;"), Checkpoint::Start);
    assert_eq!(failing_checkpoint("int 5 = 1;"), Checkpoint::AfterType);
    assert_eq!(failing_checkpoint("int return = 1;"), Checkpoint::AfterType);
    assert_eq!(failing_checkpoint("int x 42;"), Checkpoint::AfterName);
    assert_eq!(failing_checkpoint("int x == 42;"), Checkpoint::AfterEquals);
    assert_eq!(failing_checkpoint("int x = y;"), Checkpoint::AfterEquals);
    assert_eq!(failing_checkpoint("int x = -1;"), Checkpoint::AfterEquals);
    assert_eq!(failing_checkpoint("int x = 42"), Checkpoint::AfterValue);
    assert_eq!(failing_checkpoint("int x = 42,"), Checkpoint::AfterValue);
}

#[test]
fn test_violation_reports_offending_token() {
    let err = parse_source("int x 42;").expect_err("missing '=' should fail");
    match &err {
        ParserError::GrammarViolation { checkpoint, found } => {
            assert_eq!(*checkpoint, Checkpoint::AfterName);
            assert_eq!(found.kind, TokenKind::Number);
            assert_eq!(found.lexeme, "42");
        }
        other => panic!("unexpected error {other:?}"),
    }
    assert_eq!(
        err.to_string(),
        "expected '=' after identifier: found '42' at 1:9 [AfterName]"
    );
}

#[test]
fn test_violation_at_end_of_input_message() {
    let err = parse_source("int x = 42").expect_err("missing ';' should fail");
    assert_eq!(err.checkpoint(), Checkpoint::AfterValue);
    assert_eq!(
        err.to_string(),
        "expected ';' at end of declaration: found end of input at 1:11 [AfterValue]"
    );
}

#[test]
fn test_largest_int_is_accepted() {
    let decl = parse_source("int max = 2147483647;").expect("i32::MAX should parse");
    assert_eq!(decl.value, ValueNode::from(NumberNode::new(i32::MAX)));
}

#[test]
fn test_number_overflow_is_reported() {
    let err = parse_source("int big = 2147483648;").expect_err("overflow should fail");
    match &err {
        ParserError::InvalidNumber(lexeme, pos, _) => {
            assert_eq!(lexeme, "2147483648");
            assert_eq!(*pos, Position::new(1, 21));
        }
        other => panic!("unexpected error {other:?}"),
    }
    assert_eq!(err.checkpoint(), Checkpoint::AfterEquals);
    assert_eq!(err.to_string(), "Invalid integer literal '2147483648' at 1:21");
}

#[test]
fn test_cursor_after_success_is_next_token() {
    let mut lexer = Lexer::new("int a = 1; int b = 2;");
    let mut parser = Parser::new(&mut lexer);
    let first = parser.parse_declaration().expect("Failed to parse first declaration");
    assert_eq!(first.name, "a");
    assert_eq!(parser.current().kind, TokenKind::Keyword);
    assert_eq!(parser.current().lexeme, "int");

    // a second call on the same parser picks up where the first stopped
    let second = parser.parse_declaration().expect("Failed to parse second declaration");
    assert_eq!(second.name, "b");
    assert!(parser.is_at_end());
}

#[test]
fn test_failure_leaves_offending_token_current() {
    let mut lexer = Lexer::new("int x = ; 3");
    let mut parser = Parser::new(&mut lexer);
    assert!(parser.parse_declaration().ok().is_none());
    assert_eq!(parser.current().lexeme, ";");

    // no resynchronisation: the next attempt starts at ';' and fails again
    let err = parser.parse_declaration().expect_err("';' cannot start a declaration");
    assert_eq!(err.checkpoint(), Checkpoint::Start);
}

#[test]
fn test_fresh_parser_resumes_lexer() {
    let mut lexer = Lexer::new("int a = 1; int b = 2;");
    {
        let mut parser = Parser::new(&mut lexer);
        parser.parse_declaration().expect("Failed to parse first declaration");
    }
    // the dropped parser had already pulled `int` as its lookahead
    let mut parser = Parser::new(&mut lexer);
    assert_eq!(parser.current().lexeme, "b");
    assert_eq!(
        parser.parse_declaration().expect_err("lookahead was lost").checkpoint(),
        Checkpoint::Start
    );
}
