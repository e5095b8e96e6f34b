use logos::Logos;

use crate::token::Token;

fn lex(src: &str) -> Vec<Token> {
    Token::lexer(src)
        .map(|res| res.expect("lex failure"))
        .collect()
}

#[test]
fn keywords_and_idents() {
    assert_eq!(
        lex("package widget"),
        vec![Token::Package, Token::Ident]
    );
    assert_eq!(
        lex("func typeName(packaged int)"),
        vec![
            Token::Func,
            Token::Ident,
            Token::LParen,
            Token::Ident,
            Token::Ident,
            Token::RParen,
        ]
    );
}

#[test]
fn newlines_are_tokens() {
    assert_eq!(
        lex("a\nb"),
        vec![Token::Ident, Token::Newline, Token::Ident]
    );
    // Carriage returns are trivia.
    assert_eq!(
        lex("a\r\nb"),
        vec![Token::Ident, Token::Newline, Token::Ident]
    );
}

#[test]
fn comments_are_skipped() {
    assert_eq!(lex("a // trailing {\nb"), vec![Token::Ident, Token::Newline, Token::Ident]);
    assert_eq!(lex("a /* { } */ b"), vec![Token::Ident, Token::Ident]);
}

#[test]
fn braces_inside_strings_are_not_tokens() {
    assert_eq!(lex(r#""{""#), vec![Token::Str]);
    assert_eq!(lex("`{ raw }`"), vec![Token::Str]);
    assert_eq!(lex(r"'{'"), vec![Token::Rune]);
    assert_eq!(
        lex(r#"{ "}" }"#),
        vec![Token::LBrace, Token::Str, Token::RBrace]
    );
}

#[test]
fn compound_operators() {
    assert_eq!(lex("<-chan"), vec![Token::Arrow, Token::Chan]);
    assert_eq!(lex("...int"), vec![Token::Ellipsis, Token::Ident]);
    assert_eq!(lex("a.b"), vec![Token::Ident, Token::Dot, Token::Ident]);
    assert_eq!(lex("*T"), vec![Token::Star, Token::Ident]);
}

#[test]
fn numbers() {
    assert_eq!(lex("42"), vec![Token::Number]);
    assert_eq!(lex("0x1F"), vec![Token::Number]);
    assert_eq!(lex("1.5"), vec![Token::Number]);
    assert_eq!(lex(".5"), vec![Token::Number]);
}

#[test]
fn statement_enders() {
    assert!(Token::Ident.ends_statement());
    assert!(Token::RBrace.ends_statement());
    assert!(Token::Str.ends_statement());
    assert!(!Token::Comma.ends_statement());
    assert!(!Token::Assign.ends_statement());
}
