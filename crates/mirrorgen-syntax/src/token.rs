//! Token definitions for the declaration lexer.
//!
//! Newlines are kept as tokens: the parser needs them to terminate skipped
//! value declarations and to decide whether a result list follows a parameter
//! list. String, raw-string, and rune literals are single tokens so that
//! braces inside them never confuse balanced-delimiter skipping.

use logos::Logos;

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\r]+")]
#[logos(skip(r"//[^\n]*", allow_greedy = true))]
#[logos(skip r"/\*[^*]*\*+([^/*][^*]*\*+)*/")]
pub enum Token {
    #[token("\n")]
    Newline,

    #[token("package")]
    Package,
    #[token("import")]
    Import,
    #[token("type")]
    TypeKw,
    #[token("func")]
    Func,
    #[token("map")]
    Map,
    #[token("chan")]
    Chan,
    #[token("interface")]
    Interface,
    #[token("struct")]
    Struct,
    #[token("const")]
    Const,
    #[token("var")]
    Var,

    #[regex(r"[_\p{L}][_\p{L}\p{Nd}]*")]
    Ident,

    #[regex(r"[0-9][0-9_]*")]
    #[regex(r"0[xX][0-9a-fA-F_]+")]
    #[regex(r"0[bB][01_]+")]
    #[regex(r"0[oO][0-7_]+")]
    #[regex(r"[0-9][0-9_]*\.[0-9_]*([eE][+-]?[0-9]+)?")]
    #[regex(r"\.[0-9][0-9_]*([eE][+-]?[0-9]+)?")]
    Number,

    #[regex(r#""([^"\\\n]|\\.)*""#)]
    #[regex(r"`[^`]*`")]
    Str,
    #[regex(r"'([^'\\\n]|\\.)*'")]
    Rune,

    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token(",")]
    Comma,
    #[token(";")]
    Semi,
    #[token(".")]
    Dot,
    #[token("*")]
    Star,
    #[token("<-")]
    Arrow,
    #[token("...")]
    Ellipsis,
    #[token("=")]
    Assign,

    // Remaining operator characters; only ever seen inside skipped regions.
    #[regex(r"[!%&+\-/:<>^|~]")]
    Op,
}

impl Token {
    /// Human-readable form used in parse errors.
    pub fn describe(self) -> &'static str {
        match self {
            Token::Newline => "end of line",
            Token::Package => "'package'",
            Token::Import => "'import'",
            Token::TypeKw => "'type'",
            Token::Func => "'func'",
            Token::Map => "'map'",
            Token::Chan => "'chan'",
            Token::Interface => "'interface'",
            Token::Struct => "'struct'",
            Token::Const => "'const'",
            Token::Var => "'var'",
            Token::Ident => "identifier",
            Token::Number => "number",
            Token::Str => "string literal",
            Token::Rune => "rune literal",
            Token::LParen => "'('",
            Token::RParen => "')'",
            Token::LBrace => "'{'",
            Token::RBrace => "'}'",
            Token::LBracket => "'['",
            Token::RBracket => "']'",
            Token::Comma => "','",
            Token::Semi => "';'",
            Token::Dot => "'.'",
            Token::Star => "'*'",
            Token::Arrow => "'<-'",
            Token::Ellipsis => "'...'",
            Token::Assign => "'='",
            Token::Op => "operator",
        }
    }

    /// Tokens that are ignored when looking for the next significant token.
    pub fn is_trivia(self) -> bool {
        matches!(self, Token::Newline | Token::Semi)
    }

    /// Tokens after which a newline terminates a statement.
    ///
    /// Mirrors the semicolon-insertion rule for the token classes this lexer
    /// distinguishes: identifiers, literals, and closing delimiters.
    pub fn ends_statement(self) -> bool {
        matches!(
            self,
            Token::Ident
                | Token::Number
                | Token::Str
                | Token::Rune
                | Token::RParen
                | Token::RBracket
                | Token::RBrace
        )
    }
}
