//! Recursive-descent parser for the top-level declaration surface.
//!
//! Only declaration headers are modeled. Function bodies, `const`/`var`
//! declarations, import blocks, struct/interface bodies, and generic
//! parameter lists are consumed by balanced-delimiter skipping; the lexer
//! tokenizes strings and comments, so delimiters inside them never count.

use std::ops::Range;

use logos::Logos;

use crate::Error;
use crate::ast::{ChanDir, Decl, FuncDecl, Param, Signature, SourceFile, TypeDecl, TypeExpr};
use crate::token::Token;

/// Parse one file's declaration surface.
pub fn parse_file(src: &str) -> Result<SourceFile, Error> {
    Parser::new(src)?.file()
}

fn line_at(src: &str, offset: usize) -> usize {
    src[..offset].bytes().filter(|&b| b == b'\n').count() + 1
}

struct Parser<'src> {
    src: &'src str,
    toks: Vec<(Token, Range<usize>)>,
    pos: usize,
    prev_end: usize,
}

impl<'src> Parser<'src> {
    fn new(src: &'src str) -> Result<Self, Error> {
        let mut toks = Vec::new();
        for (res, span) in Token::lexer(src).spanned() {
            match res {
                Ok(tok) => toks.push((tok, span)),
                Err(()) => {
                    return Err(Error::UnknownToken {
                        line: line_at(src, span.start),
                    });
                }
            }
        }
        Ok(Parser {
            src,
            toks,
            pos: 0,
            prev_end: 0,
        })
    }

    // ------------------------------------------------------------------
    // Token cursor
    // ------------------------------------------------------------------

    /// Next significant token, without consuming.
    fn peek(&self) -> Option<Token> {
        self.peek_entry().map(|(tok, _)| tok)
    }

    fn peek_entry(&self) -> Option<(Token, Range<usize>)> {
        self.toks[self.pos..]
            .iter()
            .find(|(tok, _)| !tok.is_trivia())
            .map(|(tok, span)| (*tok, span.clone()))
    }

    /// Consume and return the next significant token.
    fn bump(&mut self) -> Option<(Token, Range<usize>)> {
        while self.pos < self.toks.len() {
            let (tok, span) = self.toks[self.pos].clone();
            self.pos += 1;
            self.prev_end = span.end;
            if !tok.is_trivia() {
                return Some((tok, span));
            }
        }
        None
    }

    /// Consume the next token of any kind, trivia included.
    fn advance(&mut self) -> Option<(Token, Range<usize>)> {
        let (tok, span) = self.toks.get(self.pos)?.clone();
        self.pos += 1;
        self.prev_end = span.end;
        Some((tok, span))
    }

    /// True when a newline or semicolon sits between the cursor and the next
    /// significant token (or the end of the file).
    fn at_line_break(&self) -> bool {
        match self.toks.get(self.pos) {
            Some((tok, _)) => tok.is_trivia(),
            None => true,
        }
    }

    fn expect(&mut self, want: Token, expected: &'static str) -> Result<Range<usize>, Error> {
        match self.bump() {
            Some((tok, span)) if tok == want => Ok(span),
            Some((tok, span)) => Err(Error::Unexpected {
                line: line_at(self.src, span.start),
                found: tok.describe(),
                expected,
            }),
            None => Err(Error::UnexpectedEof { expected }),
        }
    }

    fn expect_ident(&mut self) -> Result<String, Error> {
        let span = self.expect(Token::Ident, "identifier")?;
        Ok(self.src[span].to_string())
    }

    fn unexpected(&self, expected: &'static str) -> Error {
        match self.peek_entry() {
            Some((tok, span)) => Error::Unexpected {
                line: line_at(self.src, span.start),
                found: tok.describe(),
                expected,
            },
            None => Error::UnexpectedEof { expected },
        }
    }

    // ------------------------------------------------------------------
    // Skipping
    // ------------------------------------------------------------------

    /// Consume a balanced `open`..`close` region, starting at the next
    /// significant token, which must be `open`.
    fn skip_balanced(
        &mut self,
        open: Token,
        close: Token,
        expected: &'static str,
    ) -> Result<(), Error> {
        self.expect(open, expected)?;
        let mut depth = 1usize;
        while depth > 0 {
            let Some((tok, _)) = self.advance() else {
                return Err(Error::UnexpectedEof {
                    expected: close.describe(),
                });
            };
            if tok == open {
                depth += 1;
            } else if tok == close {
                depth -= 1;
            }
        }
        Ok(())
    }

    /// Consume to the end of a statement-like region: a semicolon at depth
    /// zero, or a newline at depth zero when the previous token can end a
    /// statement.
    fn skip_to_stmt_end(&mut self) {
        let mut depth = 0usize;
        let mut last: Option<Token> = None;
        while self.pos < self.toks.len() {
            let tok = self.toks[self.pos].0;
            match tok {
                Token::Newline => {
                    self.advance();
                    if depth == 0 && last.is_some_and(Token::ends_statement) {
                        return;
                    }
                }
                Token::Semi if depth == 0 => {
                    self.advance();
                    return;
                }
                Token::LParen | Token::LBracket | Token::LBrace => {
                    depth += 1;
                    self.advance();
                    last = Some(tok);
                }
                Token::RParen | Token::RBracket | Token::RBrace => {
                    depth = depth.saturating_sub(1);
                    self.advance();
                    last = Some(tok);
                }
                _ => {
                    self.advance();
                    if !tok.is_trivia() {
                        last = Some(tok);
                    }
                }
            }
        }
    }

    /// Consume a type expression without building it. Tolerates the full
    /// declaration surface, including struct/interface/func underlying types.
    fn skip_type(&mut self) -> Result<(), Error> {
        match self.peek() {
            Some(Token::Star) => {
                self.bump();
                self.skip_type()
            }
            Some(Token::Arrow) => {
                self.bump();
                self.expect(Token::Chan, "'chan'")?;
                self.skip_type()
            }
            Some(Token::Chan) => {
                self.bump();
                if self.peek() == Some(Token::Arrow) {
                    self.bump();
                }
                self.skip_type()
            }
            Some(Token::Map) => {
                self.bump();
                self.skip_balanced(Token::LBracket, Token::RBracket, "'['")?;
                self.skip_type()
            }
            Some(Token::LBracket) => {
                self.skip_balanced(Token::LBracket, Token::RBracket, "'['")?;
                self.skip_type()
            }
            Some(Token::Interface) | Some(Token::Struct) => {
                self.bump();
                self.skip_balanced(Token::LBrace, Token::RBrace, "'{'")
            }
            Some(Token::Func) => {
                self.bump();
                self.skip_balanced(Token::LParen, Token::RParen, "'('")?;
                if !self.at_line_break() && self.peek().is_some_and(starts_type) {
                    if self.peek() == Some(Token::LParen) {
                        self.skip_balanced(Token::LParen, Token::RParen, "'('")?;
                    } else {
                        self.skip_type()?;
                    }
                }
                Ok(())
            }
            Some(Token::LParen) => self.skip_balanced(Token::LParen, Token::RParen, "'('"),
            Some(Token::Ident) => {
                self.bump();
                if self.peek() == Some(Token::Dot) {
                    self.bump();
                    self.expect_ident()?;
                }
                Ok(())
            }
            _ => Err(self.unexpected("type")),
        }
    }

    // ------------------------------------------------------------------
    // Declarations
    // ------------------------------------------------------------------

    fn file(&mut self) -> Result<SourceFile, Error> {
        self.expect(Token::Package, "'package'")?;
        let package = self.expect_ident()?;

        let mut decls = Vec::new();
        while let Some(tok) = self.peek() {
            match tok {
                Token::Import => {
                    self.bump();
                    self.skip_group_or_stmt()?;
                }
                Token::Const | Token::Var => {
                    self.bump();
                    self.skip_group_or_stmt()?;
                }
                Token::TypeKw => {
                    self.bump();
                    self.type_decl(&mut decls)?;
                }
                Token::Func => {
                    self.bump();
                    decls.push(Decl::Func(self.func_decl()?));
                }
                _ => return Err(self.unexpected("declaration")),
            }
        }
        Ok(SourceFile { package, decls })
    }

    fn skip_group_or_stmt(&mut self) -> Result<(), Error> {
        if self.peek() == Some(Token::LParen) {
            self.skip_balanced(Token::LParen, Token::RParen, "'('")
        } else {
            self.skip_to_stmt_end();
            Ok(())
        }
    }

    fn type_decl(&mut self, out: &mut Vec<Decl>) -> Result<(), Error> {
        if self.peek() == Some(Token::LParen) {
            self.bump();
            loop {
                match self.peek() {
                    Some(Token::RParen) => {
                        self.bump();
                        return Ok(());
                    }
                    Some(Token::Ident) => out.push(Decl::Type(self.type_spec()?)),
                    Some(_) => return Err(self.unexpected("type name")),
                    None => return Err(Error::UnexpectedEof { expected: "')'" }),
                }
            }
        } else {
            out.push(Decl::Type(self.type_spec()?));
            Ok(())
        }
    }

    fn type_spec(&mut self) -> Result<TypeDecl, Error> {
        let name = self.expect_ident()?;
        // Either a generic parameter list or the start of an array underlying
        // type; consumption is the same and only the name is kept.
        if self.peek() == Some(Token::LBracket) {
            self.skip_balanced(Token::LBracket, Token::RBracket, "'['")?;
        }
        if self.peek() == Some(Token::Assign) {
            self.bump();
        }
        self.skip_type()?;
        Ok(TypeDecl { name })
    }

    fn func_decl(&mut self) -> Result<FuncDecl, Error> {
        let receiver = if self.peek() == Some(Token::LParen) {
            Some(self.param_list()?)
        } else {
            None
        };
        let name = self.expect_ident()?;
        if self.peek() == Some(Token::LBracket) {
            self.skip_balanced(Token::LBracket, Token::RBracket, "'['")?;
        }
        let params = self.param_list()?;
        let results = self.result_list()?;
        if self.peek() == Some(Token::LBrace) {
            self.skip_balanced(Token::LBrace, Token::RBrace, "'{'")?;
        }
        Ok(FuncDecl {
            name,
            receiver,
            sig: Signature { params, results },
        })
    }

    fn result_list(&mut self) -> Result<Vec<Param>, Error> {
        if self.at_line_break() {
            return Ok(Vec::new());
        }
        match self.peek() {
            Some(Token::LParen) => self.param_list(),
            Some(tok) if starts_type(tok) => {
                let ty = self.parse_type()?;
                Ok(vec![Param {
                    names: Vec::new(),
                    ty,
                }])
            }
            _ => Ok(Vec::new()),
        }
    }

    // ------------------------------------------------------------------
    // Parameter lists
    // ------------------------------------------------------------------

    /// Parse `( ... )`. Resolves the name/type ambiguity the usual way:
    /// bare identifiers are collected until an entry with an explicit type
    /// decides whether they were names (`a, b T`) or unnamed types
    /// (`int, string`).
    fn param_list(&mut self) -> Result<Vec<Param>, Error> {
        self.expect(Token::LParen, "'('")?;
        let mut params = Vec::new();
        let mut pending: Vec<String> = Vec::new();
        loop {
            match self.peek() {
                None => return Err(Error::UnexpectedEof { expected: "')'" }),
                Some(Token::RParen) => {
                    self.bump();
                    break;
                }
                Some(Token::Ident) => {
                    let name = self.expect_ident()?;
                    match self.peek() {
                        Some(Token::Comma) => {
                            self.bump();
                            pending.push(name);
                        }
                        Some(Token::RParen) => {
                            self.bump();
                            pending.push(name);
                            break;
                        }
                        Some(Token::Dot) => {
                            self.bump();
                            let member = self.expect_ident()?;
                            flush_unnamed(&mut pending, &mut params);
                            params.push(Param {
                                names: Vec::new(),
                                ty: TypeExpr::Qualified { pkg: name, name: member },
                            });
                            if !self.param_separator()? {
                                break;
                            }
                        }
                        _ => {
                            let ty = self.parse_param_type()?;
                            let mut names = std::mem::take(&mut pending);
                            names.push(name);
                            params.push(Param { names, ty });
                            if !self.param_separator()? {
                                break;
                            }
                        }
                    }
                }
                Some(_) => {
                    let ty = self.parse_param_type()?;
                    flush_unnamed(&mut pending, &mut params);
                    params.push(Param {
                        names: Vec::new(),
                        ty,
                    });
                    if !self.param_separator()? {
                        break;
                    }
                }
            }
        }
        flush_unnamed(&mut pending, &mut params);
        Ok(params)
    }

    /// `true` to keep reading entries, `false` at the closing paren.
    fn param_separator(&mut self) -> Result<bool, Error> {
        match self.peek() {
            Some(Token::Comma) => {
                self.bump();
                Ok(true)
            }
            Some(Token::RParen) => {
                self.bump();
                Ok(false)
            }
            _ => Err(self.unexpected("',' or ')'")),
        }
    }

    fn parse_param_type(&mut self) -> Result<TypeExpr, Error> {
        if self.peek() == Some(Token::Ellipsis) {
            self.bump();
            Ok(TypeExpr::Variadic(Box::new(self.parse_type()?)))
        } else {
            self.parse_type()
        }
    }

    // ------------------------------------------------------------------
    // Type expressions
    // ------------------------------------------------------------------

    fn parse_type(&mut self) -> Result<TypeExpr, Error> {
        match self.peek() {
            Some(Token::Star) => {
                self.bump();
                Ok(TypeExpr::Pointer(Box::new(self.parse_type()?)))
            }
            Some(Token::Ident) => {
                let name = self.expect_ident()?;
                if self.peek() == Some(Token::Dot) {
                    self.bump();
                    let member = self.expect_ident()?;
                    Ok(TypeExpr::Qualified { pkg: name, name: member })
                } else {
                    Ok(TypeExpr::Named(name))
                }
            }
            Some(Token::Interface) => {
                self.bump();
                self.interface_body()
            }
            Some(Token::Map) => {
                self.bump();
                self.expect(Token::LBracket, "'['")?;
                let _key = self.parse_type()?;
                self.expect(Token::RBracket, "']'")?;
                let value = self.parse_type()?;
                Ok(TypeExpr::Map {
                    value: Box::new(value),
                })
            }
            Some(Token::LBracket) => {
                self.bump();
                if self.peek() == Some(Token::RBracket) {
                    self.bump();
                    let elem = self.parse_type()?;
                    Ok(TypeExpr::Array {
                        len: None,
                        elem: Box::new(elem),
                    })
                } else {
                    let len = match self.peek() {
                        Some(Token::Ident) | Some(Token::Number) => {
                            let (_, span) = self.bump().ok_or(Error::UnexpectedEof {
                                expected: "array length",
                            })?;
                            self.src[span].to_string()
                        }
                        _ => return Err(self.unexpected("array length")),
                    };
                    self.expect(Token::RBracket, "']'")?;
                    let elem = self.parse_type()?;
                    Ok(TypeExpr::Array {
                        len: Some(Box::new(TypeExpr::Named(len))),
                        elem: Box::new(elem),
                    })
                }
            }
            Some(Token::Chan) => {
                self.bump();
                let dir = if self.peek() == Some(Token::Arrow) {
                    self.bump();
                    ChanDir::Send
                } else {
                    ChanDir::Both
                };
                let elem = self.parse_type()?;
                Ok(TypeExpr::Chan {
                    dir,
                    elem: Box::new(elem),
                })
            }
            Some(Token::Arrow) => {
                self.bump();
                self.expect(Token::Chan, "'chan'")?;
                let elem = self.parse_type()?;
                Ok(TypeExpr::Chan {
                    dir: ChanDir::Recv,
                    elem: Box::new(elem),
                })
            }
            Some(Token::Func) => self.unsupported_type(|p| {
                p.bump();
                p.skip_balanced(Token::LParen, Token::RParen, "'('")?;
                if !p.at_line_break() && p.peek().is_some_and(starts_type) {
                    if p.peek() == Some(Token::LParen) {
                        p.skip_balanced(Token::LParen, Token::RParen, "'('")?;
                    } else {
                        p.skip_type()?;
                    }
                }
                Ok(())
            }),
            Some(Token::Struct) => self.unsupported_type(|p| {
                p.bump();
                p.skip_balanced(Token::LBrace, Token::RBrace, "'{'")
            }),
            Some(Token::LParen) => {
                self.unsupported_type(|p| p.skip_balanced(Token::LParen, Token::RParen, "'('"))
            }
            _ => Err(self.unexpected("type")),
        }
    }

    fn interface_body(&mut self) -> Result<TypeExpr, Error> {
        self.expect(Token::LBrace, "'{'")?;
        let mut depth = 1usize;
        let mut has_methods = false;
        while depth > 0 {
            let Some((tok, _)) = self.advance() else {
                return Err(Error::UnexpectedEof { expected: "'}'" });
            };
            match tok {
                Token::LBrace => depth += 1,
                Token::RBrace => depth -= 1,
                Token::Newline | Token::Semi => {}
                _ => has_methods = true,
            }
        }
        Ok(TypeExpr::Interface { has_methods })
    }

    /// Consume a construct via `skip`, returning its source spelling as an
    /// unsupported type expression.
    fn unsupported_type(
        &mut self,
        skip: impl FnOnce(&mut Self) -> Result<(), Error>,
    ) -> Result<TypeExpr, Error> {
        let start = match self.peek_entry() {
            Some((_, span)) => span.start,
            None => return Err(Error::UnexpectedEof { expected: "type" }),
        };
        skip(self)?;
        let spelling = self.src[start..self.prev_end].trim().to_string();
        Ok(TypeExpr::Unsupported(spelling))
    }
}

fn starts_type(tok: Token) -> bool {
    matches!(
        tok,
        Token::Ident
            | Token::Star
            | Token::LBracket
            | Token::Map
            | Token::Chan
            | Token::Arrow
            | Token::Interface
            | Token::Struct
            | Token::Func
            | Token::LParen
    )
}

fn flush_unnamed(pending: &mut Vec<String>, params: &mut Vec<Param>) {
    for name in pending.drain(..) {
        params.push(Param {
            names: Vec::new(),
            ty: TypeExpr::Named(name),
        });
    }
}
