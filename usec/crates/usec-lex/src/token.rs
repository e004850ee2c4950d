//! Token type definitions.
//!
//! A [`Token`] is an immutable record of one lexeme: its [`TokenKind`], the
//! exact source text, an optional decoded [`Literal`] and where it starts.

use std::fmt;

use usec_util::Span;

use crate::keywords::{KeywordClass, KEYWORDS};

/// Every kind of token the scanner can produce.
///
/// Keyword variants are grouped the same way as the keyword table: values,
/// boolean connectives, class models, state machines, associations, OCL
/// constraint forms, SOIL statements and the built-in operation names.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TokenKind {
    // Punctuation and operators
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
    /// `{`
    LeftBrace,
    /// `}`
    RightBrace,
    /// `[`
    LeftBracket,
    /// `]`
    RightBracket,
    /// `,`
    Comma,
    /// `.`
    Dot,
    /// `..`
    DotDot,
    /// `-`
    Minus,
    /// `->`
    Arrow,
    /// `+`
    Plus,
    /// `/`
    Slash,
    /// `*`
    Star,
    /// `;`
    Semicolon,
    /// `:`
    Colon,
    /// `::`
    ColonColon,
    /// `:=`
    ColonEqual,
    /// `=`
    Equal,
    /// `<`
    Less,
    /// `<=`
    LessEqual,
    /// `<>`
    LessGreater,
    /// `>`
    Greater,
    /// `>=`
    GreaterEqual,
    /// `|`
    Pipe,

    // Literals
    /// A name that is not a reserved word
    Identifier,
    /// A decimal number literal
    Number,
    /// A double-quoted string literal
    String,
    /// `true`
    True,
    /// `false`
    False,
    /// `null`
    Null,

    // Boolean operators
    /// `and`
    And,
    /// `or`
    Or,
    /// `xor`
    Xor,
    /// `not`
    Not,
    /// `implies`
    Implies,

    // Class models
    /// `model`
    Model,
    /// `class`
    Class,
    /// `attributes`
    Attributes,
    /// `operations`
    Operations,

    // State machines
    /// `statemachines`
    StateMachines,
    /// `initial`
    Initial,
    /// `final`
    Final,

    // Associations
    /// `association`
    Association,
    /// `associationclass`
    AssociationClass,
    /// `aggregation`
    Aggregation,
    /// `composition`
    Composition,

    // OCL
    /// `self`
    Self_,
    /// `begin`
    Begin,
    /// `end`
    End,
    /// `init`
    Init,
    /// `derived`
    Derived,
    /// `context`
    Context,
    /// `inv`
    Inv,
    /// `pre`
    Pre,
    /// `@pre`
    AtPre,
    /// `post`
    Post,
    /// `between`
    Between,
    /// `if`
    If,
    /// `then`
    Then,
    /// `else`
    Else,
    /// `endif`
    EndIf,
    /// `result`
    Result,

    // SOIL
    /// `new`
    New,
    /// `destroy`
    Destroy,
    /// `insert`
    Insert,
    /// `delete`
    Delete,
    /// `into`
    Into,
    /// `from`
    From,
    /// `declare`
    Declare,
    /// `for`
    For,
    /// `in`
    In,
    /// `do`
    Do,

    // Number operations
    /// `mod`
    Mod,
    /// `div`
    Div,
    /// `abs`
    Abs,
    /// `max`
    Max,
    /// `min`
    Min,
    /// `round`
    Round,
    /// `floor`
    Floor,

    // String operations
    /// `concat`
    Concat,
    /// `toLower`
    ToLower,
    /// `toUpper`
    ToUpper,
    /// `substring`
    Substring,

    // OclAny operations
    /// `oclIsNew`
    OclIsNew,
    /// `oclIsUndefined`
    OclIsUndefined,
    /// `oclAsType`
    OclAsType,
    /// `oclIsTypeOf`
    OclIsTypeOf,
    /// `oclIsKindOf`
    OclIsKindOf,
    /// `oclIsInState`
    OclIsInState,
    /// `allInstances`
    AllInstances,

    // OclMessage operations
    /// `hasReturned`
    HasReturned,
    /// `isSignalSent`
    IsSignalSent,
    /// `isOperationCall`
    IsOperationCall,

    // Collection operations
    /// `count`
    Count,
    /// `excludes`
    Excludes,
    /// `excludesAll`
    ExcludesAll,
    /// `includes`
    Includes,
    /// `includesAll`
    IncludesAll,
    /// `isEmpty`
    IsEmpty,
    /// `notEmpty`
    NotEmpty,
    /// `size`
    Size,
    /// `sum`
    Sum,

    // Iteration operations
    /// `any`
    Any,
    /// `collect`
    Collect,
    /// `collectNested`
    CollectNested,
    /// `exists`
    Exists,
    /// `forAll`
    ForAll,
    /// `isUnique`
    IsUnique,
    /// `iterate`
    Iterate,
    /// `one`
    One,
    /// `reject`
    Reject,
    /// `select`
    Select,
    /// `sortedBy`
    SortedBy,

    /// End of input
    Eof,
}

impl TokenKind {
    /// The reserved spelling of a keyword kind, if it is one.
    pub fn keyword_text(self) -> Option<&'static str> {
        KEYWORDS
            .iter()
            .find(|(_, kind, _)| *kind == self)
            .map(|(text, _, _)| *text)
    }

    /// The keyword family this kind belongs to, or `None` for non-keywords.
    pub fn keyword_class(self) -> Option<KeywordClass> {
        KEYWORDS
            .iter()
            .find(|(_, kind, _)| *kind == self)
            .map(|(_, _, class)| *class)
    }

    /// Returns true if this kind is produced from a reserved word.
    pub fn is_keyword(self) -> bool {
        self.keyword_class().is_some()
    }

    /// Returns true for kinds that carry a [`Literal`] payload.
    pub fn has_literal(self) -> bool {
        matches!(self, TokenKind::Number | TokenKind::String)
    }

    /// Source spelling of fixed punctuation, `None` for everything else.
    pub fn punctuation_text(self) -> Option<&'static str> {
        let text = match self {
            TokenKind::LeftParen => "(",
            TokenKind::RightParen => ")",
            TokenKind::LeftBrace => "{",
            TokenKind::RightBrace => "}",
            TokenKind::LeftBracket => "[",
            TokenKind::RightBracket => "]",
            TokenKind::Comma => ",",
            TokenKind::Dot => ".",
            TokenKind::DotDot => "..",
            TokenKind::Minus => "-",
            TokenKind::Arrow => "->",
            TokenKind::Plus => "+",
            TokenKind::Slash => "/",
            TokenKind::Star => "*",
            TokenKind::Semicolon => ";",
            TokenKind::Colon => ":",
            TokenKind::ColonColon => "::",
            TokenKind::ColonEqual => ":=",
            TokenKind::Equal => "=",
            TokenKind::Less => "<",
            TokenKind::LessEqual => "<=",
            TokenKind::LessGreater => "<>",
            TokenKind::Greater => ">",
            TokenKind::GreaterEqual => ">=",
            TokenKind::Pipe => "|",
            _ => return None,
        };
        Some(text)
    }
}

impl fmt::Display for TokenKind {
    /// Punctuation and keywords display as their source spelling; the open
    /// classes display a descriptive name.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(text) = self.punctuation_text().or_else(|| self.keyword_text()) {
            return write!(f, "`{}`", text);
        }
        match self {
            TokenKind::Identifier => write!(f, "identifier"),
            TokenKind::Number => write!(f, "number"),
            TokenKind::String => write!(f, "string"),
            TokenKind::Eof => write!(f, "end of input"),
            other => write!(f, "{:?}", other),
        }
    }
}

/// Decoded value of a literal token.
#[derive(Clone, Debug, PartialEq)]
pub enum Literal {
    /// Value of a NUMBER token
    Number(f64),
    /// Text between the quotes of a STRING token, verbatim
    String(String),
}

impl Literal {
    /// The numeric value, if this is a number literal.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Literal::Number(value) => Some(*value),
            Literal::String(_) => None,
        }
    }

    /// The string payload, if this is a string literal.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Literal::String(value) => Some(value),
            Literal::Number(_) => None,
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Number(value) => write!(f, "{}", value),
            Literal::String(value) => write!(f, "\"{}\"", value),
        }
    }
}

/// One lexeme of scanned source.
#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    /// What kind of token this is
    pub kind: TokenKind,
    /// The exact source text; empty only for [`TokenKind::Eof`]
    pub lexeme: String,
    /// Decoded payload for NUMBER and STRING tokens
    pub literal: Option<Literal>,
    /// 1-based line on which the lexeme starts
    pub line: u32,
    /// Byte range and start column of the lexeme
    pub span: Span,
}

impl Token {
    /// Create a token.
    pub fn new(
        kind: TokenKind,
        lexeme: impl Into<String>,
        literal: Option<Literal>,
        span: Span,
    ) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            literal,
            line: span.line,
            span,
        }
    }

    /// The end-of-input token: empty lexeme, no literal.
    pub fn eof(offset: usize, line: u32, column: u32) -> Self {
        Self::new(
            TokenKind::Eof,
            String::new(),
            None,
            Span::new(offset, offset, line, column),
        )
    }

    /// Returns true for the end-of-input token.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.literal {
            Some(literal) => write!(f, "{:?} {} {} @{}", self.kind, self.lexeme, literal, self.span),
            None => write!(f, "{:?} {} @{}", self.kind, self.lexeme, self.span),
        }
    }
}
