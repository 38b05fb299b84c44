use logos::Logos;

/// Lexical classification for [`Token`].
///
/// The three rules partition the input: any character is a newline, part of
/// a non-newline whitespace run, or part of a text token. `(` `)` `{` `}`
/// and `=` always stand alone; every other maximal non-whitespace run is one
/// text token.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    #[regex(r"\r?\n")]
    Newline,

    #[regex(r"[ \t\r]+")]
    Whitespace,

    #[regex(r"[(){}=]")]
    #[regex(r"[^ \t\r\n(){}=]+")]
    Text,
}

/// An atomic lexical unit: owned text plus its classification.
///
/// Tokens are produced once and never mutated; the whole parse works over a
/// flat owned sequence indexed by position. Whitespace and newline tokens
/// are retained so downstream consumers can tell trailing whitespace from
/// real trailing content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    kind: TokenKind,
    text: String,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Whitespace and newline tokens are skippable filler.
    pub fn is_significant(&self) -> bool {
        matches!(self.kind, TokenKind::Text)
    }

    pub fn is_newline(&self) -> bool {
        matches!(self.kind, TokenKind::Newline)
    }
}

/// Split raw source into its flat token sequence. Never fails: garbage text
/// simply becomes text tokens that downstream parsers reject.
pub fn tokenize(source: &str) -> Vec<Token> {
    let mut lexer = TokenKind::lexer(source);
    let mut tokens = Vec::new();
    while let Some(result) = lexer.next() {
        // The rules cover every character, so the fallback never fires.
        let kind = result.unwrap_or(TokenKind::Text);
        tokens.push(Token::new(kind, lexer.slice()));
    }
    tokens
}
