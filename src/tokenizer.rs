//! Tokenizador de texto

/// Tipo de token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenType {
    Word,
    Punctuation,
    Whitespace,
    Number,
    Unknown,
}

/// Token individual
#[derive(Debug, Clone)]
pub struct Token {
    pub text: String,
    pub token_type: TokenType,
    pub start: usize,
    pub end: usize,
}

impl Token {
    pub fn new(text: String, token_type: TokenType, start: usize, end: usize) -> Self {
        Self {
            text,
            token_type,
            start,
            end,
        }
    }
}

/// Tokenizador de texto
///
/// Divide el texto en palabras, números, espacios y puntuación. El pipeline
/// consume únicamente palabras y números; la puntuación queda filtrada en
/// esta frontera.
pub struct Tokenizer;

impl Tokenizer {
    pub fn new() -> Self {
        Self
    }

    /// Tokeniza un texto en tokens individuales
    pub fn tokenize(&self, text: &str) -> Vec<Token> {
        let mut tokens = Vec::new();
        let mut chars = text.char_indices().peekable();

        while let Some((start, ch)) = chars.next() {
            let token = if ch.is_alphabetic() {
                // Palabra
                let mut end = start + ch.len_utf8();
                let mut word = String::from(ch);

                while let Some(&(_, next_ch)) = chars.peek() {
                    if next_ch.is_alphabetic() || next_ch == '\'' || next_ch == '-' {
                        word.push(next_ch);
                        end += next_ch.len_utf8();
                        chars.next();
                    } else {
                        break;
                    }
                }

                Token::new(word, TokenType::Word, start, end)
            } else if ch.is_numeric() {
                // Número
                let mut end = start + ch.len_utf8();
                let mut number = String::from(ch);

                while let Some(&(_, next_ch)) = chars.peek() {
                    if next_ch.is_numeric() || next_ch == '.' || next_ch == ',' {
                        number.push(next_ch);
                        end += next_ch.len_utf8();
                        chars.next();
                    } else {
                        break;
                    }
                }

                Token::new(number, TokenType::Number, start, end)
            } else if ch.is_whitespace() {
                // Espacio en blanco
                let mut end = start + ch.len_utf8();
                let mut whitespace = String::from(ch);

                while let Some(&(_, next_ch)) = chars.peek() {
                    if next_ch.is_whitespace() {
                        whitespace.push(next_ch);
                        end += next_ch.len_utf8();
                        chars.next();
                    } else {
                        break;
                    }
                }

                Token::new(whitespace, TokenType::Whitespace, start, end)
            } else if is_punctuation(ch) {
                // Puntuación - agrupar "..." en un solo token
                if ch == '.' {
                    let mut end = start + ch.len_utf8();
                    let mut dots = String::from(ch);

                    while let Some(&(_, next_ch)) = chars.peek() {
                        if next_ch == '.' {
                            dots.push(next_ch);
                            end += next_ch.len_utf8();
                            chars.next();
                        } else {
                            break;
                        }
                    }

                    Token::new(dots, TokenType::Punctuation, start, end)
                } else {
                    Token::new(
                        ch.to_string(),
                        TokenType::Punctuation,
                        start,
                        start + ch.len_utf8(),
                    )
                }
            } else {
                // Desconocido
                Token::new(
                    ch.to_string(),
                    TokenType::Unknown,
                    start,
                    start + ch.len_utf8(),
                )
            };

            tokens.push(token);
        }

        tokens
    }

    /// Extrae la secuencia de palabras del texto, sin puntuación
    ///
    /// Los números se conservan como palabras.
    pub fn extract_words(&self, text: &str) -> Vec<String> {
        self.tokenize(text)
            .into_iter()
            .filter(|t| matches!(t.token_type, TokenType::Word | TokenType::Number))
            .map(|t| t.text)
            .collect()
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new()
    }
}

fn is_punctuation(ch: char) -> bool {
    matches!(
        ch,
        '.' | ',' | ';' | ':' | '!' | '?' | '¡' | '¿' | '"' | '\'' | '(' | ')' | '[' | ']'
            | '{' | '}' | '-' | '—' | '–' | '«' | '»' | '…'
    )
}
