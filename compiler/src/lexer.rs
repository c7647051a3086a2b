//! Tokenizer: single-character lookahead over the source bytes.
//!
//! Numbers are one or more digits, optionally a single `.` (with digits on
//! both sides of it implied by "at least one digit"); a second `.` is a lex
//! error. Booleans are the bare words `true`/`false`. Strings support the
//! escapes `\n`, `\t`, `\\`, `\"`; anything else after a backslash is an
//! error. Symbols run until whitespace, `(`, `)`, `"`, or end-of-input, so
//! `+`, `str=`, `while` and friends are ordinary symbols: there is no
//! reserved-word set at this layer.

use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    LParen,
    RParen,
    Integer(i32),
    Float(f64),
    Bool(bool),
    String(String),
    Symbol(String),
    Eof,
}

#[derive(Debug, Clone, PartialEq)]
pub enum LexError {
    MalformedNumber(String),
    UnterminatedString,
    UnknownEscape(char),
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LexError::MalformedNumber(text) => write!(f, "malformed number literal '{text}'"),
            LexError::UnterminatedString => write!(f, "unterminated string literal"),
            LexError::UnknownEscape(c) => write!(f, "unknown escape sequence '\\{c}'"),
        }
    }
}

impl std::error::Error for LexError {}

pub fn lex(source: &str) -> Result<Vec<Token>, LexError> {
    let chars: Vec<char> = source.chars().collect();
    let mut i = 0;
    let mut tokens = Vec::new();

    while i < chars.len() {
        let c = chars[i];
        match c {
            c if c.is_whitespace() => i += 1,
            '(' => {
                tokens.push(Token::LParen);
                i += 1;
            }
            ')' => {
                tokens.push(Token::RParen);
                i += 1;
            }
            '"' => {
                let (s, next) = lex_string(&chars, i + 1)?;
                tokens.push(Token::String(s));
                i = next;
            }
            c if c.is_ascii_digit() => {
                let (tok, next) = lex_number(&chars, i)?;
                tokens.push(tok);
                i = next;
            }
            _ => {
                let (word, next) = lex_symbol(&chars, i);
                let token = match word.as_str() {
                    "true" => Token::Bool(true),
                    "false" => Token::Bool(false),
                    _ => Token::Symbol(word),
                };
                tokens.push(token);
                i = next;
            }
        }
    }

    tokens.push(Token::Eof);
    Ok(tokens)
}

fn is_delimiter(c: char) -> bool {
    c.is_whitespace() || c == '(' || c == ')' || c == '"'
}

fn lex_symbol(chars: &[char], start: usize) -> (String, usize) {
    let mut i = start;
    while i < chars.len() && !is_delimiter(chars[i]) {
        i += 1;
    }
    (chars[start..i].iter().collect(), i)
}

fn lex_number(chars: &[char], start: usize) -> Result<(Token, usize), LexError> {
    // Numbers extend like any other token, until a delimiter; whatever was
    // consumed is then validated as a digit run with at most one '.'.
    let mut i = start;
    while i < chars.len() && !is_delimiter(chars[i]) {
        i += 1;
    }
    let text: String = chars[start..i].iter().collect();
    let dots = text.chars().filter(|&c| c == '.').count();
    let all_digits_or_dot = text.chars().all(|c| c.is_ascii_digit() || c == '.');

    if dots == 0 && all_digits_or_dot {
        text.parse::<i32>()
            .map(|n| (Token::Integer(n), i))
            .map_err(|_| LexError::MalformedNumber(text))
    } else if dots == 1 && all_digits_or_dot {
        text.parse::<f64>()
            .map(|f| (Token::Float(f), i))
            .map_err(|_| LexError::MalformedNumber(text))
    } else {
        Err(LexError::MalformedNumber(text))
    }
}

fn lex_string(chars: &[char], start: usize) -> Result<(String, usize), LexError> {
    let mut result = String::new();
    let mut i = start;
    loop {
        if i >= chars.len() {
            return Err(LexError::UnterminatedString);
        }
        match chars[i] {
            '"' => return Ok((result, i + 1)),
            '\\' => {
                let escaped = *chars.get(i + 1).ok_or(LexError::UnterminatedString)?;
                let decoded = match escaped {
                    'n' => '\n',
                    't' => '\t',
                    '\\' => '\\',
                    '"' => '"',
                    other => return Err(LexError::UnknownEscape(other)),
                };
                result.push(decoded);
                i += 2;
            }
            c => {
                result.push(c);
                i += 1;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lexes_parens_and_atoms() {
        let tokens = lex("(+ 1 2)").unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::LParen,
                Token::Symbol("+".to_string()),
                Token::Integer(1),
                Token::Integer(2),
                Token::RParen,
                Token::Eof,
            ]
        );
    }

    #[test]
    fn lexes_float() {
        let tokens = lex("3.5").unwrap();
        assert_eq!(tokens, vec![Token::Float(3.5), Token::Eof]);
    }

    #[test]
    fn two_dots_is_a_lex_error() {
        assert_eq!(lex("1.2.3"), Err(LexError::MalformedNumber("1.2.3".to_string())));
    }

    #[test]
    fn lexes_booleans_and_symbols() {
        let tokens = lex("true false while str=").unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::Bool(true),
                Token::Bool(false),
                Token::Symbol("while".to_string()),
                Token::Symbol("str=".to_string()),
                Token::Eof,
            ]
        );
    }

    #[test]
    fn lexes_string_escapes() {
        let tokens = lex(r#""a\nb\t\"c\\d""#).unwrap();
        assert_eq!(tokens, vec![Token::String("a\nb\t\"c\\d".to_string()), Token::Eof]);
    }

    #[test]
    fn unterminated_string_is_an_error() {
        assert_eq!(lex("\"abc"), Err(LexError::UnterminatedString));
    }

    #[test]
    fn unknown_escape_is_an_error() {
        assert_eq!(lex(r#""a\qb""#), Err(LexError::UnknownEscape('q')));
    }

    #[test]
    fn empty_parens_lex_as_two_tokens() {
        let tokens = lex("()").unwrap();
        assert_eq!(tokens, vec![Token::LParen, Token::RParen, Token::Eof]);
    }
}
