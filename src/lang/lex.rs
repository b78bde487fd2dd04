use super::{token::*, Error};

pub fn lex(s: &str) -> Lexer<'_> {
    Lexer::new(s)
}

fn is_blank(c: char) -> bool {
    c == ' ' || c == '\t'
}

fn is_name_head(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

fn is_name_tail(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

pub struct Lexer<'a> {
    chars: std::iter::Peekable<std::str::Chars<'a>>,
    line: usize,
}

impl<'a> Lexer<'a> {
    fn new(s: &'a str) -> Lexer<'a> {
        Lexer {
            chars: s.chars().peekable(),
            line: 1,
        }
    }

    /// Line the scan position is on, starting at 1.
    pub fn line(&self) -> usize {
        self.line
    }

    fn newline(&mut self) -> Token {
        while let Some('\n') = self.chars.peek() {
            self.chars.next();
            self.line += 1;
        }
        Token::Newline
    }

    fn number(&mut self) -> Result<Token, Error> {
        let mut s = String::new();
        while let Some(&c) = self.chars.peek() {
            if !c.is_ascii_digit() {
                break;
            }
            s.push(c);
            self.chars.next();
        }
        match s.parse::<i64>() {
            Ok(n) => Ok(Token::Int(n)),
            Err(_) => Err(error!(Overflow, self.line; &s)),
        }
    }

    fn word(&mut self) -> Token {
        let mut s = String::new();
        while let Some(&c) = self.chars.peek() {
            if !is_name_tail(c) {
                break;
            }
            s.push(c);
            self.chars.next();
        }
        match Token::from_string(&s) {
            Some(token) => token,
            None => Token::Name(s),
        }
    }

    fn comment(&mut self) {
        while let Some(&c) = self.chars.peek() {
            if c == '\n' {
                break;
            }
            self.chars.next();
        }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Result<Token, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let pk = *self.chars.peek()?;
            if is_blank(pk) {
                self.chars.next();
                continue;
            }
            if pk == '\n' {
                return Some(Ok(self.newline()));
            }
            if pk.is_ascii_digit() {
                return Some(self.number());
            }
            if is_name_head(pk) {
                return Some(Ok(self.word()));
            }
            self.chars.next();
            match pk {
                '=' => return Some(Ok(Token::Assign)),
                ',' => return Some(Ok(Token::Comma)),
                '#' if self.chars.peek() == Some(&'#') => self.comment(),
                '/' if self.chars.peek() == Some(&'/') => self.comment(),
                _ => return Some(Err(error!(IllegalCharacter, self.line; &pk.to_string()))),
            }
        }
    }
}
