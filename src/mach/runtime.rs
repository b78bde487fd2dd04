use super::Var;
use crate::error;
use crate::lang::{lex, Error, Lexer, Token, Word};
use log::trace;

type Result<T> = std::result::Result<T, Error>;

/// How a run ended: an `EXIT` command or the end of the buffer.
#[derive(Debug, PartialEq)]
pub enum Signal {
    Exit,
    EndOfInput,
}

/// Where the interpreter sends observable output and diagnostics.
pub trait Sink {
    fn print(&mut self, text: &str);
    fn error(&mut self, error: &Error);
}

/// One interpreter session. Bindings survive between calls to
/// `interpret`, so a console may feed input here one line at a time.
#[derive(Debug, Default)]
pub struct Runtime {
    vars: Var,
}

impl Runtime {
    pub fn new() -> Runtime {
        Runtime::default()
    }

    pub fn interpret(&mut self, source: &str, sink: &mut dyn Sink) -> Signal {
        Interpreter {
            lexer: lex(source),
            vars: &mut self.vars,
            sink,
        }
        .run()
    }
}

struct Interpreter<'a> {
    lexer: Lexer<'a>,
    vars: &'a mut Var,
    sink: &'a mut dyn Sink,
}

impl<'a> Interpreter<'a> {
    fn run(mut self) -> Signal {
        loop {
            let token = match self.next_token() {
                Some(token) => token,
                None => return Signal::EndOfInput,
            };
            let line = self.lexer.line();
            let result = match token {
                Token::Newline => continue,
                Token::Word(Word::Exit) => {
                    self.resync();
                    return Signal::Exit;
                }
                Token::Word(Word::Set) => self.set(),
                Token::Word(Word::Get) => self.get(),
                Token::Word(Word::Add) => self.accumulate(i64::checked_add),
                Token::Word(Word::Sub) => self.accumulate(i64::checked_sub),
                token => Err(error!(SyntaxError; &format!("UNRECOGNIZED COMMAND {}", token))),
            };
            if let Err(error) = result {
                self.sink.error(&error.in_line(line));
            }
            self.resync();
        }
    }

    fn next_token(&mut self) -> Option<Token> {
        loop {
            match self.lexer.next()? {
                Ok(token) => {
                    trace!("token: {:?}", token);
                    return Some(token);
                }
                Err(error) => self.sink.error(&error),
            }
        }
    }

    /// Discards tokens through the next line boundary so the following
    /// command starts from a known-good point.
    fn resync(&mut self) {
        while let Some(token) = self.next_token() {
            if token == Token::Newline {
                return;
            }
        }
    }

    fn name(&mut self) -> Result<String> {
        match self.next_token() {
            Some(Token::Name(name)) => Ok(name),
            _ => Err(error!(SyntaxError; "EXPECTED NAME")),
        }
    }

    fn expect(&mut self, token: Token) -> Result<()> {
        if let Some(t) = self.next_token() {
            if t == token {
                return Ok(());
            }
        }
        use Token::*;
        Err(error!(SyntaxError;
            match token {
                Assign => "EXPECTED EQUALS SIGN",
                Comma => "EXPECTED COMMA",
                Word(_) | Name(_) | Int(_) | Newline => "UNEXPECTED TOKEN",
            }
        ))
    }

    /// A command source: an integer literal, or the current value of a
    /// bound name.
    fn operand(&mut self) -> Result<i64> {
        match self.next_token() {
            Some(Token::Name(name)) => match self.vars.fetch(&name) {
                Some(value) => Ok(value),
                None => Err(error!(UndefinedName; &name)),
            },
            Some(Token::Int(value)) => Ok(value),
            _ => Err(error!(SyntaxError; "EXPECTED NAME OR INTEGER")),
        }
    }

    fn set(&mut self) -> Result<()> {
        let target = self.name()?;
        self.expect(Token::Assign)?;
        let value = self.operand()?;
        self.vars.store(&target, value);
        Ok(())
    }

    fn get(&mut self) -> Result<()> {
        let name = self.name()?;
        match self.vars.fetch(&name) {
            Some(value) => self.sink.print(&format!("{} = {}", name, value)),
            None => return Err(error!(UndefinedName; &name)),
        }
        Ok(())
    }

    // The target is read and reported before the rest of the line is
    // validated; the store happens only if the whole line is good.
    fn accumulate(&mut self, apply: fn(i64, i64) -> Option<i64>) -> Result<()> {
        let target = self.name()?;
        let current = match self.vars.fetch(&target) {
            Some(value) => value,
            None => return Err(error!(UndefinedName; &target)),
        };
        self.sink.print(&format!("{} = {}", target, current));
        self.expect(Token::Comma)?;
        let operand = self.operand()?;
        match apply(current, operand) {
            Some(value) => self.vars.store(&target, value),
            None => return Err(error!(Overflow)),
        }
        Ok(())
    }
}
