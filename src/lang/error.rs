pub struct Error {
    code: ErrorCode,
    line: Option<usize>,
    message: String,
}

#[doc(hidden)]
#[macro_export]
macro_rules! error {
    ($err:ident) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
    };
    ($err:ident, $line:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).in_line($line)
    };
    ($err:ident; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).message($msg)
    };
    ($err:ident, $line:expr; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
            .in_line($line)
            .message($msg)
    };
}

impl Error {
    pub fn new(code: ErrorCode) -> Error {
        Error {
            code,
            line: None,
            message: String::new(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn line(&self) -> Option<usize> {
        self.line
    }

    pub fn in_line(&self, line: usize) -> Error {
        debug_assert!(self.line.is_none());
        Error {
            code: self.code,
            line: Some(line),
            message: self.message.clone(),
        }
    }

    pub fn message(&self, message: &str) -> Error {
        debug_assert!(self.message.is_empty());
        Error {
            code: self.code,
            line: self.line,
            message: message.to_string(),
        }
    }
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum ErrorCode {
    SyntaxError,
    IllegalCharacter,
    Overflow,
    UndefinedName,
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error {{ {} }}", self.to_string())
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let code_str = match self.code {
            ErrorCode::SyntaxError => "SYNTAX ERROR",
            ErrorCode::IllegalCharacter => "ILLEGAL CHARACTER",
            ErrorCode::Overflow => "OVERFLOW",
            ErrorCode::UndefinedName => "UNDEFINED NAME",
        };
        let mut suffix = String::new();
        if let Some(line) = self.line {
            suffix.push_str(&format!(" IN LINE {}", line));
        }
        if !self.message.is_empty() {
            suffix.push_str(&format!("; {}", self.message));
        }
        write!(f, "{}{}", code_str, suffix)
    }
}
