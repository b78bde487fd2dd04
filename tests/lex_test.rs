use nv::lang::{lex, ErrorCode, Token, Word};

fn tokens(s: &str) -> Vec<Token> {
    lex(s).map(|t| t.unwrap()).collect()
}

#[test]
fn test_set_line() {
    assert_eq!(
        tokens("SET x = 5\n"),
        vec![
            Token::Word(Word::Set),
            Token::Name("x".to_string()),
            Token::Assign,
            Token::Int(5),
            Token::Newline,
        ]
    );
}

#[test]
fn test_keywords() {
    assert_eq!(
        tokens("GET ADD SUB EXIT"),
        vec![
            Token::Word(Word::Get),
            Token::Word(Word::Add),
            Token::Word(Word::Sub),
            Token::Word(Word::Exit),
        ]
    );
}

#[test]
fn test_keywords_are_exact() {
    assert_eq!(tokens("set"), vec![Token::Name("set".to_string())]);
    assert_eq!(tokens("SETX"), vec![Token::Name("SETX".to_string())]);
    assert_eq!(tokens("Exit"), vec![Token::Name("Exit".to_string())]);
}

#[test]
fn test_names() {
    assert_eq!(
        tokens("_a1 B_2"),
        vec![Token::Name("_a1".to_string()), Token::Name("B_2".to_string())]
    );
}

#[test]
fn test_integers() {
    assert_eq!(tokens("007 12345"), vec![Token::Int(7), Token::Int(12345)]);
}

#[test]
fn test_integer_overflow() {
    let mut lexer = lex("9223372036854775808");
    let error = lexer.next().unwrap().unwrap_err();
    assert_eq!(error.code(), ErrorCode::Overflow);
    assert!(lexer.next().is_none());
}

#[test]
fn test_blanks_skipped() {
    assert_eq!(tokens(" \t =,\t"), vec![Token::Assign, Token::Comma]);
}

#[test]
fn test_newline_run_collapses() {
    assert_eq!(
        tokens("a\n\n\nb"),
        vec![
            Token::Name("a".to_string()),
            Token::Newline,
            Token::Name("b".to_string()),
        ]
    );
}

#[test]
fn test_newline_run_advances_line_count() {
    let mut lexer = lex("a\n\n\n@");
    assert_eq!(lexer.next().unwrap().unwrap(), Token::Name("a".to_string()));
    assert_eq!(lexer.next().unwrap().unwrap(), Token::Newline);
    let error = lexer.next().unwrap().unwrap_err();
    assert_eq!(error.code(), ErrorCode::IllegalCharacter);
    assert_eq!(error.line(), Some(4));
    assert_eq!(error.to_string(), "ILLEGAL CHARACTER IN LINE 4; @");
    assert!(lexer.next().is_none());
}

#[test]
fn test_comments_discarded() {
    assert_eq!(
        tokens("## whole line\nGET x\n"),
        vec![
            Token::Newline,
            Token::Word(Word::Get),
            Token::Name("x".to_string()),
            Token::Newline,
        ]
    );
    assert_eq!(
        tokens("GET x // trailing\n"),
        vec![
            Token::Word(Word::Get),
            Token::Name("x".to_string()),
            Token::Newline,
        ]
    );
    assert_eq!(tokens("// runs to end of input"), vec![]);
}

#[test]
fn test_comment_openers_are_two_chars() {
    let mut lexer = lex("a / b");
    assert_eq!(lexer.next().unwrap().unwrap(), Token::Name("a".to_string()));
    let error = lexer.next().unwrap().unwrap_err();
    assert_eq!(error.to_string(), "ILLEGAL CHARACTER IN LINE 1; /");
    assert_eq!(lexer.next().unwrap().unwrap(), Token::Name("b".to_string()));

    let error = lex("#").next().unwrap().unwrap_err();
    assert_eq!(error.code(), ErrorCode::IllegalCharacter);
}

#[test]
fn test_illegal_character_skips_one_char() {
    let mut lexer = lex("x@y");
    assert_eq!(lexer.next().unwrap().unwrap(), Token::Name("x".to_string()));
    let error = lexer.next().unwrap().unwrap_err();
    assert_eq!(error.code(), ErrorCode::IllegalCharacter);
    assert_eq!(lexer.next().unwrap().unwrap(), Token::Name("y".to_string()));
    assert!(lexer.next().is_none());
}

#[test]
fn test_empty() {
    assert_eq!(tokens(""), vec![]);
}
