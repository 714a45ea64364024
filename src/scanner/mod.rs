//! Lexical analysis: characters in, tokens out.
//!
//! The scanner hands out exactly one token per `next_token` call and never
//! fails: a character no rule recognizes becomes an `Illegal` token for the
//! parser to deal with, and once the input is exhausted every further call
//! yields `Eof`. A single character of lookahead is enough to tell `==` from
//! `=` and `!=` from `!`.
//!
//! Identifiers follow `maximal munch`: we cannot tell a keyword from a plain
//! name until the whole letter run has been consumed, so the run is sliced
//! first and classified against the keyword table afterwards.

mod token;

use std::{iter::Peekable, str::CharIndices};

use TokenKind::*;
pub(crate) use token::*;

/// A scanner for Krill source code
pub(crate) struct Scanner<'a> {
	/// User input source code
	source:      &'a str,
	/// User input source code iterator
	source_iter: Peekable<CharIndices<'a>>,
	/// Points at the beginning of the current lexeme
	start:       usize,
	/// Points at the character currently being considered
	cursor:      usize,
}

impl<'a> Scanner<'a> {
	pub fn new(source: &'a str) -> Self {
		let source_iter = source.char_indices().peekable();

		Self { source, source_iter, start: 0, cursor: 0 }
	}

	/// Scan a single token and advance past it.
	pub fn next_token(&mut self) -> Token<'a> {
		self.skip_whitespace();
		self.start = self.cursor;

		let Some(next_char) = self.advance() else {
			return Token::new(Eof, "");
		};

		let kind = match next_char {
			'(' => LParen,
			')' => RParen,
			'{' => LBrace,
			'}' => RBrace,
			',' => Comma,
			';' => Semicolon,
			'+' => Plus,
			'-' => Minus,
			'*' => Asterisk,
			'/' => Slash,
			'<' => Lt,
			'>' => Gt,
			'=' => if self.match_next('=') { Eq } else { Assign },
			'!' => if self.match_next('=') { NotEq } else { Bang },
			c if c.is_alphabetic() || c == '_' => self.identifier(),
			c if c.is_ascii_digit() => self.number(),
			_ => Illegal,
		};

		Token::new(kind, &self.source[self.start..self.cursor])
	}

	/// Match the next character if it is the expected one
	fn match_next(&mut self, expected: char) -> bool {
		matches!(self.peek(), Some(c) if c == expected && { self.advance(); true })
	}

	/// Advance to the next character
	fn advance(&mut self) -> Option<char> {
		let (i, c) = self.source_iter.next()?;
		self.cursor = i + c.len_utf8();
		Some(c)
	}

	/// Peek the current character
	fn peek(&mut self) -> Option<char> { self.source_iter.peek().map(|&(_, c)| c) }

	fn skip_whitespace(&mut self) {
		while self.peek().is_some_and(char::is_whitespace) {
			self.advance();
		}
	}

	/// Scan an identifier or keyword
	fn identifier(&mut self) -> TokenKind {
		while self.peek().is_some_and(|c| c.is_alphabetic() || c == '_') {
			self.advance();
		}
		TokenKind::keyword_or_identifier(&self.source[self.start..self.cursor])
	}

	/// Scan an integer literal. The digits are kept verbatim
	fn number(&mut self) -> TokenKind {
		while self.peek().is_some_and(|c| c.is_ascii_digit()) {
			self.advance();
		}
		Int
	}
}
