use std::fmt::Display;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Whitespace-separated tokens of a text graph file, tagged with their
/// 1-based line number.
pub(crate) struct Tokens<'a> {
    tokens: Vec<(usize, &'a str)>,
    position: usize,
    last_line: usize,
}

impl<'a> Tokens<'a> {
    pub(crate) fn new(input: &'a str) -> Self {
        let tokens: Vec<(usize, &'a str)> = input
            .lines()
            .enumerate()
            .flat_map(|(index, line)| line.split_whitespace().map(move |token| (index + 1, token)))
            .collect();
        Self {
            tokens,
            position: 0,
            last_line: input.lines().count().max(1),
        }
    }

    /// Next raw token, or a parse error naming what was expected.
    pub(crate) fn next_token(&mut self, what: &str) -> Result<(usize, &'a str)> {
        let token = self
            .tokens
            .get(self.position)
            .copied()
            .ok_or_else(|| Error::parse(self.last_line, format!("expected {what}, found end of input")))?;
        self.position += 1;
        Ok(token)
    }

    /// Next token parsed as `T`.
    pub(crate) fn next_parsed<T>(&mut self, what: &str) -> Result<(usize, T)>
    where
        T: FromStr,
        T::Err: Display,
    {
        let (line, token) = self.next_token(what)?;
        token
            .parse::<T>()
            .map(|value| (line, value))
            .map_err(|err| Error::parse(line, format!("invalid {what} '{token}': {err}")))
    }

    /// Number of tokens not consumed yet.
    pub(crate) fn remaining(&self) -> usize {
        self.tokens.len() - self.position
    }

    /// Fail if anything is left after the last expected token.
    pub(crate) fn finish(&self) -> Result<()> {
        match self.tokens.get(self.position) {
            Some((line, token)) => Err(Error::parse(*line, format!("unexpected trailing token '{token}'"))),
            None => Ok(()),
        }
    }
}
