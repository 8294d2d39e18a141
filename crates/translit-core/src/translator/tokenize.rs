use crate::settings::TokenizerSettings;

/// Splits text into words and single-character delimiter tokens.
///
/// Never yields an empty token.
pub struct Tokens<'a> {
    rest: &'a str,
    delimiters: &'a TokenizerSettings,
}

impl<'a> Tokens<'a> {
    pub fn new(text: &'a str, delimiters: &'a TokenizerSettings) -> Self {
        Self {
            rest: text,
            delimiters,
        }
    }
}

impl<'a> Iterator for Tokens<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let first = self.rest.chars().next()?;
        let end = if self.delimiters.is_delimiter(first) {
            first.len_utf8()
        } else {
            self.rest
                .char_indices()
                .find(|&(_, c)| self.delimiters.is_delimiter(c))
                .map_or(self.rest.len(), |(i, _)| i)
        };
        let (token, rest) = self.rest.split_at(end);
        self.rest = rest;
        Some(token)
    }
}
