use std::iter::FusedIterator;

use crate::{Component, Error, Event, FormatError};

/// A raw structural token, as produced by a generic markup parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// An opening tag and its attributes. Self-closing elements are an `Open` immediately
    /// followed by a matching `Close`.
    Open {
        name: String,
        attributes: Vec<(String, String)>,
    },
    /// Character data. Adjacent `Text` tokens are concatenated.
    Text(String),
    Close { name: String },
}

impl Token {
    pub fn open<K, V>(name: impl Into<String>, attributes: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self::Open {
            name: name.into(),
            attributes: attributes
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    pub fn close(name: impl Into<String>) -> Self {
        Self::Close { name: name.into() }
    }

    fn describe(&self) -> String {
        match self {
            Token::Open { name, .. } => format!("<{name}>"),
            Token::Text(_) => "text".to_owned(),
            Token::Close { name } => format!("</{name}>"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Before `<mesh>`
    Root,
    /// Between `<mesh>` and `</mesh>`
    Mesh,
    /// After `</mesh>`
    Done,
}

/// Adapts a stream of [Tokens](Token) into mesh description [Events](Event).
///
/// Whitespace-only text between elements is skipped. The adapter stops after the first error.
#[derive(Debug)]
pub struct Events<I> {
    tokens: I,
    state: State,
    failed: bool,
}

impl<I: Iterator<Item = Token>> Events<I> {
    pub fn new(tokens: impl IntoIterator<IntoIter = I>) -> Self {
        Self {
            tokens: tokens.into_iter(),
            state: State::Root,
            failed: false,
        }
    }

    fn advance(&mut self) -> Result<Option<Event>, Error> {
        loop {
            let Some(token) = self.tokens.next() else {
                return match self.state {
                    State::Done => Ok(None),
                    _ => Err(FormatError::UnexpectedEnd.into()),
                };
            };
            match (self.state, token) {
                (_, Token::Text(text)) if is_blank(&text) => continue,
                (State::Root, Token::Open { name, .. }) if name == "mesh" => {
                    self.state = State::Mesh;
                    return Ok(Some(Event::EnterMesh));
                }
                (State::Root, other) => {
                    return Err(FormatError::MissingRoot(other.describe()).into())
                }
                (State::Mesh, Token::Open { name, attributes }) => {
                    return self.block(name, &attributes).map(Some)
                }
                (State::Mesh, Token::Close { name }) if name == "mesh" => {
                    self.state = State::Done;
                    return Ok(Some(Event::ExitMesh));
                }
                (State::Mesh, Token::Close { name }) => {
                    return Err(FormatError::MismatchedClose {
                        expected: "mesh".to_owned(),
                        found: name,
                    }
                    .into())
                }
                (State::Mesh, Token::Text(_)) => {
                    return Err(FormatError::UnexpectedText("mesh".to_owned()).into())
                }
                (State::Done, _) => return Err(FormatError::TrailingContent.into()),
            }
        }
    }

    fn block(&mut self, name: String, attributes: &[(String, String)]) -> Result<Event, Error> {
        match name.as_str() {
            "attribute" => {
                const TAG: &str = "attribute";
                let slot = number(attributes, TAG, "index")?;
                let type_name = lookup(attributes, TAG, "type")?;
                let components = number(attributes, TAG, "size")?;
                let text = self.text_content(TAG)?;
                Ok(Event::attribute(slot, type_name, components, text))
            }
            "indices" => {
                const TAG: &str = "indices";
                let mode_name = lookup(attributes, TAG, "cmd")?;
                let type_name = lookup(attributes, TAG, "type")?;
                let text = self.text_content(TAG)?;
                Ok(Event::indices(mode_name, type_name, text))
            }
            "arrays" => {
                const TAG: &str = "arrays";
                let mode_name = lookup(attributes, TAG, "cmd")?;
                let first = number(attributes, TAG, "start")?;
                let count = number(attributes, TAG, "count")?;
                if !is_blank(&self.text_content(TAG)?) {
                    return Err(FormatError::UnexpectedText(TAG.to_owned()).into());
                }
                Ok(Event::arrays(mode_name, first, count))
            }
            "mesh" => Err(FormatError::UnexpectedTag {
                parent: "mesh".to_owned(),
                found: name,
            }
            .into()),
            _ => Err(FormatError::InvalidTag(name).into()),
        }
    }

    /// Collect text up to the closing tag of `tag`.
    fn text_content(&mut self, tag: &str) -> Result<String, Error> {
        let mut content = String::new();
        loop {
            match self.tokens.next() {
                Some(Token::Text(text)) => content.push_str(&text),
                Some(Token::Close { name }) if name == tag => return Ok(content),
                Some(Token::Close { name }) => {
                    return Err(FormatError::MismatchedClose {
                        expected: tag.to_owned(),
                        found: name,
                    }
                    .into())
                }
                Some(Token::Open { name, .. }) => {
                    return Err(FormatError::UnexpectedTag {
                        parent: tag.to_owned(),
                        found: name,
                    }
                    .into())
                }
                None => return Err(FormatError::UnexpectedEnd.into()),
            }
        }
    }
}

impl<I: Iterator<Item = Token>> Iterator for Events<I> {
    type Item = Result<Event, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        let res = self.advance().transpose();
        if matches!(res, Some(Err(_))) {
            self.failed = true;
        }
        res
    }
}

impl<I: Iterator<Item = Token>> FusedIterator for Events<I> {}

#[inline]
fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}

fn lookup<'a>(
    attributes: &'a [(String, String)],
    tag: &'static str,
    key: &'static str,
) -> Result<&'a str, Error> {
    attributes
        .iter()
        .find_map(|(k, v)| (k == key).then_some(v.as_str()))
        .ok_or(Error::Format(FormatError::MissingAttribute { tag, key }))
}

fn number(attributes: &[(String, String)], tag: &'static str, key: &'static str) -> Result<u32, Error> {
    <u32 as Component>::parse(lookup(attributes, tag, key)?.trim())
}
