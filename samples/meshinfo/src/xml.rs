//! Conversion of XML documents into [meshpack] [Tokens](Token).

use meshpack::Token;
use quick_xml::{events::Event as XmlEvent, Reader};

fn name(raw: &[u8]) -> String {
    String::from_utf8_lossy(raw).into_owned()
}

fn open(start: &quick_xml::events::BytesStart<'_>) -> Result<Token, quick_xml::Error> {
    let mut attributes = Vec::new();
    for attr in start.attributes() {
        let attr = attr?;
        attributes.push((name(attr.key.as_ref()), attr.unescape_value()?.into_owned()));
    }
    Ok(Token::Open {
        name: name(start.name().as_ref()),
        attributes,
    })
}

/// Read every structural token of `document`.
///
/// Declarations, comments, processing instructions and doctypes are dropped. Text is passed
/// through untrimmed, so values on either side of a comment stay separate.
pub fn tokens(document: &str) -> Result<Vec<Token>, quick_xml::Error> {
    let mut reader = Reader::from_str(document);

    let mut tokens = Vec::new();
    loop {
        match reader.read_event()? {
            XmlEvent::Start(start) => tokens.push(open(&start)?),
            XmlEvent::Empty(start) => {
                tokens.push(open(&start)?);
                tokens.push(Token::close(name(start.name().as_ref())));
            }
            XmlEvent::End(end) => tokens.push(Token::close(name(end.name().as_ref()))),
            XmlEvent::Text(text) => tokens.push(Token::text(text.unescape()?.into_owned())),
            XmlEvent::CData(data) => tokens.push(Token::text(name(&data.into_inner()))),
            XmlEvent::Eof => break,
            _ => (),
        }
    }
    tracing::trace!(tokens = tokens.len(), "read XML document");
    Ok(tokens)
}
