use meshpack::{compile_tokens, Error, Event, Events, FormatError, Mode, RenderCommand, Token};

fn attribute(index: &str, ty: &str, size: &str, text: &str) -> [Token; 3] {
    [
        Token::open("attribute", [("index", index), ("type", ty), ("size", size)]),
        Token::text(text),
        Token::close("attribute"),
    ]
}

fn arrays(cmd: &str, start: &str, count: &str) -> [Token; 2] {
    [
        Token::open("arrays", [("cmd", cmd), ("start", start), ("count", count)]),
        Token::close("arrays"),
    ]
}

fn document(body: impl IntoIterator<Item = Token>) -> Vec<Token> {
    let mut tokens = vec![Token::open("mesh", [] as [(&str, &str); 0]), Token::text("\n  ")];
    tokens.extend(body);
    tokens.push(Token::text("\n"));
    tokens.push(Token::close("mesh"));
    tokens
}

#[test]
fn adapts_blocks() {
    let tokens = document(
        attribute("1", "float", "3", "1 0 0")
            .into_iter()
            .chain([Token::text("\n  ")])
            .chain([
                Token::open("indices", [("cmd", "triangles"), ("type", "ushort")]),
                Token::text("0 1"),
                Token::text(" 2"),
                Token::close("indices"),
            ])
            .chain(arrays("lines", "0", "2")),
    );
    let events: Vec<_> = Events::new(tokens).collect::<Result<_, _>>().unwrap();
    assert_eq!(
        events,
        vec![
            Event::EnterMesh,
            Event::attribute(1, "float", 3, "1 0 0"),
            Event::indices("triangles", "ushort", "0 1 2"),
            Event::arrays("lines", 0, 2),
            Event::ExitMesh,
        ]
    );
}

#[test]
fn compiles_tokens() {
    let mesh = compile_tokens(document(
        attribute("0", "float", "4", "0.75 0.75 0.0 1.0")
            .into_iter()
            .chain(attribute("1", "float", "3", "1 0 0"))
            .chain(arrays("points", "0", "1")),
    ))
    .unwrap();

    assert_eq!(mesh.attributes()[1].offset, 16);
    assert_eq!(mesh.vertex_data().len(), 28);
    assert_eq!(
        mesh.commands(),
        &[RenderCommand::Direct {
            mode: Mode::Points,
            first: 0,
            count: 1
        }]
    );
}

#[test]
fn split_text_keeps_value_boundaries() {
    let mesh = compile_tokens(document([
        Token::open("attribute", [("index", "0"), ("type", "ushort"), ("size", "1")]),
        Token::text("1 2 "),
        Token::text(" 3\n"),
        Token::text("4"),
        Token::close("attribute"),
        Token::open("indices", [("cmd", "points"), ("type", "ubyte")]),
        Token::text("0"),
        Token::text("\n1 "),
        Token::text("2"),
        Token::close("indices"),
    ]))
    .unwrap();
    assert_eq!(mesh.read_attribute::<u16>(0), Some(vec![1, 2, 3, 4]));
    assert_eq!(mesh.index_data().as_slice(), &[0, 1, 2]);
}

#[test]
fn invalid_tag() {
    let err = compile_tokens(document([
        Token::open("vertex", [("index", "0")]),
        Token::close("vertex"),
    ]))
    .unwrap_err();
    assert_eq!(err, Error::Format(FormatError::InvalidTag("vertex".to_owned())));
}

#[test]
fn missing_root() {
    let err = compile_tokens(attribute("0", "float", "1", "0")).unwrap_err();
    assert_eq!(
        err,
        Error::Format(FormatError::MissingRoot("<attribute>".to_owned()))
    );

    let err = compile_tokens([Token::text("stray")]).unwrap_err();
    assert!(matches!(err, Error::Format(FormatError::MissingRoot(_))));
}

#[test]
fn leading_whitespace_before_root_is_ignored() {
    let mut tokens = vec![Token::text("\n\n")];
    tokens.extend(document(
        attribute("0", "ubyte", "1", "7").into_iter().chain(arrays("points", "0", "1")),
    ));
    let mesh = compile_tokens(tokens).unwrap();
    assert_eq!(mesh.vertex_data().as_slice(), &[7]);
}

#[test]
fn trailing_content() {
    let mut tokens = document(attribute("0", "float", "1", "0").into_iter().chain(arrays("points", "0", "1")));
    tokens.push(Token::text("   "));
    assert!(compile_tokens(tokens.clone()).is_ok());

    tokens.push(Token::open("mesh", [] as [(&str, &str); 0]));
    assert_eq!(
        compile_tokens(tokens).unwrap_err(),
        Error::Format(FormatError::TrailingContent)
    );
}

#[test]
fn missing_attribute() {
    let err = compile_tokens(document([
        Token::open("attribute", [("index", "0"), ("type", "float")]),
        Token::text("0 1 2"),
        Token::close("attribute"),
    ]))
    .unwrap_err();
    assert_eq!(
        err,
        Error::Format(FormatError::MissingAttribute {
            tag: "attribute",
            key: "size"
        })
    );

    let err = compile_tokens(document([
        Token::open("arrays", [("start", "0"), ("count", "3")]),
        Token::close("arrays"),
    ]))
    .unwrap_err();
    assert_eq!(
        err,
        Error::Format(FormatError::MissingAttribute {
            tag: "arrays",
            key: "cmd"
        })
    );
}

#[test]
fn malformed_attribute_numbers() {
    let err = compile_tokens(document(attribute("-1", "float", "1", "0"))).unwrap_err();
    assert!(matches!(err, Error::MalformedNumber { ref token, .. } if token == "-1"));

    let err = compile_tokens(document(arrays("points", "0", "many"))).unwrap_err();
    assert!(matches!(err, Error::MalformedNumber { ref token, .. } if token == "many"));
}

#[test]
fn unexpected_structure() {
    let err = compile_tokens(document([
        Token::open("attribute", [("index", "0"), ("type", "float"), ("size", "1")]),
        Token::open("indices", [("cmd", "points"), ("type", "ubyte")]),
    ]))
    .unwrap_err();
    assert!(matches!(err, Error::Format(FormatError::UnexpectedTag { .. })));

    let err = compile_tokens(document([
        Token::open("attribute", [("index", "0"), ("type", "float"), ("size", "1")]),
        Token::text("0"),
        Token::close("indices"),
    ]))
    .unwrap_err();
    assert!(matches!(err, Error::Format(FormatError::MismatchedClose { .. })));

    let err = compile_tokens(document([Token::text("1 2 3")])).unwrap_err();
    assert_eq!(
        err,
        Error::Format(FormatError::UnexpectedText("mesh".to_owned()))
    );

    let err = compile_tokens(document([
        Token::open("arrays", [("cmd", "points"), ("start", "0"), ("count", "1")]),
        Token::text("0 1 2"),
        Token::close("arrays"),
    ]))
    .unwrap_err();
    assert_eq!(
        err,
        Error::Format(FormatError::UnexpectedText("arrays".to_owned()))
    );

    let err = compile_tokens(document([
        Token::open("mesh", [] as [(&str, &str); 0]),
        Token::close("mesh"),
    ]))
    .unwrap_err();
    assert!(matches!(err, Error::Format(FormatError::UnexpectedTag { .. })));
}

#[test]
fn unexpected_end() {
    let mut tokens = document(attribute("0", "float", "1", "0"));
    tokens.pop();
    assert_eq!(
        compile_tokens(tokens).unwrap_err(),
        Error::Format(FormatError::UnexpectedEnd)
    );

    let tokens = vec![
        Token::open("mesh", [] as [(&str, &str); 0]),
        Token::open("attribute", [("index", "0"), ("type", "float"), ("size", "1")]),
        Token::text("0"),
    ];
    assert_eq!(
        compile_tokens(tokens).unwrap_err(),
        Error::Format(FormatError::UnexpectedEnd)
    );
}

#[test]
fn adapter_stops_after_first_error() {
    let mut events = Events::new(vec![
        Token::open("vertex", [] as [(&str, &str); 0]),
        Token::open("mesh", [] as [(&str, &str); 0]),
    ]);
    assert!(matches!(events.next(), Some(Err(_))));
    assert!(events.next().is_none());
    assert!(events.next().is_none());
}
