use quick_xml::{
    events::{BytesDecl, BytesStart, Event},
    Reader, Writer,
};

use crate::{config::SerializeOptions, Error};

/// Re-reads compact XML and writes it back out indented. Every attribute
/// value and text node is checked against the XML 1.0 character set on the
/// way through, so a report a strict consumer would reject fails here.
pub(crate) fn reformat(compact: &str, options: &SerializeOptions) -> crate::Result<String> {
    let mut reader = Reader::from_str(compact);
    let mut writer = Writer::new_with_indent(Vec::new(), options.indent_char, options.indent_size);
    let mut open = vec![];

    if options.xml_declaration {
        writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
    }

    loop {
        match reader.read_event()? {
            Event::Eof => break,
            Event::Start(start) => {
                validate_attributes(&start)?;
                open.push(String::from_utf8_lossy(start.name().as_ref()).into_owned());
                writer.write_event(Event::Start(start))?;
            }
            Event::End(end) => {
                open.pop();
                writer.write_event(Event::End(end))?;
            }
            Event::Empty(empty) => {
                validate_attributes(&empty)?;
                writer.write_event(Event::Empty(empty))?;
            }
            Event::Text(text) => {
                validate_chars(&text.unescape()?, || match open.last() {
                    Some(name) => format!("text of <{name}>"),
                    None => String::from("text outside the root element"),
                })?;
                writer.write_event(Event::Text(text))?;
            }
            event => writer.write_event(event)?,
        }
    }

    writer.write_indent()?;
    Ok(String::from_utf8(writer.into_inner())?)
}

fn validate_attributes(start: &BytesStart<'_>) -> crate::Result<()> {
    for attribute in start.attributes() {
        let attribute = attribute.map_err(quick_xml::Error::InvalidAttr)?;
        validate_chars(&attribute.unescape_value()?, || {
            format!(
                "attribute `{}` of <{}>",
                String::from_utf8_lossy(attribute.key.as_ref()),
                String::from_utf8_lossy(start.name().as_ref())
            )
        })?;
    }
    Ok(())
}

fn validate_chars(text: &str, context: impl FnOnce() -> String) -> crate::Result<()> {
    match text.chars().find(|c| !is_xml_char(*c)) {
        Some(character) => Err(Error::InvalidCharacter {
            character,
            context: context(),
        }),
        None => Ok(()),
    }
}

fn is_xml_char(c: char) -> bool {
    matches!(c,
        '\u{9}' | '\u{A}' | '\u{D}'
        | '\u{20}'..='\u{D7FF}'
        | '\u{E000}'..='\u{FFFD}'
        | '\u{10000}'..='\u{10FFFF}')
}
