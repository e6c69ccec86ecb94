use std::fmt::Display;

use quick_xml::{
    events::{BytesEnd, BytesStart, BytesText, Event},
    Writer,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    TestSuites,
    TestSuite,
    Properties,
    Property,
    TestCase,
    Failure,
    Error,
    SystemOut,
    SystemErr,
}

impl Tag {
    pub fn name(&self) -> &'static str {
        match self {
            Tag::TestSuites => "testsuites",
            Tag::TestSuite => "testsuite",
            Tag::Properties => "properties",
            Tag::Property => "property",
            Tag::TestCase => "testcase",
            Tag::Failure => "failure",
            Tag::Error => "error",
            Tag::SystemOut => "system-out",
            Tag::SystemErr => "system-err",
        }
    }
}

impl Display for Tag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A materialized XML element. Attributes keep insertion order, which is
/// the order they are written in.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub tag: Tag,
    pub attributes: Vec<(&'static str, String)>,
    pub text: Option<String>,
    pub children: Vec<Element>,
}

impl Element {
    pub fn new(tag: Tag) -> Self {
        Element {
            tag,
            attributes: vec![],
            text: None,
            children: vec![],
        }
    }

    pub fn with_attribute(mut self, key: &'static str, value: impl ToString) -> Self {
        self.attributes.push((key, value.to_string()));
        self
    }

    /// Adds the attribute only when `value` is present and non-empty.
    pub fn with_optional_attribute(self, key: &'static str, value: Option<&str>) -> Self {
        match value {
            Some(value) if !value.is_empty() => self.with_attribute(key, value),
            _ => self,
        }
    }

    pub fn with_text(mut self, text: Option<&str>) -> Self {
        if let Some(text) = text.filter(|t| !t.is_empty()) {
            self.text = Some(text.to_string());
        }
        self
    }

    pub fn push(&mut self, child: Element) {
        self.children.push(child);
    }

    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn children_with_tag(&self, tag: Tag) -> impl Iterator<Item = &Element> {
        self.children.iter().filter(move |child| child.tag == tag)
    }

    pub(crate) fn serialize(
        &self,
        writer: &mut Writer<impl std::io::Write>,
    ) -> crate::Result<()> {
        let name = self.tag.name();
        let mut tag = BytesStart::new(name);
        tag.extend_attributes(self.attributes.iter().map(|(k, v)| (*k, v.as_str())));

        if self.text.is_none() && self.children.is_empty() {
            writer.write_event(Event::Empty(tag))?;
            return Ok(());
        }

        writer.write_event(Event::Start(tag))?;
        if let Some(text) = &self.text {
            writer.write_event(Event::Text(BytesText::new(text)))?;
        }
        for child in &self.children {
            child.serialize(writer)?;
        }
        writer.write_event(Event::End(BytesEnd::new(name)))?;

        Ok(())
    }
}
