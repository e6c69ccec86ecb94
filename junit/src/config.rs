use serde::{Deserialize, Serialize};

/// Controls how a [`crate::JunitReport`] turns its element tree into text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SerializeOptions {
    /// Reformat the compact output with indentation and an XML declaration.
    pub pretty_print: bool,
    pub indent_char: u8,
    pub indent_size: usize,
    /// Only applied to pretty output; compact output never carries one.
    pub xml_declaration: bool,
    /// Return reformatting failures instead of falling back to compact output.
    pub strict_formatting: bool,
}

impl Default for SerializeOptions {
    fn default() -> Self {
        SerializeOptions {
            pretty_print: true,
            indent_char: b' ',
            indent_size: 4,
            xml_declaration: true,
            strict_formatting: false,
        }
    }
}

impl SerializeOptions {
    pub fn compact() -> Self {
        SerializeOptions {
            pretty_print: false,
            ..Default::default()
        }
    }

    pub fn pretty_print(mut self, pretty_print: bool) -> Self {
        self.pretty_print = pretty_print;
        self
    }

    pub fn indent(mut self, indent_char: u8, indent_size: usize) -> Self {
        self.indent_char = indent_char;
        self.indent_size = indent_size;
        self
    }

    pub fn xml_declaration(mut self, xml_declaration: bool) -> Self {
        self.xml_declaration = xml_declaration;
        self
    }

    pub fn strict_formatting(mut self, strict_formatting: bool) -> Self {
        self.strict_formatting = strict_formatting;
        self
    }
}
