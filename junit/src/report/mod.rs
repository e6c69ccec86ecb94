pub mod case;
pub mod element;
mod pretty;
pub mod suite;

use std::io::Write;

use crate::{
    config::SerializeOptions,
    report::{
        element::{Element, Tag},
        suite::TestSuite,
    },
};

/// The `testsuites` document for an ordered set of suites. The root carries
/// no aggregate attributes; counts live on each `testsuite`.
#[derive(Debug, Clone)]
pub struct JunitReport<'report> {
    pub test_suites: &'report [TestSuite],
    pub options: SerializeOptions,
}

impl<'report> From<&'report [TestSuite]> for JunitReport<'report> {
    fn from(test_suites: &'report [TestSuite]) -> Self {
        JunitReport::new(test_suites)
    }
}

impl<'report> From<&'report Vec<TestSuite>> for JunitReport<'report> {
    fn from(test_suites: &'report Vec<TestSuite>) -> Self {
        JunitReport::new(test_suites)
    }
}

impl<'report> JunitReport<'report> {
    pub fn new(test_suites: &'report [TestSuite]) -> Self {
        JunitReport {
            test_suites,
            options: SerializeOptions::default(),
        }
    }

    pub fn with_options(mut self, options: SerializeOptions) -> Self {
        self.options = options;
        self
    }

    pub fn pretty_print(mut self, pretty_print: bool) -> Self {
        self.options.pretty_print = pretty_print;
        self
    }

    pub fn build_element(&self) -> Element {
        self.test_suites
            .iter()
            .fold(Element::new(Tag::TestSuites), |mut root, suite| {
                root.push(suite.build_element());
                root
            })
    }

    /// Renders the report. When pretty printing fails the compact text is
    /// returned instead, unless `strict_formatting` is set.
    pub fn to_xml_string(&self) -> crate::Result<String> {
        let compact = self.to_compact_string()?;

        log::debug!(
            "rendered {} test suites: {} tests, {} failures, {} errors",
            self.test_suites.len(),
            self.test_suites.iter().map(TestSuite::tests).sum::<usize>(),
            self.test_suites.iter().map(TestSuite::failures).sum::<usize>(),
            self.test_suites.iter().map(TestSuite::errors).sum::<usize>(),
        );

        if !self.options.pretty_print {
            return Ok(compact);
        }

        match pretty::reformat(&compact, &self.options) {
            Ok(pretty) => Ok(pretty),
            Err(e) if !self.options.strict_formatting => {
                log::warn!("pretty printing the JUnit report failed, writing compact output: {e}");
                Ok(compact)
            }
            Err(e) => Err(e),
        }
    }

    /// Writes the whole rendered report to `writer`.
    pub fn serialize<W: Write + ?Sized>(&self, writer: &mut W) -> crate::Result<()> {
        let xml = self.to_xml_string()?;
        writer.write_all(xml.as_bytes())?;
        Ok(())
    }

    fn to_compact_string(&self) -> crate::Result<String> {
        let mut writer = quick_xml::Writer::new(Vec::new());
        self.build_element().serialize(&mut writer)?;
        Ok(String::from_utf8(writer.into_inner())?)
    }
}

pub fn to_xml_string(test_suites: &[TestSuite], pretty_print: bool) -> crate::Result<String> {
    JunitReport::new(test_suites)
        .pretty_print(pretty_print)
        .to_xml_string()
}

pub fn to_file<W: Write + ?Sized>(
    destination: &mut W,
    test_suites: &[TestSuite],
    pretty_print: bool,
) -> crate::Result<()> {
    JunitReport::new(test_suites)
        .pretty_print(pretty_print)
        .serialize(destination)
}
