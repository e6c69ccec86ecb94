use chrono::NaiveDateTime;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::report::{
    case::TestCase,
    element::{Element, Tag},
};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Suite of test cases. The `tests`, `failures` and `errors` counts are
/// derived from `test_cases` every time the suite is rendered.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct TestSuite {
    pub name: String,
    #[serde(default)]
    pub test_cases: Vec<TestCase>,
    pub hostname: Option<String>,
    pub id: Option<String>,
    pub package: Option<String>,
    pub timestamp: Option<String>,
    #[serde(default)]
    pub properties: IndexMap<String, String>,
}

impl TestSuite {
    pub fn new(name: impl Into<String>) -> Self {
        TestSuite {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_test_cases(mut self, test_cases: Vec<TestCase>) -> Self {
        self.test_cases = test_cases;
        self
    }

    pub fn with_hostname(mut self, hostname: impl Into<String>) -> Self {
        self.hostname = Some(hostname.into());
        self
    }

    pub fn with_id(mut self, id: impl ToString) -> Self {
        self.id = Some(id.to_string());
        self
    }

    pub fn with_package(mut self, package: impl Into<String>) -> Self {
        self.package = Some(package.into());
        self
    }

    pub fn with_timestamp(mut self, timestamp: impl Into<String>) -> Self {
        self.timestamp = Some(timestamp.into());
        self
    }

    /// Stamps the suite in the `2012-11-15T01:02:29` form Jenkins reads.
    pub fn with_timestamp_at(self, at: NaiveDateTime) -> Self {
        let timestamp = at.format(TIMESTAMP_FORMAT).to_string();
        self.with_timestamp(timestamp)
    }

    pub fn with_property(mut self, key: impl ToString, value: impl ToString) -> Self {
        self.properties.insert(key.to_string(), value.to_string());
        self
    }

    pub fn with_properties<K, V>(mut self, properties: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: ToString,
        V: ToString,
    {
        self.properties.extend(
            properties
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string())),
        );
        self
    }

    pub fn tests(&self) -> usize {
        self.test_cases.len()
    }

    pub fn failures(&self) -> usize {
        self.test_cases.iter().filter(|c| c.is_failure()).count()
    }

    pub fn errors(&self) -> usize {
        self.test_cases.iter().filter(|c| c.is_error()).count()
    }

    pub fn build_element(&self) -> Element {
        let mut element = Element::new(Tag::TestSuite)
            .with_attribute("name", &self.name)
            .with_attribute("failures", self.failures())
            .with_attribute("errors", self.errors())
            .with_attribute("tests", self.tests())
            .with_optional_attribute("hostname", self.hostname.as_deref())
            .with_optional_attribute("id", self.id.as_deref())
            .with_optional_attribute("package", self.package.as_deref())
            .with_optional_attribute("timestamp", self.timestamp.as_deref());

        if !self.properties.is_empty() {
            let mut properties = Element::new(Tag::Properties);
            for (name, value) in &self.properties {
                properties.push(
                    Element::new(Tag::Property)
                        .with_attribute("name", name)
                        .with_attribute("value", value),
                );
            }
            element.push(properties);
        }

        for case in &self.test_cases {
            element.push(case.build_element());
        }

        log::trace!(
            "built testsuite {} with {} test cases",
            self.name,
            self.test_cases.len()
        );

        element
    }
}

#[cfg(test)]
#[path = "suite_tests.rs"]
mod suite_tests;
