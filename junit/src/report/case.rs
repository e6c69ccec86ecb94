use serde::{Deserialize, Serialize};

use crate::report::element::{Element, Tag};

/// A single test's outcome, with optional captured output.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(from = "TestCaseRecord")]
pub struct TestCase {
    pub name: String,
    pub classname: Option<String>,
    pub elapsed_sec: Option<f64>,
    pub stdout: Option<String>,
    pub stderr: Option<String>,
    pub(crate) error_message: Option<String>,
    pub(crate) error_output: Option<String>,
    pub(crate) failure_message: Option<String>,
    pub(crate) failure_output: Option<String>,
}

impl TestCase {
    pub fn new(name: impl Into<String>) -> Self {
        TestCase {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_classname(mut self, classname: impl Into<String>) -> Self {
        self.classname = Some(classname.into());
        self
    }

    /// Any value, zero included, is written as the `time` attribute.
    pub fn with_elapsed_sec(mut self, elapsed_sec: f64) -> Self {
        self.elapsed_sec = Some(elapsed_sec);
        self
    }

    pub fn with_stdout(mut self, stdout: impl Into<String>) -> Self {
        self.stdout = Some(stdout.into());
        self
    }

    pub fn with_stderr(mut self, stderr: impl Into<String>) -> Self {
        self.stderr = Some(stderr.into());
        self
    }

    /// Records an error. Empty or missing arguments leave the current value
    /// in place.
    pub fn add_error_info(&mut self, message: Option<&str>, output: Option<&str>) {
        set_if_present(&mut self.error_message, message);
        set_if_present(&mut self.error_output, output);
    }

    /// Records a failure. Empty or missing arguments leave the current value
    /// in place.
    pub fn add_failure_info(&mut self, message: Option<&str>, output: Option<&str>) {
        set_if_present(&mut self.failure_message, message);
        set_if_present(&mut self.failure_output, output);
    }

    pub fn is_failure(&self) -> bool {
        is_set(&self.failure_message) || is_set(&self.failure_output)
    }

    pub fn is_error(&self) -> bool {
        is_set(&self.error_message) || is_set(&self.error_output)
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    pub fn error_output(&self) -> Option<&str> {
        self.error_output.as_deref()
    }

    pub fn failure_message(&self) -> Option<&str> {
        self.failure_message.as_deref()
    }

    pub fn failure_output(&self) -> Option<&str> {
        self.failure_output.as_deref()
    }

    pub(crate) fn build_element(&self) -> Element {
        let time = self.elapsed_sec.map(|secs| format!("{secs:.6}"));
        let mut element = Element::new(Tag::TestCase)
            .with_attribute("name", &self.name)
            .with_optional_attribute("time", time.as_deref())
            .with_optional_attribute("classname", self.classname.as_deref());

        if self.is_failure() {
            element.push(
                Element::new(Tag::Failure)
                    .with_attribute("type", "failure")
                    .with_optional_attribute("message", self.failure_message())
                    .with_text(self.failure_output()),
            );
        }

        if self.is_error() {
            element.push(
                Element::new(Tag::Error)
                    .with_attribute("type", "error")
                    .with_optional_attribute("message", self.error_message())
                    .with_text(self.error_output()),
            );
        }

        if is_set(&self.stdout) {
            element.push(Element::new(Tag::SystemOut).with_text(self.stdout.as_deref()));
        }

        if is_set(&self.stderr) {
            element.push(Element::new(Tag::SystemErr).with_text(self.stderr.as_deref()));
        }

        element
    }
}

/// Incoming shape of a test case. Error and failure details are applied
/// through `add_error_info`/`add_failure_info` like any other caller.
#[derive(Deserialize)]
struct TestCaseRecord {
    name: String,
    classname: Option<String>,
    elapsed_sec: Option<f64>,
    stdout: Option<String>,
    stderr: Option<String>,
    error_message: Option<String>,
    error_output: Option<String>,
    failure_message: Option<String>,
    failure_output: Option<String>,
}

impl From<TestCaseRecord> for TestCase {
    fn from(record: TestCaseRecord) -> Self {
        let mut case = TestCase {
            name: record.name,
            classname: record.classname,
            elapsed_sec: record.elapsed_sec,
            stdout: record.stdout,
            stderr: record.stderr,
            ..Default::default()
        };
        case.add_error_info(
            record.error_message.as_deref(),
            record.error_output.as_deref(),
        );
        case.add_failure_info(
            record.failure_message.as_deref(),
            record.failure_output.as_deref(),
        );
        case
    }
}

fn is_set(value: &Option<String>) -> bool {
    value.as_deref().map_or(false, |v| !v.is_empty())
}

fn set_if_present(field: &mut Option<String>, value: Option<&str>) {
    if let Some(value) = value.filter(|v| !v.is_empty()) {
        *field = Some(value.to_string());
    }
}

#[cfg(test)]
#[path = "case_tests.rs"]
mod case_tests;
