//! Builds test suites from the JSON or YAML documents a test runner hands
//! over. Documents mirror the serde shape of [`TestSuite`] and [`TestCase`]:
//!
//! ```json
//! [{ "name": "base_test_1",
//!    "test_cases": [{ "name": "001-passed-test", "elapsed_sec": 10.0 }] }]
//! ```
//!
//! [`TestCase`]: crate::TestCase

use serde_json::Value;

use crate::{report::suite::TestSuite, Error};

const SUITES_NOT_A_LIST: &str = "test suites must be a list of test suites";
const CASES_NOT_A_LIST: &str = "test cases must be a list of test cases";

pub fn suites_from_json(content: &str) -> crate::Result<Vec<TestSuite>> {
    checked_suites(serde_json::from_str(content)?)?
        .into_iter()
        .map(|suite| -> crate::Result<TestSuite> { Ok(serde_json::from_value(suite)?) })
        .collect()
}

pub fn suites_from_yaml(content: &str) -> crate::Result<Vec<TestSuite>> {
    let value = serde_yaml::from_str::<serde_yaml::Value>(content)?;
    checked_suites(serde_json::to_value(value)?)?
        .into_iter()
        .map(|suite| -> crate::Result<TestSuite> {
            Ok(serde_yaml::from_value(serde_yaml::to_value(suite)?)?)
        })
        .collect()
}

pub fn suite_from_json(content: &str) -> crate::Result<TestSuite> {
    Ok(serde_json::from_value(checked_suite(
        serde_json::from_str(content)?,
    )?)?)
}

fn checked_suites(value: Value) -> crate::Result<Vec<Value>> {
    match value {
        Value::Array(suites) => suites.into_iter().map(checked_suite).collect(),
        Value::Null => Ok(vec![]),
        _ => Err(Error::Construction(String::from(SUITES_NOT_A_LIST))),
    }
}

fn checked_suite(mut value: Value) -> crate::Result<Value> {
    if let Some(suite) = value.as_object_mut() {
        match suite.get("test_cases") {
            Some(Value::Null) => {
                suite.remove("test_cases");
            }
            None | Some(Value::Array(_)) => {}
            Some(_) => return Err(Error::Construction(String::from(CASES_NOT_A_LIST))),
        }

        // property values are written as strings whatever their source type
        if let Some(Value::Object(properties)) = suite.get_mut("properties") {
            for value in properties.values_mut() {
                if !value.is_string() {
                    *value = Value::String(value.to_string());
                }
            }
        }
    }

    Ok(value)
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod loader_tests;
