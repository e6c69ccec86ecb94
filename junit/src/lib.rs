// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

//! In-memory model of test suites and test cases, serialized to the JUnit
//! XML dialect CI dashboards read.
//!
//! ```
//! use junit_xml::{to_xml_string, TestCase, TestSuite};
//!
//! let mut failed = TestCase::new("002-failed-test");
//! failed.add_failure_info(Some("Assertion FAILED"), None);
//!
//! let suite = TestSuite::new("base_test_1")
//!     .with_test_cases(vec![TestCase::new("001-passed-test"), failed]);
//!
//! let xml = to_xml_string(&[suite], false).unwrap();
//! assert!(xml.contains(r#"tests="2""#));
//! ```

pub mod config;
mod errors;
pub mod loader;
pub mod report;
pub mod utils;

pub use crate::config::SerializeOptions;
pub use crate::errors::{Error, Result};
pub use crate::loader::{suite_from_json, suites_from_json, suites_from_yaml};
pub use crate::report::{
    case::TestCase,
    element::{Element, Tag},
    suite::TestSuite,
    to_file, to_xml_string, JunitReport,
};
