// Copyright Amazon Web Services, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

#![allow(dead_code)]

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::PathBuf;

use junit_xml::utils::writer::Writer;
use junit_xml::{TestCase, TestSuite};

pub fn read_from_resource_file(path: &str) -> String {
    let mut content = String::new();
    let mut reader = BufReader::new(File::open(get_full_path_for_resource_file(path)).unwrap());
    reader.read_to_string(&mut content).unwrap();

    content
}

pub fn get_full_path_for_resource_file(path: &str) -> String {
    let mut resource = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    resource.push(path);
    resource.display().to_string()
}

pub fn compare_write_buffer_with_file(
    expected_output_relative_file_path: &str,
    actual_output_writer: Writer,
) {
    let expected_output = read_from_resource_file(expected_output_relative_file_path);
    let actual_output = actual_output_writer.into_string().unwrap();
    pretty_assertions::assert_eq!(expected_output, actual_output)
}

pub fn init_logger() {
    let _ = simple_logger::init_with_level(log::Level::Warn);
}

/// The suite Jenkins documents as its reference JUnit input.
pub fn jenkins_suite() -> TestSuite {
    let mut failed = TestCase::new("002-failed-test")
        .with_classname("testdb.directory")
        .with_elapsed_sec(20.0);
    failed.add_failure_info(
        Some("Assertion FAILED: some failed assert"),
        Some("the output of the testcase"),
    );

    let mut errored = TestCase::new("003-errord-test")
        .with_classname("package.directory")
        .with_elapsed_sec(15.0);
    errored.add_error_info(
        Some("Assertion ERROR: some error assert"),
        Some("the output of the testcase"),
    );

    TestSuite::new("base_test_1")
        .with_hostname("localhost")
        .with_id(0)
        .with_package("testdb")
        .with_timestamp("2012-11-15T01:02:29")
        .with_property("assert-passed", 1)
        .with_test_cases(vec![
            TestCase::new("001-passed-test")
                .with_classname("testdb.directory")
                .with_elapsed_sec(10.0),
            failed,
            errored,
            TestCase::new("003-passed-test")
                .with_classname("testdb.directory")
                .with_elapsed_sec(10.0)
                .with_stdout("I am system output")
                .with_stderr("I am the error output"),
        ])
}
