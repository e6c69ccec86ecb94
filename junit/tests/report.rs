// Copyright Amazon Web Services, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

pub(crate) mod utils;

#[cfg(test)]
mod report_tests {
    use crate::utils::{
        compare_write_buffer_with_file, init_logger, jenkins_suite, read_from_resource_file,
    };
    use junit_xml::utils::writer::Writer;
    use junit_xml::{
        suites_from_yaml, to_file, to_xml_string, JunitReport, SerializeOptions, TestCase,
        TestSuite,
    };
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn jenkins_reference_report() {
        init_logger();
        let mut writer = Writer::in_memory();
        to_file(&mut writer, &[jenkins_suite()], true).unwrap();
        compare_write_buffer_with_file("tests/resources/jenkins_report.xml", writer);
    }

    #[test]
    fn yaml_results_render_the_same_report() -> junit_xml::Result<()> {
        let suites = suites_from_yaml(&read_from_resource_file(
            "tests/resources/jenkins_report.yaml",
        ))?;
        assert_eq!(suites, vec![jenkins_suite()]);
        assert_eq!(
            to_xml_string(&suites, true)?,
            read_from_resource_file("tests/resources/jenkins_report.xml")
        );
        Ok(())
    }

    #[test]
    fn writes_report_to_file() -> junit_xml::Result<()> {
        let path = std::env::temp_dir().join(format!("junit-xml-{}.xml", std::process::id()));
        let mut writer = Writer::create(&path)?;
        JunitReport::new(&[jenkins_suite()]).serialize(&mut writer)?;

        let written = writer.into_string()?;
        std::fs::remove_file(&path)?;
        assert_eq!(
            written,
            read_from_resource_file("tests/resources/jenkins_report.xml")
        );
        Ok(())
    }

    #[rstest]
    #[case(true)]
    #[case(false)]
    fn empty_report_has_no_aggregate_attributes(#[case] pretty_print: bool) -> junit_xml::Result<()> {
        let xml = to_xml_string(&[], pretty_print)?;
        assert!(xml.contains("<testsuites/>"));
        assert!(!xml.contains("<testsuite "));
        assert!(!xml.contains("tests="));
        assert!(!xml.contains("failures="));
        assert!(!xml.contains("errors="));
        Ok(())
    }

    #[rstest]
    #[case(0, 0, 0)]
    #[case(3, 0, 0)]
    #[case(5, 2, 1)]
    #[case(4, 4, 4)]
    fn rendered_counts_match_the_cases(
        #[case] tests: usize,
        #[case] failures: usize,
        #[case] errors: usize,
    ) -> junit_xml::Result<()> {
        let cases = (0..tests)
            .map(|i| {
                let mut case = TestCase::new(format!("case-{i}"));
                if i < failures {
                    case.add_failure_info(Some("failed"), None);
                }
                if i < errors {
                    case.add_error_info(None, Some("errored"));
                }
                case
            })
            .collect();
        let suite = TestSuite::new("counted").with_test_cases(cases);

        let xml = to_xml_string(&[suite], false)?;
        assert!(xml.contains(&format!(
            r#"<testsuite name="counted" failures="{failures}" errors="{errors}" tests="{tests}""#
        )));
        assert_eq!(xml.matches("<testcase ").count(), tests);
        assert_eq!(xml.matches("<failure ").count(), failures);
        assert_eq!(xml.matches("<error ").count(), errors);
        Ok(())
    }

    #[test]
    fn tab_indented_output_without_declaration() -> junit_xml::Result<()> {
        let options = SerializeOptions::default()
            .indent(b'\t', 1)
            .xml_declaration(false);
        let suites = vec![TestSuite::new("tabs").with_test_cases(vec![TestCase::new("only")])];

        let xml = JunitReport::from(&suites).with_options(options).to_xml_string()?;
        assert_eq!(
            xml,
            "<testsuites>\n\t<testsuite name=\"tabs\" failures=\"0\" errors=\"0\" tests=\"1\">\n\t\t<testcase name=\"only\"/>\n\t</testsuite>\n</testsuites>\n"
        );
        Ok(())
    }

    #[test]
    fn invalid_characters_fall_back_to_compact_output() -> junit_xml::Result<()> {
        init_logger();
        let mut case = TestCase::new("control");
        case.add_failure_info(Some("escape \u{1b}[31m red"), None);
        let suites = vec![TestSuite::new("ansi").with_test_cases(vec![case])];

        let pretty = to_xml_string(&suites, true)?;
        assert_eq!(pretty, to_xml_string(&suites, false)?);
        assert!(!pretty.contains('\n'));
        Ok(())
    }
}
