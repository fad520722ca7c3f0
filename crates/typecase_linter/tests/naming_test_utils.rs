//! Test utilities for naming rules.
//!
//! Provides a small tree-sitter Java host: it parses a fixture, finds every
//! nominal type declaration and hands it to a rule. Fixtures mark expected
//! findings with `// violation` comments.
//!
//! ## Metrics Tracked
//! - **Detected**: expected findings the rule reported
//! - **Missed**: expected findings the rule did not report
//! - **Extra**: findings the rule reported that were not expected

#![allow(dead_code)]

use std::path::PathBuf;

use regex::Regex;
use tree_sitter::{Node, Parser};
use typecase_linter::{Declaration, DeclarationKind, Finding, Properties, Rule};

/// 1-based position of a declaration's name in a Java source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct JavaLocation {
    pub line: usize,
    pub column: usize,
}

/// An expected or actual finding at a specific line.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Violation {
    pub line: usize,
    pub name: Option<String>,
}

impl Violation {
    pub fn new(line: usize) -> Self {
        Self { line, name: None }
    }

    pub fn with_name(line: usize, name: &str) -> Self {
        Self {
            line,
            name: Some(name.to_string()),
        }
    }
}

/// Result of comparing rule output against fixture expectations.
#[derive(Debug, Clone, Default)]
pub struct TestMetrics {
    pub test_name: String,
    pub detected: Vec<Violation>,
    pub missed: Vec<Violation>,
    pub extra: Vec<Violation>,
}

impl TestMetrics {
    pub fn new(test_name: &str) -> Self {
        Self {
            test_name: test_name.to_string(),
            ..Default::default()
        }
    }

    /// No missed and no extra findings.
    pub fn is_perfect(&self) -> bool {
        self.missed.is_empty() && self.extra.is_empty()
    }

    pub fn print_report(&self) {
        println!("\n=== {} ===", self.test_name);
        println!(
            "Detected {} of {} expected, {} extra",
            self.detected.len(),
            self.detected.len() + self.missed.len(),
            self.extra.len()
        );
        for v in &self.missed {
            println!("  missed {}: {:?}", v.line, v.name);
        }
        for v in &self.extra {
            println!("  extra {}: {:?}", v.line, v.name);
        }
    }
}

/// Parse expected findings from `// violation` comments.
///
/// Format:
/// - `// violation 'message'` - finding on this line
/// - `// violation above 'message'` - finding on previous line
/// - `// violation below 'message'` - finding on next line
pub fn parse_expected_violations(source: &str) -> Vec<Violation> {
    let violation_re = Regex::new(r"//\s*violation(?:\s+(above|below))?").unwrap();

    let mut violations = vec![];
    for (line_idx, line) in source.lines().enumerate() {
        let line_num = line_idx + 1;
        let Some(caps) = violation_re.captures(line) else {
            continue;
        };

        let actual_line = match caps.get(1).map(|m| m.as_str()) {
            Some("above") => line_num.saturating_sub(1),
            Some("below") => line_num + 1,
            _ => line_num,
        };
        violations.push(Violation::new(actual_line));
    }

    violations
}

/// Parse rule properties from the fixture header comment.
///
/// ```java
/// /*
/// NamingPattern
/// tokens = CLASS_DEF
/// */
/// ```
pub fn parse_config_from_header(source: &str) -> Properties<'_> {
    let mut properties = Properties::new();

    let Some(start) = source.find("/*") else {
        return properties;
    };
    let Some(end) = source[start..].find("*/") else {
        return properties;
    };

    for line in source[start + 2..start + end].lines() {
        if let Some((key, value)) = line.split_once('=') {
            let value = value.trim();
            // Let the rule use its actual default
            if value.starts_with("(default)") {
                continue;
            }
            properties.insert(key.trim(), value);
        }
    }

    properties
}

fn declaration_kind(node_kind: &str) -> Option<DeclarationKind> {
    match node_kind {
        "class_declaration" => Some(DeclarationKind::Class),
        "interface_declaration" => Some(DeclarationKind::Interface),
        "enum_declaration" => Some(DeclarationKind::Enum),
        "record_declaration" => Some(DeclarationKind::Record),
        "annotation_type_declaration" => Some(DeclarationKind::Annotation),
        _ => None,
    }
}

/// Walk `node` and feed each type declaration to `rule`.
fn visit<R: Rule>(node: Node, source: &str, rule: &R, findings: &mut Vec<Finding<JavaLocation>>) {
    if let Some(kind) = declaration_kind(node.kind()) {
        let name_node = node.child_by_field_name("name");
        let name = name_node.and_then(|n| n.utf8_text(source.as_bytes()).ok());
        let position = name_node.unwrap_or(node).start_position();
        let location = JavaLocation {
            line: position.row + 1,
            column: position.column + 1,
        };
        rule.report(Declaration::new(name, kind, location), findings);
    }

    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        visit(child, source, rule, findings);
    }
}

/// Parse Java `source` and collect the findings `rule` raises.
pub fn run_rule<R: Rule>(rule: &R, source: &str) -> Vec<Finding<JavaLocation>> {
    let mut parser = Parser::new();
    parser
        .set_language(&tree_sitter_java::LANGUAGE.into())
        .expect("Java grammar should load");
    let tree = parser.parse(source, None).expect("parse should succeed");

    let mut findings = vec![];
    visit(tree.root_node(), source, rule, &mut findings);
    findings
}

/// Compare actual findings against expected ones by line.
pub fn compute_metrics(
    test_name: &str,
    actual: &[Finding<JavaLocation>],
    expected: &[Violation],
) -> TestMetrics {
    let mut metrics = TestMetrics::new(test_name);

    for exp in expected {
        if actual.iter().any(|a| a.location.line == exp.line) {
            metrics.detected.push(exp.clone());
        } else {
            metrics.missed.push(exp.clone());
        }
    }

    for act in actual {
        if !expected.iter().any(|e| e.line == act.location.line) {
            metrics
                .extra
                .push(Violation::with_name(act.location.line, &act.subject));
        }
    }

    metrics
}

/// Load a fixture from `tests/fixtures`.
pub fn fixture(file_name: &str) -> String {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(file_name);
    std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read {}: {e}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_expected_violations() {
        let source = r#"
class Foo {
    class HTTPServer {} // violation 'Class naming must use CamelCase'
    class Good {}
    // violation below
    class IOThing {}
}
"#;
        let violations = parse_expected_violations(source);
        assert_eq!(violations, vec![Violation::new(3), Violation::new(6)]);
    }

    #[test]
    fn test_parse_config_from_header() {
        let source = r#"/*
NamingPattern
tokens = CLASS_DEF, ENUM_DEF
other = (default)value
*/
package test;
"#;
        let config = parse_config_from_header(source);
        assert_eq!(config.get("tokens"), Some(&"CLASS_DEF, ENUM_DEF"));
        assert_eq!(config.get("other"), None);
    }
}
