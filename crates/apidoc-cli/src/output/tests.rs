use super::*;
use apidoc_schemas::RefKey;
use std::cell::RefCell;
use std::rc::Rc;

/// Writer that keeps everything written for later inspection
#[derive(Clone, Default)]
struct SharedBuffer(Rc<RefCell<Vec<u8>>>);

impl SharedBuffer {
    fn contents(&self) -> String {
        String::from_utf8(self.0.borrow().clone()).unwrap()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn writer(format: OutputFormat, quiet: bool) -> (OutputWriter, SharedBuffer) {
    let buffer = SharedBuffer::default();
    let writer = OutputWriter::with_writer(format, false, quiet, Box::new(buffer.clone()));
    (writer, buffer)
}

fn cycle() -> ResolutionIssue {
    ResolutionIssue::ReferenceCycle {
        members: vec![RefKey::definition("A"), RefKey::definition("B")],
    }
}

#[test]
fn test_human_messages() {
    let (mut out, buffer) = writer(OutputFormat::Human, false);
    out.info("loading").unwrap();
    out.success("done").unwrap();
    out.warning("careful").unwrap();
    out.section("Rows").unwrap();

    assert_eq!(
        buffer.contents(),
        "INFO: loading\ndone\nWARNING: careful\n\n=== Rows ===\n"
    );
}

#[test]
fn test_quiet_keeps_warnings() {
    let (mut out, buffer) = writer(OutputFormat::Human, true);
    out.info("loading").unwrap();
    out.success("done").unwrap();
    out.section("Rows").unwrap();
    out.warning("careful").unwrap();

    assert_eq!(buffer.contents(), "WARNING: careful\n");
}

#[test]
fn test_machine_formats_only_write_data() {
    let (mut out, buffer) = writer(OutputFormat::Json, false);
    out.info("loading").unwrap();
    out.data(&serde_json::json!({"name": "Pet"})).unwrap();

    assert_eq!(buffer.contents(), r#"{"name":"Pet"}"#);
}

#[test]
fn test_table_alignment() {
    let (mut out, buffer) = writer(OutputFormat::Human, false);
    out.table(
        &["Field", "Type"],
        vec![
            vec!["id".to_string(), "integer".to_string()],
            vec!["[].name".to_string(), "string".to_string()],
        ],
    )
    .unwrap();

    let expected = "\
Field   │ Type
────────┼────────
id      │ integer
[].name │ string
";
    assert_eq!(buffer.contents(), expected);
}

#[test]
fn test_table_skipped_for_machine_output() {
    let (mut out, buffer) = writer(OutputFormat::Yaml, false);
    out.table(&["Field"], vec![vec!["id".to_string()]]).unwrap();
    assert!(buffer.contents().is_empty());
}

#[test]
fn test_issue_formatting_human() {
    let text = OutputFormat::Human.format_issues(&[cycle()]).unwrap();
    assert_eq!(
        text,
        "⚠️  1 resolution issue(s)\n1. reference cycle between #/definitions/A, #/definitions/B"
    );

    let empty = OutputFormat::Human.format_issues(&[]).unwrap();
    assert_eq!(empty, "✅ Every definition resolved");
}

#[test]
fn test_issue_formatting_json() {
    let text = OutputFormat::Json.format_issues(&[cycle()]).unwrap();
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(value[0]["kind"], "reference_cycle");
    assert_eq!(value[0]["members"][1], "#/definitions/B");
}

#[test]
fn test_spinner_disabled_without_terminal() {
    let (out, _) = writer(OutputFormat::Human, false);
    assert!(out.spinner("working").is_none());
}
