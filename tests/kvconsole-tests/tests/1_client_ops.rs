use anyhow::Result;
use kvconsole::action::{ActionKind, FieldName, GenericAction};
use kvconsole::display::Severity;
use kvconsole_tests::Console;
use serial_test::serial;

fn write_action(key: &str, value: &str) -> GenericAction {
    let mut action = GenericAction::new(ActionKind::Write);
    action
        .append(FieldName::Key, key)
        .append(FieldName::Value, value);
    action
}

#[serial]
#[test_log::test(tokio::test(flavor = "multi_thread"))]
async fn write_then_read_normalized_lines() -> Result<()> {
    let console = Console::new()?;
    let gateway = console.gateway();

    let out = gateway.process(&write_action("/foo/a", "1")).await;
    assert_eq!(out.severity, Severity::Success);
    assert_eq!(out.lines, vec!["OK"]);

    let mut read = GenericAction::new(ActionKind::Read);
    read.append(FieldName::Key, "/foo")
        .append(FieldName::Prefix, true);
    let out = gateway.process(&read).await;
    assert_eq!(out.severity, Severity::Success);
    assert_eq!(
        out.lines,
        vec![
            "OK",
            ".",
            "|-- /foo/a = 1",
            "\\---- [crev: 1, rev: 1, ver: 1, lease: 0]",
        ]
    );
    Ok(())
}

#[serial]
#[test_log::test(tokio::test(flavor = "multi_thread"))]
async fn empty_read_is_a_warning() -> Result<()> {
    let console = Console::new()?;

    let mut read = GenericAction::new(ActionKind::Read);
    read.append(FieldName::Key, "/nothing");
    let out = console.gateway().process(&read).await;
    assert_eq!(out.severity, Severity::Warning);
    assert_eq!(out.lines, vec!["cannot read anything"]);
    Ok(())
}

#[serial]
#[test_log::test(tokio::test(flavor = "multi_thread"))]
async fn remove_succeeds_and_key_is_gone() -> Result<()> {
    let console = Console::new()?;
    let gateway = console.gateway();

    gateway.process(&write_action("/foo/b", "2")).await;

    let mut remove = GenericAction::new(ActionKind::Remove);
    remove.append(FieldName::Key, "/foo/b");
    let out = gateway.process(&remove).await;
    assert_eq!(out.severity, Severity::Success);
    assert_eq!(out.lines, vec!["OK"]);

    let mut read = GenericAction::new(ActionKind::Read);
    read.append(FieldName::Key, "/foo/b");
    let out = gateway.process(&read).await;
    assert_eq!(out.severity, Severity::Warning);
    Ok(())
}

#[serial]
#[test_log::test(tokio::test(flavor = "multi_thread"))]
async fn write_with_prev_kv_reports_old_record() -> Result<()> {
    let console = Console::new()?;
    let gateway = console.gateway();

    gateway.process(&write_action("/dup", "old")).await;

    let mut write = write_action("/dup", "new");
    write.append(FieldName::PrevKv, true);
    let out = gateway.process(&write).await;
    assert_eq!(out.severity, Severity::Success);
    assert_eq!(
        out.lines,
        vec![
            "OK",
            ".",
            "|-- /dup = old",
            "\\---- [crev: 1, rev: 1, ver: 1, lease: 0]",
        ]
    );
    Ok(())
}

#[serial]
#[test_log::test(tokio::test(flavor = "multi_thread"))]
async fn false_boolean_is_dropped_from_query_but_kept_in_body() -> Result<()> {
    let console = Console::new()?;
    let gateway = console.gateway();

    let mut read = GenericAction::new(ActionKind::Read);
    read.append(FieldName::Key, "/foo")
        .append(FieldName::KeysOnly, false);
    gateway.process(&read).await;

    let query = console.env().last_read_query().unwrap();
    assert_eq!(query.get("key").map(String::as_str), Some("/foo"));
    assert!(!query.contains_key("keysOnly"));

    let mut write = write_action("/foo", "1");
    write.append(FieldName::PrevKv, false);
    gateway.process(&write).await;

    let body = console.env().last_write_body().unwrap();
    assert_eq!(body.get("prevKV"), Some(&serde_json::json!(false)));
    Ok(())
}

#[serial]
#[test_log::test(tokio::test(flavor = "multi_thread"))]
async fn backend_error_collapses_to_one_error_line() -> Result<()> {
    let console = Console::new()?;

    // no key supplied at all; the backend rejects with a structured body
    let out = console
        .gateway()
        .process(&GenericAction::new(ActionKind::Read))
        .await;
    assert_eq!(out.severity, Severity::Error);
    assert_eq!(out.lines, vec!["key is required"]);
    Ok(())
}
