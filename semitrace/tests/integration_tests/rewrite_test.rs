// tests/integration_tests/rewrite_test.rs
use super::common::{TRACED_MAIN, count_lines, create_test_file, removed_count};
use anyhow::Result;
use semitrace::{LogEntry, Mode, rewrite_file};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_off_then_on_cycle() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = create_test_file(temp_dir.path(), "main.c", TRACED_MAIN)?;

    rewrite_file(&path, Mode::Off)?;
    let disabled = fs::read_to_string(&path)?;
    assert!(disabled.contains("\n//    printf(\"boot\\n\");\n"));
    assert!(disabled.contains("\n//    FILE *log = fopen(\"log.txt\", \"w\");\n"));
    assert!(
        disabled.contains("\n    // printf(\"verbose\\n\");\n"),
        "Already commented lines stay as they are"
    );

    rewrite_file(&path, Mode::Off)?;
    assert_eq!(fs::read_to_string(&path)?, disabled, "off twice is the same as once");

    rewrite_file(&path, Mode::On)?;
    let enabled = fs::read_to_string(&path)?;
    assert!(enabled.contains("\n    printf(\"boot\\n\");\n"));
    assert!(enabled.contains("\n     printf(\"verbose\\n\");\n"));
    assert_eq!(count_lines(&enabled), count_lines(TRACED_MAIN));

    // Markers that sat at column 0 come back exactly where they were.
    rewrite_file(&path, Mode::Off)?;
    let redisabled = fs::read_to_string(&path)?;
    assert!(redisabled.contains("\n//    printf(\"boot\\n\");\n"));
    assert!(redisabled.contains("\n//    initialise_monitor_handles();\n"));
    Ok(())
}

#[test]
fn test_remove_keeps_disabled_calls() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = create_test_file(temp_dir.path(), "main.c", TRACED_MAIN)?;

    let report = rewrite_file(&path, Mode::Remove)?;
    let content = fs::read_to_string(&path)?;

    assert_eq!(
        content,
        "#include <stdio.h>\n\nint main(void)\n{\n//    initialise_monitor_handles();\n    // printf(\"verbose\\n\");\n    return 0;\n}\n"
    );
    assert_eq!(removed_count(&report), 3);
    assert_eq!(
        report.entries,
        vec![
            LogEntry::Echo(String::from("//    initialise_monitor_handles();")),
            LogEntry::Removed(String::from("    FILE *log = fopen(\"log.txt\", \"w\");")),
            LogEntry::Removed(String::from("    printf(\"boot\\n\");")),
            LogEntry::Echo(String::from("    // printf(\"verbose\\n\");")),
            LogEntry::Removed(String::from("    fclose(log);")),
        ]
    );
    Ok(())
}

#[test]
fn test_removeall_purges_every_standard_call() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = create_test_file(temp_dir.path(), "main.c", TRACED_MAIN)?;

    let report = rewrite_file(&path, Mode::RemoveAll)?;
    let content = fs::read_to_string(&path)?;

    assert_eq!(
        content,
        "#include <stdio.h>\n\nint main(void)\n{\n//    initialise_monitor_handles();\n    return 0;\n}\n"
    );
    assert_eq!(removed_count(&report), 4);
    assert_eq!(count_lines(&content), count_lines(TRACED_MAIN) - 4);

    // Nothing left to remove, init stays commented.
    let again = rewrite_file(&path, Mode::RemoveAll)?;
    assert_eq!(removed_count(&again), 0);
    assert_eq!(fs::read_to_string(&path)?, content);
    Ok(())
}

#[test]
fn test_crlf_file_keeps_crlf() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let crlf = TRACED_MAIN.replace('\n', "\r\n");
    let path = create_test_file(temp_dir.path(), "main.c", &crlf)?;

    let report = rewrite_file(&path, Mode::Off)?;
    let content = fs::read_to_string(&path)?;

    assert!(!report.mixed_newlines);
    assert!(content.contains("\r\n//    printf(\"boot\\n\");\r\n"));
    assert!(!content.replace("\r\n", "").contains('\n'), "No bare LF introduced");
    assert!(
        report.entries.iter().all(|entry| !entry.to_string().ends_with('\r')),
        "Echoed lines are shown without terminators"
    );
    Ok(())
}
