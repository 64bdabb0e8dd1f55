use linestrip::{LineRange, RangePolicy, StripError, StripOptions, Stripper, WriteMode};
use pretty_assertions::assert_eq;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn numbered(n: usize) -> String {
    (1..=n).map(|i| format!("L{}\n", i)).collect()
}

fn options_for(path: &Path) -> StripOptions {
    StripOptions {
        path: path.to_path_buf(),
        ..StripOptions::default()
    }
}

fn write_target(dir: &TempDir, content: &str) -> PathBuf {
    let path = dir.path().join("liminal library.html");
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_eight_hundred_line_file() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let path = write_target(&dir, &numbered(800));

    let report = Stripper::new(options_for(&path)).run()?;
    assert_eq!(report.original_lines, 800);
    assert_eq!(report.removed_lines, 713);
    assert_eq!(report.kept_lines, 87);

    let result = fs::read_to_string(&path)?;
    let lines: Vec<&str> = result.lines().collect();
    assert_eq!(lines.len(), 87);

    let expected: Vec<String> = (1..=19).chain(733..=800).map(|i| format!("L{}", i)).collect();
    assert_eq!(lines, expected);

    Ok(())
}

#[test]
fn test_exact_splice_of_arbitrary_lines() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let original: Vec<String> = (0..1000).map(|i| format!("<p data-i=\"{}\">{}</p>\n", i, i * 7)).collect();
    let path = write_target(&dir, &original.concat());

    Stripper::new(options_for(&path)).run()?;

    let expected = [&original[..19], &original[732..]].concat().concat();
    assert_eq!(fs::read_to_string(&path)?, expected);

    Ok(())
}

#[test]
fn test_second_run_hits_short_file_error() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let path = write_target(&dir, &numbered(800));
    let stripper = Stripper::new(options_for(&path));

    stripper.run()?;
    let after_first = fs::read_to_string(&path)?;

    let err = stripper.run().unwrap_err();
    match err {
        StripError::OutOfRange { total, end, .. } => {
            assert_eq!(total, 87);
            assert_eq!(end, 732);
        }
        other => panic!("unexpected error: {:?}", other),
    }
    assert_eq!(fs::read_to_string(&path)?, after_first);

    Ok(())
}

#[test]
fn test_clamp_keeps_first_nineteen_lines() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let path = write_target(&dir, &numbered(87));

    let options = StripOptions {
        policy: RangePolicy::Clamp,
        ..options_for(&path)
    };
    let report = Stripper::new(options).run()?;

    assert_eq!(report.removed_lines, 68);
    assert_eq!(fs::read_to_string(&path)?, numbered(19));

    Ok(())
}

#[test]
fn test_missing_file_is_not_created() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("liminal library.html");

    let err = Stripper::new(options_for(&path)).run().unwrap_err();

    assert!(matches!(err, StripError::NotFound { .. }));
    assert!(err.to_string().contains("not found"));
    assert!(!path.exists());
}

#[test]
fn test_utf8_and_crlf_preserved() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let mut content = String::new();
    content.push_str("<title>Liminal Bibliothèque 📚</title>\r\n");
    for i in 2..=740 {
        content.push_str(&format!("línea {} — ✓\n", i));
    }
    content.push_str("終わり");
    let path = write_target(&dir, &content);

    Stripper::new(options_for(&path)).run()?;

    let lines: Vec<&str> = content.split_inclusive('\n').collect();
    let expected = [&lines[..19], &lines[732..]].concat().concat();
    assert_eq!(fs::read(&path)?, expected.as_bytes());
    assert!(expected.starts_with("<title>Liminal Bibliothèque 📚</title>\r\n"));
    assert!(expected.ends_with("línea 740 — ✓\n終わり"));

    Ok(())
}

#[test]
fn test_invalid_utf8_leaves_file_alone() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("liminal library.html");
    let mut bytes = numbered(800).into_bytes();
    bytes.extend_from_slice(b"\xc3\x28\n");
    fs::write(&path, &bytes).unwrap();

    let err = Stripper::new(options_for(&path)).run().unwrap_err();

    assert!(matches!(err, StripError::Encoding { .. }));
    assert_eq!(fs::read(&path).unwrap(), bytes);
}

#[test]
fn test_in_place_mode_matches_atomic() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let atomic = dir.path().join("a.html");
    let in_place = dir.path().join("b.html");
    fs::write(&atomic, numbered(900))?;
    fs::write(&in_place, numbered(900))?;

    Stripper::new(options_for(&atomic)).run()?;
    Stripper::new(StripOptions {
        write_mode: WriteMode::InPlace,
        ..options_for(&in_place)
    })
    .run()?;

    assert_eq!(fs::read_to_string(&atomic)?, fs::read_to_string(&in_place)?);
    Ok(())
}

#[test]
fn test_custom_range() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let path = write_target(&dir, "<html>\n<style>\nbody {}\n</style>\n<body></body>\n");

    let report = linestrip::strip_file(StripOptions {
        range: "2-4".parse::<LineRange>()?,
        ..options_for(&path)
    })?;

    assert_eq!(report.kept_lines, 2);
    assert_eq!(fs::read_to_string(&path)?, "<html>\n<body></body>\n");
    Ok(())
}

#[test]
fn test_preview_does_not_write() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let content = numbered(800);
    let path = write_target(&dir, &content);

    let preview = Stripper::new(options_for(&path)).preview()?;

    assert_eq!(preview.report.removed_lines, 713);
    assert_eq!(preview.before.as_deref(), Some("L19"));
    assert_eq!(preview.first_removed.as_deref(), Some("L20"));
    assert_eq!(preview.last_removed.as_deref(), Some("L732"));
    assert_eq!(preview.after.as_deref(), Some("L733"));
    assert_eq!(fs::read_to_string(&path)?, content);
    Ok(())
}

#[cfg(unix)]
#[test]
fn test_symlinked_target_strips_real_file() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let real = dir.path().join("real.html");
    let link = dir.path().join("liminal library.html");
    fs::write(&real, numbered(800))?;
    std::os::unix::fs::symlink(&real, &link)?;

    Stripper::new(options_for(&link)).run()?;

    assert!(fs::symlink_metadata(&link)?.file_type().is_symlink());
    assert_eq!(fs::read_to_string(&real)?.lines().count(), 87);
    Ok(())
}
