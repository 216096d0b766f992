use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::CliTest;

fn setup_site(test: &CliTest) -> Result<()> {
    test.write_file(
        "index.html",
        r#"<!doctype html>
<html>
  <nav>
    <a href="/" data-i18n="nav.home">Home</a>
    <a href="/about" data-i18n="nav.about">About</a>
  </nav>
</html>
"#,
    )?;
    test.write_file(
        "tr.json",
        r#"{
  "nav": {
    "home": "Anasayfa",
    "about": "Hakkımızda",
    "contact": "İletişim"
  },
  "footer": {
    "copy": "©"
  }
}"#,
    )?;
    test.write_file(
        "en.json",
        r#"{
  "nav": {
    "home": "Home",
    "about": "About",
    "contact": "Contact"
  },
  "footer": {
    "copy": "©"
  }
}"#,
    )
}

#[test]
fn test_prune_with_defaults() -> Result<()> {
    let test = CliTest::new()?;
    setup_site(&test)?;

    assert_cmd_snapshot!(test.command(), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Pruning complete! Output files: tr_cleaned.json, en_cleaned.json

    ----- stderr -----
    ");

    assert_eq!(
        test.read_json("en_cleaned.json")?,
        json!({"nav": {"home": "Home", "about": "About"}})
    );
    assert_eq!(
        test.read_file("tr_cleaned.json")?,
        "{\n  \"nav\": {\n    \"home\": \"Anasayfa\",\n    \"about\": \"Hakkımızda\"\n  }\n}\n"
    );
    Ok(())
}

#[test]
fn test_prune_explicit_root_and_files() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("site/pages/a.html", r#"<p data-i18n="a.b"></p>"#)?;
    test.write_file("site/pages/b.htm", r#"<p data-i18n="a.b"></p><p data-i18n="c"></p>"#)?;
    test.write_file("site/locales/de.json", r#"{"a": {"b": "B", "x": "X"}, "c": "C"}"#)?;
    test.write_file("site/locales/fr.json", r#"{"a": {"x": "X"}}"#)?;

    let mut cmd = test.command();
    cmd.args(["site", "locales/de.json", "locales/fr.json", "--verbose"]);
    assert_cmd_snapshot!(cmd, @r"
    success: true
    exit_code: 0
    ----- stdout -----
    Scanned 2 markup files, found 2 referenced keys
      locales/de.json: kept 2 of 3, removed 1
      locales/fr.json: kept 0 of 1, removed 1
        note: a.b is referenced but not defined
        note: c is referenced but not defined
    ✓ Pruning complete! Output files: locales/de_cleaned.json, locales/fr_cleaned.json

    ----- stderr -----
    ");

    assert_eq!(
        test.read_json("site/locales/de_cleaned.json")?,
        json!({"a": {"b": "B"}, "c": "C"})
    );
    assert_eq!(test.read_json("site/locales/fr_cleaned.json")?, json!({}));
    Ok(())
}

#[test]
fn test_prune_without_markup_yields_empty_outputs() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("tr.json", r#"{"nav": {"home": "Anasayfa"}}"#)?;
    test.write_file("en.json", r#"{"nav": {"home": "Home"}}"#)?;

    assert_cmd_snapshot!(test.command(), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Pruning complete! Output files: tr_cleaned.json, en_cleaned.json

    ----- stderr -----
    ");

    assert_eq!(test.read_json("tr_cleaned.json")?, json!({}));
    assert_eq!(test.read_json("en_cleaned.json")?, json!({}));
    Ok(())
}

#[test]
fn test_prune_dry_run() -> Result<()> {
    let test = CliTest::new()?;
    setup_site(&test)?;

    let mut cmd = test.command();
    cmd.arg("--dry-run");
    assert_cmd_snapshot!(cmd, @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Dry run complete, nothing written. Would write: tr_cleaned.json, en_cleaned.json

    ----- stderr -----
    ");

    assert!(!test.exists("tr_cleaned.json"));
    assert!(!test.exists("en_cleaned.json"));
    Ok(())
}

#[test]
fn test_prune_uses_config_file() -> Result<()> {
    let test = CliTest::new()?;
    setup_site(&test)?;
    test.write_file(
        "contact.html",
        r#"<input data-i18n-content="nav.contact"><p data-i18n="nav.home"></p>"#,
    )?;
    test.write_file(
        ".keyprune.json",
        r#"{
  "attributes": ["data-i18n", "data-i18n-content"],
  "keepKeys": ["footer.copy"],
  "ignores": ["index.html"],
  "outputSuffix": ".min"
}"#,
    )?;

    assert_cmd_snapshot!(test.command(), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Pruning complete! Output files: tr.min.json, en.min.json

    ----- stderr -----
    ");

    assert_eq!(
        test.read_json("en.min.json")?,
        json!({"nav": {"home": "Home", "contact": "Contact"}, "footer": {"copy": "©"}})
    );
    Ok(())
}

#[test]
fn test_prune_refuses_to_overwrite_an_input() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("index.html", r#"<p data-i18n="k"></p>"#)?;
    test.write_file("a.json", r#"{"k": "A"}"#)?;
    test.write_file("a_cleaned.json", r#"{"k": "ORIGINAL", "y": "Y"}"#)?;

    let mut cmd = test.command();
    cmd.args([".", "a.json", "a_cleaned.json"]);
    assert_cmd_snapshot!(cmd, @r"
    success: false
    exit_code: 2
    ----- stdout -----

    ----- stderr -----
    Error: Output file ./a_cleaned.json would overwrite an input file; choose different locale files or another suffix
    ");

    assert_eq!(
        test.read_json("a_cleaned.json")?,
        json!({"k": "ORIGINAL", "y": "Y"})
    );
    assert!(!test.exists("a_cleaned_cleaned.json"));
    Ok(())
}

#[test]
fn test_prune_missing_locale_file_fails() -> Result<()> {
    let test = CliTest::new()?;
    setup_site(&test)?;
    std::fs::remove_file(test.root().join("en.json"))?;

    assert_cmd_snapshot!(test.command(), @r"
    success: false
    exit_code: 2
    ----- stdout -----

    ----- stderr -----
    Error: Failed to read translation file: ./en.json: No such file or directory (os error 2)
    ");

    assert!(!test.exists("tr_cleaned.json"));
    Ok(())
}

#[test]
fn test_prune_malformed_locale_file_fails() -> Result<()> {
    let test = CliTest::new()?;
    setup_site(&test)?;
    test.write_file("tr.json", r#"{"nav": }"#)?;

    assert_cmd_snapshot!(test.command(), @r"
    success: false
    exit_code: 2
    ----- stdout -----

    ----- stderr -----
    Error: Failed to parse translation file: ./tr.json: expected value at line 1 column 9
    ");

    assert!(!test.exists("tr_cleaned.json"));
    assert!(!test.exists("en_cleaned.json"));
    Ok(())
}

#[test]
fn test_prune_unreadable_markup_fails() -> Result<()> {
    let test = CliTest::new()?;
    setup_site(&test)?;
    std::fs::write(test.root().join("broken.html"), [0xc3, 0x28, 0xff])?;

    assert_cmd_snapshot!(test.command(), @r"
    success: false
    exit_code: 2
    ----- stdout -----

    ----- stderr -----
    Error: Failed to read markup file: ./broken.html: stream did not contain valid UTF-8
    ");

    assert!(!test.exists("en_cleaned.json"));
    Ok(())
}
