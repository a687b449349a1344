//! End-to-End CLI Tests for axionix

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use axionix_site::types::SiteContent;
use predicates::prelude::*;
use tempfile::TempDir;

/// Get a command pointing to the axionix binary, run from a scratch dir
fn axionix(dir: &TempDir) -> Command {
    let mut cmd = cargo_bin_cmd!("axionix");
    cmd.current_dir(dir.path());
    cmd
}

/// Write the built-in content, altered by `edit`, to `site.json`
fn write_json_content(dir: &TempDir, edit: impl FnOnce(&mut SiteContent)) {
    let mut content = SiteContent::axionix();
    edit(&mut content);
    let raw = serde_json::to_string_pretty(&content).expect("serialize content");
    std::fs::write(dir.path().join("site.json"), raw).expect("write content");
}

/// Built-in content with one nav anchor broken
const BROKEN_CONTENT: &str = r##"
[brand]
name = "AXIONIX"
title = "Axionix"

[[nav]]
label = "Home"
anchor = "home"

[[nav]]
label = "Careers"
anchor = "careers"

[nav_cta]
label = "Request a Survey"
href = "#contact"

[hero]
title_lines = ["Cargo Surveying"]
lead = "Independent surveys."
tagline = "Heavy, Air, Sea"

[hero.primary_cta]
label = "Request a Survey"
href = "#contact"

[hero.secondary_cta]
label = "View Services"
href = "#services"

[services]
heading = "Our Services"

[[services.offerings]]
title = "Heavy Vehicle Surveys"
description = "Condition checks."
icon_kind = "HeavyVehicle"

[process]
heading = "How It Works"

[[process.steps]]
order = 1
label = "Request"
description = "Call or email"

[about]
heading = "About"
body = "Survey firm."

[contact]
heading = "Request a Survey"
blurb = "Call us."

[contact.info]
phone = "+1234567890"
phone_display = "+1 (234) 567-890"
email = "ops@axionix.example"

[contact.form]
name_label = "Name"
name_placeholder = "Your name"
email_label = "Email"
email_placeholder = "you@example.com"
details_label = "Cargo Details"
details_placeholder = "Describe the cargo"
submit_label = "Send Request"
"##;

// ============================================
// Basic CLI Tests
// ============================================

mod cli_basics {
    use super::*;

    #[test]
    fn shows_help() {
        let dir = TempDir::new().expect("temp dir");
        axionix(&dir)
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("render"))
            .stdout(predicate::str::contains("check"))
            .stdout(predicate::str::contains("submit"));
    }

    #[test]
    fn shows_version() {
        let dir = TempDir::new().expect("temp dir");
        axionix(&dir)
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }
}

// ============================================
// Render & Check
// ============================================

mod render_and_check {
    use super::*;

    #[test]
    fn renders_builtin_page_to_default_dir() {
        let dir = TempDir::new().expect("temp dir");
        axionix(&dir)
            .arg("render")
            .assert()
            .success()
            .stdout(predicate::str::contains("index.html"));

        let html = std::fs::read_to_string(dir.path().join("dist/index.html")).expect("read page");
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("id=\"contact\""));
        assert!(html.contains("mailto:ops@axionix.example"));
    }

    #[test]
    fn render_honours_out_and_config() {
        let dir = TempDir::new().expect("temp dir");
        std::fs::write(
            dir.path().join("axionix.toml"),
            "[assets]\nstylesheet_href = \"/site.css\"\n",
        )
        .expect("write config");

        axionix(&dir)
            .args(["render", "--out", "public"])
            .assert()
            .success();

        let html = std::fs::read_to_string(dir.path().join("public/index.html")).expect("read page");
        assert!(html.contains("href=\"/site.css\""));
    }

    #[test]
    fn check_passes_for_builtin_content() {
        let dir = TempDir::new().expect("temp dir");
        axionix(&dir)
            .arg("check")
            .assert()
            .success()
            .stdout(predicate::str::contains("ok: 5 nav links, 3 services, 4 steps"));
    }

    #[test]
    fn check_fails_on_broken_anchor() {
        let dir = TempDir::new().expect("temp dir");
        std::fs::write(dir.path().join("site.toml"), BROKEN_CONTENT).expect("write content");

        axionix(&dir)
            .args(["check", "--content", "site.toml"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("#careers"));
    }

    #[test]
    fn render_refuses_broken_content() {
        let dir = TempDir::new().expect("temp dir");
        std::fs::write(dir.path().join("site.toml"), BROKEN_CONTENT).expect("write content");

        axionix(&dir)
            .args(["render", "--content", "site.toml"])
            .assert()
            .failure();
        assert!(!dir.path().join("dist/index.html").exists());
    }

    #[test]
    fn check_fails_on_wrong_service_count() {
        let dir = TempDir::new().expect("temp dir");
        write_json_content(&dir, |content| content.services.offerings.truncate(2));

        axionix(&dir)
            .args(["check", "--content", "site.json"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("expected 3 services, found 2"));
    }

    #[test]
    fn check_rejects_unknown_icon_kind() {
        let dir = TempDir::new().expect("temp dir");
        let content = BROKEN_CONTENT.replace("\"HeavyVehicle\"", "\"Rail\"");
        std::fs::write(dir.path().join("site.toml"), content).expect("write content");

        axionix(&dir)
            .args(["check", "--content", "site.toml"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("site.toml"))
            .stderr(predicate::str::contains("unknown icon kind `Rail`"));
    }
}

// ============================================
// Contact submission
// ============================================

mod submit {
    use super::*;

    #[test]
    fn discards_valid_request_by_default() {
        let dir = TempDir::new().expect("temp dir");
        axionix(&dir)
            .args([
                "submit",
                "--name",
                "Jane Doe",
                "--email",
                "jane@example.com",
                "--cargo-details",
                "40ft container, port delay",
            ])
            .assert()
            .success()
            .stdout(predicate::str::contains("Request captured"));
    }

    #[test]
    fn mailto_transport_prints_draft() {
        let dir = TempDir::new().expect("temp dir");
        axionix(&dir)
            .args([
                "submit",
                "--name",
                "Jane Doe",
                "--email",
                "jane@example.com",
                "--transport",
                "mailto",
            ])
            .assert()
            .success()
            .stdout(predicate::str::starts_with("mailto:ops@axionix.example?subject="));
    }

    #[test]
    fn mailto_refuses_invalid_contact_email() {
        let dir = TempDir::new().expect("temp dir");
        write_json_content(&dir, |content| {
            content.contact.info.email = "ops.axionix.example".into();
        });
        std::fs::write(dir.path().join("axionix.toml"), "content = \"site.json\"\n")
            .expect("write config");

        axionix(&dir)
            .args([
                "submit",
                "--name",
                "Jane Doe",
                "--email",
                "jane@example.com",
                "--transport",
                "mailto",
            ])
            .assert()
            .failure()
            .stdout(predicate::str::contains("mailto:").not())
            .stderr(predicate::str::contains("is not a valid address"));
    }

    #[test]
    fn empty_request_is_rejected_with_field_errors() {
        let dir = TempDir::new().expect("temp dir");
        axionix(&dir)
            .arg("submit")
            .assert()
            .failure()
            .stderr(predicate::str::contains("name: Please enter your name"))
            .stderr(predicate::str::contains("email: Please enter an email address"));
    }
}
