//! Tests for migration jobs.

use super::*;
use crate::config::{Config, MigrationJobConfig};
use crate::store::NewTemplate;
use crate::template::TemplateCategory;
use tempfile::TempDir;

fn job(name: &str) -> MigrationJob {
    builtin_jobs().into_iter().find(|j| j.name == name).unwrap()
}

fn custom(name: &str, pattern: &str, replacement: &str) -> MigrationJobConfig {
    MigrationJobConfig {
        name: name.to_string(),
        description: String::new(),
        pattern: pattern.to_string(),
        replacement: replacement.to_string(),
    }
}

fn store_with(contents: &[&str]) -> (TempDir, TemplateStore) {
    let temp_dir = TempDir::new().unwrap();
    let store = TemplateStore::open(temp_dir.path())
        .unwrap()
        .with_validation(false);
    for (i, content) in contents.iter().enumerate() {
        store
            .create(NewTemplate {
                name: format!("Template {}", i + 1),
                description: String::new(),
                category: TemplateCategory::Other,
                content: content.to_string(),
                active: true,
            })
            .unwrap();
    }
    (temp_dir, store)
}

#[test]
fn test_placeholder_whitespace_tightens_all_tag_kinds() {
    let (content, count) = job("placeholder-whitespace")
        .apply("{{ order_number }} {{# line_items}}{{ product_name}}{{/ line_items }}")
        .unwrap()
        .unwrap();
    assert_eq!(
        content,
        "{{order_number}} {{#line_items}}{{product_name}}{{/line_items}}"
    );
    assert_eq!(count, 4);
}

#[test]
fn test_placeholder_whitespace_leaves_tight_content_alone() {
    let result = job("placeholder-whitespace")
        .apply("{{order_number}} {{#line_items}}{{/line_items}}")
        .unwrap();
    assert!(result.is_none());
}

#[test]
fn test_placeholder_whitespace_ignores_dotted_keys() {
    let result = job("placeholder-whitespace").apply("{{ order.number }}").unwrap();
    assert!(result.is_none());
}

#[test]
fn test_logo_max_height_adds_style() {
    let (content, count) = job("logo-max-height")
        .apply(r#"<img class="logo" src="a.png"><img class="logo" />"#)
        .unwrap()
        .unwrap();
    assert_eq!(
        content,
        r#"<img class="logo" src="a.png" style="max-height: 80px;"><img class="logo" style="max-height: 80px;" />"#
    );
    assert_eq!(count, 2);
}

#[test]
fn test_logo_max_height_skips_styled_and_other_images() {
    let result = job("logo-max-height")
        .apply(r#"<img class="logo" style="width: 10px"><img class="photo" src="b.png">"#)
        .unwrap();
    assert!(result.is_none());
}

#[test]
fn test_builtin_jobs_are_idempotent_on_their_output() {
    let input = r#"<img class="logo" src="a.png"> {{ order_number }}"#;
    for job in builtin_jobs() {
        if let Some((once, _)) = job.apply(input).unwrap() {
            assert!(job.apply(&once).unwrap().is_none(), "{} reapplied", job.name);
        }
    }
}

#[test]
fn test_non_idempotent_job_is_refused() {
    let job = MigrationJob::from_config(&custom("grow", "a", "aa")).unwrap();
    let err = job.apply("banana").unwrap_err();
    assert!(err.to_string().contains("not idempotent"));
}

#[test]
fn test_from_config_rejects_invalid_pattern() {
    let err = MigrationJob::from_config(&custom("bad", "(", "")).unwrap_err();
    assert!(err.to_string().contains("bad"));
}

#[test]
fn test_available_jobs_include_config_jobs() {
    let config = Config {
        migrations: vec![custom("rename-vessel", r"\{\{ship_name\}\}", "{{vessel_name}}")],
        ..Default::default()
    };
    let names: Vec<_> = available_jobs(&config)
        .unwrap()
        .into_iter()
        .map(|j| j.name)
        .collect();
    assert_eq!(
        names,
        vec!["placeholder-whitespace", "logo-max-height", "rename-vessel"]
    );
    assert!(find_job(&config, "rename-vessel").is_ok());
}

#[test]
fn test_config_job_cannot_shadow_builtin() {
    let config = Config {
        migrations: vec![custom("logo-max-height", "x", "y")],
        ..Default::default()
    };
    assert!(available_jobs(&config).is_err());
}

#[test]
fn test_find_unknown_job() {
    let err = find_job(&Config::default(), "nope").unwrap_err();
    assert!(err.to_string().contains("unknown migration 'nope'"));
}

#[test]
fn test_run_job_rewrites_changed_templates() {
    let (_dir, store) = store_with(&["{{ order_number }}", "{{bl_number}}"]);

    let report = run_job(&store, &job("placeholder-whitespace"), false).unwrap();

    assert!(!report.dry_run);
    assert_eq!(report.unchanged, 1);
    assert_eq!(report.changed.len(), 1);
    assert_eq!(report.changed[0].id, "TPL-001");
    assert_eq!(report.total_replacements(), 1);

    let updated = store.get("TPL-001").unwrap();
    assert_eq!(updated.template.content, "{{order_number}}");
}

#[test]
fn test_run_job_twice_changes_nothing_the_second_time() {
    let (_dir, store) = store_with(&["{{ order_number }}"]);
    let job = job("placeholder-whitespace");

    run_job(&store, &job, false).unwrap();
    let second = run_job(&store, &job, false).unwrap();

    assert!(second.changed.is_empty());
    assert_eq!(second.unchanged, 1);
}

#[test]
fn test_dry_run_writes_nothing() {
    let (_dir, store) = store_with(&["{{ order_number }}"]);
    let before = std::fs::read_to_string(store.get("TPL-001").unwrap().path).unwrap();

    let report = run_job(&store, &job("placeholder-whitespace"), true).unwrap();

    assert!(report.dry_run);
    assert_eq!(report.changed.len(), 1);
    let after = std::fs::read_to_string(store.get("TPL-001").unwrap().path).unwrap();
    assert_eq!(before, after);
}

#[test]
fn test_refused_run_writes_nothing() {
    let (_dir, store) = store_with(&["aaa", "banana"]);
    let job = MigrationJob::from_config(&custom("grow", "a", "aa")).unwrap();

    let err = run_job(&store, &job, false).unwrap_err();
    assert!(err.to_string().contains("TPL-001"));
    assert_eq!(store.get("TPL-001").unwrap().template.content, "aaa");
    assert_eq!(store.get("TPL-002").unwrap().template.content, "banana");
}

#[test]
fn test_run_job_refuses_to_unbalance_sections() {
    let (_dir, store) = store_with(&["{{#line_items}}x{{/line_items}}"]);
    let job = MigrationJob::from_config(&custom("drop-close", r"\{\{/line_items\}\}", "")).unwrap();

    let err = run_job(&store, &job, false).unwrap_err();
    assert!(err.to_string().contains("would break template TPL-001"));
    assert_eq!(
        store.get("TPL-001").unwrap().template.content,
        "{{#line_items}}x{{/line_items}}"
    );
}
