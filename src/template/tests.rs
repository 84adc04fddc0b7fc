//! Tests for template file parsing, serialization, and patches.

use super::*;
use chrono::TimeZone;

const MINIMAL_TEMPLATE: &str = "---
id: TPL-001
name: Minimal
---
<p>{{order_number}}</p>
";

const FULL_TEMPLATE: &str = "---
id: TPL-002
name: Standard Bill of Lading
description: Ocean B/L with container schedule
category: bill_of_lading
active: false
created: 2026-03-01T09:00:00Z
updated: 2026-03-02T10:30:00Z
owner_team: logistics
---
<h1>B/L {{bl_number}}</h1>
{{#containers}}<tr><td>{{container_number}}</td></tr>{{/containers}}
";

#[test]
fn test_parse_minimal_template() {
    let template = TemplateFile::parse(MINIMAL_TEMPLATE).unwrap();
    assert_eq!(template.id(), "TPL-001");
    assert_eq!(template.frontmatter.name, "Minimal");
    assert_eq!(template.frontmatter.category, TemplateCategory::Other);
    assert!(template.frontmatter.active);
    assert!(template.frontmatter.description.is_empty());
    assert_eq!(template.content, "<p>{{order_number}}</p>\n");
}

#[test]
fn test_parse_full_template() {
    let template = TemplateFile::parse(FULL_TEMPLATE).unwrap();
    let fm = &template.frontmatter;
    assert_eq!(fm.id, "TPL-002");
    assert_eq!(fm.category, TemplateCategory::BillOfLading);
    assert!(!fm.active);
    assert_eq!(fm.description, "Ocean B/L with container schedule");
    assert!(fm.created.is_some());
    assert!(fm.updated.is_some());
    assert!(fm.extra.contains_key("owner_team"));
    assert!(template.content.starts_with("<h1>B/L {{bl_number}}</h1>"));
}

#[test]
fn test_round_trip_preserves_unknown_fields_and_content() {
    let template = TemplateFile::parse(FULL_TEMPLATE).unwrap();
    let text = template.to_file_string().unwrap();
    let reparsed = TemplateFile::parse(&text).unwrap();

    assert_eq!(reparsed.content, template.content);
    assert_eq!(
        reparsed.frontmatter.extra.get("owner_team"),
        Some(&serde_yaml::Value::String("logistics".to_string()))
    );
    assert_eq!(reparsed.frontmatter.category, TemplateCategory::BillOfLading);
}

#[test]
fn test_parse_crlf_preserves_content_line_endings() {
    let text = "---\r\nid: TPL-003\r\nname: Windows\r\n---\r\n<p>a</p>\r\n<p>b</p>\r\n";
    let template = TemplateFile::parse(text).unwrap();
    assert_eq!(template.id(), "TPL-003");
    assert_eq!(template.content, "<p>a</p>\r\n<p>b</p>\r\n");
}

#[test]
fn test_content_may_contain_horizontal_rules() {
    let text = "---\nid: TPL-004\nname: Rules\n---\n<p>top</p>\n---\n<p>bottom</p>\n";
    let template = TemplateFile::parse(text).unwrap();
    assert_eq!(template.content, "<p>top</p>\n---\n<p>bottom</p>\n");
}

#[test]
fn test_parse_empty_content() {
    let template = TemplateFile::parse("---\nid: TPL-005\nname: Empty\n---").unwrap();
    assert!(template.content.is_empty());
}

#[test]
fn test_closing_delimiter_must_be_whole_line() {
    let text = "---\nid: TPL-006\nname: Dashes\nnote: \"--- inline\"\n---\r\n<hr>\n";
    let template = TemplateFile::parse(text).unwrap();
    assert_eq!(template.frontmatter.name, "Dashes");
    assert_eq!(template.content, "<hr>\n");

    let err = TemplateFile::parse("---\nid: TPL-006\nname: x\n----\n<p></p>\n").unwrap_err();
    assert!(err.to_string().contains("missing closing"));
}

#[test]
fn test_opening_delimiter_must_be_whole_line() {
    let err = TemplateFile::parse("---id: TPL-001\n---\n").unwrap_err();
    assert!(err.to_string().contains("must start with '---'"));
}

#[test]
fn test_parse_missing_opening_delimiter() {
    let err = TemplateFile::parse("id: TPL-001\n").unwrap_err();
    assert!(err.to_string().contains("must start with '---'"));
}

#[test]
fn test_parse_missing_closing_delimiter() {
    let err = TemplateFile::parse("---\nid: TPL-001\nname: x\n").unwrap_err();
    assert!(err.to_string().contains("missing closing"));
}

#[test]
fn test_parse_invalid_category() {
    let text = "---\nid: TPL-001\nname: x\ncategory: manifest\n---\n";
    assert!(TemplateFile::parse(text).is_err());
}

#[test]
fn test_category_parse_variants() {
    assert_eq!(
        TemplateCategory::parse("purchase_order").unwrap(),
        TemplateCategory::PurchaseOrder
    );
    assert_eq!(
        TemplateCategory::parse("Bill-Of-Lading").unwrap(),
        TemplateCategory::BillOfLading
    );
    let err = TemplateCategory::parse("quote").unwrap_err();
    assert!(err.to_string().contains("sales_order"));
}

#[test]
fn test_category_display_matches_serde() {
    for category in TemplateCategory::ALL {
        let yaml = serde_yaml::to_string(&category).unwrap();
        assert_eq!(yaml.trim(), category.to_string());
    }
}

#[test]
fn test_apply_patch_sets_only_given_fields() {
    let mut template = TemplateFile::parse(MINIMAL_TEMPLATE).unwrap();
    let now = Utc.with_ymd_and_hms(2026, 5, 1, 12, 0, 0).unwrap();

    let changed = template.apply_patch(
        TemplatePatch {
            description: Some("Updated".to_string()),
            active: Some(false),
            ..Default::default()
        },
        now,
    );

    assert_eq!(changed, vec!["description", "active"]);
    assert_eq!(template.frontmatter.name, "Minimal");
    assert_eq!(template.frontmatter.description, "Updated");
    assert!(!template.frontmatter.active);
    assert_eq!(template.frontmatter.updated, Some(now));
    assert_eq!(template.content, "<p>{{order_number}}</p>\n");
}

#[test]
fn test_empty_patch_changes_nothing() {
    let mut template = TemplateFile::parse(MINIMAL_TEMPLATE).unwrap();
    let patch = TemplatePatch::default();
    assert!(patch.is_empty());

    let changed = template.apply_patch(patch, Utc::now());
    assert!(changed.is_empty());
    assert!(template.frontmatter.updated.is_none());
}
