use super::*;

const DRAFT: &str = "---\ntitle: \"First Post\"\nlayout: post\n---\n\nBody text.\n";

// ========================================
// split_front_matter tests
// ========================================

#[test]
fn test_split_basic() {
    let (yaml, body) = split_front_matter(DRAFT).unwrap();
    assert_eq!(yaml, "title: \"First Post\"\nlayout: post");
    assert_eq!(body, "\nBody text.\n");
}

#[test]
fn test_split_without_front_matter() {
    assert!(split_front_matter("Just a body.\n").is_none());
}

#[test]
fn test_split_unterminated_front_matter() {
    assert!(split_front_matter("---\ntitle: x\n").is_none());
}

#[test]
fn test_split_closing_delimiter_at_eof() {
    let (yaml, body) = split_front_matter("---\ntitle: x\n---").unwrap();
    assert_eq!(yaml, "title: x");
    assert_eq!(body, "");
}

// ========================================
// stamp_date tests
// ========================================

#[test]
fn test_stamp_date_adds_key() {
    let stamped = stamp_date(DRAFT, "2026-08-04").unwrap();

    let (yaml, body) = split_front_matter(&stamped).unwrap();
    assert!(yaml.contains("date: 2026-08-04"));
    assert_eq!(body, "\nBody text.\n");
}

#[test]
fn test_stamp_date_overwrites_existing() {
    let draft = "---\ntitle: x\ndate: 2020-01-01\n---\nBody\n";
    let stamped = stamp_date(draft, "2026-08-04").unwrap();

    assert!(stamped.contains("date: 2026-08-04"));
    assert!(!stamped.contains("2020-01-01"));
}

#[test]
fn test_stamp_date_preserves_other_keys() {
    let stamped = stamp_date(DRAFT, "2026-08-04").unwrap();
    assert!(stamped.contains("title: First Post"));
    assert!(stamped.contains("layout: post"));
}

#[test]
fn test_stamp_date_without_front_matter() {
    let stamped = stamp_date("Plain body.\n", "2026-08-04").unwrap();

    let (yaml, body) = split_front_matter(&stamped).unwrap();
    assert_eq!(yaml.trim(), "date: 2026-08-04");
    assert_eq!(body, "Plain body.\n");
}

#[test]
fn test_stamp_date_invalid_yaml() {
    let draft = "---\n[not: a: mapping\n---\nBody\n";
    assert!(stamp_date(draft, "2026-08-04").is_err());
}

// ========================================
// title_of tests
// ========================================

#[test]
fn test_title_of_present() {
    assert_eq!(title_of(DRAFT), Some("First Post".to_string()));
}

#[test]
fn test_title_of_missing() {
    assert_eq!(title_of("---\nlayout: post\n---\nBody\n"), None);
    assert_eq!(title_of("No front matter\n"), None);
}

// ========================================
// published_filename tests
// ========================================

#[test]
fn test_published_filename() {
    assert_eq!(
        published_filename("2026-08-04", "first-post"),
        "2026-08-04-first-post.md"
    );
}
