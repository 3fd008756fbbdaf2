use super::*;

#[test]
fn cross_reference_with_display_text() {
    let out = normalize("见 [[Note A|显示文字]] 。");
    assert_eq!(out.cross_references, vec!["Note A".to_owned()]);
    assert!(out.plain_text.contains("显示文字"));
    assert!(!out.plain_text.contains("Note A"));
    assert!(!out.plain_text.contains("[["));
}

#[test]
fn cross_reference_without_display_keeps_target() {
    let out = normalize("See [[Zettel]] and [[Zettel]] again.");
    assert_eq!(out.cross_references, vec!["Zettel".to_owned()]);
    assert_eq!(out.plain_text, "See Zettel and Zettel again.");
}

#[test]
fn code_is_removed_entirely() {
    let out = normalize("before\n```rust\nlet x = 1;\n```\nafter `inline` end");
    assert!(!out.plain_text.contains("let x"));
    assert!(!out.plain_text.contains("inline"));
    assert!(out.plain_text.contains("before"));
    assert!(out.plain_text.contains("after"));
    assert!(out.plain_text.contains("end"));
}

#[test]
fn images_links_and_tags() {
    let out = normalize("![cover](img.png) read <b>the</b> [guide](https://example.com) now");
    assert_eq!(out.plain_text, " read the guide now");
}

#[test]
fn emphasis_is_unwrapped() {
    let out = normalize("**bold** and *italic* and __strong__ and _soft_");
    assert_eq!(out.plain_text, "bold and italic and strong and soft");
}

#[test]
fn horizontal_rules_become_blank_lines() {
    let out = normalize("one\n\n***\n\ntwo\n---\nthree");
    assert!(!out.plain_text.contains("***"));
    assert!(!out.plain_text.contains("---"));
    assert_eq!(out.plain_text, "one\n\n\n\ntwo\n\nthree");
}

#[test]
fn headings_are_stripped_and_recorded() {
    let source = "# Title\nintro\n\n## Part 2  \nbody";
    let out = normalize(source);
    assert_eq!(out.plain_text, "Title\n\nintro\n\nPart 2  \n\nbody");
    assert_eq!(
        out.headings,
        vec![
            HeadingEntry {
                level: 1,
                title: "Title".to_owned(),
                source_offset: 0,
            },
            HeadingEntry {
                level: 2,
                title: "Part 2".to_owned(),
                source_offset: 15,
            },
        ]
    );
}

#[test]
fn seven_hashes_are_not_a_heading() {
    assert!(parse_headings("####### nope").is_empty());
}

#[test]
fn malformed_markup_passes_through() {
    let out = normalize("```\nunterminated fence [[open link ![alt](");
    assert!(out.plain_text.contains("unterminated fence"));
    assert!(out.plain_text.contains("[[open link"));
    assert!(out.cross_references.is_empty());
}
