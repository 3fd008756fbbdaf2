//! Markdown outline built from keywords and headings.

use core::fmt::Write;

use crate::markup::HeadingEntry;

/// Render a two-section outline: distinct keywords in the order given, then
/// the heading tree indented two spaces per level.
pub fn render_outline<'a, I>(keywords: I, headings: &[HeadingEntry]) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let mut out = String::from("# Document outline\n\n## Core concepts\n\n");

    let mut seen: Vec<&str> = Vec::new();
    for keyword in keywords {
        if seen.contains(&keyword) {
            continue;
        }
        seen.push(keyword);
        let _ = writeln!(out, "- {keyword}");
    }

    out.push_str("\n## Document structure\n\n");
    for heading in headings {
        let indent = "  ".repeat(usize::from(heading.level.saturating_sub(1)));
        let _ = writeln!(out, "{indent}- {}", heading.title);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn heading(level: u8, title: &str) -> HeadingEntry {
        HeadingEntry {
            level,
            title: title.to_owned(),
            source_offset: 0,
        }
    }

    #[test]
    fn renders_both_sections() {
        let headings = [heading(1, "Top"), heading(3, "Deep")];
        let outline = render_outline(["focus", "speed", "focus"], &headings);
        assert_eq!(
            outline,
            "# Document outline\n\n## Core concepts\n\n- focus\n- speed\n\n\
             ## Document structure\n\n- Top\n    - Deep\n"
        );
    }

    #[test]
    fn empty_inputs_keep_section_headers() {
        let outline = render_outline([], &[]);
        assert!(outline.contains("## Core concepts"));
        assert!(outline.contains("## Document structure"));
    }
}
