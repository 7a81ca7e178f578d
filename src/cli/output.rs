//! Output formatting utilities

use crate::application::Progress;
use crate::infrastructure::Profile;
use pulldown_cmark::{html, Parser};

/// Format the profile listing, marking the default entry
pub fn format_profile_list(profiles: &[(String, Profile)]) -> String {
    if profiles.is_empty() {
        return "No profiles found".to_string();
    }

    let mut output = String::new();
    for (name, profile) in profiles {
        if profile.default {
            output.push_str(&format!("{} (default)\n", name));
        } else {
            output.push_str(&format!("{}\n", name));
        }
    }
    output
}

/// Format one profile's settings for display
pub fn format_profile(name: &str, profile: &Profile) -> String {
    format!(
        "[{}]\nagent-id = {}\ncorp-id = {}\ncorp-secret = {}\ndefault = {}\n",
        name, profile.agent_id, profile.corp_id, profile.corp_secret, profile.default
    )
}

/// Format the header columns of a sheet, one per line
pub fn format_columns(columns: &[String]) -> String {
    if columns.is_empty() {
        return "No columns found".to_string();
    }

    let mut output = String::new();
    for column in columns {
        output.push_str(&format!("{}\n", column));
    }
    output
}

/// One progress line of a running broadcast
pub fn format_progress(progress: &Progress) -> String {
    format!(
        "{} sent, {}/{} ({:.0}%)",
        progress.recipient, progress.position, progress.total, progress.percent
    )
}

/// Render a Markdown preview block to HTML
pub fn render_html(markdown: &str) -> String {
    let parser = Parser::new(markdown);
    let mut output = String::new();
    html::push_html(&mut output, parser);
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(default: bool) -> Profile {
        Profile {
            agent_id: "1000002".to_string(),
            corp_id: "ww0123".to_string(),
            corp_secret: "secret".to_string(),
            default,
        }
    }

    #[test]
    fn test_format_empty_profile_list() {
        let output = format_profile_list(&[]);
        assert_eq!(output, "No profiles found");
    }

    #[test]
    fn test_format_profile_list_marks_default() {
        let profiles = vec![
            ("home".to_string(), profile(false)),
            ("work".to_string(), profile(true)),
        ];

        let output = format_profile_list(&profiles);
        assert!(output.contains("home\n"));
        assert!(output.contains("work (default)\n"));
    }

    #[test]
    fn test_format_profile_shows_fields() {
        let output = format_profile("work", &profile(true));
        assert!(output.contains("[work]"));
        assert!(output.contains("agent-id = 1000002"));
        assert!(output.contains("default = true"));
    }

    #[test]
    fn test_format_columns() {
        let columns = vec!["Name".to_string(), "Phone".to_string()];
        let output = format_columns(&columns);
        assert_eq!(output, "Name\nPhone\n");
    }

    #[test]
    fn test_format_empty_columns() {
        assert_eq!(format_columns(&[]), "No columns found");
    }

    #[test]
    fn test_format_progress_line() {
        let progress = Progress {
            position: 2,
            total: 4,
            recipient: "alice".to_string(),
            percent: 50.0,
        };

        assert_eq!(format_progress(&progress), "alice sent, 2/4 (50%)");
    }

    #[test]
    fn test_render_html_heading_and_quote() {
        let rendered = render_html("###### Notice\n\n> **bold**: text");
        assert!(rendered.contains("<h6>Notice</h6>"));
        assert!(rendered.contains("<blockquote>"));
        assert!(rendered.contains("<strong>bold</strong>"));
    }
}
