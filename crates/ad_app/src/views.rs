use ad_core::{classify, partition, Article, Provenance};
use chrono::{DateTime, NaiveDate};

pub const SCRAPED_TITLE: &str = "Scraped Articles";
pub const MANUAL_TITLE: &str = "Manual Articles";
pub const SCRAPED_EMPTY: &str = "No scraped articles yet. Run the scrape command to fetch some.";
pub const MANUAL_EMPTY: &str = "No manual articles yet. Use the create command to add one.";

const PREVIEW_CHARS: usize = 120;

/// Dashboard tab selecting which subset to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    All,
    Scraped,
    Manual,
}

/// Render the partitioned dashboard for one tab.
pub fn render_dashboard(articles: &[Article], tab: Tab) -> String {
    let (scraped, manual) = partition(articles);
    let mut out = format!(
        "All Articles ({}) | Scraped ({}) | Manual ({})\n",
        articles.len(),
        scraped.len(),
        manual.len()
    );
    if matches!(tab, Tab::All | Tab::Scraped) {
        out.push('\n');
        out.push_str(&render_section(SCRAPED_TITLE, &scraped, SCRAPED_EMPTY));
    }
    if matches!(tab, Tab::All | Tab::Manual) {
        out.push('\n');
        out.push_str(&render_section(MANUAL_TITLE, &manual, MANUAL_EMPTY));
    }
    out
}

fn render_section(title: &str, articles: &[&Article], empty_message: &str) -> String {
    let mut out = format!("{} ({} articles)\n", title, articles.len());
    if articles.is_empty() {
        out.push_str(&format!("  {empty_message}\n"));
        return out;
    }
    for article in articles {
        out.push_str(&render_card(article));
    }
    out
}

/// One list entry: provenance badge, title, id, a metadata line and a short
/// content preview. The id makes the entry addressable by the show, edit and
/// delete commands.
pub fn render_card(article: &Article) -> String {
    let mut out = format!(
        "[{}] {} ({})\n",
        provenance_badge(article),
        article.title,
        article.id
    );
    out.push_str(&format!(
        "  {} · {} · status: {}\n",
        format_card_date(article.published_date.as_deref()),
        article.source,
        article.status
    ));
    out.push_str(&format!("  {}\n", content_preview(&article.content)));
    out
}

/// The full record: badges, metadata, original URL and the whole content.
pub fn render_detail(article: &Article) -> String {
    let mut out = format!(
        "[{}] [{}]\n{}\n",
        provenance_badge(article),
        article.status,
        article.title
    );
    out.push_str(&format!(
        "{} · {}\n",
        format_detail_date(article.published_date.as_deref()),
        article.source
    ));
    out.push_str(&format!("{}\n\n", article.url));
    out.push_str(&article.content);
    out.push('\n');
    out
}

fn provenance_badge(article: &Article) -> &'static str {
    match classify(article) {
        Provenance::Scraped => "Scraped",
        Provenance::Manual => "Manual",
    }
}

fn content_preview(content: &str) -> String {
    if content.is_empty() {
        return "No content available".to_string();
    }
    let preview: String = content.chars().take(PREVIEW_CHARS).collect();
    if content.chars().count() > PREVIEW_CHARS {
        format!("{preview}...")
    } else {
        preview
    }
}

pub fn format_card_date(raw: Option<&str>) -> String {
    format_date(raw, "%b %-d, %Y", "No date")
}

pub fn format_detail_date(raw: Option<&str>) -> String {
    format_date(raw, "%B %-d, %Y", "No date available")
}

fn format_date(raw: Option<&str>, pattern: &str, fallback: &str) -> String {
    let Some(value) = raw.map(str::trim).filter(|v| !v.is_empty()) else {
        return fallback.to_string();
    };
    if let Ok(datetime) = DateTime::parse_from_rfc3339(value) {
        return datetime.date_naive().format(pattern).to_string();
    }
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return date.format(pattern).to_string();
    }
    // Unparseable values render as stored rather than hiding the record.
    value.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::article;
    use ad_core::SourceType;

    #[test]
    fn dashboard_renders_counts_and_both_sections() {
        let articles = vec![
            article("a", "Extracted", None),
            article("b", "original", None),
            article("c", "original", Some(SourceType::Scraped)),
        ];
        let out = render_dashboard(&articles, Tab::All);
        assert!(out.starts_with("All Articles (3) | Scraped (2) | Manual (1)\n"));
        assert!(out.contains("Scraped Articles (2 articles)"));
        assert!(out.contains("Manual Articles (1 articles)"));
        // Order within a section follows the input order.
        let a_pos = out.find("(a)").unwrap();
        let c_pos = out.find("(c)").unwrap();
        assert!(a_pos < c_pos);
    }

    #[test]
    fn single_tab_renders_only_its_section() {
        let articles = vec![article("a", "Extracted", None)];
        let out = render_dashboard(&articles, Tab::Manual);
        assert!(!out.contains(SCRAPED_TITLE));
        assert!(out.contains(MANUAL_EMPTY));
    }

    #[test]
    fn empty_sections_show_their_own_message() {
        let out = render_dashboard(&[], Tab::All);
        assert!(out.contains(SCRAPED_EMPTY));
        assert!(out.contains(MANUAL_EMPTY));
    }

    #[test]
    fn card_shows_badge_date_and_truncated_preview() {
        let mut record = article("a1", "Extracted", Some(SourceType::Scraped));
        record.content = "x".repeat(200);
        let out = render_card(&record);
        assert!(out.starts_with("[Scraped] "));
        assert!(out.contains("Jan 2, 2025"));
        assert!(out.contains(&format!("{}...", "x".repeat(120))));

        record.published_date = None;
        let out = render_card(&record);
        assert!(out.contains("No date"));
    }

    #[test]
    fn detail_uses_long_date_and_full_content() {
        let record = article("a1", "original", Some(SourceType::Manual));
        let out = render_detail(&record);
        assert!(out.starts_with("[Manual] [original]\n"));
        assert!(out.contains("January 2, 2025"));
        assert!(out.contains(&record.content));
        assert!(out.contains(&record.url));
    }

    #[test]
    fn dates_parse_both_stored_shapes() {
        assert_eq!(
            format_card_date(Some("2025-01-02T10:00:00Z")),
            "Jan 2, 2025"
        );
        assert_eq!(format_card_date(Some("2025-01-02")), "Jan 2, 2025");
        assert_eq!(format_card_date(Some("")), "No date");
        assert_eq!(format_card_date(None), "No date");
        assert_eq!(format_card_date(Some("soonish")), "soonish");
        assert_eq!(format_detail_date(None), "No date available");
    }
}
