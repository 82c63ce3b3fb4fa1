//! Maps answer views to styled terminal lines.

use insight_lens_engine::{AnswerView, InlineSpan, RenderNode};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

const HEADING_ICON: &str = "📈 ";
const INSIGHT_BULLET: &str = "• ";
const RECOMMENDATION_BULLET: &str = "→ ";
const BODY_INDENT: &str = "    ";

fn bold() -> Style {
    Style::default().add_modifier(Modifier::BOLD)
}

fn badge() -> Style {
    Style::default()
        .fg(Color::White)
        .bg(Color::Blue)
        .add_modifier(Modifier::BOLD)
}

fn dim() -> Style {
    Style::default().add_modifier(Modifier::DIM)
}

/// Renders a whole view, including trailing citations.
pub fn view_lines(view: &AnswerView) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    match view {
        AnswerView::Empty => {
            lines.push(Line::from(Span::styled("Ready to analyze your data", bold())));
            lines.push(Line::from(
                "Ask a question about your customers, campaigns, or churn risk to get started",
            ));
        }
        AnswerView::Conversational { nodes, .. } => {
            for node in nodes {
                node_lines(node, &mut lines);
            }
        }
        AnswerView::Legacy {
            answer,
            insights,
            recommendations,
            ..
        } => {
            lines.push(Line::from(Span::styled("Answer", bold())));
            lines.push(Line::from(answer.clone()));
            bullet_section(&mut lines, "Key Insights", INSIGHT_BULLET, insights);
            bullet_section(
                &mut lines,
                "Recommendations",
                RECOMMENDATION_BULLET,
                recommendations,
            );
        }
    }

    let citations = view.citations();
    if !citations.is_empty() {
        lines.push(Line::default());
        for citation in citations {
            lines.push(Line::from(Span::styled(format!("Source: {citation}"), dim())));
        }
    }

    lines
}

fn bullet_section(lines: &mut Vec<Line<'static>>, title: &str, bullet: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(title.to_string(), bold())));
    for item in items {
        lines.push(Line::from(format!("{bullet}{item}")));
    }
}

/// Appends the lines for one node.
pub fn node_lines(node: &RenderNode, lines: &mut Vec<Line<'static>>) {
    match node {
        RenderNode::Heading { text } => {
            lines.push(Line::from(vec![
                Span::styled(HEADING_ICON, Style::default().fg(Color::Blue)),
                Span::styled(text.clone(), bold()),
            ]));
            lines.push(Line::default());
        }
        RenderNode::NumberedItem {
            ordinal,
            title,
            body,
        } => {
            let badge = Span::styled(format!("[{ordinal}]"), badge());
            if title.is_empty() {
                lines.push(Line::from(vec![badge, Span::raw(" "), Span::raw(body.clone())]));
            } else {
                lines.push(Line::from(vec![
                    badge,
                    Span::raw(" "),
                    Span::styled(title.clone(), bold()),
                ]));
                lines.push(Line::from(format!("{BODY_INDENT}{body}")));
            }
            lines.push(Line::default());
        }
        RenderNode::Paragraph { spans } => {
            lines.push(Line::from(
                spans.iter().map(inline_span).collect::<Vec<_>>(),
            ));
            lines.push(Line::default());
        }
    }
}

fn inline_span(span: &InlineSpan) -> Span<'static> {
    match span {
        InlineSpan::PlainText { text } => Span::raw(text.clone()),
        InlineSpan::Emphasized { text } => Span::styled(text.clone(), bold()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use insight_lens_engine::{QueryResponse, parse_answer};

    fn text(line: &Line<'_>) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    fn texts(lines: &[Line<'_>]) -> Vec<String> {
        lines.iter().map(text).collect()
    }

    fn is_bold(span: &Span<'_>) -> bool {
        span.style.add_modifier.contains(Modifier::BOLD)
    }

    #[test]
    fn heading_has_icon_and_bold_text() {
        let mut lines = Vec::new();
        node_lines(
            &RenderNode::Heading {
                text: "Key Findings".into(),
            },
            &mut lines,
        );

        assert_eq!(texts(&lines), vec!["📈 Key Findings", ""]);
        assert!(is_bold(&lines[0].spans[1]));
    }

    #[test]
    fn nodes_are_separated_by_one_blank_line() {
        let view = AnswerView::from_raw("Intro.\n\n**Key Findings:**\n\n1. Act: now");
        assert_eq!(
            texts(&view_lines(&view)),
            vec!["Intro.", "", "📈 Key Findings", "", "[1] Act", "    now", ""]
        );
    }

    #[test]
    fn empty_paragraph_renders_as_blank_lines() {
        let view = AnswerView::from_raw("**");
        assert_eq!(texts(&view_lines(&view)), vec!["", ""]);
    }

    #[test]
    fn numbered_item_has_badge_title_and_body() {
        let mut lines = Vec::new();
        node_lines(
            &RenderNode::NumberedItem {
                ordinal: "1".into(),
                title: "Offer discount".into(),
                body: "Target high-risk customers.".into(),
            },
            &mut lines,
        );

        assert_eq!(
            texts(&lines),
            vec!["[1] Offer discount", "    Target high-risk customers.", ""]
        );
        assert_eq!(lines[0].spans[0].style.bg, Some(Color::Blue));
        assert!(is_bold(&lines[0].spans[2]));
    }

    #[test]
    fn numbered_item_without_title_is_one_line() {
        let mut lines = Vec::new();
        node_lines(
            &RenderNode::NumberedItem {
                ordinal: "3".into(),
                title: String::new(),
                body: "Call every flagged customer".into(),
            },
            &mut lines,
        );

        assert_eq!(texts(&lines), vec!["[3] Call every flagged customer", ""]);
    }

    #[test]
    fn paragraph_emphasis_is_bold() {
        let parsed = parse_answer("Churn is driven by **network issues** and price.");
        let mut lines = Vec::new();
        node_lines(&parsed.nodes[0], &mut lines);

        let spans = &lines[0].spans;
        assert_eq!(spans.len(), 3);
        assert!(!is_bold(&spans[0]));
        assert!(is_bold(&spans[1]));
        assert_eq!(spans[1].content, "network issues");
        assert!(!is_bold(&spans[2]));
    }

    #[test]
    fn empty_view_shows_prompt() {
        let lines = view_lines(&AnswerView::Empty);
        assert_eq!(text(&lines[0]), "Ready to analyze your data");
    }

    #[test]
    fn legacy_view_lists_insights_and_recommendations() {
        let resp = QueryResponse {
            answer: "Billing dominates complaints.".into(),
            insights: vec!["380 billing complaints".into()],
            recommendations: vec!["Audit bills".into(), "Call customers".into()],
            ..QueryResponse::default()
        };
        let lines = view_lines(&AnswerView::from_response(&resp));

        assert_eq!(
            texts(&lines),
            vec![
                "Answer",
                "Billing dominates complaints.",
                "",
                "Key Insights",
                "• 380 billing complaints",
                "",
                "Recommendations",
                "→ Audit bills",
                "→ Call customers",
            ]
        );
    }

    #[test]
    fn legacy_view_skips_empty_sections() {
        let resp = QueryResponse {
            answer: "Nothing to add.".into(),
            ..QueryResponse::default()
        };
        let lines = view_lines(&AnswerView::from_response(&resp));
        assert_eq!(texts(&lines), vec!["Answer", "Nothing to add."]);
    }

    #[test]
    fn citations_are_dimmed_at_the_end() {
        let mut resp = QueryResponse::conversational("Churn is up.");
        resp.data_citations = vec!["profile data".into()];
        let lines = view_lines(&AnswerView::from_response(&resp));

        let last = lines.last().unwrap();
        assert_eq!(text(last), "Source: profile data");
        assert!(last.spans[0].style.add_modifier.contains(Modifier::DIM));
    }
}
