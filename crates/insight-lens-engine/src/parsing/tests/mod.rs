//! Integration tests for the parsing module.
//!
//! Uses snapshot testing with a text outline for readability.
//! Fixtures (.txt) and snapshots (.snap) are co-located in `fixtures/`.

use pretty_assertions::assert_eq;

use crate::parsing::{
    blocks::{RenderNode, split_blocks},
    inline::InlineSpan,
    parse_answer, snapshot,
};

// Fixture-based snapshot tests

#[test]
fn fixture_findings_and_actions() {
    assert_fixture("findings_and_actions");
}

#[test]
fn fixture_churn_risk_answer() {
    assert_fixture("churn_risk_answer");
}

#[test]
fn fixture_fallback_answer() {
    assert_fixture("fallback_answer");
}

#[test]
fn fixture_degraded_markup() {
    assert_fixture("degraded_markup");
}

fn assert_fixture(name: &str) {
    let fixtures_dir = format!("{}/src/parsing/tests/fixtures", env!("CARGO_MANIFEST_DIR"));
    let raw = std::fs::read_to_string(format!("{fixtures_dir}/{name}.txt")).unwrap();

    let blocks = split_blocks(&raw);
    let parsed = parse_answer(&raw);
    snapshot::invariants(&raw, &blocks, &parsed.nodes);

    let snap = snapshot::normalize(&blocks, &parsed.nodes);
    insta::with_settings!({
        snapshot_path => fixtures_dir.as_str(),
        prepend_module_to_snapshot => false,
    }, {
        insta::assert_snapshot!(name, snap.to_string());
    });
}

// Scenario tests

#[test]
fn heading_then_paragraph() {
    let parsed = parse_answer("**Key Findings:**\n\nCustomers in Delhi show high churn.");
    assert_eq!(
        parsed.nodes,
        vec![
            RenderNode::Heading {
                text: "Key Findings".into()
            },
            RenderNode::Paragraph {
                spans: vec![InlineSpan::plain("Customers in Delhi show high churn.")]
            },
        ]
    );
}

#[test]
fn single_numbered_item() {
    let parsed = parse_answer("1. Offer discount: Target high-risk customers with a 20% discount.");
    assert_eq!(
        parsed.nodes,
        vec![RenderNode::NumberedItem {
            ordinal: "1".into(),
            title: "Offer discount".into(),
            body: "Target high-risk customers with a 20% discount.".into(),
        }]
    );
}

#[test]
fn paragraph_with_emphasis() {
    let parsed = parse_answer("Churn is driven by **network issues** and price.");
    assert_eq!(
        parsed.nodes,
        vec![RenderNode::Paragraph {
            spans: vec![
                InlineSpan::plain("Churn is driven by "),
                InlineSpan::emphasized("network issues"),
                InlineSpan::plain(" and price."),
            ]
        }]
    );
}

#[test]
fn empty_answer() {
    assert!(parse_answer("").is_empty());
}

#[test]
fn blank_lines_only() {
    assert!(parse_answer("\n\n\n   \n\n").is_empty());
}

#[test]
fn three_kinds_in_source_order() {
    let raw = "**Recommended Actions:**\n\n1. Outreach: Call flagged customers.\n\nThat should help.";
    let kinds: Vec<_> = parse_answer(raw).iter().map(RenderNode::kind_name).collect();
    assert_eq!(kinds, vec!["Heading", "NumberedItem", "Paragraph"]);
}

#[test]
fn bare_delimiter_block_is_empty_paragraph() {
    // A lone `**` opens an emphasized run that never closes and holds no
    // text, so the block keeps its node but has no spans.
    let parsed = parse_answer("\n\n**\n\n");
    assert_eq!(parsed.nodes, vec![RenderNode::Paragraph { spans: vec![] }]);
}

#[test]
fn digit_without_period_is_paragraph() {
    let parsed = parse_answer("2 customers churned");
    assert_eq!(
        parsed.nodes,
        vec![RenderNode::Paragraph {
            spans: vec![InlineSpan::plain("2 customers churned")]
        }]
    );
}

// Property-style tests

const SAMPLES: &[&str] = &[
    "",
    "plain",
    "**Key Findings:**\n\nCustomers in Delhi show high churn.",
    "1. a: b\n\n2. c\n\n\n\n**d:**",
    "  \n\n**unterminated\n\nx **y** z",
    "**:**\n\n0.\n\n**\n\n****",
    "• **Tenure Patterns**: 18-24 months\r\n\r\nsame block",
];

#[test]
fn parsing_is_deterministic() {
    for raw in SAMPLES {
        assert_eq!(parse_answer(raw), parse_answer(raw), "input: {raw:?}");
    }
}

#[test]
fn non_blank_input_yields_nodes() {
    for raw in SAMPLES.iter().filter(|s| !s.trim().is_empty()) {
        assert!(!parse_answer(raw).is_empty(), "input: {raw:?}");
    }
}

#[test]
fn invariants_hold_for_samples() {
    for raw in SAMPLES {
        let blocks = split_blocks(raw);
        snapshot::invariants(raw, &blocks, &parse_answer(raw).nodes);
    }
}

#[test]
fn one_node_per_block() {
    for raw in SAMPLES {
        assert_eq!(split_blocks(raw).len(), parse_answer(raw).len(), "input: {raw:?}");
    }
}

#[test]
fn parsed_answer_iterates_in_order() {
    let parsed = parse_answer("a\n\nb");
    let texts: Vec<String> = parsed
        .into_iter()
        .map(|node| match node {
            RenderNode::Paragraph { spans } => InlineSpan::plain_text(&spans),
            other => panic!("expected paragraph, got {other:?}"),
        })
        .collect();
    assert_eq!(texts, vec!["a", "b"]);
}
