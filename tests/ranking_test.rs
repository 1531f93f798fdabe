//! Ranking behavior tests
//!
//! End-to-end checks of matcher, aggregator and searcher against small
//! catalogs shaped like the knowledge-base content.

use kbsearch::config::SearchConfig;
use kbsearch::loader::{Catalog, Difficulty, Record, Section};
use kbsearch::search::{match_score, relevance, Searcher};

fn single_section(records: Vec<Record>) -> Catalog {
    Catalog::from_sections(vec![Section::new("aa", records)])
}

#[test]
fn test_exact_title_outranks_substring_title() {
    let catalog = single_section(vec![
        Record::new("Advanced Claude Code Setup Guide", "Claude Code"),
        Record::new("Claude Code Setup", "Claude Code"),
    ]);

    let results = Searcher::new().search("claude code setup", &catalog);

    assert_eq!(results[0].title, "Claude Code Setup");
    assert_eq!(match_score("claude code setup", "Claude Code Setup"), 100.0);
    assert_eq!(
        match_score("claude code setup", "Advanced Claude Code Setup Guide"),
        60.0
    );
    assert!(results[0].score - results[1].score >= 120.0);
}

#[test]
fn test_scenario_exact_title_ranks_first() {
    let catalog = single_section(vec![
        Record::new("Claude Code Agent Swarm", "Claude Code"),
        Record::new("Claude Code Setup", "Claude Code").with_difficulty(Difficulty::Beginner),
    ]);

    let results = Searcher::new().search("Claude Code Setup", &catalog);

    assert_eq!(results.len(), 2);
    assert_eq!(results[0].title, "Claude Code Setup");
    assert!(results[0].score >= 300.0);
    assert!(results[0].score > results[1].score);
}

#[test]
fn test_scenario_category_beats_content_only() {
    let catalog = single_section(vec![
        Record::new("Deploy Notes", "Operations").with_content("set up mcp servers"),
        Record::new("Model Context Protocol Servers", "MCP"),
    ]);

    let results = Searcher::new().search("mcp", &catalog);

    assert_eq!(results.len(), 2);
    assert_eq!(results[0].title, "Model Context Protocol Servers");
    assert!(results[0].score >= 200.0);
    assert_eq!(results[1].title, "Deploy Notes");
    assert_eq!(results[1].score, 60.0);
}

#[test]
fn test_scenario_cap_keeps_top_twenty() {
    let records: Vec<Record> = (0..25)
        .map(|i| {
            let title = if i % 5 == 0 {
                format!("Automation Recipe {}", i)
            } else {
                format!("Recipe {}", i)
            };
            let record = Record::new(title, "Automation");
            if i % 3 == 0 {
                record.with_description("a quick win")
            } else {
                record
            }
        })
        .collect();
    let catalog = single_section(records.clone());

    let results = Searcher::new().search("a", &catalog);

    // Expected: stable sort of indices by descending relevance, top 20
    let mut expected: Vec<(usize, f64)> = records
        .iter()
        .enumerate()
        .map(|(i, r)| (i, relevance("a", r)))
        .collect();
    assert!(expected.iter().all(|(_, s)| *s > 0.0));
    expected.sort_by(|a, b| b.1.total_cmp(&a.1));
    expected.truncate(20);

    assert_eq!(results.len(), 20);
    for (result, (idx, score)) in results.iter().zip(&expected) {
        assert_eq!(result.title, records[*idx].title);
        assert_eq!(result.score, *score);
    }
}

#[test]
fn test_raised_limit_still_keeps_top_twenty() {
    let records: Vec<Record> = (0..30)
        .map(|i| Record::new(format!("Agent Recipe {}", i), "Automation"))
        .collect();
    let catalog = single_section(records);
    let default_results = Searcher::new().search("agent", &catalog);

    for max_results in [25, 100] {
        let searcher = Searcher::with_config(SearchConfig::new().with_max_results(max_results));
        let results = searcher.search("agent", &catalog);

        assert_eq!(results.len(), 20, "max_results = {}", max_results);
        assert_eq!(results, default_results);
    }
}

#[test]
fn test_scenario_no_matching_characters() {
    let catalog = Catalog::from_sections(vec![
        Section::new(
            "aa",
            vec![
                Record::new("Claude Code Setup", "Claude Code")
                    .with_content("npm install")
                    .with_difficulty(Difficulty::Beginner),
                Record::new("MCP Servers", "MCP").with_description("Connect tools"),
            ],
        ),
        Section::new(
            "practices",
            vec![Record::new("Small Commits", "Workflow").with_why("Easier review")],
        ),
    ]);

    assert!(Searcher::new().search("xyz123notfound", &catalog).is_empty());
}

#[test]
fn test_ties_keep_catalog_order() {
    let catalog = Catalog::from_sections(vec![
        Section::new("aa", vec![Record::new("Testing", "Workflow")]),
        Section::new("practices", vec![Record::new("Testing", "Workflow")]),
        Section::new("prompts", vec![Record::new("Testing", "Workflow")]),
    ]);

    let results = Searcher::new().search("testing", &catalog);

    let sections: Vec<&str> = results.iter().map(|r| r.section.as_str()).collect();
    assert_eq!(sections, vec!["aa", "practices", "prompts"]);
}

#[test]
fn test_result_description_uses_why_fallback() {
    let catalog = single_section(vec![
        Record::new("Small Commits", "Workflow").with_why("Easier review")
    ]);

    let results = Searcher::new().search("commits", &catalog);

    assert_eq!(results[0].description, "Easier review");
}

#[test]
fn test_recompute_is_idempotent() {
    let catalog = single_section(vec![
        Record::new("Claude Code Setup", "Claude Code"),
        Record::new("MCP Servers", "MCP"),
        Record::new("Landing Page", "Marketing"),
    ]);
    let searcher = Searcher::new();

    assert_eq!(searcher.search("c", &catalog), searcher.search("c", &catalog));
}
