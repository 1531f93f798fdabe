//! Section display labels

use once_cell::sync::Lazy;
use std::collections::HashMap;

static SECTION_LABELS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("aa", "AA Knowledge Base"),
        ("masterclass", "Claude Code Masterclass"),
        ("prompts", "Advanced Prompts"),
        ("casestudies", "Case Studies"),
        ("practices", "Best Practices"),
    ])
});

/// Human-readable label for a section key; unknown keys are shown as-is
pub fn section_label(key: &str) -> &str {
    SECTION_LABELS.get(key).copied().unwrap_or(key)
}
