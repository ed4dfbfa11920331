//! Heuristic recipe detection over assistant replies.
//!
//! Replies follow the chef persona's format: a suggestion line naming the
//! dish, an `Ingredientes:` block with one ingredient per line, then a
//! numbered `Pasos:` (or `Instrucciones:`) block. Anything that does not
//! match yields `None`.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use super::persona::DEFAULT_RECIPE_TITLE;

/// Structured recipe pulled out of a single reply
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RecipeDraft {
    pub title: String,
    pub ingredients: Vec<String>,
    pub steps: Vec<String>,
}

static SUGGESTION_TITLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?im)(?:te propongo|te sugiero|te recomiendo)\s+una?\s+(.*?)\s*(?:[,.!]|$)")
        .expect("valid regex")
});

static DISH_TITLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?im)(?:receta de|plato de|deliciosa?)\s+(.*?)\s*(?:[,.!]|$)")
        .expect("valid regex")
});

static TITLE_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(?:receta|plato)[:\-]?\s*").expect("valid regex"));

static TITLE_NOISE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[\p{Extended_Pictographic}\u{FE0F}\u{200D}¡!*#]").expect("valid regex")
});

static INGREDIENTS_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)ingredientes:\**\s*(.*?)[#*\s]*(?:pasos|instrucciones):").expect("valid regex")
});

static STEPS_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)(?:pasos|instrucciones):\**\s*(.*)").expect("valid regex")
});

static LINE_BULLET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:[-•*·]|\p{Extended_Pictographic}|\u{FE0F}|\u{200D})+\s*")
        .expect("valid regex")
});

static STEP_SPLIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n\s*\d+\.\s*").expect("valid regex"));

static STEP_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\.\s*").expect("valid regex"));

const MIN_STEP_CHARS: usize = 6;

/// Extract a recipe from `text`, or `None` if it does not look like one.
pub fn extract(text: &str) -> Option<RecipeDraft> {
    if !has_markers(text) {
        return None;
    }

    let ingredients = extract_ingredients(text);
    if ingredients.is_empty() {
        return None;
    }

    Some(RecipeDraft {
        title: extract_title(text),
        ingredients,
        steps: extract_steps(text),
    })
}

fn has_markers(text: &str) -> bool {
    let lower = text.to_lowercase();
    lower.contains("ingredientes:") && (lower.contains("pasos:") || lower.contains("instrucciones:"))
}

pub fn extract_title(text: &str) -> String {
    for pattern in [&*SUGGESTION_TITLE, &*DISH_TITLE] {
        if let Some(title) = pattern
            .captures(text)
            .and_then(|c| c.get(1))
            .map(|m| clean_title(m.as_str()))
            .filter(|t| !t.is_empty())
        {
            return capitalize(&title);
        }
    }

    // Only lines above the ingredient list can name the dish
    let first = text
        .lines()
        .map(str::trim)
        .take_while(|l| !is_marker_heading(l))
        .find(|l| !l.is_empty());
    if let Some(first) = first {
        let title = clean_title(&TITLE_PREFIX.replace(first, ""));
        if !title.is_empty() {
            return capitalize(&title);
        }
    }

    DEFAULT_RECIPE_TITLE.to_string()
}

pub fn extract_ingredients(text: &str) -> Vec<String> {
    let Some(block) = INGREDIENTS_BLOCK.captures(text).and_then(|c| c.get(1)) else {
        return Vec::new();
    };

    block
        .as_str()
        .trim_matches(|c: char| c == '*' || c.is_whitespace())
        .lines()
        .map(|line| LINE_BULLET.replace(line.trim(), "").trim().to_string())
        .filter(|line| !line.is_empty() && !is_ingredients_heading(line))
        .collect()
}

pub fn extract_steps(text: &str) -> Vec<String> {
    let Some(block) = STEPS_BLOCK.captures(text).and_then(|c| c.get(1)) else {
        return Vec::new();
    };

    STEP_SPLIT
        .split(block.as_str())
        .map(|step| STEP_NUMBER.replace(step.trim(), "").trim().to_string())
        .filter(|step| step.chars().count() >= MIN_STEP_CHARS)
        .collect()
}

fn is_ingredients_heading(line: &str) -> bool {
    strip_markup(line)
        .trim_end_matches(':')
        .eq_ignore_ascii_case("ingredientes")
}

fn is_marker_heading(line: &str) -> bool {
    let lower = strip_markup(line).to_lowercase();
    ["ingredientes:", "pasos:", "instrucciones:"]
        .iter()
        .any(|m| lower.starts_with(m))
}

fn strip_markup(line: &str) -> &str {
    line.trim_matches(|c: char| c == '*' || c == '#' || c.is_whitespace())
}

fn clean_title(raw: &str) -> String {
    TITLE_NOISE.replace_all(raw, "").trim().to_string()
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
