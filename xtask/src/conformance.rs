//! Static conformance checks for the theme layers and component stylesheet.
//!
//! `cargo xtask check-themes` validates the `--ig-*` token contract without
//! a browser: every token named by `themes/theme-contract.toml` must be
//! declared by the matching theme layer, and the component stylesheet must
//! guard the touch-target floor, a keyboard focus indicator, and a
//! reduced-motion fallback for the loading spinner.

use crate::error::{XtaskError, XtaskResult};
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

const THEME_CONTRACT_PATH: &str = "themes/theme-contract.toml";

/// Deserialized `themes/theme-contract.toml`.
#[derive(Debug, Deserialize)]
struct ThemeContract {
    min_touch_target_px: u32,
    required_base_tokens: Vec<String>,
    required_color_tokens: Vec<String>,
    paths: ContractPaths,
}

#[derive(Debug, Deserialize)]
struct ContractPaths {
    component_stylesheet: String,
    base_light_theme: String,
    material_light_theme: String,
}

#[derive(Clone, Debug)]
struct Problem {
    check: &'static str,
    path: String,
    message: String,
}

impl Problem {
    fn new(check: &'static str, path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            check,
            path: path.into(),
            message: message.into(),
        }
    }
}

/// `cargo xtask check-themes`
pub fn check_themes(root: &Path) -> XtaskResult<()> {
    let contract = load_contract(root)?;

    let mut problems = Vec::new();
    problems.extend(check_required_tokens(
        root,
        &contract.paths.base_light_theme,
        &contract.required_base_tokens,
    ));
    problems.extend(check_required_tokens(
        root,
        &contract.paths.material_light_theme,
        &contract.required_color_tokens,
    ));

    let css_rel = &contract.paths.component_stylesheet;
    match fs::read_to_string(root.join(css_rel)) {
        Ok(text) => problems.extend(scan_component_stylesheet(
            &text,
            css_rel,
            contract.min_touch_target_px,
        )),
        Err(err) => problems.push(Problem::new(
            "component-stylesheet",
            css_rel.clone(),
            format!("failed to read component stylesheet: {err}"),
        )),
    }

    if problems.is_empty() {
        println!("theme conformance ok");
        return Ok(());
    }

    for problem in &problems {
        eprintln!("{}: {}: {}", problem.check, problem.path, problem.message);
    }
    Err(
        XtaskError::validation(format!("{} theme conformance problem(s)", problems.len()))
            .with_operation("check-themes"),
    )
}

fn load_contract(root: &Path) -> XtaskResult<ThemeContract> {
    let path = root.join(THEME_CONTRACT_PATH);
    let text = fs::read_to_string(&path).map_err(|err| {
        XtaskError::config(format!("failed to read theme contract: {err}"))
            .with_path(&path)
            .with_hint("the contract lives at themes/theme-contract.toml")
    })?;
    toml::from_str(&text).map_err(|err| {
        XtaskError::config(format!("invalid theme contract: {err}")).with_path(&path)
    })
}

fn check_required_tokens(root: &Path, rel_path: &str, required: &[String]) -> Vec<Problem> {
    let text = match fs::read_to_string(root.join(rel_path)) {
        Ok(text) => text,
        Err(err) => {
            return vec![Problem::new(
                "required-tokens",
                rel_path,
                format!("failed to read theme layer: {err}"),
            )];
        }
    };

    let declared = declared_tokens(&text);
    required
        .iter()
        .filter(|token| !declared.contains(token.as_str()))
        .map(|token| {
            Problem::new(
                "required-tokens",
                rel_path,
                format!("missing token declaration `{token}`"),
            )
        })
        .collect()
}

/// Custom-property names declared in a stylesheet, one per `--token: value;`
/// declaration line.
fn declared_tokens(text: &str) -> HashSet<&str> {
    text.lines()
        .map(str::trim)
        .filter(|line| line.starts_with("--"))
        .filter_map(|line| line.split(':').next())
        .map(str::trim)
        .collect()
}

fn scan_component_stylesheet(text: &str, rel_path: &str, min_touch_target_px: u32) -> Vec<Problem> {
    let mut problems = Vec::new();

    let floor = format!("var(--ig-min-touch-target, {min_touch_target_px}px)");
    if !text.contains(&floor) {
        problems.push(Problem::new(
            "touch-target",
            rel_path,
            format!("expected touch-target floor `{floor}`"),
        ));
    }

    if !text.contains(":focus-visible") {
        problems.push(Problem::new(
            "focus-indicator",
            rel_path,
            "expected a :focus-visible rule for the keyboard focus ring",
        ));
    }

    if !text.contains("prefers-reduced-motion") {
        problems.push(Problem::new(
            "reduced-motion",
            rel_path,
            "expected a prefers-reduced-motion fallback for animated affordances",
        ));
    }

    problems
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn declared_tokens_parses_declaration_lines_only() {
        let css = ":root {\n  --ig-a: 1px;\n  --ig-b: var(--ig-a);\n  color: red;\n}\n";
        let tokens = declared_tokens(css);
        assert!(tokens.contains("--ig-a"));
        assert!(tokens.contains("--ig-b"));
        assert!(!tokens.contains("color"));
        assert_eq!(tokens.len(), 2);
    }

    #[test]
    fn conforming_stylesheet_produces_no_problems() {
        let css = "\
ig-button { min-width: var(--ig-min-touch-target, 44px); }\n\
.ig-button:focus-visible { outline: 2px solid; }\n\
@media (prefers-reduced-motion: reduce) { .ig-button.loading::after { animation: none; } }\n";
        assert!(scan_component_stylesheet(css, "button.css", 44).is_empty());
    }

    #[test]
    fn missing_guards_are_each_reported() {
        let problems = scan_component_stylesheet("ig-button { color: red; }", "button.css", 44);
        let checks: Vec<_> = problems.iter().map(|problem| problem.check).collect();
        assert_eq!(
            checks,
            vec!["touch-target", "focus-indicator", "reduced-motion"]
        );
    }

    #[test]
    fn touch_target_floor_tracks_the_contract_value() {
        let css = "\
ig-button { min-width: var(--ig-min-touch-target, 44px); }\n\
.ig-button:focus-visible { outline: 2px solid; }\n\
@media (prefers-reduced-motion: reduce) {}\n";
        let problems = scan_component_stylesheet(css, "button.css", 48);
        assert_eq!(problems.len(), 1);
        assert_eq!(problems[0].check, "touch-target");
    }
}
