//! Prompt builder: fixed instruction + example schema + the code verbatim.

/// Instruction and example schema sent ahead of every snippet.
///
/// `spaceComplexity` is requested in the same best/average/worst shape as
/// `timeComplexity`.
pub const ANALYSIS_INSTRUCTION: &str = r#"Provide a detailed time and space complexity analysis of the following code.
Respond with a single JSON object and nothing else: no markdown fences, no comments, no trailing text.
The object must match this example exactly in structure:
{
  "timeComplexity": {"bestCase": "O(1)", "averageCase": "O(n)", "worstCase": "O(n)"},
  "spaceComplexity": {"bestCase": "O(1)", "averageCase": "O(1)", "worstCase": "O(1)"},
  "summary": "A short explanation of what dominates the cost."
}"#;

/// Builds the full prompt for `code`.
///
/// The snippet is embedded as-is; it is context for the model, not
/// something that gets executed, so no escaping is applied.
pub fn build_prompt(code: &str) -> String {
    format!("{ANALYSIS_INSTRUCTION}\n\nCode:\n{code}\n\nRespond only with valid JSON.\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embeds_code_verbatim() {
        let code = "fn f() {\n    println!(\"{}\", \"```\");\n}\n";
        let prompt = build_prompt(code);
        assert!(prompt.starts_with(ANALYSIS_INSTRUCTION));
        assert!(prompt.contains(&format!("Code:\n{code}\n")));
        assert!(prompt.trim_end().ends_with("Respond only with valid JSON."));
    }

    #[test]
    fn is_deterministic() {
        assert_eq!(build_prompt("x = 1"), build_prompt("x = 1"));
    }

    #[test]
    fn example_schema_is_valid_json() {
        let start = ANALYSIS_INSTRUCTION.find('{').unwrap();
        let example: serde_json::Value =
            serde_json::from_str(&ANALYSIS_INSTRUCTION[start..]).unwrap();
        assert!(example["timeComplexity"]["worstCase"].is_string());
        assert!(example["spaceComplexity"]["bestCase"].is_string());
    }
}
