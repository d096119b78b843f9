use serde::{Deserialize, Serialize};

/// A protection value split into input/output halves for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuojaSplit {
    pub input: String,
    pub output: Option<String>,
}

/// Split a raw `suoja` string into input/output parts.
///
/// A slash separates the input rating from the output rating
/// ("16A/20A"). With `separate_input_output` off the string passes
/// through untouched; with it on, the split happens on the first slash
/// and both halves are trimmed. Splitting is a display and export
/// concern only; grouping always uses the raw string.
pub fn split_suoja(suoja: &str, separate_input_output: bool) -> SuojaSplit {
    if separate_input_output {
        if let Some((input, output)) = suoja.split_once('/') {
            return SuojaSplit {
                input: input.trim().to_string(),
                output: Some(output.trim().to_string()),
            };
        }
    }
    SuojaSplit {
        input: suoja.to_string(),
        output: None,
    }
}
