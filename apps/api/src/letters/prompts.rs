// Prompt constants for cover-letter generation.

/// Opens the prompt ahead of the CV text.
const PROMPT_PREAMBLE: &str = "Based on the CV:\n\n";

/// Bridges from the CV text to the job-description text.
const PROMPT_BRIDGE: &str = "\n\nand the job description:\n\n";

/// Fixed instruction block closing the prompt: facts from the CV only,
/// standard letter structure, tailored to the job description, dated today.
const PROMPT_INSTRUCTIONS: &str = "\n\nCreate a professional cover letter. \
Use only the personal data and facts given in the CV — do not draw on any \
experience or projects from outside the CV. Follow the common cover letter \
structure and use the names and addresses given in the CV. The letter must \
fit both the job description and the CV. Use today as the date of writing \
this letter.";

/// Assembles the generation prompt around the two extracted texts.
///
/// The fixed segments are concatenated with the inputs in between; nothing
/// is ever substituted into a string that already contains input text, so an
/// input that happens to contain a marker-like token stays contiguous. No
/// truncation, escaping, or length limit is applied to either input —
/// arbitrarily long documents pass through unmodified.
pub fn build_prompt(cv_text: &str, jd_text: &str) -> String {
    let mut prompt = String::with_capacity(
        PROMPT_PREAMBLE.len()
            + cv_text.len()
            + PROMPT_BRIDGE.len()
            + jd_text.len()
            + PROMPT_INSTRUCTIONS.len(),
    );
    prompt.push_str(PROMPT_PREAMBLE);
    prompt.push_str(cv_text);
    prompt.push_str(PROMPT_BRIDGE);
    prompt.push_str(jd_text);
    prompt.push_str(PROMPT_INSTRUCTIONS);
    prompt
}
