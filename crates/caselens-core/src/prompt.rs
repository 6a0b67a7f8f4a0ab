//! Instructional prompt sent with every transcript.

const INSTRUCTIONS: &str = "Analyze the following call center transcript.
1. Summarize the main problems faced by the customer.
2. Identify severity based on repeated issues, deadline/credit cycle mentions, and negative tone.
3. Give an overall sentiment (positive, neutral, negative).
Transcript:
";

/// Fixed instructions followed by the transcript text.
pub fn build_prompt(transcript: &str) -> String {
    let mut prompt = String::with_capacity(INSTRUCTIONS.len() + transcript.len() + 1);
    prompt.push_str(INSTRUCTIONS);
    prompt.push_str(transcript);
    prompt.push('\n');
    prompt
}
