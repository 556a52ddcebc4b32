/// Phrases the model is told not to open a summary with.
pub const DISALLOWED_PREAMBLES: [&str; 2] = ["Here is a summary of the text:", "The text is about:"];

/// Builds the single instruction prompt sent to the model.
///
/// The source text is embedded verbatim between `---` delimiters.
#[must_use]
pub fn build_summary_prompt(text: &str, target_word_count: u32) -> String {
    let [first, second] = DISALLOWED_PREAMBLES;
    format!(
        "Please summarize the following text concisely.\n\
         Aim for a summary of approximately {target_word_count} words.\n\
         Do not start the summary with phrases like \"{first}\" or \"{second}\".\n\
         Just provide the direct summary.\n\
         \n\
         Text to summarize:\n\
         ---\n\
         {text}\n\
         ---\n\
         \n\
         Summary:\n"
    )
}
