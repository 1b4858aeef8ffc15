/// Count whitespace-delimited words in a script
///
/// No punctuation stripping or locale rules: "don't stop" is two words,
/// "--" on its own is one.
pub fn count_words(text: &str) -> usize {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return 0;
    }
    trimmed.split_whitespace().count()
}
