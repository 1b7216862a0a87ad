/// Uppercase an answer and strip everything that is not a letter.
///
/// Non-ASCII letters are kept (`"Año"` becomes `"AÑO"`); spaces, hyphens,
/// digits and punctuation are removed. An empty result means the record
/// cannot be placed.
pub fn normalize_answer(answer: &str) -> String {
    answer
        .chars()
        .filter(|c| c.is_alphabetic())
        .flat_map(char::to_uppercase)
        .collect()
}
