//! Text-list codec for bullet and technology editing.
//!
//! The form layer edits bullets as one multi-line text field and
//! technologies as one comma-separated field; these helpers define the exact
//! split/join semantics so the round trip is lossless.

/// Split multi-line text into bullets, one per line.
///
/// No trimming and no filtering: every line, including empty ones, becomes a
/// bullet. `"a\nb\n"` yields `["a", "b", ""]` — the trailing newline is a
/// blank line still pending user input.
pub fn split_bullet_lines(raw: &str) -> Vec<String> {
    raw.split('\n').map(str::to_string).collect()
}

/// Join bullets back into the multi-line form text. Inverse of
/// [`split_bullet_lines`].
pub fn join_bullet_lines(bullets: &[String]) -> String {
    bullets.join("\n")
}

/// Split comma-separated text into technologies, trimming surrounding
/// whitespace from each piece. Empty pieces are retained; a pure-whitespace
/// piece trims to an empty string rather than disappearing.
pub fn split_technologies(raw: &str) -> Vec<String> {
    raw.split(',').map(|piece| piece.trim().to_string()).collect()
}

/// Join technologies for display in the form field.
pub fn join_technologies(technologies: &[String]) -> String {
    technologies.join(", ")
}
