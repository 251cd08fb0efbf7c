//! Behaviour text - Splitting a free-text block into behaviour lines

/// Split a textarea value into behaviour lines.
///
/// Lines are trimmed, a leading bullet marker (`-`, `*`, `•`) is removed and
/// empty lines are dropped.
pub fn parse_behaviour_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(|line| {
            line.trim()
                .trim_start_matches(['-', '*', '•'])
                .trim_start()
                .to_string()
        })
        .filter(|line| !line.is_empty())
        .collect()
}
