/// Returns the quoted string region, quotes included, that encloses the
/// byte offset `column` of `line`.
///
/// A region opens on `'` or `"` and closes on the same character; a
/// backslash escapes the next character inside a region. Returns `None`
/// when `column` is outside every closed region.
pub fn quoted_scope_at(line: &str, column: usize) -> Option<&str> {
    let mut open: Option<(char, usize)> = None;
    let mut escaped = false;

    for (index, character) in line.char_indices() {
        if let Some((quote, start)) = open {
            if escaped {
                escaped = false;
            } else if character == '\\' {
                escaped = true;
            } else if character == quote {
                let end = index + character.len_utf8();
                if (start..end).contains(&column) {
                    return Some(&line[start..end]);
                }
                open = None;
            }
        } else if matches!(character, '\'' | '"') {
            if index > column {
                return None;
            }
            open = Some((character, index));
        }
    }

    None
}

/// Removes every single and double quote character from `text`.
pub fn strip_quotes(text: &str) -> String {
    text.chars()
        .filter(|character| !matches!(character, '\'' | '"'))
        .collect()
}
