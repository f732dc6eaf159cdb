//! Splitting single CSV lines into fields.

/// Split a data line on `,`, keeping quoted segments together.
///
/// Each `"` toggles an in-quotes flag and is dropped; a comma separates fields only outside
/// quotes. Fields are trimmed. There is no `""` escape: a doubled quote simply toggles twice.
pub fn split_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for ch in line.chars() {
        match ch {
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => {
                fields.push(current.trim().to_owned());
                current.clear();
            }
            _ => current.push(ch),
        }
    }
    fields.push(current.trim().to_owned());
    fields
}

/// Split a header line on raw commas. Headers are not expected to contain quoted commas.
pub fn split_header(line: &str) -> Vec<&str> {
    line.split(',').collect()
}
