//! Delimiter-aware field splitting.
//!
//! A field may contain a literal comma only when the field is enclosed in
//! double quotes. Inside a quoted field, a doubled quote (`""`) is a literal
//! quote character. Enclosing quotes are stripped from the output; a quote
//! appearing mid-field in an unquoted field is kept literally.

/// Splits one line on commas, honoring quoted fields.
pub fn split_fields(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut at_field_start = true;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            // quoting only starts at the beginning of a field
            '"' if at_field_start => {
                in_quotes = true;
                at_field_start = false;
            }
            '"' if in_quotes => {
                if chars.peek() == Some(&'"') {
                    // escaped quote inside a quoted field
                    chars.next();
                    current.push('"');
                } else {
                    in_quotes = false;
                }
            }
            ',' if !in_quotes => {
                fields.push(std::mem::take(&mut current));
                at_field_start = true;
            }
            c => {
                current.push(c);
                at_field_start = false;
            }
        }
    }
    fields.push(current);

    fields
}
