use std::io::{self, BufRead};

/// Command-line items, or non-blank stdin lines when there are none.
pub fn items_or_stdin(items: Vec<String>) -> io::Result<Vec<String>> {
    if !items.is_empty() {
        return Ok(items);
    }
    read_lines(io::stdin().lock())
}

pub fn read_lines(reader: impl BufRead) -> io::Result<Vec<String>> {
    let mut lines = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if !line.trim().is_empty() {
            lines.push(line);
        }
    }
    Ok(lines)
}
