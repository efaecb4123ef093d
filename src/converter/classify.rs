use super::types::Category;

/// Prefixes that open a compound statement.
const STATEMENT_PREFIXES: [&str; 11] = [
    "def ", "class ", "if ", "elif ", "else:", "for ", "while ", "try:", "except", "finally:",
    "with ",
];

/// Leading operators that rule a line out as an assignment.
const COMPARISON_PREFIXES: [&str; 5] = ["=", "==", "!=", "<=", ">="];

/// Whitespace as line stripping sees it: Unicode `White_Space` plus the
/// ASCII separators U+001C..=U+001F.
pub(crate) fn is_line_space(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

pub(crate) fn trim_line(line: &str) -> &str {
    line.trim_matches(is_line_space)
}

/// Classify a line from its trimmed form. First match wins.
///
/// The assignment test is a plain substring check, so `x==5` still counts
/// as an assignment.
pub fn classify_line(line: &str) -> Category {
    let trimmed = trim_line(line);

    if trimmed.starts_with('#') {
        Category::Comment
    } else if is_statement(trimmed) {
        Category::Statement
    } else if is_assignment(trimmed) {
        Category::Assignment
    } else if trimmed.ends_with(':') {
        Category::BlockStart
    } else {
        Category::Expression
    }
}

fn is_statement(trimmed: &str) -> bool {
    STATEMENT_PREFIXES.iter().any(|p| trimmed.starts_with(p))
}

fn is_assignment(trimmed: &str) -> bool {
    trimmed.contains('=') && !COMPARISON_PREFIXES.iter().any(|p| trimmed.starts_with(p))
}
