use crate::error::{DishError, Result};

/// Split a request's code string into ingredient type codes.
///
/// Each character is one code; whitespace and `/` only separate codes.
/// Order and duplicates are kept: "AAB" asks for two independent `A`
/// slots and one `B` slot.
pub fn parse_codes(input: &str, max_groups: usize) -> Result<Vec<char>> {
    let codes: Vec<char> = input.chars().filter(|&c| !is_separator(c)).collect();

    if codes.is_empty() {
        return Err(DishError::EmptyCodes);
    }
    if codes.len() > max_groups {
        return Err(DishError::TooManyGroups {
            count: codes.len(),
            limit: max_groups,
        });
    }

    Ok(codes)
}

fn is_separator(c: char) -> bool {
    c.is_whitespace() || c == '/'
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keeps_order_and_duplicates() {
        assert_eq!(parse_codes("BAB", 10).unwrap(), vec!['B', 'A', 'B']);
    }

    #[test]
    fn test_whitespace_separates() {
        assert_eq!(parse_codes("AB C", 10).unwrap(), vec!['A', 'B', 'C']);
        assert_eq!(parse_codes("AB/C/", 10).unwrap(), vec!['A', 'B', 'C']);
    }

    #[test]
    fn test_empty_rejected() {
        assert!(matches!(parse_codes("", 10), Err(DishError::EmptyCodes)));
        assert!(matches!(parse_codes("  \t", 10), Err(DishError::EmptyCodes)));
        assert!(matches!(parse_codes("//", 10), Err(DishError::EmptyCodes)));
    }

    #[test]
    fn test_group_limit() {
        assert!(parse_codes("ABC", 3).is_ok());
        assert!(matches!(
            parse_codes("ABCD", 3),
            Err(DishError::TooManyGroups { count: 4, limit: 3 })
        ));
    }
}
