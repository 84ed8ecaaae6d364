//! Template segmentation
//!
//! Splits a display template into literal runs and `${...}` expression
//! segments. Only a well-formed `${...}` pair is an interpolation; lone
//! braces and an unterminated `${` are ordinary text.

/// One piece of a scanned template
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Literal text, passed through unchanged
    Literal(String),
    /// The source of an embedded expression (the text between `${` and `}`)
    Expr(String),
}

/// Scan a template left to right into literal and expression segments
pub fn split_segments(template: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut literal = String::new();
    let mut rest = template;

    while let Some(start) = rest.find("${") {
        let after = &rest[start + 2..];
        match after.find('}') {
            Some(end) => {
                literal.push_str(&rest[..start]);
                if !literal.is_empty() {
                    segments.push(Segment::Literal(std::mem::take(&mut literal)));
                }
                segments.push(Segment::Expr(after[..end].to_string()));
                rest = &after[end + 1..];
            }
            None => {
                // Unterminated "${": the remainder is literal text.
                break;
            }
        }
    }

    literal.push_str(rest);
    if !literal.is_empty() {
        segments.push(Segment::Literal(literal));
    }

    segments
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lit(s: &str) -> Segment {
        Segment::Literal(s.into())
    }

    fn expr(s: &str) -> Segment {
        Segment::Expr(s.into())
    }

    #[test]
    fn test_plain_text() {
        assert_eq!(split_segments("hello"), vec![lit("hello")]);
    }

    #[test]
    fn test_empty_template() {
        assert_eq!(split_segments(""), Vec::<Segment>::new());
    }

    #[test]
    fn test_single_expression() {
        assert_eq!(split_segments("${name}"), vec![expr("name")]);
    }

    #[test]
    fn test_mixed() {
        assert_eq!(
            split_segments("time ${FORMAT_DURATION(timeSpent)} total"),
            vec![lit("time "), expr("FORMAT_DURATION(timeSpent)"), lit(" total")]
        );
    }

    #[test]
    fn test_adjacent_expressions() {
        assert_eq!(
            split_segments("${last}, ${first}"),
            vec![expr("last"), lit(", "), expr("first")]
        );
    }

    #[test]
    fn test_lone_braces_are_literal() {
        assert_eq!(
            split_segments("{literalBraces}"),
            vec![lit("{literalBraces}")]
        );
        assert_eq!(split_segments("a } b { c"), vec![lit("a } b { c")]);
    }

    #[test]
    fn test_unterminated_interpolation_is_literal() {
        assert_eq!(split_segments("cost ${amount"), vec![lit("cost ${amount")]);
    }

    #[test]
    fn test_dollar_without_brace_is_literal() {
        assert_eq!(split_segments("cost $100"), vec![lit("cost $100")]);
    }
}
