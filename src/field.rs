//! Lexical matching and validation for single cron fields.
//!
//! A field expression is never compiled into an intermediate representation:
//! each call re-inspects the text for the `*`, `,`, `/` and `-` markers and
//! dispatches on those. Matching is total (it cannot fail, malformed tokens
//! simply do not match), while validation reports the first offending token
//! as a message.

/// Checks whether `value` satisfies the field expression.
///
/// Comma-separated segments combine with OR; everything else follows the
/// shape of the segment: `*` (optionally stepped), `start-end` (optionally
/// stepped), or a bare literal.
pub(crate) fn value_matches(value: u32, field: &str) -> bool {
    if field == "*" {
        return true;
    }
    field
        .split(',')
        .any(|segment| segment_matches(i64::from(value), segment))
}

fn segment_matches(value: i64, segment: &str) -> bool {
    let mut step_parts = segment.split('/');
    let range_part = step_parts.next().unwrap_or("");
    // An absent or empty step token means a step of 1. A present token that
    // does not parse, or parses to 0, makes every stepped comparison fail.
    let step = match step_parts.next() {
        Some(token) if !token.is_empty() => token.parse::<i64>().ok(),
        _ => Some(1),
    };

    if range_part == "*" {
        return matches!(step, Some(s) if s != 0 && value % s == 0);
    }

    if range_part.contains('-') {
        let mut pieces = range_part.split('-');
        let start = pieces.next().and_then(|p| p.parse::<i64>().ok());
        let end = pieces.next().and_then(|p| p.parse::<i64>().ok());
        let (Some(start), Some(end)) = (start, end) else {
            return false;
        };
        if value < start || value > end {
            return false;
        }
        return matches!(step, Some(s) if s != 0 && (value - start) % s == 0);
    }

    // Bare literal: a step suffix, if any, is ignored. Intentional quirk,
    // kept for compatibility: "5/2" matches 5 and nothing else.
    range_part.parse::<i64>() == Ok(value)
}

/// Checks that the field expression is syntactically legal and that every
/// embedded value lies within `[min, max]`.
///
/// Returns the first error found as a human-readable message, or `None` when
/// the field is valid. An inverted range such as `30-10` passes validation;
/// it simply never matches.
pub(crate) fn check_field(field: &str, min: u32, max: u32, name: &str) -> Option<String> {
    if field == "*" {
        return None;
    }

    for segment in field.split(',') {
        let mut step_parts = segment.split('/');
        let range_part = step_parts.next().unwrap_or("");
        let step = step_parts.next();

        if range_part != "*" {
            for piece in range_part.split('-') {
                match piece.parse::<i64>() {
                    Ok(n) if n >= i64::from(min) && n <= i64::from(max) => {}
                    _ => {
                        return Some(format!(
                            "Invalid {name}: \"{piece}\" is not between {min} and {max}"
                        ))
                    }
                }
            }
        }

        if let Some(step) = step {
            if !step.is_empty() {
                match step.parse::<i64>() {
                    Ok(s) if s >= 1 => {}
                    _ => return Some(format!("Invalid step in {name}: \"{step}\"")),
                }
            }
        }
    }

    None
}
