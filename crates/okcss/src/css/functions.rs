//! Function-call scanning for CSS values such as `blur(4px) saturate(120%)`.
//!
//! Built on the `cssparser` tokenizer so nested parentheses, strings and
//! comments inside a value are handled the way a browser would handle them.
//! Only the top level of the value is scanned; the raw argument text of each
//! call is returned untouched so callers can apply their own unit parsers.

use cssparser::{ParseError, Parser, ParserInput, Token};

/// One `name(args)` call found in a CSS value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionCall {
    /// Function name, ASCII-lowercased (`scaleX` → `scalex`).
    pub name: String,
    /// Raw text between the parentheses, trimmed.
    pub args: String,
}

impl FunctionCall {
    /// Splits the arguments on top-level commas.
    pub fn comma_args(&self) -> Vec<&str> {
        super::split::split_top_level(&self.args, ',')
    }
}

/// Lists the top-level function calls of `value` in source order.
///
/// ```rust
/// use okcss::css::function_calls;
///
/// let calls = function_calls("blur(4px) hue-rotate(90deg)");
/// assert_eq!(calls[0].name, "blur");
/// assert_eq!(calls[1].args, "90deg");
/// ```
pub fn function_calls(value: &str) -> Vec<FunctionCall> {
    let mut input = ParserInput::new(value);
    let mut parser = Parser::new(&mut input);
    let mut calls = Vec::new();

    loop {
        let name = match parser.next() {
            Ok(Token::Function(name)) => name.to_ascii_lowercase(),
            Ok(_) => continue,
            Err(_) => break,
        };
        if let Ok(args) = parser.parse_nested_block(raw_block) {
            calls.push(FunctionCall { name, args });
        }
    }

    calls
}

/// Returns the first call named `name` (case-insensitive).
pub fn find_call(value: &str, name: &str) -> Option<FunctionCall> {
    function_calls(value)
        .into_iter()
        .find(|call| call.name.eq_ignore_ascii_case(name))
}

fn raw_block<'i, 't>(block: &mut Parser<'i, 't>) -> Result<String, ParseError<'i, ()>> {
    let start = block.position();
    while block.next_including_whitespace_and_comments().is_ok() {}
    Ok(block.slice_from(start).trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_calls_in_order() {
        let calls = function_calls("blur(4px) brightness(120%) sepia(30%)");
        let names: Vec<_> = calls.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["blur", "brightness", "sepia"]);
        assert_eq!(calls[1].args, "120%");
    }

    #[test]
    fn names_are_lowercased() {
        let calls = function_calls("scaleX(1.2) scaleY(0.8)");
        assert_eq!(calls[0].name, "scalex");
        assert_eq!(calls[1].name, "scaley");
    }

    #[test]
    fn nested_calls_stay_in_the_arguments() {
        let calls = function_calls("linear-gradient(90deg, rgba(0, 0, 0, 0.5) 0%, #fff 100%)");
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].name, "linear-gradient");
        assert_eq!(calls[0].args, "90deg, rgba(0, 0, 0, 0.5) 0%, #fff 100%");
        assert_eq!(
            calls[0].comma_args(),
            vec!["90deg", "rgba(0, 0, 0, 0.5) 0%", "#fff 100%"]
        );
    }

    #[test]
    fn plain_tokens_are_skipped() {
        let calls = function_calls("none");
        assert!(calls.is_empty());
        let calls = function_calls("all 0.3s cubic-bezier(0.4, 0, 0.2, 1)");
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].args, "0.4, 0, 0.2, 1");
    }

    #[test]
    fn find_call_by_name() {
        let call = find_call("blur(12px) saturate(180%)", "saturate").unwrap();
        assert_eq!(call.args, "180%");
        assert!(find_call("blur(12px)", "sepia").is_none());
    }

    #[test]
    fn garbage_does_not_panic() {
        let _ = function_calls("((((");
        let _ = function_calls("blur(4px");
        assert!(function_calls("").is_empty());
    }
}
