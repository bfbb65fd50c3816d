use crate::utils::constants::WPT_HEADER;

/// Join the header and the formatted lines with single newlines.
///
/// No trailing newline is added; with no lines the result is the header alone.
pub fn assemble_output<I, S>(lines: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut output = String::from(WPT_HEADER);
    for line in lines {
        output.push('\n');
        output.push_str(line.as_ref());
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_only() {
        assert_eq!(assemble_output(Vec::<String>::new()), "$FormatGEO");
    }

    #[test]
    fn test_lines_are_newline_separated() {
        let output = assemble_output(["first", "second"]);
        assert_eq!(output, "$FormatGEO\nfirst\nsecond");
    }
}
