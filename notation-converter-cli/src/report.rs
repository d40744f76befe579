use crate::batch::{Conversion, SourceFile};
use notation_converter::converter::notation::Notation;
use std::fmt::Write;

/// Lists every conversion, grouped by target and then source notation.
pub fn render_report(sources: &[SourceFile]) -> String {
    let mut report = String::new();
    for to in Notation::ALL {
        for from in to.others() {
            let _ = writeln!(report, "{} from {}:", title(to), title(from));
            for conversion in conversions_between(sources, from, to) {
                let _ = writeln!(report, "{}", render_line(conversion));
            }
            report.push('\n');
        }
    }
    report
}

/// The content of the converted file written for one input file.
pub fn render_converted_file(source: &SourceFile) -> String {
    source
        .conversions
        .iter()
        .map(|conversion| render_line(conversion) + "\n")
        .collect()
}

/// Lists every failed conversion, grouped by source and then target notation.
pub fn render_error_log(sources: &[SourceFile]) -> String {
    let mut log = String::new();
    let _ = writeln!(log, "Conversion Errors");
    let _ = writeln!(log, "{}\n", "=".repeat(40));

    for from in Notation::ALL {
        let _ = writeln!(log, "{} Expression Errors:", title(from));
        let _ = writeln!(log, "{}", "-".repeat(20));

        for to in from.others() {
            let mut has_errors = false;
            for conversion in conversions_between(sources, from, to) {
                if let Err(error) = &conversion.output {
                    has_errors = true;
                    let _ = writeln!(log, "Converting to {}:", to);
                    let _ = writeln!(log, "Input:  {}", conversion.input);
                    let _ = writeln!(log, "Error:  ERROR: {}\n", error);
                }
            }
            if !has_errors {
                let _ = writeln!(log, "No errors found for {} to {} conversions\n", from, to);
            }
        }
        log.push('\n');
    }
    log
}

fn conversions_between(
    sources: &[SourceFile],
    from: Notation,
    to: Notation,
) -> impl Iterator<Item = &Conversion> {
    sources
        .iter()
        .filter(move |source| source.notation == from)
        .flat_map(|source| source.conversions.iter())
        .filter(move |conversion| conversion.to == to)
}

fn render_line(conversion: &Conversion) -> String {
    match &conversion.output {
        Ok(output) => format!("{} -> {}", conversion.input, output),
        Err(error) => format!("{} -> ERROR: {}", conversion.input, error),
    }
}

fn title(notation: Notation) -> String {
    let name = notation.name();
    name[..1].to_uppercase() + &name[1..]
}

#[cfg(test)]
mod tests {
    use super::*;
    use notation_converter::converter::error::ConversionError;
    use pretty_assertions::assert_eq;
    use std::path::PathBuf;

    fn sources() -> Vec<SourceFile> {
        vec![SourceFile {
            path: PathBuf::from("postfix.txt"),
            notation: Notation::Postfix,
            conversions: vec![
                Conversion {
                    input: "AB+".into(),
                    to: Notation::Infix,
                    output: Ok("(A + B)".into()),
                },
                Conversion {
                    input: "AB+".into(),
                    to: Notation::Prefix,
                    output: Ok("+AB".into()),
                },
                Conversion {
                    input: "A +".into(),
                    to: Notation::Prefix,
                    output: Err(ConversionError::InvalidNotation {
                        notation: Notation::Postfix,
                        expression: "A +".into(),
                    }),
                },
            ],
        }]
    }

    #[test]
    fn report_groups_by_direction() {
        let report = render_report(&sources());

        assert!(report.contains("Infix from Postfix:\nAB+ -> (A + B)\n"));
        assert!(report.contains(
            "Prefix from Postfix:\nAB+ -> +AB\nA + -> ERROR: invalid postfix expression: \"A +\"\n"
        ));
        assert!(report.contains("Infix from Prefix:\n\n"));
    }

    #[test]
    fn converted_file_has_one_line_per_conversion() {
        let converted = render_converted_file(&sources()[0]);

        assert_eq!(converted.lines().count(), 3);
        assert_eq!(converted.lines().next(), Some("AB+ -> (A + B)"));
    }

    #[test]
    fn error_log_lists_failures_and_clean_directions() {
        let log = render_error_log(&sources());

        assert!(log.starts_with("Conversion Errors\n"));
        assert!(log.contains("Postfix Expression Errors:"));
        assert!(log.contains("No errors found for postfix to infix conversions"));
        assert!(log.contains("Converting to prefix:\nInput:  A +\n"));
    }

    #[test]
    fn titles_are_capitalized() {
        assert_eq!(title(Notation::Postfix), "Postfix");
    }
}
