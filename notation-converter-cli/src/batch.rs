use crate::report;
use anyhow::{Context, Result};
use log::{info, warn};
use notation_converter::converter::convert;
use notation_converter::converter::error::ConversionError;
use notation_converter::converter::notation::Notation;
use std::fs;
use std::path::{Path, PathBuf};

/// One expression converted into one other notation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    pub input: String,
    pub to: Notation,
    pub output: Result<String, ConversionError>,
}

/// The expressions of one input file and everything they were converted into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    pub path: PathBuf,
    pub notation: Notation,
    pub conversions: Vec<Conversion>,
}

/// Decides which notation a file holds by looking at its name.
pub fn notation_from_file_name(file_name: &str) -> Option<Notation> {
    let file_name = file_name.to_lowercase();
    Notation::ALL
        .into_iter()
        .find(|notation| file_name.contains(notation.name()))
}

/// Converts every non-empty line of `content` into both other notations.
///
/// A line that fails to convert is recorded with its error; the remaining lines
/// are still converted.
pub fn convert_lines(content: &str, notation: Notation) -> Vec<Conversion> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .flat_map(|line| {
            notation.others().into_iter().map(move |to| {
                let output = convert(line, notation, to);
                if let Err(error) = &output {
                    warn!("could not convert {:?} from {} to {}: {}", line, notation, to, error);
                }
                Conversion {
                    input: line.to_string(),
                    to,
                    output,
                }
            })
        })
        .collect()
}

/// Reads and converts every `.txt` file in the directory whose name tells its notation.
pub fn process_directory(input_dir: &Path) -> Result<Vec<SourceFile>> {
    let mut paths = fs::read_dir(input_dir)
        .with_context(|| format!("could not read directory {}", input_dir.display()))?
        .map(|entry| entry.map(|entry| entry.path()))
        .collect::<std::io::Result<Vec<PathBuf>>>()
        .with_context(|| format!("could not list directory {}", input_dir.display()))?;
    paths.sort();

    let mut sources = vec![];
    for path in paths {
        if !path.is_file() || path.extension().map_or(true, |extension| extension != "txt") {
            continue;
        }
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        let notation = match notation_from_file_name(&file_name) {
            Some(notation) => notation,
            None => {
                info!("skipping {}, its name does not tell its notation", path.display());
                continue;
            }
        };

        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(error) => {
                warn!("could not read {}: {}", path.display(), error);
                continue;
            }
        };
        info!("converting {} expressions from {}", notation, path.display());
        let conversions = convert_lines(&content, notation);
        sources.push(SourceFile {
            path,
            notation,
            conversions,
        });
    }
    Ok(sources)
}

/// Converts a directory of expression files, prints the report and writes the
/// optional converted files and error log.
pub fn run(input_dir: &Path, output_dir: Option<&Path>, error_log: Option<&Path>) -> Result<()> {
    let sources = process_directory(input_dir)?;
    print!("{}", report::render_report(&sources));

    if let Some(output_dir) = output_dir {
        fs::create_dir_all(output_dir)
            .with_context(|| format!("could not create directory {}", output_dir.display()))?;
        for source in &sources {
            let path = output_dir.join(converted_file_name(&source.path));
            fs::write(&path, report::render_converted_file(source))
                .with_context(|| format!("could not write {}", path.display()))?;
            info!("wrote {}", path.display());
        }
    }

    if let Some(error_log) = error_log {
        fs::write(error_log, report::render_error_log(&sources))
            .with_context(|| format!("could not write error log {}", error_log.display()))?;
        info!("wrote error log {}", error_log.display());
    }

    Ok(())
}

fn converted_file_name(path: &Path) -> String {
    let stem = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();
    format!("{}_converted.txt", stem)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn file_name_tells_notation() {
        assert_eq!(notation_from_file_name("Infix_Input.txt"), Some(Notation::Infix));
        assert_eq!(notation_from_file_name("prefix.txt"), Some(Notation::Prefix));
        assert_eq!(notation_from_file_name("my_postfix_2.txt"), Some(Notation::Postfix));
        assert_eq!(notation_from_file_name("notes.txt"), None);
    }

    #[test]
    fn failing_line_does_not_stop_the_rest() {
        let conversions = convert_lines("AB+\n\nA +\n  ABC*+  \n", Notation::Postfix);

        let outputs: Vec<_> = conversions
            .iter()
            .map(|conversion| (conversion.input.as_str(), conversion.to, conversion.output.is_ok()))
            .collect();
        assert_eq!(
            outputs,
            [
                ("AB+", Notation::Infix, true),
                ("AB+", Notation::Prefix, true),
                ("A +", Notation::Infix, false),
                ("A +", Notation::Prefix, false),
                ("ABC*+", Notation::Infix, true),
                ("ABC*+", Notation::Prefix, true),
            ]
        );
    }

    #[test]
    fn directory_is_converted_and_written() {
        let input_dir = tempfile::tempdir().unwrap();
        let output_dir = tempfile::tempdir().unwrap();
        let error_log = output_dir.path().join("errors.txt");
        fs::write(input_dir.path().join("infix.txt"), "(A+B)*(C-D)\nA + B)\n").unwrap();
        fs::write(input_dir.path().join("prefix.txt"), "+AB\n").unwrap();
        fs::write(input_dir.path().join("readme.txt"), "not expressions").unwrap();

        run(input_dir.path(), Some(output_dir.path()), Some(&error_log)).unwrap();

        let converted_infix =
            fs::read_to_string(output_dir.path().join("infix_converted.txt")).unwrap();
        assert!(converted_infix.contains("(A+B)*(C-D) -> *+AB-CD"));
        assert!(converted_infix.contains("(A+B)*(C-D) -> AB+CD-*"));
        assert!(converted_infix.contains("A + B) -> ERROR: invalid infix expression"));

        let converted_prefix =
            fs::read_to_string(output_dir.path().join("prefix_converted.txt")).unwrap();
        assert!(converted_prefix.contains("+AB -> (A + B)"));
        assert!(converted_prefix.contains("+AB -> AB+"));

        assert!(!output_dir.path().join("readme_converted.txt").exists());

        let errors = fs::read_to_string(&error_log).unwrap();
        assert!(errors.contains("Input:  A + B)"));
        assert!(errors.contains("No errors found for prefix to infix conversions"));
    }

    #[test]
    fn missing_directory_is_an_error() {
        let root = tempfile::tempdir().unwrap();

        let result = process_directory(&root.path().join("missing"));

        assert!(result.is_err());
    }
}
