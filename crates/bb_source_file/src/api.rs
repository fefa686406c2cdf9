// Copyright contributors to the blackbird-frontend project
// SPDX-License-Identifier: Apache-2.0

use ariadne::Config;
use ariadne::{ColorGenerator, Label, Report, ReportKind, Source};
use std::io;
use std::ops::Range;

use crate::source_file::{range_to_span, ErrorTrait};

/// Print compiler errors. Diagnostics include text taken from `source`.
/// The path `info_file_path` is only used for printing error messages. In particular,
/// it does not need to correspond to an existing file.
pub fn print_compiler_errors<T: ErrorTrait>(
    errors: &[T],
    info_file_path: &str,
    source: &str,
) -> io::Result<()> {
    for err in errors.iter() {
        let err_string = err.message();
        let err_span = range_to_span(&err.range());
        report_error(&err_string, &err_span, info_file_path, source)?;
        println!();
    }
    Ok(())
}

fn build_report<'a>(
    message: &str,
    span: &Range<usize>,
    file_path: &'a str,
    color: bool,
) -> Report<'a, (&'a str, Range<usize>)> {
    let mut colors = ColorGenerator::new();
    let a = colors.next();
    // `offset` is a zero-indexed character offset from beginning of file.
    // Here `offset` is character index of start of error.
    let offset = span.start;
    Report::build(ReportKind::Error, file_path, offset)
        .with_message(message)
        .with_config(Config::default().with_compact(true).with_color(color))
        .with_label(
            Label::new((file_path, span.clone()))
                .with_message("Near this point")
                .with_color(a),
        )
        .finish()
}

/// Print one diagnostic to stderr.
pub fn report_error(
    message: &str,
    span: &Range<usize>,
    file_path: &str,
    source: &str,
) -> io::Result<()> {
    build_report(message, span, file_path, true).eprint((file_path, Source::from(source)))
}

/// Render one diagnostic without color, e.g. for logs and tests.
pub fn render_error(message: &str, span: &Range<usize>, file_path: &str, source: &str) -> String {
    let mut buf = Vec::new();
    // Writing into a `Vec` cannot fail.
    let _ = build_report(message, span, file_path, false)
        .write((file_path, Source::from(source)), &mut buf);
    String::from_utf8_lossy(&buf).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rendered_error_names_file_and_message() {
        let source = "int q0 = 1\n";
        let rendered = render_error(
            "Variable name 'q0' is reserved for register references",
            &(4..6),
            "demo.xbb",
            source,
        );
        assert!(rendered.contains("reserved for register references"));
        assert!(rendered.contains("demo.xbb"));
        assert!(rendered.contains("Near this point"));
    }
}
