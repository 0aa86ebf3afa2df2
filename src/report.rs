//! Human-readable rendering of validation results.

use std::io::{self, Write};

use crate::data::LoadError;
use crate::validator::Validation;
use crate::QuizError;

/// Write the report for a checked file to `out`.
pub fn render<W: Write>(out: &mut W, result: &Result<Validation, QuizError>) -> io::Result<()> {
    match result {
        Ok(validation) => render_validation(out, validation),
        Err(err) => render_failure(out, err),
    }
}

fn render_validation<W: Write>(out: &mut W, validation: &Validation) -> io::Result<()> {
    writeln!(out, "✓ Valid JSON with {} questions", validation.record_count)?;

    if validation.is_valid() {
        writeln!(out, "✓ All questions are valid!")?;
        return Ok(());
    }

    writeln!(out)?;
    writeln!(out, "❌ Found {} issues:", validation.issues.len())?;
    for issue in &validation.issues {
        writeln!(out, "  - {}", issue)?;
    }
    Ok(())
}

fn render_failure<W: Write>(out: &mut W, err: &QuizError) -> io::Result<()> {
    match err {
        QuizError::Load(LoadError::NotFound { .. } | LoadError::Parse { .. }) => {
            writeln!(out, "❌ {}", err)
        }
        _ => writeln!(out, "❌ Error: {}", err),
    }
}
