use crate::cards::{parse_card, CardError, CardValue};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PresetError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("preset file must have columns p1,p2,dealer_up")]
    MissingColumns,
    #[error("invalid preset at line {line}: expected at least {expected} fields, got {got}")]
    MalformedRow {
        line: usize,
        expected: usize,
        got: usize,
    },
    #[error("invalid preset at line {line}: {source}")]
    BadCard { line: usize, source: CardError },
}

/// One row of a preset file: a fixed deal to estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandPreset {
    pub p1: CardValue,
    pub p2: CardValue,
    pub dealer_up: CardValue,
}

/// Load a preset CSV from disk. See [`parse_presets`] for the format.
pub fn load_presets(path: &str) -> Result<Vec<HandPreset>, PresetError> {
    let content = std::fs::read_to_string(path)?;
    parse_presets(&content)
}

/// Parse preset CSV content.
///
/// The header must contain the columns `p1`, `p2` and `dealer_up`, in any
/// order; extra columns are ignored. Cells hold card symbols accepted by
/// [`parse_card`]. Blank lines and lines starting with `#` are skipped.
pub fn parse_presets(content: &str) -> Result<Vec<HandPreset>, PresetError> {
    let mut lines = content.lines().enumerate().filter(|(_, line)| {
        let trimmed = line.trim();
        !trimmed.is_empty() && !trimmed.starts_with('#')
    });

    let (_, header) = lines.next().ok_or(PresetError::MissingColumns)?;
    let columns: Vec<&str> = header.split(',').map(|c| c.trim()).collect();
    let column = |name: &str| columns.iter().position(|c| *c == name);
    let (p1_col, p2_col, up_col) = match (column("p1"), column("p2"), column("dealer_up")) {
        (Some(p1), Some(p2), Some(up)) => (p1, p2, up),
        _ => return Err(PresetError::MissingColumns),
    };
    let needed = p1_col.max(p2_col).max(up_col) + 1;

    let mut presets = Vec::new();
    for (line_num, line) in lines {
        let fields: Vec<&str> = line.split(',').map(|f| f.trim()).collect();
        if fields.len() < needed {
            return Err(PresetError::MalformedRow {
                line: line_num + 1,
                expected: needed,
                got: fields.len(),
            });
        }

        let cell = |col: usize| {
            parse_card(fields[col]).map_err(|source| PresetError::BadCard {
                line: line_num + 1,
                source,
            })
        };

        presets.push(HandPreset {
            p1: cell(p1_col)?,
            p2: cell(p2_col)?,
            dealer_up: cell(up_col)?,
        });
    }

    Ok(presets)
}
