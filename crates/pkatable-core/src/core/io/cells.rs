use calamine::{Data, Range};

/// Reads a cell as a number. Text cells are accepted when they parse as a float.
pub(crate) fn cell_number(cell: Option<&Data>) -> Option<f64> {
    match cell? {
        Data::Float(f) => Some(*f),
        Data::Int(i) => Some(*i as f64),
        Data::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Renders a cell as text; empty and missing cells become an empty string.
pub(crate) fn cell_text(cell: Option<&Data>) -> String {
    match cell {
        None | Some(Data::Empty) => String::new(),
        Some(Data::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

pub(crate) fn is_empty(cell: Option<&Data>) -> bool {
    match cell {
        None | Some(Data::Empty) => true,
        Some(Data::String(s)) => s.trim().is_empty(),
        Some(_) => false,
    }
}

/// Absolute row numbers spanned by `range`, empty when the sheet has no cells.
pub(crate) fn row_span(range: &Range<Data>) -> std::ops::RangeInclusive<u32> {
    match (range.start(), range.end()) {
        (Some((first, _)), Some((last, _))) => first..=last,
        #[allow(clippy::reversed_empty_ranges)]
        _ => 1..=0,
    }
}

/// Fetches a cell by absolute position, independent of where the used range starts.
pub(crate) fn cell_at(range: &Range<Data>, row: u32, col: u32) -> Option<&Data> {
    range.get_value((row, col))
}
