use thiserror::Error;

// ---------------------------------------------------------------------------
// LayoutError – everything that can stop a ball-stick layout
// ---------------------------------------------------------------------------

/// Failure while turning a CSV table into a ball-stick layout.
///
/// Any of these aborts the whole layout; no geometry is produced.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LayoutError {
    /// One of the configured columns is not in the CSV header.
    #[error("Column '{x_field}' or '{y_field}' not found in CSV.")]
    MissingColumn {
        x_field: String,
        y_field: String,
        /// The first configured name that was not found.
        missing: String,
    },

    /// A cell in a selected column is not a finite number.
    #[error("Row {row}, field '{field}': '{value}' is not a number")]
    DataConversion {
        field: String,
        row: usize,
        value: String,
    },

    /// A layout parameter is zero, negative or not finite.
    #[error("Invalid {name}: {value} (must be a positive number)")]
    InvalidParameter { name: &'static str, value: f64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_column_message_names_both_fields() {
        let err = LayoutError::MissingColumn {
            x_field: "time".into(),
            y_field: "value".into(),
            missing: "value".into(),
        };
        assert_eq!(err.to_string(), "Column 'time' or 'value' not found in CSV.");
    }

    #[test]
    fn conversion_message_names_field() {
        let err = LayoutError::DataConversion {
            field: "y".into(),
            row: 3,
            value: "abc".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("'y'"));
        assert!(msg.contains("abc"));
    }
}
