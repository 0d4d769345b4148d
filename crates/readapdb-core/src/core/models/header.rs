/// Entry-level metadata read alongside the atom records.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PdbHeader {
    /// The four-character PDB identifier from the `HEADER` record.
    pub identifier: Option<String>,
    /// Resolution in Angstroms from `REMARK 2`.
    ///
    /// `Some(0.0)` when the remark is present but gives no number, as for
    /// NMR entries ("NOT APPLICABLE").
    pub resolution: Option<f64>,
    /// Number of models in the file, counting one for files without `MODEL`
    /// records.
    pub model_count: usize,
}

impl PdbHeader {
    /// Extracts the resolution from the text of one `REMARK 2` line.
    ///
    /// Returns `None` for the blank remark lines that carry no `RESOLUTION.`
    /// keyword.
    pub fn resolution_from_remark(text: &str) -> Option<f64> {
        let mut tokens = text.split_whitespace();
        tokens.find(|t| t.starts_with("RESOLUTION"))?;
        Some(
            tokens
                .next()
                .and_then(|t| t.parse::<f64>().ok())
                .unwrap_or(0.0),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolution_is_read_after_keyword() {
        assert_eq!(
            PdbHeader::resolution_from_remark(" RESOLUTION. 1.50 ANGSTROMS."),
            Some(1.5)
        );
        assert_eq!(
            PdbHeader::resolution_from_remark("RESOLUTION.    2.10 ANGSTROMS."),
            Some(2.1)
        );
    }

    #[test]
    fn not_applicable_resolution_is_zero() {
        assert_eq!(
            PdbHeader::resolution_from_remark("RESOLUTION. NOT APPLICABLE."),
            Some(0.0)
        );
    }

    #[test]
    fn blank_remark_has_no_resolution() {
        assert_eq!(PdbHeader::resolution_from_remark(""), None);
        assert_eq!(PdbHeader::resolution_from_remark("   "), None);
    }
}
