use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum OptionsError {
    #[error("Model numbers start at 1 (got {0})")]
    InvalidModel(usize),
    #[error("Occupancy ranks start at 1 (got {0})")]
    InvalidOccupancyRank(usize),
}

/// How atoms with alternate location indicators are resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlternateSelection {
    /// Keep every alternate position.
    KeepAll,
    /// Keep only the alternate with the N-th highest occupancy (1-based).
    ByOccupancyRank(usize),
}

impl Default for AlternateSelection {
    fn default() -> Self {
        AlternateSelection::ByOccupancyRank(1)
    }
}

/// Options for reading the atom records of a PDB file.
///
/// The defaults read `ATOM` and `HETATM` records of the first model, keeping
/// the highest-occupancy position of atoms with alternate locations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadOptions {
    pub include_hetatm: bool,
    pub model: usize,
    pub alternates: AlternateSelection,
}

impl Default for ReadOptions {
    fn default() -> Self {
        Self {
            include_hetatm: true,
            model: 1,
            alternates: AlternateSelection::default(),
        }
    }
}

impl ReadOptions {
    pub fn builder() -> ReadOptionsBuilder {
        ReadOptionsBuilder::new()
    }
}

#[derive(Default)]
pub struct ReadOptionsBuilder {
    include_hetatm: Option<bool>,
    model: Option<usize>,
    alternates: Option<AlternateSelection>,
}

impl ReadOptionsBuilder {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn include_hetatm(mut self, include: bool) -> Self {
        self.include_hetatm = Some(include);
        self
    }
    pub fn model(mut self, model: usize) -> Self {
        self.model = Some(model);
        self
    }
    pub fn alternates(mut self, selection: AlternateSelection) -> Self {
        self.alternates = Some(selection);
        self
    }

    /// Builds the options, filling unset values with the defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the model number or occupancy rank is zero.
    pub fn build(self) -> Result<ReadOptions, OptionsError> {
        let defaults = ReadOptions::default();

        let model = self.model.unwrap_or(defaults.model);
        if model == 0 {
            return Err(OptionsError::InvalidModel(model));
        }

        let alternates = self.alternates.unwrap_or(defaults.alternates);
        if let AlternateSelection::ByOccupancyRank(0) = alternates {
            return Err(OptionsError::InvalidOccupancyRank(0));
        }

        Ok(ReadOptions {
            include_hetatm: self.include_hetatm.unwrap_or(defaults.include_hetatm),
            model,
            alternates,
        })
    }
}
