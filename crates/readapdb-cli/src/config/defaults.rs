pub struct DefaultsConfig {
    pub model: usize,
    pub occupancy_rank: usize,
    pub include_hetatm: bool,
    pub all_alternates: bool,
    pub strict: bool,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            model: 1,
            occupancy_rank: 1,
            include_hetatm: true,
            all_alternates: false,
            strict: false,
        }
    }
}
