use cpim_data::SiteState;

/// Display colour of each site state.
pub trait SitePalette {
    fn rgb(&self) -> [u8; 3];
}

impl SitePalette for SiteState {
    fn rgb(&self) -> [u8; 3] {
        match self {
            SiteState::Vacant => [255, 255, 255],
            SiteState::Undifferentiated => [48, 48, 48],
            SiteState::SpinUp => [249, 237, 105],
            SiteState::SpinDown => [106, 44, 112],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_states_have_distinct_colors() {
        let colors: std::collections::HashSet<_> =
            SiteState::ALL.iter().map(SitePalette::rgb).collect();
        assert_eq!(colors.len(), SiteState::ALL.len());
    }
}
