use gamez_core::{HubData, HubDataSource, StaticData};

/// Load the embedded datasets, falling back to empty defaults on failure.
///
/// A broken dataset should leave the shell navigable rather than blank.
#[must_use]
pub fn load_hub_data() -> HubData {
    load_with(&StaticData)
}

pub(crate) fn load_with<S: HubDataSource>(source: &S) -> HubData {
    match source.load_all() {
        Ok(data) => {
            log::info!(
                "hub data loaded: {} catalog entries, {} credit platforms",
                data.catalog.len(),
                data.credits.tiered.games.len() + data.credits.premium.games.len()
            );
            data
        }
        Err(err) => {
            log::error!("failed to load hub data: {err}");
            HubData::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gamez_core::HubDataError;

    struct Broken;

    impl HubDataSource for Broken {
        type Error = HubDataError;

        fn dataset(&self, name: &str) -> Result<String, Self::Error> {
            Err(HubDataError::UnknownDataset(name.to_string()))
        }
    }

    #[test]
    fn embedded_data_loads() {
        let data = load_hub_data();
        assert!(!data.catalog.is_empty());
        assert!(data.site.intro.active());
    }

    #[test]
    fn failures_fall_back_to_defaults() {
        let data = load_with(&Broken);
        assert!(data.catalog.is_empty());
        assert_eq!(data.site.brand, "Pimp Gamez");
        assert!(!data.site.intro.active());
    }
}
