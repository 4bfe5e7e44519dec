mod catalog;
mod config;
mod loader;

pub use catalog::Catalog;
pub use config::{DEFAULT_SAVE_KEY, EconomyConfig};
pub use loader::{catalog_path, load_catalog, load_catalog_from_path};

#[cfg(test)]
mod tests {
    use super::{Catalog, load_catalog, load_catalog_from_path};

    #[test]
    fn bundled_catalog_matches_builtin() {
        let catalog = load_catalog().expect("bundled catalog should load");

        assert_eq!(catalog, Catalog::builtin());
    }

    #[test]
    fn missing_catalog_file_reports_path() {
        let err = load_catalog_from_path("does/not/exist.json").expect_err("should fail");

        assert!(format!("{err:#}").contains("does/not/exist.json"));
    }
}
