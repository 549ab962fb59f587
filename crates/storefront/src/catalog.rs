//! Catalog loading and the built-in sample storefronts.
//!
//! A catalog is supplied at startup and read-only from then on. It can be
//! loaded from a YAML file or taken from [`samples`], which carries the
//! two real storefronts this engine was built for.

use std::path::{Path, PathBuf};

use thiserror::Error;

use spaza_core::{Catalog, CatalogError};

/// Errors from loading a catalog file.
#[derive(Debug, Error)]
pub enum CatalogLoadError {
    /// The file could not be read.
    #[error("failed to read catalog file {path}: {source}")]
    Io {
        /// The file that was requested.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The file is not a valid catalog document.
    #[error("failed to parse catalog file {path}: {source}")]
    Parse {
        /// The file that was requested.
        path: PathBuf,
        /// The underlying YAML error.
        #[source]
        source: serde_yaml::Error,
    },
    /// The document parsed but violates a catalog invariant.
    #[error(transparent)]
    Invalid(#[from] CatalogError),
}

/// Load and validate a catalog from a YAML file.
///
/// # Errors
///
/// Returns [`CatalogLoadError`] when the file cannot be read or parsed,
/// or when the catalog fails validation (duplicate ids, price tables
/// referencing labels missing from the axes).
pub fn load_catalog(path: &Path) -> Result<Catalog, CatalogLoadError> {
    let raw = std::fs::read_to_string(path).map_err(|source| CatalogLoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let catalog: Catalog = serde_yaml::from_str(&raw).map_err(|source| CatalogLoadError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    catalog.validate()?;

    tracing::info!(
        store = %catalog.store_name,
        products = catalog.products.len(),
        "catalog loaded"
    );
    Ok(catalog)
}

/// The two storefronts this engine ships with.
pub mod samples {
    use std::collections::BTreeMap;

    use spaza_core::{
        AddOnPolicy, Catalog, Category, Money, OrderProfile, PriceTable, Product, ProductId,
        RecipientHandle,
    };

    fn product(id: i32, name: &str, description: &str, category: &str, base_cents: i64) -> Product {
        Product {
            id: ProductId::new(id),
            name: name.to_owned(),
            description: description.to_owned(),
            category: Category::new(category),
            base_price: Money::from_cents(base_cents),
            primary_axis: vec![],
            secondary_axis: vec![],
            pricing: PriceTable::Flat,
            featured: false,
        }
    }

    fn labels(values: &[&str]) -> Vec<String> {
        values.iter().map(|&v| v.to_owned()).collect()
    }

    fn row(entries: &[(&str, i64)]) -> BTreeMap<String, Money> {
        entries
            .iter()
            .map(|&(label, cents)| (label.to_owned(), Money::from_cents(cents)))
            .collect()
    }

    fn matrix(rows: &[(&str, &[(&str, i64)])]) -> PriceTable {
        PriceTable::Matrix(
            rows.iter()
                .map(|&(primary, entries)| (primary.to_owned(), row(entries)))
                .collect(),
        )
    }

    fn recipient(handle: &str) -> RecipientHandle {
        RecipientHandle::parse(handle).expect("sample recipient handle is valid")
    }

    /// The fragrance shop: a retail storefront with flat per-product
    /// prices and scent/size axes that do not affect price.
    #[must_use]
    pub fn laureta_scents() -> Catalog {
        let mut lavender = product(
            1,
            "Lavender",
            "Transform your space into a tranquil sanctuary with our signature Lavender \
             Dreams diffuser. Expertly crafted with pure essential oils.",
            "home",
            34_999,
        );
        lavender.primary_axis = labels(&["Lavender", "Vanilla"]);
        lavender.secondary_axis = labels(&["100ml", "200ml"]);
        lavender.featured = true;

        let mut ocean = product(
            2,
            "Ocean Breeze",
            "Bring the refreshing essence of coastal waves into your home with this crisp, \
             clean fragrance.",
            "home",
            34_999,
        );
        ocean.primary_axis = labels(&["Sea Salt", "Ocean Mist", "Coastal Breeze"]);
        ocean.secondary_axis = labels(&["100ml", "200ml", "500ml"]);
        ocean.featured = true;

        let mut vanilla = product(
            3,
            "Vanilla Sunset",
            "Indulge in the warm, comforting embrace of premium vanilla with hints of amber \
             and sandalwood.",
            "home",
            37_999,
        );
        vanilla.primary_axis = labels(&["Madagascar Vanilla", "Vanilla Amber", "Caramel Vanilla"]);
        vanilla.secondary_axis = labels(&["100ml", "200ml", "500ml"]);

        let mut citrus = product(
            4,
            "Fresh Citrus Drive",
            "Energize your daily commute with invigorating citrus notes that keep you alert \
             and refreshed.",
            "car",
            19_999,
        );
        citrus.primary_axis = labels(&["Lemon Zest", "Orange Burst", "Grapefruit"]);
        citrus.secondary_axis = labels(&["50ml", "100ml"]);
        citrus.featured = true;

        let mut mint = product(
            5,
            "Cool Mint Journey",
            "Experience crisp, cooling mint that eliminates odors and creates a fresh \
             atmosphere.",
            "car",
            19_999,
        );
        mint.primary_axis = labels(&["Peppermint", "Spearmint", "Eucalyptus Mint"]);
        mint.secondary_axis = labels(&["50ml", "100ml"]);

        let mut cedar = product(
            6,
            "Cedar & Sage",
            "Sophisticated woody notes blended with aromatic sage create an elegant, \
             grounding atmosphere.",
            "home",
            39_999,
        );
        cedar.primary_axis = labels(&["Cedar", "White Sage", "Cedar Sage Blend"]);
        cedar.secondary_axis = labels(&["100ml", "200ml", "500ml"]);

        Catalog {
            store_name: "Laureta Scents".to_owned(),
            profile: OrderProfile::Retail,
            recipient: recipient("27610325686"),
            add_on: None,
            products: vec![lavender, ocean, vanilla, citrus, mint, cedar],
        }
    }

    /// The braiding salon: a booking storefront where most prices come
    /// from size x length matrices, plus a hair-wash add-on.
    #[must_use]
    pub fn moonl_braids() -> Catalog {
        let mut knotless = product(
            1,
            "Knotless Braids",
            "Neat, lightweight knotless braids with a natural finish.",
            "braids",
            25_000,
        );
        knotless.primary_axis = labels(&["Small", "Medium"]);
        knotless.secondary_axis = labels(&["Short", "Medium", "Long"]);
        knotless.pricing = matrix(&[
            ("Small", &[("Short", 35_000), ("Medium", 45_000), ("Long", 50_000)]),
            ("Medium", &[("Short", 25_000), ("Medium", 35_000), ("Long", 40_000)]),
        ]);
        knotless.featured = true;

        let mut fulani = product(
            2,
            "Fulani Braids",
            "Fulani braids with clean parts and beautiful detailing.",
            "braids",
            35_000,
        );
        fulani.primary_axis = labels(&["Small"]);
        fulani.secondary_axis = labels(&["Short", "Medium", "Long"]);
        fulani.pricing = matrix(&[(
            "Small",
            &[("Short", 35_000), ("Medium", 35_000), ("Long", 40_000)],
        )]);
        fulani.featured = true;

        let mut straight_back = product(
            3,
            "Straight Back / Up Braids",
            "Straight-back or up-do braids: clean, protective, and stylish.",
            "braids",
            15_000,
        );
        straight_back.primary_axis = labels(&["Small", "Medium"]);
        straight_back.secondary_axis = labels(&["Short", "Medium", "Long"]);
        straight_back.pricing = matrix(&[
            ("Small", &[("Short", 20_000), ("Medium", 20_000), ("Long", 25_000)]),
            ("Medium", &[("Short", 15_000), ("Medium", 15_000), ("Long", 20_000)]),
        ]);
        straight_back.featured = true;

        let mut cornrows = product(
            4,
            "Cornrows",
            "Classic cornrows: free hand or styled patterns.",
            "cornrows",
            10_000,
        );
        cornrows.secondary_axis = labels(&["Free hand", "Styled"]);
        cornrows.pricing = PriceTable::ByStyle(row(&[("Free hand", 10_000), ("Styled", 12_000)]));

        let curls = product(
            5,
            "Curls (Add-on)",
            "Curls add-on to finish your style.",
            "addon",
            5_000,
        );

        let wig = product(
            6,
            "Wig Installation",
            "Professional wig installation and styling.",
            "service",
            15_000,
        );

        let nails = product(
            7,
            "Gel on Nails",
            "Gel nail application for beautiful, long-lasting nails.",
            "service",
            5_000,
        );

        Catalog {
            store_name: "MoonL Braids".to_owned(),
            profile: OrderProfile::Booking,
            recipient: recipient("27795430029"),
            add_on: Some(AddOnPolicy {
                label: "Hair Wash".to_owned(),
                surcharge: Money::from_cents(5_000),
                categories: vec![Category::new("braids"), Category::new("cornrows")],
            }),
            products: vec![knotless, fulani, straight_back, cornrows, curls, wig, nails],
        }
    }
}
