// src/config/consts.rs

// Net config
pub const HOST: &str = "www.stadt-land-fluss-online.de";
pub const LETTER_PAGE_PREFIX: &str = "/buchstabe-";
pub const CATEGORY_INDEX_PATH: &str = "/";

// Local store
pub const DEFAULT_STORE_FILE: &str = ".store/answers.csv";
pub const LOG_FILE: &str = ".store/debug.log";
pub const STORE_SEP: char = ',';

// The site marks letters without entries with a line starting like
// "Es gibt keine Städte mit X". Importer drops those.
pub const NO_ENTRY_PREFIX: &str = "Es gibt";

/// Heading name variants per supported category, keyed by normalized
/// category tag. The letter pages title their sections with either the
/// singular or the plural ("Stadt mit B" / "Städte mit B").
pub const CATEGORY_PATTERNS: &[(&str, &[&str])] = &[
    ("stadt", &["Stadt", "Städte"]),
    ("land", &["Land", "Länder"]),
    ("fluss", &["Fluss", "Flüsse"]),
    ("vorname", &["Vorname", "Namen"]),
    ("tier", &["Tier", "Tiere"]),
    ("beruf", &["Beruf", "Berufe"]),
    ("pflanze", &["Pflanze", "Pflanzen"]),
    ("band/musiker", &["Band", "Musiker"]),
    ("filme/serien", &["Filme", "Serien", "Filmtitel"]),
];

/// Index-page heading label → internal category tag.
pub const COUPLER: &[(&str, &str)] = &[
    ("Städte", "Stadt"),
    ("Länder", "Land"),
    ("Flüsse", "Fluss"),
];
