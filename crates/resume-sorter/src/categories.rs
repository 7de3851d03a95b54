//! Mapping from classifier output ids to job category names.

use std::collections::BTreeMap;

/// Class id produced by the classifier.
pub type CategoryId = u32;

/// Label used for any id missing from the table.
pub const UNKNOWN_CATEGORY: &str = "Unknown";

/// Job categories the bundled classifier was trained on.
pub const DEFAULT_CATEGORIES: &[(CategoryId, &str)] = &[
    (0, "Advocate"),
    (1, "Arts"),
    (2, "Automation Testing"),
    (3, "Blockchain"),
    (4, "Business Analyst"),
    (5, "Civil Engineer"),
    (6, "Data Science"),
    (7, "Database"),
    (8, "DevOps Engineer"),
    (9, "DotNet Developer"),
    (10, "ETL Developer"),
    (11, "Electrical Engineering"),
    (12, "HR"),
    (13, "Hadoop"),
    (14, "Health and fitness"),
    (15, "Java Developer"),
    (16, "Mechanical Engineer"),
    (17, "Network Security Engineer"),
    (18, "Operations Manager"),
    (19, "PMO"),
    (20, "Python Developer"),
    (21, "SAP Developer"),
    (22, "Sales"),
    (23, "Testing"),
    (24, "Web Designing"),
];

/// Read-only id → name table, built once at startup.
#[derive(Debug, Clone)]
pub struct CategoryTable {
    names: BTreeMap<CategoryId, String>,
}

impl CategoryTable {
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (CategoryId, S)>,
        S: Into<String>,
    {
        Self {
            names: entries
                .into_iter()
                .map(|(id, name)| (id, name.into()))
                .collect(),
        }
    }

    /// Returns the category name for `id`, or [`UNKNOWN_CATEGORY`].
    pub fn lookup(&self, id: CategoryId) -> &str {
        self.names
            .get(&id)
            .map(String::as_str)
            .unwrap_or(UNKNOWN_CATEGORY)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl Default for CategoryTable {
    fn default() -> Self {
        Self::new(DEFAULT_CATEGORIES.iter().copied())
    }
}
