//! Fixed training-time feature schema.
//!
//! The column names and their order here are the orders the encoder and
//! scaler were fitted with. The pipeline cross-checks this table against the
//! loaded artifacts at startup, so any drift fails loudly instead of
//! producing silently wrong predictions.

/// Token a boolean `true` coerces to before encoding
pub const AFFIRMATIVE_TOKEN: &str = "Yes";

/// Token a boolean `false` coerces to before encoding
pub const NEGATIVE_TOKEN: &str = "No";

/// Sale year is pinned for the current deployment; the form does not ask for it
pub const SALE_YEAR: i64 = 2021;

/// Where a categorical column takes its value from
#[derive(Debug, Clone, Copy)]
pub enum CategoricalSource {
    /// Copied from an input field (the key may differ from the column name)
    Input(&'static str),
    /// An input month name, translated to its 1-12 index
    MonthIndex(&'static str),
    /// A fixed deployment constant
    Constant(i64),
}

/// One categorical column of the training schema
#[derive(Debug, Clone, Copy)]
pub struct CategoricalColumn {
    pub name: &'static str,
    pub source: CategoricalSource,
}

/// Categorical columns in encoder fit order. `Rooms` lives here rather than
/// with the numerics: discrete room counts were one-hot encoded at training
/// time.
pub const CATEGORICAL_COLUMNS: &[CategoricalColumn] = &[
    CategoricalColumn {
        name: "Basement",
        source: CategoricalSource::Input("Basement"),
    },
    CategoricalColumn {
        name: "Rooms",
        source: CategoricalSource::Input("Rooms"),
    },
    CategoricalColumn {
        name: "Pool",
        source: CategoricalSource::Input("Pool"),
    },
    CategoricalColumn {
        name: "Fire Place",
        source: CategoricalSource::Input("Fireplace"),
    },
    CategoricalColumn {
        name: "Attached Garage",
        source: CategoricalSource::Input("Attached Garage"),
    },
    CategoricalColumn {
        name: "Detached Garage",
        source: CategoricalSource::Input("Detached Garage"),
    },
    CategoricalColumn {
        name: "Basement Finish",
        source: CategoricalSource::Input("Basement Finish"),
    },
    CategoricalColumn {
        name: "Air Conditioning",
        source: CategoricalSource::Input("Air Conditioning"),
    },
    CategoricalColumn {
        name: "Multiple Residences",
        source: CategoricalSource::Input("Multiple Residences"),
    },
    CategoricalColumn {
        name: "Sale Year",
        source: CategoricalSource::Constant(SALE_YEAR),
    },
    CategoricalColumn {
        name: "Sale Month",
        source: CategoricalSource::MonthIndex("Sale Month"),
    },
    CategoricalColumn {
        name: "Market Region",
        source: CategoricalSource::Input("Market Region"),
    },
    CategoricalColumn {
        name: "Neighbourhood Area",
        source: CategoricalSource::Input("Neighbourhood Area"),
    },
    CategoricalColumn {
        name: "Street Type",
        source: CategoricalSource::Input("Street Type"),
    },
    CategoricalColumn {
        name: "Zoning",
        source: CategoricalSource::Input("Zoning"),
    },
    CategoricalColumn {
        name: "Property Use Code",
        source: CategoricalSource::Input("Property Use Code"),
    },
    CategoricalColumn {
        name: "Building Type",
        source: CategoricalSource::Input("Building Type"),
    },
];

/// One numeric column of the training schema
#[derive(Debug, Clone, Copy)]
pub struct NumericColumn {
    pub name: &'static str,
    pub input_key: &'static str,
}

/// Numeric columns in scaler fit order
pub const NUMERIC_COLUMNS: &[NumericColumn] = &[
    NumericColumn {
        name: "Year Built",
        input_key: "Year Built",
    },
    NumericColumn {
        name: "Total Living Area",
        input_key: "Total Living Area (sq.ft)",
    },
    NumericColumn {
        name: "Assessed Land Area",
        input_key: "Assessed Land Area (sq.ft)",
    },
    NumericColumn {
        name: "Total Assessed Value",
        input_key: "Total Assessed Value",
    },
    NumericColumn {
        name: "Sewer Frontage Measurement",
        input_key: "Sewer Frontage Measurement",
    },
    NumericColumn {
        name: "Water Frontage Measurement",
        input_key: "Water Frontage Measurement",
    },
];

/// 1-12 index for an English month name
pub fn month_index(name: &str) -> Option<u8> {
    match name {
        "January" => Some(1),
        "February" => Some(2),
        "March" => Some(3),
        "April" => Some(4),
        "May" => Some(5),
        "June" => Some(6),
        "July" => Some(7),
        "August" => Some(8),
        "September" => Some(9),
        "October" => Some(10),
        "November" => Some(11),
        "December" => Some(12),
        _ => None,
    }
}

/// Categorical column names in fit order
pub fn categorical_column_names() -> Vec<&'static str> {
    CATEGORICAL_COLUMNS.iter().map(|c| c.name).collect()
}

/// Numeric column names in fit order
pub fn numeric_column_names() -> Vec<&'static str> {
    NUMERIC_COLUMNS.iter().map(|c| c.name).collect()
}
