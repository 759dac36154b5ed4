//! Catalog column list.
//!
//! The order here is the order the stored procedure is asked for and the
//! order columns appear in the output file.

/// Row identifier; synthesized by the stored procedure rather than requested.
pub const ID_COLUMN: &str = "galtileid";

const BASE_COLUMNS: [&str; 4] = [ID_COLUMN, "ra", "dec", "redshift"];

const FLUX_COMPONENTS: [&str; 3] = ["bulge", "disk", "agn"];
const AXIS_PATTERNS: [&str; 2] = ["a_b_", "b_b_"];
const AXIS_COMPONENTS: [&str; 2] = ["b", "d"];
const ANGLE_COMPONENTS: [&str; 2] = ["bulge", "disk"];
const BANDS: [&str; 6] = ["u", "g", "r", "i", "z", "y"];

/// Ordered list of catalog column names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSpec {
    names: Vec<String>,
}

impl ColumnSpec {
    /// Column list for the galaxy catalog: header columns, per-component
    /// shape columns, then one AB magnitude per photometric band.
    pub fn galaxy_catalog() -> Self {
        let mut names: Vec<String> = BASE_COLUMNS.iter().map(|c| c.to_string()).collect();
        names.extend(expand(&["fluxnorm_"], &FLUX_COMPONENTS, ""));
        names.extend(expand(&AXIS_PATTERNS, &AXIS_COMPONENTS, ""));
        names.extend(expand(&["pa_"], &ANGLE_COMPONENTS, ""));
        names.extend(expand(&[""], &BANDS, "_ab"));
        Self { names }
    }

    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    /// Space-separated header line (without terminator).
    pub fn header(&self) -> String {
        self.names.join(" ")
    }

    /// Comma-joined list passed as `@ColumnNames`, identifier column excluded.
    ///
    /// `ra` and `dec` are also synthesized by the procedure but are real
    /// table columns, so they stay in the list.
    pub fn procedure_columns(&self) -> String {
        self.iter()
            .filter(|name| *name != ID_COLUMN)
            .collect::<Vec<_>>()
            .join(",")
    }
}

/// Cross every prefix with every component, prefix-major.
fn expand<'a>(
    prefixes: &'a [&'a str],
    components: &'a [&'a str],
    suffix: &'a str,
) -> impl Iterator<Item = String> + 'a {
    prefixes.iter().flat_map(move |prefix| {
        components
            .iter()
            .map(move |component| format!("{prefix}{component}{suffix}"))
    })
}
