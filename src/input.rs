// Loading a user-supplied nuclide table from JSON.
use std::path::Path;

use crate::nucleus::Nucleus;

/// Errors from reading a nuclide table file. Arithmetic over (A, Z) is
/// never validated here; only the I/O and parse layers can fail.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("failed to read nuclide file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse nuclide JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Read a JSON array of nuclides, e.g.
///
/// ```json
/// [{"name": "U-238", "mass_number": 238, "atomic_number": 92}]
/// ```
///
/// Order in the file is preserved.
pub fn read_nuclei_from_json<P: AsRef<Path>>(path: P) -> Result<Vec<Nucleus>, InputError> {
    let contents = std::fs::read_to_string(path)?;
    let nuclei: Vec<Nucleus> = serde_json::from_str(&contents)?;
    Ok(nuclei)
}
