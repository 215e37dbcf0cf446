use std::fs;
use std::io;
use std::path::Path;

use ahash::AHashSet;

use crate::error::ReferenceDataError;

/// Categories of externally maintained reference lists.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReferenceCategory {
    /// Dublin postal district codes (D1, D2, ... D6W).
    PostalDistricts,
    /// The published list of eircode routing keys.
    EircodeRoutingKeys,
}

impl ReferenceCategory {
    /// File name for this category inside an override directory. These are
    /// the names the lists have always been published under.
    pub fn file_name(&self) -> &'static str {
        match self {
            ReferenceCategory::PostalDistricts => "IE_postalcodes.txt",
            ReferenceCategory::EircodeRoutingKeys => "IE_EircodeRoutingKeys.txt",
        }
    }

    fn packaged_list(&self) -> &'static str {
        match self {
            ReferenceCategory::PostalDistricts => include_str!("../data/IE_postalcodes.txt"),
            ReferenceCategory::EircodeRoutingKeys => {
                include_str!("../data/IE_EircodeRoutingKeys.txt")
            }
        }
    }
}

/// A set of canonical codes loaded from a newline delimited list. Used only
/// for exact, case sensitive membership tests; callers canonicalize their
/// input before looking it up.
pub struct ReferenceSet {
    codes: AHashSet<String>,
}

impl ReferenceSet {
    /// Load the list for `category`, reading it from `override_dir` when one
    /// is given and from the packaged copy otherwise.
    pub fn load(
        category: ReferenceCategory,
        override_dir: Option<&Path>,
    ) -> Result<ReferenceSet, ReferenceDataError> {
        let contents = match override_dir {
            Some(dir) => {
                let path = dir.join(category.file_name());
                match fs::read_to_string(&path) {
                    Ok(contents) => contents,
                    Err(source) if source.kind() == io::ErrorKind::NotFound => {
                        return Err(ReferenceDataError::Missing { path })
                    }
                    Err(source) => return Err(ReferenceDataError::Unreadable { path, source }),
                }
            }
            None => return Ok(ReferenceSet::from_lines(category.packaged_list())),
        };
        Ok(ReferenceSet::from_lines(&contents))
    }

    fn from_lines(contents: &str) -> ReferenceSet {
        ReferenceSet {
            codes: contents
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(str::to_string)
                .collect(),
        }
    }

    pub fn contains(&self, code: &str) -> bool {
        self.codes.contains(code)
    }
}
