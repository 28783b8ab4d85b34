//! Column-name normalization for input tables.

use crate::error::TableError;
use crate::models::bonus::BonusRow;

/// Canonical user identifier column.
pub const USER_ID: &str = "User ID";
/// Canonical currency column.
pub const CURRENCY: &str = "Currency";
/// Canonical description column.
pub const DESCRIPTION: &str = "Description";

/// Map a raw header to its canonical name.
///
/// Matching ignores case, spaces and a leading byte-order mark, so
/// `User ID`, `User Id` and `Userid` all map to [`USER_ID`].
pub fn canonical_column(header: &str) -> Option<&'static str> {
    let key: String = header
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '\u{feff}')
        .flat_map(char::to_lowercase)
        .collect();

    match key.as_str() {
        "userid" => Some(USER_ID),
        "currency" => Some(CURRENCY),
        "description" => Some(DESCRIPTION),
        _ => None,
    }
}

/// Positions of the required columns in a header row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnIndex {
    user_id: usize,
    currency: usize,
    description: usize,
}

impl ColumnIndex {
    /// Locate the required columns. The first matching header wins.
    pub fn from_headers<I, S>(headers: I) -> Result<Self, TableError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut user_id = None;
        let mut currency = None;
        let mut description = None;

        for (i, header) in headers.into_iter().enumerate() {
            let slot = match canonical_column(header.as_ref()) {
                Some(USER_ID) => &mut user_id,
                Some(CURRENCY) => &mut currency,
                Some(DESCRIPTION) => &mut description,
                _ => continue,
            };
            slot.get_or_insert(i);
        }

        match (user_id, currency, description) {
            (Some(user_id), Some(currency), Some(description)) => Ok(Self {
                user_id,
                currency,
                description,
            }),
            _ => {
                let missing = [(USER_ID, user_id), (CURRENCY, currency), (DESCRIPTION, description)]
                    .into_iter()
                    .filter(|(_, index)| index.is_none())
                    .map(|(name, _)| name.to_string())
                    .collect();
                Err(TableError::MissingColumns(missing))
            }
        }
    }

    /// Build a row from its cells; short rows yield empty fields.
    pub fn row(&self, cells: &[String]) -> BonusRow {
        let cell = |i: usize| cells.get(i).cloned().unwrap_or_default();

        BonusRow {
            user_id: cell(self.user_id),
            currency: cell(self.currency),
            description: cell(self.description),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_canonical_column_variants() {
        for header in ["User ID", "User Id", "Userid", " user id ", "\u{feff}User ID"] {
            assert_eq!(canonical_column(header), Some(USER_ID), "{:?}", header);
        }
        assert_eq!(canonical_column("currency"), Some(CURRENCY));
        assert_eq!(canonical_column("Description"), Some(DESCRIPTION));
        assert_eq!(canonical_column("Comment"), None);
    }

    #[test]
    fn test_column_index_any_order() {
        let index = ColumnIndex::from_headers(["Description", "Extra", "Userid", "Currency"]).unwrap();
        let cells: Vec<String> = ["text", "x", "7", "RUB"].iter().map(|s| s.to_string()).collect();

        assert_eq!(
            index.row(&cells),
            BonusRow {
                user_id: "7".to_string(),
                currency: "RUB".to_string(),
                description: "text".to_string(),
            }
        );
    }

    #[test]
    fn test_missing_columns() {
        let err = ColumnIndex::from_headers(["User ID", "Comment"]).unwrap_err();

        match err {
            TableError::MissingColumns(missing) => {
                assert_eq!(missing, vec!["Currency", "Description"]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_short_row_is_padded() {
        let index = ColumnIndex::from_headers(["User ID", "Currency", "Description"]).unwrap();
        let row = index.row(&["1".to_string()]);
        assert_eq!(row.currency, "");
        assert_eq!(row.description, "");
    }
}
