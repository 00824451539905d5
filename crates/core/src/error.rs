use thiserror::Error;

use crate::model::{ConsentError, DemographicError, ExitError, TableError, TaskError};

/// Any validation failure raised while building a record or table.
#[derive(Debug, Error, Clone, PartialEq)]
#[non_exhaustive]
pub enum Error {
    #[error(transparent)]
    Consent(#[from] ConsentError),
    #[error(transparent)]
    Demographic(#[from] DemographicError),
    #[error(transparent)]
    Task(#[from] TaskError),
    #[error(transparent)]
    Exit(#[from] ExitError),
    #[error(transparent)]
    Table(#[from] TableError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ConsentRecord, Table};
    use crate::time::fixed_now;

    fn build_consent_table(given: bool) -> Result<Table, Error> {
        let record = ConsentRecord::new(fixed_now(), given)?;
        let mut table = Table::empty();
        table.push_record(&(&record).into())?;
        Ok(table)
    }

    #[test]
    fn record_errors_convert_into_crate_error() {
        assert_eq!(build_consent_table(true).unwrap().row_count(), 1);
        assert_eq!(
            build_consent_table(false).unwrap_err(),
            Error::Consent(ConsentError::NotGiven)
        );
    }
}
