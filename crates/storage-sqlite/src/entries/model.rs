//! Database model for financial entries.

use std::str::FromStr;

use chrono::NaiveDate;
use diesel::prelude::*;
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use cofipei_core::constants::DISPLAY_DECIMAL_PRECISION;
use cofipei_core::entries::{EntryType, FinancialEntry};
use cofipei_core::errors::{DatabaseError, Result};

/// Stored date format; ISO so lexical order is chronological.
pub(crate) const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses a stored decimal, falling back to f64 and finally to zero.
fn parse_decimal_string_tolerant(value_str: &str, field_name: &str) -> Decimal {
    match Decimal::from_str(value_str) {
        Ok(d) => d,
        Err(e_decimal) => match f64::from_str(value_str) {
            Ok(f_val) => Decimal::from_f64(f_val).unwrap_or_else(|| {
                log::error!(
                    "Failed to convert {} '{}' (parsed as f64: {}) to Decimal.",
                    field_name,
                    value_str,
                    f_val
                );
                Decimal::ZERO
            }),
            Err(e_f64) => {
                log::error!(
                    "Failed to parse {} '{}': as Decimal (err: {}), and as f64 (err: {}). Falling back to ZERO.",
                    field_name, value_str, e_decimal, e_f64
                );
                Decimal::ZERO
            }
        },
    }
}

/// Row of the `lancamentos` table
#[derive(Queryable, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::lancamentos)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct EntryDB {
    pub id: i32,
    pub descricao: String,
    pub valor: String,
    pub categoria: String,
    pub tipo: String,
    pub data: String,
}

impl EntryDB {
    /// Stored amount at two decimal places, half-away-from-zero.
    pub fn get_amount(&self) -> Decimal {
        parse_decimal_string_tolerant(&self.valor, "valor")
            .round_dp_with_strategy(
                DISPLAY_DECIMAL_PRECISION,
                RoundingStrategy::MidpointAwayFromZero,
            )
    }

    /// A malformed stored date is a store fault, not a caller error.
    pub fn get_date(&self) -> Result<NaiveDate> {
        NaiveDate::parse_from_str(&self.data, DATE_FORMAT).map_err(|e| {
            log::error!("Entry {} has malformed date '{}': {}", self.id, self.data, e);
            DatabaseError::QueryFailed(format!("Entry {} has a malformed date", self.id)).into()
        })
    }
}

impl TryFrom<EntryDB> for FinancialEntry {
    type Error = cofipei_core::Error;

    fn try_from(db: EntryDB) -> Result<Self> {
        let amount = db.get_amount();
        let date = db.get_date()?;
        Ok(Self {
            id: db.id,
            description: db.descricao,
            amount,
            category: db.categoria,
            entry_type: EntryType::from(db.tipo),
            date,
        })
    }
}
