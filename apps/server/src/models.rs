use chrono::NaiveDate;
use cofipei_core::reports::FinancialReport;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Report request; both dates are inclusive.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct RelatorioFinanceiroRequest {
    pub data_inicial: NaiveDate,
    pub data_final: NaiveDate,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct Periodo {
    pub data_inicial: NaiveDate,
    pub data_final: NaiveDate,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct RelatorioFinanceiroResponse {
    pub periodo: Periodo,
    pub total_despesas: f64,
    pub total_receitas: f64,
    /// Base64-encoded PNG chart
    pub imagem: String,
}

fn to_f64(value: Decimal) -> f64 {
    value.to_f64().unwrap_or(0.0)
}

impl From<FinancialReport> for RelatorioFinanceiroResponse {
    fn from(report: FinancialReport) -> Self {
        Self {
            periodo: Periodo {
                data_inicial: report.period.start_date(),
                data_final: report.period.end_date(),
            },
            total_despesas: to_f64(report.total_expenses),
            total_receitas: to_f64(report.total_income),
            imagem: report.image,
        }
    }
}
