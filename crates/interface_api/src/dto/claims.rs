//! Claims DTOs

use rust_decimal::Decimal;
use serde::Serialize;

use domain_claims::Claim;

#[derive(Debug, Serialize)]
pub struct ClaimResponse {
    pub id: i64,
    pub lecturer_name: String,
    pub title: String,
    pub description: String,
    pub hours: i32,
    pub rate: Decimal,
    /// Recomputed as hours * rate; never stored
    pub amount: Decimal,
    pub file_path: Option<String>,
    pub status: String,
}

impl From<Claim> for ClaimResponse {
    fn from(claim: Claim) -> Self {
        let amount = claim.amount();
        Self {
            id: claim.id.value(),
            lecturer_name: claim.lecturer_name,
            title: claim.title,
            description: claim.description,
            hours: claim.hours,
            rate: claim.rate,
            amount,
            file_path: claim.file_path,
            status: claim.status.to_string(),
        }
    }
}
