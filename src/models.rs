//! Request payloads sent by the handlers
//!
//! Responses are kept as raw JSON snapshots in the stores; only what the
//! console itself sends is typed here.

use serde::{Deserialize, Serialize};

use crate::date::pad2;

/// A billing period
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Period {
    pub year: i32,
    pub month: u32,
}

impl Period {
    pub fn new(year: i32, month: u32) -> Self {
        Self { year, month }
    }

    /// `year` / zero-padded `month` query parameters
    pub fn query(&self) -> Vec<(&'static str, String)> {
        vec![("year", self.year.to_string()), ("month", pad2(self.month))]
    }
}

/// A billing period for one user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserPeriod {
    pub user_id: i64,
    pub year: i32,
    pub month: u32,
}

impl UserPeriod {
    pub fn new(user_id: i64, year: i32, month: u32) -> Self {
        Self { user_id, year, month }
    }

    pub fn query(&self) -> Vec<(&'static str, String)> {
        vec![
            ("user_id", self.user_id.to_string()),
            ("year", self.year.to_string()),
            ("month", pad2(self.month)),
        ]
    }
}

/// Body of `POST /api/user`; the account stays pending until accepted
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRegister {
    pub email: String,
    pub password: String,
    pub name: String,
}

/// Body of `PUT /api/user/{id}`; unset fields are left untouched server side
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_password_check: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plate_fee: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contract_fee: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permission_user: Option<Permission>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permission_transaction: Option<Permission>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permission_invoice: Option<Permission>,
}

/// Permission grades: self read, all read, all read/write (and self read/write)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Permission {
    #[serde(rename = "SR")]
    SelfRead,
    #[serde(rename = "SRW")]
    SelfReadWrite,
    #[serde(rename = "AR")]
    AllRead,
    #[serde(rename = "ARW")]
    AllReadWrite,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionCreate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,
    pub insurance_company_id: i64,
    pub vehicle_id: String,
    pub vehicle_model: String,
    pub date: String,
    pub price: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memo: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TransactionUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub insurance_company_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vehicle_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vehicle_model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub canceled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cancel_fee: Option<i64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CanceledType {
    All,
    ExcludeCanceled,
    CanceledOnly,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderBy {
    TransactionId,
    UserId,
    Price,
    CancelFee,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderType {
    Asc,
    Desc,
}

/// Filter for `POST /api/transaction/table`
///
/// The pickers use `""` for "no date" and `-1` for "any user / company";
/// [`LookupOptions::sanitized`] drops those before the body is sent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LookupOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub insurance_company_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub canceled_type: Option<CanceledType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_by: Option<OrderBy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_type: Option<OrderType>,
}

pub const ANY_ID: i64 = -1;

impl LookupOptions {
    pub fn sanitized(&self) -> Self {
        fn keep_date(v: &Option<String>) -> Option<String> {
            v.clone().filter(|s| !s.is_empty())
        }
        fn keep_id(v: Option<i64>) -> Option<i64> {
            v.filter(|id| *id != ANY_ID)
        }

        Self {
            start_date: keep_date(&self.start_date),
            end_date: keep_date(&self.end_date),
            user_id: keep_id(self.user_id),
            insurance_company_id: keep_id(self.insurance_company_id),
            ..self.clone()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyInvoiceCreate {
    pub year: i32,
    pub month: u32,
    pub rental_fee: i64,
    pub maintenance_fee: i64,
}

/// An extra line on a user or company invoice
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtraLine {
    pub id: i64,
    pub name: String,
    pub price: i64,
}
