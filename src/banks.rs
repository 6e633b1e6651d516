use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::models::{header_row, RawRow, TargetRecord, TxType};
use crate::records::SourceRecord;

// ---------------------------------------------------------------------------
// Field parsing shared by every bank
// ---------------------------------------------------------------------------

/// `day/month/year` -> `year/MM/DD 00:00`. Only the shape is checked, not
/// whether the day exists in that month.
pub fn parse_date(raw: Option<&str>) -> Option<String> {
    let parts: Vec<&str> = raw?.trim().split('/').collect();
    let [day, month, year] = parts.as_slice() else {
        return None;
    };
    if day.is_empty() || month.is_empty() || year.is_empty() {
        return None;
    }
    Some(format!("{year}/{month:0>2}/{day:0>2} 00:00"))
}

/// Strip whitespace and thousands separators, then parse. Non-finite values
/// and empty cells are rejected.
pub fn parse_amount(raw: Option<&str>) -> Option<f64> {
    let cleaned: String = raw?
        .chars()
        .filter(|c| !c.is_whitespace() && *c != ',')
        .collect();
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse::<f64>().ok().filter(|n| n.is_finite())
}

// ---------------------------------------------------------------------------
// Bank profiles
// ---------------------------------------------------------------------------

/// Which sign a statement uses for money leaving the account.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignConvention {
    NegativeIsExpense,
    PositiveIsExpense,
}

impl SignConvention {
    pub fn classify(&self, amount: f64) -> TxType {
        let expense = match self {
            Self::NegativeIsExpense => amount < 0.0,
            Self::PositiveIsExpense => amount > 0.0,
        };
        if expense {
            TxType::Expense
        } else {
            TxType::Income
        }
    }
}

/// Where the first account column comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountSource {
    Field(&'static str),
    Description,
}

/// Everything that differs between two statement formats.
#[derive(Debug)]
pub struct BankProfile {
    pub date_field: &'static str,
    pub amount_field: &'static str,
    /// Alternative spellings of the description header, tried in order.
    pub description_fields: &'static [&'static str],
    pub description_cleanup: Option<&'static LazyLock<Regex>>,
    pub account_source: AccountSource,
    pub sign: SignConvention,
    pub note_tag: &'static str,
}

static HSBC_REGION_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"CHN\s+CN").expect("static pattern"));

static HSBC_PROFILE: BankProfile = BankProfile {
    date_field: "Transaction date",
    amount_field: "Billing amount",
    description_fields: &["Description"],
    description_cleanup: Some(&HSBC_REGION_SUFFIX),
    account_source: AccountSource::Field("Merchant name"),
    sign: SignConvention::NegativeIsExpense,
    note_tag: "pulse信用卡",
};

static BEA_PROFILE: BankProfile = BankProfile {
    date_field: "交易日期",
    amount_field: "金額",
    description_fields: &["賬項說明", "账项说明"],
    description_cleanup: None,
    account_source: AccountSource::Description,
    sign: SignConvention::PositiveIsExpense,
    note_tag: "BEA信用卡",
};

impl BankProfile {
    fn description(&self, record: &SourceRecord) -> String {
        let raw = record.first_of(self.description_fields).unwrap_or("");
        match self.description_cleanup {
            Some(pattern) => pattern.replace_all(raw, "").trim().to_string(),
            None => raw.trim().to_string(),
        }
    }

    /// Map one source row, or `None` when its date or amount does not parse.
    pub fn map_record(&self, record: &SourceRecord) -> Option<TargetRecord> {
        let time = parse_date(record.get(self.date_field))?;
        let amount = parse_amount(record.get(self.amount_field))?;
        let description = self.description(record);
        let account1 = match self.account_source {
            AccountSource::Field(name) => record.get(name).unwrap_or("").trim().to_string(),
            AccountSource::Description => description.clone(),
        };

        Some(TargetRecord {
            time,
            category: description,
            tx_type: self.sign.classify(amount),
            amount: amount.abs(),
            account1,
            account2: String::new(),
            note: self.note_tag.to_string(),
            bill_tag: String::new(),
            fee: String::new(),
            coupon: String::new(),
            label: String::new(),
            image: String::new(),
        })
    }

    pub fn convert(&self, records: &[SourceRecord]) -> Conversion {
        let mut rows = Vec::with_capacity(records.len());
        let mut skipped = 0usize;
        for (i, record) in records.iter().enumerate() {
            match self.map_record(record) {
                Some(target) => rows.push(target),
                None => {
                    debug!(
                        row = i + 1,
                        date = record.get(self.date_field).unwrap_or(""),
                        amount = record.get(self.amount_field).unwrap_or(""),
                        "skipping row without a usable date or amount"
                    );
                    skipped += 1;
                }
            }
        }
        Conversion { rows, skipped }
    }

    /// Headers that must be present for a file to be recognised as this format.
    pub fn required_headers(&self) -> [&'static str; 2] {
        [self.date_field, self.amount_field]
    }
}

/// Output of a bank transform: converted rows plus the number of rows dropped.
#[derive(Debug, Clone, PartialEq)]
pub struct Conversion {
    pub rows: Vec<TargetRecord>,
    pub skipped: usize,
}

impl Conversion {
    /// Header row followed by one row per converted record.
    pub fn to_rows(&self) -> Vec<RawRow> {
        std::iter::once(header_row())
            .chain(self.rows.iter().map(TargetRecord::to_row))
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Bank kinds: enum dispatch over profiles
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BankKind {
    Hsbc,
    Bea,
}

pub const ALL_BANKS: &[BankKind] = &[BankKind::Hsbc, BankKind::Bea];

impl BankKind {
    /// Short key, also used as the output file prefix.
    pub fn key(&self) -> &'static str {
        match self {
            Self::Hsbc => "hsbc",
            Self::Bea => "bea",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Hsbc => "HSBC credit card",
            Self::Bea => "BEA credit card",
        }
    }

    pub fn profile(&self) -> &'static BankProfile {
        match self {
            Self::Hsbc => &HSBC_PROFILE,
            Self::Bea => &BEA_PROFILE,
        }
    }

    pub fn from_key(key: &str) -> Option<BankKind> {
        ALL_BANKS.iter().find(|b| b.key() == key).copied()
    }

    /// Guess the format from cleaned header names. HSBC is checked first.
    pub fn detect(headers: &[String]) -> Option<BankKind> {
        ALL_BANKS.iter().copied().find(|bank| {
            bank.profile()
                .required_headers()
                .iter()
                .all(|required| headers.iter().any(|h| h == required))
        })
    }

    pub fn convert(&self, records: &[SourceRecord]) -> Conversion {
        self.profile().convert(records)
    }
}
