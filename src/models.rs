use crate::fmt::plain_amount;

/// Column headers of the Qianji import format, in order.
pub const QIANJI_FIELDS: [&str; 12] = [
    "时间",
    "分类",
    "类型",
    "金额",
    "账户1",
    "账户2",
    "备注",
    "账单标记",
    "手续费",
    "优惠券",
    "标签",
    "账单图片",
];

/// One CSV line split into cells, before any header association.
pub type RawRow = Vec<String>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TxType {
    Expense,
    Income,
}

impl TxType {
    /// Label Qianji expects in the type column.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Expense => "支出",
            Self::Income => "收入",
        }
    }
}

/// One row of Qianji output. `amount` is always non-negative; direction lives in `tx_type`.
#[derive(Debug, Clone, PartialEq)]
pub struct TargetRecord {
    pub time: String,
    pub category: String,
    pub tx_type: TxType,
    pub amount: f64,
    pub account1: String,
    pub account2: String,
    pub note: String,
    pub bill_tag: String,
    pub fee: String,
    pub coupon: String,
    pub label: String,
    pub image: String,
}

impl TargetRecord {
    /// Cells in `QIANJI_FIELDS` order.
    pub fn to_row(&self) -> RawRow {
        vec![
            self.time.clone(),
            self.category.clone(),
            self.tx_type.label().to_string(),
            plain_amount(self.amount),
            self.account1.clone(),
            self.account2.clone(),
            self.note.clone(),
            self.bill_tag.clone(),
            self.fee.clone(),
            self.coupon.clone(),
            self.label.clone(),
            self.image.clone(),
        ]
    }
}

pub fn header_row() -> RawRow {
    QIANJI_FIELDS.iter().map(|f| f.to_string()).collect()
}
