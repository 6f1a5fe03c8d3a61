#![allow(dead_code)]

use rstest::fixture;
use smses_xml::{SqlParameter, SqlStatement};

pub mod sms_col {
    pub const ID: usize = 0;
    pub const ADDRESS: usize = 2;
    pub const PERSON: usize = 4;
    pub const DATE: usize = 5;
    pub const DATE_SENT: usize = 6;
    pub const PROTOCOL: usize = 7;
    pub const READ: usize = 8;
    pub const STATUS: usize = 9;
    pub const TYPE: usize = 10;
    pub const SUBJECT: usize = 13;
    pub const BODY: usize = 14;
    pub const SERVICE_CENTER: usize = 16;
}

pub mod mms_col {
    pub const ID: usize = 0;
    pub const DATE_SENT: usize = 2;
    pub const DATE: usize = 3;
    pub const MSG_BOX: usize = 4;
    pub const READ: usize = 5;
    pub const M_ID: usize = 6;
    pub const SUB: usize = 7;
    pub const BODY: usize = 9;
    pub const CT_T: usize = 11;
    pub const ADDRESS: usize = 13;
    pub const M_TYPE: usize = 17;
    pub const M_SIZE: usize = 19;
    pub const TR_ID: usize = 25;
    pub const NOTIFIED: usize = 40;
}

pub mod part_col {
    pub const ID: usize = 0;
    pub const MID: usize = 1;
    pub const SEQ: usize = 2;
    pub const CT: usize = 3;
    pub const NAME: usize = 4;
    pub const CHSET: usize = 5;
    pub const CL: usize = 9;
    pub const FILE_NAME: usize = 16;
}

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A row of `columns` NULL parameters for `table`.
pub struct Row {
    table: &'static str,
    params: Vec<SqlParameter>,
}

impl Row {
    pub fn new(table: &'static str, columns: usize) -> Self {
        Row {
            table,
            params: vec![SqlParameter::null(); columns],
        }
    }

    pub fn int(mut self, col: usize, n: u64) -> Self {
        self.params[col] = SqlParameter::integer(n);
        self
    }

    pub fn text(mut self, col: usize, s: &str) -> Self {
        self.params[col] = SqlParameter::text(s);
        self
    }

    pub fn statement(self) -> SqlStatement {
        let placeholders = vec!["?"; self.params.len()].join(",");
        SqlStatement::new(
            format!("INSERT INTO {} VALUES ({})", self.table, placeholders),
            self.params,
        )
    }
}

#[fixture]
pub fn sms_row() -> Row {
    init_logger();
    Row::new("sms", 22)
}

#[fixture]
pub fn mms_row() -> Row {
    init_logger();
    Row::new("mms", 42)
}

pub fn sms(id: u64, address: &str, r#type: u64, body: &str, date: u64) -> SqlStatement {
    Row::new("sms", 22)
        .int(sms_col::ID, id)
        .text(sms_col::ADDRESS, address)
        .int(sms_col::TYPE, r#type)
        .text(sms_col::BODY, body)
        .int(sms_col::DATE, date)
        .statement()
}

pub fn mms(id: u64, msg_box: u64, body: Option<&str>) -> SqlStatement {
    let row = Row::new("mms", 42)
        .int(mms_col::ID, id)
        .int(mms_col::MSG_BOX, msg_box)
        .int(mms_col::DATE, 1_600_000_000_000 + id);
    let row = match body {
        Some(body) => row.text(mms_col::BODY, body),
        None => row,
    };
    row.statement()
}

pub fn part(id: u64, mms_id: u64, seq: u64, ct: &str) -> SqlStatement {
    Row::new("part", 25)
        .int(part_col::ID, id)
        .int(part_col::MID, mms_id)
        .int(part_col::SEQ, seq)
        .text(part_col::CT, ct)
        .statement()
}
