//! Positional column mapping for the Signal `sms`, `mms` and `part` tables.
//!
//! Every row type knows its table name and its arity. Extraction fails (returns `None`) when the
//! statement does not have exactly that many parameters; the caller turns that into a
//! [`crate::Error::ColumnCount`].

use crate::statement::{SqlParameter, SqlStatement};

/// A fixed-shape row that can be read from a positional statement.
pub trait FromStatement: Sized {
    const TABLE: &'static str;
    const COLUMNS: usize;

    fn from_columns(columns: &mut Columns<'_>) -> Self;

    fn from_statement(stmt: &SqlStatement) -> Option<Self> {
        if stmt.column_count() != Self::COLUMNS {
            return None;
        }
        let mut columns = Columns::new(&stmt.parameters);
        Some(Self::from_columns(&mut columns))
    }
}

/// Cursor over the parameters of a statement.
///
/// NULL columns map to `None`; [`Columns::u64`] falls back to zero.
pub struct Columns<'a> {
    inner: std::slice::Iter<'a, SqlParameter>,
}

impl<'a> Columns<'a> {
    pub fn new(parameters: &'a [SqlParameter]) -> Self {
        Columns {
            inner: parameters.iter(),
        }
    }

    fn next_value(&mut self) -> Option<&'a SqlParameter> {
        self.inner.next().filter(|p| !p.is_null())
    }

    pub fn opt_u64(&mut self) -> Option<u64> {
        self.next_value().and_then(SqlParameter::as_u64)
    }

    pub fn u64(&mut self) -> u64 {
        self.opt_u64().unwrap_or(0)
    }

    pub fn opt_string(&mut self) -> Option<String> {
        self.next_value()
            .and_then(SqlParameter::as_str)
            .map(str::to_owned)
    }
}

/// A row of the `sms` table.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SqlSms {
    pub id: u64,
    pub thread_id: Option<u64>,
    pub address: Option<String>,
    pub address_device_id: u64,
    pub person: Option<u64>,
    pub date_received: Option<u64>,
    pub date_sent: Option<u64>,
    pub protocol: u64,
    pub read: u64,
    pub status: u64,
    pub r#type: Option<u64>,
    pub reply_path_present: Option<u64>,
    pub delivery_receipt_count: u64,
    pub subject: Option<String>,
    pub body: Option<String>,
    pub mismatched_identities: Option<String>,
    pub service_center: Option<String>,
    pub subscription_id: u64,
    pub expires_in: u64,
    pub expire_started: u64,
    pub notified: u64,
    pub read_receipt_count: u64,
}

impl FromStatement for SqlSms {
    const TABLE: &'static str = "sms";
    const COLUMNS: usize = 22;

    fn from_columns(c: &mut Columns<'_>) -> Self {
        SqlSms {
            id: c.u64(),
            thread_id: c.opt_u64(),
            address: c.opt_string(),
            address_device_id: c.u64(),
            person: c.opt_u64(),
            date_received: c.opt_u64(),
            date_sent: c.opt_u64(),
            protocol: c.u64(),
            read: c.u64(),
            status: c.u64(),
            r#type: c.opt_u64(),
            reply_path_present: c.opt_u64(),
            delivery_receipt_count: c.u64(),
            subject: c.opt_string(),
            body: c.opt_string(),
            mismatched_identities: c.opt_string(),
            service_center: c.opt_string(),
            subscription_id: c.u64(),
            expires_in: c.u64(),
            expire_started: c.u64(),
            notified: c.u64(),
            read_receipt_count: c.u64(),
        }
    }
}

/// A row of the `mms` table.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SqlMms {
    pub id: u64,
    pub thread_id: Option<u64>,
    pub date_sent: Option<u64>,
    pub date_received: Option<u64>,
    pub message_box: Option<u64>,
    pub read: u64,
    pub m_id: Option<String>,
    pub sub: Option<String>,
    pub sub_cs: Option<u64>,
    pub body: Option<String>,
    pub part_count: Option<u64>,
    pub ct_t: Option<String>,
    pub ct_l: Option<String>,
    pub address: Option<String>,
    pub address_device_id: Option<u64>,
    pub exp: Option<u64>,
    pub m_cls: Option<String>,
    pub m_type: Option<u64>,
    pub v: Option<u64>,
    pub m_size: Option<u64>,
    pub pri: Option<u64>,
    pub rr: Option<u64>,
    pub rpt_a: Option<u64>,
    pub resp_st: Option<u64>,
    pub st: Option<u64>,
    pub tr_id: Option<String>,
    pub retr_st: Option<u64>,
    pub retr_txt: Option<String>,
    pub retr_txt_cs: Option<u64>,
    pub read_status: Option<u64>,
    pub ct_cls: Option<u64>,
    pub resp_txt: Option<String>,
    pub d_tm: Option<u64>,
    pub delivery_receipt_count: u64,
    pub mismatched_identities: Option<String>,
    pub network_failures: Option<String>,
    pub d_rpt: Option<u64>,
    pub subscription_id: u64,
    pub expires_in: u64,
    pub expire_started: u64,
    pub notified: u64,
    pub read_receipt_count: u64,
}

impl FromStatement for SqlMms {
    const TABLE: &'static str = "mms";
    const COLUMNS: usize = 42;

    fn from_columns(c: &mut Columns<'_>) -> Self {
        SqlMms {
            id: c.u64(),
            thread_id: c.opt_u64(),
            date_sent: c.opt_u64(),
            date_received: c.opt_u64(),
            message_box: c.opt_u64(),
            read: c.u64(),
            m_id: c.opt_string(),
            sub: c.opt_string(),
            sub_cs: c.opt_u64(),
            body: c.opt_string(),
            part_count: c.opt_u64(),
            ct_t: c.opt_string(),
            ct_l: c.opt_string(),
            address: c.opt_string(),
            address_device_id: c.opt_u64(),
            exp: c.opt_u64(),
            m_cls: c.opt_string(),
            m_type: c.opt_u64(),
            v: c.opt_u64(),
            m_size: c.opt_u64(),
            pri: c.opt_u64(),
            rr: c.opt_u64(),
            rpt_a: c.opt_u64(),
            resp_st: c.opt_u64(),
            st: c.opt_u64(),
            tr_id: c.opt_string(),
            retr_st: c.opt_u64(),
            retr_txt: c.opt_string(),
            retr_txt_cs: c.opt_u64(),
            read_status: c.opt_u64(),
            ct_cls: c.opt_u64(),
            resp_txt: c.opt_string(),
            d_tm: c.opt_u64(),
            delivery_receipt_count: c.u64(),
            mismatched_identities: c.opt_string(),
            network_failures: c.opt_string(),
            d_rpt: c.opt_u64(),
            subscription_id: c.u64(),
            expires_in: c.u64(),
            expire_started: c.u64(),
            notified: c.u64(),
            read_receipt_count: c.u64(),
        }
    }
}

/// A row of the `part` table, i.e. one attachment of an MMS.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SqlPart {
    pub id: u64,
    pub mms_id: u64,
    pub seq: u64,
    pub ct: Option<String>,
    pub name: Option<String>,
    pub chset: Option<u64>,
    pub cd: Option<String>,
    pub r#fn: Option<String>,
    pub cid: Option<String>,
    pub cl: Option<String>,
    pub ctt_s: Option<u64>,
    pub ctt_t: Option<String>,
    pub encrypted: Option<u64>,
    pub pending_push: Option<u64>,
    pub data: Option<String>,
    pub data_size: Option<u64>,
    pub file_name: Option<String>,
    pub thumbnail: Option<String>,
    pub aspect_ratio: Option<String>,
    pub unique_id: Option<u64>,
    pub digest: Option<String>,
    pub fast_preflight_id: Option<String>,
    pub voice_note: u64,
    pub data_random: Option<String>,
    pub thumbnail_random: Option<String>,
}

impl FromStatement for SqlPart {
    const TABLE: &'static str = "part";
    const COLUMNS: usize = 25;

    fn from_columns(c: &mut Columns<'_>) -> Self {
        SqlPart {
            id: c.u64(),
            mms_id: c.u64(),
            seq: c.u64(),
            ct: c.opt_string(),
            name: c.opt_string(),
            chset: c.opt_u64(),
            cd: c.opt_string(),
            r#fn: c.opt_string(),
            cid: c.opt_string(),
            cl: c.opt_string(),
            ctt_s: c.opt_u64(),
            ctt_t: c.opt_string(),
            encrypted: c.opt_u64(),
            pending_push: c.opt_u64(),
            data: c.opt_string(),
            data_size: c.opt_u64(),
            file_name: c.opt_string(),
            thumbnail: c.opt_string(),
            aspect_ratio: c.opt_string(),
            unique_id: c.opt_u64(),
            digest: c.opt_string(),
            fast_preflight_id: c.opt_string(),
            voice_note: c.u64(),
            data_random: c.opt_string(),
            thumbnail_random: c.opt_string(),
        }
    }
}
