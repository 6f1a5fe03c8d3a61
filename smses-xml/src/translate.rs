//! Signal table rows to XML backup records.

use crate::columns::{FromStatement, SqlMms, SqlPart, SqlSms};
use crate::error::{Error, Result};
use crate::millis_to_readable_date;
use crate::schema::{Mms, MmsPart, Sms, SmsType};
use crate::statement::SqlStatement;

/// Only the low bits of a Signal message type carry the base type; everything above is flags.
///
/// <https://github.com/signalapp/Signal-Android/blob/master/src/org/thoughtcrime/securesms/database/MmsSmsColumns.java>
pub const BASE_TYPE_MASK: u64 = 0x1F;

/// Maps a Signal message type onto the XML message type.
///
/// Both the standard Android types and the Signal specific ones are understood. Anything else
/// is an error: guessing would produce a backup that may not import correctly.
pub fn classify(raw: u64) -> Result<SmsType> {
    let t = match raw & BASE_TYPE_MASK {
        // Android
        1 => SmsType::Received,
        2 => SmsType::Sent,
        3 => SmsType::Draft,
        4 => SmsType::Outbox,
        5 => SmsType::Failed,
        6 => SmsType::Queued,

        // Signal
        20 => SmsType::Received,
        21 => SmsType::Outbox,
        22 => SmsType::Queued, // sending
        23 => SmsType::Sent,
        24 => SmsType::Failed,
        25 => SmsType::Queued, // pending secure SMS fallback
        26 => SmsType::Queued, // pending insecure SMS fallback
        27 => SmsType::Draft,

        _ => {
            log::error!("Undefined SMS type {:#x}", raw);
            return Err(Error::UnknownMessageType { raw });
        }
    };
    Ok(t)
}

/// Extracts a typed row, checking the column count.
pub fn extract<T: FromStatement>(stmt: &SqlStatement) -> Result<T> {
    T::from_statement(stmt).ok_or_else(|| Error::ColumnCount {
        table: T::TABLE,
        expected: T::COLUMNS,
        actual: stmt.column_count(),
    })
}

pub fn sms_from_statement(stmt: &SqlStatement) -> Result<Sms> {
    sms_from_sql(&extract(stmt)?)
}

pub fn mms_from_statement(stmt: &SqlStatement) -> Result<Mms> {
    mms_from_sql(&extract(stmt)?)
}

/// Returns the id of the MMS the part belongs to, together with the part.
pub fn part_from_statement(stmt: &SqlStatement) -> Result<(u64, MmsPart)> {
    let part: SqlPart = extract(stmt)?;
    Ok((part.mms_id, part_from_sql(&part)))
}

pub fn sms_from_sql(sms: &SqlSms) -> Result<Sms> {
    log::trace!("Translating sms {}", sms.id);

    let r#type = match sms.r#type {
        Some(t) => classify(t)?,
        None => SmsType::Invalid,
    };

    Ok(Sms {
        protocol: Some(sms.protocol),
        address: sms.address.clone().unwrap_or_default(),
        date: sms
            .date_received
            .map(|d| d.to_string())
            .unwrap_or_default(),
        r#type,
        subject: sms.subject.clone(),
        body: sms.body.clone().unwrap_or_default(),
        toa: None,
        sc_toa: None,
        service_center: sms.service_center.clone(),
        read: sms.read,
        // Signal stores the status unsigned, the format wants it signed (-1 is "none").
        status: sms.status as i64,
        locked: None,
        date_sent: sms.date_sent,
        readable_date: millis_to_readable_date(sms.date_received),
        contact_name: sms.person,
    })
}

fn num_text(n: Option<u64>) -> String {
    n.map(|n| n.to_string()).unwrap_or_default()
}

pub fn mms_from_sql(mms: &SqlMms) -> Result<Mms> {
    log::trace!("Translating mms {}", mms.id);

    let msg_box = match mms.message_box {
        Some(t) => classify(t)?,
        None => SmsType::Invalid,
    };

    let mut parts = Vec::new();
    if let Some(body) = mms.body.as_deref().filter(|b| !b.is_empty()) {
        parts.push(MmsPart::text(0, body));
    }

    Ok(Mms {
        parts,
        text_only: None,
        sub: mms.sub.clone(),
        retr_st: num_text(mms.retr_st),
        date: mms.date_received.unwrap_or(0),
        ct_cls: num_text(mms.ct_cls),
        sub_cs: num_text(mms.sub_cs),
        read: mms.read,
        ct_l: mms.ct_l.clone().unwrap_or_default(),
        tr_id: mms.tr_id.clone().unwrap_or_default(),
        st: num_text(mms.st),
        msg_box,
        address: mms.address.clone().unwrap_or_default(),
        m_cls: mms.m_cls.clone().unwrap_or_default(),
        d_tm: num_text(mms.d_tm),
        read_status: num_text(mms.read_status),
        ct_t: mms.ct_t.clone().unwrap_or_default(),
        retr_txt_cs: num_text(mms.retr_txt_cs),
        d_rpt: mms.d_rpt.unwrap_or(0),
        m_id: mms.m_id.clone().unwrap_or_default(),
        date_sent: mms.date_sent.unwrap_or(0),
        seen: mms.notified,
        m_type: mms.m_type.unwrap_or(0),
        v: mms.v.unwrap_or(0),
        exp: num_text(mms.exp),
        pri: mms.pri.unwrap_or(0),
        rr: mms.rr.unwrap_or(0),
        resp_txt: mms.resp_txt.clone().unwrap_or_default(),
        rpt_a: num_text(mms.rpt_a),
        locked: 0,
        retr_txt: mms.retr_txt.clone().unwrap_or_default(),
        resp_st: num_text(mms.resp_st),
        m_size: num_text(mms.m_size),
        readable_date: millis_to_readable_date(mms.date_received),
        contact_name: None,
    })
}

pub fn part_from_sql(part: &SqlPart) -> MmsPart {
    MmsPart {
        seq: part.seq,
        ct: part.ct.clone().unwrap_or_default(),
        name: part.name.clone().unwrap_or_default(),
        chset: num_text(part.chset),
        cd: part.cd.clone().unwrap_or_default(),
        r#fn: part
            .r#fn
            .clone()
            .or_else(|| part.file_name.clone())
            .unwrap_or_default(),
        cid: part.cid.clone().unwrap_or_default(),
        cl: part.cl.clone().unwrap_or_default(),
        ctt_s: num_text(part.ctt_s),
        ctt_t: part.ctt_t.clone().unwrap_or_default(),
        text: String::new(),
        data: None,
    }
}
