//! Records of the SMS Backup & Restore XML format.
//!
//! Field names are serialized verbatim as the XML attribute names the importer expects. Optional
//! attributes are left out entirely when absent; required ones are always written, even when
//! empty.

use serde::{Serialize, Serializer};

/// Message type, as defined by the XML backup format.
///
/// The ordinals are part of the format and must not change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u64)]
pub enum SmsType {
    Invalid = 0,
    Received = 1,
    Sent = 2,
    Draft = 3,
    Outbox = 4,
    Failed = 5,
    Queued = 6,
}

impl Default for SmsType {
    fn default() -> Self {
        SmsType::Invalid
    }
}

impl From<SmsType> for u64 {
    fn from(t: SmsType) -> u64 {
        t as u64
    }
}

impl Serialize for SmsType {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_u64(*self as u64)
    }
}

/// The document root, `<smses count="...">`.
#[derive(Serialize, Debug, Clone, Default, PartialEq)]
pub struct Smses {
    pub count: usize,
    pub mms: Vec<Mms>,
    pub sms: Vec<Sms>,
}

/// A Short Message Service record.
#[derive(Serialize, Debug, Clone, Default, PartialEq)]
pub struct Sms {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protocol: Option<u64>,
    pub address: String,
    /// Milliseconds since the epoch, as decimal text.
    pub date: String,
    pub r#type: SmsType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    pub body: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub toa: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sc_toa: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_center: Option<String>,
    pub read: u64,
    pub status: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locked: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_sent: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub readable_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_name: Option<u64>,
}

/// A Multimedia Messaging Service record.
#[derive(Serialize, Debug, Clone, Default, PartialEq)]
pub struct Mms {
    #[serde(rename = "part")]
    pub parts: Vec<MmsPart>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_only: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub: Option<String>,
    pub retr_st: String,
    pub date: u64,
    pub ct_cls: String,
    pub sub_cs: String,
    pub read: u64,
    pub ct_l: String,
    pub tr_id: String,
    pub st: String,
    pub msg_box: SmsType,
    pub address: String,
    pub m_cls: String,
    pub d_tm: String,
    pub read_status: String,
    pub ct_t: String,
    pub retr_txt_cs: String,
    pub d_rpt: u64,
    pub m_id: String,
    pub date_sent: u64,
    pub seen: u64,
    pub m_type: u64,
    pub v: u64,
    pub exp: String,
    pub pri: u64,
    pub rr: u64,
    pub resp_txt: String,
    pub rpt_a: String,
    pub locked: u64,
    pub retr_txt: String,
    pub resp_st: String,
    pub m_size: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub readable_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_name: Option<String>,
}

impl Mms {
    /// Whether every part is plain text or presentation markup.
    pub fn is_text_only(&self) -> bool {
        self.parts.iter().all(MmsPart::is_text)
    }
}

/// A data blob of an MMS, `<part>`.
#[derive(Serialize, Debug, Clone, Default, PartialEq)]
pub struct MmsPart {
    pub seq: u64,
    pub ct: String,
    pub name: String,
    pub chset: String,
    pub cd: String,
    pub r#fn: String,
    pub cid: String,
    pub cl: String,
    pub ctt_s: String,
    pub ctt_t: String,
    pub text: String,
    /// Base64 encoded inline content.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
}

pub const CONTENT_TYPE_TEXT: &str = "text/plain";
pub const CONTENT_TYPE_SMIL: &str = "application/smil";

/// UTF-8, as an IANA MIBenum.
pub const CHARSET_UTF8: u64 = 106;

impl MmsPart {
    /// A `text/plain` part carrying `text` inline.
    pub fn text(seq: u64, text: impl Into<String>) -> Self {
        MmsPart {
            seq,
            ct: CONTENT_TYPE_TEXT.into(),
            chset: CHARSET_UTF8.to_string(),
            text: text.into(),
            ..Default::default()
        }
    }

    pub fn is_text(&self) -> bool {
        self.ct == CONTENT_TYPE_TEXT || self.ct == CONTENT_TYPE_SMIL
    }

    /// Embeds `content` in the part.
    pub fn set_data(&mut self, content: &[u8]) {
        self.data = Some(base64::encode(content));
    }
}
