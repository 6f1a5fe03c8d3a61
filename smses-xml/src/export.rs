//! Assembling a complete `<smses>` document from a stream of backup rows.

use std::collections::{HashMap, HashSet};

use crate::columns::{SqlMms, SqlPart, SqlSms};
use crate::config::{ExportConfig, UnknownTablePolicy, UnknownTypePolicy};
use crate::error::{Error, Result};
use crate::schema::{Mms, Sms, Smses};
use crate::statement::SqlStatement;
use crate::translate;

/// Collects SMS and MMS records in backup order.
///
/// Parts are attached to the MMS they belong to, so `part` rows have to come after the `mms`
/// row they reference, which is the order Signal writes its tables in.
pub struct SmsesBuilder {
    config: ExportConfig,
    sms: Vec<Sms>,
    mms: Vec<Mms>,
    /// MMS row id -> index into `mms`
    mms_index: HashMap<u64, usize>,
    /// Part row id -> (index into `mms`, index into its parts)
    part_index: HashMap<u64, (usize, usize)>,
    /// Indices into `mms` whose body became part 0
    with_body: HashSet<usize>,
    skipped: Vec<Error>,
}

impl Default for SmsesBuilder {
    fn default() -> Self {
        Self::new(ExportConfig::default())
    }
}

impl SmsesBuilder {
    pub fn new(config: ExportConfig) -> Self {
        SmsesBuilder {
            config,
            sms: Vec::new(),
            mms: Vec::new(),
            mms_index: HashMap::new(),
            part_index: HashMap::new(),
            with_body: HashSet::new(),
            skipped: Vec::new(),
        }
    }

    /// Feeds one backup statement.
    ///
    /// Statements that are not inserts (schema definitions, pragmas) are ignored.
    pub fn push_statement(&mut self, stmt: &SqlStatement) -> Result<()> {
        let table = match stmt.table() {
            Some(table) => table,
            None => return Ok(()),
        };

        let res = match table {
            "sms" => self.push_sms(stmt),
            "mms" => self.push_mms(stmt),
            "part" => self.push_part(stmt),
            other => match self.config.unknown_table {
                UnknownTablePolicy::Ignore => {
                    log::trace!("Ignoring row of table {}", other);
                    Ok(())
                }
                UnknownTablePolicy::Error => Err(Error::UnsupportedTable(other.to_owned())),
            },
        };

        match res {
            Err(e @ Error::UnknownMessageType { .. })
                if self.config.unknown_type == UnknownTypePolicy::Skip =>
            {
                log::warn!("Skipping {} row: {}", table, e);
                self.skipped.push(e);
                Ok(())
            }
            res => res,
        }
    }

    fn push_sms(&mut self, stmt: &SqlStatement) -> Result<()> {
        let row: SqlSms = translate::extract(stmt)?;
        self.sms.push(translate::sms_from_sql(&row)?);
        Ok(())
    }

    fn push_mms(&mut self, stmt: &SqlStatement) -> Result<()> {
        let row: SqlMms = translate::extract(stmt)?;
        let mms = translate::mms_from_sql(&row)?;

        let idx = self.mms.len();
        if self.mms_index.insert(row.id, idx).is_some() {
            log::warn!("MMS {} appears twice; parts will go to the last one", row.id);
        }
        if !mms.parts.is_empty() {
            self.with_body.insert(idx);
        }
        self.mms.push(mms);
        Ok(())
    }

    fn push_part(&mut self, stmt: &SqlStatement) -> Result<()> {
        let row: SqlPart = translate::extract(stmt)?;
        let mms_idx = match self.mms_index.get(&row.mms_id) {
            Some(idx) => *idx,
            None => {
                log::warn!("Dropping part {} of unknown MMS {}", row.id, row.mms_id);
                return Ok(());
            }
        };

        let mut part = translate::part_from_sql(&row);
        // The body part took seq 0, shift the stored parts past it.
        if self.with_body.contains(&mms_idx) {
            part.seq = part.seq.saturating_add(1);
        }

        let parts = &mut self.mms[mms_idx].parts;
        self.part_index.insert(row.id, (mms_idx, parts.len()));
        parts.push(part);
        Ok(())
    }

    /// Embeds the content of an attachment in its part.
    ///
    /// Returns whether the part was found.
    pub fn attach_data(&mut self, part_id: u64, content: &[u8]) -> bool {
        let (mms_idx, part_idx) = match self.part_index.get(&part_id) {
            Some(idx) => *idx,
            None => {
                log::warn!("Attachment for unknown part {}", part_id);
                return false;
            }
        };

        if self.config.attach_data {
            self.mms[mms_idx].parts[part_idx].set_data(content);
        }
        true
    }

    /// Records dropped because of an unclassifiable message type.
    pub fn skipped(&self) -> &[Error] {
        &self.skipped
    }

    pub fn finish(self) -> Smses {
        let mut mms = self.mms;
        for m in &mut mms {
            m.text_only = Some(m.is_text_only() as u64);
        }

        log::info!(
            "Exported {} SMS and {} MMS records, skipped {}",
            self.sms.len(),
            mms.len(),
            self.skipped.len()
        );

        Smses {
            count: mms.len() + self.sms.len(),
            mms,
            sms: self.sms,
        }
    }
}
