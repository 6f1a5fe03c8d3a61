//! Database rows as they appear in a Signal backup.
//!
//! A backup is a stream of frames; the ones this crate cares about carry a single SQL statement
//! (`INSERT INTO sms VALUES (?, ?, ...)`) together with its bound parameters. The message types
//! below mirror `protobuf/Backups.proto` and can be decoded from raw frame bytes with
//! [`prost::Message::decode`].
//!
//! The prost derives are maintained by hand instead of running `prost-build`, so building does
//! not need `protoc`. Keep field names and tags in sync with the `.proto` file.

use once_cell::sync::Lazy;
use regex::Regex;

pub use self::sql_statement::SqlParameter;

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SqlStatement {
    #[prost(string, optional, tag = "1")]
    pub statement: ::core::option::Option<::prost::alloc::string::String>,
    #[prost(message, repeated, tag = "2")]
    pub parameters: ::prost::alloc::vec::Vec<sql_statement::SqlParameter>,
}

pub mod sql_statement {
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct SqlParameter {
        // Sic, that's what the field is called upstream.
        #[prost(string, optional, tag = "1")]
        pub string_paramter: ::core::option::Option<::prost::alloc::string::String>,
        #[prost(uint64, optional, tag = "2")]
        pub integer_parameter: ::core::option::Option<u64>,
        #[prost(double, optional, tag = "3")]
        pub double_parameter: ::core::option::Option<f64>,
        #[prost(bytes = "vec", optional, tag = "4")]
        pub blob_parameter: ::core::option::Option<::prost::alloc::vec::Vec<u8>>,
        #[prost(bool, optional, tag = "5")]
        pub nullparameter: ::core::option::Option<bool>,
    }
}

static INSERT_TABLE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)^\s*INSERT\s+INTO\s+["`]?([A-Za-z_][A-Za-z0-9_]*)["`]?"#)
        .expect("valid table regex")
});

impl SqlStatement {
    pub fn new(statement: impl Into<String>, parameters: Vec<SqlParameter>) -> Self {
        SqlStatement {
            statement: Some(statement.into()),
            parameters,
        }
    }

    /// Number of bound parameters, i.e. the number of columns of the row.
    pub fn column_count(&self) -> usize {
        self.parameters.len()
    }

    /// The table this statement inserts into, or `None` for anything that is not an `INSERT`.
    pub fn table(&self) -> Option<&str> {
        let statement = self.statement.as_deref()?;
        INSERT_TABLE
            .captures(statement)
            .and_then(|c| c.get(1))
            .map(|m| m.as_str())
    }
}

impl SqlParameter {
    pub fn text(s: impl Into<String>) -> Self {
        SqlParameter {
            string_paramter: Some(s.into()),
            ..Default::default()
        }
    }

    pub fn integer(n: u64) -> Self {
        SqlParameter {
            integer_parameter: Some(n),
            ..Default::default()
        }
    }

    pub fn double(n: f64) -> Self {
        SqlParameter {
            double_parameter: Some(n),
            ..Default::default()
        }
    }

    pub fn blob(b: impl Into<Vec<u8>>) -> Self {
        SqlParameter {
            blob_parameter: Some(b.into()),
            ..Default::default()
        }
    }

    pub fn null() -> Self {
        SqlParameter {
            nullparameter: Some(true),
            ..Default::default()
        }
    }

    /// A parameter is NULL when it says so, or when it carries no value at all.
    pub fn is_null(&self) -> bool {
        self.nullparameter.unwrap_or(false)
            || (self.string_paramter.is_none()
                && self.integer_parameter.is_none()
                && self.double_parameter.is_none()
                && self.blob_parameter.is_none())
    }

    pub fn as_str(&self) -> Option<&str> {
        self.string_paramter.as_deref()
    }

    /// Integer value of the column.
    ///
    /// SQLite is loosely typed, so text made of decimal digits is accepted as well. Signed text
    /// such as an E.164 number (`+32...`) is not an integer column value.
    pub fn as_u64(&self) -> Option<u64> {
        self.integer_parameter.or_else(|| {
            self.as_str()
                .map(str::trim)
                .filter(|s| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()))
                .and_then(|s| s.parse().ok())
        })
    }

    pub fn as_blob(&self) -> Option<&[u8]> {
        self.blob_parameter.as_deref()
    }
}
