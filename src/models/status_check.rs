use chrono::{DateTime, NaiveDateTime, SecondsFormat, SubsecRound, Utc};
use mongodb::bson::{Bson, Document, doc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Request body of `POST /api/status`.
#[derive(Debug, Deserialize, ToSchema)]
pub struct StatusCheckCreate {
    pub client_name: String,
}

/// A client announcing its liveness at a point in time.
///
/// `id` and `timestamp` are assigned by the server at creation and never
/// change afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct StatusCheck {
    pub id: String,
    pub client_name: String,
    /// ISO 8601 timestamp in UTC
    pub timestamp: DateTime<Utc>,
}

/// A stored document that cannot be turned back into a [`StatusCheck`].
#[derive(Debug, thiserror::Error)]
pub enum RecordError {
    #[error("field `{0}` is missing or not a string")]
    Field(&'static str),

    #[error("field `timestamp` has unsupported type {0:?}")]
    TimestampType(mongodb::bson::spec::ElementType),

    #[error("invalid timestamp `{value}`: {source}")]
    Timestamp {
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("timestamp {0} is out of range")]
    TimestampRange(i64),
}

impl StatusCheck {
    /// Issues a new record for `client_name` with a fresh UUID v4 and the
    /// current UTC time. Timestamps keep microsecond precision, the finest
    /// the storage form carries.
    pub fn new(client_name: String) -> Self {
        Self::from_parts(
            Uuid::new_v4().to_string(),
            client_name,
            Utc::now().trunc_subsecs(6),
        )
    }

    pub fn from_parts(id: String, client_name: String, timestamp: DateTime<Utc>) -> Self {
        Self {
            id,
            client_name,
            timestamp,
        }
    }

    /// Storage form of the record, e.g.
    /// `{ id: "...", client_name: "alpha", timestamp: "2026-10-14T09:30:00.123456+00:00" }`.
    pub fn to_document(&self) -> Document {
        doc! {
            "id": self.id.as_str(),
            "client_name": self.client_name.as_str(),
            "timestamp": self.timestamp.to_rfc3339_opts(SecondsFormat::Micros, false),
        }
    }

    /// Decodes a stored document. The internal `_id` field, if present, is
    /// ignored. `timestamp` may be an ISO 8601 string or a native BSON
    /// datetime.
    pub fn from_document(document: &Document) -> Result<Self, RecordError> {
        let id = document
            .get_str("id")
            .map_err(|_| RecordError::Field("id"))?
            .to_owned();
        let client_name = document
            .get_str("client_name")
            .map_err(|_| RecordError::Field("client_name"))?
            .to_owned();

        let timestamp = match document.get("timestamp") {
            Some(Bson::String(raw)) => parse_timestamp(raw)?,
            Some(Bson::DateTime(native)) => {
                let millis = native.timestamp_millis();
                DateTime::from_timestamp_millis(millis).ok_or(RecordError::TimestampRange(millis))?
            }
            Some(other) => return Err(RecordError::TimestampType(other.element_type())),
            None => return Err(RecordError::Field("timestamp")),
        };

        Ok(Self::from_parts(id, client_name, timestamp))
    }
}

/// Parses an ISO 8601 timestamp. Values without an offset are taken as UTC.
pub fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>, RecordError> {
    DateTime::parse_from_rfc3339(raw)
        .map(|parsed| parsed.with_timezone(&Utc))
        .or_else(|_| {
            NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f").map(|naive| naive.and_utc())
        })
        .map_err(|source| RecordError::Timestamp {
            value: raw.to_string(),
            source,
        })
}
