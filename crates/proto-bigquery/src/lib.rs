// The `google.cloud.bigquery.storage.v1` package is publicly exported as `storage`.
pub mod storage {
    include!("google.cloud.bigquery.storage.v1.rs");
}

use storage::read_session;

impl storage::ReadSession {
    /// The JSON Avro schema negotiated for this session, if the session
    /// was opened in the Avro data format.
    pub fn avro_schema(&self) -> Option<&str> {
        match &self.schema {
            Some(read_session::Schema::AvroSchema(schema)) => Some(&schema.schema),
            _ => None,
        }
    }
}
