use anyhow::Context;
use clap::Parser;
use std::io::Write;

pub mod client;
pub mod decode;
pub mod read;
pub mod table;

#[cfg(test)]
mod testing;

pub use client::{Client, SessionOptions};
pub use decode::{Datum, Kind, RowDecoder};
pub use read::process_rows;

/// Default endpoint of the BigQuery Storage API.
pub const DEFAULT_ENDPOINT: &str = "https://bigquerystorage.googleapis.com";

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("read service status {:?}: {}", .0.code(), .0.message())]
    Status(#[from] tonic::Status),
    #[error("invalid access token: {0}")]
    InvalidToken(String),
    #[error("invalid gRPC endpoint: '{0}'")]
    InvalidEndpoint(String),
    #[error(transparent)]
    Transport(#[from] tonic::transport::Error),
    #[error("avro decoding failed: {0}")]
    Avro(#[from] apache_avro::Error),
    #[error("failed to write rows")]
    Io(#[from] std::io::Error),
    #[error("{0}")]
    Protocol(&'static str),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Read a BigQuery table through the Storage Read API and print its rows.
///
/// Rows are decoded from Avro, and each record field is printed as
/// `<kind>: <value>`. Only string, int, and long values are rendered;
/// fields of other kinds print their type tag alone.
#[derive(Debug, Parser)]
#[command(about, version)]
pub struct Cli {
    /// Project which owns the read session, and is billed for it.
    project_id: String,
    /// Table to read, as `projects/<project>/datasets/<dataset>/tables/<table>`
    /// or `<project>.<dataset>.<table>`.
    table: String,

    /// Endpoint of the BigQuery Storage API.
    #[arg(long, default_value = DEFAULT_ENDPOINT, env = "BIGQUERY_STORAGE_ENDPOINT")]
    endpoint: String,
    /// OAuth2 access token used to authorize requests.
    /// If not set, one is requested from `gcloud auth application-default print-access-token`.
    #[arg(long, env = "GOOGLE_OAUTH_ACCESS_TOKEN", hide_env_values = true)]
    access_token: Option<String>,
    /// Upper bound on the number of parallel streams of the read session.
    /// Only the first stream is read.
    #[arg(long, default_value = "1")]
    max_streams: i32,
    /// Row offset within the stream at which reading begins.
    #[arg(long, default_value = "0")]
    offset: i64,
    /// Names of table fields to read. May be repeated. All fields are read if unset.
    #[arg(long = "selected-field")]
    selected_fields: Vec<String>,
    /// SQL predicate used to filter table rows, such as `age > 21`.
    #[arg(long)]
    row_restriction: Option<String>,
}

impl Cli {
    pub async fn run<W: Write>(self, out: &mut W) -> anyhow::Result<()> {
        let token = match self.access_token {
            Some(token) => token,
            None => client::application_default_token()
                .context("failed to obtain an access token")?,
        };

        let client = Client::connect(&self.endpoint, &token)
            .await
            .with_context(|| format!("failed to connect to {}", self.endpoint))?;

        let options = SessionOptions {
            max_streams: self.max_streams,
            selected_fields: self.selected_fields,
            row_restriction: self.row_restriction,
        };
        let session = client
            .create_read_session(client::session_request(
                &self.project_id,
                &self.table,
                &options,
            ))
            .await?;

        tracing::info!(
            session = %session.name,
            streams = session.streams.len(),
            estimated_rows = session.estimated_row_count,
            "opened read session"
        );

        // Only the first stream of the session is read, even if the
        // service handed out more than one.
        let num_rows = match session.streams.first() {
            Some(stream) => {
                let schema = session
                    .avro_schema()
                    .ok_or(Error::Protocol("read session has no Avro schema"))?;

                if session.streams.len() > 1 {
                    tracing::warn!(
                        skipped = session.streams.len() - 1,
                        "reading only the first of multiple session streams"
                    );
                }
                let batches = client.read_rows(stream.name.clone(), self.offset);
                process_rows(schema, batches, &mut *out).await?
            }
            None => {
                tracing::info!("read session has no streams (is the table empty?)");
                0
            }
        };

        writeln!(out, "{num_rows} rows read from table: {}", self.table)?;
        out.flush()?;

        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::Cli;
    use crate::testing::{avro_batch, avro_session, FakeRead, SCHEMA};
    use clap::Parser;
    use pretty_assertions::assert_eq;
    use std::sync::Arc;

    async fn run(fake: &Arc<FakeRead>, table: &str) -> (anyhow::Result<()>, String) {
        let endpoint = fake.serve().await;
        let cli = Cli::try_parse_from([
            "bq-read",
            "--endpoint",
            endpoint.as_str(),
            "--access-token",
            "a-token",
            "my-project",
            table,
        ])
        .unwrap();

        let mut out = Vec::new();
        let result = cli.run(&mut out).await;
        (result, String::from_utf8(out).unwrap())
    }

    #[tokio::test]
    async fn test_rows_of_the_first_stream_are_printed() {
        let fake = FakeRead::new(
            avro_session(SCHEMA, &["stream-0", "stream-1"]),
            vec![vec![
                Ok(avro_batch(&[("alice", 31, 1), ("bob", 42, 20)])),
                Ok(avro_batch(&[("carol", 27, 300)])),
            ]],
        );
        let (result, out) = run(&fake, "other-project.dataset.table").await;
        result.unwrap();

        insta::assert_snapshot!(out, @r###"
        string: alice int: 31 long: 1
        string: bob int: 42 long: 20
        string: carol int: 27 long: 300
        3 rows read from table: other-project.dataset.table
        "###);

        assert_eq!(fake.reads(), vec![("stream-0".to_string(), 0)]);

        let sessions = fake.sessions();
        let session = sessions[0].0.read_session.as_ref().unwrap();
        assert_eq!(
            session.table,
            "projects/other-project/datasets/dataset/tables/table"
        );
        assert_eq!(sessions[0].0.parent, "projects/my-project");
    }

    #[tokio::test]
    async fn test_session_without_streams() {
        let fake = FakeRead::new(avro_session(SCHEMA, &[]), Vec::new());
        let (result, out) = run(&fake, "projects/p/datasets/d/tables/t").await;
        result.unwrap();

        insta::assert_snapshot!(out, @"0 rows read from table: projects/p/datasets/d/tables/t");
        assert!(fake.reads().is_empty());
    }

    #[tokio::test]
    async fn test_malformed_session_schema() {
        let fake = FakeRead::new(
            avro_session(r#"{"type": "record", "fields": 42}"#, &["stream-0"]),
            vec![vec![Ok(avro_batch(&[("alice", 31, 1)]))]],
        );
        let (result, out) = run(&fake, "projects/p/datasets/d/tables/t").await;

        let err = format!("{:#}", result.unwrap_err());
        assert!(err.starts_with("avro decoding failed"), "{err}");
        assert!(out.is_empty(), "{out}");
    }
}
