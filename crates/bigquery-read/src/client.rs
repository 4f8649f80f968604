use crate::{table, Error};
use anyhow::Context;
use futures::Stream;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC};
use proto_bigquery::storage::{
    self, read_session::TableReadOptions, CreateReadSessionRequest, ReadRowsRequest,
    ReadRowsResponse, ReadSession,
};
use proto_grpc::storage::big_query_read_client::BigQueryReadClient;
use std::time::Duration;
use tonic::transport::{Channel, ClientTlsConfig};

// SubClient is the gRPC client of the BigQueryRead service.
type SubClient = BigQueryReadClient<
    tonic::service::interceptor::InterceptedService<Channel, proto_grpc::Metadata>,
>;

// Characters left unescaped within `x-goog-request-params` values.
const ROUTING_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

// Header used by the service to route a request to the region of its resource.
const ROUTING_HEADER: &str = "x-goog-request-params";

/// Maximum number of consecutive attempts made to resume a failed ReadRows stream.
const MAX_READ_ATTEMPTS: u32 = 5;

/// Options of a read session beyond its table and project.
#[derive(Debug, Clone)]
pub struct SessionOptions {
    /// Upper bound on the number of streams of the session.
    pub max_streams: i32,
    /// Table fields to read, or all fields if empty.
    pub selected_fields: Vec<String>,
    /// SQL predicate which filters the rows of the session.
    pub row_restriction: Option<String>,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            max_streams: 1,
            selected_fields: Vec::new(),
            row_restriction: None,
        }
    }
}

/// Build a request for an Avro read session of `table`, owned by `project_id`.
pub fn session_request(
    project_id: &str,
    table: &str,
    options: &SessionOptions,
) -> CreateReadSessionRequest {
    let read_options =
        if options.selected_fields.is_empty() && options.row_restriction.is_none() {
            None
        } else {
            Some(TableReadOptions {
                selected_fields: options.selected_fields.clone(),
                row_restriction: options.row_restriction.clone().unwrap_or_default(),
                ..Default::default()
            })
        };

    CreateReadSessionRequest {
        parent: format!("projects/{project_id}"),
        read_session: Some(ReadSession {
            table: table::resource_name(table),
            data_format: storage::DataFormat::Avro as i32,
            read_options,
            ..Default::default()
        }),
        max_stream_count: options.max_streams,
        ..Default::default()
    }
}

#[derive(Clone)]
pub struct Client {
    inner: SubClient,
}

impl Client {
    /// Dial `endpoint` and build a Client which authorizes its requests with `token`.
    pub async fn connect(endpoint: &str, token: &str) -> crate::Result<Self> {
        let metadata = proto_grpc::Metadata::new()
            .with_bearer_token(token)
            .map_err(|status| Error::InvalidToken(status.message().to_string()))?;

        let channel = dial_channel(endpoint).await?;

        Ok(Self {
            inner: BigQueryReadClient::with_interceptor(channel, metadata)
                .max_decoding_message_size(usize::MAX),
        })
    }

    /// Create a read session. Failures are returned as-is, without retries.
    pub async fn create_read_session(
        &self,
        req: CreateReadSessionRequest,
    ) -> crate::Result<ReadSession> {
        let table = req
            .read_session
            .as_ref()
            .map(|session| session.table.as_str())
            .unwrap_or_default();
        let routing = routing_params("read_session.table", table)?;

        let mut request = tonic::Request::new(req);
        request.metadata_mut().insert(ROUTING_HEADER, routing);

        tracing::debug!(parent = %request.get_ref().parent, "creating read session");

        let session = self
            .inner
            .clone()
            .create_read_session(request)
            .await?
            .into_inner();

        Ok(session)
    }

    /// Read rows of `read_stream` beginning at row `offset`.
    ///
    /// The returned Stream is lazy and forward-only. If the underlying RPC fails
    /// as UNAVAILABLE it's resumed with backoff from the row following the last
    /// yielded one. Any other failure, or too many consecutive ones, is yielded
    /// as a final Err item.
    pub fn read_rows(
        &self,
        read_stream: String,
        offset: i64,
    ) -> impl Stream<Item = tonic::Result<ReadRowsResponse>> + 'static {
        let reader = RowsReader {
            client: self.inner.clone(),
            read_stream,
            offset,
            streaming: None,
            backoff: exponential_backoff::Backoff::new(
                MAX_READ_ATTEMPTS,
                Duration::from_millis(100),
                Some(Duration::from_secs(10)),
            ),
            attempt: 0,
            done: false,
        };

        futures::stream::unfold(reader, |mut reader| async move {
            let item = reader.next().await?;
            Some((item, reader))
        })
    }
}

struct RowsReader {
    client: SubClient,
    read_stream: String,
    offset: i64,
    streaming: Option<tonic::Streaming<ReadRowsResponse>>,
    backoff: exponential_backoff::Backoff,
    attempt: u32,
    done: bool,
}

impl RowsReader {
    async fn next(&mut self) -> Option<tonic::Result<ReadRowsResponse>> {
        if self.done {
            return None;
        }

        loop {
            let result = match self.streaming.take() {
                Some(mut streaming) => {
                    let result = streaming.message().await;
                    self.streaming = Some(streaming);
                    result
                }
                None => match self.start().await {
                    Ok(streaming) => {
                        self.streaming = Some(streaming);
                        continue;
                    }
                    Err(status) => Err(status),
                },
            };

            match result {
                Ok(Some(response)) => {
                    self.offset += response.row_count;
                    self.attempt = 0;
                    return Some(Ok(response));
                }
                Ok(None) => {
                    self.done = true;
                    return None;
                }
                Err(status) => {
                    self.streaming = None;

                    if !self.retry(&status).await {
                        self.done = true;
                        return Some(Err(status));
                    }
                }
            }
        }
    }

    async fn start(&mut self) -> tonic::Result<tonic::Streaming<ReadRowsResponse>> {
        let routing = routing_params("read_stream", &self.read_stream)
            .map_err(|err| tonic::Status::invalid_argument(err.to_string()))?;

        let mut request = tonic::Request::new(ReadRowsRequest {
            read_stream: self.read_stream.clone(),
            offset: self.offset,
        });
        request.metadata_mut().insert(ROUTING_HEADER, routing);

        tracing::debug!(read_stream = %self.read_stream, offset = self.offset, "started ReadRows");

        Ok(self.client.read_rows(request).await?.into_inner())
    }

    // Returns true if the read should be resumed after a backoff, which has elapsed.
    async fn retry(&mut self, status: &tonic::Status) -> bool {
        if status.code() != tonic::Code::Unavailable {
            return false;
        }
        self.attempt += 1;

        if self.attempt >= MAX_READ_ATTEMPTS {
            return false;
        }
        let Some(delay) = self.backoff.next(self.attempt - 1) else {
            return false;
        };
        tracing::warn!(
            %status,
            attempt = self.attempt,
            offset = self.offset,
            ?delay,
            "ReadRows stream failed (will retry)"
        );
        tokio::time::sleep(delay).await;

        true
    }
}

async fn dial_channel(endpoint: &str) -> crate::Result<Channel> {
    let ep = Channel::from_shared(endpoint.to_string())
        .map_err(|_| Error::InvalidEndpoint(endpoint.to_string()))?
        .connect_timeout(Duration::from_secs(20));

    let ep = match ep.uri().scheme_str() {
        Some("https") => ep.tls_config(ClientTlsConfig::new().with_native_roots())?,
        Some("http") => ep,
        _ => return Err(Error::InvalidEndpoint(endpoint.to_string())),
    };

    Ok(ep.connect().await?)
}

fn routing_params(key: &str, value: &str) -> crate::Result<tonic::metadata::AsciiMetadataValue> {
    let value = percent_encoding::utf8_percent_encode(value, ROUTING_VALUE);

    format!("{key}={value}")
        .parse()
        .map_err(|_| Error::Protocol("request routing parameters are not valid ASCII"))
}

/// Fetch an access token of the application-default credentials
/// using the `gcloud` CLI.
pub fn application_default_token() -> anyhow::Result<String> {
    let output = std::process::Command::new("gcloud")
        .args(["auth", "application-default", "print-access-token"])
        .output()
        .context("failed to run `gcloud`")?;

    if !output.status.success() {
        anyhow::bail!(
            "`gcloud auth application-default print-access-token` failed ({}): {}",
            output.status,
            String::from_utf8_lossy(&output.stderr).trim()
        );
    }

    let token = String::from_utf8(output.stdout).context("access token is not UTF-8")?;
    let token = token.trim();

    if token.is_empty() {
        anyhow::bail!("`gcloud` returned an empty access token");
    }
    Ok(token.to_string())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::testing::{avro_batch, avro_session, FakeRead, SCHEMA};
    use futures::StreamExt;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_session_request_defaults() {
        let req = session_request(
            "my-project",
            "other-project.dataset.table",
            &SessionOptions::default(),
        );

        assert_eq!(req.parent, "projects/my-project");
        assert_eq!(req.max_stream_count, 1);

        let session = req.read_session.unwrap();
        assert_eq!(
            session.table,
            "projects/other-project/datasets/dataset/tables/table"
        );
        assert_eq!(session.data_format(), storage::DataFormat::Avro);
        assert_eq!(session.read_options, None);
    }

    #[test]
    fn test_session_request_with_read_options() {
        let options = SessionOptions {
            max_streams: 4,
            selected_fields: vec!["name".to_string(), "age".to_string()],
            row_restriction: Some("age > 21".to_string()),
        };
        let req = session_request("p", "projects/p/datasets/d/tables/t", &options);

        assert_eq!(req.max_stream_count, 4);

        let read_options = req.read_session.unwrap().read_options.unwrap();
        assert_eq!(read_options.selected_fields, vec!["name", "age"]);
        assert_eq!(read_options.row_restriction, "age > 21");
    }

    #[test]
    fn test_routing_params_are_escaped() {
        let value = routing_params("read_session.table", "projects/p/datasets/d/tables/t").unwrap();
        assert_eq!(
            value.to_str().unwrap(),
            "read_session.table=projects%2Fp%2Fdatasets%2Fd%2Ftables%2Ft"
        );

        let value = routing_params("read_stream", "a b:c~d.e").unwrap();
        assert_eq!(value.to_str().unwrap(), "read_stream=a%20b%3Ac~d.e");
    }

    async fn read_all(
        calls: Vec<Vec<tonic::Result<ReadRowsResponse>>>,
    ) -> (Vec<Result<i64, tonic::Code>>, Vec<(String, i64)>) {
        let fake = FakeRead::new(ReadSession::default(), calls);
        let client = Client::connect(&fake.serve().await, "a-token")
            .await
            .unwrap();

        let items: Vec<_> = client.read_rows("s".to_string(), 10).collect().await;
        let items = items
            .into_iter()
            .map(|item| item.map(|batch| batch.row_count).map_err(|status| status.code()))
            .collect();

        (items, fake.reads())
    }

    fn reads(offsets: &[i64]) -> Vec<(String, i64)> {
        offsets.iter().map(|offset| ("s".to_string(), *offset)).collect()
    }

    #[tokio::test]
    async fn test_read_rows_resumes_after_unavailable() {
        let (items, offsets) = read_all(vec![
            vec![
                Ok(avro_batch(&[("alice", 31, 1), ("bob", 42, 20)])),
                Err(tonic::Status::unavailable("connection reset")),
            ],
            vec![
                Ok(avro_batch(&[("carol", 27, 300)])),
                Err(tonic::Status::unavailable("connection reset")),
            ],
            vec![Ok(avro_batch(&[("dave", 50, 5)]))],
        ])
        .await;

        assert_eq!(items, vec![Ok(2), Ok(1), Ok(1)]);
        // Each resumption begins at the row following the last one delivered.
        assert_eq!(offsets, reads(&[10, 12, 13]));
    }

    #[tokio::test]
    async fn test_read_rows_ends_on_other_failures() {
        let (items, offsets) = read_all(vec![
            vec![
                Ok(avro_batch(&[("alice", 31, 1), ("bob", 42, 20)])),
                Err(tonic::Status::internal("whoops")),
            ],
            vec![Ok(avro_batch(&[("carol", 27, 300)]))],
        ])
        .await;

        assert_eq!(items, vec![Ok(2), Err(tonic::Code::Internal)]);
        assert_eq!(offsets, reads(&[10]));
    }

    #[tokio::test]
    async fn test_read_rows_attempts_reset_after_a_delivered_batch() {
        let unavailable = || vec![Err(tonic::Status::unavailable("try again"))];

        // Two runs of three failures each exceed MAX_READ_ATTEMPTS in total,
        // but neither does on its own.
        let (items, offsets) = read_all(vec![
            unavailable(),
            unavailable(),
            unavailable(),
            vec![
                Ok(avro_batch(&[("alice", 31, 1)])),
                Err(tonic::Status::unavailable("try again")),
            ],
            unavailable(),
            unavailable(),
            vec![Ok(avro_batch(&[("bob", 42, 20)]))],
        ])
        .await;

        assert_eq!(items, vec![Ok(1), Ok(1)]);
        assert_eq!(offsets, reads(&[10, 10, 10, 10, 11, 11, 11]));
    }

    #[tokio::test]
    async fn test_read_rows_gives_up_after_max_attempts() {
        let calls = (0..MAX_READ_ATTEMPTS + 1)
            .map(|_| vec![Err(tonic::Status::unavailable("try again"))])
            .collect();
        let (items, offsets) = read_all(calls).await;

        assert_eq!(items, vec![Err(tonic::Code::Unavailable)]);
        assert_eq!(offsets.len(), MAX_READ_ATTEMPTS as usize);
    }

    #[tokio::test]
    async fn test_create_read_session_is_routed_on_table() {
        let fake = FakeRead::new(avro_session(SCHEMA, &["s0"]), Vec::new());
        let client = Client::connect(&fake.serve().await, "a-token")
            .await
            .unwrap();

        let session = client
            .create_read_session(session_request(
                "my-project",
                "projects/p/datasets/d/tables/t",
                &SessionOptions::default(),
            ))
            .await
            .unwrap();
        assert_eq!(session.streams[0].name, "s0");

        let sessions = fake.sessions();
        assert_eq!(sessions.len(), 1);
        assert_eq!(sessions[0].0.parent, "projects/my-project");
        assert_eq!(
            sessions[0].1,
            "read_session.table=projects%2Fp%2Fdatasets%2Fd%2Ftables%2Ft"
        );
    }

    #[tokio::test]
    async fn test_connect_rejects_bad_endpoints() {
        for endpoint in ["not a uri", "ftp://example.com"] {
            let err = Client::connect(endpoint, "token").await.err().unwrap();
            assert!(
                matches!(err, Error::InvalidEndpoint(ref e) if e == endpoint),
                "{err:?}"
            );
        }
    }

    #[tokio::test]
    async fn test_connect_rejects_bad_token() {
        let err = Client::connect("http://127.0.0.1:1", "bad\ntoken")
            .await
            .err()
            .unwrap();
        assert!(matches!(err, Error::InvalidToken(_)), "{err:?}");
    }
}
