use apache_avro::types::Value;
use proto_bigquery::storage::{
    read_rows_response::Rows, read_session, AvroRows, AvroSchema, CreateReadSessionRequest,
    ReadRowsRequest, ReadRowsResponse, ReadSession, ReadStream,
};
use proto_grpc::storage::big_query_read_server::{BigQueryRead, BigQueryReadServer};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

pub const SCHEMA: &str = r#"{
    "type": "record",
    "name": "Row",
    "fields": [
        {"name": "name", "type": "string"},
        {"name": "age", "type": "int"},
        {"name": "visits", "type": "long"}
    ]
}"#;

/// Build a ReadRowsResponse holding `rows` encoded with SCHEMA.
pub fn avro_batch(rows: &[(&str, i32, i64)]) -> ReadRowsResponse {
    let schema = apache_avro::Schema::parse_str(SCHEMA).unwrap();

    let mut serialized = Vec::new();
    for (name, age, visits) in rows {
        let row = Value::Record(vec![
            ("name".to_string(), Value::String(name.to_string())),
            ("age".to_string(), Value::Int(*age)),
            ("visits".to_string(), Value::Long(*visits)),
        ]);
        serialized.extend(apache_avro::to_avro_datum(&schema, row).unwrap());
    }

    ReadRowsResponse {
        row_count: rows.len() as i64,
        rows: Some(Rows::AvroRows(AvroRows {
            serialized_binary_rows: serialized.into(),
            ..Default::default()
        })),
        ..Default::default()
    }
}

/// Build a ReadSession having an Avro `schema` and streams named `streams`.
pub fn avro_session(schema: &str, streams: &[&str]) -> ReadSession {
    ReadSession {
        name: "projects/p/locations/us/sessions/a-session".to_string(),
        schema: Some(read_session::Schema::AvroSchema(AvroSchema {
            schema: schema.to_string(),
        })),
        streams: streams
            .iter()
            .map(|name| ReadStream {
                name: name.to_string(),
            })
            .collect(),
        ..Default::default()
    }
}

/// FakeRead is an in-process BigQueryRead service which returns a fixed
/// session, and plays back scripted responses to successive ReadRows calls.
pub struct FakeRead {
    session: ReadSession,
    // Responses of each ReadRows call, in order. Later calls return no rows.
    calls: Mutex<VecDeque<Vec<tonic::Result<ReadRowsResponse>>>>,
    // Read stream and offset of each ReadRows call.
    reads: Mutex<Vec<(String, i64)>>,
    // Each CreateReadSession request and its routing header.
    sessions: Mutex<Vec<(CreateReadSessionRequest, String)>>,
}

impl FakeRead {
    pub fn new(
        session: ReadSession,
        calls: Vec<Vec<tonic::Result<ReadRowsResponse>>>,
    ) -> Arc<Self> {
        Arc::new(Self {
            session,
            calls: Mutex::new(calls.into()),
            reads: Mutex::new(Vec::new()),
            sessions: Mutex::new(Vec::new()),
        })
    }

    pub fn reads(&self) -> Vec<(String, i64)> {
        self.reads.lock().unwrap().clone()
    }

    pub fn sessions(&self) -> Vec<(CreateReadSessionRequest, String)> {
        self.sessions.lock().unwrap().clone()
    }

    /// Serve on an ephemeral local port, returning its endpoint.
    pub async fn serve(self: &Arc<Self>) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let incoming = futures::stream::try_unfold(listener, |listener| async move {
            let (conn, _addr) = listener.accept().await?;
            Ok::<_, std::io::Error>(Some((conn, listener)))
        });
        let server = tonic::transport::Server::builder()
            .add_service(BigQueryReadServer::from_arc(self.clone()))
            .serve_with_incoming(incoming);
        tokio::spawn(server);

        format!("http://{addr}")
    }
}

#[tonic::async_trait]
impl BigQueryRead for FakeRead {
    async fn create_read_session(
        &self,
        request: tonic::Request<CreateReadSessionRequest>,
    ) -> tonic::Result<tonic::Response<ReadSession>> {
        let routing = request
            .metadata()
            .get("x-goog-request-params")
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default()
            .to_string();

        self.sessions
            .lock()
            .unwrap()
            .push((request.into_inner(), routing));

        Ok(tonic::Response::new(self.session.clone()))
    }

    type ReadRowsStream =
        futures::stream::Iter<std::vec::IntoIter<tonic::Result<ReadRowsResponse>>>;

    async fn read_rows(
        &self,
        request: tonic::Request<ReadRowsRequest>,
    ) -> tonic::Result<tonic::Response<Self::ReadRowsStream>> {
        let ReadRowsRequest {
            read_stream,
            offset,
        } = request.into_inner();
        self.reads.lock().unwrap().push((read_stream, offset));

        let responses = self.calls.lock().unwrap().pop_front().unwrap_or_default();
        Ok(tonic::Response::new(futures::stream::iter(responses)))
    }
}
