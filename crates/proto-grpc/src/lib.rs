// The `google.cloud.bigquery.storage.v1` package is publicly exported as `storage`.
pub mod storage {
    include!("google.cloud.bigquery.storage.v1.rs");
}

/// Metadata is a tonic Interceptor that adds metadata to gRPC requests.
#[derive(Clone, Debug, Default)]
pub struct Metadata(pub tonic::metadata::MetadataMap);

impl Metadata {
    pub fn new() -> Self {
        Self(tonic::metadata::MetadataMap::new())
    }

    pub fn with_bearer_token(mut self, token: &str) -> tonic::Result<Self> {
        let mut token = format!("Bearer {token}")
            .parse::<tonic::metadata::AsciiMetadataValue>()
            .map_err(|e: tonic::metadata::errors::InvalidMetadataValue| {
                tonic::Status::invalid_argument(e.to_string())
            })?;

        token.set_sensitive(true);
        self.0.insert("authorization", token);

        Ok(self)
    }
}

impl tonic::service::Interceptor for Metadata {
    fn call(
        &mut self,
        mut request: tonic::Request<()>,
    ) -> std::result::Result<tonic::Request<()>, tonic::Status> {
        let out = request.metadata_mut();
        out.reserve(self.0.len());

        for entry in self.0.iter() {
            match entry {
                tonic::metadata::KeyAndValueRef::Ascii(key, value) => {
                    _ = out.insert(key, value.clone());
                }
                tonic::metadata::KeyAndValueRef::Binary(key, value) => {
                    _ = out.insert_bin(key, value.clone());
                }
            }
        }
        Ok(request)
    }
}
