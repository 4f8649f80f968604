#[cfg(feature = "generate")]
fn main() {
    let root = std::path::Path::new(env!("CARGO_MANIFEST_DIR"));
    let include = root.join("../proto-bigquery/proto");
    let storage = include.join("google/cloud/bigquery/storage/v1/storage.proto");

    println!("cargo:rerun-if-changed={}", storage.display());

    tonic_build::configure()
        .out_dir(root.join("src"))
        .build_client(true)
        .build_server(true)
        .client_mod_attribute(
            "google.cloud.bigquery.storage.v1",
            "#[cfg(feature = \"bigquery_read_client\")]",
        )
        .server_mod_attribute(
            "google.cloud.bigquery.storage.v1",
            "#[cfg(feature = \"bigquery_read_server\")]",
        )
        .extern_path(".google.cloud.bigquery.storage.v1", "::proto_bigquery::storage")
        .extern_path(".google.protobuf", "::pbjson_types")
        .compile_protos(&[storage], &[include])
        .expect("tonic build failed");
}

#[cfg(not(feature = "generate"))]
fn main() {}
