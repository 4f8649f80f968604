#[cfg(feature = "generate")]
fn main() {
    let root = std::path::Path::new(env!("CARGO_MANIFEST_DIR"));
    let include = root.join("proto");
    let targets: Vec<_> = ["arrow", "avro", "storage", "stream"]
        .iter()
        .map(|name| include.join(format!("google/cloud/bigquery/storage/v1/{name}.proto")))
        .collect();

    for target in &targets {
        println!("cargo:rerun-if-changed={}", target.display());
    }

    prost_build::Config::new()
        .out_dir(root.join("src"))
        .bytes(&[
            "AvroRows.serialized_binary_rows",
            "ArrowRecordBatch.serialized_record_batch",
            "ArrowSchema.serialized_schema",
        ])
        .extern_path(".google.protobuf", "::pbjson_types")
        .compile_protos(&targets, &[include])
        .expect("failed to compile protobuf");
}

#[cfg(not(feature = "generate"))]
fn main() {}
