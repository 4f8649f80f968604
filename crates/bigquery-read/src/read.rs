use crate::{Error, RowDecoder};
use futures::{Stream, StreamExt};
use proto_bigquery::storage::{read_rows_response::Rows, ReadRowsResponse};
use std::io::Write;

/// Decode and print the row batches of `batches`, returning the total
/// number of rows which were read.
///
/// `schema` is compiled once and used for every batch. Batches which fail
/// with a status are skipped, and don't count towards the total.
/// Decoding failures end the read with an error.
pub async fn process_rows<S, W>(schema: &str, batches: S, out: &mut W) -> crate::Result<i64>
where
    S: Stream<Item = tonic::Result<ReadRowsResponse>>,
    W: Write,
{
    let mut decoder = RowDecoder::compile(schema)?;
    let mut batches = std::pin::pin!(batches);
    let mut num_rows: i64 = 0;

    while let Some(batch) = batches.next().await {
        let batch = match batch {
            Ok(batch) => batch,
            Err(status) => {
                tracing::debug!(%status, num_rows, "skipping failed row batch");
                continue;
            }
        };

        let rows = match &batch.rows {
            Some(Rows::AvroRows(rows)) => rows,
            // Responses may carry only stats or throttling state.
            None if batch.row_count == 0 => continue,
            _ => return Err(Error::Protocol("row batch is not in the Avro format")),
        };

        if let Some(throttle) = &batch.throttle_state {
            if throttle.throttle_percent != 0 {
                tracing::debug!(throttle.throttle_percent, "read stream is throttled");
            }
        }

        num_rows += batch.row_count;
        decoder.decode_batch(&rows.serialized_binary_rows, batch.row_count, out)?;
    }

    Ok(num_rows)
}
