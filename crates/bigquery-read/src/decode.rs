use apache_avro::{types::Value, Schema};
use std::fmt::{self, Write as _};
use std::io::Write;

/// Datum is a single decoded Avro value.
///
/// Unions are resolved to their selected branch, and logical types are
/// represented by their underlying physical kind: `date` and `time-millis`
/// are Int; `time-micros` and timestamps are Long; `uuid` is String;
/// `decimal` and `big-decimal` are Bytes; and `duration` is Fixed.
#[derive(Debug, Clone, PartialEq)]
pub enum Datum {
    Null,
    Boolean(bool),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    Bytes(Vec<u8>),
    String(String),
    Fixed(Vec<u8>),
    Enum(String),
    Array(Vec<Datum>),
    /// Map entries, ordered on key.
    Map(Vec<(String, Datum)>),
    /// Record fields, in their declared order.
    Record(Vec<(String, Datum)>),
    /// A value of a kind which isn't modeled here, with its library-given kind name.
    Other(String),
}

/// Kind is the type tag of a Datum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Null,
    Boolean,
    Int,
    Long,
    Float,
    Double,
    Bytes,
    String,
    Fixed,
    Enum,
    Array,
    Map,
    Record,
    Other,
}

impl Kind {
    /// Avro type name of this Kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            Kind::Null => "null",
            Kind::Boolean => "boolean",
            Kind::Int => "int",
            Kind::Long => "long",
            Kind::Float => "float",
            Kind::Double => "double",
            Kind::Bytes => "bytes",
            Kind::String => "string",
            Kind::Fixed => "fixed",
            Kind::Enum => "enum",
            Kind::Array => "array",
            Kind::Map => "map",
            Kind::Record => "record",
            Kind::Other => "other",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Datum {
    pub fn kind(&self) -> Kind {
        match self {
            Datum::Null => Kind::Null,
            Datum::Boolean(_) => Kind::Boolean,
            Datum::Int(_) => Kind::Int,
            Datum::Long(_) => Kind::Long,
            Datum::Float(_) => Kind::Float,
            Datum::Double(_) => Kind::Double,
            Datum::Bytes(_) => Kind::Bytes,
            Datum::String(_) => Kind::String,
            Datum::Fixed(_) => Kind::Fixed,
            Datum::Enum(_) => Kind::Enum,
            Datum::Array(_) => Kind::Array,
            Datum::Map(_) => Kind::Map,
            Datum::Record(_) => Kind::Record,
            Datum::Other(_) => Kind::Other,
        }
    }

    /// Raw type tag of this Datum.
    pub fn tag(&self) -> &str {
        match self {
            Datum::Other(name) => name,
            datum => datum.kind().as_str(),
        }
    }
}

/// Datums display as `<kind>: <value>` if they're a string, int, or long,
/// and as their bare type tag otherwise.
impl fmt::Display for Datum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Datum::String(value) => write!(f, "string: {value}"),
            Datum::Int(value) => write!(f, "int: {value}"),
            Datum::Long(value) => write!(f, "long: {value}"),
            datum => f.write_str(datum.tag()),
        }
    }
}

impl TryFrom<Value> for Datum {
    type Error = apache_avro::Error;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Ok(match value {
            Value::Null => Datum::Null,
            Value::Boolean(value) => Datum::Boolean(value),
            Value::Int(value) | Value::Date(value) | Value::TimeMillis(value) => Datum::Int(value),
            Value::Long(value)
            | Value::TimeMicros(value)
            | Value::TimestampMillis(value)
            | Value::TimestampMicros(value)
            | Value::TimestampNanos(value)
            | Value::LocalTimestampMillis(value)
            | Value::LocalTimestampMicros(value)
            | Value::LocalTimestampNanos(value) => Datum::Long(value),
            Value::Float(value) => Datum::Float(value),
            Value::Double(value) => Datum::Double(value),
            Value::Bytes(value) => Datum::Bytes(value),
            Value::Decimal(value) => Datum::Bytes(Vec::<u8>::try_from(&value)?),
            // Unscaled value, as with fixed-scale decimals.
            Value::BigDecimal(value) => {
                Datum::Bytes(value.as_bigint_and_exponent().0.to_signed_bytes_be())
            }
            Value::String(value) => Datum::String(value),
            Value::Uuid(value) => Datum::String(value.to_string()),
            Value::Fixed(_size, value) => Datum::Fixed(value),
            Value::Duration(value) => Datum::Fixed(<[u8; 12]>::from(value).to_vec()),
            Value::Enum(_index, symbol) => Datum::Enum(symbol),
            Value::Union(_index, value) => Datum::try_from(*value)?,
            Value::Array(items) => Datum::Array(
                items
                    .into_iter()
                    .map(Datum::try_from)
                    .collect::<Result<_, _>>()?,
            ),
            Value::Map(entries) => {
                let mut entries = try_from_fields(entries)?;
                entries.sort_by(|(lhs, _), (rhs, _)| lhs.cmp(rhs));
                Datum::Map(entries)
            }
            Value::Record(fields) => Datum::Record(try_from_fields(fields)?),
            #[allow(unreachable_patterns)]
            value => Datum::Other(
                format!("{:?}", apache_avro::schema::SchemaKind::from(&value)).to_lowercase(),
            ),
        })
    }
}

fn try_from_fields(
    fields: impl IntoIterator<Item = (String, Value)>,
) -> Result<Vec<(String, Datum)>, apache_avro::Error> {
    fields
        .into_iter()
        .map(|(name, value)| Ok((name, Datum::try_from(value)?)))
        .collect()
}

/// RowDecoder decodes and prints rows of a compiled Avro schema.
pub struct RowDecoder {
    schema: Schema,
    // Rendering of the current row, drained after each row.
    line: String,
}

impl RowDecoder {
    /// Compile a JSON Avro schema into a RowDecoder.
    pub fn compile(schema: &str) -> crate::Result<Self> {
        Ok(Self {
            schema: Schema::parse_str(schema)?,
            line: String::new(),
        })
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Decode exactly `count` rows from `rows`, printing each record row to `out`
    /// as a line of its space-separated fields.
    ///
    /// Rows are written only once fully decoded and rendered:
    /// a corrupt row fails the batch without writing a partial line.
    pub fn decode_batch<W: Write>(
        &mut self,
        mut rows: &[u8],
        count: i64,
        out: &mut W,
    ) -> crate::Result<()> {
        for _ in 0..count {
            let result = self.decode_and_print(&mut rows, out);
            self.drain();
            result?;
        }

        if !rows.is_empty() {
            tracing::debug!(remaining = rows.len(), count, "row batch has trailing bytes");
        }
        Ok(())
    }

    /// Decode the next row of `rows` into a Datum.
    pub fn decode_row(&self, rows: &mut &[u8]) -> crate::Result<Datum> {
        let value = apache_avro::from_avro_datum(&self.schema, rows, None)?;
        Ok(Datum::try_from(value)?)
    }

    fn decode_and_print<W: Write>(&mut self, rows: &mut &[u8], out: &mut W) -> crate::Result<()> {
        let Datum::Record(fields) = self.decode_row(rows)? else {
            return Ok(()); // Only records are printed.
        };
        tracing::trace!(fields = fields.len(), "decoded record");

        for (index, (_name, datum)) in fields.iter().enumerate() {
            if index != 0 {
                self.line.push(' ');
            }
            // Writes into a String cannot fail.
            _ = write!(self.line, "{datum}");
        }
        self.line.push('\n');

        out.write_all(self.line.as_bytes())?;
        Ok(())
    }

    // Release state held for the current row.
    fn drain(&mut self) {
        self.line.clear();
    }
}
