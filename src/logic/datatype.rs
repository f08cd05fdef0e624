use derive_more::{Debug, Display};
use regex::Regex;
use std::sync::LazyLock;

static FIXED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^FIXED\d{1,2}$").expect("valid regex literal"));

/// Column type as reported by `TABLE_COLUMNS.DATA_TYPE_NAME`.
///
/// Length, precision and scale live in separate catalog columns, so variants
/// carry no parameters. Unrecognized names are kept verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
pub enum DataType {
    #[display("TINYINT")]
    TinyInt,
    #[display("SMALLINT")]
    SmallInt,
    #[display("INTEGER")]
    Integer,
    #[display("BIGINT")]
    BigInt,
    #[display("DECIMAL")]
    Decimal,
    #[display("SMALLDECIMAL")]
    SmallDecimal,
    #[display("REAL")]
    Real,
    #[display("DOUBLE")]
    Double,
    #[display("FLOAT")]
    Float,
    #[display("BOOLEAN")]
    Boolean,
    #[display("CHAR")]
    Char,
    #[display("NCHAR")]
    NChar,
    #[display("VARCHAR")]
    VarChar,
    #[display("NVARCHAR")]
    NVarChar,
    #[display("ALPHANUM")]
    AlphaNum,
    #[display("SHORTTEXT")]
    ShortText,
    #[display("TEXT")]
    Text,
    #[display("CLOB")]
    Clob,
    #[display("NCLOB")]
    NClob,
    #[display("BINARY")]
    Binary,
    #[display("VARBINARY")]
    VarBinary,
    #[display("BLOB")]
    Blob,
    #[display("DATE")]
    Date,
    #[display("TIME")]
    Time,
    #[display("SECONDDATE")]
    SecondDate,
    #[display("TIMESTAMP")]
    Timestamp,
    #[display("{_0}")]
    Other(String),
}

/// Value family a column's data decodes into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum ValueKind {
    Integer,
    Float,
    Text,
    Boolean,
    Time,
    Binary,
    Unknown,
}

impl DataType {
    /// Classify a catalog type name, ignoring case and surrounding whitespace.
    pub fn from_type_name(name: &str) -> Self {
        use DataType::*;
        let upper = name.trim().to_ascii_uppercase();
        match upper.as_str() {
            "TINYINT" => TinyInt,
            "SMALLINT" => SmallInt,
            "INTEGER" | "INT" => Integer,
            "BIGINT" => BigInt,
            "DECIMAL" => Decimal,
            "SMALLDECIMAL" => SmallDecimal,
            "REAL" => Real,
            "DOUBLE" => Double,
            "FLOAT" => Float,
            "BOOLEAN" => Boolean,
            "CHAR" => Char,
            "NCHAR" => NChar,
            "VARCHAR" => VarChar,
            "NVARCHAR" => NVarChar,
            "ALPHANUM" => AlphaNum,
            "SHORTTEXT" => ShortText,
            "TEXT" => Text,
            "CLOB" => Clob,
            "NCLOB" => NClob,
            "BINARY" => Binary,
            "VARBINARY" => VarBinary,
            "BLOB" => Blob,
            "DATE" => Date,
            "TIME" => Time,
            "SECONDDATE" => SecondDate,
            "TIMESTAMP" => Timestamp,
            fixed if FIXED.is_match(fixed) => Decimal,
            _ => Other(name.trim().to_string()),
        }
    }

    pub fn value_kind(&self) -> ValueKind {
        use DataType::*;
        match self {
            TinyInt | SmallInt | Integer | BigInt => ValueKind::Integer,
            Decimal | SmallDecimal | Real | Double | Float => ValueKind::Float,
            Boolean => ValueKind::Boolean,
            Char | NChar | VarChar | NVarChar | AlphaNum | ShortText | Text | Clob | NClob => {
                ValueKind::Text
            }
            Binary | VarBinary | Blob => ValueKind::Binary,
            Date | Time | SecondDate | Timestamp => ValueKind::Time,
            Other(_) => ValueKind::Unknown,
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self.value_kind(), ValueKind::Integer | ValueKind::Float)
    }
}

impl From<&str> for DataType {
    fn from(value: &str) -> Self {
        DataType::from_type_name(value)
    }
}
