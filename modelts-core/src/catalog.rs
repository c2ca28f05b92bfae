//! Static mapping tables from source type names to target types.
//!
//! Every lookup here is total: unrecognized names degrade to a documented
//! default instead of failing.

use modelts_ir::{EnumDefinition, TypeDescriptor};

/// Resolve a host-language primitive type name.
///
/// Unknown names (including the empty string) resolve to `any`.
pub fn resolve_primitive(name: &str) -> TypeDescriptor {
    match name.trim().trim_start_matches('?').to_ascii_lowercase().as_str() {
        "int" | "integer" | "float" | "double" => TypeDescriptor::number(),
        "array" => TypeDescriptor::array(),
        "object" => TypeDescriptor::record(),
        "string" => TypeDescriptor::string(),
        "bool" | "boolean" | "true" | "false" => TypeDescriptor::boolean(),
        _ => TypeDescriptor::any(),
    }
}

/// Lower-case a raw storage type name and strip any parameter list.
///
/// `VARCHAR(255)` becomes `varchar`, `decimal(8, 2) unsigned` becomes `decimal`.
fn normalize_column_type(raw: &str) -> String {
    let name = raw.trim();
    let name = match name.find('(') {
        Some(idx) => &name[..idx],
        None => name,
    };
    let name = name.split_whitespace().next().unwrap_or_default();
    name.to_ascii_lowercase()
}

/// Resolve a raw database column type.
///
/// Unrecognized storage types fall back to `string`.
pub fn resolve_column_type(raw: &str) -> TypeDescriptor {
    let name = normalize_column_type(raw);
    column_type(&name).unwrap_or_else(|| TypeDescriptor::string().with_comment("no specific type"))
}

fn column_type(name: &str) -> Option<TypeDescriptor> {
    let number = TypeDescriptor::number;
    let string = TypeDescriptor::string;

    let ty = match name {
        "bigint" | "int8" | "integer" | "int" | "decimal" => number(),
        "smallint" => number().with_comment("Small Integer"),
        "tinyint" => number().with_comment("Tiny Integer"),
        "mediumint" => number().with_comment("Medium Integer"),
        "serial" => number().with_comment("Serial"),
        "serial8" => number().with_comment("Serial 8"),
        "float" => number().with_comment("Float"),
        "double" => number().with_comment("Double"),
        "double_precision" => number().with_comment("Double Precision"),
        "real" => number().with_comment("Real"),
        "numeric" => number().with_comment("Numeric"),
        "dec" => number().with_comment("Decimal"),
        "money" => number().with_comment("Money"),
        "smallmoney" => number().with_comment("Small Money"),
        "bit" => number().with_comment("Bit"),

        "bool" | "boolean" => TypeDescriptor::boolean(),

        "string" => string(),
        "ascii_string" => string().with_comment("ASCII String"),
        "char" | "character" => string().with_comment("Character"),
        "varchar" => string().with_comment("Variable Character"),
        "text" => string().with_comment("Text"),
        "ntext" => string().with_comment("NText"),
        "citext" => string().with_comment("Case Insensitive Text"),
        "xml" => string().with_comment("XML"),
        "enum" => string().with_comment("Enum"),
        "set" => string().with_comment("Set"),

        "date" => string().with_comment("Date"),
        "date_mutable" => string().with_comment("date mutable"),
        "date_immutable" => string().with_comment("date immutable"),
        "datetime" => string().with_comment("Datetime"),
        "datetime_mutable" => string().with_comment("datetime mutable"),
        "datetime_immutable" => string().with_comment("datetime immutable"),
        "datetimetz_mutable" => string().with_comment("datetimez mutable"),
        "datetimetz_immutable" => string().with_comment("datetimez immutable"),
        "time" => string().with_comment("Time"),
        "time_mutable" => string().with_comment("time mutable"),
        "time_immutable" => string().with_comment("time immutable"),
        "timestamp" => string().with_comment("Timestamp"),
        "dateinterval" => string().with_comment("date interval"),
        "smalldatetime" => string().with_comment("Small Datetime"),
        "datetime2" => string().with_comment("Datetime2"),
        "datetimeoffset" => string().with_comment("Datetime Offset"),

        "guid" => string().with_comment("GUID"),
        "uuid" => string().with_comment("UUID"),
        "uniqueidentifier" => string().with_comment("Unique Identifier"),
        "rowversion" => string().with_comment("Row Version"),

        "macaddr" => string().with_comment("MAC Address"),
        "inet" => string().with_comment("Internet Address"),
        "cidr" => string().with_comment("CIDR"),
        "tsvector" => string().with_comment("Text Search Vector"),
        "tsquery" => string().with_comment("Text Search Query"),
        "geography" => string().with_comment("Geography"),
        "geometry" => string().with_comment("Geometry"),

        "json" | "jsonb" => TypeDescriptor::record().with_comment("JSON"),
        "simple_array" => TypeDescriptor::array().with_comment("Simple Array"),

        "binary" => TypeDescriptor::unknown().with_comment("Binary Data"),
        "blob" => TypeDescriptor::unknown().with_comment("Binary Large Object"),
        "image" => TypeDescriptor::unknown().with_comment("Image"),
        "null" => TypeDescriptor::unknown().with_comment("Null"),

        _ => return None,
    };

    Some(ty)
}

/// The keyword part of a cast specification, before any `:` parameters.
pub fn cast_keyword(cast: &str) -> &str {
    match cast.split_once(':') {
        Some((keyword, _)) => keyword.trim(),
        None => cast.trim(),
    }
}

/// Resolve a built-in cast keyword, e.g. `datetime:Y-m-d` or `decimal:2`.
///
/// Returns `None` for casts naming a class, which the caller resolves as a
/// plain declared type.
pub fn resolve_cast_keyword(cast: &str) -> Option<TypeDescriptor> {
    let keyword = cast_keyword(cast);
    let string = TypeDescriptor::string;

    if keyword.starts_with("decimal") {
        return Some(TypeDescriptor::number());
    }

    let ty = match keyword {
        "int" | "integer" | "real" | "float" | "double" => TypeDescriptor::number(),
        "string" | "hashed" => string(),
        "bool" | "boolean" => TypeDescriptor::boolean(),
        "object" => TypeDescriptor::record().with_comment("Object/Record"),
        "array" => TypeDescriptor::array(),
        "json" | "collection" => TypeDescriptor::record().with_comment("JSON"),
        "date" => string().with_comment("date string"),
        "datetime" => string().with_comment("datetime string"),
        "custom_datetime" => string().with_comment("custom_datetime string"),
        "immutable_date" => string().with_comment("immutable_date string"),
        "immutable_custom_datetime" => string().with_comment("immutable_custom_datetime string"),
        "immutable_datetime" => string().with_comment("immutable_datetime string"),
        "timestamp" => string().with_comment("timestamp string"),
        "encrypted" => match cast.split_once(':').map(|(_, param)| param.trim()) {
            Some("array") => TypeDescriptor::array(),
            Some("collection" | "object") => TypeDescriptor::record(),
            _ => string(),
        },
        "Illuminate\\Database\\Eloquent\\Casts\\AsStringable" => string(),
        "Illuminate\\Database\\Eloquent\\Casts\\AsArrayObject" => TypeDescriptor::record(),
        "Illuminate\\Database\\Eloquent\\Casts\\AsCollection" => TypeDescriptor::array(),
        _ => return None,
    };

    Some(ty)
}

/// Resolve an enumeration to the union of its cases' backing values.
///
/// `None`, or an enumeration without cases, resolves to `any`.
pub fn resolve_enum(definition: Option<&EnumDefinition>) -> TypeDescriptor {
    match definition {
        Some(definition) if !definition.cases.is_empty() => {
            TypeDescriptor::literals(definition.cases.iter().map(|case| case.literal()).collect())
        }
        _ => TypeDescriptor::any(),
    }
}
