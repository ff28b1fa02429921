//! Built-in display-metadata tables. These literals are a wire contract
//! with the front-end rendering layer; attr keys, type names and encoding
//! identifiers must match the server-side strings case-for-case.

use super::HeaderItemDef;

// Column-metadata table header, in display order.
pub(crate) const HEADER_ITEMS: &[HeaderItemDef] = &[
    HeaderItemDef { attr: "id", name: "ID" },
    HeaderItemDef { attr: "name", name: "名称" },
    HeaderItemDef { attr: "datatype", name: "数据类型" },
    HeaderItemDef { attr: "cardinality", name: "基数" },
    HeaderItemDef { attr: "comment", name: "备注" },
];

// Recognized column data types, in the display order of the type selector.
pub(crate) const DATA_TYPES: &[&str] = &[
    "tinyint", "smallint", "int", "bigint", "float", "double", "decimal",
    "timestamp", "date", "string", "varchar(256)", "char", "boolean", "binary",
];

// Source column type -> permitted encoding strategies, in display order.
// Keys are raw source-system type names; several (numeric, integer, int4,
// real, long8, datetime) have no counterpart in DATA_TYPES because the two
// tables serve different call sites. Keep them independent.
pub(crate) const ENCODING_MAP: &[(&str, &[&str])] = &[
    ("numeric", &["dict"]),
    ("bigint", &["boolean", "date", "time", "dict", "integer"]),
    ("char", &["boolean", "date", "time", "dict", "fixed_length", "fixed_length_hex", "integer"]),
    ("integer", &["boolean", "date", "time", "dict", "integer"]),
    ("int4", &["boolean", "date", "time", "dict", "integer"]),
    ("tinyint", &["boolean", "date", "time", "dict", "integer"]),
    ("double", &["dict"]),
    ("date", &["date", "time", "dict"]),
    ("float", &["dict"]),
    ("decimal", &["dict"]),
    ("timestamp", &["date", "time", "dict"]),
    ("real", &["dict"]),
    ("time", &["date", "time", "dict"]),
    ("long8", &["boolean", "date", "time", "dict", "integer"]),
    ("datetime", &["date", "time", "dict"]),
    ("smallint", &["boolean", "date", "time", "dict", "integer"]),
    ("varchar", &["boolean", "date", "time", "dict", "fixed_length", "fixed_length_hex", "integer"]),
];

// Snapshot-metadata table header, in display order.
pub(crate) const SNAPSHOT_HEADER_ITEMS: &[HeaderItemDef] = &[
    HeaderItemDef { attr: "snapshotID", name: "ID" },
    HeaderItemDef { attr: "storageType", name: "存储类型" },
    HeaderItemDef { attr: "lastBuildTime", name: "上次构建时间" },
    HeaderItemDef { attr: "sourceTableLastModifyTime", name: "源表上次修改时间" },
    HeaderItemDef { attr: "sourceTableSize", name: "尺寸" },
    HeaderItemDef { attr: "usageInfo", name: "使用信息" },
];
