use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// A point-of-sale event as stored in `logs_ventas`.
///
/// Field names on disk follow the deployment's Spanish schema
/// (`evento`, `numero_factura`, ...); the Rust names are the English equivalents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesEvent {
    /// Server-assigned identifier, absent until the document is inserted.
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    #[serde(with = "bson_datetime")]
    pub timestamp: OffsetDateTime,
    #[serde(rename = "evento")]
    pub event: EventKind,
    /// Invoice number in `NNN-NNN-NNNNNN` form.
    #[serde(rename = "numero_factura")]
    pub invoice_number: String,
    /// Reference into the external customer registry.
    #[serde(rename = "cliente_id")]
    pub customer_id: i32,
    /// Salesperson display name.
    #[serde(rename = "vendedor")]
    pub seller: String,
    pub total: f64,
    #[serde(rename = "productos")]
    pub line_items: Vec<LineItem>,
    #[serde(rename = "metadatos")]
    pub metadata: SaleMetadata,
}

impl SalesEvent {
    /// Sum of the quantities across all line items.
    pub fn total_quantity(&self) -> i64 {
        self.line_items.iter().map(|item| i64::from(item.quantity)).sum()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventKind {
    #[serde(rename = "venta_completada")]
    SaleCompleted,
    /// Any tag written by another producer.
    #[serde(other)]
    Unknown,
}

impl EventKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::SaleCompleted => "venta_completada",
            EventKind::Unknown => "unknown",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    #[serde(rename = "codigo")]
    pub product_code: String,
    #[serde(rename = "cantidad")]
    pub quantity: i32,
}

impl LineItem {
    pub fn new(product_code: impl Into<String>, quantity: i32) -> Self {
        Self {
            product_code: product_code.into(),
            quantity,
        }
    }
}

/// Free-form context captured by the terminal that produced the sale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaleMetadata {
    #[serde(rename = "ip_cliente")]
    pub client_ip: String,
    #[serde(rename = "sucursal")]
    pub branch: String,
    pub terminal: String,
}

/// A salesperson's shift at a terminal, stored in `sesiones_usuario`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserSession {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// Dotted login name, e.g. `ana.garcia`.
    #[serde(rename = "usuario_id")]
    pub user_id: String,
    #[serde(rename = "nombre_completo")]
    pub full_name: String,
    #[serde(rename = "fecha_inicio", with = "bson_datetime")]
    pub start_time: OffsetDateTime,
    // Expected to be after start_time; nothing checks it.
    #[serde(rename = "fecha_fin", with = "bson_datetime")]
    pub end_time: OffsetDateTime,
    pub terminal: String,
    #[serde(rename = "ventas_realizadas")]
    pub sales_count: i32,
    #[serde(rename = "total_vendido")]
    pub total_sold: f64,
}

/// Serde adapter storing `OffsetDateTime` as a native BSON date.
///
/// BSON dates carry millisecond precision; anything finer is truncated on write.
pub mod bson_datetime {
    use mongodb::bson;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use time::OffsetDateTime;

    pub fn serialize<S>(value: &OffsetDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        to_bson(*value).serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<OffsetDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = bson::DateTime::deserialize(deserializer)?;
        from_bson(value).map_err(serde::de::Error::custom)
    }

    pub fn to_bson(value: OffsetDateTime) -> bson::DateTime {
        bson::DateTime::from_millis((value.unix_timestamp_nanos() / 1_000_000) as i64)
    }

    pub fn from_bson(value: bson::DateTime) -> Result<OffsetDateTime, time::error::ComponentRange> {
        OffsetDateTime::from_unix_timestamp_nanos(i128::from(value.timestamp_millis()) * 1_000_000)
    }
}
