//! Secondary index definitions.
//!
//! Indexes:
//! - `logs_ventas`: `{ "timestamp": 1 }`, `{ "evento": 1 }`, `{ "numero_factura": 1 }`
//! - `sesiones_usuario`: `{ "usuario_id": 1 }`, `{ "fecha_inicio": 1 }`
//!
//! All are single-field, ascending and non-unique.

use mongodb::{IndexModel, bson::doc};

use crate::{SALES_EVENTS, USER_SESSIONS};

pub const SALES_EVENT_INDEX_FIELDS: &[&str] = &["timestamp", "evento", "numero_factura"];

pub const USER_SESSION_INDEX_FIELDS: &[&str] = &["usuario_id", "fecha_inicio"];

/// Collections paired with the fields indexed on each, in creation order.
pub const INDEXED_COLLECTIONS: &[(&str, &[&str])] = &[
    (SALES_EVENTS, SALES_EVENT_INDEX_FIELDS),
    (USER_SESSIONS, USER_SESSION_INDEX_FIELDS),
];

/// Ascending, non-unique index on a single field.
pub fn ascending(field: &str) -> IndexModel {
    IndexModel::builder().keys(doc! { field: 1 }).build()
}

pub fn get_index_models(fields: &[&str]) -> Vec<IndexModel> {
    fields.iter().map(|field| ascending(field)).collect()
}

/// Name the server assigns to [`ascending`] indexes.
pub fn index_name(field: &str) -> String {
    format!("{field}_1")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascending_model() {
        let model = ascending("numero_factura");

        assert_eq!(model.keys.len(), 1);
        assert_eq!(model.keys.get_i32("numero_factura").unwrap(), 1);
        assert!(model.options.is_none());
    }

    #[test]
    fn test_index_counts() {
        let total: usize = INDEXED_COLLECTIONS
            .iter()
            .map(|(_, fields)| get_index_models(fields).len())
            .sum();
        assert_eq!(total, 5);
    }

    #[test]
    fn test_index_name() {
        assert_eq!(index_name("fecha_inicio"), "fecha_inicio_1");
    }
}
