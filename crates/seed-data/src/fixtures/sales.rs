//! Point-of-sale events logged at the Ambato branch.

use metaltronic::models::{EventKind, LineItem, SaleMetadata, SalesEvent};
use time::OffsetDateTime;
use time::macros::datetime;

const BRANCH: &str = "Ambato";

/// The three completed sales from mid-January 2024, in invoice order.
pub fn sales_events() -> Vec<SalesEvent> {
    vec![
        sale(
            datetime!(2024-01-15 08:30:00 UTC),
            "001-001-000001",
            1,
            "Ana García",
            504.00,
            vec![LineItem::new("MT-001", 20), LineItem::new("MT-005", 400)],
            "192.168.1.10",
            "POS-001",
        ),
        sale(
            datetime!(2024-01-16 10:15:00 UTC),
            "001-001-000002",
            2,
            "Carlos López",
            1400.90,
            vec![LineItem::new("MT-002", 15), LineItem::new("MT-004", 65)],
            "192.168.1.11",
            "POS-002",
        ),
        sale(
            datetime!(2024-01-17 14:20:00 UTC),
            "001-001-000003",
            3,
            "Ana García",
            358.96,
            vec![LineItem::new("MT-006", 80), LineItem::new("MT-007", 120)],
            "192.168.1.12",
            "POS-001",
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn sale(
    timestamp: OffsetDateTime,
    invoice_number: &str,
    customer_id: i32,
    seller: &str,
    total: f64,
    line_items: Vec<LineItem>,
    client_ip: &str,
    terminal: &str,
) -> SalesEvent {
    SalesEvent {
        id: None,
        timestamp,
        event: EventKind::SaleCompleted,
        invoice_number: invoice_number.to_string(),
        customer_id,
        seller: seller.to_string(),
        total,
        line_items,
        metadata: SaleMetadata {
            client_ip: client_ip.to_string(),
            branch: BRANCH.to_string(),
            terminal: terminal.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_three_completed_sales() {
        let events = sales_events();

        assert_eq!(events.len(), 3);
        assert!(events.iter().all(|e| e.event == EventKind::SaleCompleted));
        assert!(events.iter().all(|e| e.id.is_none()));
        assert!(events.iter().all(|e| e.metadata.branch == "Ambato"));
    }

    #[test]
    fn test_second_invoice() {
        let events = sales_events();
        let sale = events
            .iter()
            .find(|e| e.invoice_number == "001-001-000002")
            .unwrap();

        assert_eq!(sale.total, 1400.90);
        assert_eq!(sale.seller, "Carlos López");
        let quantities: Vec<i32> = sale.line_items.iter().map(|i| i.quantity).collect();
        assert_eq!(quantities, vec![15, 65]);
    }

    #[test]
    fn test_invoice_format() {
        for event in sales_events() {
            let parts: Vec<&str> = event.invoice_number.split('-').collect();
            let widths: Vec<usize> = parts.iter().map(|p| p.len()).collect();
            assert_eq!(widths, vec![3, 3, 6], "{}", event.invoice_number);
            assert!(parts.iter().all(|p| p.chars().all(|c| c.is_ascii_digit())));
        }
    }

    #[test]
    fn test_timestamps_ascending() {
        let events = sales_events();
        assert!(events.windows(2).all(|w| w[0].timestamp < w[1].timestamp));
    }
}
