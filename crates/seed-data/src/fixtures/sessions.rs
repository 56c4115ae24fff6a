//! Salesperson shifts matching the sellers in [`super::sales`].

use metaltronic::models::UserSession;
use time::macros::datetime;

pub fn user_sessions() -> Vec<UserSession> {
    vec![
        UserSession {
            id: None,
            user_id: "ana.garcia".to_string(),
            full_name: "Ana García".to_string(),
            start_time: datetime!(2024-01-15 07:30:00 UTC),
            end_time: datetime!(2024-01-15 16:30:00 UTC),
            terminal: "POS-001".to_string(),
            sales_count: 3,
            total_sold: 1071.83,
        },
        UserSession {
            id: None,
            user_id: "carlos.lopez".to_string(),
            full_name: "Carlos López".to_string(),
            start_time: datetime!(2024-01-16 08:00:00 UTC),
            end_time: datetime!(2024-01-16 17:00:00 UTC),
            terminal: "POS-002".to_string(),
            sales_count: 4,
            total_sold: 4579.96,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::Duration;

    #[test]
    fn test_two_sessions() {
        let sessions = user_sessions();

        assert_eq!(sessions.len(), 2);
        assert_eq!(sessions[0].user_id, "ana.garcia");
        assert_eq!(sessions[1].user_id, "carlos.lopez");
    }

    #[test]
    fn test_nine_hour_shifts() {
        for session in user_sessions() {
            assert_eq!(session.end_time - session.start_time, Duration::hours(9));
        }
    }

    #[test]
    fn test_sellers_have_sessions() {
        let sessions = user_sessions();
        for sale in crate::fixtures::sales_events() {
            assert!(
                sessions.iter().any(|s| s.full_name == sale.seller),
                "no session for {}",
                sale.seller
            );
        }
    }
}
