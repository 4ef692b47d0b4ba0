//! Header statistics derived from the client and payment collections.
//!
//! Nothing here is cached: callers recompute from the current collections
//! every time they need the numbers.

use shared::{ClientProfile, DashboardStats, PaymentRecord, PaymentStatus};

/// Compute the dashboard header statistics.
///
/// `today` is a `YYYY-MM-DD` date. Session dates are compared as strings,
/// which orders ISO calendar dates chronologically.
pub fn compute_dashboard_stats(
    clients: &[ClientProfile],
    payments: &[PaymentRecord],
    today: &str,
) -> DashboardStats {
    let upcoming_session_count = clients
        .iter()
        .filter(|client| client.next_session_date.as_str() >= today)
        .count();

    let pending_receivable_total = payments
        .iter()
        .filter(|payment| payment.status == PaymentStatus::Pending)
        .map(|payment| payment.amount)
        .sum();

    DashboardStats {
        active_client_count: clients.len(),
        upcoming_session_count,
        pending_receivable_total,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(id: u64, next_session_date: &str) -> ClientProfile {
        ClientProfile {
            id,
            tutor_name: format!("Tutor {}", id),
            pet_name: format!("Pet {}", id),
            plan_label: "Educação Básica".to_string(),
            focus_note: String::new(),
            progress: 50,
            next_session_date: next_session_date.to_string(),
        }
    }

    fn payment(id: u64, amount: f64, status: PaymentStatus) -> PaymentRecord {
        PaymentRecord {
            id,
            client_name: "Cliente".to_string(),
            service_label: "Aula avulsa".to_string(),
            amount,
            date: "2024-08-17".to_string(),
            reference: format!("PGT-{}", id),
            status,
        }
    }

    #[test]
    fn test_upcoming_sessions() {
        let clients = vec![client(1, "2024-08-22"), client(2, "2024-08-10")];

        let stats = compute_dashboard_stats(&clients, &[], "2024-08-15");

        assert_eq!(stats.active_client_count, 2);
        assert_eq!(stats.upcoming_session_count, 1);
    }

    #[test]
    fn test_session_today_counts_as_upcoming() {
        let clients = vec![client(1, "2024-08-15")];
        let stats = compute_dashboard_stats(&clients, &[], "2024-08-15");
        assert_eq!(stats.upcoming_session_count, 1);
    }

    #[test]
    fn test_pending_receivables() {
        let payments = vec![
            payment(1, 220.0, PaymentStatus::Pending),
            payment(2, 820.0, PaymentStatus::Paid),
        ];

        let stats = compute_dashboard_stats(&[], &payments, "2024-08-15");

        assert_eq!(stats.pending_receivable_total, 220.0);
        assert_eq!(stats.active_client_count, 0);
    }

    #[test]
    fn test_empty_collections() {
        let stats = compute_dashboard_stats(&[], &[], "2024-08-15");
        assert_eq!(
            stats,
            DashboardStats {
                active_client_count: 0,
                upcoming_session_count: 0,
                pending_receivable_total: 0.0,
            }
        );
    }

    #[test]
    fn test_compute_is_idempotent() {
        let clients = vec![client(1, "2024-08-22"), client(2, "2024-09-01"), client(3, "2024-01-01")];
        let payments = vec![
            payment(1, 100.0, PaymentStatus::Pending),
            payment(2, 50.5, PaymentStatus::Pending),
            payment(3, 900.0, PaymentStatus::Paid),
        ];

        let first = compute_dashboard_stats(&clients, &payments, "2024-08-15");
        let second = compute_dashboard_stats(&clients, &payments, "2024-08-15");

        assert_eq!(first, second);
        assert_eq!(first.upcoming_session_count, 2);
        assert_eq!(first.pending_receivable_total, 150.5);
        assert_eq!(clients.len(), 3);
    }
}
