//! Example records a fresh panel is populated with, so the dashboard is not
//! empty on first launch.

use shared::{
    Audience, ClientProfile, MediaItem, MediaKind, Notification, PaymentRecord, PaymentStatus,
};

use super::entity_store::SeedData;

pub fn sample_seed() -> SeedData {
    SeedData {
        media: vec![
            MediaItem {
                id: 1,
                title: "Aula de socialização".to_string(),
                url: "https://images.unsplash.com/photo-1552053831-71594a27632d?auto=format&fit=crop&w=900&q=80"
                    .to_string(),
                kind: MediaKind::Photo,
                note: "Encontro do grupo avançado nas ruas de Copacabana.".to_string(),
                date: "2024-08-15".to_string(),
            },
            MediaItem {
                id: 2,
                title: "Progresso da Luna".to_string(),
                url: "https://videos.pexels.com/video-files/856980/856980-uhd_2560_1440_30fps.mp4"
                    .to_string(),
                kind: MediaKind::Video,
                note: "Exercício de foco e autocontrole no parque.".to_string(),
                date: "2024-08-12".to_string(),
            },
        ],
        payments: vec![
            PaymentRecord {
                id: 1,
                client_name: "Maria Fernandes".to_string(),
                service_label: "Plano Intensivo - 4 semanas".to_string(),
                amount: 820.0,
                date: "2024-08-01".to_string(),
                reference: "PGT-482930".to_string(),
                status: PaymentStatus::Paid,
            },
            PaymentRecord {
                id: 2,
                client_name: "André Silva".to_string(),
                service_label: "Aula avulsa".to_string(),
                amount: 220.0,
                date: "2024-08-17".to_string(),
                reference: "PGT-482944".to_string(),
                status: PaymentStatus::Pending,
            },
        ],
        clients: vec![
            ClientProfile {
                id: 1,
                tutor_name: "Juliana Maia".to_string(),
                pet_name: "Thor".to_string(),
                plan_label: "Educação Básica".to_string(),
                focus_note: "Obediência e passeio sem puxar".to_string(),
                progress: 70,
                next_session_date: "2024-08-22".to_string(),
            },
            ClientProfile {
                id: 2,
                tutor_name: "Ricardo Lopes".to_string(),
                pet_name: "Bidu".to_string(),
                plan_label: "Correção comportamental".to_string(),
                focus_note: "Ansiedade de separação".to_string(),
                progress: 45,
                next_session_date: "2024-08-25".to_string(),
            },
        ],
        notifications: vec![
            Notification {
                id: 1,
                title: "Aula coletiva no sábado".to_string(),
                message: "Nos encontramos às 9h no Parcão da Barra. Tragam petiscos preferidos e guia curta."
                    .to_string(),
                audience: Audience::Clients,
                scheduled_for: "2024-08-23T09:00".to_string(),
            },
            Notification {
                id: 2,
                title: "Nova série de vídeos".to_string(),
                message: "Liberei novos vídeos exclusivos com exercícios para filhotes na seção de Galeria."
                    .to_string(),
                audience: Audience::All,
                scheduled_for: "2024-08-20T19:00".to_string(),
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::domain::dashboard_metrics::compute_dashboard_stats;

    #[test]
    fn test_sample_has_two_of_each() {
        let seed = sample_seed();
        assert_eq!(seed.media.len(), 2);
        assert_eq!(seed.payments.len(), 2);
        assert_eq!(seed.clients.len(), 2);
        assert_eq!(seed.notifications.len(), 2);
    }

    #[test]
    fn test_sample_stats() {
        let seed = sample_seed();
        let stats = compute_dashboard_stats(&seed.clients, &seed.payments, "2024-08-23");

        assert_eq!(stats.active_client_count, 2);
        assert_eq!(stats.upcoming_session_count, 1);
        assert_eq!(stats.pending_receivable_total, 220.0);
    }
}
