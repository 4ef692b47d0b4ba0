use log::info;
use shared::{
    ClientProfile, DashboardStats, DashboardView, DraftSet, EntityType, GateState, MediaItem,
    Notification, PanelSnapshot, PaymentRecord, SectionKey,
};
use std::sync::Arc;

use crate::backend::config::PanelConfig;
use crate::backend::domain::access_gate::{AccessGate, GateOutcome};
use crate::backend::domain::clock::Clock;
use crate::backend::domain::currency_format::CurrencyFormat;
use crate::backend::domain::dashboard_metrics::compute_dashboard_stats;
use crate::backend::domain::display_labels::build_display_labels;
use crate::backend::domain::draft_forms::{CommittedDraft, DraftField, DraftFormService};
use crate::backend::domain::entity_store::EntityStore;
use crate::backend::domain::errors::PanelResult;
use crate::backend::domain::sample_data::sample_seed;
use crate::backend::domain::section_router::SectionRouter;

/// A record created by a form submit
#[derive(Debug, Clone, PartialEq)]
pub enum CommittedRecord {
    Media(MediaItem),
    Payment(PaymentRecord),
    Client(ClientProfile),
    Notification(Notification),
}

impl CommittedRecord {
    pub fn id(&self) -> u64 {
        match self {
            CommittedRecord::Media(record) => record.id,
            CommittedRecord::Payment(record) => record.id,
            CommittedRecord::Client(record) => record.id,
            CommittedRecord::Notification(record) => record.id,
        }
    }

    pub fn entity_type(&self) -> EntityType {
        match self {
            CommittedRecord::Media(_) => EntityType::Media,
            CommittedRecord::Payment(_) => EntityType::Payment,
            CommittedRecord::Client(_) => EntityType::Client,
            CommittedRecord::Notification(_) => EntityType::Notification,
        }
    }
}

/// All state of one operator session.
///
/// Every input event maps to one `&mut self` method that runs to completion.
/// Dashboard mutations (field edits, submits, section changes) require the
/// gate to be unlocked and fail with `PanelError::Locked` otherwise.
pub struct PanelSession {
    access_gate: AccessGate,
    entity_store: EntityStore,
    draft_forms: DraftFormService,
    section_router: SectionRouter,
    currency: CurrencyFormat,
    clock: Arc<dyn Clock>,
}

impl PanelSession {
    pub fn new(config: &PanelConfig, clock: Arc<dyn Clock>) -> Self {
        let entity_store = if config.seed_sample_data {
            info!("Seeding session with sample records");
            EntityStore::with_seed(sample_seed())
        } else {
            EntityStore::new()
        };

        Self::with_store(config, entity_store, clock)
    }

    /// Start a session over records that already exist
    pub fn with_store(config: &PanelConfig, entity_store: EntityStore, clock: Arc<dyn Clock>) -> Self {
        Self {
            access_gate: AccessGate::new(config.access_secret.clone()),
            entity_store,
            draft_forms: DraftFormService::new(clock.clone()),
            section_router: SectionRouter::new(),
            currency: config.currency.clone(),
            clock,
        }
    }

    pub fn gate_state(&self) -> GateState {
        self.access_gate.state()
    }

    pub fn secret_input(&self) -> &str {
        self.access_gate.input()
    }

    pub fn set_secret_input(&mut self, value: &str) {
        self.access_gate.set_input(value);
    }

    pub fn submit_secret(&mut self) -> GateOutcome {
        self.access_gate.submit()
    }

    pub fn attempt_access(&mut self, secret: &str) -> GateOutcome {
        self.access_gate.attempt(secret)
    }

    /// Edit one field of the draft for `entity`
    pub fn update_field(&mut self, entity: EntityType, field_name: &str, raw_value: &str) -> PanelResult<()> {
        self.access_gate.ensure_unlocked()?;
        let field = DraftField::parse(entity, field_name)?;
        self.draft_forms.update_field(field, raw_value)
    }

    /// Turn the draft for `entity` into a record at the front of its collection.
    ///
    /// On error nothing changes: the collection is untouched and the draft
    /// keeps its values.
    pub fn submit_form(&mut self, entity: EntityType) -> PanelResult<CommittedRecord> {
        self.access_gate.ensure_unlocked()?;
        self.entity_store.ensure_capacity(entity)?;

        let record = match self.draft_forms.commit(entity)? {
            CommittedDraft::Media(draft) => CommittedRecord::Media(self.entity_store.append_media(draft)?),
            CommittedDraft::Payment(draft) => {
                CommittedRecord::Payment(self.entity_store.append_payment(draft)?)
            }
            CommittedDraft::Client(draft) => {
                CommittedRecord::Client(self.entity_store.append_client(draft)?)
            }
            CommittedDraft::Notification(draft) => {
                CommittedRecord::Notification(self.entity_store.append_notification(draft)?)
            }
        };

        Ok(record)
    }

    pub fn select_section(&mut self, section: SectionKey) -> PanelResult<()> {
        self.access_gate.ensure_unlocked()?;
        self.section_router.select(section);
        Ok(())
    }

    pub fn current_section(&self) -> SectionKey {
        self.section_router.current()
    }

    pub fn store(&self) -> &EntityStore {
        &self.entity_store
    }

    pub fn drafts(&self) -> &DraftSet {
        self.draft_forms.drafts()
    }

    /// Header statistics as of now
    pub fn stats(&self) -> DashboardStats {
        compute_dashboard_stats(
            self.entity_store.clients(),
            self.entity_store.payments(),
            &self.clock.today(),
        )
    }

    pub fn snapshot(&self) -> PanelSnapshot {
        let gate_state = self.gate_state();
        if gate_state == GateState::Locked {
            return PanelSnapshot {
                gate_state,
                dashboard: None,
            };
        }

        let stats = self.stats();
        let formatted_receivables = self.currency.format_amount(stats.pending_receivable_total);

        PanelSnapshot {
            gate_state,
            dashboard: Some(DashboardView {
                active_section: self.current_section(),
                stats,
                formatted_receivables,
                media: self.entity_store.media().to_vec(),
                payments: self.entity_store.payments().to_vec(),
                clients: self.entity_store.clients().to_vec(),
                notifications: self.entity_store.notifications().to_vec(),
                labels: build_display_labels(&self.entity_store, &self.currency),
                drafts: self.drafts().clone(),
            }),
        }
    }
}
