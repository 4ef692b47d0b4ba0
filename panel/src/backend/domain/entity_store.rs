use log::{info, warn};
use shared::{
    ClientDraft, ClientProfile, EntityType, MediaDraft, MediaItem, Notification, NotificationDraft,
    PaymentDraft, PaymentRecord,
};

use super::errors::{PanelError, PanelResult};
use crate::backend::storage::{CollectionStorage, InMemoryCollection, SequentialIdGenerator};

/// Records a session starts with, each list ordered newest-first
#[derive(Debug, Clone, Default)]
pub struct SeedData {
    pub media: Vec<MediaItem>,
    pub payments: Vec<PaymentRecord>,
    pub clients: Vec<ClientProfile>,
    pub notifications: Vec<Notification>,
}

/// The four append-only collections plus the identifier generator they share.
///
/// Appending always puts the new record first and leaves every earlier record
/// where it was. Records are never edited or removed.
#[derive(Debug, Clone)]
pub struct EntityStore {
    media: InMemoryCollection<MediaItem>,
    payments: InMemoryCollection<PaymentRecord>,
    clients: InMemoryCollection<ClientProfile>,
    notifications: InMemoryCollection<Notification>,
    ids: SequentialIdGenerator,
}

impl EntityStore {
    pub fn new() -> Self {
        Self::with_seed(SeedData::default())
    }

    /// Start from existing records; new identifiers continue above the highest seeded one
    pub fn with_seed(seed: SeedData) -> Self {
        let media = InMemoryCollection::with_records("media", seed.media);
        let payments = InMemoryCollection::with_records("payments", seed.payments);
        let clients = InMemoryCollection::with_records("clients", seed.clients);
        let notifications = InMemoryCollection::with_records("notifications", seed.notifications);

        let highest = [
            media.max_id(),
            payments.max_id(),
            clients.max_id(),
            notifications.max_id(),
        ]
        .into_iter()
        .flatten()
        .max()
        .unwrap_or(0);

        Self {
            media,
            payments,
            clients,
            notifications,
            ids: SequentialIdGenerator::starting_after(highest),
        }
    }

    /// Fails when no identifier is left for another record
    pub fn ensure_capacity(&self, entity: EntityType) -> PanelResult<()> {
        if self.ids.is_exhausted() {
            return Err(PanelError::IdentifiersExhausted { entity });
        }
        Ok(())
    }

    fn allocate_id(&mut self, entity: EntityType) -> PanelResult<u64> {
        self.ids.next_id().ok_or_else(|| {
            warn!("Identifier space exhausted, refusing new {}", entity);
            PanelError::IdentifiersExhausted { entity }
        })
    }

    pub fn append_media(&mut self, draft: MediaDraft) -> PanelResult<MediaItem> {
        let record = draft.into_record(self.allocate_id(EntityType::Media)?);
        info!("Adding media item {}: {}", record.id, record.title);
        self.media.prepend(record.clone());
        Ok(record)
    }

    pub fn append_payment(&mut self, draft: PaymentDraft) -> PanelResult<PaymentRecord> {
        let record = draft.into_record(self.allocate_id(EntityType::Payment)?);
        info!(
            "Logging payment {}: {} ({:.2}, {})",
            record.id,
            record.client_name,
            record.amount,
            record.status.key()
        );
        self.payments.prepend(record.clone());
        Ok(record)
    }

    pub fn append_client(&mut self, draft: ClientDraft) -> PanelResult<ClientProfile> {
        let record = draft.into_record(self.allocate_id(EntityType::Client)?);
        info!("Adding client {}: {} with {}", record.id, record.tutor_name, record.pet_name);
        self.clients.prepend(record.clone());
        Ok(record)
    }

    pub fn append_notification(&mut self, draft: NotificationDraft) -> PanelResult<Notification> {
        let record = draft.into_record(self.allocate_id(EntityType::Notification)?);
        info!(
            "Scheduling notification {} for {}: {}",
            record.id, record.scheduled_for, record.title
        );
        self.notifications.prepend(record.clone());
        Ok(record)
    }

    pub fn media(&self) -> &[MediaItem] {
        self.media.all()
    }

    pub fn payments(&self) -> &[PaymentRecord] {
        self.payments.all()
    }

    pub fn clients(&self) -> &[ClientProfile] {
        self.clients.all()
    }

    pub fn notifications(&self) -> &[Notification] {
        self.notifications.all()
    }
}

impl Default for EntityStore {
    fn default() -> Self {
        Self::new()
    }
}
