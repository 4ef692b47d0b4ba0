use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A photo or video published to the gallery
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaItem {
    pub id: u64,
    pub title: String,
    pub url: String,
    pub kind: MediaKind,
    pub note: String,
    /// Calendar date (YYYY-MM-DD)
    pub date: String,
}

/// A payment receipt logged for a client
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentRecord {
    pub id: u64,
    pub client_name: String,
    pub service_label: String,
    /// Amount in the panel currency, never negative
    pub amount: f64,
    /// Calendar date (YYYY-MM-DD)
    pub date: String,
    pub reference: String,
    pub status: PaymentStatus,
}

/// A tutor and their dog, with training progress
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientProfile {
    pub id: u64,
    pub tutor_name: String,
    pub pet_name: String,
    pub plan_label: String,
    pub focus_note: String,
    /// Training progress percentage (0-100)
    pub progress: u8,
    /// Calendar date (YYYY-MM-DD)
    pub next_session_date: String,
}

/// A scheduled message for clients and/or staff
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: u64,
    pub title: String,
    pub message: String,
    pub audience: Audience,
    /// Local date-time without seconds (YYYY-MM-DDTHH:MM)
    pub scheduled_for: String,
}

/// Records that carry a session-unique identifier
pub trait Identified {
    fn id(&self) -> u64;
}

impl Identified for MediaItem {
    fn id(&self) -> u64 {
        self.id
    }
}

impl Identified for PaymentRecord {
    fn id(&self) -> u64 {
        self.id
    }
}

impl Identified for ClientProfile {
    fn id(&self) -> u64 {
        self.id
    }
}

impl Identified for Notification {
    fn id(&self) -> u64 {
        self.id
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MediaKind {
    #[default]
    Photo,
    Video,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    #[default]
    Paid,
    Pending,
}

/// Who a notification is addressed to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Audience {
    All,
    #[default]
    Clients,
    Staff,
}

impl MediaKind {
    pub fn key(&self) -> &'static str {
        match self {
            MediaKind::Photo => "photo",
            MediaKind::Video => "video",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MediaKind::Photo => "Foto",
            MediaKind::Video => "Vídeo",
        }
    }
}

impl PaymentStatus {
    pub fn key(&self) -> &'static str {
        match self {
            PaymentStatus::Paid => "paid",
            PaymentStatus::Pending => "pending",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PaymentStatus::Paid => "Pago",
            PaymentStatus::Pending => "Pendente",
        }
    }
}

impl Audience {
    pub fn key(&self) -> &'static str {
        match self {
            Audience::All => "all",
            Audience::Clients => "clients",
            Audience::Staff => "staff",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Audience::All => "Todos",
            Audience::Clients => "Clientes",
            Audience::Staff => "Equipe",
        }
    }
}

impl FromStr for MediaKind {
    type Err = UnknownKeyError;

    /// Accepts the canonical key or the display label, case-insensitively
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "photo" | "foto" => Ok(MediaKind::Photo),
            "video" | "vídeo" => Ok(MediaKind::Video),
            _ => Err(UnknownKeyError::new("media kind", s)),
        }
    }
}

impl FromStr for PaymentStatus {
    type Err = UnknownKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "paid" | "pago" => Ok(PaymentStatus::Paid),
            "pending" | "pendente" => Ok(PaymentStatus::Pending),
            _ => Err(UnknownKeyError::new("payment status", s)),
        }
    }
}

impl FromStr for Audience {
    type Err = UnknownKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" | "todos" => Ok(Audience::All),
            "clients" | "clientes" => Ok(Audience::Clients),
            "staff" | "equipe" => Ok(Audience::Staff),
            _ => Err(UnknownKeyError::new("audience", s)),
        }
    }
}

/// Staging record for a new media item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaDraft {
    pub title: String,
    pub url: String,
    pub kind: MediaKind,
    pub note: String,
    pub date: String,
}

/// Staging record for a new payment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentDraft {
    pub client_name: String,
    pub service_label: String,
    pub amount: f64,
    pub date: String,
    pub reference: String,
    pub status: PaymentStatus,
}

/// Staging record for a new client
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientDraft {
    pub tutor_name: String,
    pub pet_name: String,
    pub plan_label: String,
    pub focus_note: String,
    pub progress: u8,
    pub next_session_date: String,
}

/// Staging record for a new notification
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotificationDraft {
    pub title: String,
    pub message: String,
    pub audience: Audience,
    pub scheduled_for: String,
}

impl MediaDraft {
    /// Finalize the draft into a record with the given identifier
    pub fn into_record(self, id: u64) -> MediaItem {
        MediaItem {
            id,
            title: self.title,
            url: self.url,
            kind: self.kind,
            note: self.note,
            date: self.date,
        }
    }
}

impl PaymentDraft {
    pub fn into_record(self, id: u64) -> PaymentRecord {
        PaymentRecord {
            id,
            client_name: self.client_name,
            service_label: self.service_label,
            amount: self.amount,
            date: self.date,
            reference: self.reference,
            status: self.status,
        }
    }
}

impl ClientDraft {
    pub fn into_record(self, id: u64) -> ClientProfile {
        ClientProfile {
            id,
            tutor_name: self.tutor_name,
            pet_name: self.pet_name,
            plan_label: self.plan_label,
            focus_note: self.focus_note,
            progress: self.progress,
            next_session_date: self.next_session_date,
        }
    }
}

impl NotificationDraft {
    pub fn into_record(self, id: u64) -> Notification {
        Notification {
            id,
            title: self.title,
            message: self.message,
            audience: self.audience,
            scheduled_for: self.scheduled_for,
        }
    }
}

/// One draft per entity type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DraftSet {
    pub media: MediaDraft,
    pub payment: PaymentDraft,
    pub client: ClientDraft,
    pub notification: NotificationDraft,
}

/// The four kinds of records the panel manages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityType {
    Media,
    Payment,
    Client,
    Notification,
}

impl EntityType {
    pub const ALL: [EntityType; 4] = [
        EntityType::Media,
        EntityType::Payment,
        EntityType::Client,
        EntityType::Notification,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            EntityType::Media => "media",
            EntityType::Payment => "payment",
            EntityType::Client => "client",
            EntityType::Notification => "notification",
        }
    }
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl FromStr for EntityType {
    type Err = UnknownKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "media" | "media_item" | "mediaitem" => Ok(EntityType::Media),
            "payment" | "payment_record" | "paymentrecord" => Ok(EntityType::Payment),
            "client" | "client_profile" | "clientprofile" => Ok(EntityType::Client),
            "notification" => Ok(EntityType::Notification),
            _ => Err(UnknownKeyError::new("entity type", s)),
        }
    }
}

/// Top-level dashboard views
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKey {
    #[default]
    Gallery,
    Payments,
    Clients,
    Notifications,
}

impl SectionKey {
    /// Sections in navigation order
    pub const ALL: [SectionKey; 4] = [
        SectionKey::Gallery,
        SectionKey::Payments,
        SectionKey::Clients,
        SectionKey::Notifications,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            SectionKey::Gallery => "gallery",
            SectionKey::Payments => "payments",
            SectionKey::Clients => "clients",
            SectionKey::Notifications => "notifications",
        }
    }

    /// Navigation label shown to the operator
    pub fn label(&self) -> &'static str {
        match self {
            SectionKey::Gallery => "Galeria",
            SectionKey::Payments => "Comprovantes",
            SectionKey::Clients => "Clientes",
            SectionKey::Notifications => "Notificações",
        }
    }

    /// The collection this section lists
    pub fn entity_type(&self) -> EntityType {
        match self {
            SectionKey::Gallery => EntityType::Media,
            SectionKey::Payments => EntityType::Payment,
            SectionKey::Clients => EntityType::Client,
            SectionKey::Notifications => EntityType::Notification,
        }
    }
}

impl fmt::Display for SectionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl FromStr for SectionKey {
    type Err = UnknownKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "gallery" | "galeria" => Ok(SectionKey::Gallery),
            "payments" | "comprovantes" => Ok(SectionKey::Payments),
            "clients" | "clientes" => Ok(SectionKey::Clients),
            "notifications" | "notificações" | "notificacoes" => Ok(SectionKey::Notifications),
            _ => Err(UnknownKeyError::new("section", s)),
        }
    }
}

/// Access gate state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GateState {
    #[default]
    Locked,
    Unlocked,
}

/// Aggregates shown in the dashboard header
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardStats {
    pub active_client_count: usize,
    pub upcoming_session_count: usize,
    pub pending_receivable_total: f64,
}

/// Everything the dashboard renders once the gate is open
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardView {
    pub active_section: SectionKey,
    pub stats: DashboardStats,
    /// Pending receivables formatted in the panel currency (e.g. "R$ 220,00")
    pub formatted_receivables: String,
    pub media: Vec<MediaItem>,
    pub payments: Vec<PaymentRecord>,
    pub clients: Vec<ClientProfile>,
    pub notifications: Vec<Notification>,
    /// Display strings for every record above, in the same order
    pub labels: DisplayLabels,
    pub drafts: DraftSet,
}

/// Display strings for one record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordLabels {
    pub id: u64,
    /// Date or schedule in pt-BR form (`15/08/2024`, `23/08/2024, 09:00:00`)
    pub date: String,
    /// Amount in the panel currency; payments only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<String>,
}

/// Per-record display strings, one list per collection
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DisplayLabels {
    pub media: Vec<RecordLabels>,
    pub payments: Vec<RecordLabels>,
    pub clients: Vec<RecordLabels>,
    pub notifications: Vec<RecordLabels>,
}

/// Read of every output the core exposes to a rendering layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PanelSnapshot {
    pub gate_state: GateState,
    /// Only present while the gate is unlocked
    pub dashboard: Option<DashboardView>,
}

/// Result of handling one rendering-layer event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventResponse {
    pub success: bool,
    pub message: String,
    /// Identifier of the record created by a form submit
    pub record_id: Option<u64>,
    pub gate_state: GateState,
}

/// A key string that does not name any known variant
#[derive(Debug, Clone, PartialEq)]
pub struct UnknownKeyError {
    pub kind: &'static str,
    pub value: String,
}

impl UnknownKeyError {
    pub fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}

impl fmt::Display for UnknownKeyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown {}: '{}'", self.kind, self.value)
    }
}

impl std::error::Error for UnknownKeyError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enum_parsing_accepts_keys_and_labels() {
        assert_eq!("photo".parse::<MediaKind>().unwrap(), MediaKind::Photo);
        assert_eq!("Vídeo".parse::<MediaKind>().unwrap(), MediaKind::Video);
        assert_eq!("Pendente".parse::<PaymentStatus>().unwrap(), PaymentStatus::Pending);
        assert_eq!(" PAID ".parse::<PaymentStatus>().unwrap(), PaymentStatus::Paid);
        assert_eq!("Equipe".parse::<Audience>().unwrap(), Audience::Staff);
        assert_eq!("todos".parse::<Audience>().unwrap(), Audience::All);

        let err = "refunded".parse::<PaymentStatus>().unwrap_err();
        assert_eq!(err.kind, "payment status");
        assert_eq!(err.to_string(), "Unknown payment status: 'refunded'");
    }

    #[test]
    fn test_enum_defaults_match_blank_forms() {
        assert_eq!(MediaKind::default(), MediaKind::Photo);
        assert_eq!(PaymentStatus::default(), PaymentStatus::Paid);
        assert_eq!(Audience::default(), Audience::Clients);
        assert_eq!(GateState::default(), GateState::Locked);
        assert_eq!(SectionKey::default(), SectionKey::Gallery);
    }

    #[test]
    fn test_section_labels_and_entities() {
        let labels: Vec<&str> = SectionKey::ALL.iter().map(|s| s.label()).collect();
        assert_eq!(labels, vec!["Galeria", "Comprovantes", "Clientes", "Notificações"]);

        assert_eq!(SectionKey::Payments.entity_type(), EntityType::Payment);
        assert_eq!("comprovantes".parse::<SectionKey>().unwrap(), SectionKey::Payments);
        assert_eq!("Notificações".parse::<SectionKey>().unwrap(), SectionKey::Notifications);
        assert!("settings".parse::<SectionKey>().is_err());
    }

    #[test]
    fn test_entity_type_parsing() {
        assert_eq!("payment".parse::<EntityType>().unwrap(), EntityType::Payment);
        assert_eq!("ClientProfile".parse::<EntityType>().unwrap(), EntityType::Client);
        assert_eq!(EntityType::Notification.to_string(), "notification");
        assert!("invoice".parse::<EntityType>().is_err());
    }

    #[test]
    fn test_draft_into_record_keeps_fields() {
        let draft = PaymentDraft {
            client_name: "André Silva".to_string(),
            service_label: "Aula avulsa".to_string(),
            amount: 220.0,
            date: "2024-08-17".to_string(),
            reference: "PGT-482944".to_string(),
            status: PaymentStatus::Pending,
        };

        let record = draft.clone().into_record(42);
        assert_eq!(record.id, 42);
        assert_eq!(record.id(), 42);
        assert_eq!(record.client_name, draft.client_name);
        assert_eq!(record.amount, 220.0);
        assert_eq!(record.status, PaymentStatus::Pending);
    }

    #[test]
    fn test_snapshot_serializes_snake_case_keys() {
        let snapshot = PanelSnapshot {
            gate_state: GateState::Locked,
            dashboard: None,
        };

        let json = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(json["gate_state"], "locked");
        assert!(json["dashboard"].is_null());

        let item = MediaItem {
            id: 7,
            title: "Passeio".to_string(),
            url: "https://example.com/passeio.jpg".to_string(),
            kind: MediaKind::Video,
            note: String::new(),
            date: "2024-08-15".to_string(),
        };
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["kind"], "video");
        assert_eq!(json["id"], 7);
    }

    #[test]
    fn test_record_labels_omit_missing_amount() {
        let labels = RecordLabels {
            id: 3,
            date: "22/08/2024".to_string(),
            amount: None,
        };
        let json = serde_json::to_value(&labels).unwrap();
        assert!(json.get("amount").is_none());

        let parsed: RecordLabels = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, labels);
    }
}
