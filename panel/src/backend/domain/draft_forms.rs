//! Draft form handling for the four "add" forms of the dashboard.
//!
//! Each entity type has exactly one draft that the rendering layer edits one
//! field at a time. Raw widget values are converted here, required fields are
//! checked on commit, and the draft is reset to its blank state once it has
//! been handed over to the entity store.

use log::{debug, info, warn};
use shared::{
    Audience, ClientDraft, DraftSet, EntityType, MediaDraft, MediaKind, NotificationDraft,
    PaymentDraft, PaymentStatus,
};
use std::sync::Arc;

use super::clock::Clock;
use super::errors::{PanelError, PanelResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaField {
    Title,
    Url,
    Kind,
    Note,
    Date,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentField {
    ClientName,
    ServiceLabel,
    Amount,
    Date,
    Reference,
    Status,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientField {
    TutorName,
    PetName,
    PlanLabel,
    FocusNote,
    Progress,
    NextSessionDate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationField {
    Title,
    Message,
    Audience,
    ScheduledFor,
}

/// A single editable field of one of the drafts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    Media(MediaField),
    Payment(PaymentField),
    Client(ClientField),
    Notification(NotificationField),
}

impl DraftField {
    /// Resolve a field name sent by the rendering layer.
    ///
    /// Accepts snake_case (`client_name`), camelCase (`clientName`) and the
    /// short names used by the form inputs (`client`, `tutor`, `type`).
    pub fn parse(entity: EntityType, name: &str) -> PanelResult<Self> {
        let normalized: String = name
            .trim()
            .chars()
            .filter(|c| !matches!(c, '_' | '-' | ' '))
            .flat_map(char::to_lowercase)
            .collect();

        let field = match (entity, normalized.as_str()) {
            (EntityType::Media, "title") => DraftField::Media(MediaField::Title),
            (EntityType::Media, "url") => DraftField::Media(MediaField::Url),
            (EntityType::Media, "kind" | "type") => DraftField::Media(MediaField::Kind),
            (EntityType::Media, "note") => DraftField::Media(MediaField::Note),
            (EntityType::Media, "date") => DraftField::Media(MediaField::Date),

            (EntityType::Payment, "clientname" | "client") => DraftField::Payment(PaymentField::ClientName),
            (EntityType::Payment, "servicelabel" | "service") => DraftField::Payment(PaymentField::ServiceLabel),
            (EntityType::Payment, "amount") => DraftField::Payment(PaymentField::Amount),
            (EntityType::Payment, "date") => DraftField::Payment(PaymentField::Date),
            (EntityType::Payment, "reference") => DraftField::Payment(PaymentField::Reference),
            (EntityType::Payment, "status") => DraftField::Payment(PaymentField::Status),

            (EntityType::Client, "tutorname" | "tutor") => DraftField::Client(ClientField::TutorName),
            (EntityType::Client, "petname" | "pet") => DraftField::Client(ClientField::PetName),
            (EntityType::Client, "planlabel" | "plan") => DraftField::Client(ClientField::PlanLabel),
            (EntityType::Client, "focusnote" | "focus") => DraftField::Client(ClientField::FocusNote),
            (EntityType::Client, "progress") => DraftField::Client(ClientField::Progress),
            (EntityType::Client, "nextsessiondate" | "nextsession") => {
                DraftField::Client(ClientField::NextSessionDate)
            }

            (EntityType::Notification, "title") => DraftField::Notification(NotificationField::Title),
            (EntityType::Notification, "message") => DraftField::Notification(NotificationField::Message),
            (EntityType::Notification, "audience") => DraftField::Notification(NotificationField::Audience),
            (EntityType::Notification, "scheduledfor") => {
                DraftField::Notification(NotificationField::ScheduledFor)
            }

            _ => {
                return Err(PanelError::UnknownField {
                    entity,
                    field: name.to_string(),
                })
            }
        };

        Ok(field)
    }

    pub fn entity_type(&self) -> EntityType {
        match self {
            DraftField::Media(_) => EntityType::Media,
            DraftField::Payment(_) => EntityType::Payment,
            DraftField::Client(_) => EntityType::Client,
            DraftField::Notification(_) => EntityType::Notification,
        }
    }

    /// Canonical snake_case name
    pub fn name(&self) -> &'static str {
        match self {
            DraftField::Media(MediaField::Title) => "title",
            DraftField::Media(MediaField::Url) => "url",
            DraftField::Media(MediaField::Kind) => "kind",
            DraftField::Media(MediaField::Note) => "note",
            DraftField::Media(MediaField::Date) => "date",
            DraftField::Payment(PaymentField::ClientName) => "client_name",
            DraftField::Payment(PaymentField::ServiceLabel) => "service_label",
            DraftField::Payment(PaymentField::Amount) => "amount",
            DraftField::Payment(PaymentField::Date) => "date",
            DraftField::Payment(PaymentField::Reference) => "reference",
            DraftField::Payment(PaymentField::Status) => "status",
            DraftField::Client(ClientField::TutorName) => "tutor_name",
            DraftField::Client(ClientField::PetName) => "pet_name",
            DraftField::Client(ClientField::PlanLabel) => "plan_label",
            DraftField::Client(ClientField::FocusNote) => "focus_note",
            DraftField::Client(ClientField::Progress) => "progress",
            DraftField::Client(ClientField::NextSessionDate) => "next_session_date",
            DraftField::Notification(NotificationField::Title) => "title",
            DraftField::Notification(NotificationField::Message) => "message",
            DraftField::Notification(NotificationField::Audience) => "audience",
            DraftField::Notification(NotificationField::ScheduledFor) => "scheduled_for",
        }
    }
}

/// A draft taken out of the form service, ready to become a record
#[derive(Debug, Clone, PartialEq)]
pub enum CommittedDraft {
    Media(MediaDraft),
    Payment(PaymentDraft),
    Client(ClientDraft),
    Notification(NotificationDraft),
}

/// Owns the four drafts and applies field edits to them
pub struct DraftFormService {
    drafts: DraftSet,
    clock: Arc<dyn Clock>,
}

impl DraftFormService {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        let drafts = Self::blank_drafts(clock.as_ref());
        Self { drafts, clock }
    }

    /// Blank drafts: empty text, default enum values, dates set to now
    pub fn blank_drafts(clock: &dyn Clock) -> DraftSet {
        DraftSet {
            media: Self::blank_media(clock),
            payment: Self::blank_payment(clock),
            client: Self::blank_client(clock),
            notification: Self::blank_notification(clock),
        }
    }

    pub fn blank_media(clock: &dyn Clock) -> MediaDraft {
        MediaDraft {
            title: String::new(),
            url: String::new(),
            kind: MediaKind::default(),
            note: String::new(),
            date: clock.today(),
        }
    }

    pub fn blank_payment(clock: &dyn Clock) -> PaymentDraft {
        PaymentDraft {
            client_name: String::new(),
            service_label: String::new(),
            amount: 0.0,
            date: clock.today(),
            reference: String::new(),
            status: PaymentStatus::default(),
        }
    }

    pub fn blank_client(clock: &dyn Clock) -> ClientDraft {
        ClientDraft {
            tutor_name: String::new(),
            pet_name: String::new(),
            plan_label: String::new(),
            focus_note: String::new(),
            progress: 0,
            next_session_date: clock.today(),
        }
    }

    pub fn blank_notification(clock: &dyn Clock) -> NotificationDraft {
        NotificationDraft {
            title: String::new(),
            message: String::new(),
            audience: Audience::default(),
            scheduled_for: clock.now_to_minute(),
        }
    }

    pub fn drafts(&self) -> &DraftSet {
        &self.drafts
    }

    /// Replace exactly one field. On a conversion error the draft is left as it was.
    pub fn update_field(&mut self, field: DraftField, raw: &str) -> PanelResult<()> {
        debug!("Updating {} field '{}'", field.entity_type(), field.name());

        match field {
            DraftField::Media(media_field) => {
                let draft = &mut self.drafts.media;
                match media_field {
                    MediaField::Title => draft.title = raw.to_string(),
                    MediaField::Url => draft.url = raw.to_string(),
                    MediaField::Kind => draft.kind = parse_choice(field, raw)?,
                    MediaField::Note => draft.note = raw.to_string(),
                    MediaField::Date => draft.date = raw.to_string(),
                }
            }
            DraftField::Payment(payment_field) => {
                let draft = &mut self.drafts.payment;
                match payment_field {
                    PaymentField::ClientName => draft.client_name = raw.to_string(),
                    PaymentField::ServiceLabel => draft.service_label = raw.to_string(),
                    PaymentField::Amount => draft.amount = parse_amount(raw)?,
                    PaymentField::Date => draft.date = raw.to_string(),
                    PaymentField::Reference => draft.reference = raw.to_string(),
                    PaymentField::Status => draft.status = parse_choice(field, raw)?,
                }
            }
            DraftField::Client(client_field) => {
                let draft = &mut self.drafts.client;
                match client_field {
                    ClientField::TutorName => draft.tutor_name = raw.to_string(),
                    ClientField::PetName => draft.pet_name = raw.to_string(),
                    ClientField::PlanLabel => draft.plan_label = raw.to_string(),
                    ClientField::FocusNote => draft.focus_note = raw.to_string(),
                    ClientField::Progress => draft.progress = parse_progress(raw)?,
                    ClientField::NextSessionDate => draft.next_session_date = raw.to_string(),
                }
            }
            DraftField::Notification(notification_field) => {
                let draft = &mut self.drafts.notification;
                match notification_field {
                    NotificationField::Title => draft.title = raw.to_string(),
                    NotificationField::Message => draft.message = raw.to_string(),
                    NotificationField::Audience => draft.audience = parse_choice(field, raw)?,
                    NotificationField::ScheduledFor => draft.scheduled_for = raw.to_string(),
                }
            }
        }

        Ok(())
    }

    /// Names of required fields that are currently empty.
    ///
    /// Mirrors a `required` text input: any character, whitespace included,
    /// counts as filled.
    pub fn missing_required_fields(&self, entity: EntityType) -> Vec<&'static str> {
        let required: Vec<(&'static str, &str)> = match entity {
            EntityType::Media => {
                let d = &self.drafts.media;
                vec![("title", d.title.as_str()), ("url", d.url.as_str()), ("date", d.date.as_str())]
            }
            EntityType::Payment => {
                let d = &self.drafts.payment;
                vec![
                    ("client_name", d.client_name.as_str()),
                    ("service_label", d.service_label.as_str()),
                    ("date", d.date.as_str()),
                    ("reference", d.reference.as_str()),
                ]
            }
            EntityType::Client => {
                let d = &self.drafts.client;
                vec![
                    ("tutor_name", d.tutor_name.as_str()),
                    ("pet_name", d.pet_name.as_str()),
                    ("plan_label", d.plan_label.as_str()),
                    ("next_session_date", d.next_session_date.as_str()),
                ]
            }
            EntityType::Notification => {
                let d = &self.drafts.notification;
                vec![
                    ("title", d.title.as_str()),
                    ("message", d.message.as_str()),
                    ("scheduled_for", d.scheduled_for.as_str()),
                ]
            }
        };

        required
            .into_iter()
            .filter(|(_, value)| value.is_empty())
            .map(|(name, _)| name)
            .collect()
    }

    /// Hand over the draft for `entity` and reset it to blank.
    ///
    /// Fails with `IncompleteDraft` if a required field is blank, in which
    /// case the draft is kept so the operator can finish it.
    pub fn commit(&mut self, entity: EntityType) -> PanelResult<CommittedDraft> {
        let missing = self.missing_required_fields(entity);
        if !missing.is_empty() {
            warn!("Rejecting {} form, missing: {}", entity, missing.join(", "));
            return Err(PanelError::IncompleteDraft { entity, missing });
        }

        let clock = self.clock.as_ref();
        let committed = match entity {
            EntityType::Media => CommittedDraft::Media(std::mem::replace(
                &mut self.drafts.media,
                Self::blank_media(clock),
            )),
            EntityType::Payment => CommittedDraft::Payment(std::mem::replace(
                &mut self.drafts.payment,
                Self::blank_payment(clock),
            )),
            EntityType::Client => CommittedDraft::Client(std::mem::replace(
                &mut self.drafts.client,
                Self::blank_client(clock),
            )),
            EntityType::Notification => CommittedDraft::Notification(std::mem::replace(
                &mut self.drafts.notification,
                Self::blank_notification(clock),
            )),
        };

        info!("Committed {} form", entity);
        Ok(committed)
    }
}

fn parse_choice<T>(field: DraftField, raw: &str) -> PanelResult<T>
where
    T: std::str::FromStr<Err = shared::UnknownKeyError>,
{
    raw.parse::<T>().map_err(|e| PanelError::InvalidFieldValue {
        field: field.name(),
        value: raw.to_string(),
        reason: e.to_string(),
    })
}

/// Parse an amount typed as `220`, `220.5`, `R$ 220,50` or `1.234,50`.
///
/// With both separators present the last one is the decimal point. A lone
/// separator is always decimal, so `1.234` is one real and 234 thousandths,
/// the value a numeric input field reports. A blank value is zero. Negative
/// or non-finite amounts are rejected.
pub fn parse_amount(raw: &str) -> PanelResult<f64> {
    let invalid = |reason: &str| PanelError::InvalidFieldValue {
        field: "amount",
        value: raw.to_string(),
        reason: reason.to_string(),
    };

    let cleaned: String = raw
        .trim()
        .trim_start_matches("R$")
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();

    if cleaned.is_empty() {
        return Ok(0.0);
    }

    let normalized = match (cleaned.rfind(','), cleaned.rfind('.')) {
        (Some(comma), Some(dot)) if comma > dot => cleaned.replace('.', "").replace(',', "."),
        (Some(_), Some(_)) => cleaned.replace(',', ""),
        (Some(_), None) => cleaned.replace(',', "."),
        _ => cleaned,
    };

    let amount: f64 = normalized.parse().map_err(|_| invalid("not a number"))?;
    if !amount.is_finite() {
        return Err(invalid("not a finite number"));
    }
    if amount < 0.0 {
        return Err(invalid("amount cannot be negative"));
    }

    Ok(amount)
}

/// Parse a progress percentage, clamping it to 0..=100. A blank value is zero.
pub fn parse_progress(raw: &str) -> PanelResult<u8> {
    let trimmed = raw.trim().trim_end_matches('%').trim_end();
    if trimmed.is_empty() {
        return Ok(0);
    }

    let value: f64 = trimmed.parse().map_err(|_| PanelError::InvalidFieldValue {
        field: "progress",
        value: raw.to_string(),
        reason: "not a number".to_string(),
    })?;
    if !value.is_finite() {
        return Err(PanelError::InvalidFieldValue {
            field: "progress",
            value: raw.to_string(),
            reason: "not a finite number".to_string(),
        });
    }

    Ok(value.round().clamp(0.0, 100.0) as u8)
}
