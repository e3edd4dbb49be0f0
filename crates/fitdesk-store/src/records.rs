//! Persisted field layouts for the fitdesk entities.
//!
//! Each [`Record`] implementation fixes the positional order of its fields
//! and the identifier strategy of its store. Typed fields parse strictly:
//! one bad field fails the whole line, and the store skips it.
//!
//! Timestamps persist as RFC 3339 in UTC; money persists via
//! [`Decimal`]'s canonical string form (so `10.00` keeps its scale);
//! statuses and roles persist under their canonical upper-case names.

use chrono::{DateTime, SecondsFormat, Utc};
use rust_decimal::Decimal;
use std::str::FromStr;

use fitdesk_core::{
    Feedback, FeedbackId, Member, MemberId, MembershipPlan, PaymentId, PaymentRecord, PlanId,
    Staff, StaffId,
};

use crate::codec::CodecError;
use crate::{IdStrategy, Record};

impl Record for Member {
    const KIND: &'static str = "member";
    const ARITY: usize = 6;
    const ID_STRATEGY: IdStrategy = IdStrategy::Token;

    fn id(&self) -> Option<&str> {
        self.id.as_ref().map(MemberId::as_str)
    }

    fn assign_id(&mut self, id: String) {
        self.id = Some(MemberId::new(id));
    }

    fn to_fields(&self) -> Vec<String> {
        vec![
            encode_id(self.id.as_ref()),
            self.name.clone(),
            self.email.clone(),
            self.password_hash.clone(),
            self.phone.clone(),
            self.plan_id
                .as_ref()
                .map(ToString::to_string)
                .unwrap_or_default(),
        ]
    }

    fn from_fields(fields: Vec<String>) -> Result<Self, CodecError> {
        let [id, name, email, password_hash, phone, plan_id] = into_array(fields)?;
        Ok(Self {
            id: Some(parse("id", &id)?),
            name,
            email,
            password_hash,
            phone,
            plan_id: parse_optional("plan_id", &plan_id)?,
        })
    }
}

impl Record for Staff {
    const KIND: &'static str = "staff";
    const ARITY: usize = 5;
    const ID_STRATEGY: IdStrategy = IdStrategy::Sequential { prefix: "S" };

    fn id(&self) -> Option<&str> {
        self.id.as_ref().map(StaffId::as_str)
    }

    fn assign_id(&mut self, id: String) {
        self.id = Some(StaffId::new(id));
    }

    fn to_fields(&self) -> Vec<String> {
        vec![
            encode_id(self.id.as_ref()),
            self.name.clone(),
            self.email.clone(),
            self.password_hash.clone(),
            self.role.to_string(),
        ]
    }

    fn from_fields(fields: Vec<String>) -> Result<Self, CodecError> {
        let [id, name, email, password_hash, role] = into_array(fields)?;
        Ok(Self {
            id: Some(parse("id", &id)?),
            name,
            email,
            password_hash,
            role: parse("role", &role)?,
        })
    }
}

impl Record for MembershipPlan {
    const KIND: &'static str = "plan";
    const ARITY: usize = 5;
    const ID_STRATEGY: IdStrategy = IdStrategy::Sequential { prefix: "P" };

    fn id(&self) -> Option<&str> {
        self.id.as_ref().map(PlanId::as_str)
    }

    fn assign_id(&mut self, id: String) {
        self.id = Some(PlanId::new(id));
    }

    fn to_fields(&self) -> Vec<String> {
        vec![
            encode_id(self.id.as_ref()),
            self.name.clone(),
            self.description.clone(),
            self.duration_months.to_string(),
            self.price.to_string(),
        ]
    }

    fn from_fields(fields: Vec<String>) -> Result<Self, CodecError> {
        let [id, name, description, duration_months, price] = into_array(fields)?;
        Ok(Self {
            id: Some(parse("id", &id)?),
            name,
            description,
            duration_months: parse("duration_months", &duration_months)?,
            price: parse::<Decimal>("price", &price)?,
        })
    }
}

impl Record for Feedback {
    const KIND: &'static str = "feedback";
    const ARITY: usize = 7;
    const ID_STRATEGY: IdStrategy = IdStrategy::Sequential { prefix: "F" };

    fn id(&self) -> Option<&str> {
        self.id.as_ref().map(FeedbackId::as_str)
    }

    fn assign_id(&mut self, id: String) {
        self.id = Some(FeedbackId::new(id));
    }

    fn to_fields(&self) -> Vec<String> {
        vec![
            encode_id(self.id.as_ref()),
            self.member_id.to_string(),
            encode_timestamp(self.submitted_at),
            self.rating.to_string(),
            self.subject.clone(),
            self.comments.clone(),
            self.status.to_string(),
        ]
    }

    fn from_fields(fields: Vec<String>) -> Result<Self, CodecError> {
        let [id, member_id, submitted_at, rating, subject, comments, status] = into_array(fields)?;
        Ok(Self {
            id: Some(parse("id", &id)?),
            member_id: parse("member_id", &member_id)?,
            submitted_at: parse_timestamp("submitted_at", &submitted_at)?,
            rating: parse("rating", &rating)?,
            subject,
            comments,
            status: parse("status", &status)?,
        })
    }
}

impl Record for PaymentRecord {
    const KIND: &'static str = "payment";
    const ARITY: usize = 6;
    const ID_STRATEGY: IdStrategy = IdStrategy::Timestamped;

    fn id(&self) -> Option<&str> {
        self.id.as_ref().map(PaymentId::as_str)
    }

    fn assign_id(&mut self, id: String) {
        self.id = Some(PaymentId::new(id));
    }

    fn to_fields(&self) -> Vec<String> {
        vec![
            encode_id(self.id.as_ref()),
            self.member_id.to_string(),
            self.amount.to_string(),
            self.status.to_string(),
            encode_timestamp(self.created_at),
            self.paid_at.map(encode_timestamp).unwrap_or_default(),
        ]
    }

    fn from_fields(fields: Vec<String>) -> Result<Self, CodecError> {
        let [id, member_id, amount, status, created_at, paid_at] = into_array(fields)?;
        let paid_at = match paid_at.trim() {
            "" => None,
            value => Some(parse_timestamp("paid_at", value)?),
        };
        Ok(Self {
            id: Some(parse("id", &id)?),
            member_id: parse("member_id", &member_id)?,
            amount: parse::<Decimal>("amount", &amount)?,
            status: parse("status", &status)?,
            created_at: parse_timestamp("created_at", &created_at)?,
            paid_at,
        })
    }
}

// ============================================================================
// Field parsing helpers
// ============================================================================

fn into_array<const N: usize>(fields: Vec<String>) -> Result<[String; N], CodecError> {
    fields.try_into().map_err(|fields: Vec<String>| CodecError::FieldCount {
        expected: N,
        found: fields.len(),
    })
}

fn parse<T: FromStr>(field: &'static str, value: &str) -> Result<T, CodecError> {
    value.trim().parse().map_err(|_| CodecError::InvalidField {
        field,
        value: value.to_string(),
    })
}

fn parse_optional<T: FromStr>(field: &'static str, value: &str) -> Result<Option<T>, CodecError> {
    match value.trim() {
        "" => Ok(None),
        value => parse(field, value).map(Some),
    }
}

fn parse_timestamp(field: &'static str, value: &str) -> Result<DateTime<Utc>, CodecError> {
    DateTime::parse_from_rfc3339(value.trim())
        .map(|ts| ts.with_timezone(&Utc))
        .map_err(|_| CodecError::InvalidField {
            field,
            value: value.to_string(),
        })
}

fn encode_timestamp(ts: DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

fn encode_id<T: ToString>(id: Option<&T>) -> String {
    id.map(ToString::to_string).unwrap_or_default()
}
