//! The `Schema` contract and named-schema dispatch.

use core::ops::Deref;
use core::str::FromStr;

use serde::Serialize;
use serde_json::Value;
use thiserror::Error;
use validator::Validate;

use crate::currency::{Currency, CurrencyUpdate};
use crate::error::ValidationErrors;
use crate::reader::FieldReader;
use crate::settings::{GeneralSetting, GeneralSettingUpdate};
use crate::sign_in::SignInCredentials;

/// A declarative shape for one entity.
///
/// `read` pulls every declared field out of the reader; the reader keeps track
/// of presence and type violations, so implementations just read fields in
/// order and build the value. Value constraints come from the `Validate`
/// derive on the record.
pub trait Schema: Validate + Sized {
    const NAME: SchemaName;

    fn read(fields: &mut FieldReader<'_>) -> Self;
}

/// A record that passed its schema.
///
/// Only `validate` constructs one, so holding a `ValidatedRecord<T>` proves the
/// fields satisfied `T`'s constraints.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ValidatedRecord<T>(T);

impl<T> ValidatedRecord<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> Deref for ValidatedRecord<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.0
    }
}

/// Validate untyped input against schema `S`.
///
/// Pure: the result depends only on `input`.
pub fn validate<S: Schema>(input: &Value) -> Result<ValidatedRecord<S>, ValidationErrors> {
    let mut fields = FieldReader::new(input);
    let record = S::read(&mut fields);
    fields.finish(S::NAME.as_str(), record).map(ValidatedRecord)
}

/// Every schema that can be selected by name at runtime.
///
/// Create and update are distinct variants; the caller picks the one matching
/// its operation.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum SchemaName {
    CurrencyCreate,
    CurrencyUpdate,
    SignIn,
    GeneralSettingCreate,
    GeneralSettingUpdate,
}

impl SchemaName {
    pub const ALL: [SchemaName; 5] = [
        SchemaName::CurrencyCreate,
        SchemaName::CurrencyUpdate,
        SchemaName::SignIn,
        SchemaName::GeneralSettingCreate,
        SchemaName::GeneralSettingUpdate,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SchemaName::CurrencyCreate => "currency.create",
            SchemaName::CurrencyUpdate => "currency.update",
            SchemaName::SignIn => "sign-in",
            SchemaName::GeneralSettingCreate => "general-setting.create",
            SchemaName::GeneralSettingUpdate => "general-setting.update",
        }
    }
}

impl core::fmt::Display for SchemaName {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown schema '{0}'")]
pub struct UnknownSchema(pub String);

impl FromStr for SchemaName {
    type Err = UnknownSchema;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SchemaName::ALL
            .into_iter()
            .find(|name| name.as_str() == s)
            .ok_or_else(|| UnknownSchema(s.to_string()))
    }
}

/// Result of a runtime-selected validation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AnyRecord {
    Currency(ValidatedRecord<Currency>),
    CurrencyUpdate(ValidatedRecord<CurrencyUpdate>),
    SignIn(ValidatedRecord<SignInCredentials>),
    GeneralSetting(ValidatedRecord<GeneralSetting>),
    GeneralSettingUpdate(ValidatedRecord<GeneralSettingUpdate>),
}

/// Validate `input` against the schema called `name`.
pub fn validate_named(name: SchemaName, input: &Value) -> Result<AnyRecord, ValidationErrors> {
    Ok(match name {
        SchemaName::CurrencyCreate => AnyRecord::Currency(validate(input)?),
        SchemaName::CurrencyUpdate => AnyRecord::CurrencyUpdate(validate(input)?),
        SchemaName::SignIn => AnyRecord::SignIn(validate(input)?),
        SchemaName::GeneralSettingCreate => AnyRecord::GeneralSetting(validate(input)?),
        SchemaName::GeneralSettingUpdate => AnyRecord::GeneralSettingUpdate(validate(input)?),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn schema_names_round_trip_through_strings() {
        for name in SchemaName::ALL {
            assert_eq!(name.as_str().parse::<SchemaName>(), Ok(name));
        }
        assert_eq!(
            "currency".parse::<SchemaName>(),
            Err(UnknownSchema("currency".to_string()))
        );
    }

    #[test]
    fn named_dispatch_picks_the_requested_variant() {
        let input = json!({
            "code": "EUR",
            "name": "Euro",
            "symbol": "€",
            "exchange_rate": 0.92,
            "is_default": false,
            "is_active": true,
        });

        let created = validate_named(SchemaName::CurrencyCreate, &input).unwrap();
        assert!(matches!(created, AnyRecord::Currency(_)));

        // Same payload, update variant: identity is now required.
        let err = validate_named(SchemaName::CurrencyUpdate, &input).unwrap_err();
        assert_eq!(err.schema(), "currency.update");
        assert!(err.for_field("id").is_some());
    }

    #[test]
    fn validated_record_serializes_as_inner_value() {
        let input = json!({ "email": "ops@example.com", "password": "hunter2" });
        let record = validate_named(SchemaName::SignIn, &input).unwrap();
        let out = serde_json::to_value(&record).unwrap();
        assert_eq!(out["email"], "ops@example.com");
    }
}
