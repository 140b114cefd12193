//! Currency schemas (create and update variants).

use serde::Serialize;
use serde_json::Number;
use validator::Validate;

use crate::reader::FieldReader;
use crate::schema::{Schema, SchemaName};

/// A currency known to a tenant.
#[derive(Debug, Clone, PartialEq, Serialize, Validate)]
pub struct Currency {
    /// Absent only on create paths.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1))]
    pub id: Option<String>,
    /// ISO-style code, e.g. `USD`.
    #[validate(length(min = 1))]
    pub code: String,
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(length(min = 1))]
    pub symbol: String,
    /// Rate against the tenant's base currency, as written; no range constraint.
    pub exchange_rate: Number,
    pub is_default: bool,
    pub is_active: bool,
}

impl Currency {
    fn read_body(fields: &mut FieldReader<'_>, id: Option<String>) -> Self {
        Self {
            id,
            code: fields.string("code"),
            name: fields.string("name"),
            symbol: fields.string("symbol"),
            exchange_rate: fields.number("exchange_rate"),
            is_default: fields.boolean("is_default"),
            is_active: fields.boolean("is_active"),
        }
    }

    /// Fill in the identifier if the record does not have one yet.
    pub fn with_id_or(mut self, generate: impl FnOnce() -> String) -> Self {
        if self.id.is_none() {
            self.id = Some(generate());
        }
        self
    }
}

impl Schema for Currency {
    const NAME: SchemaName = SchemaName::CurrencyCreate;

    fn read(fields: &mut FieldReader<'_>) -> Self {
        let id = fields.optional_string("id");
        Self::read_body(fields, id)
    }
}

/// A currency on an update path: identity is required.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct CurrencyUpdate(Currency);

impl CurrencyUpdate {
    pub fn id(&self) -> &str {
        self.0.id.as_deref().unwrap_or_default()
    }

    pub fn into_currency(self) -> Currency {
        self.0
    }
}

impl Validate for CurrencyUpdate {
    fn validate(&self) -> Result<(), validator::ValidationErrors> {
        self.0.validate()
    }
}

impl core::ops::Deref for CurrencyUpdate {
    type Target = Currency;

    fn deref(&self) -> &Currency {
        &self.0
    }
}

impl Schema for CurrencyUpdate {
    const NAME: SchemaName = SchemaName::CurrencyUpdate;

    fn read(fields: &mut FieldReader<'_>) -> Self {
        let id = fields.string("id");
        Self(Currency::read_body(fields, Some(id)))
    }
}
