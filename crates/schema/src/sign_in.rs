//! Sign-in credentials schema.

use serde::Serialize;
use validator::Validate;

use crate::reader::FieldReader;
use crate::schema::{Schema, SchemaName};

#[derive(Debug, Clone, PartialEq, Serialize, Validate)]
pub struct SignInCredentials {
    #[validate(length(min = 1))]
    pub email: String,
    #[serde(skip_serializing)]
    #[validate(length(min = 1))]
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remember_me: Option<bool>,
}

impl Schema for SignInCredentials {
    const NAME: SchemaName = SchemaName::SignIn;

    fn read(fields: &mut FieldReader<'_>) -> Self {
        Self {
            email: fields.string("email"),
            password: fields.string("password"),
            remember_me: fields.optional_boolean("remember_me"),
        }
    }
}
