//! `opsuite-schema`: DTO shapes and declarative validation.
//!
//! Request payloads arrive as untyped JSON. Each entity declares its fields
//! once (see `Schema`) and `validate` turns input into a typed
//! `ValidatedRecord` or a field-by-field `ValidationErrors`.

pub mod access;
pub mod currency;
pub mod error;
pub mod module;
pub mod navigation;
pub mod reader;
pub mod schema;
pub mod settings;
pub mod sign_in;

pub use access::{Role, RoleSet, visible_items};
pub use currency::{Currency, CurrencyUpdate};
pub use error::{FieldViolation, ValidationErrors, ViolationKind};
pub use module::{ModuleDto, ModuleStatus, PlanRef};
pub use navigation::{NavigationError, SidebarItem};
pub use reader::FieldReader;
pub use schema::{
    AnyRecord, Schema, SchemaName, UnknownSchema, ValidatedRecord, validate, validate_named,
};
pub use settings::{GeneralSetting, GeneralSettingUpdate};
pub use sign_in::SignInCredentials;
