//! General (tenant-wide) settings schema.

use serde::Serialize;
use validator::Validate;

use crate::reader::FieldReader;
use crate::schema::{Schema, SchemaName};

#[derive(Debug, Clone, PartialEq, Serialize, Validate)]
pub struct GeneralSetting {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1))]
    pub id: Option<String>,
    #[validate(length(min = 1))]
    pub company_name: String,
    /// BCP 47 tag, e.g. `en` or `id-ID`.
    #[validate(length(min = 1))]
    pub default_language: String,
    /// IANA zone name, e.g. `Asia/Jakarta`.
    #[validate(length(min = 1))]
    pub timezone: String,
    #[validate(length(min = 1))]
    pub date_format: String,
    #[validate(length(min = 1))]
    pub currency_code: String,
    /// 1 = January.
    #[validate(range(min = 1, max = 12))]
    pub fiscal_year_start_month: i64,
    pub enable_notifications: bool,
    pub maintenance_mode: bool,
}

impl GeneralSetting {
    fn read_body(fields: &mut FieldReader<'_>, id: Option<String>) -> Self {
        Self {
            id,
            company_name: fields.string("company_name"),
            default_language: fields.string("default_language"),
            timezone: fields.string("timezone"),
            date_format: fields.string("date_format"),
            currency_code: fields.string("currency_code"),
            fiscal_year_start_month: fields.integer("fiscal_year_start_month"),
            enable_notifications: fields.boolean("enable_notifications"),
            maintenance_mode: fields.boolean("maintenance_mode"),
        }
    }
}

impl Schema for GeneralSetting {
    const NAME: SchemaName = SchemaName::GeneralSettingCreate;

    fn read(fields: &mut FieldReader<'_>) -> Self {
        let id = fields.optional_string("id");
        Self::read_body(fields, id)
    }
}

/// General settings on an update path: identity is required.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct GeneralSettingUpdate(GeneralSetting);

impl GeneralSettingUpdate {
    pub fn id(&self) -> &str {
        self.0.id.as_deref().unwrap_or_default()
    }

    pub fn into_setting(self) -> GeneralSetting {
        self.0
    }
}

impl Validate for GeneralSettingUpdate {
    fn validate(&self) -> Result<(), validator::ValidationErrors> {
        self.0.validate()
    }
}

impl core::ops::Deref for GeneralSettingUpdate {
    type Target = GeneralSetting;

    fn deref(&self) -> &GeneralSetting {
        &self.0
    }
}

impl Schema for GeneralSettingUpdate {
    const NAME: SchemaName = SchemaName::GeneralSettingUpdate;

    fn read(fields: &mut FieldReader<'_>) -> Self {
        let id = fields.string("id");
        Self(GeneralSetting::read_body(fields, Some(id)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ViolationKind;
    use crate::schema::validate;
    use proptest::prelude::*;
    use serde_json::{json, Value};

    fn settings() -> Value {
        json!({
            "id": "settings-main",
            "company_name": "Acme Procurement",
            "default_language": "en",
            "timezone": "Asia/Jakarta",
            "date_format": "DD/MM/YYYY",
            "currency_code": "IDR",
            "fiscal_year_start_month": 1,
            "enable_notifications": true,
            "maintenance_mode": false,
        })
    }

    #[test]
    fn valid_settings_round_trip() {
        let input = settings();
        let rec = validate::<GeneralSettingUpdate>(&input).unwrap();
        assert_eq!(rec.id(), "settings-main");
        assert_eq!(serde_json::to_value(&rec).unwrap(), input);
    }

    #[test]
    fn fiscal_month_must_be_a_calendar_month() {
        for bad in [json!(0), json!(13), json!(-1)] {
            let mut input = settings();
            input["fiscal_year_start_month"] = bad;
            let err = validate::<GeneralSetting>(&input).unwrap_err();
            assert_eq!(
                err.for_field("fiscal_year_start_month").map(|v| &v.kind),
                Some(&ViolationKind::OutOfRange { min: 1.0, max: 12.0 })
            );
        }
    }

    #[test]
    fn create_variant_does_not_need_id() {
        let mut input = settings();
        input.as_object_mut().unwrap().remove("id");
        assert!(validate::<GeneralSetting>(&input).is_ok());
        assert!(validate::<GeneralSettingUpdate>(&input).is_err());
    }

    #[test]
    fn unknown_keys_are_dropped() {
        let mut input = settings();
        input["theme"] = json!("dark");
        let rec = validate::<GeneralSetting>(&input).unwrap();
        let out = serde_json::to_value(&*rec).unwrap();
        assert!(out.get("theme").is_none());
    }

    #[test]
    fn fiscal_month_must_be_written_as_an_integer() {
        let mut input = settings();
        input["fiscal_year_start_month"] = json!(3.0);
        let err = validate::<GeneralSetting>(&input).unwrap_err();
        assert_eq!(err.violations().len(), 1);
        assert_eq!(err.violations()[0].kind, ViolationKind::NotAnInteger);
    }

    #[test]
    fn empty_strings_are_reported_in_field_order() {
        let mut input = settings();
        input["timezone"] = json!("");
        input["company_name"] = json!("");
        let err = validate::<GeneralSettingUpdate>(&input).unwrap_err();
        let fields: Vec<_> = err.violations().iter().map(|v| v.field).collect();
        assert_eq!(fields, vec!["company_name", "timezone"]);
        assert!(err.violations().iter().all(|v| v.kind == ViolationKind::TooShort { min: 1 }));
    }

    proptest! {
        /// Property: valid input comes back field-for-field unchanged.
        #[test]
        fn valid_input_round_trips(
            id in proptest::option::of("[a-z0-9-]{1,24}"),
            company_name in "\\PC{1,40}",
            default_language in "[a-z]{2}(-[A-Z]{2})?",
            timezone in "[A-Za-z]{1,12}/[A-Za-z_]{1,12}",
            date_format in "[DMY/.-]{1,12}",
            currency_code in "[A-Z]{3}",
            month in 1i64..=12,
            enable_notifications in any::<bool>(),
            maintenance_mode in any::<bool>(),
        ) {
            let mut input = json!({
                "company_name": company_name,
                "default_language": default_language,
                "timezone": timezone,
                "date_format": date_format,
                "currency_code": currency_code,
                "fiscal_year_start_month": month,
                "enable_notifications": enable_notifications,
                "maintenance_mode": maintenance_mode,
            });
            if let Some(id) = &id {
                input["id"] = json!(id);
            }

            let rec = validate::<GeneralSetting>(&input).unwrap();
            prop_assert_eq!(serde_json::to_value(&*rec).unwrap(), input);
        }
    }
}
