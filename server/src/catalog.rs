//! Record families served by the dashboard backend.

use depot_engine::{FamilySchema, FieldDef, FieldType, Schema};

/// Schema of every master-data family.
pub fn master_data_schema() -> Schema {
    Schema::new()
        .with_family(FamilySchema::new(
            "depots",
            "DEP",
            vec![
                FieldDef::required("name", FieldType::String),
                FieldDef::optional("city", FieldType::String),
                FieldDef::optional("manager", FieldType::String),
                FieldDef::optional("capacity", FieldType::Int),
            ],
        ))
        .with_family(FamilySchema::new(
            "doctors",
            "DOC",
            vec![
                FieldDef::required("name", FieldType::String),
                FieldDef::optional("speciality", FieldType::String),
                FieldDef::optional("clinic", FieldType::String),
                FieldDef::optional("phone", FieldType::String).hidden(),
                FieldDef::optional("registeredOn", FieldType::Date),
            ],
        ))
        .with_family(FamilySchema::new(
            "drivers",
            "DRV",
            vec![
                FieldDef::required("name", FieldType::String),
                FieldDef::optional("licenceNumber", FieldType::String),
                FieldDef::optional("phone", FieldType::String).hidden(),
                FieldDef::optional("licenceExpiry", FieldType::Date),
            ],
        ))
        .with_family(FamilySchema::new(
            "vehicles",
            "VEH",
            vec![
                FieldDef::required("registration", FieldType::String),
                FieldDef::optional("model", FieldType::String),
                FieldDef::optional("capacityKg", FieldType::Float),
                FieldDef::optional("refrigerated", FieldType::Bool).hidden(),
            ],
        ))
        .with_family(FamilySchema::new(
            "chemist_shops",
            "CHEM",
            vec![
                FieldDef::required("name", FieldType::String),
                FieldDef::optional("owner", FieldType::String),
                FieldDef::optional("city", FieldType::String),
                FieldDef::optional("licenceNumber", FieldType::String),
                FieldDef::optional("phone", FieldType::String).hidden(),
            ],
        ))
        .with_family(FamilySchema::new(
            "products",
            "PRD",
            vec![
                FieldDef::required("name", FieldType::String),
                FieldDef::optional("category", FieldType::String),
                FieldDef::optional("unitPrice", FieldType::Float).hidden(),
                FieldDef::optional("stock", FieldType::Int),
                FieldDef::optional("expiresOn", FieldType::Date),
            ],
        ))
        .with_family(FamilySchema::new(
            "routes",
            "RTE",
            vec![
                FieldDef::required("name", FieldType::String),
                FieldDef::optional("origin", FieldType::String),
                FieldDef::optional("destination", FieldType::String),
                FieldDef::optional("distanceKm", FieldType::Float).hidden(),
                FieldDef::optional("stops", FieldType::Json).hidden(),
            ],
        ))
}
