use super::{entity::RegistrationInsertEntity, NewRegistration, RegistrationsRepository};
use crate::repository::{self, Error};
use axum::async_trait;
use bson::{doc, oid::ObjectId, Bson, Document};
use mongodb::{options::IndexOptions, Database, IndexModel};
use std::sync::Arc;

const REGISTRATIONS: &str = "registrations";
const INDEX_NAME_TICKET_CODE: &str = "ticket_code";

pub struct RegistrationsRepositoryImpl {
    database: Database,
}

impl RegistrationsRepositoryImpl {
    pub async fn new(database: Database) -> Result<Self, mongodb::error::Error> {
        tracing::debug!("fetching collection names");
        let collection_names = database.list_collection_names().await?;

        if !collection_names.contains(&REGISTRATIONS.to_string()) {
            tracing::debug!(collection = REGISTRATIONS, "creating collection");
            database.create_collection(REGISTRATIONS).await?;
        }

        let collection = database.collection::<Document>(REGISTRATIONS);

        tracing::debug!("fetching index names");
        let index_names = collection.list_index_names().await?;

        // Not unique, the same ticket code can be issued twice
        if !index_names.contains(&INDEX_NAME_TICKET_CODE.to_string()) {
            collection
                .create_index(
                    IndexModel::builder()
                        .keys(doc! {
                            "ticket_code": 1,
                        })
                        .options(
                            IndexOptions::builder()
                                .name(INDEX_NAME_TICKET_CODE.to_string())
                                .build(),
                        )
                        .build(),
                )
                .await?;
            tracing::debug!(
                collection = REGISTRATIONS,
                index = INDEX_NAME_TICKET_CODE,
                "created index"
            );
        }

        Ok(Self { database })
    }
}

#[async_trait]
impl RegistrationsRepository for RegistrationsRepositoryImpl {
    async fn insert(&self, registration: &NewRegistration) -> Result<ObjectId, repository::Error> {
        let insert_entity = RegistrationInsertEntity {
            full_name: &registration.full_name,
            email: &registration.email,
            event_type: &registration.event_type,
            phone: &registration.phone,
            file: registration.file.as_deref(),
            ticket_code: &registration.ticket_code,
            created_at: registration.created_at.into(),
        };

        let insert_result = self
            .database
            .collection::<RegistrationInsertEntity>(REGISTRATIONS)
            .insert_one(insert_entity)
            .await?;

        match insert_result.inserted_id {
            Bson::ObjectId(id) => Ok(id),
            _ => Err(Error::Mongo(
                mongodb::error::ErrorKind::Custom(Arc::new("invalid type of returned id")).into(),
            )),
        }
    }
}
