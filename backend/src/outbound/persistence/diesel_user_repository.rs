//! PostgreSQL-backed `UserRepository` implementation using Diesel.
//!
//! Each operation is one parameterised statement on the shared connection.
//! Affected-row counts are ignored, so updates and deletes of missing ids
//! succeed.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{UserRepository, parse_user_id};
use crate::domain::{
    CreatedUser, DeletedUser, NewUser, StoreError, UpdatedUser, User, UserChanges, UserId,
};

use super::connection::StoreClient;
use super::diesel_error_mapping::{map_client_error, map_diesel_error};
use super::models::{NewUserRow, UserChangeset, UserRow};
use super::schema::users;

/// Diesel-backed implementation of the `UserRepository` port.
#[derive(Clone)]
pub struct DieselUserRepository {
    client: StoreClient,
}

impl DieselUserRepository {
    /// Create a new repository over the shared store client.
    pub fn new(client: StoreClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl UserRepository for DieselUserRepository {
    async fn list(&self) -> Result<Vec<User>, StoreError> {
        let mut conn = self.client.get().await.map_err(map_client_error)?;

        let rows: Vec<UserRow> = users::table
            .select(UserRow::as_select())
            .load(&mut *conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(rows.into_iter().map(User::from).collect())
    }

    async fn create(&self, user: &NewUser) -> Result<CreatedUser, StoreError> {
        let mut conn = self.client.get().await.map_err(map_client_error)?;

        let id: i32 = diesel::insert_into(users::table)
            .values(NewUserRow::from(user))
            .returning(users::id)
            .get_result(&mut *conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(CreatedUser {
            id: UserId::new(id),
            fields: user.clone(),
        })
    }

    async fn update(&self, id: &str, changes: &UserChanges) -> Result<UpdatedUser, StoreError> {
        let mut conn = self.client.get().await.map_err(map_client_error)?;
        let key = parse_user_id(id)?;

        diesel::update(users::table.filter(users::id.eq(key.get())))
            .set(UserChangeset::from(changes))
            .execute(&mut *conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(UpdatedUser {
            id: id.to_owned(),
            changes: changes.clone(),
        })
    }

    async fn delete(&self, id: &str) -> Result<DeletedUser, StoreError> {
        let mut conn = self.client.get().await.map_err(map_client_error)?;
        let key = parse_user_id(id)?;

        diesel::delete(users::table.filter(users::id.eq(key.get())))
            .execute(&mut *conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(DeletedUser::new(id))
    }
}
