//! UserRepository - Repository per la gestione degli utenti registrati

use super::Create;
use crate::dtos::CreateUserDTO;
use crate::entities::User;
use sqlx::{Error, MySqlPool};

// USER REPO
pub struct UserRepository {
    connection_pool: MySqlPool,
}

impl UserRepository {
    pub fn new(connection_pool: MySqlPool) -> UserRepository {
        Self { connection_pool }
    }

    /// l'email è univoca a livello di schema
    /// Find user by exact email match
    pub async fn find_by_email(&self, email: &String) -> Result<Option<User>, Error> {
        let user = sqlx::query_as::<_, User>(
            "SELECT user_id, name, email, password FROM users WHERE email = ?",
        )
        .bind(email)
        .fetch_optional(&self.connection_pool)
        .await?;

        Ok(user)
    }
}

impl Create<User, CreateUserDTO> for UserRepository {
    async fn create(&self, data: &CreateUserDTO) -> Result<User, Error> {
        let result = sqlx::query("INSERT INTO users (name, email, password) VALUES (?, ?, ?)")
            .bind(&data.name)
            .bind(&data.email)
            .bind(&data.password)
            .execute(&self.connection_pool)
            .await?;

        // Get the last inserted ID
        let new_id = result.last_insert_id() as i32;

        // Return the created user with the new ID
        Ok(User {
            user_id: new_id,
            name: data.name.clone(),
            email: data.email.clone(),
            password: data.password.clone(),
        })
    }
}
