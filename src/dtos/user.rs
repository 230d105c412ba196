//! User DTOs - Data Transfer Objects per utenti

use crate::entities::User;
use serde::{Deserialize, Serialize};
use validator::Validate;

// struct per gestire io col client
#[derive(Serialize, Deserialize, Debug)]
pub struct UserDTO {
    pub id: Option<i32>,
    pub name: Option<String>,
    pub email: Option<String>,
    #[serde(skip_serializing)]
    pub password: Option<String>,
}

impl From<User> for UserDTO {
    fn from(value: User) -> Self {
        Self {
            id: Some(value.user_id),
            name: Some(value.name),
            email: Some(value.email),
            password: None, // mai esposta al client!!!
        }
    }
}

/// DTO di registrazione. I campi obbligatori sono stringhe con default:
/// un campo assente nel JSON arriva vuoto e viene enumerato dalla
/// validazione insieme agli altri, invece di far fallire la
/// deserializzazione con un errore solo.
#[derive(Serialize, Deserialize, Debug, Clone, Validate)]
pub struct RegisterUserDTO {
    #[serde(default)]
    #[validate(length(min = 1, message = "The name field is required"))]
    pub name: String,

    #[serde(default)]
    #[validate(
        length(min = 1, message = "The email field is required"),
        email(message = "The email must be a valid email address")
    )]
    pub email: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "The password field is required"))]
    pub password: String,
}

/// DTO interno per l'insert (la password qui è già il digest bcrypt)
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct CreateUserDTO {
    pub name: String,
    pub email: String,
    pub password: String,
}
