pub mod codegen;
pub mod login;
pub mod protected;
pub mod token;
pub mod verify;
