use alloc::string::String;

use super::instantiate::InstantiateErrorKind;
use crate::any::TypeInfo;

#[derive(thiserror::Error, Debug)]
pub enum ResolveErrorKind {
    #[error("Definition not found in service map. Service id: {id:?}")]
    NoDefinition { id: String },
    #[error("Incorrect definition provides type. Expected: {}", expected.name)]
    IncorrectType { expected: TypeInfo },
    #[error(transparent)]
    Instantiate(#[from] InstantiateErrorKind),
}
