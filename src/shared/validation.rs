//! Local parameter checks run before any request is built.
//!
//! Each helper names the offending parameter the way the service does
//! (`userId`, `hostGUID`, `qualifiedName`, ...), so a locally rejected call
//! reads the same as one rejected by the server.

use crate::error::SdkError;
use crate::shared::{Guid, InfrastructureManager};

pub fn validate_user_id(user_id: &str) -> Result<(), SdkError> {
    validate_name(user_id, "userId")
}

pub fn validate_guid(guid: &Guid, parameter: &str) -> Result<(), SdkError> {
    if guid.is_empty() {
        return Err(SdkError::invalid_parameter(
            parameter,
            "a unique identifier must be supplied",
        ));
    }
    Ok(())
}

pub fn validate_name(name: &str, parameter: &str) -> Result<(), SdkError> {
    if name.trim().is_empty() {
        return Err(SdkError::invalid_parameter(
            parameter,
            "a non-empty value must be supplied",
        ));
    }
    Ok(())
}

pub fn validate_search_string(search_string: &str) -> Result<(), SdkError> {
    validate_name(search_string, "searchString")
}

pub fn validate_manager(manager: &InfrastructureManager) -> Result<(), SdkError> {
    validate_guid(&manager.guid, "infrastructureManagerGUID")?;
    validate_name(&manager.name, "infrastructureManagerName")
}

/// `qualifiedName` is optional in the type system but required by the repository.
pub fn validate_qualified_name(qualified_name: Option<&str>) -> Result<(), SdkError> {
    match qualified_name {
        Some(name) => validate_name(name, "qualifiedName"),
        None => Err(SdkError::invalid_parameter(
            "qualifiedName",
            "a unique name must be supplied",
        )),
    }
}
