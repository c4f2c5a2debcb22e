//! Conversion: ElementResponse → Element (TryFrom + validation).

use super::wire::{ElementHeaderResponse, ElementResponse};
use super::{Element, ElementHeader, ElementProperties, ElementValidationError};

impl TryFrom<ElementHeaderResponse> for ElementHeader {
    type Error = ElementValidationError;

    fn try_from(source: ElementHeaderResponse) -> Result<Self, Self::Error> {
        let guid = match source.guid {
            Some(guid) if !guid.is_empty() => guid,
            _ => return Err(ElementValidationError::MissingGuid),
        };

        Ok(ElementHeader {
            guid,
            type_name: source.element_type.and_then(|t| t.type_name),
            origin: source.origin,
            versions: source.versions,
            classifications: source.classifications.unwrap_or_default(),
        })
    }
}

impl<P: ElementProperties> TryFrom<ElementResponse<P>> for Element<P> {
    type Error = ElementValidationError;

    fn try_from(source: ElementResponse<P>) -> Result<Self, Self::Error> {
        let mut errors: Vec<ElementValidationError> = Vec::new();

        let header = match source.element_header {
            Some(h) => match ElementHeader::try_from(h) {
                Ok(header) => Some(header),
                Err(err) => {
                    errors.push(err);
                    None
                }
            },
            None => {
                errors.push(ElementValidationError::MissingHeader);
                None
            }
        };

        let properties = source.properties.or_else(|| {
            errors.push(ElementValidationError::MissingProperties);
            None
        });

        if let Some(props) = &properties {
            let named = props
                .qualified_name()
                .map(|n| !n.trim().is_empty())
                .unwrap_or(false);
            if !named {
                errors.push(ElementValidationError::MissingQualifiedName);
            }
        }

        match (header, properties) {
            (Some(header), Some(properties)) if errors.is_empty() => {
                Ok(Element { header, properties })
            }
            (header, _) => {
                let guid = header
                    .map(|h| h.guid.to_string())
                    .unwrap_or_else(|| "unknown".to_string());
                Err(ElementValidationError::Multiple(guid, errors))
            }
        }
    }
}
