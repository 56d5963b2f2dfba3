use zeroize::{Zeroize, Zeroizing};

use crate::error::{AppError, Result};
use crate::models::payload::{FIELD_DELIMITER, TokenPayload};

/// The number of fields in a wire payload.
const PAYLOAD_FIELDS: usize = 3;

/// Parses a trimmed `sessionID,timestamp,token` line.
///
/// Only the field count is checked here; field contents are judged by the
/// verification itself.
///
/// # Arguments
///
/// * `line` - The input line, already trimmed.
///
/// # Returns
///
/// A `Result` containing the parsed `TokenPayload`.
pub fn parse_payload(line: &str) -> Result<TokenPayload> {
    let parts: Vec<&str> = line.split(FIELD_DELIMITER).collect();
    if parts.len() != PAYLOAD_FIELDS {
        return Err(AppError::MalformedPayload {
            fields: parts.len(),
        });
    }

    Ok(TokenPayload {
        session_id: parts[0].to_string(),
        timestamp: parts[1].to_string(),
        token: parts[2].to_string(),
    })
}

/// Validates a session ID before it is bound into tokens.
///
/// # Arguments
///
/// * `session_id` - The session ID to validate.
///
/// # Returns
///
/// A `Result<()>` indicating whether the session ID is usable.
pub fn validate_session_id(session_id: &str) -> Result<()> {
    if session_id.is_empty() {
        return Err(AppError::InvalidSessionId(
            "Session ID must not be empty".to_string(),
        ));
    }

    if session_id.contains(FIELD_DELIMITER) || session_id.contains(':') {
        return Err(AppError::InvalidSessionId(
            "Session ID cannot contain ',' or ':'".to_string(),
        ));
    }

    Ok(())
}

/// Decodes a hex secret, wiping the hex input afterwards.
///
/// # Arguments
///
/// * `secret_hex` - The hex-encoded secret. Zeroized before returning.
///
/// # Returns
///
/// A `Result` containing the decoded secret bytes.
pub fn decode_secret(mut secret_hex: String) -> Result<Zeroizing<Vec<u8>>> {
    let decoded = hex::decode(secret_hex.trim());
    secret_hex.zeroize();

    let secret = decoded
        .map(Zeroizing::new)
        .map_err(|e| AppError::InvalidSecret(format!("Error decoding secret: {}", e)))?;

    if secret.is_empty() {
        return Err(AppError::InvalidSecret("Secret must not be empty".to_string()));
    }

    Ok(secret)
}
