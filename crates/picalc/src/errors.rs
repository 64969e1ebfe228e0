//! Error handling and exit codes.

use picalc_core::constants::exit_codes;
use picalc_core::engine::PiError;

/// Map a summation error to the appropriate exit code.
#[must_use]
pub fn exit_code(err: &PiError) -> i32 {
    match err {
        PiError::Computation(_) | PiError::NonFinite(_) | PiError::Worker(_) => {
            exit_codes::ERROR_GENERIC
        }
        PiError::Config(_) => exit_codes::ERROR_CONFIG,
        PiError::Mismatch => exit_codes::ERROR_MISMATCH,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_codes() {
        assert_eq!(exit_code(&PiError::Computation("bad".into())), 1);
        assert_eq!(exit_code(&PiError::NonFinite("nan".into())), 1);
        assert_eq!(exit_code(&PiError::Worker("panic".into())), 1);
        assert_eq!(exit_code(&PiError::Mismatch), 3);
        assert_eq!(exit_code(&PiError::Config("bad".into())), 4);
    }
}
