use assetbit_common_admin::AccessError;
use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum KycError {
    /// `initialize` has already run on this instance.
    AlreadyInitialized = 1,
    /// No owner recorded yet.
    NotInitialized = 2,
    /// Caller is not the current owner.
    Unauthorized = 3,
    /// Verification changes are halted.
    ContractPaused = 4,
    AlreadyPaused = 5,
    AlreadyUnpaused = 6,
    /// Zero address where a real account is required.
    InvalidAddress = 7,
    /// User already KYC verified.
    AlreadyVerified = 8,
    /// User not KYC verified.
    NotVerified = 9,
    /// Batch input longer than `MAX_BATCH_SIZE`.
    BatchTooLarge = 10,
}

impl From<AccessError> for KycError {
    fn from(err: AccessError) -> Self {
        match err {
            AccessError::NotInitialized => KycError::NotInitialized,
            AccessError::Unauthorized => KycError::Unauthorized,
            AccessError::Paused => KycError::ContractPaused,
            AccessError::AlreadyPaused => KycError::AlreadyPaused,
            AccessError::NotPaused => KycError::AlreadyUnpaused,
            AccessError::InvalidAddress => KycError::InvalidAddress,
        }
    }
}
