//! Fixed values used when assembling vendor requests.

/// Service option requesting issuer authentication followed by
/// authorization in a single vendor call.
pub const DEFAULT_SERVICE_OPTION_TYPE: &str = "mpi-complete";

/// Payment splitting code for a single lump-sum payment.
pub const DEFAULT_PAYMENT_SPLITTING_CODE: &str = "10";

/// Device channel for browser-based 3-D Secure flows.
pub const DEFAULT_DEVICE_CHANNEL: &str = "02";

/// 3-D Secure message version requested from the vendor.
pub const MPI_TXN_VERSION: &str = "2.0.0";

/// Flag value marking a vendor request as a test-mode request.
pub const DUMMY_REQUEST_FLAG: &str = "1";

/// Language for vendor token API messages when the caller does not pick one.
pub const DEFAULT_TOKEN_LANG: &str = "en";

/// Length of the random suffix appended to generated order ids.
pub const ORDER_ID_SUFFIX_LENGTH: usize = 6;
