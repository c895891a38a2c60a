//! # API Gateway (sl-04)
//!
//! REST surface of the star registry. Handlers validate and decode requests,
//! call the `RegistryBackend` port and map failures to HTTP status codes.
//! No registry state lives here.
//!
//! ## Routes
//!
//! | Method | Path | Backend call |
//! |--------|------|--------------|
//! | GET | `/block/:height` | `block_by_height` |
//! | POST | `/block` | `register_star` |
//! | GET | `/stars/hash::hash` | `block_by_hash` |
//! | GET | `/stars/address::address` | `blocks_by_address` |
//! | POST | `/requestValidation` | `request_validation` |
//! | POST | `/message-signature/validate` | `validate_signature` |
//! | GET | `/chain/validate` | `validate_chain` |
//! | GET | `/debug/mempool` | `mempool_snapshot` |
//! | GET | `/debug/access-list` | `access_list` |
//!
//! ## Error Mapping
//!
//! | `ApiError` | Status |
//! |------------|--------|
//! | `InvalidInput` | 400 |
//! | `Unauthorized` | 401 |
//! | `NotFound` | 404 |
//! | `Internal` | 500 |

pub mod domain;
pub mod handlers;
pub mod ports;
pub mod router;

pub use domain::error::{ApiError, INTERNAL_ERROR_MESSAGE};
pub use domain::types::{
    AddressRequest, BlockView, RegisterStarRequest, SignatureStatus, SignatureValidationRequest,
    SignatureValidationResponse, StarSelector, StarSubmission, StarView,
};
pub use ports::outbound::RegistryBackend;
pub use router::{build_router, AppState};
