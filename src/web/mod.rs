//! JSON API server over the matching engine and index library.
//!
//! ## Starting the Server
//!
//! ```text
//! # Start on default port 8080
//! precedent-matcher serve
//!
//! # Custom port, archive and matching configuration
//! precedent-matcher serve --port 3000 --archive cases.json --config matching.json
//!
//! # Bind to all interfaces
//! precedent-matcher serve --address 0.0.0.0
//! ```
//!
//! ## API Endpoints
//!
//! - `POST /api/match` - Ranked precedents for `{parameters, threshold?, limit?}`
//! - `POST /api/indices` - Strategic indices for `{parameters, only?}`
//! - `GET /api/archive` - List cases (`curated_only`, `sector`, `country` filters)
//! - `GET /api/archive/{id}` - One case in full
//!
//! Errors are returned as `{error, error_type, details}`; internal details
//! are logged server-side and never included in the body.

pub mod server;
