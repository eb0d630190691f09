//! Types shared between the frontend (WASM) and the backend API.

pub mod domain;
